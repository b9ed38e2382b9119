//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::suggest::SuggestionsResponse;

/// Text formatter - one ranked line per suggestion
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, response: &SuggestionsResponse) -> Result<String> {
        if response.suggestions.is_empty() {
            return Ok("No matching cities\n".to_string());
        }

        let width = response
            .suggestions
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for (rank, s) in response.suggestions.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {:<width$}  ({}, {})  score {:.4}\n",
                rank + 1,
                s.name,
                s.latitude,
                s.longitude,
                s.score,
                width = width
            ));
        }

        Ok(output)
    }
}
