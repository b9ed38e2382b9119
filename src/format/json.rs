//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::suggest::SuggestionsResponse;

/// JSON formatter - outputs the response body the HTTP API would return
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON response"
    }

    fn format(&self, response: &SuggestionsResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::Suggestion;

    #[test]
    fn test_json_format() {
        let response = SuggestionsResponse::from(vec![Suggestion {
            name: "Toronto".to_string(),
            latitude: "43.70011".to_string(),
            longitude: "-79.4163".to_string(),
            score: 0.75,
        }]);

        let output = JsonFormatter.format(&response).unwrap();

        let parsed: SuggestionsResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, response);
        assert!(output.contains("\"suggestions\""));
    }

    #[test]
    fn test_json_formatter_info() {
        assert_eq!(JsonFormatter.name(), "json");
        assert!(!JsonFormatter.description().is_empty());
    }
}
