//! @ai:module:intent Format summary lines for the production report
//! @ai:module:layer infrastructure
//! @ai:module:public_api SCORES_HEADER, METRICS_HEADER, format_category_line, format_metric_line, format_error_line
//! @ai:module:depends_on report, error
//! @ai:module:stateless true

use crate::error::Error;
use crate::report::{AuditEntry, CategoryEntry};
use serde_json::Value;

pub const SCORES_HEADER: &str = "LIGHTHOUSE SCORES (PRODUCTION):";
pub const METRICS_HEADER: &str = "KEY METRICS (PRODUCTION):";

/// Printed in place of a missing or null field.
pub const NULL_PLACEHOLDER: &str = "None";

/// @ai:intent Render a report field for display
/// @ai:effects pure
/// @ai:example Some("1.2 s") -> "1.2 s"
/// @ai:example None -> "None"
pub fn format_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NULL_PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// @ai:intent Convert a [0, 1] score to a whole percentage
/// @ai:effects pure
/// @ai:post truncates toward zero, so 0.875 -> 87
pub fn score_to_percent(score: f64) -> i64 {
    (score * 100.0).trunc() as i64
}

/// @ai:intent Format a category line, or None when the category has no score
/// @ai:effects pure
pub fn format_category_line(entry: &CategoryEntry) -> Option<String> {
    let score = entry.score?;

    Some(format!(
        "{}: {}",
        format_field(entry.title.as_ref()),
        score_to_percent(score)
    ))
}

/// @ai:intent Format a metric line; missing fields print the null placeholder
/// @ai:effects pure
pub fn format_metric_line(entry: &AuditEntry) -> String {
    format!(
        "{}: {}",
        format_field(entry.title.as_ref()),
        format_field(entry.display_value.as_ref())
    )
}

/// @ai:effects pure
pub fn format_error_line(err: &Error) -> String {
    format!("Error parsing report: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(title: &str, score: Option<f64>) -> CategoryEntry {
        CategoryEntry {
            key: title.to_lowercase(),
            title: Some(json!(title)),
            score,
        }
    }

    #[test]
    fn test_score_truncates() {
        assert_eq!(score_to_percent(0.87), 87);
        assert_eq!(score_to_percent(0.875), 87);
        assert_eq!(score_to_percent(0.999), 99);
        assert_eq!(score_to_percent(1.0), 100);
        assert_eq!(score_to_percent(0.0), 0);
        // 0.29 * 100 is 28.999999999999996 in binary floating point
        assert_eq!(score_to_percent(0.29), 28);
    }

    #[test]
    fn test_category_line() {
        let line = format_category_line(&category("Performance", Some(0.87)));
        assert_eq!(line.as_deref(), Some("Performance: 87"));
    }

    #[test]
    fn test_category_without_score_is_skipped() {
        assert_eq!(format_category_line(&category("PWA", None)), None);
    }

    #[test]
    fn test_category_without_title() {
        let entry = CategoryEntry {
            key: "performance".to_string(),
            title: None,
            score: Some(0.5),
        };

        assert_eq!(format_category_line(&entry).as_deref(), Some("None: 50"));
    }

    #[test]
    fn test_metric_line() {
        let entry = AuditEntry {
            key: "speed-index".to_string(),
            title: Some(json!("Speed Index")),
            display_value: Some(json!("3.4 s")),
        };

        assert_eq!(format_metric_line(&entry), "Speed Index: 3.4 s");
    }

    #[test]
    fn test_missing_metric_line() {
        assert_eq!(format_metric_line(&AuditEntry::missing("speed-index")), "None: None");
    }

    #[test]
    fn test_format_field_non_string() {
        assert_eq!(format_field(Some(&json!(0.05))), "0.05");
        assert_eq!(format_field(Some(&json!(null))), "None");
        assert_eq!(format_field(Some(&json!(true))), "true");
    }

    #[test]
    fn test_error_line() {
        let err = Error::NotAnObject {
            context: "audits".to_string(),
            found: "string",
        };

        assert_eq!(
            format_error_line(&err),
            "Error parsing report: Expected audits to be an object, found string"
        );
    }
}
