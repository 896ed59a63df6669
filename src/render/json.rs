//! JSON renderer implementation.

use crate::error::Result;
use crate::model::Selection;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a selection to JSON.
pub fn to_json(selection: &Selection, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(selection)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(selection)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Meridiem;

    fn selection() -> Selection {
        Selection {
            time: "05:59".to_string(),
            meridiem: Meridiem::Pm,
            percentage: 99.93055555555556,
            row_index: 406,
            calibrated: true,
            cells: vec!["And there was evening".to_string(), "Gen 2:1".to_string()],
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&selection(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"meridiem\": \"PM\""));
        assert!(json.contains("\"row_index\": 406"));
        assert!(json.contains("\"calibrated\": true"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&selection(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"time\":\"05:59\""));
    }

    #[test]
    fn test_uncalibrated_flag_omitted() {
        let mut sel = selection();
        sel.calibrated = false;
        sel.percentage = 25.0;
        let json = to_json(&sel, JsonFormat::Compact).unwrap();
        assert!(!json.contains("calibrated"));

        let parsed: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sel);
    }
}
