//! Framework codecs
//!
//! JSON and YAML encoding/decoding for framework definitions. Both
//! formats round-trip the same serde model; JSON is the wire format,
//! YAML the import/export format.

use crate::error::CodecError;
use tagframe_schema::Framework;

/// Decode a framework from JSON
pub fn read_framework_json(input: &str) -> Result<Framework, CodecError> {
    Ok(serde_json::from_str(input)?)
}

/// Encode a framework as pretty-printed JSON
pub fn write_framework_json(framework: &Framework) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(framework)?)
}

/// Decode a framework from YAML
pub fn read_framework_yaml(input: &str) -> Result<Framework, CodecError> {
    Ok(serde_yaml::from_str(input)?)
}

/// Encode a framework as YAML
pub fn write_framework_yaml(framework: &Framework) -> Result<String, CodecError> {
    Ok(serde_yaml::to_string(framework)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagframe_schema::{
        ChoiceOption, Section, SelectProperties, Widget, WidgetProperties,
    };

    fn sample_framework() -> Framework {
        let mut section = Section::new("Context");
        section.widgets.push(Widget::new(
            "status",
            "Status",
            1,
            WidgetProperties::SingleSelect(SelectProperties {
                options: vec![
                    ChoiceOption::new("a", "Yes", 1),
                    ChoiceOption::new("b", "No", 2),
                ],
                default_value: None,
            }),
        ));
        Framework {
            primary: vec![section],
            secondary: Vec::new(),
        }
    }

    #[test]
    fn json_round_trip() {
        let framework = sample_framework();
        let encoded = write_framework_json(&framework).unwrap();
        let decoded = read_framework_json(&encoded).unwrap();
        assert_eq!(decoded, framework);
    }

    #[test]
    fn yaml_round_trip() {
        let framework = sample_framework();
        let encoded = write_framework_yaml(&framework).unwrap();
        let decoded = read_framework_yaml(&encoded).unwrap();
        assert_eq!(decoded, framework);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            read_framework_json("{ not json"),
            Err(CodecError::Json(_))
        ));
    }

    #[test]
    fn empty_object_decodes_to_empty_framework() {
        let framework = read_framework_json("{}").unwrap();
        assert!(framework.primary.is_empty());
        assert!(framework.secondary.is_empty());
    }
}
