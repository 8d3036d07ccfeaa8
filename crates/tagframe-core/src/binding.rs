//! Attribute binding and editor schemas
//!
//! Binds widget definitions to values: [`validate_attribute`] checks a
//! typed attribute value against its widget's properties, and the
//! `*_editor_schema` constructors derive the form schemas used when
//! editing widget and section definitions themselves.

use crate::config::CoreConfig;
use crate::error::AttributeError;
use tagframe_form::{Condition, FormSchema};
use tagframe_schema::{AttributeData, Widget, WidgetProperties};

/// Check a typed attribute value against its widget
///
/// The value's shape must match the widget type; every referenced
/// option/row/cell/column key must exist in the widget's properties;
/// numbers must respect configured bounds; ranges must be ordered.
/// Errors are structural data, never panics.
///
/// # Errors
/// The first violation found.
#[allow(clippy::too_many_lines)]
pub fn validate_attribute(widget: &Widget, data: &AttributeData) -> Result<(), AttributeError> {
    use AttributeData as D;

    let mismatch = || AttributeError::TypeMismatch {
        expected: widget.widget_type(),
        got: data.widget_type(),
    };

    match (&widget.properties, data) {
        (WidgetProperties::Text(_), D::Text(_))
        | (WidgetProperties::Date, D::Date(_))
        | (WidgetProperties::Time, D::Time(_))
        | (WidgetProperties::Geo(_), D::Geo(_)) => Ok(()),

        (WidgetProperties::Number(p), D::Number(n)) => {
            let below = p.min_value.is_some_and(|min| *n < min);
            let above = p.max_value.is_some_and(|max| *n > max);
            if below || above {
                return Err(AttributeError::OutOfBounds {
                    value: *n,
                    min: p.min_value,
                    max: p.max_value,
                });
            }
            Ok(())
        }

        (WidgetProperties::DateRange, D::DateRange(r)) => {
            if r.start_date > r.end_date {
                return Err(AttributeError::InvertedRange {
                    start: r.start_date.to_string(),
                    end: r.end_date.to_string(),
                });
            }
            Ok(())
        }
        (WidgetProperties::TimeRange, D::TimeRange(r)) => {
            if r.start_time > r.end_time {
                return Err(AttributeError::InvertedRange {
                    start: r.start_time.to_string(),
                    end: r.end_time.to_string(),
                });
            }
            Ok(())
        }

        (WidgetProperties::Scale(p), D::Scale(key)) => {
            if p.options.iter().any(|o| &o.key == key) {
                Ok(())
            } else {
                Err(unknown_key("scale options", key))
            }
        }
        (WidgetProperties::SingleSelect(p), D::SingleSelect(key)) => {
            if p.options.iter().any(|o| &o.key == key) {
                Ok(())
            } else {
                Err(unknown_key("select options", key))
            }
        }
        (WidgetProperties::MultiSelect(p), D::MultiSelect(keys)) => {
            for key in keys {
                if !p.options.iter().any(|o| &o.key == key) {
                    return Err(unknown_key("select options", key));
                }
            }
            Ok(())
        }

        (WidgetProperties::Organigram(p), D::Organigram(keys)) => {
            let root = p.options.as_ref();
            for key in keys {
                if !root.is_some_and(|r| r.contains_key(key)) {
                    return Err(unknown_key("organigram", key));
                }
            }
            Ok(())
        }

        (WidgetProperties::Matrix1d(p), D::Matrix1d(rows)) => {
            for (row_key, cells) in rows {
                let Some(row) = p.rows.iter().find(|r| &r.key == row_key) else {
                    return Err(unknown_key("matrix1d rows", row_key));
                };
                for cell_key in cells.keys() {
                    if !row.cells.iter().any(|c| &c.key == cell_key) {
                        return Err(unknown_key(&format!("row '{row_key}' cells"), cell_key));
                    }
                }
            }
            Ok(())
        }

        (WidgetProperties::Matrix2d(p), D::Matrix2d(rows)) => {
            for (row_key, sub_rows) in rows {
                let Some(row) = p.rows.iter().find(|r| &r.key == row_key) else {
                    return Err(unknown_key("matrix2d rows", row_key));
                };
                for (sub_row_key, columns) in sub_rows {
                    if !row.sub_rows.iter().any(|s| &s.key == sub_row_key) {
                        return Err(unknown_key(
                            &format!("row '{row_key}' sub-rows"),
                            sub_row_key,
                        ));
                    }
                    for (column_key, sub_columns) in columns {
                        let Some(column) = p.columns.iter().find(|c| &c.key == column_key) else {
                            return Err(unknown_key("matrix2d columns", column_key));
                        };
                        for sub_column_key in sub_columns {
                            if !column.sub_columns.iter().any(|s| &s.key == sub_column_key) {
                                return Err(unknown_key(
                                    &format!("column '{column_key}' sub-columns"),
                                    sub_column_key,
                                ));
                            }
                        }
                    }
                }
            }
            Ok(())
        }

        (WidgetProperties::Conditional(_), _) => Err(AttributeError::NotTaggable(
            tagframe_schema::WidgetType::Conditional,
        )),

        _ => Err(mismatch()),
    }
}

fn unknown_key(scope: &str, key: &str) -> AttributeError {
    AttributeError::UnknownKey {
        scope: scope.to_string(),
        key: key.to_string(),
    }
}

/// Form schema for editing one widget definition
///
/// Title and key are required; the title respects the configured
/// length bounds; display order starts at one.
#[must_use]
pub fn widget_editor_schema(config: &CoreConfig) -> FormSchema {
    FormSchema::object([
        (
            "title",
            FormSchema::leaf([
                Condition::RequiredString,
                Condition::LengthBounds {
                    min: Some(config.title_min_len),
                    max: Some(config.title_max_len),
                },
            ]),
        ),
        ("key", FormSchema::leaf([Condition::RequiredString])),
        (
            "order",
            FormSchema::leaf([
                Condition::Required,
                Condition::NumberBounds {
                    min: Some(1.0),
                    max: None,
                },
            ]),
        ),
        ("properties", FormSchema::any()),
    ])
}

/// Form schema for editing one section with its widget list
#[must_use]
pub fn section_editor_schema(config: &CoreConfig) -> FormSchema {
    FormSchema::object([
        (
            "title",
            FormSchema::leaf([
                Condition::RequiredString,
                Condition::LengthBounds {
                    min: Some(config.title_min_len),
                    max: Some(config.title_max_len),
                },
            ]),
        ),
        ("tooltip", FormSchema::any()),
        ("widgets", FormSchema::list(widget_editor_schema(config))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::collections::BTreeMap;
    use tagframe_schema::{
        ChoiceOption, DateRangeValue, Matrix1dProperties, Matrix1dRow, NumberProperties,
        SelectProperties, WidgetType,
    };

    fn select_widget() -> Widget {
        Widget::new(
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
        )
    }

    #[test]
    fn matching_select_value_passes() {
        let widget = select_widget();
        assert!(validate_attribute(&widget, &AttributeData::SingleSelect("a".into())).is_ok());
    }

    #[test]
    fn unknown_option_key_fails() {
        let widget = select_widget();
        let err =
            validate_attribute(&widget, &AttributeData::SingleSelect("zzz".into())).unwrap_err();
        assert!(matches!(err, AttributeError::UnknownKey { .. }));
    }

    #[test]
    fn type_mismatch_fails() {
        let widget = select_widget();
        let err = validate_attribute(&widget, &AttributeData::Number(4.0)).unwrap_err();
        assert!(matches!(
            err,
            AttributeError::TypeMismatch {
                expected: WidgetType::SingleSelect,
                got: WidgetType::Number,
            }
        ));
    }

    #[test]
    fn number_bounds_enforced() {
        let widget = Widget::new(
            "count",
            "Count",
            1,
            WidgetProperties::Number(NumberProperties {
                default_value: None,
                min_value: Some(0.0),
                max_value: Some(10.0),
            }),
        );
        assert!(validate_attribute(&widget, &AttributeData::Number(5.0)).is_ok());
        assert!(matches!(
            validate_attribute(&widget, &AttributeData::Number(11.0)),
            Err(AttributeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn inverted_date_range_fails() {
        let widget = Widget::new("when", "When", 1, WidgetProperties::DateRange);
        let value = DateRangeValue {
            start_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
        };
        assert!(matches!(
            validate_attribute(&widget, &AttributeData::DateRange(value)),
            Err(AttributeError::InvertedRange { .. })
        ));
    }

    #[test]
    fn matrix1d_unknown_cell_fails() {
        let widget = Widget::new(
            "m1",
            "Matrix",
            1,
            WidgetProperties::Matrix1d(Matrix1dProperties {
                rows: vec![Matrix1dRow {
                    key: "row-1".into(),
                    label: "Row 1".into(),
                    tooltip: None,
                    order: 1,
                    color: "#fff".into(),
                    cells: vec![ChoiceOption::new("cell-1", "Cell 1", 1)],
                }],
            }),
        );

        let good: tagframe_schema::Matrix1dValue = BTreeMap::from([(
            "row-1".to_string(),
            BTreeMap::from([("cell-1".to_string(), true)]),
        )]);
        assert!(validate_attribute(&widget, &AttributeData::Matrix1d(good)).is_ok());

        let bad: tagframe_schema::Matrix1dValue = BTreeMap::from([(
            "row-1".to_string(),
            BTreeMap::from([("ghost".to_string(), true)]),
        )]);
        assert!(validate_attribute(&widget, &AttributeData::Matrix1d(bad)).is_err());
    }

    #[test]
    fn conditional_takes_no_direct_value() {
        let widget = Widget::new(
            "cond",
            "Conditional",
            1,
            WidgetProperties::Conditional(tagframe_schema::ConditionalProperties::default()),
        );
        assert!(matches!(
            validate_attribute(&widget, &AttributeData::Text("x".into())),
            Err(AttributeError::NotTaggable(WidgetType::Conditional))
        ));
    }

    #[test]
    fn widget_editor_schema_requires_title() {
        let schema = widget_editor_schema(&CoreConfig::default());
        let tree = schema
            .validate(Some(&json!({ "key": "k", "order": 1 })))
            .unwrap();
        assert!(tree.error_string(&"title".parse().unwrap()).is_some());

        assert!(schema
            .validate(Some(&json!({ "title": "T", "key": "k", "order": 1 })))
            .is_none());
    }

    #[test]
    fn section_editor_schema_checks_nested_widgets() {
        let schema = section_editor_schema(&CoreConfig::default());
        let value = json!({
            "title": "Section",
            "widgets": [ { "title": "", "key": "k", "order": 1 } ],
        });
        let tree = schema.validate(Some(&value)).unwrap();
        assert!(tree
            .error_string(&"widgets.0.title".parse().unwrap())
            .is_some());
    }
}
