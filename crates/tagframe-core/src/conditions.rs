//! Conditional rule evaluation
//!
//! Widgets can be shown or hidden based on rules tested against the
//! attribute value of a parent widget. A [`ConditionSet`] carries the
//! parent widget key and an ordered rule list; each [`ConditionRule`]
//! pairs an [`Operator`] with an optional inversion and the
//! conjunction joining it to the rules before it.
//!
//! Evaluation is pure and total: a rule whose operator does not fit
//! the value's shape is simply false.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tagframe_schema::{sorted_by_order, AttributeData, Widget, WidgetProperties};

/// How a rule joins the accumulated result of the rules before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conjunction {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "XOR")]
    Xor,
}

/// Quantifier for multi-valued operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// At least one listed key must be selected
    #[default]
    Some,
    /// Every listed key must be selected
    Every,
}

/// One test against the parent widget's attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operator", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Operator {
    /// Value is absent or empty
    Empty,

    NumberGreaterThan { value: f64 },
    NumberLessThan { value: f64 },
    NumberEqualTo { value: f64 },

    TextStartsWith { value: String },
    TextEndsWith { value: String },
    TextContains { value: String },

    #[serde(rename = "single-selection-selected")]
    SingleSelectSelected { value: Vec<String> },
    #[serde(rename = "multi-selection-selected")]
    MultiSelectSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },

    ScaleSelected { value: Vec<String> },
    /// Selected scale point is above the referenced point
    #[serde(rename = "scale-more-than")]
    ScaleMoreThan { value: String },
    /// Selected scale point is below the referenced point
    #[serde(rename = "scale-less-than")]
    ScaleLessThan { value: String },

    DateAfter { value: NaiveDate },
    DateBefore { value: NaiveDate },
    DateEqualTo { value: NaiveDate },

    TimeAfter { value: NaiveTime },
    TimeBefore { value: NaiveTime },
    TimeEqualTo { value: NaiveTime },

    /// Range lies entirely after the date
    DateRangeAfter { value: NaiveDate },
    /// Range lies entirely before the date
    DateRangeBefore { value: NaiveDate },
    /// Range includes the date
    DateRangeIncludes { value: NaiveDate },

    TimeRangeAfter { value: NaiveTime },
    TimeRangeBefore { value: NaiveTime },
    TimeRangeIncludes { value: NaiveTime },

    #[serde(rename = "matrix1d-rows-selected")]
    Matrix1dRowsSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },
    #[serde(rename = "matrix1d-cells-selected")]
    Matrix1dCellsSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },

    #[serde(rename = "matrix2d-rows-selected")]
    Matrix2dRowsSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },
    #[serde(rename = "matrix2d-sub-rows-selected")]
    Matrix2dSubRowsSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },
    #[serde(rename = "matrix2d-columns-selected")]
    Matrix2dColumnsSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },
    #[serde(rename = "matrix2d-sub-columns-selected")]
    Matrix2dSubColumnsSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },

    OrganigramSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },
    /// A strict descendant of each/some listed node is selected
    #[serde(rename = "organigram-descendent-selected")]
    OrganigramDescendentSelected {
        value: Vec<String>,
        #[serde(default)]
        operator_modifier: Modifier,
    },
}

/// One ordered, invertible rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRule {
    pub key: String,
    pub order: u32,
    pub invert: bool,
    pub conjunction_operator: Conjunction,
    #[serde(flatten)]
    pub operator: Operator,
}

/// Rules bound to a parent widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionSet {
    /// Key of the parent widget the rules test against
    pub parent_widget: String,
    pub conditions: Vec<ConditionRule>,
}

impl ConditionSet {
    /// Evaluate against the parent widget's current value
    ///
    /// Rules are applied in `order`; each rule's result (inverted when
    /// `invert` is set) joins the accumulated result via its
    /// conjunction. An empty rule list imposes no constraint.
    #[must_use]
    pub fn evaluate(&self, parent: &Widget, data: Option<&AttributeData>) -> bool {
        let mut rules: Vec<&ConditionRule> = self.conditions.iter().collect();
        rules.sort_by_key(|r| r.order);

        let mut result: Option<bool> = None;
        for rule in rules {
            let term = rule.operator.test(parent, data) != rule.invert;
            result = Some(match result {
                None => term,
                Some(acc) => match rule.conjunction_operator {
                    Conjunction::And => acc && term,
                    Conjunction::Or => acc || term,
                    Conjunction::Xor => acc != term,
                },
            });
        }
        result.unwrap_or(true)
    }
}

impl Operator {
    /// Test against a parent widget's value
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn test(&self, parent: &Widget, data: Option<&AttributeData>) -> bool {
        use AttributeData as D;

        match self {
            Self::Empty => data.map_or(true, AttributeData::is_empty),

            Self::NumberGreaterThan { value } => {
                matches!(data, Some(D::Number(n)) if n > value)
            }
            Self::NumberLessThan { value } => {
                matches!(data, Some(D::Number(n)) if n < value)
            }
            Self::NumberEqualTo { value } => {
                matches!(data, Some(D::Number(n)) if (n - value).abs() < f64::EPSILON)
            }

            Self::TextStartsWith { value } => {
                matches!(data, Some(D::Text(s)) if s.starts_with(value))
            }
            Self::TextEndsWith { value } => {
                matches!(data, Some(D::Text(s)) if s.ends_with(value))
            }
            Self::TextContains { value } => {
                matches!(data, Some(D::Text(s)) if s.contains(value))
            }

            Self::SingleSelectSelected { value } => {
                matches!(data, Some(D::SingleSelect(key)) if value.contains(key))
            }
            Self::MultiSelectSelected {
                value,
                operator_modifier,
            } => match data {
                Some(D::MultiSelect(selected)) => quantify(value, selected, *operator_modifier),
                _ => false,
            },

            Self::ScaleSelected { value } => {
                matches!(data, Some(D::Scale(key)) if value.contains(key))
            }
            Self::ScaleMoreThan { value } => scale_compare(parent, data, value, ScaleSide::Above),
            Self::ScaleLessThan { value } => scale_compare(parent, data, value, ScaleSide::Below),

            Self::DateAfter { value } => matches!(data, Some(D::Date(d)) if d > value),
            Self::DateBefore { value } => matches!(data, Some(D::Date(d)) if d < value),
            Self::DateEqualTo { value } => matches!(data, Some(D::Date(d)) if d == value),

            Self::TimeAfter { value } => matches!(data, Some(D::Time(t)) if t > value),
            Self::TimeBefore { value } => matches!(data, Some(D::Time(t)) if t < value),
            Self::TimeEqualTo { value } => matches!(data, Some(D::Time(t)) if t == value),

            Self::DateRangeAfter { value } => {
                matches!(data, Some(D::DateRange(r)) if r.start_date > *value)
            }
            Self::DateRangeBefore { value } => {
                matches!(data, Some(D::DateRange(r)) if r.end_date < *value)
            }
            Self::DateRangeIncludes { value } => {
                matches!(data, Some(D::DateRange(r))
                    if r.start_date <= *value && *value <= r.end_date)
            }

            Self::TimeRangeAfter { value } => {
                matches!(data, Some(D::TimeRange(r)) if r.start_time > *value)
            }
            Self::TimeRangeBefore { value } => {
                matches!(data, Some(D::TimeRange(r)) if r.end_time < *value)
            }
            Self::TimeRangeIncludes { value } => {
                matches!(data, Some(D::TimeRange(r))
                    if r.start_time <= *value && *value <= r.end_time)
            }

            Self::Matrix1dRowsSelected {
                value,
                operator_modifier,
            } => match data {
                Some(D::Matrix1d(rows)) => {
                    let selected: Vec<String> = rows
                        .iter()
                        .filter(|(_, cells)| cells.values().any(|v| *v))
                        .map(|(row, _)| row.clone())
                        .collect();
                    quantify(value, &selected, *operator_modifier)
                }
                _ => false,
            },
            Self::Matrix1dCellsSelected {
                value,
                operator_modifier,
            } => match data {
                Some(D::Matrix1d(rows)) => {
                    let selected: Vec<String> = rows
                        .values()
                        .flat_map(|cells| {
                            cells
                                .iter()
                                .filter(|(_, v)| **v)
                                .map(|(cell, _)| cell.clone())
                        })
                        .collect();
                    quantify(value, &selected, *operator_modifier)
                }
                _ => false,
            },

            Self::Matrix2dRowsSelected {
                value,
                operator_modifier,
            } => match data {
                Some(D::Matrix2d(rows)) => {
                    let selected: Vec<String> = rows
                        .iter()
                        .filter(|(_, sub_rows)| !sub_rows.is_empty())
                        .map(|(row, _)| row.clone())
                        .collect();
                    quantify(value, &selected, *operator_modifier)
                }
                _ => false,
            },
            Self::Matrix2dSubRowsSelected {
                value,
                operator_modifier,
            } => match data {
                Some(D::Matrix2d(rows)) => {
                    let selected: Vec<String> = rows
                        .values()
                        .flat_map(|sub_rows| sub_rows.keys().cloned())
                        .collect();
                    quantify(value, &selected, *operator_modifier)
                }
                _ => false,
            },
            Self::Matrix2dColumnsSelected {
                value,
                operator_modifier,
            } => match data {
                Some(D::Matrix2d(rows)) => {
                    let selected: BTreeSet<String> = rows
                        .values()
                        .flat_map(|sub_rows| sub_rows.values())
                        .flat_map(|columns| columns.keys().cloned())
                        .collect();
                    let selected: Vec<String> = selected.into_iter().collect();
                    quantify(value, &selected, *operator_modifier)
                }
                _ => false,
            },
            Self::Matrix2dSubColumnsSelected {
                value,
                operator_modifier,
            } => match data {
                Some(D::Matrix2d(rows)) => {
                    let selected: Vec<String> = rows
                        .values()
                        .flat_map(|sub_rows| sub_rows.values())
                        .flat_map(|columns| columns.values())
                        .flatten()
                        .cloned()
                        .collect();
                    quantify(value, &selected, *operator_modifier)
                }
                _ => false,
            },

            Self::OrganigramSelected {
                value,
                operator_modifier,
            } => match data {
                Some(D::Organigram(selected)) => quantify(value, selected, *operator_modifier),
                _ => false,
            },
            Self::OrganigramDescendentSelected {
                value,
                operator_modifier,
            } => match (data, &parent.properties) {
                (Some(D::Organigram(selected)), WidgetProperties::Organigram(p)) => {
                    let Some(root) = &p.options else {
                        return false;
                    };
                    let descendant_selected = |node_key: &String| {
                        selected.iter().any(|s| {
                            s != node_key && subtree_contains(root, node_key, s)
                        })
                    };
                    match operator_modifier {
                        Modifier::Some => value.iter().any(descendant_selected),
                        Modifier::Every => value.iter().all(descendant_selected),
                    }
                }
                _ => false,
            },
        }
    }
}

enum ScaleSide {
    Above,
    Below,
}

/// Compare a selected scale point against a reference point by order
fn scale_compare(
    parent: &Widget,
    data: Option<&AttributeData>,
    reference: &str,
    side: ScaleSide,
) -> bool {
    let (Some(AttributeData::Scale(selected)), WidgetProperties::Scale(p)) =
        (data, &parent.properties)
    else {
        return false;
    };

    let options = sorted_by_order(&p.options);
    let position = |key: &str| options.iter().position(|o| o.key == key);
    match (position(selected), position(reference)) {
        (Some(selected), Some(reference)) => match side {
            ScaleSide::Above => selected > reference,
            ScaleSide::Below => selected < reference,
        },
        _ => false,
    }
}

/// Every/some quantification of rule keys over selected keys
fn quantify(rule_keys: &[String], selected: &[String], modifier: Modifier) -> bool {
    match modifier {
        Modifier::Some => rule_keys.iter().any(|k| selected.contains(k)),
        Modifier::Every => rule_keys.iter().all(|k| selected.contains(k)),
    }
}

/// Whether `key` lies in the subtree rooted at the node named `root_key`
fn subtree_contains(
    node: &tagframe_schema::OrganigramNode,
    root_key: &str,
    key: &str,
) -> bool {
    if node.key == root_key {
        return node.contains_key(key);
    }
    node.children
        .iter()
        .any(|c| subtree_contains(c, root_key, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tagframe_schema::{
        ColorOption, OrganigramNode, OrganigramProperties, ScaleProperties, TextProperties,
    };

    fn text_widget() -> Widget {
        Widget::new(
            "notes",
            "Notes",
            1,
            WidgetProperties::Text(TextProperties::default()),
        )
    }

    fn scale_widget() -> Widget {
        Widget::new(
            "sev",
            "Severity",
            1,
            WidgetProperties::Scale(ScaleProperties {
                options: vec![
                    ColorOption::new("low", "Low", 1, "#0f0"),
                    ColorOption::new("mid", "Mid", 2, "#ff0"),
                    ColorOption::new("high", "High", 3, "#f00"),
                ],
                default_value: None,
            }),
        )
    }

    fn rule(order: u32, conjunction: Conjunction, invert: bool, operator: Operator) -> ConditionRule {
        ConditionRule {
            key: format!("r{order}"),
            order,
            invert,
            conjunction_operator: conjunction,
            operator,
        }
    }

    #[test]
    fn empty_operator() {
        let widget = text_widget();
        assert!(Operator::Empty.test(&widget, None));
        assert!(Operator::Empty.test(&widget, Some(&AttributeData::Text("  ".into()))));
        assert!(!Operator::Empty.test(&widget, Some(&AttributeData::Text("x".into()))));
    }

    #[test]
    fn text_operators() {
        let widget = text_widget();
        let data = AttributeData::Text("flood in kathmandu".into());
        assert!(Operator::TextStartsWith {
            value: "flood".into()
        }
        .test(&widget, Some(&data)));
        assert!(Operator::TextContains { value: "in".into() }.test(&widget, Some(&data)));
        assert!(!Operator::TextEndsWith {
            value: "flood".into()
        }
        .test(&widget, Some(&data)));
        // Shape mismatch is simply false.
        assert!(!Operator::TextContains { value: "x".into() }
            .test(&widget, Some(&AttributeData::Number(4.0))));
    }

    #[test]
    fn number_operators() {
        let widget = text_widget();
        let data = AttributeData::Number(5.0);
        assert!(Operator::NumberGreaterThan { value: 4.0 }.test(&widget, Some(&data)));
        assert!(Operator::NumberLessThan { value: 6.0 }.test(&widget, Some(&data)));
        assert!(Operator::NumberEqualTo { value: 5.0 }.test(&widget, Some(&data)));
        assert!(!Operator::NumberGreaterThan { value: 5.0 }.test(&widget, Some(&data)));
    }

    #[test]
    fn scale_ordering_uses_option_order() {
        let widget = scale_widget();
        let data = AttributeData::Scale("high".into());
        assert!(Operator::ScaleMoreThan { value: "mid".into() }.test(&widget, Some(&data)));
        assert!(!Operator::ScaleLessThan { value: "mid".into() }.test(&widget, Some(&data)));
        // Unknown reference point never matches.
        assert!(!Operator::ScaleMoreThan {
            value: "unknown".into()
        }
        .test(&widget, Some(&data)));
    }

    #[test]
    fn multi_select_quantifiers() {
        let widget = text_widget();
        let data = AttributeData::MultiSelect(vec!["a".into(), "b".into()]);
        let some = Operator::MultiSelectSelected {
            value: vec!["b".into(), "z".into()],
            operator_modifier: Modifier::Some,
        };
        let every = Operator::MultiSelectSelected {
            value: vec!["b".into(), "z".into()],
            operator_modifier: Modifier::Every,
        };
        assert!(some.test(&widget, Some(&data)));
        assert!(!every.test(&widget, Some(&data)));
    }

    #[test]
    fn matrix1d_selections() {
        let widget = text_widget();
        let mut rows: BTreeMap<String, BTreeMap<String, bool>> = BTreeMap::new();
        rows.insert(
            "row-1".into(),
            BTreeMap::from([("cell-1".into(), true), ("cell-2".into(), false)]),
        );
        rows.insert("row-2".into(), BTreeMap::from([("cell-3".into(), false)]));
        let data = AttributeData::Matrix1d(rows);

        assert!(Operator::Matrix1dRowsSelected {
            value: vec!["row-1".into()],
            operator_modifier: Modifier::Some,
        }
        .test(&widget, Some(&data)));
        // row-2 has no true cell, so it is not selected.
        assert!(!Operator::Matrix1dRowsSelected {
            value: vec!["row-2".into()],
            operator_modifier: Modifier::Some,
        }
        .test(&widget, Some(&data)));
        assert!(Operator::Matrix1dCellsSelected {
            value: vec!["cell-1".into()],
            operator_modifier: Modifier::Every,
        }
        .test(&widget, Some(&data)));
    }

    #[test]
    fn matrix2d_selections() {
        let widget = text_widget();
        let mut rows: tagframe_schema::Matrix2dValue = BTreeMap::new();
        rows.insert(
            "row-1".into(),
            BTreeMap::from([(
                "sub-row-1".into(),
                BTreeMap::from([("col-1".into(), vec!["sub-col-1".into()])]),
            )]),
        );
        let data = AttributeData::Matrix2d(rows);

        let hit = |operator: Operator| operator.test(&widget, Some(&data));
        assert!(hit(Operator::Matrix2dRowsSelected {
            value: vec!["row-1".into()],
            operator_modifier: Modifier::Some,
        }));
        assert!(hit(Operator::Matrix2dSubRowsSelected {
            value: vec!["sub-row-1".into()],
            operator_modifier: Modifier::Some,
        }));
        assert!(hit(Operator::Matrix2dColumnsSelected {
            value: vec!["col-1".into()],
            operator_modifier: Modifier::Some,
        }));
        assert!(hit(Operator::Matrix2dSubColumnsSelected {
            value: vec!["sub-col-1".into()],
            operator_modifier: Modifier::Some,
        }));
        assert!(!hit(Operator::Matrix2dColumnsSelected {
            value: vec!["col-9".into()],
            operator_modifier: Modifier::Some,
        }));
    }

    #[test]
    fn organigram_descendant_selection() {
        let widget = Widget::new(
            "org",
            "Org",
            1,
            WidgetProperties::Organigram(OrganigramProperties {
                options: Some(OrganigramNode::branch(
                    "root",
                    "Root",
                    1,
                    vec![OrganigramNode::branch(
                        "a",
                        "A",
                        1,
                        vec![OrganigramNode::leaf("a1", "A1", 1)],
                    )],
                )),
            }),
        );

        let data = AttributeData::Organigram(vec!["a1".into()]);
        assert!(Operator::OrganigramDescendentSelected {
            value: vec!["a".into()],
            operator_modifier: Modifier::Some,
        }
        .test(&widget, Some(&data)));
        // Selecting the node itself is not a descendant selection.
        let self_data = AttributeData::Organigram(vec!["a".into()]);
        assert!(!Operator::OrganigramDescendentSelected {
            value: vec!["a".into()],
            operator_modifier: Modifier::Some,
        }
        .test(&widget, Some(&self_data)));
    }

    #[test]
    fn empty_rule_list_imposes_no_constraint() {
        let set = ConditionSet {
            parent_widget: "notes".into(),
            conditions: Vec::new(),
        };
        assert!(set.evaluate(&text_widget(), None));
    }

    #[test]
    fn conjunction_fold_in_order() {
        let widget = text_widget();
        let data = AttributeData::Text("flood report".into());

        // starts-with("flood") AND contains("nothing") = false
        let set = ConditionSet {
            parent_widget: "notes".into(),
            conditions: vec![
                rule(
                    1,
                    Conjunction::And,
                    false,
                    Operator::TextStartsWith {
                        value: "flood".into(),
                    },
                ),
                rule(
                    2,
                    Conjunction::And,
                    false,
                    Operator::TextContains {
                        value: "nothing".into(),
                    },
                ),
            ],
        };
        assert!(!set.evaluate(&widget, Some(&data)));

        // The same second rule joined with OR passes.
        let mut set = set;
        set.conditions[1].conjunction_operator = Conjunction::Or;
        assert!(set.evaluate(&widget, Some(&data)));
    }

    #[test]
    fn invert_and_xor() {
        let widget = text_widget();
        let data = AttributeData::Text("x".into());

        let set = ConditionSet {
            parent_widget: "notes".into(),
            conditions: vec![
                rule(1, Conjunction::And, true, Operator::Empty), // not empty = true
                rule(
                    2,
                    Conjunction::Xor,
                    false,
                    Operator::TextContains { value: "x".into() }, // true
                ),
            ],
        };
        // true XOR true = false
        assert!(!set.evaluate(&widget, Some(&data)));
    }

    #[test]
    fn rules_apply_in_order_not_list_position() {
        let widget = text_widget();
        let data = AttributeData::Text("abc".into());

        // Listed out of order: the OR rule carries order 1, so the AND
        // rule (order 2) joins onto it, not the other way around.
        let set = ConditionSet {
            parent_widget: "notes".into(),
            conditions: vec![
                rule(
                    2,
                    Conjunction::And,
                    false,
                    Operator::TextStartsWith { value: "a".into() },
                ),
                rule(1, Conjunction::Or, false, Operator::Empty),
            ],
        };
        // order 1: empty = false; order 2: false AND starts-with = false
        assert!(!set.evaluate(&widget, Some(&data)));
    }

    #[test]
    fn operator_wire_tags() {
        let operator = Operator::ScaleMoreThan {
            value: "mid".into(),
        };
        let json = serde_json::to_value(&operator).unwrap();
        assert_eq!(json["operator"], "scale-more-than");

        let rule = rule(1, Conjunction::And, false, Operator::Empty);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["operator"], "empty");
        assert_eq!(json["conjunctionOperator"], "AND");
    }
}
