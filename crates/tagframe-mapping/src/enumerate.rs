//! Possible-mapping enumeration
//!
//! Provides [`possible_mappings`]: the labeled candidates one widget
//! exposes for tag mapping, in display order. Matrix2d widgets expose
//! columns, then sub-columns grouped by column, then sub-rows grouped
//! by row; organigram nodes are labeled with their `/`-joined path
//! from the root.

use crate::association::Association;
use serde::{Deserialize, Serialize};
use tagframe_schema::{sorted_by_order, OrganigramNode, Widget, WidgetProperties, WidgetType};

/// One candidate choice point of a widget, labeled for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossibleMapping {
    pub label: String,
    /// Widget id (client id when the widget is not yet persisted)
    pub widget: String,
    pub widget_type: WidgetType,
    pub association: Association,
}

/// Enumerate the choice points a widget exposes for mapping
///
/// Outer lists (rows, columns, options) are sorted by display order;
/// nested lists keep their defined order. Widget types without
/// mappable choice points yield an empty vec.
#[must_use]
pub fn possible_mappings(widget: &Widget) -> Vec<PossibleMapping> {
    let widget_id = widget
        .id
        .clone()
        .unwrap_or_else(|| widget.client_id.to_string());
    let widget_type = widget.widget_type();

    let make = |label: &str, association: Association| PossibleMapping {
        label: label.to_string(),
        widget: widget_id.clone(),
        widget_type,
        association,
    };

    match &widget.properties {
        WidgetProperties::Scale(_)
        | WidgetProperties::SingleSelect(_)
        | WidgetProperties::MultiSelect(_) => {
            let mut options = widget.properties.flat_options();
            tagframe_schema::sort_by_order(&mut options);
            options
                .iter()
                .map(|o| make(&o.label, Association::option(o.key.clone())))
                .collect()
        }
        WidgetProperties::Matrix1d(p) => sorted_by_order(&p.rows)
            .iter()
            .flat_map(|row| {
                row.cells.iter().map(|cell| {
                    make(
                        &cell.label,
                        Association::Cell {
                            row_key: row.key.clone(),
                            sub_row_key: cell.key.clone(),
                        },
                    )
                })
            })
            .collect(),
        WidgetProperties::Matrix2d(p) => {
            let columns = sorted_by_order(&p.columns);
            let rows = sorted_by_order(&p.rows);
            let mut out = Vec::new();

            for column in &columns {
                out.push(make(
                    &column.label,
                    Association::Column {
                        column_key: column.key.clone(),
                    },
                ));
            }
            for column in &columns {
                for sub_column in &column.sub_columns {
                    out.push(make(
                        &sub_column.label,
                        Association::SubColumn {
                            column_key: column.key.clone(),
                            sub_column_key: sub_column.key.clone(),
                        },
                    ));
                }
            }
            for row in &rows {
                for sub_row in &row.sub_rows {
                    out.push(make(
                        &sub_row.label,
                        Association::SubRow {
                            row_key: row.key.clone(),
                            sub_row_key: sub_row.key.clone(),
                        },
                    ));
                }
            }
            out
        }
        WidgetProperties::Organigram(p) => match &p.options {
            Some(root) => {
                let mut out = Vec::new();
                collect_organigram(root, &mut Vec::new(), &mut |path, node| {
                    out.push(make(&path.join("/"), Association::option(node.key.clone())));
                });
                out
            }
            None => Vec::new(),
        },
        WidgetProperties::Text(_)
        | WidgetProperties::Number(_)
        | WidgetProperties::Date
        | WidgetProperties::DateRange
        | WidgetProperties::Time
        | WidgetProperties::TimeRange
        | WidgetProperties::Geo(_)
        | WidgetProperties::Conditional(_) => Vec::new(),
    }
}

fn collect_organigram<'a>(
    node: &'a OrganigramNode,
    path: &mut Vec<&'a str>,
    visit: &mut impl FnMut(&[&str], &OrganigramNode),
) {
    path.push(node.label.as_str());
    visit(path, node);
    for child in &node.children {
        collect_organigram(child, path, visit);
    }
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagframe_schema::{
        ChoiceOption, ColorOption, Matrix1dProperties, Matrix1dRow, Matrix2dColumn,
        Matrix2dProperties, Matrix2dRow, OrganigramProperties, ScaleProperties, TextProperties,
    };

    fn labels(mappings: &[PossibleMapping]) -> Vec<&str> {
        mappings.iter().map(|m| m.label.as_str()).collect()
    }

    #[test]
    fn scale_options_in_display_order() {
        let widget = Widget::new(
            "sev",
            "Severity",
            1,
            WidgetProperties::Scale(ScaleProperties {
                options: vec![
                    ColorOption::new("option-2", "Option 2", 2, "#123123"),
                    ColorOption::new("option-1", "Option 1", 1, "#f0f0f0"),
                ],
                default_value: None,
            }),
        )
        .with_id("14");

        let mappings = possible_mappings(&widget);
        assert_eq!(labels(&mappings), vec!["Option 1", "Option 2"]);
        assert_eq!(mappings[0].widget, "14");
        assert_eq!(mappings[0].association, Association::option("option-1"));
    }

    #[test]
    fn matrix1d_cells_grouped_by_sorted_row() {
        let widget = Widget::new(
            "m1",
            "Matrix 1D",
            1,
            WidgetProperties::Matrix1d(Matrix1dProperties {
                rows: vec![
                    Matrix1dRow {
                        key: "row-2".into(),
                        label: "Row 2".into(),
                        tooltip: None,
                        order: 2,
                        color: "#ff0000".into(),
                        cells: vec![
                            ChoiceOption::new("sub-row-2-1", "Sub Row 2 1", 1),
                            ChoiceOption::new("sub-row-2-2", "Sub Row 2 2", 2),
                        ],
                    },
                    Matrix1dRow {
                        key: "row-1".into(),
                        label: "Row 1".into(),
                        tooltip: None,
                        order: 1,
                        color: "#b0b0b0".into(),
                        cells: vec![ChoiceOption::new("sub-row-1-1", "Sub Row 1 1", 1)],
                    },
                ],
            }),
        )
        .with_id("13");

        let mappings = possible_mappings(&widget);
        assert_eq!(
            labels(&mappings),
            vec!["Sub Row 1 1", "Sub Row 2 1", "Sub Row 2 2"]
        );
        assert_eq!(
            mappings[0].association,
            Association::Cell {
                row_key: "row-1".into(),
                sub_row_key: "sub-row-1-1".into(),
            }
        );
    }

    #[test]
    fn matrix2d_columns_then_sub_columns_then_sub_rows() {
        let widget = Widget::new(
            "m2",
            "Matrix 2D",
            1,
            WidgetProperties::Matrix2d(Matrix2dProperties {
                columns: vec![
                    Matrix2dColumn {
                        key: "column-1".into(),
                        label: "Column 1".into(),
                        tooltip: None,
                        order: 1,
                        sub_columns: vec![
                            ChoiceOption::new("sub-col-1", "Sub Col 1", 1),
                            ChoiceOption::new("sub-col-2", "Sub Col 2", 2),
                        ],
                    },
                    Matrix2dColumn {
                        key: "column-2".into(),
                        label: "Column 2".into(),
                        tooltip: None,
                        order: 2,
                        sub_columns: vec![],
                    },
                ],
                rows: vec![Matrix2dRow {
                    key: "row-1".into(),
                    label: "Row 1".into(),
                    tooltip: None,
                    order: 1,
                    color: "red".into(),
                    sub_rows: vec![
                        ChoiceOption::new("sub-row-1-1", "Sub Row 1 1", 1),
                        ChoiceOption::new("sub-row-1-2", "Sub Row 1 2", 2),
                    ],
                }],
            }),
        )
        .with_id("12");

        let mappings = possible_mappings(&widget);
        assert_eq!(
            labels(&mappings),
            vec![
                "Column 1",
                "Column 2",
                "Sub Col 1",
                "Sub Col 2",
                "Sub Row 1 1",
                "Sub Row 1 2",
            ]
        );
        assert_eq!(
            mappings[2].association,
            Association::SubColumn {
                column_key: "column-1".into(),
                sub_column_key: "sub-col-1".into(),
            }
        );
        assert_eq!(
            mappings[4].association,
            Association::SubRow {
                row_key: "row-1".into(),
                sub_row_key: "sub-row-1-1".into(),
            }
        );
    }

    #[test]
    fn organigram_labels_are_slash_joined_paths() {
        let widget = Widget::new(
            "org",
            "Organigram",
            1,
            WidgetProperties::Organigram(OrganigramProperties {
                options: Some(OrganigramNode::branch(
                    "parent-0",
                    "Parent 0",
                    1,
                    vec![
                        OrganigramNode::branch(
                            "child-0-1",
                            "Child 0 1",
                            1,
                            vec![
                                OrganigramNode::leaf("child-1-1", "Child 1 1", 1),
                                OrganigramNode::leaf("child-1-2", "Child 1 2", 2),
                            ],
                        ),
                        OrganigramNode::leaf("child-0-2", "Child 0 2", 2),
                    ],
                )),
            }),
        )
        .with_id("15");

        let mappings = possible_mappings(&widget);
        assert_eq!(
            labels(&mappings),
            vec![
                "Parent 0",
                "Parent 0/Child 0 1",
                "Parent 0/Child 0 1/Child 1 1",
                "Parent 0/Child 0 1/Child 1 2",
                "Parent 0/Child 0 2",
            ]
        );
        assert_eq!(mappings[2].association, Association::option("child-1-1"));
    }

    #[test]
    fn organigram_without_root_is_empty() {
        let widget = Widget::new(
            "org",
            "Organigram",
            1,
            WidgetProperties::Organigram(OrganigramProperties { options: None }),
        )
        .with_id("15");
        assert!(possible_mappings(&widget).is_empty());
    }

    #[test]
    fn non_mappable_types_are_empty() {
        let widget = Widget::new(
            "notes",
            "Notes",
            1,
            WidgetProperties::Text(TextProperties::default()),
        )
        .with_id("16");
        assert!(possible_mappings(&widget).is_empty());
    }

    #[test]
    fn unsaved_widget_falls_back_to_client_id() {
        let widget = Widget::new(
            "sev",
            "Severity",
            1,
            WidgetProperties::Scale(ScaleProperties {
                options: vec![ColorOption::new("a", "A", 1, "#fff")],
                default_value: None,
            }),
        );
        let mappings = possible_mappings(&widget);
        assert_eq!(mappings[0].widget, widget.client_id.to_string());
    }
}
