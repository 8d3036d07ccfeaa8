//! Testing utilities for the tagframe workspace
//!
//! Shared fixtures: one widget of each mappable type with realistic
//! payloads, a small framework, and prediction tags.

#![allow(missing_docs)]

use tagframe_mapping::PredictionTag;
use tagframe_schema::{
    ChoiceOption, ColorOption, Framework, Matrix1dProperties, Matrix1dRow, Matrix2dColumn,
    Matrix2dProperties, Matrix2dRow, OrganigramNode, OrganigramProperties, ScaleProperties,
    Section, SelectProperties, TextProperties, Widget, WidgetProperties,
};

pub fn select_widget() -> Widget {
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
    .with_id("11")
}

pub fn scale_widget() -> Widget {
    Widget::new(
        "severity",
        "Severity",
        2,
        WidgetProperties::Scale(ScaleProperties {
            options: vec![
                ColorOption::new("option-1", "Option 1", 1, "#f0f0f0"),
                ColorOption::new("option-2", "Option 2", 2, "#123123"),
            ],
            default_value: None,
        }),
    )
    .with_id("14")
}

pub fn matrix1d_widget() -> Widget {
    Widget::new(
        "sectors",
        "Matrix 1D",
        3,
        WidgetProperties::Matrix1d(Matrix1dProperties {
            rows: vec![
                Matrix1dRow {
                    key: "row-1".into(),
                    label: "Row 1".into(),
                    tooltip: None,
                    order: 1,
                    color: "#b0b0b0".into(),
                    cells: vec![ChoiceOption::new("sub-row-1-1", "Sub Row 1 1", 1)],
                },
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
            ],
        }),
    )
    .with_id("13")
}

pub fn matrix2d_widget() -> Widget {
    Widget::new(
        "impact",
        "Matrix 2D",
        4,
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
    .with_id("12")
}

pub fn organigram_widget() -> Widget {
    Widget::new(
        "affected",
        "Organigram",
        5,
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
                        vec![OrganigramNode::leaf("child-1-1", "Child 1 1", 1)],
                    ),
                    OrganigramNode::leaf("child-0-2", "Child 0 2", 2),
                ],
            )),
        }),
    )
    .with_id("15")
}

pub fn text_widget(key: &str, order: u32) -> Widget {
    Widget::new(
        key,
        key.to_uppercase(),
        order,
        WidgetProperties::Text(TextProperties::default()),
    )
}

/// One section of each mappable widget type
pub fn small_framework() -> Framework {
    let mut section = Section::new("Operational Environment");
    section.widgets = vec![
        select_widget(),
        scale_widget(),
        matrix1d_widget(),
        matrix2d_widget(),
        organigram_widget(),
    ];
    Framework {
        primary: vec![section],
        secondary: Vec::new(),
    }
}

pub fn prediction_tags() -> Vec<PredictionTag> {
    vec![
        PredictionTag::new("t1", "Protection"),
        PredictionTag::new("t2", "Food Security"),
        PredictionTag::new("t3", "Health"),
    ]
}
