//! Tagframe Schema
//!
//! Typed data model for an analytical tagging framework.
//!
//! # Core Concepts
//!
//! - [`Framework`]: ordered tree of sections (primary tagging) plus a
//!   flat list of secondary-tagging widgets
//! - [`Section`]: ordered container of widgets
//! - [`Widget`]: one typed, configurable input field; its payload is a
//!   closed [`WidgetProperties`] union dispatched by [`WidgetType`]
//! - [`ChoiceOption`] / [`ColorOption`] / [`OrganigramNode`]: the
//!   addressable choice points a mapping can reference
//! - [`AttributeData`]: the user-entered value for a widget on one entry
//!
//! # Example
//!
//! ```rust,ignore
//! use tagframe_schema::{Widget, WidgetProperties, SelectProperties};
//!
//! let widget = Widget::new("severity", "Severity", 1,
//!     WidgetProperties::SingleSelect(SelectProperties { options, default_value: None }));
//! assert_eq!(widget.widget_type(), WidgetType::SingleSelect);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod attribute;
mod error;
mod ident;
mod option;
mod section;
mod widget;

// Re-exports
pub use attribute::{
    Attribute, AttributeData, DateRangeValue, Matrix1dValue, Matrix2dValue, TimeRangeValue,
};
pub use error::SchemaError;
pub use ident::ClientId;
pub use option::{
    sort_by_order, sorted_by_order, ChoiceOption, ColorOption, Ordered, OrganigramNode,
};
pub use section::{Framework, Section};
pub use widget::{
    ConditionalProperties, GeoProperties, Matrix1dProperties, Matrix1dRow, Matrix2dColumn,
    Matrix2dProperties, Matrix2dRow, NumberProperties, OrganigramProperties, ScaleProperties,
    SelectProperties, TextProperties, Widget, WidgetProperties, WidgetType, WidgetWidth,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn widget_round_trips_through_json() {
        let widget = Widget::new(
            "severity",
            "Severity",
            1,
            WidgetProperties::Scale(ScaleProperties {
                options: vec![
                    ColorOption::new("low", "Low", 1, "#00ff00"),
                    ColorOption::new("high", "High", 2, "#ff0000"),
                ],
                default_value: None,
            }),
        );

        let json = serde_json::to_string(&widget).unwrap();
        let back: Widget = serde_json::from_str(&json).unwrap();
        assert_eq!(back.key, "severity");
        assert_eq!(back.widget_type(), WidgetType::Scale);
    }

    #[test]
    fn framework_validates_and_looks_up() {
        let mut section = Section::new("Operational Environment");
        section.widgets.push(Widget::new(
            "context",
            "Context",
            1,
            WidgetProperties::Text(TextProperties::default()),
        ));
        let framework = Framework {
            primary: vec![section],
            secondary: Vec::new(),
        };

        assert!(framework.validate().is_ok());
        assert!(framework.widget_by_key("context").is_some());
        assert!(framework.widget_by_key("missing").is_none());
    }
}
