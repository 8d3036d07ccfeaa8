//! Conditional widget resolution
//!
//! A conditional widget embeds a list of nested widget definitions and
//! shows one at a time. [`resolve_conditional`] selects the active
//! nested widget by key; a key that matches nothing yields an explicit
//! [`Resolution::Fallback`] placeholder state, never a panic.
//!
//! Nested widgets are additionally classified editable or view-only
//! per tagging view via [`classify`].

use tagframe_schema::{ConditionalProperties, Widget, WidgetType};

/// Which tagging surface a widget is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetView {
    /// The overview (excerpt-centric) surface
    Overview,
    /// The list (entry-table) surface
    List,
}

/// Whether a widget's control accepts edits in a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Render the editable tagging control
    Editable,
    /// Render the display-only variant, bypassing form binding
    ViewOnly,
}

/// Outcome of conditional resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// The embedded widget matching the selected key
    Active(&'a Widget),
    /// No embedded widget matches; render a placeholder
    Fallback,
}

impl<'a> Resolution<'a> {
    /// The active widget, if any
    #[inline]
    #[must_use]
    pub fn widget(&self) -> Option<&'a Widget> {
        match *self {
            Self::Active(widget) => Some(widget),
            Self::Fallback => None,
        }
    }
}

/// Select the active nested widget of a conditional
///
/// Falls back to the conditional's default widget key when no explicit
/// selection is given. A selection that matches no embedded widget
/// resolves to [`Resolution::Fallback`].
#[must_use]
pub fn resolve_conditional<'a>(
    properties: &'a ConditionalProperties,
    selected_key: Option<&str>,
) -> Resolution<'a> {
    let key = selected_key.or(properties.default_widget_key.as_deref());
    let Some(key) = key else {
        return Resolution::Fallback;
    };
    properties
        .widgets
        .iter()
        .find(|w| w.key == key)
        .map_or(Resolution::Fallback, Resolution::Active)
}

/// Classify a widget as editable or view-only for a view
///
/// A widget renders its primary tagging control in the view it was
/// added from. In the other view, only the matrix widgets carry an
/// alternate tagging control; everything else falls back to the
/// display-only variant. Conditional widgets never expose a direct
/// control of their own.
#[must_use]
pub fn classify(widget_type: WidgetType, view: WidgetView, added_from: WidgetView) -> Visibility {
    if widget_type == WidgetType::Conditional {
        return Visibility::ViewOnly;
    }
    if view == added_from {
        return Visibility::Editable;
    }
    match (widget_type, view) {
        (WidgetType::Matrix1d | WidgetType::Matrix2d, WidgetView::List) => Visibility::Editable,
        _ => Visibility::ViewOnly,
    }
}
