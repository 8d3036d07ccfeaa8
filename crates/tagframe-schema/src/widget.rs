//! Widget definitions
//!
//! Provides [`Widget`] and the closed [`WidgetProperties`] union over
//! all widget types. Dispatch over widget type is an exhaustive match
//! at a single point ([`WidgetProperties::widget_type`]); adding a
//! widget type is a compile-time-checked exercise.

use crate::ident::ClientId;
use crate::option::{ChoiceOption, ColorOption, Ordered, OrganigramNode};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Closed set of widget types
///
/// Serialized with the wire discriminators used by the upstream API
/// (`TEXT`, `MATRIX2D`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetType {
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "NUMBER")]
    Number,
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "DATE_RANGE")]
    DateRange,
    #[serde(rename = "TIME")]
    Time,
    #[serde(rename = "TIME_RANGE")]
    TimeRange,
    #[serde(rename = "SCALE")]
    Scale,
    #[serde(rename = "SELECT")]
    SingleSelect,
    #[serde(rename = "MULTISELECT")]
    MultiSelect,
    #[serde(rename = "MATRIX1D")]
    Matrix1d,
    #[serde(rename = "MATRIX2D")]
    Matrix2d,
    #[serde(rename = "ORGANIGRAM")]
    Organigram,
    #[serde(rename = "GEO")]
    Geo,
    #[serde(rename = "CONDITIONAL")]
    Conditional,
}

impl WidgetType {
    /// Wire discriminator for this type
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::Date => "DATE",
            Self::DateRange => "DATE_RANGE",
            Self::Time => "TIME",
            Self::TimeRange => "TIME_RANGE",
            Self::Scale => "SCALE",
            Self::SingleSelect => "SELECT",
            Self::MultiSelect => "MULTISELECT",
            Self::Matrix1d => "MATRIX1D",
            Self::Matrix2d => "MATRIX2D",
            Self::Organigram => "ORGANIGRAM",
            Self::Geo => "GEO",
            Self::Conditional => "CONDITIONAL",
        }
    }
}

impl Display for WidgetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal size of a widget in the tagging layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WidgetWidth {
    #[serde(rename = "FULL")]
    #[default]
    Full,
    #[serde(rename = "HALF")]
    Half,
}

/// Text widget payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Number widget payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

/// Single/multi select payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectProperties {
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Scale widget payload: ordered, colored points
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleProperties {
    #[serde(default)]
    pub options: Vec<ColorOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// One matrix1d row with its cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix1dRow {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub order: u32,
    pub color: String,
    #[serde(default)]
    pub cells: Vec<ChoiceOption>,
}

impl Ordered for Matrix1dRow {
    fn order(&self) -> u32 {
        self.order
    }
}

/// Matrix1d payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix1dProperties {
    #[serde(default)]
    pub rows: Vec<Matrix1dRow>,
}

/// One matrix2d row with its sub-rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix2dRow {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub order: u32,
    pub color: String,
    #[serde(default)]
    pub sub_rows: Vec<ChoiceOption>,
}

impl Ordered for Matrix2dRow {
    fn order(&self) -> u32 {
        self.order
    }
}

/// One matrix2d column with its sub-columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix2dColumn {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub order: u32,
    #[serde(default)]
    pub sub_columns: Vec<ChoiceOption>,
}

impl Ordered for Matrix2dColumn {
    fn order(&self) -> u32 {
        self.order
    }
}

/// Matrix2d payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix2dProperties {
    #[serde(default)]
    pub rows: Vec<Matrix2dRow>,
    #[serde(default)]
    pub columns: Vec<Matrix2dColumn>,
}

/// Organigram payload: a single rooted option tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganigramProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OrganigramNode>,
}

/// Geo widget payload
///
/// Area options live in the externally fed options repository, not in
/// the framework definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Vec<String>>,
}

/// Conditional widget payload: embedded widgets, one active at a time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalProperties {
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_widget_key: Option<String>,
}

/// Closed union over widget payloads
///
/// Adjacently tagged so the wire shape keeps the type discriminator in
/// `widgetId` next to a `properties` object, as the upstream API does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widgetId", content = "properties")]
pub enum WidgetProperties {
    #[serde(rename = "TEXT")]
    Text(TextProperties),
    #[serde(rename = "NUMBER")]
    Number(NumberProperties),
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "DATE_RANGE")]
    DateRange,
    #[serde(rename = "TIME")]
    Time,
    #[serde(rename = "TIME_RANGE")]
    TimeRange,
    #[serde(rename = "SCALE")]
    Scale(ScaleProperties),
    #[serde(rename = "SELECT")]
    SingleSelect(SelectProperties),
    #[serde(rename = "MULTISELECT")]
    MultiSelect(SelectProperties),
    #[serde(rename = "MATRIX1D")]
    Matrix1d(Matrix1dProperties),
    #[serde(rename = "MATRIX2D")]
    Matrix2d(Matrix2dProperties),
    #[serde(rename = "ORGANIGRAM")]
    Organigram(OrganigramProperties),
    #[serde(rename = "GEO")]
    Geo(GeoProperties),
    #[serde(rename = "CONDITIONAL")]
    Conditional(ConditionalProperties),
}

impl WidgetProperties {
    /// Type discriminator for this payload
    ///
    /// The single dispatch point over widget type.
    #[must_use]
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::Text(_) => WidgetType::Text,
            Self::Number(_) => WidgetType::Number,
            Self::Date => WidgetType::Date,
            Self::DateRange => WidgetType::DateRange,
            Self::Time => WidgetType::Time,
            Self::TimeRange => WidgetType::TimeRange,
            Self::Scale(_) => WidgetType::Scale,
            Self::SingleSelect(_) => WidgetType::SingleSelect,
            Self::MultiSelect(_) => WidgetType::MultiSelect,
            Self::Matrix1d(_) => WidgetType::Matrix1d,
            Self::Matrix2d(_) => WidgetType::Matrix2d,
            Self::Organigram(_) => WidgetType::Organigram,
            Self::Geo(_) => WidgetType::Geo,
            Self::Conditional(_) => WidgetType::Conditional,
        }
    }

    /// Flat options of select-like payloads
    ///
    /// Scale options are projected down to plain [`ChoiceOption`]s.
    /// Types without a flat option list return an empty vec rather
    /// than erroring.
    #[must_use]
    pub fn flat_options(&self) -> Vec<ChoiceOption> {
        match self {
            Self::SingleSelect(p) | Self::MultiSelect(p) => p.options.clone(),
            Self::Scale(p) => p
                .options
                .iter()
                .map(|o| ChoiceOption {
                    key: o.key.clone(),
                    label: o.label.clone(),
                    tooltip: o.tooltip.clone(),
                    order: o.order,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One typed, configurable input field within a framework
///
/// `id` is the server-assigned identifier and is absent until the
/// widget is persisted; `client_id` always exists. `key` must be
/// unique within the containing widget list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub client_id: ClientId,
    pub key: String,
    pub title: String,
    pub order: u32,
    #[serde(default)]
    pub width: WidgetWidth,
    #[serde(default)]
    pub version: u32,
    #[serde(flatten)]
    pub properties: WidgetProperties,
}

impl Widget {
    /// Create an unsaved widget with a fresh client id
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        order: u32,
        properties: WidgetProperties,
    ) -> Self {
        Self {
            id: None,
            client_id: ClientId::generate(),
            key: key.into(),
            title: title.into(),
            order,
            width: WidgetWidth::default(),
            version: 1,
            properties,
        }
    }

    /// Attach a server id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Type discriminator
    #[inline]
    #[must_use]
    pub fn widget_type(&self) -> WidgetType {
        self.properties.widget_type()
    }
}

impl Ordered for Widget {
    fn order(&self) -> u32 {
        self.order
    }
}
