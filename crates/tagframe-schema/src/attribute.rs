//! Attribute values
//!
//! Provides [`AttributeData`], the user-entered value for a widget on
//! one entry. The shape depends on the widget type; the serialized
//! form carries the widget-type discriminator next to a `value`
//! payload.

use crate::ident::ClientId;
use crate::widget::WidgetType;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date range value (inclusive endpoints)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeValue {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Time range value (inclusive endpoints)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeValue {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Matrix1d selection: row key -> cell key -> selected
///
/// Absent rows/cells are unselected. `BTreeMap` keeps serialization
/// deterministic.
pub type Matrix1dValue = BTreeMap<String, BTreeMap<String, bool>>;

/// Matrix2d selection: row key -> sub-row key -> column key -> selected sub-column keys
///
/// An empty sub-column list means the cell is tagged at column level.
pub type Matrix2dValue = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<String>>>>;

/// The value a user entered for one widget on one entry
///
/// A closed union mirroring [`WidgetType`]; [`AttributeData::widget_type`]
/// is the single dispatch point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widgetType", content = "value")]
pub enum AttributeData {
    #[serde(rename = "TEXT")]
    Text(String),
    #[serde(rename = "NUMBER")]
    Number(f64),
    #[serde(rename = "DATE")]
    Date(NaiveDate),
    #[serde(rename = "DATE_RANGE")]
    DateRange(DateRangeValue),
    #[serde(rename = "TIME")]
    Time(NaiveTime),
    #[serde(rename = "TIME_RANGE")]
    TimeRange(TimeRangeValue),
    #[serde(rename = "SCALE")]
    Scale(String),
    #[serde(rename = "SELECT")]
    SingleSelect(String),
    #[serde(rename = "MULTISELECT")]
    MultiSelect(Vec<String>),
    #[serde(rename = "MATRIX1D")]
    Matrix1d(Matrix1dValue),
    #[serde(rename = "MATRIX2D")]
    Matrix2d(Matrix2dValue),
    #[serde(rename = "ORGANIGRAM")]
    Organigram(Vec<String>),
    #[serde(rename = "GEO")]
    Geo(Vec<String>),
}

impl AttributeData {
    /// The widget type this value shape belongs to
    #[must_use]
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::Text(_) => WidgetType::Text,
            Self::Number(_) => WidgetType::Number,
            Self::Date(_) => WidgetType::Date,
            Self::DateRange(_) => WidgetType::DateRange,
            Self::Time(_) => WidgetType::Time,
            Self::TimeRange(_) => WidgetType::TimeRange,
            Self::Scale(_) => WidgetType::Scale,
            Self::SingleSelect(_) => WidgetType::SingleSelect,
            Self::MultiSelect(_) => WidgetType::MultiSelect,
            Self::Matrix1d(_) => WidgetType::Matrix1d,
            Self::Matrix2d(_) => WidgetType::Matrix2d,
            Self::Organigram(_) => WidgetType::Organigram,
            Self::Geo(_) => WidgetType::Geo,
        }
    }

    /// Whether the value is empty in the widget's sense
    ///
    /// Empty text, empty selections, and matrices with no selected
    /// cell all count as empty; scalar dates/times/numbers never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Scale(s) | Self::SingleSelect(s) => s.trim().is_empty(),
            Self::MultiSelect(keys) | Self::Organigram(keys) | Self::Geo(keys) => keys.is_empty(),
            Self::Matrix1d(rows) => !rows
                .values()
                .any(|cells| cells.values().any(|selected| *selected)),
            Self::Matrix2d(rows) => !rows.values().any(|sub_rows| !sub_rows.is_empty()),
            Self::Number(_)
            | Self::Date(_)
            | Self::DateRange(_)
            | Self::Time(_)
            | Self::TimeRange(_) => false,
        }
    }
}

/// Per-entry, per-widget attribute record
///
/// Created when a user first tags an entry, overwritten on each edit,
/// discarded when the widget is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub client_id: ClientId,
    #[serde(flatten)]
    pub data: AttributeData,
}

impl Attribute {
    /// Create a new attribute record with a fresh client id
    #[must_use]
    pub fn new(data: AttributeData) -> Self {
        Self {
            client_id: ClientId::generate(),
            data,
        }
    }
}
