//! Association variants
//!
//! Provides [`Association`], the closed union over the choice points a
//! prediction tag can map onto. Shapes follow the assisted-tagging
//! payloads of the upstream API; a uniform `type` discriminator is
//! carried so identical field shapes (matrix1d cells vs matrix2d
//! sub-rows) stay distinguishable.

use serde::{Deserialize, Serialize};

/// The widget choice point one mapping entry targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Association {
    /// A flat option of a scale, select, multi-select, or organigram widget
    #[serde(rename = "OPTION")]
    Option { option_key: String },

    /// A matrix1d cell, addressed through its row
    #[serde(rename = "CELL")]
    Cell { row_key: String, sub_row_key: String },

    /// A whole matrix2d column
    #[serde(rename = "COLUMN")]
    Column { column_key: String },

    /// A matrix2d sub-column, addressed through its column
    #[serde(rename = "SUB_COLUMN")]
    SubColumn {
        column_key: String,
        sub_column_key: String,
    },

    /// A matrix2d sub-row, addressed through its row
    #[serde(rename = "SUB_ROW")]
    SubRow { row_key: String, sub_row_key: String },
}

impl Association {
    /// Flat option association
    #[inline]
    #[must_use]
    pub fn option(option_key: impl Into<String>) -> Self {
        Self::Option {
            option_key: option_key.into(),
        }
    }

    /// The leaf key this association selects
    ///
    /// For column associations this is the column key itself.
    #[must_use]
    pub fn leaf_key(&self) -> &str {
        match self {
            Self::Option { option_key } => option_key,
            Self::Cell { sub_row_key, .. } | Self::SubRow { sub_row_key, .. } => sub_row_key,
            Self::Column { column_key } => column_key,
            Self::SubColumn { sub_column_key, .. } => sub_column_key,
        }
    }
}
