//! Prediction tags

use serde::{Deserialize, Serialize};

/// A label produced by an external classification service
///
/// Supplied by the prediction backend; this subsystem never creates or
/// mutates tags, it only maps them onto widget options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionTag {
    pub id: String,
    pub name: String,
}

impl PredictionTag {
    /// Wrap an externally supplied tag
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        let tag = PredictionTag::new("t1", "Protection");
        let json = serde_json::to_string(&tag).unwrap();
        let back: PredictionTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
