//! Schema errors

/// Structural violations in a framework definition
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Two widgets or options share a key within one list
    #[error("duplicate key '{key}' in {scope}")]
    DuplicateKey { scope: String, key: String },

    /// Orders are not dense (1..=n) within one list
    #[error("sparse order in {scope}: expected {expected}, found {found}")]
    SparseOrder {
        scope: String,
        expected: u32,
        found: u32,
    },

    /// A conditional widget references an embedded key that does not exist
    #[error("conditional widget '{widget}' defaults to unknown embedded key '{key}'")]
    UnknownEmbeddedKey { widget: String, key: String },

    /// A limit from configuration was exceeded
    #[error("{scope} exceeds limit: {actual} > {limit}")]
    LimitExceeded {
        scope: String,
        actual: usize,
        limit: usize,
    },
}
