//! Submit handling
//!
//! Provides [`submit`], the validate-then-act pipeline: run the full
//! validation walk; on failure deliver the error tree and stop; on
//! success hand the validated value to the caller's action.

use crate::error_tree::ErrorTree;
use crate::schema::FormSchema;
use crate::state::FormState;
use serde_json::Value;
use tracing::debug;

/// Validate and, only if clean, run the success action
///
/// On validation failure the error tree is stored on the state and
/// passed to `on_error`; `on_valid` is never invoked. On success
/// `on_valid` receives the validated value and its result is returned.
pub fn submit<T>(
    state: &mut FormState,
    schema: &FormSchema,
    on_error: impl FnOnce(&ErrorTree),
    on_valid: impl FnOnce(&Value) -> T,
) -> Option<T> {
    let outcome = state.validate(schema);
    match outcome.error {
        Some(error) => {
            debug!(messages = error.flatten().len(), "submit blocked by validation");
            on_error(&error);
            state.set_error(error);
            None
        }
        None => {
            state.clear_error();
            Some(on_valid(&outcome.value))
        }
    }
}
