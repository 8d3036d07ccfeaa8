//! Framework validation
//!
//! Full validation of a framework definition: structural invariants
//! from the schema layer, configured limits, and resolvability of
//! conditional widget references.

use crate::config::CoreConfig;
use crate::error::CoreError;
use tagframe_schema::{Framework, SchemaError, Widget, WidgetProperties};
use tracing::debug;

/// Validate a framework against structure and configured limits
///
/// Structural checks are the schema layer's (key uniqueness, dense
/// orders); with `strict_order_check` off, orders are normalized on a
/// scratch copy first so only genuine duplicate keys fail. Limits come
/// from [`CoreConfig`]; conditional widgets must reference embedded
/// keys that exist.
///
/// # Errors
/// The first violation found.
pub fn validate_framework(framework: &Framework, config: &CoreConfig) -> Result<(), CoreError> {
    debug!(
        sections = framework.primary.len(),
        widgets = framework.widget_count(),
        "validating framework"
    );

    if config.strict_order_check {
        framework.validate()?;
    } else {
        let mut relaxed = framework.clone();
        relaxed.normalize_orders();
        relaxed.validate()?;
    }

    if framework.primary.len() > config.max_sections {
        return Err(SchemaError::LimitExceeded {
            scope: "sections".to_string(),
            actual: framework.primary.len(),
            limit: config.max_sections,
        }
        .into());
    }
    for section in &framework.primary {
        check_title(&section.title, &format!("section '{}'", section.title), config)?;
        if section.widgets.len() > config.max_widgets_per_list {
            return Err(SchemaError::LimitExceeded {
                scope: format!("section '{}' widgets", section.title),
                actual: section.widgets.len(),
                limit: config.max_widgets_per_list,
            }
            .into());
        }
    }
    if framework.secondary.len() > config.max_widgets_per_list {
        return Err(SchemaError::LimitExceeded {
            scope: "secondary widgets".to_string(),
            actual: framework.secondary.len(),
            limit: config.max_widgets_per_list,
        }
        .into());
    }

    for widget in framework.widgets() {
        check_title(&widget.title, &format!("widget '{}'", widget.key), config)?;
        check_conditional(widget)?;
    }

    Ok(())
}

fn check_title(title: &str, scope: &str, config: &CoreConfig) -> Result<(), CoreError> {
    let len = title.chars().count();
    if len < config.title_min_len {
        return Err(CoreError::EmptyTitle(scope.to_string()));
    }
    if len > config.title_max_len {
        return Err(SchemaError::LimitExceeded {
            scope: format!("{scope} title"),
            actual: len,
            limit: config.title_max_len,
        }
        .into());
    }
    Ok(())
}

fn check_conditional(widget: &Widget) -> Result<(), CoreError> {
    let WidgetProperties::Conditional(p) = &widget.properties else {
        return Ok(());
    };

    let mut seen = std::collections::HashSet::new();
    for embedded in &p.widgets {
        if !seen.insert(embedded.key.as_str()) {
            return Err(SchemaError::DuplicateKey {
                scope: format!("conditional widget '{}'", widget.key),
                key: embedded.key.clone(),
            }
            .into());
        }
    }
    if let Some(default_key) = &p.default_widget_key {
        if !p.widgets.iter().any(|w| &w.key == default_key) {
            return Err(SchemaError::UnknownEmbeddedKey {
                widget: widget.key.clone(),
                key: default_key.clone(),
            }
            .into());
        }
    }
    Ok(())
}
