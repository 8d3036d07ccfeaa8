//! Display projections
//!
//! Read-only rendering path: [`display_value`] derives the human
//! string for an attribute value (option label lookups, organigram
//! paths, formatted dates) instead of the editable control. A pure
//! projection with no side effects; unknown keys fall back to the raw
//! key rather than erroring.

use crate::options_repo::{OptionsRepository, GEO_AREAS};
use tagframe_schema::{AttributeData, Widget, WidgetProperties};

/// Human-readable projection of an attribute value
///
/// Shape mismatches between widget and value project to an empty
/// string; missing labels fall back to the raw key.
#[must_use]
pub fn display_value(widget: &Widget, data: &AttributeData, repo: &OptionsRepository) -> String {
    use AttributeData as D;

    match (&widget.properties, data) {
        (WidgetProperties::Text(_), D::Text(s)) => s.clone(),
        (WidgetProperties::Number(_), D::Number(n)) => n.to_string(),
        (WidgetProperties::Date, D::Date(d)) => d.to_string(),
        (WidgetProperties::Time, D::Time(t)) => t.format("%H:%M").to_string(),
        (WidgetProperties::DateRange, D::DateRange(r)) => {
            format!("{} to {}", r.start_date, r.end_date)
        }
        (WidgetProperties::TimeRange, D::TimeRange(r)) => format!(
            "{} to {}",
            r.start_time.format("%H:%M"),
            r.end_time.format("%H:%M")
        ),

        (WidgetProperties::Scale(p), D::Scale(key)) => p
            .options
            .iter()
            .find(|o| &o.key == key)
            .map_or_else(|| key.clone(), |o| o.label.clone()),
        (WidgetProperties::SingleSelect(p), D::SingleSelect(key)) => option_label(&p.options, key),
        (WidgetProperties::MultiSelect(p), D::MultiSelect(keys)) => keys
            .iter()
            .map(|key| option_label(&p.options, key))
            .collect::<Vec<_>>()
            .join(", "),

        (WidgetProperties::Organigram(p), D::Organigram(keys)) => keys
            .iter()
            .map(|key| {
                p.options
                    .as_ref()
                    .and_then(|root| root.label_path(key))
                    .map_or_else(|| key.clone(), |path| path.join("/"))
            })
            .collect::<Vec<_>>()
            .join(", "),

        (WidgetProperties::Geo(_), D::Geo(keys)) => keys
            .iter()
            .map(|key| repo.label(GEO_AREAS, key).unwrap_or_else(|| key.clone()))
            .collect::<Vec<_>>()
            .join(", "),

        (WidgetProperties::Matrix1d(p), D::Matrix1d(rows)) => {
            let mut parts = Vec::new();
            for (row_key, cells) in rows {
                let row = p.rows.iter().find(|r| &r.key == row_key);
                for (cell_key, selected) in cells {
                    if !selected {
                        continue;
                    }
                    let row_label = row.map_or(row_key.as_str(), |r| r.label.as_str());
                    let cell_label = row
                        .and_then(|r| r.cells.iter().find(|c| &c.key == cell_key))
                        .map_or(cell_key.as_str(), |c| c.label.as_str());
                    parts.push(format!("{row_label} / {cell_label}"));
                }
            }
            parts.join(", ")
        }

        (WidgetProperties::Matrix2d(p), D::Matrix2d(rows)) => {
            let mut parts = Vec::new();
            for (row_key, sub_rows) in rows {
                let row = p.rows.iter().find(|r| &r.key == row_key);
                for sub_row_key in sub_rows.keys() {
                    let row_label = row.map_or(row_key.as_str(), |r| r.label.as_str());
                    let sub_row_label = row
                        .and_then(|r| r.sub_rows.iter().find(|s| &s.key == sub_row_key))
                        .map_or(sub_row_key.as_str(), |s| s.label.as_str());
                    parts.push(format!("{row_label} / {sub_row_label}"));
                }
            }
            parts.join(", ")
        }

        _ => String::new(),
    }
}

fn option_label(options: &[tagframe_schema::ChoiceOption], key: &str) -> String {
    options
        .iter()
        .find(|o| o.key == key)
        .map_or_else(|| key.to_string(), |o| o.label.clone())
}
