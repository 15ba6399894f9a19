//! Output formatting for CLI display.
//!
//! Backand objects are schemaless, so rendering works on raw JSON: a list
//! payload becomes a table with one column per key, anything else is printed
//! as pretty JSON.

use serde_json::Value;
use tabled::builder::Builder;

use crate::pagination::PageParams;

/// Render a payload for terminal display.
///
/// Returns a table when `json` is false and the payload has a `data` array
/// of objects; otherwise pretty-printed JSON.
pub fn render(payload: &Value, json: bool) -> String {
    if !json {
        if let Some(table) = render_table(payload) {
            return table;
        }
    }
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

/// Render a list payload with a page footer.
pub fn render_page(payload: &Value, params: PageParams, json: bool) -> String {
    let body = render(payload, json);
    if json {
        return body;
    }

    let footer = match payload.get("totalRows").and_then(Value::as_u64) {
        Some(total) => {
            let size = u64::from(params.page_size.max(1));
            let total_pages = total.div_ceil(size);
            format!(
                "Page {}/{} ({} total items)",
                params.page_number, total_pages, total
            )
        }
        None => format!("Page {}", params.page_number),
    };
    format!("{body}\n\n{footer}")
}

fn render_table(payload: &Value) -> Option<String> {
    let rows = payload.get("data")?.as_array()?;
    if rows.is_empty() || !rows.iter().all(Value::is_object) {
        return None;
    }

    // Columns in first-seen order across all rows
    let mut columns: Vec<&str> = Vec::new();
    for row in rows.iter().filter_map(Value::as_object) {
        for key in row.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.to_string()));
    for row in rows {
        builder.push_record(columns.iter().map(|c| cell(row.get(*c))));
    }
    Some(builder.build().to_string())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
