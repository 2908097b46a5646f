use crate::core::resource::Column;
use crate::error::AppError;
use crate::map_serialization_error;
use crate::utils::text::{truncate_text_unicode, value_to_cell};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;
use serde::Serialize;
use serde_json::Value;

/// Widest a single cell may get before it is truncated
const MAX_CELL_WIDTH: usize = 48;

/// Position of the displayed page within the whole result set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSummary {
    pub shown: usize,
    pub total: u64,
    pub page: u32,
    pub total_pages: u64,
}

/// Formatter for resource tables
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        // Leave room for borders and padding
        let width = self.max_width.unwrap_or(80);
        table.set_width(width.saturating_sub(6).max(40) as u16);
        table
    }

    fn header_cell(&self, label: &str) -> Cell {
        if self.use_colors {
            Cell::new(label).add_attribute(Attribute::Bold).fg(Color::Cyan)
        } else {
            Cell::new(label)
        }
    }

    /// One row per record, one column per binding column.
    pub fn render_records<T: Serialize>(
        &self,
        columns: &[Column],
        records: &[T],
    ) -> Result<String, AppError> {
        let mut table = self.new_table();
        table.set_header(columns.iter().map(|c| self.header_cell(c.header)));

        for record in records {
            let value = map_serialization_error!(serde_json::to_value(record), "record")?;
            table.add_row(columns.iter().enumerate().map(|(i, column)| {
                let text = truncate_text_unicode(
                    &value_to_cell(value.get(column.field)),
                    MAX_CELL_WIDTH,
                );
                if i == 0 && self.use_colors {
                    Cell::new(text).fg(Color::Cyan)
                } else {
                    Cell::new(text)
                }
            }));
        }

        Ok(table.to_string())
    }

    /// Field/value table for a single record, fields sorted by key.
    pub fn render_record<T: Serialize>(&self, record: &T) -> Result<String, AppError> {
        let value = map_serialization_error!(serde_json::to_value(record), "record")?;
        let mut table = self.new_table();
        table.set_header(vec![self.header_cell("Field"), self.header_cell("Value")]);

        match value {
            Value::Object(fields) => {
                for (key, field) in fields.iter() {
                    table.add_row(vec![Cell::new(key), Cell::new(value_to_cell(Some(field)))]);
                }
            }
            other => {
                table.add_row(vec![Cell::new("value"), Cell::new(value_to_cell(Some(&other)))]);
            }
        }

        Ok(table.to_string())
    }

    pub fn render_summary(&self, label: &str, summary: &PageSummary) -> String {
        if summary.total == 0 {
            return format!("No {} found", label);
        }
        format!(
            "Showing {} of {} {} (page {} of {})",
            summary.shown,
            summary.total,
            label,
            summary.page,
            summary.total_pages.max(1)
        )
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty JSON for `--format json`
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(map_serialization_error!(
        serde_json::to_string_pretty(value),
        "JSON output"
    )?)
}
