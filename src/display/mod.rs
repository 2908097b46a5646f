pub mod table;

pub use table::{PageSummary, TableDisplay, render_json};
