mod render;
mod rows;

pub use render::{ReportFormat, render_json, render_plain, render_pretty, render_summary};
pub use rows::{RecordReader, RecordRow, RecordWriter, RowError};
