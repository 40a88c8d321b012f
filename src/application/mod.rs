//! Application layer - the markdown transform and output formatting.
//!
//! This layer contains the pure rendering pipeline: fence segmentation,
//! line styling, table materialization, and output formatting.

pub mod formatter;
pub mod renderer;
pub mod segmenter;
pub mod stylist;
pub mod table;

pub use formatter::{
    format_document_json, format_grids_json, format_segments_json, format_segments_table,
    format_stats, OutputFormat,
};
pub use renderer::{render_document, RenderOptions};
pub use segmenter::segment_markdown;
pub use stylist::{style_inline, style_text, StyleOptions};
pub use table::{extract_tables, materialize_table};
