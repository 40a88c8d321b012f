//! Domain layer - core types and errors.
//!
//! This layer contains pure rendering models and error types
//! without any external dependencies (IO, terminal, etc.).

pub mod error;
pub mod models;
pub mod theme;

pub use error::{AppError, Result};
pub use models::{
    RenderStats, RenderedBlock, RenderedDocument, Segment, SegmentKind, StyleAttr, StyledLine,
    StyledRun, StyledText, TableCell, TableGrid,
};
pub use theme::Theme;
