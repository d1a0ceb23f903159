//! `stockyard-reports` — report snapshots and the rendering seam.
//!
//! The snapshot builder projects the catalog into rows; turning rows into
//! PDF/DOCX/XLSX bytes is an external concern behind [`ReportRenderer`].

pub mod render;
pub mod snapshot;

pub use render::{PlainTextRenderer, RenderError, ReportFormat, ReportRenderer};
pub use snapshot::{ReportRow, SnapshotBuilder};
