//! The rendering seam: turning snapshot rows into document bytes.
//!
//! Document generation belongs to dedicated libraries; the ledger core only
//! promises a renderer a stable, consistent row set. Production deployments
//! plug a document backend in behind [`ReportRenderer`];
//! [`PlainTextRenderer`] is the built-in development and test
//! implementation.

use core::str::FromStr;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockyard_core::DomainError;

use crate::snapshot::ReportRow;

/// Title line carried by every stock report, whatever the format.
pub const REPORT_TITLE: &str = "Warehouse stock on hand";

/// Requested report output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Word,
    Excel,
}

impl ReportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ReportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Download filename served with the report.
    pub fn file_name(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "Report.pdf",
            ReportFormat::Word => "Report.docx",
            ReportFormat::Excel => "Report.xlsx",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ReportFormat::Pdf),
            "word" => Ok(ReportFormat::Word),
            "excel" => Ok(ReportFormat::Excel),
            other => Err(DomainError::invalid_argument(format!(
                "unknown report format '{other}' (expected pdf, word or excel)"
            ))),
        }
    }
}

/// Rendering failure, reported distinctly from domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("renderer does not support {0:?} output")]
    Unsupported(ReportFormat),
    #[error("rendering failed: {0}")]
    Failed(String),
}

/// Turns one snapshot into document bytes for the requested format.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, format: ReportFormat, rows: &[ReportRow]) -> Result<Vec<u8>, RenderError>;
}

/// Tab-separated text stand-in for the real document backends.
///
/// It honours the renderer contract for every format so the HTTP surface and
/// the tests can exercise the full report path without a document library.
#[derive(Debug, Default, Clone)]
pub struct PlainTextRenderer;

impl ReportRenderer for PlainTextRenderer {
    fn render(&self, _format: ReportFormat, rows: &[ReportRow]) -> Result<Vec<u8>, RenderError> {
        let mut out = String::new();
        let _ = writeln!(out, "{REPORT_TITLE}");
        let _ = writeln!(out, "id\tname\tquantity");
        for row in rows {
            let _ = writeln!(out, "{}\t{}\t{}", row.id, row.name, row.quantity);
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockyard_core::ItemId;

    #[test]
    fn format_parsing_round_trips_the_three_formats() {
        assert_eq!("pdf".parse::<ReportFormat>().unwrap(), ReportFormat::Pdf);
        assert_eq!("word".parse::<ReportFormat>().unwrap(), ReportFormat::Word);
        assert_eq!("excel".parse::<ReportFormat>().unwrap(), ReportFormat::Excel);
    }

    #[test]
    fn unknown_format_is_invalid_argument() {
        let err = "csv".parse::<ReportFormat>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn plain_text_renderer_emits_every_row() {
        let rows = vec![
            ReportRow {
                id: ItemId::new(1),
                name: "Widget".to_string(),
                quantity: 10,
            },
            ReportRow {
                id: ItemId::new(2),
                name: "Gadget".to_string(),
                quantity: 0,
            },
        ];

        let bytes = PlainTextRenderer.render(ReportFormat::Excel, &rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("1\tWidget\t10"));
        assert!(text.contains("2\tGadget\t0"));
    }
}
