//! @ai:module:intent Print category scores and key metrics from a production report
//! @ai:module:layer application
//! @ai:module:public_api ReportSummarizer, summarize_document, summarize_categories, summarize_metrics
//! @ai:module:depends_on report, metrics, output, error
//!
//! Lines are written as soon as they are produced. When a step fails, the
//! lines written before it stay in the output and a single error line follows.

use crate::error::Result;
use crate::metrics::KEY_METRICS;
use crate::output::{
    format_category_line, format_error_line, format_metric_line, METRICS_HEADER, SCORES_HEADER,
};
use crate::report::{load_report, ReportDocument, DEFAULT_REPORT_PATH};
use std::io::Write;
use std::path::{Path, PathBuf};

/// @ai:intent Loads one report file and prints its summary
#[derive(Debug, Clone)]
pub struct ReportSummarizer {
    path: PathBuf,
}

impl ReportSummarizer {
    /// @ai:intent Create a summarizer for the report at `path`
    /// @ai:effects pure
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// @ai:intent Load the report and write its summary, propagating the first failure
    /// @ai:effects fs:read, io
    pub fn summarize<W: Write>(&self, out: &mut W) -> Result<()> {
        let document = load_report(&self.path)?;
        tracing::debug!("Loaded report {}", self.path.display());
        summarize_document(&document, out)
    }

    /// @ai:intent Summarize the report, rendering any failure as one error line
    /// @ai:post returns Err only when the output sink itself fails
    /// @ai:effects fs:read, io
    pub fn run<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if let Err(err) = self.summarize(out) {
            tracing::debug!("Report processing failed for {}: {}", self.path.display(), err);
            writeln!(out, "{}", format_error_line(&err))?;
        }

        out.flush()
    }
}

impl Default for ReportSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_PATH)
    }
}

/// @ai:intent Write both summary sections for an already loaded document
/// @ai:effects io
pub fn summarize_document<W: Write>(document: &ReportDocument, out: &mut W) -> Result<()> {
    summarize_categories(document, out)?;
    summarize_metrics(document, out)
}

/// @ai:intent Write the scores header and one line per scored category
/// @ai:effects io
pub fn summarize_categories<W: Write>(document: &ReportDocument, out: &mut W) -> Result<()> {
    let categories = document.categories();
    writeln!(out, "{}", SCORES_HEADER)?;

    for entry in categories?.iter() {
        let entry = entry?;
        match format_category_line(&entry) {
            Some(line) => writeln!(out, "{}", line)?,
            None => tracing::debug!("Skipping category {} without a score", entry.key),
        }
    }

    Ok(())
}

/// @ai:intent Write the metrics header and one line per key metric
/// @ai:effects io
pub fn summarize_metrics<W: Write>(document: &ReportDocument, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", METRICS_HEADER)?;

    let audits = document.audits()?;
    for metric in KEY_METRICS {
        let audit = audits.get(metric)?;
        writeln!(out, "{}", format_metric_line(&audit))?;
    }

    Ok(())
}
