//! @ai:module:intent Summarize production Lighthouse reports as plain text
//! @ai:module:layer infrastructure
//! @ai:module:public_api error, metrics, output, report, summarizer
//! @ai:module:stateless true
//!
//! # Lighthouse Summary
//!
//! Reads a Lighthouse JSON report and prints the category scores followed by
//! five key timing and layout metrics.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lighthouse_summary::ReportSummarizer;
//!
//! let summarizer = ReportSummarizer::new("lighthouse-report-prod.json");
//! summarizer.run(&mut std::io::stdout()).unwrap();
//! ```

pub mod error;
pub mod metrics;
pub mod output;
pub mod report;
pub mod summarizer;

pub use error::{Error, Result};
pub use metrics::KEY_METRICS;
pub use output::{format_category_line, format_error_line, format_metric_line};
pub use report::{load_report, parse_report, AuditEntry, CategoryEntry, ReportDocument, DEFAULT_REPORT_PATH};
pub use summarizer::{summarize_document, ReportSummarizer};
