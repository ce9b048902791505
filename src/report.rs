//! @ai:module:intent Load a Lighthouse report and expose read-only views over it
//! @ai:module:layer domain
//! @ai:module:public_api ReportDocument, Categories, Audits, CategoryEntry, AuditEntry, load_report, parse_report
//! @ai:module:depends_on error
//! @ai:module:stateless true
//!
//! Only the `categories` and `audits` sections are consumed. Entries are
//! deserialized lazily, one at a time, so a malformed entry only fails once the
//! summarizer reaches it.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Report file read by the `lighthouse-summary` binary, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "lighthouse-report-prod.json";

/// @ai:intent A top-level grading dimension such as Performance or Accessibility
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryEntry {
    #[serde(skip)]
    pub key: String,
    #[serde(default)]
    pub title: Option<Value>,
    /// Normalized to [0, 1]; `None` when absent or null.
    #[serde(default)]
    pub score: Option<f64>,
}

/// @ai:intent A single audit with a pre-formatted display value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuditEntry {
    #[serde(skip)]
    pub key: String,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default, rename = "displayValue")]
    pub display_value: Option<Value>,
}

impl AuditEntry {
    /// @ai:intent Placeholder used when the report has no audit under `key`
    pub fn missing(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }
}

/// @ai:intent Parsed report document, rooted at a JSON object
#[derive(Debug, Clone)]
pub struct ReportDocument {
    root: Map<String, Value>,
}

/// @ai:intent View over the `categories` section in source-document order
#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    entries: Option<&'a Map<String, Value>>,
}

/// @ai:intent View over the `audits` section
#[derive(Debug, Clone, Copy)]
pub struct Audits<'a> {
    entries: Option<&'a Map<String, Value>>,
}

/// @ai:intent Read and parse a report file
/// @ai:pre path points to a UTF-8 JSON file
/// @ai:effects fs:read
pub fn load_report(path: &Path) -> Result<ReportDocument> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    parse_report(&content)
}

/// @ai:intent Parse report JSON text into a document
/// @ai:effects pure
pub fn parse_report(content: &str) -> Result<ReportDocument> {
    let value: Value = serde_json::from_str(content)?;
    ReportDocument::from_value(value)
}

impl ReportDocument {
    /// @ai:intent Wrap a parsed JSON value, rejecting non-object roots
    /// @ai:effects pure
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(Error::NotAnObject {
                context: "report root".to_string(),
                found: value_kind(&other),
            }),
        }
    }

    /// @ai:intent Look up the `categories` section; absent means empty
    /// @ai:effects pure
    pub fn categories(&self) -> Result<Categories<'_>> {
        Ok(Categories {
            entries: self.section("categories")?,
        })
    }

    /// @ai:intent Look up the `audits` section; absent means empty
    /// @ai:effects pure
    pub fn audits(&self) -> Result<Audits<'_>> {
        Ok(Audits {
            entries: self.section("audits")?,
        })
    }

    fn section(&self, name: &str) -> Result<Option<&Map<String, Value>>> {
        match self.root.get(name) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(Error::NotAnObject {
                context: name.to_string(),
                found: value_kind(other),
            }),
        }
    }
}

impl<'a> Categories<'a> {
    /// @ai:intent Iterate category entries in the order they appear in the report
    /// @ai:effects pure
    pub fn iter(&self) -> impl Iterator<Item = Result<CategoryEntry>> + 'a {
        self.entries
            .into_iter()
            .flat_map(|map| map.iter())
            .map(|(key, value)| {
                let mut entry: CategoryEntry = parse_entry("categories", key, value)?;
                entry.key = key.clone();
                Ok(entry)
            })
    }

    pub fn len(&self) -> usize {
        self.entries.map(Map::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Audits<'_> {
    /// @ai:intent Look up one audit, falling back to an empty entry when absent
    /// @ai:effects pure
    pub fn get(&self, key: &str) -> Result<AuditEntry> {
        match self.entries.and_then(|map| map.get(key)) {
            None => {
                tracing::debug!("Audit {} not present in report", key);
                Ok(AuditEntry::missing(key))
            }
            Some(value) => {
                let mut entry: AuditEntry = parse_entry("audits", key, value)?;
                entry.key = key.to_string();
                Ok(entry)
            }
        }
    }
}

fn parse_entry<T: DeserializeOwned>(section: &str, key: &str, value: &Value) -> Result<T> {
    let context = format!("{}.{}", section, key);

    // Value's struct deserializer also accepts arrays positionally
    if !value.is_object() {
        return Err(Error::NotAnObject {
            context,
            found: value_kind(value),
        });
    }

    T::deserialize(value).map_err(|source| Error::Shape { context, source })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
