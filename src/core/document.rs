//! Document model: raw wire records and their normalized form

use serde::Deserialize;

/// Title used when a record carries none.
pub const DEFAULT_TITLE: &str = "No Title";
/// Category used when a record carries none.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A record as stored in the collection.
///
/// Every field is optional; unknown fields such as `_id` are ignored during
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Markdown body
    #[serde(default)]
    pub document: Option<String>,
    /// Code snippet
    #[serde(default)]
    pub code: Option<String>,
}

/// A fully populated document.
///
/// Normalization happens once, when the snapshot is loaded; everything
/// downstream (filter, cards, detail view) operates on these records and
/// never has to reason about absent fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub category: String,
    /// Markdown body, empty when the record had none
    pub body: String,
    /// Code snippet, empty when the record had none
    pub code: String,
}

impl Document {
    /// Normalize a raw record, filling in the display defaults.
    pub fn from_raw(raw: RawDocument) -> Self {
        Self {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            category: raw.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            body: raw.document.unwrap_or_default(),
            code: raw.code.unwrap_or_default(),
        }
    }
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_fills_defaults() {
        let doc = Document::from_raw(RawDocument::default());

        assert_eq!(doc.title, "No Title");
        assert_eq!(doc.category, "Uncategorized");
        assert_eq!(doc.body, "");
        assert_eq!(doc.code, "");
    }

    #[test]
    fn test_normalization_keeps_present_fields() {
        let doc = Document::from_raw(RawDocument {
            title: Some("Sorting".to_string()),
            category: Some("Algorithms".to_string()),
            document: Some("# Quicksort\n\nPivot and recurse.".to_string()),
            code: Some("def sort(xs): ...".to_string()),
        });

        assert_eq!(doc.title, "Sorting");
        assert_eq!(doc.category, "Algorithms");
        assert_eq!(doc.body, "# Quicksort\n\nPivot and recurse.");
        assert_eq!(doc.code, "def sort(xs): ...");
    }
}
