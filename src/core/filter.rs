//! In-memory search over the document snapshot
//!
//! The filter is a pure function over the immutable snapshot: given the full
//! document list and a query, it yields the ordered subsequence whose title,
//! category, or body contains the query, compared case-insensitively. The
//! code snippet is not searched.

use super::document::Document;

/// Check one document against an already-lowercased query.
pub fn document_matches(doc: &Document, needle_lower: &str) -> bool {
    doc.title.to_lowercase().contains(needle_lower)
        || doc.category.to_lowercase().contains(needle_lower)
        || doc.body.to_lowercase().contains(needle_lower)
}

/// Filter the document list by a case-insensitive substring query.
///
/// Returns references in their original relative order. An empty query
/// returns the full list unchanged.
pub fn filter_documents<'a>(docs: &'a [Document], query: &str) -> Vec<&'a Document> {
    if query.is_empty() {
        return docs.iter().collect();
    }

    let needle = query.to_lowercase();
    docs.iter()
        .filter(|doc| document_matches(doc, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, category: &str, body: &str) -> Document {
        Document {
            title: title.to_string(),
            category: category.to_string(),
            body: body.to_string(),
            code: String::new(),
        }
    }

    fn sample() -> Vec<Document> {
        vec![
            doc("Sorting", "Algorithms", "Comparison sorts and friends."),
            doc("Map", "Data Structures", "Key-value lookup."),
        ]
    }

    #[test]
    fn test_empty_query_returns_all() {
        let docs = sample();
        let result = filter_documents(&docs, "");
        assert_eq!(result.len(), docs.len());
        assert_eq!(result[0], &docs[0]);
        assert_eq!(result[1], &docs[1]);
    }

    #[test]
    fn test_matches_title() {
        let docs = sample();
        let result = filter_documents(&docs, "map");
        assert_eq!(result, vec![&docs[1]]);
    }

    #[test]
    fn test_matches_category() {
        let docs = sample();
        let result = filter_documents(&docs, "algorithms");
        assert_eq!(result, vec![&docs[0]]);
    }

    #[test]
    fn test_matches_body() {
        let docs = sample();
        let result = filter_documents(&docs, "key-value");
        assert_eq!(result, vec![&docs[1]]);
    }

    #[test]
    fn test_case_insensitive() {
        let docs = sample();
        assert_eq!(filter_documents(&docs, "SORTING"), vec![&docs[0]]);
        assert_eq!(filter_documents(&docs, "dAtA structures"), vec![&docs[1]]);
    }

    #[test]
    fn test_code_is_not_searched() {
        let docs = vec![Document {
            title: "Intro".to_string(),
            category: "General".to_string(),
            body: String::new(),
            code: "fn needle() {}".to_string(),
        }];
        assert!(filter_documents(&docs, "needle").is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let docs = vec![
            doc("Alpha sort", "A", ""),
            doc("Beta", "B", "sort stability"),
            doc("Gamma sort", "C", ""),
        ];
        let result = filter_documents(&docs, "sort");
        assert_eq!(result, vec![&docs[0], &docs[1], &docs[2]]);
    }

    #[test]
    fn test_idempotent() {
        let docs = sample();
        let once: Vec<Document> = filter_documents(&docs, "map")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_documents(&once, "map");
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(&once).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_empty_set() {
        let docs: Vec<Document> = Vec::new();
        assert!(filter_documents(&docs, "anything").is_empty());
        assert!(filter_documents(&docs, "").is_empty());
    }

    #[test]
    fn test_no_match() {
        let docs = sample();
        assert!(filter_documents(&docs, "does-not-exist").is_empty());
    }
}
