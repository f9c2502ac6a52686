//! Persisted form of the statute knowledge base.
//!
//! One JSON document keyed by section-number strings, produced offline by the
//! knowledge-base builder. Maps are `BTreeMap` so iteration order is
//! deterministic. Every top-level key is defaulted: a partial document loads
//! with the missing stores empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Provenance of the knowledge document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KbMetadata {
    pub source: String,
    pub processed_date: String,
    pub total_sections: usize,
    pub total_characters: usize,
}

/// One statutory section, keyed by its section number (e.g. `"12"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
    /// Short rule-summary strings derived from the section text.
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A defined term, keyed by its lowercase form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Original casing of the term.
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub section: String,
}

/// Penalty provisions for a section (Sections 25-36 of the Act).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub title: String,
    /// Fine amounts in statutory order.
    #[serde(default)]
    pub fines: Vec<String>,
    /// Imprisonment terms in statutory order.
    #[serde(default)]
    pub imprisonment: Vec<String>,
}

/// A data subject right (Section 16), keyed by its subsection letter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectRight {
    pub letter: String,
    pub description: String,
    #[serde(default)]
    pub full_content: String,
    #[serde(default)]
    pub section: String,
}

/// A function of the National Privacy Commission (Section 7).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NpcFunction {
    pub letter: String,
    pub description: String,
    #[serde(default)]
    pub full_content: String,
    #[serde(default)]
    pub section: String,
}

/// A general processing principle (Section 11).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingPrinciple {
    pub letter: String,
    pub content: String,
    #[serde(default)]
    pub section: String,
}

/// Compliance-rule summaries generated per key section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub section_name: String,
    #[serde(default)]
    pub rules: Vec<String>,
}

/// One entry of the inverted search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IndexEntry {
    Section { section: String, title: String },
    Definition { term: String, definition: String },
}

/// The complete persisted knowledge document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeDocument {
    pub metadata: KbMetadata,
    pub sections: BTreeMap<String, Section>,
    pub definitions: BTreeMap<String, Definition>,
    pub penalties: BTreeMap<String, Penalty>,
    pub data_subject_rights: BTreeMap<String, SubjectRight>,
    pub npc_functions: BTreeMap<String, NpcFunction>,
    pub processing_principles: BTreeMap<String, ProcessingPrinciple>,
    pub compliance_rules: BTreeMap<String, RuleSet>,
    pub search_index: BTreeMap<String, Vec<IndexEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_loads_with_empty_stores() {
        let doc: KnowledgeDocument = serde_json::from_str(
            r#"{"sections": {"12": {"title": "Criteria for Lawful Processing", "content": "..."}}}"#,
        )
        .unwrap();
        assert_eq!(doc.sections.len(), 1);
        assert!(doc.definitions.is_empty());
        assert!(doc.search_index.is_empty());
    }

    #[test]
    fn index_entry_tagged_form() {
        let entry: IndexEntry = serde_json::from_str(
            r#"{"type": "section", "section": "20", "title": "Security of Personal Information"}"#,
        )
        .unwrap();
        assert_eq!(
            entry,
            IndexEntry::Section {
                section: "20".to_string(),
                title: "Security of Personal Information".to_string(),
            }
        );

        let def: IndexEntry = serde_json::from_str(
            r#"{"type": "definition", "term": "Consent", "definition": "Any freely given..."}"#,
        )
        .unwrap();
        assert!(matches!(def, IndexEntry::Definition { .. }));
    }
}
