//! Query layer over the Data Privacy Act of 2012 (Republic Act No. 10173)
//! statute knowledge base.
//!
//! The knowledge base is built offline and persisted as a single JSON
//! document (see [`schema::KnowledgeDocument`]). It is loaded once at startup
//! and read-only afterwards; analyses share the handle behind an `Arc` and
//! need no synchronization. A missing or corrupt backing file is non-fatal:
//! [`KnowledgeBase::load_or_empty`] yields an empty knowledge base whose
//! queries all degrade to empty results.

pub mod schema;
pub mod search;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use schema::{
    Definition, KnowledgeDocument, NpcFunction, Penalty, ProcessingPrinciple, RuleSet, Section,
    SubjectRight,
};
pub use search::SearchHit;

/// Max characters of section content quoted in a violation's `dpa_reference`.
const EXCERPT_LEN: usize = 200;

/// Max characters of the first sentence used in section summaries.
const SUMMARY_LEN: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge base file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse knowledge base document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Store counts and provenance, for diagnostics endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KbStats {
    pub total_sections: usize,
    pub definitions: usize,
    pub penalty_sections: usize,
    pub data_subject_rights: usize,
    pub npc_functions: usize,
    pub processing_principles: usize,
    pub compliance_rule_sets: usize,
    pub search_index_terms: usize,
    pub source: String,
    pub last_updated: String,
}

/// Immutable, in-memory statute knowledge base.
pub struct KnowledgeBase {
    doc: KnowledgeDocument,
    empty_section: Section,
}

impl KnowledgeBase {
    /// Strict loader. Prefer [`KnowledgeBase::load_or_empty`] in engine
    /// initialization paths, which must not fail.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let raw = std::fs::read_to_string(path)?;
        let doc: KnowledgeDocument = serde_json::from_str(&raw)?;
        Ok(Self::from_document(doc))
    }

    /// Load the knowledge base, degrading to an empty one if the backing
    /// file is missing or unreadable. Never fails.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::open(path.as_ref()) {
            Ok(kb) => {
                tracing::info!(
                    "Loaded DPA knowledge base with {} sections",
                    kb.doc.sections.len()
                );
                kb
            }
            Err(err) => {
                tracing::warn!(
                    "Knowledge base unavailable at {}: {}; continuing with empty knowledge base",
                    path.as_ref().display(),
                    err
                );
                Self::empty()
            }
        }
    }

    pub fn from_document(doc: KnowledgeDocument) -> Self {
        Self {
            doc,
            empty_section: Section::default(),
        }
    }

    pub fn empty() -> Self {
        Self::from_document(KnowledgeDocument::default())
    }

    pub fn is_empty(&self) -> bool {
        self.doc.sections.is_empty()
    }

    /// Exact-key section lookup. Unknown ids return the empty sentinel
    /// section, never an error.
    pub fn section(&self, id: &str) -> &Section {
        self.doc.sections.get(id).unwrap_or(&self.empty_section)
    }

    /// Substring-tolerant definition lookup: a query matches if it is a
    /// substring of an indexed key or contains one.
    pub fn definition(&self, term: &str) -> Option<&Definition> {
        let term = term.to_lowercase();
        self.doc
            .definitions
            .iter()
            .find(|(key, _)| key.contains(&term) || term.contains(key.as_str()))
            .map(|(_, definition)| definition)
    }

    pub fn penalty(&self, id: &str) -> Option<&Penalty> {
        self.doc.penalties.get(id)
    }

    pub fn data_subject_rights(&self) -> &BTreeMap<String, SubjectRight> {
        &self.doc.data_subject_rights
    }

    pub fn npc_functions(&self) -> &BTreeMap<String, NpcFunction> {
        &self.doc.npc_functions
    }

    pub fn processing_principles(&self) -> &BTreeMap<String, ProcessingPrinciple> {
        &self.doc.processing_principles
    }

    pub fn compliance_rules(&self, id: &str) -> Option<&RuleSet> {
        self.doc.compliance_rules.get(id)
    }

    /// First sentence of a section's content, truncated for embedding in
    /// violation details.
    pub fn section_summary(&self, id: &str) -> String {
        let content = &self.section(id).content;
        if content.is_empty() {
            return "Section content not available".to_string();
        }
        let first_sentence = content.split(". ").next().unwrap_or(content);
        format!("{}...", truncate_chars(first_sentence, SUMMARY_LEN))
    }

    /// Truncated excerpt of a section's content, quoted in violations so the
    /// report is self-documenting without a second knowledge-base query.
    pub fn excerpt(&self, id: &str) -> String {
        format!("{}...", truncate_chars(&self.section(id).content, EXCERPT_LEN))
    }

    /// Ranked keyword search over sections. Ranking: term frequency in
    /// content, title matches weighted 2x, ties broken by ascending section
    /// id.
    pub fn search(&self, keyword: &str, limit: usize) -> Vec<SearchHit> {
        search::search_sections(&self.doc.sections, keyword, limit)
    }

    pub fn stats(&self) -> KbStats {
        KbStats {
            total_sections: self.doc.sections.len(),
            definitions: self.doc.definitions.len(),
            penalty_sections: self.doc.penalties.len(),
            data_subject_rights: self.doc.data_subject_rights.len(),
            npc_functions: self.doc.npc_functions.len(),
            processing_principles: self.doc.processing_principles.len(),
            compliance_rule_sets: self.doc.compliance_rules.len(),
            search_index_terms: self.doc.search_index.len(),
            source: self.doc.metadata.source.clone(),
            last_updated: if self.doc.metadata.processed_date.is_empty() {
                "Unknown".to_string()
            } else {
                self.doc.metadata.processed_date.clone()
            },
        }
    }
}

/// Truncate to at most `max` characters without splitting a UTF-8 boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
