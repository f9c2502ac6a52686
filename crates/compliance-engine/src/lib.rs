//! Data Privacy Act compliance analysis engine.
//!
//! Assesses free text plus a list of detected sensitive items against the
//! statute knowledge base and produces a deterministic, explainable verdict:
//! violations, a risk level, and prioritized remediation actions. An optional
//! secondary analyzer (an external model) can contribute a second opinion,
//! which is reconciled into the baseline without double-counting.
//!
//! The engine never fails the caller: a missing knowledge base, a malformed
//! secondary result, or empty input all resolve to a complete, well-formed
//! report.

pub mod patterns;
pub mod reconcile;
pub mod recommend;
pub mod report;
pub mod risk;
pub mod rules;
pub mod signals;

use std::sync::Arc;

use dpa_knowledge::KnowledgeBase;
use shared_types::{ComplianceReport, DetectedItem, ReportSummary, SecondaryAnalysis};

pub use report::summarize;

/// The external-model collaborator seam. Implementations are expected to be
/// slow and fallible; the engine makes at most one attempt per analysis and
/// falls back to the baseline result on error.
pub trait SecondaryAnalyzer {
    fn analyze(&self, text: &str, items: &[DetectedItem]) -> anyhow::Result<SecondaryAnalysis>;
}

/// Compliance analysis engine. Stateless across requests; the knowledge base
/// is shared, immutable, and safe for unsynchronized concurrent reads.
pub struct ComplianceEngine {
    kb: Arc<KnowledgeBase>,
}

impl ComplianceEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Rule-based baseline analysis. Never fails; empty text and an empty
    /// item list produce a LOW-risk, COMPLIANT report.
    pub fn analyze(
        &self,
        text: &str,
        items: &[DetectedItem],
        document_name: &str,
    ) -> ComplianceReport {
        let pii = signals::categorize_items(items);
        let text_signals = patterns::extract_signals(text);
        let violations = rules::check_violations(&self.kb, &pii, &text_signals);
        let risk_level = risk::assess_risk_level(&violations, &pii);
        let recommendations = recommend::generate_recommendations(&violations, &pii);

        tracing::debug!(
            "Analyzed {}: {} items ({} sensitive), {} violations, risk {:?}",
            document_name,
            pii.total_count,
            pii.sensitive_count,
            violations.len(),
            risk_level
        );

        report::assemble(document_name, pii, violations, recommendations, risk_level)
    }

    /// Baseline analysis enhanced with a secondary opinion. The analyzer is
    /// untrusted: its failure leaves the baseline untouched apart from an
    /// informational metadata note.
    pub fn analyze_with(
        &self,
        text: &str,
        items: &[DetectedItem],
        document_name: &str,
        analyzer: &dyn SecondaryAnalyzer,
    ) -> ComplianceReport {
        let baseline = self.analyze(text, items, document_name);

        match analyzer.analyze(text, items) {
            Ok(secondary) => reconcile::reconcile(baseline, secondary),
            Err(err) => {
                tracing::warn!(
                    "Secondary analysis failed for {}; keeping baseline result: {}",
                    document_name,
                    err
                );
                let mut fallback = baseline;
                fallback
                    .metadata
                    .notes
                    .push(format!("secondary analysis unavailable: {err}"));
                fallback
            }
        }
    }

    /// Baseline analysis merged with an already-produced secondary result,
    /// for callers that obtained the second opinion themselves.
    pub fn analyze_with_result(
        &self,
        text: &str,
        items: &[DetectedItem],
        document_name: &str,
        secondary: SecondaryAnalysis,
    ) -> ComplianceReport {
        let baseline = self.analyze(text, items, document_name);
        reconcile::reconcile(baseline, secondary)
    }

    pub fn summarize(&self, report: &ComplianceReport) -> ReportSummary {
        report::summarize(report)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::{ComplianceStatus, RiskLevel};

    fn items(regular: usize, sensitive: usize) -> Vec<DetectedItem> {
        let regular_iter = (0..regular).map(|i| DetectedItem {
            entity_type: "PERSON".to_string(),
            text: format!("Person {i}"),
            start: 0,
            end: 8,
            confidence: 0.9,
            is_sensitive: false,
        });
        let sensitive_iter = (0..sensitive).map(|i| DetectedItem {
            entity_type: "HEALTH_INFO".to_string(),
            text: format!("condition {i}"),
            start: 0,
            end: 11,
            confidence: 0.8,
            is_sensitive: true,
        });
        regular_iter.chain(sensitive_iter).collect()
    }

    proptest! {
        /// The status/violations invariant holds for arbitrary inputs.
        #[test]
        fn status_iff_violations(
            text in "\\PC{0,200}",
            regular in 0usize..15,
            sensitive in 0usize..5,
        ) {
            let engine = ComplianceEngine::new(std::sync::Arc::new(
                dpa_knowledge::KnowledgeBase::empty(),
            ));
            let report = engine.analyze(&text, &items(regular, sensitive), "doc");
            prop_assert_eq!(
                report.compliance_status == ComplianceStatus::NonCompliant,
                !report.violations.is_empty()
            );
        }

        /// Growing the sensitive-item count never lowers the risk level.
        #[test]
        fn risk_monotone_in_sensitive_items(
            sensitive in 0usize..10,
        ) {
            let engine = ComplianceEngine::new(std::sync::Arc::new(
                dpa_knowledge::KnowledgeBase::empty(),
            ));
            let text = "Reference list.";
            let smaller = engine.analyze(text, &items(0, sensitive), "doc");
            let larger = engine.analyze(text, &items(0, sensitive + 1), "doc");
            prop_assert!(larger.risk_level >= smaller.risk_level);
            prop_assert!(smaller.risk_level >= RiskLevel::Low);
        }

        /// The engine never panics on arbitrary text.
        #[test]
        fn analyze_never_panics(text in "\\PC{0,400}") {
            let engine = ComplianceEngine::new(std::sync::Arc::new(
                dpa_knowledge::KnowledgeBase::empty(),
            ));
            let _ = engine.analyze(&text, &[], "doc");
        }
    }
}
