//! Merge of a secondary (external-model) analysis into the baseline result.
//!
//! The secondary result is untrusted input, never ground truth: its
//! violations and recommendations are appended only when no baseline
//! counterpart exists, its risk opinion can only raise the merged risk level,
//! and its narrative insights are carried through verbatim without touching
//! the verdict. Baseline entries always precede merged secondary ones and
//! are never edited.

use shared_types::{
    AnalysisType, ComplianceReport, ComplianceStatus, Recommendation, SecondaryAnalysis,
    SecondaryRecommendation, SecondaryViolation, Source, Violation,
};

use crate::report::RECOMMENDATION_DISPLAY_CAP;

/// Confidence assigned to secondary violations that carry none.
const DEFAULT_SECONDARY_CONFIDENCE: f64 = 0.8;

pub fn reconcile(baseline: ComplianceReport, secondary: SecondaryAnalysis) -> ComplianceReport {
    let mut merged = baseline;

    for candidate in &secondary.violations {
        if !is_duplicate_violation(candidate, &merged.violations) {
            merged.violations.push(convert_violation(candidate));
        }
    }

    for candidate in &secondary.recommendations {
        if !is_duplicate_recommendation(candidate, &merged.recommendations) {
            merged.recommendations.push(convert_recommendation(candidate));
        }
    }
    merged.recommendations.truncate(RECOMMENDATION_DISPLAY_CAP);

    // Risk only ever goes up: the higher of the two opinions wins.
    merged.risk_level = merged
        .risk_level
        .max(secondary.risk_assessment.overall_risk);

    // Status is recomputed from the merged list, never inherited.
    merged.compliance_status = if merged.violations.is_empty() {
        ComplianceStatus::Compliant
    } else {
        ComplianceStatus::NonCompliant
    };

    merged.external_insights = Some(secondary.insights);
    merged.metadata.analysis_type = AnalysisType::Reconciled;

    merged
}

/// A secondary violation duplicates a baseline one when both the section
/// labels and the violation types substring-contain each other,
/// case-insensitively. Known-approximate heuristic, kept for parity with the
/// shipped behavior.
fn is_duplicate_violation(candidate: &SecondaryViolation, existing: &[Violation]) -> bool {
    existing.iter().any(|v| {
        contains_either(&candidate.section, &v.section)
            && contains_either(&candidate.violation_type, &v.violation_type)
    })
}

/// Recommendations dedup on action text with the same containment rule.
fn is_duplicate_recommendation(
    candidate: &SecondaryRecommendation,
    existing: &[Recommendation],
) -> bool {
    existing
        .iter()
        .any(|r| contains_either(&candidate.action, &r.action))
}

fn contains_either(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

fn convert_violation(candidate: &SecondaryViolation) -> Violation {
    let section = if candidate.section.is_empty() {
        "AI-Detected".to_string()
    } else {
        candidate.section.clone()
    };
    Violation {
        title: section.clone(),
        section,
        violation_type: if candidate.violation_type.is_empty() {
            "ai_detected".to_string()
        } else {
            candidate.violation_type.clone()
        },
        severity: candidate.severity,
        description: candidate.description.clone(),
        details: candidate.legal_basis.clone(),
        affected_data: Vec::new(),
        dpa_reference: String::new(),
        source: Source::ExternalModel,
        confidence: Some(candidate.confidence.unwrap_or(DEFAULT_SECONDARY_CONFIDENCE)),
    }
}

fn convert_recommendation(candidate: &SecondaryRecommendation) -> Recommendation {
    Recommendation {
        priority: candidate.priority,
        action: candidate.action.clone(),
        description: candidate.description.clone(),
        section_reference: if candidate.section_reference.is_empty() {
            "AI Analysis".to_string()
        } else {
            candidate.section_reference.clone()
        },
        source: Source::ExternalModel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{
        AnalysisMetadata, ExternalInsights, PiiSummary, RiskAssessment, RiskLevel, Severity,
    };

    fn baseline_violation(section: &str, violation_type: &str) -> Violation {
        Violation {
            section: section.to_string(),
            violation_type: violation_type.to_string(),
            title: String::new(),
            severity: Severity::High,
            description: String::new(),
            details: String::new(),
            affected_data: Vec::new(),
            dpa_reference: String::new(),
            source: Source::RuleBased,
            confidence: None,
        }
    }

    fn baseline_report(violations: Vec<Violation>, risk: RiskLevel) -> ComplianceReport {
        let compliance_status = if violations.is_empty() {
            ComplianceStatus::Compliant
        } else {
            ComplianceStatus::NonCompliant
        };
        ComplianceReport {
            document_name: "doc.txt".to_string(),
            analysis_timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            pii_summary: PiiSummary::default(),
            violations,
            recommendations: Vec::new(),
            compliance_status,
            risk_level: risk,
            external_insights: None,
            metadata: AnalysisMetadata::default(),
        }
    }

    fn secondary_violation(section: &str, violation_type: &str) -> SecondaryViolation {
        SecondaryViolation {
            section: section.to_string(),
            violation_type: violation_type.to_string(),
            severity: Severity::Medium,
            description: "secondary finding".to_string(),
            legal_basis: "Section requirement".to_string(),
            confidence: Some(0.7),
        }
    }

    #[test]
    fn duplicate_secondary_violation_is_suppressed() {
        let baseline = baseline_report(
            vec![baseline_violation("Section 12", "unauthorized_processing")],
            RiskLevel::High,
        );
        let secondary = SecondaryAnalysis {
            violations: vec![secondary_violation("Section 12", "unauthorized_processing")],
            ..SecondaryAnalysis::default()
        };
        let merged = reconcile(baseline, secondary);
        assert_eq!(merged.violations.len(), 1);
        assert_eq!(merged.violations[0].source, Source::RuleBased);
    }

    #[test]
    fn containment_dedup_matches_partial_labels() {
        let baseline = baseline_report(
            vec![baseline_violation("Section 12", "unauthorized_processing")],
            RiskLevel::High,
        );
        // "12" is contained in "Section 12"; "processing" in the type tag.
        let secondary = SecondaryAnalysis {
            violations: vec![secondary_violation("12", "processing")],
            ..SecondaryAnalysis::default()
        };
        let merged = reconcile(baseline, secondary);
        assert_eq!(merged.violations.len(), 1);
    }

    #[test]
    fn novel_secondary_violation_is_appended_after_baseline() {
        let baseline = baseline_report(
            vec![baseline_violation("Section 12", "unauthorized_processing")],
            RiskLevel::High,
        );
        let secondary = SecondaryAnalysis {
            violations: vec![secondary_violation("Section 16", "rights_not_disclosed")],
            ..SecondaryAnalysis::default()
        };
        let merged = reconcile(baseline, secondary);
        assert_eq!(merged.violations.len(), 2);
        assert_eq!(merged.violations[0].source, Source::RuleBased);
        assert_eq!(merged.violations[1].source, Source::ExternalModel);
        assert_eq!(merged.violations[1].confidence, Some(0.7));
    }

    #[test]
    fn empty_fields_get_placeholder_labels() {
        let baseline = baseline_report(Vec::new(), RiskLevel::Low);
        let secondary = SecondaryAnalysis {
            violations: vec![SecondaryViolation::default()],
            ..SecondaryAnalysis::default()
        };
        let merged = reconcile(baseline, secondary);
        assert_eq!(merged.violations[0].section, "AI-Detected");
        assert_eq!(merged.violations[0].violation_type, "ai_detected");
        assert_eq!(merged.violations[0].confidence, Some(0.8));
    }

    #[test]
    fn risk_level_takes_the_maximum() {
        let baseline = baseline_report(Vec::new(), RiskLevel::Medium);
        let secondary = SecondaryAnalysis {
            risk_assessment: RiskAssessment {
                overall_risk: RiskLevel::Critical,
                ..RiskAssessment::default()
            },
            ..SecondaryAnalysis::default()
        };
        let merged = reconcile(baseline, secondary);
        assert_eq!(merged.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn lower_secondary_risk_does_not_downgrade() {
        let baseline = baseline_report(
            vec![baseline_violation("Section 13", "inadequate_spi_protection")],
            RiskLevel::Critical,
        );
        let secondary = SecondaryAnalysis::default();
        let merged = reconcile(baseline, secondary);
        assert_eq!(merged.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn status_recomputed_from_merged_violations() {
        let baseline = baseline_report(Vec::new(), RiskLevel::Low);
        let secondary = SecondaryAnalysis {
            violations: vec![secondary_violation("Section 16", "rights_not_disclosed")],
            ..SecondaryAnalysis::default()
        };
        let merged = reconcile(baseline, secondary);
        assert_eq!(merged.compliance_status, ComplianceStatus::NonCompliant);
    }

    #[test]
    fn insights_carried_verbatim() {
        let baseline = baseline_report(Vec::new(), RiskLevel::Low);
        let secondary = SecondaryAnalysis {
            insights: ExternalInsights {
                document_type: "employment contract".to_string(),
                processing_purpose: "payroll".to_string(),
                data_flow: "HR to bank".to_string(),
                compliance_gaps: vec!["no retention schedule".to_string()],
            },
            ..SecondaryAnalysis::default()
        };
        let merged = reconcile(baseline, secondary);
        let insights = merged.external_insights.unwrap();
        assert_eq!(insights.document_type, "employment contract");
        assert_eq!(merged.metadata.analysis_type, AnalysisType::Reconciled);
    }

    #[test]
    fn recommendation_dedup_on_action_text() {
        let mut baseline = baseline_report(Vec::new(), RiskLevel::Low);
        baseline.recommendations.push(Recommendation {
            priority: shared_types::Priority::High,
            action: "Obtain proper consent".to_string(),
            description: String::new(),
            section_reference: "Section 12".to_string(),
            source: Source::RuleBased,
        });
        let secondary = SecondaryAnalysis {
            recommendations: vec![
                SecondaryRecommendation {
                    action: "obtain proper consent".to_string(),
                    ..SecondaryRecommendation::default()
                },
                SecondaryRecommendation {
                    action: "Publish a privacy notice".to_string(),
                    ..SecondaryRecommendation::default()
                },
            ],
            ..SecondaryAnalysis::default()
        };
        let merged = reconcile(baseline, secondary);
        assert_eq!(merged.recommendations.len(), 2);
        assert_eq!(merged.recommendations[1].action, "Publish a privacy notice");
        assert_eq!(merged.recommendations[1].source, Source::ExternalModel);
        assert_eq!(merged.recommendations[1].section_reference, "AI Analysis");
    }
}
