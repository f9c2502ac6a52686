//! Assembly of the canonical output record.

use shared_types::{
    AnalysisMetadata, ComplianceReport, ComplianceStatus, PiiSummary, Recommendation,
    ReportSummary, RiskLevel, Violation,
};

/// Recommendations kept in the final record for display.
pub const RECOMMENDATION_DISPLAY_CAP: usize = 5;

/// Violation descriptions / recommended actions surfaced in a summary.
const SUMMARY_TOP_N: usize = 3;

pub fn assemble(
    document_name: &str,
    pii_summary: PiiSummary,
    violations: Vec<Violation>,
    mut recommendations: Vec<Recommendation>,
    risk_level: RiskLevel,
) -> ComplianceReport {
    recommendations.truncate(RECOMMENDATION_DISPLAY_CAP);
    let compliance_status = if violations.is_empty() {
        ComplianceStatus::Compliant
    } else {
        ComplianceStatus::NonCompliant
    };

    ComplianceReport {
        document_name: document_name.to_string(),
        analysis_timestamp: chrono::Utc::now().to_rfc3339(),
        pii_summary,
        violations,
        recommendations,
        compliance_status,
        risk_level,
        external_insights: None,
        metadata: AnalysisMetadata::default(),
    }
}

/// Condense a report for renderers and dashboards.
pub fn summarize(report: &ComplianceReport) -> ReportSummary {
    ReportSummary {
        document: report.document_name.clone(),
        status: report.compliance_status,
        risk_level: report.risk_level,
        total_violations: report.violations.len(),
        pii_found: report.pii_summary.total_count,
        sensitive_pii_found: report.pii_summary.sensitive_count,
        key_issues: report
            .violations
            .iter()
            .take(SUMMARY_TOP_N)
            .map(|v| v.description.clone())
            .collect(),
        top_recommendations: report
            .recommendations
            .iter()
            .take(SUMMARY_TOP_N)
            .map(|r| r.action.clone())
            .collect(),
        analysis_type: report.metadata.analysis_type,
    }
}
