use serde::{Deserialize, Serialize};

use crate::types::{
    ComplianceStatus, ExternalInsights, PiiSummary, Recommendation, RiskLevel, Violation,
};

/// How the report was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Rule evaluator only.
    RuleBased,
    /// Rule evaluator merged with a secondary result.
    Reconciled,
}

impl Default for AnalysisType {
    fn default() -> Self {
        AnalysisType::RuleBased
    }
}

/// Informational metadata attached to every report. Notes record non-fatal
/// conditions (e.g. a failed secondary-analyzer attempt) without surfacing
/// them as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisMetadata {
    pub analysis_type: AnalysisType,
    pub notes: Vec<String>,
}

/// The canonical output record of one analysis request.
///
/// Every field is always present on the wire; unknown or empty values collapse
/// to typed defaults. Invariant: `compliance_status == NonCompliant` iff
/// `violations` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub document_name: String,
    /// RFC 3339 timestamp of when the analysis ran.
    pub analysis_timestamp: String,
    pub pii_summary: PiiSummary,
    pub violations: Vec<Violation>,
    pub recommendations: Vec<Recommendation>,
    pub compliance_status: ComplianceStatus,
    pub risk_level: RiskLevel,
    pub external_insights: Option<ExternalInsights>,
    pub metadata: AnalysisMetadata,
}

/// Condensed view of a report for renderers and dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub document: String,
    pub status: ComplianceStatus,
    pub risk_level: RiskLevel,
    pub total_violations: usize,
    pub pii_found: usize,
    pub sensitive_pii_found: usize,
    /// First three violation descriptions.
    pub key_issues: Vec<String>,
    /// First three recommended actions.
    pub top_recommendations: Vec<String>,
    pub analysis_type: AnalysisType,
}
