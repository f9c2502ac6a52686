use serde::{Deserialize, Serialize};

/// A single item reported by the entity-extractor collaborator.
///
/// Offsets are character positions into the analyzed text. `is_sensitive` is
/// the extractor's own classification; the engine additionally treats a fixed
/// set of entity types as sensitive regardless of this flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedItem {
    pub entity_type: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
    pub is_sensitive: bool,
}

/// Per-violation severity, ordered LOW < MEDIUM < HIGH < CRITICAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Medium
    }
}

/// Report-wide risk classification. Same levels as [`Severity`] but a distinct
/// type: severity is per-violation, risk is the aggregate verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Low
    }
}

/// Recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Overall compliance verdict. `Unknown` is the typed default so downstream
/// renderers never branch on field existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    #[serde(rename = "COMPLIANT")]
    Compliant,
    #[serde(rename = "NON-COMPLIANT")]
    NonCompliant,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Default for ComplianceStatus {
    fn default() -> Self {
        ComplianceStatus::Unknown
    }
}

/// Where a violation or recommendation originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    RuleBased,
    ExternalModel,
}

impl Default for Source {
    fn default() -> Self {
        Source::RuleBased
    }
}

/// A statute-backed violation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Display label, e.g. "Section 12".
    pub section: String,
    /// Stable machine tag, e.g. "unauthorized_processing".
    pub violation_type: String,
    /// Title of the statute section backing this finding.
    pub title: String,
    pub severity: Severity,
    pub description: String,
    /// Free text including counts and a short section summary.
    pub details: String,
    /// Sample of offending literals, capped at 5.
    pub affected_data: Vec<String>,
    /// Truncated excerpt of the statute section content.
    pub dpa_reference: String,
    pub source: Source,
    pub confidence: Option<f64>,
}

/// A remediation action mapped from a violation type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
    pub description: String,
    pub section_reference: String,
    pub source: Source,
}

/// Counts and partitions of detected items for one analysis request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PiiSummary {
    pub total_count: usize,
    pub sensitive_count: usize,
    pub regular_count: usize,
    pub regular_items: Vec<DetectedItem>,
    pub sensitive_items: Vec<DetectedItem>,
}

/// Narrative insights supplied by the external-model collaborator. Carried
/// through reconciliation verbatim; never influences violations or risk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalInsights {
    pub document_type: String,
    pub processing_purpose: String,
    pub data_flow: String,
    pub compliance_gaps: Vec<String>,
}
