//! Shapes for the secondary (external-model) analysis result.
//!
//! These are untrusted input to reconciliation. Every struct is fully
//! serde-defaulted so a malformed payload decays to neutral values instead of
//! failing deserialization.

use serde::{Deserialize, Serialize};

use crate::types::{ExternalInsights, Priority, RiskLevel, Severity};

/// A violation candidate from the secondary analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryViolation {
    pub section: String,
    pub violation_type: String,
    pub severity: Severity,
    pub description: String,
    /// The specific statutory requirement the analyzer believes is violated.
    pub legal_basis: String,
    pub confidence: Option<f64>,
}

/// A recommendation candidate from the secondary analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryRecommendation {
    pub priority: Priority,
    pub action: String,
    pub description: String,
    pub section_reference: String,
    pub implementation: String,
}

/// The secondary analyzer's overall risk opinion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    pub risk_factors: Vec<String>,
    pub mitigation_priority: String,
}

/// The complete second opinion handed to reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryAnalysis {
    pub violations: Vec<SecondaryViolation>,
    pub recommendations: Vec<SecondaryRecommendation>,
    pub risk_assessment: RiskAssessment,
    pub insights: ExternalInsights,
}
