//! Aggregate risk classification.

use shared_types::{PiiSummary, RiskLevel, Severity, Violation};

/// Sensitive-item count above which the report is CRITICAL outright.
const CRITICAL_SENSITIVE_COUNT: usize = 5;

/// Total-item count above which the report is at least HIGH.
const HIGH_TOTAL_COUNT: usize = 10;

/// Compute the report-wide risk level. Precedence, first match wins:
/// CRITICAL on any critical violation or a large sensitive-item count; HIGH
/// on any high violation or a large total count; MEDIUM on any violation;
/// LOW when there are none.
pub fn assess_risk_level(violations: &[Violation], pii: &PiiSummary) -> RiskLevel {
    if violations.is_empty() {
        return RiskLevel::Low;
    }

    let has_severity = |severity| violations.iter().any(|v| v.severity == severity);

    if has_severity(Severity::Critical) || pii.sensitive_count > CRITICAL_SENSITIVE_COUNT {
        RiskLevel::Critical
    } else if has_severity(Severity::High) || pii.total_count > HIGH_TOTAL_COUNT {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}
