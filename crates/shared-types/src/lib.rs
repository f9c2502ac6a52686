pub mod report;
pub mod secondary;
pub mod types;

pub use report::{AnalysisMetadata, AnalysisType, ComplianceReport, ReportSummary};
pub use secondary::{RiskAssessment, SecondaryAnalysis, SecondaryRecommendation, SecondaryViolation};
pub use types::{
    ComplianceStatus, DetectedItem, ExternalInsights, PiiSummary, Priority, Recommendation,
    RiskLevel, Severity, Source, Violation,
};
