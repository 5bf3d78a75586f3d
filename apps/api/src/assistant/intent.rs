//! Intent vocabulary: the closed set of intents the assistant understands.
//!
//! Unknown names coming back from the model are kept verbatim in `IntentKind::Other`
//! and are never actionable.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Free-form key → value pairs extracted from the user's message.
pub type Entities = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntentKind {
    BackgroundCheckInitiation,
    BackgroundVerification,
    FindSubstituteTeacher,
    PolicyQuestion,
    CertificationExpiryReport,
    CertificateTracking,
    DocumentGeneration,
    RecruitmentScreening,
    OnboardingChecklist,
    PerformanceAnalysis,
    DevelopmentRecommendations,
    PayrollCalculation,
    PayrollQuery,
    AttendanceAnomaly,
    RetentionRiskAnalysis,
    LeaveApplication,
    ComplianceCheck,
    TeacherPerformance,
    ReportGeneration,
    GeneralQuery,
    Greeting,
    Error,
    Other(String),
}

/// Every named intent, in the order they are listed to the model.
pub const KNOWN_INTENTS: [IntentKind; 22] = [
    IntentKind::BackgroundCheckInitiation,
    IntentKind::FindSubstituteTeacher,
    IntentKind::PolicyQuestion,
    IntentKind::CertificationExpiryReport,
    IntentKind::DocumentGeneration,
    IntentKind::RecruitmentScreening,
    IntentKind::OnboardingChecklist,
    IntentKind::PerformanceAnalysis,
    IntentKind::DevelopmentRecommendations,
    IntentKind::PayrollCalculation,
    IntentKind::AttendanceAnomaly,
    IntentKind::RetentionRiskAnalysis,
    IntentKind::LeaveApplication,
    IntentKind::ComplianceCheck,
    IntentKind::TeacherPerformance,
    IntentKind::ReportGeneration,
    IntentKind::CertificateTracking,
    IntentKind::BackgroundVerification,
    IntentKind::PayrollQuery,
    IntentKind::GeneralQuery,
    IntentKind::Greeting,
    IntentKind::Error,
];

impl IntentKind {
    pub fn as_str(&self) -> &str {
        match self {
            IntentKind::BackgroundCheckInitiation => "background_check_initiation",
            IntentKind::BackgroundVerification => "background_verification",
            IntentKind::FindSubstituteTeacher => "find_substitute_teacher",
            IntentKind::PolicyQuestion => "policy_question",
            IntentKind::CertificationExpiryReport => "certification_expiry_report",
            IntentKind::CertificateTracking => "certificate_tracking",
            IntentKind::DocumentGeneration => "document_generation",
            IntentKind::RecruitmentScreening => "recruitment_screening",
            IntentKind::OnboardingChecklist => "onboarding_checklist",
            IntentKind::PerformanceAnalysis => "performance_analysis",
            IntentKind::DevelopmentRecommendations => "development_recommendations",
            IntentKind::PayrollCalculation => "payroll_calculation",
            IntentKind::PayrollQuery => "payroll_query",
            IntentKind::AttendanceAnomaly => "attendance_anomaly",
            IntentKind::RetentionRiskAnalysis => "retention_risk_analysis",
            IntentKind::LeaveApplication => "leave_application",
            IntentKind::ComplianceCheck => "compliance_check",
            IntentKind::TeacherPerformance => "teacher_performance",
            IntentKind::ReportGeneration => "report_generation",
            IntentKind::GeneralQuery => "general_query",
            IntentKind::Greeting => "greeting",
            IntentKind::Error => "error",
            IntentKind::Other(name) => name,
        }
    }

    /// True when a handler produces structured data for this intent.
    /// Kept exhaustive so a new variant must be classified here.
    pub fn is_actionable(&self) -> bool {
        match self {
            IntentKind::BackgroundCheckInitiation
            | IntentKind::BackgroundVerification
            | IntentKind::FindSubstituteTeacher
            | IntentKind::CertificationExpiryReport
            | IntentKind::CertificateTracking
            | IntentKind::DocumentGeneration
            | IntentKind::RecruitmentScreening
            | IntentKind::OnboardingChecklist
            | IntentKind::PerformanceAnalysis
            | IntentKind::DevelopmentRecommendations
            | IntentKind::PayrollCalculation
            | IntentKind::PayrollQuery
            | IntentKind::AttendanceAnomaly
            | IntentKind::RetentionRiskAnalysis
            | IntentKind::TeacherPerformance
            | IntentKind::ReportGeneration => true,
            IntentKind::PolicyQuestion
            | IntentKind::LeaveApplication
            | IntentKind::ComplianceCheck
            | IntentKind::GeneralQuery
            | IntentKind::Greeting
            | IntentKind::Error
            | IntentKind::Other(_) => false,
        }
    }
}

impl From<String> for IntentKind {
    fn from(name: String) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        KNOWN_INTENTS
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .unwrap_or(IntentKind::Other(name))
    }
}

impl From<IntentKind> for String {
    fn from(kind: IntentKind) -> Self {
        match kind {
            IntentKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classification of one message. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIntent {
    pub intent: IntentKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entities: Entities,
    #[serde(default, deserialize_with = "clamped_confidence")]
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Entities>,
}

impl ResolvedIntent {
    /// An intent that did not come from the model: no entities, fixed confidence.
    pub fn synthetic(intent: IntentKind, confidence: f32) -> Self {
        Self {
            intent,
            entities: Entities::new(),
            confidence: confidence.clamp(0.0, 1.0),
            action: None,
            parameters: None,
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.intent.is_actionable()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Entities, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Entities>::deserialize(deserializer)?.unwrap_or_default())
}

fn clamped_confidence<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if raw.is_nan() {
        return Ok(0.0);
    }
    Ok(raw.clamp(0.0, 1.0) as f32)
}
