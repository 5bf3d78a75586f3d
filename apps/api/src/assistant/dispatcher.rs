//! Action Dispatcher: exhaustive map from `IntentKind` to its handler.
//!
//! Parameters are coerced from the entities bag here, once, before any handler runs.
//! Non-actionable intents yield `Ok(None)`; only a handler rejecting its
//! parameters produces an error.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::assistant::actions::{self, ActionResult};
use crate::assistant::error::AssistantError;
use crate::assistant::intent::{IntentKind, ResolvedIntent};
use crate::assistant::params::{
    CandidateParams, CertificationReportParams, DocumentParams, EntityLookup, PayrollParams,
    ReportParams, SubstituteParams, TeacherParams, DEFAULT_TEACHER,
};
use crate::models::conversation::ConversationContext;

/// Name used by the teacher-performance lookup when none was extracted.
const DEFAULT_PERFORMANCE_TEACHER: &str = "Ms. Priya Sharma";

pub fn dispatch(
    intent: &ResolvedIntent,
    context: &ConversationContext,
) -> Result<Option<ActionResult>, AssistantError> {
    dispatch_at(intent, context, Utc::now())
}

/// `dispatch` with an explicit clock, so handler output is reproducible.
pub fn dispatch_at(
    intent: &ResolvedIntent,
    context: &ConversationContext,
    now: DateTime<Utc>,
) -> Result<Option<ActionResult>, AssistantError> {
    let lookup = EntityLookup::new(intent);

    let result = match &intent.intent {
        IntentKind::BackgroundCheckInitiation | IntentKind::BackgroundVerification => {
            ActionResult::BackgroundCheck(actions::initiate_background_check(
                &CandidateParams::from_lookup(&lookup),
                now,
            ))
        }
        IntentKind::FindSubstituteTeacher => ActionResult::SubstituteSearch(
            actions::find_substitute_teachers(&SubstituteParams::from_lookup(&lookup)),
        ),
        IntentKind::CertificationExpiryReport => {
            ActionResult::CertificationReport(actions::generate_certification_report(
                &CertificationReportParams::from_lookup(&lookup),
                now,
            ))
        }
        IntentKind::DocumentGeneration => ActionResult::Document(actions::generate_document(
            &DocumentParams::from_lookup(&lookup),
            now,
        )),
        IntentKind::RecruitmentScreening => {
            ActionResult::Screening(actions::screen_applications())
        }
        IntentKind::OnboardingChecklist => {
            ActionResult::Onboarding(actions::generate_onboarding_checklist(now))
        }
        IntentKind::PerformanceAnalysis => {
            ActionResult::PerformanceAnalysis(actions::analyze_performance(
                &TeacherParams::from_lookup(&lookup, DEFAULT_TEACHER),
                now,
            ))
        }
        IntentKind::DevelopmentRecommendations => {
            ActionResult::Development(actions::recommend_development(
                &TeacherParams::from_lookup(&lookup, DEFAULT_TEACHER),
                now,
            ))
        }
        IntentKind::PayrollCalculation | IntentKind::PayrollQuery => {
            let params = PayrollParams::from_lookup(&lookup);
            let payroll = actions::calculate_payroll(&params, now).map_err(|reason| {
                AssistantError::HandlerFault {
                    intent: intent.intent.clone(),
                    reason,
                }
            })?;
            ActionResult::Payroll(payroll)
        }
        IntentKind::AttendanceAnomaly => {
            ActionResult::AttendanceAnomalies(actions::detect_attendance_anomalies(now))
        }
        IntentKind::RetentionRiskAnalysis => {
            ActionResult::RetentionRisk(actions::analyze_retention_risk(now))
        }
        IntentKind::ReportGeneration => ActionResult::Report(actions::generate_report(
            &ReportParams::from_lookup(&lookup),
            now,
        )),
        IntentKind::CertificateTracking => {
            ActionResult::CertificateTracking(actions::track_certificates())
        }
        IntentKind::TeacherPerformance => {
            ActionResult::TeacherPerformance(actions::teacher_performance(
                &TeacherParams::from_lookup(&lookup, DEFAULT_PERFORMANCE_TEACHER),
            ))
        }
        IntentKind::PolicyQuestion
        | IntentKind::LeaveApplication
        | IntentKind::ComplianceCheck
        | IntentKind::GeneralQuery
        | IntentKind::Greeting
        | IntentKind::Error
        | IntentKind::Other(_) => return Ok(None),
    };

    debug!(
        "Dispatched '{}' for school {} (actor {})",
        intent.intent, context.school_id, context.actor_id
    );

    Ok(Some(result))
}
