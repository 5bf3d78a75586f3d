// All LLM prompt constants for the assistant pipeline.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::assistant::intent::{IntentKind, ResolvedIntent, KNOWN_INTENTS};
use crate::assistant::tone::tone_guidance;
use crate::llm_client::prompts::{HR_GURU_PERSONA, INDIAN_SCHOOL_CONTEXT, JSON_ONLY_INSTRUCTION};
use crate::models::conversation::ConversationContext;

// ────────────────────────────────────────────────────────────────────────────
// Intent resolution
// ────────────────────────────────────────────────────────────────────────────

/// Replace `{persona}`, `{json_only}`, `{role}`, `{school_id}` and `{intent_list}`.
const INTENT_SYSTEM_TEMPLATE: &str = r#"{persona}

Analyze the user's message and extract:
1. Intent (what they want to do)
2. Entities (specific data they mentioned: names, subjects, grades, dates, amounts)
3. Confidence level between 0 and 1
4. Action needed, if any
5. Parameters for the action

User Role: {role}
School: {school_id}

Known intents:
{intent_list}

If nothing fits, use "general_query".

Return a JSON object with this EXACT schema:
{
  "intent": "intent_name",
  "entities": {"key": "value"},
  "confidence": 0.95,
  "action": "action_name",
  "parameters": {"param": "value"}
}

{json_only}"#;

/// Typical phrasing for an intent, shown to the model next to its name.
fn example_phrase(kind: &IntentKind) -> Option<&'static str> {
    match kind {
        IntentKind::BackgroundCheckInitiation => {
            Some("Initiate police verification for new hire")
        }
        IntentKind::FindSubstituteTeacher => Some("Who are available substitute teachers"),
        IntentKind::PolicyQuestion => Some("LTC, leave policies, compliance questions"),
        IntentKind::CertificationExpiryReport => {
            Some("teachers whose certifications are expiring")
        }
        IntentKind::DocumentGeneration => Some("draft appointment letter"),
        IntentKind::RecruitmentScreening => Some("screen resumes and rank candidates"),
        IntentKind::OnboardingChecklist => Some("new teacher onboarding"),
        IntentKind::PerformanceAnalysis => Some("analyze student performance data"),
        IntentKind::DevelopmentRecommendations => Some("recommend professional development"),
        IntentKind::PayrollCalculation => Some("calculate salaries"),
        IntentKind::AttendanceAnomaly => Some("flag attendance anomalies"),
        IntentKind::RetentionRiskAnalysis => Some("identify teachers at high risk of leaving"),
        IntentKind::TeacherPerformance => Some("how is Ms. Sharma performing this term"),
        IntentKind::ReportGeneration => Some("generate the certificate expiry report"),
        IntentKind::CertificateTracking => Some("how many certificates expire this month"),
        IntentKind::PayrollQuery => Some("what was deducted from my salary"),
        IntentKind::LeaveApplication
        | IntentKind::ComplianceCheck
        | IntentKind::BackgroundVerification
        | IntentKind::GeneralQuery
        | IntentKind::Greeting
        | IntentKind::Error
        | IntentKind::Other(_) => None,
    }
}

/// Bullet list of intents offered to the model. `error` is internal and never offered.
fn intent_list() -> String {
    KNOWN_INTENTS
        .iter()
        .filter(|kind| **kind != IntentKind::Error)
        .map(|kind| match example_phrase(kind) {
            Some(phrase) => format!("- {} (for \"{}\")", kind, phrase),
            None => format!("- {}", kind),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn intent_system_prompt(context: &ConversationContext) -> String {
    INTENT_SYSTEM_TEMPLATE
        .replace("{persona}", HR_GURU_PERSONA)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{role}", context.role.as_str())
        .replace("{school_id}", &context.school_id)
        .replace("{intent_list}", &intent_list())
}

// ────────────────────────────────────────────────────────────────────────────
// Response composition
// ────────────────────────────────────────────────────────────────────────────

/// Replace `{persona}`, `{role}`, `{intent}`, `{entities_json}`, `{guidelines}`
/// and `{tone_guidance}`.
const RESPONSE_SYSTEM_TEMPLATE: &str = r#"{persona}

User Role: {role}
Intent: {intent}
Entities: {entities_json}

Guidelines:
{guidelines}
- Be empathetic for leave and personal matters

Tone for this user: {tone_guidance}

Reply in plain conversational text. Do not return JSON."#;

pub fn response_system_prompt(intent: &ResolvedIntent, context: &ConversationContext) -> String {
    let entities_json =
        serde_json::to_string(&intent.entities).unwrap_or_else(|_| "{}".to_string());
    RESPONSE_SYSTEM_TEMPLATE
        .replace("{persona}", HR_GURU_PERSONA)
        .replace("{role}", context.role.as_str())
        .replace("{intent}", intent.intent.as_str())
        .replace("{entities_json}", &entities_json)
        .replace("{guidelines}", INDIAN_SCHOOL_CONTEXT)
        .replace("{tone_guidance}", tone_guidance(context.role))
}
