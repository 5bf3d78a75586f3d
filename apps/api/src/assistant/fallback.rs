//! Fallback Responder: keyword routing used when no LLM provider is configured.
//!
//! Rules are evaluated in a fixed priority order and the first match wins.
//! Rule order is part of the contract: ambiguous messages resolve to the
//! earlier category. Never fails and never touches the network.

use tracing::info;

use crate::assistant::actions::{ActionResult, Guidance, BACKGROUND_CHECK_STEPS};
use crate::assistant::intent::{IntentKind, ResolvedIntent};
use crate::assistant::reply::AssistantReply;

/// Case-insensitive keyword expression over the lowercased message.
#[derive(Debug)]
enum Keyword {
    /// Substring match.
    Word(&'static str),
    Any(&'static [Keyword]),
    All(&'static [Keyword]),
}

impl Keyword {
    fn matches(&self, message: &str) -> bool {
        match self {
            Keyword::Word(word) => message.contains(word),
            Keyword::Any(options) => options.iter().any(|k| k.matches(message)),
            Keyword::All(required) => required.iter().all(|k| k.matches(message)),
        }
    }
}

use Keyword::{All, Any, Word};

#[derive(Debug)]
struct FallbackRule {
    intent: IntentKind,
    keywords: Keyword,
    confidence: f32,
    response: &'static str,
    /// Key under which the illustrative list is returned.
    label: &'static str,
    /// Heading used when the list is folded into the text of an informational reply.
    heading: &'static str,
    items: &'static [&'static str],
}

static RULES: [FallbackRule; 9] = [
    FallbackRule {
        intent: IntentKind::BackgroundCheckInitiation,
        keywords: All(&[
            Word("initiate"),
            Any(&[Word("police"), Word("verification"), Word("background")]),
        ]),
        confidence: 0.9,
        response: "I can help you initiate background verification. For police verification \
            and reference checks I usually open a verification task, assign it to the \
            verification team, and track it through police clearance, reference checks and \
            POCSO clearance. Until I'm fully configured, here are the verification steps to \
            follow manually.",
        label: "process_steps",
        heading: "Verification steps",
        items: BACKGROUND_CHECK_STEPS,
    },
    FallbackRule {
        intent: IntentKind::FindSubstituteTeacher,
        keywords: Any(&[
            Word("substitute"),
            All(&[Word("replacement"), Word("teacher")]),
        ]),
        confidence: 0.9,
        response: "I can help you find a substitute teacher. I normally match teacher \
            availability, subject expertise and current timetables. For an immediate need, \
            check the substitute pool for staff qualified in the required subject and grade. \
            These are the selection criteria I use.",
        label: "selection_criteria",
        heading: "Selection criteria",
        items: &[
            "Subject qualification match",
            "Grade level experience",
            "Current availability",
            "Previous performance ratings",
            "Emergency contact accessibility",
        ],
    },
    FallbackRule {
        intent: IntentKind::CertificationExpiryReport,
        keywords: All(&[
            Word("certification"),
            Any(&[Word("expir"), Word("report")]),
        ]),
        confidence: 0.9,
        response: "I can prepare certification expiry reports. I track B.Ed, M.Ed, CTET and \
            other professional certifications so renewals happen on time and the school stays \
            compliant. A report lists each teacher, subject, expiry date and the action needed.",
        label: "tracked_certifications",
        heading: "Tracked certifications",
        items: &[
            "B.Ed/M.Ed degrees",
            "CTET/TET certificates",
            "Subject-specific certifications",
            "POCSO training certificates",
            "Computer literacy certificates",
        ],
    },
    FallbackRule {
        intent: IntentKind::DocumentGeneration,
        keywords: Any(&[
            Word("draft"),
            All(&[Word("generate"), Any(&[Word("letter"), Word("document")])]),
        ]),
        confidence: 0.9,
        response: "I can help draft HR documents. I use approved templates for appointment \
            letters, offer letters and other HR paperwork, and for teaching posts I make sure \
            the salary structure, probation terms and compliance clauses are included.",
        label: "document_types",
        heading: "Document types",
        items: &[
            "Appointment letters for TGT/PGT/PRT",
            "Offer letters with salary details",
            "Probation completion letters",
            "Promotion letters",
            "Transfer orders",
        ],
    },
    FallbackRule {
        intent: IntentKind::PayrollCalculation,
        keywords: Any(&[Word("payroll"), Word("salary"), Word("calculate")]),
        confidence: 0.9,
        response: "I can assist with payroll. Salary is computed from basic pay plus allowances \
            (HRA, transport, special) minus deductions (PF, ESI, professional tax, TDS), \
            adjusted for attendance, approved leave and overtime. These are the components \
            involved.",
        label: "calculation_components",
        heading: "Calculation components",
        items: &[
            "Basic salary + Grade pay",
            "HRA (based on city classification)",
            "Transport allowance",
            "PF deduction (12% of basic)",
            "ESI deduction (0.75% of gross)",
            "Professional Tax (state-specific)",
            "TDS calculation",
        ],
    },
    FallbackRule {
        intent: IntentKind::PerformanceAnalysis,
        keywords: Any(&[Word("performance"), Word("analytics"), Word("retention")]),
        confidence: 0.9,
        response: "Performance analytics help school leadership act early. I track teacher \
            evaluations, student and parent feedback, and retention risk to find high performers \
            and staff who may need support. Real-time analytics need my AI access to be \
            configured.",
        label: "analytics_types",
        heading: "Analytics types",
        items: &[
            "Student academic performance correlation",
            "Parent feedback sentiment analysis",
            "Peer evaluation scores",
            "Leave pattern analysis",
            "Retention risk scoring",
            "Professional development recommendations",
        ],
    },
    FallbackRule {
        intent: IntentKind::RecruitmentScreening,
        keywords: Any(&[
            Word("recruitment"),
            Word("hiring"),
            Word("application"),
            Word("screen"),
        ]),
        confidence: 0.9,
        response: "I can help with recruitment. I screen teacher applications on B.Ed \
            qualification, CTET scores, subject expertise and experience, rank candidates, and \
            help schedule interviews in line with RTE Act and state requirements.",
        label: "screening_criteria",
        heading: "Screening criteria",
        items: &[
            "Essential qualifications (B.Ed/M.Ed)",
            "CTET/TET scores and validity",
            "Subject expertise and experience",
            "Language proficiency",
            "Additional certifications",
            "Reference verification",
        ],
    },
    FallbackRule {
        intent: IntentKind::PolicyQuestion,
        keywords: Any(&[
            Word("leave"),
            Word("policy"),
            Word("ltc"),
            Word("procedure"),
        ]),
        confidence: 0.8,
        response: "I can help with HR policies and procedures, including leave rules (CL, EL, \
            ML), LTC claims, salary structures and compliance requirements, with step-by-step \
            guidance based on your school handbook and government regulations.",
        label: "common_policies",
        heading: "Policies I can walk you through",
        items: &[
            "Leave Travel Concession (LTC) procedure",
            "Maternity/Paternity leave policies",
            "Medical leave and reimbursement",
            "Casual and earned leave rules",
            "Transfer and posting guidelines",
            "Disciplinary procedures",
        ],
    },
    FallbackRule {
        intent: IntentKind::ComplianceCheck,
        keywords: Any(&[
            Word("compliance"),
            Word("cbse"),
            Word("rte"),
            Word("guidelines"),
        ]),
        confidence: 0.8,
        response: "I can assist with compliance and regulatory requirements: CBSE guidelines, \
            RTE Act compliance, teacher-student ratios, qualification requirements and \
            documentation standards.",
        label: "compliance_areas",
        heading: "Compliance areas",
        items: &[
            "CBSE teacher-student ratio guidelines",
            "RTE Act qualification requirements",
            "POCSO training compliance",
            "Infrastructure standards",
            "Fee regulation compliance",
            "Academic calendar adherence",
        ],
    },
];

static GREETING: FallbackRule = FallbackRule {
    intent: IntentKind::Greeting,
    keywords: Any(&[]),
    confidence: 0.7,
    response: "Hello! I'm HR Guru, your assistant for school administration. I can help with \
        recruitment, performance analytics, compliance tracking, payroll and policy guidance, \
        and I understand Indian school regulations such as the RTE Act, CBSE guidelines and \
        state education policies. How can I help you today?",
    label: "capabilities",
    heading: "What I can do",
    items: &[
        "Teacher recruitment and screening",
        "Performance analytics and reporting",
        "Compliance and policy guidance",
        "Payroll and attendance management",
        "Document generation",
        "Background verification tracking",
    ],
};

/// Answers from keyword rules alone.
pub fn fallback(message: &str) -> AssistantReply {
    let lowered = message.to_lowercase();
    let rule = RULES
        .iter()
        .find(|rule| rule.keywords.matches(&lowered))
        .unwrap_or(&GREETING);

    info!("Fallback responder routed message to '{}'", rule.intent);

    let intent = ResolvedIntent::synthetic(rule.intent.clone(), rule.confidence);
    if intent.is_actionable() {
        AssistantReply {
            response_text: rule.response.to_string(),
            intent,
            actionable: true,
            data: Some(ActionResult::Guidance(Guidance::single(rule.label, rule.items))),
        }
    } else {
        AssistantReply::informational(fold_items(rule), intent)
    }
}

/// Informational replies carry no data, so the list goes into the text.
fn fold_items(rule: &FallbackRule) -> String {
    let mut text = format!("{}\n\n{}:", rule.response, rule.heading);
    for item in rule.items {
        text.push_str("\n- ");
        text.push_str(item);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_value(reply: &AssistantReply) -> serde_json::Value {
        serde_json::to_value(reply.data.as_ref().expect("data expected")).unwrap()
    }

    #[test]
    fn test_police_verification_example() {
        let reply = fallback("Initiate police verification for new hire Anjali Verma");
        assert_eq!(reply.intent.intent, IntentKind::BackgroundCheckInitiation);
        assert!(reply.actionable);
        assert!(reply.response_text.contains("verification"));
        let steps = data_value(&reply)["process_steps"].as_array().unwrap().clone();
        assert!(!steps.is_empty());
        assert_eq!(steps[0], "Collect candidate's consent and documents");
    }

    #[test]
    fn test_initiate_with_any_verification_keyword() {
        for message in [
            "initiate POLICE check",
            "Please initiate verification for Rahul",
            "can you initiate a background screen",
        ] {
            let reply = fallback(message);
            assert_eq!(
                reply.intent.intent,
                IntentKind::BackgroundCheckInitiation,
                "{message}"
            );
            assert!(reply.actionable);
        }
    }

    #[test]
    fn test_background_without_initiate_does_not_match_first_rule() {
        let reply = fallback("what does a background check cost");
        assert_ne!(reply.intent.intent, IntentKind::BackgroundCheckInitiation);
    }

    #[test]
    fn test_priority_background_beats_leave() {
        let reply = fallback("Initiate background check before her leave starts");
        assert_eq!(reply.intent.intent, IntentKind::BackgroundCheckInitiation);
    }

    #[test]
    fn test_priority_payroll_beats_performance() {
        let reply = fallback("calculate salary impact of performance bonus");
        assert_eq!(reply.intent.intent, IntentKind::PayrollCalculation);
    }

    #[test]
    fn test_priority_recruitment_beats_policy() {
        let reply = fallback("what is the hiring policy for PGT posts");
        assert_eq!(reply.intent.intent, IntentKind::RecruitmentScreening);
    }

    #[test]
    fn test_replacement_needs_teacher() {
        let teacher = fallback("need a replacement teacher for class 9");
        assert_eq!(teacher.intent.intent, IntentKind::FindSubstituteTeacher);

        let projector = fallback("need a replacement projector");
        assert_eq!(projector.intent.intent, IntentKind::Greeting);
    }

    #[test]
    fn test_generate_needs_letter_or_document() {
        let letter = fallback("generate an offer letter");
        assert_eq!(letter.intent.intent, IntentKind::DocumentGeneration);

        let draft = fallback("Draft an appointment letter for a TGT Social Science teacher");
        assert_eq!(draft.intent.intent, IntentKind::DocumentGeneration);
    }

    #[test]
    fn test_certification_needs_expiry_or_report() {
        let report = fallback("Which certifications are expiring this term?");
        assert_eq!(report.intent.intent, IntentKind::CertificationExpiryReport);

        let vague = fallback("tell me about certification");
        assert_eq!(vague.intent.intent, IntentKind::Greeting);
    }

    #[test]
    fn test_policy_reply_is_informational_with_folded_list() {
        let reply = fallback("How do I apply for LTC?");
        assert_eq!(reply.intent.intent, IntentKind::PolicyQuestion);
        assert!(!reply.actionable);
        assert!(reply.data.is_none());
        assert!(reply.response_text.contains("- Leave Travel Concession (LTC) procedure"));
        assert!((reply.intent.confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_compliance_reply_is_informational() {
        let reply = fallback("Are we following CBSE norms?");
        assert_eq!(reply.intent.intent, IntentKind::ComplianceCheck);
        assert!(!reply.actionable);
        assert!(reply.data.is_none());
    }

    #[test]
    fn test_no_match_is_greeting() {
        let reply = fallback("Good morning!");
        assert_eq!(reply.intent.intent, IntentKind::Greeting);
        assert!(!reply.actionable);
        assert!(reply.data.is_none());
        assert!(reply.response_text.contains("Teacher recruitment and screening"));
        assert!((reply.intent.confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_empty_message_is_greeting() {
        assert_eq!(fallback("").intent.intent, IntentKind::Greeting);
    }

    #[test]
    fn test_data_only_on_actionable_replies() {
        let messages = [
            "initiate police verification",
            "substitute for physics",
            "certification report",
            "draft a memo",
            "payroll for March",
            "retention analytics",
            "screen applications",
            "leave rules",
            "rte guidelines",
            "hello",
        ];
        for message in messages {
            let reply = fallback(message);
            if reply.data.is_some() {
                assert!(reply.actionable, "{message}");
            }
            assert_eq!(reply.actionable, reply.intent.is_actionable(), "{message}");
            assert!(reply.intent.entities.is_empty());
        }
    }

    #[test]
    fn test_rule_table_order() {
        let intents: Vec<_> = RULES
            .iter()
            .chain(std::iter::once(&GREETING))
            .map(|rule| rule.intent.clone())
            .collect();
        assert_eq!(intents.len(), 10);
        assert_eq!(intents[0], IntentKind::BackgroundCheckInitiation);
        assert_eq!(intents[8], IntentKind::ComplianceCheck);
        assert_eq!(intents[9], IntentKind::Greeting);
    }
}
