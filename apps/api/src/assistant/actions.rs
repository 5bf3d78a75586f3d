//! Action handlers: one pure function per actionable intent.
//!
//! Handlers never call the model or a store. Each takes its typed parameter
//! record plus the request timestamp and returns a domain payload. Sample
//! rosters stand in for school data until a staff directory is wired in.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;

use crate::assistant::params::{
    CandidateParams, CertificationReportParams, DocumentParams, PayrollParams, ReportParams,
    SubstituteParams, TeacherParams,
};

/// Steps shared by the background-check handler and the fallback guidance.
pub const BACKGROUND_CHECK_STEPS: &[&str] = &[
    "Collect candidate's consent and documents",
    "Submit police verification application",
    "Send reference check requests",
    "Verify POCSO clearance",
    "Track completion status",
];

const HRA_PERCENT: i64 = 40;
const PF_PERCENT: i64 = 12;
/// ESI is 0.75% of gross, expressed in basis points.
const ESI_BASIS_POINTS: i64 = 75;
const TRANSPORT_ALLOWANCE: i64 = 2_000;
const SPECIAL_ALLOWANCE: i64 = 5_000;
const PROFESSIONAL_TAX: i64 = 200;
/// Upper bound for any monthly amount fed into the payroll arithmetic (₹1 crore).
const MAX_MONTHLY_AMOUNT: i64 = 10_000_000;
/// Upper bound for attendance and leave day counts in one pay period.
const MAX_DAYS_IN_PERIOD: i64 = 31;

/// Days before expiry at which a certification counts as urgent.
const URGENT_EXPIRY_DAYS: i64 = 90;
/// Risk score at or above which a teacher is listed individually.
const HIGH_RISK_THRESHOLD: f32 = 0.7;

// ────────────────────────────────────────────────────────────────────────────
// Payloads
// ────────────────────────────────────────────────────────────────────────────

/// Structured result of a handler. Serialized untagged: the JSON is the payload itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionResult {
    BackgroundCheck(BackgroundCheckTask),
    SubstituteSearch(SubstituteSearch),
    CertificationReport(CertificationReport),
    Document(DocumentDraft),
    Screening(ScreeningSummary),
    Onboarding(OnboardingChecklist),
    PerformanceAnalysis(PerformanceAnalysis),
    Development(DevelopmentPlan),
    Payroll(PayrollBreakdown),
    AttendanceAnomalies(AttendanceAnomalyReport),
    RetentionRisk(RetentionRiskReport),
    Report(GeneratedReport),
    CertificateTracking(CertificateTrackingSummary),
    TeacherPerformance(TeacherPerformanceSnapshot),
    /// Illustrative lists used by the keyword fallback.
    Guidance(Guidance),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Guidance(pub BTreeMap<&'static str, &'static [&'static str]>);

impl Guidance {
    pub fn single(label: &'static str, items: &'static [&'static str]) -> Self {
        Self(BTreeMap::from([(label, items)]))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundCheckTask {
    pub task_id: String,
    pub candidate: String,
    pub verification_types: &'static [&'static str],
    pub status: &'static str,
    pub estimated_completion: &'static str,
    pub assigned_team: &'static str,
    pub next_steps: &'static [&'static str],
    pub process_steps: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstituteTeacher {
    pub id: &'static str,
    pub name: &'static str,
    pub subjects: &'static [&'static str],
    pub grades: &'static [&'static str],
    pub experience_years: u32,
    pub availability: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstituteSearch {
    pub available_teachers: Vec<SubstituteTeacher>,
    /// False when nobody teaches the requested subject and the whole pool is returned.
    pub exact_match: bool,
    pub requested_subject: String,
    pub requested_grade: String,
    pub requested_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiringCertification {
    pub name: &'static str,
    pub subject: &'static str,
    pub expiry_date: String,
    pub days_remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationReport {
    pub report_id: String,
    pub certification_type: String,
    pub timeframe: String,
    pub total_teachers_affected: usize,
    pub urgent_cases: usize,
    pub teachers: Vec<ExpiringCertification>,
    pub actions_required: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentDraft {
    pub document_id: String,
    pub document_type: &'static str,
    pub position: String,
    pub contract_type: String,
    pub template_used: String,
    pub status: &'static str,
    pub next_steps: &'static [&'static str],
    pub estimated_completion: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenedCandidate {
    pub name: &'static str,
    pub score: u32,
    pub qualification: &'static str,
    pub experience_years: u32,
    pub cet_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningSummary {
    pub total_applications: u32,
    pub ai_screened: u32,
    pub top_candidates: Vec<ScreenedCandidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingTask {
    pub task: &'static str,
    pub status: &'static str,
    pub priority: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingChecklist {
    pub checklist_id: String,
    pub employee_type: &'static str,
    pub completion_status: String,
    pub tasks: Vec<OnboardingTask>,
    pub estimated_completion: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceAnalysis {
    pub analysis_id: String,
    pub teacher: String,
    pub performance_period: String,
    pub student_performance_score: f32,
    pub parent_feedback_score: f32,
    pub peer_evaluation_score: f32,
    pub overall_rating: f32,
    pub strengths: &'static [&'static str],
    pub areas_for_improvement: &'static [&'static str],
    pub appraisal_recommendation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecommendation {
    pub course: &'static str,
    pub provider: &'static str,
    pub duration: &'static str,
    pub relevance_score: f32,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevelopmentPlan {
    pub recommendation_id: String,
    pub teacher: String,
    pub recommendations: Vec<CourseRecommendation>,
    pub career_path_alignment: &'static str,
    pub priority: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allowances {
    pub hra: i64,
    pub transport: i64,
    pub special: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deductions {
    pub pf: i64,
    pub esi: i64,
    pub professional_tax: i64,
    pub tds: i64,
}

impl Deductions {
    fn total(&self) -> i64 {
        self.pf + self.esi + self.professional_tax + self.tds
    }
}

/// Monthly salary breakdown in whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollBreakdown {
    pub payroll_id: String,
    pub employee: String,
    pub pay_period: String,
    pub basic_salary: i64,
    pub allowances: Allowances,
    pub deductions: Deductions,
    pub gross_salary: i64,
    pub net_salary: i64,
    pub attendance_days: i64,
    pub leave_days: i64,
    pub calculation_status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedAttendance {
    pub employee: &'static str,
    pub date: String,
    pub issue: &'static str,
    pub severity: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceAnomalyReport {
    pub anomaly_report_id: String,
    pub scan_period: &'static str,
    pub anomalies_found: usize,
    pub flagged_cases: Vec<FlaggedAttendance>,
    pub recommended_actions: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtRiskTeacher {
    pub name: &'static str,
    pub subject: &'static str,
    pub risk_score: f32,
    pub risk_factors: &'static [&'static str],
    pub tenure: &'static str,
    pub intervention_recommended: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetentionRiskReport {
    pub analysis_id: String,
    pub risk_assessment_date: String,
    pub high_risk_teachers: Vec<AtRiskTeacher>,
    pub medium_risk_teachers: usize,
    pub low_risk_teachers: usize,
    pub overall_retention_health: &'static str,
    pub recommendations: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub teacher_name: &'static str,
    pub certificate_type: &'static str,
    pub expiry_date: String,
    pub days_to_expiry: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedReport {
    pub report_type: String,
    pub generated_at: String,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateTrackingSummary {
    pub total_teachers: u32,
    pub expiring_within_30_days: u32,
    pub expiring_within_60_days: u32,
    pub up_to_date: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherPerformanceSnapshot {
    pub teacher_name: String,
    pub current_rating: f32,
    pub student_feedback: f32,
    pub parent_feedback: f32,
    /// Percentage of working days present.
    pub attendance: u32,
    pub risk_score: f32,
    pub recommendations: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Sample school data
// ────────────────────────────────────────────────────────────────────────────

const SUBSTITUTE_POOL: &[SubstituteTeacher] = &[
    SubstituteTeacher {
        id: "1",
        name: "Mr. Ravi Kumar",
        subjects: &["Physics", "Mathematics"],
        grades: &["8", "9", "10"],
        experience_years: 5,
        availability: "Full day",
        contact: "+91 98765 43210",
    },
    SubstituteTeacher {
        id: "2",
        name: "Ms. Priya Singh",
        subjects: &["Physics", "Chemistry"],
        grades: &["8", "9"],
        experience_years: 3,
        availability: "2-5 PM",
        contact: "+91 98765 43211",
    },
    SubstituteTeacher {
        id: "3",
        name: "Mrs. Meena Iyer",
        subjects: &["English", "Social Science"],
        grades: &["6", "7", "8"],
        experience_years: 7,
        availability: "Full day",
        contact: "+91 98765 43212",
    },
];

/// (name, subject, days until expiry)
const EXPIRING_CERTIFICATIONS: &[(&str, &str, i64)] = &[
    ("Mrs. Sunita Devi", "English", 77),
    ("Ms. Priya Sharma", "Mathematics", 92),
    ("Mr. Rajesh Kumar", "Science", 128),
];

/// (teacher, certificate, days until expiry)
const CERTIFICATE_EXPIRY_ENTRIES: &[(&str, &str, i64)] = &[
    ("Mr. Rohit Patel", "POCSO Training", 30),
    ("Ms. Anjali Sharma", "B.Ed", 45),
];

const RETENTION_POOL: &[AtRiskTeacher] = &[
    AtRiskTeacher {
        name: "Mr. Arjun Singh",
        subject: "Physics",
        risk_score: 0.78,
        risk_factors: &[
            "Increased leave frequency",
            "Performance decline",
            "Low engagement",
        ],
        tenure: "2 years",
        intervention_recommended: "Career development discussion",
    },
    AtRiskTeacher {
        name: "Ms. Kavya Reddy",
        subject: "Chemistry",
        risk_score: 0.72,
        risk_factors: &["Market salary gap", "Limited growth opportunities"],
        tenure: "3 years",
        intervention_recommended: "Salary review and promotion consideration",
    },
];
const MEDIUM_RISK_COUNT: usize = 5;
const LOW_RISK_COUNT: usize = 23;

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

fn reference_id(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}_{}", now.timestamp_millis())
}

fn date_after(now: DateTime<Utc>, days: i64) -> String {
    (now.date_naive() + Duration::days(days)).to_string()
}

/// Indian school years run April to March.
fn academic_year(now: DateTime<Utc>) -> String {
    let start = if now.month() >= 4 {
        now.year()
    } else {
        now.year() - 1
    };
    format!("Academic Year {start}-{:02}", (start + 1) % 100)
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

pub fn initiate_background_check(
    params: &CandidateParams,
    now: DateTime<Utc>,
) -> BackgroundCheckTask {
    BackgroundCheckTask {
        task_id: reference_id("BGV", now),
        candidate: params.candidate_name.clone(),
        verification_types: &["police_verification", "reference_check"],
        status: "initiated",
        estimated_completion: "7-10 business days",
        assigned_team: "Background Verification Team",
        next_steps: &[
            "Police verification form submitted to local authority",
            "Reference check emails sent to provided contacts",
            "POCSO clearance verification initiated",
        ],
        process_steps: BACKGROUND_CHECK_STEPS,
    }
}

/// Teachers covering the requested subject; the whole pool when nobody does.
pub fn find_substitute_teachers(params: &SubstituteParams) -> SubstituteSearch {
    let matching: Vec<SubstituteTeacher> = SUBSTITUTE_POOL
        .iter()
        .filter(|t| {
            t.subjects
                .iter()
                .any(|s| s.eq_ignore_ascii_case(&params.subject))
        })
        .cloned()
        .collect();

    let exact_match = !matching.is_empty();
    let available_teachers = if exact_match {
        matching
    } else {
        SUBSTITUTE_POOL.to_vec()
    };

    SubstituteSearch {
        available_teachers,
        exact_match,
        requested_subject: params.subject.clone(),
        requested_grade: params.grade.clone(),
        requested_date: params.date.clone(),
    }
}

pub fn generate_certification_report(
    params: &CertificationReportParams,
    now: DateTime<Utc>,
) -> CertificationReport {
    let teachers: Vec<ExpiringCertification> = EXPIRING_CERTIFICATIONS
        .iter()
        .map(|&(name, subject, days)| ExpiringCertification {
            name,
            subject,
            expiry_date: date_after(now, days),
            days_remaining: days,
        })
        .collect();
    let urgent_cases = teachers
        .iter()
        .filter(|t| t.days_remaining <= URGENT_EXPIRY_DAYS)
        .count();

    CertificationReport {
        report_id: reference_id("CERT_RPT", now),
        certification_type: params.certification_type.clone(),
        timeframe: params.time_period.clone(),
        total_teachers_affected: teachers.len(),
        urgent_cases,
        teachers,
        actions_required: &[
            "Send renewal reminders to affected teachers",
            "Schedule certification training sessions",
            "Update compliance tracking system",
        ],
    }
}

pub fn generate_document(params: &DocumentParams, now: DateTime<Utc>) -> DocumentDraft {
    let cadre = params
        .position
        .split_whitespace()
        .next()
        .unwrap_or("Teacher")
        .to_uppercase();

    DocumentDraft {
        document_id: reference_id("DOC", now),
        document_type: "appointment_letter",
        position: format!("{} - {}", params.position, params.subject),
        contract_type: params.contract_type.clone(),
        template_used: format!("{cadre}_Appointment_Template_{}", now.year()),
        status: "draft_ready",
        next_steps: &[
            "Review draft document",
            "Fill candidate-specific details",
            "Get principal approval",
            "Send for final signature",
        ],
        estimated_completion: "24 hours",
    }
}

/// Candidates ordered best score first.
pub fn screen_applications() -> ScreeningSummary {
    let mut top_candidates = vec![
        ScreenedCandidate {
            name: "Mr. Arun Kumar",
            score: 87,
            qualification: "M.A Mathematics, B.Ed",
            experience_years: 5,
            cet_score: 78,
        },
        ScreenedCandidate {
            name: "Dr. Kavita Verma",
            score: 92,
            qualification: "M.Sc Physics, B.Ed",
            experience_years: 8,
            cet_score: 85,
        },
    ];
    top_candidates.sort_by(|a, b| b.score.cmp(&a.score));

    ScreeningSummary {
        total_applications: 15,
        ai_screened: 12,
        top_candidates,
    }
}

pub fn generate_onboarding_checklist(now: DateTime<Utc>) -> OnboardingChecklist {
    let tasks = vec![
        ("Submit joining documents", "high"),
        ("Complete POCSO training", "high"),
        ("Biometric registration", "medium"),
        ("School handbook review", "medium"),
        ("Curriculum familiarization", "medium"),
        ("Class allocation briefing", "low"),
    ]
    .into_iter()
    .map(|(task, priority)| OnboardingTask {
        task,
        status: "pending",
        priority,
    })
    .collect::<Vec<_>>();

    // A fresh checklist starts with every task pending.
    OnboardingChecklist {
        checklist_id: reference_id("ONBOARD", now),
        employee_type: "new_teacher",
        completion_status: format!("0/{} completed", tasks.len()),
        tasks,
        estimated_completion: "2-3 weeks",
    }
}

pub fn analyze_performance(params: &TeacherParams, now: DateTime<Utc>) -> PerformanceAnalysis {
    let student = 4.2_f32;
    let parent = 4.5_f32;
    let peer = 4.3_f32;
    let overall_rating = round2((student + parent + peer) / 3.0);

    let appraisal_recommendation = if overall_rating >= 4.0 {
        "Exceeds expectations - Recommend for promotion"
    } else if overall_rating >= 3.0 {
        "Meets expectations - Continue current responsibilities"
    } else {
        "Below expectations - Create a development plan"
    };

    PerformanceAnalysis {
        analysis_id: reference_id("PERF", now),
        teacher: params.teacher_name.clone(),
        performance_period: academic_year(now),
        student_performance_score: student,
        parent_feedback_score: parent,
        peer_evaluation_score: peer,
        overall_rating,
        strengths: &[
            "Excellent student engagement",
            "Strong subject knowledge",
            "Good communication with parents",
        ],
        areas_for_improvement: &["Digital teaching tools usage", "Assessment variety"],
        appraisal_recommendation,
    }
}

pub fn recommend_development(params: &TeacherParams, now: DateTime<Utc>) -> DevelopmentPlan {
    DevelopmentPlan {
        recommendation_id: reference_id("DEV", now),
        teacher: params.teacher_name.clone(),
        recommendations: vec![
            CourseRecommendation {
                course: "Advanced Digital Pedagogy",
                provider: "NCERT",
                duration: "40 hours",
                relevance_score: 0.92,
                reason: "Based on need for digital teaching enhancement",
            },
            CourseRecommendation {
                course: "Student Assessment Strategies",
                provider: "CBSE Training Institute",
                duration: "30 hours",
                relevance_score: 0.87,
                reason: "To improve assessment variety and effectiveness",
            },
        ],
        career_path_alignment: "Senior Teacher Track",
        priority: "High",
    }
}

/// Derives the monthly breakdown from basic pay.
///
/// HRA 40% of basic, fixed transport and special allowances,
/// PF 12% of basic, ESI 0.75% of gross, flat professional tax.
pub fn calculate_payroll(
    params: &PayrollParams,
    now: DateTime<Utc>,
) -> Result<PayrollBreakdown, String> {
    if params.basic_salary <= 0 {
        return Err(format!(
            "basic_salary must be positive, got {}",
            params.basic_salary
        ));
    }
    if params.basic_salary > MAX_MONTHLY_AMOUNT {
        return Err(format!(
            "basic_salary {} exceeds the monthly ceiling of {MAX_MONTHLY_AMOUNT}",
            params.basic_salary
        ));
    }
    if params.tds < 0 || params.attendance_days < 0 || params.leave_days < 0 {
        return Err("tds, attendance_days and leave_days cannot be negative".to_string());
    }
    if params.tds > MAX_MONTHLY_AMOUNT {
        return Err(format!(
            "tds {} exceeds the monthly ceiling of {MAX_MONTHLY_AMOUNT}",
            params.tds
        ));
    }
    if params.attendance_days > MAX_DAYS_IN_PERIOD || params.leave_days > MAX_DAYS_IN_PERIOD {
        return Err(format!(
            "attendance_days and leave_days cannot exceed {MAX_DAYS_IN_PERIOD}"
        ));
    }

    let basic = params.basic_salary;
    let allowances = Allowances {
        hra: basic * HRA_PERCENT / 100,
        transport: TRANSPORT_ALLOWANCE,
        special: SPECIAL_ALLOWANCE,
    };
    let gross_salary = basic + allowances.hra + allowances.transport + allowances.special;
    let deductions = Deductions {
        pf: basic * PF_PERCENT / 100,
        esi: (gross_salary * ESI_BASIS_POINTS + 5_000) / 10_000,
        professional_tax: PROFESSIONAL_TAX,
        tds: params.tds,
    };
    let net_salary = gross_salary - deductions.total();

    Ok(PayrollBreakdown {
        payroll_id: reference_id("PAY", now),
        employee: params.employee_name.clone(),
        pay_period: params.pay_period.clone(),
        basic_salary: basic,
        allowances,
        deductions,
        gross_salary,
        net_salary,
        attendance_days: params.attendance_days,
        leave_days: params.leave_days,
        calculation_status: "auto_calculated",
    })
}

pub fn detect_attendance_anomalies(now: DateTime<Utc>) -> AttendanceAnomalyReport {
    let flagged_cases = vec![
        FlaggedAttendance {
            employee: "Mr. Vikash Sharma",
            date: date_after(now, -7),
            issue: "Marked present but no biometric entry",
            severity: "high",
        },
        FlaggedAttendance {
            employee: "Ms. Rekha Patel",
            date: date_after(now, -9),
            issue: "Multiple biometric entries",
            severity: "medium",
        },
    ];

    AttendanceAnomalyReport {
        anomaly_report_id: reference_id("ANOM", now),
        scan_period: "Last 30 days",
        anomalies_found: flagged_cases.len(),
        flagged_cases,
        recommended_actions: &[
            "Manual verification required for flagged entries",
            "Update biometric system calibration",
            "Send reminder about proper attendance marking",
        ],
    }
}

pub fn analyze_retention_risk(now: DateTime<Utc>) -> RetentionRiskReport {
    let high_risk_teachers: Vec<AtRiskTeacher> = RETENTION_POOL
        .iter()
        .filter(|t| t.risk_score >= HIGH_RISK_THRESHOLD)
        .cloned()
        .collect();

    let total = high_risk_teachers.len() + MEDIUM_RISK_COUNT + LOW_RISK_COUNT;
    let high_share = high_risk_teachers.len() as f32 / total as f32;
    let overall_retention_health = if high_share < 0.1 {
        "Good"
    } else if high_share < 0.2 {
        "Fair"
    } else {
        "At risk"
    };

    RetentionRiskReport {
        analysis_id: reference_id("RETENTION", now),
        risk_assessment_date: now.to_rfc3339(),
        high_risk_teachers,
        medium_risk_teachers: MEDIUM_RISK_COUNT,
        low_risk_teachers: LOW_RISK_COUNT,
        overall_retention_health,
        recommendations: &[
            "Focus on career development for high-risk staff",
            "Review compensation structure",
            "Implement mentorship programs",
        ],
    }
}

pub fn generate_report(params: &ReportParams, now: DateTime<Utc>) -> GeneratedReport {
    GeneratedReport {
        report_type: params.report_type.clone(),
        generated_at: now.to_rfc3339(),
        entries: CERTIFICATE_EXPIRY_ENTRIES
            .iter()
            .map(|&(teacher_name, certificate_type, days)| ReportEntry {
                teacher_name,
                certificate_type,
                expiry_date: date_after(now, days),
                days_to_expiry: days,
            })
            .collect(),
    }
}

pub fn track_certificates() -> CertificateTrackingSummary {
    CertificateTrackingSummary {
        total_teachers: 45,
        expiring_within_30_days: 3,
        expiring_within_60_days: 7,
        up_to_date: 35,
    }
}

pub fn teacher_performance(params: &TeacherParams) -> TeacherPerformanceSnapshot {
    TeacherPerformanceSnapshot {
        teacher_name: params.teacher_name.clone(),
        current_rating: 4.2,
        student_feedback: 4.1,
        parent_feedback: 4.3,
        attendance: 96,
        risk_score: 0.15,
        recommendations: &[
            "Continue excellent teaching methods",
            "Consider advanced training in digital pedagogy",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    fn payroll_params(basic_salary: i64) -> PayrollParams {
        PayrollParams {
            employee_name: "Mr. Suresh Nair".to_string(),
            pay_period: "March 2025".to_string(),
            basic_salary,
            tds: 3_200,
            attendance_days: 22,
            leave_days: 1,
        }
    }

    #[test]
    fn test_payroll_default_breakdown() {
        let payroll = calculate_payroll(&payroll_params(45_000), fixed_now()).unwrap();
        assert_eq!(payroll.allowances.hra, 18_000);
        assert_eq!(payroll.gross_salary, 70_000);
        assert_eq!(payroll.deductions.pf, 5_400);
        assert_eq!(payroll.deductions.esi, 525);
        assert_eq!(payroll.net_salary, 60_675);
        assert_eq!(payroll.payroll_id, "PAY_1741944600000");
    }

    #[test]
    fn test_payroll_net_is_gross_minus_deductions() {
        let payroll = calculate_payroll(&payroll_params(61_234), fixed_now()).unwrap();
        assert_eq!(
            payroll.net_salary,
            payroll.gross_salary - payroll.deductions.total()
        );
        assert!(payroll.net_salary < payroll.gross_salary);
    }

    #[test]
    fn test_payroll_rejects_non_positive_basic() {
        assert!(calculate_payroll(&payroll_params(0), fixed_now()).is_err());
        assert!(calculate_payroll(&payroll_params(-100), fixed_now()).is_err());
    }

    #[test]
    fn test_payroll_rejects_amounts_above_ceiling() {
        assert!(calculate_payroll(&payroll_params(MAX_MONTHLY_AMOUNT + 1), fixed_now()).is_err());
        assert!(calculate_payroll(&payroll_params(i64::MAX), fixed_now()).is_err());

        let huge_tds = PayrollParams {
            tds: i64::MAX,
            ..payroll_params(45_000)
        };
        assert!(calculate_payroll(&huge_tds, fixed_now()).is_err());
    }

    #[test]
    fn test_payroll_at_ceiling_does_not_overflow() {
        let params = PayrollParams {
            tds: MAX_MONTHLY_AMOUNT,
            ..payroll_params(MAX_MONTHLY_AMOUNT)
        };
        let payroll = calculate_payroll(&params, fixed_now()).unwrap();
        assert_eq!(payroll.allowances.hra, 4_000_000);
        assert_eq!(
            payroll.net_salary,
            payroll.gross_salary - payroll.deductions.total()
        );
    }

    #[test]
    fn test_payroll_rejects_day_counts_beyond_period() {
        let params = PayrollParams {
            attendance_days: 40,
            ..payroll_params(45_000)
        };
        assert!(calculate_payroll(&params, fixed_now()).is_err());
    }

    #[test]
    fn test_payroll_rejects_negative_tds() {
        let params = PayrollParams {
            tds: -1,
            ..payroll_params(45_000)
        };
        assert!(calculate_payroll(&params, fixed_now()).is_err());
    }

    #[test]
    fn test_substitutes_filtered_by_subject() {
        let params = SubstituteParams {
            subject: "chemistry".to_string(),
            grade: "9".to_string(),
            date: "tomorrow".to_string(),
        };
        let search = find_substitute_teachers(&params);
        assert!(search.exact_match);
        assert_eq!(search.available_teachers.len(), 1);
        assert_eq!(search.available_teachers[0].name, "Ms. Priya Singh");
    }

    #[test]
    fn test_substitutes_unknown_subject_returns_whole_pool() {
        let params = SubstituteParams {
            subject: "Sanskrit".to_string(),
            grade: "7".to_string(),
            date: "Monday".to_string(),
        };
        let search = find_substitute_teachers(&params);
        assert!(!search.exact_match);
        assert_eq!(search.available_teachers.len(), SUBSTITUTE_POOL.len());
        assert_eq!(search.requested_subject, "Sanskrit");
    }

    #[test]
    fn test_certification_report_counts_urgent_cases() {
        let params = CertificationReportParams {
            certification_type: "B.Ed".to_string(),
            time_period: "6 months".to_string(),
        };
        let report = generate_certification_report(&params, fixed_now());
        assert_eq!(report.total_teachers_affected, 3);
        assert_eq!(report.urgent_cases, 1);
        assert_eq!(report.teachers[0].expiry_date, "2025-05-30");
    }

    #[test]
    fn test_document_template_follows_cadre() {
        let params = DocumentParams {
            position: "TGT".to_string(),
            subject: "Social Science".to_string(),
            contract_type: "Regular".to_string(),
        };
        let draft = generate_document(&params, fixed_now());
        assert_eq!(draft.position, "TGT - Social Science");
        assert_eq!(draft.template_used, "TGT_Appointment_Template_2025");
    }

    #[test]
    fn test_screening_orders_best_first() {
        let summary = screen_applications();
        assert_eq!(summary.top_candidates[0].name, "Dr. Kavita Verma");
        assert!(summary.top_candidates[0].score >= summary.top_candidates[1].score);
    }

    #[test]
    fn test_new_onboarding_checklist_starts_all_pending() {
        let checklist = generate_onboarding_checklist(fixed_now());
        assert!(checklist.tasks.iter().all(|t| t.status == "pending"));
        assert_eq!(
            checklist.completion_status,
            format!("0/{} completed", checklist.tasks.len())
        );
        assert_eq!(checklist.completion_status, "0/6 completed");
    }

    #[test]
    fn test_performance_analysis_rating_and_period() {
        let params = TeacherParams {
            teacher_name: "Ms. Anita Rao".to_string(),
        };
        let analysis = analyze_performance(&params, fixed_now());
        assert!((analysis.overall_rating - 4.33).abs() < 1e-4);
        assert_eq!(analysis.performance_period, "Academic Year 2024-25");
        assert!(analysis.appraisal_recommendation.starts_with("Exceeds"));
    }

    #[test]
    fn test_academic_year_rolls_over_in_april() {
        let april = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(academic_year(april), "Academic Year 2025-26");
    }

    #[test]
    fn test_retention_lists_only_high_risk() {
        let report = analyze_retention_risk(fixed_now());
        assert!(report
            .high_risk_teachers
            .iter()
            .all(|t| t.risk_score >= HIGH_RISK_THRESHOLD));
        assert_eq!(report.overall_retention_health, "Good");
    }

    #[test]
    fn test_certificate_tracking_buckets_sum_to_total() {
        let summary = track_certificates();
        assert_eq!(
            summary.expiring_within_30_days + summary.expiring_within_60_days + summary.up_to_date,
            summary.total_teachers
        );
    }

    #[test]
    fn test_guidance_serializes_as_single_key_object() {
        let guidance = ActionResult::Guidance(Guidance::single("process_steps", BACKGROUND_CHECK_STEPS));
        let value = serde_json::to_value(&guidance).unwrap();
        assert_eq!(value["process_steps"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_untagged_result_serializes_payload_fields() {
        let params = CandidateParams {
            candidate_name: "Anjali Verma".to_string(),
        };
        let result = ActionResult::BackgroundCheck(initiate_background_check(&params, fixed_now()));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["candidate"], "Anjali Verma");
        assert_eq!(value["status"], "initiated");
        assert!(value.get("BackgroundCheck").is_none());
    }
}
