//! Typed action parameters.
//!
//! The model returns an untyped `entities` bag (and sometimes `parameters`).
//! Each handler gets its own record, coerced once here with documented defaults.
//! `entities` wins over `parameters` when both carry the same key.

use chrono::Utc;
use serde_json::Value;

use crate::assistant::intent::{Entities, ResolvedIntent};

pub const DEFAULT_CANDIDATE: &str = "the candidate";
pub const DEFAULT_TEACHER: &str = "the teacher";
pub const DEFAULT_EMPLOYEE: &str = "the employee";
pub const DEFAULT_BASIC_SALARY: i64 = 45_000;
pub const DEFAULT_TDS: i64 = 3_200;
pub const DEFAULT_ATTENDANCE_DAYS: i64 = 22;
pub const DEFAULT_LEAVE_DAYS: i64 = 1;

/// Read-only view over the two places the model may put extracted values.
pub struct EntityLookup<'a> {
    entities: &'a Entities,
    parameters: Option<&'a Entities>,
}

impl<'a> EntityLookup<'a> {
    pub fn new(intent: &'a ResolvedIntent) -> Self {
        Self {
            entities: &intent.entities,
            parameters: intent.parameters.as_ref(),
        }
    }

    fn raw<'k>(&'k self, keys: &'k [&'k str]) -> impl Iterator<Item = &'a Value> + 'k {
        let sources = [Some(self.entities), self.parameters];
        keys.iter().flat_map(move |key| {
            sources
                .into_iter()
                .flatten()
                .filter_map(move |source| source.get(*key))
        })
    }

    /// First non-blank textual value under any of `keys`. Numbers are stringified.
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        self.raw(keys).find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// First numeric value under any of `keys`, rounded to a whole number.
    /// Accepts rupee notations such as "₹45,000", "Rs. 52000" and "52,000/-".
    /// Values that do not parse cleanly, or do not fit in an `i64`, count as missing.
    pub fn whole_number(&self, keys: &[&str]) -> Option<i64> {
        self.raw(keys).find_map(|value| {
            let number = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => parse_rupees(s),
                _ => None,
            }?;
            let rounded = number.round();
            (rounded.is_finite() && rounded.abs() < i64::MAX as f64).then(|| rounded as i64)
        })
    }
}

const CURRENCY_PREFIXES: [&str; 4] = ["₹", "inr", "rs.", "rs"];

/// Parses an amount written the way Indian payroll documents write it.
fn parse_rupees(raw: &str) -> Option<f64> {
    let lowered = raw.trim().to_lowercase();
    let mut amount = lowered.as_str();
    if let Some(rest) = CURRENCY_PREFIXES
        .iter()
        .find_map(|prefix| amount.strip_prefix(*prefix))
    {
        amount = rest.trim_start();
    }
    amount = amount.strip_suffix("/-").unwrap_or(amount).trim_end();
    amount = amount.strip_suffix("inr").unwrap_or(amount).trim_end();

    let digits: String = amount.chars().filter(|c| *c != ',').collect();
    let well_formed = !digits.is_empty()
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | '+'));
    if !well_formed {
        return None;
    }
    digits.parse::<f64>().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateParams {
    pub candidate_name: String,
}

impl CandidateParams {
    pub fn from_lookup(lookup: &EntityLookup<'_>) -> Self {
        Self {
            candidate_name: lookup
                .text(&["candidate_name", "name", "candidate"])
                .unwrap_or_else(|| DEFAULT_CANDIDATE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubstituteParams {
    pub subject: String,
    pub grade: String,
    pub date: String,
}

impl SubstituteParams {
    pub fn from_lookup(lookup: &EntityLookup<'_>) -> Self {
        Self {
            subject: lookup
                .text(&["subject"])
                .unwrap_or_else(|| "Physics".to_string()),
            grade: lookup
                .text(&["grade", "class"])
                .unwrap_or_else(|| "8".to_string()),
            date: lookup
                .text(&["date"])
                .unwrap_or_else(|| "tomorrow".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificationReportParams {
    pub certification_type: String,
    pub time_period: String,
}

impl CertificationReportParams {
    pub fn from_lookup(lookup: &EntityLookup<'_>) -> Self {
        Self {
            certification_type: lookup
                .text(&["certification_type", "certificate_type"])
                .unwrap_or_else(|| "B.Ed".to_string()),
            time_period: lookup
                .text(&["time_period", "timeframe"])
                .unwrap_or_else(|| "6 months".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentParams {
    pub position: String,
    pub subject: String,
    pub contract_type: String,
}

impl DocumentParams {
    pub fn from_lookup(lookup: &EntityLookup<'_>) -> Self {
        Self {
            position: lookup
                .text(&["position", "position_type"])
                .unwrap_or_else(|| "Teacher".to_string()),
            subject: lookup
                .text(&["subject"])
                .unwrap_or_else(|| "General".to_string()),
            contract_type: lookup
                .text(&["contract_type"])
                .unwrap_or_else(|| "Regular".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherParams {
    pub teacher_name: String,
}

impl TeacherParams {
    pub fn from_lookup(lookup: &EntityLookup<'_>, default_name: &str) -> Self {
        Self {
            teacher_name: lookup
                .text(&["teacher_name", "teacherName", "name"])
                .unwrap_or_else(|| default_name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayrollParams {
    pub employee_name: String,
    pub pay_period: String,
    pub basic_salary: i64,
    pub tds: i64,
    pub attendance_days: i64,
    pub leave_days: i64,
}

impl PayrollParams {
    pub fn from_lookup(lookup: &EntityLookup<'_>) -> Self {
        Self {
            employee_name: lookup
                .text(&["employee_name", "name"])
                .unwrap_or_else(|| DEFAULT_EMPLOYEE.to_string()),
            pay_period: lookup
                .text(&["pay_period", "month"])
                .unwrap_or_else(|| Utc::now().format("%B %Y").to_string()),
            basic_salary: lookup
                .whole_number(&["basic_salary", "basic"])
                .unwrap_or(DEFAULT_BASIC_SALARY),
            tds: lookup.whole_number(&["tds"]).unwrap_or(DEFAULT_TDS),
            attendance_days: lookup
                .whole_number(&["attendance_days"])
                .unwrap_or(DEFAULT_ATTENDANCE_DAYS),
            leave_days: lookup
                .whole_number(&["leave_days"])
                .unwrap_or(DEFAULT_LEAVE_DAYS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportParams {
    pub report_type: String,
}

impl ReportParams {
    pub fn from_lookup(lookup: &EntityLookup<'_>) -> Self {
        Self {
            report_type: lookup
                .text(&["report_type", "reportType"])
                .unwrap_or_else(|| "certificate_expiry".to_string()),
        }
    }
}
