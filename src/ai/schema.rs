//! Structured-Output Contract Validation
//!
//! Enforces the `SummaryResult` contract against an arbitrary JSON value,
//! typically model-generated. Pure predicate/transform: no I/O, no model
//! dependency, rejects the whole value on the first broken rule with a
//! `SchemaViolation` naming the field.
//!
//! Trimming happens here, as part of validation: accepted values are stored
//! trimmed. The producer is a language model and is never trusted to have
//! honored the contract.

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::types::{QAItem, SchemaViolation, SummaryResult};

/// Title length bounds, in characters after trimming.
pub const TITLE_CHARS: RangeInclusive<usize> = 4..=80;
/// Plan cardinality bounds.
pub const PLAN_ITEMS: RangeInclusive<usize> = 3..=7;
/// Summary cardinality bounds, after trimming and discarding blanks.
pub const SUMMARY_ITEMS: RangeInclusive<usize> = 5..=30;
/// Q&A cardinality bounds.
pub const QA_ITEMS: RangeInclusive<usize> = 3..=20;
/// Minimum question/answer length in characters after trimming.
pub const QA_MIN_CHARS: usize = 2;

/// Validate a candidate value against the structured-output contract.
pub fn validate(value: &Value) -> Result<SummaryResult, SchemaViolation> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaViolation::new("result", "output must be a JSON object"))?;

    // title: trimmed, 4-80 characters
    let title = require_str(object.get("title"), "title")?.trim().to_string();
    let title_chars = title.chars().count();
    if !TITLE_CHARS.contains(&title_chars) {
        return Err(SchemaViolation::new(
            "title",
            format!(
                "expected {} to {} characters after trimming, got {}",
                TITLE_CHARS.start(),
                TITLE_CHARS.end(),
                title_chars
            ),
        ));
    }

    // plan: 3-7 steps
    let plan = require_string_array(object.get("plan"), "plan")?;
    if !PLAN_ITEMS.contains(&plan.len()) {
        return Err(SchemaViolation::new(
            "plan",
            format!(
                "expected {} to {} steps, got {}",
                PLAN_ITEMS.start(),
                PLAN_ITEMS.end(),
                plan.len()
            ),
        ));
    }

    // summary: 5-30 non-blank trimmed items, no bullet markers
    let raw_summary = require_string_array(object.get("summary"), "summary")?;
    let summary: Vec<String> = raw_summary
        .iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    if !SUMMARY_ITEMS.contains(&summary.len()) {
        return Err(SchemaViolation::new(
            "summary",
            format!(
                "expected {} to {} items after trimming, got {}",
                SUMMARY_ITEMS.start(),
                SUMMARY_ITEMS.end(),
                summary.len()
            ),
        ));
    }
    // Content-shape rule, checked independently of cardinality: the model is
    // instructed not to emit markdown bullets.
    if let Some(item) = summary.iter().find(|item| item.starts_with(['-', '*'])) {
        return Err(SchemaViolation::new(
            "summary",
            format!("items must not start with a bullet marker: {:?}", item),
        ));
    }

    // qa: 3-20 items, question/answer each >=2 chars after trimming
    let qa_value = object
        .get("qa")
        .ok_or_else(|| SchemaViolation::new("qa", "missing field"))?;
    let qa_array = qa_value
        .as_array()
        .ok_or_else(|| SchemaViolation::new("qa", "expected an array"))?;
    if !QA_ITEMS.contains(&qa_array.len()) {
        return Err(SchemaViolation::new(
            "qa",
            format!(
                "expected {} to {} items, got {}",
                QA_ITEMS.start(),
                QA_ITEMS.end(),
                qa_array.len()
            ),
        ));
    }
    let mut qa = Vec::with_capacity(qa_array.len());
    for item in qa_array {
        let question = require_str(item.get("question"), "qa")?.trim().to_string();
        let answer = require_str(item.get("answer"), "qa")?.trim().to_string();
        if question.chars().count() < QA_MIN_CHARS {
            return Err(SchemaViolation::new(
                "qa",
                format!(
                    "question must be at least {} characters after trimming: {:?}",
                    QA_MIN_CHARS, question
                ),
            ));
        }
        if answer.chars().count() < QA_MIN_CHARS {
            return Err(SchemaViolation::new(
                "qa",
                format!(
                    "answer must be at least {} characters after trimming: {:?}",
                    QA_MIN_CHARS, answer
                ),
            ));
        }
        qa.push(QAItem { question, answer });
    }

    Ok(SummaryResult {
        title,
        plan,
        summary,
        qa,
    })
}

fn require_str<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<&'a str, SchemaViolation> {
    value
        .ok_or_else(|| SchemaViolation::new(field, "missing field"))?
        .as_str()
        .ok_or_else(|| SchemaViolation::new(field, "expected a string"))
}

fn require_string_array(
    value: Option<&Value>,
    field: &'static str,
) -> Result<Vec<String>, SchemaViolation> {
    let array = value
        .ok_or_else(|| SchemaViolation::new(field, "missing field"))?
        .as_array()
        .ok_or_else(|| SchemaViolation::new(field, "expected an array"))?;

    array
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| SchemaViolation::new(field, "expected an array of strings"))
        })
        .collect()
}
