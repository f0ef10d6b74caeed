//! Validated Summarization Output
//!
//! `SummaryResult` is the structured-output contract a summarization run must
//! produce. Instances are only ever constructed by `ai::schema::validate`, so
//! holding one means every cardinality and content rule has been checked.
//! Results are immutable and request-scoped; nothing here persists them.

use serde::Serialize;

/// One frequently-asked question with its answer.
///
/// Both fields are non-blank and at least two characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QAItem {
    pub question: String,
    pub answer: String,
}

/// Validated structured result of a summarization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    /// Page-worthy title, trimmed, 4 to 80 characters.
    pub title: String,
    /// Conceptual execution steps, 3 to 7 entries.
    pub plan: Vec<String>,
    /// Key points, 5 to 30 entries, no bullet markers.
    pub summary: Vec<String>,
    /// Frequently asked questions, 3 to 20 entries.
    pub qa: Vec<QAItem>,
}

impl SummaryResult {
    /// Render the result as plain text: a summary section, a Q&A section, and
    /// a trailing `<questions>` block listing the enumerated question texts so
    /// a downstream consumer can extract them without re-parsing the page.
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = vec!["## Activity Content".to_string()];
        lines.extend(self.summary.iter().cloned());
        lines.push(String::new());
        lines.push("## Frequently Asked Questions".to_string());
        for item in &self.qa {
            lines.push(format!("Q: {}", item.question));
            lines.push(format!("A: {}", item.answer));
        }
        lines.push(String::new());
        lines.push("<questions>".to_string());
        for (idx, item) in self.qa.iter().enumerate() {
            lines.push(format!("{} {}", idx + 1, item.question));
        }
        lines.push("</questions>\n".to_string());
        lines.join("\n")
    }
}

/// Recover the ordered question list from a rendered `<questions>` block.
///
/// Inverse of the block emitted by [`SummaryResult::render_text`]: each line
/// between the sentinel tags is `"{index} {question}"`.
pub fn extract_questions(rendered: &str) -> Vec<String> {
    let mut questions = Vec::new();
    let mut in_block = false;
    for line in rendered.lines() {
        match line.trim() {
            "<questions>" => in_block = true,
            "</questions>" => break,
            trimmed if in_block => {
                if let Some((_, question)) = trimmed.split_once(' ') {
                    questions.push(question.to_string());
                }
            }
            _ => {}
        }
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SummaryResult {
        SummaryResult {
            title: "Spring Campaign Brief".to_string(),
            plan: vec!["scope".into(), "draft".into(), "review".into()],
            summary: vec![
                "Point one.".into(),
                "Point two.".into(),
                "Point three.".into(),
                "Point four.".into(),
                "Point five.".into(),
            ],
            qa: vec![
                QAItem {
                    question: "When does it start?".into(),
                    answer: "March 1st.".into(),
                },
                QAItem {
                    question: "Who can join?".into(),
                    answer: "All members.".into(),
                },
                QAItem {
                    question: "Is there a fee?".into(),
                    answer: "No.".into(),
                },
            ],
        }
    }

    #[test]
    fn test_render_sections() {
        let text = sample().render_text();
        assert!(text.starts_with("## Activity Content\n"));
        assert!(text.contains("\n## Frequently Asked Questions\n"));
        assert!(text.contains("Q: When does it start?\nA: March 1st."));
        assert!(text.ends_with("</questions>\n"));
    }

    #[test]
    fn test_question_block_round_trip() {
        let result = sample();
        let rendered = result.render_text();
        let questions = extract_questions(&rendered);
        let expected: Vec<String> = result.qa.iter().map(|item| item.question.clone()).collect();
        assert_eq!(questions, expected);
    }

    #[test]
    fn test_extract_questions_ignores_text_outside_block() {
        let text = "1 not a question\n<questions>\n1 real question\n</questions>\n2 also not";
        assert_eq!(extract_questions(text), vec!["real question".to_string()]);
    }

    #[test]
    fn test_extract_questions_empty_without_block() {
        assert!(extract_questions("## Activity Content\nno block here").is_empty());
    }
}
