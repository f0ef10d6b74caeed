//! Atlas Document Format Construction
//!
//! Converts a validated `SummaryResult` into the Confluence ADF document
//! shape: an "Activity Content" heading with a bulleted summary list, a
//! "Frequently Asked Questions" heading with alternating Q/A paragraphs, and
//! a trailing `<questions>` block so a downstream consumer can extract the
//! question list without re-parsing the page.

use serde_json::{Value, json};

use crate::types::SummaryResult;

fn text_node(text: &str) -> Value {
    json!({"type": "text", "text": text})
}

fn paragraph(text: &str) -> Value {
    json!({"type": "paragraph", "content": [text_node(text)]})
}

fn heading(text: &str) -> Value {
    json!({
        "type": "heading",
        "attrs": {"level": 2},
        "content": [text_node(text)],
    })
}

fn bullet_list(items: &[String]) -> Value {
    json!({
        "type": "bulletList",
        "content": items
            .iter()
            .map(|item| json!({
                "type": "listItem",
                "content": [paragraph(item)],
            }))
            .collect::<Vec<_>>(),
    })
}

/// Build the ADF document for a summary result.
pub fn build_document(result: &SummaryResult) -> Value {
    let mut content: Vec<Value> = Vec::new();

    content.push(heading("Activity Content"));
    if result.summary.is_empty() {
        content.push(paragraph("No data"));
    } else {
        content.push(bullet_list(&result.summary));
    }

    content.push(heading("Frequently Asked Questions"));
    if result.qa.is_empty() {
        content.push(paragraph("No frequently asked questions."));
    } else {
        for item in &result.qa {
            content.push(paragraph(&format!("Q: {}", item.question)));
            content.push(paragraph(&format!("A: {}", item.answer)));
        }
    }

    content.push(paragraph("<questions>"));
    for (idx, item) in result.qa.iter().enumerate() {
        content.push(paragraph(&format!("{} {}", idx + 1, item.question)));
    }
    content.push(paragraph("</questions>"));

    json!({
        "version": 1,
        "type": "doc",
        "content": content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QAItem;

    fn sample() -> SummaryResult {
        SummaryResult {
            title: "Spring Campaign Brief".to_string(),
            plan: vec!["scope".into(), "draft".into(), "review".into()],
            summary: vec![
                "one.".into(),
                "two.".into(),
                "three.".into(),
                "four.".into(),
                "five.".into(),
            ],
            qa: vec![
                QAItem {
                    question: "When?".into(),
                    answer: "March.".into(),
                },
                QAItem {
                    question: "Who?".into(),
                    answer: "Everyone.".into(),
                },
                QAItem {
                    question: "Fee?".into(),
                    answer: "None.".into(),
                },
            ],
        }
    }

    fn paragraph_texts(doc: &Value) -> Vec<String> {
        doc["content"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|node| node["type"] == "paragraph")
            .map(|node| node["content"][0]["text"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_document_headings_in_order() {
        let doc = build_document(&sample());
        let headings: Vec<&str> = doc["content"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|node| node["type"] == "heading")
            .map(|node| node["content"][0]["text"].as_str().unwrap())
            .collect();
        assert_eq!(
            headings,
            vec!["Activity Content", "Frequently Asked Questions"]
        );
    }

    #[test]
    fn test_summary_rendered_as_bullet_list() {
        let doc = build_document(&sample());
        let bullet = doc["content"]
            .as_array()
            .unwrap()
            .iter()
            .find(|node| node["type"] == "bulletList")
            .unwrap();
        assert_eq!(bullet["content"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_question_block_enumerated() {
        let doc = build_document(&sample());
        let texts = paragraph_texts(&doc);
        let open = texts.iter().position(|t| t == "<questions>").unwrap();
        let close = texts.iter().position(|t| t == "</questions>").unwrap();
        assert_eq!(&texts[open + 1..close], &["1 When?", "2 Who?", "3 Fee?"]);
    }

    #[test]
    fn test_qa_paragraphs_alternate() {
        let doc = build_document(&sample());
        let texts = paragraph_texts(&doc);
        let q = texts.iter().position(|t| t == "Q: When?").unwrap();
        assert_eq!(texts[q + 1], "A: March.");
    }
}
