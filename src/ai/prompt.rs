//! Prompt Templates
//!
//! System/human template pairs per source kind, interpolated with the source
//! URL, the aggregated content, and machine-readable format instructions
//! describing the expected JSON schema. The design-document pair instructs
//! the model to ignore UI-design details; the wiki pair does not.

use crate::config::PromptConfig;
use crate::source::SourceKind;

use super::provider::PromptMessages;

pub const DEFAULT_DESIGN_SYSTEM_PROMPT: &str = "\
You are a product analyst who reads design documents and reports conclusions. Follow these rules:\n\
1. First produce a title of 4-80 characters suitable as a wiki page title.\n\
2. Ignore information related to UI design details.\n\
3. List 3-7 execution steps, each describing only the conceptual level.\n\
4. Summarize the document into at least 10 and at most 30 key points, each a complete sentence without bullet markers.\n\
5. Provide at least 5 and at most 15 frequently asked question/answer pairs. If fewer can be found, provide all you found.\n\
6. Cross-check dates and amounts between summary and answers; flag uncertain values in natural language.\n\
7. Output strictly as a single JSON object matching the given schema.";

pub const DEFAULT_DESIGN_HUMAN_TEMPLATE: &str = "\
Url: {url}\n\
Provide a title suitable for a wiki page, then summarize this design document in at least 10 key points, and provide at least 5 frequently asked questions with answers.\n\
<document_content>\n{content}\n</document_content>\n\
{format_instructions}";

pub const DEFAULT_WIKI_SYSTEM_PROMPT: &str = "\
You are a product analyst who reads corporate documents and reports conclusions. Follow these rules:\n\
1. First produce a title of 4-80 characters suitable as a wiki page title.\n\
2. List 3-7 execution steps, each describing only the conceptual level.\n\
3. Summarize the document into at least 10 and at most 30 key points, each a complete sentence without bullet markers.\n\
4. Provide at least 5 and at most 15 frequently asked question/answer pairs. If fewer can be found, provide all you found.\n\
5. Cross-check dates and amounts between summary and answers; flag uncertain values in natural language.\n\
6. Output strictly as a single JSON object matching the given schema.";

pub const DEFAULT_WIKI_HUMAN_TEMPLATE: &str = "\
Url: {url}\n\
Provide a title suitable for a wiki page, then summarize this wiki page in at least 10 key points, and provide at least 5 frequently asked questions with answers.\n\
<document_content>\n{content}\n</document_content>\n\
{format_instructions}";

/// Machine-readable description of the expected output schema, appended to
/// every human message. Mirrors the rules enforced by `ai::schema`.
pub fn format_instructions() -> String {
    r#"Respond with a single JSON object, no markdown fences, matching this schema:
{
  "title": "string, 4-80 characters, usable as a page title",
  "plan": ["3 to 7 strings, conceptual execution steps"],
  "summary": ["5 to 30 strings, complete sentences, never starting with - or *"],
  "qa": [{"question": "string, at least 2 characters", "answer": "string, at least 2 characters"}]
}
The qa array must contain 3 to 20 items. Respond ONLY with the JSON object."#
        .to_string()
}

/// Build the message pair for a summarization run.
pub fn build_messages(
    prompts: &PromptConfig,
    kind: SourceKind,
    url: &str,
    content: &str,
) -> PromptMessages {
    let (system, template) = match kind {
        SourceKind::Design => (&prompts.design_system, &prompts.design_template),
        SourceKind::Wiki => (&prompts.wiki_system, &prompts.wiki_template),
    };

    let human = template
        .replace("{url}", url)
        .replace("{content}", content)
        .replace("{format_instructions}", &format_instructions());

    PromptMessages {
        system: system.clone(),
        human,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromptConfig;

    #[test]
    fn test_design_template_selected_for_design_kind() {
        let prompts = PromptConfig::default();
        let messages = build_messages(
            &prompts,
            SourceKind::Design,
            "https://figma.com/file/a",
            "body",
        );
        assert!(messages.system.contains("Ignore information related to UI design"));
    }

    #[test]
    fn test_wiki_template_has_no_ui_instruction() {
        let prompts = PromptConfig::default();
        let messages = build_messages(
            &prompts,
            SourceKind::Wiki,
            "https://acme.atlassian.net/wiki/spaces/A/pages/1",
            "body",
        );
        assert!(!messages.system.contains("UI design"));
    }

    #[test]
    fn test_interpolation_fills_all_placeholders() {
        let prompts = PromptConfig::default();
        let messages = build_messages(
            &prompts,
            SourceKind::Design,
            "https://example.test/u",
            "THE CONTENT",
        );
        assert!(messages.human.contains("Url: https://example.test/u"));
        assert!(messages.human.contains("THE CONTENT"));
        assert!(messages.human.contains("single JSON object"));
        assert!(!messages.human.contains("{url}"));
        assert!(!messages.human.contains("{content}"));
        assert!(!messages.human.contains("{format_instructions}"));
    }
}
