//! Prompt construction from blog request parameters

use shared::BlogRequest;

/// Build the provider-agnostic generation prompt
///
/// Pure and total: any `BlogRequest`, including one with empty optional
/// fields, produces a prompt string. The literal tone, audience, and word
/// count values always appear in the output.
pub fn build_prompt(request: &BlogRequest) -> String {
    let tone = request.tone.label().to_lowercase();

    let sections = request
        .sections
        .iter()
        .map(|section| section.label())
        .collect::<Vec<_>>()
        .join(", ");

    let keywords = match request.keywords.as_deref() {
        Some(list) if !list.trim().is_empty() => list,
        _ => "none specified",
    };

    let title_instruction = match request.title.as_deref() {
        Some(title) if !title.trim().is_empty() => format!("Use this title: {title}"),
        _ => "Generate an engaging title".to_string(),
    };

    let style_line = request
        .style
        .map(|style| format!("\n- Writing style: {}", style.label().to_lowercase()))
        .unwrap_or_default();

    format!(
        r#"Write a {tone} blog post about: {topic}

{title_instruction}

Guidelines:
- Target audience: {audience}
- Approximate word count: {word_count}
- Include these sections: {sections}
- Incorporate these keywords where natural: {keywords}
- Write in a {tone} tone{style_line}
- Format the blog using markdown with appropriate headers, subheaders, and formatting
- Create content that is informative, engaging, and valuable to readers

The blog post should be well-structured, with a compelling introduction,
substantive body content, and a strong conclusion if requested."#,
        topic = request.topic,
        audience = request.audience,
        word_count = request.word_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Section, Tone, WritingStyle};

    fn request_for(topic: &str) -> BlogRequest {
        BlogRequest {
            topic: topic.to_string(),
            ..BlogRequest::default()
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = request_for("rust error handling");

        assert_eq!(build_prompt(&request), build_prompt(&request));
    }

    #[test]
    fn test_prompt_contains_parameter_values_verbatim() {
        let mut request = request_for("home coffee roasting");
        request.tone = Tone::Enthusiastic;
        request.audience = "Coffee hobbyists".to_string();
        request.word_count = 1200;

        let prompt = build_prompt(&request);

        assert!(prompt.contains("enthusiastic"));
        assert!(prompt.contains("Coffee hobbyists"));
        assert!(prompt.contains("1200"));
        assert!(prompt.contains("home coffee roasting"));
    }

    #[test]
    fn test_empty_keywords_become_none_specified() {
        let mut request = request_for("topic");
        request.keywords = None;
        assert!(build_prompt(&request).contains("none specified"));

        request.keywords = Some("   ".to_string());
        assert!(build_prompt(&request).contains("none specified"));

        request.keywords = Some("espresso, grinder, crema".to_string());
        let prompt = build_prompt(&request);
        assert!(prompt.contains("espresso, grinder, crema"));
        assert!(!prompt.contains("none specified"));
    }

    #[test]
    fn test_title_instruction_selection() {
        let mut request = request_for("topic");
        assert!(build_prompt(&request).contains("Generate an engaging title"));

        request.title = Some("The Perfect Roast".to_string());
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Use this title: The Perfect Roast"));
        assert!(!prompt.contains("Generate an engaging title"));
    }

    #[test]
    fn test_sections_joined_in_order() {
        let mut request = request_for("topic");
        request.sections = vec![Section::Introduction, Section::Faq, Section::CallToAction];

        let prompt = build_prompt(&request);

        assert!(prompt.contains("Include these sections: Introduction, FAQ, Call to Action"));
    }

    #[test]
    fn test_optional_style_line() {
        let mut request = request_for("topic");
        assert!(!build_prompt(&request).contains("Writing style"));

        request.style = Some(WritingStyle::Narrative);
        assert!(build_prompt(&request).contains("- Writing style: narrative"));
    }

    #[test]
    fn test_total_for_empty_request() {
        let prompt = build_prompt(&BlogRequest::default());

        // Empty topic and sections still yield a well-formed prompt
        assert!(prompt.starts_with("Write a professional blog post about:"));
        assert!(prompt.contains("none specified"));
    }
}
