//! Light-markup-to-HTML conversion for assistant replies.
//!
//! The generative-language provider answers in a markdown dialect (bold,
//! bullet lists, single newlines between lines). Replies are rendered to
//! HTML with `pulldown-cmark`; single newlines are promoted to hard breaks
//! so line-by-line answers keep their shape.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render assistant reply markup to an HTML fragment.
pub fn render_markup(text: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options).map(|event| match event {
        // Provider output uses single newlines as line separators.
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bold() {
        assert_eq!(
            render_markup("Это **важно**."),
            "<p>Это <strong>важно</strong>.</p>\n"
        );
    }

    #[test]
    fn renders_bullet_list() {
        let html = render_markup("* один\n* два");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>один</li>"));
        assert!(html.contains("<li>два</li>"));
    }

    #[test]
    fn single_newline_becomes_hard_break() {
        let html = render_markup("строка один\nстрока два");
        assert!(html.contains("<br />"));
    }

    #[test]
    fn plain_text_is_wrapped_in_paragraph() {
        assert_eq!(render_markup("привет"), "<p>привет</p>\n");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_markup(""), "");
    }
}
