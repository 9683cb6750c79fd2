//! Markdown rendering and plain-text extraction

use anyhow::Result;
use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Marker separating a hand-picked excerpt from the rest of a post
pub const MORE_MARKER: &str = "<!-- more -->";

/// Markdown renderer
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front-matter is stripped before rendering, so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        Ok(html_output)
    }

    /// Text content of a markdown document with all markup removed.
    ///
    /// Block boundaries become single spaces; runs of whitespace collapse.
    pub fn plain_text(&self, markdown: &str) -> String {
        let mut text = String::with_capacity(markdown.len());
        for event in Parser::new_ext(markdown, self.options) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::Start(Tag::Item) => text.push(' '),
                Event::End(
                    TagEnd::Paragraph
                    | TagEnd::Heading(_)
                    | TagEnd::CodeBlock
                    | TagEnd::Item
                    | TagEnd::TableCell,
                ) => text.push(' '),
                _ => {}
            }
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Split content at the more marker into (excerpt, remaining)
    pub fn split_excerpt(content: &str) -> (Option<&str>, &str) {
        match content.find(MORE_MARKER) {
            Some(pos) => (
                Some(content[..pos].trim()),
                content[pos + MORE_MARKER.len()..].trim(),
            ),
            None => (None, content),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorten text to at most `length` characters, cutting on a word boundary
/// and appending an ellipsis when anything was removed.
pub fn prune(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let mut pruned = String::new();
    for word in text.split_whitespace() {
        let extra = if pruned.is_empty() { 0 } else { 1 };
        if pruned.chars().count() + extra + word.chars().count() > length {
            break;
        }
        if extra == 1 {
            pruned.push(' ');
        }
        pruned.push_str(word);
    }

    // A single word longer than the limit gets cut mid-word
    if pruned.is_empty() {
        pruned = text.chars().take(length).collect();
    }

    let pruned = pruned.trim_end_matches(|c: char| c.is_ascii_punctuation());
    format!("{}…", pruned)
}

/// Count words in plain text; each CJK character counts as one word
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if ('\u{4E00}'..='\u{9FFF}').contains(&c) {
            count += 1;
            in_word = false;
        } else if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }

    count
}
