//! Builder-style helper for constructing **Markdown prompts**.
//!
//! `PromptBuilder` offers a fluent API so prompt text is assembled from
//! headings, bullets and fenced blocks instead of one long format string.
//! Every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use formwright_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_section_h2("Output contract")
//!     .add_bullet("Respond with JSON only.")
//!     .finalize();
//!
//! assert_eq!(
//!     md,
//!     "## Output contract\n- Respond with JSON only.\n"
//! );
//! ```
//!
//! Whitespace is emitted exactly as requested; the builder never reflows or
//! escapes its input, so the same calls always yield the same string.

use std::fmt::Display;

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the assembled markdown.
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(self, line: impl Display) -> Self {
        self.add_line(format_args!("## {line}"))
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        self.buffer.push_str(&line.to_string());
        self.buffer.push('\n');
        self
    }

    /// Add a `- ` list item.
    pub fn add_bullet(self, line: impl Display) -> Self {
        self.add_line(format_args!("- {line}"))
    }

    /// Embed a code block fenced as `json`.
    pub fn add_text_json(self, content: impl Display) -> Self {
        self.add_line("```json").add_line(content).add_line("```")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
