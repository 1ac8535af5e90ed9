//! Combined document formatting

/// Inserted before every block, the first one included
pub const BLOCK_SEPARATOR: &str = "\n\n\n";

/// Format one file as a block: `name:`, a rule of `=` one longer than the
/// name in characters, a blank line, then the raw content.
pub fn format_block(name: &str, content: &str) -> String {
    let rule = "=".repeat(name.chars().count() + 1);
    format!("{name}:\n{rule}\n\n{content}")
}

/// Accumulates blocks in insertion order
#[derive(Debug, Default, Clone)]
pub struct CombinedDocument {
    text: String,
}

impl CombinedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_block(&mut self, name: &str, content: &str) {
        self.text.push_str(BLOCK_SEPARATOR);
        self.text.push_str(&format_block(name, content));
    }

    /// Final text with outer whitespace removed
    pub fn finish(self) -> String {
        self.text.trim_matches(is_strippable).to_string()
    }
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
