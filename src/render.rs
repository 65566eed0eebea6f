//! Truncation policy for table cells.
//!
//! Cells are plain data; escaping happens when the Tera templates render
//! them, and no template marks record text as `safe`.

use serde::Serialize;

/// Longest text shown inline before it is cut.
pub const TRUNCATE_AT: usize = 28;
/// Number of skill badges shown inline.
pub const MAX_SKILL_BADGES: usize = 6;

const ELLIPSIS: char = '…';

/// Cuts `text` to at most `max` characters. Returns `None` when it already fits.
pub fn truncate_chars(text: &str, max: usize) -> Option<String> {
    let (cut, _) = text.char_indices().nth(max)?;
    let mut short = text[..cut].to_string();
    short.push(ELLIPSIS);
    Some(short)
}

/// Text cell with an optional "See more" payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TextCell {
    /// Inline text, cut with an ellipsis when longer than [`TRUNCATE_AT`].
    pub text: String,
    /// Untouched original, present only when `text` was cut.
    pub full: Option<String>,
}

impl TextCell {
    pub fn new(raw: &str) -> Self {
        match truncate_chars(raw, TRUNCATE_AT) {
            Some(short) => Self {
                text: short,
                full: Some(raw.to_string()),
            },
            None => Self {
                text: raw.to_string(),
                full: None,
            },
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.full.is_some()
    }
}

/// Skill badges with the full list kept for the "See more" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SkillsCell {
    pub badges: Vec<String>,
    /// All skills in original order, present only when some were hidden.
    pub all: Option<Vec<String>>,
}

impl SkillsCell {
    pub fn new(skills: &[String]) -> Self {
        let badges = skills.iter().take(MAX_SKILL_BADGES).cloned().collect();
        let all = (skills.len() > MAX_SKILL_BADGES).then(|| skills.to_vec());
        Self { badges, all }
    }
}
