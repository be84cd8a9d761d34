use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum length of a node label, in characters. Longer input is truncated.
pub const MAX_TEXT_LEN: usize = 300;

/// Opaque node identifier. Allocated monotonically by the store and never
/// reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub text: String,
    pub parent: Option<NodeId>,
    /// Child order is significant: it decides left/right alternation in the
    /// center layout and row order in the top layout.
    pub children: Vec<NodeId>,
    pub created_ms: u64,
    pub modified_ms: u64,
    pub collapsed: bool,
}

impl Node {
    pub fn new(text: &str, parent: Option<NodeId>) -> Self {
        let now = now_ms();
        Self {
            text: sanitize_text(text),
            parent,
            children: Vec::new(),
            created_ms: now,
            modified_ms: now,
            collapsed: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Normalizes a label: strips angle brackets and truncates to
/// [`MAX_TEXT_LEN`] characters. Input is never rejected, only normalized.
pub fn sanitize_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(MAX_TEXT_LEN)
        .collect()
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
