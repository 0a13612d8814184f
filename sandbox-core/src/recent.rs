//! Most-recently-used command labels.

use serde::{Deserialize, Serialize};

/// Number of recent commands kept.
pub const RECENT_LIMIT: usize = 4;

/// Distinct display labels, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentCommands {
    entries: Vec<String>,
}

impl RecentCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `display` to the front, dropping any earlier copy of it.
    /// Empty labels are ignored.
    pub fn record(&mut self, display: &str) {
        if display.is_empty() {
            return;
        }
        self.entries.retain(|entry| entry != display);
        self.entries.insert(0, display.to_string());
        self.entries.truncate(RECENT_LIMIT);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuse_moves_entry_to_front() {
        let mut recent = RecentCommands::new();
        recent.record("add about");
        recent.record("make fx");
        recent.record("add about");
        assert_eq!(recent.as_slice(), ["add about", "make fx"]);
    }

    #[test]
    fn list_is_capped() {
        let mut recent = RecentCommands::new();
        for cmd in ["a", "b", "c", "d", "e", "f"] {
            recent.record(cmd);
        }
        assert_eq!(recent.len(), RECENT_LIMIT);
        assert_eq!(recent.as_slice()[0], "f");
        assert!(!recent.as_slice().contains(&"a".to_string()));
    }

    #[test]
    fn empty_display_is_ignored() {
        let mut recent = RecentCommands::new();
        recent.record("");
        assert!(recent.is_empty());
    }
}
