//! Combat log - ordered transcript of a run

use serde::{Deserialize, Serialize};

/// Append-only list of narrated lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLog {
    lines: Vec<String>,
}

impl CombatLog {
    pub fn new() -> Self {
        CombatLog::default()
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Copy of every line recorded so far
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.clone()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whole transcript joined with newlines
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_independent() {
        let mut log = CombatLog::new();
        log.log("one");
        let snap = log.snapshot();
        log.log("two");
        assert_eq!(snap, vec!["one".to_string()]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_clear_and_transcript() {
        let mut log = CombatLog::new();
        log.log("a");
        log.log(String::from("b"));
        assert_eq!(log.transcript(), "a\nb");
        log.clear();
        assert!(log.is_empty());
    }
}
