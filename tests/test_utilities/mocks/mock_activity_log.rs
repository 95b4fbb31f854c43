use secure_erase_export::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ActivityLog that records every entry with its level
#[derive(Default, Clone)]
pub struct MockActivityLog {
    entries: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages_at(&self, level: &str) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages_at("INFO")
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages_at("WARN")
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages_at("ERROR")
    }

    fn push(&self, level: &str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level.to_string(), message.to_string()));
    }
}

impl ActivityLog for MockActivityLog {
    fn info(&self, message: &str) {
        self.push("INFO", message);
    }

    fn warn(&self, message: &str) {
        self.push("WARN", message);
    }

    fn error(&self, message: &str) {
        self.push("ERROR", message);
    }
}
