use std::sync::{Arc, Mutex};
use log::Level;
use crate::config::ports::LogPort;

// 轉送至全域 log 門面的適配器
pub struct LogAdapter;

impl LogPort for LogAdapter {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "zst_to_csv", level, "{}", message);
    }
}

/// 將日誌保留在記憶體中的適配器，複製後共用同一份紀錄
#[derive(Clone, Default)]
pub struct MemoryLogAdapter {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemoryLogAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.records().iter().any(|(_, message)| message.contains(needle))
    }
}

impl LogPort for MemoryLogAdapter {
    fn log(&self, level: Level, message: &str) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push((level, message.to_string()));
    }
}
