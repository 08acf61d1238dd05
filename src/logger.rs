use crate::cli::{LogConfig, OutputFormat};
use serde::Serialize;
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Logger {
    config: LogConfig,
    sink: Sink,
}

#[derive(Clone)]
enum Sink {
    Stdout,
    #[cfg(test)]
    Buffer(Arc<Mutex<Vec<String>>>),
}

#[derive(Serialize)]
struct JsonEvent {
    #[serde(rename = "type")]
    event_type: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl Logger {
    pub fn new(config: LogConfig) -> Self {
        Self {
            config,
            sink: Sink::Stdout,
        }
    }

    /// Logger that collects lines in memory instead of printing them.
    #[cfg(test)]
    pub fn captured(config: LogConfig) -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Self {
            config,
            sink: Sink::Buffer(lines.clone()),
        };
        (logger, lines)
    }

    pub fn info(&self, message: &str) {
        if self.config.quiet {
            return;
        }
        self.output("info", message, None);
    }

    pub fn warn(&self, message: &str) {
        self.output("warn", message, None);
    }

    pub fn error(&self, message: &str) {
        self.output("error", message, None);
    }

    pub fn debug(&self, message: &str) {
        if !self.config.verbose {
            return;
        }
        self.output("debug", message, None);
    }

    pub fn file_updated(&self, name: &str) {
        if self.config.quiet {
            return;
        }
        let data = serde_json::json!({ "file": name });
        self.output("file_updated", &format!("Successfully updated: {}", name), Some(data));
    }

    pub fn file_failed(&self, name: &str, error: &str) {
        let data = serde_json::json!({
            "file": name,
            "error": error
        });
        self.output("file_failed", &format!("Error updating {}: {}", name, error), Some(data));
    }

    pub fn batch_complete(&self, updated: usize, failed: usize) {
        let data = serde_json::json!({
            "updated": updated,
            "failed": failed
        });
        self.output(
            "batch_complete",
            &format!("Done: {} updated, {} failed.", updated, failed),
            Some(data),
        );
    }

    fn output(&self, event_type: &str, message: &str, data: Option<serde_json::Value>) {
        if let Some(line) = self.render(event_type, message, data) {
            self.emit(line);
        }
    }

    fn render(&self, event_type: &str, message: &str, data: Option<serde_json::Value>) -> Option<String> {
        match self.config.output_format {
            OutputFormat::Json => {
                let event = JsonEvent {
                    event_type: event_type.to_string(),
                    message: message.to_string(),
                    data,
                };
                serde_json::to_string(&event).ok()
            }
            OutputFormat::Text => match event_type {
                "debug" => Some(format!("[DEBUG] {}", message)),
                _ => Some(message.to_string()),
            },
        }
    }

    fn emit(&self, line: String) {
        match &self.sink {
            Sink::Stdout => println!("{}", line),
            #[cfg(test)]
            Sink::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line);
                }
            }
        }
    }
}
