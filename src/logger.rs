use crate::config::{LogConfig, OutputFormat};
use crate::report::RunReport;
use serde::Serialize;
use std::io::{self, Write};
#[cfg(test)]
use std::sync::{Arc, Mutex};

const RULE_WIDTH: usize = 60;

#[derive(Clone)]
enum Sink {
    Stdout,
    #[cfg(test)]
    Buffer(Arc<Mutex<Vec<String>>>),
}

#[derive(Clone)]
pub struct Logger {
    config: LogConfig,
    sink: Sink,
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

    /// Logger that collects its output lines instead of printing them.
    #[cfg(test)]
    pub(crate) fn buffered(config: LogConfig) -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Self {
            config,
            sink: Sink::Buffer(Arc::clone(&lines)),
        };
        (logger, lines)
    }

    pub fn is_json(&self) -> bool {
        self.config.format == OutputFormat::Json
    }

    pub fn info(&self, message: &str) {
        if self.config.quiet {
            return;
        }
        self.output("info", message, None);
    }

    pub fn progress(&self, message: &str) {
        if self.config.quiet {
            return;
        }
        self.output("progress", message, None);
    }

    pub fn success(&self, message: &str) {
        if self.config.quiet {
            return;
        }
        self.output("success", message, None);
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

    /// Output shown even in quiet mode, such as the choice menu.
    pub fn notice(&self, message: &str) {
        self.output("notice", message, None);
    }

    /// Question text shown before reading an answer. Text mode keeps the
    /// cursor on the same line.
    pub fn prompt(&self, message: &str) {
        match self.config.format {
            OutputFormat::Json => self.output("prompt", message, None),
            OutputFormat::Text => self.emit(message, false),
        }
    }

    /// Horizontal rule around preview and summary blocks. Text mode only.
    pub fn rule(&self) {
        if self.config.quiet || self.is_json() {
            return;
        }
        self.emit(&"=".repeat(RULE_WIDTH), true);
    }

    pub fn move_planned(&self, src_rel: &str, dst_rel: &str) {
        if self.config.quiet {
            return;
        }
        let data = serde_json::json!({
            "source": src_rel,
            "destination": dst_rel
        });
        self.output("move_planned", &format!("  {}\n  -> {}\n", src_rel, dst_rel), Some(data));
    }

    pub fn skipped(&self, folder: &str, reason: &str) {
        if !self.config.verbose {
            return;
        }
        let data = serde_json::json!({
            "folder": folder,
            "reason": reason
        });
        self.output("skipped", &format!("Skipping {} ({})", folder, reason), Some(data));
    }

    pub fn dir_created(&self, artist_dir: &str) {
        if self.config.quiet {
            return;
        }
        let data = serde_json::json!({ "directory": artist_dir });
        self.output("dir_created", &format!("Creating: {}/", artist_dir), Some(data));
    }

    pub fn move_start(&self, src_rel: &str) {
        if self.config.quiet {
            return;
        }
        let data = serde_json::json!({ "source": src_rel });
        self.output("move_start", &format!("Moving: {}", src_rel), Some(data));
    }

    pub fn move_complete(&self, src_rel: &str, dst_rel: &str) {
        if self.config.quiet {
            return;
        }
        let data = serde_json::json!({
            "source": src_rel,
            "destination": dst_rel
        });
        self.output("move_complete", &format!("  -> {}\n  Success!\n", dst_rel), Some(data));
    }

    pub fn move_failed(&self, src_rel: &str, kind: &str, error: &str) {
        let data = serde_json::json!({
            "source": src_rel,
            "kind": kind,
            "error": error
        });
        self.output("move_failed", &format!("  Error: {}\n", error), Some(data));
    }

    pub fn run_summary(&self, report: &RunReport) {
        match self.config.format {
            OutputFormat::Json => {
                let data = serde_json::to_value(report).ok();
                self.output("run_summary", report.status.message(), data);
            }
            OutputFormat::Text => {
                if report.moved + report.errors == 0 {
                    return;
                }
                self.emit("", true);
                self.rule();
                self.emit(&format!("Successfully moved: {}", report.moved), true);
                self.emit(&format!("Errors: {}", report.errors), true);
                self.rule();
                self.emit("", true);
            }
        }
    }

    fn output(&self, event_type: &str, message: &str, data: Option<serde_json::Value>) {
        match self.config.format {
            OutputFormat::Json => {
                let event = JsonEvent {
                    event_type: event_type.to_string(),
                    message: message.trim_end().to_string(),
                    data,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    self.emit(&json, true);
                }
            }
            OutputFormat::Text => {
                let prefix = match event_type {
                    "error" => "[ERROR]",
                    "warn" => "[WARN]",
                    "debug" | "skipped" => "[DEBUG]",
                    _ => "",
                };
                if prefix.is_empty() {
                    self.emit(message, true);
                } else {
                    self.emit(&format!("{} {}", prefix, message), true);
                }
            }
        }
    }

    fn emit(&self, line: &str, newline: bool) {
        match &self.sink {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                let _ = if newline {
                    writeln!(out, "{}", line)
                } else {
                    write!(out, "{}", line)
                };
                let _ = out.flush();
            }
            #[cfg(test)]
            Sink::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line.to_string());
                }
            }
        }
    }
}
