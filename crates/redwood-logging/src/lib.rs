//! Logging configuration and a small leveled logger for redwood.
//!
//! Entries go to stderr so that tree output on stdout stays clean.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

/// Log level for filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn rank(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }

    /// Check if this level should log messages at the given level
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.rank() >= level.rank()
    }

    /// One step more verbose, saturating at `Trace`.
    pub fn louder(self) -> Self {
        match self {
            LogLevel::Error => LogLevel::Warn,
            LogLevel::Warn => LogLevel::Info,
            LogLevel::Info => LogLevel::Debug,
            LogLevel::Debug | LogLevel::Trace => LogLevel::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level to output
    #[serde(default)]
    pub level: LogLevel,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
    /// Prefix plain lines with an RFC 3339 timestamp
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Component-specific log levels
    #[serde(default)]
    pub component_levels: HashMap<String, LogLevel>,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Plain,
            timestamps: true,
            component_levels: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Set a component-specific log level
    pub fn with_component_level(mut self, component: impl Into<String>, level: LogLevel) -> Self {
        self.component_levels.insert(component.into(), level);
        self
    }

    /// Get the effective log level for a component
    pub fn effective_level(&self, component: Option<&str>) -> LogLevel {
        component
            .and_then(|comp| self.component_levels.get(comp).copied())
            .unwrap_or(self.level)
    }

    /// Check if a message at the given level should be logged
    pub fn should_log(&self, level: LogLevel, component: Option<&str>) -> bool {
        self.effective_level(component).should_log(level)
    }
}

/// A log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub message: String,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            component: None,
            message: message.into(),
        }
    }

    /// Create a log entry with a component
    pub fn with_component(
        level: LogLevel,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            component: Some(component.into()),
            ..Self::new(level, message)
        }
    }

    /// Render the entry as a single line in `format`.
    pub fn format_line(&self, format: LogFormat, timestamps: bool) -> String {
        match format {
            LogFormat::Json => serde_json::to_string(self)
                .unwrap_or_else(|_| format!("{{\"message\":{:?}}}", self.message)),
            LogFormat::Compact => match &self.component {
                Some(comp) => format!("{} {comp}: {}", self.level, self.message),
                None => format!("{} {}", self.level, self.message),
            },
            LogFormat::Plain => {
                let mut line = String::new();
                if timestamps {
                    line.push_str(&self.timestamp);
                    line.push(' ');
                }
                line.push_str(&format!("{:<5}", self.level.to_string()));
                if let Some(comp) = &self.component {
                    line.push_str(&format!(" [{comp}]"));
                }
                line.push(' ');
                line.push_str(&self.message);
                line
            }
        }
    }
}

/// Log collector for capturing log entries
#[derive(Debug, Default)]
pub struct LogCollector {
    entries: Vec<LogEntry>,
}

impl LogCollector {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Get entries matching a level
    pub fn filter_by_level(&self, level: LogLevel) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Debug)]
enum Sink {
    Stderr,
    Collect(LogCollector),
}

/// Leveled logger writing to stderr, or collecting entries in memory.
#[derive(Debug)]
pub struct Logger {
    config: LoggingConfig,
    sink: Sink,
}

impl Logger {
    /// Logger that writes to stderr.
    pub fn stderr(config: LoggingConfig) -> Self {
        Self {
            config,
            sink: Sink::Stderr,
        }
    }

    /// Logger that keeps entries in memory, for tests.
    pub fn collecting(config: LoggingConfig) -> Self {
        Self {
            config,
            sink: Sink::Collect(LogCollector::new()),
        }
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Entries captured by a collecting logger; empty for stderr loggers.
    pub fn collected(&self) -> &[LogEntry] {
        match &self.sink {
            Sink::Collect(collector) => collector.entries(),
            Sink::Stderr => &[],
        }
    }

    pub fn log(&mut self, component: &str, level: LogLevel, message: impl Into<String>) {
        if !self.config.should_log(level, Some(component)) {
            return;
        }
        let entry = LogEntry::with_component(level, component, message);
        match &mut self.sink {
            Sink::Collect(collector) => collector.push(entry),
            Sink::Stderr => {
                let line = entry.format_line(self.config.format, self.config.timestamps);
                // closed stderr is ignored
                let _ = writeln!(std::io::stderr().lock(), "{line}");
            }
        }
    }

    pub fn error(&mut self, component: &str, message: impl Into<String>) {
        self.log(component, LogLevel::Error, message);
    }

    pub fn warn(&mut self, component: &str, message: impl Into<String>) {
        self.log(component, LogLevel::Warn, message);
    }

    pub fn info(&mut self, component: &str, message: impl Into<String>) {
        self.log(component, LogLevel::Info, message);
    }

    pub fn debug(&mut self, component: &str, message: impl Into<String>) {
        self.log(component, LogLevel::Debug, message);
    }

    pub fn trace(&mut self, component: &str, message: impl Into<String>) {
        self.log(component, LogLevel::Trace, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_ordering() {
        assert!(LogLevel::Info.should_log(LogLevel::Info));
        assert!(LogLevel::Info.should_log(LogLevel::Warn));
        assert!(LogLevel::Info.should_log(LogLevel::Error));
        assert!(!LogLevel::Info.should_log(LogLevel::Debug));
    }

    #[test]
    fn louder_saturates() {
        assert_eq!(LogLevel::Warn.louder(), LogLevel::Info);
        assert_eq!(LogLevel::Trace.louder(), LogLevel::Trace);
    }

    #[test]
    fn logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Plain);
        assert!(config.timestamps);
    }

    #[test]
    fn logging_config_component_levels() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Warn)
            .with_component_level("insert", LogLevel::Trace);

        assert!(!config.should_log(LogLevel::Info, None));
        assert!(config.should_log(LogLevel::Trace, Some("insert")));
        assert!(!config.should_log(LogLevel::Debug, Some("render")));
    }

    #[test]
    fn logging_config_from_yaml_uses_defaults() {
        let config: LoggingConfig = serde_yaml::from_str("level: debug\n").unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Plain);
        assert!(config.timestamps);
    }

    #[test]
    fn log_entry_with_component() {
        let entry = LogEntry::with_component(LogLevel::Debug, "tree", "inserted 4");
        assert_eq!(entry.component.as_deref(), Some("tree"));
        assert!(!entry.timestamp.is_empty());
    }

    #[test]
    fn format_line_variants() {
        let entry = LogEntry {
            timestamp: "2025-01-01T00:00:00+00:00".into(),
            level: LogLevel::Warn,
            component: Some("tree".into()),
            message: "node limit reached".into(),
        };
        assert_eq!(
            entry.format_line(LogFormat::Plain, true),
            "2025-01-01T00:00:00+00:00 WARN  [tree] node limit reached"
        );
        assert_eq!(
            entry.format_line(LogFormat::Plain, false),
            "WARN  [tree] node limit reached"
        );
        assert_eq!(
            entry.format_line(LogFormat::Compact, true),
            "WARN tree: node limit reached"
        );
        let json: serde_json::Value =
            serde_json::from_str(&entry.format_line(LogFormat::Json, true)).unwrap();
        assert_eq!(json["level"], "warn");
        assert_eq!(json["component"], "tree");
    }

    #[test]
    fn collecting_logger_filters_by_level() {
        let mut logger = Logger::collecting(LoggingConfig::new().with_level(LogLevel::Info));
        logger.info("tree", "built");
        logger.debug("tree", "hidden");
        logger.error("cli", "failed");

        let entries = logger.collected();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "built");
        assert_eq!(entries[1].level, LogLevel::Error);
    }

    #[test]
    fn log_collector() {
        let mut collector = LogCollector::new();
        collector.push(LogEntry::new(LogLevel::Info, "Info message"));
        collector.push(LogEntry::new(LogLevel::Error, "Error message"));
        collector.push(LogEntry::new(LogLevel::Debug, "Debug message"));

        assert_eq!(collector.entries().len(), 3);
        assert_eq!(collector.filter_by_level(LogLevel::Error).len(), 1);

        collector.clear();
        assert!(collector.entries().is_empty());
    }
}
