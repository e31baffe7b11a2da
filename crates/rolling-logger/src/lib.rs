//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a bounded ring
//! and echoes each one to the browser console (stderr off the web).
//!
//! ```ignore
//! let logs = rolling_logger::init(LoggerConfig::default());
//! tracing::warn!(count = 3, "slow response");
//! assert_eq!(rolling_logger::recent_problems(1), logs.problems(1));
//! ```

use std::collections::VecDeque;
use std::fmt::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Default number of lines retained
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Lines kept before the oldest is dropped
    pub capacity: usize,
    /// Most verbose level recorded
    pub max_level: Level,
    /// Echo lines to the console
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_level: Level::INFO,
            console: true,
        }
    }
}

/// One formatted log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Shared handle to the retained lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn push(&self, line: LogLine) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Last `limit` warnings and errors, oldest first
    pub fn problems(&self, limit: usize) -> Vec<LogLine> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        let mut found: Vec<LogLine> = lines
            .iter()
            .rev()
            .filter(|line| line.level <= Level::WARN)
            .take(limit)
            .cloned()
            .collect();
        found.reverse();
        found
    }
}

/// Collects the `message` field and appends the rest as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Layer recording events into a [`LogBuffer`]
pub struct RollingLayer {
    buffer: LogBuffer,
    max_level: Level,
    console: bool,
}

impl RollingLayer {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            buffer: LogBuffer::new(config.capacity),
            max_level: config.max_level,
            console: config.console,
        }
    }

    pub fn buffer(&self) -> LogBuffer {
        self.buffer.clone()
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // TRACE > DEBUG > INFO > WARN > ERROR
        if *meta.level() > self.max_level {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let line = LogLine {
            timestamp: Utc::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.finish(),
        };

        if self.console {
            emit(&line);
        }
        self.buffer.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &LogLine) {
    let text = wasm_bindgen::JsValue::from_str(&line.to_string());
    match line.level {
        Level::ERROR => web_sys::console::error_1(&text),
        Level::WARN => web_sys::console::warn_1(&text),
        Level::INFO => web_sys::console::info_1(&text),
        _ => web_sys::console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &LogLine) {
    eprintln!("{}", line);
}

static GLOBAL: OnceLock<LogBuffer> = OnceLock::new();

/// Install the layer as the global subscriber.
///
/// Later calls return the buffer from the first call.
pub fn init(config: LoggerConfig) -> LogBuffer {
    GLOBAL
        .get_or_init(|| {
            let layer = RollingLayer::new(config);
            let buffer = layer.buffer();
            if let Err(err) = tracing_subscriber::registry().with(layer).try_init() {
                emit(&LogLine {
                    timestamp: Utc::now(),
                    level: Level::WARN,
                    target: "rolling_logger".to_string(),
                    message: format!("global subscriber already set: {}", err),
                });
            }
            buffer
        })
        .clone()
}

/// Latest warnings and errors held by the global logger (empty before [`init`])
pub fn recent_problems(limit: usize) -> Vec<LogLine> {
    GLOBAL
        .get()
        .map(|buffer| buffer.problems(limit))
        .unwrap_or_default()
}
