//! Per-call diagnostics collection
//!
//! Scans take an explicit `&mut Diagnostics` instead of logging through
//! global state, so concurrent callers never share anything. The CLI drains
//! the sink and prints after each scan.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct ScanEvent {
    pub severity: Severity,
    pub message: String,
}

/// Accumulates non-fatal scan problems (unreadable files, skipped
/// manifests). Nothing recorded here ever aborted the scan that recorded it.
#[derive(Debug, Default)]
pub struct Diagnostics {
    events: Vec<ScanEvent>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.events.push(ScanEvent {
            severity: Severity::Warning,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.events.push(ScanEvent {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[ScanEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Print all collected events with the standard log prefix.
    pub fn report(&self) {
        for event in &self.events {
            match event.severity {
                Severity::Warning => println!("[gridscout] warning: {}", event.message),
                Severity::Error => eprintln!("[gridscout] error: {}", event.message),
            }
        }
    }
}
