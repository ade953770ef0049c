//! # Non-fatal diagnostics
//!
//! Field parsing and element derivation never abort. Whenever a value has to be
//! substituted or a best-effort result is returned, a [`Diagnostic`] describing the
//! event is handed to a [`DiagnosticSink`] chosen by the caller.
//!
//! Three sinks are provided:
//!
//! - [`TracingSink`]: forwards every diagnostic to [`tracing`] at `WARN` level with
//!   structured fields, so the surrounding application decides where logs go.
//! - [`NullSink`]: drops everything; used by the sink-less convenience entry points.
//! - [`CollectingSink`]: keeps diagnostics in memory, handy for batch reports and tests.
//!
//! Reporting is fire-and-forget: [`DiagnosticSink::report`] returns nothing and the
//! calling pipeline continues regardless of what the sink does.
use std::fmt;
use std::sync::Mutex;

/// A non-fatal event raised while parsing a record or deriving its elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A numeric field could not be converted; zero was substituted.
    FieldParse {
        object: String,
        field: &'static str,
        raw: String,
    },
    /// The modulo-10 checksum of a data line does not match its last column.
    ChecksumMismatch {
        object: String,
        line: u8,
        expected: u32,
        computed: u32,
    },
    /// The eccentric anomaly solver hit its iteration cap.
    NoConvergence {
        object: String,
        iterations: usize,
        last_step: f64,
    },
}

impl Diagnostic {
    /// Identifier of the tracked object the diagnostic refers to.
    pub fn object(&self) -> &str {
        match self {
            Diagnostic::FieldParse { object, .. }
            | Diagnostic::ChecksumMismatch { object, .. }
            | Diagnostic::NoConvergence { object, .. } => object,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FieldParse { object, field, raw } => write!(
                f,
                "{object}: could not parse field `{field}` from {raw:?}, using 0"
            ),
            Diagnostic::ChecksumMismatch {
                object,
                line,
                expected,
                computed,
            } => write!(
                f,
                "{object}: checksum mismatch on line {line} (expected {expected}, computed {computed})"
            ),
            Diagnostic::NoConvergence {
                object,
                iterations,
                last_step,
            } => write!(
                f,
                "{object}: Kepler's equation solution failed to converge after {iterations} iterations (last step {last_step:e} rad)"
            ),
        }
    }
}

/// Receiver of [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink forwarding diagnostics to the `tracing` ecosystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::FieldParse { object, field, raw } => {
                tracing::warn!(object = %object, field = *field, raw = %raw, "{diagnostic}");
            }
            Diagnostic::ChecksumMismatch { object, line, .. } => {
                tracing::warn!(object = %object, line = *line, "{diagnostic}");
            }
            Diagnostic::NoConvergence {
                object, iterations, ..
            } => {
                tracing::warn!(object = %object, iterations = *iterations, "{diagnostic}");
            }
        }
    }
}

/// Sink discarding every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Sink accumulating diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, in reporting order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    /// Drain the collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|mut d| std::mem::take(&mut *d))
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Ok(mut d) = self.diagnostics.lock() {
            d.push(diagnostic);
        }
    }
}

#[cfg(test)]
mod diagnostics_test {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.report(Diagnostic::FieldParse {
            object: "ISS (ZARYA)".into(),
            field: "bstar",
            raw: "-2006X-4".into(),
        });
        sink.report(Diagnostic::NoConvergence {
            object: "ISS (ZARYA)".into(),
            iterations: 100,
            last_step: 1e-10,
        });

        let collected = sink.take();
        assert_eq!(collected.len(), 2);
        assert!(matches!(collected[0], Diagnostic::FieldParse { field: "bstar", .. }));
        assert!(matches!(collected[1], Diagnostic::NoConvergence { iterations: 100, .. }));
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_display_mentions_object_and_field() {
        let d = Diagnostic::FieldParse {
            object: "SWISSCUBE".into(),
            field: "inclination",
            raw: "98.58x7".into(),
        };
        let msg = d.to_string();
        assert!(msg.starts_with("SWISSCUBE:"));
        assert!(msg.contains("`inclination`"));
        assert_eq!(d.object(), "SWISSCUBE");
    }
}
