// ABOUTME: Log context threaded through every decode and encode call
// ABOUTME: Records recoverable anomalies so callers and tests can inspect them after the fact

use std::fmt;

use tracing::Span;

use crate::datatypes::{MessageEncoding, ParameterId};

/// A recoverable problem met while decoding.
///
/// Anomalies never abort an operation; the affected field is left unset
/// and decoding carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// Parameter id outside the transport-layer table
    UnknownParameter(u8),
    /// Subparameter id outside the bearer data table
    UnknownSubparameter(u8),
    /// Fixed-size field with the wrong declared length
    InvalidLength { field: &'static str, length: usize },
    /// Enumerated value with no known meaning
    UnknownValue { field: &'static str, value: u32 },
    /// Field whose contents need more bytes than it declares
    Truncated {
        field: &'static str,
        required: usize,
        available: usize,
    },
    /// 4-bit DTMF code with no digit assigned
    InvalidDtmfDigit(u8),
    /// Character set conversion failed for the named encoding
    ConversionFailed(&'static str),
    /// User data in an encoding that is recognized but not decoded
    UnsupportedEncoding(MessageEncoding),
    /// Address parameter after an address was already decoded
    DuplicateAddress(ParameterId),
    /// Field required by the message type was never seen
    MandatoryMissing(&'static str),
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnknownParameter(id) => write!(f, "unknown parameter: {id:#04x}"),
            Anomaly::UnknownSubparameter(id) => write!(f, "unknown subparameter: {id:#04x}"),
            Anomaly::InvalidLength { field, length } => {
                write!(f, "invalid {field} length: {length}")
            }
            Anomaly::UnknownValue { field, value } => write!(f, "unknown {field}: {value:#x}"),
            Anomaly::Truncated {
                field,
                required,
                available,
            } => write!(f, "cannot read {field}: {available} < {required}"),
            Anomaly::InvalidDtmfDigit(code) => write!(f, "invalid dtmf digit: {code}"),
            Anomaly::ConversionFailed(encoding) => {
                write!(f, "couldn't convert {encoding} text to UTF-8")
            }
            Anomaly::UnsupportedEncoding(encoding) => {
                write!(f, "text/data with encoding '{encoding}' not supported")
            }
            Anomaly::DuplicateAddress(id) => write!(f, "address already set, ignoring {id}"),
            Anomaly::MandatoryMissing(field) => write!(f, "mandatory parameter '{field}' missing"),
        }
    }
}

/// Per-call logging capability.
///
/// Carries an opaque label (a modem path, a storage index, anything the
/// caller wants to see in the output) which is attached to a tracing span
/// for the whole operation. Every anomaly is both logged and recorded.
#[derive(Debug, Default, Clone)]
pub struct LogContext {
    label: Option<String>,
    anomalies: Vec<Anomaly>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            anomalies: Vec::new(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Span covering one codec operation, tagged with the label
    pub fn span(&self, operation: &'static str) -> Span {
        tracing::debug_span!("cdma_sms", op = operation, ctx = self.label().unwrap_or("-"))
    }

    /// Logs and records a recoverable anomaly
    pub fn anomaly(&mut self, anomaly: Anomaly) {
        tracing::debug!("{}", anomaly);
        self.anomalies.push(anomaly);
    }

    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Drains the recorded anomalies, keeping the label
    pub fn take_anomalies(&mut self) -> Vec<Anomaly> {
        std::mem::take(&mut self.anomalies)
    }

    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "[{label}]"),
            None => f.write_str("[-]"),
        }
    }
}
