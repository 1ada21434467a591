//! Coercions to fixed target kinds.
//!
//! Every coercion is total: unsupported kinds report a diagnostic and return
//! the target kind's zero value. Text that fails to parse as a number is not
//! an unsupported kind; it silently becomes zero.

use chrono::{DateTime, Utc};
use tmpl_diagnostic::{Diagnostic, DiagnosticSink, Operation};

use crate::value::{RawValue, Timestamp, Value};

/// Timestamp rendering, e.g. `2024-03-01 12:30:00 +0100`.
///
/// No zone abbreviation follows the offset: `FixedOffset` carries none, so
/// `... +0000` is rendered where a named zone would add ` UTC`.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

impl Value {
    /// Text form of the value.
    ///
    /// Nil renders empty. A host object's own rendering wins over everything
    /// else; booleans render as `True`/`False` and floats with six decimals.
    /// Containers, records and unrenderable host objects report a diagnostic
    /// and render as `<type Value>`.
    pub fn to_text(&self, sink: &dyn DiagnosticSink) -> String {
        match self.raw() {
            RawValue::Nil => String::new(),
            RawValue::Host(object) => {
                if let Some(text) = object.render() {
                    return text;
                }
                sink.report(Diagnostic::unsupported(Operation::ToText, object.type_name()));
                format!("<{} Value>", object.type_name())
            }
            RawValue::Time(t) => t.format(TIME_FORMAT).to_string(),
            RawValue::Str(s) => s.to_string(),
            RawValue::Int(n) => n.to_string(),
            RawValue::Uint(n) => n.to_string(),
            RawValue::Float(f) => format_float(*f),
            RawValue::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
            RawValue::Record(record) => {
                sink.report(Diagnostic::unsupported(Operation::ToText, self.type_name()));
                format!("<{} Value>", record.type_name())
            }
            RawValue::Seq(_) | RawValue::Map(_) => {
                sink.report(Diagnostic::unsupported(Operation::ToText, self.type_name()));
                format!("<{} Value>", self.type_name())
            }
        }
    }

    /// Integer form of the value. Floats truncate toward zero; text is
    /// parsed as a float literal and truncated.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "template integers follow cast semantics: truncate floats, wrap large unsigned"
    )]
    pub fn to_integer(&self, sink: &dyn DiagnosticSink) -> i64 {
        match self.raw() {
            RawValue::Int(n) => *n,
            RawValue::Uint(n) => *n as i64,
            RawValue::Float(f) => *f as i64,
            RawValue::Str(s) => parse_float(s).map_or(0, |f| f as i64),
            _ => {
                sink.report(Diagnostic::unsupported(Operation::ToInteger, self.type_name()));
                0
            }
        }
    }

    /// Float form of the value; text is parsed as a float literal.
    pub fn to_float(&self, sink: &dyn DiagnosticSink) -> f64 {
        match self.raw() {
            RawValue::Float(f) => *f,
            RawValue::Str(s) => parse_float(s).unwrap_or(0.0),
            raw => match number_as_f64(raw) {
                Some(f) => f,
                None => {
                    sink.report(Diagnostic::unsupported(Operation::ToFloat, self.type_name()));
                    0.0
                }
            },
        }
    }

    /// Strict boolean accessor. Only a boolean yields its value; see
    /// [`Value::is_true`] for truthiness.
    pub fn to_bool(&self, sink: &dyn DiagnosticSink) -> bool {
        if let RawValue::Bool(b) = self.raw() {
            return *b;
        }
        sink.report(Diagnostic::unsupported(Operation::ToBool, self.type_name()));
        false
    }

    /// The timestamp, or the zero timestamp (Unix epoch) for any other kind.
    pub fn to_time(&self) -> Timestamp {
        match self.raw() {
            RawValue::Time(t) => *t,
            _ => zero_time(),
        }
    }
}

/// Numeric value of an integer- or float-family datum.
#[expect(
    clippy::cast_precision_loss,
    reason = "integers beyond 2^53 compare approximately, as in float arithmetic"
)]
pub(crate) fn number_as_f64(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Int(n) => Some(*n as f64),
        RawValue::Uint(n) => Some(*n as f64),
        RawValue::Float(f) => Some(*f),
        _ => None,
    }
}

/// Parse a float literal. Out-of-range literals such as `1e400` are a parse
/// failure; only an explicit `inf`, `infinity` or `nan` spelling yields a
/// non-finite value.
fn parse_float(text: &str) -> Option<f64> {
    let f = text.parse::<f64>().ok()?;
    if f.is_finite() {
        return Some(f);
    }
    let unsigned = text.trim_start_matches(['+', '-']);
    let spelled = ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word));
    spelled.then_some(f)
}

fn zero_time() -> Timestamp {
    DateTime::<Utc>::default().into()
}

/// Fixed-point with six decimals; non-finite values use `NaN` and `±Inf`.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        (if f > 0.0 { "+Inf" } else { "-Inf" }).to_string()
    } else {
        format!("{f:.6}")
    }
}
