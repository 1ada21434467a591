//! Opaque host objects.
//!
//! Anything the host passes into a template that is not one of the built-in
//! kinds (a handle, a service object, a lazily computed value) is wrapped as
//! a host object. The value layer knows only its name and, optionally, how
//! it renders as text.

use std::fmt;

/// An opaque value owned by the embedding application.
pub trait HostObject: fmt::Debug + Send + Sync {
    /// Name used in diagnostics and in the default textual representation.
    fn type_name(&self) -> &'static str;

    /// Custom text rendering. When present it takes precedence over every
    /// other text conversion.
    fn render(&self) -> Option<String> {
        None
    }
}
