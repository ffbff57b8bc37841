//! Error types for the gl-state core.

use thiserror::Error;

/// Why the validator refused a call.
///
/// A rejection is never returned to the caller: the façade logs it and
/// drops the call. Each message names the operation and the offending
/// parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// A clamped float was outside `[0, 1]` or not finite.
    #[error("{op}: {param} must be a clamped float in [0, 1], got {value}")]
    NotClamped {
        op: &'static str,
        param: &'static str,
        value: f32,
    },

    /// A float that must be non-negative was negative or not finite.
    #[error("{op}: {param} must be a non-negative float, got {value}")]
    NegativeFloat {
        op: &'static str,
        param: &'static str,
        value: f32,
    },

    #[error("{op}: {param} must be a finite number, got {value}")]
    NotFinite {
        op: &'static str,
        param: &'static str,
        value: f32,
    },

    /// A size, offset or reference value was negative.
    #[error("{op}: {param} must be a non-negative integer, got {value}")]
    NegativeInt {
        op: &'static str,
        param: &'static str,
        value: i64,
    },

    /// An enum argument was outside its legal set.
    #[error("{op}: {param} must be one of {expected}, got 0x{value:X}")]
    NotInSet {
        op: &'static str,
        param: &'static str,
        value: u32,
        expected: &'static str,
    },

    /// An integer argument was outside `[min, max]`.
    #[error("{op}: {param} must be in [{min}, {max}], got {value}")]
    OutOfRange {
        op: &'static str,
        param: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A constant-color factor was paired with a constant-alpha factor.
    #[error("{op}: {first} and {second} may not combine constant color with constant alpha")]
    ConstantColorAlpha {
        op: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// A buffer source was neither a byte view nor a non-negative size.
    #[error("{op}: {param} must be a byte view or a non-negative size")]
    NotByteView { op: &'static str, param: &'static str },
}

/// Errors produced while setting up a façade.
#[derive(Debug, Error)]
pub enum StateError {
    /// The surface produced no device under any context id.
    #[error("unable to obtain a device context (tried {tried})")]
    NoContext { tried: String },
}
