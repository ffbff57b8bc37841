#![deny(unsafe_code)]
//! Core of gl-state: a redundant-call eliminating, validating façade over a
//! WebGL 1 style device.
//!
//! Provides the enum `Catalog`, the `Device` and `Surface` traits, the
//! probed `Capabilities`, the argument validator, the slot-keyed
//! `StateCache`, the context-loss monitor and the `GlState` façade that
//! ties them together. `record::Recorder` is a journaling device for tests
//! and tooling; `GlowDevice` (feature `glow`) drives a real GL context.

pub mod cache;
pub mod capabilities;
pub mod config;
pub mod device;
pub mod enums;
pub mod error;
pub mod loss;
pub mod record;
pub mod state;
pub mod surface;
pub mod validate;

#[cfg(feature = "glow")]
pub mod glow_device;

pub use cache::{CachedValue, Component, Face, Slot, StateCache};
pub use capabilities::{Capabilities, Feature, Limits};
pub use config::StateConfig;
pub use device::{ActiveInfo, BufferData, ContextAttributes, Device, Parameter, ShaderPrecisionFormat};
pub use enums::{Catalog, CATALOG};
pub use error::{Rejection, StateError};
pub use loss::{ContextState, LossMonitor};
pub use record::{Call, Recorder};
pub use state::{CallStats, GlState};
pub use surface::{ContextEvent, ContextEventKind, ContextKind, Detached, HostEvent, Surface};

#[cfg(feature = "glow")]
pub use glow_device::GlowDevice;
