//! The host surface a device is acquired from, and its loss events.
//!
//! A [`Surface`] plays the role of the canvas: it hands out the device once
//! and lets the façade subscribe to context-lost / context-restored events.
//! Event delivery stays with the host, which forwards each event to
//! [`GlState::handle_context_event`](crate::state::GlState::handle_context_event)
//! on the rendering thread.

use crate::device::{ContextAttributes, Device};

/// Context identifiers tried, in order, when acquiring a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    WebGl,
    ExperimentalWebGl,
}

impl ContextKind {
    /// Acquisition order: the standard id first, then the legacy one.
    pub const FALLBACK_ORDER: [ContextKind; 2] = [ContextKind::WebGl, ContextKind::ExperimentalWebGl];

    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::WebGl => "webgl",
            ContextKind::ExperimentalWebGl => "experimental-webgl",
        }
    }
}

/// The two device notifications the façade listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextEventKind {
    Lost,
    Restored,
}

impl ContextEventKind {
    pub const ALL: [ContextEventKind; 2] = [ContextEventKind::Lost, ContextEventKind::Restored];

    /// Host event name.
    pub fn as_str(self) -> &'static str {
        match self {
            ContextEventKind::Lost => "webglcontextlost",
            ContextEventKind::Restored => "webglcontextrestored",
        }
    }
}

/// A delivered device notification.
///
/// `prevent_default` is the acknowledgment that suppresses the host's
/// default recovery behaviour; without it the host would not restore the
/// context at all.
pub trait ContextEvent {
    fn prevent_default(&mut self);
}

/// A plain event value for hosts without a native event object.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostEvent {
    default_prevented: bool,
}

impl HostEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the receiver acknowledged the event.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl ContextEvent for HostEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Something a device can be acquired from.
pub trait Surface {
    type Device: Device;

    /// Produces a device for the given context id, or `None` if this
    /// surface cannot create one.
    fn get_context(
        &mut self,
        kind: ContextKind,
        attributes: &ContextAttributes,
    ) -> Option<Self::Device>;

    fn add_context_listener(&mut self, kind: ContextEventKind);

    fn remove_context_listener(&mut self, kind: ContextEventKind);
}

/// A surface around a device that already exists.
///
/// Used when the host creates the context itself (a `glow` context, a test
/// recorder). The device is handed out on the first `get_context` call;
/// listener registrations are kept so the host can see what is subscribed.
#[derive(Debug)]
pub struct Detached<D> {
    device: Option<D>,
    listeners: Vec<ContextEventKind>,
}

impl<D> Detached<D> {
    pub fn new(device: D) -> Self {
        Self {
            device: Some(device),
            listeners: Vec::new(),
        }
    }

    /// A surface that can never produce a device.
    pub fn unavailable() -> Self {
        Self {
            device: None,
            listeners: Vec::new(),
        }
    }

    /// Event kinds currently subscribed.
    pub fn listeners(&self) -> &[ContextEventKind] {
        &self.listeners
    }

    pub fn is_listening(&self, kind: ContextEventKind) -> bool {
        self.listeners.contains(&kind)
    }
}

impl<D: Device> Surface for Detached<D> {
    type Device = D;

    fn get_context(&mut self, _kind: ContextKind, _attributes: &ContextAttributes) -> Option<D> {
        self.device.take()
    }

    fn add_context_listener(&mut self, kind: ContextEventKind) {
        if !self.listeners.contains(&kind) {
            self.listeners.push(kind);
        }
    }

    fn remove_context_listener(&mut self, kind: ContextEventKind) {
        self.listeners.retain(|k| *k != kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Recorder;

    #[test]
    fn fallback_order_tries_standard_id_first() {
        let ids: Vec<&str> = ContextKind::FALLBACK_ORDER
            .iter()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(ids, ["webgl", "experimental-webgl"]);
    }

    #[test]
    fn event_kinds_map_to_host_event_names() {
        let names: Vec<&str> = ContextEventKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["webglcontextlost", "webglcontextrestored"]);
    }

    #[test]
    fn host_event_records_acknowledgment() {
        let mut event = HostEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn detached_hands_out_device_once() {
        let mut surface = Detached::new(Recorder::new());
        let attrs = ContextAttributes::default();
        assert!(surface.get_context(ContextKind::WebGl, &attrs).is_some());
        assert!(surface.get_context(ContextKind::WebGl, &attrs).is_none());
    }

    #[test]
    fn unavailable_surface_produces_nothing() {
        let mut surface = Detached::<Recorder>::unavailable();
        let attrs = ContextAttributes::default();
        for kind in ContextKind::FALLBACK_ORDER {
            assert!(surface.get_context(kind, &attrs).is_none());
        }
    }

    #[test]
    fn detached_tracks_listener_registration() {
        let mut surface = Detached::new(Recorder::new());
        surface.add_context_listener(ContextEventKind::Lost);
        surface.add_context_listener(ContextEventKind::Lost);
        surface.add_context_listener(ContextEventKind::Restored);
        assert_eq!(surface.listeners().len(), 2, "duplicate subscription should be ignored");

        surface.remove_context_listener(ContextEventKind::Lost);
        assert!(!surface.is_listening(ContextEventKind::Lost));
        assert!(surface.is_listening(ContextEventKind::Restored));
    }
}
