//! Two-state device-loss machine.
//!
//! `Live → Lost` on a loss notification, `Lost → Live` on a restore. Both
//! handlers acknowledge the event so the host keeps its resources and
//! attempts recovery. Discarding the state cache on restore is the
//! façade's job; the monitor only owns the flag.

use log::debug;

use crate::surface::ContextEvent;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    #[default]
    Live,
    Lost,
}

#[derive(Debug, Default)]
pub struct LossMonitor {
    state: ContextState,
}

impl LossMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn is_lost(&self) -> bool {
        self.state == ContextState::Lost
    }

    /// Handles a loss notification.
    pub fn on_lost(&mut self, event: &mut dyn ContextEvent) {
        event.prevent_default();
        if self.state == ContextState::Live {
            debug!("device context lost");
        }
        self.state = ContextState::Lost;
    }

    /// Handles a restore notification. The caller discards its cache
    /// afterwards, whatever state the monitor was in: a restored device
    /// has unknown state either way.
    pub fn on_restored(&mut self, event: &mut dyn ContextEvent) {
        event.prevent_default();
        debug!("device context restored");
        self.state = ContextState::Live;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HostEvent;

    #[test]
    fn starts_live() {
        let monitor = LossMonitor::new();
        assert_eq!(monitor.state(), ContextState::Live);
        assert!(!monitor.is_lost());
    }

    #[test]
    fn lost_then_restored() {
        let mut monitor = LossMonitor::new();
        let mut lost = HostEvent::new();
        monitor.on_lost(&mut lost);
        assert!(monitor.is_lost());
        assert!(lost.default_prevented(), "loss must be acknowledged");

        let mut restored = HostEvent::new();
        monitor.on_restored(&mut restored);
        assert_eq!(monitor.state(), ContextState::Live);
        assert!(restored.default_prevented(), "restore must be acknowledged");
    }

    #[test]
    fn repeated_loss_stays_lost() {
        let mut monitor = LossMonitor::new();
        monitor.on_lost(&mut HostEvent::new());
        monitor.on_lost(&mut HostEvent::new());
        assert!(monitor.is_lost());
    }
}
