//! The last-applied state table.
//!
//! Keys are [`Slot`]s: one variant per piece of tracked device state, with
//! the index or face carried in the variant for indexed state so distinct
//! indices can never collide. A missing entry means "never applied through
//! this cache" and must always force a forward.

use std::collections::HashMap;

use crate::enums;

/// One side of the separated stencil state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    /// The faces a device face selector addresses. `FRONT_AND_BACK` names
    /// both; anything else names none.
    pub fn from_code(code: u32) -> &'static [Face] {
        match code {
            enums::FRONT => &[Face::Front],
            enums::BACK => &[Face::Back],
            enums::FRONT_AND_BACK => &[Face::Front, Face::Back],
            _ => &[],
        }
    }
}

/// A logical state slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    ActiveTexture,
    BlendColor,
    /// RGB and alpha equations; `blendEquation` writes both.
    BlendEquation,
    /// Source/destination RGB and alpha factors; `blendFunc` writes all four.
    BlendFunc,
    ClearColor,
    ClearDepth,
    ClearStencil,
    ColorMask,
    CullFace,
    DepthFunc,
    DepthMask,
    DepthRange,
    FrontFace,
    LineWidth,
    PolygonOffset,
    SampleCoverage,
    Scissor,
    Program,
    /// Enabled state of one capability code.
    Capability(u32),
    /// Enabled state of one vertex attribute array.
    VertexAttribArray(u32),
    /// Value of one pixel-store parameter.
    PixelStore(u32),
    StencilFunc(Face),
    StencilMask(Face),
    StencilOp(Face),
}

/// One component of a cached value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Bool(bool),
    Int(i64),
    Float(f32),
}

impl From<bool> for Component {
    fn from(v: bool) -> Self {
        Component::Bool(v)
    }
}

impl From<i32> for Component {
    fn from(v: i32) -> Self {
        Component::Int(i64::from(v))
    }
}

impl From<u32> for Component {
    fn from(v: u32) -> Self {
        Component::Int(i64::from(v))
    }
}

impl From<f32> for Component {
    fn from(v: f32) -> Self {
        Component::Float(v)
    }
}

/// The value last applied to a slot.
///
/// Tuples compare component-wise, all or nothing: a single differing
/// component means the whole value is re-sent.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue<P> {
    Scalar(Component),
    Pair([Component; 2]),
    Triple([Component; 3]),
    Quad([Component; 4]),
    /// The bound program, `None` for no program.
    Program(Option<P>),
}

impl<P> CachedValue<P> {
    pub fn scalar(v: impl Into<Component>) -> Self {
        CachedValue::Scalar(v.into())
    }

    pub fn pair(a: impl Into<Component>, b: impl Into<Component>) -> Self {
        CachedValue::Pair([a.into(), b.into()])
    }

    pub fn triple(a: impl Into<Component>, b: impl Into<Component>, c: impl Into<Component>) -> Self {
        CachedValue::Triple([a.into(), b.into(), c.into()])
    }

    pub fn quad(
        a: impl Into<Component>,
        b: impl Into<Component>,
        c: impl Into<Component>,
        d: impl Into<Component>,
    ) -> Self {
        CachedValue::Quad([a.into(), b.into(), c.into(), d.into()])
    }
}

/// Slot → last applied value. No eviction; the slot space is bounded by
/// the device's state vector.
#[derive(Debug, Clone)]
pub struct StateCache<P> {
    entries: HashMap<Slot, CachedValue<P>>,
}

impl<P> Default for StateCache<P> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<P> StateCache<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last applied value, or `None` if the slot was never applied.
    pub fn get(&self, slot: Slot) -> Option<&CachedValue<P>> {
        self.entries.get(&slot)
    }

    /// Unconditionally records `value` as applied.
    pub fn set(&mut self, slot: Slot, value: CachedValue<P>) {
        self.entries.insert(slot, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_reports_absent() {
        let cache: StateCache<u32> = StateCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(Slot::CullFace), None);
    }

    #[test]
    fn set_overwrites() {
        let mut cache: StateCache<u32> = StateCache::new();
        cache.set(Slot::DepthFunc, CachedValue::scalar(enums::LESS));
        cache.set(Slot::DepthFunc, CachedValue::scalar(enums::LEQUAL));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(Slot::DepthFunc), Some(&CachedValue::scalar(enums::LEQUAL)));
    }

    #[test]
    fn indexed_slots_do_not_collide() {
        let mut cache: StateCache<u32> = StateCache::new();
        cache.set(Slot::Capability(enums::BLEND), CachedValue::scalar(true));
        cache.set(Slot::Capability(enums::CULL_FACE), CachedValue::scalar(false));
        cache.set(Slot::VertexAttribArray(enums::BLEND), CachedValue::scalar(false));
        assert_eq!(cache.len(), 3);
        assert_eq!(
            cache.get(Slot::Capability(enums::BLEND)),
            Some(&CachedValue::scalar(true))
        );
    }

    #[test]
    fn face_slots_are_independent() {
        let mut cache: StateCache<u32> = StateCache::new();
        cache.set(Slot::StencilMask(Face::Front), CachedValue::scalar(0xFFu32));
        assert!(cache.get(Slot::StencilMask(Face::Back)).is_none());
    }

    #[test]
    fn face_from_code() {
        assert_eq!(Face::from_code(enums::FRONT), &[Face::Front]);
        assert_eq!(Face::from_code(enums::BACK), &[Face::Back]);
        assert_eq!(Face::from_code(enums::FRONT_AND_BACK), &[Face::Front, Face::Back]);
        assert!(Face::from_code(enums::CW).is_empty());
    }

    #[test]
    fn tuples_differ_on_any_component() {
        let a: CachedValue<u32> = CachedValue::quad(0.0f32, 0.0f32, 0.0f32, 1.0f32);
        let b: CachedValue<u32> = CachedValue::quad(0.0f32, 0.0f32, 0.5f32, 1.0f32);
        assert_ne!(a, b);
        assert_eq!(a, CachedValue::quad(0.0f32, 0.0f32, 0.0f32, 1.0f32));
    }

    #[test]
    fn component_kinds_never_compare_equal() {
        assert_ne!(Component::from(1i32), Component::from(1.0f32));
        assert_ne!(Component::from(true), Component::from(1i32));
        assert_eq!(Component::from(7u32), Component::from(7i32));
    }

    #[test]
    fn program_binding_compares_by_handle() {
        let bound: CachedValue<u32> = CachedValue::Program(Some(3));
        assert_eq!(bound, CachedValue::Program(Some(3)));
        assert_ne!(bound, CachedValue::Program(None));
    }
}
