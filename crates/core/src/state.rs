//! The state-tracking façade.
//!
//! [`GlState`] mirrors the device API one call per device operation. State
//! setters are *tracked*: their arguments are validated, compared against
//! the last value this façade applied, and forwarded only on change.
//! Everything else is *pass-through*: forwarded as-is unless the context
//! is lost, with the result wrapped in `Option` (`None` means the device
//! was not invoked).
//!
//! A façade built over a surface that yields no device is degraded:
//! [`GlState::have_context`] is false and every call is a silent no-op.

use std::cell::Cell;

use log::{debug, trace, warn};
use serde::Serialize;

use crate::cache::{CachedValue, Face, Slot, StateCache};
use crate::capabilities::Capabilities;
use crate::config::StateConfig;
use crate::device::{ActiveInfo, BufferData, ContextAttributes, Device, Parameter, ShaderPrecisionFormat};
use crate::enums::{self, Catalog, CATALOG};
use crate::error::{Rejection, StateError};
use crate::loss::LossMonitor;
use crate::surface::{ContextEvent, ContextEventKind, ContextKind, Surface};
use crate::validate::{self, check_member};

pub type DeviceOf<S> = <S as Surface>::Device;
pub type BufferOf<S> = <DeviceOf<S> as Device>::Buffer;
pub type FramebufferOf<S> = <DeviceOf<S> as Device>::Framebuffer;
pub type ProgramOf<S> = <DeviceOf<S> as Device>::Program;
pub type RenderbufferOf<S> = <DeviceOf<S> as Device>::Renderbuffer;
pub type ShaderOf<S> = <DeviceOf<S> as Device>::Shader;
pub type TextureOf<S> = <DeviceOf<S> as Device>::Texture;
pub type UniformLocationOf<S> = <DeviceOf<S> as Device>::UniformLocation;
pub type ExtensionOf<S> = <DeviceOf<S> as Device>::Extension;

/// Diagnostic counters. Nothing in the façade reads them back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallStats {
    /// Calls that reached the device.
    pub forwarded: u64,
    /// Tracked calls skipped because the cached value already matched.
    pub elided: u64,
    /// Calls dropped by validation.
    pub rejected: u64,
    /// Calls dropped because the context was lost.
    pub suppressed: u64,
}

/// Redundant-call eliminating, validating wrapper around one device.
pub struct GlState<S: Surface> {
    surface: Option<S>,
    device: Option<S::Device>,
    capabilities: Option<Capabilities<ExtensionOf<S>>>,
    cache: StateCache<ProgramOf<S>>,
    loss: LossMonitor,
    config: StateConfig,
    catalog: &'static Catalog,
    stats: Cell<CallStats>,
}

fn acquire<S: Surface>(surface: &mut S, attributes: &ContextAttributes) -> Option<S::Device> {
    ContextKind::FALLBACK_ORDER
        .iter()
        .find_map(|&kind| surface.get_context(kind, attributes))
}

fn tried() -> String {
    ContextKind::FALLBACK_ORDER
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl<S: Surface> GlState<S> {
    /// Builds a façade, degrading to a no-op façade when no device can be
    /// obtained. The failure is logged as a warning.
    pub fn new(mut surface: S, attributes: &ContextAttributes, config: StateConfig) -> Self {
        match acquire(&mut surface, attributes) {
            Some(device) => Self::attach(surface, device, config),
            None => {
                warn!("{}", StateError::NoContext { tried: tried() });
                Self::detached(Some(surface), config)
            }
        }
    }

    /// Builds a façade, failing when no device can be obtained.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NoContext`] if the surface yields no device
    /// under any context id.
    pub fn try_new(
        mut surface: S,
        attributes: &ContextAttributes,
        config: StateConfig,
    ) -> Result<Self, StateError> {
        let device =
            acquire(&mut surface, attributes).ok_or_else(|| StateError::NoContext { tried: tried() })?;
        Ok(Self::attach(surface, device, config))
    }

    fn detached(surface: Option<S>, config: StateConfig) -> Self {
        Self {
            surface,
            device: None,
            capabilities: None,
            cache: StateCache::new(),
            loss: LossMonitor::new(),
            config,
            catalog: &CATALOG,
            stats: Cell::new(CallStats::default()),
        }
    }

    fn attach(mut surface: S, device: S::Device, config: StateConfig) -> Self {
        let capabilities = Capabilities::probe(&device);
        for kind in ContextEventKind::ALL {
            surface.add_context_listener(kind);
            debug!("listening for {}", kind.as_str());
        }
        debug!("device context acquired (validation {})", if config.validate { "on" } else { "off" });

        let mut state = Self::detached(Some(surface), config);
        state.device = Some(device);
        state.capabilities = Some(capabilities);
        state
    }

    /// Releases the device, forgets all cached state, unsubscribes from
    /// loss events and hands the surface back. Every later call is a no-op.
    pub fn destroy(&mut self) -> Option<S> {
        let mut surface = self.surface.take()?;
        if self.device.take().is_some() {
            for kind in ContextEventKind::ALL {
                surface.remove_context_listener(kind);
                debug!("stopped listening for {}", kind.as_str());
            }
        }
        self.capabilities = None;
        self.cache = StateCache::new();
        debug!("façade destroyed");
        Some(surface)
    }

    // --- accessors ---

    pub fn have_context(&self) -> bool {
        self.device.is_some()
    }

    /// Whether a loss notification arrived without a restore since.
    pub fn is_lost(&self) -> bool {
        self.loss.is_lost()
    }

    pub fn canvas(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The wrapped device, for out-of-band inspection. Calls made through
    /// it bypass the cache.
    pub fn device(&self) -> Option<&S::Device> {
        self.device.as_ref()
    }

    pub fn drawing_buffer_width(&self) -> Option<i32> {
        self.device.as_ref().map(Device::drawing_buffer_width)
    }

    pub fn drawing_buffer_height(&self) -> Option<i32> {
        self.device.as_ref().map(Device::drawing_buffer_height)
    }

    pub fn capabilities(&self) -> Option<&Capabilities<ExtensionOf<S>>> {
        self.capabilities.as_ref()
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn cache(&self) -> &StateCache<ProgramOf<S>> {
        &self.cache
    }

    pub fn config(&self) -> StateConfig {
        self.config
    }

    pub fn stats(&self) -> CallStats {
        self.stats.get()
    }

    // --- events ---

    /// Feeds a loss or restore notification from the host. Both are
    /// acknowledged; a restore also discards every cached slot.
    pub fn handle_context_event(&mut self, kind: ContextEventKind, event: &mut dyn ContextEvent) {
        if self.device.is_none() {
            return;
        }
        match kind {
            ContextEventKind::Lost => self.loss.on_lost(event),
            ContextEventKind::Restored => {
                self.loss.on_restored(event);
                self.cache = StateCache::new();
            }
        }
    }

    // --- dispatch ---

    fn bump(&self, f: impl FnOnce(&mut CallStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    /// Runs a validation check. Returns true (after logging) when the call
    /// must be dropped.
    fn rejects(
        &self,
        check: impl FnOnce(&Capabilities<ExtensionOf<S>>) -> Result<(), Rejection>,
    ) -> bool {
        if !self.config.validate {
            return false;
        }
        let Some(caps) = self.capabilities.as_ref() else {
            return false;
        };
        match check(caps) {
            Ok(()) => false,
            Err(rejection) => {
                warn!("{rejection}, skipping call");
                self.bump(|s| s.rejected += 1);
                true
            }
        }
    }

    /// Forwards `apply` unless every slot already holds `value`, then
    /// records `value` in every slot. With no slots the call is forwarded
    /// and nothing is cached.
    fn track(
        &mut self,
        op: &'static str,
        slots: &[Slot],
        value: CachedValue<ProgramOf<S>>,
        apply: impl FnOnce(&S::Device),
    ) {
        let Some(device) = self.device.as_ref() else {
            return;
        };
        if self.loss.is_lost() {
            self.bump(|s| s.suppressed += 1);
            return;
        }
        if !slots.is_empty() && slots.iter().all(|slot| self.cache.get(*slot) == Some(&value)) {
            trace!("{op}: unchanged, elided");
            self.bump(|s| s.elided += 1);
            return;
        }
        apply(device);
        self.bump(|s| s.forwarded += 1);
        for slot in slots {
            self.cache.set(*slot, value.clone());
        }
    }

    fn forward<R>(&self, call: impl FnOnce(&S::Device) -> R) -> Option<R> {
        let device = self.device.as_ref()?;
        if self.loss.is_lost() {
            self.bump(|s| s.suppressed += 1);
            return None;
        }
        self.bump(|s| s.forwarded += 1);
        Some(call(device))
    }

    // --- tracked state ---

    /// Selects the active texture unit, `TEXTURE0 + i`.
    pub fn active_texture(&mut self, texture: u32) {
        if self.rejects(|caps| {
            let units = i64::from(caps.limits.max_combined_texture_image_units);
            let first = i64::from(enums::TEXTURE0);
            validate::check_range("activeTexture", "texture", i64::from(texture), first, first + units - 1)
        }) {
            return;
        }
        self.track(
            "activeTexture",
            &[Slot::ActiveTexture],
            CachedValue::scalar(texture),
            |gl| gl.active_texture(texture),
        );
    }

    pub fn blend_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        const OP: &str = "blendColor";
        if self.rejects(|_| {
            validate::check_clampf(OP, "red", red)?;
            validate::check_clampf(OP, "green", green)?;
            validate::check_clampf(OP, "blue", blue)?;
            validate::check_clampf(OP, "alpha", alpha)
        }) {
            return;
        }
        self.track(
            OP,
            &[Slot::BlendColor],
            CachedValue::quad(red, green, blue, alpha),
            |gl| gl.blend_color(red, green, blue, alpha),
        );
    }

    /// Sets both blend equations. Shares its slot with
    /// [`blend_equation_separate`](Self::blend_equation_separate).
    pub fn blend_equation(&mut self, mode: u32) {
        if self.rejects(|caps| {
            check_member(
                validate::is_blend_equation(mode, caps),
                "blendEquation",
                "mode",
                mode,
                "a blend equation",
            )
        }) {
            return;
        }
        self.track(
            "blendEquation",
            &[Slot::BlendEquation],
            CachedValue::pair(mode, mode),
            |gl| gl.blend_equation(mode),
        );
    }

    pub fn blend_equation_separate(&mut self, mode_rgb: u32, mode_alpha: u32) {
        const OP: &str = "blendEquationSeparate";
        if self.rejects(|caps| {
            check_member(
                validate::is_blend_equation(mode_rgb, caps),
                OP,
                "modeRGB",
                mode_rgb,
                "a blend equation",
            )?;
            check_member(
                validate::is_blend_equation(mode_alpha, caps),
                OP,
                "modeAlpha",
                mode_alpha,
                "a blend equation",
            )
        }) {
            return;
        }
        self.track(
            OP,
            &[Slot::BlendEquation],
            CachedValue::pair(mode_rgb, mode_alpha),
            |gl| gl.blend_equation_separate(mode_rgb, mode_alpha),
        );
    }

    /// Sets RGB and alpha blend factors together. Shares its slot with
    /// [`blend_func_separate`](Self::blend_func_separate).
    pub fn blend_func(&mut self, sfactor: u32, dfactor: u32) {
        const OP: &str = "blendFunc";
        if self.rejects(|_| {
            check_member(validate::is_blend_factor(sfactor), OP, "sfactor", sfactor, "a blend factor")?;
            check_member(validate::is_blend_factor(dfactor), OP, "dfactor", dfactor, "a blend factor")?;
            validate::check_blend_pair(OP, ("sfactor", "dfactor"), sfactor, dfactor)
        }) {
            return;
        }
        self.track(
            OP,
            &[Slot::BlendFunc],
            CachedValue::quad(sfactor, dfactor, sfactor, dfactor),
            |gl| gl.blend_func(sfactor, dfactor),
        );
    }

    pub fn blend_func_separate(&mut self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        const OP: &str = "blendFuncSeparate";
        if self.rejects(|_| {
            let factors = [
                ("srcRGB", src_rgb),
                ("dstRGB", dst_rgb),
                ("srcAlpha", src_alpha),
                ("dstAlpha", dst_alpha),
            ];
            for (param, factor) in factors {
                check_member(validate::is_blend_factor(factor), OP, param, factor, "a blend factor")?;
            }
            validate::check_blend_pair(OP, ("srcRGB", "dstRGB"), src_rgb, dst_rgb)
        }) {
            return;
        }
        self.track(
            OP,
            &[Slot::BlendFunc],
            CachedValue::quad(src_rgb, dst_rgb, src_alpha, dst_alpha),
            |gl| gl.blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha),
        );
    }

    pub fn clear_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        const OP: &str = "clearColor";
        if self.rejects(|_| {
            validate::check_clampf(OP, "red", red)?;
            validate::check_clampf(OP, "green", green)?;
            validate::check_clampf(OP, "blue", blue)?;
            validate::check_clampf(OP, "alpha", alpha)
        }) {
            return;
        }
        self.track(
            OP,
            &[Slot::ClearColor],
            CachedValue::quad(red, green, blue, alpha),
            |gl| gl.clear_color(red, green, blue, alpha),
        );
    }

    pub fn clear_depth(&mut self, depth: f32) {
        if self.rejects(|_| validate::check_clampf("clearDepth", "depth", depth)) {
            return;
        }
        self.track(
            "clearDepth",
            &[Slot::ClearDepth],
            CachedValue::scalar(depth),
            |gl| gl.clear_depth(depth),
        );
    }

    pub fn clear_stencil(&mut self, s: i32) {
        if self.rejects(|_| validate::check_uint("clearStencil", "s", i64::from(s))) {
            return;
        }
        self.track(
            "clearStencil",
            &[Slot::ClearStencil],
            CachedValue::scalar(s),
            |gl| gl.clear_stencil(s),
        );
    }

    pub fn color_mask(&mut self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.track(
            "colorMask",
            &[Slot::ColorMask],
            CachedValue::quad(red, green, blue, alpha),
            |gl| gl.color_mask(red, green, blue, alpha),
        );
    }

    pub fn cull_face(&mut self, mode: u32) {
        if self.rejects(|_| check_member(validate::is_face(mode), "cullFace", "mode", mode, "a face")) {
            return;
        }
        self.track(
            "cullFace",
            &[Slot::CullFace],
            CachedValue::scalar(mode),
            |gl| gl.cull_face(mode),
        );
    }

    pub fn depth_func(&mut self, func: u32) {
        if self.rejects(|_| {
            check_member(
                validate::is_compare_func(func),
                "depthFunc",
                "func",
                func,
                "a comparison function",
            )
        }) {
            return;
        }
        self.track(
            "depthFunc",
            &[Slot::DepthFunc],
            CachedValue::scalar(func),
            |gl| gl.depth_func(func),
        );
    }

    pub fn depth_mask(&mut self, flag: bool) {
        self.track(
            "depthMask",
            &[Slot::DepthMask],
            CachedValue::scalar(flag),
            |gl| gl.depth_mask(flag),
        );
    }

    pub fn depth_range(&mut self, z_near: f32, z_far: f32) {
        const OP: &str = "depthRange";
        if self.rejects(|_| {
            validate::check_clampf(OP, "zNear", z_near)?;
            validate::check_clampf(OP, "zFar", z_far)
        }) {
            return;
        }
        self.track(
            OP,
            &[Slot::DepthRange],
            CachedValue::pair(z_near, z_far),
            |gl| gl.depth_range(z_near, z_far),
        );
    }

    pub fn disable(&mut self, cap: u32) {
        if self.rejects(|_| check_member(validate::is_capability(cap), "disable", "cap", cap, "a capability")) {
            return;
        }
        self.track(
            "disable",
            &[Slot::Capability(cap)],
            CachedValue::scalar(false),
            |gl| gl.disable(cap),
        );
    }

    pub fn enable(&mut self, cap: u32) {
        if self.rejects(|_| check_member(validate::is_capability(cap), "enable", "cap", cap, "a capability")) {
            return;
        }
        self.track(
            "enable",
            &[Slot::Capability(cap)],
            CachedValue::scalar(true),
            |gl| gl.enable(cap),
        );
    }

    fn rejects_attrib_index(&self, op: &'static str, index: u32) -> bool {
        self.rejects(|caps| {
            let max = i64::from(caps.limits.max_vertex_attribs) - 1;
            validate::check_range(op, "index", i64::from(index), 0, max)
        })
    }

    pub fn disable_vertex_attrib_array(&mut self, index: u32) {
        if self.rejects_attrib_index("disableVertexAttribArray", index) {
            return;
        }
        self.track(
            "disableVertexAttribArray",
            &[Slot::VertexAttribArray(index)],
            CachedValue::scalar(false),
            |gl| gl.disable_vertex_attrib_array(index),
        );
    }

    pub fn enable_vertex_attrib_array(&mut self, index: u32) {
        if self.rejects_attrib_index("enableVertexAttribArray", index) {
            return;
        }
        self.track(
            "enableVertexAttribArray",
            &[Slot::VertexAttribArray(index)],
            CachedValue::scalar(true),
            |gl| gl.enable_vertex_attrib_array(index),
        );
    }

    pub fn front_face(&mut self, mode: u32) {
        if self.rejects(|_| {
            check_member(validate::is_front_face(mode), "frontFace", "mode", mode, "CW or CCW")
        }) {
            return;
        }
        self.track(
            "frontFace",
            &[Slot::FrontFace],
            CachedValue::scalar(mode),
            |gl| gl.front_face(mode),
        );
    }

    pub fn line_width(&mut self, width: f32) {
        if self.rejects(|_| validate::check_ufloat("lineWidth", "width", width)) {
            return;
        }
        self.track(
            "lineWidth",
            &[Slot::LineWidth],
            CachedValue::scalar(width),
            |gl| gl.line_width(width),
        );
    }

    /// Sets one pixel-store parameter; each `pname` is its own slot.
    pub fn pixel_storei(&mut self, pname: u32, param: i32) {
        if self.rejects(|_| validate::check_pixel_store(pname, param)) {
            return;
        }
        self.track(
            "pixelStorei",
            &[Slot::PixelStore(pname)],
            CachedValue::scalar(param),
            |gl| gl.pixel_storei(pname, param),
        );
    }

    pub fn polygon_offset(&mut self, factor: f32, units: f32) {
        const OP: &str = "polygonOffset";
        if self.rejects(|_| {
            validate::check_numeric(OP, "factor", factor)?;
            validate::check_numeric(OP, "units", units)
        }) {
            return;
        }
        self.track(
            OP,
            &[Slot::PolygonOffset],
            CachedValue::pair(factor, units),
            |gl| gl.polygon_offset(factor, units),
        );
    }

    pub fn sample_coverage(&mut self, value: f32, invert: bool) {
        if self.rejects(|_| validate::check_clampf("sampleCoverage", "value", value)) {
            return;
        }
        self.track(
            "sampleCoverage",
            &[Slot::SampleCoverage],
            CachedValue::pair(value, invert),
            |gl| gl.sample_coverage(value, invert),
        );
    }

    pub fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        const OP: &str = "scissor";
        if self.rejects(|_| {
            validate::check_uint(OP, "x", i64::from(x))?;
            validate::check_uint(OP, "y", i64::from(y))?;
            validate::check_uint(OP, "width", i64::from(width))?;
            validate::check_uint(OP, "height", i64::from(height))
        }) {
            return;
        }
        self.track(
            OP,
            &[Slot::Scissor],
            CachedValue::quad(x, y, width, height),
            |gl| gl.scissor(x, y, width, height),
        );
    }

    fn rejects_stencil_func(&self, op: &'static str, face: Option<u32>, func: u32, reference: i32) -> bool {
        self.rejects(|_| {
            if let Some(face) = face {
                check_member(validate::is_face(face), op, "face", face, "a face")?;
            }
            check_member(validate::is_compare_func(func), op, "func", func, "a comparison function")?;
            validate::check_uint(op, "ref", i64::from(reference))
        })
    }

    /// Sets the stencil test for both faces.
    pub fn stencil_func(&mut self, func: u32, reference: i32, mask: u32) {
        if self.rejects_stencil_func("stencilFunc", None, func, reference) {
            return;
        }
        self.track(
            "stencilFunc",
            &[Slot::StencilFunc(Face::Front), Slot::StencilFunc(Face::Back)],
            CachedValue::triple(func, reference, mask),
            |gl| gl.stencil_func(func, reference, mask),
        );
    }

    pub fn stencil_func_separate(&mut self, face: u32, func: u32, reference: i32, mask: u32) {
        if self.rejects_stencil_func("stencilFuncSeparate", Some(face), func, reference) {
            return;
        }
        let slots: Vec<Slot> = Face::from_code(face).iter().map(|&f| Slot::StencilFunc(f)).collect();
        self.track(
            "stencilFuncSeparate",
            &slots,
            CachedValue::triple(func, reference, mask),
            |gl| gl.stencil_func_separate(face, func, reference, mask),
        );
    }

    pub fn stencil_mask(&mut self, mask: u32) {
        self.track(
            "stencilMask",
            &[Slot::StencilMask(Face::Front), Slot::StencilMask(Face::Back)],
            CachedValue::scalar(mask),
            |gl| gl.stencil_mask(mask),
        );
    }

    pub fn stencil_mask_separate(&mut self, face: u32, mask: u32) {
        if self.rejects(|_| {
            check_member(validate::is_face(face), "stencilMaskSeparate", "face", face, "a face")
        }) {
            return;
        }
        let slots: Vec<Slot> = Face::from_code(face).iter().map(|&f| Slot::StencilMask(f)).collect();
        self.track(
            "stencilMaskSeparate",
            &slots,
            CachedValue::scalar(mask),
            |gl| gl.stencil_mask_separate(face, mask),
        );
    }

    fn rejects_stencil_op(&self, op: &'static str, face: Option<u32>, actions: [(&'static str, u32); 3]) -> bool {
        self.rejects(|_| {
            if let Some(face) = face {
                check_member(validate::is_face(face), op, "face", face, "a face")?;
            }
            for (param, action) in actions {
                check_member(validate::is_stencil_op(action), op, param, action, "a stencil op")?;
            }
            Ok(())
        })
    }

    pub fn stencil_op(&mut self, fail: u32, zfail: u32, zpass: u32) {
        if self.rejects_stencil_op("stencilOp", None, [("fail", fail), ("zfail", zfail), ("zpass", zpass)]) {
            return;
        }
        self.track(
            "stencilOp",
            &[Slot::StencilOp(Face::Front), Slot::StencilOp(Face::Back)],
            CachedValue::triple(fail, zfail, zpass),
            |gl| gl.stencil_op(fail, zfail, zpass),
        );
    }

    pub fn stencil_op_separate(&mut self, face: u32, fail: u32, zfail: u32, zpass: u32) {
        if self.rejects_stencil_op(
            "stencilOpSeparate",
            Some(face),
            [("fail", fail), ("zfail", zfail), ("zpass", zpass)],
        ) {
            return;
        }
        let slots: Vec<Slot> = Face::from_code(face).iter().map(|&f| Slot::StencilOp(f)).collect();
        self.track(
            "stencilOpSeparate",
            &slots,
            CachedValue::triple(fail, zfail, zpass),
            |gl| gl.stencil_op_separate(face, fail, zfail, zpass),
        );
    }

    /// Binds a program, or none. Elided when the same handle is bound.
    pub fn use_program(&mut self, program: Option<ProgramOf<S>>) {
        self.track(
            "useProgram",
            &[Slot::Program],
            CachedValue::Program(program),
            |gl| gl.use_program(program),
        );
    }

    // --- context queries ---

    pub fn is_context_lost(&self) -> Option<bool> {
        self.forward(|gl| gl.is_context_lost())
    }

    pub fn get_context_attributes(&self) -> Option<ContextAttributes> {
        self.forward(|gl| gl.get_context_attributes()).flatten()
    }

    pub fn get_supported_extensions(&self) -> Option<Vec<String>> {
        self.forward(|gl| gl.get_supported_extensions())
    }

    /// Asks the device for an extension by name. Probed features are also
    /// available, without a device call, from [`capabilities`](Self::capabilities).
    pub fn get_extension(&self, name: &str) -> Option<ExtensionOf<S>> {
        self.forward(|gl| gl.get_extension(name)).flatten()
    }

    pub fn get_error(&self) -> Option<u32> {
        self.forward(|gl| gl.get_error())
    }

    pub fn get_parameter(&self, pname: u32) -> Option<Parameter> {
        self.forward(|gl| gl.get_parameter(pname))
    }

    pub fn is_enabled(&self, cap: u32) -> Option<bool> {
        self.forward(|gl| gl.is_enabled(cap))
    }

    pub fn finish(&self) {
        self.forward(|gl| gl.finish());
    }

    pub fn flush(&self) {
        self.forward(|gl| gl.flush());
    }

    pub fn hint(&self, target: u32, mode: u32) {
        self.forward(|gl| gl.hint(target, mode));
    }

    /// Clears the buffers named by `mask`, a union of the clear bits.
    pub fn clear(&self, mask: u32) {
        if self.rejects(|_| {
            check_member(validate::is_clear_mask(mask), "clear", "mask", mask, "a union of clear bits")
        }) {
            return;
        }
        self.forward(|gl| gl.clear(mask));
    }

    pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.forward(|gl| gl.viewport(x, y, width, height));
    }

    // --- buffers ---

    pub fn create_buffer(&self) -> Option<BufferOf<S>> {
        self.forward(|gl| gl.create_buffer()).flatten()
    }

    pub fn delete_buffer(&self, buffer: BufferOf<S>) {
        self.forward(|gl| gl.delete_buffer(buffer));
    }

    pub fn is_buffer(&self, buffer: BufferOf<S>) -> Option<bool> {
        self.forward(|gl| gl.is_buffer(buffer))
    }

    pub fn bind_buffer(&self, target: u32, buffer: Option<BufferOf<S>>) {
        if self.rejects(|_| {
            check_member(validate::is_buffer_target(target), "bindBuffer", "target", target, "a buffer target")
        }) {
            return;
        }
        self.forward(|gl| gl.bind_buffer(target, buffer));
    }

    pub fn buffer_data(&self, target: u32, data: BufferData<'_>, usage: u32) {
        const OP: &str = "bufferData";
        if self.rejects(|_| {
            check_member(validate::is_buffer_target(target), OP, "target", target, "a buffer target")?;
            validate::check_buffer_source(OP, &data)?;
            check_member(validate::is_buffer_usage(usage), OP, "usage", usage, "a buffer usage")
        }) {
            return;
        }
        self.forward(|gl| gl.buffer_data(target, data, usage));
    }

    pub fn buffer_sub_data(&self, target: u32, offset: i64, data: &[u8]) {
        const OP: &str = "bufferSubData";
        if self.rejects(|_| {
            check_member(validate::is_buffer_target(target), OP, "target", target, "a buffer target")?;
            validate::check_uint(OP, "offset", offset)
        }) {
            return;
        }
        self.forward(|gl| gl.buffer_sub_data(target, offset, data));
    }

    pub fn get_buffer_parameter(&self, target: u32, pname: u32) -> Option<Parameter> {
        self.forward(|gl| gl.get_buffer_parameter(target, pname))
    }

    // --- framebuffers and renderbuffers ---

    pub fn create_framebuffer(&self) -> Option<FramebufferOf<S>> {
        self.forward(|gl| gl.create_framebuffer()).flatten()
    }

    pub fn delete_framebuffer(&self, framebuffer: FramebufferOf<S>) {
        self.forward(|gl| gl.delete_framebuffer(framebuffer));
    }

    pub fn is_framebuffer(&self, framebuffer: FramebufferOf<S>) -> Option<bool> {
        self.forward(|gl| gl.is_framebuffer(framebuffer))
    }

    pub fn bind_framebuffer(&self, target: u32, framebuffer: Option<FramebufferOf<S>>) {
        if self.rejects(|_| {
            check_member(
                validate::is_framebuffer_target(target),
                "bindFramebuffer",
                "target",
                target,
                "FRAMEBUFFER",
            )
        }) {
            return;
        }
        self.forward(|gl| gl.bind_framebuffer(target, framebuffer));
    }

    pub fn check_framebuffer_status(&self, target: u32) -> Option<u32> {
        if self.rejects(|_| {
            check_member(
                validate::is_framebuffer_target(target),
                "checkFramebufferStatus",
                "target",
                target,
                "FRAMEBUFFER",
            )
        }) {
            return None;
        }
        self.forward(|gl| gl.check_framebuffer_status(target))
    }

    pub fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: Option<RenderbufferOf<S>>,
    ) {
        self.forward(|gl| gl.framebuffer_renderbuffer(target, attachment, renderbuffer_target, renderbuffer));
    }

    pub fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<TextureOf<S>>,
        level: i32,
    ) {
        self.forward(|gl| gl.framebuffer_texture_2d(target, attachment, texture_target, texture, level));
    }

    pub fn get_framebuffer_attachment_parameter(
        &self,
        target: u32,
        attachment: u32,
        pname: u32,
    ) -> Option<Parameter> {
        self.forward(|gl| gl.get_framebuffer_attachment_parameter(target, attachment, pname))
    }

    pub fn create_renderbuffer(&self) -> Option<RenderbufferOf<S>> {
        self.forward(|gl| gl.create_renderbuffer()).flatten()
    }

    pub fn delete_renderbuffer(&self, renderbuffer: RenderbufferOf<S>) {
        self.forward(|gl| gl.delete_renderbuffer(renderbuffer));
    }

    pub fn is_renderbuffer(&self, renderbuffer: RenderbufferOf<S>) -> Option<bool> {
        self.forward(|gl| gl.is_renderbuffer(renderbuffer))
    }

    pub fn bind_renderbuffer(&self, target: u32, renderbuffer: Option<RenderbufferOf<S>>) {
        if self.rejects(|_| {
            check_member(
                validate::is_renderbuffer_target(target),
                "bindRenderbuffer",
                "target",
                target,
                "RENDERBUFFER",
            )
        }) {
            return;
        }
        self.forward(|gl| gl.bind_renderbuffer(target, renderbuffer));
    }

    pub fn renderbuffer_storage(&self, target: u32, internal_format: u32, width: i32, height: i32) {
        self.forward(|gl| gl.renderbuffer_storage(target, internal_format, width, height));
    }

    pub fn get_renderbuffer_parameter(&self, target: u32, pname: u32) -> Option<Parameter> {
        self.forward(|gl| gl.get_renderbuffer_parameter(target, pname))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        kind: u32,
        pixels: &mut [u8],
    ) {
        self.forward(|gl| gl.read_pixels(x, y, width, height, format, kind, pixels));
    }

    // --- textures ---

    pub fn create_texture(&self) -> Option<TextureOf<S>> {
        self.forward(|gl| gl.create_texture()).flatten()
    }

    pub fn delete_texture(&self, texture: TextureOf<S>) {
        self.forward(|gl| gl.delete_texture(texture));
    }

    pub fn is_texture(&self, texture: TextureOf<S>) -> Option<bool> {
        self.forward(|gl| gl.is_texture(texture))
    }

    pub fn bind_texture(&self, target: u32, texture: Option<TextureOf<S>>) {
        if self.rejects(|_| {
            check_member(
                validate::is_texture_target(target),
                "bindTexture",
                "target",
                target,
                "TEXTURE_2D or TEXTURE_CUBE_MAP",
            )
        }) {
            return;
        }
        self.forward(|gl| gl.bind_texture(target, texture));
    }

    pub fn generate_mipmap(&self, target: u32) {
        self.forward(|gl| gl.generate_mipmap(target));
    }

    pub fn get_tex_parameter(&self, target: u32, pname: u32) -> Option<Parameter> {
        self.forward(|gl| gl.get_tex_parameter(target, pname))
    }

    pub fn tex_parameterf(&self, target: u32, pname: u32, param: f32) {
        self.forward(|gl| gl.tex_parameterf(target, pname, param));
    }

    pub fn tex_parameteri(&self, target: u32, pname: u32, param: i32) {
        self.forward(|gl| gl.tex_parameteri(target, pname, param));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        border: i32,
        format: u32,
        kind: u32,
        pixels: Option<&[u8]>,
    ) {
        self.forward(|gl| {
            gl.tex_image_2d(target, level, internal_format, width, height, border, format, kind, pixels)
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        width: i32,
        height: i32,
        format: u32,
        kind: u32,
        pixels: &[u8],
    ) {
        self.forward(|gl| {
            gl.tex_sub_image_2d(target, level, xoffset, yoffset, width, height, format, kind, pixels)
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compressed_tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        border: i32,
        data: &[u8],
    ) {
        self.forward(|gl| {
            gl.compressed_tex_image_2d(target, level, internal_format, width, height, border, data)
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compressed_tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        width: i32,
        height: i32,
        format: u32,
        data: &[u8],
    ) {
        self.forward(|gl| {
            gl.compressed_tex_sub_image_2d(target, level, xoffset, yoffset, width, height, format, data)
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: u32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        border: i32,
    ) {
        self.forward(|gl| gl.copy_tex_image_2d(target, level, internal_format, x, y, width, height, border));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) {
        self.forward(|gl| gl.copy_tex_sub_image_2d(target, level, xoffset, yoffset, x, y, width, height));
    }

    // --- shaders and programs ---

    pub fn create_shader(&self, kind: u32) -> Option<ShaderOf<S>> {
        if self.rejects(|_| {
            check_member(
                validate::is_shader_type(kind),
                "createShader",
                "type",
                kind,
                "VERTEX_SHADER or FRAGMENT_SHADER",
            )
        }) {
            return None;
        }
        self.forward(|gl| gl.create_shader(kind)).flatten()
    }

    pub fn delete_shader(&self, shader: ShaderOf<S>) {
        self.forward(|gl| gl.delete_shader(shader));
    }

    pub fn is_shader(&self, shader: ShaderOf<S>) -> Option<bool> {
        self.forward(|gl| gl.is_shader(shader))
    }

    pub fn shader_source(&self, shader: ShaderOf<S>, source: &str) {
        self.forward(|gl| gl.shader_source(shader, source));
    }

    pub fn compile_shader(&self, shader: ShaderOf<S>) {
        self.forward(|gl| gl.compile_shader(shader));
    }

    pub fn get_shader_parameter(&self, shader: ShaderOf<S>, pname: u32) -> Option<Parameter> {
        self.forward(|gl| gl.get_shader_parameter(shader, pname))
    }

    pub fn get_shader_info_log(&self, shader: ShaderOf<S>) -> Option<String> {
        self.forward(|gl| gl.get_shader_info_log(shader))
    }

    pub fn get_shader_source(&self, shader: ShaderOf<S>) -> Option<String> {
        self.forward(|gl| gl.get_shader_source(shader)).flatten()
    }

    pub fn get_shader_precision_format(
        &self,
        shader_type: u32,
        precision_type: u32,
    ) -> Option<ShaderPrecisionFormat> {
        self.forward(|gl| gl.get_shader_precision_format(shader_type, precision_type))
            .flatten()
    }

    pub fn create_program(&self) -> Option<ProgramOf<S>> {
        self.forward(|gl| gl.create_program()).flatten()
    }

    pub fn delete_program(&self, program: ProgramOf<S>) {
        self.forward(|gl| gl.delete_program(program));
    }

    pub fn is_program(&self, program: ProgramOf<S>) -> Option<bool> {
        self.forward(|gl| gl.is_program(program))
    }

    pub fn attach_shader(&self, program: ProgramOf<S>, shader: ShaderOf<S>) {
        self.forward(|gl| gl.attach_shader(program, shader));
    }

    pub fn detach_shader(&self, program: ProgramOf<S>, shader: ShaderOf<S>) {
        self.forward(|gl| gl.detach_shader(program, shader));
    }

    pub fn get_attached_shaders(&self, program: ProgramOf<S>) -> Option<Vec<ShaderOf<S>>> {
        self.forward(|gl| gl.get_attached_shaders(program))
    }

    pub fn bind_attrib_location(&self, program: ProgramOf<S>, index: u32, name: &str) {
        self.forward(|gl| gl.bind_attrib_location(program, index, name));
    }

    pub fn link_program(&self, program: ProgramOf<S>) {
        self.forward(|gl| gl.link_program(program));
    }

    pub fn validate_program(&self, program: ProgramOf<S>) {
        self.forward(|gl| gl.validate_program(program));
    }

    pub fn get_program_parameter(&self, program: ProgramOf<S>, pname: u32) -> Option<Parameter> {
        self.forward(|gl| gl.get_program_parameter(program, pname))
    }

    pub fn get_program_info_log(&self, program: ProgramOf<S>) -> Option<String> {
        self.forward(|gl| gl.get_program_info_log(program))
    }

    pub fn get_active_attrib(&self, program: ProgramOf<S>, index: u32) -> Option<ActiveInfo> {
        self.forward(|gl| gl.get_active_attrib(program, index)).flatten()
    }

    pub fn get_active_uniform(&self, program: ProgramOf<S>, index: u32) -> Option<ActiveInfo> {
        self.forward(|gl| gl.get_active_uniform(program, index)).flatten()
    }

    pub fn get_attrib_location(&self, program: ProgramOf<S>, name: &str) -> Option<i32> {
        self.forward(|gl| gl.get_attrib_location(program, name))
    }

    pub fn get_uniform_location(&self, program: ProgramOf<S>, name: &str) -> Option<UniformLocationOf<S>> {
        self.forward(|gl| gl.get_uniform_location(program, name)).flatten()
    }

    pub fn get_uniform(&self, program: ProgramOf<S>, location: &UniformLocationOf<S>) -> Option<Parameter> {
        self.forward(|gl| gl.get_uniform(program, location))
    }

    // --- uniforms ---

    pub fn uniform1f(&self, location: Option<&UniformLocationOf<S>>, x: f32) {
        self.forward(|gl| gl.uniform1f(location, x));
    }

    pub fn uniform2f(&self, location: Option<&UniformLocationOf<S>>, x: f32, y: f32) {
        self.forward(|gl| gl.uniform2f(location, x, y));
    }

    pub fn uniform3f(&self, location: Option<&UniformLocationOf<S>>, x: f32, y: f32, z: f32) {
        self.forward(|gl| gl.uniform3f(location, x, y, z));
    }

    pub fn uniform4f(&self, location: Option<&UniformLocationOf<S>>, x: f32, y: f32, z: f32, w: f32) {
        self.forward(|gl| gl.uniform4f(location, x, y, z, w));
    }

    pub fn uniform1i(&self, location: Option<&UniformLocationOf<S>>, x: i32) {
        self.forward(|gl| gl.uniform1i(location, x));
    }

    pub fn uniform2i(&self, location: Option<&UniformLocationOf<S>>, x: i32, y: i32) {
        self.forward(|gl| gl.uniform2i(location, x, y));
    }

    pub fn uniform3i(&self, location: Option<&UniformLocationOf<S>>, x: i32, y: i32, z: i32) {
        self.forward(|gl| gl.uniform3i(location, x, y, z));
    }

    pub fn uniform4i(&self, location: Option<&UniformLocationOf<S>>, x: i32, y: i32, z: i32, w: i32) {
        self.forward(|gl| gl.uniform4i(location, x, y, z, w));
    }

    pub fn uniform1fv(&self, location: Option<&UniformLocationOf<S>>, value: &[f32]) {
        self.forward(|gl| gl.uniform1fv(location, value));
    }

    pub fn uniform2fv(&self, location: Option<&UniformLocationOf<S>>, value: &[f32]) {
        self.forward(|gl| gl.uniform2fv(location, value));
    }

    pub fn uniform3fv(&self, location: Option<&UniformLocationOf<S>>, value: &[f32]) {
        self.forward(|gl| gl.uniform3fv(location, value));
    }

    pub fn uniform4fv(&self, location: Option<&UniformLocationOf<S>>, value: &[f32]) {
        self.forward(|gl| gl.uniform4fv(location, value));
    }

    pub fn uniform1iv(&self, location: Option<&UniformLocationOf<S>>, value: &[i32]) {
        self.forward(|gl| gl.uniform1iv(location, value));
    }

    pub fn uniform2iv(&self, location: Option<&UniformLocationOf<S>>, value: &[i32]) {
        self.forward(|gl| gl.uniform2iv(location, value));
    }

    pub fn uniform3iv(&self, location: Option<&UniformLocationOf<S>>, value: &[i32]) {
        self.forward(|gl| gl.uniform3iv(location, value));
    }

    pub fn uniform4iv(&self, location: Option<&UniformLocationOf<S>>, value: &[i32]) {
        self.forward(|gl| gl.uniform4iv(location, value));
    }

    pub fn uniform_matrix2fv(&self, location: Option<&UniformLocationOf<S>>, transpose: bool, value: &[f32]) {
        self.forward(|gl| gl.uniform_matrix2fv(location, transpose, value));
    }

    pub fn uniform_matrix3fv(&self, location: Option<&UniformLocationOf<S>>, transpose: bool, value: &[f32]) {
        self.forward(|gl| gl.uniform_matrix3fv(location, transpose, value));
    }

    pub fn uniform_matrix4fv(&self, location: Option<&UniformLocationOf<S>>, transpose: bool, value: &[f32]) {
        self.forward(|gl| gl.uniform_matrix4fv(location, transpose, value));
    }

    // --- vertex attributes and drawing ---

    pub fn get_vertex_attrib(&self, index: u32, pname: u32) -> Option<Parameter> {
        self.forward(|gl| gl.get_vertex_attrib(index, pname))
    }

    pub fn get_vertex_attrib_offset(&self, index: u32, pname: u32) -> Option<i64> {
        self.forward(|gl| gl.get_vertex_attrib_offset(index, pname))
    }

    pub fn vertex_attrib1f(&self, index: u32, x: f32) {
        self.forward(|gl| gl.vertex_attrib1f(index, x));
    }

    pub fn vertex_attrib2f(&self, index: u32, x: f32, y: f32) {
        self.forward(|gl| gl.vertex_attrib2f(index, x, y));
    }

    pub fn vertex_attrib3f(&self, index: u32, x: f32, y: f32, z: f32) {
        self.forward(|gl| gl.vertex_attrib3f(index, x, y, z));
    }

    pub fn vertex_attrib4f(&self, index: u32, x: f32, y: f32, z: f32, w: f32) {
        self.forward(|gl| gl.vertex_attrib4f(index, x, y, z, w));
    }

    pub fn vertex_attrib1fv(&self, index: u32, value: &[f32]) {
        self.forward(|gl| gl.vertex_attrib1fv(index, value));
    }

    pub fn vertex_attrib2fv(&self, index: u32, value: &[f32]) {
        self.forward(|gl| gl.vertex_attrib2fv(index, value));
    }

    pub fn vertex_attrib3fv(&self, index: u32, value: &[f32]) {
        self.forward(|gl| gl.vertex_attrib3fv(index, value));
    }

    pub fn vertex_attrib4fv(&self, index: u32, value: &[f32]) {
        self.forward(|gl| gl.vertex_attrib4fv(index, value));
    }

    pub fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        kind: u32,
        normalized: bool,
        stride: i32,
        offset: i64,
    ) {
        self.forward(|gl| gl.vertex_attrib_pointer(index, size, kind, normalized, stride, offset));
    }

    pub fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.forward(|gl| gl.draw_arrays(mode, first, count));
    }

    pub fn draw_elements(&self, mode: u32, count: i32, kind: u32, offset: i64) {
        self.forward(|gl| gl.draw_elements(mode, count, kind, offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::EXT_BLEND_MINMAX;
    use crate::record::Recorder;
    use crate::surface::{Detached, HostEvent};
    use proptest::prelude::*;

    type Facade = GlState<Detached<Recorder>>;

    fn facade_over(device: Recorder, validate: bool) -> Facade {
        GlState::new(
            Detached::new(device),
            &ContextAttributes::default(),
            StateConfig::default().with_validation(validate),
        )
    }

    /// A validating façade whose journal starts empty.
    fn facade() -> Facade {
        let gl = facade_over(Recorder::new(), true);
        dev(&gl).clear();
        gl
    }

    fn dev(gl: &Facade) -> &Recorder {
        gl.device().expect("façade has a device")
    }

    fn lose(gl: &mut Facade) {
        gl.handle_context_event(ContextEventKind::Lost, &mut HostEvent::new());
    }

    fn restore(gl: &mut Facade) {
        gl.handle_context_event(ContextEventKind::Restored, &mut HostEvent::new());
    }

    /// Surface that only knows the legacy context id.
    struct LegacyOnly {
        device: Option<Recorder>,
        tried: Vec<ContextKind>,
    }

    impl Surface for LegacyOnly {
        type Device = Recorder;

        fn get_context(&mut self, kind: ContextKind, _attributes: &ContextAttributes) -> Option<Recorder> {
            self.tried.push(kind);
            match kind {
                ContextKind::ExperimentalWebGl => self.device.take(),
                ContextKind::WebGl => None,
            }
        }

        fn add_context_listener(&mut self, _kind: ContextEventKind) {}

        fn remove_context_listener(&mut self, _kind: ContextEventKind) {}
    }

    // --- construction ---

    #[test]
    fn construction_probes_and_subscribes() {
        let gl = facade_over(Recorder::new().with_extensions(&[EXT_BLEND_MINMAX]), true);
        assert!(gl.have_context());
        assert!(!gl.is_lost());
        assert!(gl.cache().is_empty());
        assert!(gl.capabilities().is_some_and(|c| c.has(EXT_BLEND_MINMAX)));
        let surface = gl.canvas().unwrap();
        for kind in ContextEventKind::ALL {
            assert!(surface.is_listening(kind), "not subscribed to {}", kind.as_str());
        }
    }

    #[test]
    fn construction_falls_back_to_legacy_context_id() {
        let surface = LegacyOnly {
            device: Some(Recorder::new()),
            tried: Vec::new(),
        };
        let gl = GlState::new(surface, &ContextAttributes::default(), StateConfig::default());
        assert!(gl.have_context());
        assert_eq!(
            gl.canvas().unwrap().tried,
            [ContextKind::WebGl, ContextKind::ExperimentalWebGl]
        );
    }

    #[test]
    fn unavailable_device_degrades_to_no_op() {
        let mut gl: Facade = GlState::new(
            Detached::unavailable(),
            &ContextAttributes::default(),
            StateConfig::default(),
        );
        assert!(!gl.have_context());
        assert!(gl.capabilities().is_none());
        gl.enable(enums::CULL_FACE);
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        assert!(gl.create_buffer().is_none());
        assert!(gl.get_error().is_none());
        assert!(gl.drawing_buffer_width().is_none());
        assert!(gl.cache().is_empty());
        assert_eq!(gl.stats(), CallStats::default());
    }

    #[test]
    fn try_new_reports_missing_device() {
        let result: Result<Facade, _> = GlState::try_new(
            Detached::unavailable(),
            &ContextAttributes::default(),
            StateConfig::default(),
        );
        let err = result.err().expect("no device should be an error");
        assert!(format!("{err}").contains("webgl"));
    }

    #[test]
    fn drawing_buffer_size_passes_through() {
        let gl = facade_over(Recorder::new().with_size(800, 600), true);
        assert_eq!(gl.drawing_buffer_width(), Some(800));
        assert_eq!(gl.drawing_buffer_height(), Some(600));
    }

    // --- elision ---

    #[test]
    fn cull_face_loss_and_restore_scenario() {
        let mut gl = facade();
        gl.enable(enums::CULL_FACE);
        assert_eq!(
            gl.cache().get(Slot::Capability(enums::CULL_FACE)),
            Some(&CachedValue::scalar(true))
        );
        gl.enable(enums::CULL_FACE);
        gl.disable(enums::CULL_FACE);
        assert_eq!(
            gl.cache().get(Slot::Capability(enums::CULL_FACE)),
            Some(&CachedValue::scalar(false))
        );
        lose(&mut gl);
        gl.enable(enums::CULL_FACE);
        restore(&mut gl);
        assert!(gl.cache().is_empty());
        gl.enable(enums::CULL_FACE);
        assert_eq!(
            gl.cache().get(Slot::Capability(enums::CULL_FACE)),
            Some(&CachedValue::scalar(true))
        );

        let device = dev(&gl);
        assert_eq!(device.count("enable") + device.count("disable"), 3);
        assert_eq!(device.total(), 3);
    }

    #[test]
    fn first_call_always_forwards_even_for_defaults() {
        let mut gl = facade();
        gl.disable(enums::BLEND);
        gl.depth_func(enums::LESS);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.use_program(None);
        let device = dev(&gl);
        assert_eq!(device.count("disable"), 1);
        assert_eq!(device.count("depthFunc"), 1);
        assert_eq!(device.count("clearColor"), 1);
        assert_eq!(device.count("useProgram"), 1);
    }

    #[test]
    fn indexed_capabilities_are_independent() {
        let mut gl = facade();
        gl.enable(enums::BLEND);
        gl.enable(enums::DEPTH_TEST);
        gl.disable(enums::BLEND);
        gl.enable(enums::DEPTH_TEST);
        assert_eq!(dev(&gl).count("enable"), 2);
        assert_eq!(dev(&gl).count("disable"), 1);
    }

    #[test]
    fn interleaved_toggles_forward_every_transition() {
        let mut gl = facade();
        for _ in 0..3 {
            gl.enable(enums::SCISSOR_TEST);
            gl.disable(enums::SCISSOR_TEST);
        }
        assert_eq!(dev(&gl).count("enable"), 3);
        assert_eq!(dev(&gl).count("disable"), 3);
    }

    #[test]
    fn vertex_attrib_arrays_are_per_index() {
        let mut gl = facade();
        gl.enable_vertex_attrib_array(0);
        gl.enable_vertex_attrib_array(1);
        gl.enable_vertex_attrib_array(0);
        gl.disable_vertex_attrib_array(1);
        assert_eq!(dev(&gl).count("enableVertexAttribArray"), 2);
        assert_eq!(dev(&gl).count("disableVertexAttribArray"), 1);
    }

    #[test]
    fn single_component_change_resends_whole_tuple() {
        let mut gl = facade();
        gl.scissor(0, 0, 100, 100);
        gl.scissor(0, 0, 100, 101);
        let last = dev(&gl).last("scissor").unwrap();
        assert_eq!(last.args, serde_json::json!([0, 0, 100, 101]));
        assert_eq!(dev(&gl).count("scissor"), 2);
        assert_eq!(
            gl.cache().get(Slot::Scissor),
            Some(&CachedValue::quad(0, 0, 100, 101))
        );
    }

    #[test]
    fn program_binding_elides_same_handle() {
        let mut gl = facade();
        let program = gl.create_program().unwrap();
        gl.use_program(Some(program));
        gl.use_program(Some(program));
        gl.use_program(None);
        gl.use_program(None);
        assert_eq!(dev(&gl).count("useProgram"), 2);
    }

    #[test]
    fn pixel_store_is_keyed_by_pname() {
        let mut gl = facade();
        gl.pixel_storei(enums::UNPACK_ALIGNMENT, 1);
        gl.pixel_storei(enums::PACK_ALIGNMENT, 1);
        gl.pixel_storei(enums::UNPACK_ALIGNMENT, 1);
        assert_eq!(dev(&gl).count("pixelStorei"), 2);
    }

    // --- shared slots ---

    #[test]
    fn blend_func_and_separate_share_a_slot() {
        let mut gl = facade();
        gl.blend_func(enums::ONE, enums::ZERO);
        gl.blend_func_separate(enums::ONE, enums::ZERO, enums::ONE, enums::ZERO);
        assert_eq!(dev(&gl).count("blendFuncSeparate"), 0, "equivalent separate call should be elided");

        gl.blend_func_separate(enums::ONE, enums::ZERO, enums::ONE, enums::ONE);
        gl.blend_func(enums::ONE, enums::ZERO);
        assert_eq!(dev(&gl).count("blendFuncSeparate"), 1);
        assert_eq!(dev(&gl).count("blendFunc"), 2, "plain call after a separate one must forward");
    }

    #[test]
    fn blend_equation_and_separate_share_a_slot() {
        let mut gl = facade();
        gl.blend_equation(enums::FUNC_ADD);
        gl.blend_equation_separate(enums::FUNC_ADD, enums::FUNC_ADD);
        gl.blend_equation_separate(enums::FUNC_ADD, enums::FUNC_SUBTRACT);
        gl.blend_equation(enums::FUNC_ADD);
        assert_eq!(dev(&gl).count("blendEquation"), 2);
        assert_eq!(dev(&gl).count("blendEquationSeparate"), 1);
    }

    #[test]
    fn stencil_func_tracks_faces_separately() {
        let mut gl = facade();
        gl.stencil_func_separate(enums::FRONT, enums::ALWAYS, 1, 0xFF);
        gl.stencil_func(enums::ALWAYS, 1, 0xFF);
        assert_eq!(dev(&gl).count("stencilFunc"), 1, "back face differs, must forward");

        gl.stencil_func_separate(enums::BACK, enums::ALWAYS, 1, 0xFF);
        gl.stencil_func_separate(enums::FRONT_AND_BACK, enums::ALWAYS, 1, 0xFF);
        gl.stencil_func(enums::ALWAYS, 1, 0xFF);
        assert_eq!(dev(&gl).count("stencilFuncSeparate"), 1);
        assert_eq!(dev(&gl).count("stencilFunc"), 1);
    }

    #[test]
    fn stencil_mask_and_op_write_both_faces() {
        let mut gl = facade();
        gl.stencil_mask(0x0F);
        gl.stencil_mask_separate(enums::BACK, 0x0F);
        gl.stencil_op(enums::KEEP, enums::KEEP, enums::REPLACE);
        gl.stencil_op_separate(enums::FRONT, enums::KEEP, enums::KEEP, enums::REPLACE);
        assert_eq!(dev(&gl).count("stencilMaskSeparate"), 0);
        assert_eq!(dev(&gl).count("stencilOpSeparate"), 0);
        assert_eq!(
            gl.cache().get(Slot::StencilOp(Face::Back)),
            Some(&CachedValue::triple(enums::KEEP, enums::KEEP, enums::REPLACE))
        );
    }

    // --- loss ---

    #[test]
    fn lost_suppresses_every_forward() {
        let mut gl = facade();
        gl.enable(enums::BLEND);
        lose(&mut gl);
        let before = dev(&gl).total();
        let cache_len = gl.cache().len();

        gl.enable(enums::DEPTH_TEST);
        gl.disable(enums::BLEND);
        gl.clear_color(0.5, 0.5, 0.5, 1.0);
        gl.use_program(None);
        gl.clear(enums::COLOR_BUFFER_BIT);
        gl.draw_arrays(enums::TRIANGLES, 0, 3);
        assert!(gl.create_buffer().is_none());
        assert!(gl.get_parameter(enums::MAX_TEXTURE_SIZE).is_none());
        assert!(gl.is_enabled(enums::BLEND).is_none());

        assert_eq!(dev(&gl).total(), before);
        assert_eq!(gl.cache().len(), cache_len);
        assert!(gl.stats().suppressed >= 9);
    }

    #[test]
    fn restore_forces_reapply_of_identical_values() {
        let mut gl = facade();
        gl.depth_func(enums::LEQUAL);
        gl.line_width(2.0);
        lose(&mut gl);
        restore(&mut gl);
        gl.depth_func(enums::LEQUAL);
        gl.line_width(2.0);
        assert_eq!(dev(&gl).count("depthFunc"), 2);
        assert_eq!(dev(&gl).count("lineWidth"), 2);
    }

    #[test]
    fn loss_events_are_acknowledged() {
        let mut gl = facade();
        let mut lost = HostEvent::new();
        gl.handle_context_event(ContextEventKind::Lost, &mut lost);
        assert!(lost.default_prevented());
        assert!(gl.is_lost());
        let mut restored = HostEvent::new();
        gl.handle_context_event(ContextEventKind::Restored, &mut restored);
        assert!(restored.default_prevented());
        assert!(!gl.is_lost());
    }

    // --- validation ---

    #[test]
    fn clear_color_rejects_out_of_range() {
        let mut gl = facade();
        gl.clear_color(1.5, 0.0, 0.0, 1.0);
        assert_eq!(dev(&gl).count("clearColor"), 0);
        assert!(gl.cache().get(Slot::ClearColor).is_none());
        gl.clear_color(1.0, 0.0, 0.0, 1.0);
        assert_eq!(dev(&gl).count("clearColor"), 1);
        assert_eq!(gl.stats().rejected, 1);
    }

    #[test]
    fn clear_accepts_defined_bit_unions_only() {
        let gl = facade();
        let bits = [enums::COLOR_BUFFER_BIT, enums::DEPTH_BUFFER_BIT, enums::STENCIL_BUFFER_BIT];
        let mut accepted = 0;
        for combo in 1u32..8 {
            let mask = (0..3)
                .filter(|i| combo & (1 << i) != 0)
                .fold(0, |acc, i| acc | bits[i]);
            gl.clear(mask);
            accepted += 1;
        }
        assert_eq!(dev(&gl).count("clear"), accepted);
        gl.clear(0x0000_0001);
        gl.clear(0);
        assert_eq!(dev(&gl).count("clear"), accepted);
    }

    #[test]
    fn rejected_call_leaves_cache_untouched() {
        let mut gl = facade();
        gl.enable(0x1234);
        gl.depth_func(enums::FRONT);
        gl.front_face(enums::FRONT);
        assert!(gl.cache().is_empty());
        assert_eq!(dev(&gl).total(), 0);
        assert_eq!(gl.stats().rejected, 3);
    }

    #[test]
    fn blend_minmax_needs_extension() {
        let mut gl = facade();
        gl.blend_equation(enums::MIN_EXT);
        assert_eq!(dev(&gl).count("blendEquation"), 0);

        let mut gl = facade_over(Recorder::new().with_extensions(&[EXT_BLEND_MINMAX]), true);
        gl.blend_equation(enums::MIN_EXT);
        assert_eq!(dev(&gl).count("blendEquation"), 1);
    }

    #[test]
    fn constant_color_alpha_pairing_rejected() {
        let mut gl = facade();
        gl.blend_func(enums::CONSTANT_ALPHA, enums::CONSTANT_COLOR);
        gl.blend_func_separate(enums::CONSTANT_COLOR, enums::ONE_MINUS_CONSTANT_ALPHA, enums::ONE, enums::ONE);
        assert_eq!(dev(&gl).count("blendFunc"), 0);
        assert_eq!(dev(&gl).count("blendFuncSeparate"), 0);
        // Alpha factors are not paired against each other.
        gl.blend_func_separate(enums::ONE, enums::ZERO, enums::CONSTANT_COLOR, enums::CONSTANT_ALPHA);
        assert_eq!(dev(&gl).count("blendFuncSeparate"), 1);
    }

    #[test]
    fn active_texture_bounded_by_combined_units() {
        let mut gl = facade();
        gl.active_texture(enums::TEXTURE0 + 31);
        gl.active_texture(enums::TEXTURE0 + 32);
        gl.active_texture(enums::TEXTURE0 - 1);
        assert_eq!(dev(&gl).count("activeTexture"), 1);
    }

    #[test]
    fn vertex_attrib_index_bounded_by_limit() {
        let mut gl = facade();
        gl.enable_vertex_attrib_array(15);
        gl.enable_vertex_attrib_array(16);
        assert_eq!(dev(&gl).count("enableVertexAttribArray"), 1);
    }

    #[test]
    fn pixel_store_values_are_checked_per_pname() {
        let mut gl = facade();
        gl.pixel_storei(enums::UNPACK_ALIGNMENT, 3);
        gl.pixel_storei(enums::UNPACK_FLIP_Y_WEBGL, 2);
        gl.pixel_storei(enums::UNPACK_COLORSPACE_CONVERSION_WEBGL, enums::NONE as i32);
        assert_eq!(dev(&gl).count("pixelStorei"), 1);
    }

    #[test]
    fn validated_pass_throughs() {
        let gl = facade();
        gl.bind_buffer(enums::TEXTURE_2D, None);
        gl.bind_framebuffer(enums::RENDERBUFFER, None);
        gl.bind_renderbuffer(enums::FRAMEBUFFER, None);
        gl.bind_texture(enums::ARRAY_BUFFER, None);
        gl.buffer_data(enums::ARRAY_BUFFER, BufferData::Size(-1), enums::STATIC_DRAW);
        gl.buffer_data(enums::ARRAY_BUFFER, BufferData::Size(16), enums::TEXTURE_2D);
        gl.buffer_sub_data(enums::ARRAY_BUFFER, -4, &[0; 4]);
        assert!(gl.check_framebuffer_status(enums::TEXTURE_2D).is_none());
        assert!(gl.create_shader(enums::TEXTURE_2D).is_none());
        assert_eq!(dev(&gl).total(), 0);
        assert_eq!(gl.stats().rejected, 9);

        gl.bind_buffer(enums::ARRAY_BUFFER, None);
        gl.buffer_data(enums::ARRAY_BUFFER, BufferData::Bytes(&[1, 2, 3, 4]), enums::STATIC_DRAW);
        gl.buffer_sub_data(enums::ARRAY_BUFFER, 0, &[5]);
        assert_eq!(
            gl.check_framebuffer_status(enums::FRAMEBUFFER),
            Some(enums::FRAMEBUFFER_COMPLETE)
        );
        assert!(gl.create_shader(enums::VERTEX_SHADER).is_some());
        assert_eq!(dev(&gl).total(), 5);
    }

    #[test]
    fn disabled_validation_forwards_bad_arguments_with_same_caching() {
        let mut gl = facade_over(Recorder::new(), false);
        dev(&gl).clear();
        gl.clear_color(1.5, 0.0, 0.0, 1.0);
        gl.clear_color(1.5, 0.0, 0.0, 1.0);
        gl.enable(0x1234);
        gl.clear(0);
        assert_eq!(dev(&gl).count("clearColor"), 1);
        assert_eq!(dev(&gl).count("enable"), 1);
        assert_eq!(dev(&gl).count("clear"), 1);
        assert_eq!(gl.stats().rejected, 0);
    }

    #[test]
    fn invalid_face_without_validation_forwards_uncached() {
        let mut gl = facade_over(Recorder::new(), false);
        dev(&gl).clear();
        gl.stencil_mask_separate(enums::CW, 1);
        gl.stencil_mask_separate(enums::CW, 1);
        assert_eq!(dev(&gl).count("stencilMaskSeparate"), 2);
        assert!(gl.cache().is_empty());
    }

    // --- pass-through ---

    #[test]
    fn pass_through_returns_device_results() {
        let gl = facade();
        let buffer = gl.create_buffer().unwrap();
        assert_eq!(gl.is_buffer(buffer), Some(true));
        gl.delete_buffer(buffer);
        assert_eq!(gl.is_buffer(buffer), Some(false));
        assert_eq!(gl.get_error(), Some(enums::NO_ERROR));
        gl.draw_arrays(enums::TRIANGLES, 0, 3);
        gl.draw_arrays(enums::TRIANGLES, 0, 3);
        assert_eq!(dev(&gl).count("drawArrays"), 2, "draw calls are never elided");
    }

    #[test]
    fn pass_through_calls_are_counted() {
        let gl = facade();
        gl.flush();
        gl.viewport(0, 0, 10, 10);
        assert_eq!(gl.stats().forwarded, 2);
    }

    // --- destroy ---

    #[test]
    fn destroy_releases_device_and_unsubscribes() {
        let mut gl = facade();
        gl.enable(enums::BLEND);
        let surface = gl.destroy().expect("surface handed back");
        assert!(surface.listeners().is_empty());
        assert!(!gl.have_context());
        assert!(gl.cache().is_empty());
        assert!(gl.capabilities().is_none());
        assert!(gl.canvas().is_none());
        gl.enable(enums::DEPTH_TEST);
        assert!(gl.create_texture().is_none());
        assert!(gl.destroy().is_none());
    }

    // --- properties ---

    fn clampf() -> impl Strategy<Value = f32> {
        0.0f32..=1.0
    }

    proptest! {
        #[test]
        fn repeated_call_forwards_once(r in clampf(), g in clampf(), b in clampf(), a in clampf()) {
            let mut gl = facade();
            gl.clear_color(r, g, b, a);
            gl.clear_color(r, g, b, a);
            prop_assert_eq!(dev(&gl).count("clearColor"), 1);
            prop_assert_eq!(gl.stats().elided, 1);
        }

        #[test]
        fn change_forwards_exactly_once(first in clampf(), second in clampf()) {
            prop_assume!(first != second);
            let mut gl = facade();
            gl.blend_color(first, 0.0, 0.0, 1.0);
            gl.blend_color(second, 0.0, 0.0, 1.0);
            prop_assert_eq!(dev(&gl).count("blendColor"), 2);
            prop_assert_eq!(
                gl.cache().get(Slot::BlendColor),
                Some(&CachedValue::quad(second, 0.0f32, 0.0f32, 1.0f32))
            );
        }

        #[test]
        fn enable_sequence_matches_transitions(toggles in proptest::collection::vec(any::<bool>(), 1..32)) {
            let mut gl = facade();
            let mut current = None;
            let mut expected = 0;
            for on in toggles {
                if current != Some(on) {
                    expected += 1;
                    current = Some(on);
                }
                if on { gl.enable(enums::BLEND) } else { gl.disable(enums::BLEND) }
            }
            let device = dev(&gl);
            prop_assert_eq!(device.count("enable") + device.count("disable"), expected);
        }

        #[test]
        fn out_of_range_clamp_is_rejected(v in prop_oneof![1.0001f32..100.0, -100.0f32..-0.0001]) {
            let mut gl = facade();
            gl.clear_color(v, 0.0, 0.0, 1.0);
            gl.clear_depth(v);
            prop_assert_eq!(dev(&gl).total(), 0);
            prop_assert!(gl.cache().is_empty());
        }

        #[test]
        fn clear_with_undefined_bits_is_rejected(mask in any::<u32>()) {
            let gl = facade();
            gl.clear(mask);
            prop_assert_eq!(dev(&gl).count("clear") == 1, validate::is_clear_mask(mask));
        }
    }
}
