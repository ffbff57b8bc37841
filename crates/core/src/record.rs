//! A recording [`Device`] with no GPU behind it.
//!
//! Every device call except the drawing-buffer and loss-flag reads is
//! appended to a journal as a [`Call`] with its arguments as JSON, so
//! tests and the replay tool can count exactly what reached the device.
//! Query results come from a small scripted model: parameters default to
//! the WebGL 1 minimum limits and can be overridden per name.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::{json, Value};

use crate::device::{ActiveInfo, BufferData, ContextAttributes, Device, Parameter, ShaderPrecisionFormat};
use crate::enums;

/// One call that reached the device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    /// Device operation name, e.g. `"blendFunc"`.
    pub op: &'static str,
    pub args: Value,
}

/// Recording device. Handles of every kind are `u32`s from one counter.
#[derive(Debug)]
pub struct Recorder {
    calls: RefCell<Vec<Call>>,
    next_handle: Cell<u32>,
    live: RefCell<HashSet<u32>>,
    enabled: RefCell<HashSet<u32>>,
    sources: RefCell<HashMap<u32, String>>,
    parameters: HashMap<u32, Parameter>,
    extensions: Vec<String>,
    attributes: ContextAttributes,
    size: (i32, i32),
    lost: Cell<bool>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        let parameters: HashMap<u32, Parameter> = [
            (enums::MAX_COMBINED_TEXTURE_IMAGE_UNITS, Parameter::Int(32)),
            (enums::MAX_CUBE_MAP_TEXTURE_SIZE, Parameter::Int(4096)),
            (enums::MAX_FRAGMENT_UNIFORM_VECTORS, Parameter::Int(256)),
            (enums::MAX_RENDERBUFFER_SIZE, Parameter::Int(4096)),
            (enums::MAX_TEXTURE_IMAGE_UNITS, Parameter::Int(16)),
            (enums::MAX_TEXTURE_SIZE, Parameter::Int(4096)),
            (enums::MAX_VARYING_VECTORS, Parameter::Int(15)),
            (enums::MAX_VERTEX_ATTRIBS, Parameter::Int(16)),
            (enums::MAX_VERTEX_TEXTURE_IMAGE_UNITS, Parameter::Int(16)),
            (enums::MAX_VERTEX_UNIFORM_VECTORS, Parameter::Int(256)),
            (enums::MAX_VIEWPORT_DIMS, Parameter::Ints(vec![4096, 4096])),
            (enums::ALIASED_LINE_WIDTH_RANGE, Parameter::Floats(vec![1.0, 1.0])),
            (enums::VENDOR, Parameter::String("gl-state".into())),
            (enums::RENDERER, Parameter::String("recorder".into())),
            (enums::VERSION, Parameter::String("WebGL 1.0 (recorder)".into())),
            (
                enums::SHADING_LANGUAGE_VERSION,
                Parameter::String("WebGL GLSL ES 1.0 (recorder)".into()),
            ),
        ]
        .into_iter()
        .collect();

        Self {
            calls: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
            live: RefCell::new(HashSet::new()),
            enabled: RefCell::new(HashSet::new()),
            sources: RefCell::new(HashMap::new()),
            parameters,
            extensions: Vec::new(),
            attributes: ContextAttributes::default(),
            size: (300, 150),
            lost: Cell::new(false),
        }
    }

    /// Scripts the answer to `get_parameter(pname)`.
    pub fn with_parameter(mut self, pname: u32, value: Parameter) -> Self {
        self.parameters.insert(pname, value);
        self
    }

    /// Extensions the device reports and hands out.
    pub fn with_extensions(mut self, names: &[&str]) -> Self {
        self.extensions = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_attributes(mut self, attributes: ContextAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = (width, height);
        self
    }

    /// Flips the device-side loss flag reported by `is_context_lost`.
    pub fn set_lost(&self, lost: bool) {
        self.lost.set(lost);
    }

    /// Snapshot of the journal.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Total number of recorded calls.
    pub fn total(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Number of recorded calls to `op`.
    pub fn count(&self, op: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.op == op).count()
    }

    /// The most recent call to `op`.
    pub fn last(&self, op: &str) -> Option<Call> {
        self.calls.borrow().iter().rev().find(|c| c.op == op).cloned()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, op: &'static str, args: Value) {
        self.calls.borrow_mut().push(Call { op, args });
    }

    fn allocate(&self) -> u32 {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        self.live.borrow_mut().insert(handle);
        handle
    }

    fn release(&self, handle: u32) {
        self.live.borrow_mut().remove(&handle);
        self.sources.borrow_mut().remove(&handle);
    }

    fn is_live(&self, handle: u32) -> bool {
        self.live.borrow().contains(&handle)
    }
}

impl Device for Recorder {
    type Buffer = u32;
    type Framebuffer = u32;
    type Program = u32;
    type Renderbuffer = u32;
    type Shader = u32;
    type Texture = u32;
    type UniformLocation = u32;
    type Extension = String;

    // --- context ---

    fn drawing_buffer_width(&self) -> i32 {
        self.size.0
    }

    fn drawing_buffer_height(&self) -> i32 {
        self.size.1
    }

    fn is_context_lost(&self) -> bool {
        self.lost.get()
    }

    fn get_context_attributes(&self) -> Option<ContextAttributes> {
        self.record("getContextAttributes", json!([]));
        Some(self.attributes.clone())
    }

    fn get_supported_extensions(&self) -> Vec<String> {
        self.record("getSupportedExtensions", json!([]));
        self.extensions.clone()
    }

    fn get_extension(&self, name: &str) -> Option<String> {
        self.record("getExtension", json!([name]));
        self.extensions.iter().find(|e| *e == name).cloned()
    }

    fn get_error(&self) -> u32 {
        self.record("getError", json!([]));
        enums::NO_ERROR
    }

    fn get_parameter(&self, pname: u32) -> Parameter {
        self.record("getParameter", json!([pname]));
        self.parameters.get(&pname).cloned().unwrap_or(Parameter::Null)
    }

    fn finish(&self) {
        self.record("finish", json!([]));
    }

    fn flush(&self) {
        self.record("flush", json!([]));
    }

    fn hint(&self, target: u32, mode: u32) {
        self.record("hint", json!([target, mode]));
    }

    // --- fixed-function state ---

    fn active_texture(&self, texture: u32) {
        self.record("activeTexture", json!([texture]));
    }

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record("blendColor", json!([red, green, blue, alpha]));
    }

    fn blend_equation(&self, mode: u32) {
        self.record("blendEquation", json!([mode]));
    }

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32) {
        self.record("blendEquationSeparate", json!([mode_rgb, mode_alpha]));
    }

    fn blend_func(&self, sfactor: u32, dfactor: u32) {
        self.record("blendFunc", json!([sfactor, dfactor]));
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        self.record("blendFuncSeparate", json!([src_rgb, dst_rgb, src_alpha, dst_alpha]));
    }

    fn clear(&self, mask: u32) {
        self.record("clear", json!([mask]));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record("clearColor", json!([red, green, blue, alpha]));
    }

    fn clear_depth(&self, depth: f32) {
        self.record("clearDepth", json!([depth]));
    }

    fn clear_stencil(&self, s: i32) {
        self.record("clearStencil", json!([s]));
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.record("colorMask", json!([red, green, blue, alpha]));
    }

    fn cull_face(&self, mode: u32) {
        self.record("cullFace", json!([mode]));
    }

    fn depth_func(&self, func: u32) {
        self.record("depthFunc", json!([func]));
    }

    fn depth_mask(&self, flag: bool) {
        self.record("depthMask", json!([flag]));
    }

    fn depth_range(&self, z_near: f32, z_far: f32) {
        self.record("depthRange", json!([z_near, z_far]));
    }

    fn disable(&self, cap: u32) {
        self.record("disable", json!([cap]));
        self.enabled.borrow_mut().remove(&cap);
    }

    fn enable(&self, cap: u32) {
        self.record("enable", json!([cap]));
        self.enabled.borrow_mut().insert(cap);
    }

    fn is_enabled(&self, cap: u32) -> bool {
        self.record("isEnabled", json!([cap]));
        self.enabled.borrow().contains(&cap)
    }

    fn front_face(&self, mode: u32) {
        self.record("frontFace", json!([mode]));
    }

    fn line_width(&self, width: f32) {
        self.record("lineWidth", json!([width]));
    }

    fn pixel_storei(&self, pname: u32, param: i32) {
        self.record("pixelStorei", json!([pname, param]));
    }

    fn polygon_offset(&self, factor: f32, units: f32) {
        self.record("polygonOffset", json!([factor, units]));
    }

    fn sample_coverage(&self, value: f32, invert: bool) {
        self.record("sampleCoverage", json!([value, invert]));
    }

    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record("scissor", json!([x, y, width, height]));
    }

    fn stencil_func(&self, func: u32, reference: i32, mask: u32) {
        self.record("stencilFunc", json!([func, reference, mask]));
    }

    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32) {
        self.record("stencilFuncSeparate", json!([face, func, reference, mask]));
    }

    fn stencil_mask(&self, mask: u32) {
        self.record("stencilMask", json!([mask]));
    }

    fn stencil_mask_separate(&self, face: u32, mask: u32) {
        self.record("stencilMaskSeparate", json!([face, mask]));
    }

    fn stencil_op(&self, fail: u32, zfail: u32, zpass: u32) {
        self.record("stencilOp", json!([fail, zfail, zpass]));
    }

    fn stencil_op_separate(&self, face: u32, fail: u32, zfail: u32, zpass: u32) {
        self.record("stencilOpSeparate", json!([face, fail, zfail, zpass]));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record("viewport", json!([x, y, width, height]));
    }

    // --- buffers ---

    fn create_buffer(&self) -> Option<u32> {
        self.record("createBuffer", json!([]));
        Some(self.allocate())
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record("deleteBuffer", json!([buffer]));
        self.release(buffer);
    }

    fn is_buffer(&self, buffer: u32) -> bool {
        self.record("isBuffer", json!([buffer]));
        self.is_live(buffer)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record("bindBuffer", json!([target, buffer]));
    }

    fn buffer_data(&self, target: u32, data: BufferData<'_>, usage: u32) {
        let data = match data {
            BufferData::Size(size) => json!({ "size": size }),
            BufferData::Bytes(bytes) => json!({ "bytes": bytes.len() }),
        };
        self.record("bufferData", json!([target, data, usage]));
    }

    fn buffer_sub_data(&self, target: u32, offset: i64, data: &[u8]) {
        self.record("bufferSubData", json!([target, offset, data.len()]));
    }

    fn get_buffer_parameter(&self, target: u32, pname: u32) -> Parameter {
        self.record("getBufferParameter", json!([target, pname]));
        Parameter::Null
    }

    // --- framebuffers and renderbuffers ---

    fn create_framebuffer(&self) -> Option<u32> {
        self.record("createFramebuffer", json!([]));
        Some(self.allocate())
    }

    fn delete_framebuffer(&self, framebuffer: u32) {
        self.record("deleteFramebuffer", json!([framebuffer]));
        self.release(framebuffer);
    }

    fn is_framebuffer(&self, framebuffer: u32) -> bool {
        self.record("isFramebuffer", json!([framebuffer]));
        self.is_live(framebuffer)
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: Option<u32>) {
        self.record("bindFramebuffer", json!([target, framebuffer]));
    }

    fn check_framebuffer_status(&self, target: u32) -> u32 {
        self.record("checkFramebufferStatus", json!([target]));
        enums::FRAMEBUFFER_COMPLETE
    }

    fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: Option<u32>,
    ) {
        self.record(
            "framebufferRenderbuffer",
            json!([target, attachment, renderbuffer_target, renderbuffer]),
        );
    }

    fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<u32>,
        level: i32,
    ) {
        self.record(
            "framebufferTexture2D",
            json!([target, attachment, texture_target, texture, level]),
        );
    }

    fn get_framebuffer_attachment_parameter(&self, target: u32, attachment: u32, pname: u32) -> Parameter {
        self.record("getFramebufferAttachmentParameter", json!([target, attachment, pname]));
        Parameter::Null
    }

    fn create_renderbuffer(&self) -> Option<u32> {
        self.record("createRenderbuffer", json!([]));
        Some(self.allocate())
    }

    fn delete_renderbuffer(&self, renderbuffer: u32) {
        self.record("deleteRenderbuffer", json!([renderbuffer]));
        self.release(renderbuffer);
    }

    fn is_renderbuffer(&self, renderbuffer: u32) -> bool {
        self.record("isRenderbuffer", json!([renderbuffer]));
        self.is_live(renderbuffer)
    }

    fn bind_renderbuffer(&self, target: u32, renderbuffer: Option<u32>) {
        self.record("bindRenderbuffer", json!([target, renderbuffer]));
    }

    fn renderbuffer_storage(&self, target: u32, internal_format: u32, width: i32, height: i32) {
        self.record("renderbufferStorage", json!([target, internal_format, width, height]));
    }

    fn get_renderbuffer_parameter(&self, target: u32, pname: u32) -> Parameter {
        self.record("getRenderbufferParameter", json!([target, pname]));
        Parameter::Null
    }

    fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        kind: u32,
        pixels: &mut [u8],
    ) {
        self.record("readPixels", json!([x, y, width, height, format, kind, pixels.len()]));
        pixels.fill(0);
    }

    // --- textures ---

    fn create_texture(&self) -> Option<u32> {
        self.record("createTexture", json!([]));
        Some(self.allocate())
    }

    fn delete_texture(&self, texture: u32) {
        self.record("deleteTexture", json!([texture]));
        self.release(texture);
    }

    fn is_texture(&self, texture: u32) -> bool {
        self.record("isTexture", json!([texture]));
        self.is_live(texture)
    }

    fn bind_texture(&self, target: u32, texture: Option<u32>) {
        self.record("bindTexture", json!([target, texture]));
    }

    fn generate_mipmap(&self, target: u32) {
        self.record("generateMipmap", json!([target]));
    }

    fn get_tex_parameter(&self, target: u32, pname: u32) -> Parameter {
        self.record("getTexParameter", json!([target, pname]));
        Parameter::Null
    }

    fn tex_parameterf(&self, target: u32, pname: u32, param: f32) {
        self.record("texParameterf", json!([target, pname, param]));
    }

    fn tex_parameteri(&self, target: u32, pname: u32, param: i32) {
        self.record("texParameteri", json!([target, pname, param]));
    }

    fn tex_image_2d(
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
        self.record(
            "texImage2D",
            json!([
                target,
                level,
                internal_format,
                width,
                height,
                border,
                format,
                kind,
                pixels.map(<[u8]>::len)
            ]),
        );
    }

    fn tex_sub_image_2d(
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
        self.record(
            "texSubImage2D",
            json!([target, level, xoffset, yoffset, width, height, format, kind, pixels.len()]),
        );
    }

    fn compressed_tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        border: i32,
        data: &[u8],
    ) {
        self.record(
            "compressedTexImage2D",
            json!([target, level, internal_format, width, height, border, data.len()]),
        );
    }

    fn compressed_tex_sub_image_2d(
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
        self.record(
            "compressedTexSubImage2D",
            json!([target, level, xoffset, yoffset, width, height, format, data.len()]),
        );
    }

    fn copy_tex_image_2d(
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
        self.record(
            "copyTexImage2D",
            json!([target, level, internal_format, x, y, width, height, border]),
        );
    }

    fn copy_tex_sub_image_2d(
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
        self.record(
            "copyTexSubImage2D",
            json!([target, level, xoffset, yoffset, x, y, width, height]),
        );
    }

    // --- shaders and programs ---

    fn create_shader(&self, kind: u32) -> Option<u32> {
        self.record("createShader", json!([kind]));
        Some(self.allocate())
    }

    fn delete_shader(&self, shader: u32) {
        self.record("deleteShader", json!([shader]));
        self.release(shader);
    }

    fn is_shader(&self, shader: u32) -> bool {
        self.record("isShader", json!([shader]));
        self.is_live(shader)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record("shaderSource", json!([shader, source.len()]));
        self.sources.borrow_mut().insert(shader, source.to_string());
    }

    fn compile_shader(&self, shader: u32) {
        self.record("compileShader", json!([shader]));
    }

    fn get_shader_parameter(&self, shader: u32, pname: u32) -> Parameter {
        self.record("getShaderParameter", json!([shader, pname]));
        match pname {
            enums::COMPILE_STATUS => Parameter::Bool(true),
            enums::DELETE_STATUS => Parameter::Bool(!self.is_live(shader)),
            _ => Parameter::Null,
        }
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        self.record("getShaderInfoLog", json!([shader]));
        String::new()
    }

    fn get_shader_source(&self, shader: u32) -> Option<String> {
        self.record("getShaderSource", json!([shader]));
        self.sources.borrow().get(&shader).cloned()
    }

    fn get_shader_precision_format(
        &self,
        shader_type: u32,
        precision_type: u32,
    ) -> Option<ShaderPrecisionFormat> {
        self.record("getShaderPrecisionFormat", json!([shader_type, precision_type]));
        Some(ShaderPrecisionFormat {
            range_min: 127,
            range_max: 127,
            precision: 23,
        })
    }

    fn create_program(&self) -> Option<u32> {
        self.record("createProgram", json!([]));
        Some(self.allocate())
    }

    fn delete_program(&self, program: u32) {
        self.record("deleteProgram", json!([program]));
        self.release(program);
    }

    fn is_program(&self, program: u32) -> bool {
        self.record("isProgram", json!([program]));
        self.is_live(program)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record("attachShader", json!([program, shader]));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record("detachShader", json!([program, shader]));
    }

    fn get_attached_shaders(&self, program: u32) -> Vec<u32> {
        self.record("getAttachedShaders", json!([program]));
        Vec::new()
    }

    fn bind_attrib_location(&self, program: u32, index: u32, name: &str) {
        self.record("bindAttribLocation", json!([program, index, name]));
    }

    fn link_program(&self, program: u32) {
        self.record("linkProgram", json!([program]));
    }

    fn validate_program(&self, program: u32) {
        self.record("validateProgram", json!([program]));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record("useProgram", json!([program]));
    }

    fn get_program_parameter(&self, program: u32, pname: u32) -> Parameter {
        self.record("getProgramParameter", json!([program, pname]));
        match pname {
            enums::LINK_STATUS => Parameter::Bool(true),
            enums::DELETE_STATUS => Parameter::Bool(!self.is_live(program)),
            _ => Parameter::Null,
        }
    }

    fn get_program_info_log(&self, program: u32) -> String {
        self.record("getProgramInfoLog", json!([program]));
        String::new()
    }

    fn get_active_attrib(&self, program: u32, index: u32) -> Option<ActiveInfo> {
        self.record("getActiveAttrib", json!([program, index]));
        None
    }

    fn get_active_uniform(&self, program: u32, index: u32) -> Option<ActiveInfo> {
        self.record("getActiveUniform", json!([program, index]));
        None
    }

    fn get_attrib_location(&self, program: u32, name: &str) -> i32 {
        self.record("getAttribLocation", json!([program, name]));
        -1
    }

    fn get_uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        self.record("getUniformLocation", json!([program, name]));
        Some(self.allocate())
    }

    fn get_uniform(&self, program: u32, location: &u32) -> Parameter {
        self.record("getUniform", json!([program, location]));
        Parameter::Null
    }

    // --- uniforms ---

    fn uniform1f(&self, location: Option<&u32>, x: f32) {
        self.record("uniform1f", json!([location, x]));
    }

    fn uniform2f(&self, location: Option<&u32>, x: f32, y: f32) {
        self.record("uniform2f", json!([location, x, y]));
    }

    fn uniform3f(&self, location: Option<&u32>, x: f32, y: f32, z: f32) {
        self.record("uniform3f", json!([location, x, y, z]));
    }

    fn uniform4f(&self, location: Option<&u32>, x: f32, y: f32, z: f32, w: f32) {
        self.record("uniform4f", json!([location, x, y, z, w]));
    }

    fn uniform1i(&self, location: Option<&u32>, x: i32) {
        self.record("uniform1i", json!([location, x]));
    }

    fn uniform2i(&self, location: Option<&u32>, x: i32, y: i32) {
        self.record("uniform2i", json!([location, x, y]));
    }

    fn uniform3i(&self, location: Option<&u32>, x: i32, y: i32, z: i32) {
        self.record("uniform3i", json!([location, x, y, z]));
    }

    fn uniform4i(&self, location: Option<&u32>, x: i32, y: i32, z: i32, w: i32) {
        self.record("uniform4i", json!([location, x, y, z, w]));
    }

    fn uniform1fv(&self, location: Option<&u32>, value: &[f32]) {
        self.record("uniform1fv", json!([location, value]));
    }

    fn uniform2fv(&self, location: Option<&u32>, value: &[f32]) {
        self.record("uniform2fv", json!([location, value]));
    }

    fn uniform3fv(&self, location: Option<&u32>, value: &[f32]) {
        self.record("uniform3fv", json!([location, value]));
    }

    fn uniform4fv(&self, location: Option<&u32>, value: &[f32]) {
        self.record("uniform4fv", json!([location, value]));
    }

    fn uniform1iv(&self, location: Option<&u32>, value: &[i32]) {
        self.record("uniform1iv", json!([location, value]));
    }

    fn uniform2iv(&self, location: Option<&u32>, value: &[i32]) {
        self.record("uniform2iv", json!([location, value]));
    }

    fn uniform3iv(&self, location: Option<&u32>, value: &[i32]) {
        self.record("uniform3iv", json!([location, value]));
    }

    fn uniform4iv(&self, location: Option<&u32>, value: &[i32]) {
        self.record("uniform4iv", json!([location, value]));
    }

    fn uniform_matrix2fv(&self, location: Option<&u32>, transpose: bool, value: &[f32]) {
        self.record("uniformMatrix2fv", json!([location, transpose, value]));
    }

    fn uniform_matrix3fv(&self, location: Option<&u32>, transpose: bool, value: &[f32]) {
        self.record("uniformMatrix3fv", json!([location, transpose, value]));
    }

    fn uniform_matrix4fv(&self, location: Option<&u32>, transpose: bool, value: &[f32]) {
        self.record("uniformMatrix4fv", json!([location, transpose, value]));
    }

    // --- vertex attributes and drawing ---

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record("enableVertexAttribArray", json!([index]));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record("disableVertexAttribArray", json!([index]));
    }

    fn get_vertex_attrib(&self, index: u32, pname: u32) -> Parameter {
        self.record("getVertexAttrib", json!([index, pname]));
        Parameter::Null
    }

    fn get_vertex_attrib_offset(&self, index: u32, pname: u32) -> i64 {
        self.record("getVertexAttribOffset", json!([index, pname]));
        0
    }

    fn vertex_attrib1f(&self, index: u32, x: f32) {
        self.record("vertexAttrib1f", json!([index, x]));
    }

    fn vertex_attrib2f(&self, index: u32, x: f32, y: f32) {
        self.record("vertexAttrib2f", json!([index, x, y]));
    }

    fn vertex_attrib3f(&self, index: u32, x: f32, y: f32, z: f32) {
        self.record("vertexAttrib3f", json!([index, x, y, z]));
    }

    fn vertex_attrib4f(&self, index: u32, x: f32, y: f32, z: f32, w: f32) {
        self.record("vertexAttrib4f", json!([index, x, y, z, w]));
    }

    fn vertex_attrib1fv(&self, index: u32, value: &[f32]) {
        self.record("vertexAttrib1fv", json!([index, value]));
    }

    fn vertex_attrib2fv(&self, index: u32, value: &[f32]) {
        self.record("vertexAttrib2fv", json!([index, value]));
    }

    fn vertex_attrib3fv(&self, index: u32, value: &[f32]) {
        self.record("vertexAttrib3fv", json!([index, value]));
    }

    fn vertex_attrib4fv(&self, index: u32, value: &[f32]) {
        self.record("vertexAttrib4fv", json!([index, value]));
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        kind: u32,
        normalized: bool,
        stride: i32,
        offset: i64,
    ) {
        self.record(
            "vertexAttribPointer",
            json!([index, size, kind, normalized, stride, offset]),
        );
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record("drawArrays", json!([mode, first, count]));
    }

    fn draw_elements(&self, mode: u32, count: i32, kind: u32, offset: i64) {
        self.record("drawElements", json!([mode, count, kind, offset]));
    }
}
