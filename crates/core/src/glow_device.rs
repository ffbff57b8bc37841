//! [`Device`] over any `glow` context.
//!
//! `glow` exposes raw GL, which has no context-lost flag, no context
//! attributes and a smaller query surface than the WebGL API. Where glow
//! has no equivalent, queries answer [`Parameter::Null`] (or `None`) and
//! the host is expected to deliver loss events itself through
//! [`GlState::handle_context_event`](crate::state::GlState::handle_context_event).

use std::fmt::Display;

use glow::HasContext;
use log::warn;

use crate::device::{ActiveInfo, BufferData, ContextAttributes, Device, Parameter, ShaderPrecisionFormat};
use crate::enums;

/// Wraps a `glow` context as a [`Device`].
///
/// Optional features are reported present when their name is in glow's
/// supported-extension set; the handle carries no data.
pub struct GlowDevice<G: HasContext> {
    gl: G,
    size: (i32, i32),
}

impl<G: HasContext> GlowDevice<G> {
    /// Wraps `gl`, reporting a drawing buffer of `width` x `height`.
    pub fn new(gl: G, width: i32, height: i32) -> Self {
        Self {
            gl,
            size: (width, height),
        }
    }

    /// Updates the reported drawing-buffer size after the host resizes.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.size = (width, height);
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    pub fn into_gl(self) -> G {
        self.gl
    }
}

/// Pnames answered as strings, float scalars, float pairs/quads or int
/// pairs/quads. Everything else is read as a single integer.
fn parameter_shape(pname: u32) -> Shape {
    match pname {
        enums::VENDOR | enums::RENDERER | enums::VERSION | enums::SHADING_LANGUAGE_VERSION => Shape::String,
        enums::LINE_WIDTH
        | enums::DEPTH_CLEAR_VALUE
        | enums::POLYGON_OFFSET_FACTOR
        | enums::POLYGON_OFFSET_UNITS
        | enums::SAMPLE_COVERAGE_VALUE
        | enums::MAX_TEXTURE_MAX_ANISOTROPY_EXT => Shape::Float,
        enums::ALIASED_LINE_WIDTH_RANGE | enums::ALIASED_POINT_SIZE_RANGE | enums::DEPTH_RANGE => {
            Shape::Floats(2)
        }
        enums::COLOR_CLEAR_VALUE | enums::BLEND_COLOR => Shape::Floats(4),
        enums::MAX_VIEWPORT_DIMS => Shape::Ints(2),
        enums::VIEWPORT | enums::SCISSOR_BOX => Shape::Ints(4),
        _ => Shape::Int,
    }
}

/// Narrows a byte size or offset to GL's 32-bit range. Values that do not
/// fit are logged and the call is skipped rather than sent wrapped.
fn narrow<T>(op: &str, param: &str, value: T) -> Option<i32>
where
    T: TryInto<i32> + Copy + Display,
{
    match value.try_into() {
        Ok(narrowed) => Some(narrowed),
        Err(_) => {
            warn!("{op}: {param} {value} exceeds the 32-bit GL range, skipping call");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    String,
    Int,
    Float,
    Ints(usize),
    Floats(usize),
}

// SAFETY: glow wraps raw GL calls as unsafe. Every method forwards its
// arguments unchanged to the context that created the handles it is given;
// GL reports bad arguments through get_error rather than faulting.
#[allow(unsafe_code)]
impl<G: HasContext> Device for GlowDevice<G> {
    type Buffer = G::Buffer;
    type Framebuffer = G::Framebuffer;
    type Program = G::Program;
    type Renderbuffer = G::Renderbuffer;
    type Shader = G::Shader;
    type Texture = G::Texture;
    type UniformLocation = G::UniformLocation;
    type Extension = ();

    // --- context ---

    fn drawing_buffer_width(&self) -> i32 {
        self.size.0
    }

    fn drawing_buffer_height(&self) -> i32 {
        self.size.1
    }

    fn is_context_lost(&self) -> bool {
        false
    }

    fn get_context_attributes(&self) -> Option<ContextAttributes> {
        None
    }

    fn get_supported_extensions(&self) -> Vec<String> {
        let mut names: Vec<String> = self.gl.supported_extensions().iter().cloned().collect();
        names.sort();
        names
    }

    fn get_extension(&self, name: &str) -> Option<()> {
        self.gl.supported_extensions().contains(name).then_some(())
    }

    fn get_error(&self) -> u32 {
        unsafe { self.gl.get_error() }
    }

    fn get_parameter(&self, pname: u32) -> Parameter {
        match parameter_shape(pname) {
            Shape::String => Parameter::String(unsafe { self.gl.get_parameter_string(pname) }),
            Shape::Int => Parameter::Int(unsafe { self.gl.get_parameter_i32(pname) }),
            Shape::Float => Parameter::Float(unsafe { self.gl.get_parameter_f32(pname) }),
            Shape::Ints(n) => {
                let mut out = vec![0; n];
                unsafe { self.gl.get_parameter_i32_slice(pname, &mut out) };
                Parameter::Ints(out)
            }
            Shape::Floats(n) => {
                let mut out = vec![0.0; n];
                unsafe { self.gl.get_parameter_f32_slice(pname, &mut out) };
                Parameter::Floats(out)
            }
        }
    }

    fn finish(&self) {
        unsafe { self.gl.finish() }
    }

    fn flush(&self) {
        unsafe { self.gl.flush() }
    }

    fn hint(&self, target: u32, mode: u32) {
        unsafe { self.gl.hint(target, mode) }
    }

    // --- fixed-function state ---

    fn active_texture(&self, texture: u32) {
        unsafe { self.gl.active_texture(texture) }
    }

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { self.gl.blend_color(red, green, blue, alpha) }
    }

    fn blend_equation(&self, mode: u32) {
        unsafe { self.gl.blend_equation(mode) }
    }

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32) {
        unsafe { self.gl.blend_equation_separate(mode_rgb, mode_alpha) }
    }

    fn blend_func(&self, sfactor: u32, dfactor: u32) {
        unsafe { self.gl.blend_func(sfactor, dfactor) }
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        unsafe { self.gl.blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha) }
    }

    fn clear(&self, mask: u32) {
        unsafe { self.gl.clear(mask) }
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { self.gl.clear_color(red, green, blue, alpha) }
    }

    fn clear_depth(&self, depth: f32) {
        unsafe { self.gl.clear_depth_f32(depth) }
    }

    fn clear_stencil(&self, s: i32) {
        unsafe { self.gl.clear_stencil(s) }
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        unsafe { self.gl.color_mask(red, green, blue, alpha) }
    }

    fn cull_face(&self, mode: u32) {
        unsafe { self.gl.cull_face(mode) }
    }

    fn depth_func(&self, func: u32) {
        unsafe { self.gl.depth_func(func) }
    }

    fn depth_mask(&self, flag: bool) {
        unsafe { self.gl.depth_mask(flag) }
    }

    fn depth_range(&self, z_near: f32, z_far: f32) {
        unsafe { self.gl.depth_range_f32(z_near, z_far) }
    }

    fn disable(&self, cap: u32) {
        unsafe { self.gl.disable(cap) }
    }

    fn enable(&self, cap: u32) {
        unsafe { self.gl.enable(cap) }
    }

    fn is_enabled(&self, cap: u32) -> bool {
        unsafe { self.gl.is_enabled(cap) }
    }

    fn front_face(&self, mode: u32) {
        unsafe { self.gl.front_face(mode) }
    }

    fn line_width(&self, width: f32) {
        unsafe { self.gl.line_width(width) }
    }

    fn pixel_storei(&self, pname: u32, param: i32) {
        unsafe { self.gl.pixel_store_i32(pname, param) }
    }

    fn polygon_offset(&self, factor: f32, units: f32) {
        unsafe { self.gl.polygon_offset(factor, units) }
    }

    fn sample_coverage(&self, value: f32, invert: bool) {
        unsafe { self.gl.sample_coverage(value, invert) }
    }

    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.scissor(x, y, width, height) }
    }

    fn stencil_func(&self, func: u32, reference: i32, mask: u32) {
        unsafe { self.gl.stencil_func(func, reference, mask) }
    }

    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32) {
        unsafe { self.gl.stencil_func_separate(face, func, reference, mask) }
    }

    fn stencil_mask(&self, mask: u32) {
        unsafe { self.gl.stencil_mask(mask) }
    }

    fn stencil_mask_separate(&self, face: u32, mask: u32) {
        unsafe { self.gl.stencil_mask_separate(face, mask) }
    }

    fn stencil_op(&self, fail: u32, zfail: u32, zpass: u32) {
        unsafe { self.gl.stencil_op(fail, zfail, zpass) }
    }

    fn stencil_op_separate(&self, face: u32, fail: u32, zfail: u32, zpass: u32) {
        unsafe { self.gl.stencil_op_separate(face, fail, zfail, zpass) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) }
    }

    // --- buffers ---

    fn create_buffer(&self) -> Option<Self::Buffer> {
        unsafe { self.gl.create_buffer() }.ok()
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn is_buffer(&self, buffer: Self::Buffer) -> bool {
        unsafe { self.gl.is_buffer(buffer) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(target, buffer) }
    }

    fn buffer_data(&self, target: u32, data: BufferData<'_>, usage: u32) {
        match data {
            BufferData::Size(size) => {
                let Some(size) = narrow("bufferData", "size", size) else {
                    return;
                };
                unsafe { self.gl.buffer_data_size(target, size, usage) }
            }
            BufferData::Bytes(bytes) => unsafe { self.gl.buffer_data_u8_slice(target, bytes, usage) },
        }
    }

    fn buffer_sub_data(&self, target: u32, offset: i64, data: &[u8]) {
        let Some(offset) = narrow("bufferSubData", "offset", offset) else {
            return;
        };
        unsafe { self.gl.buffer_sub_data_u8_slice(target, offset, data) }
    }

    fn get_buffer_parameter(&self, target: u32, pname: u32) -> Parameter {
        Parameter::Int(unsafe { self.gl.get_buffer_parameter_i32(target, pname) })
    }

    // --- framebuffers and renderbuffers ---

    fn create_framebuffer(&self) -> Option<Self::Framebuffer> {
        unsafe { self.gl.create_framebuffer() }.ok()
    }

    fn delete_framebuffer(&self, framebuffer: Self::Framebuffer) {
        unsafe { self.gl.delete_framebuffer(framebuffer) }
    }

    fn is_framebuffer(&self, framebuffer: Self::Framebuffer) -> bool {
        unsafe { self.gl.is_framebuffer(framebuffer) }
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: Option<Self::Framebuffer>) {
        unsafe { self.gl.bind_framebuffer(target, framebuffer) }
    }

    fn check_framebuffer_status(&self, target: u32) -> u32 {
        unsafe { self.gl.check_framebuffer_status(target) }
    }

    fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: Option<Self::Renderbuffer>,
    ) {
        unsafe {
            self.gl
                .framebuffer_renderbuffer(target, attachment, renderbuffer_target, renderbuffer)
        }
    }

    fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<Self::Texture>,
        level: i32,
    ) {
        unsafe {
            self.gl
                .framebuffer_texture_2d(target, attachment, texture_target, texture, level)
        }
    }

    fn get_framebuffer_attachment_parameter(&self, _target: u32, _attachment: u32, _pname: u32) -> Parameter {
        Parameter::Null
    }

    fn create_renderbuffer(&self) -> Option<Self::Renderbuffer> {
        unsafe { self.gl.create_renderbuffer() }.ok()
    }

    fn delete_renderbuffer(&self, renderbuffer: Self::Renderbuffer) {
        unsafe { self.gl.delete_renderbuffer(renderbuffer) }
    }

    fn is_renderbuffer(&self, renderbuffer: Self::Renderbuffer) -> bool {
        unsafe { self.gl.is_renderbuffer(renderbuffer) }
    }

    fn bind_renderbuffer(&self, target: u32, renderbuffer: Option<Self::Renderbuffer>) {
        unsafe { self.gl.bind_renderbuffer(target, renderbuffer) }
    }

    fn renderbuffer_storage(&self, target: u32, internal_format: u32, width: i32, height: i32) {
        unsafe { self.gl.renderbuffer_storage(target, internal_format, width, height) }
    }

    fn get_renderbuffer_parameter(&self, _target: u32, _pname: u32) -> Parameter {
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
        unsafe {
            self.gl.read_pixels(
                x,
                y,
                width,
                height,
                format,
                kind,
                glow::PixelPackData::Slice(Some(pixels)),
            )
        }
    }

    // --- textures ---

    fn create_texture(&self) -> Option<Self::Texture> {
        unsafe { self.gl.create_texture() }.ok()
    }

    fn delete_texture(&self, texture: Self::Texture) {
        unsafe { self.gl.delete_texture(texture) }
    }

    fn is_texture(&self, texture: Self::Texture) -> bool {
        unsafe { self.gl.is_texture(texture) }
    }

    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>) {
        unsafe { self.gl.bind_texture(target, texture) }
    }

    fn generate_mipmap(&self, target: u32) {
        unsafe { self.gl.generate_mipmap(target) }
    }

    fn get_tex_parameter(&self, target: u32, pname: u32) -> Parameter {
        Parameter::Int(unsafe { self.gl.get_tex_parameter_i32(target, pname) })
    }

    fn tex_parameterf(&self, target: u32, pname: u32, param: f32) {
        unsafe { self.gl.tex_parameter_f32(target, pname, param) }
    }

    fn tex_parameteri(&self, target: u32, pname: u32, param: i32) {
        unsafe { self.gl.tex_parameter_i32(target, pname, param) }
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
        unsafe {
            self.gl.tex_image_2d(
                target,
                level,
                internal_format,
                width,
                height,
                border,
                format,
                kind,
                glow::PixelUnpackData::Slice(pixels),
            )
        }
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
        unsafe {
            self.gl.tex_sub_image_2d(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                kind,
                glow::PixelUnpackData::Slice(Some(pixels)),
            )
        }
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
        let Some(image_size) = narrow("compressedTexImage2D", "data length", data.len()) else {
            return;
        };
        unsafe {
            self.gl.compressed_tex_image_2d(
                target,
                level,
                internal_format as i32,
                width,
                height,
                border,
                image_size,
                data,
            )
        }
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
        unsafe {
            self.gl.compressed_tex_sub_image_2d(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                glow::CompressedPixelUnpackData::Slice(data),
            )
        }
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
        unsafe {
            self.gl
                .copy_tex_image_2d(target, level, internal_format, x, y, width, height, border)
        }
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
        unsafe {
            self.gl
                .copy_tex_sub_image_2d(target, level, xoffset, yoffset, x, y, width, height)
        }
    }

    // --- shaders and programs ---

    fn create_shader(&self, kind: u32) -> Option<Self::Shader> {
        unsafe { self.gl.create_shader(kind) }.ok()
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn is_shader(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.is_shader(shader) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn get_shader_parameter(&self, shader: Self::Shader, pname: u32) -> Parameter {
        match pname {
            enums::COMPILE_STATUS => Parameter::Bool(unsafe { self.gl.get_shader_compile_status(shader) }),
            _ => Parameter::Null,
        }
    }

    fn get_shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn get_shader_source(&self, _shader: Self::Shader) -> Option<String> {
        None
    }

    fn get_shader_precision_format(
        &self,
        shader_type: u32,
        precision_type: u32,
    ) -> Option<ShaderPrecisionFormat> {
        unsafe { self.gl.get_shader_precision_format(shader_type, precision_type) }.map(|f| {
            ShaderPrecisionFormat {
                range_min: f.range_min,
                range_max: f.range_max,
                precision: f.precision,
            }
        })
    }

    fn create_program(&self) -> Option<Self::Program> {
        unsafe { self.gl.create_program() }.ok()
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn is_program(&self, program: Self::Program) -> bool {
        unsafe { self.gl.is_program(program) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.detach_shader(program, shader) }
    }

    /// glow cannot list the shaders attached to a program; the answer is
    /// always empty.
    fn get_attached_shaders(&self, _program: Self::Program) -> Vec<Self::Shader> {
        Vec::new()
    }

    fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str) {
        unsafe { self.gl.bind_attrib_location(program, index, name) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.gl.link_program(program) }
    }

    /// glow has no validate entry point; the call is dropped.
    fn validate_program(&self, _program: Self::Program) {}

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn get_program_parameter(&self, program: Self::Program, pname: u32) -> Parameter {
        match pname {
            enums::LINK_STATUS => Parameter::Bool(unsafe { self.gl.get_program_link_status(program) }),
            enums::ACTIVE_ATTRIBUTES => {
                Parameter::Int(unsafe { self.gl.get_active_attributes(program) } as i32)
            }
            enums::ACTIVE_UNIFORMS => Parameter::Int(unsafe { self.gl.get_active_uniforms(program) } as i32),
            _ => Parameter::Null,
        }
    }

    fn get_program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn get_active_attrib(&self, program: Self::Program, index: u32) -> Option<ActiveInfo> {
        unsafe { self.gl.get_active_attribute(program, index) }.map(|a| ActiveInfo {
            name: a.name,
            size: a.size,
            kind: a.atype,
        })
    }

    fn get_active_uniform(&self, program: Self::Program, index: u32) -> Option<ActiveInfo> {
        unsafe { self.gl.get_active_uniform(program, index) }.map(|u| ActiveInfo {
            name: u.name,
            size: u.size,
            kind: u.utype,
        })
    }

    fn get_attrib_location(&self, program: Self::Program, name: &str) -> i32 {
        unsafe { self.gl.get_attrib_location(program, name) }.map_or(-1, |loc| loc as i32)
    }

    fn get_uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn get_uniform(&self, _program: Self::Program, _location: &Self::UniformLocation) -> Parameter {
        Parameter::Null
    }

    // --- uniforms ---

    fn uniform1f(&self, location: Option<&Self::UniformLocation>, x: f32) {
        unsafe { self.gl.uniform_1_f32(location, x) }
    }

    fn uniform2f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32) {
        unsafe { self.gl.uniform_2_f32(location, x, y) }
    }

    fn uniform3f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32, z: f32) {
        unsafe { self.gl.uniform_3_f32(location, x, y, z) }
    }

    fn uniform4f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32, z: f32, w: f32) {
        unsafe { self.gl.uniform_4_f32(location, x, y, z, w) }
    }

    fn uniform1i(&self, location: Option<&Self::UniformLocation>, x: i32) {
        unsafe { self.gl.uniform_1_i32(location, x) }
    }

    fn uniform2i(&self, location: Option<&Self::UniformLocation>, x: i32, y: i32) {
        unsafe { self.gl.uniform_2_i32(location, x, y) }
    }

    fn uniform3i(&self, location: Option<&Self::UniformLocation>, x: i32, y: i32, z: i32) {
        unsafe { self.gl.uniform_3_i32(location, x, y, z) }
    }

    fn uniform4i(&self, location: Option<&Self::UniformLocation>, x: i32, y: i32, z: i32, w: i32) {
        unsafe { self.gl.uniform_4_i32(location, x, y, z, w) }
    }

    fn uniform1fv(&self, location: Option<&Self::UniformLocation>, value: &[f32]) {
        unsafe { self.gl.uniform_1_f32_slice(location, value) }
    }

    fn uniform2fv(&self, location: Option<&Self::UniformLocation>, value: &[f32]) {
        unsafe { self.gl.uniform_2_f32_slice(location, value) }
    }

    fn uniform3fv(&self, location: Option<&Self::UniformLocation>, value: &[f32]) {
        unsafe { self.gl.uniform_3_f32_slice(location, value) }
    }

    fn uniform4fv(&self, location: Option<&Self::UniformLocation>, value: &[f32]) {
        unsafe { self.gl.uniform_4_f32_slice(location, value) }
    }

    fn uniform1iv(&self, location: Option<&Self::UniformLocation>, value: &[i32]) {
        unsafe { self.gl.uniform_1_i32_slice(location, value) }
    }

    fn uniform2iv(&self, location: Option<&Self::UniformLocation>, value: &[i32]) {
        unsafe { self.gl.uniform_2_i32_slice(location, value) }
    }

    fn uniform3iv(&self, location: Option<&Self::UniformLocation>, value: &[i32]) {
        unsafe { self.gl.uniform_3_i32_slice(location, value) }
    }

    fn uniform4iv(&self, location: Option<&Self::UniformLocation>, value: &[i32]) {
        unsafe { self.gl.uniform_4_i32_slice(location, value) }
    }

    fn uniform_matrix2fv(&self, location: Option<&Self::UniformLocation>, transpose: bool, value: &[f32]) {
        unsafe { self.gl.uniform_matrix_2_f32_slice(location, transpose, value) }
    }

    fn uniform_matrix3fv(&self, location: Option<&Self::UniformLocation>, transpose: bool, value: &[f32]) {
        unsafe { self.gl.uniform_matrix_3_f32_slice(location, transpose, value) }
    }

    fn uniform_matrix4fv(&self, location: Option<&Self::UniformLocation>, transpose: bool, value: &[f32]) {
        unsafe { self.gl.uniform_matrix_4_f32_slice(location, transpose, value) }
    }

    // --- vertex attributes and drawing ---

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.disable_vertex_attrib_array(index) }
    }

    fn get_vertex_attrib(&self, _index: u32, _pname: u32) -> Parameter {
        Parameter::Null
    }

    fn get_vertex_attrib_offset(&self, _index: u32, _pname: u32) -> i64 {
        0
    }

    fn vertex_attrib1f(&self, index: u32, x: f32) {
        unsafe { self.gl.vertex_attrib_1_f32(index, x) }
    }

    fn vertex_attrib2f(&self, index: u32, x: f32, y: f32) {
        unsafe { self.gl.vertex_attrib_2_f32(index, x, y) }
    }

    fn vertex_attrib3f(&self, index: u32, x: f32, y: f32, z: f32) {
        unsafe { self.gl.vertex_attrib_3_f32(index, x, y, z) }
    }

    fn vertex_attrib4f(&self, index: u32, x: f32, y: f32, z: f32, w: f32) {
        unsafe { self.gl.vertex_attrib_4_f32(index, x, y, z, w) }
    }

    fn vertex_attrib1fv(&self, index: u32, value: &[f32]) {
        unsafe { self.gl.vertex_attrib_1_f32_slice(index, value) }
    }

    fn vertex_attrib2fv(&self, index: u32, value: &[f32]) {
        unsafe { self.gl.vertex_attrib_2_f32_slice(index, value) }
    }

    fn vertex_attrib3fv(&self, index: u32, value: &[f32]) {
        unsafe { self.gl.vertex_attrib_3_f32_slice(index, value) }
    }

    fn vertex_attrib4fv(&self, index: u32, value: &[f32]) {
        unsafe { self.gl.vertex_attrib_4_f32_slice(index, value) }
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
        let Some(offset) = narrow("vertexAttribPointer", "offset", offset) else {
            return;
        };
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(index, size, kind, normalized, stride, offset)
        }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(mode, first, count) }
    }

    fn draw_elements(&self, mode: u32, count: i32, kind: u32, offset: i64) {
        let Some(offset) = narrow("drawElements", "offset", offset) else {
            return;
        };
        unsafe { self.gl.draw_elements(mode, count, kind, offset) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_parameters_are_read_as_strings() {
        assert_eq!(parameter_shape(enums::VERSION), Shape::String);
        assert_eq!(parameter_shape(enums::RENDERER), Shape::String);
    }

    #[test]
    fn range_parameters_are_read_as_slices() {
        assert_eq!(parameter_shape(enums::MAX_VIEWPORT_DIMS), Shape::Ints(2));
        assert_eq!(parameter_shape(enums::SCISSOR_BOX), Shape::Ints(4));
        assert_eq!(parameter_shape(enums::DEPTH_RANGE), Shape::Floats(2));
        assert_eq!(parameter_shape(enums::COLOR_CLEAR_VALUE), Shape::Floats(4));
    }

    #[test]
    fn limits_default_to_integer_reads() {
        assert_eq!(parameter_shape(enums::MAX_VERTEX_ATTRIBS), Shape::Int);
        assert_eq!(parameter_shape(enums::MAX_TEXTURE_MAX_ANISOTROPY_EXT), Shape::Float);
    }

    #[test]
    fn glow_device_api_compiles_with_expected_types() {
        fn _assert_api(device: &GlowDevice<glow::Context>) {
            let _gl: &glow::Context = device.gl();
            let _w: i32 = device.drawing_buffer_width();
            let _ext: Option<()> = device.get_extension("OES_texture_float");
        }
    }

    #[test]
    fn program_queries_compile_with_expected_types() {
        type Program = <glow::Context as HasContext>::Program;
        type Shader = <glow::Context as HasContext>::Shader;

        fn _assert_api(device: &GlowDevice<glow::Context>, program: Program, shader: Shader) {
            let _shaders: Vec<Shader> = device.get_attached_shaders(program);
            let _source: Option<String> = device.get_shader_source(shader);
            let _status: Parameter = device.get_program_parameter(program, enums::LINK_STATUS);
        }
    }

    // --- narrowing ---

    #[test]
    fn narrow_passes_values_in_range() {
        assert_eq!(narrow("bufferData", "size", 1024_i64), Some(1024));
        assert_eq!(narrow("drawElements", "offset", i64::from(i32::MAX)), Some(i32::MAX));
        assert_eq!(narrow("compressedTexImage2D", "data length", 16_usize), Some(16));
    }

    #[test]
    fn narrow_rejects_values_that_would_wrap() {
        assert_eq!(narrow("bufferData", "size", i64::from(i32::MAX) + 1), None);
        assert_eq!(narrow("bufferSubData", "offset", 1_i64 << 40), None);
        assert_eq!(narrow("compressedTexImage2D", "data length", usize::MAX), None);
    }

    // GlowDevice requires a live GL context, so integration tests are ignored.

    #[test]
    #[ignore = "requires GL context"]
    fn facade_elides_redundant_state_on_real_context() {
        // Would test: GlState over Detached<GlowDevice<_>> forwards
        // enable(BLEND) once for two identical calls.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn capabilities_probe_reads_real_limits() {
        // Would test: Capabilities::probe reports non-zero MAX_TEXTURE_SIZE.
    }
}
