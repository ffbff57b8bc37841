//! The underlying device: a WebGL 1 style rendering context.
//!
//! [`Device`] mirrors the device API one-to-one. Like `glow::HasContext`,
//! every method takes `&self` and handles are small `Copy` values owned by
//! the implementation. The façade in [`crate::state`] is the only caller in
//! this crate; implementations are [`crate::record::Recorder`] and, behind
//! the `glow` feature, `GlowDevice`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value returned by one of the generic `get_*` queries.
///
/// The device API answers parameter queries with values of different
/// shapes; this enum carries whichever shape the device produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Parameter {
    /// The query has no value (or the device does not know the name).
    Null,
    Bool(bool),
    Int(i32),
    Float(f32),
    Bools(Vec<bool>),
    Ints(Vec<i32>),
    Floats(Vec<f32>),
    String(String),
}

impl Parameter {
    /// Returns the value as an integer, converting booleans to 0/1.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Parameter::Int(v) => Some(*v),
            Parameter::Bool(b) => Some(i32::from(*b)),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Parameter::Float(v) => Some(*v),
            Parameter::Int(v) => Some(*v as f32),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Parameter::Bool(b) => Some(*b),
            Parameter::Int(v) => Some(*v != 0),
            _ => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i32]> {
        match self {
            Parameter::Ints(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Parameter::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Parameter::Null)
    }
}

/// Name, size and type of an active attribute or uniform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveInfo {
    pub name: String,
    pub size: i32,
    /// Uniform or attribute type, e.g. `FLOAT_VEC3`.
    pub kind: u32,
}

/// Range and precision of a shader numeric format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShaderPrecisionFormat {
    pub range_min: i32,
    pub range_max: i32,
    pub precision: i32,
}

/// Attributes requested when the context is created and reported back by
/// the device afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextAttributes {
    pub alpha: bool,
    pub depth: bool,
    pub stencil: bool,
    pub antialias: bool,
    pub premultiplied_alpha: bool,
    pub preserve_drawing_buffer: bool,
    pub fail_if_major_performance_caveat: bool,
}

impl Default for ContextAttributes {
    fn default() -> Self {
        Self {
            alpha: true,
            depth: true,
            stencil: false,
            antialias: true,
            premultiplied_alpha: true,
            preserve_drawing_buffer: false,
            fail_if_major_performance_caveat: false,
        }
    }
}

/// Source for `buffer_data`: either a size to allocate or bytes to copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BufferData<'a> {
    /// Allocate this many uninitialized bytes.
    Size(i64),
    /// Copy these bytes into the data store.
    Bytes(&'a [u8]),
}

/// A WebGL 1 style rendering context.
///
/// Handle types are opaque to the caller. `Program` must be comparable
/// because the active program binding is cached by handle.
pub trait Device {
    type Buffer: Copy + PartialEq + fmt::Debug;
    type Framebuffer: Copy + PartialEq + fmt::Debug;
    type Program: Copy + PartialEq + fmt::Debug;
    type Renderbuffer: Copy + PartialEq + fmt::Debug;
    type Shader: Copy + PartialEq + fmt::Debug;
    type Texture: Copy + PartialEq + fmt::Debug;
    type UniformLocation: Clone + fmt::Debug;
    /// A live handle to an acquired optional feature.
    type Extension: Clone + fmt::Debug;

    // --- context ---

    fn drawing_buffer_width(&self) -> i32;
    fn drawing_buffer_height(&self) -> i32;
    fn is_context_lost(&self) -> bool;
    fn get_context_attributes(&self) -> Option<ContextAttributes>;
    fn get_supported_extensions(&self) -> Vec<String>;
    fn get_extension(&self, name: &str) -> Option<Self::Extension>;
    fn get_error(&self) -> u32;
    fn get_parameter(&self, pname: u32) -> Parameter;
    fn finish(&self);
    fn flush(&self);
    fn hint(&self, target: u32, mode: u32);

    // --- fixed-function state ---

    fn active_texture(&self, texture: u32);
    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn blend_equation(&self, mode: u32);
    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32);
    fn blend_func(&self, sfactor: u32, dfactor: u32);
    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32);
    fn clear(&self, mask: u32);
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear_depth(&self, depth: f32);
    fn clear_stencil(&self, s: i32);
    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool);
    fn cull_face(&self, mode: u32);
    fn depth_func(&self, func: u32);
    fn depth_mask(&self, flag: bool);
    fn depth_range(&self, z_near: f32, z_far: f32);
    fn disable(&self, cap: u32);
    fn enable(&self, cap: u32);
    fn is_enabled(&self, cap: u32) -> bool;
    fn front_face(&self, mode: u32);
    fn line_width(&self, width: f32);
    fn pixel_storei(&self, pname: u32, param: i32);
    fn polygon_offset(&self, factor: f32, units: f32);
    fn sample_coverage(&self, value: f32, invert: bool);
    fn scissor(&self, x: i32, y: i32, width: i32, height: i32);
    fn stencil_func(&self, func: u32, reference: i32, mask: u32);
    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32);
    fn stencil_mask(&self, mask: u32);
    fn stencil_mask_separate(&self, face: u32, mask: u32);
    fn stencil_op(&self, fail: u32, zfail: u32, zpass: u32);
    fn stencil_op_separate(&self, face: u32, fail: u32, zfail: u32, zpass: u32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    // --- buffers ---

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn is_buffer(&self, buffer: Self::Buffer) -> bool;
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data(&self, target: u32, data: BufferData<'_>, usage: u32);
    fn buffer_sub_data(&self, target: u32, offset: i64, data: &[u8]);
    fn get_buffer_parameter(&self, target: u32, pname: u32) -> Parameter;

    // --- framebuffers and renderbuffers ---

    fn create_framebuffer(&self) -> Option<Self::Framebuffer>;
    fn delete_framebuffer(&self, framebuffer: Self::Framebuffer);
    fn is_framebuffer(&self, framebuffer: Self::Framebuffer) -> bool;
    fn bind_framebuffer(&self, target: u32, framebuffer: Option<Self::Framebuffer>);
    fn check_framebuffer_status(&self, target: u32) -> u32;
    fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: Option<Self::Renderbuffer>,
    );
    fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: Option<Self::Texture>,
        level: i32,
    );
    fn get_framebuffer_attachment_parameter(
        &self,
        target: u32,
        attachment: u32,
        pname: u32,
    ) -> Parameter;
    fn create_renderbuffer(&self) -> Option<Self::Renderbuffer>;
    fn delete_renderbuffer(&self, renderbuffer: Self::Renderbuffer);
    fn is_renderbuffer(&self, renderbuffer: Self::Renderbuffer) -> bool;
    fn bind_renderbuffer(&self, target: u32, renderbuffer: Option<Self::Renderbuffer>);
    fn renderbuffer_storage(&self, target: u32, internal_format: u32, width: i32, height: i32);
    fn get_renderbuffer_parameter(&self, target: u32, pname: u32) -> Parameter;
    fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        kind: u32,
        pixels: &mut [u8],
    );

    // --- textures ---

    fn create_texture(&self) -> Option<Self::Texture>;
    fn delete_texture(&self, texture: Self::Texture);
    fn is_texture(&self, texture: Self::Texture) -> bool;
    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>);
    fn generate_mipmap(&self, target: u32);
    fn get_tex_parameter(&self, target: u32, pname: u32) -> Parameter;
    fn tex_parameterf(&self, target: u32, pname: u32, param: f32);
    fn tex_parameteri(&self, target: u32, pname: u32, param: i32);
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
    fn compressed_tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        border: i32,
        data: &[u8],
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );

    // --- shaders and programs ---

    fn create_shader(&self, kind: u32) -> Option<Self::Shader>;
    fn delete_shader(&self, shader: Self::Shader);
    fn is_shader(&self, shader: Self::Shader) -> bool;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn get_shader_parameter(&self, shader: Self::Shader, pname: u32) -> Parameter;
    fn get_shader_info_log(&self, shader: Self::Shader) -> String;
    fn get_shader_source(&self, shader: Self::Shader) -> Option<String>;
    fn get_shader_precision_format(
        &self,
        shader_type: u32,
        precision_type: u32,
    ) -> Option<ShaderPrecisionFormat>;
    fn create_program(&self) -> Option<Self::Program>;
    fn delete_program(&self, program: Self::Program);
    fn is_program(&self, program: Self::Program) -> bool;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn get_attached_shaders(&self, program: Self::Program) -> Vec<Self::Shader>;
    fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str);
    fn link_program(&self, program: Self::Program);
    fn validate_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);
    fn get_program_parameter(&self, program: Self::Program, pname: u32) -> Parameter;
    fn get_program_info_log(&self, program: Self::Program) -> String;
    fn get_active_attrib(&self, program: Self::Program, index: u32) -> Option<ActiveInfo>;
    fn get_active_uniform(&self, program: Self::Program, index: u32) -> Option<ActiveInfo>;
    fn get_attrib_location(&self, program: Self::Program, name: &str) -> i32;
    fn get_uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn get_uniform(&self, program: Self::Program, location: &Self::UniformLocation) -> Parameter;

    // --- uniforms ---

    fn uniform1f(&self, location: Option<&Self::UniformLocation>, x: f32);
    fn uniform2f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32);
    fn uniform3f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32, z: f32);
    fn uniform4f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32, z: f32, w: f32);
    fn uniform1i(&self, location: Option<&Self::UniformLocation>, x: i32);
    fn uniform2i(&self, location: Option<&Self::UniformLocation>, x: i32, y: i32);
    fn uniform3i(&self, location: Option<&Self::UniformLocation>, x: i32, y: i32, z: i32);
    fn uniform4i(&self, location: Option<&Self::UniformLocation>, x: i32, y: i32, z: i32, w: i32);
    fn uniform1fv(&self, location: Option<&Self::UniformLocation>, value: &[f32]);
    fn uniform2fv(&self, location: Option<&Self::UniformLocation>, value: &[f32]);
    fn uniform3fv(&self, location: Option<&Self::UniformLocation>, value: &[f32]);
    fn uniform4fv(&self, location: Option<&Self::UniformLocation>, value: &[f32]);
    fn uniform1iv(&self, location: Option<&Self::UniformLocation>, value: &[i32]);
    fn uniform2iv(&self, location: Option<&Self::UniformLocation>, value: &[i32]);
    fn uniform3iv(&self, location: Option<&Self::UniformLocation>, value: &[i32]);
    fn uniform4iv(&self, location: Option<&Self::UniformLocation>, value: &[i32]);
    fn uniform_matrix2fv(
        &self,
        location: Option<&Self::UniformLocation>,
        transpose: bool,
        value: &[f32],
    );
    fn uniform_matrix3fv(
        &self,
        location: Option<&Self::UniformLocation>,
        transpose: bool,
        value: &[f32],
    );
    fn uniform_matrix4fv(
        &self,
        location: Option<&Self::UniformLocation>,
        transpose: bool,
        value: &[f32],
    );

    // --- vertex attributes and drawing ---

    fn enable_vertex_attrib_array(&self, index: u32);
    fn disable_vertex_attrib_array(&self, index: u32);
    fn get_vertex_attrib(&self, index: u32, pname: u32) -> Parameter;
    fn get_vertex_attrib_offset(&self, index: u32, pname: u32) -> i64;
    fn vertex_attrib1f(&self, index: u32, x: f32);
    fn vertex_attrib2f(&self, index: u32, x: f32, y: f32);
    fn vertex_attrib3f(&self, index: u32, x: f32, y: f32, z: f32);
    fn vertex_attrib4f(&self, index: u32, x: f32, y: f32, z: f32, w: f32);
    fn vertex_attrib1fv(&self, index: u32, value: &[f32]);
    fn vertex_attrib2fv(&self, index: u32, value: &[f32]);
    fn vertex_attrib3fv(&self, index: u32, value: &[f32]);
    fn vertex_attrib4fv(&self, index: u32, value: &[f32]);
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        kind: u32,
        normalized: bool,
        stride: i32,
        offset: i64,
    );
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    fn draw_elements(&self, mode: u32, count: i32, kind: u32, offset: i64);
}
