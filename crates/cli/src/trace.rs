//! JSON call traces and their replay through the façade.
//!
//! A trace is a JSON array of calls tagged by device operation name:
//!
//! ```json
//! [
//!   {"op": "enable", "cap": "CULL_FACE"},
//!   {"op": "blendFunc", "sfactor": "SRC_ALPHA", "dfactor": "ONE_MINUS_SRC_ALPHA"},
//!   {"op": "loseContext"},
//!   {"op": "restoreContext"}
//! ]
//! ```
//!
//! Enum arguments take catalog names or raw codes. Replay runs the calls
//! against a [`Recorder`] and reports what reached it.

use std::path::Path;

use gl_state_core::{
    enums, Call, CallStats, ContextAttributes, ContextEventKind, Detached, GlState, HostEvent,
    Recorder, StateConfig,
};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// An enum argument: a catalog name such as `"CULL_FACE"` or a raw code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumArg {
    Code(u32),
    Name(String),
}

impl EnumArg {
    pub fn resolve(&self) -> Result<u32, CliError> {
        match self {
            EnumArg::Code(code) => Ok(*code),
            EnumArg::Name(name) => {
                enums::lookup(name).ok_or_else(|| CliError::Trace(format!("unknown enum name {name}")))
            }
        }
    }
}

/// A clear mask: one bit, or a list of bits OR-ed together.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MaskArg {
    One(EnumArg),
    Many(Vec<EnumArg>),
}

impl MaskArg {
    pub fn resolve(&self) -> Result<u32, CliError> {
        match self {
            MaskArg::One(bit) => bit.resolve(),
            MaskArg::Many(bits) => bits
                .iter()
                .try_fold(0, |mask, bit| bit.resolve().map(|b| mask | b)),
        }
    }
}

/// One traced call. Field names follow the device API argument names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TraceOp {
    ActiveTexture { texture: EnumArg },
    BlendColor { red: f32, green: f32, blue: f32, alpha: f32 },
    BlendEquation { mode: EnumArg },
    BlendEquationSeparate { mode_rgb: EnumArg, mode_alpha: EnumArg },
    BlendFunc { sfactor: EnumArg, dfactor: EnumArg },
    BlendFuncSeparate {
        src_rgb: EnumArg,
        dst_rgb: EnumArg,
        src_alpha: EnumArg,
        dst_alpha: EnumArg,
    },
    Clear { mask: MaskArg },
    ClearColor { red: f32, green: f32, blue: f32, alpha: f32 },
    ClearDepth { depth: f32 },
    ClearStencil { s: i32 },
    ColorMask { red: bool, green: bool, blue: bool, alpha: bool },
    CullFace { mode: EnumArg },
    DepthFunc { func: EnumArg },
    DepthMask { flag: bool },
    DepthRange { z_near: f32, z_far: f32 },
    Disable { cap: EnumArg },
    Enable { cap: EnumArg },
    DisableVertexAttribArray { index: u32 },
    EnableVertexAttribArray { index: u32 },
    FrontFace { mode: EnumArg },
    LineWidth { width: f32 },
    PixelStorei { pname: EnumArg, param: EnumArg },
    PolygonOffset { factor: f32, units: f32 },
    SampleCoverage { value: f32, invert: bool },
    Scissor { x: i32, y: i32, width: i32, height: i32 },
    StencilFunc {
        func: EnumArg,
        #[serde(rename = "ref")]
        reference: i32,
        mask: u32,
    },
    StencilFuncSeparate {
        face: EnumArg,
        func: EnumArg,
        #[serde(rename = "ref")]
        reference: i32,
        mask: u32,
    },
    StencilMask { mask: u32 },
    StencilMaskSeparate { face: EnumArg, mask: u32 },
    StencilOp { fail: EnumArg, zfail: EnumArg, zpass: EnumArg },
    StencilOpSeparate { face: EnumArg, fail: EnumArg, zfail: EnumArg, zpass: EnumArg },
    /// Binds a program handle; omit `program` to unbind.
    UseProgram { program: Option<u32> },
    Viewport { x: i32, y: i32, width: i32, height: i32 },
    DrawArrays { mode: EnumArg, first: i32, count: i32 },
    Flush,
    /// Simulates a device-lost notification.
    LoseContext,
    /// Simulates a device-restored notification.
    RestoreContext,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Trace entries replayed.
    pub ops: usize,
    #[serde(flatten)]
    pub stats: CallStats,
    /// Calls that reached the device, in order.
    pub calls: Vec<Call>,
}

pub fn parse(text: &str) -> Result<Vec<TraceOp>, CliError> {
    serde_json::from_str(text).map_err(|e| CliError::Input(format!("invalid trace: {e}")))
}

pub fn load(path: &Path) -> Result<Vec<TraceOp>, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    parse(&text)
}

/// Replays `ops` through a fresh façade over a [`Recorder`].
pub fn replay(ops: &[TraceOp], config: StateConfig) -> Result<Report, CliError> {
    let surface = Detached::new(Recorder::new());
    let mut gl = GlState::try_new(surface, &ContextAttributes::default(), config)?;
    // Capability probing already talked to the device.
    let baseline = gl.device().map_or(0, Recorder::total);

    for (i, op) in ops.iter().enumerate() {
        apply(&mut gl, op).map_err(|e| CliError::Trace(format!("trace entry {i}: {e}")))?;
    }

    let calls = gl
        .device()
        .map(|device| device.calls().into_iter().skip(baseline).collect())
        .unwrap_or_default();
    Ok(Report {
        ops: ops.len(),
        stats: gl.stats(),
        calls,
    })
}

fn apply(gl: &mut GlState<Detached<Recorder>>, op: &TraceOp) -> Result<(), CliError> {
    match op {
        TraceOp::ActiveTexture { texture } => gl.active_texture(texture.resolve()?),
        TraceOp::BlendColor {
            red,
            green,
            blue,
            alpha,
        } => gl.blend_color(*red, *green, *blue, *alpha),
        TraceOp::BlendEquation { mode } => gl.blend_equation(mode.resolve()?),
        TraceOp::BlendEquationSeparate {
            mode_rgb,
            mode_alpha,
        } => gl.blend_equation_separate(mode_rgb.resolve()?, mode_alpha.resolve()?),
        TraceOp::BlendFunc { sfactor, dfactor } => gl.blend_func(sfactor.resolve()?, dfactor.resolve()?),
        TraceOp::BlendFuncSeparate {
            src_rgb,
            dst_rgb,
            src_alpha,
            dst_alpha,
        } => gl.blend_func_separate(
            src_rgb.resolve()?,
            dst_rgb.resolve()?,
            src_alpha.resolve()?,
            dst_alpha.resolve()?,
        ),
        TraceOp::Clear { mask } => gl.clear(mask.resolve()?),
        TraceOp::ClearColor {
            red,
            green,
            blue,
            alpha,
        } => gl.clear_color(*red, *green, *blue, *alpha),
        TraceOp::ClearDepth { depth } => gl.clear_depth(*depth),
        TraceOp::ClearStencil { s } => gl.clear_stencil(*s),
        TraceOp::ColorMask {
            red,
            green,
            blue,
            alpha,
        } => gl.color_mask(*red, *green, *blue, *alpha),
        TraceOp::CullFace { mode } => gl.cull_face(mode.resolve()?),
        TraceOp::DepthFunc { func } => gl.depth_func(func.resolve()?),
        TraceOp::DepthMask { flag } => gl.depth_mask(*flag),
        TraceOp::DepthRange { z_near, z_far } => gl.depth_range(*z_near, *z_far),
        TraceOp::Disable { cap } => gl.disable(cap.resolve()?),
        TraceOp::Enable { cap } => gl.enable(cap.resolve()?),
        TraceOp::DisableVertexAttribArray { index } => gl.disable_vertex_attrib_array(*index),
        TraceOp::EnableVertexAttribArray { index } => gl.enable_vertex_attrib_array(*index),
        TraceOp::FrontFace { mode } => gl.front_face(mode.resolve()?),
        TraceOp::LineWidth { width } => gl.line_width(*width),
        TraceOp::PixelStorei { pname, param } => {
            let param = i32::try_from(param.resolve()?)
                .map_err(|_| CliError::Trace("pixelStorei: param out of range".into()))?;
            gl.pixel_storei(pname.resolve()?, param)
        }
        TraceOp::PolygonOffset { factor, units } => gl.polygon_offset(*factor, *units),
        TraceOp::SampleCoverage { value, invert } => gl.sample_coverage(*value, *invert),
        TraceOp::Scissor {
            x,
            y,
            width,
            height,
        } => gl.scissor(*x, *y, *width, *height),
        TraceOp::StencilFunc {
            func,
            reference,
            mask,
        } => gl.stencil_func(func.resolve()?, *reference, *mask),
        TraceOp::StencilFuncSeparate {
            face,
            func,
            reference,
            mask,
        } => gl.stencil_func_separate(face.resolve()?, func.resolve()?, *reference, *mask),
        TraceOp::StencilMask { mask } => gl.stencil_mask(*mask),
        TraceOp::StencilMaskSeparate { face, mask } => gl.stencil_mask_separate(face.resolve()?, *mask),
        TraceOp::StencilOp { fail, zfail, zpass } => {
            gl.stencil_op(fail.resolve()?, zfail.resolve()?, zpass.resolve()?)
        }
        TraceOp::StencilOpSeparate {
            face,
            fail,
            zfail,
            zpass,
        } => gl.stencil_op_separate(face.resolve()?, fail.resolve()?, zfail.resolve()?, zpass.resolve()?),
        TraceOp::UseProgram { program } => gl.use_program(*program),
        TraceOp::Viewport {
            x,
            y,
            width,
            height,
        } => gl.viewport(*x, *y, *width, *height),
        TraceOp::DrawArrays { mode, first, count } => gl.draw_arrays(mode.resolve()?, *first, *count),
        TraceOp::Flush => gl.flush(),
        TraceOp::LoseContext => {
            if let Some(device) = gl.device() {
                device.set_lost(true);
            }
            gl.handle_context_event(ContextEventKind::Lost, &mut HostEvent::new());
        }
        TraceOp::RestoreContext => {
            if let Some(device) = gl.device() {
                device.set_lost(false);
            }
            gl.handle_context_event(ContextEventKind::Restored, &mut HostEvent::new());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn validating() -> StateConfig {
        StateConfig::default().with_validation(true)
    }

    fn ops_of(report: &Report) -> Vec<&str> {
        report.calls.iter().map(|c| c.op).collect()
    }

    // --- parsing ---

    #[test]
    fn enum_arguments_accept_names_and_codes() {
        let ops = parse(r#"[{"op":"enable","cap":"CULL_FACE"},{"op":"enable","cap":2884}]"#).unwrap();
        assert_eq!(ops.len(), 2);
        let TraceOp::Enable { cap: by_name } = &ops[0] else {
            panic!("expected enable, got {:?}", ops[0]);
        };
        let TraceOp::Enable { cap: by_code } = &ops[1] else {
            panic!("expected enable, got {:?}", ops[1]);
        };
        assert_eq!(by_name.resolve().unwrap(), by_code.resolve().unwrap());
    }

    #[test]
    fn camel_case_fields_parse() {
        let ops = parse(
            r#"[{"op":"blendFuncSeparate","srcRgb":"SRC_ALPHA","dstRgb":"ONE_MINUS_SRC_ALPHA","srcAlpha":"ONE","dstAlpha":"ZERO"},
                {"op":"depthRange","zNear":0.0,"zFar":1.0}]"#,
        )
        .unwrap();
        assert!(matches!(ops[0], TraceOp::BlendFuncSeparate { .. }));
        assert_eq!(ops[1], TraceOp::DepthRange { z_near: 0.0, z_far: 1.0 });
    }

    #[test]
    fn stencil_reference_uses_device_argument_name() {
        let ops = parse(
            r#"[{"op":"stencilFunc","func":"EQUAL","ref":1,"mask":255},
                {"op":"stencilFuncSeparate","face":"BACK","func":"ALWAYS","ref":0,"mask":255}]"#,
        )
        .unwrap();
        let TraceOp::StencilFunc { reference, .. } = &ops[0] else {
            panic!("expected stencilFunc, got {:?}", ops[0]);
        };
        assert_eq!(*reference, 1);
        assert!(matches!(ops[1], TraceOp::StencilFuncSeparate { reference: 0, .. }));

        let err = parse(r#"[{"op":"stencilFunc","func":"EQUAL","reference":1,"mask":255}]"#).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn use_program_without_handle_unbinds() {
        let ops = parse(r#"[{"op":"useProgram"}]"#).unwrap();
        assert_eq!(ops[0], TraceOp::UseProgram { program: None });
    }

    #[test]
    fn mask_list_is_or_combined() {
        let mask = MaskArg::Many(vec![
            EnumArg::Name("COLOR_BUFFER_BIT".into()),
            EnumArg::Name("DEPTH_BUFFER_BIT".into()),
        ]);
        assert_eq!(mask.resolve().unwrap(), enums::COLOR_BUFFER_BIT | enums::DEPTH_BUFFER_BIT);
    }

    #[test]
    fn malformed_trace_is_input_error() {
        let err = parse(r#"[{"op":"enable"}]"#).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        let err = parse(r#"[{"op":"noSuchCall"}]"#).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("invalid trace"), "missing prefix in: {err}");
    }

    #[test]
    fn unknown_enum_name_is_trace_error() {
        let ops = parse(r#"[{"op":"enable","cap":"CULL_FACES"}]"#).unwrap();
        let err = replay(&ops, validating()).unwrap_err();
        assert_eq!(err.exit_code(), 10);
        let msg = err.to_string();
        assert!(msg.contains("CULL_FACES"), "missing name in: {msg}");
        assert!(msg.contains("entry 0"), "missing position in: {msg}");
    }

    // --- replay ---

    #[test]
    fn loss_scenario_forwards_three_times() {
        let ops = parse(
            r#"[
                {"op":"enable","cap":"CULL_FACE"},
                {"op":"enable","cap":"CULL_FACE"},
                {"op":"disable","cap":"CULL_FACE"},
                {"op":"loseContext"},
                {"op":"enable","cap":"CULL_FACE"},
                {"op":"restoreContext"},
                {"op":"enable","cap":"CULL_FACE"}
            ]"#,
        )
        .unwrap();
        let report = replay(&ops, validating()).unwrap();
        assert_eq!(report.ops, 7);
        assert_eq!(report.stats.forwarded, 3);
        assert_eq!(report.stats.elided, 1);
        assert_eq!(report.stats.suppressed, 1);
        assert_eq!(ops_of(&report), ["enable", "disable", "enable"]);
    }

    #[test]
    fn report_excludes_capability_probe() {
        let report = replay(&[], validating()).unwrap();
        assert!(report.calls.is_empty(), "probe leaked into report: {:?}", report.calls);
        assert_eq!(report.stats, CallStats::default());
    }

    #[test]
    fn rejected_call_never_reaches_device() {
        let ops = parse(r#"[{"op":"clearColor","red":1.5,"green":0,"blue":0,"alpha":1}]"#).unwrap();

        let report = replay(&ops, validating()).unwrap();
        assert_eq!(report.stats.rejected, 1);
        assert!(report.calls.is_empty());

        let report = replay(&ops, StateConfig::default().with_validation(false)).unwrap();
        assert_eq!(report.stats.rejected, 0);
        assert_eq!(ops_of(&report), ["clearColor"]);
    }

    #[test]
    fn clear_with_mask_list_forwards_union() {
        let ops = parse(r#"[{"op":"clear","mask":["COLOR_BUFFER_BIT","STENCIL_BUFFER_BIT"]}]"#).unwrap();
        let report = replay(&ops, validating()).unwrap();
        assert_eq!(ops_of(&report), ["clear"]);
        assert_eq!(
            report.calls[0].args,
            serde_json::json!([enums::COLOR_BUFFER_BIT | enums::STENCIL_BUFFER_BIT])
        );
    }

    #[test]
    fn report_serializes_flat_counters() {
        let ops = parse(r#"[{"op":"depthMask","flag":false},{"op":"depthMask","flag":false}]"#).unwrap();
        let report = replay(&ops, validating()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["forwarded"], 1);
        assert_eq!(json["elided"], 1);
        assert_eq!(json["calls"][0]["op"], "depthMask");
    }

    // --- files ---

    #[test]
    fn load_reads_trace_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"op":"lineWidth","width":2.0}},{{"op":"flush"}}]"#).unwrap();
        let ops = load(file.path()).unwrap();
        assert_eq!(ops, [TraceOp::LineWidth { width: 2.0 }, TraceOp::Flush]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("absent.json"), "missing path in: {err}");
    }
}
