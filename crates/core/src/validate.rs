//! Argument validation against the catalog and the capability descriptor.
//!
//! The `is_*` predicates are pure and total. The `check_*` helpers wrap
//! them into a [`Rejection`] naming the operation and parameter, which is
//! what the façade logs before dropping a call. Nothing here touches the
//! cache or the device.

use crate::capabilities::{Capabilities, EXT_BLEND_MINMAX};
use crate::device::BufferData;
use crate::enums::{self, CATALOG};
use crate::error::Rejection;

// --- numeric predicates ---

/// A finite float in `[0, 1]`.
pub fn is_clampf(value: f32) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// A finite, non-negative float.
pub fn is_ufloat(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

pub fn is_numeric(value: f32) -> bool {
    value.is_finite()
}

pub fn is_uint(value: i64) -> bool {
    value >= 0
}

pub fn is_in_range(value: i64, min: i64, max: i64) -> bool {
    (min..=max).contains(&value)
}

// --- enum membership ---

pub fn is_blend_factor(factor: u32) -> bool {
    CATALOG.blend_factors.contains(&factor)
}

/// Min/max equations are legal only when `EXT_blend_minmax` was acquired.
pub fn is_blend_equation<E>(mode: u32, caps: &Capabilities<E>) -> bool {
    CATALOG.blend_equations.contains(&mode)
        || (caps.has(EXT_BLEND_MINMAX) && CATALOG.blend_minmax_equations.contains(&mode))
}

/// A non-empty union of the three clear bits and nothing else.
pub fn is_clear_mask(mask: u32) -> bool {
    let all = CATALOG.clear_bits.iter().fold(0, |acc, bit| acc | bit);
    mask != 0 && mask & !all == 0
}

pub fn is_face(face: u32) -> bool {
    CATALOG.faces.contains(&face)
}

pub fn is_compare_func(func: u32) -> bool {
    CATALOG.compare_funcs.contains(&func)
}

pub fn is_stencil_op(op: u32) -> bool {
    CATALOG.stencil_ops.contains(&op)
}

pub fn is_capability(cap: u32) -> bool {
    CATALOG.capabilities.contains(&cap)
}

pub fn is_front_face(mode: u32) -> bool {
    CATALOG.front_face_modes.contains(&mode)
}

pub fn is_buffer_target(target: u32) -> bool {
    CATALOG.buffer_targets.contains(&target)
}

pub fn is_buffer_usage(usage: u32) -> bool {
    CATALOG.buffer_usages.contains(&usage)
}

pub fn is_texture_target(target: u32) -> bool {
    CATALOG.texture_targets.contains(&target)
}

pub fn is_shader_type(kind: u32) -> bool {
    CATALOG.shader_types.contains(&kind)
}

pub fn is_framebuffer_target(target: u32) -> bool {
    CATALOG.framebuffer_targets.contains(&target)
}

pub fn is_renderbuffer_target(target: u32) -> bool {
    CATALOG.renderbuffer_targets.contains(&target)
}

/// Whether `param` is a legal value for pixel-store parameter `pname`.
///
/// Alignments take `1`, `2`, `4` or `8`; the flip-Y and premultiply flags
/// take `0` or `1`; colorspace conversion takes `BROWSER_DEFAULT_WEBGL` or
/// `NONE`. Unknown names are never legal.
pub fn is_pixel_store_param(pname: u32, param: i32) -> bool {
    match pname {
        enums::PACK_ALIGNMENT | enums::UNPACK_ALIGNMENT => {
            CATALOG.pixel_alignments.contains(&param)
        }
        enums::UNPACK_FLIP_Y_WEBGL | enums::UNPACK_PREMULTIPLY_ALPHA_WEBGL => {
            param == 0 || param == 1
        }
        enums::UNPACK_COLORSPACE_CONVERSION_WEBGL => {
            CATALOG.colorspace_conversions.contains(&param)
        }
        _ => false,
    }
}

fn is_constant_color(factor: u32) -> bool {
    CATALOG.constant_color_factors.contains(&factor)
}

fn is_constant_alpha(factor: u32) -> bool {
    CATALOG.constant_alpha_factors.contains(&factor)
}

/// False when one factor is a constant-color factor and the other a
/// constant-alpha factor, in either order.
pub fn is_blend_factor_pair(src: u32, dst: u32) -> bool {
    !((is_constant_color(src) && is_constant_alpha(dst))
        || (is_constant_alpha(src) && is_constant_color(dst)))
}

// --- buffer sources ---

/// The typed-buffer-view check: raw bytes, not a size.
pub fn is_byte_view(data: &BufferData<'_>) -> bool {
    matches!(data, BufferData::Bytes(_))
}

/// A byte view, or a non-negative size to allocate.
pub fn is_buffer_source(data: &BufferData<'_>) -> bool {
    match data {
        BufferData::Bytes(_) => true,
        BufferData::Size(size) => is_uint(*size),
    }
}

// --- checks used by the façade ---

pub(crate) fn check_clampf(op: &'static str, param: &'static str, value: f32) -> Result<(), Rejection> {
    if is_clampf(value) {
        Ok(())
    } else {
        Err(Rejection::NotClamped { op, param, value })
    }
}

pub(crate) fn check_ufloat(op: &'static str, param: &'static str, value: f32) -> Result<(), Rejection> {
    if is_ufloat(value) {
        Ok(())
    } else {
        Err(Rejection::NegativeFloat { op, param, value })
    }
}

pub(crate) fn check_numeric(op: &'static str, param: &'static str, value: f32) -> Result<(), Rejection> {
    if is_numeric(value) {
        Ok(())
    } else {
        Err(Rejection::NotFinite { op, param, value })
    }
}

pub(crate) fn check_uint(op: &'static str, param: &'static str, value: i64) -> Result<(), Rejection> {
    if is_uint(value) {
        Ok(())
    } else {
        Err(Rejection::NegativeInt { op, param, value })
    }
}

pub(crate) fn check_range(
    op: &'static str,
    param: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), Rejection> {
    if is_in_range(value, min, max) {
        Ok(())
    } else {
        Err(Rejection::OutOfRange {
            op,
            param,
            value,
            min,
            max,
        })
    }
}

/// Rejects with `NotInSet` unless `ok` holds.
pub(crate) fn check_member(
    ok: bool,
    op: &'static str,
    param: &'static str,
    value: u32,
    expected: &'static str,
) -> Result<(), Rejection> {
    if ok {
        Ok(())
    } else {
        Err(Rejection::NotInSet {
            op,
            param,
            value,
            expected,
        })
    }
}

pub(crate) fn check_blend_pair(
    op: &'static str,
    params: (&'static str, &'static str),
    src: u32,
    dst: u32,
) -> Result<(), Rejection> {
    if is_blend_factor_pair(src, dst) {
        Ok(())
    } else {
        Err(Rejection::ConstantColorAlpha {
            op,
            first: params.0,
            second: params.1,
        })
    }
}

pub(crate) fn check_pixel_store(pname: u32, param: i32) -> Result<(), Rejection> {
    const OP: &str = "pixelStorei";
    check_member(
        CATALOG.pixel_store_params.contains(&pname),
        OP,
        "pname",
        pname,
        "a pixel-store parameter",
    )?;
    if is_pixel_store_param(pname, param) {
        Ok(())
    } else {
        Err(Rejection::NotInSet {
            op: OP,
            param: "param",
            value: param as u32,
            expected: "a legal value for pname",
        })
    }
}

pub(crate) fn check_buffer_source(op: &'static str, data: &BufferData<'_>) -> Result<(), Rejection> {
    if is_buffer_source(data) {
        Ok(())
    } else {
        Err(Rejection::NotByteView { op, param: "data" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Recorder;
    use proptest::prelude::*;

    fn caps_with(extensions: &[&str]) -> Capabilities<String> {
        Capabilities::probe(&Recorder::new().with_extensions(extensions))
    }

    // --- numeric ---

    #[test]
    fn clampf_accepts_bounds_and_rejects_outside() {
        assert!(is_clampf(0.0));
        assert!(is_clampf(1.0));
        assert!(!is_clampf(1.5));
        assert!(!is_clampf(-0.01));
        assert!(!is_clampf(f32::NAN));
    }

    #[test]
    fn ufloat_rejects_negative_and_infinite() {
        assert!(is_ufloat(0.0));
        assert!(is_ufloat(10.0));
        assert!(!is_ufloat(-1.0));
        assert!(!is_ufloat(f32::INFINITY));
    }

    #[test]
    fn uint_and_range() {
        assert!(is_uint(0));
        assert!(!is_uint(-1));
        assert!(is_in_range(3, 0, 3));
        assert!(!is_in_range(4, 0, 3));
    }

    proptest! {
        #[test]
        fn clampf_matches_unit_interval(v in -10.0f32..10.0) {
            prop_assert_eq!(is_clampf(v), (0.0..=1.0).contains(&v));
        }

        #[test]
        fn check_clampf_agrees_with_predicate(v in -2.0f32..2.0) {
            prop_assert_eq!(check_clampf("clearColor", "red", v).is_ok(), is_clampf(v));
        }

        #[test]
        fn clear_mask_rejects_undefined_bits(mask in any::<u32>()) {
            let all = enums::COLOR_BUFFER_BIT | enums::DEPTH_BUFFER_BIT | enums::STENCIL_BUFFER_BIT;
            prop_assert_eq!(is_clear_mask(mask), mask != 0 && mask & !all == 0);
        }
    }

    // --- clear mask ---

    #[test]
    fn clear_mask_accepts_every_union_of_defined_bits() {
        let bits = [
            enums::COLOR_BUFFER_BIT,
            enums::DEPTH_BUFFER_BIT,
            enums::STENCIL_BUFFER_BIT,
        ];
        for combo in 1u32..8 {
            let mask = bits
                .iter()
                .enumerate()
                .filter(|(i, _)| combo & (1 << i) != 0)
                .fold(0, |acc, (_, bit)| acc | bit);
            assert!(is_clear_mask(mask), "mask 0x{mask:X} should be legal");
        }
    }

    #[test]
    fn clear_mask_rejects_zero_and_stray_bits() {
        assert!(!is_clear_mask(0));
        assert!(!is_clear_mask(0x1));
        assert!(!is_clear_mask(enums::COLOR_BUFFER_BIT | 0x1));
    }

    // --- enums ---

    #[test]
    fn blend_equation_minmax_needs_feature() {
        let without = caps_with(&[]);
        let with = caps_with(&[EXT_BLEND_MINMAX]);
        assert!(is_blend_equation(enums::FUNC_ADD, &without));
        assert!(!is_blend_equation(enums::MIN_EXT, &without));
        assert!(is_blend_equation(enums::MIN_EXT, &with));
        assert!(is_blend_equation(enums::MAX_EXT, &with));
        assert!(!is_blend_equation(enums::ONE, &with));
    }

    #[test]
    fn membership_predicates() {
        assert!(is_capability(enums::CULL_FACE));
        assert!(!is_capability(enums::TEXTURE_2D));
        assert!(is_face(enums::FRONT_AND_BACK));
        assert!(is_compare_func(enums::LEQUAL));
        assert!(is_stencil_op(enums::INCR_WRAP));
        assert!(is_front_face(enums::CCW));
        assert!(!is_front_face(enums::FRONT));
        assert!(is_buffer_target(enums::ELEMENT_ARRAY_BUFFER));
        assert!(is_buffer_usage(enums::STREAM_DRAW));
        assert!(is_texture_target(enums::TEXTURE_CUBE_MAP));
        assert!(is_shader_type(enums::FRAGMENT_SHADER));
        assert!(is_framebuffer_target(enums::FRAMEBUFFER));
        assert!(!is_framebuffer_target(enums::RENDERBUFFER));
        assert!(is_renderbuffer_target(enums::RENDERBUFFER));
        assert!(is_blend_factor(enums::SRC_ALPHA_SATURATE));
    }

    // --- pixel store ---

    #[test]
    fn pixel_store_alignments() {
        for a in [1, 2, 4, 8] {
            assert!(is_pixel_store_param(enums::UNPACK_ALIGNMENT, a));
            assert!(is_pixel_store_param(enums::PACK_ALIGNMENT, a));
        }
        assert!(!is_pixel_store_param(enums::UNPACK_ALIGNMENT, 3));
        assert!(!is_pixel_store_param(enums::PACK_ALIGNMENT, 16));
    }

    #[test]
    fn pixel_store_flags_and_colorspace() {
        assert!(is_pixel_store_param(enums::UNPACK_FLIP_Y_WEBGL, 1));
        assert!(!is_pixel_store_param(enums::UNPACK_PREMULTIPLY_ALPHA_WEBGL, 2));
        assert!(is_pixel_store_param(
            enums::UNPACK_COLORSPACE_CONVERSION_WEBGL,
            enums::BROWSER_DEFAULT_WEBGL as i32
        ));
        assert!(is_pixel_store_param(enums::UNPACK_COLORSPACE_CONVERSION_WEBGL, enums::NONE as i32));
        assert!(!is_pixel_store_param(enums::UNPACK_COLORSPACE_CONVERSION_WEBGL, 1));
        assert!(!is_pixel_store_param(enums::CULL_FACE, 1));
    }

    #[test]
    fn check_pixel_store_names_failing_param() {
        let err = check_pixel_store(enums::CULL_FACE, 1).unwrap_err();
        assert!(format!("{err}").contains("pname"));
        let err = check_pixel_store(enums::UNPACK_ALIGNMENT, 3).unwrap_err();
        assert!(format!("{err}").contains("param"));
    }

    // --- blend pairs ---

    #[test]
    fn constant_color_and_alpha_rejected_in_both_orders() {
        assert!(!is_blend_factor_pair(enums::CONSTANT_COLOR, enums::CONSTANT_ALPHA));
        assert!(!is_blend_factor_pair(enums::ONE_MINUS_CONSTANT_ALPHA, enums::CONSTANT_COLOR));
        assert!(!is_blend_factor_pair(
            enums::ONE_MINUS_CONSTANT_COLOR,
            enums::ONE_MINUS_CONSTANT_ALPHA
        ));
    }

    #[test]
    fn same_kind_constants_are_allowed() {
        assert!(is_blend_factor_pair(enums::CONSTANT_COLOR, enums::ONE_MINUS_CONSTANT_COLOR));
        assert!(is_blend_factor_pair(enums::CONSTANT_ALPHA, enums::ONE));
        assert!(is_blend_factor_pair(enums::SRC_ALPHA, enums::ONE_MINUS_SRC_ALPHA));
    }

    // --- buffer sources ---

    #[test]
    fn byte_view_and_buffer_source() {
        let bytes = [0u8; 4];
        assert!(is_byte_view(&BufferData::Bytes(&bytes)));
        assert!(!is_byte_view(&BufferData::Size(4)));
        assert!(is_buffer_source(&BufferData::Size(0)));
        assert!(!is_buffer_source(&BufferData::Size(-1)));
        assert!(check_buffer_source("bufferData", &BufferData::Size(-1)).is_err());
    }
}
