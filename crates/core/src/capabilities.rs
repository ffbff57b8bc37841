//! Capability descriptor: optional features and numeric limits, probed once.
//!
//! [`Capabilities::probe`] runs when the device is acquired. It reads the
//! supported-extension list, tries to acquire each feature in [`FEATURES`]
//! (canonical name first, then vendor aliases), and freezes the numeric
//! limits. The result is read-only; a context restore does not re-probe.

use log::debug;
use serde::Serialize;

use crate::device::{ContextAttributes, Device};
use crate::enums;

pub const ANGLE_INSTANCED_ARRAYS: &str = "ANGLE_instanced_arrays";
pub const EXT_BLEND_MINMAX: &str = "EXT_blend_minmax";
pub const EXT_TEXTURE_FILTER_ANISOTROPIC: &str = "EXT_texture_filter_anisotropic";
pub const OES_TEXTURE_FLOAT: &str = "OES_texture_float";
pub const OES_VERTEX_ARRAY_OBJECT: &str = "OES_vertex_array_object";
pub const WEBGL_COMPRESSED_TEXTURE_S3TC: &str = "WEBGL_compressed_texture_s3tc";
pub const WEBGL_DEPTH_TEXTURE: &str = "WEBGL_depth_texture";
pub const WEBGL_LOSE_CONTEXT: &str = "WEBGL_lose_context";

/// Optional features probed at acquisition. The first name of each entry
/// is canonical; the rest are vendor-prefixed aliases tried in order.
pub static FEATURES: &[&[&str]] = &[
    &[ANGLE_INSTANCED_ARRAYS],
    &[EXT_BLEND_MINMAX],
    &["EXT_color_buffer_half_float"],
    &["EXT_disjoint_timer_query"],
    &["EXT_frag_depth"],
    &["EXT_sRGB"],
    &["EXT_shader_texture_lod"],
    &[
        EXT_TEXTURE_FILTER_ANISOTROPIC,
        "MOZ_EXT_texture_filter_anisotropic",
        "WEBKIT_EXT_texture_filter_anisotropic",
    ],
    &["OES_element_index_uint"],
    &["OES_standard_derivatives"],
    &[OES_TEXTURE_FLOAT],
    &["OES_texture_float_linear"],
    &["OES_texture_half_float"],
    &["OES_texture_half_float_linear"],
    &[OES_VERTEX_ARRAY_OBJECT],
    &["WEBGL_color_buffer_float"],
    &["WEBGL_compressed_texture_atc"],
    &["WEBGL_compressed_texture_es3"],
    &["WEBGL_compressed_texture_etc1"],
    &["WEBGL_compressed_texture_pvrtc"],
    &[
        WEBGL_COMPRESSED_TEXTURE_S3TC,
        "MOZ_WEBGL_compressed_texture_s3tc",
        "WEBKIT_WEBGL_compressed_texture_s3tc",
    ],
    &["WEBGL_debug_renderer_info"],
    &["WEBGL_debug_shaders"],
    &[
        WEBGL_DEPTH_TEXTURE,
        "MOZ_WEBGL_depth_texture",
        "WEBKIT_WEBGL_depth_texture",
    ],
    &["WEBGL_draw_buffers"],
    &[
        WEBGL_LOSE_CONTEXT,
        "MOZ_WEBGL_lose_context",
        "WEBKIT_WEBGL_lose_context",
    ],
];

/// One probed optional feature.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct Feature<E> {
    /// Canonical feature name.
    pub name: &'static str,
    /// The name the feature was actually acquired under, if any.
    pub acquired_as: Option<&'static str>,
    #[serde(skip)]
    handle: Option<E>,
}

impl<E> Feature<E> {
    pub fn handle(&self) -> Option<&E> {
        self.handle.as_ref()
    }

    pub fn is_present(&self) -> bool {
        self.handle.is_some()
    }
}

/// Numeric device limits, read once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Limits {
    pub max_combined_texture_image_units: i32,
    pub max_cube_map_texture_size: i32,
    pub max_fragment_uniform_vectors: i32,
    pub max_renderbuffer_size: i32,
    pub max_texture_image_units: i32,
    pub max_texture_size: i32,
    pub max_varying_vectors: i32,
    pub max_vertex_attribs: i32,
    pub max_vertex_texture_image_units: i32,
    pub max_vertex_uniform_vectors: i32,
    pub max_viewport_dims: [i32; 2],
}

impl Limits {
    /// Reads every limit from the device. Limits the device does not
    /// report as integers are recorded as zero.
    pub fn probe<D: Device>(device: &D) -> Self {
        let int = |pname: u32| device.get_parameter(pname).as_i32().unwrap_or(0);
        let viewport = device.get_parameter(enums::MAX_VIEWPORT_DIMS);
        let max_viewport_dims = match viewport.as_ints() {
            Some(&[w, h, ..]) => [w, h],
            _ => [0, 0],
        };

        Self {
            max_combined_texture_image_units: int(enums::MAX_COMBINED_TEXTURE_IMAGE_UNITS),
            max_cube_map_texture_size: int(enums::MAX_CUBE_MAP_TEXTURE_SIZE),
            max_fragment_uniform_vectors: int(enums::MAX_FRAGMENT_UNIFORM_VECTORS),
            max_renderbuffer_size: int(enums::MAX_RENDERBUFFER_SIZE),
            max_texture_image_units: int(enums::MAX_TEXTURE_IMAGE_UNITS),
            max_texture_size: int(enums::MAX_TEXTURE_SIZE),
            max_varying_vectors: int(enums::MAX_VARYING_VECTORS),
            max_vertex_attribs: int(enums::MAX_VERTEX_ATTRIBS),
            max_vertex_texture_image_units: int(enums::MAX_VERTEX_TEXTURE_IMAGE_UNITS),
            max_vertex_uniform_vectors: int(enums::MAX_VERTEX_UNIFORM_VECTORS),
            max_viewport_dims,
        }
    }
}

/// The frozen capability record of one acquired device.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct Capabilities<E> {
    pub supported_extensions: Vec<String>,
    features: Vec<Feature<E>>,
    pub context_attributes: Option<ContextAttributes>,
    pub limits: Limits,
    /// Zero when anisotropic filtering is unavailable.
    pub max_anisotropy: f32,
}

impl<E: Clone> Capabilities<E> {
    /// Probes the device once for features, attributes and limits.
    pub fn probe<D: Device<Extension = E>>(device: &D) -> Self {
        let supported_extensions = device.get_supported_extensions();

        let features: Vec<Feature<E>> = FEATURES
            .iter()
            .map(|names| acquire(device, names))
            .collect();

        let anisotropic = features
            .iter()
            .any(|f| f.name == EXT_TEXTURE_FILTER_ANISOTROPIC && f.is_present());
        let max_anisotropy = if anisotropic {
            device
                .get_parameter(enums::MAX_TEXTURE_MAX_ANISOTROPY_EXT)
                .as_f32()
                .unwrap_or(0.0)
        } else {
            0.0
        };

        let caps = Self {
            supported_extensions,
            features,
            context_attributes: device.get_context_attributes(),
            limits: Limits::probe(device),
            max_anisotropy,
        };
        debug!(
            "probed capabilities: {} of {} features present, max anisotropy {}",
            caps.features.iter().filter(|f| f.is_present()).count(),
            FEATURES.len(),
            caps.max_anisotropy
        );
        caps
    }
}

impl<E> Capabilities<E> {
    /// Looks up a probed feature by canonical name.
    pub fn feature(&self, name: &str) -> Option<&Feature<E>> {
        self.features.iter().find(|f| f.name == name)
    }

    /// The live handle for a feature, if it was acquired.
    pub fn extension(&self, name: &str) -> Option<&E> {
        self.feature(name).and_then(Feature::handle)
    }

    pub fn has(&self, name: &str) -> bool {
        self.extension(name).is_some()
    }

    pub fn features(&self) -> &[Feature<E>] {
        &self.features
    }
}

fn acquire<D: Device>(device: &D, names: &'static [&'static str]) -> Feature<D::Extension> {
    let name = names[0];
    for &candidate in names {
        if let Some(handle) = device.get_extension(candidate) {
            return Feature {
                name,
                acquired_as: Some(candidate),
                handle: Some(handle),
            };
        }
    }
    Feature {
        name,
        acquired_as: None,
        handle: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Parameter;
    use crate::record::Recorder;

    #[test]
    fn every_feature_entry_has_a_canonical_name() {
        for names in FEATURES {
            assert!(!names.is_empty());
            assert!(!names[0].starts_with("MOZ_") && !names[0].starts_with("WEBKIT_"));
        }
        assert_eq!(FEATURES.len(), 26);
    }

    #[test]
    fn probe_acquires_canonical_feature() {
        let device = Recorder::new().with_extensions(&[EXT_BLEND_MINMAX]);
        let caps = Capabilities::probe(&device);
        assert!(caps.has(EXT_BLEND_MINMAX));
        assert_eq!(
            caps.feature(EXT_BLEND_MINMAX).and_then(|f| f.acquired_as),
            Some(EXT_BLEND_MINMAX)
        );
        assert!(!caps.has(OES_TEXTURE_FLOAT));
    }

    #[test]
    fn probe_falls_back_to_vendor_alias() {
        let device = Recorder::new().with_extensions(&["WEBKIT_WEBGL_depth_texture"]);
        let caps = Capabilities::probe(&device);
        let feature = caps.feature(WEBGL_DEPTH_TEXTURE).unwrap();
        assert!(feature.is_present());
        assert_eq!(feature.acquired_as, Some("WEBKIT_WEBGL_depth_texture"));
    }

    #[test]
    fn probe_prefers_first_alias_that_succeeds() {
        let device = Recorder::new().with_extensions(&[
            "WEBKIT_EXT_texture_filter_anisotropic",
            "MOZ_EXT_texture_filter_anisotropic",
        ]);
        let caps = Capabilities::probe(&device);
        assert_eq!(
            caps.feature(EXT_TEXTURE_FILTER_ANISOTROPIC)
                .and_then(|f| f.acquired_as),
            Some("MOZ_EXT_texture_filter_anisotropic")
        );
    }

    #[test]
    fn max_anisotropy_is_zero_without_feature() {
        let device = Recorder::new()
            .with_parameter(enums::MAX_TEXTURE_MAX_ANISOTROPY_EXT, Parameter::Float(16.0));
        let caps = Capabilities::probe(&device);
        assert_eq!(caps.max_anisotropy, 0.0);
    }

    #[test]
    fn max_anisotropy_read_when_feature_present() {
        let device = Recorder::new()
            .with_extensions(&[EXT_TEXTURE_FILTER_ANISOTROPIC])
            .with_parameter(enums::MAX_TEXTURE_MAX_ANISOTROPY_EXT, Parameter::Float(16.0));
        let caps = Capabilities::probe(&device);
        assert_eq!(caps.max_anisotropy, 16.0);
    }

    #[test]
    fn limits_are_read_from_device() {
        let device = Recorder::new()
            .with_parameter(enums::MAX_VERTEX_ATTRIBS, Parameter::Int(8))
            .with_parameter(enums::MAX_VIEWPORT_DIMS, Parameter::Ints(vec![2048, 1024]));
        let limits = Limits::probe(&device);
        assert_eq!(limits.max_vertex_attribs, 8);
        assert_eq!(limits.max_viewport_dims, [2048, 1024]);
    }

    #[test]
    fn limits_default_to_zero_when_unreported() {
        let device = Recorder::new().with_parameter(enums::MAX_TEXTURE_SIZE, Parameter::Null);
        let limits = Limits::probe(&device);
        assert_eq!(limits.max_texture_size, 0);
    }

    #[test]
    fn probe_reads_supported_extensions_and_attributes() {
        let device = Recorder::new().with_extensions(&[OES_TEXTURE_FLOAT]);
        let caps = Capabilities::probe(&device);
        assert_eq!(caps.supported_extensions, vec![OES_TEXTURE_FLOAT.to_string()]);
        assert!(caps.context_attributes.is_some());
    }

    #[test]
    fn capabilities_serialize_without_handles() {
        let device = Recorder::new().with_extensions(&[EXT_BLEND_MINMAX]);
        let caps = Capabilities::probe(&device);
        let json = serde_json::to_value(&caps).unwrap();
        assert!(json.get("limits").is_some());
        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), FEATURES.len());
        assert!(features[0].get("handle").is_none());
    }
}
