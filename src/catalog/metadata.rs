/// Filename metadata parser
///
/// Texture renders are named after the generator parameters that produced them:
/// `wood_scale_<A>_distortion_<B>_roughness_<C>_knot_<D>_contrast_<E>_brightness_<F>_type_<G>.png`
///
/// A filename either yields all seven values or none of them.

use regex::Regex;
use std::sync::LazyLock;

static RE_TEXTURE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^wood_scale_(.*?)_distortion_(.*?)_roughness_(.*?)_knot_(.*?)_contrast_(.*?)_brightness_(.*?)_type_(.*?)\.png",
    )
    .expect("texture filename pattern is valid")
});

/// Generator parameters recovered from a texture filename.
///
/// Values are kept as raw strings; no coercion, no range checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAttributes {
    pub scale: Option<String>,
    pub distortion: Option<String>,
    pub roughness: Option<String>,
    pub knot: Option<String>,
    pub contrast: Option<String>,
    pub brightness: Option<String>,
    pub wood_type: Option<String>,
}

impl ParsedAttributes {
    /// Parse a filename. A non-matching name is not an error: every field is `None`.
    pub fn parse(filename: &str) -> Self {
        let Some(caps) = RE_TEXTURE_NAME.captures(filename) else {
            return Self::default();
        };

        let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

        Self {
            scale: group(1),
            distortion: group(2),
            roughness: group(3),
            knot: group(4),
            contrast: group(5),
            brightness: group(6),
            wood_type: group(7),
        }
    }

    /// True when the filename matched the pattern
    pub fn is_matched(&self) -> bool {
        self.scale.is_some()
    }

    /// Values in column order: scale, distortion, roughness, knot, contrast, brightness, wood type
    pub fn values(&self) -> [Option<&str>; 7] {
        [
            self.scale.as_deref(),
            self.distortion.as_deref(),
            self.roughness.as_deref(),
            self.knot.as_deref(),
            self.contrast.as_deref(),
            self.brightness.as_deref(),
            self.wood_type.as_deref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_seven_groups() {
        let parsed = ParsedAttributes::parse(
            "wood_scale_2_distortion_0.1_roughness_low_knot_none_contrast_high_brightness_50_type_oak.png",
        );

        assert_eq!(
            parsed.values(),
            [
                Some("2"),
                Some("0.1"),
                Some("low"),
                Some("none"),
                Some("high"),
                Some("50"),
                Some("oak"),
            ]
        );
        assert!(parsed.is_matched());
    }

    #[test]
    fn test_non_matching_names_yield_nothing() {
        for name in ["random.png", "", "wood_scale_1.png"] {
            let parsed = ParsedAttributes::parse(name);
            assert_eq!(parsed, ParsedAttributes::default(), "name: {name:?}");
            assert!(parsed.values().iter().all(Option::is_none));
        }
    }

    #[test]
    fn test_must_match_from_the_start() {
        let parsed = ParsedAttributes::parse(
            "old_wood_scale_2_distortion_0_roughness_a_knot_b_contrast_c_brightness_d_type_e.png",
        );
        assert!(!parsed.is_matched());
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let parsed = ParsedAttributes::parse(
            "wood_scale_2_distortion_0_roughness_a_knot_b_contrast_c_brightness_d_type_e.PNG",
        );
        assert!(!parsed.is_matched());

        let jpg = ParsedAttributes::parse(
            "wood_scale_2_distortion_0_roughness_a_knot_b_contrast_c_brightness_d_type_e.jpg",
        );
        assert!(!jpg.is_matched());
    }

    #[test]
    fn test_trailing_text_after_extension_is_tolerated() {
        let parsed = ParsedAttributes::parse(
            "wood_scale_1_distortion_2_roughness_3_knot_4_contrast_5_brightness_6_type_pine.png.bak",
        );
        assert_eq!(parsed.wood_type.as_deref(), Some("pine"));
    }

    #[test]
    fn test_groups_are_lazy() {
        // The first "_distortion_" ends the scale group
        let parsed = ParsedAttributes::parse(
            "wood_scale_a_b_distortion_x_roughness__knot_k_contrast_c_brightness_b_type_t_u.png",
        );
        assert_eq!(parsed.scale.as_deref(), Some("a_b"));
        assert_eq!(parsed.roughness.as_deref(), Some(""));
        assert_eq!(parsed.wood_type.as_deref(), Some("t_u"));
    }
}
