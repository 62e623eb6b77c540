/// Shared data structures for the survey state
///
/// These structs represent the data model that flows between
/// the session state machine, the UI layer, and the exporter.

use std::fmt;

use crate::catalog::metadata::ParsedAttributes;

/// Represents a single image in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    /// Filename only (e.g., "wood_scale_2_..._type_oak.png")
    pub filename: String,
    /// Full traversal path to the image file
    pub path: String,
}

/// Participant gender, as offered by the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: &'static [Gender] = &[Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Self-reported experience with wood as a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WoodExperience {
    #[default]
    None,
    Basic,
    Average,
    High,
    Expert,
}

impl WoodExperience {
    pub const ALL: &'static [WoodExperience] = &[
        WoodExperience::None,
        WoodExperience::Basic,
        WoodExperience::Average,
        WoodExperience::High,
        WoodExperience::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WoodExperience::None => "None",
            WoodExperience::Basic => "Basic",
            WoodExperience::Average => "Average",
            WoodExperience::High => "High",
            WoodExperience::Expert => "Expert",
        }
    }
}

/// Demographic answers, captured once per session before any rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    /// Free text, not validated
    pub age: String,
    pub gender: Gender,
    pub wood_experience: WoodExperience,
}

/// How natural the texture appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Naturalness {
    #[default]
    Unnatural,
    Neutral,
    Natural,
}

impl Naturalness {
    pub const ALL: &'static [Naturalness] = &[
        Naturalness::Unnatural,
        Naturalness::Neutral,
        Naturalness::Natural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Naturalness::Unnatural => "Unnatural",
            Naturalness::Neutral => "Neutral",
            Naturalness::Natural => "Natural",
        }
    }
}

/// Perceived color variation ("sorting"), ordered from calm to lively
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Sorting {
    #[default]
    Minimal,
    Slight,
    Moderate,
    VeryLively,
    HighlyLively,
}

impl Sorting {
    pub const ALL: &'static [Sorting] = &[
        Sorting::Minimal,
        Sorting::Slight,
        Sorting::Moderate,
        Sorting::VeryLively,
        Sorting::HighlyLively,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sorting::Minimal => "Minimal Color Variation",
            Sorting::Slight => "Slight Color Variation",
            Sorting::Moderate => "Moderate Color Variation",
            Sorting::VeryLively => "Very Lively Color Variation",
            Sorting::HighlyLively => "Highly Lively Color Variation",
        }
    }
}

/// Aesthetic liking on a 0..=6 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Aesthetic(u8);

impl Aesthetic {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 6;
    /// Slider starts at the midpoint
    pub const DEFAULT: u8 = 3;

    /// Clamp any slider value into range
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Aesthetic {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// The three answers submitted for one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rating {
    pub naturalness: Naturalness,
    pub aesthetic: Aesthetic,
    pub sorting: Sorting,
}

/// One row of output: demographics + image identity + ratings + parsed filename attributes
///
/// Created once per rated image and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    pub demographics: Demographics,
    pub image: String,
    pub rating: Rating,
    pub attributes: ParsedAttributes,
}

// Display impls feed the pick lists in the UI layer

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WoodExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Naturalness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
