/// Form drafts for the intake and rating screens
///
/// A draft holds what the participant has entered so far. Editing a draft
/// never changes the session; only submitting it does. Every field starts
/// with a value, so a submitted draft is always complete.

use super::data::{Aesthetic, Demographics, Gender, Naturalness, Rating, Sorting, WoodExperience};

/// Intake form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemographicsDraft {
    /// Free text, submitted as typed
    pub age: String,
    pub gender: Gender,
    pub wood_experience: WoodExperience,
}

impl DemographicsDraft {
    /// Turn the draft into the answers stored on the session
    pub fn submit(&self) -> Demographics {
        Demographics {
            age: self.age.clone(),
            gender: self.gender,
            wood_experience: self.wood_experience,
        }
    }
}

/// Per-image rating form state
///
/// Defaults are the first option of each list and the slider midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingDraft {
    pub naturalness: Naturalness,
    pub aesthetic: Aesthetic,
    pub sorting: Sorting,
}

impl RatingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_aesthetic(&mut self, value: u8) {
        self.aesthetic = Aesthetic::new(value);
    }

    /// Check if this draft is untouched
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// Submit and reset, so the next image starts from the defaults
    pub fn take(&mut self) -> Rating {
        let rating = Rating {
            naturalness: self.naturalness,
            aesthetic: self.aesthetic,
            sorting: self.sorting,
        };
        *self = Self::default();
        rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating_draft() {
        let draft = RatingDraft::new();
        assert!(draft.is_pristine());
        assert_eq!(draft.naturalness, Naturalness::Unnatural);
        assert_eq!(draft.aesthetic.value(), 3);
        assert_eq!(draft.sorting, Sorting::Minimal);
    }

    #[test]
    fn test_take_returns_answers_and_resets() {
        let mut draft = RatingDraft::new();
        draft.naturalness = Naturalness::Natural;
        draft.set_aesthetic(5);
        draft.sorting = Sorting::Moderate;
        assert!(!draft.is_pristine());

        let rating = draft.take();

        assert_eq!(rating.naturalness, Naturalness::Natural);
        assert_eq!(rating.aesthetic.value(), 5);
        assert_eq!(rating.sorting, Sorting::Moderate);
        assert!(draft.is_pristine());
    }

    #[test]
    fn test_empty_demographics_draft_still_submits() {
        let draft = DemographicsDraft::default();
        let demographics = draft.submit();

        assert_eq!(demographics.age, "");
        assert_eq!(demographics.gender, Gender::Male);
        assert_eq!(demographics.wood_experience, WoodExperience::None);
    }
}
