/// Survey session state machine
///
/// A session walks through three stages:
/// `AwaitingDemographics` -> `RatingImage(0..N)` -> `Completed`.
/// There is no way back: a submitted rating is final.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::data::{CatalogEntry, Demographics, Rating, ResponseRecord};
use crate::catalog::{Catalog, ParsedAttributes};
use crate::error::SessionError;

/// Where the participant currently is in the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingDemographics,
    /// Rating the catalog entry at this index
    RatingImage(usize),
    Completed,
}

/// One participant's survey, from intake to completion.
///
/// Each session owns its catalog order, progress, and response log;
/// nothing is shared between sessions.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    demographics: Option<Demographics>,
    current_index: usize,
    responses: Vec<ResponseRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Start a new session over an already-shuffled catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            demographics: None,
            current_index: 0,
            responses: Vec::new(),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn stage(&self) -> Stage {
        if self.demographics.is_none() {
            Stage::AwaitingDemographics
        } else if self.current_index < self.catalog.len() {
            Stage::RatingImage(self.current_index)
        } else {
            Stage::Completed
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage() == Stage::Completed
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The image to show, only while rating
    pub fn current_entry(&self) -> Option<&CatalogEntry> {
        match self.stage() {
            Stage::RatingImage(index) => self.catalog.get(index),
            _ => None,
        }
    }

    /// 1-based position and total while rating, for "Image k of N"
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.stage() {
            Stage::RatingImage(index) => Some((index + 1, self.catalog.len())),
            _ => None,
        }
    }

    /// The append-only response log, in submission order
    pub fn responses(&self) -> &[ResponseRecord] {
        &self.responses
    }

    /// Store the intake answers and move to the first image.
    ///
    /// An empty catalog goes straight to `Completed`.
    pub fn submit_demographics(&mut self, demographics: Demographics) -> Result<Stage, SessionError> {
        if self.demographics.is_some() {
            return Err(SessionError::DemographicsAlreadyCollected);
        }

        info!(
            "📝 Demographics collected (gender: {}, experience: {})",
            demographics.gender, demographics.wood_experience
        );

        self.demographics = Some(demographics);
        self.current_index = 0;
        Ok(self.after_transition())
    }

    /// Record the rating for the current image and advance
    pub fn submit_rating(&mut self, rating: Rating) -> Result<Stage, SessionError> {
        let index = match self.stage() {
            Stage::AwaitingDemographics => return Err(SessionError::DemographicsRequired),
            Stage::Completed => return Err(SessionError::SurveyCompleted),
            Stage::RatingImage(index) => index,
        };

        let (Some(entry), Some(demographics)) = (self.catalog.get(index), &self.demographics) else {
            return Err(SessionError::SurveyCompleted);
        };

        let attributes = ParsedAttributes::parse(&entry.filename);
        if !attributes.is_matched() {
            debug!("{} does not follow the texture naming pattern", entry.filename);
        }

        let record = ResponseRecord {
            demographics: demographics.clone(),
            image: entry.filename.clone(),
            rating,
            attributes,
        };

        info!(
            "✅ Rated {} ({}/{}): {}, aesthetic {}, {}",
            record.image,
            index + 1,
            self.catalog.len(),
            rating.naturalness,
            rating.aesthetic,
            rating.sorting
        );

        self.responses.push(record);
        self.current_index += 1;
        Ok(self.after_transition())
    }

    fn after_transition(&mut self) -> Stage {
        let stage = self.stage();
        if stage == Stage::Completed && self.completed_at.is_none() {
            let now = Utc::now();
            self.completed_at = Some(now);
            info!(
                "🏁 Survey completed: {} responses in {}s",
                self.responses.len(),
                (now - self.started_at).num_seconds()
            );
        }
        stage
    }
}
