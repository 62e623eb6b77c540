use clap::Parser;
use iced::widget::image::Handle;
use iced::{Element, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod error;
mod export;
mod state;
mod ui;

use catalog::Catalog;
use config::{Args, SurveyConfig};
use export::Table;
use state::data::{Gender, Naturalness, ResponseRecord, Sorting, WoodExperience};
use state::forms::{DemographicsDraft, RatingDraft};
use state::{Session, Stage};
use ui::{ExportStatus, PreviewState};

/// Where the application is, before and after the survey session exists
enum Phase {
    /// Catalog scan in progress
    Loading,
    /// Catalog could not be loaded; the survey cannot be entered
    Failed(String),
    /// Survey session in progress (or finished)
    Running(Session),
}

/// Main application state
struct TextureSurvey {
    config: SurveyConfig,
    phase: Phase,
    /// Intake form as currently filled in
    demographics_draft: DemographicsDraft,
    /// Rating form for the current image
    rating_draft: RatingDraft,
    /// Catalog index the preview belongs to, and its state
    preview: (usize, PreviewState),
    /// Export table, built once on completion
    results: Option<Table>,
    export_status: Option<ExportStatus>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Background catalog scan finished
    CatalogLoaded(Result<Catalog, String>),

    // Intake form
    AgeChanged(String),
    GenderSelected(Gender),
    ExperienceSelected(WoodExperience),
    StartSurvey,

    // Rating form
    NaturalnessSelected(Naturalness),
    AestheticChanged(u8),
    SortingSelected(Sorting),
    NextImage,

    /// Background decode finished for the image at this catalog index
    PreviewLoaded(usize, Result<Handle, String>),

    /// User clicked "Download Responses"
    DownloadResults,
    /// Background results write finished
    ExportFinished(Result<PathBuf, String>),
}

impl TextureSurvey {
    /// Create the application and start scanning the image folder
    fn new(config: SurveyConfig) -> (Self, Task<Message>) {
        let scan = Task::perform(
            catalog::loader::load_catalog(config.image_dir.clone(), config.seed),
            |result| Message::CatalogLoaded(result.map_err(|e| e.to_string())),
        );

        (
            TextureSurvey {
                config,
                phase: Phase::Loading,
                demographics_draft: DemographicsDraft::default(),
                rating_draft: RatingDraft::new(),
                preview: (0, PreviewState::Loading),
                results: None,
                export_status: None,
            },
            scan,
        )
    }

    fn title(&self) -> String {
        match &self.phase {
            Phase::Running(session) => match session.progress() {
                Some((position, total)) => {
                    format!("Wood Texture Survey - Image {position} of {total}")
                }
                None => "Wood Texture Survey".to_string(),
            },
            _ => "Wood Texture Survey".to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                if catalog.is_empty() {
                    warn!("⚠️  No images found in {}", self.config.image_dir.display());
                }
                for (position, entry) in catalog.iter().enumerate() {
                    debug!("#{} {}", position + 1, entry.path);
                }
                self.phase = Phase::Running(Session::new(catalog));
                Task::none()
            }
            Message::CatalogLoaded(Err(reason)) => {
                error!("❌ Cannot start survey: {}", reason);
                self.phase = Phase::Failed(reason);
                Task::none()
            }

            Message::AgeChanged(age) => {
                self.demographics_draft.age = age;
                Task::none()
            }
            Message::GenderSelected(gender) => {
                self.demographics_draft.gender = gender;
                Task::none()
            }
            Message::ExperienceSelected(experience) => {
                self.demographics_draft.wood_experience = experience;
                Task::none()
            }
            Message::StartSurvey => {
                let Phase::Running(session) = &mut self.phase else {
                    return Task::none();
                };
                match session.submit_demographics(self.demographics_draft.submit()) {
                    Ok(stage) => self.enter_stage(stage),
                    Err(err) => {
                        warn!("⚠️  Ignored intake submission: {}", err);
                        Task::none()
                    }
                }
            }

            Message::NaturalnessSelected(naturalness) => {
                self.rating_draft.naturalness = naturalness;
                Task::none()
            }
            Message::AestheticChanged(value) => {
                self.rating_draft.set_aesthetic(value);
                Task::none()
            }
            Message::SortingSelected(sorting) => {
                self.rating_draft.sorting = sorting;
                Task::none()
            }
            Message::NextImage => {
                let Phase::Running(session) = &mut self.phase else {
                    return Task::none();
                };
                if self.rating_draft.is_pristine() {
                    debug!("Rating submitted with all default answers");
                }
                match session.submit_rating(self.rating_draft.take()) {
                    Ok(stage) => self.enter_stage(stage),
                    Err(err) => {
                        warn!("⚠️  Ignored rating submission: {}", err);
                        Task::none()
                    }
                }
            }

            Message::PreviewLoaded(index, result) => {
                // Drop results for an image the participant has already rated
                if self.preview.0 != index {
                    return Task::none();
                }
                self.preview.1 = match result {
                    Ok(handle) => PreviewState::Ready(handle),
                    Err(reason) => PreviewState::Failed(reason),
                };
                Task::none()
            }

            Message::DownloadResults => {
                let Some(records) = self.completed_responses() else {
                    return Task::none();
                };

                // Show the native save dialog
                let target = FileDialog::new()
                    .set_title("Save Survey Responses")
                    .set_file_name(export::RESULTS_FILE_NAME)
                    .add_filter("CSV", &["csv"])
                    .save_file();

                match target {
                    Some(path) => Task::perform(save_results(path, records), Message::ExportFinished),
                    None => Task::none(),
                }
            }
            Message::ExportFinished(result) => {
                self.export_status = Some(match result {
                    Ok(path) => ExportStatus::Saved(path),
                    Err(reason) => {
                        error!("❌ {}", reason);
                        ExportStatus::Failed(reason)
                    }
                });
                Task::none()
            }
        }
    }

    /// Side effects of arriving at a new stage
    fn enter_stage(&mut self, stage: Stage) -> Task<Message> {
        match stage {
            Stage::AwaitingDemographics => Task::none(),
            Stage::RatingImage(index) => {
                let Phase::Running(session) = &self.phase else {
                    return Task::none();
                };
                let Some(entry) = session.current_entry() else {
                    return Task::none();
                };

                self.preview = (index, PreviewState::Loading);
                Task::perform(
                    load_display_image(PathBuf::from(&entry.path), self.config.max_display_size),
                    move |result| Message::PreviewLoaded(index, result),
                )
            }
            Stage::Completed => {
                let Some(records) = self.completed_responses() else {
                    return Task::none();
                };
                self.results = Some(export::to_table(&records));

                // Local copy only when a results file is configured
                match self.config.results_file.clone() {
                    Some(path) => Task::perform(save_results(path, records), Message::ExportFinished),
                    None => Task::none(),
                }
            }
        }
    }

    /// Snapshot of the response log, once the survey is complete
    fn completed_responses(&self) -> Option<Vec<ResponseRecord>> {
        match &self.phase {
            Phase::Running(session) if session.is_complete() => Some(session.responses().to_vec()),
            _ => None,
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        match &self.phase {
            Phase::Loading => ui::screens::loading(&self.config.image_dir),
            Phase::Failed(reason) => ui::screens::startup_failed(reason),
            Phase::Running(session) => match session.stage() {
                Stage::AwaitingDemographics => ui::screens::demographics_form(&self.demographics_draft),
                Stage::RatingImage(index) => {
                    let (Some(entry), Some((position, total))) =
                        (session.catalog().get(index), session.progress())
                    else {
                        return ui::screens::loading(&self.config.image_dir);
                    };
                    ui::screens::rating_form(entry, position, total, &self.rating_draft, &self.preview.1)
                }
                Stage::Completed => match &self.results {
                    Some(table) => ui::screens::completed(table, self.export_status.as_ref()),
                    None => ui::screens::loading(&self.config.image_dir),
                },
            },
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "texture_survey=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = match SurveyConfig::load(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("❌ {}", err);
            std::process::exit(2);
        }
    };

    info!("🎨 Wood Texture Survey starting with images from {}", config.image_dir.display());

    iced::application(TextureSurvey::title, TextureSurvey::update, TextureSurvey::view)
        .theme(TextureSurvey::theme)
        .window_size((1200.0, 1000.0))
        .centered()
        .run_with(move || TextureSurvey::new(config))
}

/// Decode an image off the UI thread and wrap it for iced
async fn load_display_image(path: PathBuf, max_side: u32) -> Result<Handle, String> {
    match catalog::preview::load_preview(path.clone(), max_side).await {
        Ok(preview) => Ok(Handle::from_rgba(preview.width, preview.height, preview.pixels)),
        Err(err) => {
            warn!("⚠️  Could not display {}: {}", path.display(), err);
            Err(err.to_string())
        }
    }
}

/// Write the CSV and report where it went
async fn save_results(path: PathBuf, records: Vec<ResponseRecord>) -> Result<PathBuf, String> {
    export::write_csv(&path, &records)
        .await
        .map(|()| path)
        .map_err(|e| e.to_string())
}
