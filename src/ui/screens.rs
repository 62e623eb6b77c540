/// One view per survey stage
///
/// These functions only render; every interaction comes back to
/// `TextureSurvey::update` as a `Message`.
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, column, container, pick_list, scrollable, slider, text, text_input, Column,
};
use iced::{Alignment, Color, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

use crate::export::Table;
use crate::state::data::{Aesthetic, CatalogEntry, Gender, Naturalness, Sorting, WoodExperience};
use crate::state::forms::{DemographicsDraft, RatingDraft};
use crate::ui::table::results_table;
use crate::Message;

const ERROR_COLOR: Color = Color { r: 0.9, g: 0.35, b: 0.35, a: 1.0 };
const SUCCESS_COLOR: Color = Color { r: 0.4, g: 0.8, b: 0.5, a: 1.0 };

/// Height reserved for the texture being rated
const IMAGE_HEIGHT: f32 = 560.0;

/// What the rating screen can show for the current image
#[derive(Debug, Clone)]
pub enum PreviewState {
    Loading,
    Ready(Handle),
    Failed(String),
}

/// Center a screen's content horizontally; tall screens scroll
fn screen<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    scrollable(container(content.spacing(20).padding(40).max_width(1100)).center_x(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn labeled<'a>(label: &'a str, widget: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    column![text(label).size(16), widget.into()].spacing(6)
}

pub fn loading(image_dir: &Path) -> Element<'_, Message> {
    screen(column![
        text("Wood Texture Survey").size(36),
        text(format!("Loading images from {}...", image_dir.display())).size(16),
    ])
}

pub fn startup_failed(message: &str) -> Element<'_, Message> {
    screen(column![
        text("The survey cannot start").size(36),
        text(message).size(16).color(ERROR_COLOR),
        text("Check the image folder setting and restart the survey.").size(14),
    ])
}

pub fn demographics_form(draft: &DemographicsDraft) -> Element<'_, Message> {
    screen(column![
        text("Demographic Information").size(36),
        labeled(
            "Age",
            text_input("Age", &draft.age)
                .on_input(Message::AgeChanged)
                .on_submit(Message::StartSurvey)
                .padding(8),
        ),
        labeled(
            "Gender",
            pick_list(Gender::ALL, Some(draft.gender), Message::GenderSelected),
        ),
        labeled(
            "Wood Experience",
            pick_list(
                WoodExperience::ALL,
                Some(draft.wood_experience),
                Message::ExperienceSelected,
            ),
        ),
        button("Start Survey")
            .on_press(Message::StartSurvey)
            .padding(10),
    ])
}

pub fn rating_form<'a>(
    entry: &'a CatalogEntry,
    position: usize,
    total: usize,
    draft: &RatingDraft,
    preview: &'a PreviewState,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match preview {
        PreviewState::Loading => container(text("Loading image...").size(16))
            .height(Length::Fixed(IMAGE_HEIGHT))
            .center_y(Length::Fixed(IMAGE_HEIGHT))
            .into(),
        PreviewState::Ready(handle) => Image::<Handle>::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .into(),
        PreviewState::Failed(reason) => container(
            text(format!("⚠️ Image could not be displayed: {reason}"))
                .size(16)
                .color(ERROR_COLOR),
        )
        .height(Length::Fixed(IMAGE_HEIGHT))
        .center_y(Length::Fixed(IMAGE_HEIGHT))
        .into(),
    };

    let aesthetic = draft.aesthetic.value();

    screen(column![
        text(format!("Image {position} of {total}")).size(36),
        column![picture, text(entry.filename.as_str()).size(14)]
            .spacing(6)
            .align_x(Alignment::Center),
        labeled(
            "How natural does the texture appear to you?",
            pick_list(Naturalness::ALL, Some(draft.naturalness), Message::NaturalnessSelected),
        ),
        labeled(
            "How much do you like the appearance? (0–6)",
            column![
                slider(Aesthetic::MIN..=Aesthetic::MAX, aesthetic, Message::AestheticChanged),
                text(aesthetic.to_string()).size(14),
            ]
            .spacing(4)
            .align_x(Alignment::Center),
        ),
        labeled(
            "How would you rate the sorting of the texture?",
            pick_list(Sorting::ALL, Some(draft.sorting), Message::SortingSelected),
        ),
        button("Next").on_press(Message::NextImage).padding(10),
    ])
}

pub fn completed<'a>(table: &'a Table, export_status: Option<&'a ExportStatus>) -> Element<'a, Message> {
    let status: Element<'a, Message> = match export_status {
        None => text("").into(),
        Some(ExportStatus::Saved(path)) => text(format!("💾 Saved to {}", path.display()))
            .size(14)
            .color(SUCCESS_COLOR)
            .into(),
        Some(ExportStatus::Failed(reason)) => text(format!("⚠️ {reason}"))
            .size(14)
            .color(ERROR_COLOR)
            .into(),
    };

    screen(column![
        text("✅ Thank you! Your responses have been recorded.")
            .size(28)
            .color(SUCCESS_COLOR),
        text("Your Results:").size(22),
        results_table(table),
        button("Download Responses")
            .on_press(Message::DownloadResults)
            .padding(10),
        status,
    ])
}

/// Outcome of the last results write, shown under the download button
#[derive(Debug, Clone)]
pub enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}
