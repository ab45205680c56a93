//! Gallery presentation: the search bar and the artwork card grid.
//!
//! Both the main displayed list and the favorites section render through
//! the same grid, so favorite toggles behave identically in either one.

use iced::widget::{button, column, container, image, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;

use crate::state::data::Artwork;
use crate::state::gallery::GalleryState;
use crate::Message;

/// Width of a single artwork card
const CARD_WIDTH: f32 = 220.0;

/// Search input plus submit/clear controls and the gallery reset button.
pub fn search_bar(state: &GalleryState) -> Element<'_, Message> {
    let mut controls = row![
        text_input("Search artworks", state.search_term())
            .on_input(Message::SearchTermChanged)
            .on_submit(Message::SearchSubmitted)
            .width(Length::Fixed(320.0)),
        button("Search").on_press(Message::SearchSubmitted),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    // The clear control only appears once something has been typed.
    if !state.search_term().is_empty() {
        controls = controls.push(button("Clear").on_press(Message::SearchCleared));
    }

    controls = controls.push(button("Back to gallery").on_press(Message::BackToGallery));

    controls.into()
}

/// A wrapping grid of artwork cards.
pub fn grid<'a>(
    artworks: &'a [Artwork],
    state: &'a GalleryState,
    thumbnails: &'a HashMap<i64, image::Handle>,
) -> Element<'a, Message> {
    let cards = artworks
        .iter()
        .map(|artwork| card(artwork, state, thumbnails))
        .collect();

    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

/// One artwork card: thumbnail (or placeholder), title, favorite toggle.
/// Clicking the card body opens the detail view.
fn card<'a>(
    artwork: &'a Artwork,
    state: &'a GalleryState,
    thumbnails: &'a HashMap<i64, image::Handle>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnails.get(&artwork.id) {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        None => container(text("No image").size(14))
            .width(Length::Fill)
            .height(Length::Fixed(140.0))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(140.0))
            .into(),
    };

    let heart = if state.is_favorite(artwork) {
        "❤️"
    } else {
        "🤍"
    };

    let body = column![picture, text(&artwork.title).size(16)].spacing(8);

    column![
        button(body)
            .on_press(Message::ArtworkSelected(artwork.clone()))
            .padding(0),
        button(text(format!("{heart} Favorite")).size(14))
            .on_press(Message::FavoriteToggled(artwork.clone())),
    ]
    .spacing(8)
    .width(Length::Fixed(CARD_WIDTH))
    .into()
}
