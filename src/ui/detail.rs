//! Detail presentation for the selected artwork.

use iced::widget::{button, column, image, row, text};
use iced::{Element, Length};
use std::collections::HashMap;

use crate::state::data::Artwork;
use crate::state::gallery::GalleryState;
use crate::Message;

/// The detail pane: back button, large image, metadata, favorite toggle.
pub fn view<'a>(
    artwork: &'a Artwork,
    state: &'a GalleryState,
    detail_images: &'a HashMap<i64, image::Handle>,
) -> Element<'a, Message> {
    let mut content = column![
        button("Back to gallery").on_press(Message::BackToGallery),
        text(&artwork.title).size(28),
    ]
    .spacing(12);

    // The original UI shows nothing at all for works without a digitized
    // image, so the placeholder only covers the in-flight download.
    if artwork.image_id.is_some() {
        let picture: Element<'a, Message> = match detail_images.get(&artwork.id) {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(600.0))
                .into(),
            None => text("Loading image…").size(14).into(),
        };
        content = content.push(picture);
    }

    content = content
        .push(metadata_row(
            "Artist",
            artwork.artist_title.as_deref(),
            "Unknown",
        ))
        .push(metadata_row(
            "Origin",
            artwork.place_of_origin.as_deref(),
            "Unknown",
        ))
        .push(metadata_row(
            "Dimensions",
            artwork.dimensions.as_deref(),
            "Not available",
        ));

    let (heart, label) = if state.is_favorite(artwork) {
        ("❤️", "Remove from favorites")
    } else {
        ("🤍", "Add to favorites")
    };
    content = content.push(
        button(text(format!("{heart} {label}")))
            .on_press(Message::FavoriteToggled(artwork.clone())),
    );

    content.into()
}

fn metadata_row<'a>(
    label: &'a str,
    value: Option<&'a str>,
    fallback: &'a str,
) -> Element<'a, Message> {
    row![
        text(format!("{label}:")).size(16),
        text(value.unwrap_or(fallback)).size(16),
    ]
    .spacing(6)
    .into()
}
