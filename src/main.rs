use iced::widget::{button, column, container, image, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

mod api;
mod state;
mod ui;

use api::ApiError;
use state::data::Artwork;
use state::gallery::{GalleryState, ViewMode};

/// Main application state
struct ArticGallery {
    /// The gallery state machine: catalog, filter, favorites, selection
    state: GalleryState,
    /// Card-sized images downloaded so far, keyed by artwork id
    thumbnails: HashMap<i64, image::Handle>,
    /// Detail-sized images downloaded so far, keyed by artwork id
    detail_images: HashMap<i64, image::Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The startup catalog fetch finished
    CatalogLoaded(Result<Vec<Artwork>, ApiError>),
    /// User typed in the search input
    SearchTermChanged(String),
    /// User pressed the search button or hit enter in the input
    SearchSubmitted,
    /// User pressed the clear button next to the search input
    SearchCleared,
    /// User asked to return to the plain gallery
    BackToGallery,
    /// User clicked an artwork card
    ArtworkSelected(Artwork),
    /// User toggled a favorite, from a card or from the detail view
    FavoriteToggled(Artwork),
    /// User toggled the favorites section
    FavoritesViewToggled,
    /// A card image download finished
    ThumbnailLoaded(i64, Result<Vec<u8>, ApiError>),
    /// A detail image download finished
    DetailImageLoaded(i64, Result<Vec<u8>, ApiError>),
}

impl ArticGallery {
    /// Create a new instance of the application and kick off the one
    /// catalog fetch of the session.
    fn new() -> (Self, Task<Message>) {
        tracing::info!("fetching the startup artwork batch");

        (
            ArticGallery {
                state: GalleryState::new(),
                thumbnails: HashMap::new(),
                detail_images: HashMap::new(),
                status: String::from("Loading the collection…"),
            },
            Task::perform(api::fetch_artworks(), Message::CatalogLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(artworks)) => {
                tracing::info!(count = artworks.len(), "catalog loaded");
                self.state.replace_catalog(artworks);
                self.status = format!(
                    "{} artworks in the collection.",
                    self.state.catalog().len()
                );
                fetch_thumbnails(self.state.catalog())
            }
            Message::CatalogLoaded(Err(error)) => {
                // The failure only goes to the log; the UI keeps rendering
                // the empty catalog with no error banner and no retry.
                tracing::warn!(%error, "failed to load the artwork catalog");
                self.status = String::from("Ready.");
                Task::none()
            }
            Message::SearchTermChanged(term) => {
                self.state.set_search_term(term);
                Task::none()
            }
            Message::SearchSubmitted => {
                self.state.apply_search();
                Task::none()
            }
            Message::SearchCleared => {
                self.state.clear_search();
                Task::none()
            }
            Message::BackToGallery => {
                self.state.back();
                Task::none()
            }
            Message::ArtworkSelected(artwork) => {
                let task = fetch_detail_image(&artwork, &self.detail_images);
                self.state.select(artwork);
                task
            }
            Message::FavoriteToggled(artwork) => {
                self.state.toggle_favorite(&artwork);
                Task::none()
            }
            Message::FavoritesViewToggled => {
                self.state.toggle_favorites_view();
                Task::none()
            }
            Message::ThumbnailLoaded(id, Ok(bytes)) => {
                self.thumbnails.insert(id, image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::ThumbnailLoaded(id, Err(error)) => {
                // The card keeps its textual placeholder.
                tracing::debug!(id, %error, "thumbnail download failed");
                Task::none()
            }
            Message::DetailImageLoaded(id, Ok(bytes)) => {
                self.detail_images
                    .insert(id, image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::DetailImageLoaded(id, Err(error)) => {
                tracing::debug!(id, %error, "detail image download failed");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content = column![
            text("Art Gallery").size(40),
            ui::gallery::search_bar(&self.state),
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        // Detail view replaces the gallery grid; the favorites section
        // below is independent of both.
        content = match self.state.selected() {
            Some(artwork) => {
                content.push(ui::detail::view(artwork, &self.state, &self.detail_images))
            }
            None => content.push(ui::gallery::grid(
                self.state.displayed(),
                &self.state,
                &self.thumbnails,
            )),
        };

        let favorites_label = match self.state.view_mode() {
            ViewMode::Favorites => "Back to the gallery",
            ViewMode::Gallery => "View my favorites",
        };
        content = content.push(button(favorites_label).on_press(Message::FavoritesViewToggled));

        if self.state.view_mode() == ViewMode::Favorites {
            content = content.push(text("My favorites").size(24));
            content = content.push(ui::gallery::grid(
                self.state.favorites(),
                &self.state,
                &self.thumbnails,
            ));
        }

        content = content.push(text(&self.status).size(14));

        scrollable(
            container(content)
                .width(Length::Fill)
                .padding(24)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("artic_gallery=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    iced::application("Art Gallery", ArticGallery::update, ArticGallery::view)
        .theme(ArticGallery::theme)
        .centered()
        .run_with(ArticGallery::new)
}

/// Start a card image download for every artwork that has one.
fn fetch_thumbnails(artworks: &[Artwork]) -> Task<Message> {
    let tasks: Vec<Task<Message>> = artworks
        .iter()
        .filter_map(|artwork| {
            let id = artwork.id;
            artwork.image_id.as_ref().map(|image_id| {
                let url = api::iiif::thumbnail_url(image_id);
                Task::perform(api::fetch_image(url), move |result| {
                    Message::ThumbnailLoaded(id, result)
                })
            })
        })
        .collect();

    Task::batch(tasks)
}

/// Start a detail image download unless it is already cached or the
/// artwork has no image at all.
fn fetch_detail_image(
    artwork: &Artwork,
    cached: &HashMap<i64, image::Handle>,
) -> Task<Message> {
    let Some(image_id) = artwork.image_id.as_ref() else {
        return Task::none();
    };
    if cached.contains_key(&artwork.id) {
        return Task::none();
    }

    let id = artwork.id;
    let url = api::iiif::detail_url(image_id);
    Task::perform(api::fetch_image(url), move |result| {
        Message::DetailImageLoaded(id, result)
    })
}
