/// Gallery browsing state
///
/// This is the whole application state apart from rendering caches:
/// the fetched catalog, the displayed (filtered) list, the search term,
/// the favorites list, the current selection, and the view mode. All
/// transitions are synchronous total functions so the state machine is
/// testable without any rendering layer.
use super::data::Artwork;

/// Which list the gallery section of the window is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The catalog-derived displayed list
    Gallery,
    /// The user's favorites
    Favorites,
}

/// Application state for the gallery browser.
///
/// Invariants maintained by the methods below:
/// - `displayed` is always a subsequence of `catalog` and equals `catalog`
///   whenever `search_term` is empty and a search has been applied.
/// - `favorites` holds at most one entry per artwork id.
/// - The search term only affects `displayed` when `apply_search` runs;
///   typing alone never refilters (filter-on-submit).
#[derive(Debug, Clone)]
pub struct GalleryState {
    /// The full batch fetched at startup, empty until the load completes
    catalog: Vec<Artwork>,
    /// The currently rendered subset, derived from `catalog`
    displayed: Vec<Artwork>,
    /// Raw search input, not yet applied to `displayed`
    search_term: String,
    /// User-curated favorites, lifecycle independent of `catalog`
    favorites: Vec<Artwork>,
    /// The artwork open in the detail view, if any
    selected: Option<Artwork>,
    /// Gallery or favorites presentation
    view_mode: ViewMode,
}

impl GalleryState {
    /// Create the initial state: empty catalog, gallery mode, nothing
    /// selected. This is what renders while the startup fetch is in flight.
    pub fn new() -> Self {
        GalleryState {
            catalog: Vec::new(),
            displayed: Vec::new(),
            search_term: String::new(),
            favorites: Vec::new(),
            selected: None,
            view_mode: ViewMode::Gallery,
        }
    }

    pub fn catalog(&self) -> &[Artwork] {
        &self.catalog
    }

    pub fn displayed(&self) -> &[Artwork] {
        &self.displayed
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn favorites(&self) -> &[Artwork] {
        &self.favorites
    }

    pub fn selected(&self) -> Option<&Artwork> {
        self.selected.as_ref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Replace the catalog with a freshly fetched batch.
    ///
    /// The displayed list is reset to the full new catalog; a typed search
    /// term is kept but not re-applied. Favorites are deliberately not
    /// pruned, even if a favorited id no longer appears in the new batch.
    pub fn replace_catalog(&mut self, artworks: Vec<Artwork>) {
        self.catalog = artworks;
        self.displayed = self.catalog.clone();
    }

    /// Update the raw search input. Does not touch the displayed list.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    /// Filter the displayed list by the current search term.
    ///
    /// Case-insensitive substring match on the title, preserving catalog
    /// order. An empty term restores the full catalog; no match yields an
    /// empty list. Empty titles never match a non-empty term.
    pub fn apply_search(&mut self) {
        if self.search_term.is_empty() {
            self.displayed = self.catalog.clone();
        } else {
            let needle = self.search_term.to_lowercase();
            self.displayed = self
                .catalog
                .iter()
                .filter(|artwork| artwork.title.to_lowercase().contains(&needle))
                .cloned()
                .collect();
        }
    }

    /// Clear the search term and restore the full catalog.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.displayed = self.catalog.clone();
    }

    /// Toggle membership of an artwork in the favorites list.
    ///
    /// Keyed by id, so toggling from the gallery and from the favorites
    /// section act on the same entry. Toggling twice restores the prior
    /// membership.
    pub fn toggle_favorite(&mut self, artwork: &Artwork) {
        if let Some(pos) = self.favorites.iter().position(|fav| fav.id == artwork.id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(artwork.clone());
        }
    }

    /// Whether an artwork is currently favorited, by id.
    pub fn is_favorite(&self, artwork: &Artwork) -> bool {
        self.favorites.iter().any(|fav| fav.id == artwork.id)
    }

    /// Open the detail view for an artwork. The view mode is unchanged, so
    /// leaving the detail view can land back on the favorites section.
    pub fn select(&mut self, artwork: Artwork) {
        self.selected = Some(artwork);
    }

    /// Return to the plain gallery.
    ///
    /// This is a full reset, matching the observed behavior of the original
    /// UI: the selection and search term are cleared, the displayed list is
    /// restored to the full catalog, and the view mode is forced back to
    /// `Gallery` even if the detail view was opened from the favorites
    /// section.
    pub fn back(&mut self) {
        self.selected = None;
        self.view_mode = ViewMode::Gallery;
        self.clear_search();
    }

    /// Flip between the gallery and favorites presentations. Selection,
    /// search term, and displayed list are untouched.
    pub fn toggle_favorites_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Gallery => ViewMode::Favorites,
            ViewMode::Favorites => ViewMode::Gallery,
        };
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}
