/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The gallery state machine: catalog, filter, favorites,
///   selection, view mode (gallery.rs)
pub mod data;
pub mod gallery;
