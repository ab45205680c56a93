//! Rendering glue on top of the gallery state. Nothing in here mutates
//! state; views only read it and emit messages.

pub mod detail;
pub mod gallery;
