//! Core model – slide deck, scoring demo, static content and the display tree.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod content;
pub mod deck;
pub mod scoring;
pub mod view;
