//! Presentation layer: turning core state into terminal text.

pub mod view;

pub use view::BoardView;
