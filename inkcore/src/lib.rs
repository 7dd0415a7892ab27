//! inkcore — shared library for the inkread article reader

pub mod theme;
pub mod widgets;

pub use theme::ReaderTheme;
