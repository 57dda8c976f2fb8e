//! Built-in terminal frontend.

pub mod list_view;
