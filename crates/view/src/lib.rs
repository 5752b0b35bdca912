//! Presentation layer for the Nova chat client.
//!
//! [`render`] turns a [`ChatState`](ncore::ChatState) into a [`View`] tree;
//! [`paint`] writes that tree to a terminal.

pub use {
    render::{MENU, bubble, render},
    term::paint,
    tree::{Bubble, LOW_CONFIDENCE_NOTE, MenuItem, Node, View},
};

mod render;
mod term;
mod tree;
