//! Terminal view adapter.
//!
//! Renders store state as text and maps typed commands onto store
//! operations. Holds no catalog logic of its own.

mod command;
mod render;

pub use command::{dispatch, Command, CommandError, Outcome, HELP};
pub use render::{render_card, render_form, render_list, EMPTY_STATE};
