//! Session container and its external interface.
//!
//! A front end drives a [`Session`] with [`UserAction`]s (or the text
//! commands in [`command`]) and renders the [`SessionSnapshot`] returned in
//! every [`ActionReport`].

pub mod action;
pub mod command;
pub mod container;
pub mod view;

pub use action::{CompletionRecord, GameInput, UserAction};
pub use container::{ActiveGame, Session};
pub use view::{ActionReport, ActiveGameView, GameOutcome, GameView, SessionSnapshot};
