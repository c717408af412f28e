//! Ports (trait boundaries) for external collaborators.
//!
//! Training observation and match playback are defined here as traits owned
//! by the domain; adapters implement them.

pub mod observer;
pub mod renderer;

pub use observer::Observer;
pub use renderer::{MatchRenderer, TextRenderer};
