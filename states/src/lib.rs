//! Typed state registry for the dashboard UI.
//!
//! All client state lives in a [`StateCtx`]: one instance per state type,
//! registered at app construction and looked up by type from widgets and
//! event handlers. The registry is single-threaded: the egui loop owns it,
//! and nothing crosses threads.

#![warn(clippy::all, rust_2018_idioms)]

mod basic_state;
mod ctx;
mod state;

pub use basic_state::Time;
pub use ctx::StateCtx;
pub use state::State;
