//! Library exports for embedding sketchparty sessions.
//!
//! Exposes the session state machine alongside the supporting modules it
//! relies on so that host shells (native frontends, bots, integration
//! tests) can drive a game without going through the demo binary.

pub mod config;
pub mod draw;
pub mod game;
pub mod ink;
pub mod util;

pub use config::Config;
pub use game::{Session, SessionEvent};
