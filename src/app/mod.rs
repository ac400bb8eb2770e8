//! Application state and the gesture dispatch engine.
//!
//! [`AppState`] owns the five datasets, the binding table, the gesture
//! recognizer, and the persistence handles. Its impl is split across files:
//!
//! - `state.rs` - the struct definition and simple accessors
//! - `lifecycle.rs` - construction, restore, save, reset, chart switching
//! - `dispatch.rs` - the fired-gesture to mutation pipeline

mod dispatch;
mod lifecycle;
mod state;

pub use state::AppState;
