//! View-state controller: an explicit state struct plus a pure reducer.
//!
//! All state transitions go through [`update`], which returns a [`Cmd`]
//! describing any request the runtime should dispatch. The reducer performs
//! zero I/O, so the whole interaction contract is testable in isolation.

pub mod state;
pub mod update;

pub use state::{AppState, Phase};
pub use update::{update, Cmd, Msg};
