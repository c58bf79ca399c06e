//! Turn-by-turn coordination: parses the wire state, lazily initializes
//! the worker topology on the first turn observed, plans newly seen
//! pearls, and dispatches every worker for its action.
//!
//! [`Coordinator::process`] is the crate's single exposed operation; the
//! rest of the module tree exists to support it.

mod coordinator;
mod wire;

pub use coordinator::Coordinator;
pub use wire::{WirePearl, WireState, WireWorker};
