//! Movement walker: replay, ordering, and location derivation

pub mod derive;
pub mod order;
pub mod walk;

pub use derive::{stamp_turn, stamp_turns};
pub use order::order_units;
pub use walk::{walk_turns, Walker};
