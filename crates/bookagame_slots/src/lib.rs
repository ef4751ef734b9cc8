// --- File: crates/bookagame_slots/src/lib.rs ---
pub mod selection;
#[cfg(test)]
mod selection_proptest;

pub use selection::{IgnoreReason, SelectionState, SlotSelector, TapOutcome};
