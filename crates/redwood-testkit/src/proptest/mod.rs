//! Proptest strategies for redwood property-based testing.

pub mod strategies;

pub use strategies::{
    strategy_ascending_run, strategy_descending_run, strategy_duplicate_heavy,
    strategy_insert_sequence, strategy_mixed_sequence, strategy_sawtooth_run,
};
