//! Puzzles domain: reward selection and arithmetic puzzle generation.
//!
//! Everything here is pure: callers own the catalog, the collection and the
//! random source, and decide what to do with the result.

mod generator;
mod random;
mod selector;
mod types;

pub use generator::{generate_for_level, generate_puzzle};
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use selector::choose_next;
pub use types::{
    ANSWER_COUNT, DISTRACTOR_FLOOR, DifficultyPolicy, MAX_SAMPLING_ATTEMPTS, Operation, Puzzle, PuzzleError,
    SUBTRACTION_RANGES, SamplingStage,
};
