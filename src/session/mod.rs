//! Session domain: the caller side of the quiz engine.
//!
//! Owns the player's collection, asks the engine for turns and decides
//! whether an answer earns the animal.

mod events;
mod systems;
#[cfg(test)]
mod tests;
mod types;

pub use events::{
    AnimalCollectedEvent, AnswerEvaluatedEvent, AnswerSubmittedEvent, CatalogExhaustedEvent,
    PuzzleOfferedEvent, PuzzleRequestedEvent,
};
pub use types::{
    ActiveSession, AlbumEntry, AnswerOutcome, QuizSession, SessionError, Turn, TurnOutcome,
};

use bevy::prelude::*;

use crate::core::seed_quiz_rng;
use crate::session::systems::{evaluate_answer, offer_next_puzzle, start_session};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveSession>()
            .add_message::<PuzzleRequestedEvent>()
            .add_message::<PuzzleOfferedEvent>()
            .add_message::<CatalogExhaustedEvent>()
            .add_message::<AnswerSubmittedEvent>()
            .add_message::<AnswerEvaluatedEvent>()
            .add_message::<AnimalCollectedEvent>()
            .add_systems(Startup, start_session.after(seed_quiz_rng))
            .add_systems(Update, (evaluate_answer, offer_next_puzzle).chain());
    }
}
