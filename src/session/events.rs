//! Session domain: messages for requesting, offering and answering puzzles.

use bevy::ecs::message::Message;

use crate::puzzles::Puzzle;
use crate::session::types::AnswerOutcome;

/// Ask for the next puzzle for the active session
#[derive(Debug, Default)]
pub struct PuzzleRequestedEvent;

impl Message for PuzzleRequestedEvent {}

/// A puzzle is on offer for the given animal
#[derive(Debug, Clone)]
pub struct PuzzleOfferedEvent {
    pub animal_id: String,
    pub animal_name: String,
    pub puzzle: Puzzle,
}

impl Message for PuzzleOfferedEvent {}

/// Nothing is left to award
#[derive(Debug, Clone)]
pub struct CatalogExhaustedEvent {
    pub collected: usize,
}

impl Message for CatalogExhaustedEvent {}

/// Player's answer to the current puzzle
#[derive(Debug, Clone)]
pub struct AnswerSubmittedEvent {
    pub guess: u32,
}

impl Message for AnswerSubmittedEvent {}

#[derive(Debug, Clone)]
pub struct AnswerEvaluatedEvent {
    pub outcome: AnswerOutcome,
}

impl Message for AnswerEvaluatedEvent {}

/// Fired when a correct answer adds a new animal to the collection
#[derive(Debug, Clone)]
pub struct AnimalCollectedEvent {
    pub animal_id: String,
    pub collected: usize,
    pub total: usize,
}

impl Message for AnimalCollectedEvent {}
