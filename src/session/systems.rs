//! Session domain: systems that run turns for the active session.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{Catalog, QuizDefaults};
use crate::core::QuizRng;
use crate::session::events::{
    AnimalCollectedEvent, AnswerEvaluatedEvent, AnswerSubmittedEvent, CatalogExhaustedEvent,
    PuzzleOfferedEvent, PuzzleRequestedEvent,
};
use crate::session::types::{ActiveSession, QuizSession, TurnOutcome};

/// Open the boot session using the name from quiz defaults.
pub(crate) fn start_session(defaults: Res<QuizDefaults>, mut active: ResMut<ActiveSession>) {
    match QuizSession::new(&defaults.session_name) {
        Ok(session) => active.session = session,
        Err(e) => warn!(
            "Invalid session name '{}' ({}), keeping '{}'",
            defaults.session_name,
            e,
            active.session.name()
        ),
    }

    info!("Started quiz session '{}'", active.session.name());
}

/// Check answers against the current turn and record catches.
pub(crate) fn evaluate_answer(
    mut answers: MessageReader<AnswerSubmittedEvent>,
    mut evaluated: MessageWriter<AnswerEvaluatedEvent>,
    mut collected: MessageWriter<AnimalCollectedEvent>,
    catalog: Res<Catalog>,
    mut active: ResMut<ActiveSession>,
) {
    for answer in answers.read() {
        let outcome = match active.session.submit_answer(answer.guess) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Ignoring answer {}: {}", answer.guess, e);
                continue;
            }
        };

        if outcome.newly_collected {
            let (owned, total) = active.session.progress(&catalog);
            info!(
                "Collected '{}' ({}/{})",
                outcome.animal_id, owned, total
            );
            collected.write(AnimalCollectedEvent {
                animal_id: outcome.animal_id.clone(),
                collected: owned,
                total,
            });
        } else if !outcome.correct {
            info!(
                "Wrong answer {} for '{}'",
                outcome.guess, outcome.animal_id
            );
        }

        evaluated.write(AnswerEvaluatedEvent { outcome });
    }
}

/// Choose the next animal and generate its puzzle for each request.
pub(crate) fn offer_next_puzzle(
    mut requests: MessageReader<PuzzleRequestedEvent>,
    mut offered: MessageWriter<PuzzleOfferedEvent>,
    mut exhausted: MessageWriter<CatalogExhaustedEvent>,
    catalog: Res<Catalog>,
    mut quiz_rng: ResMut<QuizRng>,
    mut active: ResMut<ActiveSession>,
) {
    for _ in requests.read() {
        match active.session.next_turn(&catalog, quiz_rng.source()) {
            Ok(TurnOutcome::Offered(turn)) => {
                info!(
                    "Offering '{}': {}",
                    turn.animal_id,
                    turn.puzzle.prompt()
                );
                offered.write(PuzzleOfferedEvent {
                    animal_id: turn.animal_id,
                    animal_name: turn.animal_name,
                    puzzle: turn.puzzle,
                });
            }
            Ok(TurnOutcome::Exhausted) => {
                let collected = active.session.collection().len();
                info!(
                    "Session '{}' has collected every animal ({})",
                    active.session.name(),
                    collected
                );
                exhausted.write(CatalogExhaustedEvent { collected });
            }
            Err(e) => error!("Could not prepare next turn: {}", e),
        }
    }
}
