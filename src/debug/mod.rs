//! Debug mode for fast iteration and testing.
//!
//! Features:
//! - Log the correct answer of every offered puzzle
//! - Log collection progress and the rng seed for reproducibility

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::QuizRng;
use crate::session::{AnimalCollectedEvent, CatalogExhaustedEvent, PuzzleOfferedEvent};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Puzzles offered since boot
    pub puzzles_offered: u32,
    /// Whether the seed has been reported yet
    pub seed_reported: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, log_debug_turns);
    }
}

fn log_debug_turns(
    mut offered: MessageReader<PuzzleOfferedEvent>,
    mut collected: MessageReader<AnimalCollectedEvent>,
    mut exhausted: MessageReader<CatalogExhaustedEvent>,
    quiz_rng: Res<QuizRng>,
    mut debug_state: ResMut<DebugState>,
) {
    if !debug_state.seed_reported {
        info!("[DEBUG] Current seed: {}", quiz_rng.seed);
        debug_state.seed_reported = true;
    }

    for event in offered.read() {
        debug_state.puzzles_offered += 1;
        info!(
            "[DEBUG] Puzzle #{} for '{}': {} -> {} (answers {:?})",
            debug_state.puzzles_offered,
            event.animal_id,
            event.puzzle.prompt(),
            event.puzzle.result,
            event.puzzle.answers
        );
    }

    for event in collected.read() {
        info!(
            "[DEBUG] Collection progress: {}/{} (latest '{}')",
            event.collected, event.total, event.animal_id
        );
    }

    for event in exhausted.read() {
        info!(
            "[DEBUG] Catalog exhausted after {} puzzles, {} collected",
            debug_state.puzzles_offered, event.collected
        );
    }
}
