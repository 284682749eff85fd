//! Core domain: configuration and the seeded random source shared by the quiz.

mod resources;
#[cfg(test)]
mod tests;

pub use resources::{
    DATA_DIR_ENV_VAR, DEFAULT_DATA_DIR, QuizConfig, QuizRng, SEED_ENV_VAR,
};

use bevy::prelude::*;

use crate::content::QuizDefaults;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<QuizConfig>()
            .init_resource::<QuizRng>()
            .add_systems(Startup, seed_quiz_rng);
    }
}

/// Reseed the quiz rng once defaults are loaded.
/// Keeps the random default seed when neither env nor defaults fix one.
pub(crate) fn seed_quiz_rng(
    config: Res<QuizConfig>,
    defaults: Res<QuizDefaults>,
    mut quiz_rng: ResMut<QuizRng>,
) {
    if let Some(seed) = config.effective_seed(defaults.seed) {
        *quiz_rng = QuizRng::from_seed(seed);
    }

    info!("Quiz rng seeded with: {}", quiz_rng.seed);
}
