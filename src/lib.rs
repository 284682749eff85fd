//! Arithmetic quiz with a collectible-animal reward loop.
//!
//! [`puzzles`] holds the pure engine: [`puzzles::choose_next`] picks the
//! easiest uncollected animal and [`puzzles::generate_puzzle`] builds a
//! multiple-choice question for its level. The other modules load content and
//! drive sessions through a headless Bevy app.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod puzzles;
pub mod session;

use bevy::prelude::*;

/// Content, configuration and session plugins.
pub struct QuizPlugins;

impl Plugin for QuizPlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            crate::core::CorePlugin,
            crate::content::ContentPlugin,
            crate::session::SessionPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(crate::debug::DebugPlugin);
    }
}
