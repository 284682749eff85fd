//! Core domain: shared resources for configuration and randomness.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use crate::puzzles::{RandomSource, RngSource};

pub const DEFAULT_DATA_DIR: &str = "assets/data";
pub const SEED_ENV_VAR: &str = "CRITTER_QUIZ_SEED";
pub const DATA_DIR_ENV_VAR: &str = "CRITTER_QUIZ_DATA";

/// Where content is loaded from, and an optional seed that beats the one in
/// quiz_defaults.ron.
#[derive(Resource, Debug, Clone)]
pub struct QuizConfig {
    pub data_dir: PathBuf,
    pub seed_override: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed_override: None,
        }
    }
}

impl QuizConfig {
    /// Read overrides from `CRITTER_QUIZ_DATA` and `CRITTER_QUIZ_SEED`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(DATA_DIR_ENV_VAR).ok(),
            std::env::var(SEED_ENV_VAR).ok(),
        )
    }

    pub fn from_vars(data_dir: Option<String>, seed: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = data_dir.filter(|dir| !dir.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed_override = Some(seed),
                Err(_) => warn!("Ignoring {}='{}': not a u64", SEED_ENV_VAR, raw),
            }
        }

        config
    }

    /// Seed to use given the one configured in quiz defaults.
    pub fn effective_seed(&self, configured: Option<u64>) -> Option<u64> {
        self.seed_override.or(configured)
    }
}

/// Session-wide random source. Every selection and puzzle draw goes through it.
#[derive(Resource, Debug, Clone)]
pub struct QuizRng {
    pub seed: u64,
    source: RngSource<ChaCha8Rng>,
}

impl Default for QuizRng {
    fn default() -> Self {
        Self::from_seed(rand::rng().random())
    }
}

impl QuizRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            source: RngSource::seeded(seed),
        }
    }

    pub fn source(&mut self) -> &mut impl RandomSource {
        &mut self.source
    }
}
