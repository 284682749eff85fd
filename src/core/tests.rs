//! Core domain: tests for configuration overrides and rng seeding.

use std::path::PathBuf;

use super::{DEFAULT_DATA_DIR, QuizConfig, QuizRng};
use crate::puzzles::generate_for_level;

#[test]
fn test_config_defaults() {
    let config = QuizConfig::from_vars(None, None);
    assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    assert_eq!(config.seed_override, None);
}

#[test]
fn test_config_reads_overrides() {
    let config = QuizConfig::from_vars(Some("/tmp/quiz".to_string()), Some(" 42 ".to_string()));
    assert_eq!(config.data_dir, PathBuf::from("/tmp/quiz"));
    assert_eq!(config.seed_override, Some(42));
}

#[test]
fn test_config_ignores_bad_overrides() {
    let config = QuizConfig::from_vars(Some("   ".to_string()), Some("lucky".to_string()));
    assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    assert_eq!(config.seed_override, None);
}

#[test]
fn test_seed_override_beats_configured_seed() {
    let overridden = QuizConfig {
        seed_override: Some(1),
        ..QuizConfig::default()
    };
    assert_eq!(overridden.effective_seed(Some(2)), Some(1));
    assert_eq!(QuizConfig::default().effective_seed(Some(2)), Some(2));
    assert_eq!(QuizConfig::default().effective_seed(None), None);
}

#[test]
fn test_quiz_rng_is_reproducible() {
    let mut first = QuizRng::from_seed(99);
    let mut second = QuizRng::from_seed(99);

    for level in 1..=7 {
        assert_eq!(
            generate_for_level(level, first.source()),
            generate_for_level(level, second.source())
        );
    }
}
