//! Puzzles domain: arithmetic puzzle synthesis by rejection sampling.

use bevy::prelude::*;

use crate::content::AnimalDef;
use crate::puzzles::random::RandomSource;
use crate::puzzles::types::{
    ANSWER_COUNT, DISTRACTOR_FLOOR, DISTRACTOR_SPREAD_ABOVE, DISTRACTOR_SPREAD_BELOW, DifficultyPolicy,
    MAX_SAMPLING_ATTEMPTS, Puzzle, PuzzleError, SamplingStage,
};

/// Generate a puzzle for the chosen animal, or `None` when there is nothing
/// left to award.
pub fn generate_puzzle<R: RandomSource + ?Sized>(
    animal: Option<&AnimalDef>,
    rng: &mut R,
) -> Result<Option<Puzzle>, PuzzleError> {
    let Some(animal) = animal else {
        return Ok(None);
    };

    generate_for_level(animal.level, rng).map(Some)
}

/// Generate a puzzle whose difficulty matches `level`.
pub fn generate_for_level<R: RandomSource + ?Sized>(
    level: u32,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    let policy = DifficultyPolicy::for_level(level)?;

    let (num1, num2, result) = match policy {
        DifficultyPolicy::Addition {
            max_operand,
            min_sum,
        } => sample_addition(max_operand, min_sum, rng)?,
        DifficultyPolicy::Subtraction {
            max_operand,
            min_diff,
        } => sample_subtraction(max_operand, min_diff, rng)?,
    };

    let operation = policy.operation();
    let answers = build_answers(result, rng)?;

    debug!(
        "Generated level {} puzzle: {} {} {} = {} (answers {:?})",
        level,
        num1,
        operation.symbol(),
        num2,
        result,
        answers
    );

    Ok(Puzzle {
        operation,
        num1,
        num2,
        result,
        answers,
    })
}

/// Redraw both addends until their sum reaches `min_sum`.
fn sample_addition<R: RandomSource + ?Sized>(
    max_operand: u32,
    min_sum: u32,
    rng: &mut R,
) -> Result<(u32, u32, u32), PuzzleError> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let num1 = rng.next_in_range(1, max_operand);
        let num2 = rng.next_in_range(1, max_operand);
        let sum = num1 + num2;
        if sum >= min_sum {
            return Ok((num1, num2, sum));
        }
    }

    Err(PuzzleError::SamplingStalled {
        stage: SamplingStage::Operands,
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

/// Redraw both values until their difference reaches `min_diff`.
/// The larger draw is always the minuend.
fn sample_subtraction<R: RandomSource + ?Sized>(
    max_operand: u32,
    min_diff: u32,
    rng: &mut R,
) -> Result<(u32, u32, u32), PuzzleError> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let a = rng.next_in_range(1, max_operand);
        let b = rng.next_in_range(1, max_operand);
        let minuend = a.max(b);
        let subtrahend = a.min(b);
        let diff = minuend - subtrahend;
        if diff >= min_diff {
            return Ok((minuend, subtrahend, diff));
        }
    }

    Err(PuzzleError::SamplingStalled {
        stage: SamplingStage::Operands,
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

/// Correct result plus unique distractors near it, shuffled.
fn build_answers<R: RandomSource + ?Sized>(
    result: u32,
    rng: &mut R,
) -> Result<Vec<u32>, PuzzleError> {
    let lower_bound = result
        .saturating_sub(DISTRACTOR_SPREAD_BELOW)
        .max(DISTRACTOR_FLOOR);
    let upper_bound = result + DISTRACTOR_SPREAD_ABOVE;

    let mut answers = Vec::with_capacity(ANSWER_COUNT);
    answers.push(result);

    let mut attempts = 0;
    while answers.len() < ANSWER_COUNT {
        if attempts == MAX_SAMPLING_ATTEMPTS {
            return Err(PuzzleError::SamplingStalled {
                stage: SamplingStage::Distractors,
                attempts,
            });
        }
        attempts += 1;

        let candidate = rng.next_in_range(lower_bound, upper_bound);
        if !answers.contains(&candidate) {
            answers.push(candidate);
        }
    }

    rng.shuffle(&mut answers);
    Ok(answers)
}
