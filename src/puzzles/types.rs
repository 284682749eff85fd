//! Puzzles domain: puzzle value types, difficulty policy and errors.

use serde::{Deserialize, Serialize};

/// Number of answers offered per puzzle (one correct, the rest distractors).
pub const ANSWER_COUNT: usize = 4;

/// Distractors are drawn from `[result - DISTRACTOR_SPREAD_BELOW, result + DISTRACTOR_SPREAD_ABOVE]`.
pub const DISTRACTOR_SPREAD_BELOW: u32 = 2;
pub const DISTRACTOR_SPREAD_ABOVE: u32 = 3;
/// Distractors never go below this, for both operations.
pub const DISTRACTOR_FLOOR: u32 = 0;

/// Attempt budget for a single rejection-sampling loop before giving up.
pub const MAX_SAMPLING_ATTEMPTS: u32 = 10_000;

/// Highest level addition is used for.
pub const MAX_ADDITION_LEVEL: u32 = 3;

/// Subtraction difficulty table: `(level, max operand, minimum difference)`.
pub const SUBTRACTION_RANGES: [(u32, u32, u32); 4] = [(4, 6, 1), (5, 8, 2), (6, 10, 3), (7, 12, 4)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
        }
    }
}

/// How a level's operands are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyPolicy {
    /// Operands in `[1, max_operand]`, accepted when the sum reaches `min_sum`.
    Addition { max_operand: u32, min_sum: u32 },
    /// Operands in `[1, max_operand]`, accepted when the difference reaches `min_diff`.
    Subtraction { max_operand: u32, min_diff: u32 },
}

impl DifficultyPolicy {
    /// Look up the policy for a level. Levels outside the table are rejected.
    pub fn for_level(level: u32) -> Result<Self, PuzzleError> {
        if (1..=MAX_ADDITION_LEVEL).contains(&level) {
            return Ok(DifficultyPolicy::Addition {
                max_operand: level + 2,
                min_sum: level * 2,
            });
        }

        SUBTRACTION_RANGES
            .iter()
            .find(|(table_level, _, _)| *table_level == level)
            .map(|&(_, max_operand, min_diff)| DifficultyPolicy::Subtraction {
                max_operand,
                min_diff,
            })
            .ok_or(PuzzleError::LevelOutOfRange { level })
    }

    pub fn operation(&self) -> Operation {
        match self {
            DifficultyPolicy::Addition { .. } => Operation::Addition,
            DifficultyPolicy::Subtraction { .. } => Operation::Subtraction,
        }
    }
}

/// One generated arithmetic question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub operation: Operation,
    pub num1: u32,
    pub num2: u32,
    pub result: u32,
    /// Candidate answers in presentation order; contains `result` exactly once
    pub answers: Vec<u32>,
}

impl Puzzle {
    pub fn is_correct(&self, guess: u32) -> bool {
        guess == self.result
    }

    /// Answers other than the correct result.
    pub fn distractors(&self) -> impl Iterator<Item = u32> + '_ {
        self.answers
            .iter()
            .copied()
            .filter(move |answer| *answer != self.result)
    }

    /// Question text, e.g. `"4 + 5 = ?"`.
    pub fn prompt(&self) -> String {
        format!(
            "{} {} {} = ?",
            self.num1,
            self.operation.symbol(),
            self.num2
        )
    }
}

/// Sampling loop that ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingStage {
    Operands,
    Distractors,
}

impl std::fmt::Display for SamplingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplingStage::Operands => write!(f, "operands"),
            SamplingStage::Distractors => write!(f, "distractors"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The level has no addition or subtraction policy.
    LevelOutOfRange { level: u32 },
    /// A rejection loop exhausted its attempt budget.
    SamplingStalled { stage: SamplingStage, attempts: u32 },
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PuzzleError::LevelOutOfRange { level } => {
                write!(f, "level {} has no difficulty policy (expected 1-7)", level)
            }
            PuzzleError::SamplingStalled { stage, attempts } => {
                write!(
                    f,
                    "sampling {} gave up after {} attempts",
                    stage, attempts
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {}
