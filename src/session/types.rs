//! Session domain: a player's quiz session, its collection and current turn.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::content::{AnimalDef, Catalog, Collection, QuizDefaults};
use crate::puzzles::{Puzzle, PuzzleError, RandomSource, choose_next, generate_puzzle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session names must contain something other than whitespace.
    EmptyName,
    /// An answer arrived with no puzzle on offer.
    NoActiveTurn,
    Puzzle(PuzzleError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::EmptyName => write!(f, "session name must not be blank"),
            SessionError::NoActiveTurn => write!(f, "no puzzle is awaiting an answer"),
            SessionError::Puzzle(e) => write!(f, "puzzle generation failed: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<PuzzleError> for SessionError {
    fn from(e: PuzzleError) -> Self {
        SessionError::Puzzle(e)
    }
}

/// The animal on offer and the puzzle guarding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub animal_id: String,
    pub animal_name: String,
    pub puzzle: Puzzle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Offered(Turn),
    /// Every catalog animal is already collected.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub animal_id: String,
    pub guess: u32,
    pub correct: bool,
    /// True when the answer added an animal the session did not own yet
    pub newly_collected: bool,
}

/// One catalog animal as shown in the album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlbumEntry<'a> {
    pub animal: &'a AnimalDef,
    pub owned: bool,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    name: String,
    collection: Collection,
    current: Option<Turn>,
}

impl QuizSession {
    /// Start an empty session. Names are trimmed and lowercased.
    pub fn new(name: &str) -> Result<Self, SessionError> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }

        Ok(Self {
            name,
            collection: Collection::new(),
            current: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn current_turn(&self) -> Option<&Turn> {
        self.current.as_ref()
    }

    /// `(owned, total)` over the catalog.
    pub fn progress(&self, catalog: &Catalog) -> (usize, usize) {
        let owned = catalog
            .iter()
            .filter(|animal| self.collection.contains(&animal.id))
            .count();
        (owned, catalog.len())
    }

    /// True once every catalog animal is owned.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        let (owned, total) = self.progress(catalog);
        owned == total
    }

    /// The whole catalog grouped by level (ascending), names sorted within
    /// each level, with owned animals flagged.
    pub fn album<'a>(&self, catalog: &'a Catalog) -> BTreeMap<u32, Vec<AlbumEntry<'a>>> {
        let mut album: BTreeMap<u32, Vec<AlbumEntry<'a>>> = BTreeMap::new();
        for animal in catalog.iter() {
            album.entry(animal.level).or_default().push(AlbumEntry {
                animal,
                owned: self.collection.contains(&animal.id),
            });
        }

        for entries in album.values_mut() {
            entries.sort_by(|a, b| a.animal.name.cmp(&b.animal.name));
        }
        album
    }

    /// Pick the next animal and its puzzle, replacing any unanswered turn.
    pub fn next_turn<R: RandomSource + ?Sized>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<TurnOutcome, SessionError> {
        self.current = None;

        let chosen = choose_next(catalog, &self.collection, rng);
        let puzzle = generate_puzzle(chosen, rng)?;

        match (chosen, puzzle) {
            (Some(animal), Some(puzzle)) => {
                let turn = Turn {
                    animal_id: animal.id.clone(),
                    animal_name: animal.name.clone(),
                    puzzle,
                };
                self.current = Some(turn.clone());
                Ok(TurnOutcome::Offered(turn))
            }
            _ => Ok(TurnOutcome::Exhausted),
        }
    }

    /// Answer the current puzzle. The turn is consumed either way; a correct
    /// guess adds its animal to the collection.
    pub fn submit_answer(&mut self, guess: u32) -> Result<AnswerOutcome, SessionError> {
        let turn = self.current.take().ok_or(SessionError::NoActiveTurn)?;

        let correct = turn.puzzle.is_correct(guess);
        let newly_collected = correct && self.collection.insert(turn.animal_id.clone());

        Ok(AnswerOutcome {
            animal_id: turn.animal_id,
            guess,
            correct,
            newly_collected,
        })
    }
}

/// The session driven by the app.
#[derive(Resource, Debug, Clone)]
pub struct ActiveSession {
    pub session: QuizSession,
}

impl Default for ActiveSession {
    fn default() -> Self {
        Self {
            session: QuizSession {
                name: QuizDefaults::default().session_name,
                collection: Collection::new(),
                current: None,
            },
        }
    }
}
