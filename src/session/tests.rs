//! Session domain: tests for turns, answers and the message-driven app flow.

use std::path::Path;

use bevy::prelude::*;

use super::{
    ActiveSession, AnswerSubmittedEvent, PuzzleRequestedEvent, QuizSession, SessionError,
    TurnOutcome,
};
use crate::QuizPlugins;
use crate::content::{AnimalDef, AnimalGroup, Catalog, Habitat};
use crate::core::{QuizConfig, QuizRng};
use crate::puzzles::{Operation, PuzzleError, RngSource, ScriptedRandom};

fn animal(id: &str, level: u32) -> AnimalDef {
    AnimalDef {
        id: id.to_string(),
        name: id.to_uppercase(),
        level,
        group: AnimalGroup::Reptile,
        habitat: Habitat::Land,
    }
}

fn quiz_app(seed: u64) -> App {
    let mut app = App::new();
    app.insert_resource(QuizConfig {
        data_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data"),
        seed_override: Some(seed),
    })
    .add_plugins(QuizPlugins);
    app.update();
    app
}

fn session(app: &App) -> &QuizSession {
    &app.world().resource::<ActiveSession>().session
}

// -----------------------------------------------------------------------------
// QuizSession tests
// -----------------------------------------------------------------------------

#[test]
fn test_session_name_is_normalized() {
    let session = QuizSession::new("  FooBar ").expect("non-blank name");
    assert_eq!(session.name(), "foobar");
    assert!(session.collection().is_empty());
    assert!(session.current_turn().is_none());
}

#[test]
fn test_session_rejects_blank_name() {
    assert_eq!(QuizSession::new("   ").err(), Some(SessionError::EmptyName));
}

#[test]
fn test_answer_without_turn_is_rejected() {
    let mut session = QuizSession::new("solo").expect("non-blank name");
    assert_eq!(session.submit_answer(3), Err(SessionError::NoActiveTurn));
}

#[test]
fn test_correct_answer_collects_animal() {
    let catalog = Catalog::from_animals([animal("frog", 1)]);
    let mut session = QuizSession::new("player").expect("non-blank name");
    // Tie-break 0, operands 1 + 1, distractors 0, 3, 4
    let mut rng = ScriptedRandom::new([0, 1, 1, 0, 3, 4]);

    let TurnOutcome::Offered(turn) = session.next_turn(&catalog, &mut rng).expect("turn") else {
        panic!("catalog is not exhausted");
    };
    assert_eq!(turn.animal_id, "frog");
    assert_eq!(turn.puzzle.operation, Operation::Addition);
    assert_eq!(turn.puzzle.answers, vec![2, 0, 3, 4]);
    assert_eq!(session.current_turn(), Some(&turn));

    let answer = session.submit_answer(2).expect("turn pending");
    assert!(answer.correct);
    assert!(answer.newly_collected);
    assert!(session.collection().contains("frog"));
    assert!(session.current_turn().is_none());
    assert_eq!(session.progress(&catalog), (1, 1));

    assert_eq!(
        session.next_turn(&catalog, &mut rng),
        Ok(TurnOutcome::Exhausted)
    );
}

#[test]
fn test_wrong_answer_consumes_turn_without_collecting() {
    let catalog = Catalog::from_animals([animal("frog", 1), animal("newt", 2)]);
    let mut session = QuizSession::new("player").expect("non-blank name");
    let mut rng = RngSource::seeded(9);

    let TurnOutcome::Offered(turn) = session.next_turn(&catalog, &mut rng).expect("turn") else {
        panic!("catalog is not exhausted");
    };
    let wrong = turn.puzzle.distractors().next().expect("has distractors");

    let answer = session.submit_answer(wrong).expect("turn pending");
    assert!(!answer.correct);
    assert!(!answer.newly_collected);
    assert!(session.collection().is_empty());
    assert_eq!(session.submit_answer(wrong), Err(SessionError::NoActiveTurn));
}

#[test]
fn test_unmapped_level_surfaces_as_error() {
    let catalog = Catalog::from_animals([animal("dragon", 9)]);
    let mut session = QuizSession::new("player").expect("non-blank name");
    let mut rng = RngSource::seeded(1);

    assert_eq!(
        session.next_turn(&catalog, &mut rng),
        Err(SessionError::Puzzle(PuzzleError::LevelOutOfRange { level: 9 }))
    );
    assert!(session.current_turn().is_none());
}

fn win_frog(session: &mut QuizSession, catalog: &Catalog) {
    // Tie-break 0, operands 1 + 1, distractors 0, 3, 4
    let mut rng = ScriptedRandom::new([0, 1, 1, 0, 3, 4]);
    let TurnOutcome::Offered(turn) = session.next_turn(catalog, &mut rng).expect("turn") else {
        panic!("catalog is not exhausted");
    };
    assert_eq!(turn.animal_id, "frog");
    assert!(session.submit_answer(2).expect("turn pending").correct);
}

#[test]
fn test_album_groups_by_level_and_sorts_names() {
    let catalog = Catalog::from_animals([
        animal("newt", 2),
        animal("frog", 1),
        animal("bat", 3),
        animal("ant", 2),
    ]);
    let mut session = QuizSession::new("player").expect("non-blank name");
    win_frog(&mut session, &catalog);

    let listed: Vec<(u32, Vec<(&str, bool)>)> = session
        .album(&catalog)
        .into_iter()
        .map(|(level, entries)| {
            let names = entries
                .into_iter()
                .map(|entry| (entry.animal.name.as_str(), entry.owned))
                .collect();
            (level, names)
        })
        .collect();

    assert_eq!(
        listed,
        vec![
            (1, vec![("FROG", true)]),
            (2, vec![("ANT", false), ("NEWT", false)]),
            (3, vec![("BAT", false)]),
        ]
    );
}

#[test]
fn test_album_of_empty_catalog_is_empty() {
    let session = QuizSession::new("player").expect("non-blank name");
    assert!(session.album(&Catalog::default()).is_empty());
}

#[test]
fn test_is_complete_only_when_everything_is_owned() {
    let catalog = Catalog::from_animals([animal("frog", 1), animal("newt", 2)]);
    let mut session = QuizSession::new("player").expect("non-blank name");
    assert!(!session.is_complete(&catalog));

    win_frog(&mut session, &catalog);
    assert!(!session.is_complete(&catalog));

    let single = Catalog::from_animals([animal("frog", 1)]);
    assert!(session.is_complete(&single));
}

// -----------------------------------------------------------------------------
// App flow tests
// -----------------------------------------------------------------------------

#[test]
fn test_startup_loads_catalog_and_seeds_rng() {
    let app = quiz_app(5);

    assert_eq!(app.world().resource::<Catalog>().len(), 10);
    assert_eq!(app.world().resource::<QuizRng>().seed, 5);
    assert_eq!(session(&app).name(), "player");
}

#[test]
fn test_puzzle_request_offers_lowest_level_animal() {
    let mut app = quiz_app(17);

    app.world_mut().write_message(PuzzleRequestedEvent);
    app.update();

    let turn = session(&app).current_turn().expect("turn offered");
    let catalog = app.world().resource::<Catalog>();
    let level = catalog.get(&turn.animal_id).map(|a| a.level);
    assert_eq!(level, Some(1));
}

#[test]
fn test_playing_every_turn_correctly_collects_catalog_in_level_order() {
    let mut app = quiz_app(23);
    app.world_mut().write_message(PuzzleRequestedEvent);
    app.update();

    let mut levels = Vec::new();
    for _ in 0..20 {
        let Some(turn) = session(&app).current_turn().cloned() else {
            break;
        };
        let catalog = app.world().resource::<Catalog>();
        levels.extend(catalog.get(&turn.animal_id).map(|a| a.level));

        app.world_mut().write_message(AnswerSubmittedEvent {
            guess: turn.puzzle.result,
        });
        app.world_mut().write_message(PuzzleRequestedEvent);
        app.update();
    }

    assert!(session(&app).current_turn().is_none());
    assert_eq!(session(&app).collection().len(), 10);
    assert_eq!(levels.len(), 10);
    assert!(levels.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_wrong_answer_in_app_reoffers_same_level() {
    let mut app = quiz_app(31);
    app.world_mut().write_message(PuzzleRequestedEvent);
    app.update();

    let turn = session(&app).current_turn().cloned().expect("turn offered");
    let wrong = turn.puzzle.distractors().next().expect("has distractors");

    app.world_mut()
        .write_message(AnswerSubmittedEvent { guess: wrong });
    app.world_mut().write_message(PuzzleRequestedEvent);
    app.update();

    assert!(session(&app).collection().is_empty());
    let next = session(&app).current_turn().expect("new turn offered");
    let catalog = app.world().resource::<Catalog>();
    assert_eq!(catalog.get(&next.animal_id).map(|a| a.level), Some(1));
}

#[test]
fn test_stray_answer_is_ignored() {
    let mut app = quiz_app(2);

    app.world_mut()
        .write_message(AnswerSubmittedEvent { guess: 4 });
    app.update();

    assert!(session(&app).collection().is_empty());
    assert!(session(&app).current_turn().is_none());
}
