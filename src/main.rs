use std::io::{self, BufRead, Write};

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

use critter_quiz::QuizPlugins;
use critter_quiz::content::Catalog;
use critter_quiz::core::QuizConfig;
use critter_quiz::session::{ActiveSession, AnswerSubmittedEvent, PuzzleRequestedEvent, Turn};

fn main() {
    let json_output = std::env::args().skip(1).any(|arg| arg == "--json");

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin {
            level: if json_output { Level::WARN } else { Level::INFO },
            ..default()
        })
        .insert_resource(QuizConfig::from_env())
        .add_plugins(QuizPlugins);
    app.finish();
    app.cleanup();

    app.world_mut().write_message(PuzzleRequestedEvent);
    app.update();

    if app.world().resource::<Catalog>().is_empty() {
        eprintln!("No animals to collect; check the content errors above.");
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(turn) = current_turn(&app) else {
            let session = &app.world().resource::<ActiveSession>().session;
            let catalog = app.world().resource::<Catalog>();
            let (owned, total) = session.progress(catalog);
            if !session.is_complete(catalog) {
                eprintln!(
                    "No puzzle available with {}/{} collected; check the errors above.",
                    owned, total
                );
                std::process::exit(1);
            }
            println!("You collected every animal! ({}/{})", owned, total);
            break;
        };

        present_turn(&turn, json_output);

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("album") {
            print_album(&app);
            continue;
        }
        let Ok(guess) = line.trim().parse::<u32>() else {
            println!("Please answer with one of the numbers shown, or type album.");
            continue;
        };

        if turn.puzzle.is_correct(guess) {
            println!("Correct! {} joins your collection.", turn.animal_name);
        } else {
            println!(
                "Not quite: {} was {}.",
                turn.puzzle.prompt(),
                turn.puzzle.result
            );
        }

        app.world_mut().write_message(AnswerSubmittedEvent { guess });
        app.world_mut().write_message(PuzzleRequestedEvent);
        app.update();
    }
}

fn current_turn(app: &App) -> Option<Turn> {
    app.world()
        .resource::<ActiveSession>()
        .session
        .current_turn()
        .cloned()
}

fn present_turn(turn: &Turn, json_output: bool) {
    if json_output {
        let record = serde_json::json!({
            "animal_id": turn.animal_id,
            "animal_name": turn.animal_name,
            "puzzle": turn.puzzle,
        });
        match serde_json::to_string(&record) {
            Ok(line) => println!("{}", line),
            Err(e) => error!("Failed to encode puzzle: {}", e),
        }
    } else {
        let answers: Vec<String> = turn.puzzle.answers.iter().map(u32::to_string).collect();
        println!();
        println!("Win the {}!", turn.animal_name);
        println!("  {}   [{}]", turn.puzzle.prompt(), answers.join(" / "));
        print!("> ");
    }
    if let Err(e) = io::stdout().flush() {
        warn!("Failed to flush stdout: {}", e);
    }
}

fn print_album(app: &App) {
    let session = &app.world().resource::<ActiveSession>().session;
    let catalog = app.world().resource::<Catalog>();
    let (owned, total) = session.progress(catalog);

    println!();
    println!("Album ({}/{} collected)", owned, total);
    for (level, entries) in session.album(catalog) {
        println!("  Level {}", level);
        for entry in entries {
            let animal = entry.animal;
            println!(
                "    [{}] {:<14} {:<10} {:<5} {}",
                if entry.owned { "x" } else { " " },
                animal.name,
                animal.group.display_name(),
                animal.habitat.display_name(),
                animal.image_path()
            );
        }
    }
}
