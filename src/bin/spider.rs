//! Interactive text loop for the Spider engine.
//!
//! Reads one command per line, dispatches to the engine, and prints the
//! board after every command:
//!
//! - `d` — deal the next side deck
//! - `m <from> <position> <to>` — move the run at `position` of column
//!   `from` onto column `to`
//! - `q` — quit
//!
//! Engine errors are reported and the loop keeps running.

use std::io::{self, BufRead, Write};

use spider_engine::GameEngine;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut engine = GameEngine::new_game();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_board(&engine);
    loop {
        writeln!(stdout, "what to do? (d, m <from> <position> <to>, q)")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match parse_command(line) {
            Some(Command::Deal) => {
                if let Err(err) = engine.deal() {
                    writeln!(stdout, "no can do: {err}")?;
                }
            }
            Some(Command::Move { from, position, to }) => {
                if let Err(err) = engine.move_card(from, position, to) {
                    writeln!(stdout, "no can do: {err}")?;
                }
            }
            Some(Command::Quit) => break,
            None => writeln!(stdout, "unrecognized action")?,
        }
        print_board(&engine);
    }
    Ok(())
}

enum Command {
    Deal,
    Move {
        from: usize,
        position: usize,
        to: usize,
    },
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "d" => words.next().is_none().then_some(Command::Deal),
        "q" => words.next().is_none().then_some(Command::Quit),
        "m" => {
            let from = words.next()?.parse().ok()?;
            let position = words.next()?.parse().ok()?;
            let to = words.next()?.parse().ok()?;
            words.next().is_none().then_some(Command::Move {
                from,
                position,
                to,
            })
        }
        _ => None,
    }
}

/// Print each column on its own line, bottom to top, with `x` marking
/// face-down cards, then the remaining-deck count.
fn print_board(engine: &GameEngine) {
    for (index, column) in engine.columns().iter().enumerate() {
        let cards: Vec<String> = column.cards().iter().map(|c| c.to_string()).collect();
        println!("{index}: {}", cards.join(" | "));
    }
    println!("score: {}", engine.score());
    println!("remaining decks: {}", engine.reserve_count());
}
