//! Line-oriented front end for an arcade session.
//!
//! Reads one command per line from stdin. Set `RUST_LOG=debug` to trace
//! every transition.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rust_arcade::games::{CardFace, MemoryView, NumberGuessView, QuizView};
use rust_arcade::{
    Achievement, ActionReport, GameKind, GameView, Session, SessionConfig, SessionSnapshot,
    UserAction,
};

#[derive(Parser, Debug)]
#[command(name = "arcade", about = "Play the mini-game collection in a terminal")]
struct Cli {
    /// Fixed RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON session config
    #[arg(long)]
    config: Option<PathBuf>,
}

const HELP: &str = "\
commands:
  games                      list the games
  select <game>              guess | quiz | dice | memory | rps
  start                      start a new round of the active game
  guess <n>                  number guesser
  answer <question> <option> quiz (0-based), then: submit
  roll                       dice
  flip <card>                memory (0-15)
  play <rock|paper|scissors> rock paper scissors
  show | stats | csv | history
  reset                      zero the score board
  quit";

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SessionConfig::from_json(&json).with_context(|| format!("loading {}", path.display()))?
        }
        None => SessionConfig::new(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::new(config)?;
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "Ultimate Games Collection. Type `help` for commands.")?;
    prompt(&mut out)?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "games" => print_catalog(&mut out)?,
            "show" => print_snapshot(&mut out, &session.snapshot())?,
            "stats" => print_stats(&mut out, &session.snapshot())?,
            "csv" => write!(out, "{}", session.export_csv())?,
            "history" => {
                for record in session.history() {
                    writeln!(
                        out,
                        "#{} {}: {} points",
                        record.sequence, record.game, record.points
                    )?;
                }
            }
            command => match command.parse::<UserAction>() {
                Ok(action) => match session.dispatch(action) {
                    Ok(report) => print_report(&mut out, &report)?,
                    Err(err) => writeln!(out, "rejected: {err}")?,
                },
                Err(err) => writeln!(out, "{err}")?,
            },
        }
        prompt(&mut out)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn print_catalog(out: &mut impl Write) -> io::Result<()> {
    for kind in GameKind::ALL {
        writeln!(
            out,
            "{:<8} {:<20} {} ({})",
            kind.name(),
            kind.title(),
            kind.description(),
            kind.scoring_summary()
        )?;
    }
    Ok(())
}

fn print_report(out: &mut impl Write, report: &ActionReport) -> io::Result<()> {
    if let Some(outcome) = &report.outcome {
        writeln!(out, "{outcome}")?;
    }
    if let Some(done) = &report.completion {
        writeln!(out, "{} completed! Score earned: {} points", done.game, done.points)?;
    }
    for achievement in &report.newly_unlocked {
        writeln!(out, "Achievement unlocked: {achievement}")?;
    }
    print_snapshot(out, &report.snapshot)
}

fn print_snapshot(out: &mut impl Write, snapshot: &SessionSnapshot) -> io::Result<()> {
    writeln!(
        out,
        "[games played {} | total score {}]",
        snapshot.scores.games_played(),
        snapshot.scores.total_score()
    )?;
    let Some(active) = &snapshot.active else {
        return writeln!(out, "No game selected.");
    };
    writeln!(out, "== {} ({:?})", active.kind, active.phase)?;
    match &active.view {
        GameView::NumberGuess(view) => print_guess(out, view),
        GameView::Quiz(view) => print_quiz(out, view),
        GameView::Dice(view) => {
            match view.last_roll {
                Some(roll) => writeln!(out, "Last roll: {roll}")?,
                None => writeln!(out, "No rolls yet")?,
            }
            let table: Vec<_> = view.payouts.iter().map(|(r, p)| format!("{r}={p}")).collect();
            writeln!(out, "Payouts: {}", table.join(" "))
        }
        GameView::Memory(view) => print_memory(out, view),
        GameView::Rps(view) => {
            if let Some(round) = &view.last_round {
                writeln!(
                    out,
                    "Last round: {} vs {} ({:?})",
                    round.user, round.computer, round.result
                )?;
            }
            writeln!(out, "Rules: {}", view.rules.join(", "))
        }
    }
}

fn print_guess(out: &mut impl Write, view: &NumberGuessView) -> io::Result<()> {
    match view.possible_score {
        Some(score) => writeln!(
            out,
            "Guesses made: {} | possible score: {score}",
            view.guess_count
        ),
        None => writeln!(out, "Type `start` to begin!"),
    }
}

fn print_quiz(out: &mut impl Write, view: &QuizView) -> io::Result<()> {
    for (i, question) in view.questions.iter().enumerate() {
        writeln!(out, "Q{i}: {}", question.text)?;
        for (j, option) in question.options.iter().enumerate() {
            let mark = if question.selected == Some(j) { "*" } else { " " };
            writeln!(out, "  {mark}{j}) {option}")?;
        }
    }
    if view.submitted {
        writeln!(out, "Submitted. Type `start` to retake.")
    } else {
        writeln!(out, "Current selections are worth {} points.", view.pending_score)
    }
}

fn print_memory(out: &mut impl Write, view: &MemoryView) -> io::Result<()> {
    if view.cards.is_empty() {
        return writeln!(out, "Type `start` to deal the board.");
    }
    for row in view.cards.chunks(4) {
        let cells: Vec<_> = row
            .iter()
            .map(|face| match face {
                CardFace::FaceDown => "❓".to_string(),
                CardFace::FaceUp(symbol) | CardFace::Matched(symbol) => symbol.glyph().to_string(),
            })
            .collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    writeln!(
        out,
        "Matched pairs: {}/{} | attempts: {}",
        view.matched_pairs, view.total_pairs, view.attempts
    )
}

fn print_stats(out: &mut impl Write, snapshot: &SessionSnapshot) -> io::Result<()> {
    let stats = &snapshot.stats;
    writeln!(out, "Total Games Played: {}", stats.games_played)?;
    writeln!(out, "Total Score: {}", stats.total_score)?;
    if stats.games_played > 0 {
        writeln!(out, "Average Score: {}", stats.average_display())?;
    }
    writeln!(out, "Games progress: {}%", stats.games_progress)?;
    writeln!(out, "Score progress: {}%", stats.score_progress)?;
    if stats.achievements.is_empty() {
        return writeln!(out, "Keep playing to unlock achievements!");
    }
    for achievement in &stats.achievements {
        print_achievement(out, *achievement)?;
    }
    Ok(())
}

fn print_achievement(out: &mut impl Write, achievement: Achievement) -> io::Result<()> {
    writeln!(out, "{} ({})", achievement.label(), achievement.description())
}
