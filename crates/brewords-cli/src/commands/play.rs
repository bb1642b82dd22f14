//! The `brewords play` command: one game screen driven from stdin.
//!
//! Every screen reads one command per line. `q` or end of input leaves the
//! screen. Lines typed while a reveal is on screen are kept for the next
//! question; only `q` cuts the reveal short.

use std::collections::VecDeque;
use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use brewords_core::error::LoadError;
use brewords_core::games::{
    AdvancingScreen, AfterReveal, AutoAdvancing, FlashcardEngine, GameSummary, GuessWordEngine,
    UnscrambleEngine,
};
use brewords_core::model::GameKind;
use brewords_core::screen::{load_flashcards, load_guess_word, load_unscramble, TopicScreen};
use brewords_core::traits::DataSource;

use super::{topics, ConsoleNotifier, Context, GlobalOpts};

pub async fn execute(opts: &GlobalOpts, game: GameKind, category: String) -> Result<()> {
    let (config, source) = Context::load(opts)?.into_source()?;
    let source = source.as_ref();
    let mut input = Input::stdin();

    tracing::debug!(%game, category = %category, "opening game");
    match game {
        GameKind::Flashcards => {
            let loaded = load_flashcards(source, &category, &ConsoleNotifier).await;
            if let Some(engine) = open(loaded, source).await? {
                flashcards(engine, &mut input).await?;
            }
        }
        GameKind::GuessWord => {
            let loaded = load_guess_word(source, &category, &ConsoleNotifier).await;
            if let Some(engine) = open(loaded, source).await? {
                let screen = AdvancingScreen::new(engine, config.games.guess_delay());
                guess_word(screen, &mut input).await?;
            }
        }
        GameKind::Unscramble => {
            let loaded = load_unscramble(source, &category, &ConsoleNotifier).await;
            if let Some(engine) = open(loaded, source).await? {
                let screen = AdvancingScreen::new(engine, config.games.unscramble_delay());
                unscramble(screen, &mut input).await?;
            }
        }
    }
    Ok(())
}

/// Unwrap a loaded screen. Failures fall back to the topic list.
async fn open<E>(
    loaded: Result<TopicScreen<E>, LoadError>,
    source: &dyn DataSource,
) -> Result<Option<E>> {
    match loaded {
        Ok(TopicScreen::Ready { category, engine }) => {
            println!("{}", category.name);
            Ok(Some(engine))
        }
        Ok(TopicScreen::Empty { category }) => {
            println!("Nothing to play in {} yet.", category.name);
            Ok(None)
        }
        Err(e) => {
            if let Err(err) = topics::render(source).await {
                tracing::warn!(error = %err, "could not show the topic list");
            }
            Err(e.into())
        }
    }
}

/// Line-oriented player input.
struct Input {
    lines: Lines<BufReader<Stdin>>,
    queued: VecDeque<String>,
    closed: bool,
}

impl Input {
    fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            queued: VecDeque::new(),
            closed: false,
        }
    }

    /// The next command, or `None` when the player quits.
    async fn command(&mut self) -> Result<Option<String>> {
        print!("> ");
        let _ = std::io::stdout().flush();
        let line = match self.queued.pop_front() {
            Some(line) => Some(line),
            None => self.read_line().await?,
        };
        Ok(line.filter(|l| l != "q"))
    }

    /// Read one line while a reveal is showing and keep it for later.
    /// Returns `false` if the player typed `q`.
    ///
    /// Cancel-safe, so it can race an auto-advance. Once input is closed it
    /// never completes.
    async fn read_ahead(&mut self) -> Result<bool> {
        if self.closed {
            std::future::pending::<()>().await;
        }
        match self.read_line().await? {
            Some(line) if line == "q" => Ok(false),
            Some(line) => {
                self.queued.push_back(line);
                Ok(true)
            }
            None => Ok(true),
        }
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        let line = self.lines.next_line().await?;
        if line.is_none() {
            self.closed = true;
        }
        Ok(line.map(|l| l.trim().to_string()))
    }
}

/// Parse a 1-based position typed by the player.
fn position(text: &str) -> Option<usize> {
    text.parse::<usize>().ok().filter(|&n| n >= 1).map(|n| n - 1)
}

async fn flashcards(mut engine: FlashcardEngine, input: &mut Input) -> Result<()> {
    println!("Commands: f flip, n next, p previous, <number> jump, q quit");
    loop {
        let view = engine.view();
        if let Some(card) = view.card {
            let (side, text) = if view.flipped {
                ("back", &card.back)
            } else {
                ("front", &card.front)
            };
            println!("\nCard {}/{} [{side}]: {text}", view.index + 1, view.total);
            if view.reached_end {
                println!("That was the last card. Keep going to start over.");
            }
        }

        let Some(cmd) = input.command().await? else {
            return Ok(());
        };
        let outcome = match cmd.as_str() {
            "f" | "" => engine.flip(),
            "n" => {
                engine.next();
                Ok(())
            }
            "p" => {
                engine.previous();
                Ok(())
            }
            other => match position(other) {
                Some(index) => engine.jump_to(index),
                None => {
                    println!("Unknown command: {other}");
                    Ok(())
                }
            },
        };
        if let Err(e) = outcome {
            println!("{e}");
        }
    }
}

async fn guess_word(
    mut screen: AdvancingScreen<GuessWordEngine>,
    input: &mut Input,
) -> Result<()> {
    println!("Commands: <number> select, c confirm, q quit");
    show_question(screen.engine());
    loop {
        let Some(cmd) = input.command().await? else {
            return Ok(());
        };
        if cmd != "c" {
            match position(&cmd) {
                Some(index) => match screen.engine_mut().select_option(index) {
                    Ok(()) => {
                        let selected = screen.engine().selected().unwrap_or_default();
                        println!("Selected: {selected}");
                    }
                    Err(e) => println!("{e}"),
                },
                None => println!("Unknown command: {cmd}"),
            }
            continue;
        }

        let reveal = match screen.reveal_with(GuessWordEngine::confirm) {
            Ok(reveal) => reveal,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        if reveal.correct {
            println!("Correct!");
        } else if let Some(question) = screen.engine().current() {
            println!("Wrong. The answer is {}.", question.correct_answer);
        }

        match reveal.next {
            AfterReveal::Advance(_) => {
                if !wait(&mut screen, input).await? {
                    return Ok(());
                }
            }
            AfterReveal::Finished(summary) => {
                show_summary(&summary);
                if !play_again(input).await? {
                    return Ok(());
                }
                screen.restart();
            }
        }
        show_question(screen.engine());
    }
}

fn show_question(engine: &GuessWordEngine) {
    let view = engine.view();
    let Some(question) = view.question else {
        return;
    };
    println!(
        "\nQuestion {}/{} (score {}): {}",
        view.index + 1,
        view.total,
        view.score,
        question.prompt
    );
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}) {option}", i + 1);
    }
}

async fn unscramble(
    mut screen: AdvancingScreen<UnscrambleEngine>,
    input: &mut Input,
) -> Result<()> {
    println!("Commands: <number> pick, u<number> put back, r reset, c check, q quit");
    show_puzzle(screen.engine());
    loop {
        let Some(cmd) = input.command().await? else {
            return Ok(());
        };
        let engine = screen.engine_mut();
        let edited = match cmd.as_str() {
            "c" => None,
            "r" => Some(engine.reset_puzzle()),
            other => {
                if let Some(index) = other.strip_prefix('u').and_then(position) {
                    Some(engine.unpick_word(index))
                } else if let Some(index) = position(other) {
                    Some(engine.pick_word(index))
                } else {
                    println!("Unknown command: {other}");
                    continue;
                }
            }
        };
        if let Some(edited) = edited {
            match edited {
                Ok(()) => show_puzzle(screen.engine()),
                Err(e) => println!("{e}"),
            }
            continue;
        }

        if !screen.engine().can_check() {
            println!("Use every word before checking.");
            continue;
        }
        let reveal = match screen.reveal_with(UnscrambleEngine::check) {
            Ok(reveal) => reveal,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        if reveal.correct {
            println!("Correct!");
        } else if let Some(question) = screen.engine().current() {
            println!("Not quite. It reads: {}", question.correct_order.join(" "));
        }

        match reveal.next {
            AfterReveal::Advance(_) => {
                if !wait(&mut screen, input).await? {
                    return Ok(());
                }
            }
            AfterReveal::Finished(summary) => {
                show_summary(&summary);
                if !play_again(input).await? {
                    return Ok(());
                }
                screen.restart();
            }
        }
        show_puzzle(screen.engine());
    }
}

fn show_puzzle(engine: &UnscrambleEngine) {
    let view = engine.view();
    let Some(question) = view.question else {
        return;
    };
    println!(
        "\nSentence {}/{} (score {}): {}",
        view.index + 1,
        view.total,
        view.score,
        question.prompt
    );
    println!("Your answer: {}", view.selected.join(" "));
    let bank: Vec<String> = view
        .available
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{}) {word}", i + 1))
        .collect();
    println!("Words: {}", bank.join("  "));
}

/// Sit out the reveal delay. `false` if the player quit meanwhile.
async fn wait<E: AutoAdvancing>(
    screen: &mut AdvancingScreen<E>,
    input: &mut Input,
) -> Result<bool> {
    loop {
        tokio::select! {
            _ = screen.wait_for_advance() => return Ok(true),
            keep_going = input.read_ahead() => {
                if !keep_going? {
                    screen.cancel_advance();
                    return Ok(false);
                }
            }
        }
    }
}

fn show_summary(summary: &GameSummary) {
    println!(
        "\nFinished: {}/{} ({}). {}",
        summary.score,
        summary.total,
        summary.rating,
        summary.rating.message()
    );
}

async fn play_again(input: &mut Input) -> Result<bool> {
    println!("r to play again, q to quit");
    loop {
        match input.command().await?.as_deref() {
            None => return Ok(false),
            Some("r") => return Ok(true),
            Some(_) => println!("r to play again, q to quit"),
        }
    }
}
