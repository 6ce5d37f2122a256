use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use client_logging::{client_info, client_warn};
use colored::Colorize;
use navigator_core::{update, AppState, Msg};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::effects::{AppEvent, EffectRunner};
use crate::{config, logging, render};

const PROMPT: &str = ">> ";

/// REPL helper: completion, hints and highlighting for slash commands.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/example".to_string(),
                "/health".to_string(),
                "/history".to_string(),
                "/new".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for CliHelper {}

enum Command<'a> {
    NewConversation,
    Example,
    History(Option<usize>),
    Health,
    Unknown(&'a str),
    Instruction(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        if !line.starts_with('/') {
            return Command::Instruction(line);
        }
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("/new") => Command::NewConversation,
            Some("/example") => Command::Example,
            Some("/health") => Command::Health,
            Some("/history") => match parts.next() {
                Some(raw) => match raw.parse::<usize>() {
                    Ok(n) if n >= 1 => Command::History(Some(n)),
                    _ => Command::Unknown(line),
                },
                None => Command::History(None),
            },
            _ => Command::Unknown(line),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = config::load(&cwd);
    logging::initialize(if config.log_to_terminal {
        logging::LogDestination::Both
    } else {
        logging::LogDestination::File
    });
    client_info!("navigator starting, service at {}", config.service_url);

    let runner = EffectRunner::new(&config)?;
    let mut state = AppState::new();

    let mut rl: Editor<CliHelper, rustyline::history::DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    render::draw(&state.view());
    println!();

    loop {
        // The core input field surfaces as prompt pre-fill: preserved
        // failed instructions, the example and history selections are all
        // editable before the next submit.
        let prefill = state.view().input;
        let readline = if prefill.is_empty() {
            rl.readline(PROMPT)
        } else {
            rl.readline_with_initial(PROMPT, (prefill.as_str(), ""))
        };

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                state = handle_line(state, trimmed, &runner);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".green());
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn handle_line(state: AppState, line: &str, runner: &EffectRunner) -> AppState {
    match Command::parse(line) {
        Command::NewConversation => {
            let (state, _) = dispatch(state, Msg::NewConversationRequested, runner);
            state
        }
        Command::Example => {
            let (state, _) = dispatch(state, Msg::ExampleRequested, runner);
            println!(
                "{}",
                "Example loaded; press Enter to submit it, or edit it first.".dimmed()
            );
            state
        }
        Command::History(None) => {
            for line in render::history_lines(&state.view()) {
                println!("{line}");
            }
            state
        }
        Command::History(Some(number)) => {
            if number > state.view().history.len() {
                println!("{}", format!("No history entry {number}.").red());
                return state;
            }
            let (state, _) = dispatch(state, Msg::HistoryEntrySelected { index: number - 1 }, runner);
            state
        }
        Command::Health => {
            runner.check_health();
            wait_for_health(state, runner)
        }
        Command::Unknown(raw) => {
            println!("{}", format!("Unknown command: {raw}").red());
            state
        }
        Command::Instruction(text) => {
            let (state, _) = dispatch(state, Msg::InputChanged(text.to_string()), runner);
            let (state, submitted) = dispatch(state, Msg::SubmitRequested, runner);
            if submitted {
                // One request at a time: the prompt stays busy until the
                // reply lands, the terminal equivalent of a disabled
                // submit button.
                wait_for_completion(state, runner)
            } else {
                state
            }
        }
    }
}

fn wait_for_completion(state: AppState, runner: &EffectRunner) -> AppState {
    loop {
        match runner.wait_event() {
            Some(AppEvent::Core(msg)) => {
                let (next, _) = dispatch(state, msg, runner);
                return next;
            }
            Some(AppEvent::Health(result)) => {
                for line in render::health_lines(&result) {
                    println!("{line}");
                }
            }
            None => {
                client_warn!("client worker stopped while a request was in flight");
                return state;
            }
        }
    }
}

fn wait_for_health(mut state: AppState, runner: &EffectRunner) -> AppState {
    loop {
        match runner.wait_event() {
            Some(AppEvent::Health(result)) => {
                for line in render::health_lines(&result) {
                    println!("{line}");
                }
                return state;
            }
            Some(AppEvent::Core(msg)) => {
                let (next, _) = dispatch(state, msg, runner);
                state = next;
            }
            None => {
                client_warn!("client worker stopped during a health check");
                return state;
            }
        }
    }
}

/// Applies one message, hands any effects to the runner, and redraws when
/// the state marked itself dirty.
fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> (AppState, bool) {
    let (mut state, effects) = update(state, msg);
    let submitted = !effects.is_empty();
    runner.run(effects);
    if state.consume_dirty() {
        println!();
        render::draw(&state.view());
    }
    (state, submitted)
}
