//! Terminal stand-in for the widget toolkit shared by both demos.
//!
//! Renderers print labels to stdout; user input arrives as one command per line
//! on stdin.

use std::io::{self, BufRead, Write};

use log::warn;
use useful_mvc::{
    Renderer, ScoreCommands, ScoreEditor, ScoreEntry, ScoreLabel, ScoreUpdater, UserCommands,
    UserEditor, UserLabel,
};

const DEFAULT_SEED: i64 = 3;

const HELP: &str = "\
commands:
  +                increment the score
  -                decrement the score
  score <n>        type <n> into the score entry
  first <text>     type into the firstname entry
  last <text>      type into the lastname entry
  email <text>     type into the email entry
  save             save the user
  quit             exit";

/// Prints every render as `<name>: <text>`.
pub struct Console {
    name: &'static str,
}

impl Console {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    fn show(&self, text: &str) {
        println!("[{}] {}", self.name, text);
    }
}

impl Renderer<ScoreLabel> for Console {
    fn render(&mut self, props: ScoreLabel) {
        self.show(&props.text);
    }
}

impl Renderer<ScoreEntry> for Console {
    fn render(&mut self, props: ScoreEntry) {
        self.show(&props.text);
    }
}

impl Renderer<UserLabel> for Console {
    fn render(&mut self, props: UserLabel) {
        self.show(&props.text);
    }
}

/// Install the logger; `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Initial score from the first command-line argument.
pub fn seed() -> i64 {
    match std::env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|err| {
            warn!("ignoring seed {arg:?}: {err}, using {DEFAULT_SEED}");
            DEFAULT_SEED
        }),
        None => DEFAULT_SEED,
    }
}

/// Feed stdin commands to the action surfaces until `quit` or end of input.
pub fn run<C, D, U>(
    editor: &ScoreEditor<'_, C>,
    updater: &ScoreUpdater<D>,
    form: &mut UserEditor<U>,
) -> io::Result<()>
where
    C: ScoreCommands,
    D: ScoreCommands,
    U: UserCommands,
{
    println!("{HELP}");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let (command, argument) = match line.trim().split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.trim(), ""),
        };
        match command {
            "" => {}
            "+" => updater.increment(),
            "-" => updater.decrement(),
            "score" => {
                editor.commit(argument);
            }
            "first" => form.set_firstname(argument),
            "last" => form.set_lastname(argument),
            "email" => form.set_email(argument),
            "save" => form.submit(),
            "quit" => return Ok(()),
            other => println!("unknown command {other:?}\n{HELP}"),
        }
    }
}
