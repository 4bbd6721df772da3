use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keypad_engine::Digit;
use keypad_im::config::Settings;
use keypad_im::{EngineAction, EngineResult, InputMethodEngine, Key, KeyEvent};
use serde::Serialize;

/// Replay a keypad script through the input engine and print the typed text.
///
/// Words of the script are separated by whitespace; the auto-accept timer
/// fires between words when it is armed. Within a word:
///
///   0-9  press a digit      5~  hold a digit
///   <    backspace          >   OK
///   *    star               #   next mode
///   @    next language      !   cancel
///   _    pause (timer fires)
///
/// Example: `44 33 555 555 666` types "hello".
#[derive(Parser, Debug)]
#[command(name = "keypad-sim")]
#[command(about = "Replay a keypad key script through the input engine", long_about = None)]
struct Args {
    /// Key script; read from stdin when omitted
    script: Vec<String>,

    /// Settings file (defaults to the user config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enabled languages, comma separated (overrides the settings)
    #[arg(short, long, value_delimiter = ',')]
    languages: Vec<String>,

    /// Auto-accept timeout in milliseconds (overrides the settings)
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Print one JSON event per key instead of the typed text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

/// One step of a key script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Key(KeyEvent),
    Pause,
}

fn parse_script(script: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for word in script.split_whitespace() {
        if !steps.is_empty() {
            steps.push(Step::Pause);
        }
        let mut chars = word.chars().peekable();
        while let Some(c) = chars.next() {
            let key = match c {
                '<' => Key::Backspace,
                '>' => Key::Ok,
                '*' => Key::Star,
                '#' => Key::Pound,
                '@' => Key::NextLanguage,
                '!' => Key::Cancel,
                '_' => {
                    steps.push(Step::Pause);
                    continue;
                }
                c => match Digit::from_char(c) {
                    Some(digit) => Key::Digit(digit),
                    None => anyhow::bail!("Unknown key '{}' in '{}'", c, word),
                },
            };
            let hold = key.digit().is_some() && chars.next_if_eq(&'~').is_some();
            steps.push(Step::Key(KeyEvent::new(key, hold)));
        }
    }
    Ok(steps)
}

/// A key and what the engine did with it, for `--json`
#[derive(Debug, Serialize)]
struct Event {
    key: String,
    consumed: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    commit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    preedit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timer_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Event {
    fn new(key: String, result: &EngineResult) -> Self {
        let mut event = Self {
            key,
            consumed: result.consumed,
            commit: result.committed_text(),
            preedit: None,
            suggestions: None,
            cursor: None,
            timer_ms: None,
            label: None,
        };
        for action in &result.actions {
            match action {
                EngineAction::UpdatePreedit(text) => event.preedit = Some(text.clone()),
                EngineAction::ShowSuggestions(list) => {
                    event.suggestions = Some(list.items().to_vec());
                    event.cursor = Some(list.cursor());
                }
                EngineAction::HideSuggestions => event.suggestions = Some(Vec::new()),
                EngineAction::ArmTimer(ms) => event.timer_ms = Some(*ms),
                EngineAction::CancelTimer => event.timer_ms = Some(0),
                EngineAction::UpdateModeLabel(label) => event.label = Some(label.clone()),
                EngineAction::Commit(_) => {}
            }
        }
        event
    }
}

/// Drives the engine like a host would: keeps the timer and the text field.
struct Simulator {
    engine: InputMethodEngine,
    timer_armed: bool,
    text: String,
    json: bool,
}

impl Simulator {
    fn run(&mut self, steps: &[Step]) -> Result<()> {
        for step in steps {
            let (name, result) = match step {
                Step::Key(key) => {
                    let name = if key.hold {
                        format!("{}~", key.key)
                    } else {
                        key.key.to_string()
                    };
                    (name, self.engine.process_key(key))
                }
                Step::Pause if self.timer_armed => ("timeout".to_string(), self.engine.on_timeout()),
                Step::Pause => continue,
            };
            self.apply(step, &result);
            if self.json {
                println!("{}", serde_json::to_string(&Event::new(name, &result))?);
            }
        }

        let rest = self.engine.commit();
        self.text.push_str(&rest);
        Ok(())
    }

    fn apply(&mut self, step: &Step, result: &EngineResult) {
        for action in &result.actions {
            match action {
                EngineAction::Commit(text) => self.text.push_str(text),
                EngineAction::ArmTimer(_) => self.timer_armed = true,
                EngineAction::CancelTimer => self.timer_armed = false,
                _ => {}
            }
        }
        // Backspace the engine passed through erases committed text
        if let Step::Key(key) = step
            && key.key == Key::Backspace
            && !result.consumed
        {
            self.text.pop();
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load()?,
    };
    if !args.languages.is_empty() {
        settings.languages.enabled = args.languages.clone();
        settings.languages.default = args.languages[0].clone();
    }
    if let Some(ms) = args.timeout_ms {
        settings.input.abc_auto_accept_timeout_ms = ms;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "keypad_sim=debug,keypad_im=debug,keypad_engine=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = if args.script.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read script from stdin")?;
        input
    } else {
        args.script.join(" ")
    };
    let steps = parse_script(&script)?;

    let settings = load_settings(&args)?;
    let engine = InputMethodEngine::from_settings(&settings)?;
    tracing::debug!("Languages: {:?}, mode: {}", engine.languages(), engine.mode_label());

    let mut sim = Simulator {
        engine,
        timer_armed: false,
        text: String::new(),
        json: args.json,
    };
    sim.run(&steps)?;

    if !args.json {
        println!("{}", sim.text);
    }
    Ok(())
}
