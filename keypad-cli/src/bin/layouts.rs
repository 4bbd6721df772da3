use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use keypad_engine::{Digit, LanguageProfile, LanguageRegistry};
use serde::Serialize;

/// Print the key layouts of the built-in and user languages.
#[derive(Parser, Debug)]
#[command(name = "keypad-layouts")]
#[command(about = "Print keypad language layouts", long_about = None)]
struct Args {
    /// Language ids to print (all when omitted)
    ids: Vec<String>,

    /// Directory of extra language definitions (*.toml)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutJson<'a> {
    id: &'a str,
    name: &'a str,
    locale: String,
    abc: &'a str,
    upper_case: bool,
    keys: Vec<KeyJson<'a>>,
    special_key: u8,
    special_groups: Vec<&'a [String]>,
}

#[derive(Debug, Serialize)]
struct KeyJson<'a> {
    key: u8,
    number: String,
    letters: &'a [String],
}

impl<'a> LayoutJson<'a> {
    fn new(profile: &'a LanguageProfile) -> Self {
        Self {
            id: profile.id(),
            name: profile.name(),
            locale: profile.locale().to_string(),
            abc: profile.abc_string(),
            upper_case: profile.has_upper_case(),
            keys: Digit::ALL
                .iter()
                .map(|&d| KeyJson {
                    key: d.value(),
                    number: profile.key_number(d),
                    letters: profile.key_letters(d),
                })
                .collect(),
            special_key: profile.special_chars_key().value(),
            special_groups: profile
                .special_char_groups()
                .iter()
                .map(Vec::as_slice)
                .collect(),
        }
    }
}

/// Make whitespace letters visible in the table
fn visible(letter: &str) -> &str {
    match letter {
        " " => "␣",
        "\n" => "↵",
        "\t" => "⇥",
        other => other,
    }
}

fn print_table(profile: &LanguageProfile) {
    println!(
        "{} - {} ({}) [{}]",
        profile.id(),
        profile.name(),
        profile.locale(),
        profile.abc_string()
    );
    for digit in Digit::ALL {
        let letters: Vec<&str> = profile.key_letters(digit).iter().map(|s| visible(s)).collect();
        println!("  {}  {}", profile.key_number(digit), letters.join(" "));
    }
    for group in 1..profile.special_group_count() {
        println!(
            "  {}* {}",
            profile.special_chars_key(),
            profile.special_chars(group).join(" ")
        );
    }
    println!();
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut registry = LanguageRegistry::builtin();
    if let Some(dir) = &args.dir {
        let loaded = registry.load_dir(dir)?;
        eprintln!("Loaded {} language(s) from {}", loaded, dir.display());
    }

    let profiles = if args.ids.is_empty() {
        registry.iter().cloned().collect()
    } else {
        args.ids
            .iter()
            .map(|id| registry.get(id))
            .collect::<Result<Vec<_>, _>>()?
    };

    if args.json {
        let layouts: Vec<LayoutJson> = profiles.iter().map(|p| LayoutJson::new(p)).collect();
        println!("{}", serde_json::to_string_pretty(&layouts)?);
    } else {
        for profile in &profiles {
            print_table(profile);
        }
    }
    Ok(())
}
