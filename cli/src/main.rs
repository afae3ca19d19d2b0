//! PTK CLI — the command-line entry point for Promotrack.
//!
//! # Usage
//!
//! ```text
//! ptk              # open the roster UI over an empty roster
//! ptk --sample     # open the roster UI seeded with sample students
//! ptk export       # print the sample roster as JSON
//! ptk --help
//! ptk --version
//! ```

use std::process;

use promotrack_core::draft::StudentDraft;
use promotrack_core::roster::Roster;
use promotrack_core::settings::Settings;


// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

/// A parsed command-line invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the TUI over an empty roster.
    Tui,
    /// Open the TUI seeded with sample students.
    TuiSample,
    /// Print the sample roster as JSON on stdout.
    Export,
    Help,
    Version,
}

fn parse_args(args: &[&str]) -> Result<Command, String> {
    match args {
        [] => Ok(Command::Tui),
        ["--sample"] => Ok(Command::TuiSample),
        ["export"] => Ok(Command::Export),
        ["--help"] | ["-h"] => Ok(Command::Help),
        ["--version"] | ["-V"] => Ok(Command::Version),
        [other, ..] => Err(format!("unknown argument '{}'", other)),
    }
}

const HELP: &str = "\
ptk - gestion d'une promotion d'étudiants

Usage:
  ptk              Ouvre l'interface sur une liste vide
  ptk --sample     Ouvre l'interface avec des étudiants d'exemple
  ptk export       Affiche la liste d'exemple en JSON
  ptk --help       Affiche cette aide
  ptk --version    Affiche la version";


// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// A small seeded roster for demos and the export command.
fn sample_roster(settings: &Settings) -> Roster {
    let mut roster = Roster::new();
    let drafts = [
        ("Ana", "Lefevre", "22", "ana.lefevre@example.com", "Informatique"),
        ("Bastien", "Moreau", "25", "b.moreau@example.com", "Mathématiques"),
        ("Chloé", "Garnier", "20", "chloe.g@example.com", "Physique"),
    ];
    for (first_name, last_name, age, email, domain) in drafts {
        let draft = StudentDraft {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: age.into(),
            email: email.into(),
            domain: domain.into(),
        };
        // Seeds are distinct and complete, so add cannot fail.
        if roster.add(&draft, &settings.age_suffix).is_err() {
            unreachable!("sample roster entries are valid");
        }
    }
    roster
}


// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ptk: {}", e);
            eprintln!("{}", HELP);
            process::exit(1);
        }
    };

    if matches!(cmd, Command::Help) {
        println!("{}", HELP);
        return;
    }
    if matches!(cmd, Command::Version) {
        println!("ptk {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let settings = match Settings::load_or_default(&Settings::resolve_path()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ptk: {}", e);
            process::exit(1);
        }
    };

    if matches!(cmd, Command::Export) {
        let roster = sample_roster(&settings);
        match serde_json::to_string_pretty(&roster) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("ptk: export failed: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let roster = if matches!(cmd, Command::TuiSample) {
        sample_roster(&settings)
    } else {
        Roster::new()
    };
    match ptk_tui::tui::Tui::with_roster(settings, roster) {
        Ok(mut tui) => {
            if let Err(e) = tui.run() {
                eprintln!("ptk: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("ptk: failed to start: {}", e);
            process::exit(1);
        }
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
