//! The interactive discovery session.
//!
//! Owns the [`ExclusionSet`] and the currently displayed candidate, and maps
//! typed commands onto the two halves of the app: running a discovery and
//! editing the ban list. Commands run strictly one at a time; a new
//! `discover` cannot start while one is outstanding because the loop awaits
//! each command before reading the next line.

use std::io::{self, Write};

use anyhow::Result;
use console::Style;

use crate::catalog::{Candidate, CandidateSource};
use crate::discover::{self, FetchOutcome};
use crate::exclusions::ExclusionSet;
use crate::ui::{self, DiscoverProgress};

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Run one discovery against the current ban list.
    Discover,
    /// Ban an attribute of the displayed candidate, or a literal value.
    Ban(BanTarget),
    /// Remove a value from the ban list.
    Unban(String),
    /// Show the ban list.
    List,
    Help,
    Quit,
    Unknown(String),
}

/// What `ban` points at. The attribute targets mirror clicking the displayed
/// values of the accepted candidate; anything else bans the literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BanTarget {
    Origin,
    LifeSpan,
    Name,
    Literal(String),
}

impl SessionCommand {
    /// Parse one trimmed input line. Empty input parses to `None` (the loop
    /// just re-prompts).
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let (head, rest) = match input.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (input, ""),
        };

        let command = match (head, rest) {
            ("discover" | "d", "") => SessionCommand::Discover,
            ("ban", "") => SessionCommand::Unknown(input.to_string()),
            ("ban", "origin") => SessionCommand::Ban(BanTarget::Origin),
            ("ban", "life") => SessionCommand::Ban(BanTarget::LifeSpan),
            ("ban", "name") => SessionCommand::Ban(BanTarget::Name),
            ("ban", value) => SessionCommand::Ban(BanTarget::Literal(value.to_string())),
            ("unban", "") => SessionCommand::Unknown(input.to_string()),
            ("unban", value) => SessionCommand::Unban(value.to_string()),
            ("list" | "bans", "") => SessionCommand::List,
            ("help" | "?", "") => SessionCommand::Help,
            ("quit" | "exit" | "q", "") => SessionCommand::Quit,
            _ => SessionCommand::Unknown(input.to_string()),
        };
        Some(command)
    }
}

/// One single-screen session: ban list, displayed candidate, input loop.
pub struct Session<S: CandidateSource> {
    source: S,
    exclusions: ExclusionSet,
    current: Option<Candidate>,
    verbose: bool,
}

impl<S: CandidateSource> Session<S> {
    pub fn new(source: S, verbose: bool) -> Self {
        Self {
            source,
            exclusions: ExclusionSet::new(),
            current: None,
            verbose,
        }
    }

    /// Resolve a ban target to the value it names, if any.
    ///
    /// Attribute targets need a candidate on screen; without one there is
    /// nothing to ban and `None` is returned.
    fn resolve_target(&self, target: &BanTarget) -> Option<String> {
        match target {
            BanTarget::Origin => self.current.as_ref().map(|c| c.origin.clone()),
            BanTarget::LifeSpan => self.current.as_ref().map(|c| c.life_span_label.clone()),
            BanTarget::Name => self.current.as_ref().map(|c| c.name.clone()),
            BanTarget::Literal(value) => Some(value.clone()),
        }
    }

    /// Run the input loop until `quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        print_banner();

        let cyan = Style::new().cyan();
        let dim = Style::new().dim();

        loop {
            print!("{} ", cyan.apply_to(">"));
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                // EOF
                break;
            }

            let Some(command) = SessionCommand::parse(&input) else {
                continue;
            };

            match command {
                SessionCommand::Discover => self.run_discover().await,
                SessionCommand::Ban(target) => match self.resolve_target(&target) {
                    Some(value) => {
                        self.exclusions.add(value.clone());
                        println!("  {} banned {value}", dim.apply_to("⊘"));
                    }
                    None => println!("  no cat on screen yet; try `discover` first"),
                },
                SessionCommand::Unban(value) => {
                    self.exclusions.remove(&value);
                    println!("  {} unbanned {value}", dim.apply_to("·"));
                }
                SessionCommand::List => ui::print_ban_list(&self.exclusions),
                SessionCommand::Help => print_help(),
                SessionCommand::Quit => break,
                SessionCommand::Unknown(line) => {
                    println!("  unknown command: {line} (try `help`)");
                }
            }
        }

        Ok(())
    }

    async fn run_discover(&mut self) {
        let progress = DiscoverProgress::start();
        let outcome = discover::discover(&self.source, &self.exclusions, |state| {
            progress.update_state(state);
        })
        .await;
        progress.complete(&outcome, self.verbose);

        if let FetchOutcome::Accepted(candidate) = outcome {
            self.current = Some(candidate);
        }
    }
}

fn print_banner() {
    let cyan = Style::new().cyan().bold();
    let dim = Style::new().dim();
    println!();
    println!("{}", cyan.apply_to("Stumble Cats"));
    println!("{}", dim.apply_to("  Stumble upon some cool cats!"));
    println!("{}", dim.apply_to("  Type `discover` to start, `help` for commands"));
    println!();
}

fn print_help() {
    let cyan = Style::new().cyan();
    println!();
    println!("{}", Style::new().yellow().apply_to("Commands:"));
    println!("  {}            - Fetch a cat that passes the ban list", cyan.apply_to("discover"));
    println!("  {}  - Ban an attribute of the shown cat", cyan.apply_to("ban origin|life|name"));
    println!("  {}         - Ban a literal value", cyan.apply_to("ban <value>"));
    println!("  {}       - Remove a value from the ban list", cyan.apply_to("unban <value>"));
    println!("  {}                - Show the ban list", cyan.apply_to("list"));
    println!("  {}                - Leave the session", cyan.apply_to("quit"));
    println!();
}
