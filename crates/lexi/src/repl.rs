//! Interactive read-print loop over a LookupService

use std::io::{self, BufRead, Write};

use lexcache::LookupService;
use serde_json::json;
use tracing::warn;

/// Prompt shown before each read
pub const PROMPT: &str = "Enter a word to lookup: ";

/// Result of handling one input line
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// Text to print
    Text(String),
    /// Nothing to print (blank input)
    Empty,
    /// Leave the loop
    Quit,
}

/// Output options
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    /// Look words up exactly as typed instead of lowercasing them
    pub keep_case: bool,
    /// Print entries as JSON lines
    pub json: bool,
}

/// Line-oriented front end over a lookup service
pub struct Repl {
    lookup: LookupService,
    options: ReplOptions,
}

impl Repl {
    /// Create a loop over `lookup`
    pub fn new(lookup: LookupService, options: ReplOptions) -> Self {
        Self { lookup, options }
    }

    /// Get the underlying lookup service
    pub fn lookup(&self) -> &LookupService {
        &self.lookup
    }

    /// Handle one line of input
    pub fn handle(&mut self, line: &str) -> Reply {
        let input = line.trim();
        if input.is_empty() {
            return Reply::Empty;
        }

        if let Some(command) = input.strip_prefix(':') {
            return self.handle_command(command);
        }

        let word = if self.options.keep_case {
            input.to_string()
        } else {
            input.to_lowercase()
        };

        match self.lookup.search(&word) {
            Ok((entry, origin)) if self.options.json => Reply::Text(
                json!({ "entry": entry, "origin": origin.label() }).to_string(),
            ),
            Ok((entry, origin)) => Reply::Text(format!("{}\n({})\n", entry, origin)),
            Err(e) if e.is_not_found() => Reply::Text(e.to_string()),
            Err(e) => {
                warn!("Lookup for '{}' failed: {}", word, e);
                Reply::Text(e.to_string())
            }
        }
    }

    fn handle_command(&mut self, command: &str) -> Reply {
        match command.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Reply::Quit,
            "stats" => {
                let cache = self.lookup.cache();
                Reply::Text(format!(
                    "{}\ncached:     {}/{}\nstore:      {} entries",
                    self.lookup.stats(),
                    cache.len(),
                    cache.capacity(),
                    self.lookup.store().len()
                ))
            }
            "cache" => {
                let words = self.lookup.cache().words();
                if words.is_empty() {
                    Reply::Text("(empty)".to_string())
                } else {
                    Reply::Text(words.join("\n"))
                }
            }
            "clear" => {
                self.lookup.clear_cache();
                Reply::Text("Cache cleared".to_string())
            }
            other => Reply::Text(format!("Unknown command ':{}'", other)),
        }
    }

    /// Prompt, read and reply until EOF or `:quit`
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut line = String::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            match self.handle(&line) {
                Reply::Text(text) => writeln!(output, "{}", text)?,
                Reply::Empty => {}
                Reply::Quit => return Ok(()),
            }
        }
    }
}
