//! Key-style commands understood by the demo shell.

use crate::app::AppError;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    NoState,
    /// Select by state name.
    Show(String),
    /// Select by position.
    Index(usize),
    /// Move focus to another panel.
    Focus(String),
    /// Append a new state to the focused panel.
    Add,
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
    /// Flip a node's visibility icon in the hierarchy.
    Toggle(String),
    /// Print the focused panel as JSON.
    Snapshot,
}

impl Command {
    /// Parse a command word, either a key name (`Right`, `Escape`, `3`) or
    /// `verb[:arg]`.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let (verb, arg) = match input.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (input, None),
        };
        let index = |arg: Option<&str>| -> Result<usize, AppError> {
            arg.and_then(|a| a.parse().ok())
                .ok_or_else(|| AppError::UnknownCommand(input.to_string()))
        };
        let text = |arg: Option<&str>| -> Result<String, AppError> {
            arg.filter(|a| !a.is_empty())
                .map(str::to_string)
                .ok_or_else(|| AppError::UnknownCommand(input.to_string()))
        };

        match verb {
            "next" | "Right" => Ok(Self::Next),
            "prev" | "Left" => Ok(Self::Previous),
            "none" | "Escape" => Ok(Self::NoState),
            "show" => Ok(Self::Show(text(arg)?)),
            "index" => Ok(Self::Index(index(arg)?)),
            "panel" => Ok(Self::Focus(text(arg)?)),
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove(index(arg)?)),
            "up" => Ok(Self::MoveUp(index(arg)?)),
            "down" => Ok(Self::MoveDown(index(arg)?)),
            "toggle" => Ok(Self::Toggle(text(arg)?)),
            "snapshot" => Ok(Self::Snapshot),
            // Number keys select states, 1-based like the keyboard row.
            key if arg.is_none() && key.len() == 1 => match key.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::Index(n - 1)),
                _ => Err(AppError::UnknownCommand(input.to_string())),
            },
            _ => Err(AppError::UnknownCommand(input.to_string())),
        }
    }
}

/// A command definition for help output.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub usage: &'static str,
    pub key: Option<&'static str>,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(usage: &'static str, key: Option<&'static str>, description: &'static str) -> Self {
        Self {
            usage,
            key,
            description,
        }
    }

    /// Format for display (e.g., "next (Right)").
    pub fn format(&self) -> String {
        match self.key {
            Some(key) => format!("{} ({})", self.usage, key),
            None => self.usage.to_string(),
        }
    }
}

/// Registry of all commands.
pub struct CommandRegistry;

impl CommandRegistry {
    /// Get all registered commands.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("next", Some("Right"), "Select the next state"),
            Shortcut::new("prev", Some("Left"), "Select the previous state"),
            Shortcut::new("none", Some("Escape"), "Clear the selection"),
            Shortcut::new("index:<n>", Some("1-9"), "Select the state at position n"),
            Shortcut::new("show:<name>", None, "Select the state with this name"),
            Shortcut::new("panel:<name>", None, "Focus another panel"),
            Shortcut::new("add", None, "Append a new state to the focused panel"),
            Shortcut::new("remove:<n>", None, "Remove the state at position n"),
            Shortcut::new("up:<n>", None, "Move the state at position n up"),
            Shortcut::new("down:<n>", None, "Move the state at position n down"),
            Shortcut::new("toggle:<name>", None, "Flip a node's visibility icon"),
            Shortcut::new("snapshot", None, "Print the focused panel as JSON"),
        ]
    }

    /// Print all commands to console.
    pub fn print_all() {
        println!("\n=== Commands ===");
        println!("  viewstate [--config <file.json>] <command>...");
        for shortcut in Self::all() {
            println!("  {:24} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
