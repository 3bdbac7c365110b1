//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and
//! messages and write them to an [`OutputSink`] whenever the engine is about to wait for input.
pub mod view_item;

use std::io::{self, Write};

use colored::ColoredString;
use textwrap::{fill, termwidth};

use crate::style::GameStyle;

pub use view_item::ViewItem;

const SEPARATOR_WIDTH: usize = 30;

/// Destination for rendered lines, in the order they were produced.
pub trait OutputSink {
    /// Write one line of display text.
    ///
    /// # Errors
    /// - on failure of the underlying writer
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Whether lines should carry ANSI styling.
    fn styled(&self) -> bool {
        false
    }
}

/// Styled output to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl OutputSink for ConsoleOutput {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }

    fn styled(&self) -> bool {
        true
    }
}

/// Plain-text output kept in memory, for tests and replays.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    pub lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Number of lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(needle)).count()
    }
}

impl OutputSink for Transcript {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// View aggregates messages for the current decision point and renders them on flush.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub styled: bool,
    pub items: Vec<ViewItem>,
}

impl View {
    /// Create a new empty view.
    pub fn new(styled: bool) -> Self {
        Self {
            width: termwidth(),
            styled,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render and write every pending item, oldest first.
    ///
    /// # Errors
    /// - if the sink fails to write
    pub fn flush(&mut self, out: &mut dyn OutputSink) -> io::Result<()> {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        let pending = std::mem::take(&mut self.items);
        for item in &pending {
            for line in self.render(item) {
                out.write_line(&line)?;
            }
        }
        Ok(())
    }

    /// Style a prompt for the line editor.
    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, |t| t.prompt_style())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.styled { style(text).to_string() } else { text.to_string() }
    }

    /// Turn one `ViewItem` into display lines.
    pub fn render(&self, item: &ViewItem) -> Vec<String> {
        match item {
            ViewItem::Instructions { title, intro } => self.instructions(title, intro),
            ViewItem::Status { room, inventory, item: visible } => self.status(room, inventory, visible.as_deref()),
            ViewItem::NoSuchExit(_) => vec![self.paint("You can't go that way!", |t| t.error_style())],
            ViewItem::NoSuchItem(_) => vec![self.paint("There is no such item to collect here.", |t| t.error_style())],
            ViewItem::InvalidCommand(_) => vec![self.paint("Invalid command. Please try again.", |t| t.error_style())],
            ViewItem::ItemCollected(item) => vec![format!(
                "You collected the {}.",
                self.paint(item, |t| t.item_style())
            )],
            ViewItem::PuzzleRequired => {
                vec![self.paint("You must solve the puzzle to collect the item!", |t| t.denied_style())]
            },
            ViewItem::PuzzlePresented(question) => vec![
                String::new(),
                "To collect the item, solve this puzzle:".to_string(),
                self.paint(question, |t| t.puzzle_style()),
                "Type 'exit' to leave the puzzle.".to_string(),
            ],
            ViewItem::PuzzleSolved => vec![self.paint("Correct! You can now collect the item.", |t| t.success_style())],
            ViewItem::PuzzleIncorrect => vec![self.paint("Incorrect.", |t| t.error_style())],
            ViewItem::PuzzleAbandoned => vec!["You have exited the puzzle. The item remains in the room.".to_string()],
            ViewItem::NewPuzzle(question) => vec![format!("New puzzle: {}", self.paint(question, |t| t.puzzle_style()))],
            ViewItem::Victory(lines) => self.finale(lines, |t| t.victory_style()),
            ViewItem::Defeat(lines) => self.finale(lines, |t| t.defeat_style()),
            ViewItem::Quit => vec![String::new(), "You have exited the game. Thanks for playing!".to_string()],
            ViewItem::EngineMessage(msg) => vec![msg.clone()],
        }
    }

    fn instructions(&self, title: &str, intro: &[String]) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            self.paint(&format!("Welcome to '{title}'!"), |t| t.title_style()),
        ];
        for paragraph in intro {
            for wrapped in fill(paragraph, self.width).lines() {
                lines.push(self.paint(wrapped, |t| t.description_style()));
            }
        }
        lines.extend(
            [
                "",
                "Commands:",
                "- Move: 'go [direction]' (north, south, east, west)",
                "- Collect an item: 'get [item]'",
                "- Quit the game: 'exit'",
                "",
            ]
            .map(str::to_string),
        );
        lines
    }

    fn status(&self, room: &str, inventory: &[String], item: Option<&str>) -> Vec<String> {
        let held = inventory.iter().map(|i| format!("'{i}'")).collect::<Vec<_>>().join(", ");
        let mut lines = vec![
            String::new(),
            format!("You are in the {}.", self.paint(room, |t| t.room_style())),
            format!("Inventory: [{held}]"),
        ];
        if let Some(item) = item {
            lines.push(format!("You see a {}.", self.paint(item, |t| t.item_style())));
        }
        lines.push(self.paint(&"-".repeat(SEPARATOR_WIDTH), |t| t.separator_style()));
        lines
    }

    fn finale(&self, text: &[String], style: impl Fn(&str) -> ColoredString) -> Vec<String> {
        let mut lines = vec![String::new()];
        lines.extend(text.iter().map(|line| self.paint(line, &style)));
        lines
    }
}
