//! Terminal front-end: a stdin/stdout REPL driving the chat widget.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::error::Result;
use crate::render::Renderer;
use crate::widget::{ChatWidget, WidgetUpdate};

pub const HELP: &str = "Type a message and press Enter. Commands: /allowance <amount>, \
     /expenses <amount>, a number to press a button, /html, /quit.";

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text, or empty to send with just the amounts.
    Message(String),
    Allowance(String),
    Expenses(String),
    /// Press the offered button at this index (0-based).
    Press(usize),
    /// Print the transcript as HTML.
    Html,
    Quit,
}

impl Command {
    /// Interpret `line` given how many buttons are on offer. Numbers only
    /// press buttons when they are in range; anything else is a message.
    pub fn parse(line: &str, button_count: usize) -> Self {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("/allowance") {
            return Self::Allowance(rest.trim().to_string());
        }
        if let Some(rest) = line.strip_prefix("/expenses") {
            return Self::Expenses(rest.trim().to_string());
        }
        match line {
            "/html" => return Self::Html,
            "/quit" | "/exit" => return Self::Quit,
            _ => {}
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=button_count).contains(&n) => Self::Press(n - 1),
            _ => Self::Message(line.to_string()),
        }
    }
}

pub struct Cli<R> {
    widget: ChatWidget,
    renderer: R,
}

impl<R: Renderer> Cli<R> {
    pub fn new(widget: ChatWidget, renderer: R) -> Self {
        Self { widget, renderer }
    }

    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }

    /// Run one command. Returns the text to print, or `None` on quit.
    pub async fn execute(&mut self, command: Command) -> Option<String> {
        debug!(?command, "CLI command");
        let update = match command {
            Command::Quit => return None,
            Command::Html => return Some(self.widget.transcript().to_html()),
            Command::Allowance(value) => {
                self.widget.set_allowance(value);
                return Some(String::new());
            }
            Command::Expenses(value) => {
                self.widget.set_expenses(value);
                return Some(String::new());
            }
            Command::Press(index) => match self.widget.buttons().get(index).cloned() {
                Some(label) => self.widget.press_button(&label),
                None => WidgetUpdate::default(),
            },
            Command::Message(text) => {
                self.widget.set_message(text);
                self.widget.send_message().await
            }
        };
        Some(self.format_update(&update))
    }

    fn format_update(&self, update: &WidgetUpdate) -> String {
        let mut out: Vec<String> = Vec::new();
        if update.transcript_cleared {
            out.push("(chat cleared)".to_string());
        }
        out.extend(update.messages.iter().map(|m| self.renderer.render(m)));
        let buttons = self.widget.buttons();
        if !buttons.is_empty() {
            let options: Vec<String> = buttons
                .iter()
                .enumerate()
                .map(|(i, label)| format!("[{}] {label}", i + 1))
                .collect();
            out.push(options.join("  "));
        }
        out.join("\n\n")
    }

    /// Read commands from stdin until EOF or `/quit`.
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        eprint!("> ");
        while let Some(line) = lines.next_line().await? {
            let command = Command::parse(&line, self.widget.buttons().len());
            let Some(output) = self.execute(command).await else {
                break;
            };
            if !output.is_empty() {
                println!("{output}\n");
            }
            eprint!("> ");
        }
        Ok(())
    }
}
