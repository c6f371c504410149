//! Token to command translation.
//!
//! Tokens are whitespace-delimited words; line boundaries carry no meaning.
//! Keywords are matched exactly and always win over header tokens. Every
//! other token is either a header name (when none is pending) or the value
//! for the pending name.

use crate::http::RequestKind;

/// Help text printed at startup and on `help`.
pub const HELP_TEXT: &str = "Please enter the input.
\t - '[header]' '[value]' ... with space delimiter to set / reset header.
\t - 'get' - to make get request with named headers.
\t - 'post' - to make post request with named headers.
\t - 'headers' - to print actual headers & values.
\t - 'clear' - to remove actual headers & values.
\t - 'help' - to see this message again.
\t - 'exit' - to quit.
";

/// A fully recognised user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(RequestKind),
    ListHeaders,
    Clear,
    Help,
    Exit,
    AddHeader { name: String, value: String },
}

impl Command {
    /// Map a keyword token to its command.
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "get" => Some(Command::Send(RequestKind::Get)),
            "post" => Some(Command::Send(RequestKind::Post)),
            "headers" => Some(Command::ListHeaders),
            "clear" => Some(Command::Clear),
            "help" => Some(Command::Help),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Stateful parser pairing header tokens across calls.
#[derive(Debug, Default)]
pub struct CommandParser {
    pending_name: Option<String>,
}

impl CommandParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one token. Returns a command once one is complete.
    pub fn feed(&mut self, token: &str) -> Option<Command> {
        if let Some(command) = Command::from_keyword(token) {
            return Some(command);
        }

        match self.pending_name.take() {
            Some(name) => Some(Command::AddHeader {
                name,
                value: token.to_string(),
            }),
            None => {
                self.pending_name = Some(token.to_string());
                None
            }
        }
    }

    /// Header name still waiting for its value.
    pub fn pending_name(&self) -> Option<&str> {
        self.pending_name.as_deref()
    }
}
