//! Interactive console subsystem.
//!
//! # Data Flow
//! ```text
//! stdin lines
//!     → whitespace tokens
//!     → command.rs (keywords, pairing of `name value` tokens)
//!     → session.rs (mutates HeaderStore, sends requests, prints replies)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Reader and writer are generic so sessions run against in-memory buffers
//! - A failed request is reported and the session keeps going
//! - Only console I/O errors end a session early

pub mod command;
pub mod session;

pub use command::{Command, CommandParser, HELP_TEXT};
pub use session::{Flow, Session, SessionError};
