//! Interactive session loop.

use std::future::Future;
use std::io::Write;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::config::{ClientConfig, EndpointConfig};
use crate::headers::HeaderStore;
use crate::http::{PreparedRequest, RequestKind, RequestSender};
use crate::repl::command::{Command, CommandParser, HELP_TEXT};

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session: owns the header store and writes to `out`.
pub struct Session<S, W> {
    sender: S,
    endpoints: EndpointConfig,
    pretty_json: bool,
    headers: HeaderStore,
    parser: CommandParser,
    out: W,
}

impl<S: RequestSender, W: Write> Session<S, W> {
    pub fn new(sender: S, config: &ClientConfig, out: W) -> Self {
        Self {
            sender,
            endpoints: config.endpoints.clone(),
            pretty_json: config.output.pretty_json,
            headers: HeaderStore::new(),
            parser: CommandParser::new(),
            out,
        }
    }

    pub fn headers(&self) -> &HeaderStore {
        &self.headers
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `exit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> Result<(), SessionError>
    where
        R: AsyncBufRead + Unpin,
    {
        self.run_until(input, std::future::pending::<()>()).await
    }

    /// Run until `exit`, end of input, or `shutdown` resolves.
    pub async fn run_until<R, F>(&mut self, input: R, shutdown: F) -> Result<(), SessionError>
    where
        R: AsyncBufRead + Unpin,
        F: Future,
    {
        self.out.write_all(HELP_TEXT.as_bytes())?;
        self.out.flush()?;

        let mut lines = input.lines();
        tokio::pin!(shutdown);

        loop {
            let flow = tokio::select! {
                flow = self.step(&mut lines) => flow?,
                _ = &mut shutdown => {
                    tracing::info!("Interrupted, ending session");
                    Flow::Exit
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }

        if let Some(name) = self.parser.pending_name() {
            tracing::debug!(name = %name, "Discarding header name without value");
        }
        self.out.flush()?;
        Ok(())
    }

    async fn step<R>(&mut self, lines: &mut Lines<R>) -> Result<Flow, SessionError>
    where
        R: AsyncBufRead + Unpin,
    {
        match lines.next_line().await? {
            Some(line) => self.handle_line(&line).await,
            None => {
                tracing::debug!("End of input");
                Ok(Flow::Exit)
            }
        }
    }

    /// Process every token on one input line.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow, SessionError> {
        for token in line.split_whitespace() {
            if let Some(command) = self.parser.feed(token) {
                if self.execute(command).await? == Flow::Exit {
                    return Ok(Flow::Exit);
                }
            }
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    pub async fn execute(&mut self, command: Command) -> Result<Flow, SessionError> {
        match command {
            Command::AddHeader { name, value } => {
                writeln!(self.out, "Pair {} : {} is added to map.", name, value)?;
                if let Some(previous) = self.headers.add(name.as_str(), value.as_str()) {
                    tracing::debug!(name = %name, previous = %previous, "Header overwritten");
                }
            }
            Command::ListHeaders => {
                for (name, value) in self.headers.iter() {
                    writeln!(self.out, "\t - {} : {}", name, value)?;
                }
                writeln!(self.out, "--------------")?;
            }
            Command::Clear => {
                writeln!(self.out, "Clearing headers...")?;
                self.headers.clear();
                writeln!(self.out, "Headers are cleared.")?;
            }
            Command::Help => {
                self.out.write_all(HELP_TEXT.as_bytes())?;
            }
            Command::Send(kind) => self.send(kind).await?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    async fn send(&mut self, kind: RequestKind) -> Result<(), SessionError> {
        let request = PreparedRequest::new(kind, &self.endpoints, &self.headers);

        let (sent_line, reply_line) = match kind {
            RequestKind::Get => (
                format!("GET request is sent: {}", request.url()),
                "Server reply:",
            ),
            RequestKind::Post => (
                "\t - POST request is sent.".to_string(),
                "\t - Server reply:",
            ),
        };

        match self.sender.send(&request).await {
            Ok(response) => {
                writeln!(self.out, "{}", sent_line)?;
                if !response.is_success() {
                    writeln!(self.out, "Server returned status {}", response.status)?;
                }
                writeln!(self.out, "{}", reply_line)?;
                writeln!(self.out, "{}", response.render_body(self.pretty_json))?;
            }
            Err(e) => {
                tracing::warn!(method = %kind, url = %request.url(), error = %e, "Request failed");
                writeln!(self.out, "Request failed: {}", e)?;
            }
        }
        Ok(())
    }
}
