//! Deep-link handoff to the external messaging client

use crate::platform;
use std::fmt::Write as _;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// Base of every messaging deep link
pub const DEEP_LINK_BASE: &str = "https://wa.me/";

/// Default contact handle receiving applications
pub const DEFAULT_CONTACT_NUMBER: &str = "254790777449";

/// Failure to hand a link to the desktop
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("failed to launch link opener: {0}")]
    Spawn(#[from] std::io::Error),
}

/// A messaging deep link with an optional prefilled body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    contact: String,
    message: Option<String>,
}

impl DeepLink {
    pub fn new(contact: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            message: None,
        }
    }

    pub fn with_message(contact: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            message: Some(message.into()),
        }
    }

    pub fn url(&self) -> String {
        match &self.message {
            Some(message) => format!(
                "{DEEP_LINK_BASE}{}?text={}",
                self.contact,
                encode_uri_component(message)
            ),
            None => format!("{DEEP_LINK_BASE}{}", self.contact),
        }
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Opens URLs in an external application
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError>;
}

/// Opens links with the operating system's default handler.
///
/// The handler is launched and left running; `open` never waits for it to
/// exit. A non-zero exit is only logged.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl Default for SystemOpener {
    fn default() -> Self {
        let (program, args) = platform::open_command();
        Self::with_command(program, args)
    }
}

impl SystemOpener {
    /// Use `program args... <url>` instead of the platform handler
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    tracing::warn!("{program} exited with {status}");
                }
                Err(err) => tracing::warn!("Failed to wait for {program}: {err}"),
                Ok(_) => {}
            }
        });
        Ok(())
    }
}
