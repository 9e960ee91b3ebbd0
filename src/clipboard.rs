//! Clipboard sinks
//!
//! The submission flow only needs "put this text on the clipboard". The
//! system implementation shells out to whichever clipboard utility is
//! installed, or to a command configured by the user.

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard utility found (tried wl-copy, xclip, xsel, pbcopy)")]
    Unavailable,

    #[error("Failed to spawn clipboard command '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to clipboard: {0}")]
    Write(#[source] std::io::Error),

    #[error("Clipboard command '{command}' exited with {status}")]
    Failed { command: String, status: String },
}

/// Anything that can accept a UTF-8 payload as the new clipboard contents
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Writes to the desktop clipboard through an external program
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    /// Shell command that reads the payload on stdin, overriding detection
    command: Option<String>,
}

impl SystemClipboard {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn resolve(&self) -> Result<(Command, String), ClipboardError> {
        if let Some(ref shell_cmd) = self.command {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(shell_cmd);
            return Ok((cmd, shell_cmd.clone()));
        }

        for (program, args) in CLIPBOARD_PROGRAMS {
            if which::which(program).is_ok() {
                let mut cmd = Command::new(program);
                cmd.args(*args);
                return Ok((cmd, program.to_string()));
            }
        }

        Err(ClipboardError::Unavailable)
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let (mut cmd, label) = self.resolve()?;
        log::debug!("Copying {} bytes to clipboard via {}", text.len(), label);

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                command: label.clone(),
                source,
            })?;

        let written = match child.stdin.take() {
            // stdin is dropped at the end of the arm so the child sees EOF
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(ClipboardError::Write)?;
        written.map_err(ClipboardError::Write)?;
        if !status.success() {
            return Err(ClipboardError::Failed {
                command: label,
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Keeps the last payload in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

#[cfg(test)]
impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "clipboard permission denied",
            )));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
