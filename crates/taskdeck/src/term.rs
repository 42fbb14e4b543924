// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal implementations of the notification and confirmation seams.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use colored::Colorize;

use taskdeck_core::{ConfirmPrompt, Notifier, NoticeLevel};

/// Writes notifications to stderr with level-based coloring.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, message: &str, level: NoticeLevel, _duration: Duration) {
        let line = match level {
            NoticeLevel::Success => format!("{} {message}", "ok:".green().bold()),
            NoticeLevel::Error => format!("{} {message}", "error:".red().bold()),
            NoticeLevel::Info => format!("{} {message}", "info:".blue().bold()),
        };
        eprintln!("{line}");
    }
}

/// Reads a yes/no answer from stdin, with an auto-confirm escape hatch
/// for scripted use (`--yes`).
pub struct StdinConfirm {
    pub assume_yes: bool,
}

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_yes_skips_the_prompt() {
        let confirm = StdinConfirm { assume_yes: true };
        assert!(confirm.confirm("Delete everything?"));
    }
}
