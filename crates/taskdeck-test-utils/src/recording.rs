// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording notifier and scripted confirmation prompt.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use taskdeck_core::{ConfirmPrompt, Notifier, NoticeLevel};

/// Notifier that records every message for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(String, NoticeLevel)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded notices in delivery order.
    pub fn notices(&self) -> Vec<(String, NoticeLevel)> {
        self.notices.lock().unwrap().clone()
    }

    /// Messages recorded at the given level.
    pub fn messages_at(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, l)| *l == level)
            .map(|(m, _)| m.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, level: NoticeLevel, _duration: Duration) {
        self.notices.lock().unwrap().push((message.to_string(), level));
    }
}

/// Confirmation prompt with a fixed scripted answer.
pub struct ScriptedConfirm {
    answer: bool,
    prompts: AtomicUsize,
}

impl ScriptedConfirm {
    /// A prompt that always confirms.
    pub fn always() -> Self {
        Self {
            answer: true,
            prompts: AtomicUsize::new(0),
        }
    }

    /// A prompt that always declines.
    pub fn never() -> Self {
        Self {
            answer: false,
            prompts: AtomicUsize::new(0),
        }
    }

    /// Number of times the prompt was shown.
    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_core::DEFAULT_NOTICE_DURATION;

    #[test]
    fn notifier_records_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.success("created");
        notifier.error("failed");
        notifier.notify("info", NoticeLevel::Info, DEFAULT_NOTICE_DURATION);

        let notices = notifier.notices();
        assert_eq!(notices.len(), 3);
        assert_eq!(notices[0], ("created".to_string(), NoticeLevel::Success));
        assert_eq!(notifier.messages_at(NoticeLevel::Error), vec!["failed"]);
    }

    #[test]
    fn scripted_confirm_counts_prompts() {
        let confirm = ScriptedConfirm::never();
        assert!(!confirm.confirm("delete?"));
        assert!(!confirm.confirm("really?"));
        assert_eq!(confirm.prompt_count(), 2);
    }
}
