//! Terminal output for command results
//!
//! Results go to stdout, errors to stderr. Every line gets an emoji prefix
//! that falls back to a text tag on terminals without Unicode support.

use std::fmt::Display;

use console::{Emoji, style};

static ERROR_EMOJI: Emoji<'_, '_> = Emoji("❌ ", "[E] ");
static INFO_EMOJI: Emoji<'_, '_> = Emoji("ℹ️ ", "[I] ");
static SUCCESS_EMOJI: Emoji<'_, '_> = Emoji("✅ ", "OK ");
static WARN_EMOJI: Emoji<'_, '_> = Emoji("⚠️ ", "[W] ");

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MessageType {
    Error,
    Info,
    Success,
    Warning,
}

/// Formats and prints status lines, with or without color
#[derive(Debug, Clone, Copy)]
pub(crate) struct TerminalReporter {
    use_colors: bool,
}

impl TerminalReporter {
    #[must_use]
    pub(crate) fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub(crate) fn status_line(self, message_type: MessageType, message: impl Display) -> String {
        let prefix = match message_type {
            MessageType::Error => ERROR_EMOJI,
            MessageType::Info => INFO_EMOJI,
            MessageType::Success => SUCCESS_EMOJI,
            MessageType::Warning => WARN_EMOJI,
        };

        let formatted_message = if self.use_colors {
            match message_type {
                MessageType::Error => style(message).for_stderr().red().bold().to_string(),
                MessageType::Info => style(message).blue().to_string(),
                MessageType::Success => style(message).green().to_string(),
                MessageType::Warning => style(message).yellow().bold().to_string(),
            }
        } else {
            message.to_string()
        };

        format!("{prefix}{formatted_message}")
    }

    /// Bold key text; cyan too when colors are on
    pub(crate) fn format_key(self, text: impl Display) -> String {
        let styled = style(text.to_string()).bold();

        if self.use_colors {
            styled.cyan().to_string()
        } else {
            styled.force_styling(false).to_string()
        }
    }

    pub(crate) fn report_info(self, message: impl Display) {
        println!("{}", self.status_line(MessageType::Info, message));
    }

    pub(crate) fn report_success(self, message: impl Display) {
        println!("{}", self.status_line(MessageType::Success, message));
    }

    pub(crate) fn report_warning(self, message: impl Display) {
        println!("{}", self.status_line(MessageType::Warning, message));
    }

    /// Errors go to stderr so scripted callers can keep stdout clean
    pub(crate) fn report_error(self, message: impl Display) {
        eprintln!("{}", self.status_line(MessageType::Error, message));
    }
}
