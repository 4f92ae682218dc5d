// Pattern: Decorator
// Each wrapper sends through the notifier it wraps, then through its own channel.

use crate::config::CatalogConfig;
use crate::error::Result;
use std::io::Write;

pub trait Notifier {
    /// Deliver the message, appending one log line per channel used.
    fn send(&self, log: &mut Vec<String>) -> String;
}

pub struct EmailNotification {
    text: String,
}

impl EmailNotification {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Notifier for EmailNotification {
    fn send(&self, log: &mut Vec<String>) -> String {
        log.push(format!("Sent through Email: {}", self.text));
        self.text.clone()
    }
}

pub struct TelegramNotification {
    wrapped: Box<dyn Notifier>,
}

impl TelegramNotification {
    pub fn new(wrapped: impl Notifier + 'static) -> Self {
        Self {
            wrapped: Box::new(wrapped),
        }
    }
}

impl Notifier for TelegramNotification {
    fn send(&self, log: &mut Vec<String>) -> String {
        let text = self.wrapped.send(log);
        log.push(format!("Sent through Telegram: {}", text));
        text
    }
}

pub struct SlackNotification {
    wrapped: Box<dyn Notifier>,
}

impl SlackNotification {
    pub fn new(wrapped: impl Notifier + 'static) -> Self {
        Self {
            wrapped: Box::new(wrapped),
        }
    }
}

impl Notifier for SlackNotification {
    fn send(&self, log: &mut Vec<String>) -> String {
        let text = self.wrapped.send(log);
        log.push(format!("Sent through Slack: {}", text));
        text
    }
}

// Sent through Email: Please fix this bug ASAP
// --------------------------------------------------
// Sent through Email: Please fix this bug ASAP
// Sent through Telegram: Please fix this bug ASAP
// Sent through Slack: Please fix this bug ASAP
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    const TEXT: &str = "Please fix this bug ASAP";
    let notification = EmailNotification::new(TEXT);
    let urgent_notification =
        SlackNotification::new(TelegramNotification::new(EmailNotification::new(TEXT)));

    let mut log = Vec::new();
    notification.send(&mut log);
    log.push("-".repeat(50));
    urgent_notification.send(&mut log);

    for line in log {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
