//! Presentation layer.
//!
//! The flows render through [`UserInterface`] so orchestration stays
//! testable; [`ConsoleUi`] writes to the terminal and [`MockUi`] records
//! events for assertions.

use std::sync::{Arc, Mutex};

pub trait UserInterface: Send + Sync {
    /// Page-level heading.
    fn title(&self, text: &str);
    /// Divider-style section heading.
    fn section(&self, title: &str);
    /// Body text, rendered as received (markdown/bullets stay opaque).
    fn paragraph(&self, text: &str);
    /// Display an image by location (a file path or a hosted URL).
    fn image(&self, location: &str, caption: &str);
    /// Short-lived progress line shown while waiting on a remote call.
    fn busy(&self, text: &str);
    fn warning(&self, text: &str);
    fn error(&self, text: &str);
}

pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for ConsoleUi {
    fn title(&self, text: &str) {
        println!("\n{}", text);
        println!("{}", "=".repeat(text.len()));
    }

    fn section(&self, title: &str) {
        println!("\n{}", title);
        println!("{}", "-".repeat(title.len()));
    }

    fn paragraph(&self, text: &str) {
        println!("{}", text);
    }

    fn image(&self, location: &str, caption: &str) {
        println!("{}: {}", caption, location);
    }

    fn busy(&self, text: &str) {
        println!("{}", text);
    }

    fn warning(&self, text: &str) {
        eprintln!("warning: {}", text);
    }

    fn error(&self, text: &str) {
        eprintln!("error: {}", text);
    }
}

/// One rendered UI interaction, recorded by [`MockUi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Title(String),
    Section(String),
    Paragraph(String),
    Image { location: String, caption: String },
    Busy(String),
    Warning(String),
    Error(String),
}

#[derive(Clone)]
pub struct MockUi {
    events: Arc<Mutex<Vec<UiEvent>>>,
}

impl MockUi {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything rendered so far, in order.
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Default for MockUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for MockUi {
    fn title(&self, text: &str) {
        self.record(UiEvent::Title(text.to_string()));
    }

    fn section(&self, title: &str) {
        self.record(UiEvent::Section(title.to_string()));
    }

    fn paragraph(&self, text: &str) {
        self.record(UiEvent::Paragraph(text.to_string()));
    }

    fn image(&self, location: &str, caption: &str) {
        self.record(UiEvent::Image {
            location: location.to_string(),
            caption: caption.to_string(),
        });
    }

    fn busy(&self, text: &str) {
        self.record(UiEvent::Busy(text.to_string()));
    }

    fn warning(&self, text: &str) {
        self.record(UiEvent::Warning(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.record(UiEvent::Error(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_ui_records_events_in_order() {
        let ui = MockUi::new();
        ui.section("Breed");
        ui.paragraph("- **Beagle**");
        ui.warning("Please enter a breed name.");

        assert_eq!(
            ui.events(),
            vec![
                UiEvent::Section("Breed".to_string()),
                UiEvent::Paragraph("- **Beagle**".to_string()),
                UiEvent::Warning("Please enter a breed name.".to_string()),
            ]
        );
    }
}
