//! Terminal notifications

use colored::Colorize;
use gitref_core::capability::Notifier;

/// Prints notifications to the terminal, errors and warnings on stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show_info(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn show_warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    fn show_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
