//! User interaction seam: notifications and blocking confirmations.
//!
//! The client core talks to this trait so tests can script confirmation
//! answers and capture notifications.

use std::io::{self, BufRead, Write};

/// Trait defining the user notification and confirmation interface.
pub trait PromptServiceTrait {
    /// Show a message to the user.
    fn notify(&mut self, message: &str);
    /// Ask a yes/no question, blocking until answered. Returns true only on
    /// an explicit yes.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Console prompt: notifications go to stdout, confirmations read stdin.
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptServiceTrait for ConsolePrompt {
    fn notify(&mut self, message: &str) {
        println!("! {}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
