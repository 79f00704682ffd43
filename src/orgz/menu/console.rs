use crate::commands::{CmdMessage, MessageLevel};
use crate::error::{OrgzError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// The injected input/output boundary of the menu.
///
/// Everything the menu reads or prints goes through this trait, so the
/// whole interactive surface runs headlessly in tests with a scripted
/// console.
pub trait Console {
    /// Print `prompt` (no trailing newline) and read one line of input,
    /// trimmed. Errors when input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<String>;

    /// Write one line of plain output.
    fn say(&mut self, text: &str);

    /// Render a leveled command message.
    fn report(&mut self, message: &CmdMessage);
}

/// Production console on stdin/stdout.
#[derive(Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush().map_err(OrgzError::Io)?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).map_err(OrgzError::Io)?;
        if read == 0 {
            return Err(OrgzError::Input("end of input".to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn report(&mut self, message: &CmdMessage) {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// A console fed from a fixed script, capturing everything printed.
    pub struct ScriptedConsole {
        inputs: VecDeque<String>,
        pub output: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                output: Vec::new(),
            }
        }

        /// Everything printed so far, one line per entry.
        pub fn printed(&self) -> String {
            self.output.join("\n")
        }
    }

    impl Console for ScriptedConsole {
        fn prompt(&mut self, _prompt: &str) -> Result<String> {
            self.inputs
                .pop_front()
                .ok_or_else(|| OrgzError::Input("script exhausted".to_string()))
        }

        fn say(&mut self, text: &str) {
            self.output.push(text.to_string());
        }

        fn report(&mut self, message: &CmdMessage) {
            self.output.push(message.content.clone());
        }
    }
}
