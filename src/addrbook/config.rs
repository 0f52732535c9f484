use crate::error::{AddrBookError, Result};
use crate::upcoming::DEFAULT_WINDOW_DAYS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_PROMPT: &str = "Enter a command: ";
const DEFAULT_GREETING: &str = "Welcome to the assistant bot!";

/// Runtime configuration. Every field has a default, so an empty JSON object
/// (or no file at all) gives the stock behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// How many days ahead `birthdays` looks, inclusive
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Prompt printed before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Banner printed when the session starts
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            prompt: default_prompt(),
            greeting: default_greeting(),
        }
    }
}

impl BookConfig {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(AddrBookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }
}
