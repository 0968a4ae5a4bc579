use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TARGET: &str = "Flipp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub target: String,
}

impl Greeting {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The rendered greeting terminated by a newline.
    pub fn line(&self) -> String {
        format!("{}\n", self)
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello {}!", self.target)
    }
}
