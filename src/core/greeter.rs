use crate::domain::model::Greeting;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct Greeter {
    greeting: Greeting,
}

impl Greeter {
    pub fn new(greeting: Greeting) -> Self {
        Self { greeting }
    }

    /// Writes the greeting line to `out` and flushes it.
    pub fn greet<W: Write>(&self, out: &mut W) -> Result<()> {
        let line = self.greeting.line();
        tracing::debug!(recipient = %self.greeting.target, "writing greeting");

        out.write_all(line.as_bytes())?;
        out.flush()?;

        tracing::debug!(bytes = line.len(), "greeting written");
        Ok(())
    }
}
