use crate::core::presenter::render_text;
use crate::domain::model::DeliveryPayload;
use crate::domain::ports::DeliveryChannel;
use crate::utils::error::Result;
use std::io::Write;

/// Writes the rendered report to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleChannel;

impl ConsoleChannel {
    pub fn new() -> Self {
        Self
    }
}

impl DeliveryChannel for ConsoleChannel {
    async fn send(&self, payload: &DeliveryPayload) -> Result<()> {
        let text = render_text(payload);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }
}
