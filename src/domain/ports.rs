use crate::utils::error::Result;
use std::io::Write;

/// Something that can swim.
///
/// Implementors only describe how they swim; writing the line is shared.
pub trait Swimmable {
    /// The line `swim` emits, without the trailing newline.
    fn swim_message(&self) -> String;

    fn write_swim(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.swim_message())?;
        Ok(())
    }

    /// Prints the swim line to stdout. Write failures are logged, not returned.
    fn swim(&self) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_swim(&mut handle) {
            tracing::warn!("Failed to write swim line: {}", e);
        }
    }
}
