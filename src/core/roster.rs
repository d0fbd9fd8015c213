use crate::core::{Swimmable, Swimmer};
use crate::utils::error::Result;
use std::io::Write;

/// Writes one swim line per swimmer, in slice order.
pub fn swim_each(swimmers: &[&dyn Swimmable], out: &mut dyn Write) -> Result<usize> {
    for swimmer in swimmers {
        swimmer.write_swim(out)?;
    }
    Ok(swimmers.len())
}

#[derive(Debug, Clone)]
pub struct Roster {
    name: String,
    swimmers: Vec<Swimmer>,
    repeat: usize,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            swimmers: Vec::new(),
            repeat: 1,
        }
    }

    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn push(&mut self, swimmer: impl Into<Swimmer>) {
        self.swimmers.push(swimmer.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repeat(&self) -> usize {
        self.repeat
    }

    pub fn swimmers(&self) -> &[Swimmer] {
        &self.swimmers
    }

    pub fn len(&self) -> usize {
        self.swimmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swimmers.is_empty()
    }

    /// Each swimmer swims `repeat` times before the next one starts.
    pub fn swim_all(&self, out: &mut dyn Write) -> Result<usize> {
        tracing::debug!(
            "Roster '{}': {} swimmers, repeat {}",
            self.name,
            self.swimmers.len(),
            self.repeat
        );

        let mut lines = 0;
        for (index, swimmer) in self.swimmers.iter().enumerate() {
            tracing::debug!("#{} {} ({})", index, swimmer.kind(), swimmer.name());
            for _ in 0..self.repeat {
                swimmer.write_swim(out)?;
                lines += 1;
            }
        }
        out.flush()?;

        tracing::info!("🏊 Roster '{}' swam {} lines", self.name, lines);
        Ok(lines)
    }

    /// One JSON object per line: the tagged swimmer plus its swim `message`.
    pub fn write_json(&self, out: &mut dyn Write) -> Result<usize> {
        for swimmer in &self.swimmers {
            let mut value = serde_json::to_value(swimmer)?;
            if let Some(object) = value.as_object_mut() {
                object.insert(
                    "message".to_string(),
                    serde_json::Value::String(swimmer.swim_message()),
                );
            }
            serde_json::to_writer(&mut *out, &value)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(self.swimmers.len())
    }

    pub fn swim_all_stdout(&self) -> Result<usize> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.swim_all(&mut handle)
    }
}

impl Extend<Swimmer> for Roster {
    fn extend<I: IntoIterator<Item = Swimmer>>(&mut self, iter: I) {
        self.swimmers.extend(iter);
    }
}
