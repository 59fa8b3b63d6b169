use crate::domain::ports::{Clock, Console};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

/// [`Console`] over any byte sink; the binary wraps stdout.
#[derive(Debug)]
pub struct WriterConsole<W: Write> {
    writer: W,
}

impl<W: Write> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn msg(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn lf(&mut self) -> Result<()> {
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Monotonic milliseconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn time_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
