use crate::{DumpResult, DumpSink};
use std::io::Write;

/// Adapts any [`Write`] destination (stdout, a serial port handle, a
/// byte vector) into a [`DumpSink`].
///
/// Line ends flush the underlying writer so partial dumps stay visible
/// when the dumping process stops mid-way.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> DumpSink for WriterSink<W> {
    fn put_str(&mut self, text: &str) -> DumpResult<()> {
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }

    fn end_line(&mut self) -> DumpResult<()> {
        self.inner.write_all(b"\n")?;
        self.inner.flush()?;
        Ok(())
    }
}

/// In-memory sink collecting completed lines.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Vec<String>,
    current: String,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl DumpSink for CaptureSink {
    fn put_str(&mut self, text: &str) -> DumpResult<()> {
        self.current.push_str(text);
        Ok(())
    }

    fn end_line(&mut self) -> DumpResult<()> {
        self.lines.push(std::mem::take(&mut self.current));
        Ok(())
    }
}
