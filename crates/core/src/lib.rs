pub mod format;
pub mod sink;


#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("Output sink rejected a write: {0}")]
    Sink(#[from] std::io::Error),
}

pub type DumpResult<T> = Result<T, DumpError>;

/// Trait representing a destination for sequential dump text.
///
/// The formatter emits text fragments in order and marks line ends
/// explicitly, so a sink can be a console stream, a serial port handle
/// or an in-memory line buffer.
pub trait DumpSink {
    fn put_str(&mut self, text: &str) -> DumpResult<()>;
    fn end_line(&mut self) -> DumpResult<()>;
}

pub use format::{dump, format_byte, format_offset, glyph, BYTES_PER_LINE};
pub use sink::{CaptureSink, WriterSink};
