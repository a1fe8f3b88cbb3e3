use clap::Parser;
use memdump_core::{dump, WriterSink, BYTES_PER_LINE};
use std::io;
use tracing::info;

/// Reference block exercising every glyph class: printable ASCII,
/// dots for other non-printables, spaces for 0x00 and 0xFF.
const SAMPLE_BLOCK: [u8; 32] = [
    0xF1, 0x81, 0x82, 0x00, 0x08, 0x02, 0x00, 0x27, 0xFF, 0xFF, 0x0E, 0xB3, 0x81, 0xFC, 0x9B,
    0x47, 0x00, 0x00, 0x00, 0x00, 0x20, 0x65, 0x00, 0x0F, 0xBE, 0xEB, 0x9B, 0x98, 0x2C, 0xF1,
    0x08, 0x2C,
];

/// Format synthesized memory buffers as classic hex+ASCII dump lines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of bytes of the counter pattern to dump
    #[arg(short, long, default_value = "64")]
    length: usize,

    /// Dump the built-in reference block instead of the counter pattern
    #[arg(long)]
    sample: bool,

    /// Enable formatter-level tracing
    #[arg(short, long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(io::stderr)
            .init();
    }

    let (buffer, length) = if args.sample {
        (SAMPLE_BLOCK.to_vec(), SAMPLE_BLOCK.len())
    } else {
        // The formatter always renders full 16-byte lines, so allocate
        // through the next line boundary.
        let padded = args.length.div_ceil(BYTES_PER_LINE) * BYTES_PER_LINE;
        let buffer: Vec<u8> = (0..padded).map(|i| i as u8).collect();
        (buffer, args.length)
    };

    info!("Dumping {} bytes", length);

    let mut sink = WriterSink::new(io::stdout().lock());
    dump(&buffer, length, &mut sink)?;

    Ok(())
}
