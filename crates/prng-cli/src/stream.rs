//! Streaming generated values to stdout or any writer.

use std::io::{BufWriter, Write};
use std::sync::atomic::AtomicBool;

use prng_core::{Algorithm, Generator, PrngError, SeedSource, Sink, drive};

use crate::format::OutputFormat;

/// Everything the stream needs, built once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    pub algorithm: Algorithm,
    pub seed: SeedSource,
    pub format: OutputFormat,
    pub unbuffered: bool,
    /// `None` streams until interrupted.
    pub count: Option<u64>,
}

/// A `Write` destination that renders each value with an [`OutputFormat`].
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
    flush_each: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat, flush_each: bool) -> Self {
        Self {
            writer,
            format,
            flush_each,
        }
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn accept(&mut self, value: u64) -> std::io::Result<()> {
        self.format.write_value(&mut self.writer, value)?;
        if self.flush_each {
            self.writer.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Stream values to stdout. Returns how many were written.
pub fn run(config: &StreamConfig, stop: &AtomicBool) -> Result<u64, PrngError> {
    let stdout = std::io::stdout();
    let out = stdout.lock();
    if config.unbuffered {
        stream_to(config, out, stop)
    } else {
        stream_to(config, BufWriter::with_capacity(64 * 1024, out), stop)
    }
}

/// Seed a generator from `config` and drive it into `writer`.
pub fn stream_to<W: Write>(
    config: &StreamConfig,
    writer: W,
    stop: &AtomicBool,
) -> Result<u64, PrngError> {
    let seed = config.seed.resolve();
    log::info!(
        "streaming {} (seed {seed}, from {})",
        config.algorithm,
        match config.seed {
            SeedSource::Explicit(_) => "command line",
            SeedSource::Clock => "clock",
        }
    );
    let mut generator = Generator::new(config.algorithm, seed);
    let mut sink = WriterSink::new(writer, config.format, config.unbuffered);
    drive(&mut generator, &mut sink, config.count, stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Radix, Width};

    fn config(algorithm: Algorithm, format: OutputFormat, count: u64) -> StreamConfig {
        StreamConfig {
            algorithm,
            seed: SeedSource::Explicit(1),
            format,
            unbuffered: false,
            count: Some(count),
        }
    }

    fn capture(config: &StreamConfig) -> String {
        let mut buf = Vec::new();
        stream_to(config, &mut buf, &AtomicBool::new(false)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_hex_stream_seed_one() {
        let c = config(
            Algorithm::Xorshift128Plus,
            OutputFormat::new(Radix::LowerHex, Width::Bits64),
            3,
        );
        assert_eq!(
            capture(&c),
            "75bf966008e7f6eb\n003ff9f818cfc033\n5a7be5d037d3f685\n"
        );
    }

    #[test]
    fn test_upper_hex_32_seed_one() {
        let c = config(
            Algorithm::Xorshift64Star,
            OutputFormat::new(Radix::UpperHex, Width::Bits32),
            2,
        );
        assert_eq!(capture(&c), "896CDD1D\nE079651D\n");
    }

    #[test]
    fn test_default_algorithm_decimal() {
        let c = config(Algorithm::default(), OutputFormat::default(), 1);
        assert_eq!(capture(&c), format!("{}\n", 0x67686affb0e4b2e1u64));
    }

    #[test]
    fn test_count_is_exact() {
        let c = config(Algorithm::Xorshift4096Star, OutputFormat::default(), 500);
        assert_eq!(capture(&c).lines().count(), 500);
    }

    #[test]
    fn test_unbuffered_flushes_each_value() {
        struct CountingWriter<'a> {
            flushes: &'a mut usize,
        }
        impl Write for CountingWriter<'_> {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                *self.flushes += 1;
                Ok(())
            }
        }

        let mut flushes = 0;
        let mut sink = WriterSink::new(
            CountingWriter {
                flushes: &mut flushes,
            },
            OutputFormat::default(),
            true,
        );
        for v in 0..10 {
            sink.accept(v).unwrap();
        }
        drop(sink);
        assert_eq!(flushes, 10);
    }

    #[test]
    fn test_broken_writer_is_sink_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut c = config(Algorithm::Xorshift64Star, OutputFormat::default(), 0);
        c.count = None;
        let err = stream_to(&c, Closed, &AtomicBool::new(false)).unwrap_err();
        assert!(matches!(err, PrngError::Sink(_)));
    }
}
