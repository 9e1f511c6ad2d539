//! Pull-based output stream and the loop that feeds it to a sink.
//!
//! ```text
//! Generator → Sequence (lazy, infinite) → drive() → Sink
//! ```
//!
//! The sequence never ends on its own. Callers stop by dropping it, by taking
//! a bounded prefix, or by raising the stop flag passed to [`drive`].

use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::PrngError;
use crate::generator::Generator;

/// Infinite iterator over a generator's outputs.
///
/// `G` is either an owned [`Generator`] or a `&mut Generator`; in the latter
/// case the generator keeps its advanced state when the sequence is dropped.
#[derive(Debug)]
pub struct Sequence<G> {
    generator: G,
}

impl<G> Sequence<G> {
    /// Wrap a generator without advancing it.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Recover the generator, positioned after the last pulled value.
    pub fn into_inner(self) -> G {
        self.generator
    }
}

impl<G: AsMut<Generator>> Iterator for Sequence<G> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.generator.as_mut().next_u64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<G: AsMut<Generator>> FusedIterator for Sequence<G> {}

/// Destination for generated values, one 64-bit word at a time.
pub trait Sink {
    /// Accept one value. An error ends the driving loop.
    fn accept(&mut self, value: u64) -> std::io::Result<()>;

    /// Push out anything buffered.
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Sink for Vec<u64> {
    fn accept(&mut self, value: u64) -> std::io::Result<()> {
        self.push(value);
        Ok(())
    }
}

/// Pull values from `generator` into `sink` until `limit` values have been
/// delivered or `stop` is raised. `None` means no limit.
///
/// Returns the number of values the sink accepted. A sink error aborts the
/// loop at once, without retry; the generator remains usable.
pub fn drive<S: Sink + ?Sized>(
    generator: &mut Generator,
    sink: &mut S,
    limit: Option<u64>,
    stop: &AtomicBool,
) -> Result<u64, PrngError> {
    let mut delivered = 0u64;
    let mut values = generator.sequence();
    while limit.is_none_or(|n| delivered < n) && !stop.load(Ordering::Relaxed) {
        let Some(value) = values.next() else { break };
        if let Err(e) = sink.accept(value) {
            log::debug!("sink rejected value after {delivered} values: {e}");
            return Err(PrngError::Sink(e));
        }
        delivered += 1;
    }
    sink.flush()?;
    let reason = if stop.load(Ordering::Relaxed) {
        "stop requested"
    } else {
        "limit reached"
    };
    log::debug!("stopped after {delivered} values: {reason}");
    Ok(delivered)
}
