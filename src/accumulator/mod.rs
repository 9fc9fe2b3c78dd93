//! Bounded accumulation of a polled byte stream.
//!
//! One [`Accumulator`] owns one fixed-capacity buffer and fills it over one
//! "cycle": a loop of non-blocking polls against a [`ByteSource`], bounded
//! by a budget of consecutive empty polls. The finished buffer is handed to
//! the extractor functions in [`crate::extractor`]; this module never
//! interprets the text it collects.

use crate::common::{
    error::NmeaError,
    hal_traits::{ByteSource, PollTimer},
    sentence::{NULL_FILLER, NULL_SENTINEL},
    timing,
};
use arrayvec::ArrayVec;

/// Largest slice requested from the source in a single poll.
///
/// A receiver rarely has more than a sentence or two pending; 64 bytes
/// keeps the scratch space small without starving the loop.
pub const POLL_CHUNK: usize = 64;

/// Why a cycle stopped collecting.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CycleStop {
    /// The empty-poll budget was exhausted.
    Idle,
    /// The buffer reached capacity. Not an error: the bytes collected so
    /// far are valid, the caller starts a fresh cycle for the rest.
    BufferFull,
}

/// Outcome of one accumulation cycle.
///
/// `len == 0` with [`CycleStop::Idle`] means the source had nothing to
/// offer within the budget; callers typically skip extraction and re-run
/// the cycle later.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CycleReport {
    /// Bytes collected this cycle.
    pub len: usize,
    /// The stop condition that ended the cycle.
    pub stop: CycleStop,
}

impl CycleReport {
    /// True if the cycle collected nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Replaces every [`NULL_SENTINEL`] byte with [`NULL_FILLER`].
///
/// Some transports pad their receive path with NUL bytes where a line
/// terminator was intended; left in place they would split or swallow
/// sentences during scanning. Applied to each chunk before it is appended.
pub fn scrub_nulls(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        if *byte == NULL_SENTINEL {
            *byte = NULL_FILLER;
        }
    }
}

/// Owns the accumulation buffer for a polled sentence stream.
///
/// `CAP` is the buffer capacity in bytes. Content past the current length
/// is never exposed; [`Accumulator::as_bytes`] returns only collected
/// bytes. Each [`run_cycle`](Accumulator::run_cycle) clears the buffer
/// first, so cycles are independent unless the caller copies data out.
#[derive(Debug)]
pub struct Accumulator<const CAP: usize> {
    buf: ArrayVec<u8, CAP>,
}

impl<const CAP: usize> Accumulator<CAP> {
    pub fn new() -> Self {
        Accumulator {
            buf: ArrayVec::new(),
        }
    }

    /// Bytes collected by the most recent cycle.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Clears the buffer (length reset; bytes are not rezeroed).
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Runs one accumulation cycle.
    ///
    /// Clears the buffer, then repeatedly polls `source` for whatever fits
    /// in the remaining capacity. Chunks are scrubbed of null sentinels
    /// (see [`scrub_nulls`]) and appended in arrival order. An empty poll
    /// (`WouldBlock` or a zero count) increments a counter and yields for
    /// [`timing::EMPTY_POLL_DELAY`] before the next attempt; any non-empty
    /// poll resets the counter.
    ///
    /// The cycle stops when `retry_budget` consecutive polls came back
    /// empty, or when the buffer is full. A `retry_budget` of 0 polls once
    /// and gives up on the first empty result.
    ///
    /// # Errors
    ///
    /// Returns [`NmeaError::Io`] if the source reports a transport error.
    /// Bytes collected before the error remain in the buffer.
    pub fn run_cycle<S, T>(
        &mut self,
        source: &mut S,
        timer: &mut T,
        retry_budget: u32,
    ) -> Result<CycleReport, NmeaError<S::Error>>
    where
        S: ByteSource,
        T: PollTimer,
    {
        self.buf.clear();
        let mut chunk = [0u8; POLL_CHUNK];
        let mut empty_polls: u32 = 0;

        loop {
            let remaining = CAP - self.buf.len();
            if remaining == 0 {
                return Ok(CycleReport {
                    len: self.buf.len(),
                    stop: CycleStop::BufferFull,
                });
            }
            let want = remaining.min(POLL_CHUNK);

            match source.poll_bytes(&mut chunk[..want]) {
                Ok(count) if count > 0 => {
                    empty_polls = 0;
                    let take = count.min(want);
                    let bytes = &mut chunk[..take];
                    scrub_nulls(bytes);
                    if self.buf.try_extend_from_slice(bytes).is_err() {
                        return Ok(CycleReport {
                            len: self.buf.len(),
                            stop: CycleStop::BufferFull,
                        });
                    }
                }
                Ok(_) | Err(nb::Error::WouldBlock) => {
                    empty_polls = empty_polls.saturating_add(1);
                    if empty_polls >= retry_budget.max(1) {
                        return Ok(CycleReport {
                            len: self.buf.len(),
                            stop: CycleStop::Idle,
                        });
                    }
                    timer.delay_us(timing::EMPTY_POLL_DELAY.as_micros() as u32);
                }
                Err(nb::Error::Other(e)) => return Err(NmeaError::Io(e)),
            }
        }
    }

    /// Async twin of [`run_cycle`](Accumulator::run_cycle) (requires the
    /// 'async' feature). Same budget and stop conditions; the backoff runs
    /// through an `embedded_hal_async` delay.
    #[cfg(feature = "async")]
    pub async fn run_cycle_async<S, D>(
        &mut self,
        source: &mut S,
        delay: &mut D,
        retry_budget: u32,
    ) -> Result<CycleReport, NmeaError<S::Error>>
    where
        S: crate::common::hal_traits::ByteSourceAsync,
        D: embedded_hal_async::delay::DelayNs,
    {
        self.buf.clear();
        let mut chunk = [0u8; POLL_CHUNK];
        let mut empty_polls: u32 = 0;

        loop {
            let remaining = CAP - self.buf.len();
            if remaining == 0 {
                return Ok(CycleReport {
                    len: self.buf.len(),
                    stop: CycleStop::BufferFull,
                });
            }
            let want = remaining.min(POLL_CHUNK);

            match source.poll_bytes(&mut chunk[..want]).await {
                Ok(count) if count > 0 => {
                    empty_polls = 0;
                    let take = count.min(want);
                    let bytes = &mut chunk[..take];
                    scrub_nulls(bytes);
                    if self.buf.try_extend_from_slice(bytes).is_err() {
                        return Ok(CycleReport {
                            len: self.buf.len(),
                            stop: CycleStop::BufferFull,
                        });
                    }
                }
                Ok(_) => {
                    empty_polls = empty_polls.saturating_add(1);
                    if empty_polls >= retry_budget.max(1) {
                        return Ok(CycleReport {
                            len: self.buf.len(),
                            stop: CycleStop::Idle,
                        });
                    }
                    delay
                        .delay_us(timing::EMPTY_POLL_DELAY.as_micros() as u32)
                        .await;
                }
                Err(e) => return Err(NmeaError::Io(e)),
            }
        }
    }
}

impl<const CAP: usize> Default for Accumulator<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
