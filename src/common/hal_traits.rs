// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for timer/delay operations used by the accumulation loop.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::delay::DelayNs` if embedded-hal v1 is mandated; the
/// `impl-hal` feature provides an adapter instead.
pub trait PollTimer {
    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for a polled, non-blocking byte stream.
///
/// This is the only capability the parser requires from a transport. The
/// underlying device may be a UART, a SPI-attached bridge, or anything else
/// that can hand over "whatever bytes have arrived since the last poll".
pub trait ByteSource {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Attempts to read up to `buf.len()` bytes into `buf`.
    ///
    /// Returns `Ok(count)` with the number of bytes written, or
    /// `Err(nb::Error::WouldBlock)` if nothing has arrived yet. Other errors
    /// are returned as `Err(nb::Error::Other(Self::Error))`.
    ///
    /// `Ok(0)` is treated by callers exactly like `WouldBlock`: an empty poll.
    fn poll_bytes(&mut self, buf: &mut [u8]) -> nb::Result<usize, Self::Error>;
}

/// Abstraction for an asynchronous byte stream (requires 'async' feature).
#[cfg(feature = "async")]
pub trait ByteSourceAsync {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Asynchronously reads up to `buf.len()` bytes into `buf`.
    ///
    /// Resolves to `Ok(0)` when the transport currently has nothing to offer;
    /// callers count that as an empty poll.
    async fn poll_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Drives [`PollTimer`] through any `embedded_hal::delay::DelayNs` impl.
///
/// Requires `embedded-hal` v1.0 (the `impl-hal` feature).
#[cfg(feature = "impl-hal")]
pub struct HalDelay<D>(pub D);

#[cfg(feature = "impl-hal")]
impl<D: embedded_hal::delay::DelayNs> PollTimer for HalDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
