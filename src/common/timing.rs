// src/common/timing.rs

use core::time::Duration;

// Note: NMEA-0183 itself specifies 4800 baud, but most receiver modules
// ship configured for 9600 8N1. The pacing constants here use 9600; callers
// talking to a 4800-baud device should scale budgets up.

// === Byte Timing at 9600 Baud (8N1) ===
// 1 start bit + 8 data bits + 1 stop bit = 10 bits per byte
// Time per bit = 1 / 9600 seconds = 0.1042 ms
// Time per byte = 10 / 9600 seconds = 1.0417 ms

/// Nominal duration of a single bit at 9600 baud.
pub const BIT_DURATION: Duration = Duration::from_nanos(104_167); // Approx 0.104 ms
/// Nominal duration of a single byte (10 bits total) at 9600 baud (8N1 format).
pub const BYTE_DURATION: Duration = Duration::from_micros(1042); // Approx 1.04 ms

// === Accumulation Cycle Pacing ===

/// Fixed cooperative yield between consecutive empty polls.
///
/// Roughly one byte time: polling faster than the line can deliver a byte
/// only burns the empty-poll budget.
pub const EMPTY_POLL_DELAY: Duration = Duration::from_micros(1000);

// === Sentence Limits ===

/// Maximum length of one sentence, including the leading "$" and the
/// CR/LF pair (NMEA-0183 Sec 5.3 caps a sentence at 82 characters).
pub const MAX_SENTENCE_LEN: usize = 82;
