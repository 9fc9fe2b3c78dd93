// src/common/error.rs

// No cfg_attr needed here, thiserror is always available
#[derive(Debug, thiserror::Error)]
pub enum NmeaError<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Io error
{
    /// Underlying I/O error from the byte-source implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// Sentence identifier contains a byte outside the talker/type alphabet.
    #[error("Invalid sentence tag byte: {0:#04x}")]
    InvalidTagByte(u8),

    /// Sentence identifier is empty or longer than a tag can be.
    #[error("Invalid sentence tag length: {0}")]
    InvalidTagLength(usize),
}

// No manual Display impl needed - thiserror handles it.
// No manual std::error::Error impl needed - thiserror handles it when its 'std' feature is enabled.

// Allow mapping from the underlying HAL error if From is implemented
impl<E: core::fmt::Debug> From<E> for NmeaError<E> {
    fn from(e: E) -> Self {
        NmeaError::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
