// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod hal_traits;
pub mod sentence;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From error.rs
pub use error::NmeaError;

// From hal_traits.rs
pub use hal_traits::{ByteSource, PollTimer}; // Core sync traits

// From sentence.rs
pub use sentence::{
    FieldIndex, SentenceId, FIELD_SEPARATOR, NULL_FILLER, NULL_SENTINEL, SENTENCE_TERMINATOR,
};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// --- Feature-gated re-exports ---

// Async source trait (from hal_traits.rs)
#[cfg(feature = "async")]
pub use hal_traits::ByteSourceAsync;

// embedded-hal delay adapter (from hal_traits.rs)
#[cfg(feature = "impl-hal")]
pub use hal_traits::HalDelay;
