// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod accumulator;
pub mod common;
pub mod extractor;

// Re-export key types for convenience
pub use accumulator::{Accumulator, CycleReport, CycleStop};
pub use common::NmeaError;
pub use common::{FieldIndex, SentenceId};
pub use extractor::{extract_field, field_slice, resolve_field_name};
