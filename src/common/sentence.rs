// src/common/sentence.rs

use super::error::NmeaError;
use core::convert::TryFrom;
use core::fmt;

/// Byte separating fields within a sentence.
pub const FIELD_SEPARATOR: u8 = b',';

/// Byte terminating a complete sentence (the CR of the CR/LF pair).
pub const SENTENCE_TERMINATOR: u8 = b'\r';

/// Placeholder byte some transports emit where a line terminator was
/// intended. Must be remapped before text scanning.
pub const NULL_SENTINEL: u8 = 0x00;

/// Replacement written over every [`NULL_SENTINEL`] during accumulation.
pub const NULL_FILLER: u8 = SENTENCE_TERMINATOR;

/// Longest talker/type tag the extractor will accept.
pub const MAX_TAG_LEN: usize = 8;

/// A talker/type tag identifying a sentence family, e.g. `"GPGGA"`.
///
/// Borrowed per call; the extractor matches it as an exact substring of the
/// accumulated buffer. Validation admits the tag alphabet only (ASCII
/// uppercase letters and digits), so a tag can never contain a field
/// separator or terminator.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SentenceId<'a>(&'a str);

impl<'a> SentenceId<'a> {
    /// Creates a new `SentenceId` if the given string is a valid tag.
    ///
    /// Returns `Result<Self, NmeaError<()>>` because validation itself
    /// cannot cause an I/O error.
    pub fn new(tag: &'a str) -> Result<Self, NmeaError<()>> {
        if tag.is_empty() || tag.len() > MAX_TAG_LEN {
            return Err(NmeaError::InvalidTagLength(tag.len()));
        }
        match tag.bytes().find(|b| !Self::is_valid_tag_byte(*b)) {
            Some(bad) => Err(NmeaError::InvalidTagByte(bad)),
            None => Ok(SentenceId(tag)),
        }
    }

    /// Creates a `SentenceId` without validating the tag alphabet.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `tag` is non-empty, at most
    /// [`MAX_TAG_LEN`] bytes, and contains only valid tag bytes. A tag
    /// containing a separator or terminator breaks the extractor's scan
    /// bounds.
    pub const unsafe fn new_unchecked(tag: &'a str) -> Self {
        SentenceId(tag)
    }

    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0.as_bytes()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub const fn is_valid_tag_byte(b: u8) -> bool {
        matches!(b, b'0'..=b'9' | b'A'..=b'Z')
    }
}

impl<'a> TryFrom<&'a str> for SentenceId<'a> {
    type Error = NmeaError<()>;

    /// Attempts to convert a string into a `SentenceId`.
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'a> From<SentenceId<'a>> for &'a str {
    fn from(value: SentenceId<'a>) -> Self {
        value.0
    }
}

impl fmt::Display for SentenceId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based ordinal of a comma-delimited field within a sentence.
///
/// Index 0 addresses the tag region itself (from the matched tag to the
/// first separator); index 1 is the first value field. For
/// `"$GPGGA,123519,4807.038,..."`, index 1 selects `"123519"`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct FieldIndex(u8);

impl FieldIndex {
    pub const fn new(index: u8) -> Self {
        FieldIndex(index)
    }

    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for FieldIndex {
    fn from(value: u8) -> Self {
        FieldIndex(value)
    }
}

impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags() {
        assert!(SentenceId::new("GPGGA").is_ok());
        assert!(SentenceId::new("GNRMC").is_ok());
        assert!(SentenceId::new("BDGGA").is_ok());
        assert!(SentenceId::new("GGA").is_ok()); // bare type, no talker
        assert!(SentenceId::new("PMTK001").is_ok()); // proprietary
        assert!(SentenceId::new("A").is_ok());
    }

    #[test]
    fn test_invalid_tags() {
        assert!(matches!(
            SentenceId::new(""),
            Err(NmeaError::InvalidTagLength(0))
        ));
        assert!(matches!(
            SentenceId::new("GPGGAGPGGA"),
            Err(NmeaError::InvalidTagLength(10))
        ));
        assert!(matches!(
            SentenceId::new("gpgga"),
            Err(NmeaError::InvalidTagByte(b'g'))
        ));
        assert!(matches!(
            SentenceId::new("GP,GA"),
            Err(NmeaError::InvalidTagByte(b','))
        ));
        assert!(matches!(
            SentenceId::new("$GPGGA"),
            Err(NmeaError::InvalidTagByte(b'$'))
        ));
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(SentenceId::try_from("GPGGA").unwrap().as_str(), "GPGGA");
        assert!(SentenceId::try_from("gp gga").is_err());
    }

    #[test]
    fn test_tag_accessors() {
        let id = SentenceId::new("GNGGA").unwrap();
        assert_eq!(id.as_str(), "GNGGA");
        assert_eq!(id.as_bytes(), b"GNGGA");
        assert_eq!(id.len(), 5);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_field_index() {
        let idx = FieldIndex::new(2);
        assert_eq!(idx.get(), 2);
        assert_eq!(idx.as_usize(), 2);
        assert_eq!(FieldIndex::from(7), FieldIndex::new(7));
        assert!(FieldIndex::new(1) < FieldIndex::new(2));
    }
}
