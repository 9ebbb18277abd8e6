//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction checks every byte and rejects the
//! whole input on the first byte outside the alphabet; nothing is rewritten
//! along the way. Once built, a sequence is immutable.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;

use biosynth_core::{BiosynthError, ContentAddressable, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// A validated biological sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA, etc.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Returns [`BiosynthError::InvalidAlphabet`] for the first byte that is
    /// not a member of `A`.
    pub fn new(bytes: impl AsRef<[u8]>) -> biosynth_core::Result<Self> {
        let data = bytes.as_ref();
        if let Some(position) = data.iter().position(|&b| !A::is_valid(b)) {
            return Err(BiosynthError::InvalidAlphabet {
                alphabet: A::NAME,
                found: data[position] as char,
                position,
            });
        }
        Ok(Self::from_validated(data.to_vec()))
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self::from_validated(Vec::new())
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are members of `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        debug_assert!(data.iter().all(|&b| A::is_valid(b)));
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// View the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        // Every alphabet is pure ASCII.
        std::str::from_utf8(&self.data).unwrap_or_default()
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> FromStr for ValidatedSeq<A> {
    type Err = BiosynthError;

    fn from_str(s: &str) -> biosynth_core::Result<Self> {
        Self::new(s.as_bytes())
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> ContentAddressable for ValidatedSeq<A> {
    fn content_hash(&self) -> String {
        biosynth_core::hash::sha256(&self.data)
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = &self.as_str()[..preview_len];
        if self.data.len() > 20 {
            format!("{} sequence ({} {}): {}...", A::NAME, self.data.len(), A::UNIT, preview)
        } else {
            format!("{} sequence ({} {}): {}", A::NAME, self.data.len(), A::UNIT, preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, self.as_str())
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
