use std::{
    fmt::{Debug, Display},
    ops::Range,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `Snapshot` is the full text content of an editable view at one instant,
/// stored as UTF-16 code units because that is how content-editable views
/// address their text. All offsets in this crate are indices into these units.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    units: Vec<u16>,
}

impl Snapshot {
    #[must_use]
    pub fn new(units: Vec<u16>) -> Self { Self { units } }

    #[must_use]
    pub fn from_units(units: &[u16]) -> Self {
        Self {
            units: units.to_vec(),
        }
    }

    #[must_use]
    pub fn units(&self) -> &[u16] { &self.units }

    /// Number of UTF-16 code units.
    #[must_use]
    pub fn len(&self) -> usize { self.units.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.units.is_empty() }

    /// Returns the code units in `range` as a new snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self { Self::from_units(&self.units[range]) }

    /// Decodes the snapshot into a `String`. Lone surrogates are replaced
    /// with U+FFFD which occupies a single code unit as well, so offsets stay
    /// valid for the decoded text.
    #[must_use]
    pub fn to_string_lossy(&self) -> String { String::from_utf16_lossy(&self.units) }
}

impl From<&str> for Snapshot {
    fn from(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }
}

impl From<&String> for Snapshot {
    fn from(text: &String) -> Self { Self::from(text.as_str()) }
}

impl From<String> for Snapshot {
    fn from(text: String) -> Self { Self::from(text.as_str()) }
}

impl From<Snapshot> for String {
    fn from(snapshot: Snapshot) -> Self { snapshot.to_string_lossy() }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Snapshot")
            .field(&self.to_string_lossy())
            .finish()
    }
}
