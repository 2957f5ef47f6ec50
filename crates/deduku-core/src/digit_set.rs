//! A set of digits 1-9, backed by a 9-bit mask.

use std::fmt::{self, Display};

use crate::Digit;

/// A set of [`Digit`]s, stored as a 9-bit mask.
///
/// Bits 0-8 represent digits 1-9. All operations are O(1); iteration yields
/// digits in ascending order. `Display` renders the members as a
/// comma-separated list (`"1, 4, 9"`), which is the form used in error
/// messages.
///
/// # Examples
///
/// ```
/// use deduku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::FULL;
/// set.remove(Digit::D5);
/// set.remove(Digit::D7);
///
/// assert_eq!(set.len(), 7);
/// assert!(!set.contains(Digit::D5));
/// assert!(set.contains(Digit::D1));
/// assert_eq!(DigitSet::from_iter([Digit::D4, Digit::D1]).to_string(), "1, 4");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const MASK_ALL: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(MASK_ALL);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set, returning whether it was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let present = self.contains(digit);
        self.0 &= !Self::bit(digit);
        present
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set contains exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use deduku_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_iter([Digit::D3]).as_single(), Some(Digit::D3));
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        (self.len() == 1).then(|| {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Digit::from_value(value)
        })
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for digit in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{digit}")?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(u8::from)).finish()
    }
}
