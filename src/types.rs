//! Fundamental data types used throughout ringtape

use std::{fmt::Display, num::Wrapping, ops::AddAssign};

/// Number of cells on the tape.
pub const TAPE_SIZE: usize = 131072;

/// Value stored by `,` once the input stream is exhausted.
///
/// This is the C `EOF` (-1) truncated to a byte.
pub const EOF_SENTINEL: u8 = 0xFF;

/// Position of the head on the tape.
///
/// Always in `0..TAPE_SIZE`, moves wrap around at both ends.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Head(usize);

impl Head {
    /// The last valid position on the tape.
    pub fn last() -> Self {
        Self(TAPE_SIZE - 1)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn move_right(&mut self) {
        self.0 = if self.0 + 1 == TAPE_SIZE { 0 } else { self.0 + 1 };
    }

    pub fn move_left(&mut self) {
        *self = if self.0 == 0 { Self::last() } else { Self(self.0 - 1) };
    }
}

impl From<i32> for Head {
    fn from(value: i32) -> Self {
        Self(i64::from(value).rem_euclid(TAPE_SIZE as i64) as usize)
    }
}

impl Display for Head {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A BF number (u8 with wrapping semantics).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct BfNum(Wrapping<u8>);

impl BfNum {
    pub fn is_zero(&self) -> bool {
        self.0 .0 == 0
    }
}

impl AddAssign for BfNum {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<i32> for BfNum {
    fn from(value: i32) -> Self {
        Self(Wrapping::<u8>(value.rem_euclid(256) as u8))
    }
}

impl From<u8> for BfNum {
    fn from(value: u8) -> Self {
        Self(Wrapping::<u8>(value))
    }
}

impl From<BfNum> for u8 {
    fn from(value: BfNum) -> Self {
        value.0 .0
    }
}

impl Display for BfNum {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
