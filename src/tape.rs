//! Implementations of the BF tape

use crate::{BfNum, Head, TAPE_SIZE};

/// A trait implementing a tape for the BF program memory
pub trait Tape {
    fn get(&self, head: Head) -> BfNum;
    fn set(&mut self, head: Head, value: BfNum);
    fn modify(&mut self, head: Head, diff: BfNum);
}

/// A fixed size tape of [`TAPE_SIZE`] cells, all starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingTape {
    data: Box<[BfNum]>,
}

impl RingTape {
    pub fn new() -> Self {
        Self {
            data: vec![BfNum::default(); TAPE_SIZE].into_boxed_slice(),
        }
    }

    /// View of the cells starting at `head`, clamped to the end of the tape.
    pub fn slice(&self, head: Head, len: usize) -> &[BfNum] {
        let start = head.index();
        let end = (start + len).min(self.data.len());
        &self.data[start..end]
    }
}

impl Default for RingTape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape for RingTape {
    fn get(&self, head: Head) -> BfNum {
        self.data[head.index()]
    }

    fn set(&mut self, head: Head, value: BfNum) {
        self.data[head.index()] = value;
    }

    fn modify(&mut self, head: Head, diff: BfNum) {
        self.data[head.index()] += diff;
    }
}

#[cfg(test)]
mod tests {
    use super::{RingTape, Tape};
    use crate::{BfNum, Head, TAPE_SIZE};

    #[test]
    fn test_ring_tape() {
        let mut tape = RingTape::new();
        assert_eq!(tape.slice(0.into(), TAPE_SIZE + 1).len(), TAPE_SIZE);
        assert!(tape.slice(0.into(), 16).iter().all(BfNum::is_zero));

        tape.set(2.into(), 5.into());
        assert_eq!(tape.get(2.into()), 5.into());
        tape.modify(2.into(), 255.into());
        assert_eq!(tape.get(2.into()), 4.into());
        tape.modify(8.into(), 200.into());
        assert_eq!(tape.get(8.into()), 200.into());

        tape.set(Head::last(), 7.into());
        assert_eq!(tape.get((-1).into()), 7.into());
        assert_eq!(tape.slice(Head::last(), 4), &[BfNum::from(7)]);
    }
}
