//! Types for the instruction sequence.

use std::fmt::Display;

/// One of the eight elementary operations.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Instruction {
    /// `<`
    MoveLeft,
    /// `>`
    MoveRight,
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `,` read one byte
    Input,
    /// `.` write one byte
    Output,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
}

/// A compiled program. The index of an instruction is its address.
pub type Program = Vec<Instruction>;

impl Instruction {
    /// Map a source byte to its instruction, if it is one.
    pub fn from_byte(c: u8) -> Option<Self> {
        match c {
            b'<' => Some(Self::MoveLeft),
            b'>' => Some(Self::MoveRight),
            b'+' => Some(Self::Increment),
            b'-' => Some(Self::Decrement),
            b',' => Some(Self::Input),
            b'.' => Some(Self::Output),
            b'[' => Some(Self::LoopStart),
            b']' => Some(Self::LoopEnd),
            _ => None,
        }
    }

    /// The source symbol for this instruction.
    pub fn symbol(&self) -> char {
        match self {
            Self::MoveLeft => '<',
            Self::MoveRight => '>',
            Self::Increment => '+',
            Self::Decrement => '-',
            Self::Input => ',',
            Self::Output => '.',
            Self::LoopStart => '[',
            Self::LoopEnd => ']',
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
