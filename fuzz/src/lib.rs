//! Fuzzing helper function

use std::collections::VecDeque;
use std::fmt::Debug;

use ringtape::ast::Instruction;

/// Balance of `[` against `]`, `None` once a `]` closes nothing.
pub fn loop_balance(code: &[Instruction]) -> Option<usize> {
    let mut depth: usize = 0;
    for instr in code {
        match instr {
            Instruction::LoopStart => depth += 1,
            Instruction::LoopEnd => depth = depth.checked_sub(1)?,
            _ => (),
        }
    }
    Some(depth)
}

#[derive(Debug, arbitrary::Arbitrary)]
pub struct FuzzInputProgram {
    pub code: Vec<Instruction>,
    pub input: VecDeque<u8>,
}

#[derive(arbitrary::Arbitrary)]
pub struct FuzzInputSrc {
    pub code: Vec<u8>,
    pub input: VecDeque<u8>,
}

impl Debug for FuzzInputSrc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzInputSrc")
            .field("code", &ringtape::byte_utils::as_bstr(&self.code))
            .field("input", &self.input)
            .finish()
    }
}
