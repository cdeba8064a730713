use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::ast::Instruction;
use crate::tape::Tape;
use crate::Head;
use crate::EOF_SENTINEL;

/// Error type for execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A `[` without a matching `]`.
    #[error("Runtime error at ({pc}): reached end of program while looking for matching ']'")]
    UnmatchedLoopStart { pc: usize },
    /// A `]` without a matching `[`.
    #[error("Runtime error at ({pc}): reached start of program while looking for matching '['")]
    UnmatchedLoopEnd { pc: usize },
    /// Io error during program execution.
    #[error("Unexpected IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Aborted by callback
    #[error("Callback aborted execution")]
    Aborted,
}

impl PartialEq for ExecutionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnmatchedLoopStart { pc: l }, Self::UnmatchedLoopStart { pc: r }) => l == r,
            (Self::UnmatchedLoopEnd { pc: l }, Self::UnmatchedLoopEnd { pc: r }) => l == r,
            (Self::IoError(l0), Self::IoError(r0)) => l0.kind() == r0.kind(),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Data sent to execution callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteCallbackData {
    /// We are about to execute the instruction at `pc`
    Instruction { pc: usize, instr: Instruction },
    /// A loop instruction at `from` transferred control to `to`
    Jump { from: usize, to: usize },
}

/// Reply type for callback
pub enum ExecuteCallbackResult {
    /// Continue execution
    Continue,
    /// Abort execution
    Abort,
}

/// Scan forward from the `[` at `start` to its matching `]`.
fn find_loop_end(code: &[Instruction], start: usize) -> Result<usize, ExecutionError> {
    let mut balance: i64 = 1;
    let mut pc = start;
    while balance != 0 {
        pc += 1;
        match code.get(pc) {
            None => return Err(ExecutionError::UnmatchedLoopStart { pc: start }),
            Some(Instruction::LoopStart) => balance += 1,
            Some(Instruction::LoopEnd) => balance -= 1,
            Some(_) => (),
        }
    }
    Ok(pc)
}

/// Scan backward from the `]` at `start` to its matching `[`.
fn find_loop_start(code: &[Instruction], start: usize) -> Result<usize, ExecutionError> {
    let mut balance: i64 = -1;
    let mut pc = start;
    while balance != 0 {
        pc = pc
            .checked_sub(1)
            .ok_or(ExecutionError::UnmatchedLoopEnd { pc: start })?;
        match code[pc] {
            Instruction::LoopStart => balance += 1,
            Instruction::LoopEnd => balance -= 1,
            _ => (),
        }
    }
    Ok(pc)
}

/// Run `code` to completion.
///
/// Loops are resolved by scanning for the partner bracket every time a jump
/// is taken. Brackets are only checked when reached: a `]` without a partner
/// faults even on a zero cell, a `[` only once it has to be skipped.
pub fn execute<TapeT: Tape, F>(
    code: &[Instruction],
    tape: &mut TapeT,
    head: &mut Head,
    input: &mut impl Read,
    output: &mut impl Write,
    callback: &mut F,
) -> Result<(), ExecutionError>
where
    F: FnMut(ExecuteCallbackData, &TapeT, &Head) -> ExecuteCallbackResult,
{
    let mut pc = 0;
    while pc < code.len() {
        let instr = code[pc];
        match callback(ExecuteCallbackData::Instruction { pc, instr }, tape, head) {
            ExecuteCallbackResult::Continue => (),
            ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
        }
        match instr {
            Instruction::MoveRight => head.move_right(),
            Instruction::MoveLeft => head.move_left(),
            Instruction::Increment => tape.modify(*head, 1.into()),
            Instruction::Decrement => tape.modify(*head, (-1).into()),
            Instruction::Output => {
                let tmp: [u8; 1] = [tape.get(*head).into()];
                output.write_all(&tmp)?;
            }
            Instruction::Input => {
                let mut tmp: [u8; 1] = [0; 1];
                // We may need to flush output here if there wasn't a newline.
                output.flush()?;
                let value = match input.read(&mut tmp)? {
                    0 => EOF_SENTINEL,
                    _ => tmp[0],
                };
                tape.set(*head, value.into());
            }
            Instruction::LoopStart if tape.get(*head).is_zero() => {
                let to = find_loop_end(code, pc)? + 1;
                match callback(ExecuteCallbackData::Jump { from: pc, to }, tape, head) {
                    ExecuteCallbackResult::Continue => (),
                    ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
                }
                pc = to;
                continue;
            }
            Instruction::LoopEnd if !tape.get(*head).is_zero() => {
                // Land on the `[` itself, it re-checks the cell.
                let to = find_loop_start(code, pc)?;
                match callback(ExecuteCallbackData::Jump { from: pc, to }, tape, head) {
                    ExecuteCallbackResult::Continue => (),
                    ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
                }
                pc = to;
                continue;
            }
            Instruction::LoopEnd => {
                // Falling through still needs a partner behind us.
                find_loop_start(code, pc)?;
            }
            Instruction::LoopStart => (),
        }
        pc += 1;
    }
    Ok(())
}
