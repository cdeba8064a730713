#![no_main]

use ringtape::ast::Instruction;
use ringtape::execute;
use ringtape::tape::RingTape;
use ringtape::ExecuteCallbackResult;
use ringtape::ExecutionError;
use ringtape::Head;
use ringtape_fuzz::{loop_balance, FuzzInputProgram};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzInputProgram| {
    let code = data.code;
    let mut input = data.input;

    let mut instr_count = 0;
    let mut tape = RingTape::new();
    let mut head = Head::default();
    let mut output: Vec<u8> = Vec::new();
    let exec_result = execute(
        &code,
        &mut tape,
        &mut head,
        &mut input,
        &mut output,
        &mut |_, _, _| {
            instr_count += 1;
            if instr_count > 500 {
                ExecuteCallbackResult::Abort
            } else {
                ExecuteCallbackResult::Continue
            }
        },
    );
    match exec_result {
        Ok(_) | Err(ExecutionError::Aborted) => (),
        Err(ExecutionError::UnmatchedLoopStart { pc }) => {
            // A balanced program always finds its partners.
            assert_ne!(loop_balance(&code), Some(0));
            assert_eq!(code[pc], Instruction::LoopStart);
        }
        Err(ExecutionError::UnmatchedLoopEnd { pc }) => {
            assert_ne!(loop_balance(&code), Some(0));
            assert_eq!(code[pc], Instruction::LoopEnd);
        }
        Err(ExecutionError::IoError(_)) => (),
    }
});
