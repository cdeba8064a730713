#![no_main]

use libfuzzer_sys::fuzz_target;

use ringtape::test_utils::test_execute_limited;
use ringtape::{parse_source, ExecutionError};
use ringtape_fuzz::{loop_balance, FuzzInputSrc};

fuzz_target!(|data: FuzzInputSrc| {
    let code = parse_source(&data.code);
    let mut input = data.input;

    let exec = test_execute_limited(&code, &mut input, 10000);
    match exec.result.unwrap() {
        // Brackets that are never reached are not checked
        Ok(()) => (),
        Err(ExecutionError::UnmatchedLoopStart { pc }) => {
            assert_ne!(loop_balance(&code), Some(0));
            assert_eq!(code[pc], ringtape::ast::Instruction::LoopStart);
        }
        Err(ExecutionError::UnmatchedLoopEnd { pc }) => {
            assert_ne!(loop_balance(&code), Some(0));
            assert_eq!(code[pc], ringtape::ast::Instruction::LoopEnd);
        }
        Err(ExecutionError::Aborted) => (),
        Err(err @ ExecutionError::IoError(_)) => panic!("Unexpected error: {err:?}"),
    }
});
