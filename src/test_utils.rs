use crate::{ast::Instruction, tape::RingTape, ExecuteCallbackResult, ExecutionError, Head};

#[derive(Debug, Default, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub tape: RingTape,
    pub head: Head,
    pub output: Vec<u8>,
}

/// Run a program, aborting once the callback has fired `max_steps` times.
pub fn test_execute_limited(
    code: &[Instruction],
    input: &mut impl std::io::Read,
    max_steps: usize,
) -> ExecutionState {
    let mut instr_count = 0;
    let mut exec = ExecutionState::default();
    exec.result = Some(crate::execute(
        code,
        &mut exec.tape,
        &mut exec.head,
        input,
        &mut exec.output,
        &mut |_, _, _| {
            instr_count += 1;
            if instr_count > max_steps {
                ExecuteCallbackResult::Abort
            } else {
                ExecuteCallbackResult::Continue
            }
        },
    ));

    exec
}

pub fn test_execute(code: &[Instruction], input: &mut impl std::io::Read) -> ExecutionState {
    test_execute_limited(code, input, 5_000_000)
}
