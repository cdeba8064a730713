#![no_main]

use libfuzzer_sys::fuzz_target;

use ringtape::ast::Instruction;
use ringtape::parse_source;

fuzz_target!(|data: &[u8]| {
    let code = parse_source(data);
    assert!(code.len() <= data.len());

    // The program is exactly the command bytes of the source, in order.
    let commands: Vec<u8> = data
        .iter()
        .copied()
        .filter(|c| b"<>+-,.[]".contains(c))
        .collect();
    let symbols: Vec<u8> = code.iter().map(|instr| instr.symbol() as u8).collect();
    assert_eq!(commands, symbols);
    assert!(code
        .iter()
        .all(|instr| Instruction::from_byte(instr.symbol() as u8) == Some(*instr)));
});
