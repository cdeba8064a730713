use crate::ast::{Instruction, Program};

/// Parses source code, producing a stream of instructions.
fn lexer(source_code: &'_ [u8]) -> impl Iterator<Item = Instruction> + '_ {
    // Tokenise and discard unknown tokens
    source_code.iter().filter_map(|c| Instruction::from_byte(*c))
}

/// Parse source code into a program.
///
/// Every byte that is not one of `<>+-,.[]` is a comment and is dropped.
/// Brackets are not checked here, that happens when the program is run.
pub fn parse_source(source_code: &[u8]) -> Program {
    lexer(source_code).collect()
}

#[cfg(test)]
mod tests {
    use super::parse_source;
    use crate::ast::Instruction::*;

    #[test]
    fn simple_parse() {
        assert_eq!(
            parse_source(b"++>-<,.[]"),
            vec![
                Increment, Increment, MoveRight, Decrement, MoveLeft, Input, Output, LoopStart,
                LoopEnd
            ]
        );
        assert_eq!(
            parse_source(b"+[>+<-]"),
            vec![
                Increment, LoopStart, MoveRight, Increment, MoveLeft, Decrement, LoopEnd
            ]
        );
    }

    #[test]
    fn comments_are_dropped() {
        assert!(parse_source(b"").is_empty());
        assert!(parse_source(b"hello world\n\t!#").is_empty());
        assert_eq!(
            parse_source(b"a + b = c\nloop [ here ] done."),
            vec![Increment, LoopStart, LoopEnd, Output]
        );
        // Non-ASCII bytes are comments too
        assert_eq!(parse_source("ö+ä-".as_bytes()), vec![Increment, Decrement]);
    }

    #[test]
    fn unbalanced_source_still_parses() {
        assert_eq!(parse_source(b"]"), vec![LoopEnd]);
        assert_eq!(parse_source(b"[["), vec![LoopStart, LoopStart]);
    }

    #[test]
    fn output_never_longer_than_input() {
        let src: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let program = parse_source(&src);
        assert!(program.len() <= src.len());
        // 8 commands per 256 bytes
        assert_eq!(program.len(), 8 * 16);
    }
}
