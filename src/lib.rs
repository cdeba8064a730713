//! # Ringtape - A minimal Brainfuck interpreter
//!
//! Source is reduced to a flat list of [`ast::Instruction`]s by
//! [`parse_source`], which [`execute`] then runs against a fixed tape of
//! [`TAPE_SIZE`] byte cells. The head wraps around at both ends of the tape,
//! and loops are resolved at runtime by scanning for the matching bracket.

// Re-export some symbols.
pub use interpreter::execute;
pub use interpreter::ExecuteCallbackData;
pub use interpreter::ExecuteCallbackResult;
pub use interpreter::ExecutionError;
pub use parser::parse_source;
pub use types::BfNum;
pub use types::Head;
pub use types::EOF_SENTINEL;
pub use types::TAPE_SIZE;

pub mod ast;
#[doc(hidden)]
pub mod byte_utils;
mod interpreter;
mod parser;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
