pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::Parser;
pub use token::Token;

use crate::ast::StmtSeq;
use crate::utils::errors::PasResult;
use crate::LineNumber;

/// Scan and parse a complete source text.
pub fn parse_source(source: &str) -> PasResult<StmtSeq> {
    let mut state = LineNumber::default();
    let tokens = lexer::scan(&mut state, source)?;
    Parser::new(&tokens).parse()
}
