// Source file handling
pub mod source {
    // Extensions accepted for Pascal source files
    pub const EXTENSIONS: &[&str] = &["pas", "pp", "p"];
}

// AST dump formatting
pub mod display {
    pub const INDENT: &str = "  ";

    pub fn indent(depth: usize) -> String {
        INDENT.repeat(depth)
    }
}

// Lexer constants
pub mod lexer {
    use crate::frontend::token::Token;

    // Keywords are matched case-insensitively, as Pascal does.
    pub fn keyword(word: &str) -> Option<Token> {
        let token = match word.to_ascii_lowercase().as_str() {
            "begin" => Token::Begin,
            "end" => Token::End,
            "if" => Token::If,
            "then" => Token::Then,
            "else" => Token::Else,
            "case" => Token::Case,
            "of" => Token::Of,
            "while" => Token::While,
            "do" => Token::Do,
            "repeat" => Token::Repeat,
            "until" => Token::Until,
            "for" => Token::For,
            "to" => Token::To,
            "downto" => Token::DownTo,
            "new" => Token::New,
            "dispose" => Token::Dispose,
            "true" => Token::True,
            "false" => Token::False,
            "nil" => Token::Nil,
            "not" => Token::Not,
            "and" => Token::And,
            "or" => Token::Or,
            "div" => Token::Div,
            "mod" => Token::Mod,
            _ => return None,
        };
        Some(token)
    }
}
