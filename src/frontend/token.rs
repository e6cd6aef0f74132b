use std::mem;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    Number(i64),
    Begin,
    End,
    If,
    Then,
    Else,
    Case,
    Of,
    While,
    Do,
    Repeat,
    Until,
    For,
    To,
    DownTo,
    New,
    Dispose,
    True,
    False,
    Nil,
    Not,
    And,
    Or,
    Div,
    Mod,
    Assign,
    Colon,
    Semicolon,
    Comma,
    Dot,
    Caret,
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    LBrack,
    RBrack,
    Eof,
}

impl Token {
    /// Compares variants while disregarding carried data.
    pub fn same_kind(&self, other: &Token) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
