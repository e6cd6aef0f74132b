use crate::frontend::token::Token;
use crate::utils::config::lexer::keyword;
use crate::utils::errors::{PasError, PasResult};
use crate::LineNumber;
use std::{iter::Peekable, str::Chars};

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    state: &'a mut LineNumber,
}

impl<'a> Lexer<'a> {
    pub fn new(file_content: &'a str, state: &'a mut LineNumber) -> Self {
        Self {
            chars: file_content.chars().peekable(),
            state,
        }
    }

    /// Tokenizes the whole input. The result always ends with `Token::Eof`.
    pub fn scan(mut self) -> PasResult<Vec<(Token, usize)>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let line = self.state.line;
            match self.chars.peek() {
                Some(_) => tokens.push((self.scan_token()?, line)),
                None => {
                    tokens.push((Token::Eof, line));
                    return Ok(tokens);
                }
            }
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> PasResult<()> {
        loop {
            match self.chars.peek().copied() {
                Some('{') => self.scan_brace_comment()?,
                Some('(') if self.starts_paren_comment() => self.scan_paren_comment()?,
                Some(ch) if ch.is_whitespace() => self.scan_whitespace(),
                _ => break,
            }
        }
        Ok(())
    }

    fn scan_token(&mut self) -> PasResult<Token> {
        match self.chars.peek() {
            Some(&ch) if ch.is_alphabetic() || ch == '_' => Ok(self.scan_identifier()),
            Some(&ch) if ch.is_ascii_digit() => self.scan_number(),
            Some(&':') => Ok(self.scan_colon()),
            Some(&'<') => Ok(self.scan_less_than()),
            Some(&'>') => Ok(self.scan_greater_than()),
            Some(&ch) => self.scan_single_char_token(ch),
            None => Ok(Token::Eof),
        }
    }

    // `(*` opens a comment, a lone `(` is a parenthesis.
    fn starts_paren_comment(&self) -> bool {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.peek() == Some(&'*')
    }

    fn scan_brace_comment(&mut self) -> PasResult<()> {
        self.chars.next(); // Consume '{'
        let start_line = self.state.line;
        while let Some(ch) = self.chars.next() {
            if ch == '\n' {
                self.state.line += 1;
            } else if ch == '}' {
                return Ok(());
            }
        }
        Err(PasError::UnterminatedComment { line: start_line })
    }

    fn scan_paren_comment(&mut self) -> PasResult<()> {
        self.chars.next(); // Consume '('
        self.chars.next(); // Consume '*'
        let start_line = self.state.line;
        while let Some(ch) = self.chars.next() {
            match ch {
                '\n' => self.state.line += 1,
                '*' if self.chars.peek() == Some(&')') => {
                    self.chars.next();
                    return Ok(());
                }
                _ => {}
            }
        }
        Err(PasError::UnterminatedComment { line: start_line })
    }

    fn scan_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            if ch == '\n' {
                self.state.line += 1;
            }
            self.chars.next();
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let mut identifier = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
        keyword(&identifier).unwrap_or(Token::Ident(identifier))
    }

    fn scan_number(&mut self) -> PasResult<Token> {
        let mut number_str = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
        number_str
            .parse::<i64>()
            .map(Token::Number)
            .map_err(|_| PasError::InvalidNumber {
                number: number_str,
                line: self.state.line,
            })
    }

    fn scan_colon(&mut self) -> Token {
        self.chars.next(); // Consume ':'
        if self.chars.peek() == Some(&'=') {
            self.chars.next();
            Token::Assign
        } else {
            Token::Colon
        }
    }

    fn scan_less_than(&mut self) -> Token {
        self.chars.next(); // Consume '<'
        match self.chars.peek() {
            Some(&'=') => {
                self.chars.next();
                Token::LessThanEqual
            }
            Some(&'>') => {
                self.chars.next();
                Token::NotEqual
            }
            _ => Token::LessThan,
        }
    }

    fn scan_greater_than(&mut self) -> Token {
        self.chars.next(); // Consume '>'
        if self.chars.peek() == Some(&'=') {
            self.chars.next();
            Token::GreaterThanEqual
        } else {
            Token::GreaterThan
        }
    }

    fn scan_single_char_token(&mut self, ch: char) -> PasResult<Token> {
        self.chars.next(); // Consume the character
        let token = match ch {
            '.' => Token::Dot,
            '=' => Token::Equal,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '^' => Token::Caret,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Multiply,
            '/' => Token::Divide,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBrack,
            ']' => Token::RBrack,
            _ => {
                return Err(PasError::UnknownToken {
                    token: ch,
                    line: self.state.line,
                })
            }
        };
        Ok(token)
    }
}

pub fn scan(state: &mut LineNumber, file_content: &str) -> PasResult<Vec<(Token, usize)>> {
    Lexer::new(file_content, state).scan()
}
