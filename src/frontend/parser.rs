use crate::ast::{
    AddOp, Assignment, Case, CaseStmt, ConstExpr, Designator, DesignatorItem, Direction, EmptyStmt,
    Expr, ExprOp, Factor, ForStmt, FuncCall, IfStmt, MemoryKind, MemoryStmt, MultOp, ProcCall,
    RelOp, RepeatStmt, SimpleExpr, SimpleExprOp, Stmt, StmtSeq, Term, TermOp, UnaryOp, WhileStmt,
};
use crate::frontend::token::Token;
use crate::utils::errors::{PasError, PasResult};
use std::slice::Iter;

pub struct Parser<'a> {
    current_token: Token,
    line_number: usize,
    iter: Iter<'a, (Token, usize)>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        let mut parser = Self {
            current_token: Token::Eof,
            line_number: 1,
            iter: tokens.iter(),
        };
        parser.next();
        parser
    }

    // Past the end the parser keeps reporting `Eof` on the last line.
    fn next(&mut self) {
        match self.iter.next() {
            Some((element, line)) => {
                self.current_token = element.clone();
                self.line_number = *line;
            }
            None => self.current_token = Token::Eof,
        }
    }

    fn expect(&mut self, expected: Token) -> PasResult<()> {
        if !expected.same_kind(&self.current_token) {
            return Err(PasError::syntax_error(
                expected.to_string(),
                self.current_token.to_string(),
                self.line_number,
            ));
        }
        self.next();
        Ok(())
    }

    fn expect_ident(&mut self) -> PasResult<String> {
        match &self.current_token {
            Token::Ident(id) => {
                let id = id.clone();
                self.next();
                Ok(id)
            }
            other => Err(PasError::syntax_error("identifier", other.to_string(), self.line_number)),
        }
    }

    fn unexpected(&self) -> PasError {
        PasError::UnexpectedToken {
            token: self.current_token.to_string(),
            line: self.line_number,
        }
    }

    /**
     * Parse a whole source text:
     * program = stmt_seq [ "." ] .
     */
    pub fn parse(&mut self) -> PasResult<StmtSeq> {
        let seq = self.stmt_seq()?;
        if self.current_token == Token::Dot {
            self.next();
        }
        if self.current_token != Token::Eof {
            return Err(self.unexpected());
        }
        Ok(seq)
    }

    /// Parse a lone expression spanning the whole input.
    pub fn parse_expression(&mut self) -> PasResult<Expr> {
        let expr = self.expression()?;
        if self.current_token != Token::Eof {
            return Err(self.unexpected());
        }
        Ok(expr)
    }

    fn stmt_seq(&mut self) -> PasResult<StmtSeq> {
        Ok(StmtSeq::new(self.statement_list()?))
    }

    // statement { ";" statement }
    fn statement_list(&mut self) -> PasResult<Vec<Stmt>> {
        let mut stmts = vec![self.statement()?];
        while self.current_token == Token::Semicolon {
            self.expect(Token::Semicolon)?;
            stmts.push(self.statement()?);
        }
        Ok(stmts)
    }

    /**
     * Parse a statement according to the grammar:
     * statement = [ designator ":=" expr
     *             | ident [ "(" expr { "," expr } ")" ]
     *             | "begin" stmt_seq "end"
     *             | "if" expr "then" statement [ "else" statement ]
     *             | "case" expr "of" [ case { ";" case } [ ";" ] ] "end"
     *             | "while" expr "do" statement
     *             | "repeat" stmt_seq "until" expr
     *             | "for" ident ":=" expr ( "to" | "downto" ) expr "do" statement
     *             | ( "new" | "dispose" ) "(" ident ")" ] .
     */
    fn statement(&mut self) -> PasResult<Stmt> {
        match &self.current_token {
            Token::Ident(_) => {
                let id = self.expect_ident()?;
                if self.current_token == Token::Assign || self.starts_selector() {
                    let items = self.designator_items()?;
                    self.expect(Token::Assign)?;
                    let expr = self.expression()?;
                    Ok(Assignment::new(Designator::new(id, items), expr).into())
                } else if self.current_token == Token::LParen {
                    let params = self.argument_list()?;
                    Ok(ProcCall::new(id, params).into())
                } else {
                    Ok(ProcCall::new(id, Vec::new()).into())
                }
            }
            Token::Begin => {
                self.expect(Token::Begin)?;
                let seq = self.stmt_seq()?;
                self.expect(Token::End)?;
                Ok(seq.into())
            }
            Token::If => {
                self.expect(Token::If)?;
                let condition = self.expression()?;
                self.expect(Token::Then)?;
                let then_stmt = self.statement()?;
                // A dangling else binds to the nearest if.
                let else_stmt = if self.current_token == Token::Else {
                    self.expect(Token::Else)?;
                    Some(self.statement()?)
                } else {
                    None
                };
                Ok(IfStmt::new(condition, then_stmt, else_stmt).into())
            }
            Token::Case => self.case_statement(),
            Token::While => {
                self.expect(Token::While)?;
                let condition = self.expression()?;
                self.expect(Token::Do)?;
                let body = self.statement()?;
                Ok(WhileStmt::new(condition, body).into())
            }
            Token::Repeat => {
                self.expect(Token::Repeat)?;
                let body = self.statement_list()?;
                self.expect(Token::Until)?;
                let condition = self.expression()?;
                Ok(RepeatStmt::new(body, condition).into())
            }
            Token::For => {
                self.expect(Token::For)?;
                let ident = self.expect_ident()?;
                self.expect(Token::Assign)?;
                let start = self.expression()?;
                let direction = match self.current_token {
                    Token::To => Direction::To,
                    Token::DownTo => Direction::DownTo,
                    _ => {
                        let found = self.current_token.to_string();
                        return Err(PasError::syntax_error("to or downto", found, self.line_number));
                    }
                };
                self.next();
                let finish = self.expression()?;
                self.expect(Token::Do)?;
                let body = self.statement()?;
                Ok(ForStmt::new(ident, start, direction, finish, body).into())
            }
            Token::New | Token::Dispose => {
                let kind = if self.current_token == Token::New {
                    MemoryKind::New
                } else {
                    MemoryKind::Dispose
                };
                self.next();
                self.expect(Token::LParen)?;
                let ident = self.expect_ident()?;
                self.expect(Token::RParen)?;
                Ok(MemoryStmt::new(kind, ident).into())
            }
            _ => Ok(EmptyStmt.into()),
        }
    }

    /**
     * case_stmt = "case" expr "of" [ case { ";" case } [ ";" ] ] "end"
     * case      = const_expr { "," const_expr } ":" statement
     */
    fn case_statement(&mut self) -> PasResult<Stmt> {
        self.expect(Token::Case)?;
        let selector = self.expression()?;
        self.expect(Token::Of)?;
        let mut cases = Vec::new();
        while self.current_token != Token::End {
            let mut labels = vec![self.const_expr()?];
            while self.current_token == Token::Comma {
                self.expect(Token::Comma)?;
                labels.push(self.const_expr()?);
            }
            self.expect(Token::Colon)?;
            cases.push(Case::new(labels, self.statement()?));
            if self.current_token != Token::Semicolon {
                break;
            }
            self.expect(Token::Semicolon)?;
        }
        self.expect(Token::End)?;
        Ok(CaseStmt::new(selector, cases).into())
    }

    // const_expr = [ "+" | "-" ] number | "true" | "false" | "nil" | ident
    fn const_expr(&mut self) -> PasResult<ConstExpr> {
        let negative = match self.current_token {
            Token::Minus => {
                self.next();
                true
            }
            Token::Plus => {
                self.next();
                false
            }
            _ => false,
        };
        let label = match &self.current_token {
            Token::Number(n) => ConstExpr::Number(if negative { -*n } else { *n }),
            Token::True if !negative => ConstExpr::Bool(true),
            Token::False if !negative => ConstExpr::Bool(false),
            Token::Nil if !negative => ConstExpr::Nil,
            Token::Ident(name) if !negative => ConstExpr::Ident(name.clone()),
            other => {
                return Err(PasError::syntax_error("constant", other.to_string(), self.line_number));
            }
        };
        self.next();
        Ok(label)
    }

    /**
     * Parse an expression according to the grammar:
     * expr = simple_expr [ relop simple_expr ]
     */
    fn expression(&mut self) -> PasResult<Expr> {
        let start = self.simple_expression()?;
        let op = match self.relational_operator() {
            Some(rel) => {
                self.next();
                Some(ExprOp {
                    rel,
                    expr: self.simple_expression()?,
                })
            }
            None => None,
        };
        Ok(Expr::new(start, op))
    }

    fn relational_operator(&self) -> Option<RelOp> {
        match self.current_token {
            Token::Equal => Some(RelOp::Equal),
            Token::NotEqual => Some(RelOp::NotEqual),
            Token::LessThan => Some(RelOp::Less),
            Token::LessThanEqual => Some(RelOp::LessEqual),
            Token::GreaterThan => Some(RelOp::Greater),
            Token::GreaterThanEqual => Some(RelOp::GreaterEqual),
            _ => None,
        }
    }

    /**
     * simple_expr = [ "+" | "-" ] term { ( "+" | "-" | "or" ) term }
     */
    fn simple_expression(&mut self) -> PasResult<SimpleExpr> {
        let unary_op = match self.current_token {
            Token::Plus => Some(UnaryOp::Plus),
            Token::Minus => Some(UnaryOp::Minus),
            _ => None,
        };
        if unary_op.is_some() {
            self.next();
        }
        let start = self.term()?;
        let mut ops = Vec::new();
        loop {
            let op = match self.current_token {
                Token::Plus => AddOp::Plus,
                Token::Minus => AddOp::Minus,
                Token::Or => AddOp::Or,
                _ => break,
            };
            self.next();
            ops.push(SimpleExprOp { op, term: self.term()? });
        }
        Ok(SimpleExpr::new(unary_op, start, ops))
    }

    /**
     * term = factor { ( "*" | "/" | "div" | "mod" | "and" ) factor }
     */
    fn term(&mut self) -> PasResult<Term> {
        let start = self.factor()?;
        let mut ops = Vec::new();
        loop {
            let op = match self.current_token {
                Token::Multiply => MultOp::Multiply,
                Token::Divide => MultOp::Divide,
                Token::Div => MultOp::Div,
                Token::Mod => MultOp::Mod,
                Token::And => MultOp::And,
                _ => break,
            };
            self.next();
            ops.push(TermOp { op, factor: self.factor()? });
        }
        Ok(Term::new(start, ops))
    }

    /**
     * factor = ident | number | "true" | "false" | "nil" | designator
     *        | "(" expr ")" | "not" factor | ident "(" [ expr { "," expr } ] ")"
     */
    fn factor(&mut self) -> PasResult<Factor> {
        match &self.current_token {
            Token::Ident(_) => {
                let id = self.expect_ident()?;
                if self.current_token == Token::LParen {
                    Ok(FuncCall::new(id, self.argument_list()?).into())
                } else if self.starts_selector() {
                    let items = self.designator_items()?;
                    Ok(Designator::new(id, items).into())
                } else {
                    Ok(Factor::Identifier(id))
                }
            }
            Token::Number(n) => {
                let n = *n;
                self.next();
                Ok(Factor::Number(n))
            }
            Token::True | Token::False => {
                let value = self.current_token == Token::True;
                self.next();
                Ok(Factor::Bool(value))
            }
            Token::Nil => {
                self.next();
                Ok(Factor::Nil)
            }
            Token::LParen => {
                self.expect(Token::LParen)?;
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(Factor::parenthesized(expr))
            }
            Token::Not => {
                self.expect(Token::Not)?;
                Ok(Factor::negated(self.factor()?))
            }
            other => Err(PasError::syntax_error("factor", other.to_string(), self.line_number)),
        }
    }

    // A "." only selects a field when an identifier follows; otherwise it
    // ends the program.
    fn starts_selector(&self) -> bool {
        match self.current_token {
            Token::LBrack | Token::Caret => true,
            Token::Dot => matches!(self.iter.clone().next(), Some((Token::Ident(_), _))),
            _ => false,
        }
    }

    // { "." ident | "[" expr { "," expr } "]" | "^" }
    fn designator_items(&mut self) -> PasResult<Vec<DesignatorItem>> {
        let mut items = Vec::new();
        while self.starts_selector() {
            match self.current_token {
                Token::Dot => {
                    self.next();
                    items.push(DesignatorItem::FieldAccess(self.expect_ident()?));
                }
                Token::LBrack => {
                    self.next();
                    let indices = self.expression_list()?;
                    self.expect(Token::RBrack)?;
                    items.push(DesignatorItem::index(indices));
                }
                Token::Caret => {
                    self.next();
                    items.push(DesignatorItem::PointerAccess);
                }
                _ => break,
            }
        }
        Ok(items)
    }

    // "(" [ expr { "," expr } ] ")"
    fn argument_list(&mut self) -> PasResult<Vec<Expr>> {
        self.expect(Token::LParen)?;
        let params = if self.current_token == Token::RParen {
            Vec::new()
        } else {
            self.expression_list()?
        };
        self.expect(Token::RParen)?;
        Ok(params)
    }

    fn expression_list(&mut self) -> PasResult<Vec<Expr>> {
        let mut exprs = vec![self.expression()?];
        while self.current_token == Token::Comma {
            self.expect(Token::Comma)?;
            exprs.push(self.expression()?);
        }
        Ok(exprs)
    }
}
