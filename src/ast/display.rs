// Renders nodes back to Pascal source.
//
// A tree produced by the parser re-parses to an equal tree. A hand-built tree
// prints as source whose parse prints the same text: a designator without
// selectors reads back as an identifier, an empty statement list as one empty
// statement, and a negative number literal as a parenthesized signed number.

use std::fmt::{self, Display, Formatter, Write};

use crate::ast::{
    ConstExpr, Designator, DesignatorItem, Expr, Factor, FuncCall, Negation, SimpleExpr, Stmt,
    StmtSeq, Term,
};
use crate::utils::config::display::indent;

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for ConstExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConstExpr::Number(n) => write!(f, "{}", n),
            ConstExpr::Bool(b) => write!(f, "{}", b),
            ConstExpr::Nil => f.write_str("nil"),
            ConstExpr::Ident(name) => f.write_str(name),
        }
    }
}

impl Display for DesignatorItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DesignatorItem::FieldAccess(name) => write!(f, ".{}", name),
            DesignatorItem::ArrayAccess(exprs) => {
                f.write_char('[')?;
                write_list(f, exprs)?;
                f.write_char(']')
            }
            DesignatorItem::PointerAccess => f.write_char('^'),
        }
    }
}

impl Display for Designator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())?;
        for item in self.items() {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Identifier(name) => f.write_str(name),
            // A sign is only legal at the start of a simple expression.
            Factor::Number(n) if *n < 0 => write!(f, "({})", n),
            Factor::Number(n) => write!(f, "{}", n),
            Factor::Bool(b) => write!(f, "{}", b),
            Factor::Nil => f.write_str("nil"),
            Factor::Designator(designator) => write!(f, "{}", designator),
            Factor::Expr(expr) => write!(f, "({})", expr),
            Factor::Negation(negation) => write!(f, "{}", negation),
            Factor::FuncCall(call) => write!(f, "{}", call),
        }
    }
}

impl Display for Negation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "not {}", self.factor())
    }
}

impl Display for FuncCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.func_ident())?;
        write_list(f, self.params())?;
        f.write_char(')')
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start_factor())?;
        for op in self.ops() {
            write!(f, " {} {}", op.op, op.factor)?;
        }
        Ok(())
    }
}

impl Display for SimpleExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(sign) = self.unary_op() {
            write!(f, "{}", sign)?;
        }
        write!(f, "{}", self.start_term())?;
        for op in self.ops() {
            write!(f, " {} {}", op.op, op.term)?;
        }
        Ok(())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start_expr())?;
        if let Some(op) = self.op() {
            write!(f, " {} {}", op.rel, op.expr)?;
        }
        Ok(())
    }
}

// Statements are written without leading indentation; nested lines are
// indented relative to `depth`.
fn write_stmt(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    match stmt {
        Stmt::Assignment(assign) => write!(f, "{} := {}", assign.designator(), assign.expr()),
        Stmt::ProcCall(call) => {
            f.write_str(call.proc_ident())?;
            if !call.params().is_empty() {
                f.write_char('(')?;
                write_list(f, call.params())?;
                f.write_char(')')?;
            }
            Ok(())
        }
        Stmt::If(if_stmt) => {
            write!(f, "if {} then", if_stmt.cond_expr())?;
            match if_stmt.else_stmt() {
                Some(else_stmt) => {
                    if ends_with_open_if(if_stmt.then_stmt()) {
                        write!(f, "\n{}begin\n{}", indent(depth + 1), indent(depth + 2))?;
                        write_stmt(f, if_stmt.then_stmt(), depth + 2)?;
                        write!(f, "\n{}end", indent(depth + 1))?;
                    } else {
                        write_nested(f, if_stmt.then_stmt(), depth + 1)?;
                    }
                    write!(f, "\n{}else", indent(depth))?;
                    write_nested(f, else_stmt, depth + 1)
                }
                None => write_nested(f, if_stmt.then_stmt(), depth + 1),
            }
        }
        Stmt::Case(case_stmt) => {
            write!(f, "case {} of", case_stmt.cond_expr())?;
            for (i, case) in case_stmt.cases().iter().enumerate() {
                if i > 0 {
                    f.write_char(';')?;
                }
                write!(f, "\n{}", indent(depth + 1))?;
                write_list(f, case.labels())?;
                f.write_char(':')?;
                if !case.then_stmt().is_empty() {
                    f.write_char(' ')?;
                    write_stmt(f, case.then_stmt(), depth + 1)?;
                }
            }
            write!(f, "\n{}end", indent(depth))
        }
        Stmt::While(while_stmt) => {
            write!(f, "while {} do", while_stmt.cond_expr())?;
            write_nested(f, while_stmt.inner_stmt(), depth + 1)
        }
        Stmt::Repeat(repeat) => {
            f.write_str("repeat")?;
            write_block(f, repeat.inner_stmts(), depth + 1)?;
            write!(f, "\n{}until {}", indent(depth), repeat.cond_expr())
        }
        Stmt::For(for_stmt) => {
            write!(
                f,
                "for {} := {} {} {} do",
                for_stmt.ident(),
                for_stmt.start_val_expr(),
                for_stmt.direction().keyword(),
                for_stmt.finish_val_expr()
            )?;
            write_nested(f, for_stmt.inner_stmt(), depth + 1)
        }
        Stmt::Memory(memory) => write!(f, "{}({})", memory.kind().keyword(), memory.ident()),
        Stmt::Compound(seq) => {
            f.write_str("begin")?;
            write_block(f, seq.stmts(), depth + 1)?;
            write!(f, "\n{}end", indent(depth))
        }
        Stmt::Empty(_) => Ok(()),
    }
}

// True when an else-less if ends the statement; printed bare before an
// `else` it would capture that else when re-parsed.
fn ends_with_open_if(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::If(if_stmt) => match if_stmt.else_stmt() {
            Some(else_stmt) => ends_with_open_if(else_stmt),
            None => true,
        },
        Stmt::While(while_stmt) => ends_with_open_if(while_stmt.inner_stmt()),
        Stmt::For(for_stmt) => ends_with_open_if(for_stmt.inner_stmt()),
        Stmt::Assignment(_)
        | Stmt::ProcCall(_)
        | Stmt::Case(_)
        | Stmt::Repeat(_)
        | Stmt::Memory(_)
        | Stmt::Compound(_)
        | Stmt::Empty(_) => false,
    }
}

fn write_nested(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    f.write_char('\n')?;
    if stmt.is_empty() {
        return Ok(());
    }
    f.write_str(&indent(depth))?;
    write_stmt(f, stmt, depth)
}

// An empty block prints like a block holding one empty statement.
fn write_block(f: &mut Formatter<'_>, stmts: &[Stmt], depth: usize) -> fmt::Result {
    if stmts.is_empty() {
        return f.write_char('\n');
    }
    for (i, stmt) in stmts.iter().enumerate() {
        if i > 0 {
            f.write_char(';')?;
        }
        write_nested(f, stmt, depth)?;
    }
    Ok(())
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl Display for StmtSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.stmts().iter().enumerate() {
            if i > 0 {
                f.write_str(";\n")?;
            }
            write_stmt(f, stmt, 0)?;
        }
        Ok(())
    }
}
