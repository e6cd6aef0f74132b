use crate::ast::{
    Assignment, Case, CaseStmt, ConstExpr, Designator, DesignatorItem, Expr, Factor, ForStmt,
    FuncCall, IfStmt, MemoryStmt, Negation, ProcCall, RepeatStmt, SimpleExpr, Stmt, StmtSeq, Term,
    WhileStmt,
};
use crate::utils::errors::PasResult;

/// Read-only traversal over the tree.
///
/// Every method defaults to walking the node's children through the matching
/// `walk_*` function, so a pass overrides only the nodes it cares about and
/// calls `walk_*` itself when it still wants to descend.
pub trait AstVisitor {
    fn visit_stmt_seq(&mut self, seq: &StmtSeq) -> PasResult<()> {
        walk_stmt_seq(self, seq)
    }
    fn visit_stmt(&mut self, stmt: &Stmt) -> PasResult<()> {
        walk_stmt(self, stmt)
    }
    fn visit_assignment(&mut self, assign: &Assignment) -> PasResult<()> {
        walk_assignment(self, assign)
    }
    fn visit_proc_call(&mut self, call: &ProcCall) -> PasResult<()> {
        walk_proc_call(self, call)
    }
    fn visit_if(&mut self, if_stmt: &IfStmt) -> PasResult<()> {
        walk_if(self, if_stmt)
    }
    fn visit_case_stmt(&mut self, case_stmt: &CaseStmt) -> PasResult<()> {
        walk_case_stmt(self, case_stmt)
    }
    fn visit_case(&mut self, case: &Case) -> PasResult<()> {
        walk_case(self, case)
    }
    fn visit_while(&mut self, while_stmt: &WhileStmt) -> PasResult<()> {
        walk_while(self, while_stmt)
    }
    fn visit_repeat(&mut self, repeat: &RepeatStmt) -> PasResult<()> {
        walk_repeat(self, repeat)
    }
    fn visit_for(&mut self, for_stmt: &ForStmt) -> PasResult<()> {
        walk_for(self, for_stmt)
    }
    fn visit_memory(&mut self, _memory: &MemoryStmt) -> PasResult<()> {
        Ok(())
    }
    fn visit_empty(&mut self) -> PasResult<()> {
        Ok(())
    }
    fn visit_const(&mut self, _label: &ConstExpr) -> PasResult<()> {
        Ok(())
    }
    fn visit_expr(&mut self, expr: &Expr) -> PasResult<()> {
        walk_expr(self, expr)
    }
    fn visit_simple_expr(&mut self, expr: &SimpleExpr) -> PasResult<()> {
        walk_simple_expr(self, expr)
    }
    fn visit_term(&mut self, term: &Term) -> PasResult<()> {
        walk_term(self, term)
    }
    fn visit_factor(&mut self, factor: &Factor) -> PasResult<()> {
        walk_factor(self, factor)
    }
    fn visit_negation(&mut self, negation: &Negation) -> PasResult<()> {
        walk_negation(self, negation)
    }
    fn visit_func_call(&mut self, call: &FuncCall) -> PasResult<()> {
        walk_func_call(self, call)
    }
    fn visit_designator(&mut self, designator: &Designator) -> PasResult<()> {
        walk_designator(self, designator)
    }
    fn visit_designator_item(&mut self, item: &DesignatorItem) -> PasResult<()> {
        walk_designator_item(self, item)
    }
}

pub fn walk_stmt_seq<V: AstVisitor + ?Sized>(visitor: &mut V, seq: &StmtSeq) -> PasResult<()> {
    seq.stmts().iter().try_for_each(|stmt| visitor.visit_stmt(stmt))
}

pub fn walk_stmt<V: AstVisitor + ?Sized>(visitor: &mut V, stmt: &Stmt) -> PasResult<()> {
    match stmt {
        Stmt::Assignment(assign) => visitor.visit_assignment(assign),
        Stmt::ProcCall(call) => visitor.visit_proc_call(call),
        Stmt::If(if_stmt) => visitor.visit_if(if_stmt),
        Stmt::Case(case_stmt) => visitor.visit_case_stmt(case_stmt),
        Stmt::While(while_stmt) => visitor.visit_while(while_stmt),
        Stmt::Repeat(repeat) => visitor.visit_repeat(repeat),
        Stmt::For(for_stmt) => visitor.visit_for(for_stmt),
        Stmt::Memory(memory) => visitor.visit_memory(memory),
        Stmt::Compound(seq) => visitor.visit_stmt_seq(seq),
        Stmt::Empty(_) => visitor.visit_empty(),
    }
}

pub fn walk_assignment<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    assign: &Assignment,
) -> PasResult<()> {
    visitor.visit_designator(assign.designator())?;
    visitor.visit_expr(assign.expr())
}

pub fn walk_proc_call<V: AstVisitor + ?Sized>(visitor: &mut V, call: &ProcCall) -> PasResult<()> {
    call.params().iter().try_for_each(|param| visitor.visit_expr(param))
}

pub fn walk_if<V: AstVisitor + ?Sized>(visitor: &mut V, if_stmt: &IfStmt) -> PasResult<()> {
    visitor.visit_expr(if_stmt.cond_expr())?;
    visitor.visit_stmt(if_stmt.then_stmt())?;
    if let Some(else_stmt) = if_stmt.else_stmt() {
        visitor.visit_stmt(else_stmt)?;
    }
    Ok(())
}

pub fn walk_case_stmt<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    case_stmt: &CaseStmt,
) -> PasResult<()> {
    visitor.visit_expr(case_stmt.cond_expr())?;
    case_stmt.cases().iter().try_for_each(|case| visitor.visit_case(case))
}

pub fn walk_case<V: AstVisitor + ?Sized>(visitor: &mut V, case: &Case) -> PasResult<()> {
    for label in case.labels() {
        visitor.visit_const(label)?;
    }
    visitor.visit_stmt(case.then_stmt())
}

pub fn walk_while<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    while_stmt: &WhileStmt,
) -> PasResult<()> {
    visitor.visit_expr(while_stmt.cond_expr())?;
    visitor.visit_stmt(while_stmt.inner_stmt())
}

pub fn walk_repeat<V: AstVisitor + ?Sized>(visitor: &mut V, repeat: &RepeatStmt) -> PasResult<()> {
    for stmt in repeat.inner_stmts() {
        visitor.visit_stmt(stmt)?;
    }
    visitor.visit_expr(repeat.cond_expr())
}

pub fn walk_for<V: AstVisitor + ?Sized>(visitor: &mut V, for_stmt: &ForStmt) -> PasResult<()> {
    visitor.visit_expr(for_stmt.start_val_expr())?;
    visitor.visit_expr(for_stmt.finish_val_expr())?;
    visitor.visit_stmt(for_stmt.inner_stmt())
}

pub fn walk_expr<V: AstVisitor + ?Sized>(visitor: &mut V, expr: &Expr) -> PasResult<()> {
    visitor.visit_simple_expr(expr.start_expr())?;
    if let Some(op) = expr.op() {
        visitor.visit_simple_expr(&op.expr)?;
    }
    Ok(())
}

pub fn walk_simple_expr<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    expr: &SimpleExpr,
) -> PasResult<()> {
    expr.operands().into_iter().try_for_each(|term| visitor.visit_term(term))
}

pub fn walk_term<V: AstVisitor + ?Sized>(visitor: &mut V, term: &Term) -> PasResult<()> {
    term.operands().into_iter().try_for_each(|factor| visitor.visit_factor(factor))
}

pub fn walk_factor<V: AstVisitor + ?Sized>(visitor: &mut V, factor: &Factor) -> PasResult<()> {
    match factor {
        Factor::Identifier(_) | Factor::Number(_) | Factor::Bool(_) | Factor::Nil => Ok(()),
        Factor::Designator(designator) => visitor.visit_designator(designator),
        Factor::Expr(expr) => visitor.visit_expr(expr),
        Factor::Negation(negation) => visitor.visit_negation(negation),
        Factor::FuncCall(call) => visitor.visit_func_call(call),
    }
}

pub fn walk_negation<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    negation: &Negation,
) -> PasResult<()> {
    visitor.visit_factor(negation.factor())
}

pub fn walk_func_call<V: AstVisitor + ?Sized>(visitor: &mut V, call: &FuncCall) -> PasResult<()> {
    call.params().iter().try_for_each(|param| visitor.visit_expr(param))
}

pub fn walk_designator<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    designator: &Designator,
) -> PasResult<()> {
    designator.items().iter().try_for_each(|item| visitor.visit_designator_item(item))
}

pub fn walk_designator_item<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    item: &DesignatorItem,
) -> PasResult<()> {
    match item {
        DesignatorItem::FieldAccess(_) | DesignatorItem::PointerAccess => Ok(()),
        DesignatorItem::ArrayAccess(exprs) => {
            exprs.iter().try_for_each(|expr| visitor.visit_expr(expr))
        }
    }
}
