use std::fmt;

use regex::Regex;

use crate::ast::{
    Assignment, Case, ConstExpr, Designator, DesignatorItem, Expr, Factor, ForStmt, FuncCall,
    MemoryStmt, ProcCall, SimpleExpr, Stmt, StmtSeq, Term,
};
use crate::semantic::visiters::{
    walk_case, walk_designator, walk_designator_item, walk_expr, walk_factor, walk_for,
    walk_func_call, walk_proc_call, walk_simple_expr, walk_stmt, walk_term, AstVisitor,
};
use crate::utils::errors::PasResult;

/// Node counts of a tree, by layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    pub statements: usize,
    pub case_arms: usize,
    pub case_labels: usize,
    pub expressions: usize,
    pub simple_expressions: usize,
    pub terms: usize,
    pub factors: usize,
    pub designators: usize,
    pub designator_items: usize,
}

impl NodeCounter {
    pub fn count(seq: &StmtSeq) -> PasResult<Self> {
        let mut counter = Self::default();
        counter.visit_stmt_seq(seq)?;
        Ok(counter)
    }

    pub fn total(&self) -> usize {
        self.statements
            + self.case_arms
            + self.case_labels
            + self.expressions
            + self.simple_expressions
            + self.terms
            + self.factors
            + self.designators
            + self.designator_items
    }
}

impl AstVisitor for NodeCounter {
    fn visit_stmt(&mut self, stmt: &Stmt) -> PasResult<()> {
        self.statements += 1;
        walk_stmt(self, stmt)
    }
    fn visit_case(&mut self, case: &Case) -> PasResult<()> {
        self.case_arms += 1;
        walk_case(self, case)
    }
    fn visit_const(&mut self, _label: &ConstExpr) -> PasResult<()> {
        self.case_labels += 1;
        Ok(())
    }
    fn visit_expr(&mut self, expr: &Expr) -> PasResult<()> {
        self.expressions += 1;
        walk_expr(self, expr)
    }
    fn visit_simple_expr(&mut self, expr: &SimpleExpr) -> PasResult<()> {
        self.simple_expressions += 1;
        walk_simple_expr(self, expr)
    }
    fn visit_term(&mut self, term: &Term) -> PasResult<()> {
        self.terms += 1;
        walk_term(self, term)
    }
    fn visit_factor(&mut self, factor: &Factor) -> PasResult<()> {
        self.factors += 1;
        walk_factor(self, factor)
    }
    fn visit_designator(&mut self, designator: &Designator) -> PasResult<()> {
        self.designators += 1;
        walk_designator(self, designator)
    }
    fn visit_designator_item(&mut self, item: &DesignatorItem) -> PasResult<()> {
        self.designator_items += 1;
        walk_designator_item(self, item)
    }
}

/// How an identifier is used at the place it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentRole {
    Read,
    Assigned,
    Called,
    LoopVariable,
    MemoryTarget,
    CaseLabel,
}

impl fmt::Display for IdentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentRole::Read => "read",
            IdentRole::Assigned => "assigned",
            IdentRole::Called => "called",
            IdentRole::LoopVariable => "loop variable",
            IdentRole::MemoryTarget => "memory target",
            IdentRole::CaseLabel => "case label",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentRef {
    pub name: String,
    pub role: IdentRole,
}

/// Collects identifier references in traversal order, optionally keeping
/// only names matching a pattern.
#[derive(Debug, Default)]
pub struct IdentifierCollector {
    filter: Option<Regex>,
    refs: Vec<IdentRef>,
}

impl IdentifierCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(pattern: &str) -> PasResult<Self> {
        Ok(Self {
            filter: Some(Regex::new(pattern)?),
            refs: Vec::new(),
        })
    }

    pub fn collect(mut self, seq: &StmtSeq) -> PasResult<Vec<IdentRef>> {
        self.visit_stmt_seq(seq)?;
        Ok(self.refs)
    }

    fn record(&mut self, name: &str, role: IdentRole) {
        let keep = self.filter.as_ref().map_or(true, |re| re.is_match(name));
        if keep {
            self.refs.push(IdentRef {
                name: name.to_string(),
                role,
            });
        }
    }
}

impl AstVisitor for IdentifierCollector {
    fn visit_assignment(&mut self, assign: &Assignment) -> PasResult<()> {
        self.record(assign.designator().ident(), IdentRole::Assigned);
        // Index expressions inside the target are reads.
        walk_designator(self, assign.designator())?;
        self.visit_expr(assign.expr())
    }
    fn visit_proc_call(&mut self, call: &ProcCall) -> PasResult<()> {
        self.record(call.proc_ident(), IdentRole::Called);
        walk_proc_call(self, call)
    }
    fn visit_for(&mut self, for_stmt: &ForStmt) -> PasResult<()> {
        self.record(for_stmt.ident(), IdentRole::LoopVariable);
        walk_for(self, for_stmt)
    }
    fn visit_memory(&mut self, memory: &MemoryStmt) -> PasResult<()> {
        self.record(memory.ident(), IdentRole::MemoryTarget);
        Ok(())
    }
    fn visit_const(&mut self, label: &ConstExpr) -> PasResult<()> {
        if let ConstExpr::Ident(name) = label {
            self.record(name, IdentRole::CaseLabel);
        }
        Ok(())
    }
    fn visit_factor(&mut self, factor: &Factor) -> PasResult<()> {
        if let Factor::Identifier(name) = factor {
            self.record(name, IdentRole::Read);
        }
        walk_factor(self, factor)
    }
    fn visit_designator(&mut self, designator: &Designator) -> PasResult<()> {
        self.record(designator.ident(), IdentRole::Read);
        walk_designator(self, designator)
    }
    fn visit_func_call(&mut self, call: &FuncCall) -> PasResult<()> {
        self.record(call.func_ident(), IdentRole::Called);
        walk_func_call(self, call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Direction, MemoryKind, RelOp};

    fn sample() -> StmtSeq {
        // p^.next := f(i); for i := 1 to n do dispose(p)
        let assign = Assignment::new(
            Designator::new(
                "p",
                vec![DesignatorItem::PointerAccess, DesignatorItem::field("next")],
            ),
            Expr::from(Factor::call(FuncCall::new("f", vec![Expr::from(Factor::ident("i"))]))),
        );
        let for_stmt = ForStmt::new(
            "i",
            Expr::from(Factor::Number(1)),
            Direction::To,
            Expr::from(Factor::ident("n")),
            MemoryStmt::new(MemoryKind::Dispose, "p").into(),
        );
        StmtSeq::new(vec![assign.into(), for_stmt.into()])
    }

    #[test]
    fn test_collects_roles_in_order() -> PasResult<()> {
        let refs = IdentifierCollector::new().collect(&sample())?;
        let seen: Vec<_> = refs.iter().map(|r| (r.name.as_str(), r.role)).collect();
        assert_eq!(
            seen,
            vec![
                ("p", IdentRole::Assigned),
                ("f", IdentRole::Called),
                ("i", IdentRole::Read),
                ("i", IdentRole::LoopVariable),
                ("n", IdentRole::Read),
                ("p", IdentRole::MemoryTarget),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_pattern_filters_names() -> PasResult<()> {
        let refs = IdentifierCollector::with_pattern("^[pn]$")?.collect(&sample())?;
        assert_eq!(refs.len(), 3);
        assert!(refs.iter().all(|r| r.name == "p" || r.name == "n"));
        Ok(())
    }

    #[test]
    fn test_counts_every_layer() -> PasResult<()> {
        let cond = Expr::relational(
            SimpleExpr::from(Factor::ident("x")),
            RelOp::Greater,
            SimpleExpr::from(Factor::Number(0)),
        );
        let seq = StmtSeq::new(vec![crate::ast::WhileStmt::new(cond, Stmt::default()).into()]);
        let counts = NodeCounter::count(&seq)?;
        assert_eq!(counts.statements, 2);
        assert_eq!(counts.expressions, 1);
        assert_eq!(counts.simple_expressions, 2);
        assert_eq!(counts.terms, 2);
        assert_eq!(counts.factors, 2);
        assert_eq!(counts.total(), 9);
        Ok(())
    }
}
