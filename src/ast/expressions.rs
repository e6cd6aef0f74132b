use crate::ast::ops::{AddOp, MultOp, RelOp, UnaryOp};
use crate::ast::Designator;

/// Kind tag of a `Factor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    Identifier,
    Number,
    Bool,
    Nil,
    Designator,
    Expr,
    Negation,
    FuncCall,
}

/// Smallest operand of the expression grammar.
///
/// The three variants that lead back into the expression grammar are boxed so
/// `Factor` has a fixed size.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    Identifier(String),
    Number(i64),
    Bool(bool),
    Nil,
    Designator(Designator),
    Expr(Box<Expr>),
    Negation(Box<Negation>),
    FuncCall(Box<FuncCall>),
}

impl Factor {
    pub fn ident(name: impl Into<String>) -> Self {
        Factor::Identifier(name.into())
    }

    pub fn parenthesized(expr: Expr) -> Self {
        Factor::Expr(Box::new(expr))
    }

    pub fn negated(factor: Factor) -> Self {
        Factor::Negation(Box::new(Negation::new(factor)))
    }

    pub fn call(call: FuncCall) -> Self {
        Factor::FuncCall(Box::new(call))
    }

    pub fn kind(&self) -> FactorKind {
        match self {
            Factor::Identifier(_) => FactorKind::Identifier,
            Factor::Number(_) => FactorKind::Number,
            Factor::Bool(_) => FactorKind::Bool,
            Factor::Nil => FactorKind::Nil,
            Factor::Designator(_) => FactorKind::Designator,
            Factor::Expr(_) => FactorKind::Expr,
            Factor::Negation(_) => FactorKind::Negation,
            Factor::FuncCall(_) => FactorKind::FuncCall,
        }
    }
}

impl From<Designator> for Factor {
    fn from(designator: Designator) -> Self {
        Factor::Designator(designator)
    }
}

impl From<FuncCall> for Factor {
    fn from(call: FuncCall) -> Self {
        Factor::call(call)
    }
}

impl From<Negation> for Factor {
    fn from(negation: Negation) -> Self {
        Factor::Negation(Box::new(negation))
    }
}

/// `not f`. Whether this is boolean or arithmetic inversion depends on the
/// operand type and is decided after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Negation {
    factor: Factor,
}

impl Negation {
    pub fn new(factor: Factor) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> &Factor {
        &self.factor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TermOp {
    pub op: MultOp,
    pub factor: Factor,
}

/// `f0 op1 f1 op2 f2 ...`, applied left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    start_factor: Factor,
    ops: Vec<TermOp>,
}

impl Term {
    pub fn new(start_factor: Factor, ops: Vec<TermOp>) -> Self {
        Self { start_factor, ops }
    }

    pub fn start_factor(&self) -> &Factor {
        &self.start_factor
    }

    pub fn ops(&self) -> &[TermOp] {
        &self.ops
    }

    /// All factors in source order.
    pub fn operands(&self) -> Vec<&Factor> {
        std::iter::once(&self.start_factor)
            .chain(self.ops.iter().map(|op| &op.factor))
            .collect()
    }

    /// The lone factor when the term applies no operator.
    pub fn as_factor(&self) -> Option<&Factor> {
        self.ops.is_empty().then_some(&self.start_factor)
    }
}

impl From<Factor> for Term {
    fn from(factor: Factor) -> Self {
        Term::new(factor, Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleExprOp {
    pub op: AddOp,
    pub term: Term,
}

/// `[sign] t0 op1 t1 op2 t2 ...`; the sign applies to `t0` only.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleExpr {
    unary_op: Option<UnaryOp>,
    start_term: Term,
    ops: Vec<SimpleExprOp>,
}

impl SimpleExpr {
    pub fn new(unary_op: Option<UnaryOp>, start_term: Term, ops: Vec<SimpleExprOp>) -> Self {
        Self {
            unary_op,
            start_term,
            ops,
        }
    }

    pub fn unary_op(&self) -> Option<UnaryOp> {
        self.unary_op
    }

    pub fn start_term(&self) -> &Term {
        &self.start_term
    }

    pub fn ops(&self) -> &[SimpleExprOp] {
        &self.ops
    }

    pub fn operands(&self) -> Vec<&Term> {
        std::iter::once(&self.start_term)
            .chain(self.ops.iter().map(|op| &op.term))
            .collect()
    }

    pub fn as_term(&self) -> Option<&Term> {
        (self.unary_op.is_none() && self.ops.is_empty()).then_some(&self.start_term)
    }
}

impl From<Term> for SimpleExpr {
    fn from(term: Term) -> Self {
        SimpleExpr::new(None, term, Vec::new())
    }
}

impl From<Factor> for SimpleExpr {
    fn from(factor: Factor) -> Self {
        SimpleExpr::from(Term::from(factor))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOp {
    pub rel: RelOp,
    pub expr: SimpleExpr,
}

/// A simple expression, optionally compared against one other.
///
/// Comparisons do not chain: `a < b < c` has no representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    start_expr: SimpleExpr,
    op: Option<ExprOp>,
}

impl Expr {
    pub fn new(start_expr: SimpleExpr, op: Option<ExprOp>) -> Self {
        Self { start_expr, op }
    }

    pub fn relational(lhs: SimpleExpr, rel: RelOp, rhs: SimpleExpr) -> Self {
        Self::new(lhs, Some(ExprOp { rel, expr: rhs }))
    }

    pub fn start_expr(&self) -> &SimpleExpr {
        &self.start_expr
    }

    pub fn op(&self) -> Option<&ExprOp> {
        self.op.as_ref()
    }

    pub fn is_relational(&self) -> bool {
        self.op.is_some()
    }

    /// The lone factor of an expression with no operators at any level.
    pub fn as_factor(&self) -> Option<&Factor> {
        if self.op.is_some() {
            return None;
        }
        self.start_expr.as_term().and_then(Term::as_factor)
    }
}

impl From<SimpleExpr> for Expr {
    fn from(expr: SimpleExpr) -> Self {
        Expr::new(expr, None)
    }
}

impl From<Term> for Expr {
    fn from(term: Term) -> Self {
        Expr::from(SimpleExpr::from(term))
    }
}

impl From<Factor> for Expr {
    fn from(factor: Factor) -> Self {
        Expr::from(Term::from(factor))
    }
}

// Allowed only inside expressions because it yields a value. A call in
// statement position is a `ProcCall`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    func_ident: String,
    params: Vec<Expr>,
}

impl FuncCall {
    pub fn new(func_ident: impl Into<String>, params: Vec<Expr>) -> Self {
        Self {
            func_ident: func_ident.into(),
            params,
        }
    }

    pub fn func_ident(&self) -> &str {
        &self.func_ident
    }

    pub fn params(&self) -> &[Expr] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64) -> Factor {
        Factor::Number(n)
    }

    #[test]
    fn test_factor_kinds() {
        let factors = vec![
            Factor::ident("x"),
            num(1),
            Factor::Bool(true),
            Factor::Nil,
            Factor::from(Designator::variable("p")),
            Factor::parenthesized(Expr::from(num(2))),
            Factor::negated(Factor::Bool(false)),
            Factor::call(FuncCall::new("f", vec![])),
        ];
        let kinds: Vec<_> = factors.iter().map(Factor::kind).collect();
        assert_eq!(
            kinds,
            vec![
                FactorKind::Identifier,
                FactorKind::Number,
                FactorKind::Bool,
                FactorKind::Nil,
                FactorKind::Designator,
                FactorKind::Expr,
                FactorKind::Negation,
                FactorKind::FuncCall,
            ]
        );
    }

    #[test]
    fn test_term_operands_in_source_order() {
        let term = Term::new(
            num(1),
            vec![
                TermOp { op: MultOp::Multiply, factor: num(2) },
                TermOp { op: MultOp::Div, factor: num(3) },
            ],
        );
        let operands: Vec<_> = term.operands().into_iter().cloned().collect();
        assert_eq!(operands, vec![num(1), num(2), num(3)]);
        assert_eq!(term.as_factor(), None);
    }

    #[test]
    fn test_sign_prevents_degenerate_term() {
        let signed = SimpleExpr::new(Some(UnaryOp::Minus), Term::from(num(4)), vec![]);
        assert!(signed.as_term().is_none());
        assert_eq!(signed.operands().len(), 1);
    }

    #[test]
    fn test_expr_degenerates_to_factor() {
        let expr = Expr::from(Factor::ident("a"));
        assert!(!expr.is_relational());
        assert_eq!(expr.as_factor(), Some(&Factor::ident("a")));

        let cmp = Expr::relational(SimpleExpr::from(num(1)), RelOp::Less, SimpleExpr::from(num(2)));
        assert!(cmp.is_relational());
        assert_eq!(cmp.op().map(|op| op.rel), Some(RelOp::Less));
        assert_eq!(cmp.as_factor(), None);
    }
}
