use crate::ast::{ConstExpr, Designator, Expr};

/// Kind tag of a `Stmt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StmtKind {
    Assignment,
    ProcCall,
    If,
    Case,
    While,
    Repeat,
    For,
    Memory,
    Compound,
    Empty,
}

/// Any statement. Every payload is boxed so `Stmt` stays two words wide
/// regardless of how large the concrete statements grow.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(Box<Assignment>),
    ProcCall(Box<ProcCall>),
    If(Box<IfStmt>),
    Case(Box<CaseStmt>),
    While(Box<WhileStmt>),
    Repeat(Box<RepeatStmt>),
    For(Box<ForStmt>),
    Memory(Box<MemoryStmt>),
    Compound(Box<StmtSeq>),
    Empty(Box<EmptyStmt>),
}

impl Stmt {
    pub fn kind(&self) -> StmtKind {
        match self {
            Stmt::Assignment(_) => StmtKind::Assignment,
            Stmt::ProcCall(_) => StmtKind::ProcCall,
            Stmt::If(_) => StmtKind::If,
            Stmt::Case(_) => StmtKind::Case,
            Stmt::While(_) => StmtKind::While,
            Stmt::Repeat(_) => StmtKind::Repeat,
            Stmt::For(_) => StmtKind::For,
            Stmt::Memory(_) => StmtKind::Memory,
            Stmt::Compound(_) => StmtKind::Compound,
            Stmt::Empty(_) => StmtKind::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stmt::Empty(_))
    }
}

impl Default for Stmt {
    fn default() -> Self {
        Stmt::Empty(Box::new(EmptyStmt))
    }
}

macro_rules! impl_into_stmt {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Stmt {
                fn from(node: $node) -> Self {
                    Stmt::$variant(Box::new(node))
                }
            }
        )*
    };
}

impl_into_stmt! {
    Assignment => Assignment,
    ProcCall => ProcCall,
    IfStmt => If,
    CaseStmt => Case,
    WhileStmt => While,
    RepeatStmt => Repeat,
    ForStmt => For,
    MemoryStmt => Memory,
    StmtSeq => Compound,
    EmptyStmt => Empty,
}

/// Ordered statements; also the body of `begin ... end`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StmtSeq {
    stmts: Vec<Stmt>,
}

impl StmtSeq {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyStmt;

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    cond_expr: Expr,
    then_stmt: Stmt,
    else_stmt: Option<Stmt>,
}

impl IfStmt {
    pub fn new(cond_expr: Expr, then_stmt: Stmt, else_stmt: Option<Stmt>) -> Self {
        Self {
            cond_expr,
            then_stmt,
            else_stmt,
        }
    }

    pub fn cond_expr(&self) -> &Expr {
        &self.cond_expr
    }

    pub fn then_stmt(&self) -> &Stmt {
        &self.then_stmt
    }

    pub fn else_stmt(&self) -> Option<&Stmt> {
        self.else_stmt.as_ref()
    }
}

/// One arm of a `case`: the labels guarding it and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    labels: Vec<ConstExpr>,
    then_stmt: Stmt,
}

impl Case {
    pub fn new(labels: Vec<ConstExpr>, then_stmt: Stmt) -> Self {
        Self { labels, then_stmt }
    }

    pub fn labels(&self) -> &[ConstExpr] {
        &self.labels
    }

    pub fn then_stmt(&self) -> &Stmt {
        &self.then_stmt
    }
}

// Arms stay in source order: the first arm with a matching label wins.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStmt {
    cond_expr: Expr,
    cases: Vec<Case>,
}

impl CaseStmt {
    pub fn new(cond_expr: Expr, cases: Vec<Case>) -> Self {
        Self { cond_expr, cases }
    }

    pub fn cond_expr(&self) -> &Expr {
        &self.cond_expr
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    cond_expr: Expr,
    inner_stmt: Stmt,
}

impl WhileStmt {
    pub fn new(cond_expr: Expr, inner_stmt: Stmt) -> Self {
        Self { cond_expr, inner_stmt }
    }

    pub fn cond_expr(&self) -> &Expr {
        &self.cond_expr
    }

    pub fn inner_stmt(&self) -> &Stmt {
        &self.inner_stmt
    }
}

/// `repeat ... until cond`: the body runs at least once and the loop exits
/// once `cond` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    inner_stmts: Vec<Stmt>,
    cond_expr: Expr,
}

impl RepeatStmt {
    pub fn new(inner_stmts: Vec<Stmt>, cond_expr: Expr) -> Self {
        Self {
            inner_stmts,
            cond_expr,
        }
    }

    pub fn inner_stmts(&self) -> &[Stmt] {
        &self.inner_stmts
    }

    pub fn cond_expr(&self) -> &Expr {
        &self.cond_expr
    }
}

/// Stepping direction of a `for` loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    To,
    DownTo,
}

impl Direction {
    /// Signed step applied to the loop variable after each iteration.
    pub fn step(self) -> i64 {
        match self {
            Direction::To => 1,
            Direction::DownTo => -1,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Direction::To => "to",
            Direction::DownTo => "downto",
        }
    }
}

/// Counted loop. Both bounds are evaluated once, on entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    ident: String,
    start_val_expr: Expr,
    direction: Direction,
    finish_val_expr: Expr,
    inner_stmt: Stmt,
}

impl ForStmt {
    pub fn new(
        ident: impl Into<String>,
        start_val_expr: Expr,
        direction: Direction,
        finish_val_expr: Expr,
        inner_stmt: Stmt,
    ) -> Self {
        Self {
            ident: ident.into(),
            start_val_expr,
            direction,
            finish_val_expr,
            inner_stmt,
        }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn start_val_expr(&self) -> &Expr {
        &self.start_val_expr
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn finish_val_expr(&self) -> &Expr {
        &self.finish_val_expr
    }

    pub fn inner_stmt(&self) -> &Stmt {
        &self.inner_stmt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryKind {
    New,
    Dispose,
}

impl MemoryKind {
    pub fn keyword(self) -> &'static str {
        match self {
            MemoryKind::New => "new",
            MemoryKind::Dispose => "dispose",
        }
    }
}

// new(p) / dispose(p) on a pointer-typed variable.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryStmt {
    kind: MemoryKind,
    ident: String,
}

impl MemoryStmt {
    pub fn new(kind: MemoryKind, ident: impl Into<String>) -> Self {
        Self {
            kind,
            ident: ident.into(),
        }
    }

    pub fn kind(&self) -> MemoryKind {
        self.kind
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    designator: Designator,
    expr: Expr,
}

impl Assignment {
    pub fn new(designator: Designator, expr: Expr) -> Self {
        Self { designator, expr }
    }

    pub fn designator(&self) -> &Designator {
        &self.designator
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcCall {
    proc_ident: String,
    params: Vec<Expr>,
}

impl ProcCall {
    pub fn new(proc_ident: impl Into<String>, params: Vec<Expr>) -> Self {
        Self {
            proc_ident: proc_ident.into(),
            params,
        }
    }

    pub fn proc_ident(&self) -> &str {
        &self.proc_ident
    }

    pub fn params(&self) -> &[Expr] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Factor;

    fn assign(name: &str, value: i64) -> Stmt {
        Assignment::new(Designator::variable(name), Expr::from(Factor::Number(value))).into()
    }

    #[test]
    fn test_stmt_is_tag_and_pointer() {
        assert_eq!(std::mem::size_of::<Stmt>(), 2 * std::mem::size_of::<usize>());
    }

    #[test]
    fn test_for_keeps_start_and_direction() {
        let stmt = ForStmt::new(
            "i",
            Expr::from(Factor::Number(10)),
            Direction::DownTo,
            Expr::from(Factor::Number(1)),
            Stmt::default(),
        );
        assert_eq!(stmt.ident(), "i");
        assert_eq!(stmt.start_val_expr().as_factor(), Some(&Factor::Number(10)));
        assert_eq!(stmt.finish_val_expr().as_factor(), Some(&Factor::Number(1)));
        assert_eq!(stmt.direction(), Direction::DownTo);
        assert_eq!(stmt.direction().step(), -1);
        assert!(stmt.inner_stmt().is_empty());
    }

    #[test]
    fn test_from_concrete_statements() {
        let stmts: Vec<Stmt> = vec![
            assign("a", 1),
            ProcCall::new("writeln", vec![]).into(),
            IfStmt::new(Expr::from(Factor::Bool(true)), assign("a", 2), None).into(),
            CaseStmt::new(Expr::from(Factor::ident("n")), vec![]).into(),
            WhileStmt::new(Expr::from(Factor::Bool(false)), Stmt::default()).into(),
            RepeatStmt::new(vec![], Expr::from(Factor::Bool(true))).into(),
            ForStmt::new(
                "i",
                Expr::from(Factor::Number(1)),
                Direction::To,
                Expr::from(Factor::Number(3)),
                Stmt::default(),
            )
            .into(),
            MemoryStmt::new(MemoryKind::New, "p").into(),
            StmtSeq::new(vec![assign("b", 3)]).into(),
            EmptyStmt.into(),
        ];
        let kinds: Vec<_> = stmts.iter().map(Stmt::kind).collect();
        assert_eq!(
            kinds,
            vec![
                StmtKind::Assignment,
                StmtKind::ProcCall,
                StmtKind::If,
                StmtKind::Case,
                StmtKind::While,
                StmtKind::Repeat,
                StmtKind::For,
                StmtKind::Memory,
                StmtKind::Compound,
                StmtKind::Empty,
            ]
        );
    }

    #[test]
    fn test_case_arms_keep_order() {
        let stmt = CaseStmt::new(
            Expr::from(Factor::ident("n")),
            vec![
                Case::new(vec![ConstExpr::Number(1)], assign("a", 1)),
                Case::new(vec![ConstExpr::Number(2), ConstExpr::Number(3)], assign("a", 2)),
            ],
        );
        assert_eq!(stmt.cases().len(), 2);
        assert_eq!(stmt.cases()[1].labels(), &[ConstExpr::Number(2), ConstExpr::Number(3)]);
    }
}
