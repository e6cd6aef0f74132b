use std::fmt;

/// Leading sign of a simple expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// Operators binding inside a `Term`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultOp {
    Multiply,
    Divide,
    Div,
    Mod,
    And,
}

/// Operators binding inside a `SimpleExpr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOp {
    Plus,
    Minus,
    Or,
}

/// Comparison operators; at most one per `Expr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

impl MultOp {
    pub fn symbol(self) -> &'static str {
        match self {
            MultOp::Multiply => "*",
            MultOp::Divide => "/",
            MultOp::Div => "div",
            MultOp::Mod => "mod",
            MultOp::And => "and",
        }
    }
}

impl AddOp {
    pub fn symbol(self) -> &'static str {
        match self {
            AddOp::Plus => "+",
            AddOp::Minus => "-",
            AddOp::Or => "or",
        }
    }
}

impl RelOp {
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Equal => "=",
            RelOp::NotEqual => "<>",
            RelOp::Less => "<",
            RelOp::LessEqual => "<=",
            RelOp::Greater => ">",
            RelOp::GreaterEqual => ">=",
        }
    }
}

macro_rules! display_symbol {
    ($($op:ty),*) => {
        $(
            impl fmt::Display for $op {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.symbol())
                }
            }
        )*
    };
}

display_symbol!(UnaryOp, MultOp, AddOp, RelOp);
