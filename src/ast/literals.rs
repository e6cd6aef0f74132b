/// Constant used as a `case` label.
///
/// Named constants are kept by name; resolving them is left to semantic
/// analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstExpr {
    Number(i64),
    Bool(bool),
    Nil,
    Ident(String),
}

impl ConstExpr {
    pub fn number(value: i64) -> Self {
        ConstExpr::Number(value)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        ConstExpr::Ident(name.into())
    }
}

impl From<i64> for ConstExpr {
    fn from(value: i64) -> Self {
        ConstExpr::Number(value)
    }
}

impl From<bool> for ConstExpr {
    fn from(value: bool) -> Self {
        ConstExpr::Bool(value)
    }
}
