use crate::ast::Expr;

/// Kind tag of a `DesignatorItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignatorItemKind {
    FieldAccess,
    ArrayAccess,
    PointerAccess,
}

/// One access step applied to a variable: `.field`, `[i, j]` or `^`.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignatorItem {
    FieldAccess(String),
    // One expression per dimension, evaluated left to right.
    ArrayAccess(Vec<Expr>),
    PointerAccess,
}

impl DesignatorItem {
    pub fn field(name: impl Into<String>) -> Self {
        DesignatorItem::FieldAccess(name.into())
    }

    /// `[e1, ..., en]`; `exprs` holds at least one index.
    pub fn index(exprs: Vec<Expr>) -> Self {
        debug_assert!(!exprs.is_empty(), "array access needs at least one index");
        DesignatorItem::ArrayAccess(exprs)
    }

    pub fn kind(&self) -> DesignatorItemKind {
        match self {
            DesignatorItem::FieldAccess(_) => DesignatorItemKind::FieldAccess,
            DesignatorItem::ArrayAccess(_) => DesignatorItemKind::ArrayAccess,
            DesignatorItem::PointerAccess => DesignatorItemKind::PointerAccess,
        }
    }
}

/// A storage location: a variable name followed by its access steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Designator {
    ident: String,
    items: Vec<DesignatorItem>,
}

impl Designator {
    pub fn new(ident: impl Into<String>, items: Vec<DesignatorItem>) -> Self {
        Self {
            ident: ident.into(),
            items,
        }
    }

    /// A designator naming a plain variable.
    pub fn variable(ident: impl Into<String>) -> Self {
        Self::new(ident, Vec::new())
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn items(&self) -> &[DesignatorItem] {
        &self.items
    }

    pub fn is_plain_variable(&self) -> bool {
        self.items.is_empty()
    }
}
