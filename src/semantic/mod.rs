pub mod collect;
pub mod visiters;

pub use collect::{IdentRef, IdentRole, IdentifierCollector, NodeCounter};
pub use visiters::AstVisitor;
