/*
*                    pasc -- Pascal-subset front end.
*
* stmt_seq    = statement { ";" statement } ;
* statement   = [ designator ":=" expr
*             | ident [ "(" expr { "," expr } ")" ]
*             | "begin" stmt_seq "end"
*             | "if" expr "then" statement [ "else" statement ]
*             | "case" expr "of" [ case { ";" case } [ ";" ] ] "end"
*             | "while" expr "do" statement
*             | "repeat" stmt_seq "until" expr
*             | "for" ident ":=" expr ( "to" | "downto" ) expr "do" statement
*             | ( "new" | "dispose" ) "(" ident ")" ] ;
* case        = const_expr { "," const_expr } ":" statement ;
* expr        = simple_expr [ relop simple_expr ] ;
* simple_expr = [ "+" | "-" ] term { ( "+" | "-" | "or" ) term } ;
* term        = factor { ( "*" | "/" | "div" | "mod" | "and" ) factor } ;
* factor      = ident | number | "true" | "false" | "nil" | designator
*             | "(" expr ")" | "not" factor | ident "(" [ expr { "," expr } ] ")" ;
* designator  = ident { "." ident | "[" expr { "," expr } "]" | "^" } ;
* relop       = "=" | "<>" | "<" | "<=" | ">" | ">=" ;
*/

// Abstract Syntax Tree definitions.
// Nodes are built bottom-up by the parser and never change afterwards.

mod designator;
mod display;
mod expressions;
mod literals;
pub mod ops;
mod statements;

pub use designator::{Designator, DesignatorItem, DesignatorItemKind};
pub use expressions::{
    Expr, ExprOp, Factor, FactorKind, FuncCall, Negation, SimpleExpr, SimpleExprOp, Term, TermOp,
};
pub use literals::ConstExpr;
pub use ops::{AddOp, MultOp, RelOp, UnaryOp};
pub use statements::{
    Assignment, Case, CaseStmt, Direction, EmptyStmt, ForStmt, IfStmt, MemoryKind, MemoryStmt,
    ProcCall, RepeatStmt, Stmt, StmtKind, StmtSeq, WhileStmt,
};
