// A small tree-walking evaluator over the public node types. It pins down the
// runtime meaning each node carries: operand order, loop bounds, case
// dispatch and pointer cells.

use pasc::ast::*;
use pasc::errors::PasResult;
use pasc::frontend::parse_source;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Value {
    Int(i64),
    Bool(bool),
    Ptr(Option<usize>),
}

#[derive(Default)]
struct Machine {
    vars: HashMap<String, Value>,
    heap: Vec<Option<Value>>,
    output: Vec<i64>,
    calls: HashMap<String, usize>,
}

impl Machine {
    fn run(source: &str) -> Machine {
        let seq = parse_source(source).expect("source parses");
        let mut machine = Machine::default();
        machine.exec_seq(seq.stmts());
        machine
    }

    fn int(&self, name: &str) -> i64 {
        match self.vars.get(name) {
            Some(Value::Int(n)) => *n,
            other => panic!("{} is not an integer: {:?}", name, other),
        }
    }

    fn exec_seq(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.exec(stmt);
        }
    }

    fn exec(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assignment(assign) => {
                let value = self.eval(assign.expr());
                self.store(assign.designator(), value);
            }
            Stmt::ProcCall(call) => {
                let args: Vec<Value> = call.params().iter().map(|p| self.eval(p)).collect();
                match (call.proc_ident(), args.as_slice()) {
                    ("write", [Value::Int(n)]) => self.output.push(*n),
                    (name, _) => panic!("unknown procedure {}", name),
                }
            }
            Stmt::If(if_stmt) => {
                if self.truth(if_stmt.cond_expr()) {
                    self.exec(if_stmt.then_stmt());
                } else if let Some(else_stmt) = if_stmt.else_stmt() {
                    self.exec(else_stmt);
                }
            }
            Stmt::Case(case_stmt) => {
                let selector = self.eval(case_stmt.cond_expr());
                let arm = case_stmt.cases().iter().find(|case| {
                    case.labels().iter().any(|label| self.constant(label) == selector)
                });
                if let Some(arm) = arm {
                    self.exec(arm.then_stmt());
                }
            }
            Stmt::While(while_stmt) => {
                while self.truth(while_stmt.cond_expr()) {
                    self.exec(while_stmt.inner_stmt());
                }
            }
            Stmt::Repeat(repeat) => loop {
                self.exec_seq(repeat.inner_stmts());
                if self.truth(repeat.cond_expr()) {
                    break;
                }
            },
            Stmt::For(for_stmt) => {
                let start = self.eval_int(for_stmt.start_val_expr());
                let finish = self.eval_int(for_stmt.finish_val_expr());
                let step = for_stmt.direction().step();
                let mut current = start;
                while (step > 0 && current <= finish) || (step < 0 && current >= finish) {
                    self.vars.insert(for_stmt.ident().to_string(), Value::Int(current));
                    self.exec(for_stmt.inner_stmt());
                    current += step;
                }
            }
            Stmt::Memory(memory) => match memory.kind() {
                MemoryKind::New => {
                    self.heap.push(Some(Value::Int(0)));
                    let cell = Value::Ptr(Some(self.heap.len() - 1));
                    self.vars.insert(memory.ident().to_string(), cell);
                }
                MemoryKind::Dispose => match self.vars.get(memory.ident()) {
                    Some(Value::Ptr(Some(cell))) => self.heap[*cell] = None,
                    other => panic!("dispose of {:?}", other),
                },
            },
            Stmt::Compound(seq) => self.exec_seq(seq.stmts()),
            Stmt::Empty(_) => {}
        }
    }

    fn cell(&self, designator: &Designator) -> Option<usize> {
        match designator.items() {
            [] => None,
            [DesignatorItem::PointerAccess] => match self.vars.get(designator.ident()) {
                Some(Value::Ptr(Some(cell))) => Some(*cell),
                other => panic!("dereference of {:?}", other),
            },
            items => panic!("unsupported selectors {:?}", items),
        }
    }

    fn store(&mut self, designator: &Designator, value: Value) {
        match self.cell(designator) {
            Some(cell) => self.heap[cell] = Some(value),
            None => {
                self.vars.insert(designator.ident().to_string(), value);
            }
        }
    }

    fn load(&self, designator: &Designator) -> Value {
        match self.cell(designator) {
            Some(cell) => self.heap[cell].expect("cell is live"),
            None => self.vars[designator.ident()],
        }
    }

    fn constant(&self, label: &ConstExpr) -> Value {
        match label {
            ConstExpr::Number(n) => Value::Int(*n),
            ConstExpr::Bool(b) => Value::Bool(*b),
            ConstExpr::Nil => Value::Ptr(None),
            ConstExpr::Ident(name) => self.vars[name],
        }
    }

    fn truth(&mut self, expr: &Expr) -> bool {
        match self.eval(expr) {
            Value::Bool(b) => b,
            other => panic!("condition is {:?}", other),
        }
    }

    fn eval_int(&mut self, expr: &Expr) -> i64 {
        match self.eval(expr) {
            Value::Int(n) => n,
            other => panic!("expected integer, got {:?}", other),
        }
    }

    fn eval(&mut self, expr: &Expr) -> Value {
        let lhs = self.eval_simple(expr.start_expr());
        let Some(op) = expr.op() else { return lhs };
        let rhs = self.eval_simple(&op.expr);
        let result = match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => match op.rel {
                RelOp::Equal => a == b,
                RelOp::NotEqual => a != b,
                RelOp::Less => a < b,
                RelOp::LessEqual => a <= b,
                RelOp::Greater => a > b,
                RelOp::GreaterEqual => a >= b,
            },
            (a, b) => match op.rel {
                RelOp::Equal => a == b,
                RelOp::NotEqual => a != b,
                rel => panic!("{} on {:?} and {:?}", rel, a, b),
            },
        };
        Value::Bool(result)
    }

    fn eval_simple(&mut self, expr: &SimpleExpr) -> Value {
        let mut acc = self.eval_term(expr.start_term());
        if let (Some(UnaryOp::Minus), Value::Int(n)) = (expr.unary_op(), acc) {
            acc = Value::Int(-n);
        }
        for op in expr.ops() {
            let rhs = self.eval_term(&op.term);
            acc = match (op.op, acc, rhs) {
                (AddOp::Plus, Value::Int(a), Value::Int(b)) => Value::Int(a + b),
                (AddOp::Minus, Value::Int(a), Value::Int(b)) => Value::Int(a - b),
                (AddOp::Or, Value::Bool(a), Value::Bool(b)) => Value::Bool(a || b),
                (op, a, b) => panic!("{} on {:?} and {:?}", op, a, b),
            };
        }
        acc
    }

    fn eval_term(&mut self, term: &Term) -> Value {
        let mut acc = self.eval_factor(term.start_factor());
        for op in term.ops() {
            let rhs = self.eval_factor(&op.factor);
            acc = match (op.op, acc, rhs) {
                (MultOp::Multiply, Value::Int(a), Value::Int(b)) => Value::Int(a * b),
                (MultOp::Div | MultOp::Divide, Value::Int(a), Value::Int(b)) => Value::Int(a / b),
                (MultOp::Mod, Value::Int(a), Value::Int(b)) => Value::Int(a % b),
                (MultOp::And, Value::Bool(a), Value::Bool(b)) => Value::Bool(a && b),
                (op, a, b) => panic!("{} on {:?} and {:?}", op, a, b),
            };
        }
        acc
    }

    fn eval_factor(&mut self, factor: &Factor) -> Value {
        match factor {
            Factor::Identifier(name) => self.vars[name],
            Factor::Number(n) => Value::Int(*n),
            Factor::Bool(b) => Value::Bool(*b),
            Factor::Nil => Value::Ptr(None),
            Factor::Designator(designator) => self.load(designator),
            Factor::Expr(expr) => self.eval(expr),
            // Boolean or arithmetic inversion, chosen by the operand's value.
            Factor::Negation(negation) => match self.eval_factor(negation.factor()) {
                Value::Bool(b) => Value::Bool(!b),
                Value::Int(n) => Value::Int(-n),
                other => panic!("not {:?}", other),
            },
            Factor::FuncCall(call) => {
                *self.calls.entry(call.func_ident().to_string()).or_default() += 1;
                let args: Vec<i64> = call.params().iter().map(|p| self.eval_int(p)).collect();
                match (call.func_ident(), args.as_slice()) {
                    ("three", []) => Value::Int(3),
                    ("double", [n]) => Value::Int(n * 2),
                    ("odd", [n]) => Value::Bool(n % 2 != 0),
                    (name, _) => panic!("unknown function {}", name),
                }
            }
        }
    }
}

#[test]
fn test_repeat_body_runs_once_when_condition_starts_true() {
    let m = Machine::run("count := 0; repeat count := count + 1 until true");
    assert_eq!(m.int("count"), 1);

    let m = Machine::run("n := 0; repeat n := n + 2; write(n) until n >= 6");
    assert_eq!(m.output, vec![2, 4, 6]);
}

#[test]
fn test_for_evaluates_bounds_once() {
    let m = Machine::run("for i := 1 to three() do write(i)");
    assert_eq!(m.output, vec![1, 2, 3]);
    assert_eq!(m.calls["three"], 1);
}

#[test]
fn test_for_downto_and_empty_range() {
    let m = Machine::run("for i := double(2) downto 2 do write(i); for j := 5 to 4 do write(j)");
    assert_eq!(m.output, vec![4, 3, 2]);
    assert_eq!(m.calls["double"], 1);
}

#[test]
fn test_while_may_not_run() {
    let m = Machine::run("x := 5; while x < 0 do x := x + 1; while x > 2 do x := x - 1");
    assert_eq!(m.int("x"), 2);
}

#[test]
fn test_first_matching_case_arm_wins() {
    let m = Machine::run("n := 2; case n of 1, 2: r := 10; 2: r := 20; 3: r := 30 end");
    assert_eq!(m.int("r"), 10);

    let m = Machine::run("r := 0; n := 9; case n of 1: r := 1 end");
    assert_eq!(m.int("r"), 0);

    let m = Machine::run("b := odd(3); case b of false: r := 0; true: r := 1 end");
    assert_eq!(m.int("r"), 1);
}

#[test]
fn test_operators_apply_left_to_right_with_precedence() {
    let m = Machine::run(
        "a := 10 - 4 - 3;
         b := -2 + 3 * 4 div 2 mod 5;
         c := 2 * (3 + 4);
         d := 100 div 10 div 5",
    );
    assert_eq!(m.int("a"), 3);
    assert_eq!(m.int("b"), -1);
    assert_eq!(m.int("c"), 14);
    assert_eq!(m.int("d"), 2);
}

#[test]
fn test_negation_follows_operand_type() {
    let m = Machine::run("b := not (1 > 2); n := not 5; c := not odd(4) and true");
    assert_eq!(m.vars["b"], Value::Bool(true));
    assert_eq!(m.int("n"), -5);
    assert_eq!(m.vars["c"], Value::Bool(true));
}

#[test]
fn test_pointer_cells() {
    let m = Machine::run("new(p); p^ := 41; x := p^ + 1; dispose(p); q := nil; e := q = nil");
    assert_eq!(m.int("x"), 42);
    assert_eq!(m.heap, vec![None]);
    assert_eq!(m.vars["e"], Value::Bool(true));
}

#[test]
fn test_dangling_else_binds_inner_if() -> PasResult<()> {
    let m = Machine::run("r := 0; if false then if true then r := 1 else r := 2");
    assert_eq!(m.int("r"), 0);
    let m = Machine::run("r := 0; if true then if false then r := 1 else r := 2");
    assert_eq!(m.int("r"), 2);

    // The rendered tree keeps the same binding.
    let seq = parse_source("if true then begin if false then r := 1 end else r := 2")?;
    let m = Machine::run(&seq.to_string());
    assert_eq!(m.vars.get("r"), None);
    Ok(())
}
