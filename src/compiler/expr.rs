//! Expression tree and its interpreter.

use std::fmt;

use crate::compiler::operator::Operator;
use crate::error::CalcError;
use crate::number::Decimal;

/// One node of a compiled expression.
///
/// `Clone`, `PartialEq`, `Debug`, and `Drop` are iterative; tree depth is
/// bounded only by memory.
pub enum Expr {
    /// Constant value.
    Literal(Decimal),
    /// Reference to a positional parameter slot.
    Param(usize),
    /// Unary operator application.
    Unary(Operator, Box<Expr>),
    /// Binary operator application; left operand first.
    Binary(Operator, Box<Expr>, Box<Expr>),
}

/// Pending interpreter work.
enum Step<'a> {
    Visit(&'a Expr),
    Apply(Operator),
}

impl Expr {
    /// Evaluates the tree against positional `values`.
    ///
    /// Uses an explicit work stack, so evaluation depth does not grow the call
    /// stack.
    pub fn evaluate(&self, values: &[Decimal]) -> Result<Decimal, CalcError> {
        let mut work = vec![Step::Visit(self)];
        let mut operands: Vec<Decimal> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(Expr::Literal(value)) => operands.push(value.clone()),
                Step::Visit(Expr::Param(slot)) => {
                    let value = values.get(*slot).ok_or_else(|| {
                        CalcError::argument_count_mismatch(slot + 1, values.len())
                    })?;
                    operands.push(value.clone());
                }
                Step::Visit(Expr::Unary(operator, operand)) => {
                    work.push(Step::Apply(*operator));
                    work.push(Step::Visit(operand));
                }
                Step::Visit(Expr::Binary(operator, left, right)) => {
                    work.push(Step::Apply(*operator));
                    work.push(Step::Visit(right));
                    work.push(Step::Visit(left));
                }
                Step::Apply(operator) => {
                    let split = operands
                        .len()
                        .checked_sub(operator.arity())
                        .ok_or_else(|| CalcError::missing_operand(None, operator))?;
                    let result = operator.apply(&operands[split..])?;
                    operands.truncate(split);
                    operands.push(result);
                }
            }
        }

        operands
            .pop()
            .ok_or_else(|| CalcError::malformed(None, "expression produced no value"))
    }

    /// Counts the nodes in the tree.
    pub fn node_count(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                Expr::Literal(_) | Expr::Param(_) => {}
                Expr::Unary(_, operand) => pending.push(operand),
                Expr::Binary(_, left, right) => {
                    pending.push(left);
                    pending.push(right);
                }
            }
        }
        count
    }

    fn write_infix(&self, f: &mut fmt::Formatter<'_>, names: &[char]) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Symbol(operator) => {
                    write!(f, " {} ", operator.symbol().unwrap_or('?'))?;
                }
                Piece::Node(Expr::Literal(value)) => write!(f, "{value}")?,
                Piece::Node(Expr::Param(slot)) => match names.get(*slot) {
                    Some(name) => write!(f, "{name}")?,
                    None => write!(f, "${slot}")?,
                },
                Piece::Node(Expr::Unary(_, operand)) => {
                    f.write_str("(-")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(operand));
                }
                Piece::Node(Expr::Binary(operator, left, right)) => {
                    f.write_str("(")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Symbol(*operator));
                    pending.push(Piece::Node(left));
                }
            }
        }
        Ok(())
    }

    /// Moves the children out, leaving leaf placeholders behind.
    fn detach_children(&mut self, into: &mut Vec<Expr>) {
        match self {
            Expr::Literal(_) | Expr::Param(_) => {}
            Expr::Unary(_, operand) => into.push(detach(operand)),
            Expr::Binary(_, left, right) => {
                into.push(detach(left));
                into.push(detach(right));
            }
        }
    }
}

fn detach(node: &mut Expr) -> Expr {
    std::mem::replace(node, Expr::Param(0))
}

/// Pending rendering work.
enum Piece<'a> {
    Node(&'a Expr),
    Symbol(Operator),
    Text(&'static str),
}

/// Pending clone work.
enum Rebuild<'a> {
    Visit(&'a Expr),
    Unary(Operator),
    Binary(Operator),
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        let mut work = vec![Rebuild::Visit(self)];
        let mut built: Vec<Expr> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Rebuild::Visit(Expr::Literal(value)) => built.push(Expr::Literal(value.clone())),
                Rebuild::Visit(Expr::Param(slot)) => built.push(Expr::Param(*slot)),
                Rebuild::Visit(Expr::Unary(operator, operand)) => {
                    work.push(Rebuild::Unary(*operator));
                    work.push(Rebuild::Visit(operand));
                }
                Rebuild::Visit(Expr::Binary(operator, left, right)) => {
                    work.push(Rebuild::Binary(*operator));
                    work.push(Rebuild::Visit(right));
                    work.push(Rebuild::Visit(left));
                }
                Rebuild::Unary(operator) => {
                    let operand = built.pop().unwrap_or(Expr::Param(0));
                    built.push(Expr::Unary(operator, Box::new(operand)));
                }
                Rebuild::Binary(operator) => {
                    let right = built.pop().unwrap_or(Expr::Param(0));
                    let left = built.pop().unwrap_or(Expr::Param(0));
                    built.push(Expr::Binary(operator, Box::new(left), Box::new(right)));
                }
            }
        }

        built.pop().unwrap_or(Expr::Param(0))
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Expr::Literal(a), Expr::Literal(b)) if a == b => {}
                (Expr::Param(a), Expr::Param(b)) if a == b => {}
                (Expr::Unary(op_a, a), Expr::Unary(op_b, b)) if op_a == op_b => {
                    pending.push((&**a, &**b));
                }
                (Expr::Binary(op_a, left_a, right_a), Expr::Binary(op_b, left_b, right_b))
                    if op_a == op_b =>
                {
                    pending.push((&**right_a, &**right_b));
                    pending.push((&**left_a, &**left_b));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Symbol(operator) => write!(f, "{operator:?}, ")?,
                Piece::Node(Expr::Literal(value)) => write!(f, "Literal({value:?})")?,
                Piece::Node(Expr::Param(slot)) => write!(f, "Param({slot})")?,
                Piece::Node(Expr::Unary(operator, operand)) => {
                    f.write_str("Unary(")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(operand));
                    pending.push(Piece::Symbol(*operator));
                }
                Piece::Node(Expr::Binary(operator, left, right)) => {
                    f.write_str("Binary(")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Text(", "));
                    pending.push(Piece::Node(left));
                    pending.push(Piece::Symbol(*operator));
                }
            }
        }
        Ok(())
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// A compiled, immutable expression ready for repeated evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledExpression {
    root: Expr,
    parameters: Vec<char>,
}

impl CompiledExpression {
    /// Wraps a tree whose `Param` slots index into `parameters`.
    pub fn new(root: Expr, parameters: Vec<char>) -> Self {
        Self { root, parameters }
    }

    /// Expression that always yields `0`.
    pub fn zero() -> Self {
        Self::new(Expr::Literal(Decimal::ZERO), Vec::new())
    }

    /// Returns the root node.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Parameter names, one per positional slot, in first-appearance order.
    pub fn parameters(&self) -> &[char] {
        &self.parameters
    }

    /// Number of positional values the expression consumes.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Evaluates against a positional value sequence.
    ///
    /// Values beyond [`CompiledExpression::arity`] are ignored.
    pub fn evaluate(&self, values: &[Decimal]) -> Result<Decimal, CalcError> {
        if values.len() < self.parameters.len() {
            return Err(CalcError::argument_count_mismatch(
                self.parameters.len(),
                values.len(),
            ));
        }
        self.root.evaluate(values)
    }
}

/// Renders a fully parenthesized infix form.
impl fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_infix(f, &self.parameters)
    }
}
