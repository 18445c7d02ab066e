//! Single-pass expression compiler.
//!
//! Scanning and operator-precedence parsing happen in one left-to-right pass
//! over the text. Operands are pushed onto one stack and operators (plus
//! bracket markers) onto another; every reduction pops an operator together
//! with its operands and pushes the combined tree node back. No token list or
//! intermediate syntax tree is materialized.

use log::{debug, trace};

use crate::compiler::expr::{CompiledExpression, Expr};
use crate::compiler::operator::Operator;
use crate::error::CalcError;
use crate::lexer::cursor::Cursor;
use crate::lexer::number::{NumberFormat, scan_number};
use crate::lexer::span::Span;

/// Compiler behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompileOptions {
    /// Separators recognized inside numeric literals.
    pub number_format: NumberFormat,
    /// Maximum bracket nesting depth.
    pub max_nesting: usize,
    /// Maximum tree nodes in one compiled expression.
    pub max_nodes: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::INVARIANT,
            max_nesting: 256,
            max_nodes: 10_000,
        }
    }
}

/// Operator-stack entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Operator(Operator, Span),
    /// Marks the start of a parenthesized group.
    Bracket(Span),
}

/// Two-stack shunting-yard compiler.
///
/// Stack storage is reused across calls and cleared at the start of each
/// [`Compiler::compile`].
#[derive(Debug, Default)]
pub struct Compiler {
    options: CompileOptions,
    operands: Vec<Expr>,
    operators: Vec<Symbol>,
    parameters: Vec<char>,
    nodes: usize,
    depth: usize,
    /// Set after an operand or `)`; an operand or `(` may not follow.
    after_operand: bool,
}

impl Compiler {
    /// Creates a compiler with explicit options.
    pub fn new(options: CompileOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Returns the active options.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles `text` into an executable expression.
    pub fn compile(&mut self, text: &str) -> Result<CompiledExpression, CalcError> {
        self.reset();

        if text.trim().is_empty() {
            debug!("blank expression compiled to constant zero");
            return Ok(CompiledExpression::zero());
        }

        let mut cursor = Cursor::new(text);
        while let Some(ch) = cursor.peek() {
            let start = cursor.offset();

            if ch.is_ascii_digit() {
                let (value, span) = scan_number(&mut cursor, &self.options.number_format)?;
                self.check_operand_position(span)?;
                self.push_operand(Expr::Literal(value), span)?;
                self.after_operand = true;
                continue;
            }

            if ch.is_ascii_alphabetic() {
                cursor.bump();
                if cursor.peek().is_some_and(|next| next.is_ascii_alphabetic()) {
                    cursor.eat_while(|next| next.is_ascii_alphabetic());
                    return Err(CalcError::malformed(
                        Some(cursor.span_from(start)),
                        "variable names are a single letter",
                    ));
                }
                let span = cursor.span_from(start);
                self.check_operand_position(span)?;
                let slot = self.slot_for(ch);
                self.push_operand(Expr::Param(slot), span)?;
                self.after_operand = true;
                continue;
            }

            if let Some(operator) = Operator::from_symbol(ch) {
                cursor.bump();
                let span = cursor.span_from(start);
                self.after_operand = false;
                if operator == Operator::Subtract && self.operands.is_empty() {
                    self.operators.push(Symbol::Operator(Operator::Negate, span));
                    continue;
                }
                self.reduce_while(|top| top.order() >= operator.order())?;
                self.operators.push(Symbol::Operator(operator, span));
                continue;
            }

            cursor.bump();
            let span = cursor.span_from(start);
            match ch {
                '(' => self.open_bracket(&mut cursor, span)?,
                ')' => self.close_bracket(span)?,
                _ if ch.is_whitespace() => {}
                _ => return Err(CalcError::unexpected_character(span, ch)),
            }
        }

        self.reduce_all()?;
        let compiled = self.finish()?;
        debug!(
            "compiled {text:?} into {} node(s) with {} parameter(s)",
            self.nodes,
            compiled.arity()
        );
        Ok(compiled)
    }

    fn reset(&mut self) {
        self.operands.clear();
        self.operators.clear();
        self.parameters.clear();
        self.nodes = 0;
        self.depth = 0;
        self.after_operand = false;
    }

    fn slot_for(&mut self, name: char) -> usize {
        match self.parameters.iter().position(|&known| known == name) {
            Some(slot) => slot,
            None => {
                self.parameters.push(name);
                self.parameters.len() - 1
            }
        }
    }

    fn check_operand_position(&self, span: Span) -> Result<(), CalcError> {
        if self.after_operand {
            return Err(CalcError::malformed(
                Some(span),
                format!("missing operator before operand at {span}"),
            ));
        }
        Ok(())
    }

    fn push_operand(&mut self, node: Expr, span: Span) -> Result<(), CalcError> {
        self.nodes += 1;
        if self.nodes > self.options.max_nodes {
            return Err(CalcError::node_limit_exceeded(
                Some(span),
                self.options.max_nodes,
            ));
        }
        self.operands.push(node);
        Ok(())
    }

    /// A group may open at the very start or right after an operator or `(`.
    fn open_bracket(&mut self, cursor: &mut Cursor<'_>, span: Span) -> Result<(), CalcError> {
        let at_start = self.operators.is_empty() && self.operands.is_empty();
        if self.after_operand || (!at_start && self.operators.is_empty()) {
            return Err(CalcError::malformed(
                Some(span),
                format!("unexpected '(' at {span}"),
            ));
        }

        self.depth += 1;
        if self.depth > self.options.max_nesting {
            return Err(CalcError::nesting_limit_exceeded(
                Some(span),
                self.options.max_nesting,
            ));
        }
        self.operators.push(Symbol::Bracket(span));

        if cursor.peek_non_whitespace() == Some('-') {
            cursor.skip_whitespace();
            let start = cursor.offset();
            cursor.bump();
            self.operators
                .push(Symbol::Operator(Operator::Negate, cursor.span_from(start)));
        }
        Ok(())
    }

    fn close_bracket(&mut self, span: Span) -> Result<(), CalcError> {
        self.reduce_while(|_| true)?;
        match self.operators.pop() {
            Some(Symbol::Bracket(_)) => {
                self.depth -= 1;
                self.after_operand = true;
                Ok(())
            }
            _ => Err(CalcError::unbalanced_close_bracket(Some(span))),
        }
    }

    /// Reduces operators off the stack top until a bracket marker, an empty
    /// stack, or an operator rejected by `should_reduce`.
    fn reduce_while(
        &mut self,
        mut should_reduce: impl FnMut(Operator) -> bool,
    ) -> Result<(), CalcError> {
        while let Some(&Symbol::Operator(top, span)) = self.operators.last() {
            if !should_reduce(top) {
                break;
            }
            self.operators.pop();
            self.reduce(top, span)?;
        }
        Ok(())
    }

    fn reduce_all(&mut self) -> Result<(), CalcError> {
        while let Some(symbol) = self.operators.pop() {
            match symbol {
                Symbol::Operator(operator, span) => self.reduce(operator, span)?,
                Symbol::Bracket(span) => {
                    return Err(CalcError::unbalanced_open_bracket(Some(span)));
                }
            }
        }
        Ok(())
    }

    /// Pops `operator`'s operands and pushes the combined node; the first
    /// operand popped is the right (or only) operand.
    fn reduce(&mut self, operator: Operator, span: Span) -> Result<(), CalcError> {
        let missing = || CalcError::missing_operand(Some(span), operator);

        let operand = self.operands.pop().ok_or_else(missing)?;
        let node = if operator.arity() == 1 {
            Expr::Unary(operator, Box::new(operand))
        } else {
            let left = self.operands.pop().ok_or_else(missing)?;
            Expr::Binary(operator, Box::new(left), Box::new(operand))
        };
        trace!("reduced {operator} at {span}");
        self.push_operand(node, span)
    }

    fn finish(&mut self) -> Result<CompiledExpression, CalcError> {
        let root = self
            .operands
            .pop()
            .ok_or_else(|| CalcError::malformed(None, "expression has no operands"))?;
        if !self.operands.is_empty() {
            return Err(CalcError::malformed(
                None,
                "operands are missing an operator between them",
            ));
        }
        Ok(CompiledExpression::new(
            root,
            std::mem::take(&mut self.parameters),
        ))
    }
}

/// Compiles `text` with default options.
pub fn compile(text: &str) -> Result<CompiledExpression, CalcError> {
    Compiler::new(CompileOptions::default()).compile(text)
}
