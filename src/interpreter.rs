//! Interpreter that converts an expanded symbol string into a curve.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with an [`InterpreterConfig`],
//! register symbol-to-operation mappings via [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::interpret`] to obtain a lazy [`TurtlePath`].

use crate::error::CurveError;
use crate::path::PathElement;
use crate::turtle::{STANDARD_SYMBOLS, TurtleOp, TurtleState};
use std::collections::HashMap;
use std::str::Chars;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct InterpreterConfig {
    /// Optional cap on branch nesting. `None` (the default) accepts any depth.
    pub max_stack_depth: Option<usize>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_stack_depth: None,
        }
    }
}

/// Interprets expanded L-System strings as 3D turtle paths.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: InterpreterConfig,
}

impl Default for TurtleInterpreter {
    /// An interpreter with the default configuration and the standard symbol map.
    fn default() -> Self {
        let mut interpreter = Self::new(InterpreterConfig::default());
        interpreter.populate_standard_symbols();
        interpreter
    }
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    ///
    /// With an empty map every symbol is ignored and the path is just the start point.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, replacing any earlier mapping.
    ///
    /// Extra drawing symbols are registered this way, e.g. `set_op('J', TurtleOp::Draw)`.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional mappings listed in [`STANDARD_SYMBOLS`].
    pub fn populate_standard_symbols(&mut self) {
        for (symbol, op) in STANDARD_SYMBOLS {
            self.set_op(symbol, op);
        }
    }

    /// Makes exactly the characters of `symbols` drawing moves.
    ///
    /// Symbols previously mapped to [`TurtleOp::Draw`] but absent from `symbols` fall
    /// back to [`TurtleOp::Ignore`]; other mappings are left alone.
    pub fn set_draw_symbols(&mut self, symbols: &str) {
        self.op_map.retain(|_, op| *op != TurtleOp::Draw);
        for symbol in symbols.chars() {
            self.set_op(symbol, TurtleOp::Draw);
        }
    }

    /// Returns the operation for `symbol`, [`TurtleOp::Ignore`] if unmapped.
    pub fn op(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Interprets `symbols` and returns the resulting path as a lazy iterator.
    ///
    /// The turtle starts at the origin with all angles at zero, and the origin is always
    /// the first element. Each drawing move advances `step_length` along the local Y axis
    /// and yields the new position. `]` restores the saved state and yields
    /// [`PathElement::Break`]. With `closed_path` the origin is yielded once more at the end.
    ///
    /// # Errors
    ///
    /// The string is checked before the walk begins. A `]` without a matching `[`, or
    /// nesting deeper than a configured `max_stack_depth`, is rejected, as is a step
    /// length that is not positive and finite.
    pub fn interpret<'a>(
        &'a self,
        symbols: &'a str,
        angle: f32,
        step_length: f32,
        closed_path: bool,
    ) -> Result<TurtlePath<'a>, CurveError> {
        if !(step_length.is_finite() && step_length > 0.0) {
            log::warn!("refusing to interpret with step length {step_length}");
            return Err(CurveError::InvalidStepLength(step_length));
        }
        self.check_branches(symbols)?;

        Ok(TurtlePath {
            interpreter: self,
            symbols: symbols.chars(),
            angle,
            step_length,
            closed_path,
            turtle: TurtleState::default(),
            stack: Vec::new(),
            phase: Phase::Start,
        })
    }

    fn check_branches(&self, symbols: &str) -> Result<(), CurveError> {
        let mut depth = 0usize;
        for (index, symbol) in symbols.chars().enumerate() {
            match self.op(symbol) {
                TurtleOp::Push => {
                    depth += 1;
                    if let Some(limit) = self.config.max_stack_depth
                        && depth > limit
                    {
                        log::warn!("branch nesting exceeds {limit}");
                        return Err(CurveError::StackOverflow { limit });
                    }
                }
                TurtleOp::Pop => {
                    if depth == 0 {
                        log::warn!("unmatched branch close at symbol {index}");
                        return Err(CurveError::UnbalancedBranch { index });
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Walking,
    Done,
}

/// Single-pass iterator over the elements of an interpreted curve.
///
/// Produced by [`TurtleInterpreter::interpret`]; call it again to regenerate.
pub struct TurtlePath<'a> {
    interpreter: &'a TurtleInterpreter,
    symbols: Chars<'a>,
    angle: f32,
    step_length: f32,
    closed_path: bool,
    turtle: TurtleState,
    stack: Vec<TurtleState>,
    phase: Phase,
}

impl Iterator for TurtlePath<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        match self.phase {
            Phase::Start => {
                self.phase = Phase::Walking;
                return Some(PathElement::Point(self.turtle.position));
            }
            Phase::Done => return None,
            Phase::Walking => {}
        }

        for symbol in self.symbols.by_ref() {
            match self.interpreter.op(symbol) {
                TurtleOp::Draw => {
                    self.turtle.advance(self.step_length);
                    return Some(PathElement::Point(self.turtle.position));
                }
                TurtleOp::Push => self.stack.push(self.turtle),
                TurtleOp::Pop => {
                    // Balance was verified up front.
                    if let Some(saved) = self.stack.pop() {
                        self.turtle = saved;
                    }
                    return Some(PathElement::Break);
                }
                TurtleOp::Ignore => {}
                op => op.rotate(&mut self.turtle, self.angle),
            }
        }

        self.phase = Phase::Done;
        if self.closed_path {
            Some(PathElement::Point(TurtleState::default().position))
        } else {
            None
        }
    }
}
