//! Interpretation of parametric [`symbios`] derivations.
//!
//! Where [`crate::TurtleInterpreter`] reads plain character strings, the
//! [`DerivationInterpreter`] walks a [`symbios::SymbiosState`] produced by a Symbios
//! derivation. Module parameters override the defaults: `F(2.5)` moves `2.5` units and
//! `+(30)` turns `30` degrees.

use crate::error::CurveError;
use crate::interpreter::InterpreterConfig;
use crate::path::PathElement;
use crate::turtle::{STANDARD_SYMBOLS, TurtleOp, TurtleState};
use symbios::{SymbiosState, SymbolTable};

/// Interprets Symbios derivations as 3D turtle paths.
pub struct DerivationInterpreter {
    op_map: Vec<TurtleOp>,
    config: InterpreterConfig,
}

impl DerivationInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            op_map: Vec::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    ///
    /// `map` is indexed by symbol ID as returned by [`symbios::SymbolTable`].
    /// Any ID that falls outside the slice is treated as [`TurtleOp::Ignore`].
    pub fn with_map(mut self, map: Vec<TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol ID.
    ///
    /// The map is grown automatically when `sym_id` exceeds its current length;
    /// gaps are filled with [`TurtleOp::Ignore`].
    pub fn set_op(&mut self, sym_id: u16, op: TurtleOp) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, TurtleOp::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Registers the standard mappings for every standard symbol present in `interner`.
    ///
    /// Symbols that have not been interned are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        for (symbol, op) in STANDARD_SYMBOLS {
            let mut buf = [0u8; 4];
            let name: &str = symbol.encode_utf8(&mut buf);
            if let Some(id) = interner.resolve_id(name) {
                self.set_op(id, op);
            }
        }
    }

    /// Interprets the full derivation `state`.
    ///
    /// Behaves like [`crate::TurtleInterpreter::interpret`], with `angle` (radians) and
    /// `step_length` as defaults. A first module parameter replaces them: a length for
    /// drawing moves, degrees for rotations.
    ///
    /// # Errors
    ///
    /// Same preconditions as the string interpreter: a positive finite step length,
    /// balanced branches and nesting within `max_stack_depth` when one is set.
    pub fn interpret(
        &self,
        state: &SymbiosState,
        angle: f32,
        step_length: f32,
        closed_path: bool,
    ) -> Result<Vec<PathElement>, CurveError> {
        if !(step_length.is_finite() && step_length > 0.0) {
            log::warn!("refusing to interpret with step length {step_length}");
            return Err(CurveError::InvalidStepLength(step_length));
        }

        let mut turtle = TurtleState::default();
        let mut stack = Vec::new();
        let mut elements = vec![PathElement::Point(turtle.position)];

        for i in 0..state.len() {
            let view = match state.get_view(i) {
                Some(v) => v,
                None => break,
            };

            let op = self
                .op_map
                .get(view.sym as usize)
                .copied()
                .unwrap_or(TurtleOp::Ignore);

            let p0 = view.params.first().map(|&x| x as f32);

            match op {
                TurtleOp::Draw => {
                    turtle.advance(p0.unwrap_or(step_length));
                    elements.push(PathElement::Point(turtle.position));
                }
                TurtleOp::Push => {
                    if let Some(limit) = self.config.max_stack_depth
                        && stack.len() >= limit
                    {
                        log::warn!("branch nesting exceeds {limit}");
                        return Err(CurveError::StackOverflow { limit });
                    }
                    stack.push(turtle);
                }
                TurtleOp::Pop => {
                    turtle = stack.pop().ok_or_else(|| {
                        log::warn!("unmatched branch close at module {i}");
                        CurveError::UnbalancedBranch { index: i }
                    })?;
                    elements.push(PathElement::Break);
                }
                TurtleOp::Ignore => {}
                rotation => rotation.rotate(&mut turtle, p0.map_or(angle, f32::to_radians)),
            }
        }

        if closed_path {
            elements.push(PathElement::Point(TurtleState::default().position));
        }

        log::debug!(
            "interpreted {} modules into {} path elements",
            state.len(),
            elements.len()
        );
        Ok(elements)
    }
}
