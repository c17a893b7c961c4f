//! # symbios-curves
//!
//! Engine-agnostic fractal curve generation for L-System grammars.
//!
//! A [`Grammar`] is expanded into a symbol string, which a [`TurtleInterpreter`] walks
//! as 3D turtle commands. The result is a sequence of [`PathElement`]s: points, with
//! breaks wherever a branch closes. A renderer splits the sequence into polylines
//! ([`polylines`]) and draws each as a line strip, usually after [`fit`]ting it into a
//! view box.
//!
//! ```
//! use symbios_curves::{Grammar, generate_points, polylines};
//!
//! let koch = Grammar::new("F--F--F", [('F', "F+F--F+F")], 60f32.to_radians()).closed();
//! let points = generate_points(&koch, 2).unwrap();
//! assert_eq!(polylines(&points).len(), 1);
//! ```

pub mod catalog;
pub mod derivation;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod normalize;
pub mod path;
pub mod turtle;

pub use catalog::*;
pub use derivation::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use normalize::*;
pub use path::*;
pub use turtle::*;

/// Expands `grammar` for `iterations` generations and interprets the result with the
/// standard symbol map, using the grammar's own drawing moves.
pub fn generate_points(grammar: &Grammar, iterations: u32) -> Result<Vec<PathElement>, CurveError> {
    let symbols = grammar.expand(iterations);
    let mut interpreter = TurtleInterpreter::default();
    interpreter.set_draw_symbols(&grammar.draw_symbols);
    let points: Vec<PathElement> = interpreter
        .interpret(
            &symbols,
            grammar.angle,
            grammar.step_length,
            grammar.closed_path,
        )?
        .collect();
    log::debug!(
        "interpreted {} symbols into {} path elements",
        symbols.len(),
        points.len()
    );
    Ok(points)
}
