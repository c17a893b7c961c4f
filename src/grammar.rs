//! L-System grammar definition and string rewriting.

use crate::error::CurveError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Drawing moves used unless a grammar names its own.
pub const DEFAULT_DRAW_SYMBOLS: &str = "FGHI";

/// Separator between rules in the textual rule format.
const RULE_SEPARATOR: &str = "; ";
/// Separator between a symbol and its production in the textual rule format.
const PRODUCTION_ARROW: &str = " => ";

/// A deterministic, context-free L-System together with its turtle parameters.
///
/// The engine only ever reads a grammar. Editing one (new axiom, rules or angle)
/// means handing a new value to the next expansion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    /// The initial symbol string.
    pub axiom: String,

    /// Production per symbol. Symbols without an entry rewrite to themselves.
    pub rules: BTreeMap<char, String>,

    /// Turn angle in radians applied by every rotation symbol.
    pub angle: f32,

    /// Distance covered by a single drawing move.
    #[serde(default = "default_step_length")]
    pub step_length: f32,

    /// Return to the start point after the last symbol.
    #[serde(default)]
    pub closed_path: bool,

    /// Symbols that move the turtle forward and draw.
    #[serde(default = "default_draw_symbols")]
    pub draw_symbols: String,
}

fn default_step_length() -> f32 {
    10.0
}

fn default_draw_symbols() -> String {
    DEFAULT_DRAW_SYMBOLS.to_string()
}

impl Grammar {
    /// Creates an open-path grammar with the default step length of `10.0` and
    /// [`DEFAULT_DRAW_SYMBOLS`].
    pub fn new<I, S>(axiom: &str, rules: I, angle: f32) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            axiom: axiom.to_string(),
            rules: rules.into_iter().map(|(c, p)| (c, p.into())).collect(),
            angle,
            step_length: default_step_length(),
            closed_path: false,
            draw_symbols: default_draw_symbols(),
        }
    }

    /// Marks the path as closed (builder pattern).
    pub fn closed(mut self) -> Self {
        self.closed_path = true;
        self
    }

    /// Overrides the step length (builder pattern).
    pub fn with_step_length(mut self, step_length: f32) -> Self {
        self.step_length = step_length;
        self
    }

    /// Replaces the drawing-move symbols (builder pattern).
    pub fn with_draw_symbols(mut self, symbols: &str) -> Self {
        self.draw_symbols = symbols.to_string();
        self
    }

    /// Rewrites the axiom `iterations` times.
    pub fn expand(&self, iterations: u32) -> String {
        expand(&self.axiom, &self.rules, iterations)
    }
}

/// Applies `iterations` rewrite passes to `axiom`.
///
/// Each pass replaces every character with its production, or keeps it when `rules`
/// has no entry for it. Zero iterations return the axiom unchanged.
///
/// Output length grows multiplicatively with the production lengths, so callers are
/// expected to cap `iterations` per grammar.
pub fn expand(axiom: &str, rules: &BTreeMap<char, String>, iterations: u32) -> String {
    let mut current = axiom.to_string();
    for _ in 0..iterations {
        let mut next = String::with_capacity(current.len() * 2);
        for c in current.chars() {
            match rules.get(&c) {
                Some(production) => next.push_str(production),
                None => next.push(c),
            }
        }
        current = next;
    }
    log::debug!(
        "expanded {:?} through {} iterations into {} symbols",
        axiom,
        iterations,
        current.len()
    );
    current
}

/// Parses rules written as `X => production; Y => production`.
///
/// Only the first character of each left-hand side is used as the rule key. An empty
/// (or all-whitespace) input yields an empty rule set.
pub fn parse_rules(text: &str) -> Result<BTreeMap<char, String>, CurveError> {
    let mut rules = BTreeMap::new();
    if text.trim().is_empty() {
        return Ok(rules);
    }
    for entry in text.split(RULE_SEPARATOR) {
        let (lhs, rhs) = entry
            .split_once(PRODUCTION_ARROW)
            .ok_or_else(|| CurveError::RuleSyntax(entry.to_string()))?;
        let symbol = lhs
            .chars()
            .next()
            .ok_or_else(|| CurveError::RuleSyntax(entry.to_string()))?;
        rules.insert(symbol, rhs.to_string());
    }
    Ok(rules)
}

/// Formats rules in the textual form accepted by [`parse_rules`].
pub fn format_rules(rules: &BTreeMap<char, String>) -> String {
    rules
        .iter()
        .map(|(symbol, production)| format!("{symbol}{PRODUCTION_ARROW}{production}"))
        .collect::<Vec<_>>()
        .join(RULE_SEPARATOR)
}
