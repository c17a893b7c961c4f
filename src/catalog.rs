//! Catalog of selectable fractal curves and the presenter state that browses it.

use crate::error::CurveError;
use crate::grammar::Grammar;
use crate::normalize::FitBox;
use crate::path::PathElement;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

/// Iteration cap used when a definition does not name its own.
pub const DEFAULT_MAX_ITERATIONS: u32 = 9;

/// One selectable fractal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveDefinition {
    /// Grammar and turtle parameters of the curve.
    pub grammar: Grammar,

    /// Upper bound for `iterations`; expansion cost grows exponentially with it.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Display name.
    pub title: String,

    /// Where to read more about the curve.
    #[serde(default)]
    pub url: Option<String>,

    /// Iteration count currently selected for display.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_iterations() -> u32 {
    1
}

impl CurveDefinition {
    /// Creates a definition at one iteration, capped at [`DEFAULT_MAX_ITERATIONS`].
    pub fn new(grammar: Grammar, title: &str) -> Self {
        Self {
            grammar,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            title: title.to_string(),
            url: None,
            iterations: default_iterations(),
        }
    }

    /// Attaches a reference URL (builder pattern).
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Overrides the iteration cap (builder pattern).
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The iteration count actually expanded: `iterations` capped at `max_iterations`.
    pub fn effective_iterations(&self) -> u32 {
        self.iterations.min(self.max_iterations)
    }

    /// Generates the curve at the currently selected iteration count.
    ///
    /// The count is capped at `max_iterations` even when `iterations` was set past it
    /// directly or loaded that way from JSON.
    pub fn generate_points(&self) -> Result<Vec<PathElement>, CurveError> {
        if self.iterations > self.max_iterations {
            log::warn!(
                "{:?}: capping {} iterations at {}",
                self.title,
                self.iterations,
                self.max_iterations
            );
        }
        crate::generate_points(&self.grammar, self.effective_iterations())
    }
}

/// An ordered list of curve definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Curves in display order.
    pub curves: Vec<CurveDefinition>,
}

impl Catalog {
    /// Reads a catalog; omitted per-curve fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CurveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the catalog as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CurveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// True when there are no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// The built-in curve table.
pub fn standard_catalog() -> Catalog {
    let deg = f32::to_radians;
    let curves = vec![
        CurveDefinition::new(
            Grammar::new("F--F--F", [('F', "F+F--F+F")], FRAC_PI_3).closed(),
            "Koch snowflake",
        )
        .with_url("https://en.wikipedia.org/wiki/Koch_snowflake"),
        CurveDefinition::new(
            Grammar::new("F", [('F', "F+F-F-F+F")], deg(85.0)),
            "Cesaro fractal",
        )
        .with_url("http://mathworld.wolfram.com/CesaroFractal.html"),
        CurveDefinition::new(
            Grammar::new("F", [('F', "F+F-F-FF+F+F-F")], FRAC_PI_2),
            "Quadratic type 2",
        )
        .with_url("https://en.wikipedia.org/wiki/Koch_snowflake#Variants_of_the_Koch_curve"),
        CurveDefinition::new(
            Grammar::new(
                "A",
                [('A', "-BF+AFA+FB-"), ('B', "+AF-BFB-FA+")],
                FRAC_PI_2,
            ),
            "Hilbert curve",
        )
        .with_url("https://en.wikipedia.org/wiki/Hilbert_curve"),
        CurveDefinition::new(
            Grammar::new(
                "X",
                [
                    ('X', "XFYFX+F+YFXFY-F-XFYFX"),
                    ('Y', "YFXFY-F-XFYFX+F+YFXFY"),
                ],
                FRAC_PI_2,
            ),
            "Lindenmayer curve",
        ),
        CurveDefinition::new(
            Grammar::new(
                "F",
                [('F', "F-G--G+F++FF+G-"), ('G', "+F-GG--G-F++F+G")],
                deg(60.0),
            ),
            "Gosper curve",
        )
        .with_url("https://en.wikipedia.org/wiki/Gosper_curve"),
        CurveDefinition::new(
            Grammar::new("F-G-G", [('F', "F-G+F+G-F"), ('G', "GG")], deg(120.0)),
            "Sierpinski triangle",
        )
        .with_url("https://en.wikipedia.org/wiki/Sierpinski_triangle"),
        CurveDefinition::new(
            Grammar::new("F", [('F', "G-F-G"), ('G', "F+G+F")], FRAC_PI_3),
            "Sierpinski arrow head triangle",
        )
        .with_url("https://en.wikipedia.org/wiki/Sierpi%C5%84ski_arrowhead_curve"),
        CurveDefinition::new(
            Grammar::new("FX", [('X', "X+YF+"), ('Y', "-FX-Y")], FRAC_PI_2),
            "Dragon curve",
        )
        .with_url("https://en.wikipedia.org/wiki/Dragon_curve")
        .with_max_iterations(14),
        CurveDefinition::new(
            Grammar::new("X", [('X', "F[-X][X]F[-X]+FX"), ('F', "FF")], deg(25.0)),
            "Plant",
        )
        .with_url("https://en.wikipedia.org/wiki/L-system#Example_7:_Fractal_plant"),
        // Each generation of the 3D Koch curve draws with its own move symbol.
        CurveDefinition::new(
            Grammar::new(
                "A",
                [
                    ('A', "[[[[F+F-F-F+F]G<G>G>G<G]H-H+H+H-H]I>I<I<I>I]"),
                    ('F', "F+F-F-F+F"),
                    ('G', "G<G>G>G<G"),
                    ('H', "H-H+H+H-H"),
                    ('I', "I>I<I<I>I"),
                ],
                FRAC_PI_2,
            ),
            "Koch curve 3d",
        )
        .with_url("https://github.com/Hiestaa/3D-Lsystem/blob/master/lsystem/KochCurve3D.py"),
    ];
    Catalog { curves }
}

/// Browsing state over a [`Catalog`]: the selected curve plus stepping controls.
///
/// Debug mode truncates generated output to the first `debug_step` elements so a
/// curve can be watched being drawn one element at a time.
#[derive(Clone, Debug)]
pub struct CurveSelector {
    catalog: Catalog,
    index: usize,
    fit_box: FitBox,
    debug_mode: bool,
    debug_step: usize,
}

impl CurveSelector {
    /// Selects the first curve of `catalog`. Returns `None` for an empty catalog.
    pub fn new(catalog: Catalog) -> Option<Self> {
        if catalog.is_empty() {
            return None;
        }
        Some(Self {
            catalog,
            index: 0,
            fit_box: FitBox::default(),
            debug_mode: false,
            debug_step: 1,
        })
    }

    /// Replaces the target box used by [`generate_points`](Self::generate_points).
    pub fn with_fit_box(mut self, fit_box: FitBox) -> Self {
        self.fit_box = fit_box;
        self
    }

    /// The catalog being browsed.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Position of the selected curve in the catalog.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The selected curve.
    pub fn current(&self) -> &CurveDefinition {
        &self.catalog.curves[self.index]
    }

    /// Mutable access to the selected curve, e.g. to edit its grammar.
    pub fn current_mut(&mut self) -> &mut CurveDefinition {
        &mut self.catalog.curves[self.index]
    }

    /// Moves the selection by `direction`, wrapping at either end, and leaves debug mode.
    pub fn switch(&mut self, direction: i32) {
        let len = self.catalog.len() as i64;
        let target = self.index as i64 + i64::from(direction);
        self.index = if target < 0 {
            (len - 1) as usize
        } else if target >= len {
            0
        } else {
            target as usize
        };
        self.debug_mode = false;
        self.debug_step = 0;
        log::info!("selected curve {:?}", self.current().title);
    }

    /// Changes the iteration count by `delta`, clamped to `0..=max_iterations`.
    pub fn change_iteration_count(&mut self, delta: i32) {
        let curve = self.current_mut();
        let next = i64::from(curve.iterations) + i64::from(delta);
        curve.iterations = next.clamp(0, i64::from(curve.max_iterations)) as u32;
    }

    /// Changes the turn angle by `delta` radians.
    ///
    /// The result is rounded to whole degrees and wrapped back into `0..=2π`.
    pub fn change_angle(&mut self, delta: f32) {
        let grammar = &mut self.current_mut().grammar;
        let mut angle = (grammar.angle + delta).to_degrees().round().to_radians();
        if angle < 0.0 {
            angle += TAU;
        }
        if angle > TAU {
            angle -= TAU;
        }
        grammar.angle = angle;
    }

    /// Whether output is truncated to the first [`debug_step`](Self::debug_step) elements.
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Turns step-by-step output on or off.
    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug_mode = enabled;
    }

    /// Number of elements shown in debug mode.
    pub fn debug_step(&self) -> usize {
        self.debug_step
    }

    /// Shows one more element; no-op outside debug mode.
    pub fn increase_debug_step(&mut self) {
        if self.debug_mode {
            self.debug_step += 1;
        }
    }

    /// Shows one element fewer; no-op outside debug mode.
    pub fn decrease_debug_step(&mut self) {
        if self.debug_mode {
            self.debug_step = self.debug_step.saturating_sub(1);
        }
    }

    /// Generates the selected curve and fits it into the selector's target box.
    pub fn generate_points(&self) -> Result<Vec<PathElement>, CurveError> {
        let mut points = self.fit_box.fit(&self.current().generate_points()?)?;
        if self.debug_mode {
            points.truncate(self.debug_step);
        }
        Ok(points)
    }
}
