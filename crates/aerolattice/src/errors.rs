//! Error kinds surfaced by geometry construction and the solvers.
//!
//! Policy
//! - All validation happens when a surface is constructed or at the entry
//!   of a solve; once a linear system is formed the only failure left is a
//!   singular matrix. No retries, no partial results.
//! - Biot-Savart underflow near a filament is handled locally by the core
//!   epsilon guard and never surfaces here.

use std::error::Error;
use std::fmt;

/// Invalid lifting-surface definitions, rejected at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A half-wing needs at least two sections.
    TooFewSections { count: usize },
    /// Non-positive chord length at a section.
    InvalidChord { index: usize, chord: f64 },
    /// Non-positive span length at an inter-section.
    InvalidSpan { index: usize, span: f64 },
    /// Section and inter-section array lengths are inconsistent.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// An airfoil has too few points to define a surface.
    FoilTooCoarse { points: usize },
    /// A mesh direction was asked for zero panels.
    InvalidPanelCount { what: &'static str },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewSections { count } => {
                write!(f, "half-wing needs at least two sections, got {}", count)
            }
            GeometryError::InvalidChord { index, chord } => {
                write!(f, "chord at section {} must be positive, got {}", index, chord)
            }
            GeometryError::InvalidSpan { index, span } => {
                write!(f, "span at segment {} must be positive, got {}", index, span)
            }
            GeometryError::LengthMismatch {
                what,
                expected,
                got,
            } => write!(f, "expected {} {} entries, got {}", expected, what, got),
            GeometryError::FoilTooCoarse { points } => {
                write!(f, "airfoil needs at least three points, got {}", points)
            }
            GeometryError::InvalidPanelCount { what } => {
                write!(f, "{} panel count must be at least one", what)
            }
        }
    }
}

impl Error for GeometryError {}

/// Failures of the panel-method solvers.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// Freestream speed must be strictly positive.
    InvalidFreestream { speed: f64 },
    /// The aircraft carries no panels.
    EmptyAircraft,
    /// The 2D method needs at least four surface panels.
    TooFewPanels { count: usize },
    /// The influence matrix is numerically singular (degenerate geometry:
    /// zero-area panels or overlapping sections).
    SingularSystem,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidFreestream { speed } => {
                write!(f, "freestream speed must be positive, got {}", speed)
            }
            SolveError::EmptyAircraft => write!(f, "no panels to solve"),
            SolveError::TooFewPanels { count } => {
                write!(f, "2D panel method needs at least four panels, got {}", count)
            }
            SolveError::SingularSystem => {
                write!(f, "influence matrix is singular (degenerate geometry)")
            }
        }
    }
}

impl Error for SolveError {}
