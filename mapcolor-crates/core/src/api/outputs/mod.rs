mod coloring;

pub use coloring::Coloring;
#[cfg(doc)]
use crate::Solver;

/// The outcome of [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColoringResult<'names> {
    /// Every region received a color which differs from the colors of its neighbours.
    Colored(Coloring<'names>),
    /// No coloring exists with the provided palette.
    NoSolution,
}

impl<'names> ColoringResult<'names> {
    pub fn is_colored(&self) -> bool {
        matches!(self, ColoringResult::Colored(_))
    }

    /// Returns the found [`Coloring`], or [`None`] if there is no solution.
    pub fn coloring(&self) -> Option<&Coloring<'names>> {
        match self {
            ColoringResult::Colored(coloring) => Some(coloring),
            ColoringResult::NoSolution => None,
        }
    }

    pub fn into_coloring(self) -> Option<Coloring<'names>> {
        match self {
            ColoringResult::Colored(coloring) => Some(coloring),
            ColoringResult::NoSolution => None,
        }
    }
}
