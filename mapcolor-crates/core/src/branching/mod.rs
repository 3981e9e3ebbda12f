//! Contains the structures which decide the order in which the [`Solver`] colors the regions.
//!
//! The central trait is the [`VariableSelector`]; its main method
//! [`VariableSelector::select_variable`] receives a [`SelectionContext`] describing the current
//! state of the search and returns the next unassigned variable, or [`None`] if it has no
//! variable left to offer. Values are always tried in ascending order of their palette index.
//!
//! The available selectors are:
//! - [`InputOrder`] which selects the first unassigned variable;
//! - [`MinimumRemainingValues`] which selects the variable with the fewest remaining colors;
//! - [`MaxDegree`] which selects the variable with the most neighbours;
//! - [`LeastConstraining`] which is used as the last resort of the heuristic ordering;
//! - [`FallbackChain`] which consults a list of selectors until one of them selects a variable.
//!
//! Which selector is used by [`Solver::solve`] is determined by the
//! [`VariableOrdering`](crate::options::VariableOrdering) of the
//! [`SolverOptions`](crate::options::SolverOptions); a custom selector can be passed to
//! [`Solver::solve_with_selector`].

mod selection_context;
pub mod tie_breaking;
pub mod variable_selection;

pub use selection_context::SelectionContext;
pub use tie_breaking::*;
pub use variable_selection::*;

#[cfg(doc)]
use crate::Solver;
