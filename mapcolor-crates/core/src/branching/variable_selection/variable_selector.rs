use crate::branching::SelectionContext;
use crate::variables::VariableId;
#[cfg(doc)]
use crate::Solver;

/// A trait containing the interface for [`VariableSelector`]s, which decide the order in which the
/// [`Solver`] assigns colors to the variables.
pub trait VariableSelector {
    /// Determines which variable to color next if there are any left.
    ///
    /// Should only return [`None`] when no variable which was passed to the [`VariableSelector`]
    /// is unassigned, or when the selector has no preference (in which case a
    /// [`FallbackChain`](crate::branching::FallbackChain) consults its next selector).
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<VariableId>;
}
