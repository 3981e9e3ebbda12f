#[cfg(doc)]
use crate::branching::VariableSelector;

/// The interface for a tie-breaker which considers variables together with a value; depending on
/// the [`Direction`] it only keeps the variables with the "best" value as candidates.
///
/// It is used by the [`VariableSelector`]s which rank the unassigned variables.
pub trait TieBreaker<Var, Value> {
    /// Consider the next variable with its corresponding value.
    fn consider(&mut self, variable: Var, value: Value);

    /// Get the variable which was selected. After this method is called the stored state is
    /// reset, so that a stale variable is never returned by a later selection.
    fn select(&mut self) -> Option<Var>;

    /// Returns whether the tie-breaker is looking for the minimum ([`Direction::Minimum`]) or the
    /// maximum ([`Direction::Maximum`]) value.
    fn get_direction(&self) -> Direction;
}

/// Whether the value comparison should find the variable with the maximum
/// ([`Direction::Maximum`]) or the minimum ([`Direction::Minimum`]) value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}
