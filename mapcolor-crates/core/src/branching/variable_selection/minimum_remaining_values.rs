use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::mapcolor_assert_eq_simple;
use crate::variables::VariableId;

/// A [`VariableSelector`] which selects the unassigned variable with the fewest remaining colors
/// (see [`SelectionContext::get_size_of_domain`]).
///
/// Uses a [`TieBreaker`] to break ties, the default is the [`InOrderTieBreaker`] which prefers the
/// variable with the lowest index; a custom [`TieBreaker`] can be provided using
/// [`MinimumRemainingValues::with_tie_breaker`].
pub struct MinimumRemainingValues<TieBreaking> {
    variables: Vec<VariableId>,
    tie_breaker: TieBreaking,
}

impl<TieBreaking> std::fmt::Debug for MinimumRemainingValues<TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinimumRemainingValues").finish()
    }
}

impl MinimumRemainingValues<InOrderTieBreaker<VariableId, usize>> {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The MinimumRemainingValues variable selector was not provided with any variables");
        }
        MinimumRemainingValues {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> MinimumRemainingValues<TieBreaking> {
    pub fn with_tie_breaker(variables: &[VariableId], tie_breaker: TieBreaking) -> Self {
        mapcolor_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "The provided tie-breaker to MinimumRemainingValues attempts to find the Maximum value
             instead of the Minimum value, please ensure that you have passed the correct tie-breaker"
        );
        if variables.is_empty() {
            warn!("The MinimumRemainingValues variable selector was not provided with any variables");
        }
        MinimumRemainingValues {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> VariableSelector
    for MinimumRemainingValues<TieBreaking>
{
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<VariableId> {
        self.variables
            .iter()
            .filter(|&&variable| !context.is_assigned(variable))
            .for_each(|&variable| {
                self.tie_breaker
                    .consider(variable, context.get_size_of_domain(variable));
            });
        self.tie_breaker.select()
    }
}
