use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::variables::VariableId;

/// A [`VariableSelector`] which selects the unassigned variable with the most neighbours in the
/// constraint graph; ties go to the variable with the lowest index.
///
/// The degree is static, it does not take into account whether the neighbours are assigned.
#[derive(Debug)]
pub struct MaxDegree {
    variables: Vec<VariableId>,
    tie_breaker: InOrderTieBreaker<VariableId, usize>,
}

impl MaxDegree {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The MaxDegree variable selector was not provided with any variables");
        }
        MaxDegree {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl VariableSelector for MaxDegree {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<VariableId> {
        self.variables
            .iter()
            .filter(|&&variable| !context.is_assigned(variable))
            .for_each(|&variable| {
                self.tie_breaker
                    .consider(variable, context.degree(variable));
            });
        self.tie_breaker.select()
    }
}
