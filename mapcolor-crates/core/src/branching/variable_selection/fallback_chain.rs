use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::variables::VariableId;

/// A [`VariableSelector`] which asks each of its selectors in turn and returns the first variable
/// which is selected.
///
/// The heuristic ordering of the [`Solver`](crate::Solver) is the chain
/// [`MinimumRemainingValues`](crate::branching::MinimumRemainingValues),
/// [`MaxDegree`](crate::branching::MaxDegree),
/// [`LeastConstraining`](crate::branching::LeastConstraining).
pub struct FallbackChain {
    selectors: Vec<Box<dyn VariableSelector>>,
}

impl std::fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackChain")
            .field("num_selectors", &self.selectors.len())
            .finish()
    }
}

impl FallbackChain {
    pub fn new(selectors: Vec<Box<dyn VariableSelector>>) -> Self {
        FallbackChain { selectors }
    }
}

impl VariableSelector for FallbackChain {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<VariableId> {
        self.selectors
            .iter_mut()
            .find_map(|selector| selector.select_variable(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::InputOrder;
    use crate::engine::Assignment;
    use crate::engine::ConstraintGraph;

    #[derive(Debug)]
    struct NoPreference;

    impl VariableSelector for NoPreference {
        fn select_variable(&mut self, _: &SelectionContext<'_>) -> Option<VariableId> {
            None
        }
    }

    #[test]
    fn next_selector_is_consulted_when_the_first_has_no_preference() {
        let graph = ConstraintGraph::from_edges(2, [(0, 1)]);
        let assignment = Assignment::new(2);
        let variables = graph.variables().collect::<Vec<_>>();
        let selectors: Vec<Box<dyn VariableSelector>> = vec![
            Box::new(NoPreference),
            Box::new(InputOrder::new(&variables[1..])),
        ];
        let mut chain = FallbackChain::new(selectors);

        let context = SelectionContext::with_palette(&graph, &assignment, 2);
        assert_eq!(chain.select_variable(&context), Some(VariableId::new(1)));
    }

    #[test]
    fn empty_chain_selects_nothing() {
        let graph = ConstraintGraph::from_edges(1, []);
        let assignment = Assignment::new(1);
        let mut chain = FallbackChain::new(vec![]);

        let context = SelectionContext::with_palette(&graph, &assignment, 1);
        assert_eq!(chain.select_variable(&context), None);
    }
}
