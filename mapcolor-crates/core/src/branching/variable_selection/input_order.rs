use log::warn;

use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::variables::VariableId;

/// A [`VariableSelector`] which selects the first unassigned variable given the order in the
/// provided list.
#[derive(Debug)]
pub struct InputOrder {
    variables: Vec<VariableId>,
}

impl InputOrder {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<VariableId> {
        self.variables
            .iter()
            .find(|&&variable| !context.is_assigned(variable))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::ColorId;
    use crate::engine::Assignment;
    use crate::engine::ConstraintGraph;

    #[test]
    fn test_correctly_selected() {
        let graph = ConstraintGraph::from_edges(3, [(0, 1), (1, 2)]);
        let mut assignment = Assignment::new(3);
        let variables = graph.variables().collect::<Vec<_>>();
        let mut strategy = InputOrder::new(&variables);

        {
            let context = SelectionContext::with_palette(&graph, &assignment, 2);
            assert_eq!(strategy.select_variable(&context), Some(variables[0]));
        }

        assignment.assign(variables[0], ColorId::new(0));

        let context = SelectionContext::with_palette(&graph, &assignment, 2);
        assert_eq!(strategy.select_variable(&context), Some(variables[1]));
    }

    #[test]
    fn assigned_variables_are_not_selected() {
        let graph = ConstraintGraph::from_edges(2, []);
        let mut assignment = Assignment::new(2);
        assignment.assign(VariableId::new(0), ColorId::new(0));
        assignment.assign(VariableId::new(1), ColorId::new(0));
        let mut strategy = InputOrder::new(&graph.variables().collect::<Vec<_>>());

        let context = SelectionContext::with_palette(&graph, &assignment, 1);
        assert_eq!(strategy.select_variable(&context), None);
    }
}
