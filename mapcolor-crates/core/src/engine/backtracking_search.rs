use log::trace;

use super::propagation::check_assigned_neighbours;
use super::propagation::forward_check;
use super::propagation::propagate_singletons;
use super::propagation::undo_forward_check;
use super::propagation::undo_singletons;
use super::propagation::PropagationContext;
use super::propagation::SingletonChain;
use super::Assignment;
use super::ConstraintGraph;
use super::DomainStore;
use super::PropagationLevel;
use super::RemovalProvenance;
use super::SolverStatistics;
use crate::asserts::assertions_enabled;
use crate::asserts::MAPCOLOR_ASSERT_EXTREME;
use crate::basic_types::ColorId;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;
use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::containers::StorageKey;
use crate::mapcolor_assert_extreme;
use crate::mapcolor_assert_moderate;
use crate::mapcolor_assert_simple;

/// The depth-first search over the assignments of a single instance.
///
/// A search is created for every solve; it owns the assignment, the domains and the removal
/// records, and leaves them in their initial state when it fails.
#[derive(Debug)]
pub(crate) struct BacktrackingSearch<'a> {
    graph: &'a ConstraintGraph,
    palette_size: usize,
    propagation: PropagationLevel,
    assignment: Assignment,
    domains: DomainStore,
    provenance: RemovalProvenance,
    statistics: SolverStatistics,
}

impl<'a> BacktrackingSearch<'a> {
    pub(crate) fn new(
        graph: &'a ConstraintGraph,
        palette_size: usize,
        propagation: PropagationLevel,
    ) -> Self {
        let num_variables = graph.num_variables();
        BacktrackingSearch {
            graph,
            palette_size,
            propagation,
            assignment: Assignment::new(num_variables),
            domains: DomainStore::initialise(num_variables, palette_size),
            provenance: RemovalProvenance::new(num_variables),
            statistics: SolverStatistics::default(),
        }
    }

    /// Searches for a complete assignment; returns whether one was found, in which case it is
    /// available through [`BacktrackingSearch::assignment`].
    pub(crate) fn run(&mut self, selector: &mut dyn VariableSelector) -> bool {
        let found = self.search(selector, 0);
        mapcolor_assert_moderate!(
            found || self.provenance.is_empty(),
            "Removal records remain after an exhausted search"
        );
        found
    }

    pub(crate) fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub(crate) fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    fn search(&mut self, selector: &mut dyn VariableSelector, depth: usize) -> bool {
        if self.assignment.is_complete() {
            return true;
        }

        let Some(variable) = selector.select_variable(&self.selection_context()) else {
            return false;
        };
        mapcolor_assert_simple!(
            !self.assignment.is_assigned(variable),
            "The selector returned {variable} which is already assigned"
        );

        for color in self.candidates(variable) {
            let domains_before = assertions_enabled(MAPCOLOR_ASSERT_EXTREME)
                .then(|| self.domains.clone());

            self.statistics.num_decisions += 1;
            trace!("Depth {depth}: trying {variable} = {color}");

            let mut chain = SingletonChain::default();
            match self.propagate(variable, color, &mut chain) {
                Ok(()) => {
                    if self.search(selector, depth + 1) {
                        return true;
                    }
                }
                Err(inconsistency) => {
                    self.statistics.num_propagation_failures += 1;
                    trace!("Depth {depth}: {variable} = {color} is inconsistent, {inconsistency}");
                }
            }

            self.undo(variable, color, &mut chain);
            self.statistics.num_backtracks += 1;
            trace!("Depth {depth}: backtracking over {variable} = {color}");

            if let Some(domains_before) = domains_before {
                mapcolor_assert_extreme!(
                    domains_before == self.domains,
                    "Undoing {variable} = {color} did not restore the domains"
                );
            }
            mapcolor_assert_extreme!(
                !self.provenance.mentions(variable),
                "Removals caused by {variable} remain after it was unassigned"
            );
        }

        false
    }

    fn selection_context(&self) -> SelectionContext<'_> {
        if self.propagation.maintains_domains() {
            SelectionContext::with_domains(self.graph, &self.assignment, &self.domains)
        } else {
            SelectionContext::with_palette(self.graph, &self.assignment, self.palette_size)
        }
    }

    /// The values to try for `variable` in ascending order; a copy is taken since propagation
    /// modifies the domains while the values are being tried.
    fn candidates(&self, variable: VariableId) -> Vec<ColorId> {
        if self.propagation.maintains_domains() {
            self.domains.values(variable).to_vec()
        } else {
            (0..self.palette_size)
                .map(ColorId::create_from_index)
                .collect()
        }
    }

    fn propagation_context(&mut self) -> PropagationContext<'_> {
        PropagationContext {
            graph: self.graph,
            assignment: &self.assignment,
            domains: &mut self.domains,
            provenance: &mut self.provenance,
            statistics: &mut self.statistics,
        }
    }

    /// Assigns `color` to `variable` and applies the consistency rule of the search.
    fn propagate(
        &mut self,
        variable: VariableId,
        color: ColorId,
        chain: &mut SingletonChain,
    ) -> PropagationStatus {
        self.assignment.assign(variable, color);

        match self.propagation {
            PropagationLevel::None => {
                check_assigned_neighbours(self.graph, &self.assignment, variable, color)
            }
            PropagationLevel::ForwardChecking => {
                forward_check(&mut self.propagation_context(), variable, color)
            }
            PropagationLevel::Singleton => {
                propagate_singletons(&mut self.propagation_context(), variable, color, chain)
            }
        }
    }

    /// Reverts [`BacktrackingSearch::propagate`], also after it failed part-way.
    fn undo(&mut self, variable: VariableId, color: ColorId, chain: &mut SingletonChain) {
        match self.propagation {
            PropagationLevel::None => {}
            PropagationLevel::ForwardChecking => {
                undo_forward_check(&mut self.propagation_context(), variable, color);
            }
            PropagationLevel::Singleton => {
                let mut context = self.propagation_context();
                undo_singletons(&mut context, chain);
                undo_forward_check(&mut context, variable, color);
            }
        }
        mapcolor_assert_simple!(chain.is_empty());

        self.assignment.unassign(variable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::InputOrder;
    use crate::engine::VariableOrdering;

    fn triangle() -> ConstraintGraph {
        ConstraintGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)])
    }

    fn search_in_input_order(
        graph: &ConstraintGraph,
        palette_size: usize,
        propagation: PropagationLevel,
    ) -> (bool, BacktrackingSearch<'_>) {
        let mut search = BacktrackingSearch::new(graph, palette_size, propagation);
        let mut selector = InputOrder::new(&graph.variables().collect::<Vec<_>>());
        let found = search.run(&mut selector);
        (found, search)
    }

    #[test]
    fn triangle_is_colored_with_three_colors() {
        let graph = triangle();

        for propagation in PropagationLevel::ALL {
            let (found, search) = search_in_input_order(&graph, 3, propagation);

            assert!(found, "{propagation}");
            assert!(search.assignment().is_complete());
            for variable in graph.variables() {
                for &neighbour in graph.neighbours(variable) {
                    assert_ne!(
                        search.assignment().value(variable),
                        search.assignment().value(neighbour)
                    );
                }
            }
        }
    }

    #[test]
    fn stronger_propagation_backtracks_less_on_an_infeasible_triangle() {
        let graph = triangle();

        let backtracks = PropagationLevel::ALL.map(|propagation| {
            let (found, search) = search_in_input_order(&graph, 2, propagation);
            assert!(!found);
            search.statistics().num_backtracks
        });

        assert_eq!(backtracks, [10, 4, 2]);
    }

    #[test]
    fn failed_search_leaves_the_state_untouched() {
        let graph = ConstraintGraph::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]);

        for ordering in VariableOrdering::ALL {
            let mut search = BacktrackingSearch::new(&graph, 2, PropagationLevel::Singleton);
            let mut selector = ordering.create_selector(&graph);

            assert!(!search.run(selector.as_mut()));
            assert_eq!(search.domains, DomainStore::initialise(4, 2));
            assert!(search.provenance.is_empty());
            assert_eq!(search.assignment, Assignment::new(4));
        }
    }

    #[test]
    fn empty_instance_is_trivially_colored() {
        let graph = ConstraintGraph::from_edges(0, []);
        let (found, search) = search_in_input_order(&graph, 0, PropagationLevel::ForwardChecking);

        assert!(found);
        assert_eq!(search.statistics().num_decisions, 0);
    }

    #[test]
    fn empty_palette_has_no_solution() {
        let graph = ConstraintGraph::from_edges(2, []);
        let (found, search) = search_in_input_order(&graph, 0, PropagationLevel::None);

        assert!(!found);
        assert_eq!(search.statistics().num_backtracks, 0);
    }
}
