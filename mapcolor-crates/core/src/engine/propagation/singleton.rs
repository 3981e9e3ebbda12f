use log::trace;

use super::PropagationContext;
use crate::basic_types::ColorId;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;
use crate::containers::HashSet;
use crate::mapcolor_assert_moderate;

/// The bookkeeping of a single singleton propagation.
///
/// A fresh chain is used for every candidate value; it remembers which variables have already
/// propagated their singleton value (so that cycles in the graph terminate) and logs every value
/// it removed, in order, so that [`undo_singletons`] can put them back exactly.
#[derive(Debug, Default)]
pub(crate) struct SingletonChain {
    visited: HashSet<VariableId>,
    removals: Vec<(VariableId, ColorId)>,
}

impl SingletonChain {
    pub(crate) fn is_empty(&self) -> bool {
        self.visited.is_empty() && self.removals.is_empty()
    }
}

/// Forward checks `variable = color` and propagates every domain which shrinks to a single value.
///
/// Removals of `color` from direct neighbours are attributed to `variable` in the provenance
/// records (and are therefore reverted by
/// [`undo_forward_check`](super::undo_forward_check)); the removals made by the chain itself are
/// logged in `chain` and reverted by [`undo_singletons`].
///
/// Fails if a neighbour can only take `color`, if a propagated singleton value is held by an
/// assigned neighbour, or if two adjacent variables are left with the same single value.
pub(crate) fn propagate_singletons(
    context: &mut PropagationContext<'_>,
    variable: VariableId,
    color: ColorId,
    chain: &mut SingletonChain,
) -> PropagationStatus {
    let graph = context.graph;

    for &neighbour in graph.neighbours(variable) {
        if context.assignment.is_assigned(neighbour) {
            continue;
        }

        if context.domains.singleton_value(neighbour) == Some(color) {
            return Err(Inconsistency::SingletonCollision {
                variable: neighbour,
                neighbour: variable,
                value: color,
            });
        }

        if context.provenance.contains(neighbour, color)
            || !context.domains.remove(neighbour, color)
        {
            continue;
        }

        context.provenance.record(neighbour, color, variable);
        context.statistics.num_values_pruned += 1;

        if context.domains.is_singleton(neighbour) && !chain.visited.contains(&neighbour) {
            propagate_from(context, neighbour, chain)?;
        }
    }

    Ok(())
}

/// Removes the single remaining value of `origin` from its neighbours, recursing into every
/// neighbour which becomes a singleton in turn.
fn propagate_from(
    context: &mut PropagationContext<'_>,
    origin: VariableId,
    chain: &mut SingletonChain,
) -> PropagationStatus {
    let Some(value) = context.domains.singleton_value(origin) else {
        mapcolor_assert_moderate!(false, "{origin} is propagated without being a singleton");
        return Ok(());
    };

    let _ = chain.visited.insert(origin);
    context.statistics.num_singleton_propagations += 1;
    trace!("Propagating singleton {origin} = {value}");

    let graph = context.graph;
    for &neighbour in graph.neighbours(origin) {
        match context.assignment.value(neighbour) {
            Some(assigned) if assigned == value => {
                return Err(Inconsistency::ConflictingNeighbour { neighbour, value });
            }
            Some(_) => continue,
            None => {}
        }

        if context.domains.singleton_value(neighbour) == Some(value) {
            return Err(Inconsistency::SingletonCollision {
                variable: origin,
                neighbour,
                value,
            });
        }

        if chain.visited.contains(&neighbour) || !context.domains.remove(neighbour, value) {
            continue;
        }

        chain.removals.push((neighbour, value));
        context.statistics.num_values_pruned += 1;

        if context.domains.is_singleton(neighbour) {
            propagate_from(context, neighbour, chain)?;
        }
    }

    Ok(())
}

/// Restores every value removed by the chain, in reverse order of removal, and clears the chain.
pub(crate) fn undo_singletons(context: &mut PropagationContext<'_>, chain: &mut SingletonChain) {
    while let Some((variable, value)) = chain.removals.pop() {
        context.domains.restore(variable, value);
    }
    chain.visited.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::propagation::undo_forward_check;
    use crate::engine::Assignment;
    use crate::engine::ConstraintGraph;
    use crate::engine::DomainStore;
    use crate::engine::RemovalProvenance;
    use crate::engine::SolverStatistics;

    struct Fixture {
        graph: ConstraintGraph,
        assignment: Assignment,
        domains: DomainStore,
        provenance: RemovalProvenance,
        statistics: SolverStatistics,
        chain: SingletonChain,
    }

    impl Fixture {
        fn new(graph: ConstraintGraph, palette_size: usize) -> Fixture {
            let num_variables = graph.num_variables();
            Fixture {
                graph,
                assignment: Assignment::new(num_variables),
                domains: DomainStore::initialise(num_variables, palette_size),
                provenance: RemovalProvenance::new(num_variables),
                statistics: SolverStatistics::default(),
                chain: SingletonChain::default(),
            }
        }

        fn propagate(&mut self, variable: u32, color: u32) -> PropagationStatus {
            let (variable, color) = (VariableId::new(variable), ColorId::new(color));
            self.assignment.assign(variable, color);
            let mut context = PropagationContext {
                graph: &self.graph,
                assignment: &self.assignment,
                domains: &mut self.domains,
                provenance: &mut self.provenance,
                statistics: &mut self.statistics,
            };
            propagate_singletons(&mut context, variable, color, &mut self.chain)
        }

        fn undo(&mut self, variable: u32, color: u32) {
            let (variable, color) = (VariableId::new(variable), ColorId::new(color));
            let mut context = PropagationContext {
                graph: &self.graph,
                assignment: &self.assignment,
                domains: &mut self.domains,
                provenance: &mut self.provenance,
                statistics: &mut self.statistics,
            };
            undo_singletons(&mut context, &mut self.chain);
            undo_forward_check(&mut context, variable, color);
            self.assignment.unassign(variable);
        }
    }

    fn path(num_variables: usize) -> ConstraintGraph {
        ConstraintGraph::from_edges(num_variables, (1..num_variables).map(|i| (i - 1, i)))
    }

    #[test]
    fn singletons_propagate_along_a_path() {
        // 0 - 1 - 2 - 3 with two colors: coloring 0 fixes the whole path.
        let mut fixture = Fixture::new(path(4), 2);

        assert!(fixture.propagate(0, 0).is_ok());

        assert_eq!(fixture.domains.singleton_value(VariableId::new(1)), Some(ColorId::new(1)));
        assert_eq!(fixture.domains.singleton_value(VariableId::new(2)), Some(ColorId::new(0)));
        assert_eq!(fixture.domains.singleton_value(VariableId::new(3)), Some(ColorId::new(1)));
        assert_eq!(fixture.statistics.num_singleton_propagations, 3);
        // Only the direct removal is attributed to the assigned variable.
        assert!(fixture.provenance.contains(VariableId::new(1), ColorId::new(0)));
        assert!(!fixture.provenance.contains(VariableId::new(2), ColorId::new(1)));
    }

    #[test]
    fn odd_cycle_with_two_colors_is_detected() {
        let triangle = ConstraintGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
        let mut fixture = Fixture::new(triangle, 2);

        // 1 is forced to color 1, which forces 2 to color 0, the color of 0.
        assert_eq!(
            fixture.propagate(0, 0),
            Err(Inconsistency::ConflictingNeighbour {
                neighbour: VariableId::new(0),
                value: ColorId::new(0),
            })
        );
    }

    #[test]
    fn adjacent_singletons_with_the_same_value_collide() {
        // 0 - 1 - 2 where 2 can only take color 1; assigning 0 = 0 forces 1 to color 1 as well.
        let mut fixture = Fixture::new(path(3), 2);
        let _ = fixture.domains.remove(VariableId::new(2), ColorId::new(0));

        assert_eq!(
            fixture.propagate(0, 0),
            Err(Inconsistency::SingletonCollision {
                variable: VariableId::new(1),
                neighbour: VariableId::new(2),
                value: ColorId::new(1),
            })
        );
    }

    #[test]
    fn neighbour_which_can_only_take_the_color_collides() {
        let mut fixture = Fixture::new(path(2), 3);
        let _ = fixture.domains.remove(VariableId::new(1), ColorId::new(1));
        let _ = fixture.domains.remove(VariableId::new(1), ColorId::new(2));

        assert_eq!(
            fixture.propagate(0, 0),
            Err(Inconsistency::SingletonCollision {
                variable: VariableId::new(1),
                neighbour: VariableId::new(0),
                value: ColorId::new(0),
            })
        );
    }

    #[test]
    fn even_cycle_terminates() {
        let square = ConstraintGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut fixture = Fixture::new(square, 2);

        assert!(fixture.propagate(0, 0).is_ok());
        assert_eq!(fixture.domains.singleton_value(VariableId::new(2)), Some(ColorId::new(0)));
    }

    #[test]
    fn propagated_value_held_by_assigned_neighbour_fails() {
        // 0 - 1 - 2 where 2 is assigned color 1; assigning 0 = 0 forces 1 to color 1.
        let mut fixture = Fixture::new(path(3), 2);
        fixture
            .assignment
            .assign(VariableId::new(2), ColorId::new(1));

        assert_eq!(
            fixture.propagate(0, 0),
            Err(Inconsistency::ConflictingNeighbour {
                neighbour: VariableId::new(2),
                value: ColorId::new(1),
            })
        );
    }

    #[test]
    fn undo_restores_domains_after_success_and_failure() {
        let mut fixture = Fixture::new(path(5), 2);
        let initial_domains = fixture.domains.clone();

        assert!(fixture.propagate(0, 1).is_ok());
        fixture.undo(0, 1);
        assert_eq!(fixture.domains, initial_domains);
        assert!(fixture.provenance.is_empty());
        assert!(fixture.chain.is_empty());

        let triangle = ConstraintGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
        let mut fixture = Fixture::new(triangle, 2);
        let initial_domains = fixture.domains.clone();

        assert!(fixture.propagate(1, 0).is_err());
        fixture.undo(1, 0);
        assert_eq!(fixture.domains, initial_domains);
        assert!(fixture.provenance.is_empty());
    }
}
