//! The consistency rules which are applied when the search tentatively assigns a color.
//!
//! Three levels are available:
//! - the plain check ([`check_assigned_neighbours`]) which only compares against assigned
//!   neighbours;
//! - forward checking ([`forward_check`]) which removes the color from the domains of unassigned
//!   neighbours;
//! - singleton propagation ([`propagate_singletons`]) which additionally propagates every domain
//!   that shrinks to a single value.
//!
//! Every propagating rule has an exact inverse which the search calls when it abandons the value,
//! regardless of whether the propagation succeeded.
mod forward_checking;
mod singleton;

pub(crate) use forward_checking::forward_check;
pub(crate) use forward_checking::undo_forward_check;
pub(crate) use singleton::propagate_singletons;
pub(crate) use singleton::undo_singletons;
pub(crate) use singleton::SingletonChain;

use super::Assignment;
use super::ConstraintGraph;
use super::DomainStore;
use super::RemovalProvenance;
use super::SolverStatistics;
use crate::basic_types::ColorId;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;

/// The structures which propagation reads and modifies.
#[derive(Debug)]
pub(crate) struct PropagationContext<'a> {
    pub(crate) graph: &'a ConstraintGraph,
    pub(crate) assignment: &'a Assignment,
    pub(crate) domains: &'a mut DomainStore,
    pub(crate) provenance: &'a mut RemovalProvenance,
    pub(crate) statistics: &'a mut SolverStatistics,
}

/// Checks whether `color` is held by any assigned neighbour of `variable`.
pub(crate) fn check_assigned_neighbours(
    graph: &ConstraintGraph,
    assignment: &Assignment,
    variable: VariableId,
    color: ColorId,
) -> PropagationStatus {
    match graph
        .neighbours(variable)
        .iter()
        .find(|&&neighbour| assignment.value(neighbour) == Some(color))
    {
        Some(&neighbour) => Err(Inconsistency::ConflictingNeighbour {
            neighbour,
            value: color,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_check_only_considers_assigned_neighbours() {
        let graph = ConstraintGraph::from_edges(3, [(0, 1), (1, 2)]);
        let mut assignment = Assignment::new(3);
        assignment.assign(VariableId::new(2), ColorId::new(0));

        assert!(check_assigned_neighbours(&graph, &assignment, VariableId::new(0), ColorId::new(0)).is_ok());
        assert_eq!(
            check_assigned_neighbours(&graph, &assignment, VariableId::new(1), ColorId::new(0)),
            Err(Inconsistency::ConflictingNeighbour {
                neighbour: VariableId::new(2),
                value: ColorId::new(0),
            })
        );
        assert!(check_assigned_neighbours(&graph, &assignment, VariableId::new(1), ColorId::new(1)).is_ok());
    }
}
