use super::PropagationContext;
use crate::basic_types::ColorId;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;

/// Removes `color` from the domains of the unassigned neighbours of `variable` and records
/// `variable` as the cause of every removal.
///
/// Neighbours for which the removal of `color` is already attributed to another variable are
/// skipped. The propagation stops at the first neighbour whose domain becomes empty; the removals
/// made up to that point are left in place for [`undo_forward_check`] to revert.
pub(crate) fn forward_check(
    context: &mut PropagationContext<'_>,
    variable: VariableId,
    color: ColorId,
) -> PropagationStatus {
    let graph = context.graph;

    for &neighbour in graph.neighbours(variable) {
        if context.assignment.is_assigned(neighbour)
            || context.provenance.contains(neighbour, color)
            || !context.domains.remove(neighbour, color)
        {
            continue;
        }

        context.provenance.record(neighbour, color, variable);
        context.statistics.num_values_pruned += 1;

        if context.domains.is_empty(neighbour) {
            return Err(Inconsistency::EmptyDomain {
                variable: neighbour,
            });
        }
    }

    Ok(())
}

/// Restores `color` to every neighbour of `variable` from which `variable` removed it, and deletes
/// the corresponding provenance records.
///
/// Removals attributed to other variables are left untouched.
pub(crate) fn undo_forward_check(
    context: &mut PropagationContext<'_>,
    variable: VariableId,
    color: ColorId,
) {
    let graph = context.graph;

    for &neighbour in graph.neighbours(variable) {
        if context.provenance.release(neighbour, color, variable) {
            context.domains.restore(neighbour, color);
        }
    }
}
