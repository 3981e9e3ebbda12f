use log::warn;

use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::variables::VariableId;

/// The last resort of the heuristic variable ordering.
///
/// For every unassigned variable (column) in order, the number of variables (rows, the variable
/// itself included) which are *not* adjacent to it is added to a running total; the column is
/// selected whenever the running total exceeds the best total seen so far. The total is never
/// reset between columns, so in practice the last unassigned column with a non-zero count is
/// selected. This behaviour is kept as-is because it determines the search order of the
/// heuristic ordering; it should not be read as a least-constraining-value measure.
#[derive(Debug)]
pub struct LeastConstraining {
    variables: Vec<VariableId>,
}

impl LeastConstraining {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The LeastConstraining variable selector was not provided with any variables");
        }
        LeastConstraining {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for LeastConstraining {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<VariableId> {
        let mut running_total = 0;
        let mut best_total = 0;
        let mut selected = None;

        for &column in &self.variables {
            if context.is_assigned(column) {
                continue;
            }

            running_total += context
                .variables()
                .filter(|&row| !context.is_adjacent(row, column))
                .count();

            if running_total > best_total {
                best_total = running_total;
                selected = Some(column);
            }
        }

        selected
    }
}
