use crate::basic_types::ColorId;
use crate::basic_types::VariableId;
use crate::containers::KeyedVec;
use crate::mapcolor_assert_moderate;

/// The (partial) coloring built by the search: for every variable either the color it currently
/// holds or [`None`] if it is unassigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Assignment {
    values: KeyedVec<VariableId, Option<ColorId>>,
    num_assigned: usize,
}

impl Assignment {
    /// Creates an assignment in which all `num_variables` variables are unassigned.
    pub(crate) fn new(num_variables: usize) -> Assignment {
        Assignment {
            values: KeyedVec::filled(num_variables, None),
            num_assigned: 0,
        }
    }

    pub(crate) fn value(&self, variable: VariableId) -> Option<ColorId> {
        self.values[variable]
    }

    pub(crate) fn is_assigned(&self, variable: VariableId) -> bool {
        self.values[variable].is_some()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.num_assigned == self.values.len()
    }

    pub(crate) fn assign(&mut self, variable: VariableId, color: ColorId) {
        mapcolor_assert_moderate!(
            !self.is_assigned(variable),
            "{variable} is assigned twice"
        );
        self.values[variable] = Some(color);
        self.num_assigned += 1;
    }

    pub(crate) fn unassign(&mut self, variable: VariableId) {
        mapcolor_assert_moderate!(
            self.is_assigned(variable),
            "{variable} is unassigned while it has no value"
        );
        self.values[variable] = None;
        self.num_assigned -= 1;
    }

    /// Iterates over the values of all variables in index order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (VariableId, Option<ColorId>)> + '_ {
        self.values.keys().zip(self.values.iter().copied())
    }
}
