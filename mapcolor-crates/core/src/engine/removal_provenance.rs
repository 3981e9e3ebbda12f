use crate::basic_types::ColorId;
use crate::basic_types::VariableId;
use crate::containers::KeyedVec;
use crate::mapcolor_assert_simple;

/// Records which tentative assignment removed a value from the domain of a variable.
///
/// The records are keyed by the value (not by identity) of the pair `(affected variable, removed
/// value)`. Since a variable has at most as many records as there are colors, the records of a
/// variable are stored in a small vector which is scanned linearly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RemovalProvenance {
    records: KeyedVec<VariableId, Vec<RemovalRecord>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RemovalRecord {
    value: ColorId,
    remover: VariableId,
}

impl RemovalProvenance {
    pub(crate) fn new(num_variables: usize) -> RemovalProvenance {
        RemovalProvenance {
            records: KeyedVec::filled(num_variables, Vec::new()),
        }
    }

    /// Returns the variable whose tentative assignment removed `value` from `variable`, if any.
    pub(crate) fn remover_of(&self, variable: VariableId, value: ColorId) -> Option<VariableId> {
        self.records[variable]
            .iter()
            .find(|record| record.value == value)
            .map(|record| record.remover)
    }

    pub(crate) fn contains(&self, variable: VariableId, value: ColorId) -> bool {
        self.remover_of(variable, value).is_some()
    }

    /// Records that `remover` removed `value` from the domain of `variable`.
    pub(crate) fn record(&mut self, variable: VariableId, value: ColorId, remover: VariableId) {
        mapcolor_assert_simple!(
            !self.contains(variable, value),
            "the removal of {value} from {variable} is recorded twice"
        );
        self.records[variable].push(RemovalRecord { value, remover });
    }

    /// Deletes the record of `value` being removed from `variable` if (and only if) it was removed
    /// by `remover`.
    ///
    /// Returns whether a record was deleted, i.e. whether the caller should restore the value.
    pub(crate) fn release(
        &mut self,
        variable: VariableId,
        value: ColorId,
        remover: VariableId,
    ) -> bool {
        let records = &mut self.records[variable];
        match records
            .iter()
            .position(|record| record.value == value && record.remover == remover)
        {
            Some(position) => {
                let _ = records.swap_remove(position);
                true
            }
            None => false,
        }
    }

    /// Returns whether any record names `remover` as the cause of a removal.
    pub(crate) fn mentions(&self, remover: VariableId) -> bool {
        self.records
            .iter()
            .flatten()
            .any(|record| record.remover == remover)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.iter().all(Vec::is_empty)
    }
}
