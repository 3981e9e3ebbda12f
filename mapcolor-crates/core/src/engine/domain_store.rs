use crate::basic_types::ColorId;
use crate::basic_types::VariableId;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::mapcolor_assert_simple;

/// Stores, for every variable, the colors which are still candidates for it.
///
/// Every domain is kept in ascending [`ColorId`] order, also after values have been restored; the
/// heuristics and the order in which values are tried depend on this.
///
/// The store does not keep track of *why* a value was removed, this is the responsibility of the
/// caller (see [`RemovalProvenance`](super::RemovalProvenance)).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DomainStore {
    domains: KeyedVec<VariableId, Vec<ColorId>>,
}

impl DomainStore {
    /// Creates a store in which the domain of each of the `num_variables` variables contains all
    /// `palette_size` colors.
    pub(crate) fn initialise(num_variables: usize, palette_size: usize) -> DomainStore {
        let full_domain = (0..palette_size)
            .map(ColorId::create_from_index)
            .collect::<Vec<_>>();

        DomainStore {
            domains: KeyedVec::filled(num_variables, full_domain),
        }
    }

    /// Removes `value` from the domain of `variable`.
    ///
    /// Returns whether the value was part of the domain; removing an absent value does not change
    /// the store.
    pub(crate) fn remove(&mut self, variable: VariableId, value: ColorId) -> bool {
        let domain = &mut self.domains[variable];
        match domain.binary_search(&value) {
            Ok(position) => {
                let _ = domain.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Inserts `value` back into the domain of `variable` at its ascending position.
    ///
    /// The caller guarantees that the value is not currently part of the domain.
    pub(crate) fn restore(&mut self, variable: VariableId, value: ColorId) {
        let domain = &mut self.domains[variable];
        match domain.binary_search(&value) {
            Ok(_) => {
                mapcolor_assert_simple!(
                    false,
                    "{value} is restored to the domain of {variable} which already contains it"
                );
            }
            Err(position) => domain.insert(position, value),
        }
    }

    pub(crate) fn size(&self, variable: VariableId) -> usize {
        self.domains[variable].len()
    }

    /// Returns the remaining values of `variable` in ascending order.
    pub(crate) fn values(&self, variable: VariableId) -> &[ColorId] {
        &self.domains[variable]
    }

    pub(crate) fn is_empty(&self, variable: VariableId) -> bool {
        self.domains[variable].is_empty()
    }

    pub(crate) fn contains(&self, variable: VariableId, value: ColorId) -> bool {
        self.domains[variable].binary_search(&value).is_ok()
    }

    /// Returns the only remaining value of `variable`, or [`None`] if the domain is empty or holds
    /// more than one value.
    pub(crate) fn singleton_value(&self, variable: VariableId) -> Option<ColorId> {
        match self.domains[variable].as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    pub(crate) fn is_singleton(&self, variable: VariableId) -> bool {
        self.singleton_value(variable).is_some()
    }
}
