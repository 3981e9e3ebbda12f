use crate::basic_types::ColorId;
use crate::basic_types::VariableGeneratorIterator;
use crate::basic_types::VariableId;
use crate::containers::HashSet;
use crate::containers::StorageKey;
use crate::engine::Assignment;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
#[cfg(doc)]
use crate::branching::VariableSelector;

/// The context provided to a [`VariableSelector`]; it gives read access to the constraint graph,
/// the current (partial) assignment and the sizes of the domains.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    graph: &'a ConstraintGraph,
    assignment: &'a Assignment,
    domain_sizes: DomainSizes<'a>,
}

/// How the size of a domain is determined.
#[derive(Clone, Copy, Debug)]
enum DomainSizes<'a> {
    /// The domains are maintained by propagation.
    Stored(&'a DomainStore),
    /// Without propagation the domains are not stored; the size of a domain is the number of
    /// colors of the palette which are not held by an assigned neighbour.
    Derived { palette_size: usize },
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn with_domains(
        graph: &'a ConstraintGraph,
        assignment: &'a Assignment,
        domains: &'a DomainStore,
    ) -> Self {
        SelectionContext {
            graph,
            assignment,
            domain_sizes: DomainSizes::Stored(domains),
        }
    }

    pub(crate) fn with_palette(
        graph: &'a ConstraintGraph,
        assignment: &'a Assignment,
        palette_size: usize,
    ) -> Self {
        SelectionContext {
            graph,
            assignment,
            domain_sizes: DomainSizes::Derived { palette_size },
        }
    }

    /// Returns all variables of the instance in index order.
    pub fn variables(&self) -> VariableGeneratorIterator {
        self.graph.variables()
    }

    pub fn num_variables(&self) -> usize {
        self.graph.num_variables()
    }

    /// Determines whether the provided variable currently holds a color.
    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.assignment.is_assigned(variable)
    }

    /// Returns the number of colors which can still be given to `variable`.
    pub fn get_size_of_domain(&self, variable: VariableId) -> usize {
        match self.domain_sizes {
            DomainSizes::Stored(domains) => domains.size(variable),
            DomainSizes::Derived { palette_size } => {
                let held_by_neighbours = self
                    .graph
                    .neighbours(variable)
                    .iter()
                    .filter_map(|&neighbour| self.assignment.value(neighbour))
                    .collect::<HashSet<_>>();
                palette_size.saturating_sub(held_by_neighbours.len())
            }
        }
    }

    /// Determines whether `color` can still be given to `variable`.
    pub fn contains(&self, variable: VariableId, color: ColorId) -> bool {
        match self.domain_sizes {
            DomainSizes::Stored(domains) => domains.contains(variable, color),
            DomainSizes::Derived { palette_size } => {
                color.index() < palette_size
                    && self
                        .graph
                        .neighbours(variable)
                        .iter()
                        .all(|&neighbour| self.assignment.value(neighbour) != Some(color))
            }
        }
    }

    /// Returns the number of neighbours of `variable` in the constraint graph.
    pub fn degree(&self, variable: VariableId) -> usize {
        self.graph.degree(variable)
    }

    /// Returns the neighbours of `variable` in ascending order.
    pub fn neighbours(&self, variable: VariableId) -> &'a [VariableId] {
        self.graph.neighbours(variable)
    }

    /// Returns the raw adjacency entry of the pair (see [`ConstraintGraph::is_adjacent`]).
    pub fn is_adjacent(&self, first: VariableId, second: VariableId) -> bool {
        self.graph.is_adjacent(first, second)
    }
}
