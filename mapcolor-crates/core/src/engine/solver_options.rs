use std::fmt::Display;

use super::ConstraintGraph;
use crate::branching::FallbackChain;
use crate::branching::InputOrder;
use crate::branching::LeastConstraining;
use crate::branching::MaxDegree;
use crate::branching::MinimumRemainingValues;
use crate::branching::VariableSelector;
#[cfg(doc)]
use crate::Solver;

/// Options for the [`Solver`] which determine how it searches for a coloring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SolverOptions {
    /// The consistency rule applied after every tentative assignment.
    pub propagation: PropagationLevel,
    /// The order in which the variables are colored.
    pub ordering: VariableOrdering,
}

impl SolverOptions {
    pub fn new(propagation: PropagationLevel, ordering: VariableOrdering) -> Self {
        SolverOptions {
            propagation,
            ordering,
        }
    }

    /// Returns all combinations of propagation level and variable ordering.
    pub fn all() -> impl Iterator<Item = SolverOptions> {
        PropagationLevel::ALL.into_iter().flat_map(|propagation| {
            VariableOrdering::ALL
                .into_iter()
                .map(move |ordering| SolverOptions::new(propagation, ordering))
        })
    }
}

impl Display for SolverOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.propagation, self.ordering)
    }
}

/// The amount of consistency enforced by the search after a value is tentatively assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagationLevel {
    /// Only checks whether an assigned neighbour holds the same color.
    None,
    /// Removes the color from the domains of the unassigned neighbours and fails as soon as a
    /// domain becomes empty.
    ForwardChecking,
    /// Forward checking, where every domain which is reduced to a single color in turn removes
    /// that color from its neighbours.
    #[default]
    Singleton,
}

impl PropagationLevel {
    pub const ALL: [PropagationLevel; 3] = [
        PropagationLevel::None,
        PropagationLevel::ForwardChecking,
        PropagationLevel::Singleton,
    ];

    /// Whether the domains of the variables are maintained during search.
    pub fn maintains_domains(self) -> bool {
        !matches!(self, PropagationLevel::None)
    }
}

impl Display for PropagationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationLevel::None => write!(f, "DFS"),
            PropagationLevel::ForwardChecking => write!(f, "DFS + FC"),
            PropagationLevel::Singleton => write!(f, "DFS + FC + Singleton"),
        }
    }
}

/// The order in which the variables are selected for coloring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableOrdering {
    /// The first unassigned variable in index order, see [`InputOrder`].
    InputOrder,
    /// [`MinimumRemainingValues`], falling back to [`MaxDegree`] and then to
    /// [`LeastConstraining`].
    #[default]
    Heuristic,
    /// [`MaxDegree`] only.
    Degree,
}

impl VariableOrdering {
    pub const ALL: [VariableOrdering; 3] = [
        VariableOrdering::InputOrder,
        VariableOrdering::Heuristic,
        VariableOrdering::Degree,
    ];

    /// Creates the [`VariableSelector`] implementing this ordering over the variables of `graph`.
    pub fn create_selector(self, graph: &ConstraintGraph) -> Box<dyn VariableSelector> {
        let variables = graph.variables().collect::<Vec<_>>();

        match self {
            VariableOrdering::InputOrder => Box::new(InputOrder::new(&variables)),
            VariableOrdering::Heuristic => {
                let chain: Vec<Box<dyn VariableSelector>> = vec![
                    Box::new(MinimumRemainingValues::new(&variables)),
                    Box::new(MaxDegree::new(&variables)),
                    Box::new(LeastConstraining::new(&variables)),
                ];
                Box::new(FallbackChain::new(chain))
            }
            VariableOrdering::Degree => Box::new(MaxDegree::new(&variables)),
        }
    }
}

impl Display for VariableOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableOrdering::InputOrder => write!(f, "input order"),
            VariableOrdering::Heuristic => write!(f, "MRV, degree, LCV"),
            VariableOrdering::Degree => write!(f, "degree"),
        }
    }
}
