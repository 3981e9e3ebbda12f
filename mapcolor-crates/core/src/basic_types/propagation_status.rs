use crate::basic_types::ColorId;
use crate::basic_types::VariableId;

/// The result of propagating a tentative assignment. The propagation either succeeds or
/// identifies an [`Inconsistency`], in which case the search abandons the value without
/// descending.
pub(crate) type PropagationStatus = Result<(), Inconsistency>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inconsistency {
    /// An assigned neighbour already holds the value.
    ConflictingNeighbour {
        neighbour: VariableId,
        value: ColorId,
    },
    /// Removing the value would leave the domain of `variable` empty.
    EmptyDomain { variable: VariableId },
    /// Two adjacent variables can only take the same value.
    SingletonCollision {
        variable: VariableId,
        neighbour: VariableId,
        value: ColorId,
    },
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inconsistency::ConflictingNeighbour { neighbour, value } => {
                write!(f, "{neighbour} is already assigned {value}")
            }
            Inconsistency::EmptyDomain { variable } => write!(f, "domain of {variable} is empty"),
            Inconsistency::SingletonCollision {
                variable,
                neighbour,
                value,
            } => write!(f, "{variable} and {neighbour} can only take {value}"),
        }
    }
}
