use thiserror::Error;

/// Describes why the input of [`Solver::try_new`](crate::Solver::try_new) does not form a
/// coloring instance.
///
/// Only the shape of the input is checked; a non-symmetric matrix or a non-zero diagonal is
/// accepted as-is.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("Row {row} of the adjacency matrix has {actual} entries but the matrix has {expected} rows")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("The adjacency matrix describes {variables} regions but {names} region names were provided")]
    NameCountMismatch { variables: usize, names: usize },
    #[error("The palette does not contain any colors")]
    EmptyPalette,
}
