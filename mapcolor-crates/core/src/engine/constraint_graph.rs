use crate::basic_types::VariableGeneratorIterator;
use crate::basic_types::VariableId;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// The immutable adjacency structure of a map: every edge states that the two regions it connects
/// must receive different colors.
///
/// The graph is assumed to be symmetric; this is not validated. Neighbour lists never contain the
/// variable itself, even if the adjacency matrix has a non-zero diagonal entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintGraph {
    /// The neighbours of every variable in ascending order.
    neighbours: KeyedVec<VariableId, Vec<VariableId>>,
    /// Row-major `num_variables x num_variables` adjacency relation.
    adjacency: Vec<bool>,
}

impl ConstraintGraph {
    /// Builds the graph from a square adjacency matrix where any non-zero entry at row `i` and
    /// column `j` means that regions `i` and `j` are adjacent.
    ///
    /// Missing entries of a short row are treated as "not adjacent" and surplus entries are
    /// ignored.
    pub fn from_adjacency_matrix<Row: AsRef<[u8]>>(matrix: &[Row]) -> ConstraintGraph {
        let num_variables = matrix.len();
        let mut adjacency = vec![false; num_variables * num_variables];

        for (row_index, row) in matrix.iter().enumerate() {
            for (column_index, &entry) in row.as_ref().iter().take(num_variables).enumerate() {
                adjacency[row_index * num_variables + column_index] = entry != 0;
            }
        }

        ConstraintGraph::from_adjacency(num_variables, adjacency)
    }

    /// Builds the graph over `num_variables` variables from a list of edges given as pairs of
    /// variable indices. Both directions of every edge are inserted.
    pub fn from_edges(
        num_variables: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> ConstraintGraph {
        let mut adjacency = vec![false; num_variables * num_variables];

        for (first, second) in edges {
            adjacency[first * num_variables + second] = true;
            adjacency[second * num_variables + first] = true;
        }

        ConstraintGraph::from_adjacency(num_variables, adjacency)
    }

    fn from_adjacency(num_variables: usize, adjacency: Vec<bool>) -> ConstraintGraph {
        let neighbours = (0..num_variables)
            .map(|row| {
                (0..num_variables)
                    .filter(|&column| column != row && adjacency[row * num_variables + column])
                    .map(VariableId::create_from_index)
                    .collect()
            })
            .collect();

        ConstraintGraph {
            neighbours,
            adjacency,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.neighbours.len()
    }

    /// Iterates over all variables in index order.
    pub fn variables(&self) -> VariableGeneratorIterator {
        VariableGeneratorIterator::new(0, self.num_variables() as u32)
    }

    /// Returns the variables adjacent to `variable` in ascending order.
    pub fn neighbours(&self, variable: VariableId) -> &[VariableId] {
        &self.neighbours[variable]
    }

    pub fn degree(&self, variable: VariableId) -> usize {
        self.neighbours[variable].len()
    }

    /// Returns the raw adjacency entry for the pair; unlike [`ConstraintGraph::neighbours`] this
    /// reports a non-zero diagonal of the input matrix.
    pub fn is_adjacent(&self, first: VariableId, second: VariableId) -> bool {
        self.adjacency[first.index() * self.num_variables() + second.index()]
    }

    /// Returns the number of (undirected) edges between distinct variables.
    pub fn num_edges(&self) -> usize {
        self.neighbours.iter().map(Vec::len).sum::<usize>() / 2
    }
}
