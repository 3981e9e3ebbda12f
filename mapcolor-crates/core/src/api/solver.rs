use log::debug;

use super::results::ColoringResult;
use super::results::Coloring;
use crate::basic_types::InstanceError;
use crate::branching::VariableSelector;
use crate::engine::BacktrackingSearch;
use crate::engine::ConstraintGraph;
use crate::options::SolverOptions;
use crate::statistics::log_statistic_postfix;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::statistics::SolverStatistics;

/// The main interaction point which colors a map given as an adjacency matrix.
///
/// The solver borrows the names of the regions and of the colors; the returned
/// [`Coloring`] refers to the same names.
///
/// ```rust
/// # use mapcolor_core::Solver;
/// # use mapcolor_core::options::SolverOptions;
/// # use mapcolor_core::results::ColoringResult;
/// let adjacency_matrix: [[u8; 3]; 3] = [[0, 1, 1], [1, 0, 1], [1, 1, 0]];
/// let regions = ["A", "B", "C"];
///
/// // A triangle can not be colored with two colors...
/// let mut solver = Solver::new(&adjacency_matrix, &regions, &["red", "green"], SolverOptions::default());
/// assert_eq!(solver.solve(), ColoringResult::NoSolution);
///
/// // ...but it can be colored with three.
/// let palette = ["red", "green", "blue"];
/// let mut solver = Solver::new(&adjacency_matrix, &regions, &palette, SolverOptions::default());
/// let result = solver.solve();
/// let coloring = result.coloring().expect("a triangle is 3-colorable");
/// assert_ne!(coloring.color_of("A"), coloring.color_of("B"));
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'names> {
    graph: ConstraintGraph,
    regions: Vec<&'names str>,
    palette: Vec<&'names str>,
    options: SolverOptions,
    /// The statistics of the most recent call to [`Solver::solve`].
    statistics: SolverStatistics,
}

impl<'names> Solver<'names> {
    /// Creates a solver for the map described by `adjacency_matrix`, where any non-zero entry at
    /// row `i` and column `j` means that region `i` and region `j` are adjacent.
    ///
    /// The input is not validated; see [`Solver::try_new`] for a variant which checks the shape
    /// of the input.
    pub fn new<Row: AsRef<[u8]>>(
        adjacency_matrix: &[Row],
        regions: &[&'names str],
        palette: &[&'names str],
        options: SolverOptions,
    ) -> Self {
        Solver::with_graph(
            ConstraintGraph::from_adjacency_matrix(adjacency_matrix),
            regions,
            palette,
            options,
        )
    }

    /// Creates a solver like [`Solver::new`] after checking that the matrix is square, that there
    /// is a name for every region and that the palette is not empty.
    ///
    /// Symmetry of the matrix and a zero diagonal are not checked.
    pub fn try_new<Row: AsRef<[u8]>>(
        adjacency_matrix: &[Row],
        regions: &[&'names str],
        palette: &[&'names str],
        options: SolverOptions,
    ) -> Result<Self, InstanceError> {
        let expected = adjacency_matrix.len();
        if let Some((row, actual)) = adjacency_matrix
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|&(_, actual)| actual != expected)
        {
            return Err(InstanceError::NonSquareMatrix {
                row,
                expected,
                actual,
            });
        }

        if regions.len() != expected {
            return Err(InstanceError::NameCountMismatch {
                variables: expected,
                names: regions.len(),
            });
        }

        if palette.is_empty() {
            return Err(InstanceError::EmptyPalette);
        }

        Ok(Solver::new(adjacency_matrix, regions, palette, options))
    }

    /// Creates a solver for an already constructed [`ConstraintGraph`].
    pub fn with_graph(
        graph: ConstraintGraph,
        regions: &[&'names str],
        palette: &[&'names str],
        options: SolverOptions,
    ) -> Self {
        Solver {
            graph,
            regions: regions.to_vec(),
            palette: palette.to_vec(),
            options,
            statistics: SolverStatistics::default(),
        }
    }

    /// Searches for a coloring using the variable ordering of the [`SolverOptions`].
    ///
    /// Every call starts from scratch; the statistics (including the number of backtracks) only
    /// describe the most recent call.
    pub fn solve(&mut self) -> ColoringResult<'names> {
        let mut selector = self.options.ordering.create_selector(&self.graph);
        self.solve_with_selector(selector.as_mut())
    }

    /// Searches for a coloring in which the variables are selected by the provided
    /// [`VariableSelector`]; the propagation level of the [`SolverOptions`] is used.
    pub fn solve_with_selector(
        &mut self,
        selector: &mut dyn VariableSelector,
    ) -> ColoringResult<'names> {
        debug!(
            "Coloring {} regions with {} edges using {} colors, {}",
            self.graph.num_variables(),
            self.graph.num_edges(),
            self.palette.len(),
            self.options
        );

        self.statistics = SolverStatistics::default();
        let mut search =
            BacktrackingSearch::new(&self.graph, self.palette.len(), self.options.propagation);

        let found = search.run(selector);
        self.statistics = search.statistics();

        debug!(
            "Search finished {} after {} backtracks",
            if found { "with a coloring" } else { "without a coloring" },
            self.statistics.num_backtracks
        );

        if found {
            ColoringResult::Colored(Coloring::from_assignment(
                search.assignment(),
                &self.regions,
                &self.palette,
            ))
        } else {
            ColoringResult::NoSolution
        }
    }

    /// Returns the statistics of the most recent call to [`Solver::solve`].
    pub fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    /// Returns the number of backtracks of the most recent call to [`Solver::solve`].
    pub fn num_backtracks(&self) -> u64 {
        self.statistics.num_backtracks
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// Changes the options used by subsequent calls to [`Solver::solve`].
    pub fn set_options(&mut self, options: SolverOptions) {
        self.options = options;
    }

    /// Logs the statistics of the most recent solve, if statistic logging has been configured
    /// (see [`configure_statistic_logging`](crate::statistics::configure_statistic_logging)).
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::default());
        log_statistic_postfix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PropagationLevel;
    use crate::options::VariableOrdering;

    const TRIANGLE: [[u8; 3]; 3] = [[0, 1, 1], [1, 0, 1], [1, 1, 0]];

    #[test]
    fn statistics_describe_the_last_solve() {
        let options = SolverOptions::new(PropagationLevel::None, VariableOrdering::InputOrder);
        let mut solver = Solver::new(&TRIANGLE, &["A", "B", "C"], &["r", "g"], options);

        assert_eq!(solver.solve(), ColoringResult::NoSolution);
        assert_eq!(solver.num_backtracks(), 10);
        assert_eq!(solver.solve(), ColoringResult::NoSolution);
        assert_eq!(solver.num_backtracks(), 10);

        solver.set_options(SolverOptions::new(
            PropagationLevel::Singleton,
            VariableOrdering::InputOrder,
        ));
        assert_eq!(solver.solve(), ColoringResult::NoSolution);
        assert_eq!(solver.num_backtracks(), 2);
        assert_eq!(solver.statistics().num_decisions, 2);
    }

    #[test]
    fn try_new_rejects_a_ragged_matrix() {
        let matrix: [&[u8]; 2] = [&[0, 1], &[1]];

        assert_eq!(
            Solver::try_new(&matrix, &["A", "B"], &["r"], SolverOptions::default()).err(),
            Some(InstanceError::NonSquareMatrix {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn try_new_rejects_missing_names_and_empty_palettes() {
        assert_eq!(
            Solver::try_new(&TRIANGLE, &["A", "B"], &["r"], SolverOptions::default()).err(),
            Some(InstanceError::NameCountMismatch {
                variables: 3,
                names: 2
            })
        );
        assert_eq!(
            Solver::try_new(&TRIANGLE, &["A", "B", "C"], &[], SolverOptions::default()).err(),
            Some(InstanceError::EmptyPalette)
        );
    }

    #[test]
    fn solver_can_be_sent_to_another_thread() {
        fn assert_send<T: Send>() {}
        assert_send::<Solver<'static>>();
    }
}
