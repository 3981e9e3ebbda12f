use crate::create_statistics_struct;

create_statistics_struct!(
    /// The statistics of a single invocation of [`Solver::solve`](crate::Solver::solve).
    ///
    /// All counters are reset at the start of every solve.
    SolverStatistics {
        /// The number of candidate values which were abandoned, either because they were
        /// inconsistent or because their subtree did not contain a solution
        num_backtracks: u64,
        /// The number of tentative assignments made by the search
        num_decisions: u64,
        /// The number of values removed from domains by forward checking and singleton propagation
        num_values_pruned: u64,
        /// The number of variables from which a singleton value was propagated
        num_singleton_propagations: u64,
        /// The number of tentative assignments rejected by the consistency check or propagation
        num_propagation_failures: u64,
    }
);
