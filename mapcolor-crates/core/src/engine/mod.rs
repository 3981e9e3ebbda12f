mod assignment;
mod backtracking_search;
mod constraint_graph;
mod domain_store;
pub(crate) mod propagation;
mod removal_provenance;
mod solver_options;
mod solver_statistics;

pub(crate) use assignment::Assignment;
pub(crate) use backtracking_search::BacktrackingSearch;
pub use constraint_graph::ConstraintGraph;
pub(crate) use domain_store::DomainStore;
pub(crate) use removal_provenance::RemovalProvenance;
pub use solver_options::PropagationLevel;
pub use solver_options::SolverOptions;
pub use solver_options::VariableOrdering;
pub use solver_statistics::SolverStatistics;
