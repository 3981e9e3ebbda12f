//! # mapcolor
//! A map coloring solver: every region of a map receives a color from a fixed palette such that no
//! two adjacent regions share a color.
//!
//! The map is described by a square adjacency matrix together with the names of the regions. The
//! [`Solver`] performs a depth-first backtracking search which can be strengthened with
//! propagation (see [`options::PropagationLevel`]):
//! - without propagation a color is only checked against the colors of the assigned neighbours;
//! - forward checking removes a tentatively assigned color from the domains of the neighbours and
//!   abandons the color as soon as a domain becomes empty;
//! - singleton propagation additionally propagates every domain which is reduced to a single
//!   color.
//!
//! The order in which regions are colored is determined by a
//! [`VariableSelector`](branching::VariableSelector) (see [`options::VariableOrdering`]).
//!
//! # Example
//! ```rust
//! # use mapcolor_core::Solver;
//! # use mapcolor_core::options::PropagationLevel;
//! # use mapcolor_core::options::SolverOptions;
//! # use mapcolor_core::options::VariableOrdering;
//! // A path A - B - C and an isolated region D
//! let adjacency_matrix: [[u8; 4]; 4] = [
//!     [0, 1, 0, 0],
//!     [1, 0, 1, 0],
//!     [0, 1, 0, 0],
//!     [0, 0, 0, 0],
//! ];
//! let regions = ["A", "B", "C", "D"];
//! let palette = ["red", "green"];
//!
//! let options = SolverOptions::new(PropagationLevel::ForwardChecking, VariableOrdering::InputOrder);
//! let mut solver = Solver::try_new(&adjacency_matrix, &regions, &palette, options)
//!     .expect("the instance is well-formed");
//!
//! let result = solver.solve();
//! let coloring = result.coloring().expect("a path is 2-colorable");
//!
//! assert_eq!(coloring.color_of("A"), Some("red"));
//! assert_eq!(coloring.color_of("B"), Some("green"));
//! assert_eq!(coloring.color_of("C"), Some("red"));
//! assert_eq!(solver.num_backtracks(), 0);
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod mapcolor_asserts;

pub mod branching;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use mapcolor_core::Solver;`
// vs.
// `use mapcolor_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::InstanceError;
pub use crate::engine::ConstraintGraph;
