mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of coloring a map using the [`Solver`].
    //!
    //! A solve either results in a [`Coloring`] ([`ColoringResult::Colored`]) or proves that no
    //! coloring exists with the provided palette ([`ColoringResult::NoSolution`]). An instance
    //! without regions results in an empty [`Coloring`], which is distinct from
    //! [`ColoringResult::NoSolution`].
    pub use crate::api::outputs::Coloring;
    pub use crate::api::outputs::ColoringResult;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the identifiers used by the [`Solver`].
    //!
    //! Every region of the map is a variable identified by a [`VariableId`], which is its index in
    //! the adjacency matrix; every color is identified by a [`ColorId`], which is its index in the
    //! palette.
    pub use crate::basic_types::ColorId;
    pub use crate::basic_types::VariableGeneratorIterator;
    pub use crate::basic_types::VariableId;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These influence the following aspects:
    //! - The amount of propagation after every tentative assignment ([`PropagationLevel`])
    //! - The order in which the regions are colored ([`VariableOrdering`])
    pub use crate::engine::PropagationLevel;
    pub use crate::engine::SolverOptions;
    pub use crate::engine::VariableOrdering;
    #[cfg(doc)]
    use crate::Solver;
}

#[doc(hidden)]
pub mod asserts {
    pub use crate::mapcolor_assert_eq_simple;
    pub use crate::mapcolor_assert_extreme;
    pub use crate::mapcolor_assert_moderate;
    pub use crate::mapcolor_assert_simple;
    pub use crate::mapcolor_asserts::assertions_enabled;
    pub use crate::mapcolor_asserts::MAPCOLOR_ASSERT_EXTREME;
    pub use crate::mapcolor_asserts::MAPCOLOR_ASSERT_LEVEL_DEFINITION;
    pub use crate::mapcolor_asserts::MAPCOLOR_ASSERT_MODERATE;
    pub use crate::mapcolor_asserts::MAPCOLOR_ASSERT_SIMPLE;
}
