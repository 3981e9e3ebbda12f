//! Contains the [`VariableSelector`] trait and its implementations.
mod fallback_chain;
mod input_order;
mod least_constraining;
mod max_degree;
mod minimum_remaining_values;
mod variable_selector;

pub use fallback_chain::FallbackChain;
pub use input_order::InputOrder;
pub use least_constraining::LeastConstraining;
pub use max_degree::MaxDegree;
pub use minimum_remaining_values::MinimumRemainingValues;
pub use variable_selector::VariableSelector;
