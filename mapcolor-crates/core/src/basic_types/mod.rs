mod instance_error;
mod propagation_status;
mod variable_id;

pub use instance_error::InstanceError;
pub(crate) use propagation_status::Inconsistency;
pub(crate) use propagation_status::PropagationStatus;
pub use variable_id::ColorId;
pub use variable_id::VariableGeneratorIterator;
pub use variable_id::VariableId;
