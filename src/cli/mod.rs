pub mod orchestration;

pub use orchestration::{run_update_workflow, UpdateOutcome, UpdateWorkflowArgs};
