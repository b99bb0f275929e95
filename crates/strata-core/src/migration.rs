mod infer;
pub use infer::{infer_secrets_step, MigrationStepsInferrer};

mod step;
pub use step::*;
