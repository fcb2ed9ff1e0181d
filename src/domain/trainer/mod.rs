pub mod entity;
pub mod invariants;

pub use entity::{NewTrainer, Trainer, TrainerForm, TrainerUpdate, TrainerUpdateForm};
pub use invariants::{validate_add_trainer, validate_update_trainer};
