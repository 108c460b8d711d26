//! The reconciled output data model: form-field descriptors and workflow
//! stage graphs, serialized with the exact wire names the consuming UI and
//! workflow engine expect.

mod field;
mod stage;

pub use field::{FieldDescriptor, FieldOption, FieldSize, FieldType};
pub use stage::{Action, STAGE_TYPE, Stage};
