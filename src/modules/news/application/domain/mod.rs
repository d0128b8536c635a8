pub mod entities;
pub mod forms;
pub mod patch_field;
