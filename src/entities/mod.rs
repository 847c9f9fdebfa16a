// Entity Models - the catalog's data types

pub mod category;
pub mod tool;

pub use category::{Category, UnknownCategory};
pub use tool::{Tool, ToolPatch};
