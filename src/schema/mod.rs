pub mod lookups;
pub mod tables;
pub mod types;

pub use lookups::*;
pub use tables::*;
pub use types::*;
