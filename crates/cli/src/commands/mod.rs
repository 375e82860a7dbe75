pub mod list;
pub mod merge;

pub use list::*;
pub use merge::*;
