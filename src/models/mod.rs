pub mod explain;

pub use explain::*;
