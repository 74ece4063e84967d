//! Safe SQL builder: identifiers are fixed column names, values are always parameters.

mod builder;
pub use builder::*;
