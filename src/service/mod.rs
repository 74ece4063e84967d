//! CharacterService: storage operations using the safe SQL builder.

mod crud;
mod validation;
pub use crud::*;
pub use validation::*;
