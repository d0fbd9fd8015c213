pub mod roster;

pub use crate::domain::model::{Duck, Fish, Swimmer};
pub use crate::domain::ports::Swimmable;
pub use crate::utils::error::Result;
