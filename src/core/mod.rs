pub mod greeter;

pub use crate::domain::model::Greeting;
pub use crate::domain::ports::Flipp;
pub use crate::utils::error::Result;
