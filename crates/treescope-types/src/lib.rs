pub mod entity;
pub mod error;
pub mod inspect;

pub use entity::*;
pub use error::{Error, Result};
pub use inspect::{EntityHandle, Inspect};
