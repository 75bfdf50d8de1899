pub mod clearing;
pub mod error;

pub use self::{clearing::*, error::*};
