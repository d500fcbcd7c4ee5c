pub mod cat;
pub mod common;
pub mod error;
pub mod user;

pub use cat::*;
pub use common::*;
pub use error::*;
pub use user::*;
