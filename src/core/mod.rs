pub mod filter;
pub mod guards;
pub mod lesson;
pub mod login;
pub mod optionals;
pub mod playground;

pub use crate::domain::model::{FormError, LoginForm, ValidLogin};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
