pub mod target;
pub mod user;

pub use target::{NewTarget, Target};
pub use user::{NewUser, User};
