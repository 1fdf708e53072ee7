//! Server-side account entities.

pub mod user;
pub use self::user::User;
