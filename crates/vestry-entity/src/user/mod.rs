//! Principal (user) entity and status enum.

mod model;
mod status;

pub use model::User;
pub use status::UserStatus;
