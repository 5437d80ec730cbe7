pub mod api_response;
pub mod user;

pub use api_response::*;
pub use user::*;
