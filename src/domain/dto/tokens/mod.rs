pub mod response;

pub use response::{TokenOwner, TokenResponse};
