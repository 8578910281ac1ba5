pub mod auth;
pub mod engagement;
pub mod posts;
pub mod social;
pub mod users;
