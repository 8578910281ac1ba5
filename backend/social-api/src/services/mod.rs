pub mod auth;
pub mod authz;
pub mod engagement;
pub mod follow;
pub mod posts;

pub use auth::AuthService;
pub use engagement::EngagementService;
pub use follow::FollowService;
pub use posts::PostService;
