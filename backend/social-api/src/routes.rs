/// Route table for the social API
use actix_web::web;

use crate::handlers::{auth, engagement, posts, social, users};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Authentication
        .route("/register", web::post().to(auth::register))
        .route("/authenticate", web::post().to(auth::authenticate))
        .route("/token/refresh", web::post().to(auth::refresh_token))
        // Profile
        .route("/user", web::get().to(users::get_user))
        // Follow graph
        .route("/follow/{id}", web::post().to(social::follow_user))
        .route("/unfollow/{id}", web::post().to(social::unfollow_user))
        // Posts
        .route("/posts", web::post().to(posts::create_post))
        .route("/posts/{id}", web::get().to(posts::get_post))
        .route("/posts/{id}", web::delete().to(posts::delete_post))
        .route("/all_posts", web::get().to(posts::get_own_posts))
        // Engagement
        .route("/like/{id}", web::post().to(engagement::like_post))
        .route("/unlike/{id}", web::post().to(engagement::unlike_post))
        .route("/comment/{id}", web::post().to(engagement::comment_on_post));
}
