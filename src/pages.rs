pub mod admin;
pub mod feed;
pub mod player;
pub mod post;
pub mod record;
pub mod submissions;
pub mod supporter;
pub mod wiki;
