pub mod episode;
pub mod franchise;
pub mod genre;
pub mod movie;
pub mod server;
pub mod user;
