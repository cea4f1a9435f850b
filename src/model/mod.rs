pub mod feed;
pub mod message;
pub mod score;
