pub mod chat;
pub mod command;
pub mod feed;
pub mod handler;
pub mod model;
pub mod reply;
pub mod scores;
