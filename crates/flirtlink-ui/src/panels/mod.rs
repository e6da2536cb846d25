pub mod form;
pub mod chat;
pub mod notice;
