//! Dolla: a budgeting chat assistant.

pub mod advice;
pub mod budget;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod remote;
pub mod render;
pub mod server;
pub mod widget;
