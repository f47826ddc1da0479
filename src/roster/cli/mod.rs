pub mod commands;
mod form;
mod input;
mod logging;
mod render;
mod session;
mod setup;
