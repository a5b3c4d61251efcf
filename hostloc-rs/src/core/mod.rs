//! Core: Application, Module.

pub mod app;
pub mod module;

pub use app::Application;
pub use module::Module;
