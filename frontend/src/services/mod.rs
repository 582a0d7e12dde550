pub mod dom;
pub mod logging;
pub mod settings_manager;
