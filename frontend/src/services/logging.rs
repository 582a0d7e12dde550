#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        // Debug records only in dev builds
        if cfg!(debug_assertions) {
            Self::log(Level::Debug, message, Some(component));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, Some(component));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, Some(component));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, Some(component));
    }

    fn log(level: Level, message: &str, component: Option<&str>) {
        let line = format_line(message, component);

        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(message: &str, component: Option<&str>) -> String {
    match component {
        Some(component) => format!("[{}] {}", component, message),
        None => message.to_string(),
    }
}
