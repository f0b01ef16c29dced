use log::Level;

/// Install the browser console as the log sink. Events emitted by `shared`
/// through `tracing` arrive here via its `log` bridge.
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(Level::Debug) {
        gloo::console::warn!("Logger already initialized:", e.to_string());
    }
}

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        log::log!(level, "[{}] {}", component, message);
    }
}
