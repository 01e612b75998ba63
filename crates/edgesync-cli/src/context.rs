use edgesync_core::config::{self, Settings};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
}

impl AppContext {
    pub fn load() -> Self {
        let settings = match config::load_settings() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("failed to read settings (using defaults): {err:?}");
                Settings::default()
            }
        };
        Self { settings }
    }
}
