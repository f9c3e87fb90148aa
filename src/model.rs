use crate::config::BrowserConfig;
use crate::controller::Controller;

/// Everything the core owns for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub config: BrowserConfig,
    pub controller: Controller,
    pub scroll_generation: u64,
}

impl Model {
    #[must_use]
    pub fn with_config(config: BrowserConfig) -> Self {
        Self {
            controller: Controller::new(config.page_size),
            config,
            scroll_generation: 0,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::with_config(BrowserConfig::default())
    }
}
