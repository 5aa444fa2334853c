use std::env;

use log::error;

use super::constants::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub font_path: Option<String>,
    pub with_image: bool,
    pub request_timeout_secs: u64,
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            font_path: None,
            with_image: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            output_dir: ".".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        if let Ok(base_url) = env::var("DECK_BASE_URL") {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(font_path) = env::var("FONT_PATH") {
            if std::path::Path::new(&font_path).is_file() {
                self.font_path = Some(font_path);
            } else if !font_path.is_empty() {
                error!("Supplied font path {} is not a file", font_path);
                self.font_path = None;
            }
        }
        if let Ok(with_image) = env::var("WITH_IMAGE") {
            self.with_image = with_image == "1";
        }
        if let Ok(timeout) = env::var("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = timeout.parse().unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        }
        if let Ok(output_dir) = env::var("OUTPUT_DIR") {
            if !output_dir.is_empty() {
                self.output_dir = output_dir;
            }
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
