//! Application settings and environment variable handling

use std::env;

// EmailJS account the notifications are sent through
pub const DEFAULT_EMAILJS_SERVICE_ID: &str = "service_ks35r2p";
pub const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "template_r76ftal";
pub const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "UZuJuE3vOwUmK0hfo";
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";

// HTTP constants
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
pub const MIN_HTTP_TIMEOUT_SECS: u64 = 1;
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 120;

// How long the "sent" confirmation stays visible
pub const DEFAULT_CONFIRMATION_DISPLAY_SECS: u64 = 3;
pub const MIN_CONFIRMATION_DISPLAY_SECS: u64 = 1;
pub const MAX_CONFIRMATION_DISPLAY_SECS: u64 = 60;

pub const DEFAULT_LOG_DIR: &str = "output/logs";

#[derive(Debug, Clone)]
pub struct EmailJsSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_url: String,
}

impl Default for EmailJsSettings {
    fn default() -> Self {
        Self {
            service_id: DEFAULT_EMAILJS_SERVICE_ID.to_string(),
            template_id: DEFAULT_EMAILJS_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_EMAILJS_PUBLIC_KEY.to_string(),
            api_url: DEFAULT_EMAILJS_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub emailjs: EmailJsSettings,
    pub http_timeout_secs: u64,
    pub confirmation_display_secs: u64,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emailjs: EmailJsSettings::default(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            confirmation_display_secs: DEFAULT_CONFIRMATION_DISPLAY_SECS,
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unparsable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            emailjs: EmailJsSettings {
                service_id: lookup("EMAILJS_SERVICE_ID")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_SERVICE_ID.to_string()),
                template_id: lookup("EMAILJS_TEMPLATE_ID")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_TEMPLATE_ID.to_string()),
                public_key: lookup("EMAILJS_PUBLIC_KEY")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_PUBLIC_KEY.to_string()),
                api_url: lookup("EMAILJS_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_string()),
            },
            http_timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
                .max(MIN_HTTP_TIMEOUT_SECS)
                .min(MAX_HTTP_TIMEOUT_SECS),
            confirmation_display_secs: lookup("CONFIRMATION_DISPLAY_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CONFIRMATION_DISPLAY_SECS)
                .max(MIN_CONFIRMATION_DISPLAY_SECS)
                .min(MAX_CONFIRMATION_DISPLAY_SECS),
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        }
    }
}
