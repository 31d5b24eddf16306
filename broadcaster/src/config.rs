use clap::Parser;
use serde::Deserialize;

/// Default delay before the delivery log is queried, in seconds.
pub const DEFAULT_LOG_DELAY_SECS: u64 = 10;

/// Default per-request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional path to a configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Recipient phone number in international format (e.g. 628123456789)
    #[arg(long)]
    pub to_number: Option<String>,

    /// Recipient display name
    #[arg(long)]
    pub to_name: Option<String>,

    /// Approved WhatsApp message template id
    #[arg(long)]
    pub template: Option<String>,

    /// Channel integration id of the sending WhatsApp account
    #[arg(long)]
    pub channel: Option<String>,

    /// Seconds to wait before fetching the delivery log
    #[arg(long)]
    pub log_delay_secs: Option<u64>,

    /// Template body variables, in order (e.g. --param customer_name=Iqbal)
    #[arg(long = "param", value_name = "NAME=TEXT")]
    pub params: Vec<String>,
}

/// Application configuration loaded from file and environment
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_log_delay_secs")]
    pub log_delay_secs: u64,
    #[serde(default)]
    pub to_number: String,
    #[serde(default)]
    pub to_name: String,
    #[serde(default)]
    pub message_template_id: String,
    #[serde(default)]
    pub channel_integration_id: String,
    #[serde(default = "default_language_code")]
    pub language_code: String,
}

fn default_base_url() -> String {
    "https://api.mekari.com".into()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_log_delay_secs() -> u64 {
    DEFAULT_LOG_DELAY_SECS
}

fn default_language_code() -> String {
    "id".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            base_url: default_base_url(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_delay_secs: DEFAULT_LOG_DELAY_SECS,
            to_number: String::new(),
            to_name: String::new(),
            message_template_id: String::new(),
            channel_integration_id: String::new(),
            language_code: default_language_code(),
        }
    }
}

impl Settings {
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("client_id", "")?
            .set_default("client_secret", "")?
            .set_default("base_url", "https://api.mekari.com")?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("log_delay_secs", DEFAULT_LOG_DELAY_SECS)?
            .set_default("to_number", "")?
            .set_default("to_name", "")?
            .set_default("message_template_id", "")?
            .set_default("channel_integration_id", "")?
            .set_default("language_code", "id")?
            .add_source(config::Environment::with_prefix("BROADCASTER"));
        if let Some(path) = &cli.config {
            builder = builder.add_source(config::File::with_name(path));
        }
        let cfg = builder.build()?;
        let mut settings: Settings = cfg.try_deserialize()?;
        if let Some(n) = &cli.to_number {
            settings.to_number = n.clone();
        }
        if let Some(n) = &cli.to_name {
            settings.to_name = n.clone();
        }
        if let Some(t) = &cli.template {
            settings.message_template_id = t.clone();
        }
        if let Some(c) = &cli.channel {
            settings.channel_integration_id = c.clone();
        }
        if let Some(d) = cli.log_delay_secs {
            settings.log_delay_secs = d;
        }
        Ok(settings)
    }
}
