use tracing_subscriber::EnvFilter;
use uns_resolver_domain::config::ConfigError;
use uns_resolver_domain::Config;

pub fn load_config(path: Option<&str>, log_level: Option<String>) -> Result<Config, ConfigError> {
    let mut config = Config::load(path)?;
    if let Some(level) = log_level {
        config.logging.level = level;
    }
    Ok(config)
}

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
