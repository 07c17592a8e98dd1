use std::env;
use std::path::PathBuf;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Secrets shorter than this are accepted but reported at startup.
pub const RECOMMENDED_SECRET_BYTES: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn is_secret_weak(&self) -> bool {
        self.secret.len() < RECOMMENDED_SECRET_BYTES
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    pub cache_control: String,
    pub default_content_type: String,
    pub poster: PosterConfig,
    pub avatar: AvatarConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PosterConfig {
    pub dir: PathBuf,
    /// Public prefix of poster URLs, e.g. `http://localhost:8080/api/resources/posters`
    pub base_url: String,
    /// Maximum decoded upload size in bytes
    pub max_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AvatarConfig {
    pub dir: PathBuf,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: MEDIA__POSTER__DIR=/srv/posters overrides media.poster.dir
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_secret_detection() {
        let weak = JwtConfig {
            secret: "short".to_string(),
        };
        let strong = JwtConfig {
            secret: "k".repeat(RECOMMENDED_SECRET_BYTES),
        };

        assert!(weak.is_secret_weak());
        assert!(!strong.is_secret_weak());
    }

    #[test]
    fn test_deserialize_from_toml_source() {
        let toml = r#"
            [server]
            http_port = 8080

            [jwt]
            secret = "a-very-long-development-secret-value"

            [media]
            cache_control = "max-age=86400"
            default_content_type = "application/octet-stream"

            [media.poster]
            dir = "uploads/posters"
            base_url = "http://localhost:8080/api/resources/posters"
            max_size = 5242880

            [media.avatar]
            dir = "uploads/avatars"
        "#;

        let config: Config = ConfigBuilder::builder()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.media.poster.max_size, 5_242_880);
        assert_eq!(config.media.avatar.dir, PathBuf::from("uploads/avatars"));
    }

    #[test]
    fn test_environment_overrides_files() {
        env::set_var("JWT__SECRET", "secret-from-environment-0123456789abcdef");
        env::set_var("SERVER__HTTP_PORT", "9999");
        env::set_var("MEDIA__POSTER__DIR", "/srv/catalog/posters");

        let config = Config::load();

        env::remove_var("JWT__SECRET");
        env::remove_var("SERVER__HTTP_PORT");
        env::remove_var("MEDIA__POSTER__DIR");

        let config = config.expect("Failed to load configuration");
        assert_eq!(config.jwt.secret, "secret-from-environment-0123456789abcdef");
        assert_eq!(config.server.http_port, 9999);
        assert_eq!(config.media.poster.dir, PathBuf::from("/srv/catalog/posters"));
        assert_eq!(config.media.avatar.dir, PathBuf::from("uploads/avatars"));
    }
}
