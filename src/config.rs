use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub log_level: String,
    pub openai: Option<OpenAiConfig>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("ATELIER_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ATELIER_HOST: {e}"))?;

        let port: u16 = env_or("ATELIER_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid ATELIER_PORT: {e}"))?;

        let base_url = env_or("ATELIER_BASE_URL", &format!("http://{host}:{port}"));

        let log_level = env_or("ATELIER_LOG_LEVEL", "info");

        // Content generation is optional; the CRUD surface works without a key.
        let openai = std::env::var("OPENAI_API_KEY")
            .ok()
            .map(|api_key| OpenAiConfig {
                api_key,
                model: env_or("OPENAI_MODEL", "gpt-4-turbo-preview"),
                api_base: env_or("OPENAI_API_BASE", "https://api.openai.com/v1"),
            });

        Ok(Config {
            database_url,
            host,
            port,
            base_url,
            log_level,
            openai,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
