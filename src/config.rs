use anyhow::Context;
use jsonwebtoken::Algorithm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub assistant: AssistantConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is required")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is required")?,
            algorithm: std::env::var("JWT_ALGORITHM")
                .unwrap_or_else(|_| "HS256".into())
                .parse()
                .map_err(|_| anyhow::anyhow!("JWT_ALGORITHM is not a known algorithm"))?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "budgetbuddy".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "budgetbuddy-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let assistant = AssistantConfig {
            api_key: std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is required")?,
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".into()),
        };
        Ok(Self {
            database_url,
            jwt,
            assistant,
        })
    }
}
