use anyhow::Context;
use serde::Deserialize;

/// Argon2 iteration count ceiling. Anything above this is refused at startup.
pub const MAX_HASH_ROUNDS: u32 = 8;

pub const DEFAULT_TTL_SECONDS: i64 = 600;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl JwtConfig {
    pub fn new(secret: String, ttl_seconds: i64) -> anyhow::Result<Self> {
        if ttl_seconds <= 0 {
            anyhow::bail!("JWT_TTL_SECONDS must be positive, got {ttl_seconds}");
        }
        Ok(Self {
            secret,
            ttl_seconds,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashConfig {
    pub rounds: u32,
}

impl HashConfig {
    pub fn new(rounds: u32) -> anyhow::Result<Self> {
        if rounds == 0 || rounds > MAX_HASH_ROUNDS {
            anyhow::bail!("HASH_ROUNDS must be between 1 and {MAX_HASH_ROUNDS}, got {rounds}");
        }
        Ok(Self { rounds })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub hash: HashConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let ttl_seconds = match std::env::var("JWT_TTL_SECONDS") {
            Ok(v) => v
                .parse::<i64>()
                .with_context(|| format!("JWT_TTL_SECONDS is not a number: {v}"))?,
            Err(_) => DEFAULT_TTL_SECONDS,
        };
        let jwt = JwtConfig::new(
            std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            ttl_seconds,
        )?;
        let rounds = match std::env::var("HASH_ROUNDS") {
            Ok(v) => v
                .parse::<u32>()
                .with_context(|| format!("HASH_ROUNDS is not a number: {v}"))?,
            Err(_) => MAX_HASH_ROUNDS,
        };
        let hash = HashConfig::new(rounds)?;
        Ok(Self {
            database_url,
            jwt,
            hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_rounds_within_ceiling_are_accepted() {
        assert_eq!(HashConfig::new(1).unwrap().rounds, 1);
        assert_eq!(HashConfig::new(MAX_HASH_ROUNDS).unwrap().rounds, 8);
    }

    #[test]
    fn token_ttl_must_be_positive() {
        assert_eq!(JwtConfig::new("s".into(), 600).unwrap().ttl_seconds, 600);
        for ttl in [0, -1, -600] {
            let err = JwtConfig::new("s".into(), ttl).unwrap_err();
            assert!(err.to_string().contains("JWT_TTL_SECONDS"));
        }
    }

    #[test]
    fn hash_rounds_above_ceiling_are_rejected() {
        let err = HashConfig::new(9).unwrap_err();
        assert!(err.to_string().contains("HASH_ROUNDS"));
        assert!(HashConfig::new(0).is_err());
    }
}
