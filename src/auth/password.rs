use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;
use tracing::error;

use crate::config::{HashConfig, MAX_HASH_ROUNDS};

fn hasher(cfg: &HashConfig) -> anyhow::Result<Argon2<'static>> {
    if cfg.rounds > MAX_HASH_ROUNDS {
        anyhow::bail!("refusing to hash with {} rounds", cfg.rounds);
    }
    let params = Params::new(
        Params::DEFAULT_M_COST,
        cfg.rounds,
        Params::DEFAULT_P_COST,
        None,
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

pub fn hash_password(plain: &str, cfg: &HashConfig) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher(cfg)?
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// Parameters are read back from the PHC string, so hashes made under an older
/// round count still verify.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(plain: String, cfg: HashConfig) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&plain, &cfg)).await?
}

/// [`verify_password`] on the blocking pool.
pub async fn verify_password_blocking(plain: String, hash: String) -> anyhow::Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&plain, &hash)).await?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> HashConfig {
        HashConfig { rounds: 1 }
    }

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password, &cfg()).expect("hashing should succeed");
        assert_ne!(hash, password);
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password, &cfg()).expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("12345678", &cfg()).unwrap();
        let b = hash_password("12345678", &cfg()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn hash_records_configured_rounds() {
        let hash = hash_password("12345678", &HashConfig { rounds: 3 }).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("t=3"));
    }

    #[test]
    fn refuses_rounds_above_ceiling() {
        let err = hash_password("12345678", &HashConfig { rounds: 9 }).unwrap_err();
        assert!(err.to_string().contains("9 rounds"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn blocking_wrappers_agree() {
        let hash = hash_password_blocking("pw".into(), cfg()).await.unwrap();
        assert!(verify_password_blocking("pw".into(), hash).await.unwrap());
    }
}
