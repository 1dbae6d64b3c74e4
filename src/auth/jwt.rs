use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::{auth::claims::Claims, auth::repo_types::User, config::JwtConfig, state::AppState};

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl From<&JwtConfig> for JwtKeys {
    fn from(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            ttl: Duration::from_secs(cfg.ttl_seconds.max(0) as u64),
        }
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::from(&state.config.jwt)
    }
}

impl JwtKeys {
    pub fn sign(&self, user: &User) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            subject: user.id,
            username: user.username.clone(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = user.id, "jwt signed");
        Ok(token)
    }

    /// Checks signature and expiry.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        debug!(user_id = data.claims.subject, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str) -> JwtKeys {
        JwtKeys::from(&JwtConfig {
            secret: secret.into(),
            ttl_seconds: 600,
        })
    }

    fn user() -> User {
        User {
            id: 7,
            username: "user1".into(),
            password_hash: "irrelevant".into(),
        }
    }

    #[test]
    fn sign_and_verify_token() {
        let keys = make_keys("dev-secret");
        let token = keys.sign(&user()).expect("sign");
        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.subject, 7);
        assert_eq!(claims.username, "user1");
        assert_eq!(claims.exp - claims.iat, 600);
    }

    #[test]
    fn verify_rejects_other_secret() {
        let token = make_keys("good-secret").sign(&user()).expect("sign");
        assert!(make_keys("bad-secret").verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(make_keys("dev-secret").verify("bad token").is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys("dev-secret");
        let issued = OffsetDateTime::now_utc() - TimeDuration::seconds(1200);
        let claims = Claims {
            subject: 1,
            username: "user1".into(),
            iat: issued.unix_timestamp() as usize,
            exp: (issued + TimeDuration::seconds(600)).unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();
        assert!(keys.verify(&token).is_err());
    }
}
