//! Signed access/refresh tokens (HS256 JWT).
//!
//! Both token kinds carry the same identity, the `(user_name, role)` pair of
//! the user that logged in, and differ only in their `type` claim and lifetime.

use crate::core::config::AuthConfig;
use crate::core::error::TokenError;
use crate::models::user::User;
use crate::utils::time::current_timestamp;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// `(user_name, role)` of the token holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity(pub Option<String>, pub Option<String>);

impl Identity {
    pub fn of(user: &User) -> Self {
        Self(user.user_name.clone(), user.role.clone())
    }

    pub fn user_name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.1.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity pair, JSON-encoded since `sub` must be a string
    #[serde(with = "identity_subject")]
    pub sub: Identity,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub jti: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fresh: Option<bool>,
}

mod identity_subject {
    use super::Identity;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(identity: &Identity, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error;

        let encoded = serde_json::to_string(identity).map_err(S::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Identity, D::Error> {
        use serde::de::Error;

        let encoded = String::deserialize(deserializer)?;
        serde_json::from_str(&encoded).map_err(D::Error::custom)
    }
}

/// Access and refresh token issued together at login
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: i64,
    refresh_ttl: i64,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], access_ttl: i64, refresh_ttl: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.as_bytes(),
            config.access_token_ttl,
            config.refresh_token_ttl,
        )
    }

    pub fn ttl(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    /// Claims for a token of `kind` issued at `issued_at`
    pub fn claims_at(&self, identity: &Identity, kind: TokenKind, issued_at: i64, jti: String) -> Claims {
        Claims {
            sub: identity.clone(),
            iat: issued_at,
            nbf: issued_at,
            exp: issued_at + self.ttl(kind),
            jti,
            kind,
            fresh: match kind {
                TokenKind::Access => Some(false),
                TokenKind::Refresh => None,
            },
        }
    }

    /// Sign `claims`; the same claims always produce the same token
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::Encode)
    }

    /// Issue a token of `kind` valid from now
    pub fn issue(&self, identity: &Identity, kind: TokenKind) -> Result<String, TokenError> {
        let claims = self.claims_at(
            identity,
            kind,
            current_timestamp(),
            Uuid::new_v4().to_string(),
        );
        self.encode(&claims)
    }

    pub fn issue_pair(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.issue(identity, TokenKind::Access)?,
            refresh_token: self.issue(identity, TokenKind::Refresh)?,
        })
    }

    /// Verify signature and lifetime of a token of either kind
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Like [`decode`](Self::decode) but refresh tokens are rejected
    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.decode(token)?;
        if claims.kind != TokenKind::Access {
            return Err(TokenError::WrongType);
        }
        Ok(claims)
    }
}
