//! JWT issuance and validation (HS256)

use docrepo_domain::error::{Error, Result};
use docrepo_domain::ports::TokenSigner;
use docrepo_domain::value_objects::{AccessToken, Claims};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};

/// HMAC-SHA256 JWT signer
#[derive(Clone)]
pub struct JwtTokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expiration_secs: u64,
}

impl JwtTokenSigner {
    /// Create a signer from a shared secret
    pub fn new(secret: &str, issuer: impl Into<String>, expiration_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            expiration_secs,
        }
    }

    /// Issuer claim set on every token
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Encode arbitrary claims with this signer's key
    pub fn encode_claims(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| Error::internal(format!("Token signing failed: {e}")))
    }
}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

impl TokenSigner for JwtTokenSigner {
    fn sign(&self, subject: &str) -> Result<AccessToken> {
        let claims = Claims::new(
            subject.to_string(),
            self.issuer.clone(),
            now_unix_secs(),
            self.expiration_secs,
        );
        self.encode_claims(&claims).map(AccessToken::new)
    }

    fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Error::authentication(format!("Invalid token: {e}")))
    }
}
