//! Request extractor for the signed-in user.
//!
//! The auth service stores a signed JWT as the `actix-identity` id. Requests
//! without an identity, or with a token that fails verification, are rejected
//! with `401 Unauthorized`.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::domain::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;

/// Verify `token` with the shared `secret` and return its claims.
pub fn decode_token(
    token: &str,
    secret: &str,
) -> Result<AuthenticatedUser, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    decode::<AuthenticatedUser>(token, &key, &Validation::default()).map(|data| data.claims)
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
        log::error!("Server configuration is not registered as app data");
        return Err(ErrorInternalServerError("server misconfigured"));
    };

    let token = req
        .get_identity()
        .and_then(|identity| identity.id())
        .map_err(|_| ErrorUnauthorized("unauthorized"))?;

    decode_token(&token, &config.secret).map_err(|e| {
        log::warn!("Rejected identity token: {e}");
        ErrorUnauthorized("unauthorized")
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    const SECRET: &str = "test-secret-test-secret-test-secret";

    fn claims() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".into(),
            email: "manager@example.com".into(),
            name: "Manager".into(),
            roles: vec!["branch_manager".into()],
            exp: 4_102_444_800,
        }
    }

    fn token(secret: &str) -> String {
        encode(
            &Header::default(),
            &claims(),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn decodes_token_signed_with_shared_secret() {
        let user = decode_token(&token(SECRET), SECRET).unwrap();
        assert_eq!(user, claims());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        assert!(decode_token(&token("another-secret-another-secret"), SECRET).is_err());
    }
}
