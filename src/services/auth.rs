use crate::config::{Config, PasswordCost};
use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::session::{Claims, SessionInfo};
use crate::models::user::UserRecord;
use crate::repositories::user as user_repo;
use crate::validation::auth::{LoginRequest, RegisterRequest};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder,
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

/// The token type reported to clients.
pub const TOKEN_TYPE: &str = "Bearer";

/// Hashes a password using Argon2id.
///
/// # Arguments
///
/// * `password` - The password to hash.
/// * `cost` - The Argon2 cost parameters.
///
/// # Returns
///
/// A `Result` containing the PHC-encoded hash.
pub fn hash_password(password: &str, cost: PasswordCost) -> Result<String> {
    let mut password_bytes = password.as_bytes().to_vec();

    let mut salt_bytes = [0u8; 16];
    OsRng.fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::PasswordHash(format!("Salt encoding error: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        ParamsBuilder::new()
            .m_cost(cost.memory_kib)
            .t_cost(cost.iterations)
            .p_cost(cost.parallelism)
            .build()
            .map_err(|e| AppError::PasswordHash(format!("Argon2 params: {}", e)))?,
    );

    let password_hash = argon2
        .hash_password(&password_bytes, &salt)
        .map_err(|e| AppError::PasswordHash(format!("Argon2 hash error: {}", e)))?
        .to_string();

    password_bytes.zeroize();
    tracing::debug!("Password hashed successfully with Argon2");
    Ok(password_hash)
}

/// Verifies a password against a hash. The cost is read from the hash itself.
///
/// # Returns
///
/// A `Result` containing `true` if the password is valid, `false` otherwise.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let mut password_bytes = password.as_bytes().to_vec();
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::PasswordHash(format!("Hash parse error: {}", e)))?;
    let result = Argon2::default()
        .verify_password(&password_bytes, &parsed_hash)
        .is_ok();

    password_bytes.zeroize();
    Ok(result)
}

/// Signs a bearer token for `user`.
pub fn issue_token(config: &Config, user: &UserRecord) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.email.clone(),
        uid: user.id,
        iat: now.timestamp(),
        exp: (now + chrono::Duration::hours(config.jwt_expiration_hours)).timestamp(),
    };
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(&config.jwt_secret),
    )
    .map_err(AppError::TokenEncoding)?;
    Ok(token)
}

/// Checks a bearer token's signature and expiry.
pub fn decode_token(config: &Config, token: &str) -> Result<Claims> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(&config.jwt_secret),
        &Validation::new(Algorithm::HS512),
    )?;
    Ok(data.claims)
}

/// Creates a new non-admin account.
///
/// # Returns
///
/// A `Result` containing the created `UserRecord`, or `BadRequest` when the
/// email is already registered.
pub async fn register(store: &Store, config: &Config, request: &RegisterRequest) -> Result<UserRecord> {
    tracing::debug!("🔐 Creating user: {}", request.email);

    if user_repo::find_by_email(store, &request.email).await?.is_some() {
        return Err(AppError::email_taken());
    }

    let hashed_password = hash_password(&request.password, config.password_cost)?;
    let user = user_repo::create_user(
        store,
        &request.email,
        &request.first_name,
        &request.last_name,
        &hashed_password,
        false,
    )
    .await?;

    tracing::info!("✅ User created with ID: {}", user.id);
    Ok(user)
}

/// Authenticates a user and issues their session information.
///
/// Unknown emails and wrong passwords fail identically.
pub async fn login(store: &Store, config: &Config, request: &LoginRequest) -> Result<SessionInfo> {
    tracing::debug!("🔐 Authenticating user: {}", request.email);

    let user = user_repo::find_by_email(store, &request.email)
        .await?
        .ok_or_else(|| AppError::Authentication("Bad credentials".to_string()))?;

    if !verify_password(&request.password, &user.password)? {
        return Err(AppError::Authentication("Bad credentials".to_string()));
    }

    let token = issue_token(config, &user)?;
    tracing::info!("✅ User authenticated: {}", user.id);

    Ok(SessionInfo {
        token,
        token_type: TOKEN_TYPE.to_string(),
        id: user.id,
        username: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        admin: user.admin,
    })
}

/// Ensures an account exists for `email`, creating it with `admin` rights if absent.
pub async fn ensure_user(
    store: &Store,
    config: &Config,
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
    admin: bool,
) -> Result<UserRecord> {
    if let Some(existing) = user_repo::find_by_email(store, email).await? {
        return Ok(existing);
    }
    let hashed_password = hash_password(password, config.password_cost)?;
    user_repo::create_user(store, email, first_name, last_name, &hashed_password, admin).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    fn cheap_config() -> Config {
        Config {
            database_url: None,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            jwt_secret: Zeroizing::new(vec![7u8; 32]),
            jwt_expiration_hours: 1,
            password_cost: PasswordCost { memory_kib: 1024, iterations: 1, parallelism: 1 },
            seed_demo_data: false,
            cors_origins: Vec::new(),
        }
    }

    #[test]
    fn hash_then_verify() {
        let cost = cheap_config().password_cost;
        let hash = hash_password("test!1234", cost).unwrap();
        assert_ne!(hash, "test!1234");
        assert!(verify_password("test!1234", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn token_carries_user_identity() {
        let config = cheap_config();
        let now = Utc::now();
        let user = UserRecord {
            id: 42,
            email: "yoga@studio.com".to_string(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            password: String::new(),
            admin: true,
            created_at: now,
            updated_at: now,
        };
        let token = issue_token(&config, &user).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = decode_token(&config, &token).unwrap();
        assert_eq!(claims.uid, 42);
        assert_eq!(claims.sub, "yoga@studio.com");
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let config = cheap_config();
        let mut other = cheap_config();
        other.jwt_secret = Zeroizing::new(vec![9u8; 32]);
        let now = Utc::now();
        let user = UserRecord {
            id: 1,
            email: "a@b.c".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            password: String::new(),
            admin: false,
            created_at: now,
            updated_at: now,
        };
        let token = issue_token(&other, &user).unwrap();
        assert!(decode_token(&config, &token).is_err());
    }
}
