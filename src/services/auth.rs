// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AdminRepository, SellerRepository, UserRepository},
    models::{
        auth::{Claims, Principal, Role},
        seller::{RegisterSellerPayload, Seller},
    },
};

// Tokens valem 30 dias, como os painéis esperam.
const TOKEN_TTL_SECS: usize = 30 * 24 * 60 * 60;

#[derive(Clone)]
pub struct AuthService {
    admin_repo: AdminRepository,
    seller_repo: SellerRepository,
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(
        admin_repo: AdminRepository,
        seller_repo: SellerRepository,
        user_repo: UserRepository,
        jwt_secret: String,
    ) -> Self {
        Self { admin_repo, seller_repo, user_repo, jwt_secret }
    }

    // O hashing do bcrypt é pesado; roda fora do executor async.
    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {e}"))??;
        Ok(hashed)
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, AppError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        let ok = tokio::task::spawn_blocking(move || verify(&password, &hashed))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação: {e}"))??;
        Ok(ok)
    }

    pub fn create_token(&self, sub: Uuid, role: Role) -> Result<String, AppError> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims { sub, role, iat: now, exp: now + TOKEN_TTL_SECS };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )?;
        Ok(token)
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;
        Ok(data.claims)
    }

    // Resolve o token em um principal concreto, lendo a linha atual no banco.
    // Vendedor bloqueado falha aqui, antes de qualquer handler rodar.
    pub async fn validate_token(&self, token: &str) -> Result<Principal, AppError> {
        let claims = self.decode_token(token)?;

        match claims.role {
            Role::Admin => {
                let admin = self
                    .admin_repo
                    .find_by_id(self.admin_repo.pool(), claims.sub)
                    .await?
                    .ok_or(AppError::InvalidToken)?;
                Ok(Principal::Admin(admin))
            }
            Role::Seller => {
                let seller = self
                    .seller_repo
                    .find_by_id(self.seller_repo.pool(), claims.sub)
                    .await?
                    .ok_or(AppError::InvalidToken)?;
                if seller.is_blocked {
                    return Err(AppError::AccountBlocked);
                }
                Ok(Principal::Seller(Box::new(seller)))
            }
            Role::User => {
                let user = self
                    .user_repo
                    .find_by_id(self.user_repo.pool(), claims.sub)
                    .await?
                    .ok_or(AppError::InvalidToken)?;
                Ok(Principal::User(user))
            }
        }
    }

    // ---
    // Logins
    // ---

    pub async fn login_admin(&self, email: &str, password: &str) -> Result<String, AppError> {
        let admin = self
            .admin_repo
            .find_by_email(self.admin_repo.pool(), email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        if !self.verify_password(password, &admin.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }
        self.create_token(admin.id, Role::Admin)
    }

    pub async fn login_seller(&self, email: &str, password: &str) -> Result<String, AppError> {
        let seller = self
            .seller_repo
            .find_by_email(self.seller_repo.pool(), email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        if !self.verify_password(password, &seller.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }
        if seller.is_blocked {
            return Err(AppError::AccountBlocked);
        }
        self.create_token(seller.id, Role::Seller)
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_email(self.user_repo.pool(), email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        if !self.verify_password(password, &user.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }
        // Carimbo usado pela análise de usuários ativos do painel admin.
        self.user_repo
            .touch_last_login(self.user_repo.pool(), user.id)
            .await?;
        self.create_token(user.id, Role::User)
    }

    // ---
    // Registro de vendedor
    // ---

    pub async fn register_seller(
        &self,
        payload: &RegisterSellerPayload,
    ) -> Result<(Seller, String), AppError> {
        let hashed = self.hash_password(&payload.password).await?;
        let seller = self
            .seller_repo
            .create(
                self.seller_repo.pool(),
                &payload.seller_name,
                &payload.store_name,
                &payload.email,
                &hashed,
                &payload.phone,
                payload.bio.as_deref(),
            )
            .await?;
        let token = self.create_token(seller.id, Role::Seller)?;
        Ok((seller, token))
    }

    // ---
    // Bootstrap do admin inicial
    // ---

    // Roda uma vez na subida do processo, nunca num handler: se as variáveis
    // estiverem definidas e não houver nenhum admin, semeia o primeiro.
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        if self.admin_repo.count(self.admin_repo.pool()).await? > 0 {
            return Ok(false);
        }
        let hashed = self.hash_password(password).await?;
        self.admin_repo.create(self.admin_repo.pool(), email, &hashed).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        // As repos não são tocadas pelos testes de token.
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        AuthService::new(
            AdminRepository::new(pool.clone()),
            SellerRepository::new(pool.clone()),
            UserRepository::new(pool),
            "segredo-de-teste".into(),
        )
    }

    #[tokio::test]
    async fn token_round_trip_preserves_sub_and_role() {
        let svc = service();
        let id = Uuid::new_v4();
        let token = svc.create_token(id, Role::Seller).unwrap();
        let claims = svc.decode_token(&token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, Role::Seller);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn tampered_token_is_rejected() {
        let svc = service();
        let token = svc.create_token(Uuid::new_v4(), Role::Admin).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
        assert!(matches!(svc.decode_token(&tampered), Err(AppError::InvalidToken)));
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let svc = service();
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        let other = AuthService::new(
            AdminRepository::new(pool.clone()),
            SellerRepository::new(pool.clone()),
            UserRepository::new(pool),
            "outro-segredo".into(),
        );
        let token = other.create_token(Uuid::new_v4(), Role::Seller).unwrap();
        assert!(matches!(svc.decode_token(&token), Err(AppError::InvalidToken)));
    }
}
