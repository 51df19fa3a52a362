// src/services/seller_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::SellerRepository,
    models::seller::{Seller, SellerOverview, UpdateSellerProfilePayload},
};

// Administração de vendedores (painel admin) e perfil do próprio vendedor.
// Toda leitura administrativa usa a projeção sem credenciais/dados bancários.
#[derive(Clone)]
pub struct SellerService {
    seller_repo: SellerRepository,
}

impl SellerService {
    pub fn new(seller_repo: SellerRepository) -> Self {
        Self { seller_repo }
    }

    pub async fn list(&self) -> Result<Vec<SellerOverview>, AppError> {
        self.seller_repo.list_overviews(self.seller_repo.pool()).await
    }

    pub async fn get(&self, seller_id: Uuid) -> Result<SellerOverview, AppError> {
        self.seller_repo
            .overview_by_id(self.seller_repo.pool(), seller_id)
            .await?
            .ok_or(AppError::NotFound("Seller"))
    }

    pub async fn set_blocked(
        &self,
        seller_id: Uuid,
        is_blocked: bool,
    ) -> Result<SellerOverview, AppError> {
        self.seller_repo
            .set_blocked(self.seller_repo.pool(), seller_id, is_blocked)
            .await?
            .ok_or(AppError::NotFound("Seller"))
    }

    // Apaga o vendedor; produtos e itens de pedido associados caem em
    // cascata pelo schema.
    pub async fn remove(&self, seller_id: Uuid) -> Result<(), AppError> {
        let deleted = self
            .seller_repo
            .delete(self.seller_repo.pool(), seller_id)
            .await?;
        if !deleted {
            return Err(AppError::NotFound("Seller"));
        }
        Ok(())
    }

    pub async fn update_profile(
        &self,
        seller_id: Uuid,
        update: &UpdateSellerProfilePayload,
    ) -> Result<Seller, AppError> {
        self.seller_repo
            .update_profile(self.seller_repo.pool(), seller_id, update)
            .await?
            .ok_or(AppError::NotFound("Seller"))
    }
}
