// src/services/approval_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{NotificationRepository, ProductRepository},
    models::{
        notification::RecipientModel,
        product::{ApprovalStatus, Product, ProductWithSeller, SubmitProductPayload},
        seller::Seller,
    },
};

// Fluxo de aprovação de produtos: submissão pelo vendedor, fila de
// moderação, decisão do admin com notificação na mesma transação.
#[derive(Clone)]
pub struct ApprovalService {
    product_repo: ProductRepository,
    notification_repo: NotificationRepository,
}

pub fn approval_message(product_name: &str, status: ApprovalStatus) -> String {
    match status {
        ApprovalStatus::Approved => format!("Your product \"{product_name}\" has been approved."),
        ApprovalStatus::Rejected => format!("Your product \"{product_name}\" has been rejected."),
        ApprovalStatus::Pending => format!("Your product \"{product_name}\" is pending review."),
    }
}

pub fn submission_message(product_name: &str) -> String {
    format!("New product submitted for approval: {product_name}")
}

impl ApprovalService {
    pub fn new(product_repo: ProductRepository, notification_repo: NotificationRepository) -> Self {
        Self { product_repo, notification_repo }
    }

    // ---
    // Moderação (admin)
    // ---

    // `pending` (ou ausência de filtro) também lista registros legados
    // com o status NULL.
    pub async fn list_products(
        &self,
        status: Option<ApprovalStatus>,
    ) -> Result<Vec<ProductWithSeller>, AppError> {
        let rows = self
            .product_repo
            .list_with_seller(self.product_repo.pool(), status)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_product(&self, product_id: Uuid) -> Result<ProductWithSeller, AppError> {
        let row = self
            .product_repo
            .find_with_seller(self.product_repo.pool(), product_id)
            .await?
            .ok_or(AppError::NotFound("Product"))?;
        Ok(row.into())
    }

    pub async fn approve(
        &self,
        product_id: Uuid,
        expected_version: Option<i32>,
    ) -> Result<ProductWithSeller, AppError> {
        self.decide(product_id, ApprovalStatus::Approved, None, expected_version)
            .await
    }

    pub async fn reject(
        &self,
        product_id: Uuid,
        admin_notes: Option<&str>,
        expected_version: Option<i32>,
    ) -> Result<ProductWithSeller, AppError> {
        self.decide(product_id, ApprovalStatus::Rejected, admin_notes, expected_version)
            .await
    }

    // A mudança de status e a notificação do vendedor são UMA escrita
    // atômica: ou as duas entram, ou nenhuma.
    async fn decide(
        &self,
        product_id: Uuid,
        status: ApprovalStatus,
        admin_notes: Option<&str>,
        expected_version: Option<i32>,
    ) -> Result<ProductWithSeller, AppError> {
        let mut tx = self.product_repo.pool().begin().await?;

        let product = self
            .product_repo
            .set_approval_status(&mut *tx, product_id, status, admin_notes, expected_version)
            .await?;

        let product = match product {
            Some(p) => p,
            // O UPDATE não casou: ou o produto não existe, ou a versão
            // enviada está obsoleta.
            None => {
                if self.product_repo.exists(&mut *tx, product_id).await? {
                    return Err(AppError::StaleVersion);
                }
                return Err(AppError::NotFound("Product"));
            }
        };

        self.notification_repo
            .insert(
                &mut *tx,
                product.seller_id,
                RecipientModel::Seller,
                &approval_message(&product.name, status),
                Some(&format!("/seller/products/{}", product.id)),
            )
            .await?;

        let row = self
            .product_repo
            .find_with_seller(&mut *tx, product_id)
            .await?
            .ok_or(AppError::NotFound("Product"))?;

        tx.commit().await?;
        Ok(row.into())
    }

    pub async fn remove(&self, product_id: Uuid) -> Result<(), AppError> {
        let deleted = self
            .product_repo
            .delete(self.product_repo.pool(), product_id)
            .await?;
        if !deleted {
            return Err(AppError::NotFound("Product"));
        }
        Ok(())
    }

    // ---
    // Submissão (vendedor)
    // ---

    // O produto entra como 'pending'; o aviso aos admins sai DEPOIS do
    // commit e nunca derruba a submissão. Zero admins, zero avisos.
    pub async fn submit(
        &self,
        seller: &Seller,
        draft: &SubmitProductPayload,
    ) -> Result<Product, AppError> {
        let product = self
            .product_repo
            .insert(self.product_repo.pool(), seller.id, draft)
            .await?;

        let fan_out = self
            .notification_repo
            .insert_for_admins(
                self.notification_repo.pool(),
                &submission_message(&product.name),
                Some(&format!("/admin/products/{}", product.id)),
            )
            .await;
        if let Err(e) = fan_out {
            tracing::error!(product_id = %product.id, "Falha ao notificar admins da submissão: {e}");
        }

        Ok(product)
    }

    pub async fn list_mine(
        &self,
        seller_id: Uuid,
        only_approved: bool,
    ) -> Result<Vec<Product>, AppError> {
        self.product_repo
            .list_by_seller(self.product_repo.pool(), seller_id, only_approved)
            .await
    }

    pub async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<ProductWithSeller>, AppError> {
        let rows = self
            .product_repo
            .list_by_seller_with_seller(self.product_repo.pool(), seller_id)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    // ---
    // Vitrine pública
    // ---

    pub async fn list_public(
        &self,
        tag: Option<&str>,
        store: Option<&str>,
    ) -> Result<Vec<Product>, AppError> {
        self.product_repo
            .list_public(self.product_repo.pool(), tag, store)
            .await
    }

    // Produto não aprovado é invisível na vitrine: mesmo 404 de inexistente.
    pub async fn get_public(&self, product_id: Uuid) -> Result<Product, AppError> {
        self.product_repo
            .find_public_by_id(self.product_repo.pool(), product_id)
            .await?
            .ok_or(AppError::NotFound("Product"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_messages_name_the_product() {
        assert_eq!(
            approval_message("Caneca", ApprovalStatus::Approved),
            "Your product \"Caneca\" has been approved."
        );
        assert_eq!(
            approval_message("Caneca", ApprovalStatus::Rejected),
            "Your product \"Caneca\" has been rejected."
        );
    }

    #[test]
    fn submission_message_names_the_product() {
        assert_eq!(
            submission_message("Caneca"),
            "New product submitted for approval: Caneca"
        );
    }
}
