// src/services/contact_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ContactRepository, NotificationRepository, SellerRepository},
    models::{
        contact::{ContactMessage, CreateContactPayload, RespondContactPayload},
        notification::RecipientModel,
    },
};

pub fn seller_inquiry_message(store_name: &str, subject: &str) -> String {
    format!("Seller \"{store_name}\" sent a message: {subject}")
}

pub fn response_message(subject: &str) -> String {
    format!("Your support request \"{subject}\" has received a response.")
}

#[derive(Clone)]
pub struct ContactService {
    contact_repo: ContactRepository,
    seller_repo: SellerRepository,
    notification_repo: NotificationRepository,
}

impl ContactService {
    pub fn new(
        contact_repo: ContactRepository,
        seller_repo: SellerRepository,
        notification_repo: NotificationRepository,
    ) -> Self {
        Self { contact_repo, seller_repo, notification_repo }
    }

    // Grava a mensagem e, SÓ quando ela vem de um vendedor que resolve no
    // banco, avisa os admins. O aviso sai depois do commit e nunca derruba
    // a criação. `isFromSeller` falso nunca notifica, mesmo com sellerId.
    pub async fn create(&self, payload: &CreateContactPayload) -> Result<ContactMessage, AppError> {
        let message = self
            .contact_repo
            .insert(self.contact_repo.pool(), payload)
            .await?;

        if message.is_from_seller {
            if let Some(seller_id) = message.seller_id {
                self.notify_admins_of_inquiry(seller_id, &message).await;
            }
        }

        Ok(message)
    }

    async fn notify_admins_of_inquiry(&self, seller_id: Uuid, message: &ContactMessage) {
        let seller = match self
            .seller_repo
            .find_by_id(self.seller_repo.pool(), seller_id)
            .await
        {
            Ok(Some(seller)) => seller,
            // Referência que não resolve: mensagem fica, aviso não sai.
            Ok(None) => return,
            Err(e) => {
                tracing::error!(contact_id = %message.id, "Falha ao resolver vendedor da mensagem: {e}");
                return;
            }
        };

        let fan_out = self
            .notification_repo
            .insert_for_admins(
                self.notification_repo.pool(),
                &seller_inquiry_message(&seller.store_name, &message.subject),
                Some("/admin/support"),
            )
            .await;
        if let Err(e) = fan_out {
            tracing::error!(contact_id = %message.id, "Falha ao notificar admins do contato: {e}");
        }
    }

    pub async fn list(&self, email: Option<&str>) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list(self.contact_repo.pool(), email).await
    }

    // Resposta do admin: atualização e notificação do vendedor na mesma
    // transação. Resposta vazia muda o status sem notificar.
    pub async fn respond(
        &self,
        id: Uuid,
        payload: &RespondContactPayload,
    ) -> Result<ContactMessage, AppError> {
        let mut tx = self.contact_repo.pool().begin().await?;

        let message = self
            .contact_repo
            .update_response(&mut *tx, id, &payload.response, payload.status)
            .await?
            .ok_or(AppError::NotFound("Contact message"))?;

        if message.is_from_seller && !payload.response.trim().is_empty() {
            if let Some(seller_id) = message.seller_id {
                self.notification_repo
                    .insert(
                        &mut *tx,
                        seller_id,
                        RecipientModel::Seller,
                        &response_message(&message.subject),
                        Some("/seller/support"),
                    )
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(message)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.contact_repo.delete(self.contact_repo.pool(), id).await?;
        if !deleted {
            return Err(AppError::NotFound("Contact message"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::ContactStatus;

    #[test]
    fn inquiry_message_names_store_and_subject() {
        assert_eq!(
            seller_inquiry_message("Loja da Ana", "Pagamento"),
            "Seller \"Loja da Ana\" sent a message: Pagamento"
        );
    }

    #[test]
    fn response_message_names_the_subject() {
        assert_eq!(
            response_message("Pagamento"),
            "Your support request \"Pagamento\" has received a response."
        );
    }

    #[test]
    fn status_transitions_serialize_for_the_panel() {
        let statuses = [ContactStatus::Pending, ContactStatus::InProgress, ContactStatus::Resolved];
        let rendered: Vec<String> = statuses
            .iter()
            .map(|s| serde_json::to_string(s).unwrap())
            .collect();
        assert_eq!(rendered, ["\"Pending\"", "\"In Progress\"", "\"Resolved\""]);
    }
}
