// src/services/notification_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::NotificationRepository,
    models::{auth::Principal, notification::Notification},
};

// Caixa de notificações. Notificações nascem como efeito colateral dos
// outros fluxos; aqui ficam as leituras e a posse (quem pode marcar/apagar).
#[derive(Clone)]
pub struct NotificationService {
    notification_repo: NotificationRepository,
}

impl NotificationService {
    pub fn new(notification_repo: NotificationRepository) -> Self {
        Self { notification_repo }
    }

    pub async fn list_for(&self, principal: &Principal) -> Result<Vec<Notification>, AppError> {
        let (recipient, model) = principal.recipient();
        self.notification_repo
            .list_for(self.notification_repo.pool(), recipient, model)
            .await
    }

    // Marca como lida. Só o destinatário pode; re-marcar é inócuo.
    pub async fn mark_read(
        &self,
        id: Uuid,
        principal: &Principal,
    ) -> Result<Notification, AppError> {
        let notification = self
            .notification_repo
            .find_by_id(self.notification_repo.pool(), id)
            .await?
            .ok_or(AppError::NotFound("Notification"))?;
        self.check_ownership(&notification, principal)?;

        self.notification_repo
            .mark_read(self.notification_repo.pool(), id)
            .await
    }

    pub async fn mark_all_read(&self, principal: &Principal) -> Result<u64, AppError> {
        let (recipient, model) = principal.recipient();
        self.notification_repo
            .mark_all_read(self.notification_repo.pool(), recipient, model)
            .await
    }

    pub async fn remove(&self, id: Uuid, principal: &Principal) -> Result<(), AppError> {
        let notification = self
            .notification_repo
            .find_by_id(self.notification_repo.pool(), id)
            .await?
            .ok_or(AppError::NotFound("Notification"))?;
        self.check_ownership(&notification, principal)?;

        self.notification_repo
            .delete(self.notification_repo.pool(), id)
            .await?;
        Ok(())
    }

    // A posse exige o PAR (id, tipo): um vendedor e um admin com o mesmo
    // UUID não se enxergam.
    fn check_ownership(
        &self,
        notification: &Notification,
        principal: &Principal,
    ) -> Result<(), AppError> {
        let (recipient, model) = principal.recipient();
        if notification.recipient != recipient || notification.recipient_model != model {
            return Err(AppError::Forbidden);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{auth::Admin, notification::RecipientModel};
    use chrono::Utc;

    fn service() -> NotificationService {
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        NotificationService::new(NotificationRepository::new(pool))
    }

    fn admin_principal(id: Uuid) -> Principal {
        Principal::Admin(Admin {
            id,
            email: "admin@example.com".into(),
            password_hash: "x".into(),
            created_at: Utc::now(),
        })
    }

    fn notification_for(recipient: Uuid, model: RecipientModel) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            recipient,
            recipient_model: model,
            message: "m".into(),
            link: None,
            read: false,
            created_at: Utc::now(),
        }
    }

    // connect_lazy exige um runtime do Tokio mesmo sem tocar o banco.
    #[tokio::test]
    async fn ownership_requires_matching_recipient() {
        let svc = service();
        let id = Uuid::new_v4();
        let principal = admin_principal(id);

        let mine = notification_for(id, RecipientModel::Admin);
        assert!(svc.check_ownership(&mine, &principal).is_ok());

        let someone_elses = notification_for(Uuid::new_v4(), RecipientModel::Admin);
        assert!(matches!(
            svc.check_ownership(&someone_elses, &principal),
            Err(AppError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn ownership_requires_matching_recipient_model() {
        let svc = service();
        let id = Uuid::new_v4();
        let principal = admin_principal(id);

        // Mesmo UUID, tipo diferente: não é o dono.
        let same_id_wrong_model = notification_for(id, RecipientModel::Seller);
        assert!(matches!(
            svc.check_ownership(&same_id_wrong_model, &principal),
            Err(AppError::Forbidden)
        ));
    }
}
