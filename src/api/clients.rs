//! Client Endpoints

use super::{segment, Access, ApiClient, ApiError, Method};
use crate::models::{Client, ClientDraft};

impl ApiClient {
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get_list("/api/clients".into(), "Failed to fetch clients").await
    }

    pub async fn get_client(&self, id: &str) -> Result<Client, ApiError> {
        self.get_json(format!("/api/clients/{}", segment(id)), "Failed to fetch client data")
            .await
    }

    pub async fn create_client(&self, draft: &ClientDraft) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/api/clients".into(), draft, Access::Protected, "Failed to save client")
            .await?;
        Ok(())
    }

    pub async fn update_client(&self, id: &str, draft: &ClientDraft) -> Result<(), ApiError> {
        self.send_json(
            Method::Put,
            format!("/api/clients/{}", segment(id)),
            draft,
            Access::Protected,
            "Failed to save client",
        )
        .await?;
        Ok(())
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        self.delete(format!("/api/clients/{}", segment(id)), "Failed to delete client")
            .await
    }
}
