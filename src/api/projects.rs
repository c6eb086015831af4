//! Project Endpoints

use super::{segment, Access, ApiClient, ApiError, Method};
use crate::models::{Project, ProjectDraft};

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_list("/api/projects".into(), "Failed to fetch projects").await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        self.get_json(format!("/api/projects/{}", segment(id)), "Failed to fetch project")
            .await
    }

    /// Projects belonging to one client
    pub async fn list_client_projects(&self, client_id: &str) -> Result<Vec<Project>, ApiError> {
        self.get_list(
            format!("/api/projects/client/{}", segment(client_id)),
            "Failed to fetch projects",
        )
        .await
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/api/projects".into(), draft, Access::Protected, "Error creating project")
            .await?;
        Ok(())
    }

    pub async fn update_project(&self, id: &str, draft: &ProjectDraft) -> Result<(), ApiError> {
        self.send_json(
            Method::Put,
            format!("/api/projects/{}", segment(id)),
            draft,
            Access::Protected,
            "Error updating project",
        )
        .await?;
        Ok(())
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        self.delete(format!("/api/projects/{}", segment(id)), "Failed to delete project")
            .await
    }
}
