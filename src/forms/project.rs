//! Project Form

use super::{non_blank, FieldErrors, Form};
use crate::models::{parse_day, Project, ProjectDraft, ProjectStatus};

/// Edit buffer for creating or editing a project. Dates are held as the
/// `YYYY-MM-DD` strings a date input produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    /// Selected client id
    pub client: String,
    pub status: ProjectStatus,
    pub start_date: String,
    pub end_date: String,
    /// Required on create, optional on edit
    pub description_required: bool,
}

impl ProjectForm {
    pub fn for_create() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            client: String::new(),
            status: ProjectStatus::default(),
            start_date: String::new(),
            end_date: String::new(),
            description_required: true,
        }
    }

    /// Prefilled from a fetched project
    pub fn for_edit(project: &Project) -> Self {
        let day = |d: Option<chrono::NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        Self {
            title: project.title.clone(),
            description: project.description.clone().unwrap_or_default(),
            client: project.client_id().unwrap_or_default().to_string(),
            status: project.status.unwrap_or_default(),
            start_date: day(project.starts_on()),
            end_date: day(project.ends_on()),
            description_required: false,
        }
    }
}

impl Form for ProjectForm {
    type Payload = ProjectDraft;

    fn validate(&self) -> Result<ProjectDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert("title", "Project title is required");
        }
        if self.client.trim().is_empty() {
            errors.insert("client", "Client selection is required");
        }
        if self.description_required && self.description.trim().is_empty() {
            errors.insert("description", "Project description is required");
        }

        let start = non_blank(&self.start_date);
        let end = non_blank(&self.end_date);
        let start_day = start.as_deref().map(parse_day);
        let end_day = end.as_deref().map(parse_day);

        if let Some(None) = start_day {
            errors.insert("start_date", "Please enter a valid date");
        }
        if let Some(None) = end_day {
            errors.insert("end_date", "Please enter a valid date");
        }
        if let (Some(Some(start)), Some(Some(end))) = (start_day, end_day) {
            if end < start {
                errors.insert("end_date", "End date must be after start date");
            }
        }

        errors.into_result(|| ProjectDraft {
            title: self.title.trim().to_string(),
            description: non_blank(&self.description),
            client: self.client.trim().to_string(),
            status: self.status,
            start_date: start,
            end_date: end,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::testing::{client_with, FakeTransport};
    use crate::api::Method;
    use crate::forms::submit;

    fn filled() -> ProjectForm {
        ProjectForm {
            title: "Website".into(),
            description: "Marketing site".into(),
            client: "c1".into(),
            ..ProjectForm::for_create()
        }
    }

    #[test]
    fn test_create_requires_description() {
        let form = ProjectForm { description: " ".into(), ..filled() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("description"), Some("Project description is required"));

        let edit = ProjectForm { description_required: false, ..form };
        assert_eq!(edit.validate().unwrap().description, None);
    }

    #[test]
    fn test_required_fields() {
        let errors = ProjectForm::for_create().validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Project title is required"));
        assert_eq!(errors.get("client"), Some("Client selection is required"));
    }

    #[test]
    fn test_date_order() {
        let backwards = ProjectForm {
            start_date: "2024-05-10".into(),
            end_date: "2024-05-01".into(),
            ..filled()
        };
        assert_eq!(
            backwards.validate().unwrap_err().get("end_date"),
            Some("End date must be after start date")
        );

        let same_day = ProjectForm {
            start_date: "2024-05-10".into(),
            end_date: "2024-05-10".into(),
            ..filled()
        };
        assert!(same_day.validate().is_ok());

        let garbage = ProjectForm { start_date: "soon".into(), ..filled() };
        assert_eq!(garbage.validate().unwrap_err().get("start_date"), Some("Please enter a valid date"));
    }

    #[test]
    fn test_status_defaults_to_not_started() {
        assert_eq!(filled().validate().unwrap().status, ProjectStatus::NotStarted);
    }

    #[test]
    fn test_for_edit_prefills() {
        let project: Project = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Website",
            "status": "on hold",
            "startDate": "2024-05-01T00:00:00.000Z",
            "client": {"_id": "c1", "name": "Acme"}
        }))
        .unwrap();

        let form = ProjectForm::for_edit(&project);
        assert_eq!(form.title, "Website");
        assert_eq!(form.client, "c1");
        assert_eq!(form.status, ProjectStatus::OnHold);
        assert_eq!(form.start_date, "2024-05-01");
        assert_eq!(form.end_date, "");
        assert!(!form.description_required);
    }

    #[tokio::test]
    async fn test_create_omits_empty_dates() {
        let fake = FakeTransport::new();
        fake.respond(Method::Post, "/api/projects", 201, json!({"_id": "p9"}));
        let api = client_with(&fake, Some("tok"));

        let form = filled();
        submit(&form, |draft| {
            let api = api.clone();
            async move { api.create_project(&draft).await }
        })
        .await
        .unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Post);
        assert_eq!(
            calls[0].body,
            Some(json!({
                "title": "Website",
                "description": "Marketing site",
                "client": "c1",
                "status": "not started"
            }))
        );
    }

    #[tokio::test]
    async fn test_missing_title_sends_nothing() {
        let fake = FakeTransport::new();
        let api = client_with(&fake, Some("tok"));

        let form = ProjectForm { title: String::new(), ..filled() };
        let state = submit(&form, |draft| {
            let api = api.clone();
            async move { api.create_project(&draft).await }
        })
        .await
        .unwrap_err();

        assert!(fake.calls().is_empty());
        assert_eq!(state.field_error("title").as_deref(), Some("Project title is required"));
    }

    #[tokio::test]
    async fn test_server_message_kept_inline() {
        let fake = FakeTransport::new();
        fake.respond(Method::Put, "/api/projects/p1", 400, json!({"message": "Client does not exist"}));
        let api = client_with(&fake, Some("tok"));

        let form = filled();
        let state = submit(&form, |draft| {
            let api = api.clone();
            async move { api.update_project("p1", &draft).await }
        })
        .await
        .unwrap_err();

        assert_eq!(state.server_error().as_deref(), Some("Client does not exist"));
    }
}
