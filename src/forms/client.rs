//! Client Form

use super::{is_valid_email, non_blank, FieldErrors, Form};
use crate::models::{Client, ClientDraft};

/// Edit buffer for adding or editing a client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl From<&Client> for ClientForm {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            company: client.company.clone().unwrap_or_default(),
        }
    }
}

impl Form for ClientForm {
    type Payload = ClientDraft;

    fn validate(&self) -> Result<ClientDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Client name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email address is required");
        } else if !is_valid_email(self.email.trim()) {
            errors.insert("email", "Please enter a valid email address");
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        }

        errors.into_result(|| ClientDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company: non_blank(&self.company),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::testing::{client_with, FakeTransport};
    use crate::api::Method;
    use crate::forms::submit;

    fn filled() -> ClientForm {
        ClientForm {
            name: "Ada".into(),
            email: "ada@engines.io".into(),
            phone: "555-0100".into(),
            company: String::new(),
        }
    }

    #[test]
    fn test_required_fields() {
        let errors = ClientForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
        assert_eq!(errors.get("company"), None);
    }

    #[test]
    fn test_company_only_when_present() {
        assert_eq!(filled().validate().unwrap().company, None);

        let with_company = ClientForm { company: " Analytical ".into(), ..filled() };
        assert_eq!(with_company.validate().unwrap().company.as_deref(), Some("Analytical"));
    }

    #[tokio::test]
    async fn test_valid_form_sends_one_create() {
        let fake = FakeTransport::new();
        fake.respond(Method::Post, "/api/clients", 201, json!({"_id": "c9"}));
        let api = client_with(&fake, Some("tok"));

        let form = filled();
        submit(&form, |draft| {
            let api = api.clone();
            async move { api.create_client(&draft).await }
        })
        .await
        .unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Post);
        assert_eq!(
            calls[0].body,
            Some(json!({"name": "Ada", "email": "ada@engines.io", "phone": "555-0100"}))
        );
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let fake: Arc<FakeTransport> = FakeTransport::new();
        let api = client_with(&fake, Some("tok"));

        let form = ClientForm { phone: String::new(), ..filled() };
        let state = submit(&form, |draft| {
            let api = api.clone();
            async move { api.create_client(&draft).await }
        })
        .await
        .unwrap_err();

        assert!(fake.calls().is_empty());
        assert_eq!(state.field_error("phone").as_deref(), Some("Phone number is required"));
    }

    #[tokio::test]
    async fn test_edit_sends_put() {
        let fake = FakeTransport::new();
        fake.respond(Method::Put, "/api/clients/c1", 200, json!({}));
        let api = client_with(&fake, Some("tok"));

        let client: Client = serde_json::from_value(json!({
            "_id": "c1", "name": "Ada", "email": "ada@engines.io", "phone": "1", "company": "Analytical"
        }))
        .unwrap();
        let form = ClientForm { phone: "2".into(), ..ClientForm::from(&client) };

        submit(&form, |draft| {
            let api = api.clone();
            async move { api.update_client("c1", &draft).await }
        })
        .await
        .unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Put);
        assert_eq!(calls[0].body.as_ref().unwrap()["company"], json!("Analytical"));
    }
}
