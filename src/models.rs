//! Frontend Models
//!
//! Records exchanged with the REST backend. Read models (`Client`,
//! `Project`, `UserProfile`) are normalized at the API boundary; write
//! models (`ClientDraft`, `ProjectDraft`) carry only what the server accepts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Anything the backend identifies by `_id`
pub trait Entity: Clone {
    fn id(&self) -> &str;
}

/// Remove the entity with `id` from a fetched collection
pub fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}

// ========================
// Clients
// ========================

/// Client record (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Entity for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Client {
    /// Company name, or `None` when missing or blank
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.created_at.as_deref()?)
    }
}

/// Create/update payload for a client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

// ========================
// Projects
// ========================

/// Project lifecycle status (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "not started")]
    NotStarted,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "on hold")]
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "not started",
            ProjectStatus::InProgress => "in progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on hold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "status-not-started",
            ProjectStatus::InProgress => "status-in-progress",
            ProjectStatus::Completed => "status-completed",
            ProjectStatus::OnHold => "status-on-hold",
        }
    }

    /// Lenient parse: case-insensitive, accepts `in-progress` and `in_progress`
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL.into_iter().find(|status| status.as_str() == normalized)
    }
}

/// Client as embedded in a project
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Project record, normalized from `ProjectWire`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ProjectWire")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub client: Option<ClientRef>,
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Project {
    pub fn starts_on(&self) -> Option<NaiveDate> {
        parse_day(self.start_date.as_deref()?)
    }

    pub fn ends_on(&self) -> Option<NaiveDate> {
        parse_day(self.end_date.as_deref()?)
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client.as_ref().map(|c| c.id.as_str())
    }

    pub fn client_name(&self) -> Option<&str> {
        self.client
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|n| !n.is_empty())
    }
}

/// Project as the backend sends it: the display name arrives as `title`
/// from some endpoints and `name` from others, and `client` is either an id
/// or a populated record.
#[derive(Deserialize)]
struct ProjectWire {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(rename = "startDate", default)]
    start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    end_date: Option<String>,
    #[serde(default)]
    client: Option<ClientRefWire>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClientRefWire {
    Id(String),
    Embedded(ClientRef),
}

impl From<ProjectWire> for Project {
    fn from(wire: ProjectWire) -> Self {
        let title = [wire.title, wire.name]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
            .unwrap_or_default();

        let client = wire.client.map(|c| match c {
            ClientRefWire::Id(id) => ClientRef {
                id,
                name: String::new(),
                email: None,
                phone: None,
                company: None,
            },
            ClientRefWire::Embedded(client) => client,
        });

        Project {
            id: wire.id,
            title,
            description: wire.description.filter(|d| !d.trim().is_empty()),
            status: wire.status.as_deref().and_then(ProjectStatus::parse),
            start_date: wire.start_date.filter(|d| !d.is_empty()),
            end_date: wire.end_date.filter(|d| !d.is_empty()),
            client,
        }
    }
}

/// Create/update payload for a project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Client id
    pub client: String,
    pub status: ProjectStatus,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

// ========================
// Auth
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Up to two initials, `"Ada Lovelace"` -> `"AL"`
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn member_since(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.created_at.as_deref()?)
    }
}

// ========================
// Dates
// ========================

/// Calendar day from `YYYY-MM-DD` or a full ISO timestamp
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let day = s.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// `Mar 9, 2024`, or "Not set" when missing or unparseable
pub fn format_day(day: Option<NaiveDate>) -> String {
    day.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Not set".to_string())
}

/// Inclusive length of a schedule, e.g. `1 day` when start and end match.
/// "Not scheduled" when a bound is missing or the end precedes the start.
pub fn schedule_length(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) if end >= start => {
            let days = (end - start).num_days() + 1;
            format!("{} day{}", days, if days == 1 { "" } else { "s" })
        }
        _ => "Not scheduled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_name_normalizes_to_title() {
        let from_name: Project = serde_json::from_value(json!({"_id": "p1", "name": "Website"})).unwrap();
        let from_title: Project = serde_json::from_value(json!({"_id": "p2", "title": "Website"})).unwrap();
        assert_eq!(from_name.title, "Website");
        assert_eq!(from_title.title, "Website");
    }

    #[test]
    fn test_project_title_wins_over_name() {
        let project: Project =
            serde_json::from_value(json!({"_id": "p1", "title": "Real", "name": "Alias"})).unwrap();
        assert_eq!(project.title, "Real");
    }

    #[test]
    fn test_project_client_as_id_or_object() {
        let bare: Project = serde_json::from_value(json!({"_id": "p1", "title": "A", "client": "c1"})).unwrap();
        assert_eq!(bare.client_id(), Some("c1"));
        assert_eq!(bare.client_name(), None);

        let embedded: Project = serde_json::from_value(json!({
            "_id": "p2",
            "title": "B",
            "client": {"_id": "c2", "name": "Acme", "email": "ops@acme.io"}
        }))
        .unwrap();
        assert_eq!(embedded.client_id(), Some("c2"));
        assert_eq!(embedded.client_name(), Some("Acme"));
    }

    #[test]
    fn test_project_status_wire_values() {
        let project: Project =
            serde_json::from_value(json!({"_id": "p1", "title": "A", "status": "In Progress"})).unwrap();
        assert_eq!(project.status, Some(ProjectStatus::InProgress));

        let unknown: Project =
            serde_json::from_value(json!({"_id": "p1", "title": "A", "status": "archived"})).unwrap();
        assert_eq!(unknown.status, None);

        assert_eq!(serde_json::to_value(ProjectStatus::OnHold).unwrap(), json!("on hold"));
        assert_eq!(ProjectStatus::parse("not-started"), Some(ProjectStatus::NotStarted));
    }

    #[test]
    fn test_project_dates() {
        let project: Project = serde_json::from_value(json!({
            "_id": "p1",
            "title": "A",
            "startDate": "2024-05-01T00:00:00.000Z",
            "endDate": ""
        }))
        .unwrap();
        assert_eq!(project.starts_on(), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(project.end_date, None);
        assert_eq!(format_day(project.starts_on()), "May 1, 2024");
        assert_eq!(format_day(None), "Not set");
    }

    #[test]
    fn test_client_draft_omits_empty_company() {
        let draft = ClientDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "555".into(),
            company: None,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, json!({"name": "Ada", "email": "ada@example.com", "phone": "555"}));
    }

    #[test]
    fn test_remove_by_id() {
        let mut clients: Vec<Client> = serde_json::from_value(json!([
            {"_id": "c1", "name": "A", "email": "a@x.io"},
            {"_id": "c2", "name": "B", "email": "b@x.io"}
        ]))
        .unwrap();
        remove_by_id(&mut clients, "c1");
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, "c2");
    }

    #[test]
    fn test_initials() {
        let user: UserProfile = serde_json::from_value(json!({"name": "ada king lovelace"})).unwrap();
        assert_eq!(user.initials(), "AK");
    }

    #[test]
    fn test_schedule_length_counts_both_ends() {
        let day = |d: &str| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok();
        assert_eq!(schedule_length(day("2024-03-01"), day("2024-03-01")), "1 day");
        assert_eq!(schedule_length(day("2024-03-01"), day("2024-03-10")), "10 days");
        assert_eq!(schedule_length(day("2024-03-01"), None), "Not scheduled");
    }

    #[test]
    fn test_schedule_length_end_before_start() {
        let day = |d: &str| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok();
        assert_eq!(schedule_length(day("2024-03-10"), day("2024-03-01")), "Not scheduled");
    }
}
