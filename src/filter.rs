//! Collection Filters and Aggregates
//!
//! Pure functions over already-fetched collections, recomputed on every
//! render. Inputs are small; nothing is cached.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{Client, Project, ProjectStatus};

/// Case-insensitive substring match against any of `fields`.
/// A blank query matches everything.
pub fn matches_text(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

// ========================
// Clients
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientQuery {
    /// Matched against name, email and company
    pub text: String,
    /// Exact company, `None` for all
    pub company: Option<String>,
}

impl ClientQuery {
    pub fn matches(&self, client: &Client) -> bool {
        let company = client.company_name().unwrap_or("");
        let text_ok = matches_text(&self.text, &[client.name.as_str(), client.email.as_str(), company]);
        let company_ok = self.company.as_deref().map_or(true, |want| want == company);
        text_ok && company_ok
    }
}

pub fn filter_clients(clients: &[Client], query: &ClientQuery) -> Vec<Client> {
    clients.iter().filter(|c| query.matches(c)).cloned().collect()
}

/// Sorted distinct company names, blanks skipped
pub fn distinct_companies(clients: &[Client]) -> Vec<String> {
    clients
        .iter()
        .filter_map(Client::company_name)
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStats {
    pub total: usize,
    pub companies: usize,
    /// Created within the last 30 days
    pub added_this_month: usize,
}

impl ClientStats {
    pub fn of(clients: &[Client], now: DateTime<Utc>) -> Self {
        let month_ago = now - Duration::days(30);
        Self {
            total: clients.len(),
            companies: distinct_companies(clients).len(),
            added_this_month: clients
                .iter()
                .filter_map(Client::created)
                .filter(|created| *created > month_ago)
                .count(),
        }
    }
}

// ========================
// Projects
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectQuery {
    /// Matched against title and client name
    pub text: String,
    /// Exact status, `None` for all
    pub status: Option<ProjectStatus>,
}

impl ProjectQuery {
    pub fn matches(&self, project: &Project) -> bool {
        let client = project.client_name().unwrap_or("");
        let text_ok = matches_text(&self.text, &[project.title.as_str(), client]);
        let status_ok = self.status.map_or(true, |want| project.status == Some(want));
        text_ok && status_ok
    }
}

pub fn filter_projects(projects: &[Project], query: &ProjectQuery) -> Vec<Project> {
    projects.iter().filter(|p| query.matches(p)).cloned().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub on_hold: usize,
}

impl ProjectStats {
    pub fn of(projects: &[Project]) -> Self {
        projects.iter().fold(
            Self { total: projects.len(), ..Self::default() },
            |mut stats, project| {
                match project.status {
                    Some(ProjectStatus::NotStarted) => stats.not_started += 1,
                    Some(ProjectStatus::InProgress) => stats.in_progress += 1,
                    Some(ProjectStatus::Completed) => stats.completed += 1,
                    Some(ProjectStatus::OnHold) => stats.on_hold += 1,
                    None => {}
                }
                stats
            },
        )
    }

    pub fn count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::NotStarted => self.not_started,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::Completed => self.completed,
            ProjectStatus::OnHold => self.on_hold,
        }
    }

    /// Whole percent of projects completed
    pub fn completion_percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }
}

/// Number of projects per client id
pub fn project_counts(projects: &[Project]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for client_id in projects.iter().filter_map(Project::client_id) {
        *counts.entry(client_id.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Projects starting between `today` and `today + within_days`, soonest first
pub fn upcoming_projects(projects: &[Project], today: NaiveDate, within_days: i64, limit: usize) -> Vec<Project> {
    let horizon = today + Duration::days(within_days);
    let mut upcoming: Vec<(NaiveDate, &Project)> = projects
        .iter()
        .filter_map(|p| p.starts_on().map(|day| (day, p)))
        .filter(|(day, _)| *day >= today && *day <= horizon)
        .collect();
    upcoming.sort_by_key(|(day, _)| *day);
    upcoming.into_iter().take(limit).map(|(_, p)| p.clone()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentKind {
    Project,
    Client,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentItem {
    pub kind: RecentKind,
    pub id: String,
    pub title: String,
}

/// Dashboard activity list: first three projects, then first two clients
pub fn recent_items(projects: &[Project], clients: &[Client]) -> Vec<RecentItem> {
    let projects = projects.iter().take(3).map(|p| RecentItem {
        kind: RecentKind::Project,
        id: p.id.clone(),
        title: p.title.clone(),
    });
    let clients = clients.iter().take(2).map(|c| RecentItem {
        kind: RecentKind::Client,
        id: c.id.clone(),
        title: c.name.clone(),
    });
    projects.chain(clients).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn clients() -> Vec<Client> {
        serde_json::from_value(json!([
            {"_id": "c1", "name": "Ada Lovelace", "email": "ada@engines.io", "phone": "1", "company": "Analytical", "createdAt": "2024-03-01T10:00:00Z"},
            {"_id": "c2", "name": "Grace Hopper", "email": "grace@navy.mil", "phone": "2", "company": "Navy", "createdAt": "2023-01-01T10:00:00Z"},
            {"_id": "c3", "name": "Alan Turing", "email": "alan@bletchley.uk", "phone": "3", "company": "analytical"},
            {"_id": "c4", "name": "Edsger", "email": "ewd@utexas.edu", "phone": "4", "company": "  "}
        ]))
        .unwrap()
    }

    fn projects() -> Vec<Project> {
        serde_json::from_value(json!([
            {"_id": "p1", "title": "Engine", "status": "in progress", "startDate": "2024-03-12", "client": {"_id": "c1", "name": "Ada Lovelace"}},
            {"_id": "p2", "name": "Compiler", "status": "completed", "startDate": "2024-03-10", "client": "c2"},
            {"_id": "p3", "title": "Enigma", "status": "on hold", "startDate": "2024-04-01", "client": {"_id": "c1", "name": "Ada Lovelace"}},
            {"_id": "p4", "title": "Notes", "startDate": "2024-03-09"}
        ]))
        .unwrap()
    }

    fn ids<T: crate::models::Entity>(items: &[T]) -> Vec<&str> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let all = clients();
        let query = ClientQuery { text: "ADA".into(), company: None };
        assert_eq!(ids(&filter_clients(&all, &query)), vec!["c1"]);

        let by_email = ClientQuery { text: "Navy.MIL".into(), company: None };
        assert_eq!(ids(&filter_clients(&all, &by_email)), vec!["c2"]);

        let by_company = ClientQuery { text: "analyt".into(), company: None };
        assert_eq!(ids(&filter_clients(&all, &by_company)), vec!["c1", "c3"]);
    }

    #[test]
    fn test_blank_query_matches_all() {
        let all = clients();
        assert_eq!(filter_clients(&all, &ClientQuery { text: "   ".into(), company: None }).len(), 4);
    }

    #[test]
    fn test_company_filter_is_exact() {
        let all = clients();
        let query = ClientQuery { text: String::new(), company: Some("Analytical".into()) };
        assert_eq!(ids(&filter_clients(&all, &query)), vec!["c1"]);
    }

    #[test]
    fn test_client_stats() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
        let stats = ClientStats::of(&clients(), now);
        assert_eq!(stats.total, 4);
        // "Analytical" and "analytical" differ; blank skipped
        assert_eq!(stats.companies, 3);
        assert_eq!(stats.added_this_month, 1);
    }

    #[test]
    fn test_status_filter_is_exact() {
        let all = projects();
        let query = ProjectQuery { text: String::new(), status: Some(ProjectStatus::Completed) };
        assert_eq!(ids(&filter_projects(&all, &query)), vec!["p2"]);

        let none = ProjectQuery { text: String::new(), status: Some(ProjectStatus::NotStarted) };
        assert!(filter_projects(&all, &none).is_empty());
    }

    #[test]
    fn test_project_search_matches_client_name() {
        let all = projects();
        let query = ProjectQuery { text: "lovelace".into(), status: None };
        assert_eq!(ids(&filter_projects(&all, &query)), vec!["p1", "p3"]);

        let combined = ProjectQuery { text: "lovelace".into(), status: Some(ProjectStatus::OnHold) };
        assert_eq!(ids(&filter_projects(&all, &combined)), vec!["p3"]);
    }

    #[test]
    fn test_project_stats() {
        let stats = ProjectStats::of(&projects());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.count(ProjectStatus::InProgress), 1);
        assert_eq!(stats.count(ProjectStatus::Completed), 1);
        assert_eq!(stats.count(ProjectStatus::OnHold), 1);
        assert_eq!(stats.count(ProjectStatus::NotStarted), 0);
        assert_eq!(stats.completion_percent(), 25);
        assert_eq!(ProjectStats::default().completion_percent(), 0);
    }

    #[test]
    fn test_project_counts() {
        let counts = project_counts(&projects());
        assert_eq!(counts.get("c1"), Some(&2));
        assert_eq!(counts.get("c2"), Some(&1));
        assert_eq!(counts.get("c3"), None);
    }

    #[test]
    fn test_upcoming_projects() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let upcoming = upcoming_projects(&projects(), today, 7, 3);
        assert_eq!(ids(&upcoming), vec!["p4", "p2", "p1"]);

        let limited = upcoming_projects(&projects(), today, 7, 1);
        assert_eq!(ids(&limited), vec!["p4"]);
    }

    #[test]
    fn test_recent_items() {
        let recent = recent_items(&projects(), &clients());
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].kind, RecentKind::Project);
        assert_eq!(recent[1].title, "Compiler");
        assert_eq!(recent[3].kind, RecentKind::Client);
        assert_eq!(recent[4].id, "c2");
    }
}
