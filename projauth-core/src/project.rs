//! Scanned project registry
//!
//! Projects are added by scanning a QR/barcode payload of the form
//! `<appid>_<user_id>_<unique_id>`. The list lives in the key-value store
//! under [`PROJECTS_KEY`] as a JSON array. A store that has never held the
//! key starts out with two sample projects.

use crate::error::{ProjauthError, ProjectError, StoreError};
use crate::store::KeyValueStore;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Key holding the JSON-encoded project list
pub const PROJECTS_KEY: &str = "projects";

/// Contact address recorded for scanned projects
pub const SCANNED_PROJECT_EMAIL: &str = "project@example.com";

/// A project the user has scanned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub appid: String,
    pub user_id: String,
    pub unique_id: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    pub email: String,
    #[serde(rename = "scannedAt")]
    pub scanned_at: DateTime<Utc>,
}

impl Project {
    /// Build a project from a scanned payload
    ///
    /// Payloads without three non-empty `_`-separated parts are kept whole
    /// in `appid`. The project is named after the last four characters.
    pub fn from_payload(payload: &str, scanned_at: DateTime<Utc>) -> Self {
        let (appid, user_id, unique_id) = split_payload(payload);
        let tail_start = payload.chars().count().saturating_sub(4);
        let tail: String = payload.chars().skip(tail_start).collect();

        Self {
            id: payload.to_string(),
            appid,
            user_id,
            unique_id,
            project_name: format!("Project {}", tail),
            email: SCANNED_PROJECT_EMAIL.to_string(),
            scanned_at,
        }
    }

    /// The project code, `<appid>_<user_id>_<unique_id>`
    pub fn code(&self) -> String {
        if self.user_id.is_empty() && self.unique_id.is_empty() {
            self.appid.clone()
        } else {
            format!("{}_{}_{}", self.appid, self.user_id, self.unique_id)
        }
    }
}

fn split_payload(payload: &str) -> (String, String, String) {
    let mut parts = payload.splitn(3, '_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(appid), Some(user_id), Some(unique_id))
            if !appid.is_empty() && !user_id.is_empty() && !unique_id.is_empty() =>
        {
            (appid.to_string(), user_id.to_string(), unique_id.to_string())
        }
        _ => (payload.to_string(), String::new(), String::new()),
    }
}

/// Projects shown before anything has been scanned
pub fn sample_projects() -> Vec<Project> {
    let sample = |id: &str, code: &str, name: &str, email: &str, at: DateTime<Utc>| {
        let (appid, user_id, unique_id) = split_payload(code);
        Project {
            id: id.to_string(),
            appid,
            user_id,
            unique_id,
            project_name: name.to_string(),
            email: email.to_string(),
            scanned_at: at,
        }
    };

    vec![
        sample(
            "1",
            "app123_user456_unique789",
            "Project Alpha",
            "alpha@example.com",
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).single().unwrap_or_default(),
        ),
        sample(
            "2",
            "app456_user789_unique123",
            "Project Beta",
            "beta@example.com",
            Utc.with_ymd_and_hms(2024, 1, 14, 15, 45, 0).single().unwrap_or_default(),
        ),
    ]
}

/// Project list over a key-value store
#[derive(Debug)]
pub struct ProjectRegistry<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProjectRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All projects, most recently scanned first
    pub fn list(&self) -> Result<Vec<Project>, ProjauthError> {
        self.load()
    }

    /// Look up a project by id
    pub fn get(&self, id: &str) -> Result<Project, ProjauthError> {
        self.load()?
            .into_iter()
            .find(|project| project.id == id)
            .ok_or_else(|| ProjauthError::from(ProjectError::NotFound { id: id.to_string() }))
    }

    /// Record a scanned payload as a new project
    #[instrument(skip(self, payload))]
    pub fn add_scanned(&mut self, payload: &str) -> Result<Project, ProjauthError> {
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(ProjectError::EmptyPayload.into());
        }

        let mut projects = self.load()?;
        if projects.iter().any(|project| project.id == payload) {
            return Err(ProjectError::AlreadyExists {
                id: payload.to_string(),
            }
            .into());
        }

        let project = Project::from_payload(payload, Utc::now());
        projects.insert(0, project.clone());
        self.save(&projects)?;

        info!(name = %project.project_name, "Project added");
        Ok(project)
    }

    /// Delete a project, returning what was removed
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> Result<Project, ProjauthError> {
        let mut projects = self.load()?;
        let index = projects
            .iter()
            .position(|project| project.id == id)
            .ok_or_else(|| ProjauthError::from(ProjectError::NotFound { id: id.to_string() }))?;

        let removed = projects.remove(index);
        self.save(&projects)?;

        info!(name = %removed.project_name, "Project removed");
        Ok(removed)
    }

    fn load(&self) -> Result<Vec<Project>, ProjauthError> {
        match self.store.get_item(PROJECTS_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                ProjauthError::from(StoreError::Corrupt {
                    message: e.to_string(),
                })
            }),
            None => {
                debug!("No stored projects, using samples");
                Ok(sample_projects())
            }
        }
    }

    fn save(&mut self, projects: &[Project]) -> Result<(), ProjauthError> {
        let json = serde_json::to_string(projects).map_err(|e| StoreError::Corrupt {
            message: e.to_string(),
        })?;
        self.store.set_item(PROJECTS_KEY, &json)
    }
}
