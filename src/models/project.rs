use super::{ProjectStatus, ProjectType};

/// Row of the agency-wide project board
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub client_name: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub start_date: String,
    pub deadline: String,
    pub progress: u16,
    pub budget: String,
}

/// Project card shown on a client's detail page
#[derive(Debug, Clone, PartialEq)]
pub struct ClientProject {
    pub id: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub start_date: String,
    pub completed_date: Option<String>,
    pub progress: u16,
    pub budget: String,
    pub description: String,
}
