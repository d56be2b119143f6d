// src/types/resume.rs
//! Input resume document, loosely following the JSON Resume field names

use serde::Deserialize;

/// Parsed input document. Every field is optional on the wire; absence
/// deserializes to an empty string or an empty list, never to a null that
/// downstream code has to branch on. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub basics: Basics,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: String,
    /// Job title, called `label` in JSON Resume exports.
    pub label: String,
    pub summary: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkEntry {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    /// Empty means the position is current.
    pub end_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub study_type: String,
    pub area: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub keywords: Vec<String>,
    pub start_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub name: String,
    pub keywords: Vec<String>,
}
