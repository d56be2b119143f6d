// src/types/context.rs
//! Flat, template-ready mapping handed to the markup renderer

use serde::Serialize;

/// Everything the template can reference, built once per render and
/// discarded afterwards. Scalars are always present (empty string when the
/// input had nothing), lists are always present (possibly empty).
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub experience: Vec<ExperienceRecord>,
    pub education: Vec<EducationRecord>,
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceRecord {
    pub company: String,
    pub position: String,
    pub location: String,
    /// Pre-joined range, e.g. `"2020 - Present"`.
    pub date: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationRecord {
    pub institution: String,
    /// Study type and area joined, e.g. `"BSc Computer Science"`.
    pub degree: String,
    pub location: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    pub name: String,
    /// Comma-joined keyword list, e.g. `"Rust, LaTeX"`.
    pub technologies: String,
    pub date: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillRecord {
    pub name: String,
    pub keywords: String,
}
