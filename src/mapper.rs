// src/mapper.rs
//! Field mapper: resume document -> flat template context
//!
//! Pure and total. Whatever the input document is missing becomes an empty
//! string or an empty list in the output, so templates never have to test
//! for absent values.

use crate::types::{
    EducationRecord, ExperienceRecord, ProjectRecord, ResumeDocument, SkillRecord,
    TemplateContext,
};

/// Build the template context for one render.
pub fn map_document(document: &ResumeDocument) -> TemplateContext {
    let basics = &document.basics;

    TemplateContext {
        name: basics.name.clone(),
        title: basics.label.clone(),
        summary: basics.summary.clone(),
        location: basics.location.clone(),
        email: basics.email.clone(),
        phone: basics.phone.clone(),
        linkedin: basics.linkedin.clone(),
        github: basics.github.clone(),
        website: basics.website.clone(),
        experience: document
            .work
            .iter()
            .map(|job| ExperienceRecord {
                company: job.company.clone(),
                position: job.position.clone(),
                location: job.location.clone(),
                date: work_date_range(&job.start_date, &job.end_date),
                items: job.highlights.clone(),
            })
            .collect(),
        education: document
            .education
            .iter()
            .map(|edu| EducationRecord {
                institution: edu.institution.clone(),
                degree: degree(&edu.study_type, &edu.area),
                location: edu.location.clone(),
                date: education_date_range(&edu.start_date, &edu.end_date),
            })
            .collect(),
        projects: document
            .projects
            .iter()
            .map(|proj| ProjectRecord {
                name: proj.name.clone(),
                technologies: join_keywords(&proj.keywords),
                date: proj.start_date.clone(),
                items: proj.highlights.clone(),
            })
            .collect(),
        skills: document
            .skills
            .iter()
            .map(|group| SkillRecord {
                name: group.name.clone(),
                keywords: join_keywords(&group.keywords),
            })
            .collect(),
    }
}

/// Work positions with no end date are current.
fn work_date_range(start: &str, end: &str) -> String {
    let end = if end.is_empty() { "Present" } else { end };
    format!("{} - {}", start, end)
}

/// Education never defaults to "Present"; an entry with no dates at all
/// renders as an empty date string rather than a bare separator.
fn education_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", start, end)
        .trim_matches(|c| c == ' ' || c == '-')
        .to_string()
}

fn degree(study_type: &str, area: &str) -> String {
    format!("{} {}", study_type, area).trim().to_string()
}

fn join_keywords(keywords: &[String]) -> String {
    keywords.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EducationEntry, ProjectEntry, SkillGroup, WorkEntry};

    #[test]
    fn test_empty_document_maps_to_empty_context() {
        let context = map_document(&ResumeDocument::default());
        assert_eq!(context.name, "");
        assert_eq!(context.title, "");
        assert_eq!(context.email, "");
        assert_eq!(context.phone, "");
        assert_eq!(context.linkedin, "");
        assert_eq!(context.github, "");
        assert!(context.experience.is_empty());
        assert!(context.education.is_empty());
        assert!(context.projects.is_empty());
        assert!(context.skills.is_empty());
    }

    #[test]
    fn test_work_date_range_defaults_to_present() {
        assert_eq!(work_date_range("2020", ""), "2020 - Present");
        assert_eq!(work_date_range("2020", "2023"), "2020 - 2023");
        assert_eq!(work_date_range("", ""), " - Present");
    }

    #[test]
    fn test_education_date_range_strips_bare_separator() {
        assert_eq!(education_date_range("", ""), "");
        assert_eq!(education_date_range("2018", ""), "2018");
        assert_eq!(education_date_range("", "2022"), "2022");
        assert_eq!(education_date_range("2018", "2022"), "2018 - 2022");
    }

    #[test]
    fn test_degree_joins_and_trims() {
        assert_eq!(degree("BSc", "Computer Science"), "BSc Computer Science");
        assert_eq!(degree("BSc", ""), "BSc");
        assert_eq!(degree("", "Physics"), "Physics");
        assert_eq!(degree("", ""), "");
    }

    #[test]
    fn test_keywords_joined_with_comma_space() {
        let keywords = vec!["Rust".to_string(), "LaTeX".to_string()];
        assert_eq!(join_keywords(&keywords), "Rust, LaTeX");
        assert_eq!(join_keywords(&[]), "");
    }

    #[test]
    fn test_full_document_mapping() {
        let document = ResumeDocument {
            work: vec![WorkEntry {
                company: "ACME".to_string(),
                position: "Engineer".to_string(),
                location: "Geneva".to_string(),
                start_date: "2020".to_string(),
                end_date: String::new(),
                highlights: vec!["Shipped the thing".to_string()],
            }],
            education: vec![EducationEntry {
                institution: "EPFL".to_string(),
                study_type: "MSc".to_string(),
                area: "CS".to_string(),
                ..Default::default()
            }],
            projects: vec![ProjectEntry {
                name: "cvpress".to_string(),
                keywords: vec!["Rust".to_string(), "TeX".to_string()],
                start_date: "2024".to_string(),
                highlights: vec![],
            }],
            skills: vec![SkillGroup {
                name: "Languages".to_string(),
                keywords: vec!["Rust".to_string(), "Python".to_string()],
            }],
            ..Default::default()
        };

        let context = map_document(&document);
        assert_eq!(context.experience[0].date, "2020 - Present");
        assert_eq!(context.experience[0].items, vec!["Shipped the thing"]);
        assert_eq!(context.education[0].degree, "MSc CS");
        assert_eq!(context.education[0].date, "");
        assert_eq!(context.projects[0].technologies, "Rust, TeX");
        assert_eq!(context.projects[0].date, "2024");
        assert_eq!(context.skills[0].keywords, "Rust, Python");
    }
}
