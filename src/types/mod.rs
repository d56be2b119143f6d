// src/types/mod.rs
pub mod context;
pub mod resume;

pub use context::{
    EducationRecord, ExperienceRecord, ProjectRecord, SkillRecord, TemplateContext,
};
pub use resume::{Basics, EducationEntry, ProjectEntry, ResumeDocument, SkillGroup, WorkEntry};
