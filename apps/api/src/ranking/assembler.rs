//! Text Assembler: flattens a structured resume into the text blob that gets scored.

use crate::models::resume::{DescribedEntry, Resume};

/// Concatenates every resume field in a fixed order, one space between fields.
///
/// Order: name, portfolio, email, mobile, github, linkedin, the five skill
/// categories, then projects, experience, publications, extra-curricular activities.
/// Absent fields render as an empty string, so the field count (and the spacing) is
/// the same for every resume.
pub fn assemble_resume_text(resume: &Resume) -> String {
    let skills = &resume.technical_skills;

    let fields: [String; 15] = [
        scalar(&resume.name),
        scalar(&resume.portfolio),
        scalar(&resume.email),
        scalar(&resume.mobile),
        scalar(&resume.github),
        scalar(&resume.linkedin),
        skills.programming_languages.join(" "),
        skills.frameworks_libraries.join(" "),
        skills.tools_platforms.join(" "),
        skills.technologies.join(" "),
        skills.soft_skills.join(" "),
        descriptions(&resume.projects),
        descriptions(&resume.experience),
        descriptions(&resume.publications),
        descriptions(&resume.extra_curricular_activities),
    ];

    fields.join(" ")
}

fn scalar(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

fn descriptions(entries: &[DescribedEntry]) -> String {
    entries
        .iter()
        .map(|e| e.description.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}
