use std::io::Write;

use cvsift_schema::{EducationRecord, ExperienceRecord, Resume};
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

fn heading(w: &mut dyn Write, title: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", title.bold().underline())
    } else {
        writeln!(w, "{}", title)
    }
}

fn field(w: &mut dyn Write, label: &str, value: Option<&str>, color: ColorMode) -> std::io::Result<()> {
    let value = value.unwrap_or("-");
    if color.enabled() {
        writeln!(w, "  {} {}", format!("{}:", label).dimmed(), value)
    } else {
        writeln!(w, "  {}: {}", label, value)
    }
}

/// Print the human-readable report for a parsed resume.
pub fn print_report(w: &mut dyn Write, resume: &Resume, color: ColorMode) -> std::io::Result<()> {
    heading(w, "Candidate", color)?;
    field(w, "Name", resume.candidate.name.as_deref(), color)?;
    field(w, "Email", resume.candidate.email.as_deref(), color)?;
    field(w, "Phone", resume.candidate.phone.as_deref(), color)?;
    if resume.candidate.phone_other.is_some() {
        field(w, "Phone (other)", resume.candidate.phone_other.as_deref(), color)?;
    }
    if resume.candidate.github_url.is_some() {
        field(w, "GitHub", resume.candidate.github_url.as_deref(), color)?;
    }
    if resume.candidate.linkedin_url.is_some() {
        field(w, "LinkedIn", resume.candidate.linkedin_url.as_deref(), color)?;
    }
    writeln!(w)?;

    if let Some(ref profile) = resume.profile {
        heading(w, "Profile", color)?;
        writeln!(w, "  {}", profile)?;
        writeln!(w)?;
    }

    if !resume.experience.is_empty() {
        heading(w, "Work History", color)?;
        for entry in &resume.experience {
            print_experience(w, entry, color)?;
        }
        writeln!(w)?;
    }

    if !resume.education.is_empty() {
        heading(w, "Education", color)?;
        for entry in &resume.education {
            print_education(w, entry)?;
        }
        writeln!(w)?;
    }

    if !resume.achievements.is_empty() {
        heading(w, "Achievements", color)?;
        for achievement in &resume.achievements {
            writeln!(w, "  - {}", achievement)?;
        }
        writeln!(w)?;
    }

    if !resume.skills.is_empty() {
        heading(w, "Matched Skills", color)?;
        writeln!(w, "  {}", resume.skills.join(", "))?;
        writeln!(w)?;
    }

    if let Some(ref skills_profile) = resume.skills_profile {
        heading(w, "Skills Profile", color)?;
        for line in skills_profile.lines() {
            writeln!(w, "  {}", line)?;
        }
        writeln!(w)?;
    }

    Ok(())
}

fn print_experience(
    w: &mut dyn Write,
    entry: &ExperienceRecord,
    color: ColorMode,
) -> std::io::Result<()> {
    let title = entry.title.as_deref().unwrap_or("(unknown role)");
    let dates = match (entry.start_date.as_deref(), entry.end_date.as_deref()) {
        (Some(start), Some(end)) => format!("{} to {}", start, end),
        (Some(start), None) => format!("from {}", start),
        _ => String::new(),
    };

    if color.enabled() {
        write!(w, "  {}", title.green())?;
    } else {
        write!(w, "  {}", title)?;
    }
    if let Some(ref company) = entry.company {
        write!(w, " at {}", company)?;
    }
    if dates.is_empty() {
        writeln!(w)?;
    } else if color.enabled() {
        writeln!(w, " ({})", dates.dimmed())?;
    } else {
        writeln!(w, " ({})", dates)?;
    }

    for line in &entry.description_lines {
        if line.is_empty() {
            writeln!(w)?;
        } else {
            writeln!(w, "    - {}", line)?;
        }
    }
    Ok(())
}

fn print_education(w: &mut dyn Write, entry: &EducationRecord) -> std::io::Result<()> {
    let year = entry.graduation_date.as_deref().unwrap_or("----");
    let course = entry.course.as_deref().unwrap_or("(unknown course)");
    write!(w, "  {}  {}", year, course)?;
    if let Some(ref result) = entry.result {
        write!(w, ", {}", result)?;
    }
    if let Some(ref institution) = entry.institution {
        write!(w, " ({})", institution)?;
    }
    writeln!(w)
}
