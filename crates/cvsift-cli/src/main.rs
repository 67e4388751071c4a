use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cvsift_schema::{Candidate, Resume};

mod output;

use output::ColorMode;

/// Resume Parser - Extract structured candidate records from resume documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a PDF, DOCX, or plain-text resume into a structured record
    Parse {
        /// Path to the resume file to parse
        file_path: PathBuf,

        /// Emit the full record as pretty-printed JSON instead of a report
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Path to output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a skill vocabulary file, one term per line
        /// (defaults to the built-in vocabulary)
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Include the raw extracted text in JSON output
        #[arg(long)]
        include_raw: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            file_path,
            json,
            no_color,
            output,
            skills,
            include_raw,
        } => parse(file_path, json, no_color, output, skills, include_raw),
    }
}

fn parse(
    file_path: PathBuf,
    json: bool,
    no_color: bool,
    output: Option<PathBuf>,
    skills: Option<PathBuf>,
    include_raw: bool,
) -> anyhow::Result<()> {
    let text = cvsift_ingest::load_text(&file_path)?;
    tracing::info!(path = %file_path.display(), chars = text.len(), "loaded document");

    let vocab = load_vocab(skills.as_deref())?;
    let resume = assemble_resume(&text, &vocab, include_raw);

    let use_color = !no_color && output.is_none();
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    if json {
        serde_json::to_writer_pretty(&mut writer, &resume)?;
        writeln!(writer)?;
    } else {
        output::print_report(&mut writer, &resume, color)?;
    }

    Ok(())
}

fn load_vocab(path: Option<&std::path::Path>) -> anyhow::Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(cvsift_contact::DEFAULT_VOCAB
            .iter()
            .map(|s| s.to_string())
            .collect());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read skill vocabulary {}: {}", path.display(), e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Run the full extraction pipeline and assemble the final record.
fn assemble_resume(text: &str, vocab: &[String], include_raw: bool) -> Resume {
    let structured = cvsift_parsing::extract_structured(text);

    let phones = cvsift_contact::extract_phones(text);
    let mut phones = phones.into_iter();
    let candidate = Candidate {
        name: cvsift_contact::guess_name(text),
        email: cvsift_contact::extract_email(text),
        phone: phones.next(),
        phone_other: phones.next(),
        github_url: cvsift_contact::extract_github_url(text),
        linkedin_url: cvsift_contact::extract_linkedin_url(text),
    };

    Resume {
        candidate,
        education: structured.education,
        experience: structured.experience,
        skills: cvsift_contact::match_skills(text, vocab),
        profile: structured.profile,
        achievements: structured.achievements,
        skills_profile: structured.skills_profile,
        raw_text: include_raw.then(|| text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
Jane Doe
jane.doe@example.com
+353 87 123 4567

Personal Profile
Backend engineer working mostly in Rust and Python.

Work History
2019 - 2021 - Software Engineer at Acme Corp
- Built services in Rust

Education
2019 - BSc Computer Science - Trinity College Dublin
";

    #[test]
    fn test_assemble_resume_end_to_end() {
        let vocab = load_vocab(None).unwrap();
        let resume = assemble_resume(RESUME, &vocab, false);

        assert_eq!(resume.candidate.name.as_deref(), Some("Jane Doe"));
        assert_eq!(
            resume.candidate.email.as_deref(),
            Some("jane.doe@example.com")
        );
        assert_eq!(resume.candidate.phone.as_deref(), Some("+353871234567"));
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].company.as_deref(), Some("Acme Corp"));
        assert_eq!(resume.education.len(), 1);
        assert!(resume.skills.iter().any(|s| s == "Rust"));
        assert_eq!(resume.raw_text, None);
    }

    #[test]
    fn test_include_raw_keeps_source_text() {
        let resume = assemble_resume(RESUME, &[], true);
        assert_eq!(resume.raw_text.as_deref(), Some(RESUME));
    }

    #[test]
    fn test_vocab_file_loading() {
        let dir = std::env::temp_dir();
        let path = dir.join("cvsift-test-vocab.txt");
        std::fs::write(&path, "# comment\nRust\n\n  Python  \n").unwrap();
        let vocab = load_vocab(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(vocab, vec!["Rust", "Python"]);
    }
}
