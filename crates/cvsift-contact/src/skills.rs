//! Fuzzy skill-vocabulary matching.

const MATCH_THRESHOLD: f64 = 0.90;

/// Built-in vocabulary used when the caller supplies none.
pub const DEFAULT_VOCAB: &[&str] = &[
    "Java",
    "Python",
    "Rust",
    "C",
    "C++",
    "C#",
    "Go",
    "JavaScript",
    "TypeScript",
    "HTML",
    "CSS",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Linux",
    "Git",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Terraform",
    "Jenkins",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "Spring",
    "Kafka",
    "Elasticsearch",
    "GraphQL",
    "REST",
    "Agile",
    "Scrum",
    "Machine Learning",
    "Data Analysis",
];

/// Score the document text against each vocabulary term with a partial
/// ratio (best-matching substring alignment), keep terms at or above the
/// threshold, and return them deduplicated and sorted.
pub fn match_skills(text: &str, vocab: &[String]) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut matched: Vec<String> = vocab
        .iter()
        .filter(|term| {
            let term_lower = term.to_lowercase();
            if term_lower.is_empty() {
                return false;
            }
            let score =
                rapidfuzz::fuzz::partial_ratio(term_lower.chars(), text_lower.chars());
            score >= MATCH_THRESHOLD
        })
        .map(|term| term.trim().to_string())
        .collect();

    matched.sort();
    matched.dedup();
    tracing::debug!(matched = matched.len(), vocab = vocab.len(), "matched skills");
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_substring_matches() {
        let text = "Experienced with Rust, Python and PostgreSQL.";
        let skills = match_skills(text, &vocab(&["Rust", "Python", "PostgreSQL", "Fortran"]));
        assert_eq!(skills, vec!["PostgreSQL", "Python", "Rust"]);
    }

    #[test]
    fn test_case_insensitive() {
        let text = "worked with KUBERNETES in production";
        let skills = match_skills(text, &vocab(&["kubernetes"]));
        assert_eq!(skills, vec!["kubernetes"]);
    }

    #[test]
    fn test_dedup_and_sort() {
        let text = "Rust Rust Rust";
        let skills = match_skills(text, &vocab(&["Rust", "Rust"]));
        assert_eq!(skills, vec!["Rust"]);
    }

    #[test]
    fn test_empty_vocab() {
        assert!(match_skills("anything", &[]).is_empty());
    }
}
