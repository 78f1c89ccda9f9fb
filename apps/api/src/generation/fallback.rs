//! Template fallback used when no AI credential is configured.
//!
//! Deterministic string splicing over the source document. The job
//! description is not consulted. Every output ends with a visible notice so
//! the user knows the text was not AI-generated.

/// Common prefix of the notice appended to every fallback document.
pub const FALLBACK_NOTICE_PREFIX: &str = "NOTE: This is a basic template.";

const DEFAULT_HIGHLIGHT: &str = "My relevant experience";
const DEFAULT_SUMMARY: &str = "Experienced professional";
const EXPERIENCE_MARKER: &str = "EXPERIENCE";
const EXCERPT_CHARS: usize = 500;

pub fn cover_letter(source: &str) -> String {
    format!(
        "Dear Hiring Manager,

I am writing to express my strong interest in the position described in your job posting. \
Based on my background and experience, I believe I would be an excellent fit for this role.

{highlight}

The requirements outlined in your job description align well with my skills and career goals. \
I am particularly excited about the opportunity to contribute to your team.

Thank you for considering my application. \
I look forward to discussing how I can contribute to your organization.

Sincerely,
[Your Name]

---
{notice} Configure ANTHROPIC_API_KEY or OPENAI_API_KEY for AI-generated cover letters.
",
        highlight = highlight_sentence(source),
        notice = FALLBACK_NOTICE_PREFIX,
    )
}

pub fn resume(source: &str) -> String {
    format!(
        "PROFESSIONAL SUMMARY
{summary} seeking new opportunities in the role described.

RELEVANT EXPERIENCE
Based on the job requirements, my background includes relevant experience that aligns with the position.

{experience}

SKILLS
Skills and qualifications matching the job description.

---
{notice} Configure ANTHROPIC_API_KEY or OPENAI_API_KEY for AI-generated resumes.
",
        summary = summary_sentence(source),
        experience = experience_section(source),
        notice = FALLBACK_NOTICE_PREFIX,
    )
}

/// Third-to-last `.`-separated segment, or a stock phrase when there is none.
fn highlight_sentence(source: &str) -> &str {
    let segments: Vec<&str> = source.split('.').collect();
    if segments.len() >= 3 {
        let candidate = segments[segments.len() - 3].trim();
        if !candidate.is_empty() {
            return candidate;
        }
    }
    DEFAULT_HIGHLIGHT
}

fn summary_sentence(source: &str) -> &str {
    if !source.contains('.') {
        return DEFAULT_SUMMARY;
    }
    match source.split('.').next().map(str::trim) {
        Some(first) if !first.is_empty() => first,
        _ => DEFAULT_SUMMARY,
    }
}

/// Text after the last "EXPERIENCE" heading (any case), else a leading excerpt.
fn experience_section(source: &str) -> String {
    // ASCII uppercasing keeps byte offsets aligned with `source`.
    let upper = source.to_ascii_uppercase();
    if let Some(idx) = upper.rfind(EXPERIENCE_MARKER) {
        let tail = source[idx + EXPERIENCE_MARKER.len()..].trim();
        if !tail.is_empty() {
            return tail.to_string();
        }
    }
    source.chars().take(EXCERPT_CHARS).collect()
}
