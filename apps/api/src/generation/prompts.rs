// Prompt constants for document adaptation.
// Templates are filled with `str::replace`; placeholders are `{source}` and
// `{job_description}`, both embedded verbatim.

/// Cover letter adaptation prompt. Five directives.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are a professional career advisor. You need to adapt an existing cover letter for a new job opportunity.

EXAMPLE COVER LETTER:
{source}

NEW JOB DESCRIPTION:
{job_description}

Please create a new cover letter for the new job that:
1. Maintains the tone and style of the example cover letter
2. Highlights relevant skills and experiences that match the new job requirements
3. Customizes the content to address the specific role and company
4. Keeps the same general structure and format
5. Is professional, compelling, and tailored to the new position

Please output ONLY the new cover letter text, without any preamble or explanation."#;

/// Resume adaptation prompt. Six directives; the last forbids fabrication.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are a professional career advisor. You need to adapt an existing resume for a new job opportunity.

EXAMPLE RESUME:
{source}

NEW JOB DESCRIPTION:
{job_description}

Please create a new resume for the new job that:
1. Maintains the same professional format and structure
2. Highlights relevant skills and experiences that match the job requirements
3. Reorders or emphasizes experiences that are most relevant to this position
4. Customizes the professional summary or objective to address the specific role
5. Includes relevant keywords from the job description
6. Keeps all information truthful and accurate (no fabrication)

Please output ONLY the new resume text, without any preamble or explanation."#;

/// System message for chat-style backends.
pub const COVER_LETTER_SYSTEM: &str =
    "You are a professional career advisor helping to write cover letters.";

pub const RESUME_SYSTEM: &str = "You are a professional career advisor helping to tailor resumes.";
