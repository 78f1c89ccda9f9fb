//! Document generation: one entry point for both document kinds.
//!
//! Flow: validate inputs → build prompt → selected backend → adapted text.
//!
//! A backend failure is terminal for the request. It does NOT fall back to
//! the template; the template is only used when no credential is configured.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::backends::DocumentAdapter;
use crate::generation::fallback;
use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM, RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM,
};

/// Which document is being adapted. Drives the prompt, system message,
/// fallback template, and error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    CoverLetter,
    Resume,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::CoverLetter => "cover letter",
            DocumentKind::Resume => "resume",
        }
    }

    fn prompt_template(self) -> &'static str {
        match self {
            DocumentKind::CoverLetter => COVER_LETTER_PROMPT_TEMPLATE,
            DocumentKind::Resume => RESUME_PROMPT_TEMPLATE,
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            DocumentKind::CoverLetter => COVER_LETTER_SYSTEM,
            DocumentKind::Resume => RESUME_SYSTEM,
        }
    }

    pub fn fallback(self, source: &str) -> String {
        match self {
            DocumentKind::CoverLetter => fallback::cover_letter(source),
            DocumentKind::Resume => fallback::resume(source),
        }
    }
}

/// Inputs for a single adaptation, borrowed from the request.
#[derive(Debug, Clone, Copy)]
pub struct AdaptationRequest<'a> {
    pub kind: DocumentKind,
    pub source: &'a str,
    pub job_description: &'a str,
}

impl AdaptationRequest<'_> {
    /// Fills the kind's template. Both texts are embedded verbatim, in a single
    /// pass, so placeholder-like text inside the inputs is left alone.
    pub fn prompt(&self) -> String {
        let template = self.kind.prompt_template();
        let parts = template.split_once("{source}").and_then(|(head, rest)| {
            rest.split_once("{job_description}")
                .map(|(mid, tail)| (head, mid, tail))
        });
        match parts {
            Some((head, mid, tail)) => [head, self.source, mid, self.job_description, tail].concat(),
            None => template.to_string(),
        }
    }
}

/// Result of `generate_both`.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPair {
    pub cover_letter: String,
    pub resume: String,
}

/// Shared generator. Cheap to clone; holds the backend picked at startup.
#[derive(Clone)]
pub struct Generator {
    adapter: Arc<dyn DocumentAdapter>,
}

impl Generator {
    pub fn new(adapter: Arc<dyn DocumentAdapter>) -> Self {
        Self { adapter }
    }

    /// Adapts `source` to `job_description`.
    ///
    /// Both inputs must be non-blank; otherwise `Validation` is returned and
    /// no backend is invoked.
    pub async fn generate(
        &self,
        kind: DocumentKind,
        source: &str,
        job_description: &str,
    ) -> Result<String, AppError> {
        if source.trim().is_empty() || job_description.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Both example {} and job description are required",
                kind.label()
            )));
        }

        let request = AdaptationRequest {
            kind,
            source,
            job_description,
        };

        let text = self.adapter.adapt(&request).await.map_err(|e| {
            AppError::Generation(format!("Error generating {}: {e}", kind.label()))
        })?;

        info!(
            "Generated {} via {} ({} chars)",
            kind.label(),
            self.adapter.name(),
            text.len()
        );

        Ok(text)
    }

    /// Generates the cover letter, then the resume, against one job description.
    ///
    /// All three inputs are validated before either backend call. If the resume
    /// fails, the cover letter is discarded and the error is returned.
    pub async fn generate_both(
        &self,
        cover_letter: &str,
        resume: &str,
        job_description: &str,
    ) -> Result<GeneratedPair, AppError> {
        if [cover_letter, resume, job_description]
            .iter()
            .any(|s| s.trim().is_empty())
        {
            return Err(AppError::Validation(
                "Cover letter, resume, and job description are all required".to_string(),
            ));
        }

        let cover_letter = self
            .generate(DocumentKind::CoverLetter, cover_letter, job_description)
            .await?;
        let resume = self
            .generate(DocumentKind::Resume, resume, job_description)
            .await?;

        Ok(GeneratedPair {
            cover_letter,
            resume,
        })
    }
}
