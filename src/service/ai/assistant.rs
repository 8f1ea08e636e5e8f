use std::sync::Arc;

use super::client::{GenerationError, TextGenerator};

/// Shown instead of a job description when the remote call fails.
pub const DESCRIPTION_FALLBACK: &str = "Error generating description. Please try again.";
/// Shown instead of profile tips when the remote call fails.
pub const TIPS_FALLBACK: &str = "Keep improving your profile!";

/// Facade over the text-generation transport for the two recruiting
/// use cases: drafting a bilingual job description and advising on a
/// candidate profile.
///
/// Holds no mutable state; cloning shares the underlying transport, so one
/// assistant constructed at startup serves every handler with the same
/// configured client. The plain operations never fail: any remote fault is
/// logged and replaced with a fixed fallback string. The `try_*` variants
/// expose the classified error for callers that want to decide for
/// themselves.
#[derive(Clone)]
pub struct AiAssistant {
    generator: Arc<dyn TextGenerator>,
}

impl AiAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// The shared transport handle. Mainly useful to assert that clones
    /// observe one underlying client.
    pub fn generator(&self) -> &Arc<dyn TextGenerator> {
        &self.generator
    }

    /// Draft a professional Arabic/French job description for an Algerian
    /// posting. Returns the completion verbatim, or [`DESCRIPTION_FALLBACK`]
    /// if the remote call fails. `title` non-emptiness is the caller's
    /// responsibility.
    pub async fn generate_job_description(&self, title: &str, requirements: &str) -> String {
        match self.try_generate_job_description(title, requirements).await {
            Ok(text) => text,
            Err(err) => {
                log::error!("job description generation failed: {}", err);
                DESCRIPTION_FALLBACK.to_string()
            }
        }
    }

    pub async fn try_generate_job_description(
        &self,
        title: &str,
        requirements: &str,
    ) -> Result<String, GenerationError> {
        let prompt = format!(
            "Write a professional job description in both Arabic and French for a \"{}\" position in Algeria. Key requirements: {}. Make it appealing and clear.",
            title, requirements
        );
        self.generator.generate(&prompt).await
    }

    /// Ask for three short Arabic tips to improve a candidate profile for
    /// the Algerian market. Returns the completion verbatim, or
    /// [`TIPS_FALLBACK`] if the remote call fails. Empty skills and an empty
    /// bio still produce a well-formed request.
    pub async fn analyze_profile(&self, skills: &[String], bio: &str) -> String {
        match self.try_analyze_profile(skills, bio).await {
            Ok(text) => text,
            Err(err) => {
                log::error!("profile analysis failed: {}", err);
                TIPS_FALLBACK.to_string()
            }
        }
    }

    pub async fn try_analyze_profile(
        &self,
        skills: &[String],
        bio: &str,
    ) -> Result<String, GenerationError> {
        let prompt = format!(
            "As an Algerian recruitment expert, analyze this profile: Skills: {}. Bio: {}. Give 3 short tips in Arabic to make it more professional for the Algerian market.",
            skills.join(", "),
            bio
        );
        self.generator.generate(&prompt).await
    }
}
