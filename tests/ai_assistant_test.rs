use async_trait::async_trait;
use khidma_api::service::ai::{
    AiAssistant, GenerationError, TextGenerator, DESCRIPTION_FALLBACK, TIPS_FALLBACK,
};
use std::sync::{Arc, Mutex};

/// Stub transport that returns a canned completion and records every prompt
/// it was asked to generate.
struct CannedGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl CannedGenerator {
    fn new(reply: &str) -> Self {
        Self { reply: reply.to_string(), prompts: Mutex::new(Vec::new()) }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Stub transport that fails every call.
struct FaultyGenerator;

#[async_trait]
impl TextGenerator for FaultyGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Malformed("stub fault".to_string()))
    }
}

#[tokio::test]
async fn successful_completion_is_returned_unchanged() {
    let generator = Arc::new(CannedGenerator::new("Job desc text"));
    let assistant = AiAssistant::new(generator.clone());

    let description =
        assistant.generate_job_description("Electrician", "2 years experience, Algiers").await;

    assert_eq!(description, "Job desc text");
}

#[tokio::test]
async fn description_prompt_carries_title_and_requirements() {
    let generator = Arc::new(CannedGenerator::new("ok"));
    let assistant = AiAssistant::new(generator.clone());

    assistant.generate_job_description("Electrician", "2 years experience, Algiers").await;

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"Electrician\""));
    assert!(prompts[0].contains("2 years experience, Algiers"));
    assert!(prompts[0].contains("Arabic and French"));
}

#[tokio::test]
async fn description_fault_yields_fixed_fallback() {
    let assistant = AiAssistant::new(Arc::new(FaultyGenerator));

    let description = assistant.generate_job_description("Electrician", "anything").await;

    assert_eq!(description, DESCRIPTION_FALLBACK);
}

#[tokio::test]
async fn profile_fault_yields_fixed_fallback() {
    let assistant = AiAssistant::new(Arc::new(FaultyGenerator));

    let tips = assistant
        .analyze_profile(&["Welding".to_string(), "Arabic".to_string()], "Hardworking.")
        .await;

    assert_eq!(tips, TIPS_FALLBACK);
}

#[tokio::test]
async fn profile_skills_are_comma_joined() {
    let generator = Arc::new(CannedGenerator::new("three tips"));
    let assistant = AiAssistant::new(generator.clone());

    let tips = assistant
        .analyze_profile(&["Welding".to_string(), "Arabic".to_string()], "Hardworking.")
        .await;

    assert_eq!(tips, "three tips");
    let prompts = generator.prompts();
    assert!(prompts[0].contains("Skills: Welding, Arabic."));
    assert!(prompts[0].contains("Bio: Hardworking.."));
}

#[tokio::test]
async fn empty_profile_still_issues_a_request() {
    let generator = Arc::new(CannedGenerator::new("tips"));
    let assistant = AiAssistant::new(generator.clone());

    let tips = assistant.analyze_profile(&[], "").await;

    assert_eq!(tips, "tips");
    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Skills: . Bio: ."));
}

#[tokio::test]
async fn try_variant_surfaces_the_classified_error() {
    let assistant = AiAssistant::new(Arc::new(FaultyGenerator));

    let result = assistant.try_generate_job_description("Electrician", "anything").await;

    assert!(matches!(result, Err(GenerationError::Malformed(_))));
}

#[tokio::test]
async fn clones_share_one_underlying_transport() {
    let generator: Arc<dyn TextGenerator> = Arc::new(CannedGenerator::new("ok"));
    let assistant = AiAssistant::new(generator);
    let other = assistant.clone();

    assert!(Arc::ptr_eq(assistant.generator(), other.generator()));
}

mod with_mockall {
    use super::*;

    mockall::mock! {
        Generator {}

        #[async_trait]
        impl TextGenerator for Generator {
            async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
        }
    }

    #[tokio::test]
    async fn one_outbound_request_per_operation_call() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt: &str| prompt.contains("Electrician"))
            .times(1)
            .returning(|_| Ok("Job desc text".to_string()));

        let assistant = AiAssistant::new(Arc::new(generator));
        let description = assistant.generate_job_description("Electrician", "none").await;

        assert_eq!(description, "Job desc text");
    }
}
