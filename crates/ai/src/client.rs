//! The AI text client and its three entry points.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::credential::ApiCredential;
use crate::provider::TextProvider;

/// Delay applied to the canned patient-message response in demo mode.
const DEMO_MESSAGE_DELAY: Duration = Duration::from_millis(1000);
/// Delay applied to the canned adherence analysis in demo mode.
const DEMO_ANALYSIS_DELAY: Duration = Duration::from_millis(1500);
/// Delay applied to the canned survey preview in demo mode.
const DEMO_SURVEY_DELAY: Duration = Duration::from_millis(1500);

/// Fallback when the provider fails while drafting a patient message.
const MESSAGE_FALLBACK: &str = "Service temporarily unavailable. Please draft message manually.";
/// Fallback when the provider answers a draft request with nothing usable.
const MESSAGE_EMPTY: &str = "Error generating message.";
/// Fallback when the provider fails during adherence analysis.
const ANALYSIS_FALLBACK: &str = "Analysis unavailable due to network error.";
/// Fallback when analysis succeeds but the response is empty.
const ANALYSIS_EMPTY: &str = "Analysis unavailable.";

/// The goal of an outreach message, selected by the composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageGoal {
    Reminder,
    Refill,
    Motivation,
}

impl MessageGoal {
    /// Lowercase label used inside prompts and demo-mode text.
    pub fn label(&self) -> &'static str {
        match self {
            MessageGoal::Reminder => "reminder",
            MessageGoal::Refill => "refill",
            MessageGoal::Motivation => "motivation",
        }
    }
}

impl std::fmt::Display for MessageGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A drafted survey invitation email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPreview {
    pub subject: String,
    pub body: String,
}

/// Client over a [`TextProvider`] for the dashboard's three AI use cases.
///
/// All entry points resolve to usable text; none of them returns an error.
/// With a placeholder credential every call short-circuits into a canned
/// response after a fixed delay and the provider is never invoked.
#[derive(Clone, Debug)]
pub struct AiClient<P> {
    credential: ApiCredential,
    provider: P,
}

impl<P: TextProvider> AiClient<P> {
    pub fn new(credential: ApiCredential, provider: P) -> Self {
        Self {
            credential,
            provider,
        }
    }

    /// Whether the client is running against canned demo responses.
    pub fn is_demo(&self) -> bool {
        self.credential.is_placeholder()
    }

    /// Drafts a culturally and linguistically targeted outreach message.
    ///
    /// The message is requested in `language`, kept SMS-friendly, and
    /// framed by the compliance rules baked into the prompt (no
    /// diagnoses, no dosage changes, emergencies go to hospital).
    pub async fn draft_patient_message(
        &self,
        patient_name: &str,
        condition: &str,
        language: &str,
        goal: MessageGoal,
        context: &str,
    ) -> String {
        if self.is_demo() {
            tokio::time::sleep(DEMO_MESSAGE_DELAY).await;
            return format!(
                "[DEMO MODE] Hello {patient_name}, this is a simulated {goal} message in \
                 {language}. Please configure a valid API KEY to generate real AI responses."
            );
        }

        let context = if context.trim().is_empty() {
            "General check-in"
        } else {
            context
        };
        let prompt = format!(
            "Role: You are Jemine AI, a compassionate medical engagement assistant for \
             hospitals and pharmacies in Africa.\n\n\
             CRITICAL COMPLIANCE RULES:\n\
             1. Do NOT provide medical diagnoses.\n\
             2. Do NOT recommend changing dosage without doctor approval.\n\
             3. If the context implies a medical emergency, direct the patient to a hospital \
             immediately.\n\n\
             Task: Write a short, clear, and culturally appropriate {goal} message for a \
             patient.\n\n\
             Patient Details:\n\
             - Name: {patient_name}\n\
             - Condition: {condition}\n\
             - TARGET LANGUAGE: {language} (MUST OUTPUT IN THIS LANGUAGE)\n\
             - Context: {context}\n\n\
             Tone: Professional, empathetic, motivating.\n\
             Constraints:\n\
             - Keep it under 160 characters (SMS friendly) if possible.\n\
             - Output only the message text in the target language."
        );

        match self.provider.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => MESSAGE_EMPTY.to_string(),
            Err(err) => {
                tracing::warn!("patient message generation failed: {err}");
                MESSAGE_FALLBACK.to_string()
            }
        }
    }

    /// Analyzes a freeform adherence-data summary into one suggested
    /// engagement action for the care provider.
    pub async fn analyze_adherence_pattern(&self, patient_data_summary: &str) -> String {
        if self.is_demo() {
            tokio::time::sleep(DEMO_ANALYSIS_DELAY).await;
            return "Based on the recent blood pressure readings and adherence score, the \
                    patient is responding well. However, the diastolic reading suggests a minor \
                    spike. Recommend scheduling a brief check-in call to discuss stress \
                    management or dietary changes."
                .to_string();
        }

        let prompt = format!(
            "Role: Senior Medical Engagement Analyst.\n\n\
             Task: Analyze the provided patient data summary. Identify adherence gaps, vital \
             sign trends, or behavioral patterns.\n\n\
             Output: Suggest 1 specific, actionable, non-medical engagement strategy to \
             improve outcomes (e.g., 'Suggest moving medication time to match breakfast', \
             'Recommend usage of loyalty points for a checkup').\n\n\
             Constraints:\n\
             - Keep it under 60 words.\n\
             - Be analytical but easy to understand for a care provider.\n\
             - Do not be generic. Use the data provided.\n\n\
             Data: {patient_data_summary}"
        );

        match self.provider.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => ANALYSIS_EMPTY.to_string(),
            Err(err) => {
                tracing::warn!("adherence analysis failed: {err}");
                ANALYSIS_FALLBACK.to_string()
            }
        }
    }

    /// Drafts a survey invitation as a (subject, body) pair.
    ///
    /// Requests a structured JSON object from the provider and parses it;
    /// a malformed payload degrades to a fixed preview rather than an
    /// error.
    pub async fn draft_survey_preview(
        &self,
        title: &str,
        target_audience: &str,
    ) -> SurveyPreview {
        if self.is_demo() {
            tokio::time::sleep(DEMO_SURVEY_DELAY).await;
            return SurveyPreview {
                subject: format!("Feedback Request: {title}"),
                body: format!(
                    "Dear [Name], as a valued member of our {target_audience} group, we'd \
                     love your thoughts on {title}. Please take a moment to rate us."
                ),
            };
        }

        let prompt = format!(
            "Draft a short, professional, and empathetic email survey invitation for \
             patients. Survey Title: {title}. Target Audience: {target_audience}. Keep it \
             under 40 words."
        );

        match self
            .provider
            .generate_json(&prompt, &["subject", "body"])
            .await
        {
            Ok(text) => match serde_json::from_str::<SurveyPreview>(&text) {
                Ok(preview) => preview,
                Err(err) => {
                    tracing::warn!("survey preview payload was not valid JSON: {err}");
                    SurveyPreview {
                        subject: "Error".to_string(),
                        body: "Could not generate preview.".to_string(),
                    }
                }
            },
            Err(err) => {
                tracing::warn!("survey preview generation failed: {err}");
                SurveyPreview {
                    subject: "Service Unavailable".to_string(),
                    body: "Please type your message manually.".to_string(),
                }
            }
        }
    }
}
