//! AI outreach composer: goal and recipient selection, reminder
//! scheduling, template application, and the simulated send.

use chrono::NaiveDate;

use jemine_ai::{AiClient, MessageGoal, TextProvider};

use crate::constants::{DEFAULT_SCHEDULE_TIME, MESSAGE_SEND_DELAY};
use crate::detail::Frequency;
use crate::domain::{Region, RegionTemplate};
use crate::error::{DashboardError, DashboardResult};
use crate::ops::{simulate_transport, OpState};
use crate::registry::PatientRegistry;

/// Repeat schedule for a reminder campaign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReminderSchedule {
    pub start: NaiveDate,
    /// Required before a reminder can be generated or sent.
    pub end: Option<NaiveDate>,
    /// "HH:MM", defaulting to the morning slot.
    pub time: String,
    pub frequency: Frequency,
}

impl ReminderSchedule {
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: None,
            time: DEFAULT_SCHEDULE_TIME.to_string(),
            frequency: Frequency::Weekly,
        }
    }

    /// Checks the schedule is complete and ordered.
    ///
    /// # Errors
    ///
    /// The end date is required and must come after the start date.
    pub fn validate(&self) -> DashboardResult<NaiveDate> {
        let end = self.end.ok_or(DashboardError::MissingEndDate)?;
        if end <= self.start {
            return Err(DashboardError::EndDateNotAfterStart);
        }
        Ok(end)
    }

    /// The sentence appended to the prompt context for reminders.
    fn time_context(&self, end: NaiveDate) -> String {
        format!(
            "The reminder is scheduled for {} at {}, repeating {} until {}.",
            self.start, self.time, self.frequency, end
        )
    }
}

/// Composer state for one drafting session.
#[derive(Clone, Debug)]
pub struct MessageComposer {
    pub patient_id: Option<String>,
    pub goal: MessageGoal,
    /// Free-text context typed by the provider; templates append here.
    pub context: String,
    /// Overrides the patient's own language when non-empty.
    pub target_language: String,
    pub schedule: ReminderSchedule,
    pub generated: String,
    pub generate_state: OpState,
    pub send_state: OpState,
}

impl MessageComposer {
    /// Opens the composer, pre-selecting the deep-linked patient or
    /// falling back to the first of the roster.
    pub fn open(registry: &PatientRegistry, preselect: Option<String>, today: NaiveDate) -> Self {
        let patient_id = preselect.or_else(|| registry.iter().next().map(|p| p.id.clone()));
        Self {
            patient_id,
            goal: MessageGoal::Reminder,
            context: String::new(),
            target_language: String::new(),
            schedule: ReminderSchedule::starting(today),
            generated: String::new(),
            generate_state: OpState::default(),
            send_state: OpState::default(),
        }
    }

    /// Drafts the outreach message via the AI client.
    ///
    /// For reminders the schedule is validated first; an incomplete
    /// schedule is a typed error and the provider is never invoked. The
    /// schedule sentence is appended to the typed context for the
    /// prompt.
    ///
    /// # Errors
    ///
    /// No recipient, a missing/unordered reminder end date, or a draft
    /// already in flight.
    pub async fn generate<P: TextProvider>(
        &mut self,
        registry: &PatientRegistry,
        client: &AiClient<P>,
    ) -> DashboardResult<&str> {
        let patient_id = self
            .patient_id
            .clone()
            .ok_or_else(|| DashboardError::UnknownPatient(String::new()))?;
        let patient = registry
            .get(&patient_id)
            .ok_or(DashboardError::UnknownPatient(patient_id))?;

        let time_context = match self.goal {
            MessageGoal::Reminder => {
                let end = self.schedule.validate()?;
                self.schedule.time_context(end)
            }
            _ => String::new(),
        };

        let language = if self.target_language.is_empty() {
            &patient.language
        } else {
            &self.target_language
        };
        let context = format!("{} {}", self.context, time_context);

        self.generate_state.begin()?;
        self.generated = client
            .draft_patient_message(&patient.name, &patient.condition, language, self.goal, &context)
            .await;
        self.generate_state.succeed();
        Ok(&self.generated)
    }

    /// Whether the send button is live: context typed, recipient
    /// chosen, and for reminders a complete schedule.
    pub fn is_send_ready(&self) -> bool {
        if self.context.trim().is_empty() || self.patient_id.is_none() {
            return false;
        }
        match self.goal {
            MessageGoal::Reminder => {
                self.schedule.end.is_some() && !self.schedule.time.is_empty()
            }
            _ => true,
        }
    }

    /// Simulated send; on completion the typed context is cleared for
    /// the next draft.
    ///
    /// # Errors
    ///
    /// Refused when not send-ready, or while a send is in flight.
    pub async fn send(&mut self, registry: &PatientRegistry) -> DashboardResult<String> {
        if !self.is_send_ready() {
            return Err(DashboardError::ComposerNotReady);
        }
        let name = self
            .patient_id
            .as_deref()
            .and_then(|id| registry.get(id))
            .map(|p| p.name.clone())
            .unwrap_or_default();

        self.send_state.begin()?;
        simulate_transport(MESSAGE_SEND_DELAY).await;
        self.send_state.succeed();

        self.context.clear();
        Ok(format!("Message sent successfully to {name}!"))
    }

    /// Appends a template body after a blank line, quoted, never
    /// replacing what was already typed.
    pub fn apply_template(&mut self, template: &RegionTemplate) {
        let quoted = format!("[Use this template structure]: \"{}\"", template.content);
        if self.context.is_empty() {
            self.context = quoted;
        } else {
            self.context.push_str("\n\n");
            self.context.push_str(&quoted);
        }
    }
}

/// Region and text filter over the template library.
#[derive(Clone, Debug, Default)]
pub struct TemplatePicker {
    /// `None` is the "All" region choice.
    pub region: Option<Region>,
    pub search: String,
}

impl TemplatePicker {
    /// Templates matching the region choice and the search over title
    /// and content.
    pub fn filtered<'a>(&self, templates: &'a [RegionTemplate]) -> Vec<&'a RegionTemplate> {
        let needle = self.search.to_lowercase();
        templates
            .iter()
            .filter(|t| {
                let matches_region = self.region.map_or(true, |r| t.region == r);
                let matches_search = needle.is_empty()
                    || t.title.to_lowercase().contains(&needle)
                    || t.content.to_lowercase().contains(&needle);
                matches_region && matches_search
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jemine_ai::{ApiCredential, NullProvider};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date")
    }

    fn demo_client() -> AiClient<NullProvider> {
        AiClient::new(ApiCredential::default(), NullProvider)
    }

    #[tokio::test(start_paused = true)]
    async fn reminder_generation_requires_a_complete_schedule() {
        let registry = PatientRegistry::seeded();
        let mut composer = MessageComposer::open(&registry, None, today());
        let client = demo_client();

        let err = composer
            .generate(&registry, &client)
            .await
            .expect_err("no end date");
        assert_eq!(
            err.to_string(),
            "Please set an end date for the reminder campaign."
        );

        composer.schedule.end = Some(today());
        let err = composer
            .generate(&registry, &client)
            .await
            .expect_err("end equals start");
        assert!(matches!(err, DashboardError::EndDateNotAfterStart));
    }

    #[tokio::test(start_paused = true)]
    async fn generation_drafts_in_the_patient_language() {
        let registry = PatientRegistry::seeded();
        let mut composer = MessageComposer::open(&registry, Some("P002".to_string()), today());
        composer.goal = MessageGoal::Motivation;
        let client = demo_client();

        let draft = composer
            .generate(&registry, &client)
            .await
            .expect("drafts")
            .to_string();
        assert!(draft.contains("Ngozi Okafor"));
        assert!(draft.contains("motivation"));
        assert_eq!(composer.generated, draft);
        assert!(composer.generate_state.is_succeeded());
    }

    #[tokio::test(start_paused = true)]
    async fn generation_refuses_a_second_trigger_while_running() {
        let registry = PatientRegistry::seeded();
        let mut composer = MessageComposer::open(&registry, Some("P001".to_string()), today());
        composer.goal = MessageGoal::Refill;
        composer.generate_state = OpState::Running;
        let client = demo_client();

        let err = composer
            .generate(&registry, &client)
            .await
            .expect_err("draft already in flight");
        assert!(matches!(err, DashboardError::OperationInFlight));
        assert!(composer.generated.is_empty());
    }

    #[test]
    fn send_readiness_tracks_context_and_schedule() {
        let registry = PatientRegistry::seeded();
        let mut composer = MessageComposer::open(&registry, None, today());
        assert!(!composer.is_send_ready(), "blank context");

        composer.context = "Please remember your evening dose.".to_string();
        assert!(!composer.is_send_ready(), "reminder lacks an end date");

        composer.schedule.end = Some(NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date"));
        assert!(composer.is_send_ready());

        composer.goal = MessageGoal::Motivation;
        composer.schedule.end = None;
        assert!(composer.is_send_ready(), "only reminders need a schedule");
    }

    #[tokio::test(start_paused = true)]
    async fn send_clears_the_context_for_the_next_draft() {
        let registry = PatientRegistry::seeded();
        let mut composer = MessageComposer::open(&registry, Some("P001".to_string()), today());
        composer.goal = MessageGoal::Refill;
        composer.context = "Refill ready at the counter.".to_string();

        let confirmation = composer.send(&registry).await.expect("send completes");
        assert_eq!(confirmation, "Message sent successfully to Kwame Mensah!");
        assert!(composer.context.is_empty());
        assert!(composer.send_state.is_succeeded());
    }

    #[test]
    fn template_application_appends_after_a_blank_line() {
        let registry = PatientRegistry::seeded();
        let mut composer = MessageComposer::open(&registry, None, today());
        let templates = crate::seed::templates();

        composer.apply_template(&templates[0]);
        let first_len = composer.context.len();
        assert!(composer.context.starts_with("[Use this template structure]: \""));

        composer.apply_template(&templates[1]);
        assert!(composer.context.len() > first_len);
        assert!(composer.context.contains("\n\n[Use this template structure]: \""));
    }

    #[test]
    fn picker_filters_by_region_and_search() {
        let templates = crate::seed::templates();
        let mut picker = TemplatePicker::default();
        assert_eq!(picker.filtered(&templates).len(), templates.len());

        picker.region = Some(Region::WestAfrica);
        let west = picker.filtered(&templates);
        assert!(!west.is_empty());
        assert!(west.iter().all(|t| t.region == Region::WestAfrica));

        picker.search = "no such template text".to_string();
        assert!(picker.filtered(&templates).is_empty());
    }
}
