//! Dashboard overview: headline stats and the three campaign flows
//! (bulk refill broadcast, loyalty management, survey dispatch).

use std::collections::HashSet;

use chrono::Utc;

use jemine_ai::{AiClient, SurveyPreview, TextProvider};

use crate::constants::{AVG_SATISFACTION, REFILL_BROADCAST_DELAY, SURVEY_DISPATCH_DELAY};
use crate::domain::{
    AdherenceStatus, LoyaltyRule, Patient, PendingRedemption, Reward, SubscriptionStatus,
};
use crate::error::{DashboardError, DashboardResult};
use crate::ops::{simulate_transport, OpState};
use crate::registry::PatientRegistry;

/// Headline numbers recomputed from the roster on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardStats {
    pub total_patients: usize,
    /// Mean adherence, rounded to the nearest whole percent.
    pub avg_adherence: u32,
    pub refills_due: usize,
    pub critical_patients: usize,
    pub active_subscriptions: usize,
    /// Fixed score; no survey aggregation feeds this yet.
    pub satisfaction_score: f32,
}

impl DashboardStats {
    pub fn compute(registry: &PatientRegistry) -> Self {
        let total = registry.len();
        let sum: u32 = registry.iter().map(|p| p.adherence_rate.percent() as u32).sum();
        let avg = (sum as f64 / total.max(1) as f64).round() as u32;
        Self {
            total_patients: total,
            avg_adherence: avg,
            refills_due: registry.iter().filter(|p| p.has_refill_due()).count(),
            critical_patients: registry
                .iter()
                .filter(|p| p.status == AdherenceStatus::Critical)
                .count(),
            active_subscriptions: registry
                .iter()
                .filter(|p| p.subscription_status == SubscriptionStatus::Active)
                .count(),
            satisfaction_score: AVG_SATISFACTION,
        }
    }
}

/// Bulk refill reminder broadcast.
#[derive(Clone, Debug, Default)]
pub struct RefillCampaign {
    selected: HashSet<String>,
    pub search: String,
    pub send_state: OpState,
}

impl RefillCampaign {
    /// Opens the campaign with every refill-due patient pre-selected.
    pub fn open(registry: &PatientRegistry) -> Self {
        Self {
            selected: registry
                .iter()
                .filter(|p| p.has_refill_due())
                .map(|p| p.id.clone())
                .collect(),
            search: String::new(),
            send_state: OpState::default(),
        }
    }

    pub fn toggle(&mut self, patient_id: &str) {
        if !self.selected.remove(patient_id) {
            self.selected.insert(patient_id.to_string());
        }
    }

    pub fn is_selected(&self, patient_id: &str) -> bool {
        self.selected.contains(patient_id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Candidate list: refill-due patients first, alphabetical within
    /// each group, then narrowed by the search over name and phone.
    pub fn candidates<'a>(&self, registry: &'a PatientRegistry) -> Vec<&'a Patient> {
        let mut list: Vec<&Patient> = registry.iter().collect();
        list.sort_by(|a, b| {
            b.has_refill_due()
                .cmp(&a.has_refill_due())
                .then_with(|| a.name.cmp(&b.name))
        });
        let needle = self.search.to_lowercase();
        list.retain(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.phone.contains(&self.search)
        });
        list
    }

    /// Simulated broadcast to the selected patients.
    ///
    /// # Errors
    ///
    /// Refused while a broadcast is in flight.
    pub async fn send(&mut self) -> DashboardResult<usize> {
        self.send_state.begin()?;
        simulate_transport(REFILL_BROADCAST_DELAY).await;
        self.send_state.succeed();
        Ok(self.selected.len())
    }
}

/// Tabs of the loyalty management panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoyaltyTab {
    #[default]
    Redemptions,
    Rules,
    Catalog,
}

/// Redemption queue, earning rules, and the read-only reward catalog.
#[derive(Clone, Debug)]
pub struct LoyaltyManager {
    pub tab: LoyaltyTab,
    pub pending: Vec<PendingRedemption>,
    pub rules: Vec<LoyaltyRule>,
    pub catalog: Vec<Reward>,
}

impl LoyaltyManager {
    pub fn seeded() -> Self {
        Self {
            tab: LoyaltyTab::default(),
            pending: crate::seed::pending_redemptions(),
            rules: crate::seed::loyalty_rules(),
            catalog: crate::seed::reward_catalog(),
        }
    }

    /// Approve and reject both just clear the queue entry; points
    /// settlement happens outside this system.
    pub fn approve(&mut self, redemption_id: u32) {
        self.pending.retain(|r| r.id != redemption_id);
    }

    pub fn reject(&mut self, redemption_id: u32) {
        self.pending.retain(|r| r.id != redemption_id);
    }

    /// Adds an earning rule and returns its assigned id.
    ///
    /// # Errors
    ///
    /// The action is required and the point value must be positive.
    pub fn add_rule(
        &mut self,
        action: &str,
        points: u32,
        description: &str,
    ) -> DashboardResult<String> {
        if action.trim().is_empty() || points == 0 {
            return Err(DashboardError::InvalidLoyaltyRule);
        }
        let id = format!("L{}", Utc::now().timestamp_millis());
        self.rules.push(LoyaltyRule {
            id: id.clone(),
            action: action.to_string(),
            points,
            description: description.to_string(),
        });
        Ok(id)
    }

    pub fn delete_rule(&mut self, rule_id: &str) {
        self.rules.retain(|r| r.id != rule_id);
    }
}

/// Satisfaction survey dispatch with an AI-drafted invitation preview.
#[derive(Clone, Debug)]
pub struct SurveyDispatch {
    pub title: String,
    pub target_audience: String,
    pub preview: SurveyPreview,
    pub preview_state: OpState,
    pub push_state: OpState,
}

impl Default for SurveyDispatch {
    fn default() -> Self {
        Self {
            title: "Patient Satisfaction Survey Q4".to_string(),
            target_audience: "All Active Patients".to_string(),
            preview: SurveyPreview {
                subject: "Subject: How are we doing, [Name]?".to_string(),
                body: "We value your health journey. Please rate your experience with us on \
                       a scale of 1 to 5."
                    .to_string(),
            },
            preview_state: OpState::default(),
            push_state: OpState::default(),
        }
    }
}

impl SurveyDispatch {
    /// Redrafts the invitation preview for the current title and
    /// audience.
    ///
    /// # Errors
    ///
    /// Refused while a previous draft is in flight. Provider failures
    /// land in the preview as the client's fallback text, not here.
    pub async fn refresh_preview<P: TextProvider>(
        &mut self,
        client: &AiClient<P>,
    ) -> DashboardResult<&SurveyPreview> {
        self.preview_state.begin()?;
        self.preview = client
            .draft_survey_preview(&self.title, &self.target_audience)
            .await;
        self.preview_state.succeed();
        Ok(&self.preview)
    }

    /// Simulated push to the target audience.
    ///
    /// # Errors
    ///
    /// Refused while a push is in flight.
    pub async fn push(&mut self) -> DashboardResult<()> {
        self.push_state.begin()?;
        simulate_transport(SURVEY_DISPATCH_DELAY).await;
        self.push_state.succeed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jemine_ai::{ApiCredential, NullProvider};

    #[test]
    fn seed_stats_headline_numbers() {
        let registry = PatientRegistry::seeded();
        let stats = DashboardStats::compute(&registry);
        assert_eq!(stats.total_patients, 4);
        assert_eq!(stats.avg_adherence, 71);
        assert_eq!(stats.refills_due, 2);
        assert_eq!(stats.critical_patients, 1);
        assert_eq!(stats.active_subscriptions, 2);
        assert!((stats.satisfaction_score - 4.5).abs() < f32::EPSILON);
    }

    #[test]
    fn stats_guard_an_empty_roster() {
        let registry = PatientRegistry::new(Vec::new());
        let stats = DashboardStats::compute(&registry);
        assert_eq!(stats.total_patients, 0);
        assert_eq!(stats.avg_adherence, 0);
    }

    #[test]
    fn refill_campaign_preselects_due_patients() {
        let registry = PatientRegistry::seeded();
        let campaign = RefillCampaign::open(&registry);

        let due: HashSet<String> = registry
            .iter()
            .filter(|p| p.has_refill_due())
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(campaign.selected_count(), due.len());
        for id in &due {
            assert!(campaign.is_selected(id));
        }
    }

    #[test]
    fn candidates_sort_due_first_then_alphabetical() {
        let registry = PatientRegistry::seeded();
        let campaign = RefillCampaign::open(&registry);

        let names: Vec<&str> = campaign
            .candidates(&registry)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Kwame Mensah", "Samuel Kiprotich", "Amara Diop", "Ngozi Okafor"]
        );
    }

    #[test]
    fn candidate_search_covers_name_and_phone() {
        let registry = PatientRegistry::seeded();
        let mut campaign = RefillCampaign::open(&registry);

        campaign.search = "ngozi".to_string();
        assert_eq!(campaign.candidates(&registry).len(), 1);

        let phone = registry.get("P003").expect("seeded").phone.clone();
        campaign.search = phone[phone.len() - 4..].to_string();
        assert!(campaign
            .candidates(&registry)
            .iter()
            .any(|p| p.id == "P003"));
    }

    #[tokio::test(start_paused = true)]
    async fn broadcast_reports_the_selected_count() {
        let registry = PatientRegistry::seeded();
        let mut campaign = RefillCampaign::open(&registry);
        campaign.toggle("P003");

        let sent = campaign.send().await.expect("broadcast completes");
        assert_eq!(sent, 3);
        assert!(campaign.send_state.is_succeeded());
    }

    #[test]
    fn redemption_queue_shrinks_on_approve_and_reject() {
        let mut loyalty = LoyaltyManager::seeded();
        let before = loyalty.pending.len();
        let first = loyalty.pending[0].id;
        let second = loyalty.pending[1].id;

        loyalty.approve(first);
        loyalty.reject(second);
        assert_eq!(loyalty.pending.len(), before - 2);
        assert!(loyalty.pending.iter().all(|r| r.id != first && r.id != second));
    }

    #[test]
    fn rule_add_validates_action_and_points() {
        let mut loyalty = LoyaltyManager::seeded();
        let before = loyalty.rules.len();

        assert!(matches!(
            loyalty.add_rule("", 50, "no action"),
            Err(DashboardError::InvalidLoyaltyRule)
        ));
        assert!(matches!(
            loyalty.add_rule("Weekly check-in", 0, "no points"),
            Err(DashboardError::InvalidLoyaltyRule)
        ));
        assert_eq!(loyalty.rules.len(), before);

        let id = loyalty
            .add_rule("Weekly check-in", 25, "Responded to a check-in message")
            .expect("valid rule");
        assert!(id.starts_with('L'));
        assert_eq!(loyalty.rules.len(), before + 1);

        loyalty.delete_rule(&id);
        assert_eq!(loyalty.rules.len(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn survey_preview_refresh_and_push() {
        let client = AiClient::new(ApiCredential::default(), NullProvider);
        let mut survey = SurveyDispatch::default();
        assert_eq!(survey.preview.subject, "Subject: How are we doing, [Name]?");

        let preview = survey.refresh_preview(&client).await.expect("drafts").clone();
        assert!(preview.subject.contains(&survey.title));

        survey.push().await.expect("push completes");
        assert!(survey.push_state.is_succeeded());
    }
}
