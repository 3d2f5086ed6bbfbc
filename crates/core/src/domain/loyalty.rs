//! Loyalty programme catalogue records.

use serde::{Deserialize, Serialize};

/// An earning rule: an action patients are rewarded for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyRule {
    pub id: String,
    /// The rewarded action, e.g. "On-time Refill".
    pub action: String,
    pub points: u32,
    pub description: String,
}

/// Category of a redeemable reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardCategory {
    Discount,
    Product,
    Service,
}

/// A redeemable catalogue item priced in loyalty points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub title: String,
    /// Point cost to redeem.
    pub cost: u32,
    pub category: RewardCategory,
}

/// A patient's redemption request awaiting staff approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRedemption {
    pub id: u32,
    pub patient_name: String,
    pub reward: String,
    pub cost: u32,
}
