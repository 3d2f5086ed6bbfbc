//! In-memory seed state for the dashboard.
//!
//! All records here are hardcoded and fictional; they stand in for a
//! real clinical backend, which this system does not have. Nothing is
//! ever persisted.

use chrono::NaiveDate;
use jemine_types::{AdherenceRate, Rating};

use crate::analytics::AdherencePoint;
use crate::domain::{
    AdherenceStatus, Appointment, AppointmentStatus, CommunicationChannel, LoyaltyRule,
    Medication, Patient, PendingRedemption, Region, RegionTemplate, Reward, RewardCategory,
    SubscriptionStatus, SurveyResponse, TemplateCategory, VitalLog, VitalStatus, VitalType,
};

// Seed literals are known-valid calendar dates.
fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn med(
    id: &str,
    name: &str,
    dosage: &str,
    frequency: &str,
    remaining_supply: u32,
    refill_due: bool,
    instructions: &str,
    price: f64,
) -> Medication {
    Medication {
        id: id.to_string(),
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        remaining_supply,
        refill_due,
        instructions: instructions.to_string(),
        price,
    }
}

fn vital(
    id: &str,
    date: NaiveDate,
    vital_type: VitalType,
    value: &str,
    unit: &str,
    status: VitalStatus,
) -> VitalLog {
    VitalLog {
        id: id.to_string(),
        date,
        vital_type,
        value: value.to_string(),
        unit: unit.to_string(),
        status,
    }
}

/// The four seeded patient records.
pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "P001".to_string(),
            name: "Kwame Mensah".to_string(),
            age: 45,
            phone: "+233 24 123 4567".to_string(),
            email: "kwame.m@example.com".to_string(),
            language: "English".to_string(),
            condition: "Hypertension".to_string(),
            adherence_rate: AdherenceRate::clamped(92),
            status: AdherenceStatus::Excellent,
            subscription_status: SubscriptionStatus::Active,
            communication_preference: CommunicationChannel::WhatsApp,
            loyalty_points: 450,
            medications: vec![
                med("M1", "Lisinopril", "10mg", "Daily", 14, false, "Take in the morning with food", 45.00),
                med("M2", "Amlodipine", "5mg", "Daily", 5, true, "Take before bed", 30.00),
            ],
            appointments: vec![
                Appointment {
                    id: "A1".to_string(),
                    date: ymd(2023, 11, 15),
                    time: "09:00 AM".to_string(),
                    label: "Cardiology Check-up".to_string(),
                    provider: "Dr. Bello".to_string(),
                    status: AppointmentStatus::Scheduled,
                },
                Appointment {
                    id: "A2".to_string(),
                    date: ymd(2023, 10, 1),
                    time: "10:30 AM".to_string(),
                    label: "Lab Work".to_string(),
                    provider: "General Lab".to_string(),
                    status: AppointmentStatus::Completed,
                },
            ],
            vitals: vec![
                vital("V1", ymd(2023, 10, 24), VitalType::BloodPressure, "120/80", "mmHg", VitalStatus::Normal),
                vital("V2", ymd(2023, 10, 20), VitalType::BloodPressure, "125/82", "mmHg", VitalStatus::Normal),
                vital("V3", ymd(2023, 10, 15), VitalType::BloodPressure, "130/85", "mmHg", VitalStatus::Warning),
                vital("V4", ymd(2023, 10, 10), VitalType::BloodPressure, "128/84", "mmHg", VitalStatus::Normal),
            ],
            last_contact: ymd(2023, 10, 24),
        },
        Patient {
            id: "P002".to_string(),
            name: "Ngozi Okafor".to_string(),
            age: 62,
            phone: "+234 80 987 6543".to_string(),
            email: "ngozi.o@example.com".to_string(),
            language: "Igbo".to_string(),
            condition: "Type 2 Diabetes".to_string(),
            adherence_rate: AdherenceRate::clamped(65),
            status: AdherenceStatus::AtRisk,
            subscription_status: SubscriptionStatus::Active,
            communication_preference: CommunicationChannel::Sms,
            loyalty_points: 120,
            medications: vec![med(
                "M3", "Metformin", "500mg", "Twice Daily", 20, false, "Take with meals", 25.50,
            )],
            appointments: vec![Appointment {
                id: "A3".to_string(),
                date: ymd(2023, 11, 5),
                time: "02:00 PM".to_string(),
                label: "Endocrinology Review".to_string(),
                provider: "Dr. Mensah".to_string(),
                status: AppointmentStatus::Scheduled,
            }],
            vitals: vec![
                vital("V5", ymd(2023, 10, 24), VitalType::BloodSugar, "180", "mg/dL", VitalStatus::Warning),
                vital("V6", ymd(2023, 10, 20), VitalType::BloodSugar, "165", "mg/dL", VitalStatus::Warning),
            ],
            last_contact: ymd(2023, 10, 20),
        },
        Patient {
            id: "P003".to_string(),
            name: "Amara Diop".to_string(),
            age: 34,
            phone: "+221 77 654 3210".to_string(),
            email: "amara.d@example.com".to_string(),
            language: "French".to_string(),
            condition: "Asthma".to_string(),
            adherence_rate: AdherenceRate::clamped(88),
            status: AdherenceStatus::Good,
            subscription_status: SubscriptionStatus::Inactive,
            communication_preference: CommunicationChannel::Email,
            loyalty_points: 300,
            medications: vec![med(
                "M4", "Albuterol Inhaler", "90mcg", "As needed", 100, false,
                "Use for sudden symptoms", 120.00,
            )],
            appointments: Vec::new(),
            vitals: Vec::new(),
            last_contact: ymd(2023, 10, 25),
        },
        Patient {
            id: "P004".to_string(),
            name: "Samuel Kiprotich".to_string(),
            age: 55,
            phone: "+254 71 234 5678".to_string(),
            email: "sam.k@example.com".to_string(),
            language: "Swahili".to_string(),
            condition: "Hypertension".to_string(),
            adherence_rate: AdherenceRate::clamped(40),
            status: AdherenceStatus::Critical,
            subscription_status: SubscriptionStatus::Unsubscribed,
            communication_preference: CommunicationChannel::PhoneCall,
            loyalty_points: 50,
            medications: vec![med(
                "M1", "Lisinopril", "20mg", "Daily", 2, true, "Take every morning", 55.00,
            )],
            appointments: vec![Appointment {
                id: "A4".to_string(),
                date: ymd(2023, 10, 10),
                time: "11:00 AM".to_string(),
                label: "Cardiology Check-up".to_string(),
                provider: "Dr. Bello".to_string(),
                status: AppointmentStatus::Missed,
            }],
            vitals: vec![vital(
                "V7", ymd(2023, 10, 15), VitalType::BloodPressure, "150/95", "mmHg",
                VitalStatus::Critical,
            )],
            last_contact: ymd(2023, 10, 15),
        },
    ]
}

/// The five seeded region templates.
pub fn templates() -> Vec<RegionTemplate> {
    let tpl = |id: &str, title: &str, region, category, content: &str| RegionTemplate {
        id: id.to_string(),
        title: title.to_string(),
        region,
        category,
        content: content.to_string(),
    };

    vec![
        tpl(
            "T1",
            "Formal Elder Greeting (Ghana/Nigeria)",
            Region::WestAfrica,
            TemplateCategory::Reminder,
            "Good morning Papa/Mama [Name]. We trust the family is well. This is a respectful \
             reminder from the pharmacy to take your morning medication.",
        ),
        tpl(
            "T2",
            "Direct & Warm (Kenya)",
            Region::EastAfrica,
            TemplateCategory::Refill,
            "Habari [Name]. Hope your week is going well. Your prescription is due for a refill \
             in 3 days. Shall we prepare it for pickup?",
        ),
        tpl(
            "T3",
            "Francophone Professional",
            Region::WestAfrica,
            TemplateCategory::Welcome,
            "Bonjour [Name]. Bienvenue à notre programme de santé. N'hésitez pas à nous \
             contacter si vous avez des questions.",
        ),
        tpl(
            "T4",
            "Community Check-in (General)",
            Region::General,
            TemplateCategory::Reminder,
            "Hello [Name], just checking in on your health goals for this week. Remember, small \
             steps lead to big changes!",
        ),
        tpl(
            "T5",
            "Ubuntu Style Support (Southern)",
            Region::SouthernAfrica,
            TemplateCategory::Reminder,
            "Sawubona [Name]. We are here to support your health journey together. Please \
             remember your scheduled check-up tomorrow.",
        ),
    ]
}

/// The four seeded loyalty earning rules.
pub fn loyalty_rules() -> Vec<LoyaltyRule> {
    let rule = |id: &str, action: &str, points, description: &str| LoyaltyRule {
        id: id.to_string(),
        action: action.to_string(),
        points,
        description: description.to_string(),
    };

    vec![
        rule("L1", "On-time Refill", 50, "Earn points for picking up medication before due date."),
        rule("L2", "Adherence Streak (7 Days)", 25, "Earn points for a week of perfect medication logging."),
        rule("L3", "Attend Check-up", 100, "Earn points for attending a scheduled doctor visit."),
        rule("L4", "Update Vitals", 10, "Earn points for logging blood pressure or sugar levels."),
    ]
}

/// The fixed rewards catalogue.
pub fn reward_catalog() -> Vec<Reward> {
    let reward = |id: &str, title: &str, cost, category| Reward {
        id: id.to_string(),
        title: title.to_string(),
        cost,
        category,
    };

    vec![
        reward("R1", "Free Consultation", 500, RewardCategory::Service),
        reward("R2", "10% Off Medication", 200, RewardCategory::Discount),
        reward("R3", "Wellness Check", 300, RewardCategory::Service),
        reward("R4", "Diabetes Care Kit", 1000, RewardCategory::Product),
    ]
}

/// Redemption requests waiting for staff approval.
pub fn pending_redemptions() -> Vec<PendingRedemption> {
    let pending = |id, patient_name: &str, reward: &str, cost| PendingRedemption {
        id,
        patient_name: patient_name.to_string(),
        reward: reward.to_string(),
        cost,
    };

    vec![
        pending(1, "Kwame Mensah", "10% Discount Consultation", 200),
        pending(2, "Amara Diop", "Free Diabetes Screening", 450),
        pending(3, "Ngozi Okafor", "Pharmacy Voucher ($10)", 300),
    ]
}

/// The five seeded survey responses.
pub fn survey_responses() -> Vec<SurveyResponse> {
    let response = |id: &str, patient_name: &str, date, rating, comment: &str| SurveyResponse {
        id: id.to_string(),
        patient_name: patient_name.to_string(),
        date,
        rating: Rating::clamped(rating),
        comment: comment.to_string(),
    };

    vec![
        response("S1", "Kwame Mensah", ymd(2023, 10, 20), 5, "Very helpful reminders."),
        response("S2", "Ngozi Okafor", ymd(2023, 10, 21), 4, "Good service but app is slow sometimes."),
        response("S3", "Amara Diop", ymd(2023, 10, 22), 5, "J'adore le service."),
        response("S4", "Samuel Kiprotich", ymd(2023, 10, 23), 2, "Too many messages."),
        response("S5", "Anonymous", ymd(2023, 10, 24), 5, "Life saver."),
    ]
}

/// Weekly adherence history shown on the dashboard chart.
pub fn adherence_history() -> Vec<AdherencePoint> {
    [("Week 1", 78), ("Week 2", 82), ("Week 3", 80), ("Week 4", 85), ("Week 5", 88)]
        .into_iter()
        .map(|(label, value)| AdherencePoint {
            label: label.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_patients_are_coherent() {
        let patients = patients();
        assert_eq!(patients.len(), 4);
        assert!(patients.iter().filter(|p| p.has_refill_due()).count() == 2);
        assert!(patients.iter().all(|p| !p.id.is_empty()));
    }

    #[test]
    fn seed_catalogues_have_expected_sizes() {
        assert_eq!(templates().len(), 5);
        assert_eq!(loyalty_rules().len(), 4);
        assert_eq!(reward_catalog().len(), 4);
        assert_eq!(pending_redemptions().len(), 3);
        assert_eq!(survey_responses().len(), 5);
        assert_eq!(adherence_history().len(), 5);
    }
}
