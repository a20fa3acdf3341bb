// mock_data.rs
// Purpose: Synthetic customer generation for demos and tests

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::customer::CustomerRecord;

const SEGMENTS: [&str; 4] = ["Enterprise", "SMB", "Startup", "Individual"];
const REGIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East",
];
const SUBSCRIPTION_TIERS: [&str; 4] = ["Free", "Basic", "Premium", "Enterprise"];
const PRODUCT_CATEGORIES: [&str; 9] = [
    "Analytics",
    "CRM",
    "Marketing",
    "Finance",
    "Sales",
    "Support",
    "HR",
    "Communication",
    "Productivity",
];
const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Generate `count` synthetic customers with a thread-local rng.
pub fn generate_mock_customers(count: usize) -> Vec<CustomerRecord> {
    generate_with(&mut rand::rng(), count, Utc::now())
}

/// Deterministic variant for tests and reproducible demos.
pub fn generate_mock_customers_seeded(count: usize, seed: u64) -> Vec<CustomerRecord> {
    generate_with(&mut StdRng::seed_from_u64(seed), count, Utc::now())
}

fn generate_with<R: Rng>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<CustomerRecord> {
    let mut customers = Vec::with_capacity(count);

    for i in 0..count {
        // Joined one to two years ago, last purchase somewhere since
        let join_date = now - Duration::days(rng.random_range(365..=730));
        let span_days = (now - join_date).num_days();
        let last_purchase_date = join_date + Duration::days(rng.random_range(0..=span_days));

        let tenure_months = span_days / 30;

        let mut categories: Vec<String> = Vec::new();
        let category_count = rng.random_range(1..=3);
        while categories.len() < category_count {
            let category = pick(rng, &PRODUCT_CATEGORIES).to_string();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let support_tickets = rng.random_range(0..=10) as f64;
        let login_frequency = rng.random_range(0..=30) as f64;
        let days_inactive = rng.random_range(0..=60) as f64;
        let monthly_spend = rng.random_range(0..=1000) as f64;

        // Ground-truth churn follows the additive factor probabilities of the
        // dashboard's generator: ticket-heavy, rarely-seen, inactive and
        // low-spend customers are likelier to have churned.
        let churn_probability = 0.1
            + if support_tickets > 5.0 { 0.2 } else { 0.0 }
            + if login_frequency < 10.0 { 0.25 } else { 0.0 }
            + if days_inactive > 30.0 { 0.3 } else { 0.0 }
            + if monthly_spend < 200.0 { 0.15 } else { 0.0 };
        let churn = rng.random::<f64>() < churn_probability;

        customers.push(CustomerRecord {
            id: format!("CUS-{}", 10000 + i),
            name: format!("Customer {}", i + 1),
            email: format!("customer{}@example.com", i + 1),
            age: rng.random_range(22..=65) as f64,
            gender: pick(rng, &GENDERS).to_string(),
            segment: pick(rng, &SEGMENTS).to_string(),
            region: pick(rng, &REGIONS).to_string(),
            join_date,
            subscription_tier: pick(rng, &SUBSCRIPTION_TIERS).to_string(),
            monthly_spend,
            total_spend: monthly_spend * tenure_months as f64,
            last_purchase_date,
            purchase_frequency: rng.random_range(0..=10) as f64,
            product_categories: categories,
            avg_session_time: rng.random_range(1..=60) as f64,
            login_frequency,
            support_tickets,
            days_inactive,
            churn,
            churn_probability: None,
            predicted_churn: None,
        });
    }

    customers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_mock_customers_seeded(25, 42);
        let b = generate_mock_customers_seeded(25, 42);

        assert_eq!(a.len(), 25);
        for (left, right) in a.iter().zip(b.iter()) {
            assert_eq!(left.id, right.id);
            assert_eq!(left.segment, right.segment);
            assert_eq!(left.monthly_spend, right.monthly_spend);
            assert_eq!(left.churn, right.churn);
        }
    }

    #[test]
    fn test_generated_fields_stay_in_range() {
        let now = Utc::now();
        for customer in generate_mock_customers_seeded(100, 1) {
            assert!(customer.age >= 22.0 && customer.age <= 65.0);
            assert!(customer.support_tickets <= 10.0);
            assert!(customer.login_frequency <= 30.0);
            assert!(customer.days_inactive <= 60.0);
            assert!(customer.monthly_spend <= 1000.0);
            assert!(SUBSCRIPTION_TIERS.contains(&customer.subscription_tier.as_str()));
            assert!(SEGMENTS.contains(&customer.segment.as_str()));
            assert!(REGIONS.contains(&customer.region.as_str()));
            assert!(!customer.product_categories.is_empty());
            assert!(customer.product_categories.len() <= 3);
            assert!(customer.join_date <= now);
            assert!(customer.last_purchase_date >= customer.join_date);
            assert!(customer.churn_probability.is_none());
        }
    }

    #[test]
    fn test_total_spend_tracks_tenure() {
        for customer in generate_mock_customers_seeded(20, 9) {
            if customer.monthly_spend == 0.0 {
                assert_eq!(customer.total_spend, 0.0);
                continue;
            }
            // Total spend is monthly spend times a whole tenure-month count
            let months = customer.total_spend / customer.monthly_spend;
            assert_eq!(months.fract(), 0.0);
            assert!((12.0..=24.0).contains(&months));
        }
    }
}
