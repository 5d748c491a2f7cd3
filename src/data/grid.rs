//! Uptime/downtime grid generation

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::types::{DayStatus, SlotStatus};

/// When the grid is regenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GridPolicy {
    /// Fresh draws on every state-changing interaction.
    #[default]
    Reroll,
    /// Drawn once and kept for the lifetime of the view.
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGrid {
    pub time_slots: Vec<String>,
    pub rows: Vec<DayStatus>,
}

impl StatusGrid {
    /// Column headings: even-indexed slot labels, blank in between.
    pub fn header_labels(&self) -> Vec<String> {
        self.time_slots
            .iter()
            .enumerate()
            .map(|(i, slot)| if i % 2 == 0 { slot.clone() } else { String::new() })
            .collect()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.slots.len()).sum()
    }

    pub fn up_ratio(&self) -> f64 {
        let total = self.cell_count();
        if total == 0 {
            return 0.0;
        }
        let up: usize = self.rows.iter().map(DayStatus::up_count).sum();
        up as f64 / total as f64
    }
}

/// Labels like `18 Nov` for `count` consecutive days starting at `start`.
pub fn day_labels(start: NaiveDate, count: usize) -> Vec<String> {
    start
        .iter_days()
        .take(count)
        .map(|d| d.format("%-d %b").to_string())
        .collect()
}

/// Draws every cell independently: `Up` with probability `up_probability`.
pub fn generate_grid<R: Rng>(
    days: &[String],
    time_slots: &[String],
    up_probability: f64,
    rng: &mut R,
) -> StatusGrid {
    let p = up_probability.clamp(0.0, 1.0);
    let rows = days
        .iter()
        .map(|day| DayStatus {
            day: day.clone(),
            slots: (0..time_slots.len())
                .map(|_| if rng.gen_bool(p) { SlotStatus::Up } else { SlotStatus::Down })
                .collect(),
        })
        .collect();

    StatusGrid {
        time_slots: time_slots.to_vec(),
        rows,
    }
}

/// Owns the random source and the grid dimensions.
#[derive(Debug, Clone)]
pub struct GridGenerator {
    days: Vec<String>,
    time_slots: Vec<String>,
    up_probability: f64,
    policy: GridPolicy,
    rng: StdRng,
}

impl GridGenerator {
    pub fn new(
        days: Vec<String>,
        time_slots: Vec<String>,
        up_probability: f64,
        policy: GridPolicy,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            days,
            time_slots,
            up_probability,
            policy,
            rng,
        }
    }

    pub fn policy(&self) -> GridPolicy {
        self.policy
    }

    pub fn generate(&mut self) -> StatusGrid {
        trace!(
            days = self.days.len(),
            slots = self.time_slots.len(),
            "generating status grid"
        );
        generate_grid(&self.days, &self.time_slots, self.up_probability, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples;
    use proptest::prelude::*;

    fn sample_days() -> Vec<String> {
        day_labels(NaiveDate::from_ymd_opt(2024, 11, 18).unwrap(), 7)
    }

    #[test]
    fn test_day_labels_match_sample_week() {
        assert_eq!(
            sample_days(),
            ["18 Nov", "19 Nov", "20 Nov", "21 Nov", "22 Nov", "23 Nov", "24 Nov"]
        );
    }

    #[test]
    fn test_day_labels_cross_month_without_padding() {
        let labels = day_labels(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(), 3);
        assert_eq!(labels, ["30 Nov", "1 Dec", "2 Dec"]);
    }

    #[test]
    fn test_default_grid_is_seven_by_twelve() {
        let mut generator = GridGenerator::new(
            sample_days(),
            samples::time_slots(),
            0.8,
            GridPolicy::Reroll,
            None,
        );
        let grid = generator.generate();
        assert_eq!(grid.rows.len(), 7);
        assert!(grid.rows.iter().all(|r| r.slots.len() == 12));
    }

    #[test]
    fn test_header_labels_blank_odd_slots() {
        let grid = generate_grid(
            &sample_days(),
            &samples::time_slots(),
            0.8,
            &mut StdRng::seed_from_u64(1),
        );
        let labels = grid.header_labels();
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[1], "");
        assert_eq!(labels[2], "00:25");
        assert_eq!(labels[11], "");
    }

    #[test]
    fn test_same_seed_same_grid() {
        let make = || {
            GridGenerator::new(sample_days(), samples::time_slots(), 0.8, GridPolicy::Stable, Some(42))
                .generate()
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn test_extreme_probabilities() {
        let days = sample_days();
        let slots = samples::time_slots();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_grid(&days, &slots, 1.0, &mut rng).up_ratio(), 1.0);
        assert_eq!(generate_grid(&days, &slots, 0.0, &mut rng).up_ratio(), 0.0);
    }

    #[test]
    fn test_up_ratio_near_probability() {
        let days: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let slots: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let grid = generate_grid(&days, &slots, 0.8, &mut StdRng::seed_from_u64(2024));
        let ratio = grid.up_ratio();
        assert!((0.75..0.85).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn test_empty_grid_ratio_is_zero() {
        let grid = generate_grid(&[], &[], 0.8, &mut StdRng::seed_from_u64(0));
        assert_eq!(grid.up_ratio(), 0.0);
        assert_eq!(grid.cell_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_grid_shape_follows_labels(seed in any::<u64>(), days in 0usize..20, slots in 0usize..30, p in 0.0f64..=1.0) {
            let day_labels: Vec<String> = (0..days).map(|i| format!("d{i}")).collect();
            let slot_labels: Vec<String> = (0..slots).map(|i| format!("s{i}")).collect();
            let grid = generate_grid(&day_labels, &slot_labels, p, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(grid.rows.len(), days);
            prop_assert_eq!(grid.cell_count(), days * slots);
            for (row, label) in grid.rows.iter().zip(&day_labels) {
                prop_assert_eq!(&row.day, label);
            }
        }
    }
}
