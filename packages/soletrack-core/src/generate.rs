use chrono::{Duration, Local, NaiveDateTime};
use rand::Rng;

use crate::model::{FootPressure, FootReading, Reading, round1};

const HOURS_PER_DAY: u32 = 24;

/// Uniform draw source feeding the generator; both bounds are inclusive.
///
/// Any `rand` RNG works through the blanket impl below. Tests substitute a
/// deterministic implementation to get reproducible series.
pub trait Sampler {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32;
    fn float_in(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: Rng> Sampler for R {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.gen_range(lo..=hi)
    }

    fn float_in(&mut self, lo: f64, hi: f64) -> f64 {
        self.gen_range(lo..=hi)
    }
}

/// Generate the default window: `days` days of hourly readings, starting
/// `days` ago on the local clock, drawn from the thread-local RNG.
pub fn generate_window(days: u32) -> Vec<Reading> {
    let start = Local::now().naive_local() - Duration::days(i64::from(days));
    generate_series(&mut rand::thread_rng(), days, start)
}

/// Produce `days * 24` readings at hourly steps beginning at `start`,
/// in ascending timestamp order. All fields are independent uniform draws.
pub fn generate_series<S: Sampler>(sampler: &mut S, days: u32, start: NaiveDateTime) -> Vec<Reading> {
    let mut readings = Vec::with_capacity((days * HOURS_PER_DAY) as usize);
    for day in 0..days {
        for hour in 0..HOURS_PER_DAY {
            let at = start + Duration::days(i64::from(day)) + Duration::hours(i64::from(hour));
            readings.push(sample_reading(sampler, at));
        }
    }
    readings
}

fn sample_reading<S: Sampler>(sampler: &mut S, at: NaiveDateTime) -> Reading {
    Reading {
        timestamp: at,
        heart_rate: sampler.int_in(60, 100),
        steps: sampler.int_in(0, 500),
        temperature: round1(sampler.float_in(36.0, 37.5)),
        pressure: sampler.int_in(800, 1000),
        calories: sampler.int_in(0, 100),
        foot_pressure: FootPressure {
            left_foot: sample_foot(sampler),
            right_foot: sample_foot(sampler),
        },
    }
}

// The outer draw starts at 1, keeping the balance ratio strictly below 100.
fn sample_foot<S: Sampler>(sampler: &mut S) -> FootReading {
    FootReading::new(sampler.int_in(60, 100), sampler.int_in(1, 40))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn start_of(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_series_has_one_entry_per_hour() {
        let mut rng = StdRng::seed_from_u64(42);
        let readings = generate_series(&mut rng, 7, start_of("2026-07-28 09:00:00"));
        assert_eq!(readings.len(), 168);

        let mut rng = StdRng::seed_from_u64(42);
        let readings = generate_series(&mut rng, 1, start_of("2026-07-28 09:00:00"));
        assert_eq!(readings.len(), 24);
    }

    #[test]
    fn test_timestamps_ascend_in_hourly_steps() {
        let mut rng = StdRng::seed_from_u64(7);
        let readings = generate_series(&mut rng, 3, start_of("2026-08-01 00:00:00"));

        for pair in readings.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::hours(1));
        }
    }

    #[test]
    fn test_series_spans_the_requested_days() {
        let mut rng = StdRng::seed_from_u64(99);
        let days = 7;
        let readings = generate_series(&mut rng, days, start_of("2026-07-28 09:00:00"));

        let first = readings.first().unwrap().timestamp;
        let last = readings.last().unwrap().timestamp;
        assert_eq!(last - first, Duration::days(i64::from(days)) - Duration::hours(1));
        assert_eq!(first.hour(), 9);
        assert_eq!(last.hour(), 8);
    }

    #[test]
    fn test_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(123);
        let readings = generate_series(&mut rng, 7, start_of("2026-07-28 00:00:00"));

        for reading in &readings {
            assert!((60..=100).contains(&reading.heart_rate));
            assert!(reading.steps <= 500);
            assert!((36.0..=37.5).contains(&reading.temperature));
            assert!((800..=1000).contains(&reading.pressure));
            assert!(reading.calories <= 100);

            for foot in [
                &reading.foot_pressure.left_foot,
                &reading.foot_pressure.right_foot,
            ] {
                assert!((60..=100).contains(&foot.inner_pressure));
                assert!((1..=40).contains(&foot.outer_pressure));
            }
        }
    }

    #[test]
    fn test_balance_percentage_is_strictly_between_zero_and_hundred() {
        let mut rng = StdRng::seed_from_u64(31337);
        let readings = generate_series(&mut rng, 7, start_of("2026-07-28 00:00:00"));

        for reading in &readings {
            for foot in [
                &reading.foot_pressure.left_foot,
                &reading.foot_pressure.right_foot,
            ] {
                assert!(foot.balance_percentage > 0.0);
                assert!(foot.balance_percentage < 100.0);

                let total = f64::from(foot.inner_pressure + foot.outer_pressure);
                let expected =
                    (f64::from(foot.inner_pressure) / total * 100.0 * 10.0).round() / 10.0;
                assert_eq!(foot.balance_percentage, expected);
            }
        }
    }

    #[test]
    fn test_fixed_sampler_produces_exact_readings() {
        struct FixedSampler;

        impl Sampler for FixedSampler {
            fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
                match (lo, hi) {
                    (60, 100) => 80,  // heart rate and inner pressure
                    (1, 40) => 20,    // outer pressure
                    (0, 500) => 100,  // steps
                    (800, 1000) => 900,
                    (0, 100) => 50,   // calories
                    _ => lo,
                }
            }

            fn float_in(&mut self, _lo: f64, _hi: f64) -> f64 {
                36.5
            }
        }

        let readings = generate_series(&mut FixedSampler, 1, start_of("2026-08-01 00:00:00"));
        assert_eq!(readings.len(), 24);

        for reading in &readings {
            assert_eq!(reading.heart_rate, 80);
            assert_eq!(reading.steps, 100);
            assert_eq!(reading.temperature, 36.5);
            assert_eq!(reading.pressure, 900);
            assert_eq!(reading.calories, 50);
            assert_eq!(reading.foot_pressure.left_foot.inner_pressure, 80);
            assert_eq!(reading.foot_pressure.left_foot.outer_pressure, 20);
            assert_eq!(reading.foot_pressure.left_foot.balance_percentage, 80.0);
            assert_eq!(reading.foot_pressure.right_foot.balance_percentage, 80.0);
        }
    }

    #[test]
    fn test_generate_window_defaults() {
        let readings = generate_window(7);
        assert_eq!(readings.len(), 168);
        for pair in readings.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }
}
