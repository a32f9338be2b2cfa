use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::model::{FootReading, Reading, round1};

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("cannot aggregate an empty reading series")]
    EmptySeries,
}

/// Step total for one calendar date.
#[derive(Debug, Clone, Serialize)]
pub struct DailySteps {
    pub date: NaiveDate,
    pub total_steps: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FootAverage {
    pub inner: f64,
    pub outer: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AverageFootPressure {
    pub left_foot: FootAverage,
    pub right_foot: FootAverage,
}

/// Response body of `GET /api/data`.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyView {
    pub hourly_data: Vec<Reading>,
    pub daily_steps: Vec<DailySteps>,
    pub average_foot_pressure: AverageFootPressure,
}

#[derive(Debug, Clone, Serialize)]
pub struct FootSummary {
    pub inner_pressure: f64,
    pub outer_pressure: f64,
    pub distribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FootPressureSummary {
    pub left_foot: FootSummary,
    pub right_foot: FootSummary,
}

/// Response body of `GET /api/summary`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub total_steps: u64,
    pub average_heart_rate: f64,
    pub total_calories: u64,
    pub foot_pressure_summary: FootPressureSummary,
}

/// Running inner/outer sums for one foot across the series.
#[derive(Debug, Default)]
struct FootTotals {
    inner: u64,
    outer: u64,
}

impl FootTotals {
    fn add(&mut self, foot: &FootReading) {
        self.inner += u64::from(foot.inner_pressure);
        self.outer += u64::from(foot.outer_pressure);
    }

    fn mean_inner(&self, count: f64) -> f64 {
        round1(self.inner as f64 / count)
    }

    fn mean_outer(&self, count: f64) -> f64 {
        round1(self.outer as f64 / count)
    }
}

/// Build the `/api/data` view: the raw hourly series, step totals per
/// calendar date in ascending date order, and whole-series pressure means.
pub fn hourly_view(readings: &[Reading]) -> Result<HourlyView, AggregateError> {
    if readings.is_empty() {
        return Err(AggregateError::EmptySeries);
    }

    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    let mut left = FootTotals::default();
    let mut right = FootTotals::default();

    for reading in readings {
        *per_day.entry(reading.timestamp.date()).or_insert(0) += reading.steps;
        left.add(&reading.foot_pressure.left_foot);
        right.add(&reading.foot_pressure.right_foot);
    }

    let count = readings.len() as f64;
    let daily_steps = per_day
        .into_iter()
        .map(|(date, total_steps)| DailySteps { date, total_steps })
        .collect();

    Ok(HourlyView {
        hourly_data: readings.to_vec(),
        daily_steps,
        average_foot_pressure: AverageFootPressure {
            left_foot: FootAverage {
                inner: left.mean_inner(count),
                outer: left.mean_outer(count),
            },
            right_foot: FootAverage {
                inner: right.mean_inner(count),
                outer: right.mean_outer(count),
            },
        },
    })
}

/// Build the `/api/summary` view: series-wide totals and per-foot means.
///
/// `distribution` is derived from the already-rounded means rather than
/// from the per-reading ratios.
pub fn summary_view(readings: &[Reading]) -> Result<SummaryView, AggregateError> {
    if readings.is_empty() {
        return Err(AggregateError::EmptySeries);
    }

    let mut total_steps = 0u64;
    let mut total_calories = 0u64;
    let mut heart_rate_sum = 0u64;
    let mut left = FootTotals::default();
    let mut right = FootTotals::default();

    for reading in readings {
        total_steps += u64::from(reading.steps);
        total_calories += u64::from(reading.calories);
        heart_rate_sum += u64::from(reading.heart_rate);
        left.add(&reading.foot_pressure.left_foot);
        right.add(&reading.foot_pressure.right_foot);
    }

    let count = readings.len() as f64;

    Ok(SummaryView {
        total_steps,
        average_heart_rate: round1(heart_rate_sum as f64 / count),
        total_calories,
        foot_pressure_summary: FootPressureSummary {
            left_foot: foot_summary(&left, count),
            right_foot: foot_summary(&right, count),
        },
    })
}

fn foot_summary(totals: &FootTotals, count: f64) -> FootSummary {
    let inner = totals.mean_inner(count);
    let outer = totals.mean_outer(count);
    FootSummary {
        inner_pressure: inner,
        outer_pressure: outer,
        distribution: round1(inner / (inner + outer) * 100.0),
    }
}
