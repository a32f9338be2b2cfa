mod aggregate;
mod generate;
mod model;

pub use aggregate::{
    AggregateError, AverageFootPressure, DailySteps, FootAverage, FootSummary,
    FootPressureSummary, HourlyView, SummaryView, hourly_view, summary_view,
};
pub use generate::{Sampler, generate_series, generate_window};
pub use model::{FootPressure, FootReading, Reading};
