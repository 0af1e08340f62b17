//! Periodic summary reports.
//!
//! Two independent tasks aggregate the full store and write the result to
//! the log: one every Sunday at 00:00 UTC, one on the first of each month at
//! 00:00 UTC. The jobs are best-effort; they never touch the HTTP surface
//! and a failed run only logs. A report racing a concurrent submission may
//! or may not include it.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use engine::Engine;

/// Spawn the weekly and monthly report jobs.
pub fn spawn(engine: Arc<Engine>) {
    tokio::spawn(report_loop(engine.clone(), "weekly", next_weekly));
    tokio::spawn(report_loop(engine, "monthly", next_monthly));
}

async fn report_loop(
    engine: Arc<Engine>,
    label: &'static str,
    next_fire: fn(DateTime<Utc>) -> DateTime<Utc>,
) {
    loop {
        let now = Utc::now();
        let wait = (next_fire(now) - now).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        emit(&engine, label).await;
    }
}

async fn emit(engine: &Engine, label: &str) {
    let summary = engine.summary().await;
    match serde_json::to_string(&summary) {
        Ok(body) => tracing::info!("{label} expense summary: {body}"),
        Err(err) => tracing::error!("failed to serialize {label} expense summary: {err}"),
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Next Sunday 00:00 UTC strictly after `now`.
fn next_weekly(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let days_ahead = 7 - i64::from(today.weekday().num_days_from_sunday());
    midnight(today + Duration::days(days_ahead))
}

/// First of the next month, 00:00 UTC.
fn next_monthly(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1).map_or_else(|| midnight(today), midnight)
}
