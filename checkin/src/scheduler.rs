use crate::error::Error;
use crate::runner::Runner;
use anyhow::Result;
use chrono::{Local, NaiveTime, Timelike};
use tokio_cron_scheduler::{Job, JobScheduler};

/// Parses `HH:MM` or `HH:MM:SS`, each part exactly two digits.
pub(crate) fn parse_time(value: &str) -> std::result::Result<NaiveTime, Error> {
    let invalid = || Error::ScheduleTime(value.to_string());

    let parts: Vec<&str> = value.split(':').collect();
    if !(2..=3).contains(&parts.len())
        || parts
            .iter()
            .any(|part| part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let number = |i: usize| parts.get(i).map_or(Ok(0), |part| part.parse::<u32>());
    match (number(0), number(1), number(2)) {
        (Ok(hour), Ok(min), Ok(sec)) => NaiveTime::from_hms_opt(hour, min, sec).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Six-field cron expression firing once a day at `time`.
fn daily_cron(time: NaiveTime) -> String {
    format!("{} {} {} * * *", time.second(), time.minute(), time.hour())
}

pub(crate) struct Scheduler {
    runner: Runner,
    scheduler: JobScheduler,
}

impl Scheduler {
    pub(crate) async fn new(runner: Runner) -> Result<Self> {
        let scheduler = JobScheduler::new().await?;
        Ok(Self { runner, scheduler })
    }

    pub(crate) async fn schedule_daily(&self, time: NaiveTime) -> Result<()> {
        let runner = self.runner.clone();

        let job = Job::new_async_tz(daily_cron(time).as_str(), Local, move |_uuid, _l| {
            let runner = runner.clone();
            Box::pin(async move { runner.run_logged().await })
        })?;

        self.scheduler.add(job).await?;
        Ok(())
    }

    pub(crate) async fn start(&self) -> Result<()> {
        self.scheduler.start().await?;
        Ok(())
    }

    pub(crate) async fn shutdown(mut self) -> Result<()> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}
