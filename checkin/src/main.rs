mod claimer;
mod config;
mod credentials;
mod error;
mod limiter;
mod orchestrator;
mod report;
mod reward;
mod runner;
mod scheduler;
mod webhook;

#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use config::{Args, Settings};
use log::{error, info};
use runner::Runner;
use scheduler::Scheduler;
use std::process;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    common::setup_env();
    let settings = Settings::load(Args::parse());
    let runner = Runner::new(&settings);

    if settings.run_once {
        runner.run().await?;
        return Ok(());
    }

    let time = match scheduler::parse_time(&settings.schedule_time) {
        Ok(time) => time,
        Err(e) => {
            error!("{e}");
            error!("Exiting");
            process::exit(1);
        }
    };

    let scheduler = Scheduler::new(runner.clone()).await?;
    scheduler.schedule_daily(time).await?;
    scheduler.start().await?;
    info!("Started, checking in every day at {time}");

    if settings.run_on_launch {
        runner.run_logged().await;
    }

    signal::ctrl_c().await?;
    info!("Shutting down");
    scheduler.shutdown().await?;

    Ok(())
}
