mod config;

use std::process;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info};
use machine_learning::{
    storage::{self, LayerParams},
    training::TrainerBuilder,
};

use config::AppConfig;

fn run() -> Result<()> {
    let AppConfig { training, dataset } = AppConfig::from_env()?;
    let dataset = dataset.build()?;

    info!("data used: {dataset}");
    info!(
        "eta: {}, epochs: {}, lambda: {}, batch size: {}, activation: {}, regularization: {}",
        training.learning_rate,
        training.epochs,
        training.lambda,
        training.batch_size,
        training.act_fn,
        training.reg_fn
    );

    let mut trainer = TrainerBuilder::new()
        .build(&training, dataset)
        .context("failed to set up training")?;
    let report = trainer.run()?;

    info!(
        "final bias: {}, final weight: {}",
        report.params.bias, report.params.weight
    );

    storage::save(&[LayerParams::from(report.params)], config::model_path())
        .context("failed to save the trained model")?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e:#}");
        process::exit(1);
    }
}
