use clap::Parser;
use eframe::egui;
use env_logger::Env;
use log::info;

use workout_planner::app::PlannerApp;
use workout_planner::config::Config;
use workout_planner::{FileStore, ScheduleStore};

fn main() -> Result<(), eframe::Error> {
    let config = Config::parse();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or(config.log_level.as_str())
    ).init();

    let storage = FileStore::new(config.data_dir.clone());
    info!("schedule storage: {}", storage.dir().display());
    let store = ScheduleStore::initialize(storage);
    info!("today is {}", store.today());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Workout Planner",
        options,
        Box::new(|_cc| Ok(Box::new(PlannerApp::new(store)))),
    )
}
