//! Taskdeck binary
//!
//! Wires the production store (counting id generator, todo reducer)
//! to the terminal screen.

use std::time::Duration;

use anyhow::Result;
use taskdeck_app::{
    Config, Screen, Task, TaskId, TodoEnvironment, TodoReducer, TodoState,
};
use taskdeck_core::environment::CountingIdGenerator;
use taskdeck_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck_app=info,taskdeck_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "Starting taskdeck");

    // Seed task ids start at 1; the generator hands out ids above them
    let (tasks, last_seed_id) = match &config.seed_title {
        Some(title) => (vec![Task::new(TaskId::new(1), title.clone())], 1),
        None => (Vec::new(), 0),
    };

    let env = TodoEnvironment::new(CountingIdGenerator::starting_after(last_seed_id));
    let store = Store::new(TodoState::with_tasks(tasks), TodoReducer::new(), env);

    Screen::new(store, Duration::from_millis(config.tick_ms)).run()
}
