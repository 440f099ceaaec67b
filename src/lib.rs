pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod planner;
pub mod snapshot;

use serde::Serialize;
use std::path::PathBuf;

use crate::clock::ExamCountdown;
use crate::config::planner::{get_planner_config, PlannerConfig};
use crate::error::PlannerError;
use crate::planner::weekly::{weekly_plan, WeeklyPlan};
use crate::planner::{MonthlyPlanEntry, Plan};
use crate::snapshot::{store, UserSnapshot};

pub use crate::planner::plan;

/// Where the binary reads its snapshot from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    File(PathBuf),
    User(String),
}

impl SnapshotSource {
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, PlannerError> {
        let args: Vec<String> = args.into_iter().collect();
        match args.as_slice() {
            [flag, name] if flag == "--user" => Ok(SnapshotSource::User(name.clone())),
            [path] if !path.starts_with("--") => Ok(SnapshotSource::File(PathBuf::from(path))),
            _ => Err(PlannerError::new(
                "usage: yks-planner <snapshot.json> | --user <name>",
                "args"
            )),
        }
    }

    pub async fn load(&self, config: &PlannerConfig) -> Result<UserSnapshot, PlannerError> {
        let loaded = match self {
            SnapshotSource::File(path) => store::load_snapshot(path).await?,
            SnapshotSource::User(name) => store::load_snapshot_for_user(&config.data_dir, name).await?,
        };
        loaded.ok_or_else(|| {
            PlannerError::new("Snapshot not found", "snapshot")
                .with_context(format!("{:?}", self))
        })
    }

    fn username(&self) -> Option<&str> {
        match self {
            SnapshotSource::User(name) => Some(name),
            SnapshotSource::File(_) => None,
        }
    }
}

/// Everything the dashboard needs for one render.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub plan: &'a Plan,
    pub upcoming: &'a [MonthlyPlanEntry],
    pub countdown: ExamCountdown,
    pub week: WeeklyPlan,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a Plan, countdown: ExamCountdown) -> Self {
        PlanReport {
            plan,
            upcoming: plan.upcoming(countdown.months_remaining),
            countdown,
            week: weekly_plan(plan, countdown.today),
        }
    }
}

pub fn run() -> Result<(), PlannerError> {
    logging::init_logging();
    tracing::info!("yks-planner starting");

    let config = get_planner_config();
    let source = SnapshotSource::from_args(std::env::args().skip(1))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| PlannerError::new(
            format!("Failed to create async runtime: {}", e),
            "startup"
        ))?;
    let snapshot = rt.block_on(source.load(config))?;

    let plan = plan(&snapshot);
    logging::log_plan_summary(source.username(), &plan);

    let report = PlanReport::new(&plan, ExamCountdown::now(config));
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}
