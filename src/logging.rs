/// Initialize structured logging with tracing.
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr)
                .json()
        )
        .try_init();

    match installed {
        Ok(()) => tracing::info!("Structured logging initialized"),
        Err(e) => tracing::debug!(error = %e, "Tracing subscriber already set"),
    }
}

/// Log a computed plan summary. The planner itself never logs.
pub fn log_plan_summary(username: Option<&str>, plan: &crate::planner::Plan) {
    tracing::info!(
        user = username.unwrap_or("-"),
        tempo = plan.tempo.label(),
        month_offset = plan.month_offset,
        progress = plan.progress.value(),
        score = plan.current_score.value(),
        daily_hours = %plan.daily_hours,
        "Plan generated"
    );
}
