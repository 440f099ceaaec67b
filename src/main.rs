fn main() -> anyhow::Result<()> {
    yks_planner::run()?;
    Ok(())
}
