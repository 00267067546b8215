fn main() -> anyhow::Result<()> {
  demos::run_named("axes_grid")
}
