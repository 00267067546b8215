fn main() -> anyhow::Result<()> {
  demos::run_named("interactive_points")
}
