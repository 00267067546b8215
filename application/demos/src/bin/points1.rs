fn main() -> anyhow::Result<()> {
  demos::run_named("points1")
}
