fn main() -> anyhow::Result<()> {
  demos::run_named("transparency1")
}
