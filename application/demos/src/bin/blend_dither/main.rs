fn main() -> anyhow::Result<()> {
  demos::run_named("blend_dither")
}
