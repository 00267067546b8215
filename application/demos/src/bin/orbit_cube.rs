fn main() -> anyhow::Result<()> {
  demos::run_named("orbit_cube")
}
