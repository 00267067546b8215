use std::process::ExitCode;

use anyhow::Context;
use pico_args::Arguments;
use xshell::{cmd, Shell};

fn main() -> anyhow::Result<ExitCode> {
  let args = std::env::args_os().skip(1).collect::<Vec<_>>();
  let mut args = Arguments::from_vec(args);

  if args.contains(["-h", "--help"]) {
    eprint!("{HELP}");
    return Ok(ExitCode::FAILURE);
  }

  let subcommand = args
    .subcommand()
    .context("Expected subcommand to be UTF-8")?;

  let shell = Shell::new().context("Couldn't create xshell shell")?;
  shell.change_dir(String::from(env!("CARGO_MANIFEST_DIR")) + "/..");

  match subcommand.as_deref() {
    Some("run-demos") => run_demos(&shell)?,
    Some("test-screenshots") => test_screenshots(&shell, false)?,
    Some("regen-screenshots") => test_screenshots(&shell, true)?,
    Some(subcommand) => {
      anyhow::bail!("Unknown subcommand: {}", subcommand)
    }
    None => {
      anyhow::bail!("Expected subcommand")
    }
  }

  Ok(ExitCode::SUCCESS)
}

const HELP: &str = "\
usage: cargo xtask <subcommand>

  run-demos           run every demo headless and check it exits cleanly
  test-screenshots    compare the screenshot flagged demos against references
  regen-screenshots   rerender and overwrite the reference screenshots
";

fn run_demos(shell: &Shell) -> anyhow::Result<()> {
  cmd!(shell, "cargo test -p demos --test run_demos -- --nocapture")
    .env("GLIM_DEMO_E2E", "1")
    .run()
    .context("Failed to run the demo subprocess checks")?;
  Ok(())
}

fn test_screenshots(shell: &Shell, regenerate: bool) -> anyhow::Result<()> {
  let mut cmd = cmd!(shell, "cargo test -p demos --test screenshots -- --nocapture")
    .env("GLIM_DEMO_E2E", "1");
  if regenerate {
    cmd = cmd.env("GLIM_REGENERATE_SCREENSHOTS", "true");
  }
  cmd.run().context("Failed to run the screenshot checks")?;
  Ok(())
}
