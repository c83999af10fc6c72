// src/deploy/mod.rs
//! Production deploy: `.env.production` → Cloud Build substitutions → `gcloud builds submit`.

pub mod env_file;
pub mod revision;
pub mod submit;

use std::io::Write;

use crate::config::{consts::REQUIRED_ENV_KEYS, options::DeployOptions};
use crate::core::shell::{CommandSpec, Shell};
use crate::error::Result;

pub use submit::Substitution;

/// Validate the env file, build the submit command, announce it and run it
/// (unless `dry_run`). Returns the command that was (or would be) run.
pub fn deploy(opts: &DeployOptions, shell: &mut dyn Shell, out: &mut dyn Write) -> Result<CommandSpec> {
    let vars = env_file::load_env_file(&opts.env_file)?;
    let env = env_file::require_keys(&vars, &REQUIRED_ENV_KEYS)?;

    let rev = revision::short_revision(shell);
    logf!(revision = %rev, "resolved revision");

    let subs = submit::substitutions(&env, &rev);
    let cmd = submit::submit_command(opts, &subs);

    writeln!(out, "Running: {}", cmd.command_line())?;
    out.flush()?;

    if opts.dry_run {
        logf!("dry run; not submitting");
        return Ok(cmd);
    }

    shell.run(&cmd)?;
    Ok(cmd)
}
