// src/deploy/revision.rs
use chrono::Utc;

use crate::config::consts::MANUAL_REVISION_PREFIX;
use crate::core::shell::{CommandSpec, Shell};

pub fn git_short_sha() -> CommandSpec {
    CommandSpec::new("git").args(["rev-parse", "--short", "HEAD"])
}

/// `manual-<unix seconds>`
pub fn manual_revision(unix_secs: i64) -> String {
    format!("{MANUAL_REVISION_PREFIX}{unix_secs}")
}

/// Short commit id from git, or a timestamped manual id when git can't answer.
pub fn short_revision(shell: &mut dyn Shell) -> String {
    match shell.capture(&git_short_sha()) {
        Ok(out) if !out.trim().is_empty() => s!(out.trim()),
        Ok(_) => {
            logw!("git returned an empty revision; using manual id");
            manual_revision(Utc::now().timestamp())
        }
        Err(e) => {
            logw!(error = %e, "git revision lookup failed; using manual id");
            manual_revision(Utc::now().timestamp())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ToolError};

    struct Fixed(Option<&'static str>);

    impl Shell for Fixed {
        fn capture(&mut self, cmd: &CommandSpec) -> Result<String> {
            assert_eq!(cmd.command_line(), "git rev-parse --short HEAD");
            match self.0 {
                Some(out) => Ok(s!(out)),
                None => Err(ToolError::CommandFailed {
                    program: s!("git"),
                    status: s!("exit status: 128"),
                    stderr: s!("fatal: not a git repository"),
                }),
            }
        }
        fn run(&mut self, _cmd: &CommandSpec) -> Result<()> {
            unreachable!("revision lookup never runs interactively")
        }
    }

    struct Garbled;

    impl Shell for Garbled {
        fn capture(&mut self, cmd: &CommandSpec) -> Result<String> {
            Err(ToolError::NonUtf8Output { program: cmd.program.clone() })
        }
        fn run(&mut self, _cmd: &CommandSpec) -> Result<()> {
            unreachable!("revision lookup never runs interactively")
        }
    }

    fn is_manual(rev: &str) -> bool {
        rev.strip_prefix("manual-")
            .is_some_and(|ts| !ts.is_empty() && ts.chars().all(|c| c.is_ascii_digit()))
    }

    #[test]
    fn trims_git_output() {
        assert_eq!(short_revision(&mut Fixed(Some("a1b2c3d\n"))), "a1b2c3d");
    }

    #[test]
    fn falls_back_on_failure_or_empty_output() {
        assert!(is_manual(&short_revision(&mut Fixed(None))));
        assert!(is_manual(&short_revision(&mut Fixed(Some("  \n")))));
    }

    #[test]
    fn falls_back_on_undecodable_output() {
        assert!(is_manual(&short_revision(&mut Garbled)));
    }

    #[test]
    fn manual_revision_format() {
        assert_eq!(manual_revision(1_700_000_000), "manual-1700000000");
    }
}
