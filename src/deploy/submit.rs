// src/deploy/submit.rs
use std::fmt;

use crate::config::consts::{CLOUDSDK_PYTHON, CLOUDSDK_PYTHON_KEY, SHORT_SHA_KEY, SUBSTITUTION_PREFIX};
use crate::config::options::DeployOptions;
use crate::core::shell::CommandSpec;

/// One `KEY=value` pair handed to Cloud Build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    pub key: String,
    pub value: String,
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// `_KEY=value` for each env pair in order, then `SHORT_SHA=<revision>`.
pub fn substitutions(env: &[(&str, String)], revision: &str) -> Vec<Substitution> {
    env.iter()
        .map(|(k, v)| Substitution { key: format!("{SUBSTITUTION_PREFIX}{k}"), value: v.clone() })
        .chain(std::iter::once(Substitution { key: s!(SHORT_SHA_KEY), value: s!(revision) }))
        .collect()
}

/// Comma-joined, as `--substitutions` expects. Values are not escaped.
pub fn substitutions_arg(subs: &[Substitution]) -> String {
    subs.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// `gcloud builds submit --config <cfg> . --project <id> --substitutions=<subs>`
pub fn submit_command(opts: &DeployOptions, subs: &[Substitution]) -> CommandSpec {
    let substitutions = format!("--substitutions={}", substitutions_arg(subs));
    CommandSpec::new(opts.resolve_gcloud())
        .args(args!["builds", "submit", "--config", opts.build_config, ".", "--project", opts.project, substitutions])
        .env(CLOUDSDK_PYTHON_KEY, CLOUDSDK_PYTHON)
}
