// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportMode {
    /// Counts, per-section listings, then JSON.
    Full,
    /// JSON only, for piping into the importer.
    JsonOnly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Saved page. `None` parses the built-in placeholder.
    pub input: Option<PathBuf>,
    pub mode: ReportMode,
    /// Also write the JSON document here.
    pub json_out: Option<PathBuf>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            input: None,
            mode: ReportMode::Full,
            json_out: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployOptions {
    pub env_file: PathBuf,
    pub project: String,
    pub build_config: String,
    /// Explicit gcloud binary; otherwise the bundled SDK, then PATH.
    pub gcloud: Option<String>,
    /// Directory searched for the bundled SDK.
    pub workdir: PathBuf,
    pub dry_run: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(ENV_FILE),
            project: s!(GCP_PROJECT),
            build_config: s!(CLOUDBUILD_CONFIG),
            gcloud: None,
            workdir: PathBuf::from("."),
            dry_run: false,
        }
    }
}

impl DeployOptions {
    /// gcloud program to launch: explicit override, bundled SDK if present, else PATH.
    pub fn resolve_gcloud(&self) -> String {
        if let Some(g) = &self.gcloud {
            return g.clone();
        }
        if self.workdir.join(BUNDLED_GCLOUD).exists() {
            s!(BUNDLED_GCLOUD)
        } else {
            s!(GCLOUD)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_deploy() {
        let d = DeployOptions::default();
        assert_eq!(d.env_file, PathBuf::from(".env.production"));
        assert_eq!(d.project, "performancecoachapp-26bd1");
        assert_eq!(d.build_config, "cloudbuild.yaml");
        assert!(!d.dry_run);
    }

    #[test]
    fn gcloud_prefers_override_then_bundled() {
        let dir = std::env::temp_dir().join("pca_gcloud_resolve");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let mut d = DeployOptions { workdir: dir.clone(), ..Default::default() };
        assert_eq!(d.resolve_gcloud(), "gcloud");

        let bin = dir.join("google-cloud-sdk/bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("gcloud"), "").unwrap();
        assert_eq!(d.resolve_gcloud(), "./google-cloud-sdk/bin/gcloud");

        d.gcloud = Some(s!("/opt/gcloud"));
        assert_eq!(d.resolve_gcloud(), "/opt/gcloud");
    }
}
