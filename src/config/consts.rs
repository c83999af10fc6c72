// src/config/consts.rs

// Markup parsing
pub const PLACEHOLDER_HTML: &str = r#"<div id="movements-target">...paste your HTML here...</div>"#;
pub const DEFAULT_CATEGORY_COLOR: &str = "#FFFFFF";
pub const UNKNOWN_CATEGORY: &str = "Unknown";

// Deploy
pub const ENV_FILE: &str = ".env.production";
pub const REQUIRED_ENV_KEYS: [&str; 9] = [
    "NEXT_PUBLIC_FIREBASE_API_KEY",
    "NEXT_PUBLIC_FIREBASE_AUTH_DOMAIN",
    "NEXT_PUBLIC_FIREBASE_PROJECT_ID",
    "NEXT_PUBLIC_FIREBASE_STORAGE_BUCKET",
    "NEXT_PUBLIC_FIREBASE_MESSAGING_SENDER_ID",
    "NEXT_PUBLIC_FIREBASE_APP_ID",
    "GOOGLE_CLIENT_ID",
    "GOOGLE_CLIENT_SECRET",
    "GOOGLE_REDIRECT_URI",
];
pub const SUBSTITUTION_PREFIX: &str = "_"; // Cloud Build user substitutions
pub const SHORT_SHA_KEY: &str = "SHORT_SHA";
pub const MANUAL_REVISION_PREFIX: &str = "manual-";

pub const BUNDLED_GCLOUD: &str = "./google-cloud-sdk/bin/gcloud";
pub const GCLOUD: &str = "gcloud";
pub const CLOUDBUILD_CONFIG: &str = "cloudbuild.yaml";
pub const GCP_PROJECT: &str = "performancecoachapp-26bd1";

// Bundled SDK python is unreliable; pin the system one.
pub const CLOUDSDK_PYTHON_KEY: &str = "CLOUDSDK_PYTHON";
pub const CLOUDSDK_PYTHON: &str = "/usr/bin/python3";
