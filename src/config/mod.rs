use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    editor::EditorSettings,
    errors::OnboardingError,
    media::AcceptFilter,
    pricing::PricingConfig,
    render::OutputPreferences,
    screens::plan::{PaymentMethod, Plan},
    utils::paths::{app_data_dir, config_file_in, ensure_dir},
};

const TMP_SUFFIX: &str = "tmp";

/// Accept lists for each kind of upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub images: AcceptFilter,
    pub video: AcceptFilter,
    pub ownership_documents: AcceptFilter,
    pub role_documents: AcceptFilter,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            images: AcceptFilter::images(),
            video: AcceptFilter::video(),
            ownership_documents: AcceptFilter::pdf(),
            role_documents: AcceptFilter::any(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
    pub media: MediaConfig,
    pub pricing: PricingConfig,
    pub plans: Vec<Plan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_methods: Vec<PaymentMethod>,
    pub output: OutputPreferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorSettings::default(),
            media: MediaConfig::default(),
            pricing: PricingConfig::default(),
            plans: Plan::defaults(),
            payment_methods: Vec::new(),
            output: OutputPreferences::default(),
        }
    }
}

impl Config {
    /// Rejects settings no screen could work with.
    pub fn validate(&self) -> Result<(), OnboardingError> {
        if self.plans.is_empty() {
            return Err(OnboardingError::Config("at least one plan is required".into()));
        }
        if let Some(plan) = self.plans.iter().find(|plan| plan.id.trim().is_empty()) {
            return Err(OnboardingError::Config(format!(
                "plan `{}` has an empty id",
                plan.name
            )));
        }
        let percents = [
            self.pricing.annual_discount_percent,
            self.pricing.card_charge_percent,
        ];
        if percents.iter().any(|p| !(0.0..=100.0).contains(p)) {
            return Err(OnboardingError::Config(
                "pricing percentages must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, OnboardingError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, OnboardingError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Loads the stored configuration, or the defaults when none was saved.
    pub fn load(&self) -> Result<Config, OnboardingError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), OnboardingError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), OnboardingError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_keeps_original_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/config.json")),
            PathBuf::from("/data/config.json.tmp")
        );
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.editor.parking_overview_limit, 200);
        assert_eq!(config.plans.len(), 3);
    }

    #[test]
    fn validation_rejects_bad_pricing_and_empty_catalogue() {
        let mut config = Config::default();
        config.pricing.card_charge_percent = 120.0;
        assert!(matches!(config.validate(), Err(OnboardingError::Config(_))));

        let config = Config {
            plans: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(OnboardingError::Config(_))));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"editor":{"parking_overview_limit":80}}"#).expect("parse");
        assert_eq!(config.editor.parking_overview_limit, 80);
        assert_eq!(config.editor.document_filter, AcceptFilter::pdf());
        assert_eq!(config.media, MediaConfig::default());
    }
}
