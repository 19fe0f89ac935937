use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::site::StandardVersion;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "seismic.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 사람이 읽는 표
    Text,
    Json,
    Csv,
}

/// 애플리케이션 설정을 표현한다. 명령행 옵션이 있으면 그쪽이 우선한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 지반계수 표 기준 판
    pub standard: StandardVersion,
    /// 장주기 전이 주기 TL(s). 없으면 SD1/T 구간이 끝까지 이어진다.
    pub long_period_transition_s: Option<f64>,
    /// 스펙트럼 샘플링 간격(s)
    pub sample_step_s: f64,
    /// 스펙트럼 샘플링 최대 주기(s)
    pub max_period_s: f64,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standard: StandardVersion::Nscp2015,
            long_period_transition_s: None,
            sample_step_s: 0.05,
            max_period_s: 4.0,
            output: OutputFormat::Text,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값은 읽었으나 사용할 수 없음
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// 설정 파일을 로드한다. 파일이 없으면 기본 설정을 반환한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_step_s.is_finite() && self.sample_step_s > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sample_step_s must be positive, got {}",
                self.sample_step_s
            )));
        }
        if !(self.max_period_s.is_finite() && self.max_period_s > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_period_s must be positive, got {}",
                self.max_period_s
            )));
        }
        if let Some(tl) = self.long_period_transition_s {
            if !(tl.is_finite() && tl > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "long_period_transition_s must be positive, got {tl}"
                )));
            }
        }
        Ok(())
    }
}
