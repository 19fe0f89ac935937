//! 계수 조회와 스펙트럼 작성에서 공통으로 쓰는 오류 정의.

use thiserror::Error;

use crate::site::{CoefficientKind, SiteClass, StandardVersion};

/// 지반계수 조회 및 설계 스펙트럼 작성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectrumError {
    /// 음수/비유한 입력, 또는 기준에 정의되지 않은 지반 분류
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// 표 기반 보간을 쓸 수 없어 부지 고유 해석이 필요한 조합
    #[error(
        "site class {site_class} requires a site-specific study for {coefficient} under {standard}"
    )]
    SiteSpecificStudyRequired {
        site_class: SiteClass,
        standard: StandardVersion,
        coefficient: CoefficientKind,
    },
}

impl SpectrumError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SpectrumError::InvalidInput(msg.into())
    }

    /// 부지 고유 해석 요구 여부. 호출 측에서 안내 문구를 구분할 때 쓴다.
    pub fn is_site_specific(&self) -> bool {
        matches!(self, SpectrumError::SiteSpecificStudyRequired { .. })
    }
}

/// 0 이상의 유한한 값인지 확인한다.
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64, SpectrumError> {
    if !value.is_finite() {
        return Err(SpectrumError::invalid(format!("{name} must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(SpectrumError::invalid(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// 0보다 큰 유한한 값인지 확인한다.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, SpectrumError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpectrumError::invalid(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(value)
}
