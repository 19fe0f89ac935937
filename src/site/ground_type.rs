//! 층별 두께와 전단파속도로 지반 특성주기 TG = 4·Σ(H/Vs)를 구하고
//! DPWH 지반 종류(I/II/III)를 판정한다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::site_class::SiteClass;
use crate::error::{require_non_negative, SpectrumError};

/// 지반 종류 I/II 경계 특성주기(s)
pub const TG_TYPE_I_LIMIT: f64 = 0.2;
/// 지반 종류 II/III 경계 특성주기(s)
pub const TG_TYPE_II_LIMIT: f64 = 0.6;

/// 지층 하나의 입력 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilLayer {
    /// 층 두께 H (m)
    pub thickness_m: f64,
    /// 전단파속도 Vs (m/s)
    pub shear_wave_velocity_m_per_s: f64,
}

impl SoilLayer {
    pub const fn new(thickness_m: f64, shear_wave_velocity_m_per_s: f64) -> Self {
        Self {
            thickness_m,
            shear_wave_velocity_m_per_s,
        }
    }
}

/// 누적 계산 결과 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroundProfileRow {
    pub layer: SoilLayer,
    /// H/Vs (s). Vs가 0인 층은 None이며 합계에서 제외된다.
    pub travel_time_s: Option<f64>,
    /// 해당 층까지의 TG (s)
    pub characteristic_period_s: f64,
    pub ground_type: SiteClass,
}

/// 층별 누적 판정표.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundProfile {
    pub rows: Vec<GroundProfileRow>,
}

impl GroundProfile {
    /// 전체 지층 기준 TG (s)
    pub fn characteristic_period_s(&self) -> f64 {
        self.rows
            .last()
            .map(|r| r.characteristic_period_s)
            .unwrap_or(0.0)
    }

    /// 전체 지층 기준 지반 종류.
    pub fn ground_type(&self) -> SiteClass {
        classify_period(self.characteristic_period_s())
    }
}

/// TG 값으로 지반 종류를 정한다.
pub fn classify_period(tg: f64) -> SiteClass {
    if tg < TG_TYPE_I_LIMIT {
        SiteClass::I
    } else if tg < TG_TYPE_II_LIMIT {
        SiteClass::II
    } else {
        SiteClass::III
    }
}

/// 지층 목록을 위에서부터 누적하며 행마다 TG와 지반 종류를 계산한다.
pub fn classify_profile(layers: &[SoilLayer]) -> Result<GroundProfile, SpectrumError> {
    if layers.is_empty() {
        return Err(SpectrumError::invalid("soil profile has no layers"));
    }
    let mut rows = Vec::with_capacity(layers.len());
    let mut sum = 0.0;
    for layer in layers {
        require_non_negative("layer thickness", layer.thickness_m)?;
        require_non_negative("shear wave velocity", layer.shear_wave_velocity_m_per_s)?;
        let travel_time_s = if layer.shear_wave_velocity_m_per_s == 0.0 {
            None
        } else {
            Some(layer.thickness_m / layer.shear_wave_velocity_m_per_s)
        };
        sum += travel_time_s.unwrap_or(0.0);
        let tg = 4.0 * sum;
        rows.push(GroundProfileRow {
            layer: *layer,
            travel_time_s,
            characteristic_period_s: tg,
            ground_type: classify_period(tg),
        });
    }
    let profile = GroundProfile { rows };
    debug!(
        layers = layers.len(),
        tg = profile.characteristic_period_s(),
        ground_type = %profile.ground_type(),
        "classified soil profile"
    );
    Ok(profile)
}
