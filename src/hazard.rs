use serde::Serialize;

use crate::error::{require_positive, SpectrumError};

/// 재해도에서 읽은 지도 스펙트럼 가속도 (단위 g).
///
/// 생성 시 두 값 모두 0보다 커야 한다. 한 번 만들면 변경하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardCoefficients {
    ss: f64,
    s1: f64,
}

impl HazardCoefficients {
    pub fn new(ss: f64, s1: f64) -> Result<Self, SpectrumError> {
        Ok(Self {
            ss: require_positive("SS", ss)?,
            s1: require_positive("S1", s1)?,
        })
    }

    /// 단주기(0.2초) 지도 스펙트럼 가속도
    pub fn ss(&self) -> f64 {
        self.ss
    }

    /// 1초 주기 지도 스펙트럼 가속도
    pub fn s1(&self) -> f64 {
        self.s1
    }
}
