use tracing::debug;

use super::design_spectrum::DesignSpectrum;
use crate::error::{require_non_negative, require_positive, SpectrumError};
use crate::hazard::HazardCoefficients;
use crate::site::SiteFactors;

/// 지도 가속도에서 설계 가속도로 환산하는 계수 (2/3).
pub const DESIGN_REDUCTION: f64 = 2.0 / 3.0;

/// T = 0 가속도의 SDS 대비 비율.
pub const ZERO_PERIOD_RATIO: f64 = 0.4;

/// T0 / Ts 비율.
pub const T0_RATIO: f64 = 0.2;

/// (SS, S1, Fa, Fv)로 설계 응답 스펙트럼을 만든다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumBuilder {
    ss: f64,
    s1: f64,
    fa: f64,
    fv: f64,
    long_period_transition: Option<f64>,
}

impl SpectrumBuilder {
    pub fn new(ss: f64, s1: f64, fa: f64, fv: f64) -> Self {
        Self {
            ss,
            s1,
            fa,
            fv,
            long_period_transition: None,
        }
    }

    /// 검증된 재해 계수와 지반계수로부터 만든다.
    pub fn for_site(hazard: HazardCoefficients, factors: SiteFactors) -> Self {
        Self::new(hazard.ss(), hazard.s1(), factors.fa, factors.fv)
    }

    /// 장주기 전이 주기 TL(s)을 지정한다. 지정하면 T > TL 구간에 SD1·TL/T²를 쓴다.
    pub fn long_period_transition(mut self, tl: f64) -> Self {
        self.long_period_transition = Some(tl);
        self
    }

    /// `Option` 그대로 TL을 지정한다. 설정 파일 값을 넘길 때 쓴다.
    pub fn with_long_period_transition(mut self, tl: Option<f64>) -> Self {
        self.long_period_transition = tl;
        self
    }

    pub fn build(&self) -> Result<DesignSpectrum, SpectrumError> {
        let ss = require_non_negative("SS", self.ss)?;
        let s1 = require_non_negative("S1", self.s1)?;
        let fa = require_positive("Fa", self.fa)?;
        let fv = require_positive("Fv", self.fv)?;

        let sds = DESIGN_REDUCTION * fa * ss;
        let sd1 = DESIGN_REDUCTION * fv * s1;
        let spectrum = shape(ZERO_PERIOD_RATIO * sds, sds, sd1, self.long_period_transition)?;
        debug!(
            sds = spectrum.sds,
            sd1 = spectrum.sd1,
            t0 = spectrum.t0,
            ts = spectrum.ts,
            tl = ?spectrum.tl,
            "built design spectrum"
        );
        Ok(spectrum)
    }
}

/// 2/3 환산을 적용한 설계 스펙트럼을 만든다.
pub fn build(ss: f64, s1: f64, fa: f64, fv: f64) -> Result<DesignSpectrum, SpectrumError> {
    SpectrumBuilder::new(ss, s1, fa, fv).build()
}

// SDS, SD1로 구간 경계를 정한다. 둘 중 하나만 0이면 Ts가 정의되지 않는다.
pub(crate) fn shape(
    zero_period_acceleration: f64,
    sds: f64,
    sd1: f64,
    tl: Option<f64>,
) -> Result<DesignSpectrum, SpectrumError> {
    let (t0, ts) = match (sds > 0.0, sd1 > 0.0) {
        (true, true) => {
            let ts = sd1 / sds;
            (T0_RATIO * ts, ts)
        }
        (false, false) => (0.0, 0.0),
        (false, true) => {
            return Err(SpectrumError::invalid(
                "SDS is zero while SD1 is positive; Ts is undefined",
            ))
        }
        (true, false) => {
            return Err(SpectrumError::invalid(
                "SD1 is zero while SDS is positive; Ts is undefined",
            ))
        }
    };
    if let Some(tl) = tl {
        require_positive("TL", tl)?;
        if tl <= ts {
            return Err(SpectrumError::invalid(format!(
                "TL ({tl} s) must exceed Ts ({ts:.4} s)"
            )));
        }
    }
    Ok(DesignSpectrum {
        zero_period_acceleration,
        sds,
        sd1,
        t0,
        ts,
        tl,
    })
}
