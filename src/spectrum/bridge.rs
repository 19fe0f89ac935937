//! DPWH 교량 내진설계기준(BSDS) 응답 스펙트럼.
//!
//! As = Fpga·PGA, SDS = Fa·SS, SD1 = Fv·S1 로 2/3 환산을 하지 않는다.
//! T0 = 0.2·Ts 까지 As에서 SDS로 선형 증가하고, Ts 이후는 SD1/T 로 감소한다.

use serde::Serialize;
use tracing::debug;

use super::builder::shape;
use super::design_spectrum::DesignSpectrum;
use crate::error::{require_non_negative, require_positive, SpectrumError};
use crate::site::{SiteClass, SiteFactorResolver, StandardVersion};

/// 교량 스펙트럼 입력 재해 값 (g).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BridgeHazard {
    pub pga: f64,
    pub ss: f64,
    pub s1: f64,
}

/// 교량 스펙트럼에 쓰인 지반계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BridgeSiteFactors {
    pub fpga: f64,
    pub fa: f64,
    pub fv: f64,
}

/// 계수와 스펙트럼을 함께 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BridgeSpectrum {
    pub ground_type: SiteClass,
    pub factors: BridgeSiteFactors,
    pub spectrum: DesignSpectrum,
}

/// 주어진 계수로 교량 설계 스펙트럼을 만든다.
pub fn build(
    pga: f64,
    ss: f64,
    s1: f64,
    fpga: f64,
    fa: f64,
    fv: f64,
) -> Result<DesignSpectrum, SpectrumError> {
    let pga = require_non_negative("PGA", pga)?;
    let ss = require_non_negative("SS", ss)?;
    let s1 = require_non_negative("S1", s1)?;
    let fpga = require_positive("Fpga", fpga)?;
    let fa = require_positive("Fa", fa)?;
    let fv = require_positive("Fv", fv)?;

    let spectrum = shape(fpga * pga, fa * ss, fv * s1, None)?;
    debug!(
        as_ = spectrum.zero_period_acceleration,
        sds = spectrum.sds,
        sd1 = spectrum.sd1,
        "built bridge spectrum"
    );
    Ok(spectrum)
}

/// 지반 종류로 BSDS 표를 조회한 뒤 교량 스펙트럼을 만든다.
pub fn for_ground_type(
    hazard: BridgeHazard,
    ground_type: SiteClass,
) -> Result<BridgeSpectrum, SpectrumError> {
    let resolver = SiteFactorResolver::new(StandardVersion::DpwhBsds2013);
    let fpga = resolver.resolve_fpga(hazard.pga, ground_type)?.value;
    let site = resolver.resolve(hazard.ss, hazard.s1, ground_type)?;
    let factors = BridgeSiteFactors {
        fpga,
        fa: site.fa,
        fv: site.fv,
    };
    let spectrum = build(
        hazard.pga,
        hazard.ss,
        hazard.s1,
        factors.fpga,
        factors.fa,
        factors.fv,
    )?;
    Ok(BridgeSpectrum {
        ground_type,
        factors,
        spectrum,
    })
}
