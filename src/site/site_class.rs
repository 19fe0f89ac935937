use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpectrumError;

/// 지반 분류. NSCP(ASCE 7) 부지등급 A~F 와 DPWH 지반 종류 I~III 를 함께 둔다.
/// 각 기준은 자신에게 해당하는 등급만 인정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteClass {
    /// 경암 (SA)
    A,
    /// 암반 (SB)
    B,
    /// 매우 조밀한 흙/연암 (SC)
    C,
    /// 단단한 흙 (SD)
    D,
    /// 연약 점토 (SE)
    E,
    /// 부지 고유 평가가 필요한 지반 (SF)
    F,
    /// 지반 종류 I (TG < 0.2 s)
    I,
    /// 지반 종류 II (0.2 ≤ TG < 0.6 s)
    II,
    /// 지반 종류 III (TG ≥ 0.6 s)
    III,
}

impl SiteClass {
    pub const NSCP: [SiteClass; 6] = [
        SiteClass::A,
        SiteClass::B,
        SiteClass::C,
        SiteClass::D,
        SiteClass::E,
        SiteClass::F,
    ];

    pub const DPWH: [SiteClass; 3] = [SiteClass::I, SiteClass::II, SiteClass::III];

    pub fn label(&self) -> &'static str {
        match self {
            SiteClass::A => "A",
            SiteClass::B => "B",
            SiteClass::C => "C",
            SiteClass::D => "D",
            SiteClass::E => "E",
            SiteClass::F => "F",
            SiteClass::I => "I",
            SiteClass::II => "II",
            SiteClass::III => "III",
        }
    }
}

impl fmt::Display for SiteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SiteClass {
    type Err = SpectrumError;

    /// "D", "sd", "II", "Type II" 같은 표기를 허용한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let key = upper
            .strip_prefix("TYPE")
            .map(str::trim)
            .unwrap_or(upper.as_str());
        let class = match key {
            "A" | "SA" => SiteClass::A,
            "B" | "SB" => SiteClass::B,
            "C" | "SC" => SiteClass::C,
            "D" | "SD" => SiteClass::D,
            "E" | "SE" => SiteClass::E,
            "F" | "SF" => SiteClass::F,
            "I" => SiteClass::I,
            "II" => SiteClass::II,
            "III" => SiteClass::III,
            _ => {
                return Err(SpectrumError::invalid(format!(
                    "unrecognized site class: {s:?}"
                )))
            }
        };
        Ok(class)
    }
}

/// 계수 표를 선택하는 기준 판.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardVersion {
    /// ASCE 7-10 표 11.4-1/11.4-2 부지계수. NSCP 2015 자체가 발행한 표가 아니다.
    #[default]
    Nscp2015,
    /// DPWH 교량 내진설계기준 (BSDS 2013)
    DpwhBsds2013,
}

impl StandardVersion {
    pub const ALL: [StandardVersion; 2] = [StandardVersion::Nscp2015, StandardVersion::DpwhBsds2013];

    pub fn code(&self) -> &'static str {
        match self {
            StandardVersion::Nscp2015 => "nscp2015",
            StandardVersion::DpwhBsds2013 => "dpwh_bsds2013",
        }
    }

    /// 기준이 인정하는 지반 분류 목록.
    pub fn site_classes(&self) -> &'static [SiteClass] {
        match self {
            StandardVersion::Nscp2015 => &SiteClass::NSCP,
            StandardVersion::DpwhBsds2013 => &SiteClass::DPWH,
        }
    }

    pub fn recognizes(&self, class: SiteClass) -> bool {
        self.site_classes().contains(&class)
    }
}

impl fmt::Display for StandardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandardVersion::Nscp2015 => f.write_str("NSCP 2015 (ASCE 7-10 site coefficients)"),
            StandardVersion::DpwhBsds2013 => f.write_str("DPWH BSDS 2013"),
        }
    }
}

impl FromStr for StandardVersion {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match c.as_str() {
            "nscp2015" | "nscp_2015" | "nscp" => Ok(StandardVersion::Nscp2015),
            "dpwh_bsds2013" | "dpwh_bsds_2013" | "bsds" | "dpwh" => {
                Ok(StandardVersion::DpwhBsds2013)
            }
            _ => Err(SpectrumError::invalid(format!("unknown standard: {s:?}"))),
        }
    }
}

/// 표에서 조회하는 계수 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoefficientKind {
    /// 단주기 지반증폭계수 (SS 기준)
    Fa,
    /// 장주기(1초) 지반증폭계수 (S1 기준)
    Fv,
    /// 최대지반가속도 지반계수 (PGA 기준)
    Fpga,
}

impl fmt::Display for CoefficientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoefficientKind::Fa => f.write_str("Fa"),
            CoefficientKind::Fv => f.write_str("Fv"),
            CoefficientKind::Fpga => f.write_str("Fpga"),
        }
    }
}
