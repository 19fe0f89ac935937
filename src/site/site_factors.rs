use serde::Serialize;
use tracing::{debug, warn};

use super::coefficient_tables::{table_set, Coefficient, CoefficientTable, TableSet};
use super::site_class::{CoefficientKind, SiteClass, StandardVersion};
use crate::error::{require_non_negative, SpectrumError};

/// 단주기/장주기 지반증폭계수 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteFactors {
    pub fa: f64,
    pub fv: f64,
}

/// 표 조회 한 건의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteFactor {
    pub value: f64,
    /// true면 입력이 표 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

/// Fa/Fv 각각의 조회 상세.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteFactorDetail {
    pub fa: SiteFactor,
    pub fv: SiteFactor,
}

impl SiteFactorDetail {
    pub fn factors(&self) -> SiteFactors {
        SiteFactors {
            fa: self.fa.value,
            fv: self.fv.value,
        }
    }
}

/// 선택한 기준 판의 표로 지반계수를 구한다.
#[derive(Debug, Clone, Copy)]
pub struct SiteFactorResolver {
    tables: &'static TableSet,
}

impl SiteFactorResolver {
    pub fn new(standard: StandardVersion) -> Self {
        Self {
            tables: table_set(standard),
        }
    }

    pub fn standard(&self) -> StandardVersion {
        self.tables.standard
    }

    /// SS, S1과 지반 분류로 (Fa, Fv)를 구한다.
    pub fn resolve(
        &self,
        ss: f64,
        s1: f64,
        soil: SiteClass,
    ) -> Result<SiteFactors, SpectrumError> {
        self.resolve_detailed(ss, s1, soil).map(|d| d.factors())
    }

    /// 클램프 여부까지 포함해 (Fa, Fv)를 구한다.
    pub fn resolve_detailed(
        &self,
        ss: f64,
        s1: f64,
        soil: SiteClass,
    ) -> Result<SiteFactorDetail, SpectrumError> {
        require_non_negative("SS", ss)?;
        require_non_negative("S1", s1)?;
        self.ensure_recognized(soil)?;
        let fa = self.lookup(&self.tables.fa, soil, ss)?;
        let fv = self.lookup(&self.tables.fv, soil, s1)?;
        debug!(
            standard = %self.tables.standard,
            site_class = %soil,
            ss,
            s1,
            fa = fa.value,
            fv = fv.value,
            "resolved site factors"
        );
        Ok(SiteFactorDetail { fa, fv })
    }

    /// PGA 지반계수(Fpga)를 구한다. PGA 표가 없는 기준은 InvalidInput.
    pub fn resolve_fpga(&self, pga: f64, soil: SiteClass) -> Result<SiteFactor, SpectrumError> {
        require_non_negative("PGA", pga)?;
        self.ensure_recognized(soil)?;
        let table = self.tables.table(CoefficientKind::Fpga).ok_or_else(|| {
            SpectrumError::invalid(format!(
                "{} does not tabulate a PGA site factor",
                self.tables.standard
            ))
        })?;
        let fpga = self.lookup(table, soil, pga)?;
        debug!(site_class = %soil, pga, fpga = fpga.value, "resolved PGA site factor");
        Ok(fpga)
    }

    fn ensure_recognized(&self, soil: SiteClass) -> Result<(), SpectrumError> {
        if self.tables.standard.recognizes(soil) {
            Ok(())
        } else {
            Err(SpectrumError::invalid(format!(
                "site class {soil} is not defined by {}",
                self.tables.standard
            )))
        }
    }

    fn lookup(
        &self,
        table: &CoefficientTable,
        soil: SiteClass,
        hazard: f64,
    ) -> Result<SiteFactor, SpectrumError> {
        let cells = table.row(soil).ok_or_else(|| {
            SpectrumError::invalid(format!(
                "site class {soil} has no {} row in {}",
                table.kind, self.tables.standard
            ))
        })?;
        let factor = interpolate(table.breakpoints, cells, hazard).map_err(|Refusal| {
            SpectrumError::SiteSpecificStudyRequired {
                site_class: soil,
                standard: self.tables.standard,
                coefficient: table.kind,
            }
        })?;
        if factor.clamped {
            warn!(
                standard = %self.tables.standard,
                coefficient = %table.kind,
                site_class = %soil,
                hazard,
                value = factor.value,
                "hazard value outside tabulated range, factor clamped to table edge"
            );
        }
        Ok(factor)
    }
}

/// 기본 표(ASCE 7-10 부지계수)로 (Fa, Fv)를 구한다.
pub fn resolve(ss: f64, s1: f64, soil: SiteClass) -> Result<SiteFactors, SpectrumError> {
    SiteFactorResolver::new(StandardVersion::Nscp2015).resolve(ss, s1, soil)
}

/// 참조한 칸이 부지 고유 해석 대상임을 나타낸다.
#[derive(Debug)]
struct Refusal;

fn cell_value(cell: Coefficient) -> Result<f64, Refusal> {
    match cell {
        Coefficient::Value(v) => Ok(v),
        Coefficient::SiteSpecific => Err(Refusal),
    }
}

// 구간점 사이는 재해 수준에 대해 선형 보간하고, 범위 밖은 가장자리 값으로 클램프한다.
// 구간점과 정확히 일치하면 그 칸만 참조한다.
fn interpolate(breakpoints: &[f64], cells: &[Coefficient], x: f64) -> Result<SiteFactor, Refusal> {
    let last = breakpoints.len() - 1;
    if x <= breakpoints[0] {
        return Ok(SiteFactor {
            value: cell_value(cells[0])?,
            clamped: x < breakpoints[0],
        });
    }
    if x >= breakpoints[last] {
        return Ok(SiteFactor {
            value: cell_value(cells[last])?,
            clamped: x > breakpoints[last],
        });
    }
    if let Some(i) = breakpoints.iter().position(|&b| b == x) {
        return Ok(SiteFactor {
            value: cell_value(cells[i])?,
            clamped: false,
        });
    }
    for (i, win) in breakpoints.windows(2).enumerate() {
        let (lo, hi) = (win[0], win[1]);
        if x > lo && x < hi {
            let a = cell_value(cells[i])?;
            let b = cell_value(cells[i + 1])?;
            let frac = (x - lo) / (hi - lo);
            return Ok(SiteFactor {
                value: a + frac * (b - a),
                clamped: false,
            });
        }
    }
    // 구간점이 오름차순이면 도달하지 않는다.
    Ok(SiteFactor {
        value: cell_value(cells[last])?,
        clamped: true,
    })
}
