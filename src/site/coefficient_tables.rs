//! 기준별 지반계수 표.
//!
//! 재해 수준 구간점(breakpoint)마다 등급별 계수를 담는다. 값은 읽기 전용 상수이며
//! 프로세스 전체에서 공유한다. 설계 적용 전 해당 기준 원문으로 재확인할 것.

use super::site_class::{CoefficientKind, SiteClass, StandardVersion};

/// 표의 한 칸. 수치 또는 부지 고유 해석 요구 표시.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficient {
    Value(f64),
    SiteSpecific,
}

/// 한 지반 분류의 계수 행. `cells` 길이는 표의 구간점 수와 같다.
#[derive(Debug)]
pub struct CoefficientRow {
    pub site_class: SiteClass,
    pub cells: &'static [Coefficient],
}

/// 계수 하나(Fa, Fv, Fpga)에 대한 표.
#[derive(Debug)]
pub struct CoefficientTable {
    pub kind: CoefficientKind,
    /// 오름차순 재해 수준 구간점(g)
    pub breakpoints: &'static [f64],
    pub rows: &'static [CoefficientRow],
}

impl CoefficientTable {
    pub fn row(&self, class: SiteClass) -> Option<&'static [Coefficient]> {
        self.rows
            .iter()
            .find(|r| r.site_class == class)
            .map(|r| r.cells)
    }
}

/// 한 기준 판의 표 묶음.
#[derive(Debug)]
pub struct TableSet {
    pub standard: StandardVersion,
    pub fa: CoefficientTable,
    pub fv: CoefficientTable,
    /// PGA 지반계수 표. 교량 기준에만 있다.
    pub fpga: Option<&'static CoefficientTable>,
}

impl TableSet {
    pub fn table(&self, kind: CoefficientKind) -> Option<&CoefficientTable> {
        match kind {
            CoefficientKind::Fa => Some(&self.fa),
            CoefficientKind::Fv => Some(&self.fv),
            CoefficientKind::Fpga => self.fpga,
        }
    }
}

/// 기준 판에 해당하는 표 묶음을 반환한다.
pub fn table_set(standard: StandardVersion) -> &'static TableSet {
    match standard {
        StandardVersion::Nscp2015 => &NSCP_2015,
        StandardVersion::DpwhBsds2013 => &DPWH_BSDS_2013,
    }
}

const fn v(value: f64) -> Coefficient {
    Coefficient::Value(value)
}

const STUDY: Coefficient = Coefficient::SiteSpecific;

static NSCP_2015: TableSet = TableSet {
    standard: StandardVersion::Nscp2015,
    fa: CoefficientTable {
        kind: CoefficientKind::Fa,
        breakpoints: &[0.25, 0.50, 0.75, 1.00, 1.25],
        rows: &[
            CoefficientRow {
                site_class: SiteClass::A,
                cells: &[v(0.8), v(0.8), v(0.8), v(0.8), v(0.8)],
            },
            CoefficientRow {
                site_class: SiteClass::B,
                cells: &[v(1.0), v(1.0), v(1.0), v(1.0), v(1.0)],
            },
            CoefficientRow {
                site_class: SiteClass::C,
                cells: &[v(1.2), v(1.2), v(1.1), v(1.0), v(1.0)],
            },
            CoefficientRow {
                site_class: SiteClass::D,
                cells: &[v(1.6), v(1.4), v(1.2), v(1.1), v(1.0)],
            },
            CoefficientRow {
                site_class: SiteClass::E,
                cells: &[v(2.5), v(1.7), v(1.2), v(0.9), v(0.9)],
            },
            CoefficientRow {
                site_class: SiteClass::F,
                cells: &[STUDY, STUDY, STUDY, STUDY, STUDY],
            },
        ],
    },
    fv: CoefficientTable {
        kind: CoefficientKind::Fv,
        breakpoints: &[0.1, 0.2, 0.3, 0.4, 0.5],
        rows: &[
            CoefficientRow {
                site_class: SiteClass::A,
                cells: &[v(0.8), v(0.8), v(0.8), v(0.8), v(0.8)],
            },
            CoefficientRow {
                site_class: SiteClass::B,
                cells: &[v(1.0), v(1.0), v(1.0), v(1.0), v(1.0)],
            },
            CoefficientRow {
                site_class: SiteClass::C,
                cells: &[v(1.7), v(1.6), v(1.5), v(1.4), v(1.3)],
            },
            CoefficientRow {
                site_class: SiteClass::D,
                cells: &[v(2.4), v(2.0), v(1.8), v(1.6), v(1.5)],
            },
            CoefficientRow {
                site_class: SiteClass::E,
                cells: &[v(3.5), v(3.2), v(2.8), v(2.4), v(2.4)],
            },
            CoefficientRow {
                site_class: SiteClass::F,
                cells: &[STUDY, STUDY, STUDY, STUDY, STUDY],
            },
        ],
    },
    fpga: None,
};

static DPWH_BSDS_2013: TableSet = TableSet {
    standard: StandardVersion::DpwhBsds2013,
    fa: CoefficientTable {
        kind: CoefficientKind::Fa,
        breakpoints: &[0.25, 0.50, 0.75, 1.00, 1.25, 2.00],
        rows: &[
            CoefficientRow {
                site_class: SiteClass::I,
                cells: &[v(1.2), v(1.2), v(1.1), v(1.0), v(1.0), v(1.0)],
            },
            CoefficientRow {
                site_class: SiteClass::II,
                cells: &[v(1.6), v(1.4), v(1.2), v(1.0), v(0.9), v(0.85)],
            },
            CoefficientRow {
                site_class: SiteClass::III,
                cells: &[v(2.5), v(1.7), v(1.2), v(0.9), v(0.8), v(0.75)],
            },
        ],
    },
    fv: CoefficientTable {
        kind: CoefficientKind::Fv,
        breakpoints: &[0.10, 0.20, 0.30, 0.40, 0.50, 0.80],
        rows: &[
            CoefficientRow {
                site_class: SiteClass::I,
                cells: &[v(1.7), v(1.6), v(1.5), v(1.4), v(1.4), v(1.4)],
            },
            CoefficientRow {
                site_class: SiteClass::II,
                cells: &[v(2.4), v(2.0), v(1.8), v(1.6), v(1.5), v(1.5)],
            },
            CoefficientRow {
                site_class: SiteClass::III,
                cells: &[v(3.5), v(3.2), v(2.8), v(2.4), v(2.4), v(2.0)],
            },
        ],
    },
    fpga: Some(&DPWH_BSDS_2013_FPGA),
};

static DPWH_BSDS_2013_FPGA: CoefficientTable = CoefficientTable {
    kind: CoefficientKind::Fpga,
    breakpoints: &[0.00, 0.10, 0.20, 0.30, 0.40, 0.50, 0.80],
    rows: &[
        CoefficientRow {
            site_class: SiteClass::I,
            cells: &[v(1.2), v(1.2), v(1.2), v(1.1), v(1.1), v(1.0), v(1.0)],
        },
        CoefficientRow {
            site_class: SiteClass::II,
            cells: &[v(1.6), v(1.6), v(1.4), v(1.2), v(1.0), v(0.9), v(0.85)],
        },
        CoefficientRow {
            site_class: SiteClass::III,
            cells: &[v(2.5), v(2.5), v(1.7), v(1.2), v(0.9), v(0.8), v(0.75)],
        },
    ],
};

