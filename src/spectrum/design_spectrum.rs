use serde::Serialize;

use crate::error::{require_non_negative, require_positive, SpectrumError};

/// 한 번의 샘플링에서 허용하는 최대 점 수.
pub const MAX_SAMPLES: usize = 100_000;

// 격자점이 구간 경계와 이 값 이내로 가까우면 경계값으로 대체한다.
const BREAKPOINT_EPS: f64 = 1e-9;

/// 스펙트럼 곡선 위의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumPoint {
    /// 주기 T (s)
    pub period: f64,
    /// 설계 스펙트럼 가속도 Sa (g)
    pub acceleration: f64,
}

/// 설계 응답 스펙트럼의 폐형식 표현.
///
/// - `[0, T0]`: `zero_period_acceleration`에서 SDS까지 선형 증가
/// - `[T0, Ts]`: SDS 일정
/// - `[Ts, TL]`: SD1 / T
/// - `T > TL`: SD1·TL / T² (`tl`이 있을 때만)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignSpectrum {
    /// T = 0 에서의 가속도 (g)
    pub zero_period_acceleration: f64,
    /// 단주기 설계 스펙트럼 가속도 (g)
    pub sds: f64,
    /// 1초 주기 설계 스펙트럼 가속도 (g)
    pub sd1: f64,
    /// 평탄부 시작 주기 (s)
    pub t0: f64,
    /// 평탄부 끝 주기 (s)
    pub ts: f64,
    /// 장주기 전이 주기 (s)
    pub tl: Option<f64>,
}

/// 스펙트럼의 구간 하나와 그 식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "regime", rename_all = "snake_case")]
pub enum SpectrumRegime {
    Rising {
        start_s: f64,
        end_s: f64,
        start_g: f64,
        end_g: f64,
    },
    Plateau {
        start_s: f64,
        end_s: f64,
        acceleration_g: f64,
    },
    Descending {
        start_s: f64,
        /// None이면 상한 없이 이어진다.
        end_s: Option<f64>,
        sd1: f64,
    },
    LongPeriod {
        start_s: f64,
        sd1: f64,
        tl: f64,
    },
}

impl SpectrumRegime {
    pub fn start_s(&self) -> f64 {
        match *self {
            SpectrumRegime::Rising { start_s, .. }
            | SpectrumRegime::Plateau { start_s, .. }
            | SpectrumRegime::Descending { start_s, .. }
            | SpectrumRegime::LongPeriod { start_s, .. } => start_s,
        }
    }

    /// 사람이 읽을 수 있는 식 표현.
    pub fn formula(&self) -> String {
        match *self {
            SpectrumRegime::Rising {
                start_s,
                end_s,
                start_g,
                end_g,
            } => format!(
                "{start_s:.4} <= T <= {end_s:.4}: Sa = {start_g:.4} + ({end_g:.4} - {start_g:.4}) * T / {end_s:.4}"
            ),
            SpectrumRegime::Plateau {
                start_s,
                end_s,
                acceleration_g,
            } => format!("{start_s:.4} <= T <= {end_s:.4}: Sa = {acceleration_g:.4}"),
            SpectrumRegime::Descending {
                start_s,
                end_s: Some(end_s),
                sd1,
            } => format!("{start_s:.4} <= T <= {end_s:.4}: Sa = {sd1:.4} / T"),
            SpectrumRegime::Descending {
                start_s,
                end_s: None,
                sd1,
            } => format!("T >= {start_s:.4}: Sa = {sd1:.4} / T"),
            SpectrumRegime::LongPeriod { start_s, sd1, tl } => {
                format!("T >= {start_s:.4}: Sa = {sd1:.4} * {tl:.4} / T^2")
            }
        }
    }
}

impl DesignSpectrum {
    /// 주기 T(s)에서의 설계 가속도를 계산한다.
    pub fn acceleration_at(&self, period: f64) -> Result<f64, SpectrumError> {
        require_non_negative("period", period)?;
        Ok(self.evaluate(period))
    }

    fn evaluate(&self, period: f64) -> f64 {
        if period < self.t0 {
            self.zero_period_acceleration
                + (self.sds - self.zero_period_acceleration) * period / self.t0
        } else if period <= self.ts {
            self.sds
        } else {
            match self.tl {
                Some(tl) if period > tl => self.sd1 * tl / (period * period),
                _ => self.sd1 / period,
            }
        }
    }

    /// 폭이 0인 구간을 제외한 구간 목록.
    pub fn regimes(&self) -> Vec<SpectrumRegime> {
        let mut out = Vec::with_capacity(4);
        if self.t0 > 0.0 {
            out.push(SpectrumRegime::Rising {
                start_s: 0.0,
                end_s: self.t0,
                start_g: self.zero_period_acceleration,
                end_g: self.sds,
            });
        }
        if self.ts > self.t0 {
            out.push(SpectrumRegime::Plateau {
                start_s: self.t0,
                end_s: self.ts,
                acceleration_g: self.sds,
            });
        }
        out.push(SpectrumRegime::Descending {
            start_s: self.ts,
            end_s: self.tl,
            sd1: self.sd1,
        });
        if let Some(tl) = self.tl {
            out.push(SpectrumRegime::LongPeriod {
                start_s: tl,
                sd1: self.sd1,
                tl,
            });
        }
        out
    }

    /// 0부터 `max_period`까지 `step` 간격으로 샘플링한다.
    /// T0, Ts, TL(범위 내일 때)과 `max_period`는 항상 정확히 포함된다.
    pub fn sample(&self, step: f64, max_period: f64) -> Result<Vec<SpectrumPoint>, SpectrumError> {
        require_positive("sampling step", step)?;
        require_positive("maximum period", max_period)?;
        let count = (max_period / step).floor();
        if count >= MAX_SAMPLES as f64 {
            return Err(SpectrumError::invalid(format!(
                "sampling {max_period} s at {step} s exceeds {MAX_SAMPLES} points"
            )));
        }
        let mut breakpoints = vec![0.0, self.t0, self.ts, max_period];
        if let Some(tl) = self.tl {
            breakpoints.push(tl);
        }
        breakpoints.retain(|&b| b <= max_period);

        let mut periods: Vec<f64> = (0..=count as usize)
            .map(|k| k as f64 * step)
            .filter(|&t| t <= max_period)
            .filter(|&t| breakpoints.iter().all(|&b| (t - b).abs() > BREAKPOINT_EPS))
            .collect();
        periods.extend(breakpoints);
        periods.sort_by(f64::total_cmp);
        periods.dedup();
        Ok(self.points(&periods))
    }

    /// 호출자가 지정한 주기들에서 샘플링한다. 순서는 입력 순서를 따른다.
    pub fn sample_at(&self, periods: &[f64]) -> Result<Vec<SpectrumPoint>, SpectrumError> {
        for &p in periods {
            require_non_negative("period", p)?;
        }
        Ok(self.points(periods))
    }

    fn points(&self, periods: &[f64]) -> Vec<SpectrumPoint> {
        periods
            .iter()
            .map(|&period| SpectrumPoint {
                period,
                acceleration: self.evaluate(period),
            })
            .collect()
    }
}
