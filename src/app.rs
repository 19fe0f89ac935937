use std::io::Write;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError, OutputFormat};
use crate::error::SpectrumError;
use crate::hazard::HazardCoefficients;
use crate::site::{classify_profile, SiteFactorResolver, SiteFactors};
use crate::spectrum::bridge::{self, BridgeHazard};
use crate::spectrum::{DesignSpectrum, SpectrumBuilder, SpectrumPoint};
use crate::ui_cli::{
    self, BridgeArgs, ClassifyArgs, Cli, Command, FactorReport, SamplingArgs, SiteArgs,
    SpectrumArgs, SpectrumReport,
};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 계수 조회/스펙트럼 계산 오류
    #[error("{0}")]
    Spectrum(#[from] SpectrumError),
    /// JSON 출력 오류
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV 입출력 오류
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// 명령 하나를 실행하고 결과를 `out`에 쓴다.
pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<(), AppError> {
    let format = cli.output.unwrap_or(config.output);
    match &cli.command {
        Command::Factors(args) => {
            let report = resolve_factors(args, config)?;
            ui_cli::print_factors(out, &report, format)?;
        }
        Command::Spectrum(args) => {
            let report = design_spectrum(args, config)?;
            ui_cli::print_spectrum(out, &report, format)?;
        }
        Command::Bridge(args) => {
            let report = bridge_spectrum(args, config)?;
            ui_cli::print_spectrum(out, &report, format)?;
        }
        Command::Classify(args) => classify(args, out, format)?,
        Command::InitConfig => {
            config.save(&cli.config)?;
            info!(path = %cli.config.display(), "wrote configuration");
            writeln!(out, "wrote {}", cli.config.display())?;
        }
    }
    Ok(())
}

/// 지반계수를 조회한다.
pub fn resolve_factors(args: &SiteArgs, config: &Config) -> Result<FactorReport, AppError> {
    let standard = args.standard.unwrap_or(config.standard);
    let detail = SiteFactorResolver::new(standard).resolve_detailed(
        args.ss,
        args.s1,
        args.site_class,
    )?;
    Ok(FactorReport {
        standard,
        site_class: args.site_class,
        ss: args.ss,
        s1: args.s1,
        fa: detail.fa,
        fv: detail.fv,
    })
}

/// 일반 절차 설계 스펙트럼을 계산한다. Fa/Fv가 둘 다 주어지면 표 조회를 건너뛴다.
pub fn design_spectrum(args: &SpectrumArgs, config: &Config) -> Result<SpectrumReport, AppError> {
    let standard = args.site.standard.unwrap_or(config.standard);
    let hazard = HazardCoefficients::new(args.site.ss, args.site.s1)?;
    let factors = match (args.fa, args.fv) {
        (Some(fa), Some(fv)) => SiteFactors { fa, fv },
        (fa, fv) => {
            let table = SiteFactorResolver::new(standard).resolve(
                hazard.ss(),
                hazard.s1(),
                args.site.site_class,
            )?;
            SiteFactors {
                fa: fa.unwrap_or(table.fa),
                fv: fv.unwrap_or(table.fv),
            }
        }
    };
    let spectrum = SpectrumBuilder::for_site(hazard, factors)
        .with_long_period_transition(args.tl.or(config.long_period_transition_s))
        .build()?;
    let points = sample(&spectrum, &args.sampling, config)?;
    Ok(SpectrumReport {
        title: format!(
            "Design response spectrum ({standard}, site class {})",
            args.site.site_class
        ),
        factors,
        regimes: spectrum.regimes(),
        spectrum,
        points,
    })
}

/// DPWH 교량 스펙트럼을 계산한다.
pub fn bridge_spectrum(args: &BridgeArgs, config: &Config) -> Result<SpectrumReport, AppError> {
    let result = bridge::for_ground_type(
        BridgeHazard {
            pga: args.pga,
            ss: args.ss,
            s1: args.s1,
        },
        args.ground_type,
    )?;
    let points = sample(&result.spectrum, &args.sampling, config)?;
    Ok(SpectrumReport {
        title: format!(
            "Bridge response spectrum (DPWH BSDS, ground type {}, Fpga = {:.4})",
            result.ground_type, result.factors.fpga
        ),
        factors: SiteFactors {
            fa: result.factors.fa,
            fv: result.factors.fv,
        },
        regimes: result.spectrum.regimes(),
        spectrum: result.spectrum,
        points,
    })
}

fn sample(
    spectrum: &DesignSpectrum,
    args: &SamplingArgs,
    config: &Config,
) -> Result<Vec<SpectrumPoint>, SpectrumError> {
    if args.periods.is_empty() {
        spectrum.sample(
            args.step.unwrap_or(config.sample_step_s),
            args.max_period.unwrap_or(config.max_period_s),
        )
    } else {
        spectrum.sample_at(&args.periods)
    }
}

fn classify<W: Write>(
    args: &ClassifyArgs,
    out: &mut W,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut layers = args.layers.clone();
    if let Some(path) = &args.file {
        layers.extend(ui_cli::read_layers_csv(path)?);
    }
    let profile = classify_profile(&layers)?;
    ui_cli::print_profile(out, &profile, format)
}
