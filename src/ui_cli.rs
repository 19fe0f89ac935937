use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::app::AppError;
use crate::config::{OutputFormat, DEFAULT_CONFIG_FILE};
use crate::site::{GroundProfile, SiteClass, SiteFactor, SiteFactors, SoilLayer, StandardVersion};
use crate::spectrum::{DesignSpectrum, SpectrumPoint, SpectrumRegime};

/// Site coefficients and design response spectra (NSCP 2015 / DPWH BSDS).
#[derive(Debug, Parser)]
#[command(name = "seismic_design_toolbox", version, about)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Output format (overrides the configuration file)
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up site coefficients Fa and Fv
    Factors(SiteArgs),
    /// Build the design response spectrum
    Spectrum(SpectrumArgs),
    /// Build the DPWH bridge response spectrum (PGA, SS, S1, ground type)
    Bridge(BridgeArgs),
    /// Classify a layered soil profile into ground type I/II/III
    Classify(ClassifyArgs),
    /// Write the default configuration file
    InitConfig,
}

#[derive(Debug, Clone, Args)]
pub struct SiteArgs {
    /// Mapped short-period spectral acceleration SS [g]
    #[arg(long, allow_negative_numbers = true)]
    pub ss: f64,
    /// Mapped 1-second spectral acceleration S1 [g]
    #[arg(long, allow_negative_numbers = true)]
    pub s1: f64,
    /// Site class (A-F, or ground type I-III)
    #[arg(long = "site-class")]
    pub site_class: SiteClass,
    /// Coefficient table set (nscp2015, dpwh_bsds2013)
    #[arg(long)]
    pub standard: Option<StandardVersion>,
}

#[derive(Debug, Clone, Args)]
pub struct SamplingArgs {
    /// Sampling step [s]
    #[arg(long)]
    pub step: Option<f64>,
    /// Longest sampled period [s]
    #[arg(long = "max-period")]
    pub max_period: Option<f64>,
    /// Sample only at these periods [s], comma separated
    #[arg(long, value_delimiter = ',')]
    pub periods: Vec<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct SpectrumArgs {
    #[command(flatten)]
    pub site: SiteArgs,
    /// Site-specific Fa, used instead of the table
    #[arg(long)]
    pub fa: Option<f64>,
    /// Site-specific Fv, used instead of the table
    #[arg(long)]
    pub fv: Option<f64>,
    /// Long-period transition period TL [s]
    #[arg(long)]
    pub tl: Option<f64>,
    #[command(flatten)]
    pub sampling: SamplingArgs,
}

#[derive(Debug, Clone, Args)]
pub struct BridgeArgs {
    /// Peak ground acceleration PGA [g]
    #[arg(long, allow_negative_numbers = true)]
    pub pga: f64,
    /// Mapped short-period spectral acceleration SS [g]
    #[arg(long, allow_negative_numbers = true)]
    pub ss: f64,
    /// Mapped 1-second spectral acceleration S1 [g]
    #[arg(long, allow_negative_numbers = true)]
    pub s1: f64,
    /// Ground type (I, II, III)
    #[arg(long = "ground-type")]
    pub ground_type: SiteClass,
    #[command(flatten)]
    pub sampling: SamplingArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Soil layer as THICKNESS:VS [m, m/s], repeated from the top down
    #[arg(long = "layer", value_parser = parse_layer)]
    pub layers: Vec<SoilLayer>,
    /// CSV file with thickness_m and shear_wave_velocity_m_per_s columns
    #[arg(long)]
    pub file: Option<PathBuf>,
}

fn parse_layer(s: &str) -> Result<SoilLayer, String> {
    let (h, vs) = s
        .split_once(':')
        .ok_or_else(|| format!("expected THICKNESS:VS, got {s:?}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("thickness {h:?}: {e}"))?;
    let vs: f64 = vs.trim().parse().map_err(|e| format!("shear wave velocity {vs:?}: {e}"))?;
    Ok(SoilLayer::new(h, vs))
}

/// CSV 파일에서 지층 목록을 읽는다.
pub fn read_layers_csv(path: &std::path::Path) -> Result<Vec<SoilLayer>, AppError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut layers = Vec::new();
    for row in rdr.deserialize() {
        layers.push(row?);
    }
    Ok(layers)
}

/// 지반계수 조회 결과.
#[derive(Debug, Clone, Serialize)]
pub struct FactorReport {
    pub standard: StandardVersion,
    pub site_class: SiteClass,
    pub ss: f64,
    pub s1: f64,
    pub fa: SiteFactor,
    pub fv: SiteFactor,
}

#[derive(Serialize)]
struct FactorCsvRow {
    standard: &'static str,
    site_class: &'static str,
    ss: f64,
    s1: f64,
    fa: f64,
    fa_clamped: bool,
    fv: f64,
    fv_clamped: bool,
}

/// 스펙트럼 계산 결과.
#[derive(Debug, Clone, Serialize)]
pub struct SpectrumReport {
    pub title: String,
    pub factors: SiteFactors,
    pub spectrum: DesignSpectrum,
    pub regimes: Vec<SpectrumRegime>,
    pub points: Vec<SpectrumPoint>,
}

#[derive(Serialize)]
struct ProfileCsvRow {
    thickness_m: f64,
    shear_wave_velocity_m_per_s: f64,
    travel_time_s: Option<f64>,
    characteristic_period_s: f64,
    ground_type: &'static str,
}

/// 지반계수 결과를 출력한다.
pub fn print_factors<W: Write>(
    out: &mut W,
    report: &FactorReport,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Standard   : {}", report.standard)?;
            writeln!(out, "Site class : {}", report.site_class)?;
            writeln!(out, "SS = {:.3} g, S1 = {:.3} g", report.ss, report.s1)?;
            writeln!(out, "Fa = {:.4}{}", report.fa.value, clamp_note(report.fa))?;
            writeln!(out, "Fv = {:.4}{}", report.fv.value, clamp_note(report.fv))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.serialize(FactorCsvRow {
                standard: report.standard.code(),
                site_class: report.site_class.label(),
                ss: report.ss,
                s1: report.s1,
                fa: report.fa.value,
                fa_clamped: report.fa.clamped,
                fv: report.fv.value,
                fv_clamped: report.fv.clamped,
            })?;
            wtr.flush()?;
        }
    }
    Ok(())
}

fn clamp_note(f: SiteFactor) -> &'static str {
    if f.clamped {
        " (clamped to table edge)"
    } else {
        ""
    }
}

/// 스펙트럼 결과를 출력한다. CSV는 샘플 점만 내보낸다.
pub fn print_spectrum<W: Write>(
    out: &mut W,
    report: &SpectrumReport,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            let s = &report.spectrum;
            writeln!(out, "{}", report.title)?;
            writeln!(
                out,
                "Fa = {:.4}, Fv = {:.4}",
                report.factors.fa, report.factors.fv
            )?;
            writeln!(out, "Sa(T=0) = {:.4} g", s.zero_period_acceleration)?;
            writeln!(out, "SDS = {:.4} g, SD1 = {:.4} g", s.sds, s.sd1)?;
            write!(out, "T0 = {:.4} s, Ts = {:.4} s", s.t0, s.ts)?;
            match s.tl {
                Some(tl) => writeln!(out, ", TL = {tl:.4} s")?,
                None => writeln!(out)?,
            }
            writeln!(out, "Regimes:")?;
            for regime in &report.regimes {
                writeln!(out, "  {}", regime.formula())?;
            }
            writeln!(out, "{:>10} {:>12}", "T [s]", "Sa [g]")?;
            for p in &report.points {
                writeln!(out, "{:>10.4} {:>12.5}", p.period, p.acceleration)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for p in &report.points {
                wtr.serialize(p)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// 지층 판정표를 출력한다.
pub fn print_profile<W: Write>(
    out: &mut W,
    profile: &GroundProfile,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "{:>8} {:>12} {:>14} {:>12} {:>8}",
                "H [m]", "Vs [m/s]", "H/Vs [s]", "TG [s]", "Type"
            )?;
            for row in &profile.rows {
                let hv = row
                    .travel_time_s
                    .map(|v| format!("{v:.6}"))
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    out,
                    "{:>8.2} {:>12.3} {:>14} {:>12.6} {:>8}",
                    row.layer.thickness_m,
                    row.layer.shear_wave_velocity_m_per_s,
                    hv,
                    row.characteristic_period_s,
                    row.ground_type
                )?;
            }
            writeln!(
                out,
                "Ground type: {} (TG = {:.4} s)",
                profile.ground_type(),
                profile.characteristic_period_s()
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, profile)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for row in &profile.rows {
                wtr.serialize(ProfileCsvRow {
                    thickness_m: row.layer.thickness_m,
                    shear_wave_velocity_m_per_s: row.layer.shear_wave_velocity_m_per_s,
                    travel_time_s: row.travel_time_s,
                    characteristic_period_s: row.characteristic_period_s,
                    ground_type: row.ground_type.label(),
                })?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
