//! 설계 응답 스펙트럼 작성 모듈 모음.

pub mod bridge;
pub mod builder;
pub mod design_spectrum;

pub use builder::{build, SpectrumBuilder};
pub use design_spectrum::{DesignSpectrum, SpectrumPoint, SpectrumRegime};
