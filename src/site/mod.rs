//! 지반 분류와 지반계수 표 조회 모듈 모음.

pub mod coefficient_tables;
pub mod ground_type;
pub mod site_class;
pub mod site_factors;

pub use ground_type::{classify_profile, GroundProfile, GroundProfileRow, SoilLayer};
pub use site_class::{CoefficientKind, SiteClass, StandardVersion};
pub use site_factors::{resolve, SiteFactor, SiteFactorDetail, SiteFactorResolver, SiteFactors};
