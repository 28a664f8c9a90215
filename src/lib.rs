mod estimate;
mod paw_profile;
mod ratliff;
mod retention;
mod soil_params;
mod texture;
mod thresholds;

pub use estimate::{
    CurveMarker, CurvePlotData, EstimationResult, ThresholdKind, ThresholdTable, estimate,
};
pub use paw_profile::{PROFILE_ROWS, ProfileRow, build_profile};
pub use ratliff::{ReferenceEntry, reference_entry};
pub use retention::{MAX_POTENTIAL, RetentionCurve};
pub use soil_params::SoilParameters;
pub use texture::TextureClass;
pub use thresholds::{
    EstimateBasis, FIELD_CAPACITY_POTENTIAL, Threshold, ThresholdEstimate, WILTING_POINT_POTENTIAL,
    estimate_thresholds,
};
