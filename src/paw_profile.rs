use crate::retention::RetentionCurve;
use crate::thresholds::ThresholdEstimate;
use serde::Serialize;

// Rows per refill table: 100% down to 0% of plant available water in 1% steps
pub const PROFILE_ROWS: usize = 101;

// One refill-table row for a managed soil profile
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProfileRow {
    pub index: usize,        // Row number, 1-based, descending PAW
    pub profile_volume: f64, // Water stored over the managed depth [cm]
    pub percent_paw: f64,    // Stored volume relative to the field capacity volume [-]
    pub percent_vwc: f64,    // Approximate volumetric water content [cm³/cm³]
    pub smp: f64,            // Matric potential at that content [kPa]
}

/**
Builds the 101-row plant-available-water table for one basis.

Row i spans the PAW fraction 1 − (i−1)/100, from fully refilled (field
capacity) down to fully depleted (wilting point). Each row's stored volume is
converted to an approximate absolute water content by scaling the fill ratio
with the saturation content, and that content is located on the retention
curve by nearest-content search.

Returns `None` when the basis has no field capacity or wilting point
threshold (unclassified texture, missing reference statistics).

# Arguments
* `depth` - Managed profile depth [cm].
* `estimate` - Threshold estimate for the basis being tabulated.
* `curve` - Retention curve for the inverse lookup.
*/
pub fn build_profile(
    depth: f64,
    estimate: &ThresholdEstimate,
    curve: &RetentionCurve,
) -> Option<Vec<ProfileRow>> {
    let fc = estimate.field_capacity?.vwc;
    let wp = estimate.wilting_point?.vwc;
    let saturation = estimate.saturation_vwc;

    let max_volume = depth * fc; // Profile volume at field capacity [cm]
    let min_volume = depth * wp; // Profile volume at wilting point [cm]

    let rows = (1..=PROFILE_ROWS)
        .map(|index| {
            let fraction = 1.0 - (index - 1) as f64 / 100.0;
            let profile_volume = fraction * (max_volume - min_volume) + min_volume;
            let percent_paw = profile_volume / max_volume;
            let percent_vwc = percent_paw * saturation;
            let smp = curve.nearest_potential(percent_vwc) as f64;
            ProfileRow {
                index,
                profile_volume,
                percent_paw,
                percent_vwc,
                smp,
            }
        })
        .collect();
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil_params::SoilParameters;
    use crate::texture::TextureClass;
    use crate::thresholds::estimate_thresholds;
    use approx::assert_abs_diff_eq;

    fn loam() -> SoilParameters {
        SoilParameters::new(42.0, 50.0, 8.0, 0.062, 0.406, 0.005, 1.54, 40.0)
    }

    fn loam_profile(depth: f64) -> Vec<ProfileRow> {
        let curve = RetentionCurve::build(&loam());
        let (rosetta, _) = estimate_thresholds(&curve, TextureClass::Loam);
        build_profile(depth, &rosetta, &curve).unwrap()
    }

    #[test]
    fn spans_field_capacity_down_to_wilting_point() {
        let curve = RetentionCurve::build(&loam());
        let (rosetta, _) = estimate_thresholds(&curve, TextureClass::Loam);
        let rows = loam_profile(50.0);

        assert_eq!(rows.len(), PROFILE_ROWS);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[100].index, 101);

        let fc = rosetta.field_capacity.unwrap().vwc;
        let wp = rosetta.wilting_point.unwrap().vwc;
        assert_abs_diff_eq!(rows[0].profile_volume, 50.0 * fc, epsilon = 1e-12);
        assert_abs_diff_eq!(rows[100].profile_volume, 50.0 * wp, epsilon = 1e-12);

        // Fully refilled row sits at saturation content, i.e. zero suction
        assert_abs_diff_eq!(rows[0].percent_paw, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rows[0].percent_vwc, rosetta.saturation_vwc, epsilon = 1e-12);
        assert_eq!(rows[0].smp, 0.0);
    }

    #[test]
    fn fill_ratio_decreases_and_suction_deepens_row_by_row() {
        let rows = loam_profile(50.0);
        for pair in rows.windows(2) {
            assert!(pair[1].percent_paw < pair[0].percent_paw);
            assert!(pair[1].percent_vwc < pair[0].percent_vwc);
            assert!(pair[1].smp >= pair[0].smp);
        }
    }

    #[test]
    fn profile_volume_scales_linearly_with_depth() {
        let shallow = loam_profile(50.0);
        let deep = loam_profile(100.0);
        for (s, d) in shallow.iter().zip(&deep) {
            assert_abs_diff_eq!(d.profile_volume, 2.0 * s.profile_volume, epsilon = 1e-9);
            // The fill ratio itself is depth-independent
            assert_abs_diff_eq!(d.percent_paw, s.percent_paw, epsilon = 1e-12);
        }
    }

    #[test]
    fn absent_thresholds_yield_no_table() {
        let curve = RetentionCurve::build(&loam());
        let (_, ratliff) = estimate_thresholds(&curve, TextureClass::Unclassified);
        assert_eq!(build_profile(50.0, &ratliff, &curve), None);
    }

    #[test]
    fn ratliff_basis_builds_its_own_table() {
        let curve = RetentionCurve::build(&loam());
        let (_, ratliff) = estimate_thresholds(&curve, TextureClass::Loam);
        let rows = build_profile(50.0, &ratliff, &curve).unwrap();
        assert_eq!(rows.len(), PROFILE_ROWS);
        assert_abs_diff_eq!(rows[0].profile_volume, 50.0 * 0.27, epsilon = 1e-12);
        assert_abs_diff_eq!(rows[100].profile_volume, 50.0 * 0.119, epsilon = 1e-12);
    }
}
