use crate::texture::TextureClass;
use serde::Serialize;

// Field-capacity and wilting-point statistics per USDA texture class, percent
// volumetric water content, after Ratliff, Ritchie & Cassel (1983). "Upper"
// values are the laboratory-derived limits, "lower" values the pressure-plate
// limits; each carries the between-site standard deviation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReferenceEntry {
    pub fc_upper_mean: f64, // Field capacity, laboratory mean [%]
    pub fc_upper_sd: f64,   // Field capacity, laboratory std dev [%]
    pub fc_lower_mean: f64, // Field capacity, pressure-plate mean [%]
    pub fc_lower_sd: f64,   // Field capacity, pressure-plate std dev [%]
    pub wp_upper_mean: f64, // Wilting point, laboratory mean [%]
    pub wp_upper_sd: f64,   // Wilting point, laboratory std dev [%]
    pub wp_lower_mean: f64, // Wilting point, pressure-plate mean [%]
    pub wp_lower_sd: f64,   // Wilting point, pressure-plate std dev [%]
}

/**
Looks up the published water retention statistics for a texture class.

Returns `None` for `SandyClay` (the study reports no statistics for that
class) and for `Unclassified`; callers must treat a missing entry as
"unavailable", never substitute a default.
*/
pub fn reference_entry(class: TextureClass) -> Option<ReferenceEntry> {
    match class {
        TextureClass::Sand => Some(ReferenceEntry {
            fc_upper_mean: 11.6,
            fc_upper_sd: 3.9,
            fc_lower_mean: 9.7,
            fc_lower_sd: 3.2,
            wp_upper_mean: 3.7,
            wp_upper_sd: 2.1,
            wp_lower_mean: 3.2,
            wp_lower_sd: 1.8,
        }),
        TextureClass::LoamySand => Some(ReferenceEntry {
            fc_upper_mean: 15.2,
            fc_upper_sd: 4.4,
            fc_lower_mean: 13.1,
            fc_lower_sd: 3.8,
            wp_upper_mean: 5.5,
            wp_upper_sd: 2.6,
            wp_lower_mean: 4.8,
            wp_lower_sd: 2.2,
        }),
        TextureClass::SandyLoam => Some(ReferenceEntry {
            fc_upper_mean: 21.4,
            fc_upper_sd: 5.1,
            fc_lower_mean: 19.0,
            fc_lower_sd: 4.6,
            wp_upper_mean: 9.0,
            wp_upper_sd: 3.4,
            wp_lower_mean: 8.1,
            wp_lower_sd: 3.0,
        }),
        TextureClass::Loam => Some(ReferenceEntry {
            fc_upper_mean: 27.0,
            fc_upper_sd: 5.6,
            fc_lower_mean: 25.2,
            fc_lower_sd: 5.0,
            wp_upper_mean: 11.9,
            wp_upper_sd: 4.2,
            wp_lower_mean: 10.7,
            wp_lower_sd: 3.7,
        }),
        TextureClass::SiltLoam => Some(ReferenceEntry {
            fc_upper_mean: 30.6,
            fc_upper_sd: 5.4,
            fc_lower_mean: 28.7,
            fc_lower_sd: 5.9,
            wp_upper_mean: 13.3,
            wp_upper_sd: 4.5,
            wp_lower_mean: 11.5,
            wp_lower_sd: 4.1,
        }),
        TextureClass::Silt => Some(ReferenceEntry {
            fc_upper_mean: 32.1,
            fc_upper_sd: 4.8,
            fc_lower_mean: 30.4,
            fc_lower_sd: 5.2,
            wp_upper_mean: 11.7,
            wp_upper_sd: 4.0,
            wp_lower_mean: 9.9,
            wp_lower_sd: 3.6,
        }),
        TextureClass::SiltyClayLoam => Some(ReferenceEntry {
            fc_upper_mean: 36.0,
            fc_upper_sd: 5.2,
            fc_lower_mean: 34.3,
            fc_lower_sd: 5.7,
            wp_upper_mean: 20.8,
            wp_upper_sd: 4.9,
            wp_lower_mean: 19.2,
            wp_lower_sd: 4.4,
        }),
        TextureClass::ClayLoam => Some(ReferenceEntry {
            fc_upper_mean: 33.4,
            fc_upper_sd: 5.5,
            fc_lower_mean: 31.8,
            fc_lower_sd: 5.8,
            wp_upper_mean: 19.7,
            wp_upper_sd: 4.7,
            wp_lower_mean: 18.6,
            wp_lower_sd: 4.3,
        }),
        TextureClass::SandyClayLoam => Some(ReferenceEntry {
            fc_upper_mean: 25.8,
            fc_upper_sd: 6.2,
            fc_lower_mean: 24.0,
            fc_lower_sd: 5.9,
            wp_upper_mean: 16.2,
            wp_upper_sd: 4.6,
            wp_lower_mean: 15.1,
            wp_lower_sd: 4.2,
        }),
        // The study reports no sandy clay sites
        TextureClass::SandyClay => None,
        TextureClass::SiltyClay => Some(ReferenceEntry {
            fc_upper_mean: 38.8,
            fc_upper_sd: 5.0,
            fc_lower_mean: 36.9,
            fc_lower_sd: 5.6,
            wp_upper_mean: 24.9,
            wp_upper_sd: 5.3,
            wp_lower_mean: 23.4,
            wp_lower_sd: 4.8,
        }),
        TextureClass::Clay => Some(ReferenceEntry {
            fc_upper_mean: 40.9,
            fc_upper_sd: 5.7,
            fc_lower_mean: 39.2,
            fc_lower_sd: 6.1,
            wp_upper_mean: 27.2,
            wp_upper_sd: 5.8,
            wp_lower_mean: 25.9,
            wp_lower_sd: 5.2,
        }),
        TextureClass::Unclassified => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES_WITH_STATISTICS: [TextureClass; 11] = [
        TextureClass::Sand,
        TextureClass::LoamySand,
        TextureClass::SandyLoam,
        TextureClass::Loam,
        TextureClass::SiltLoam,
        TextureClass::Silt,
        TextureClass::SiltyClayLoam,
        TextureClass::ClayLoam,
        TextureClass::SandyClayLoam,
        TextureClass::SiltyClay,
        TextureClass::Clay,
    ];

    #[test]
    fn sandy_clay_has_no_statistics() {
        assert_eq!(reference_entry(TextureClass::SandyClay), None);
        assert_eq!(reference_entry(TextureClass::Unclassified), None);
    }

    #[test]
    fn loam_statistics() {
        let entry = reference_entry(TextureClass::Loam).unwrap();
        assert_eq!(entry.fc_upper_mean, 27.0);
        assert_eq!(entry.wp_upper_mean, 11.9);
    }

    #[test]
    fn statistics_are_internally_consistent() {
        for class in CLASSES_WITH_STATISTICS {
            let e = reference_entry(class).unwrap();
            assert!(
                e.fc_upper_mean > e.wp_upper_mean,
                "{:?}: lab field capacity below wilting point",
                class
            );
            assert!(
                e.fc_lower_mean > e.wp_lower_mean,
                "{:?}: pressure-plate field capacity below wilting point",
                class
            );
            for sd in [e.fc_upper_sd, e.fc_lower_sd, e.wp_upper_sd, e.wp_lower_sd] {
                assert!(sd > 0.0, "{:?}: non-positive std dev", class);
            }
        }
    }
}
