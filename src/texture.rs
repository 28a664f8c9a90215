use serde::Serialize;

// USDA soil texture classes, plus a sentinel for fraction combinations the
// rule table does not cover
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TextureClass {
    Sand,
    LoamySand,
    SandyLoam,
    Loam,
    SiltLoam,
    Silt,
    SiltyClayLoam,
    ClayLoam,
    SandyClayLoam,
    SandyClay,
    SiltyClay,
    Clay,
    Unclassified,
}

impl TextureClass {
    /**
    Classifies a soil from its sand/silt/clay percentages.

    The rule table is evaluated top to bottom and the first matching arm wins;
    several ranges overlap, so the ordering is load-bearing. Fractions are not
    required to sum to 100. Combinations outside every arm (a known gap in the
    table, e.g. very sandy soils with a few percent clay) come back as
    `Unclassified`.

    # Arguments
    * `sand` - Sand fraction [%].
    * `silt` - Silt fraction [%].
    * `clay` - Clay fraction [%].
    */
    pub fn classify(sand: f64, silt: f64, clay: f64) -> TextureClass {
        if clay >= 60.0 {
            TextureClass::Clay
        } else if clay >= 40.0 && sand <= 45.0 {
            TextureClass::Clay
        } else if clay >= 40.0 && sand <= 20.0 {
            // Fully shadowed by the arm above; kept to preserve the published
            // rule order. TODO: check the intended silty clay boundary against
            // the USDA triangle.
            TextureClass::SiltyClay
        } else if clay <= 40.0 && clay >= 28.0 && sand < 20.0 {
            TextureClass::SiltyClayLoam
        } else if clay <= 40.0 && clay >= 28.0 && sand >= 20.0 && sand <= 45.0 {
            TextureClass::ClayLoam
        } else if clay <= 28.0 && sand <= 50.0 && silt > 50.0 && silt <= 86.0 {
            TextureClass::SiltLoam
        } else if clay <= 14.0 && silt >= 80.0 {
            TextureClass::Silt
        } else if clay >= 8.0 && clay <= 28.0 && silt <= 50.0 && sand >= 24.0 && sand <= 52.0 {
            TextureClass::Loam
        } else if clay >= 35.0 && sand >= 45.0 && sand <= 65.0 {
            TextureClass::SandyClay
        } else if clay >= 20.0 && clay <= 35.0 && sand >= 45.0 && sand <= 80.0 {
            TextureClass::SandyClayLoam
        } else if clay >= 15.0 && clay <= 20.0 && sand >= 45.0 && sand <= 85.0 {
            TextureClass::SandyLoam
        } else if clay >= 10.0 && clay <= 15.0 && sand >= 70.0 && sand <= 85.0 {
            TextureClass::LoamySand
        } else if clay <= 10.0 && sand >= 85.0 {
            TextureClass::Sand
        } else {
            TextureClass::Unclassified
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextureClass::Sand => "Sand",
            TextureClass::LoamySand => "Loamy sand",
            TextureClass::SandyLoam => "Sandy loam",
            TextureClass::Loam => "Loam",
            TextureClass::SiltLoam => "Silt loam",
            TextureClass::Silt => "Silt",
            TextureClass::SiltyClayLoam => "Silty clay loam",
            TextureClass::ClayLoam => "Clay loam",
            TextureClass::SandyClayLoam => "Sandy clay loam",
            TextureClass::SandyClay => "Sandy clay",
            TextureClass::SiltyClay => "Silty clay",
            TextureClass::Clay => "Clay",
            TextureClass::Unclassified => "Unclassified",
        }
    }
}
