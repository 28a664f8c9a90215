use crate::paw_profile::{ProfileRow, build_profile};
use crate::retention::RetentionCurve;
use crate::soil_params::SoilParameters;
use crate::texture::TextureClass;
use crate::thresholds::{EstimateBasis, ThresholdEstimate, estimate_thresholds};
use serde::Serialize;

// Which threshold a plot marker annotates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ThresholdKind {
    Saturation,
    FieldCapacity,
    WiltingPoint,
}

// Annotated point on the retention curve plot; a present `sd_vwc` means the
// plotting collaborator should draw an error bar on the content axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CurveMarker {
    pub basis: EstimateBasis,
    pub kind: ThresholdKind,
    pub potential: f64,      // [kPa]
    pub content: f64,        // [cm³/cm³]
    pub sd_vwc: Option<f64>, // [cm³/cm³]
}

// Everything the plotting collaborator needs: the full curve plus the
// annotated threshold markers
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurvePlotData {
    pub series: Vec<(f64, f64)>, // (suction [kPa], content [cm³/cm³])
    pub markers: Vec<CurveMarker>,
}

// Classification plus both threshold estimates, side by side
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThresholdTable {
    pub texture: TextureClass,
    pub rosetta: ThresholdEstimate,
    pub ratliff: ThresholdEstimate,
}

impl ThresholdTable {
    /**
    Renders the seven print-facing rows for the report collaborator:
    texture class, the three water contents and the three matric potentials,
    one column per basis. Unavailable values render as "n/a".
    */
    pub fn rows(&self) -> Vec<(String, String, String)> {
        fn vwc(v: Option<f64>) -> String {
            match v {
                Some(v) => format!("{:.3}", v),
                None => String::from("n/a"),
            }
        }
        fn smp(v: Option<f64>) -> String {
            match v {
                Some(v) => format!("{:.0}", v),
                None => String::from("n/a"),
            }
        }
        let label = self.texture.label().to_string();
        vec![
            (String::from("Texture class"), label.clone(), label),
            (
                String::from("Saturation VWC [-]"),
                vwc(Some(self.rosetta.saturation_vwc)),
                vwc(Some(self.ratliff.saturation_vwc)),
            ),
            (
                String::from("Field capacity VWC [-]"),
                vwc(self.rosetta.field_capacity.map(|t| t.vwc)),
                vwc(self.ratliff.field_capacity.map(|t| t.vwc)),
            ),
            (
                String::from("Wilting point VWC [-]"),
                vwc(self.rosetta.wilting_point.map(|t| t.vwc)),
                vwc(self.ratliff.wilting_point.map(|t| t.vwc)),
            ),
            (
                String::from("Saturation SMP [kPa]"),
                smp(Some(self.rosetta.saturation_smp)),
                smp(Some(self.ratliff.saturation_smp)),
            ),
            (
                String::from("Field capacity SMP [kPa]"),
                smp(self.rosetta.field_capacity.map(|t| t.smp)),
                smp(self.ratliff.field_capacity.map(|t| t.smp)),
            ),
            (
                String::from("Wilting point SMP [kPa]"),
                smp(self.rosetta.wilting_point.map(|t| t.smp)),
                smp(self.ratliff.wilting_point.map(|t| t.smp)),
            ),
        ]
    }
}

// The full output contract of one estimation run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EstimationResult {
    pub threshold_table: ThresholdTable,
    pub curve_plot_data: CurvePlotData,
    pub rosetta_profile: Vec<ProfileRow>,
    pub ratliff_profile: Option<Vec<ProfileRow>>,
}

/**
Runs the full estimation pipeline for one managed profile.

Classifies the texture, builds the retention curve over the 0-10000 kPa grid,
derives the Rosetta and Ratliff threshold estimates, and tabulates the
plant-available-water refill tables for the given depth. Pure and
deterministic: identical inputs produce identical results.

# Arguments
* `depth` - Managed profile depth [cm], must be > 0.
* `params` - Texture fractions and Rosetta-3 hydraulic parameters.

# Returns
The assembled result, or an error when a parameter is out of range. An
unclassifiable texture is not an error: the result then carries Rosetta
values only and the Ratliff-dependent fields stay empty.
*/
pub fn estimate(depth: f64, params: SoilParameters) -> Result<EstimationResult, String> {
    if depth <= 0.0 {
        return Err(format!(
            "Managed profile depth must be > 0 cm, got {}",
            depth
        ));
    }
    params.validate()?;

    let texture = TextureClass::classify(params.sand, params.silt, params.clay);
    let curve = RetentionCurve::build(&params);
    let (rosetta, ratliff) = estimate_thresholds(&curve, texture);

    let rosetta_profile = build_profile(depth, &rosetta, &curve)
        .ok_or_else(|| String::from("Retention curve yielded no Rosetta thresholds"))?;
    let ratliff_profile = build_profile(depth, &ratliff, &curve);

    let curve_plot_data = CurvePlotData {
        series: curve.series(),
        markers: markers(&rosetta, &ratliff),
    };

    Ok(EstimationResult {
        threshold_table: ThresholdTable {
            texture,
            rosetta,
            ratliff,
        },
        curve_plot_data,
        rosetta_profile,
        ratliff_profile,
    })
}

// Annotated plot markers for both bases; absent thresholds are skipped
fn markers(rosetta: &ThresholdEstimate, ratliff: &ThresholdEstimate) -> Vec<CurveMarker> {
    let mut markers = Vec::new();
    for est in [rosetta, ratliff] {
        markers.push(CurveMarker {
            basis: est.basis,
            kind: ThresholdKind::Saturation,
            potential: est.saturation_smp,
            content: est.saturation_vwc,
            sd_vwc: None,
        });
        for (kind, threshold) in [
            (ThresholdKind::FieldCapacity, est.field_capacity),
            (ThresholdKind::WiltingPoint, est.wilting_point),
        ] {
            if let Some(t) = threshold {
                markers.push(CurveMarker {
                    basis: est.basis,
                    kind,
                    potential: t.smp,
                    content: t.vwc,
                    sd_vwc: t.sd_vwc,
                });
            }
        }
    }
    markers
}
