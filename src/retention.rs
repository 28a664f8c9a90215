use crate::soil_params::SoilParameters;
use nalgebra::DVector;

// Upper end of the suction grid [kPa]
pub const MAX_POTENTIAL: usize = 10000;

// Water retention curve sampled at every integer suction in [0, MAX_POTENTIAL].
// Contents are non-increasing with suction; every downstream lookup snaps to
// this grid, no interpolation between grid points.
#[derive(Clone, Debug, PartialEq)]
pub struct RetentionCurve {
    contents: DVector<f64>, // Volumetric water content per grid point [cm³/cm³]
}

impl RetentionCurve {
    pub fn build(params: &SoilParameters) -> Self {
        let contents = DVector::from_fn(MAX_POTENTIAL + 1, |i, _| params.theta(i as f64));
        RetentionCurve { contents }
    }

    #[cfg(test)]
    pub(crate) fn from_contents(contents: Vec<f64>) -> Self {
        RetentionCurve {
            contents: DVector::from_vec(contents),
        }
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    // Content at an integer suction [kPa]
    pub fn content_at(&self, potential: usize) -> f64 {
        self.contents[potential]
    }

    // Content at zero suction
    pub fn saturation(&self) -> f64 {
        self.contents[0]
    }

    // (suction [kPa], content [cm³/cm³]) pairs for the plotting collaborator
    pub fn series(&self) -> Vec<(f64, f64)> {
        self.contents
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64, c))
            .collect()
    }

    /**
    Finds the grid suction whose content is nearest to `target`.

    Equivalent to scanning the grid in ascending suction order and keeping the
    first minimum of the absolute content difference: ties and plateaus of
    equal content resolve to the lowest suction. Implemented as a binary
    search over the non-increasing content axis.

    # Arguments
    * `target` - Volumetric water content to invert [cm³/cm³].

    # Returns
    The matching suction as a grid index [kPa].
    */
    pub fn nearest_potential(&self, target: f64) -> usize {
        let c = &self.contents;
        let n = c.len();

        // First index whose content is <= target
        let mut lo = 0;
        let mut hi = n;
        while lo < hi {
            let mid = (lo + hi) / 2;
            if c[mid] > target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        let mut best = if lo == 0 {
            0
        } else if lo >= n {
            n - 1
        } else if (c[lo - 1] - target).abs() <= (c[lo] - target).abs() {
            lo - 1
        } else {
            lo
        };

        // A plateau of equal contents resolves to its first grid point
        while best > 0 && c[best - 1] == c[best] {
            best -= 1;
        }
        best
    }
}
