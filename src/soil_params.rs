use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// Soil texture fractions and hydraulic parameters (van Genuchten-Mualem model,
// parameters as estimated by Rosetta-3)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilParameters {
    pub sand: f64,    // Sand fraction [%]
    pub silt: f64,    // Silt fraction [%]
    pub clay: f64,    // Clay fraction [%]
    pub theta_r: f64, // Residual water content [cm³/cm³]
    pub theta_s: f64, // Saturated water content [cm³/cm³]
    pub alpha: f64,   // van Genuchten parameter [1/kPa]
    pub n: f64,       // van Genuchten parameter [-]
    pub ks: f64,      // Saturated hydraulic conductivity [cm/day]
}

impl SoilParameters {
    pub fn new(
        sand: f64,
        silt: f64,
        clay: f64,
        theta_r: f64,
        theta_s: f64,
        alpha: f64,
        n: f64,
        ks: f64,
    ) -> Self {
        SoilParameters {
            sand,
            silt,
            clay,
            theta_r,
            theta_s,
            alpha,
            n,
            ks,
        }
    }

    // Load a named soil from a TOML parameter catalog. Soil names are matched
    // case-insensitively against lowercase table keys.
    pub fn from_toml_str(toml_str: &str, soil_name: &str) -> Result<Self, String> {
        let catalog: HashMap<String, SoilParameters> = toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse soil parameter catalog: {}", e))?;
        let name = soil_name.to_lowercase();
        catalog
            .get(&name)
            .copied()
            .ok_or_else(|| format!("No soil named '{}' in parameter catalog", name))
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P, soil_name: &str) -> Result<Self, String> {
        let toml_str = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read '{}': {}", path.as_ref().display(), e))?;
        Self::from_toml_str(&toml_str, soil_name)
    }

    // Check ranges before any curve work; texture fractions are deliberately
    // left unvalidated (they need not sum to 100)
    pub fn validate(&self) -> Result<(), String> {
        if self.n <= 1.0 {
            return Err(format!("van Genuchten n must be > 1, got {}", self.n));
        }
        if self.alpha <= 0.0 {
            return Err(format!("van Genuchten alpha must be > 0, got {}", self.alpha));
        }
        if self.theta_r < 0.0 || self.theta_s > 1.0 || self.theta_r >= self.theta_s {
            return Err(format!(
                "Water content limits must satisfy 0 <= theta_r < theta_s <= 1, got theta_r={}, theta_s={}",
                self.theta_r, self.theta_s
            ));
        }
        if self.ks <= 0.0 {
            return Err(format!(
                "Saturated conductivity must be > 0, got {}",
                self.ks
            ));
        }
        Ok(())
    }

    // Water content as a function of matric potential (psi, kPa suction)
    pub fn theta(&self, psi: f64) -> f64 {
        if psi <= 0.0 {
            self.theta_s
        } else {
            let m = 1.0 - 1.0 / self.n;
            let ap = self.alpha * psi;
            self.theta_r + (self.theta_s - self.theta_r) / (ap.powf(self.n) + 1.0).powf(m)
        }
    }

    // Unsaturated hydraulic conductivity as a function of matric potential (psi, kPa)
    pub fn k(&self, psi: f64) -> f64 {
        if psi <= 0.0 {
            self.ks
        } else {
            let m = 1.0 - 1.0 / self.n;
            let ap = self.alpha * psi;
            let se = (1.0 / (1.0 + ap.powf(self.n))).powf(m); // Effective saturation
            self.ks * se.sqrt() * (1.0 - (1.0 - se.powf(1.0 / m)).powf(m)).powi(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn loam() -> SoilParameters {
        SoilParameters::new(42.0, 50.0, 8.0, 0.062, 0.406, 0.005, 1.54, 40.0)
    }

    #[test]
    fn theta_at_zero_suction_is_saturation() {
        assert_eq!(loam().theta(0.0), 0.406);
    }

    #[test]
    fn theta_at_reference_potentials() {
        let p = loam();
        assert_abs_diff_eq!(p.theta(33.0), 0.39878, epsilon = 1e-3);
        assert_abs_diff_eq!(p.theta(1500.0), 0.17611, epsilon = 1e-3);
    }

    #[test]
    fn conductivity_decreases_with_suction() {
        let p = loam();
        assert_eq!(p.k(0.0), 40.0);
        let mut prev = p.k(1.0);
        for psi in [10.0, 100.0, 1000.0] {
            let k = p.k(psi);
            assert!(k > 0.0 && k < prev, "k({}) = {} not below {}", psi, k, prev);
            prev = k;
        }
    }

    #[test]
    fn validate_rejects_out_of_range_parameters() {
        let mut p = loam();
        p.n = 1.0;
        assert!(p.validate().is_err());

        let mut p = loam();
        p.alpha = 0.0;
        assert!(p.validate().is_err());

        let mut p = loam();
        p.theta_r = 0.5;
        assert!(p.validate().is_err());

        let mut p = loam();
        p.ks = 0.0;
        assert!(p.validate().is_err());

        assert!(loam().validate().is_ok());
    }

    #[test]
    fn loads_named_soil_from_toml_catalog() {
        let catalog = r#"
            [loam]
            sand = 42.0
            silt = 50.0
            clay = 8.0
            theta_r = 0.062
            theta_s = 0.406
            alpha = 0.005
            n = 1.54
            ks = 40.0

            [sand]
            sand = 90.0
            silt = 5.0
            clay = 5.0
            theta_r = 0.045
            theta_s = 0.375
            alpha = 0.035
            n = 3.18
            ks = 642.0
        "#;
        let p = SoilParameters::from_toml_str(catalog, "Loam").unwrap();
        assert_eq!(p, loam());

        let err = SoilParameters::from_toml_str(catalog, "peat").unwrap_err();
        assert!(err.contains("peat"));

        assert!(SoilParameters::from_toml_str("not [valid", "loam").is_err());
    }
}
