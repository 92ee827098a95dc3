//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! vsop87_dir = "kernels/data"
//! vsop87_version = "E"
//! bodies = ["earth", "mars", "jupiter"]
//! nutation = "full"
//! obliquity = "laskar"
//! strict_validation = true
//! ```
//!
//! Every field is optional. An empty `bodies` list means every body the
//! chosen VSOP87 version provides.

use std::path::{Path, PathBuf};

use eph_frames::{NutationModel, ObliquityModel};
use eph_series::{Body, Vsop87Version, file_extension};
use serde::Deserialize;

use crate::error::EngineError;

/// Engine configuration used at startup time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Directory holding the VSOP87 distribution files. Without it only
    /// the built-in lunar and Pluto theories are available.
    pub vsop87_dir: Option<PathBuf>,
    pub vsop87_version: char,
    pub bodies: Vec<Body>,
    pub nutation: NutationModel,
    pub obliquity: ObliquityModel,
    /// Missing theory files are errors when set, warnings otherwise. Also
    /// rejects Pluto queries outside the theory's validity range.
    pub strict_validation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vsop87_dir: None,
            vsop87_version: 'E',
            bodies: Vec::new(),
            nutation: NutationModel::default(),
            obliquity: ObliquityModel::default(),
            strict_validation: true,
        }
    }
}

impl EngineConfig {
    /// Convenience constructor: load every available body from `dir`.
    pub fn with_vsop87_dir(dir: PathBuf, strict_validation: bool) -> Self {
        Self {
            vsop87_dir: Some(dir),
            strict_validation,
            ..Self::default()
        }
    }

    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn version(&self) -> Result<Vsop87Version, EngineError> {
        Vsop87Version::from_letter(self.vsop87_version).ok_or_else(|| {
            EngineError::InvalidConfig(format!(
                "vsop87_version must be one of A-E, got {:?}",
                self.vsop87_version
            ))
        })
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let version = self.version()?;
        if let Some(dir) = &self.vsop87_dir
            && dir.as_os_str().is_empty()
        {
            return Err(EngineError::InvalidConfig(
                "vsop87_dir must not be empty".into(),
            ));
        }
        if self.vsop87_dir.is_none() && !self.bodies.is_empty() {
            return Err(EngineError::InvalidConfig(
                "bodies requires vsop87_dir".into(),
            ));
        }
        for &body in &self.bodies {
            if !available_bodies(version).contains(&body) {
                return Err(EngineError::InvalidConfig(format!(
                    "VSOP87{} has no series for {body}",
                    version.letter()
                )));
            }
        }
        Ok(())
    }

    /// Bodies to load from VSOP87 files, in catalog order.
    pub fn vsop87_bodies(&self) -> Result<Vec<Body>, EngineError> {
        if self.vsop87_dir.is_none() {
            return Ok(Vec::new());
        }
        let version = self.version()?;
        if self.bodies.is_empty() {
            return Ok(available_bodies(version));
        }
        let mut bodies = self.bodies.clone();
        bodies.sort_unstable();
        bodies.dedup();
        Ok(bodies)
    }

    /// Distribution file name for a body, e.g. `VSOP87E.ear`.
    pub fn vsop87_path(&self, body: Body) -> Option<PathBuf> {
        let dir = self.vsop87_dir.as_ref()?;
        let ext = file_extension(body)?;
        Some(dir.join(format!(
            "VSOP87{}.{ext}",
            self.vsop87_version.to_ascii_uppercase()
        )))
    }
}

/// Bodies a VSOP87 version has files for. Only the barycentric version E
/// includes the Sun.
pub fn available_bodies(version: Vsop87Version) -> Vec<Body> {
    Body::ALL
        .into_iter()
        .filter(|&b| file_extension(b).is_some())
        .filter(|&b| b != Body::Sun || version == Vsop87Version::E)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.vsop87_version, 'E');
        assert_eq!(config.nutation, NutationModel::Full);
        assert_eq!(config.obliquity, ObliquityModel::Laskar);
        assert!(config.strict_validation);
        assert!(config.validate().is_ok());
        assert!(config.vsop87_bodies().unwrap().is_empty());
    }

    #[test]
    fn parse_full_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            vsop87_dir = "data"
            vsop87_version = "A"
            bodies = ["mars", "earth", "mars"]
            nutation = "fast"
            obliquity = "classical"
            strict_validation = false
            "#,
        )
        .unwrap();
        assert_eq!(config.vsop87_dir, Some(PathBuf::from("data")));
        assert_eq!(config.nutation, NutationModel::Fast);
        assert_eq!(config.obliquity, ObliquityModel::Classical);
        assert!(!config.strict_validation);
        assert_eq!(
            config.vsop87_bodies().unwrap(),
            vec![Body::Earth, Body::Mars]
        );
        assert_eq!(
            config.vsop87_path(Body::Mars),
            Some(PathBuf::from("data").join("VSOP87A.mar"))
        );
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn rejects_bad_version() {
        let err = EngineConfig::from_toml_str("vsop87_version = \"F\"").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn rejects_unknown_field() {
        let err = EngineConfig::from_toml_str("cache_capacity = 4").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)), "{err}");
    }

    #[test]
    fn rejects_body_without_series() {
        let err = EngineConfig::from_toml_str(
            "vsop87_dir = \"d\"\nvsop87_version = \"A\"\nbodies = [\"sun\"]",
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)), "{err}");

        let err =
            EngineConfig::from_toml_str("vsop87_dir = \"d\"\nbodies = [\"moon\"]").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn rejects_bodies_without_dir() {
        let err = EngineConfig::from_toml_str("bodies = [\"earth\"]").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn available_bodies_per_version() {
        let e = available_bodies(Vsop87Version::E);
        assert_eq!(e.len(), 9);
        assert!(e.contains(&Body::Sun));
        let b = available_bodies(Vsop87Version::B);
        assert_eq!(b.len(), 8);
        assert!(!b.contains(&Body::Sun));
        assert!(!b.contains(&Body::Moon));
    }

    #[test]
    fn missing_config_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/ephem.toml")).unwrap_err();
        assert!(matches!(err, EngineError::ConfigRead { .. }), "{err}");
    }
}
