//! Damage profile configuration loading

use super::ConfigError;
use crate::defense::DamageProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One named incoming damage mix as written in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedProfile {
    pub name: String,
    #[serde(default)]
    pub em: f64,
    #[serde(default)]
    pub explosive: f64,
    #[serde(default)]
    pub kinetic: f64,
    #[serde(default)]
    pub thermal: f64,
}

/// Container for damage profile configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesConfig {
    #[serde(rename = "profiles")]
    pub profiles: Vec<NamedProfile>,
}

impl ProfilesConfig {
    /// Validate every profile, keeping file order
    pub fn into_profiles(self) -> Result<Vec<(String, DamageProfile)>, ConfigError> {
        let mut out = Vec::with_capacity(self.profiles.len());
        for entry in self.profiles {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "damage profile name must not be empty".to_string(),
                ));
            }
            if out.iter().any(|(name, _)| *name == entry.name) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate damage profile '{}'",
                    entry.name
                )));
            }
            let profile =
                DamageProfile::new(entry.em, entry.explosive, entry.kinetic, entry.thermal)
                    .map_err(|e| {
                        ConfigError::ValidationError(format!("profile '{}': {}", entry.name, e))
                    })?;
            out.push((entry.name, profile));
        }
        Ok(out)
    }
}

/// Load damage profiles from a TOML file
pub fn load_damage_profiles(path: &Path) -> Result<Vec<(String, DamageProfile)>, ConfigError> {
    let config: ProfilesConfig = super::load_toml(path)?;
    config.into_profiles()
}

/// Load damage profiles from a TOML string
pub fn parse_damage_profiles(content: &str) -> Result<Vec<(String, DamageProfile)>, ConfigError> {
    let config: ProfilesConfig = super::parse_toml(content)?;
    config.into_profiles()
}

/// Get the built-in damage profiles, uniform first
pub fn default_profiles() -> Vec<(String, DamageProfile)> {
    let toml = include_str!("../../config/damage_profiles.toml");
    parse_damage_profiles(toml).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "built-in damage profiles failed to parse");
        vec![("Uniform".to_string(), DamageProfile::uniform())]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DamageType;

    #[test]
    fn test_parse_profiles() {
        let toml = r#"
[[profiles]]
name = "Blood Raiders"
em = 0.5
thermal = 0.5

[[profiles]]
name = "Kinetic only"
kinetic = 1
"#;

        let profiles = parse_damage_profiles(toml).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].0, "Blood Raiders");
        assert!((profiles[0].1.component(DamageType::Em) - 0.5).abs() < f64::EPSILON);
        assert!((profiles[0].1.component(DamageType::Explosive) - 0.0).abs() < f64::EPSILON);
        assert!((profiles[1].1.component(DamageType::Kinetic) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_all_zero_profile() {
        let toml = r#"
[[profiles]]
name = "Nothing"
"#;
        let result = parse_damage_profiles(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let toml = r#"
[[profiles]]
name = "Twice"
em = 1

[[profiles]]
name = "Twice"
em = 2
"#;
        let result = parse_damage_profiles(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_default_profiles_loads_all() {
        let profiles = default_profiles();

        assert_eq!(profiles.len(), 8, "Expected 8 built-in damage profiles");
        assert_eq!(profiles[0].0, "Uniform");
        assert_eq!(profiles[0].1, DamageProfile::uniform());

        let expected = [
            "Uniform",
            "EM",
            "Explosive",
            "Kinetic",
            "Thermal",
            "Angel Cartel",
            "Blood Raiders",
            "Guristas",
        ];
        for name in expected {
            assert!(
                profiles.iter().any(|(n, _)| n == name),
                "Missing profile: {}",
                name
            );
        }
    }
}
