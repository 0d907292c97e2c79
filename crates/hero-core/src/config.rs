//! Tunable parameters for the particle field.
//!
//! Defaults come from [`crate::constants`]. The web front-end lets a page
//! override a subset of them through `data-*` attributes on the canvas, so
//! every override arrives as a string and is parsed and range-checked here.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;

use crate::constants::*;
use crate::error::ConfigError;

/// Upper bound on `num_points`; the connection pass is quadratic in it.
pub const MAX_POINTS: usize = 4000;
pub const MAX_FOCAL_POINTS: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub num_points: usize,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub size_cap: u32,
    pub radius_fraction: f32,
    pub focal_length: f32,
    pub rotation_step: f32,
    pub connection_fraction: f32,
    pub focal_points: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            num_points: NUM_POINTS,
            seed: None,
            size_cap: SURFACE_SIZE_CAP,
            radius_fraction: RADIUS_FRACTION,
            focal_length: FOCAL_LENGTH,
            rotation_step: ROTATION_STEP,
            connection_fraction: CONNECTION_FRACTION,
            focal_points: FOCAL_POINT_COUNT,
        }
    }
}

impl FieldConfig {
    /// Attribute names understood by [`FieldConfig::apply_attribute`], without
    /// the `data-` prefix. `focal-length` comes before the keys that grow the
    /// sphere so a page can raise all three together.
    pub const ATTRIBUTE_KEYS: [&'static str; 8] = [
        "points",
        "seed",
        "focal-length",
        "size-cap",
        "radius-fraction",
        "rotation-step",
        "connection-fraction",
        "focal-points",
    ];

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// RNG for point generation: seeded when `seed` is set, entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Apply one override. On error the config is left unchanged.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match name {
            "points" => next.num_points = parse(name, value)?,
            "seed" => next.seed = Some(parse(name, value)?),
            "size-cap" => next.size_cap = parse(name, value)?,
            "radius-fraction" => next.radius_fraction = parse(name, value)?,
            "focal-length" => next.focal_length = parse(name, value)?,
            "rotation-step" => next.rotation_step = parse(name, value)?,
            "connection-fraction" => next.connection_fraction = parse(name, value)?,
            "focal-points" => next.focal_points = parse(name, value)?,
            _ => return Err(ConfigError::UnknownAttribute(name.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_points == 0 || self.num_points > MAX_POINTS {
            return Err(ConfigError::OutOfRange {
                name: "points",
                expected: "between 1 and 4000",
                got: self.num_points as f64,
            });
        }
        if self.size_cap == 0 {
            return Err(ConfigError::OutOfRange {
                name: "size-cap",
                expected: "positive",
                got: 0.0,
            });
        }
        if !(self.radius_fraction > 0.0 && self.radius_fraction <= 0.5) {
            return Err(ConfigError::OutOfRange {
                name: "radius-fraction",
                expected: "in (0, 0.5]",
                got: self.radius_fraction as f64,
            });
        }
        // The nearest point sits at z = -radius; the projection needs F + z > 0.
        let max_radius = self.size_cap as f32 * self.radius_fraction;
        if !(self.focal_length.is_finite() && self.focal_length > max_radius) {
            return Err(ConfigError::OutOfRange {
                name: "focal-length",
                expected: "greater than size-cap * radius-fraction",
                got: self.focal_length as f64,
            });
        }
        if !self.rotation_step.is_finite() {
            return Err(ConfigError::OutOfRange {
                name: "rotation-step",
                expected: "finite",
                got: self.rotation_step as f64,
            });
        }
        if !(self.connection_fraction.is_finite() && self.connection_fraction > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "connection-fraction",
                expected: "positive",
                got: self.connection_fraction as f64,
            });
        }
        if self.focal_points > MAX_FOCAL_POINTS {
            return Err(ConfigError::OutOfRange {
                name: "focal-points",
                expected: "at most 8",
                got: self.focal_points as f64,
            });
        }
        Ok(())
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Unparseable {
            name: name.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn every_listed_key_is_accepted() {
        let values = ["300", "7", "600", "640", "0.35", "0.004", "0.6", "2"];
        let mut cfg = FieldConfig::default();
        for (key, value) in FieldConfig::ATTRIBUTE_KEYS.iter().zip(values) {
            cfg.apply_attribute(key, value)
                .unwrap_or_else(|e| panic!("{key}: {e}"));
        }
        assert_eq!(cfg.num_points, 300);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.size_cap, 640);
        assert_eq!(cfg.focal_length, 600.0);
        assert_eq!(cfg.focal_points, 2);
    }

    #[test]
    fn rejected_override_leaves_config_untouched() {
        let mut cfg = FieldConfig::default();
        let err = cfg.apply_attribute("radius-fraction", "0.9").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { name: "radius-fraction", .. }));
        assert_eq!(cfg, FieldConfig::default());
    }

    #[test]
    fn focal_length_must_clear_the_sphere() {
        let mut cfg = FieldConfig::default();
        let err = cfg.apply_attribute("focal-length", "100").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { name: "focal-length", .. }));
        // Exactly on the nearest point is still a division by zero.
        assert!(cfg.apply_attribute("focal-length", "320").is_err());
        assert_eq!(cfg, FieldConfig::default());
        assert!(cfg.apply_attribute("focal-length", "321").is_ok());
    }

    #[test]
    fn growing_the_sphere_past_the_focal_plane_is_rejected() {
        let mut cfg = FieldConfig::default();
        assert!(cfg.apply_attribute("size-cap", "2000").is_err());
        assert!(cfg.apply_attribute("size-cap", "1600").is_ok());
        assert!(cfg.apply_attribute("radius-fraction", "0.5").is_err());
        assert_eq!(cfg.size_cap, 1600);
        assert_eq!(cfg.radius_fraction, RADIUS_FRACTION);

        cfg.apply_attribute("focal-length", "1200").unwrap();
        assert!(cfg.apply_attribute("size-cap", "2000").is_ok());
    }
}
