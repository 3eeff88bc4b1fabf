// todo: the catalog could be loaded from the cc-0 database at https://github.com/polyanskiy/refractiveindex.info-database/

use std::str::FromStr;

use strum::VariantArray;

/// Index tolerance within which a value is labelled with a catalog material.
pub const MATCH_TOLERANCE: f64 = 0.005;

/// Common media with their refractive index for visible light.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::VariantArray, strum::Display,
)]
pub enum Material {
    Air,
    Water,
    Glass,
    Diamond,
    Acrylic,
    Silicon,
}

impl Material {
    pub fn refractive_index(&self) -> f64 {
        match self {
            Material::Air => 1.00,
            Material::Water => 1.33,
            Material::Glass => 1.52,
            Material::Diamond => 2.42,
            Material::Acrylic => 1.49,
            Material::Silicon => 3.42,
        }
    }

    /// Finds the catalog material with the given refractive index.
    pub fn matching(refractive_index: f64) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|material| {
                (material.refractive_index() - refractive_index).abs() <= MATCH_TOLERANCE
            })
            .copied()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown material: {name}")]
pub struct UnknownMaterial {
    pub name: String,
}

impl FromStr for Material {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .iter()
            .find(|material| material.to_string().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                UnknownMaterial {
                    name: s.to_owned(),
                }
            })
    }
}
