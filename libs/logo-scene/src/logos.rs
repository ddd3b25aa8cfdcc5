//! Logos bundled with the application, keyed by their select-list value.

use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;

const A_SVG: &str = include_str!("../assets/svgs/a.svg");
const JWLR_SVG: &str = include_str!("../assets/svgs/JWLR_logo.svg");
const NIRVANA_SVG: &str = include_str!("../assets/svgs/Nirvana.svg");

/// A bundled SVG logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BundledLogo {
    /// Letter "A" with a counter.
    A,
    /// Smiley face.
    NirvanaLogo,
    /// Wordmark, shown when nothing was stored.
    #[default]
    Jwlr,
}

impl BundledLogo {
    /// Every bundled logo in select-list order.
    pub const ALL: [BundledLogo; 3] = [Self::A, Self::NirvanaLogo, Self::Jwlr];

    /// The select-list value naming this logo.
    pub fn value(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::NirvanaLogo => "Nirvana_logo",
            Self::Jwlr => "JWLR",
        }
    }

    /// The logo's SVG markup.
    pub fn markup(self) -> &'static str {
        match self {
            Self::A => A_SVG,
            Self::NirvanaLogo => NIRVANA_SVG,
            Self::Jwlr => JWLR_SVG,
        }
    }
}

impl fmt::Display for BundledLogo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for BundledLogo {
    type Err = SessionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|logo| logo.value() == value)
            .ok_or_else(|| SessionError::UnknownLogo(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg_mesh::{normalize, SurfaceMaterial};

    #[test]
    fn test_values_round_trip() {
        for logo in BundledLogo::ALL {
            assert_eq!(logo.value().parse::<BundledLogo>().unwrap(), logo);
        }
        assert!("jwlr".parse::<BundledLogo>().is_err());
    }

    #[test]
    fn test_bundled_logos_build() {
        let material = SurfaceMaterial::shared();
        for logo in BundledLogo::ALL {
            let group = normalize(logo.markup(), &material).unwrap();
            assert!(!group.is_empty(), "{logo} produced no meshes");
        }
    }

    #[test]
    fn test_letter_a_has_counter() {
        let group = normalize(BundledLogo::A.markup(), &SurfaceMaterial::shared()).unwrap();
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_wordmark_has_one_mesh_per_letter() {
        let group = normalize(BundledLogo::Jwlr.markup(), &SurfaceMaterial::shared()).unwrap();
        assert_eq!(group.len(), 4);
    }
}
