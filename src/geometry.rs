//! Coil geometry records and the resolver that builds them from profiles or explicit
//! dimensions.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::errors::CoilError;
use crate::math::Scalar;
use crate::optimizer::optimal_loop_radius;
use crate::units::{awg_to_radius_meters, inches_to_meters, radius_meters_to_awg};

/// Pitch-to-wire-radius ratio used when no pitch is given (that of the `wire` profile).
pub const DEFAULT_PITCH_RATIO: Scalar = 2.025;

/// Returns the default pitch `2.025 · rc` for a wire of radius `cross_section_radius`.
#[must_use]
pub fn default_pitch(cross_section_radius: Scalar) -> Scalar {
    DEFAULT_PITCH_RATIO * cross_section_radius
}

/// Physical description of a single-layer helical coil, all lengths in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilGeometry {
    /// Radius of the wire cross-section `rc` (m).
    pub cross_section_radius: Scalar,
    /// Radius of each loop `r` (m).
    pub loop_radius: Scalar,
    /// Number of turns `N`; fractional turns are allowed.
    pub turns: Scalar,
    /// Axial distance between adjacent turns `s` (m).
    pub pitch: Scalar,
    /// Capacitance added across the coil terminals (F).
    pub external_capacitance: Scalar,
}

impl CoilGeometry {
    /// Creates a geometry without external capacitance, rejecting non-physical values.
    pub fn new(
        cross_section_radius: Scalar,
        loop_radius: Scalar,
        turns: Scalar,
        pitch: Scalar,
    ) -> Result<Self, CoilError> {
        ensure_positive("cross-section radius", cross_section_radius)?;
        ensure_positive("loop radius", loop_radius)?;
        ensure_positive("turn count", turns)?;
        ensure_positive("pitch", pitch)?;
        Ok(Self {
            cross_section_radius,
            loop_radius,
            turns,
            pitch,
            external_capacitance: 0.0,
        })
    }

    /// Returns a copy with `capacitance` farads connected across the terminals.
    pub fn with_external_capacitance(self, capacitance: Scalar) -> Result<Self, CoilError> {
        if !capacitance.is_finite() || capacitance < 0.0 {
            return Err(CoilError::InvalidArgument(format!(
                "external capacitance must be finite and non-negative, got {capacitance:e}"
            )));
        }
        Ok(Self {
            external_capacitance: capacitance,
            ..self
        })
    }

    /// End-to-end wire length `l = 2π r N` (m).
    #[must_use]
    pub fn wire_length(&self) -> Scalar {
        2.0 * PI * self.loop_radius * self.turns
    }

    /// Axial coil height `h = s N` (m).
    #[must_use]
    pub fn height(&self) -> Scalar {
        self.pitch * self.turns
    }

    /// Spacing ratio `s / (2 rc)` entering the self-capacitance formula.
    #[must_use]
    pub fn spacing_ratio(&self) -> Scalar {
        self.pitch / (2.0 * self.cross_section_radius)
    }

    /// Fractional AWG gauge of the wire.
    #[must_use]
    pub fn awg(&self) -> Scalar {
        radius_meters_to_awg(self.cross_section_radius)
    }

    /// Geometric factor `ln(8r/rc) − 2` shared by the inductance and Q formulas.
    #[must_use]
    pub fn log_factor(&self) -> Scalar {
        (8.0 * self.loop_radius / self.cross_section_radius).ln() - 2.0
    }
}

fn ensure_positive(what: &str, value: Scalar) -> Result<(), CoilError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoilError::InvalidArgument(format!(
            "{what} must be positive and finite, got {value:e}"
        )))
    }
}

/// Named default coils.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Ten turns of AWG 22 on a 10 cm radius, turns nearly touching.
    #[default]
    Wire,
    /// 5.25 turns of quarter-inch tubing at the radius that maximizes Q.
    BigWire,
}

impl Profile {
    /// All recognized profiles.
    pub const ALL: [Self; 2] = [Self::Wire, Self::BigWire];

    /// Name used to select the profile.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wire => "wire",
            Self::BigWire => "bigwire",
        }
    }

    /// Named wire gauge the profile is wound from, if it is an AWG wire.
    #[must_use]
    pub const fn nominal_awg(self) -> Option<Scalar> {
        match self {
            Self::Wire => Some(22.0),
            Self::BigWire => None,
        }
    }

    /// Geometry described by the profile.
    #[must_use]
    pub fn geometry(self) -> CoilGeometry {
        match self {
            Self::Wire => {
                let rc = awg_to_radius_meters(22.0);
                CoilGeometry {
                    cross_section_radius: rc,
                    loop_radius: 0.10,
                    turns: 10.0,
                    pitch: default_pitch(rc),
                    external_capacitance: 0.0,
                }
            }
            Self::BigWire => {
                let rc = inches_to_meters(0.25) / 2.0;
                CoilGeometry {
                    cross_section_radius: rc,
                    loop_radius: optimal_loop_radius(rc),
                    turns: 5.25,
                    pitch: 0.008,
                    external_capacitance: 0.0,
                }
            }
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = CoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoilError::InvalidArgument(format!(
                    "must choose a recognized default profile (wire, bigwire), got {s:?}"
                ))
            })
    }
}

/// How the loop radius of an explicit coil is chosen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopRadius {
    /// A given radius in meters.
    Explicit(Scalar),
    /// The radius `rc·e^(13/3)/8` that maximizes the attainable Q for the wire.
    GlobalOptimum,
}

/// Where the base dimensions of a coil come from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoilSource {
    /// A named default profile.
    Profile(Profile),
    /// Wire radius and turn count given directly; the loop radius must be set
    /// through [`CoilConfig::loop_radius()`] or [`CoilConfig::optimal_loop_radius()`].
    Explicit {
        /// Wire cross-section radius (m).
        cross_section_radius: Scalar,
        /// Turn count.
        turns: Scalar,
    },
}

/// Coil configuration with explicit defaulting rules.
///
/// Overrides apply on top of either source; an explicit source has no loop radius of
/// its own, and its pitch defaults to [`default_pitch`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilConfig {
    /// Base dimensions.
    pub source: CoilSource,
    /// Loop radius override.
    pub loop_radius: Option<LoopRadius>,
    /// Pitch override (m).
    pub pitch: Option<Scalar>,
    /// External capacitance (F); zero when absent.
    pub external_capacitance: Option<Scalar>,
}

impl Default for CoilConfig {
    fn default() -> Self {
        Self::from_profile(Profile::default())
    }
}

impl CoilConfig {
    /// Configuration for a named profile.
    pub fn profile(name: &str) -> Result<Self, CoilError> {
        Ok(Self::from_profile(name.parse()?))
    }

    /// Configuration for a known profile.
    #[must_use]
    pub const fn from_profile(profile: Profile) -> Self {
        Self {
            source: CoilSource::Profile(profile),
            loop_radius: None,
            pitch: None,
            external_capacitance: None,
        }
    }

    /// Configuration from a wire radius (m) and turn count.
    #[must_use]
    pub const fn explicit(cross_section_radius: Scalar, turns: Scalar) -> Self {
        Self {
            source: CoilSource::Explicit {
                cross_section_radius,
                turns,
            },
            loop_radius: None,
            pitch: None,
            external_capacitance: None,
        }
    }

    /// Sets the loop radius (m).
    #[must_use]
    pub const fn loop_radius(mut self, loop_radius: Scalar) -> Self {
        self.loop_radius = Some(LoopRadius::Explicit(loop_radius));
        self
    }

    /// Uses the loop radius that maximizes the attainable Q.
    #[must_use]
    pub const fn optimal_loop_radius(mut self) -> Self {
        self.loop_radius = Some(LoopRadius::GlobalOptimum);
        self
    }

    /// Sets the pitch (m).
    #[must_use]
    pub const fn pitch(mut self, pitch: Scalar) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Sets the external capacitance (F).
    #[must_use]
    pub const fn external_capacitance(mut self, capacitance: Scalar) -> Self {
        self.external_capacitance = Some(capacitance);
        self
    }

    /// Named gauge of the configured wire; only profiles carry one.
    #[must_use]
    pub const fn nominal_awg(&self) -> Option<Scalar> {
        match self.source {
            CoilSource::Profile(profile) => profile.nominal_awg(),
            CoilSource::Explicit { .. } => None,
        }
    }

    /// Resolves the configuration into a validated geometry.
    pub fn resolve(&self) -> Result<CoilGeometry, CoilError> {
        let (rc, turns, base_radius, base_pitch) = match self.source {
            CoilSource::Profile(profile) => {
                let g = profile.geometry();
                (g.cross_section_radius, g.turns, Some(g.loop_radius), g.pitch)
            }
            CoilSource::Explicit {
                cross_section_radius,
                turns,
            } => (cross_section_radius, turns, None, default_pitch(cross_section_radius)),
        };

        let loop_radius = match (self.loop_radius, base_radius) {
            (Some(LoopRadius::Explicit(r)), _) => r,
            (Some(LoopRadius::GlobalOptimum), _) => optimal_loop_radius(rc),
            (None, Some(r)) => r,
            (None, None) => {
                return Err(CoilError::InvalidArgument(
                    "explicit coil needs a loop radius (explicit value or global optimum)"
                        .to_owned(),
                ))
            }
        };
        let pitch = self.pitch.unwrap_or(base_pitch);

        let geometry = CoilGeometry::new(rc, loop_radius, turns, pitch)?
            .with_external_capacitance(self.external_capacitance.unwrap_or(0.0))?;
        debug!(?geometry, "resolved coil geometry");
        Ok(geometry)
    }
}
