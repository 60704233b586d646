use std::f64::consts::{PI, TAU};

use crate::config::MapConfig;

use super::Projection;

const EPSILON: f64 = 1e-6;

/// Raw conic equal-area (Albers) formulas for one pair of standard parallels.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Raw {
    Conic { n: f64, c: f64, r0: f64 },
    /// Parallels symmetric about the equator collapse the cone into a cylinder.
    Cylindrical { cos_phi0: f64 },
}

impl Raw {
    fn new(phi0: f64, phi1: f64) -> Self {
        let sy0 = phi0.sin();
        let n = (sy0 + phi1.sin()) / 2.0;
        if n.abs() < EPSILON {
            return Self::Cylindrical {
                cos_phi0: phi0.cos(),
            };
        }
        let c = sy0.mul_add(2.0f64.mul_add(n, -sy0), 1.0);
        Self::Conic {
            n,
            c,
            r0: c.sqrt() / n,
        }
    }

    fn project(self, lambda: f64, phi: f64) -> (f64, f64) {
        match self {
            Self::Conic { n, c, r0 } => {
                let r = (2.0 * n).mul_add(-phi.sin(), c).sqrt() / n;
                let theta = lambda * n;
                (r * theta.sin(), r.mul_add(-theta.cos(), r0))
            }
            Self::Cylindrical { cos_phi0 } => (lambda * cos_phi0, phi.sin() / cos_phi0),
        }
    }
}

/// Three-axis sphere rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rotation {
    lambda: f64,
    cos_phi: f64,
    sin_phi: f64,
    cos_gamma: f64,
    sin_gamma: f64,
    tilted: bool,
}

impl Rotation {
    fn new([lambda, phi, gamma]: [f64; 3]) -> Self {
        let (phi, gamma) = (phi.to_radians(), gamma.to_radians());
        Self {
            lambda: lambda.to_radians(),
            cos_phi: phi.cos(),
            sin_phi: phi.sin(),
            cos_gamma: gamma.cos(),
            sin_gamma: gamma.sin(),
            tilted: phi.abs() > f64::EPSILON || gamma.abs() > f64::EPSILON,
        }
    }

    fn apply(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let mut lambda = lambda + self.lambda;
        if lambda > PI {
            lambda -= TAU;
        } else if lambda < -PI {
            lambda += TAU;
        }
        if !self.tilted {
            return (lambda, phi);
        }

        let cos_p = phi.cos();
        let x = lambda.cos() * cos_p;
        let y = lambda.sin() * cos_p;
        let z = phi.sin();
        let k = z.mul_add(self.cos_phi, x * self.sin_phi);
        (
            y.mul_add(self.cos_gamma, -k * self.sin_gamma)
                .atan2(x.mul_add(self.cos_phi, -z * self.sin_phi)),
            k.mul_add(self.cos_gamma, y * self.sin_gamma).asin(),
        )
    }
}

/// Albers-style conic equal-area projection.
///
/// `center` is given in the rotated frame and lands on `translate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConicEqualArea {
    raw: Raw,
    rotation: Rotation,
    scale: f64,
    dx: f64,
    dy: f64,
}

impl ConicEqualArea {
    #[must_use]
    pub fn new(
        parallels: [f64; 2],
        rotate: [f64; 3],
        center: [f64; 2],
        scale: f64,
        translate: [f64; 2],
    ) -> Self {
        let raw = Raw::new(parallels[0].to_radians(), parallels[1].to_radians());
        let (cx, cy) = raw.project(center[0].to_radians(), center[1].to_radians());
        Self {
            raw,
            rotation: Rotation::new(rotate),
            scale,
            dx: scale.mul_add(-cx, translate[0]),
            dy: scale.mul_add(cy, translate[1]),
        }
    }

    /// Projection for the configured map frame, centered in it.
    #[must_use]
    pub fn from_config(map: &MapConfig) -> Self {
        Self::new(
            map.parallels,
            map.rotate,
            map.center,
            map.scale,
            [map.width / 2.0, map.height / 2.0],
        )
    }
}

impl Projection for ConicEqualArea {
    fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let (lambda, phi) = self.rotation.apply(lon.to_radians(), lat.to_radians());
        let (x, y) = self.raw.project(lambda, phi);
        let point = (self.scale.mul_add(x, self.dx), self.scale.mul_add(-y, self.dy));
        (point.0.is_finite() && point.1.is_finite()).then_some(point)
    }
}
