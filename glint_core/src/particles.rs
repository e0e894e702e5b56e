// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drifting background particles.
//!
//! [`ParticleField`] is the canvas variant: a fixed population that moves a
//! little every frame and bounces off the canvas edges. [`DomParticle`] is the
//! decorative variant: a handful of absolutely positioned elements whose motion
//! is left to a CSS keyframe animation, so only their placement and timing are
//! randomized here.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use fastrand::Rng;
use kurbo::{Point, Size, Vec2};

/// Parameters of a canvas particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    /// Number of particles.
    pub count: usize,
    /// Radius range in pixels, `[min, max)`.
    pub radius: (f64, f64),
    /// Maximum speed on each axis, pixels per frame.
    pub max_speed: f64,
    /// Opacity range, `[min, max)`.
    pub opacity: (f64, f64),
    /// Fill color as `(r, g, b)`.
    pub rgb: (u8, u8, u8),
}

impl ParticleConfig {
    /// The full-page field behind every section.
    #[must_use]
    pub const fn page() -> Self {
        Self {
            count: 50,
            radius: (1.0, 4.0),
            max_speed: 0.25,
            opacity: (0.2, 0.7),
            rgb: (59, 175, 218),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self::page()
    }
}

/// Inline style of the full-page canvas: fixed behind content, ignoring input.
pub const CANVAS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
     pointer-events: none; z-index: 1;";

/// One canvas particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Centre in canvas pixels.
    pub position: Point,
    /// Displacement per frame.
    pub velocity: Vec2,
    /// Radius in pixels.
    pub radius: f64,
    /// Alpha in `[0, 1]`.
    pub opacity: f64,
}

fn in_range(rng: &mut Rng, (lo, hi): (f64, f64)) -> f64 {
    lo + rng.f64() * (hi - lo)
}

/// Velocity component `v` at coordinate `at` on an axis of length `extent`,
/// turned to face the canvas when `at` is past either edge.
fn inward(at: f64, extent: f64, v: f64) -> f64 {
    if at < 0.0 {
        v.abs()
    } else if at > extent {
        -v.abs()
    } else {
        v
    }
}

/// A bouncing particle population on a canvas.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: ParticleConfig,
    bounds: Size,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatters `config.count` particles uniformly over `bounds`.
    #[must_use]
    pub fn new(config: ParticleConfig, bounds: Size, rng: &mut Rng) -> Self {
        let speed = (-config.max_speed, config.max_speed);
        let particles = (0..config.count)
            .map(|_| Particle {
                position: Point::new(rng.f64() * bounds.width, rng.f64() * bounds.height),
                velocity: Vec2::new(in_range(rng, speed), in_range(rng, speed)),
                radius: in_range(rng, config.radius),
                opacity: in_range(rng, config.opacity),
            })
            .collect();
        Self {
            config,
            bounds,
            particles,
        }
    }

    /// Advances every particle by one frame.
    ///
    /// A particle outside the canvas on an axis gets that velocity component
    /// pointed back toward the canvas, so it drifts back in however far out
    /// it is.
    pub fn step(&mut self) {
        let Size { width, height } = self.bounds;
        for p in &mut self.particles {
            p.position += p.velocity;
            p.velocity.x = inward(p.position.x, width, p.velocity.x);
            p.velocity.y = inward(p.position.y, height, p.velocity.y);
        }
    }

    /// Adopts new canvas bounds. Particles left outside by a shrink are
    /// moved onto the nearest edge.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
        for p in &mut self.particles {
            p.position.x = p.position.x.clamp(0.0, bounds.width.max(0.0));
            p.position.y = p.position.y.clamp(0.0, bounds.height.max(0.0));
        }
    }

    /// Current canvas bounds.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// The particles, in draw order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// CSS fill color for a particle.
    #[must_use]
    pub fn fill_style(&self, particle: &Particle) -> String {
        let (r, g, b) = self.config.rgb;
        format!("rgba({r}, {g}, {b}, {})", particle.opacity)
    }
}

/// Placement and timing of one decorative DOM particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomParticle {
    /// `top`, percent of the container.
    pub top: f64,
    /// `left`, percent of the container.
    pub left: f64,
    /// `animation-delay`, seconds in `[0, 8)`.
    pub delay: f64,
    /// `animation-duration`, seconds in `[6, 10)`.
    pub duration: f64,
}

impl DomParticle {
    /// How many the hero injects.
    pub const HERO_COUNT: usize = 5;
    /// CSS class carried by every injected particle.
    pub const CLASS: &'static str = "particle";

    /// Random placement.
    #[must_use]
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            top: rng.f64() * 100.0,
            left: rng.f64() * 100.0,
            delay: rng.f64() * 8.0,
            duration: 6.0 + rng.f64() * 4.0,
        }
    }

    /// Style declarations, as `(property, value)` pairs.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, String); 4] {
        [
            ("top", format!("{}%", self.top)),
            ("left", format!("{}%", self.left)),
            ("animation-delay", format!("{}s", self.delay)),
            ("animation-duration", format!("{}s", self.duration)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_respects_config_ranges() {
        let mut rng = Rng::with_seed(7);
        let cfg = ParticleConfig::page();
        let bounds = Size::new(800.0, 600.0);
        let field = ParticleField::new(cfg, bounds, &mut rng);
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.position.x), "x out of canvas: {p:?}");
            assert!((0.0..=600.0).contains(&p.position.y), "y out of canvas: {p:?}");
            assert!((1.0..4.0).contains(&p.radius), "radius: {p:?}");
            assert!((0.2..0.7).contains(&p.opacity), "opacity: {p:?}");
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
        }
    }

    #[test]
    fn particles_bounce_at_edges() {
        let mut rng = Rng::with_seed(1);
        let cfg = ParticleConfig {
            count: 1,
            ..ParticleConfig::page()
        };
        let mut field = ParticleField::new(cfg, Size::new(10.0, 10.0), &mut rng);
        field.particles[0] = Particle {
            position: Point::new(9.9, 5.0),
            velocity: Vec2::new(0.25, 0.0),
            radius: 1.0,
            opacity: 0.5,
        };
        field.step();
        assert!(field.particles()[0].velocity.x < 0.0, "reflected after crossing the edge");
        field.step();
        assert!(field.particles()[0].position.x < 10.0);
    }

    #[test]
    fn population_stays_near_canvas() {
        let mut rng = Rng::with_seed(99);
        let mut field = ParticleField::new(ParticleConfig::page(), Size::new(300.0, 200.0), &mut rng);
        for _ in 0..5_000 {
            field.step();
        }
        for p in field.particles() {
            assert!(p.position.x > -1.0 && p.position.x < 301.0, "escaped: {p:?}");
            assert!(p.position.y > -1.0 && p.position.y < 201.0, "escaped: {p:?}");
        }
    }

    #[test]
    fn shrinking_the_canvas_pulls_particles_back_in() {
        let mut rng = Rng::with_seed(5);
        let mut field =
            ParticleField::new(ParticleConfig::page(), Size::new(1000.0, 800.0), &mut rng);
        field.resize(Size::new(200.0, 200.0));
        for _ in 0..10_000 {
            field.step();
        }
        let stranded = field
            .particles()
            .iter()
            .filter(|p| !(-1.0..=201.0).contains(&p.position.x) || !(-1.0..=201.0).contains(&p.position.y))
            .count();
        assert_eq!(stranded, 0, "every particle returns to the smaller canvas");
    }

    #[test]
    fn fill_style_uses_particle_opacity() {
        let mut rng = Rng::with_seed(3);
        let field = ParticleField::new(ParticleConfig::page(), Size::new(1.0, 1.0), &mut rng);
        let p = Particle {
            opacity: 0.5,
            ..field.particles()[0]
        };
        assert_eq!(field.fill_style(&p), "rgba(59, 175, 218, 0.5)");
    }

    #[test]
    fn dom_particle_ranges() {
        let mut rng = Rng::with_seed(11);
        for _ in 0..100 {
            let p = DomParticle::random(&mut rng);
            assert!((0.0..100.0).contains(&p.top) && (0.0..100.0).contains(&p.left));
            assert!((0.0..8.0).contains(&p.delay));
            assert!((6.0..10.0).contains(&p.duration));
        }
        let decls = DomParticle { top: 10.0, left: 20.5, delay: 1.0, duration: 7.5 }.declarations();
        assert_eq!(decls[1], ("left", String::from("20.5%")));
        assert_eq!(decls[3], ("animation-duration", String::from("7.5s")));
    }
}
