// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which effect modules run, and where.

use core::fmt;

/// An independently installable effect module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Module {
    /// 3-D tilt of cards under the pointer.
    Tilt,
    /// Scroll parallax of floating cards, particles and rings.
    ScrollParallax,
    /// Pointer parallax of rings and shapes.
    PointerParallax,
    /// Glow on buttons, the logo, rings and shapes.
    HoverGlow,
    /// Smooth in-page anchor scrolling.
    SmoothScroll,
    /// Navbar hide/show and active link.
    Navbar,
    /// Hamburger menu.
    MobileMenu,
    /// Scroll-triggered reveals.
    Reveal,
    /// Hero and portfolio entrance animations.
    Entrance,
    /// Contact form confirmation banner.
    ContactForm,
    /// Typing reveal of the hero headline.
    Typing,
    /// Canvas particle background and hero particles.
    Particles,
    /// Reading progress bar.
    ScrollProgress,
    /// Click ripples on buttons and cards.
    Ripple,
    /// Stat counters outside showcases.
    Counters,
    /// Project showcase cards.
    Showcase,
    /// Skill cards and their code lines.
    SkillCards,
}

impl Module {
    /// Every module, in installation order.
    ///
    /// Particles come first so the parallax layers bind the injected hero
    /// particles too.
    pub const ALL: [Self; 17] = [
        Self::Particles,
        Self::Tilt,
        Self::ScrollParallax,
        Self::PointerParallax,
        Self::HoverGlow,
        Self::SmoothScroll,
        Self::Navbar,
        Self::MobileMenu,
        Self::Reveal,
        Self::Entrance,
        Self::ContactForm,
        Self::Typing,
        Self::ScrollProgress,
        Self::Ripple,
        Self::Counters,
        Self::Showcase,
        Self::SkillCards,
    ];

    /// Short lowercase name, used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tilt => "tilt",
            Self::ScrollParallax => "scroll-parallax",
            Self::PointerParallax => "pointer-parallax",
            Self::HoverGlow => "hover-glow",
            Self::SmoothScroll => "smooth-scroll",
            Self::Navbar => "navbar",
            Self::MobileMenu => "mobile-menu",
            Self::Reveal => "reveal",
            Self::Entrance => "entrance",
            Self::ContactForm => "contact-form",
            Self::Typing => "typing",
            Self::Particles => "particles",
            Self::ScrollProgress => "scroll-progress",
            Self::Ripple => "ripple",
            Self::Counters => "counters",
            Self::Showcase => "showcase",
            Self::SkillCards => "skill-cards",
        }
    }

    /// Heavy pointer-driven modules that are skipped on narrow viewports.
    #[must_use]
    pub const fn is_desktop_only(self) -> bool {
        matches!(
            self,
            Self::Tilt | Self::ScrollParallax | Self::PointerParallax | Self::HoverGlow
        )
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Page-wide effect settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectsConfig {
    /// Viewports at most this wide count as mobile.
    pub mobile_breakpoint: f64,
    /// Modules turned off regardless of viewport.
    pub disabled: &'static [Module],
}

impl EffectsConfig {
    /// Everything on; desktop-only modules off at 768 px and below.
    #[must_use]
    pub const fn page() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            disabled: &[],
        }
    }

    /// Whether a viewport of `width` counts as mobile.
    #[must_use]
    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint
    }

    /// Whether `module` should be installed at `viewport_width`.
    #[must_use]
    pub fn runs(&self, module: Module, viewport_width: f64) -> bool {
        if self.disabled.contains(&module) {
            return false;
        }
        !(module.is_desktop_only() && self.is_mobile(viewport_width))
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self::page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let cfg = EffectsConfig::page();
        assert!(cfg.is_mobile(768.0));
        assert!(!cfg.is_mobile(769.0));
    }

    #[test]
    fn mobile_skips_heavy_modules_only() {
        let cfg = EffectsConfig::page();
        assert!(!cfg.runs(Module::Tilt, 400.0));
        assert!(cfg.runs(Module::Tilt, 1280.0));
        assert!(cfg.runs(Module::Navbar, 400.0));
        assert!(cfg.runs(Module::Typing, 400.0));
    }

    #[test]
    fn disabled_modules_never_run() {
        let cfg = EffectsConfig {
            disabled: &[Module::Particles],
            ..EffectsConfig::page()
        };
        assert!(!cfg.runs(Module::Particles, 1920.0));
        assert_eq!(Module::ALL.len(), 17);
        assert_eq!(alloc::format!("{}", Module::HoverGlow), "hover-glow");
    }

    #[test]
    fn particles_install_before_parallax() {
        let pos = |m| Module::ALL.iter().position(|&x| x == m);
        assert!(
            pos(Module::Particles) < pos(Module::ScrollParallax),
            "parallax must see injected particles"
        );
    }
}
