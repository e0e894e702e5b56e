// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project showcase cards, one installer driven by [`ShowcaseConfig`].

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use glint_core::showcase::ShowcaseConfig;
use glint_core::style::{StyleSink, Toggle};
use glint_core::time::Duration;

use super::ripple::SharedRipples;
use super::typing::TypedLine;
use super::{counter, ripple};
use crate::dom;
use crate::{Context, Effects, after};

/// A snippet and its code lines, captured before any typing.
struct Snippet {
    element: HtmlElement,
    lines: Vec<TypedLine>,
}

/// Applies `toggle` on after `delay`, unless the card was left meanwhile.
fn toggle_later(
    hovered: &Rc<Cell<bool>>,
    element: &HtmlElement,
    toggle: Toggle,
    delay: Duration,
) {
    let (hovered, element) = (Rc::clone(hovered), element.clone());
    after(delay, move || {
        if hovered.get() {
            dom::with_style(&element, |s| toggle.apply(s, true));
        }
    });
}

fn card_hover(
    cx: &Rc<Context>,
    fx: &mut Effects,
    cfg: ShowcaseConfig,
    root: &HtmlElement,
    techs: &[HtmlElement],
    stats: &[HtmlElement],
) -> Result<(), JsValue> {
    let snippets: Rc<[Snippet]> = dom::query_all_in(root, ".code-snippet")?
        .into_iter()
        .map(|element| {
            let lines = dom::query_all_in(&element, ".code-line")
                .unwrap_or_default()
                .into_iter()
                .map(TypedLine::capture)
                .collect();
            Snippet { element, lines }
        })
        .collect();
    let techs: Rc<[HtmlElement]> = techs.into();
    let stats: Rc<[HtmlElement]> = stats.into();
    let logo = dom::query_in(root, ".logo-icon");
    let overlay = dom::query_in(root, ".portfolio-overlay");
    let hovered = Rc::new(Cell::new(false));

    let enter = {
        let (cx, hovered) = (Rc::clone(cx), Rc::clone(&hovered));
        let (techs, snippets, stats) = (Rc::clone(&techs), Rc::clone(&snippets), Rc::clone(&stats));
        let (logo, overlay) = (logo.clone(), overlay.clone());
        move || {
            hovered.set(true);
            for (i, tech) in techs.iter().enumerate() {
                toggle_later(&hovered, tech, cfg.tech_card_hover, cfg.tech_stagger.delay(i));
            }
            for (i, snippet) in snippets.iter().enumerate() {
                let (cx, hovered) = (Rc::clone(&cx), Rc::clone(&hovered));
                let element = snippet.element.clone();
                let lines = snippet.lines.clone();
                after(cfg.snippet_stagger.delay(i), move || {
                    if !hovered.get() {
                        return;
                    }
                    dom::with_style(&element, |s| cfg.snippet_card_hover.apply(s, true));
                    if let Some((spec, stagger)) = cfg.typing {
                        for (j, line) in lines.iter().enumerate() {
                            line.play(&cx, spec.staggered(stagger, j));
                        }
                    }
                });
            }
            let Some(extra) = cfg.card_hover else {
                return;
            };
            if let Some(logo) = &logo {
                dom::with_style(logo, |s| extra.logo.apply(s, true));
            }
            for stat in stats.iter() {
                dom::with_style(stat, |s| extra.stats.apply(s, true));
            }
            if let Some(overlay) = &overlay {
                toggle_later(&hovered, overlay, extra.overlay, extra.overlay_delay);
            }
        }
    };

    let leave = move || {
        hovered.set(false);
        for tech in techs.iter() {
            dom::with_style(tech, |s| cfg.tech_card_hover.apply(s, false));
        }
        for snippet in snippets.iter() {
            dom::with_style(&snippet.element, |s| cfg.snippet_card_hover.apply(s, false));
        }
        let Some(extra) = cfg.card_hover else {
            return;
        };
        if let Some(logo) = &logo {
            dom::with_style(logo, |s| extra.logo.apply(s, false));
        }
        for stat in stats.iter() {
            dom::with_style(stat, |s| extra.stats.apply(s, false));
        }
        if let Some(overlay) = &overlay {
            dom::with_style(overlay, |s| extra.overlay.apply(s, false));
        }
    };

    super::on_hover(fx, root, enter, leave)
}

/// Badge hover: glow, icon pulse, and promotion of the matching snippet.
fn tech_hover(
    fx: &mut Effects,
    cfg: ShowcaseConfig,
    tech: &HtmlElement,
    snippets: Rc<[HtmlElement]>,
) -> Result<(), JsValue> {
    let (on, off) = (tech.clone(), tech.clone());
    super::on_hover(
        fx,
        tech,
        move || {
            dom::with_style(&on, |s| cfg.tech_hover.apply(s, true));
            if let Some(pulse) = cfg.icon_pulse {
                dom::with_child_style(&on, "i", |s| s.set_style("animation", pulse));
            }
            let name = on.get_attribute("data-tech").unwrap_or_default();
            for snippet in snippets.iter() {
                let classes = snippet.class_name();
                dom::with_style(snippet, |s| cfg.focus_snippet(s, &name, &classes));
            }
        },
        move || {
            dom::with_style(&off, |s| cfg.tech_hover.apply(s, false));
            if cfg.icon_pulse.is_some() {
                dom::with_child_style(&off, "i", |s| s.set_style("animation", ""));
            }
        },
    )
}

fn install_one(cx: &Rc<Context>, fx: &mut Effects, cfg: ShowcaseConfig) -> Result<usize, JsValue> {
    let Some(root) = dom::query(cx.document(), cfg.root)? else {
        return Ok(0);
    };
    let techs = dom::query_all_in(&root, ".tech-item")?;
    let lines = dom::query_all_in(&root, ".code-line")?;
    let stats = dom::query_all_in(&root, ".stat-number")?;

    card_hover(cx, fx, cfg, &root, &techs, &stats)?;

    let snippets: Rc<[HtmlElement]> = dom::query_all_in(&root, ".code-snippet")?.into();
    for tech in &techs {
        tech_hover(fx, cfg, tech, Rc::clone(&snippets))?;
    }
    for line in &lines {
        let (on, off) = (line.clone(), line.clone());
        super::on_hover(
            fx,
            line,
            move || dom::with_style(&on, |s| cfg.line_hover.apply(s, true)),
            move || dom::with_style(&off, |s| cfg.line_hover.apply(s, false)),
        )?;
    }

    let counted = counter::observe(cx, fx, "showcase", cfg.counter_watch, stats, move |text| {
        cfg.stat_action(text)
    })?;

    if let Some(spec) = cfg.ripple {
        ripple::attach(cx, fx, &SharedRipples::default(), &root, spec, true)?;
    }
    Ok(1 + techs.len() + lines.len() + counted)
}

pub(super) fn install(cx: &Rc<Context>, fx: &mut Effects) -> Result<usize, JsValue> {
    let mut bound = 0;
    for cfg in ShowcaseConfig::all() {
        bound += install_one(cx, fx, cfg)?;
    }
    Ok(bound)
}
