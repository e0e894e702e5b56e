// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finding a module's target elements, and what an install attempt reports.
//!
//! Installers look their targets up through [`TargetQuery`], which the web
//! backend implements over the live document. A selector that matches
//! nothing binds nothing: [`bind_each`] never calls its `attach` closure and
//! the module is reported [`Inactive`](ModuleStatus::Inactive).

use alloc::vec::Vec;

use crate::trace::ModuleStatus;

/// Looks up elements by selector.
pub trait TargetQuery {
    /// Element handle handed to installers.
    type Element;
    /// Error raised by a failing lookup or attach.
    type Error;

    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, Self::Error>;
}

/// Runs `attach` on every match of `selector` and returns how many were
/// bound. Stops at the first error.
pub fn bind_each<Q: TargetQuery + ?Sized>(
    query: &Q,
    selector: &str,
    mut attach: impl FnMut(&Q::Element) -> Result<(), Q::Error>,
) -> Result<usize, Q::Error> {
    let targets = query.query_all(selector)?;
    for target in &targets {
        attach(target)?;
    }
    Ok(targets.len())
}

/// Result of trying to install one module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallOutcome<E> {
    /// What happened.
    pub status: ModuleStatus,
    /// Target elements bound.
    pub targets: u32,
    /// The error a failed install raised. Anything it attached before
    /// failing stays attached.
    pub error: Option<E>,
}

impl<E> InstallOutcome<E> {
    /// Runs `install` if the module is `enabled`.
    ///
    /// A failure is folded into an [`Inactive`](ModuleStatus::Inactive)
    /// outcome so the caller can go on with the next module.
    pub fn attempt(enabled: bool, install: impl FnOnce() -> Result<usize, E>) -> Self {
        if !enabled {
            return Self {
                status: ModuleStatus::Skipped,
                targets: 0,
                error: None,
            };
        }
        match install() {
            Ok(0) => Self {
                status: ModuleStatus::Inactive,
                targets: 0,
                error: None,
            },
            Ok(bound) => Self {
                status: ModuleStatus::Installed,
                targets: u32::try_from(bound).unwrap_or(u32::MAX),
                error: None,
            },
            Err(error) => Self {
                status: ModuleStatus::Inactive,
                targets: 0,
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    /// A page of `(class, id)` pairs; `"!"` fails like a malformed selector.
    struct Page(Vec<(&'static str, u32)>);

    impl TargetQuery for Page {
        type Element = u32;
        type Error = &'static str;

        fn query_all(&self, selector: &str) -> Result<Vec<u32>, &'static str> {
            if selector == "!" {
                return Err("bad selector");
            }
            Ok(self
                .0
                .iter()
                .filter(|(class, _)| *class == selector)
                .map(|&(_, id)| id)
                .collect())
        }
    }

    fn page() -> Page {
        Page(vec![(".btn", 1), (".card", 2), (".btn", 3)])
    }

    #[test]
    fn missing_selector_attaches_nothing() {
        let mut attached = Vec::new();
        let bound = bind_each(&page(), ".skill-item", |&el| {
            attached.push(el);
            Ok(())
        });
        assert_eq!(bound, Ok(0), "nothing matched");
        assert!(attached.is_empty(), "no listener attached: {attached:?}");

        let outcome = InstallOutcome::attempt(true, || bound);
        assert_eq!(outcome.status, ModuleStatus::Inactive, "empty page is inactive");
        assert_eq!(outcome.error, None, "and not an error");
    }

    #[test]
    fn every_match_is_bound_in_order() {
        let mut attached = Vec::new();
        let bound = bind_each(&page(), ".btn", |&el| {
            attached.push(el);
            Ok(())
        });
        assert_eq!(bound, Ok(2), "two buttons");
        assert_eq!(attached, [1, 3], "document order");
        let outcome = InstallOutcome::attempt(true, || bound);
        assert_eq!(outcome.status, ModuleStatus::Installed, "bound targets install");
        assert_eq!(outcome.targets, 2, "target count reported");
    }

    #[test]
    fn disabled_module_never_queries() {
        let mut ran = false;
        let outcome = InstallOutcome::<&str>::attempt(false, || {
            ran = true;
            Ok(1)
        });
        assert!(!ran, "install closure skipped");
        assert_eq!(outcome.status, ModuleStatus::Skipped, "reported skipped");
    }

    #[test]
    fn a_failing_module_does_not_stop_the_next() {
        let page = page();
        let outcomes: Vec<_> = ["!", ".card"]
            .iter()
            .map(|&sel| InstallOutcome::attempt(true, || bind_each(&page, sel, |_| Ok(()))))
            .collect();
        assert_eq!(outcomes[0].status, ModuleStatus::Inactive, "failure degrades");
        assert_eq!(outcomes[0].error, Some("bad selector"), "error kept for logging");
        assert_eq!(outcomes[1].status, ModuleStatus::Installed, "next module still installs");
    }

    #[test]
    fn attach_error_stops_the_module() {
        let mut seen = 0;
        let bound = bind_each(&page(), ".btn", |_| {
            seen += 1;
            Err("detached")
        });
        assert_eq!(bound, Err("detached"), "error propagates");
        assert_eq!(seen, 1, "stops at the first failure");
    }
}
