//! Domain propagation ahead of enumeration.
//!
//! Hints whose effect can be judged one floor at a time narrow the
//! per-floor color and animal sets before any configuration is built:
//!
//! - **Absolute with a floor literal** pins the other endpoint to that floor.
//! - **Absolute between a color and an animal** keeps one endpoint on a floor
//!   only while the other is still possible there.
//! - **Relative** keeps `a` on floor `f` only while `b` is possible on
//!   `f - offset`, and symmetrically for `b`.
//! - **Neighbor** relates two unknown floors and is left to the final check.
//!
//! Each rule only removes values that no satisfying configuration can use,
//! so the narrowed sequence still contains every solution. Rules run to a
//! fixpoint together with all-different singleton elimination.

use log::trace;

use super::candidates::Candidates;
use super::domains::FloorDomains;
use super::strategy::CandidateStrategy;
use crate::domain::Floor;
use crate::hints::{AbsoluteHint, Attribute, Hint, HintSummary, Locatable, RelativeHint};

/// Enumerates only configurations that survive domain propagation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Propagation;

impl CandidateStrategy for Propagation {
    fn candidates(&self, hints: &[Hint]) -> Candidates {
        match propagate(hints) {
            Some(domains) => Candidates::new(&domains),
            None => Candidates::empty(),
        }
    }

    fn name(&self) -> &'static str {
        "propagation"
    }
}

/// Narrows floor domains using `hints`.
///
/// Returns `None` when some floor runs out of candidates, meaning no
/// configuration can satisfy the list.
pub fn propagate(hints: &[Hint]) -> Option<FloorDomains> {
    let mut domains = FloorDomains::full();
    if HintSummary::of(hints).neighbor_only() {
        return Some(domains);
    }

    let mut rounds = 0usize;
    loop {
        rounds += 1;
        let before = domains;

        for hint in hints {
            match hint {
                Hint::Absolute(h) => apply_absolute(&mut domains, h),
                Hint::Relative(h) => apply_relative(&mut domains, h),
                Hint::Neighbor(_) => {}
            }
        }
        domains.eliminate_singletons();

        if domains.is_wiped_out() {
            trace!("propagation wiped out the domains in round {rounds}");
            return None;
        }
        if domains == before {
            trace!(
                "propagation reached a fixpoint after {rounds} rounds, {} candidates left at most",
                domains.size_bound()
            );
            return Some(domains);
        }
    }
}

fn same_track(a: Locatable, b: Locatable) -> bool {
    matches!(
        (a, b),
        (Locatable::Color(_), Locatable::Color(_)) | (Locatable::Animal(_), Locatable::Animal(_))
    )
}

fn apply_absolute(domains: &mut FloorDomains, hint: &AbsoluteHint) {
    match (hint.a(), hint.b()) {
        (Attribute::Floor(f), Attribute::Floor(g)) => {
            if f != g {
                domains.wipe();
            }
        }
        (Attribute::Floor(floor), other) | (other, Attribute::Floor(floor)) => {
            if let Some(locatable) = other.as_locatable() {
                domains.pin(locatable, floor);
            }
        }
        (a, b) => {
            let (Some(a), Some(b)) = (a.as_locatable(), b.as_locatable()) else {
                return;
            };
            if a == b {
                return;
            }
            // Two colors (or two animals) never share a floor.
            if same_track(a, b) {
                domains.wipe();
                return;
            }
            for floor in Floor::ALL {
                if !domains.allows(a, floor) {
                    domains.remove(b, floor);
                }
                if !domains.allows(b, floor) {
                    domains.remove(a, floor);
                }
            }
        }
    }
}

fn apply_relative(domains: &mut FloorDomains, hint: &RelativeHint) {
    let (a, b, offset) = (hint.a(), hint.b(), hint.offset());

    if a == b {
        if offset != 0 {
            domains.wipe();
        }
        return;
    }
    if offset == 0 && same_track(a, b) {
        domains.wipe();
        return;
    }

    for floor in Floor::ALL {
        if domains.allows(a, floor) {
            let supported = floor
                .offset_by(-offset)
                .is_some_and(|partner| domains.allows(b, partner));
            if !supported {
                domains.remove(a, floor);
            }
        }
        if domains.allows(b, floor) {
            let supported = floor
                .offset_by(offset)
                .is_some_and(|partner| domains.allows(a, partner));
            if !supported {
                domains.remove(b, floor);
            }
        }
    }
}
