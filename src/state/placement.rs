// Evasive placement of the "no" button
use super::geometry::{Point, SafeRegion, Size};
use super::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvadeParams {
    pub margin: f64,
    pub min_distance: f64,
    /// Candidates drawn before giving up; at least one is always drawn.
    pub max_attempts: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementKind {
    /// First candidate far enough from the trigger point.
    Placed,
    /// Attempt budget exhausted; last candidate used regardless of distance.
    Fallback,
    /// Target has no extent yet.
    NotReady,
    /// Container too small for target plus margins.
    NoSafeRegion,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementOutcome {
    pub position: Point,
    pub kind: PlacementKind,
}

impl PlacementOutcome {
    fn unchanged(current: Point, kind: PlacementKind) -> Self {
        Self { position: current, kind }
    }

    /// True when candidates were drawn; only then does the growth factor move.
    pub fn ran(&self) -> bool {
        matches!(self.kind, PlacementKind::Placed | PlacementKind::Fallback)
    }
}

pub fn compute_placement(
    current: Point,
    container: Size,
    target: Size,
    trigger: Point,
    params: &EvadeParams,
    rng: &mut impl RandomSource,
) -> PlacementOutcome {
    if target.is_unmeasured() {
        return PlacementOutcome::unchanged(current, PlacementKind::NotReady);
    }
    let Some(region) = SafeRegion::within(container, target, params.margin) else {
        return PlacementOutcome::unchanged(current, PlacementKind::NoSafeRegion);
    };
    let mut candidate = current;
    for _ in 0..params.max_attempts.max(1) {
        let u = rng.next_unit();
        let v = rng.next_unit();
        candidate = region.lerp(u, v);
        debug_assert!(region.contains(candidate));
        if candidate.distance_to(trigger) >= params.min_distance {
            return PlacementOutcome { position: candidate, kind: PlacementKind::Placed };
        }
    }
    PlacementOutcome { position: candidate, kind: PlacementKind::Fallback }
}

/// Right-aligned, vertically centred default spot used after reveal and on resize.
pub fn initial_placement(
    current: Point,
    container: Size,
    target: Size,
    right_inset: f64,
) -> PlacementOutcome {
    if target.width <= 0.0 {
        return PlacementOutcome::unchanged(current, PlacementKind::NotReady);
    }
    PlacementOutcome {
        position: Point::new(
            container.width - target.width - right_inset,
            container.height / 2.0 - target.height / 2.0,
        ),
        kind: PlacementKind::Placed,
    }
}
