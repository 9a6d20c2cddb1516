//! Core data model for the card: page state machine, growth factor and the
//! reducer that turns user actions into presentation effects.

use std::rc::Rc;
use yew::Reducible;

use crate::config::CardConfig;
use crate::state::{
    JsRandom, PlacementKind, Point, RandomSource, Size, compute_placement, initial_placement,
};
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    /// Intro overlay covering the letter.
    Intro,
    /// Letter visible; the no button dodges.
    LetterShown,
    /// Terminal.
    Accepted,
}

impl PageState {
    pub fn can_evade(self) -> bool {
        matches!(self, PageState::LetterShown)
    }

    pub fn reveal(self) -> Self {
        match self {
            PageState::Intro => PageState::LetterShown,
            other => other,
        }
    }

    /// Ignored before reveal; idempotent once accepted.
    pub fn confirm(self) -> Self {
        match self {
            PageState::LetterShown => PageState::Accepted,
            other => other,
        }
    }
}

/// Scale emphasis on the yes button, grown by each dodge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthFactor {
    runs: u32,
    step: f64,
    max: f64,
}

impl GrowthFactor {
    pub fn new(step: f64, max: f64) -> Self {
        Self { runs: 0, step, max: max.max(1.0) }
    }

    pub fn value(&self) -> f64 {
        (1.0 + self.runs as f64 * self.step).min(self.max)
    }

    pub fn bump(&mut self) -> f64 {
        if self.value() < self.max {
            self.runs = self.runs.saturating_add(1);
        }
        self.value()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    NoButton,
    YesButton,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ApplyPosition { target: Target, at: Point },
    ApplyScale { target: Target, factor: f64 },
    /// Measure and place the no button once the letter has laid out.
    ScheduleInitialPlacement { delay_ms: u32 },
    EmitAccepted,
}

#[derive(Clone, Debug)]
pub enum CardAction {
    Reveal,
    /// Default right-aligned spot; after reveal and on viewport resize.
    InitialLayout { container: Size, target: Size },
    /// Pointer or touch landed on the no button at `trigger` (button-area frame).
    Evade { container: Size, target: Size, trigger: Point },
    Confirm,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    pub page: PageState,
    pub growth: GrowthFactor,
    /// Last position applied to the no button; `None` before the first layout.
    pub no_button: Option<Point>,
    pub config: Rc<CardConfig>,
    /// Effects produced by the latest action, drained by the view.
    pub effects: Vec<Effect>,
    /// Bumped whenever an action produced effects.
    pub version: u64,
}

impl CardState {
    pub fn new(config: CardConfig) -> Self {
        Self {
            page: PageState::Intro,
            growth: GrowthFactor::new(config.growth_step, config.growth_max),
            no_button: None,
            config: Rc::new(config),
            effects: Vec::new(),
            version: 0,
        }
    }

    pub fn can_evade(&self) -> bool {
        self.page.can_evade()
    }

    /// Pure transition: current state plus action gives the next state and the
    /// effects the presentation layer should carry out.
    pub fn apply(&self, action: CardAction, rng: &mut impl RandomSource) -> (CardState, Vec<Effect>) {
        let mut next = self.clone();
        next.effects.clear();
        let mut effects = Vec::new();
        match action {
            CardAction::Reveal => {
                if self.page == PageState::Intro {
                    next.page = self.page.reveal();
                    clog("card: letter revealed");
                    effects.push(Effect::ScheduleInitialPlacement {
                        delay_ms: self.config.reveal_layout_delay_ms,
                    });
                }
            }
            CardAction::InitialLayout { container, target } => {
                if self.page == PageState::LetterShown {
                    let current = self.no_button.unwrap_or_default();
                    let out = initial_placement(current, container, target, self.config.initial_right_inset);
                    if out.kind == PlacementKind::NotReady {
                        clog("card: no button not measured yet, skipping layout");
                    } else {
                        next.no_button = Some(out.position);
                        effects.push(Effect::ApplyPosition { target: Target::NoButton, at: out.position });
                    }
                }
            }
            CardAction::Evade { container, target, trigger } => {
                if self.can_evade() {
                    let current = self.no_button.unwrap_or_default();
                    let params = self.config.evade_params();
                    let out = compute_placement(current, container, target, trigger, &params, rng);
                    if out.ran() {
                        next.no_button = Some(out.position);
                        let factor = next.growth.bump();
                        effects.push(Effect::ApplyPosition { target: Target::NoButton, at: out.position });
                        effects.push(Effect::ApplyScale { target: Target::YesButton, factor });
                    } else {
                        clog(&format!("card: evade skipped ({:?})", out.kind));
                    }
                }
            }
            CardAction::Confirm => {
                if self.page == PageState::LetterShown {
                    next.page = self.page.confirm();
                    clog("card: accepted");
                    effects.push(Effect::ApplyScale {
                        target: Target::YesButton,
                        factor: self.config.accepted_scale,
                    });
                    effects.push(Effect::EmitAccepted);
                }
            }
        }
        (next, effects)
    }

    /// Keeps the same `Rc` when nothing happened so the view skips a render.
    pub fn reduce_with(self: Rc<Self>, action: CardAction, rng: &mut impl RandomSource) -> Rc<Self> {
        let (mut next, effects) = self.apply(action, rng);
        if effects.is_empty() {
            return self;
        }
        next.effects = effects;
        next.version = next.version.wrapping_add(1);
        Rc::new(next)
    }
}

impl Reducible for CardState {
    type Action = CardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        self.reduce_with(action, &mut JsRandom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::random::testing::{Scripted, XorShift};

    const AREA: Size = Size { width: 300.0, height: 500.0 };
    const NO_BTN: Size = Size { width: 80.0, height: 40.0 };

    fn evade_at(x: f64, y: f64) -> CardAction {
        CardAction::Evade { container: AREA, target: NO_BTN, trigger: Point::new(x, y) }
    }

    fn revealed() -> CardState {
        let s = CardState::new(CardConfig::default());
        s.apply(CardAction::Reveal, &mut Scripted::new(&[0.0])).0
    }

    #[test]
    fn page_state_only_moves_forward() {
        assert_eq!(PageState::Intro.reveal(), PageState::LetterShown);
        assert_eq!(PageState::LetterShown.reveal(), PageState::LetterShown);
        assert_eq!(PageState::Accepted.reveal(), PageState::Accepted);
        assert_eq!(PageState::Intro.confirm(), PageState::Intro);
        assert_eq!(PageState::LetterShown.confirm(), PageState::Accepted);
        assert_eq!(PageState::Accepted.confirm(), PageState::Accepted);
        assert!(PageState::LetterShown.can_evade());
        assert!(!PageState::Intro.can_evade());
        assert!(!PageState::Accepted.can_evade());
    }

    #[test]
    fn reveal_schedules_initial_placement_once() {
        let s = CardState::new(CardConfig::default());
        let mut rng = Scripted::new(&[0.0]);
        let (s, effects) = s.apply(CardAction::Reveal, &mut rng);
        assert_eq!(s.page, PageState::LetterShown);
        assert_eq!(effects, vec![Effect::ScheduleInitialPlacement { delay_ms: 200 }]);
        let (s, effects) = s.apply(CardAction::Reveal, &mut rng);
        assert_eq!(s.page, PageState::LetterShown);
        assert!(effects.is_empty());
    }

    #[test]
    fn initial_layout_right_aligns_no_button() {
        let s = revealed();
        let (s, effects) = s.apply(
            CardAction::InitialLayout { container: Size::new(300.0, 120.0), target: NO_BTN },
            &mut Scripted::new(&[0.0]),
        );
        let at = Point::new(210.0, 40.0);
        assert_eq!(s.no_button, Some(at));
        assert_eq!(effects, vec![Effect::ApplyPosition { target: Target::NoButton, at }]);
        assert_eq!(s.growth.value(), 1.0);
    }

    #[test]
    fn initial_layout_ignored_before_reveal_and_when_unmeasured() {
        let s = CardState::new(CardConfig::default());
        let mut rng = Scripted::new(&[0.0]);
        let action = CardAction::InitialLayout { container: AREA, target: NO_BTN };
        assert!(s.apply(action, &mut rng).1.is_empty());
        let unmeasured = CardAction::InitialLayout { container: AREA, target: Size::new(0.0, 0.0) };
        let (s, effects) = revealed().apply(unmeasured, &mut rng);
        assert!(effects.is_empty());
        assert_eq!(s.no_button, None);
    }

    #[test]
    fn evade_before_reveal_does_nothing() {
        let s = CardState::new(CardConfig::default());
        let mut rng = Scripted::new(&[0.0]);
        let (s, effects) = s.apply(evade_at(150.0, 250.0), &mut rng);
        assert!(effects.is_empty());
        assert_eq!(s.page, PageState::Intro);
        assert_eq!(rng.drawn, 0);
    }

    #[test]
    fn evade_moves_no_button_and_grows_yes_button() {
        let mut rng = Scripted::new(&[0.0]);
        let (s, effects) = revealed().apply(evade_at(150.0, 250.0), &mut rng);
        assert_eq!(s.page, PageState::LetterShown);
        assert_eq!(s.no_button, Some(Point::new(5.0, 5.0)));
        assert_eq!(
            effects,
            vec![
                Effect::ApplyPosition { target: Target::NoButton, at: Point::new(5.0, 5.0) },
                Effect::ApplyScale { target: Target::YesButton, factor: 1.15 },
            ]
        );
    }

    #[test]
    fn growth_follows_closed_form_and_caps() {
        let mut s = revealed();
        let mut rng = XorShift::seeded(42);
        let mut last = s.growth.value();
        for n in 1..=20u32 {
            s = s.apply(evade_at(150.0, 250.0), &mut rng).0;
            let expected = (1.0 + n as f64 * 0.15).min(2.0);
            assert!((s.growth.value() - expected).abs() < 1e-9, "n={}", n);
            assert!(s.growth.value() >= last);
            last = s.growth.value();
        }
        assert_eq!(s.growth.value(), 2.0);
    }

    #[test]
    fn degenerate_evade_leaves_growth_alone() {
        let s = revealed();
        let cramped = CardAction::Evade {
            container: Size::new(100.0, 50.0),
            target: Size::new(100.0, 50.0),
            trigger: Point::new(10.0, 10.0),
        };
        let (s, effects) = s.apply(cramped, &mut Scripted::new(&[0.0]));
        assert!(effects.is_empty());
        assert_eq!(s.growth.value(), 1.0);
        let unmeasured = CardAction::Evade {
            container: AREA,
            target: Size::new(0.0, 40.0),
            trigger: Point::new(10.0, 10.0),
        };
        let (s, _) = s.apply(unmeasured, &mut Scripted::new(&[0.0]));
        assert_eq!(s.growth.value(), 1.0);
    }

    #[test]
    fn confirm_is_idempotent_and_freezes_growth() {
        let mut rng = XorShift::seeded(3);
        let s = revealed().apply(evade_at(150.0, 250.0), &mut rng).0;
        let grown = s.growth.value();
        let (once, effects) = s.apply(CardAction::Confirm, &mut rng);
        assert_eq!(once.page, PageState::Accepted);
        assert_eq!(
            effects,
            vec![
                Effect::ApplyScale { target: Target::YesButton, factor: 2.2 },
                Effect::EmitAccepted,
            ]
        );
        let (twice, effects) = once.apply(CardAction::Confirm, &mut rng);
        assert!(effects.is_empty());
        assert_eq!(twice.page, once.page);
        assert_eq!(twice.growth, once.growth);
        assert_eq!(twice.no_button, once.no_button);

        let (after, effects) = twice.apply(evade_at(150.0, 250.0), &mut rng);
        assert!(effects.is_empty());
        assert_eq!(after.growth.value(), grown);
        assert!(!after.can_evade());
    }

    #[test]
    fn confirm_before_reveal_is_ignored() {
        let s = CardState::new(CardConfig::default());
        let (s, effects) = s.apply(CardAction::Confirm, &mut Scripted::new(&[0.0]));
        assert_eq!(s.page, PageState::Intro);
        assert!(effects.is_empty());
    }

    #[test]
    fn layout_after_accept_is_ignored() {
        let mut rng = Scripted::new(&[0.0]);
        let s = revealed().apply(CardAction::Confirm, &mut rng).0;
        let (_, effects) = s.apply(CardAction::InitialLayout { container: AREA, target: NO_BTN }, &mut rng);
        assert!(effects.is_empty());
    }

    #[test]
    fn reducer_keeps_same_state_when_nothing_happens() {
        let start = Rc::new(CardState::new(CardConfig::default()));
        let mut rng = Scripted::new(&[0.0]);
        let after = start.clone().reduce_with(evade_at(150.0, 250.0), &mut rng);
        assert!(Rc::ptr_eq(&start, &after));
        assert_eq!(after.version, 0);

        let revealed = start.reduce_with(CardAction::Reveal, &mut rng);
        let accepted = revealed.reduce_with(CardAction::Confirm, &mut rng);
        let again = accepted.clone().reduce_with(CardAction::Confirm, &mut rng);
        assert!(Rc::ptr_eq(&accepted, &again));
        assert_eq!(again.version, accepted.version);
    }

    #[test]
    fn reducer_bumps_version_and_carries_effects() {
        let start = Rc::new(CardState::new(CardConfig::default()));
        let mut rng = Scripted::new(&[0.0]);
        let revealed = start.clone().reduce_with(CardAction::Reveal, &mut rng);
        assert!(!Rc::ptr_eq(&start, &revealed));
        assert_eq!(revealed.version, 1);
        assert_eq!(revealed.page, PageState::LetterShown);
        assert_eq!(revealed.effects, vec![Effect::ScheduleInitialPlacement { delay_ms: 200 }]);
    }

    #[test]
    fn reducer_replaces_previous_effects() {
        let mut rng = Scripted::new(&[0.0]);
        let revealed = Rc::new(CardState::new(CardConfig::default())).reduce_with(CardAction::Reveal, &mut rng);
        let moved = revealed.reduce_with(evade_at(150.0, 250.0), &mut rng);
        assert_eq!(moved.version, 2);
        assert_eq!(
            moved.effects,
            vec![
                Effect::ApplyPosition { target: Target::NoButton, at: Point::new(5.0, 5.0) },
                Effect::ApplyScale { target: Target::YesButton, factor: 1.15 },
            ]
        );
    }
}
