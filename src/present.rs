// Presentation sink: the only place card effects touch the DOM
use web_sys::HtmlElement;
use yew::Callback;

use crate::model::{Effect, Target};
use crate::state::Point;

pub trait PresentationSink {
    fn apply_position(&mut self, target: Target, at: Point);
    fn apply_scale(&mut self, target: Target, factor: f64);
    fn emit_accepted(&mut self);
}

/// Hands presentation effects to `sink` in order and returns the scheduling
/// effects, which the view owns.
pub fn present(effects: &[Effect], sink: &mut impl PresentationSink) -> Vec<Effect> {
    let mut deferred = Vec::new();
    for effect in effects {
        match effect {
            Effect::ApplyPosition { target, at } => sink.apply_position(*target, *at),
            Effect::ApplyScale { target, factor } => sink.apply_scale(*target, *factor),
            Effect::EmitAccepted => sink.emit_accepted(),
            Effect::ScheduleInitialPlacement { .. } => deferred.push(effect.clone()),
        }
    }
    deferred
}

/// Writes inline styles on the two buttons.
pub struct DomPresenter {
    pub no_btn: Option<HtmlElement>,
    pub yes_btn: Option<HtmlElement>,
    pub on_accepted: Callback<()>,
}

impl DomPresenter {
    fn element(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::NoButton => self.no_btn.as_ref(),
            Target::YesButton => self.yes_btn.as_ref(),
        }
    }
}

pub fn scale_transform(target: Target, factor: f64) -> String {
    match target {
        Target::YesButton => format!("translateY(-50%) scale({})", factor),
        Target::NoButton => format!("scale({})", factor),
    }
}

impl PresentationSink for DomPresenter {
    fn apply_position(&mut self, target: Target, at: Point) {
        let Some(el) = self.element(target) else { return };
        let style = el.style();
        let _ = style.set_property("left", &format!("{}px", at.x));
        let _ = style.set_property("top", &format!("{}px", at.y));
        let _ = style.set_property("right", "auto");
        let _ = style.set_property("transform", "none");
    }

    fn apply_scale(&mut self, target: Target, factor: f64) {
        let Some(el) = self.element(target) else { return };
        let _ = el.style().set_property("transform", &scale_transform(target, factor));
    }

    fn emit_accepted(&mut self) {
        self.on_accepted.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl PresentationSink for Recorder {
        fn apply_position(&mut self, target: Target, at: Point) {
            self.log.push(format!("pos {:?} {} {}", target, at.x, at.y));
        }
        fn apply_scale(&mut self, target: Target, factor: f64) {
            self.log.push(format!("scale {:?} {}", target, factor));
        }
        fn emit_accepted(&mut self) {
            self.log.push("accepted".to_string());
        }
    }

    #[test]
    fn effects_reach_sink_in_order_and_timers_are_deferred() {
        let effects = vec![
            Effect::ScheduleInitialPlacement { delay_ms: 200 },
            Effect::ApplyPosition { target: Target::NoButton, at: Point::new(5.0, 6.0) },
            Effect::ApplyScale { target: Target::YesButton, factor: 1.3 },
            Effect::EmitAccepted,
        ];
        let mut sink = Recorder::default();
        let deferred = present(&effects, &mut sink);
        assert_eq!(sink.log, vec!["pos NoButton 5 6", "scale YesButton 1.3", "accepted"]);
        assert_eq!(deferred, vec![Effect::ScheduleInitialPlacement { delay_ms: 200 }]);
    }

    #[test]
    fn yes_button_keeps_vertical_centering() {
        assert_eq!(scale_transform(Target::YesButton, 2.2), "translateY(-50%) scale(2.2)");
        assert_eq!(scale_transform(Target::NoButton, 1.5), "scale(1.5)");
    }
}
