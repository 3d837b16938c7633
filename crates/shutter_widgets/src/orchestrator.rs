//! Animation orchestration
//!
//! Three slots hold the button's animations: expand, progress and collapse.
//! They chain: expand end starts progress, progress end starts collapse,
//! collapse end returns the button to [`State::Default`]. Starting an
//! animation cancels every slot it conflicts with, so expand and collapse are
//! never occupied together.
//!
//! Completion is keyed by [`AnimationId`]. A slot that was canceled (or
//! canceled and refilled) no longer holds the old id, so a late completion
//! for it is dropped instead of re-entering the chain.

use crate::config::ButtonConfig;
use crate::state::{ButtonCore, State};
use shutter_animation::{AnimationEvent, AnimationId, AnimationIds, Easing, ValueAnimator};

/// Animation slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Expand,
    Progress,
    Collapse,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Expand, Slot::Progress, Slot::Collapse];
}

/// Ids of the animations live at the start of a frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiveAnimations {
    pub expand: Option<AnimationId>,
    pub progress: Option<AnimationId>,
    pub collapse: Option<AnimationId>,
}

impl LiveAnimations {
    pub fn get(&self, slot: Slot) -> Option<AnimationId> {
        match slot {
            Slot::Expand => self.expand,
            Slot::Progress => self.progress,
            Slot::Collapse => self.collapse,
        }
    }
}

/// Owner of the expand, progress and collapse animations
#[derive(Debug, Default)]
pub struct AnimationOrchestrator {
    ids: AnimationIds,
    expand: Option<ValueAnimator>,
    progress: Option<ValueAnimator>,
    collapse: Option<ValueAnimator>,
}

impl AnimationOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: Slot) -> &Option<ValueAnimator> {
        match slot {
            Slot::Expand => &self.expand,
            Slot::Progress => &self.progress,
            Slot::Collapse => &self.collapse,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<ValueAnimator> {
        match slot {
            Slot::Expand => &mut self.expand,
            Slot::Progress => &mut self.progress,
            Slot::Collapse => &mut self.collapse,
        }
    }

    /// Whether `slot` holds an animation
    pub fn is_active(&self, slot: Slot) -> bool {
        self.slot(slot).is_some()
    }

    /// Id of the animation in `slot`
    pub fn animation_id(&self, slot: Slot) -> Option<AnimationId> {
        self.slot(slot).as_ref().map(ValueAnimator::id)
    }

    pub fn live(&self) -> LiveAnimations {
        LiveAnimations {
            expand: self.animation_id(Slot::Expand),
            progress: self.animation_id(Slot::Progress),
            collapse: self.animation_id(Slot::Collapse),
        }
    }

    /// Whether nothing is animating
    pub fn is_idle(&self) -> bool {
        Slot::ALL.iter().all(|slot| !self.is_active(*slot))
    }

    /// Cancel the animation in `slot`.
    ///
    /// The animator is stopped before the slot is emptied, so it can never
    /// report completion. Canceling an empty slot does nothing.
    pub fn cancel(&mut self, slot: Slot) -> bool {
        let Some(mut animator) = self.slot_mut(slot).take() else {
            return false;
        };
        animator.cancel();
        tracing::debug!(?slot, id = %animator.id(), "animation canceled");
        true
    }

    /// Cancel everything
    pub fn cancel_all(&mut self) {
        for slot in Slot::ALL {
            self.cancel(slot);
        }
    }

    fn spawn(
        &mut self,
        slot: Slot,
        from: f32,
        to: f32,
        duration_ms: u64,
        easing: Easing,
    ) -> AnimationId {
        self.cancel(slot);
        let id = self.ids.next_id();
        let mut animator = ValueAnimator::new(id, from, to, duration_ms).with_easing(easing);
        animator.start();
        *self.slot_mut(slot) = Some(animator);
        tracing::debug!(?slot, %id, duration_ms, "animation started");
        id
    }

    /// Start expanding from the collapsed look.
    ///
    /// Dispatches [`State::StartExpanding`] as the animation starts and cancels
    /// any progress or collapse animation.
    pub fn start_expand(&mut self, core: &mut ButtonCore, config: &ButtonConfig) -> AnimationId {
        let id = self.spawn(
            Slot::Expand,
            0.0,
            1.0,
            config.expand_duration_ms,
            config.expand_easing,
        );
        core.expanding_factor = 0.0;
        core.request_redraw();

        core.dispatch_transition(State::StartExpanding, config.mode);
        self.cancel(Slot::Progress);
        self.cancel(Slot::Collapse);
        id
    }

    /// Start filling the hold progress arc
    pub fn start_progress(&mut self, core: &mut ButtonCore, config: &ButtonConfig) -> AnimationId {
        let id = self.spawn(
            Slot::Progress,
            0.0,
            1.0,
            config.hold_duration_ms,
            Easing::Linear,
        );
        core.progress_factor = 0.0;
        id
    }

    /// Start collapsing from the current expansion.
    ///
    /// Cancels expand and progress, disarms click-to-collapse, restores the
    /// normal paint and dispatches [`State::StartCollapsing`].
    pub fn start_collapse(&mut self, core: &mut ButtonCore, config: &ButtonConfig) -> AnimationId {
        let from = core.expanding_factor;
        let id = self.spawn(
            Slot::Collapse,
            from,
            0.0,
            config.collapse_duration_ms,
            config.collapse_easing,
        );

        core.collapse_on_next_click = false;
        self.cancel(Slot::Expand);
        self.cancel(Slot::Progress);
        core.set_hovered(false);
        core.dispatch_transition(State::StartCollapsing, config.mode);
        id
    }

    /// Advance every animation that was live when the frame began.
    ///
    /// Animations started by a completion during this frame begin ticking on
    /// the next one.
    pub fn advance(&mut self, core: &mut ButtonCore, config: &ButtonConfig, dt_ms: u64) {
        let live = self.live();
        for slot in Slot::ALL {
            let Some(expected) = live.get(slot) else {
                continue;
            };
            let event = match self.slot_mut(slot) {
                Some(animator) if animator.id() == expected => animator.tick(dt_ms),
                _ => None,
            };
            let Some(event) = event else {
                continue;
            };

            apply_value(slot, event.value(), core);
            if let AnimationEvent::End(_) = event {
                self.complete(slot, expected, core, config);
            }
        }
    }

    /// Run the completion step for the animation `id` in `slot`.
    ///
    /// Returns `false`, doing nothing, when `slot` no longer holds a finished
    /// animation with that id.
    pub fn complete(
        &mut self,
        slot: Slot,
        id: AnimationId,
        core: &mut ButtonCore,
        config: &ButtonConfig,
    ) -> bool {
        let finished = matches!(
            self.slot(slot),
            Some(animator) if animator.id() == id && !animator.is_running()
                && animator.phase() == shutter_animation::AnimationPhase::Finished
        );
        if !finished {
            tracing::trace!(?slot, %id, "dropping stale completion");
            return false;
        }
        *self.slot_mut(slot) = None;
        tracing::debug!(?slot, %id, "animation ended");

        match slot {
            Slot::Expand => {
                self.start_progress(core, config);
                core.dispatch_transition(State::Expanded, config.mode);
            }
            Slot::Progress => {
                self.start_collapse(core, config);
            }
            Slot::Collapse => {
                core.progress_factor = 0.0;
                core.request_redraw();
                core.dispatch_transition(State::Default, config.mode);
            }
        }
        true
    }
}

fn apply_value(slot: Slot, value: f32, core: &mut ButtonCore) {
    match slot {
        Slot::Expand | Slot::Collapse => core.expanding_factor = value,
        Slot::Progress => {
            core.progress_factor = value;
            core.dispatch_progress(value);
        }
    }
    core.request_redraw();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> ButtonConfig {
        ButtonConfig::default()
            .expand_duration_ms(100)
            .hold_duration_ms(400)
            .collapse_duration_ms(100)
            .expand_easing(Easing::Linear)
            .collapse_easing(Easing::Linear)
    }

    #[test]
    fn test_expand_chain_runs_to_default() {
        let config = config();
        let mut core = ButtonCore::new();
        let mut orchestrator = AnimationOrchestrator::new();

        orchestrator.start_expand(&mut core, &config);
        assert_eq!(core.state(), State::StartExpanding);

        orchestrator.advance(&mut core, &config, 50);
        assert!((core.expanding_factor() - 0.5).abs() < 1e-6);

        orchestrator.advance(&mut core, &config, 50);
        assert_eq!(core.state(), State::Expanded);
        assert!(!orchestrator.is_active(Slot::Expand));
        assert!(orchestrator.is_active(Slot::Progress));
        assert_eq!(core.progress_factor(), 0.0);

        orchestrator.advance(&mut core, &config, 400);
        assert_eq!(core.state(), State::StartCollapsing);
        assert!(orchestrator.is_active(Slot::Collapse));
        assert_eq!(core.progress_factor(), 1.0);

        orchestrator.advance(&mut core, &config, 100);
        assert_eq!(core.state(), State::Default);
        assert_eq!(core.expanding_factor(), 0.0);
        assert_eq!(core.progress_factor(), 0.0);
        assert!(orchestrator.is_idle());
    }

    #[test]
    fn test_collapse_cancels_expand_midway() {
        let config = config();
        let mut core = ButtonCore::new();
        let mut orchestrator = AnimationOrchestrator::new();

        orchestrator.start_expand(&mut core, &config);
        orchestrator.advance(&mut core, &config, 40);
        core.collapse_on_next_click = true;
        core.set_hovered(true);

        orchestrator.start_collapse(&mut core, &config);
        assert!(!orchestrator.is_active(Slot::Expand));
        assert!(!core.collapse_on_next_click());
        assert!(!core.is_hovered());
        assert_eq!(core.state(), State::StartCollapsing);

        // Collapse continues from where expansion stopped
        orchestrator.advance(&mut core, &config, 50);
        assert!((core.expanding_factor() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_expand_cancels_collapse_and_progress() {
        let config = config();
        let mut core = ButtonCore::new();
        let mut orchestrator = AnimationOrchestrator::new();

        orchestrator.start_progress(&mut core, &config);
        orchestrator.start_collapse(&mut core, &config);
        orchestrator.start_expand(&mut core, &config);

        assert!(orchestrator.is_active(Slot::Expand));
        assert!(!orchestrator.is_active(Slot::Progress));
        assert!(!orchestrator.is_active(Slot::Collapse));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let config = config();
        let mut core = ButtonCore::new();
        let mut orchestrator = AnimationOrchestrator::new();

        let stale = orchestrator.start_expand(&mut core, &config);
        assert!(orchestrator.cancel(Slot::Expand));
        assert!(!orchestrator.cancel(Slot::Expand), "cancel is idempotent");

        assert!(!orchestrator.complete(Slot::Expand, stale, &mut core, &config));
        assert_eq!(core.state(), State::StartExpanding);
        assert!(orchestrator.is_idle());

        // A replacement does not accept the old id either
        let fresh = orchestrator.start_expand(&mut core, &config);
        assert_ne!(fresh, stale);
        assert!(!orchestrator.complete(Slot::Expand, stale, &mut core, &config));
        assert!(orchestrator.is_active(Slot::Expand));
    }

    #[test]
    fn test_running_animation_cannot_be_completed_early() {
        let config = config();
        let mut core = ButtonCore::new();
        let mut orchestrator = AnimationOrchestrator::new();

        let id = orchestrator.start_expand(&mut core, &config);
        assert!(!orchestrator.complete(Slot::Expand, id, &mut core, &config));
        assert_eq!(core.state(), State::StartExpanding);
    }

    #[test]
    fn test_progress_is_reported() {
        use std::sync::{Arc, Mutex};

        let config = config();
        let mut core = ButtonCore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        core.listeners_mut().progress = Some(Box::new(move |p| sink.lock().unwrap().push(p)));

        let mut orchestrator = AnimationOrchestrator::new();
        orchestrator.start_progress(&mut core, &config);
        for _ in 0..4 {
            orchestrator.advance(&mut core, &config, 100);
        }

        assert_eq!(*seen.lock().unwrap(), vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        StartExpand,
        StartProgress,
        StartCollapse,
        Cancel(Slot),
        Advance(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::StartExpand),
            Just(Op::StartProgress),
            Just(Op::StartCollapse),
            prop_oneof![
                Just(Slot::Expand),
                Just(Slot::Progress),
                Just(Slot::Collapse)
            ]
            .prop_map(Op::Cancel),
            (0u64..250).prop_map(Op::Advance),
        ]
    }

    proptest! {
        #[test]
        fn expand_and_collapse_never_overlap(ops in proptest::collection::vec(op_strategy(), 1..200)) {
            let config = config();
            let mut core = ButtonCore::new();
            let mut orchestrator = AnimationOrchestrator::new();

            for op in ops {
                match op {
                    Op::StartExpand => { orchestrator.start_expand(&mut core, &config); }
                    Op::StartProgress => { orchestrator.start_progress(&mut core, &config); }
                    Op::StartCollapse => { orchestrator.start_collapse(&mut core, &config); }
                    Op::Cancel(slot) => { orchestrator.cancel(slot); }
                    Op::Advance(dt) => orchestrator.advance(&mut core, &config, dt),
                }

                prop_assert!(
                    !(orchestrator.is_active(Slot::Expand) && orchestrator.is_active(Slot::Collapse))
                );
                prop_assert!((0.0..=1.0).contains(&core.expanding_factor()));
                prop_assert!((0.0..=1.0).contains(&core.progress_factor()));
            }
        }

        #[test]
        fn canceled_ids_never_complete(ops in proptest::collection::vec(op_strategy(), 1..100)) {
            let config = config();
            let mut core = ButtonCore::new();
            let mut orchestrator = AnimationOrchestrator::new();
            let mut canceled = Vec::new();

            for op in ops {
                let before = orchestrator.live();
                match op {
                    Op::StartExpand => { orchestrator.start_expand(&mut core, &config); }
                    Op::StartProgress => { orchestrator.start_progress(&mut core, &config); }
                    Op::StartCollapse => { orchestrator.start_collapse(&mut core, &config); }
                    Op::Cancel(slot) => { orchestrator.cancel(slot); }
                    Op::Advance(dt) => orchestrator.advance(&mut core, &config, dt),
                }
                let after = orchestrator.live();
                for slot in Slot::ALL {
                    if let Some(id) = before.get(slot) {
                        if after.get(slot) != Some(id) {
                            canceled.push((slot, id));
                        }
                    }
                }
                for (slot, id) in &canceled {
                    let state = core.state();
                    prop_assert!(!orchestrator.complete(*slot, *id, &mut core, &config));
                    prop_assert_eq!(core.state(), state);
                }
            }
        }
    }
}
