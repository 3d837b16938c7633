//! Camera button widget
//!
//! A round button that distinguishes a tap from a hold. Pressing shows the
//! pressed state; holding past the expand delay grows the button and fills
//! a gradient progress arc for the hold duration, after which it collapses on
//! its own. Lifting the finger (or, with [`CollapseAction::Click`], clicking
//! again) collapses it early.
//!
//! The widget owns no clock. Feed it touch events with
//! [`CameraButton::on_touch_event`], drive time with
//! [`CameraButton::advance`] and read what to paint with
//! [`CameraButton::frame`].
//!
//! ```
//! use shutter_core::{Size, TouchEvent};
//! use shutter_widgets::{CameraButton, State};
//!
//! let mut button = CameraButton::new();
//! button.set_size(Size::new(200, 200));
//!
//! assert!(button.on_touch_event(TouchEvent::down(100.0, 100.0)));
//! assert_eq!(button.state(), State::Pressed);
//!
//! // Hold past the expand delay
//! button.advance(300);
//! assert_eq!(button.state(), State::StartExpanding);
//!
//! button.on_touch_event(TouchEvent::up(100.0, 100.0));
//! assert_eq!(button.state(), State::StartCollapsing);
//! ```

use crate::config::{self, ButtonConfig, CollapseAction, Mode};
use crate::consistency::validate_consistency;
use crate::error::{ConfigError, ConsistencyError, Result};
use crate::frame::{self, ButtonFrame, FrameFactors};
use crate::gesture;
use crate::icons::{IconHandle, IconSequence};
use crate::listeners::{HoldListener, ProgressListener, StateChangeListener, TapListener};
use crate::orchestrator::AnimationOrchestrator;
use crate::state::{ButtonCore, State};
use shutter_animation::ScheduledMessage;
use shutter_core::{Color, Size, TouchEvent, TouchPhase};

/// Deferred "start expanding" continuation posted on press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ExpandMessage;

/// Tap and hold camera button
#[derive(Debug)]
pub struct CameraButton {
    config: ButtonConfig,
    core: ButtonCore,
    animations: AnimationOrchestrator,
    expand_message: ScheduledMessage<ExpandMessage>,
    icons: IconSequence,
    size: Size,
    enabled: bool,
    consistency_dirty: bool,
}

impl Default for CameraButton {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraButton {
    /// Button with the default configuration and empty bounds
    pub fn new() -> Self {
        Self::from_valid_config(ButtonConfig::default())
    }

    /// Button with a custom configuration
    pub fn with_config(config: ButtonConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ButtonConfig) -> Self {
        Self {
            config,
            core: ButtonCore::new(),
            animations: AnimationOrchestrator::new(),
            expand_message: ScheduledMessage::new(),
            icons: IconSequence::new(),
            size: Size::default(),
            enabled: true,
            consistency_dirty: true,
        }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Update the view bounds. Re-arms the consistency check when they change.
    pub fn set_size(&mut self, size: Size) {
        if self.size != size {
            tracing::debug!(width = size.width, height = size.height, "camera button resized");
            self.size = size;
            self.invalidate_geometry();
        }
    }

    pub fn state(&self) -> State {
        self.core.state()
    }

    /// Recent state transitions, oldest first
    pub fn history(&self) -> Vec<(State, State)> {
        self.core.history()
    }

    pub fn expanding_factor(&self) -> f32 {
        self.core.expanding_factor()
    }

    pub fn progress_factor(&self) -> f32 {
        self.core.progress_factor()
    }

    pub fn is_hovered(&self) -> bool {
        self.core.is_hovered()
    }

    pub fn collapse_on_next_click(&self) -> bool {
        self.core.collapse_on_next_click()
    }

    /// Whether a press is waiting for the expand delay
    pub fn is_expand_pending(&self) -> bool {
        self.expand_message.is_pending()
    }

    /// Whether any button animation (not icon scrolling) is running
    pub fn is_animating(&self) -> bool {
        !self.animations.is_idle()
    }

    pub fn animations(&self) -> &AnimationOrchestrator {
        &self.animations
    }

    /// Return and clear the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        self.core.take_redraw_request()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled buttons ignore new presses
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn invalidate_geometry(&mut self) {
        self.consistency_dirty = true;
        self.core.request_redraw();
    }

    // Listeners

    pub fn set_state_change_listener(&mut self, listener: Option<StateChangeListener>) {
        self.core.listeners.state = listener;
    }

    pub fn set_tap_listener(&mut self, listener: Option<TapListener>) {
        self.core.listeners.tap = listener;
    }

    pub fn set_hold_listener(&mut self, listener: Option<Box<dyn HoldListener>>) {
        self.core.listeners.hold = listener;
    }

    pub fn set_progress_listener(&mut self, listener: Option<ProgressListener>) {
        self.core.listeners.progress = listener;
    }

    // Input

    /// Handle a touch event. Returns whether the event was consumed.
    pub fn on_touch_event(&mut self, event: TouchEvent) -> bool {
        match event.phase {
            TouchPhase::Down => self.on_down(event),
            TouchPhase::Move => self.on_move(event),
            TouchPhase::Up => self.on_up(event),
            TouchPhase::Cancel => self.on_cancel(),
        }
    }

    fn on_down(&mut self, event: TouchEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let point = event.position();
        let touched = gesture::is_touched(&self.config, self.size, point);

        // Armed for click-to-collapse: the whole expanded square is the target
        // and the press is consumed wherever it lands, like a move.
        let state = self.core.state();
        if self.core.collapse_on_next_click() && state.is_expanding_or_expanded() {
            let inside = touched || gesture::is_touched_expanded(&self.config, self.size, point);
            self.core.set_hovered(inside);
            return true;
        }
        // Otherwise only the collapsed square starts a press
        if !touched {
            return false;
        }
        self.core.set_hovered(true);

        if state != State::Default {
            tracing::trace!(%state, "press ignored while busy");
            return true;
        }

        self.post_expand_message_if_needed();
        self.core.request_redraw();
        self.core.dispatch_transition(State::Pressed, self.config.mode);
        true
    }

    fn on_move(&mut self, event: TouchEvent) -> bool {
        if self.core.collapse_on_next_click() {
            let inside = gesture::is_touched_expanded(&self.config, self.size, event.position());
            self.core.set_hovered(inside);
        }
        true
    }

    fn on_up(&mut self, event: TouchEvent) -> bool {
        self.remove_expand_message();

        let state = self.core.state();
        if state.is_expanding_or_expanded() {
            if self.config.collapse_action == CollapseAction::Click {
                if !self.core.collapse_on_next_click() {
                    tracing::debug!("armed collapse on next click");
                    self.core.collapse_on_next_click = true;
                    self.core.set_hovered(false);
                    return true;
                }
                if !gesture::is_touched_expanded(&self.config, self.size, event.position()) {
                    return true;
                }
            }
            self.animations.start_collapse(&mut self.core, &self.config);
            self.core.set_hovered(false);
            self.core.request_redraw();
            true
        } else if state == State::Pressed {
            self.core.dispatch_transition(State::Default, self.config.mode);
            self.core.set_hovered(false);
            self.core.request_redraw();
            true
        } else {
            false
        }
    }

    /// The gesture was taken away: end any press cycle without waiting for
    /// a release. A canceled gesture is never reported as a tap.
    fn on_cancel(&mut self) -> bool {
        self.remove_expand_message();

        let state = self.core.state();
        let animations = &mut self.animations;
        let config = &self.config;
        self.core.without_taps(|core| {
            if state.is_expanding_or_expanded() {
                animations.start_collapse(core, config);
            } else if state == State::Pressed {
                core.dispatch_transition(State::Default, config.mode);
            }
        });
        self.core.set_hovered(false);
        true
    }

    /// Programmatic click.
    ///
    /// With [`CollapseAction::Click`] this collapses an expanding or expanded
    /// button. Returns whether a collapse started.
    pub fn click(&mut self) -> bool {
        if self.config.collapse_action == CollapseAction::Click
            && self.core.state().is_expanding_or_expanded()
        {
            self.animations.start_collapse(&mut self.core, &self.config);
            true
        } else {
            false
        }
    }

    fn post_expand_message_if_needed(&mut self) {
        let mode = self.config.mode;
        if !mode.is_expandable() {
            return;
        }
        if mode.is_pressable() {
            self.expand_message
                .post_delayed(ExpandMessage, self.config.expand_delay_ms);
            tracing::trace!(delay_ms = self.config.expand_delay_ms, "expand message posted");
        } else {
            // Hold-only buttons expand right after the press
            self.expand_message.post(ExpandMessage);
            tracing::trace!("expand message posted");
        }
    }

    fn remove_expand_message(&mut self) {
        if self.expand_message.remove().is_some() {
            tracing::trace!("expand message removed");
        }
    }

    // Time

    /// Advance animations, the pending expand message and icon scrolling by
    /// `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: u64) {
        self.animations.advance(&mut self.core, &self.config, dt_ms);

        if let Some(ExpandMessage) = self.expand_message.advance(dt_ms) {
            tracing::trace!("expand message fired");
            self.core.progress_factor = 0.0;
            self.animations.start_expand(&mut self.core, &self.config);
        }

        if self.icons.advance(dt_ms) {
            self.core.request_redraw();
        }
    }

    // Rendering

    /// Describe the current frame.
    ///
    /// Runs the consistency check first when the geometry changed since the
    /// last successful check and checking is enabled.
    pub fn frame(&mut self) -> std::result::Result<ButtonFrame, ConsistencyError> {
        if self.config.should_check_consistency && self.consistency_dirty {
            if let Err(err) = validate_consistency(&self.config, self.size) {
                tracing::warn!(%err, "camera button geometry is inconsistent");
                return Err(err);
            }
            self.consistency_dirty = false;
        }

        let icons = self.icons.layout(
            self.size,
            self.config.main_circle_radius,
            self.config.icon_size,
        );
        let factors = FrameFactors {
            expanding_factor: self.core.expanding_factor(),
            progress_factor: self.core.progress_factor(),
            hovered: self.core.is_hovered(),
        };
        Ok(frame::compose(
            &self.config,
            self.size,
            factors,
            self.icons.position(),
            &icons,
        ))
    }

    // Icons

    pub fn icons(&self) -> &[IconHandle] {
        self.icons.icons()
    }

    pub fn icon_position(&self) -> Option<f32> {
        self.icons.position()
    }

    /// Replace the icon sequence; `None` disposes the current one
    pub fn set_icons(&mut self, icons: Option<Vec<IconHandle>>) {
        self.icons.set_icons(icons);
        self.core.request_redraw();
    }

    /// Jump to a continuous position in the icon sequence
    pub fn set_icons_position(&mut self, position: f32) -> Result<()> {
        if !position.is_finite() {
            return Err(ConfigError::NotFinite("icons position"));
        }
        self.icons.set_position(position);
        self.core.request_redraw();
        Ok(())
    }

    /// Animate to a position in the icon sequence
    pub fn scroll_icons_to_position(&mut self, position: f32) -> Result<()> {
        if !position.is_finite() {
            return Err(ConfigError::NotFinite("icons position"));
        }
        self.icons.scroll_to(position);
        self.core.request_redraw();
        Ok(())
    }

    // Configuration

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
    }

    pub fn collapse_action(&self) -> CollapseAction {
        self.config.collapse_action
    }

    pub fn set_collapse_action(&mut self, action: CollapseAction) {
        self.config.collapse_action = action;
    }

    pub fn set_main_circle_radius(&mut self, radius: u32) -> Result<()> {
        self.config.main_circle_radius = config::check_dimension("main_circle_radius", radius)?;
        self.invalidate_geometry();
        Ok(())
    }

    pub fn set_main_circle_radius_expanded(&mut self, radius: u32) -> Result<()> {
        self.config.main_circle_radius_expanded =
            config::check_dimension("main_circle_radius_expanded", radius)?;
        self.invalidate_geometry();
        Ok(())
    }

    pub fn set_stroke_width(&mut self, width: u32) -> Result<()> {
        self.config.stroke_width = config::check_dimension("stroke_width", width)?;
        self.invalidate_geometry();
        Ok(())
    }

    pub fn set_progress_arc_width(&mut self, width: u32) -> Result<()> {
        self.config.progress_arc_width = config::check_dimension("progress_arc_width", width)?;
        self.invalidate_geometry();
        Ok(())
    }

    pub fn set_icon_size(&mut self, size: u32) -> Result<()> {
        self.config.icon_size = config::check_dimension("icon_size", size)?;
        self.invalidate_geometry();
        Ok(())
    }

    pub fn set_main_circle_colors(&mut self, normal: Color, pressed: Color) {
        self.config.main_circle_color = normal;
        self.config.main_circle_color_pressed = pressed;
        self.core.request_redraw();
    }

    pub fn set_stroke_colors(&mut self, normal: Color, pressed: Color) {
        self.config.stroke_color = normal;
        self.config.stroke_color_pressed = pressed;
        self.core.request_redraw();
    }

    /// Gradient stops of the progress arc; at least two
    pub fn set_progress_arc_colors(&mut self, colors: Vec<Color>) -> Result<()> {
        config::check_colors(&colors)?;
        self.config.progress_arc_colors = colors;
        self.core.request_redraw();
        Ok(())
    }

    /// Applies to the next expansion
    pub fn set_expand_duration(&mut self, ms: u64) -> Result<()> {
        self.config.expand_duration_ms = config::check_duration("expand_duration_ms", ms)?;
        Ok(())
    }

    /// Applies to the next collapse
    pub fn set_collapse_duration(&mut self, ms: u64) -> Result<()> {
        self.config.collapse_duration_ms = config::check_duration("collapse_duration_ms", ms)?;
        Ok(())
    }

    /// Applies to the next press
    pub fn set_expand_delay(&mut self, ms: u64) -> Result<()> {
        self.config.expand_delay_ms = config::check_duration("expand_delay_ms", ms)?;
        Ok(())
    }

    /// Applies to the next expansion
    pub fn set_hold_duration(&mut self, ms: u64) -> Result<()> {
        self.config.hold_duration_ms = config::check_duration("hold_duration_ms", ms)?;
        Ok(())
    }

    pub fn set_gradient_rotation_multiplier(&mut self, multiplier: f32) -> Result<()> {
        self.config.gradient_rotation_multiplier = config::check_rotation_multiplier(multiplier)?;
        self.core.request_redraw();
        Ok(())
    }

    /// Turning checks on re-validates on the next frame
    pub fn set_should_check_consistency(&mut self, check: bool) {
        if check && !self.config.should_check_consistency {
            self.consistency_dirty = true;
        }
        self.config.should_check_consistency = check;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    const CENTER: (f32, f32) = (100.0, 100.0);

    fn button(config: ButtonConfig) -> CameraButton {
        let mut button = CameraButton::with_config(config).unwrap();
        button.set_size(Size::new(200, 200));
        button
    }

    fn down(button: &mut CameraButton) -> bool {
        button.on_touch_event(TouchEvent::down(CENTER.0, CENTER.1))
    }

    fn up(button: &mut CameraButton) -> bool {
        button.on_touch_event(TouchEvent::up(CENTER.0, CENTER.1))
    }

    #[test]
    fn test_press_outside_is_not_handled() {
        let mut button = button(ButtonConfig::default());
        assert!(!button.on_touch_event(TouchEvent::down(5.0, 5.0)));
        assert_eq!(button.state(), State::Default);
        assert!(!button.is_expand_pending());
    }

    #[test]
    fn test_disabled_ignores_press() {
        let mut button = button(ButtonConfig::default());
        button.set_enabled(false);
        assert!(!down(&mut button));
        assert_eq!(button.state(), State::Default);

        button.set_enabled(true);
        assert!(down(&mut button));
        assert_eq!(button.state(), State::Pressed);
    }

    #[test]
    fn test_press_posts_delayed_expand() {
        let mut button = button(ButtonConfig::default().expand_delay_ms(300));
        down(&mut button);

        assert!(button.is_hovered());
        assert!(button.is_expand_pending());
        button.advance(299);
        assert_eq!(button.state(), State::Pressed);
        button.advance(1);
        assert_eq!(button.state(), State::StartExpanding);
        assert!(!button.is_expand_pending());
    }

    #[test]
    fn test_hold_mode_expands_immediately() {
        let mut button = button(ButtonConfig::default().mode(Mode::Hold));
        down(&mut button);
        assert_eq!(button.state(), State::Pressed);

        button.advance(1);
        assert_eq!(button.state(), State::StartExpanding);
    }

    #[test]
    fn test_tap_mode_never_expands() {
        let mut button = button(ButtonConfig::default().mode(Mode::Tap));
        down(&mut button);
        assert!(!button.is_expand_pending());

        button.advance(10_000);
        assert_eq!(button.state(), State::Pressed);
        assert!(up(&mut button));
        assert_eq!(button.state(), State::Default);
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_press_while_collapsing_is_swallowed() {
        let mut button = button(ButtonConfig::default().expand_delay_ms(10));
        down(&mut button);
        button.advance(10);
        up(&mut button);
        assert_eq!(button.state(), State::StartCollapsing);

        assert!(down(&mut button));
        assert_eq!(button.state(), State::StartCollapsing);
        assert!(!button.is_expand_pending());
    }

    #[test]
    fn test_cancel_ends_press_cycle() {
        let mut button = button(ButtonConfig::default());
        down(&mut button);
        assert!(button.on_touch_event(TouchEvent::cancel()));
        assert_eq!(button.state(), State::Default);
        assert!(!button.is_expand_pending());

        let mut button = button_expanded(CollapseAction::Click);
        assert!(button.on_touch_event(TouchEvent::cancel()));
        assert_eq!(button.state(), State::StartCollapsing);
    }

    fn button_expanded(action: CollapseAction) -> CameraButton {
        let mut button = button(
            ButtonConfig::default()
                .expand_delay_ms(10)
                .expand_duration_ms(100)
                .collapse_action(action),
        );
        down(&mut button);
        button.advance(10);
        button.advance(100);
        assert_eq!(button.state(), State::Expanded);
        button
    }

    #[test]
    fn test_cancel_is_never_a_tap() {
        let taps = Arc::new(AtomicU32::new(0));
        let counted = |button: &mut CameraButton| {
            let counter = taps.clone();
            button.set_tap_listener(Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })));
        };

        let mut button = button(ButtonConfig::default());
        counted(&mut button);
        down(&mut button);
        button.on_touch_event(TouchEvent::cancel());
        assert_eq!(button.state(), State::Default);

        // Interrupted expansion: collapses, still no tap
        let mut button = button_expanding();
        counted(&mut button);
        button.on_touch_event(TouchEvent::cancel());
        assert_eq!(button.state(), State::StartCollapsing);
        assert_eq!(taps.load(Ordering::SeqCst), 0);

        // The same release is a tap
        let mut button = button_expanding();
        counted(&mut button);
        up(&mut button);
        assert_eq!(taps.load(Ordering::SeqCst), 1);
    }

    fn button_expanding() -> CameraButton {
        let mut button = button(
            ButtonConfig::default()
                .expand_delay_ms(10)
                .expand_duration_ms(100),
        );
        down(&mut button);
        button.advance(10);
        button.advance(40);
        assert_eq!(button.state(), State::StartExpanding);
        button
    }

    #[test]
    fn test_armed_press_in_expanded_ring() {
        let mut button = button_expanded(CollapseAction::Click);
        up(&mut button);
        assert!(button.collapse_on_next_click());
        assert!(!button.is_hovered());

        // Outside the collapsed square but inside the expanded one
        let collapsed = gesture::collapsed_half_extent(button.config());
        let ring = TouchEvent::down(CENTER.0 + collapsed + 1.0, CENTER.1);
        assert!(button.on_touch_event(ring));
        assert!(button.is_hovered());
        assert_eq!(button.state(), State::Expanded);

        // Beyond the expanded square: consumed, not hovered
        assert!(button.on_touch_event(TouchEvent::down(0.0, 0.0)));
        assert!(!button.is_hovered());

        assert!(button.on_touch_event(TouchEvent::up(ring.x, ring.y)));
        assert_eq!(button.state(), State::StartCollapsing);
    }

    #[test]
    fn test_huge_stroke_fails_frame_without_panicking() {
        let mut button = button(ButtonConfig::default());
        button.set_stroke_width(u32::MAX).unwrap();

        assert!(down(&mut button));
        assert!(matches!(
            button.frame(),
            Err(ConsistencyError::MainCircleWithStroke {
                stroke_width: u32::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_click_collapses_only_in_click_mode() {
        let mut button = button_expanded(CollapseAction::Release);
        assert!(!button.click());
        assert_eq!(button.state(), State::Expanded);

        let mut button = button_expanded(CollapseAction::Click);
        assert!(button.click());
        assert_eq!(button.state(), State::StartCollapsing);
        assert!(!button.click());
    }

    #[test]
    fn test_failed_setter_keeps_value() {
        let mut button = button(ButtonConfig::default());
        let radius = button.config().main_circle_radius;

        assert!(matches!(
            button.set_main_circle_radius(0),
            Err(ConfigError::NonPositiveDimension { .. })
        ));
        assert_eq!(button.config().main_circle_radius, radius);

        assert!(button.set_hold_duration(0).is_err());
        assert!(button.set_progress_arc_colors(vec![Color::WHITE]).is_err());
        assert!(button.set_gradient_rotation_multiplier(0.0).is_err());
        assert!(button.set_icons_position(f32::NAN).is_err());
        assert_eq!(button.config(), &ButtonConfig::default());
    }

    #[test]
    fn test_consistency_runs_once_per_change() {
        let mut button = button(ButtonConfig::default());
        assert!(button.frame().is_ok());

        button.set_main_circle_radius(150).unwrap();
        assert!(matches!(
            button.frame(),
            Err(ConsistencyError::MainCircleRadius { radius: 150, .. })
        ));
        // Stays failing until the geometry is fixed
        assert!(button.frame().is_err());

        button.set_size(Size::new(400, 400));
        assert!(button.frame().is_ok());
    }

    #[test]
    fn test_consistency_can_be_disabled() {
        let mut button = button(ButtonConfig::default());
        button.set_should_check_consistency(false);
        button.set_main_circle_radius(150).unwrap();
        assert!(button.frame().is_ok());

        button.set_should_check_consistency(true);
        assert!(button.frame().is_err());
    }

    #[test]
    fn test_geometry_setters_request_redraw() {
        let mut button = button(ButtonConfig::default());
        button.take_redraw_request();

        button.set_stroke_width(4).unwrap();
        assert!(button.take_redraw_request());
        button.set_expand_duration(50).unwrap();
        assert!(!button.take_redraw_request());
    }

    #[test]
    fn test_listener_replacement() {
        let mut button = button(ButtonConfig::default().mode(Mode::Tap));
        let first = Arc::new(AtomicU32::new(0));
        let second = Arc::new(AtomicU32::new(0));

        let counter = first.clone();
        button.set_tap_listener(Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })));
        let counter = second.clone();
        button.set_tap_listener(Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })));

        down(&mut button);
        up(&mut button);
        button.set_tap_listener(None);
        down(&mut button);
        up(&mut button);

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_icons_in_frame() {
        let mut button = button(ButtonConfig::default());
        button.set_icons(Some(vec![IconHandle(7), IconHandle(8)]));
        button.set_icons_position(0.5).unwrap();

        let frame = button.frame().unwrap();
        let icons: Vec<_> = frame.icons().map(|icon| icon.icon).collect();
        assert_eq!(icons, vec![IconHandle(7), IconHandle(8)]);
        assert_eq!(frame.icon_position, Some(0.5));

        button.set_icons(None);
        assert_eq!(button.frame().unwrap().icons().count(), 0);
    }
}
