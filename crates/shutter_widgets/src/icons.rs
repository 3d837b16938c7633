//! Icon sequence and icon interpolation
//!
//! A button can show a sequence of icons inside the main circle. The
//! continuous `position` selects which ones: the integral part is the left
//! icon and the fractional part how far the view has scrolled towards the
//! next one. The outgoing icon slides left and shrinks while the incoming one
//! slides in from the right, both fading by their own progress.

use shutter_animation::{AnimationIds, Easing, ValueAnimator};
use shutter_core::{Rect, Size};
use smallvec::SmallVec;

/// Duration of [`IconSequence::scroll_to`] animations
pub const ICON_SCROLL_DURATION_MS: u64 = 800;

/// Progress below which icons only slide, above which they also shrink
pub const ICON_SHRINK_THRESHOLD: f32 = 0.4;

/// Opaque handle to an icon bitmap owned by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconHandle(pub u64);

/// One icon to draw in a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconPlacement {
    pub index: usize,
    pub icon: IconHandle,
    /// Destination rectangle, horizontally squeezed to the current width
    pub rect: Rect,
    /// 0 to 255
    pub alpha: u8,
}

/// Horizontal offset of an icon at `progress` for a button of `radius`
pub fn icon_translation(radius: f32, icon_size: f32, progress: f32) -> f32 {
    let interpolated = (progress / ICON_SHRINK_THRESHOLD).min(1.0);
    (radius - icon_size / 2.0) * interpolated
}

/// Width of an icon at `progress`
pub fn icon_width(icon_size: f32, progress: f32) -> f32 {
    let interpolated = if progress < ICON_SHRINK_THRESHOLD {
        0.0
    } else {
        (progress - ICON_SHRINK_THRESHOLD) / (1.0 - ICON_SHRINK_THRESHOLD)
    };
    icon_size - icon_size * interpolated
}

fn icon_alpha(progress: f32) -> u8 {
    (255.0 * (1.0 - progress)).clamp(0.0, 255.0) as u8
}

/// Compute the icons visible at `position`.
///
/// `position` is clamped into the sequence. Icons that have shrunk to zero
/// width are left out.
pub fn layout_icons(
    icons: &[IconHandle],
    position: f32,
    size: Size,
    radius: u32,
    icon_size: u32,
) -> SmallVec<[IconPlacement; 2]> {
    let mut placements = SmallVec::new();
    if icons.is_empty() || !position.is_finite() {
        return placements;
    }

    let last = (icons.len() - 1) as f32;
    let position = position.clamp(0.0, last);
    let left_index = position.floor() as usize;
    let left_progress = position - position.floor();

    let center = size.center();
    let radius = radius as f32;
    let icon_size = icon_size as f32;
    let top = center.y - icon_size / 2.0;
    let bottom = center.y + icon_size / 2.0;

    let mut push = |index: usize, progress: f32, is_left: bool| {
        let width = icon_width(icon_size, progress);
        if width <= 0.0 {
            return;
        }
        let translation = icon_translation(radius, icon_size, progress);
        let (left, right) = if is_left {
            let left = center.x - icon_size / 2.0 - translation;
            (left, left + width)
        } else {
            let right = center.x + icon_size / 2.0 + translation;
            (right - width, right)
        };
        placements.push(IconPlacement {
            index,
            icon: icons[index],
            rect: Rect::new(left, top, right, bottom),
            alpha: icon_alpha(progress),
        });
    };

    push(left_index, left_progress, true);
    if left_index + 1 < icons.len() {
        push(left_index + 1, 1.0 - left_progress, false);
    }
    placements
}

/// Icons shown by a button and their scroll position
#[derive(Debug, Default)]
pub struct IconSequence {
    icons: Vec<IconHandle>,
    position: Option<f32>,
    ids: AnimationIds,
    scroll: Option<ValueAnimator>,
}

impl IconSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icons(&self) -> &[IconHandle] {
        &self.icons
    }

    pub fn position(&self) -> Option<f32> {
        self.position
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Replace the icons.
    ///
    /// `None` or an empty list disposes the current icons, stops scrolling
    /// and clears the position. New icons start at position 0.
    pub fn set_icons(&mut self, icons: Option<Vec<IconHandle>>) {
        self.cancel_scroll();
        match icons {
            Some(icons) if !icons.is_empty() => {
                tracing::debug!(count = icons.len(), "icons set");
                self.icons = icons;
                self.position = Some(0.0);
            }
            _ => {
                tracing::debug!("icons disposed");
                self.icons.clear();
                self.position = None;
            }
        }
    }

    /// Jump to `position` without animating
    pub fn set_position(&mut self, position: f32) {
        self.cancel_scroll();
        self.position = Some(position);
    }

    /// Animate towards `target` from the current position.
    ///
    /// A scroll already running is replaced.
    pub fn scroll_to(&mut self, target: f32) {
        self.cancel_scroll();
        let from = self.position.unwrap_or(0.0);
        let id = self.ids.next_id();
        let mut animator = ValueAnimator::new(id, from, target, ICON_SCROLL_DURATION_MS)
            .with_easing(Easing::Decelerate);
        if let Some(value) = animator.start() {
            self.position = Some(value);
        }
        tracing::debug!(%id, from, target, "icon scroll started");
        self.scroll = Some(animator);
    }

    pub fn cancel_scroll(&mut self) -> bool {
        match self.scroll.take() {
            Some(mut animator) => animator.cancel(),
            None => false,
        }
    }

    /// Advance the scroll animation. Returns whether the position changed.
    pub fn advance(&mut self, dt_ms: u64) -> bool {
        let Some(animator) = self.scroll.as_mut() else {
            return false;
        };
        let Some(event) = animator.tick(dt_ms) else {
            return false;
        };
        self.position = Some(event.value());
        if event.is_end() {
            self.scroll = None;
        }
        true
    }

    /// Placements for the current position
    pub fn layout(&self, size: Size, radius: u32, icon_size: u32) -> SmallVec<[IconPlacement; 2]> {
        match self.position {
            Some(position) => layout_icons(&self.icons, position, size, radius, icon_size),
            None => SmallVec::new(),
        }
    }
}
