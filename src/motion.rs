//! Visual states and the transitions between them.
//!
//! Every entrance effect on the page is a [`Transition`] between two
//! [`VisualState`]s. Viewport-triggered effects pick the hidden or settled
//! end through a [`Reveal`]; scroll-scrubbed effects sample the transition
//! directly with [`Transition::at`].

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub blur: f64,
}

impl VisualState {
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        blur: 0.0,
    };

    pub fn lerp(self, to: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
            blur: mix(self.blur, to.blur),
        }
    }

    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity: {:.3}; transform: translate3d({:.2}px, {:.2}px, 0) scale({:.3}) rotate({:.2}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        );
        if self.blur > 0.0 {
            css.push_str(&format!(" filter: blur({:.2}px);", self.blur));
        }
        css
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::SETTLED
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    Power3Out,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power3Out => 1.0 - (1.0 - t).powi(3),
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
            Self::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transition {
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    /// Inline style for either end of the transition.
    ///
    /// The browser interpolates between the two styles, so toggling `shown`
    /// is all a component does to play the effect forwards or backwards.
    pub fn style(&self, shown: bool) -> String {
        let state = if shown { self.to } else { self.from };
        format!(
            "{} transition: opacity {ms}ms {ease} {delay}ms, transform {ms}ms {ease} {delay}ms, filter {ms}ms {ease} {delay}ms;",
            state.css(),
            ms = self.duration_ms,
            ease = self.easing.css(),
            delay = self.delay_ms,
        )
    }

    pub fn at(&self, progress: f64) -> VisualState {
        self.from.lerp(self.to, self.easing.apply(progress))
    }

    pub fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn instant(self) -> Self {
        Self {
            duration_ms: 0,
            delay_ms: 0,
            ..self
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The closed set of entrance flavours used across the page.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Preset {
    Fade,
    /// Fade in while lifting from `distance` px below.
    Rise { distance: f64 },
    /// Slide in along `axis`; `reverse` starts on the negative side.
    Slide { axis: Axis, distance: f64, reverse: bool },
    /// Fade in while growing from `scale`.
    Pop { scale: f64 },
}

impl Preset {
    pub fn hidden(self) -> VisualState {
        let hidden = VisualState {
            opacity: 0.0,
            ..VisualState::SETTLED
        };
        match self {
            Self::Fade => hidden,
            Self::Rise { distance } => VisualState { y: distance, ..hidden },
            Self::Slide {
                axis,
                distance,
                reverse,
            } => {
                let offset = if reverse { -distance } else { distance };
                match axis {
                    Axis::Horizontal => VisualState { x: offset, ..hidden },
                    Axis::Vertical => VisualState { y: offset, ..hidden },
                }
            }
            Self::Pop { scale } => VisualState { scale, ..hidden },
        }
    }

    pub fn transition(self, duration_ms: u32, easing: Easing) -> Transition {
        Transition {
            from: self.hidden(),
            to: VisualState::SETTLED,
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealPolicy {
    /// Stay revealed after the first time the element is seen.
    #[default]
    Once,
    /// Hide again whenever the element leaves the viewport.
    Repeatable,
}

/// Reveal state of one element. Starts hidden until a visibility signal
/// says otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Reveal {
    policy: RevealPolicy,
    shown: bool,
}

impl Reveal {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            shown: false,
        }
    }

    #[must_use]
    pub fn observe(self, visible: bool) -> Self {
        let shown = match self.policy {
            RevealPolicy::Once => self.shown || visible,
            RevealPolicy::Repeatable => visible,
        };
        Self { shown, ..self }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }
}

/// Options handed to the browser's intersection observer.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub policy: RevealPolicy,
}

impl ViewOptions {
    pub fn once() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px",
            policy: RevealPolicy::Once,
        }
    }

    pub fn repeatable() -> Self {
        Self {
            policy: RevealPolicy::Repeatable,
            ..Self::once()
        }
    }

    pub fn with_threshold(self, threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn with_root_margin(self, root_margin: &'static str) -> Self {
        Self {
            root_margin,
            ..self
        }
    }
}

const WORD_WINDOW: f64 = 0.3;

/// Progress of an element scrolling through the viewport: 0 while its top
/// is below the fold, 1 once its bottom reaches the bottom edge.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return if top < viewport_height { 1.0 } else { 0.0 };
    }
    ((viewport_height - top) / height).clamp(0.0, 1.0)
}

/// Local progress of word `index` out of `count` for a scrub at `progress`.
/// Words start in order and each takes a fixed share of the scroll range.
pub fn word_progress(progress: f64, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return (progress / WORD_WINDOW).clamp(0.0, 1.0);
    }
    let start = (1.0 - WORD_WINDOW) * index as f64 / (count - 1) as f64;
    ((progress - start) / WORD_WINDOW).clamp(0.0, 1.0)
}
