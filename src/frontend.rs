use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::{
    content::{SectionId, Tone, GREETINGS},
    focus::FocusCycle,
    motion::{scroll_progress, word_progress, Easing, Reveal, Transition, ViewOptions, VisualState},
    sections::{About, Certificates, Contact, Footer, Hero, Navbar, Projects, TechStack},
    split::{split, stagger_delay_ms, unit_count, Segment, SplitMode},
    timeline::{Runner, Scheduler, Steps},
    typewriter::Typewriter,
};

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

pub(crate) fn scroll_to_section(section: SectionId) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Browser timers. Dropping the guard clears the timeout.
#[derive(Clone, Copy)]
struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Guard = Timeout;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// A listener on `window` that is removed when dropped.
pub(crate) struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    fn new(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub(crate) fn on_escape(handler: impl Fn() + 'static) -> Option<WindowListener> {
    WindowListener::new("keydown", move |event: Event| {
        if event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|event| event.key() == "Escape")
        {
            handler();
        }
    })
}

/// An intersection observer watching one element, disconnected when dropped.
struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    fn watch(node: &NodeRef, options: &ViewOptions, on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let element = node.cast::<Element>()?;
        let threshold = options.threshold;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting() && entry.intersection_ratio() >= threshold);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(&element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Reducible for Reveal {
    type Action = bool;

    fn reduce(self: std::rc::Rc<Self>, visible: bool) -> std::rc::Rc<Self> {
        std::rc::Rc::new(self.observe(visible))
    }
}

#[hook]
fn use_reduced_motion() -> bool {
    *use_state(prefers_reduced_motion)
}

/// `false` on the first render, `true` one timer tick after mount. The tick
/// lets the browser compute the hidden style before anything transitions.
#[hook]
pub(crate) fn use_mounted() -> bool {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.setter();
        use_effect_with((), move |_| {
            let tick = Timeout::new(0, move || mounted.set(true));
            move || drop(tick)
        });
    }
    *mounted
}

/// Whether `node` should currently be drawn revealed.
#[hook]
pub(crate) fn use_in_view(node: NodeRef, options: ViewOptions) -> bool {
    let policy = options.policy;
    let reveal = use_reducer_eq(move || Reveal::new(policy));
    {
        let dispatcher = reveal.dispatcher();
        use_effect_with((node, options), move |(node, options)| {
            let observer =
                VisibilityObserver::watch(node, options, move |visible| dispatcher.dispatch(visible));
            move || drop(observer)
        });
    }
    reveal.is_shown()
}

/// Runs a timed machine for as long as the component is mounted.
#[hook]
fn use_timeline<M>(initial: M) -> M
where
    M: Steps + PartialEq,
{
    let state = use_state(move || initial);
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let setter = state.setter();
            let runner = Runner::start(BrowserScheduler, (*state).clone(), move |next: &M| {
                setter.set(next.clone())
            });
            move || drop(runner)
        });
    }
    (*state).clone()
}

#[derive(Properties, PartialEq)]
pub(crate) struct MotionProps {
    pub transition: Transition,
    pub shown: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Draws its children at either end of `transition`.
#[function_component(Motion)]
pub(crate) fn motion(props: &MotionProps) -> Html {
    let reduced = use_reduced_motion();
    let transition = if reduced {
        props.transition.instant()
    } else {
        props.transition
    };

    html! {
        <div class={classes!("motion", props.class.clone())} style={transition.style(props.shown)}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ViewRevealProps {
    pub transition: Transition,
    #[prop_or_else(ViewOptions::once)]
    pub view: ViewOptions,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Plays `transition` when the wrapper scrolls into view.
#[function_component(ViewReveal)]
pub(crate) fn view_reveal(props: &ViewRevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), props.view.clone());
    let reduced = use_reduced_motion();
    let transition = if reduced {
        props.transition.instant()
    } else {
        props.transition
    };

    html! {
        <div ref={node} class={classes!("motion", props.class.clone())} style={transition.style(shown)}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SplitTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub mode: SplitMode,
    /// Offset between consecutive units.
    #[prop_or(100)]
    pub delay_ms: u32,
    #[prop_or(600)]
    pub duration_ms: u32,
    #[prop_or(Easing::Power3Out)]
    pub easing: Easing,
    pub from: VisualState,
    #[prop_or(VisualState::SETTLED)]
    pub to: VisualState,
    #[prop_or_else(ViewOptions::once)]
    pub view: ViewOptions,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SplitText)]
pub(crate) fn split_text(props: &SplitTextProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), props.view.clone());
    let reduced = use_reduced_motion();
    let base = Transition {
        from: props.from,
        to: props.to,
        duration_ms: props.duration_ms,
        delay_ms: 0,
        easing: props.easing,
    };

    html! {
        <p ref={node} class={classes!("split-text", props.class.clone())} aria-label={props.text.clone()}>
            { for split(&props.text, props.mode).into_iter().map(|segment| match segment {
                Segment::Unit { text, index } => {
                    let transition = base.with_delay(stagger_delay_ms(index, props.delay_ms));
                    let transition = if reduced { transition.instant() } else { transition };
                    html! {
                        <span class="split-unit" aria-hidden="true" style={transition.style(shown)}>{text}</span>
                    }
                }
                Segment::Gap(space) => html! {
                    <span class="split-gap" aria-hidden="true">{space}</span>
                },
            }) }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ScrollRevealProps {
    pub text: AttrValue,
    #[prop_or(0.1)]
    pub base_opacity: f64,
    #[prop_or(true)]
    pub enable_blur: bool,
    #[prop_or(3.0)]
    pub base_rotation: f64,
    #[prop_or(4.0)]
    pub blur_strength: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Text whose words sharpen in as the block is scrolled through.
#[function_component(ScrollReveal)]
pub(crate) fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let progress = use_state_eq(|| 0.0_f64);
    let reduced = use_reduced_motion();

    {
        let progress = progress.setter();
        use_effect_with(node.clone(), move |node| {
            let node = node.clone();
            let measure = move || {
                let Some(element) = node.cast::<Element>() else {
                    return;
                };
                let rect = element.get_bounding_client_rect();
                progress.set(scroll_progress(rect.top(), rect.height(), viewport_height()));
            };

            measure();
            let listener = WindowListener::new("scroll", move |_| measure());
            move || drop(listener)
        });
    }

    let progress = if reduced { 1.0 } else { *progress };
    let tilt = Transition {
        from: VisualState {
            rotate: props.base_rotation,
            ..VisualState::SETTLED
        },
        to: VisualState::SETTLED,
        duration_ms: 0,
        delay_ms: 0,
        easing: Easing::Linear,
    };
    let word = Transition {
        from: VisualState {
            opacity: props.base_opacity,
            blur: if props.enable_blur { props.blur_strength } else { 0.0 },
            ..VisualState::SETTLED
        },
        ..tilt
    };
    let segments = split(&props.text, SplitMode::Words);
    let count = unit_count(&segments);

    html! {
        <div ref={node} class={classes!("scroll-reveal", props.class.clone())} style={tilt.at(progress).css()}>
            <p class="scroll-reveal-text">
                { for segments.into_iter().map(|segment| match segment {
                    Segment::Unit { text, index } => html! {
                        <span class="scroll-word" style={word.at(word_progress(progress, index, count)).css()}>{text}</span>
                    },
                    Segment::Gap(space) => html! { {space} },
                }) }
            </p>
        </div>
    }
}

#[function_component(TypewriterText)]
pub(crate) fn typewriter_text() -> Html {
    let machine = use_timeline(Typewriter::new(GREETINGS));

    html! {
        <span class={classes!("typewriter", machine.tone().map(Tone::class))}>
            {machine.text()}
            <span class="typewriter-caret" aria-hidden="true">{"_"}</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TrueFocusProps {
    pub sentence: AttrValue,
    #[prop_or(5.0)]
    pub blur_amount: f64,
    #[prop_or(500)]
    pub animation_ms: u32,
    #[prop_or(1_000)]
    pub pause_ms: u32,
}

/// Sharpens one word of `sentence` at a time and blurs the rest.
#[function_component(TrueFocus)]
pub(crate) fn true_focus(props: &TrueFocusProps) -> Html {
    let words: Vec<&str> = props.sentence.split_whitespace().collect();
    let focus = use_timeline(FocusCycle::new(words.len(), props.animation_ms, props.pause_ms));

    html! {
        <h2 class="true-focus" aria-label={props.sentence.clone()}>
            { for words.iter().enumerate().map(|(index, word)| {
                let focused = focus.is_focused(index);
                let blur = if focused { 0.0 } else { props.blur_amount };
                let style = format!(
                    "filter: blur({blur:.1}px); transition: filter {ms}ms ease, border-color {ms}ms ease;",
                    ms = props.animation_ms,
                );
                html! {
                    <span class={classes!("focus-word", focused.then_some("is-focused"))} style={style} aria-hidden="true">
                        {*word}
                    </span>
                }
            }) }
        </h2>
    }
}

/// Full-viewport highlight that follows the pointer.
#[function_component(CursorGlow)]
fn cursor_glow() -> Html {
    let position = use_state_eq(|| None::<(i32, i32)>);
    let reduced = use_reduced_motion();

    {
        let position = position.setter();
        use_effect_with(reduced, move |reduced| {
            let listener = (!*reduced)
                .then(|| {
                    WindowListener::new("mousemove", move |event: Event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            position.set(Some((event.client_x(), event.client_y())));
                        }
                    })
                })
                .flatten();
            move || drop(listener)
        });
    }

    let style = position
        .map(|(x, y)| format!("--cursor-x: {x}px; --cursor-y: {y}px;"))
        .unwrap_or_default();

    html! {
        <div
            class={classes!("cursor-glow", position.is_some().then_some("is-active"))}
            style={style}
            aria-hidden="true"
        />
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <CursorGlow />
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <Navbar />
                <main id="content">
                    <Hero />
                    <About />
                    <TechStack />
                    <Projects />
                    <Certificates />
                    <Contact />
                </main>
                <Footer />
            </div>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
