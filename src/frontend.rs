use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use js_sys::{Array, Function, Reflect};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, Event, HtmlAnchorElement, HtmlElement,
    HtmlImageElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, PerformanceNavigationTiming,
    ScrollBehavior, ScrollToOptions, Storage,
};
use yew::prelude::*;

use crate::analytics::{
    page_load_ms, Analytics, TRACKED_BUTTON_SELECTOR, TRACKED_SECTION_SELECTOR,
};
use crate::banner::{self, Banner, BannerAction, BannerQueue, BannerRequest};
use crate::config::SiteConfig;
use crate::contact::{
    banner_for, ContactError, ContactField, ContactForm, SubmissionTask, SUBMISSION_TIMEOUT_MS,
};
use crate::content::{
    Credential, ABOUT_TEXT, CERTIFICATIONS, EDUCATION, HERO_DESCRIPTION, NAV_ENTRIES, OWNER_NAME,
    PROJECTS, SKILL_CATEGORIES,
};
use crate::download::{download_started, DownloadLink};
use crate::effects::{
    cursor_enabled, cursor_position, cursor_style, generate_particles, particles_enabled,
    FloatingMotion, CURSOR_HOVER_SELECTOR, PARTICLE_CONTAINER_STYLE, PARTICLE_KEYFRAMES,
};
use crate::navigation::{
    active_section, anchor_id, navbar_style, scroll_target, MobileMenu, SectionSpan,
};
use crate::reveal::{
    fallback_source, hero_reveal_delay, hero_style, stagger_delay, RevealTracker,
    DEFERRED_ANIMATION_SELECTOR, FADE_IN_CLASS, HERO_CLASSES, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, SCROLL_ANIMATED_SELECTOR, SECTION_VIEW_THRESHOLD, VISIBLE_CLASS,
};
use crate::telemetry::{self, log_event, LogLevel};
use crate::theme::{MemoryStore, SettingsStore, StoreError, Theme, ThemeManager, ThemeSurface};
use crate::typing::{TypingAnimation, DEFAULT_TEXTS};

const FLOATING_SHAPE_ICONS: [&str; 4] = [
    "fas fa-code",
    "fas fa-laptop-code",
    "fas fa-database",
    "fas fa-mobile-alt",
];

fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`, or an in-memory map when the browser refuses storage access.
#[derive(Default)]
struct BrowserStore {
    fallback: MemoryStore,
}

impl SettingsStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match local_storage() {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match local_storage() {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|_| StoreError::WriteRejected {
                    key: key.to_string(),
                }),
            None => self.fallback.set(key, value),
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

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

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

struct DocumentSurface {
    animate: bool,
}

impl ThemeSurface for DocumentSurface {
    fn apply(&self, theme: Theme) {
        if self.animate {
            apply_theme_with_transition(theme);
        } else {
            apply_theme(theme);
        }
    }
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn elements_matching(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

fn section_spans() -> Vec<SectionSpan> {
    let Some(document) = document() else {
        return Vec::new();
    };

    elements_matching(&document, "section")
        .into_iter()
        .filter_map(|element| {
            let id = element.id();
            let element = element.dyn_into::<HtmlElement>().ok()?;
            (!id.is_empty()).then(|| {
                SectionSpan::new(
                    id,
                    f64::from(element.offset_top()),
                    f64::from(element.offset_height()),
                )
            })
        })
        .collect()
}

fn scroll_to_section(id: &str) {
    let Some(win) = window() else {
        return;
    };
    let Some(section) = win
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Intersection observer that fires `on_reveal` at most once per target.
struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once<F>(
    targets: &[Element],
    key_prefix: &str,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_reveal: F,
) -> Option<OneShotObserver>
where
    F: FnMut(&Element, &str, f64) + 'static,
{
    if targets.is_empty() {
        return None;
    }

    let key_attribute = format!("data-{key_prefix}-key");
    for (index, target) in targets.iter().enumerate() {
        let id = target.id();
        let key = if id.is_empty() { index.to_string() } else { id };
        let _ = target.set_attribute(&key_attribute, &key);
    }

    let mut tracker = RevealTracker::new(threshold);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                let Some(key) = target.get_attribute(&key_attribute) else {
                    continue;
                };
                let ratio = entry.intersection_ratio();
                if tracker.on_intersection(&key, ratio) {
                    observer.unobserve(&target);
                    on_reveal(&target, &key, ratio);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(root_margin) = root_margin {
        options.set_root_margin(root_margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for target in targets {
        observer.observe(target);
    }

    Some(OneShotObserver {
        observer,
        _callback: callback,
    })
}

#[hook]
fn use_scroll_reveal() {
    use_effect_with((), |_| {
        let observers = document().map(|document| {
            let animated = elements_matching(&document, SCROLL_ANIMATED_SELECTOR);
            for (index, element) in animated.iter().enumerate() {
                let _ = element.class_list().add_1(FADE_IN_CLASS);
                set_style(element, "animation-delay", &stagger_delay(index));
            }
            let reveal = observe_once(
                &animated,
                "reveal",
                REVEAL_THRESHOLD,
                Some(REVEAL_ROOT_MARGIN),
                |element, _, _| {
                    let _ = element.class_list().add_1(VISIBLE_CLASS);
                },
            );

            let deferred = elements_matching(&document, DEFERRED_ANIMATION_SELECTOR);
            for element in &deferred {
                set_style(element, "animation-play-state", "paused");
            }
            let resume = observe_once(
                &deferred,
                "deferred",
                REVEAL_THRESHOLD,
                None,
                |element, _, _| set_style(element, "animation-play-state", "running"),
            );

            (reveal, resume)
        });

        move || drop(observers)
    });
}

fn log_page_load(analytics: &RefCell<Analytics>) {
    let Some(performance) = window().and_then(|w| w.performance()) else {
        return;
    };
    let load_event_end = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>()
        .ok()
        .map(|timing| timing.load_event_end());

    analytics
        .borrow_mut()
        .page_loaded(page_load_ms(load_event_end, performance.now()));
}

#[hook]
fn use_analytics() {
    use_effect_with((), |_| {
        let analytics = Rc::new(RefCell::new(Analytics::default()));
        let mut listeners = Vec::new();

        if let (Some(win), Some(document)) = (window(), document()) {
            if document.ready_state() == "complete" {
                log_page_load(&analytics);
            } else {
                let analytics = analytics.clone();
                listeners.push(EventListener::once(&win, "load", move |_| {
                    log_page_load(&analytics)
                }));
            }

            let clicks = analytics.clone();
            listeners.push(EventListener::new(&document, "click", move |event| {
                if let Some(button) = closest(event, TRACKED_BUTTON_SELECTOR) {
                    clicks
                        .borrow_mut()
                        .button_clicked(&button.text_content().unwrap_or_default());
                }
            }));
        }

        let sections = document().and_then(|document| {
            let sections = elements_matching(&document, TRACKED_SECTION_SELECTOR);
            let analytics = analytics.clone();
            observe_once(
                &sections,
                "section-view",
                SECTION_VIEW_THRESHOLD,
                None,
                move |_, key, ratio| {
                    analytics.borrow_mut().section_visibility(key, ratio);
                },
            )
        });

        move || {
            drop(listeners);
            drop(sections);
        }
    });
}

#[derive(Default, PartialEq)]
struct BannerState(BannerQueue);

impl Reducible for BannerState {
    type Action = BannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.0.clone();
        queue.apply(action);
        Rc::new(Self(queue))
    }
}

fn run_banner_lifecycle(dispatcher: UseReducerDispatcher<BannerState>, id: u64) {
    spawn_local(async move {
        let mut elapsed = 0;
        for (at, step) in banner::schedule() {
            TimeoutFuture::new(at - elapsed).await;
            elapsed = at;
            dispatcher.dispatch(BannerAction::Step(id, step));
        }
    });
}

fn render_banner(banner: &Banner) -> Html {
    html! {
        <div key={banner.id} class={banner.kind.class_name()} style={banner.style()} role="status">
            {banner.message.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    theme: Theme,
    on_toggle_theme: Callback<()>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let scroll_y = use_state_eq(|| 0.0_f64);
    let active = use_state_eq(|| None::<String>);
    let menu = use_state_eq(MobileMenu::default);

    {
        let scroll_y = scroll_y.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let update = move || {
                let y = current_scroll_y();
                scroll_y.set(y);
                active.set(active_section(&section_spans(), y).map(str::to_string));
            };
            update();

            let listener =
                window().map(|win| EventListener::new(&win, "scroll", move |_| update()));
            move || drop(listener)
        });
    }

    let on_hamburger = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let links = NAV_ENTRIES.iter().map(|entry| {
        let href = format!("#{}", entry.id);
        let onclick = {
            let menu = menu.clone();
            let href = href.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                menu.set(menu.closed());
                if let Some(id) = anchor_id(&href) {
                    scroll_to_section(id);
                }
            })
        };
        let is_active = active.as_deref() == Some(entry.id);

        html! {
            <li class="nav-item">
                <a
                    href={href}
                    class={classes!("nav-link", is_active.then_some("active"))}
                    onclick={onclick}
                >
                    {entry.label}
                </a>
            </li>
        }
    });

    html! {
        <nav id="navbar" class="navbar" style={navbar_style(*scroll_y, props.theme).to_css()}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{OWNER_NAME}</a>
                <ul id="nav-menu" class={classes!("nav-menu", menu.is_open().then_some("active"))}>
                    { for links }
                </ul>
                <div class="nav-actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.pressed().to_string()}
                        onclick={on_toggle_theme}
                    >
                        <i id="theme-icon" class={props.theme.icon_class()} aria-hidden="true"></i>
                    </button>
                    <div
                        id="hamburger"
                        class={classes!("hamburger", menu.is_open().then_some("active"))}
                        onclick={on_hamburger}
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </div>
                </div>
            </div>
        </nav>
    }
}

fn run_typing(
    animation: Rc<RefCell<TypingAnimation>>,
    text: UseStateHandle<String>,
    cancelled: Rc<Cell<bool>>,
) {
    if cancelled.get() {
        return;
    }

    let delay_ms = {
        let mut animation = animation.borrow_mut();
        let frame = animation.tick();
        text.set(frame.text.to_string());
        frame.delay_ms
    };

    Timeout::new(delay_ms, move || run_typing(animation, text, cancelled)).forget();
}

#[derive(Properties, PartialEq)]
struct TypingTextProps {
    speed_ms: u32,
}

#[function_component(TypingText)]
fn typing_text(props: &TypingTextProps) -> Html {
    let text = use_state_eq(String::new);

    {
        let text = text.clone();
        use_effect_with(props.speed_ms, move |speed_ms| {
            let cancelled = Rc::new(Cell::new(false));
            match TypingAnimation::new(DEFAULT_TEXTS, *speed_ms) {
                Ok(animation) => {
                    run_typing(Rc::new(RefCell::new(animation)), text, cancelled.clone())
                }
                Err(error) => log_event(
                    LogLevel::Info,
                    "typing_disabled",
                    json!({ "error": error.to_string() }),
                ),
            }

            move || cancelled.set(true)
        });
    }

    html! {
        <span id="typing-text" class="typing-text">{(*text).clone()}</span>
    }
}

/// Drives every `.floating-element` under `container` from one animation-frame loop.
fn start_floating(container: &Element) -> Rc<Cell<bool>> {
    let running = Rc::new(Cell::new(true));
    let Some(win) = window() else {
        return running;
    };

    let shapes: Vec<(Element, FloatingMotion)> = container
        .query_selector_all(".floating-element")
        .ok()
        .map(|nodes| {
            (0..nodes.length())
                .filter_map(|index| nodes.item(index))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .enumerate()
                .map(|(index, element)| (element, FloatingMotion::for_index(index)))
                .collect()
        })
        .unwrap_or_default();

    if shapes.is_empty() {
        return running;
    }

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let keep_running = running.clone();
    let frame_window = win.clone();
    let mut started_at: Option<f64> = None;

    *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if !keep_running.get() {
            let _ = next_frame.borrow_mut().take();
            return;
        }

        let elapsed = timestamp - *started_at.get_or_insert(timestamp);
        for (element, motion) in &shapes {
            set_style(element, "transform", &motion.transform(elapsed));
        }

        if let Some(callback) = next_frame.borrow().as_ref() {
            let _ = frame_window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
    }

    running
}

#[function_component(FloatingShapes)]
fn floating_shapes() -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with((), move |_| {
            let running = container
                .cast::<Element>()
                .filter(|_| !prefers_reduced_motion())
                .map(|element| start_floating(&element));

            move || {
                if let Some(running) = running {
                    running.set(false);
                }
            }
        });
    }

    html! {
        <div class="floating-elements" ref={container} aria-hidden="true">
            { for FLOATING_SHAPE_ICONS.iter().map(|icon| html! {
                <div class="floating-element" data-speed="0.5">
                    <i class={*icon}></i>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ParticleFieldProps {
    count: usize,
}

#[function_component(ParticleField)]
fn particle_field(props: &ParticleFieldProps) -> Html {
    let enabled = use_memo((), |_| {
        particles_enabled(viewport_width()) && !prefers_reduced_motion()
    });
    let particles = use_memo(props.count, |count| {
        generate_particles(*count, js_sys::Math::random)
    });

    if !*enabled {
        return html! {};
    }

    html! {
        <>
            <style>{PARTICLE_KEYFRAMES}</style>
            <div class="particles-container" style={PARTICLE_CONTAINER_STYLE}>
                { for particles.iter().map(|particle| html! {
                    <div class="particle" style={particle.style()}></div>
                }) }
            </div>
        </>
    }
}

#[function_component(CursorFollower)]
fn cursor_follower() -> Html {
    let enabled = use_memo((), |_| {
        cursor_enabled(viewport_width()) && !prefers_reduced_motion()
    });
    let position = use_state_eq(|| (-100.0_f64, -100.0_f64));
    let hovering = use_state_eq(|| false);

    {
        let position = position.clone();
        let hovering = hovering.clone();
        use_effect_with(*enabled, move |enabled| {
            let listeners = enabled.then(document).flatten().map(|document| {
                let moves = EventListener::new(&document, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        position.set(cursor_position(event.client_x(), event.client_y()));
                    }
                });
                let hovers = EventListener::new(&document, "mouseover", move |event| {
                    hovering.set(closest(event, CURSOR_HOVER_SELECTOR).is_some());
                });
                [moves, hovers]
            });

            move || drop(listeners)
        });
    }

    if !*enabled {
        return html! {};
    }

    html! {
        <div
            class="cursor-follower"
            style={cursor_style(*position, *hovering)}
            aria-hidden="true"
        ></div>
    }
}

/// Clicks a throwaway anchor; false when the page has no `<body>` to host it.
fn trigger_download(link: &DownloadLink) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(body) = document.body() else {
        log_event(
            LogLevel::Debug,
            "download_skipped",
            json!({ "reason": "missing body", "href": link.href }),
        );
        return false;
    };
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return false;
    };

    anchor.set_href(&link.href);
    anchor.set_download(&link.filename);
    let _ = anchor.style().set_property("display", "none");

    if body.append_child(&anchor).is_err() {
        return false;
    }
    anchor.click();
    anchor.remove();
    true
}

#[derive(Properties, PartialEq)]
struct CvButtonProps {
    resume_path: AttrValue,
    notify: Callback<BannerRequest>,
}

#[function_component(CvButton)]
fn cv_button(props: &CvButtonProps) -> Html {
    let onclick = {
        let resume_path = props.resume_path.clone();
        let notify = props.notify.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if trigger_download(&DownloadLink::for_path(&resume_path)) {
                notify.emit(download_started());
            }
        })
    };

    html! {
        <a
            href={props.resume_path.clone()}
            id="download-cv"
            class="btn btn-secondary"
            onclick={onclick}
        >
            <i class="fas fa-download" aria-hidden="true"></i>
            {" Download CV"}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    typing_speed_ms: u32,
    particle_count: usize,
    resume_path: AttrValue,
    notify: Callback<BannerRequest>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let revealed = use_state_eq(|| 0_usize);

    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let timeouts: Vec<Timeout> = (0..HERO_CLASSES.len())
                .map(|index| {
                    let revealed = revealed.clone();
                    Timeout::new(hero_reveal_delay(index), move || revealed.set(index + 1))
                })
                .collect();

            move || drop(timeouts)
        });
    }

    let style = |index: usize| hero_style(index, *revealed);

    html! {
        <section id="home" class="hero" style="position: relative;">
            <ParticleField count={props.particle_count} />
            <div class="hero-container">
                <div class="hero-content">
                    <h1 class={HERO_CLASSES[0]} style={style(0)}>
                        {"Hi, I'm "}<span class="highlight">{OWNER_NAME}</span>
                    </h1>
                    <h2 class={HERO_CLASSES[1]} style={style(1)}>
                        <TypingText speed_ms={props.typing_speed_ms} />
                        <span class="typing-cursor" aria-hidden="true">{"|"}</span>
                    </h2>
                    <p class={HERO_CLASSES[2]} style={style(2)}>
                        {HERO_DESCRIPTION}
                    </p>
                    <div class={HERO_CLASSES[3]} style={style(3)}>
                        <a href="#contact" class="btn btn-primary">{"Get In Touch"}</a>
                        <CvButton
                            resume_path={props.resume_path.clone()}
                            notify={props.notify.clone()}
                        />
                    </div>
                    <div class={HERO_CLASSES[4]} style={style(4)}>
                        <a
                            href="https://github.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub"
                        >
                            <i class="fab fa-github"></i>
                        </a>
                        <a
                            href="https://www.linkedin.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn"
                        >
                            <i class="fab fa-linkedin"></i>
                        </a>
                    </div>
                </div>
                <FloatingShapes />
            </div>
        </section>
    }
}

fn on_image_error(event: Event) {
    let Some(image) = event.target_dyn_into::<HtmlImageElement>() else {
        return;
    };
    if let Some(fallback) = fallback_source(&image.src()) {
        image.set_src(fallback);
    }
}

fn render_credential(card_class: &'static str, credential: &Credential) -> Html {
    html! {
        <div class={card_class}>
            <h3>{credential.title}</h3>
            <p class="muted">{credential.issuer}</p>
            if !credential.period.is_empty() {
                <p class="period">{credential.period}</p>
            }
        </div>
    }
}

#[function_component(PortfolioSections)]
fn portfolio_sections() -> Html {
    let onerror = Callback::from(on_image_error);

    html! {
        <>
            <section id="about" class="about">
                <h2 class="section-title">{"About Me"}</h2>
                <p class="slide-in">
                    {ABOUT_TEXT}
                </p>
            </section>

            <section id="skills" class="skills">
                <h2 class="section-title">{"Skills"}</h2>
                <div class="skills-grid">
                    { for SKILL_CATEGORIES.iter().map(|category| html! {
                        <div class="skill-category">
                            <h3>{category.title}</h3>
                            <ul class="skill-list">
                                { for category.skills.iter().map(|skill| html! {
                                    <li>{*skill}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <section id="projects" class="projects">
                <h2 class="section-title">{"Projects"}</h2>
                <div class="projects-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <article class="project-card">
                            <img
                                src={project.image}
                                alt={project.title}
                                loading="lazy"
                                onerror={onerror.clone()}
                            />
                            <h3>{project.title}</h3>
                            <p>{project.summary}</p>
                            <ul class="tag-list">
                                { for project.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </section>

            <section id="education" class="education">
                <h2 class="section-title">{"Education"}</h2>
                { for EDUCATION.iter().map(|entry| render_credential("education-card", entry)) }
            </section>

            <section id="certifications" class="certifications">
                <h2 class="section-title">{"Certifications"}</h2>
                <div class="certifications-grid">
                    { for CERTIFICATIONS
                        .iter()
                        .map(|entry| render_credential("certification-card", entry)) }
                </div>
            </section>
        </>
    }
}

enum FormAction {
    Edit(ContactField, String),
    Begin,
    Finish(Result<(), ContactError>),
}

#[derive(Default, PartialEq)]
struct FormState(ContactForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Edit(field, value) => form.edit(field, value),
            FormAction::Begin => {
                if form.begin_submit().is_none() {
                    return self;
                }
            }
            FormAction::Finish(outcome) => form.finish(&outcome),
        }
        Rc::new(Self(form))
    }
}

fn input_value(event: &InputEvent) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    submit_delay_ms: u32,
    notify: Callback<BannerRequest>,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    let form = use_reducer(FormState::default);
    let in_flight = use_mut_ref(|| None::<futures_util::future::AbortHandle>);

    {
        let in_flight = in_flight.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(handle) = in_flight.borrow_mut().take() {
                    handle.abort();
                }
            }
        });
    }

    let on_input = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                dispatcher.dispatch(FormAction::Edit(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notify = props.notify.clone();
        let submit_delay_ms = props.submit_delay_ms;
        let in_flight = in_flight.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(fields) = form.0.clone().begin_submit() else {
                return;
            };

            let dispatcher = form.dispatcher();
            dispatcher.dispatch(FormAction::Begin);

            let (task, handle) = SubmissionTask::new(fields, TimeoutFuture::new(submit_delay_ms));
            *in_flight.borrow_mut() = Some(handle);

            let notify = notify.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let outcome = task
                    .run_with_timeout(TimeoutFuture::new(SUBMISSION_TIMEOUT_MS))
                    .await;
                in_flight.borrow_mut().take();

                if outcome != Err(ContactError::Cancelled) {
                    notify.emit(banner_for(&outcome));
                }
                dispatcher.dispatch(FormAction::Finish(outcome));
            });
        })
    };

    let fields = form.0.fields();

    html! {
        <section id="contact" class="contact">
            <h2 class="section-title">{"Get In Touch"}</h2>
            <form
                id="contact-form"
                class="contact-form"
                onsubmit={onsubmit}
                novalidate={true}
            >
                <div class="form-group">
                    <input
                        type="text"
                        name="name"
                        placeholder="Your Name"
                        value={fields.name.clone()}
                        oninput={on_input(ContactField::Name)}
                    />
                </div>
                <div class="form-group">
                    <input
                        type="email"
                        name="email"
                        placeholder="Your Email"
                        value={fields.email.clone()}
                        oninput={on_input(ContactField::Email)}
                    />
                </div>
                <div class="form-group">
                    <textarea
                        name="message"
                        rows="5"
                        placeholder="Your Message"
                        value={fields.message.clone()}
                        oninput={on_input(ContactField::Message)}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={form.0.submit_disabled()}>
                    if form.0.is_submitting() {
                        <div class="loading"></div>
                        {" "}
                    }
                    {form.0.submit_label()}
                </button>
            </form>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let manager = use_mut_ref(|| ThemeManager::load(BrowserStore::default()));
    let theme = use_state({
        let manager = manager.clone();
        move || manager.borrow().current()
    });
    let banners = use_reducer(BannerState::default);
    let next_banner_id = use_mut_ref(|| 0_u64);

    {
        let manager = manager.clone();
        use_effect_with((), move |_| {
            let mut themes = manager.borrow_mut();
            let current = themes.current();
            themes.set_theme(current, &DocumentSurface { animate: false });
            || ()
        });
    }

    use_scroll_reveal();
    use_analytics();

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = manager
                .borrow_mut()
                .toggle_theme(&DocumentSurface { animate: true });
            theme.set(next);
        })
    };

    let notify = {
        let dispatcher = banners.dispatcher();
        Callback::from(move |request: BannerRequest| {
            let id = {
                let mut next = next_banner_id.borrow_mut();
                let id = *next;
                *next += 1;
                id
            };
            dispatcher.dispatch(BannerAction::Push { id, request });
            run_banner_lifecycle(dispatcher.clone(), id);
        })
    };

    let config = &props.config;

    html! {
        <>
            <NavBar theme={*theme} on_toggle_theme={on_toggle_theme} />
            <main id="content">
                <Hero
                    typing_speed_ms={config.typing_speed_ms}
                    particle_count={config.particle_count}
                    resume_path={AttrValue::from(config.resume_path.clone())}
                    notify={notify.clone()}
                />
                <PortfolioSections />
                <ContactSection submit_delay_ms={config.submit_delay_ms} notify={notify} />
            </main>
            <footer class="footer">
                <p>{format!("© {OWNER_NAME}. Built with Rust and WebAssembly.")}</p>
            </footer>
            { for banners.0.banners().iter().map(render_banner) }
            <CursorFollower />
        </>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let config = SiteConfig::from_element(&root);
    telemetry::init(config.log_level);
    log_event(
        LogLevel::Debug,
        "config_loaded",
        json!({
            "typingSpeedMs": config.typing_speed_ms,
            "submitDelayMs": config.submit_delay_ms,
            "particleCount": config.particle_count,
            "resumePath": config.resume_path,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
