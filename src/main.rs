//! Surprise Gate entry point
//!
//! In the browser this wires the page elements to the sequencer and runs the
//! cue chain, countdown ticker and fireworks loop. Natively it runs a headless
//! dry run of the same sequence.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, MouseEvent,
    };

    use surprise_gate::audio::{HandoffAction, MusicHandoff, Tone, ToneSynth, ToggleAction};
    use surprise_gate::effects::reveal::{
        REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEALED_CLASS, SECTION_INDEX_ATTR,
        SECTION_SELECTOR, STAGGER_CHILD_SELECTOR,
    };
    use surprise_gate::effects::keyframes::GATE_GLOW_STYLE;
    use surprise_gate::effects::{
        Keyframes, RevealTracker, TypingAnimation, layout_drift, layout_floating, stagger_delays,
    };
    use surprise_gate::error::log_outcome;
    use surprise_gate::fireworks::{Fireworks, FrameOutcome};
    use surprise_gate::platform::dom::set_style;
    use surprise_gate::platform::{CanvasSurface, Dom, Interval, haptics, media, now_ms, sleep};
    use surprise_gate::sequencer::{CountdownDisplay, Cue, HapticPattern, Sequencer, TickOutcome};
    use surprise_gate::{GreetingConfig, seed_from_clock};

    /// Page element ids
    mod ids {
        pub const GATE_BUTTON: &str = "clickHereBtn";
        pub const GATE_SCREEN: &str = "gateScreen";
        pub const COUNTDOWN_SCREEN: &str = "countdownScreen";
        pub const MAIN_CONTENT: &str = "mainContent";
        pub const FIREWORKS_CANVAS: &str = "fireworksCanvas";
        pub const GATE_DRIFT: &str = "particlesContainer";
        pub const COUNTDOWN_DRIFT: &str = "countdownParticles";
        pub const TYPING_TEXT: &str = "typingText";
        pub const FLOATING: &str = "floatingElements";
        pub const BG_MUSIC: &str = "bgMusic";
        pub const VIDEO: &str = "loveVideo";
        pub const AUDIO_TOGGLE: &str = "audioToggleBtn";
    }

    /// Everything the page handlers share
    struct App {
        config: GreetingConfig,
        dom: Dom,
        sequencer: Sequencer,
        fireworks: Fireworks,
        canvas: Option<CanvasSurface>,
        synth: ToneSynth,
        handoff: MusicHandoff,
        ticker: Option<Interval>,
        reveal: RevealTracker,
        rng: Pcg32,
    }

    type Shared = Rc<RefCell<App>>;

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Surprise Gate starting...");

        let dom = match Dom::new() {
            Ok(dom) => dom,
            Err(err) => {
                log::error!("No document to run in: {err}");
                return;
            }
        };

        let config = GreetingConfig::default();
        if let Ok(json) = serde_json::to_string(&config) {
            log::debug!("config: {json}");
        }

        let now = now_ms();
        let seed = seed_from_clock(js_sys::Date::now());
        let sequencer = Sequencer::new(&config, now);
        log::info!(
            "Countdown target in {}s",
            sequencer.target().remaining_ms(now) / 1000
        );

        log_outcome("scroll lock", dom.set_scroll_enabled(false));
        log_outcome("keyframes", dom.inject_keyframes());

        let canvas = match CanvasSurface::acquire(&dom, ids::FIREWORKS_CANVAS) {
            Ok(canvas) => Some(canvas),
            Err(err) => {
                log::warn!("Fireworks disabled: {err}");
                None
            }
        };

        let mut rng = Pcg32::seed_from_u64(seed);
        spawn_drift(&dom, ids::GATE_DRIFT, config.drift_count, &mut rng);

        match media::media(&dom, ids::BG_MUSIC) {
            Ok(bg) => log_outcome("music unlock", media::unlock(&bg)),
            Err(err) => log::info!("No background music: {err}"),
        }

        let app: Shared = Rc::new(RefCell::new(App {
            fireworks: Fireworks::new(config.fireworks.clone(), seed.rotate_left(17)),
            config,
            dom,
            sequencer,
            canvas,
            synth: ToneSynth::new(),
            handoff: MusicHandoff::new(),
            ticker: None,
            reveal: RevealTracker::default(),
            rng,
        }));

        handle_resize(&app);
        setup_gate(app.clone());
        setup_audio_toggle(app.clone());
        setup_video_handoff(app.clone());
        setup_resize(app);

        log::info!("Surprise Gate ready");
    }

    // === Cue chain ===

    /// Perform cues in order
    fn perform(app: &Shared, cues: Vec<Cue>) {
        for cue in cues {
            perform_cue(app, cue);
        }
    }

    fn perform_cue(app: &Shared, cue: Cue) {
        log::debug!("cue {:?}", cue);
        let dom = app.borrow().dom.clone();
        let timings = *app.borrow().sequencer.timings();

        match cue {
            Cue::Vibrate(pattern) => log_outcome("vibrate", haptics::vibrate(pattern)),
            Cue::AcknowledgeGate => acknowledge_gate(&dom),
            Cue::FadeOutGate => log_outcome(
                "gate fade",
                dom.animate(ids::GATE_SCREEN, Keyframes::FadeOut, timings.gate_fade_ms),
            ),
            Cue::ShowCountdown => {
                log_outcome("hide gate", dom.hide(ids::GATE_SCREEN));
                log_outcome("show countdown", dom.show(ids::COUNTDOWN_SCREEN));
                let (count, mut rng) = {
                    let mut a = app.borrow_mut();
                    (a.config.drift_count, Pcg32::seed_from_u64(a.rng.random()))
                };
                spawn_drift(&dom, ids::COUNTDOWN_DRIFT, count, &mut rng);
            }
            Cue::StartTicker => start_ticker(app),
            Cue::StopTicker => {
                if let Some(ticker) = app.borrow_mut().ticker.take() {
                    ticker.cancel();
                    log::info!("Countdown ticker stopped");
                }
            }
            Cue::LaunchFireworks => launch_fireworks(app),
            Cue::PlayChime => {
                let a = app.borrow();
                log_outcome(
                    "chime",
                    a.synth.play(Tone::Chime, a.sequencer.has_interacted()),
                );
            }
            Cue::FadeOutCountdown => log_outcome(
                "countdown fade",
                dom.animate(
                    ids::COUNTDOWN_SCREEN,
                    Keyframes::FadeOut,
                    timings.countdown_fade_ms,
                ),
            ),
            Cue::RevealMain => {
                log_outcome("hide countdown", dom.hide(ids::COUNTDOWN_SCREEN));
                log_outcome("scroll unlock", dom.set_scroll_enabled(true));
                log_outcome("show main", dom.show(ids::MAIN_CONTENT));
                log_outcome(
                    "main fade in",
                    dom.animate(ids::MAIN_CONTENT, Keyframes::FadeIn, timings.main_fade_in_ms),
                );
            }
            Cue::StartTyping => wasm_bindgen_futures::spawn_local(type_greeting(app.clone())),
            Cue::SpawnFloating => spawn_floating(app),
            Cue::ObserveScrollReveal => observe_sections(app),
        }
    }

    /// Sleep until each pending cue is due and perform it, until the timeline is empty
    fn pump(app: Shared) {
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                let next = app.borrow().sequencer.next_due();
                let Some(due) = next else { break };
                sleep(due - now_ms()).await;
                let cues = app.borrow_mut().sequencer.advance(now_ms());
                perform(&app, cues);
            }
        });
    }

    // === Gate ===

    fn setup_gate(app: Shared) {
        let dom = app.borrow().dom.clone();
        let button = match dom.element(ids::GATE_BUTTON) {
            Ok(button) => button,
            Err(err) => {
                log::error!("Gate cannot open: {err}");
                return;
            }
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let cues = app.borrow_mut().sequencer.on_gate_interaction(now_ms());
            if cues.is_empty() {
                return;
            }
            log::info!("Gate opened");
            app.borrow().synth.resume();
            perform(&app, cues);
            pump(app.clone());
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn acknowledge_gate(dom: &Dom) {
        let Ok(button) = dom.html(ids::GATE_BUTTON) else {
            return;
        };
        let _ = set_style(&button, "transform", "scale(0.95)");
        if let Ok(glow) = dom.create("div") {
            let _ = glow.set_attribute("style", GATE_GLOW_STYLE);
            let _ = button.append_child(&glow);
        }
    }

    // === Countdown ===

    fn start_ticker(app: &Shared) {
        let (dom, display, period) = {
            let a = app.borrow();
            (
                a.dom.clone(),
                a.sequencer.current_display(now_ms()),
                a.sequencer.timings().tick_period_ms,
            )
        };
        write_display(&dom, &display);

        let tick_app = app.clone();
        match Interval::start(period, move || on_tick(&tick_app)) {
            Ok(interval) => app.borrow_mut().ticker = Some(interval),
            Err(err) => log::error!("Countdown ticker failed to start: {err}"),
        }
    }

    fn on_tick(app: &Shared) {
        let outcome = app.borrow_mut().sequencer.countdown_tick(now_ms());
        match outcome {
            TickOutcome::Display(display) => {
                let dom = app.borrow().dom.clone();
                write_display(&dom, &display);
            }
            TickOutcome::Completed(cues) => {
                log::info!("Countdown complete");
                perform(app, cues);
                pump(app.clone());
            }
            TickOutcome::Idle => {}
        }
    }

    fn write_display(dom: &Dom, display: &CountdownDisplay) {
        for (slot, text) in display.slots() {
            log_outcome("countdown display", dom.set_text(slot, &text));
        }
    }

    // === Fireworks ===

    fn viewport_size() -> (u32, u32) {
        let Some(window) = web_sys::window() else {
            return (0, 0);
        };
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    fn handle_resize(app: &Shared) {
        let (w, h) = viewport_size();
        let mut guard = app.borrow_mut();
        let a = &mut *guard;
        a.fireworks.resize(w as f32, h as f32);
        if let Some(canvas) = a.canvas.as_ref() {
            canvas.resize(w, h);
        }
    }

    fn setup_resize(app: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            handle_resize(&app);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn launch_fireworks(app: &Shared) {
        {
            let a = app.borrow();
            if a.canvas.is_none() {
                log::info!("No fireworks canvas, skipping the show");
                return;
            }
            log_outcome("show canvas", a.dom.show(ids::FIREWORKS_CANVAS));
        }
        handle_resize(app);
        app.borrow_mut().fireworks.start();
        request_animation_frame(app.clone());
    }

    fn request_animation_frame(app: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            fireworks_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn fireworks_loop(app: Shared, time: f64) {
        let outcome = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            let outcome = a.fireworks.frame(time);
            if let Some(canvas) = a.canvas.as_mut() {
                a.fireworks.draw(canvas);
            }
            outcome
        };

        match outcome {
            FrameOutcome::Continue => request_animation_frame(app),
            FrameOutcome::Finished => {
                let a = app.borrow();
                log::info!("Fireworks done ({} particles)", a.fireworks.spawned_count());
                log_outcome("hide canvas", a.dom.hide(ids::FIREWORKS_CANVAS));
            }
        }
    }

    // === Ambient and post-unlock effects ===

    fn spawn_drift(dom: &Dom, container_id: &str, count: usize, rng: &mut Pcg32) {
        let container = match dom.element(container_id) {
            Ok(container) => container,
            Err(err) => {
                log::info!("Drift particles skipped: {err}");
                return;
            }
        };
        for dot in layout_drift(count, rng) {
            let Ok(el) = dom.create_div("particle") else {
                continue;
            };
            for (prop, value) in dot.style_props() {
                let _ = set_style(&el, prop, &value);
            }
            let _ = container.append_child(&el);
        }
    }

    async fn type_greeting(app: Shared) {
        let (dom, mut typing, mut rng) = {
            let mut a = app.borrow_mut();
            (
                a.dom.clone(),
                TypingAnimation::new(&a.config.typing_text),
                Pcg32::seed_from_u64(a.rng.random()),
            )
        };
        while let Some(frame) = typing.next_frame(&mut rng) {
            log_outcome("typing", dom.set_text(ids::TYPING_TEXT, &frame.text));
            sleep(frame.delay_ms as i64).await;
        }
    }

    fn spawn_floating(app: &Shared) {
        let (dom, elements) = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            let elements = layout_floating(
                &a.config.floating_symbols,
                a.config.floating_count,
                &mut a.rng,
            );
            (a.dom.clone(), elements)
        };
        let container = match dom.element(ids::FLOATING) {
            Ok(container) => container,
            Err(err) => {
                log::info!("Floating elements skipped: {err}");
                return;
            }
        };

        for item in elements {
            let Ok(el) = dom.create_div("floating-element") else {
                continue;
            };
            el.set_text_content(Some(&item.symbol));
            for (prop, value) in item.style_props() {
                let _ = set_style(&el, prop, &value);
            }

            let pop_app = app.clone();
            let pop_el = el.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                pop_element(&pop_app, &pop_el);
            });
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();

            let _ = container.append_child(&el);
        }
    }

    fn pop_element(app: &Shared, el: &HtmlElement) {
        if el.class_list().contains("popped") {
            return;
        }
        log_outcome("vibrate", haptics::vibrate(HapticPattern::Pop));
        let delay = {
            let a = app.borrow();
            log_outcome("pop tone", a.synth.play(Tone::Pop, a.sequencer.has_interacted()));
            a.sequencer.timings().pop_removal_ms
        };
        let _ = el.class_list().add_1("popped");

        let el = el.clone();
        wasm_bindgen_futures::spawn_local(async move {
            sleep(delay as i64).await;
            el.remove();
        });
    }

    fn observe_sections(app: &Shared) {
        let (dom, stagger_ms) = {
            let a = app.borrow();
            (a.dom.clone(), a.sequencer.timings().reveal_stagger_ms)
        };
        let sections = match dom.document().query_selector_all(SECTION_SELECTOR) {
            Ok(sections) => sections,
            Err(err) => {
                log::warn!("Scroll reveal skipped: {err:?}");
                return;
            }
        };
        app.borrow_mut().reveal = RevealTracker::new(sections.length() as usize);

        let reveal_app = app.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let first = target
                        .get_attribute(SECTION_INDEX_ATTR)
                        .and_then(|v| v.parse::<usize>().ok())
                        .is_some_and(|i| reveal_app.borrow_mut().reveal.first_reveal(i));
                    if first {
                        reveal_section(&target, stagger_ms);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("IntersectionObserver unavailable: {err:?}");
                    return;
                }
            };
        callback.forget();

        for i in 0..sections.length() {
            let Some(el) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let _ = el.set_attribute(SECTION_INDEX_ATTR, &i.to_string());
            observer.observe(&el);
        }
        log::info!("Watching {} sections for reveal", sections.length());
    }

    fn reveal_section(section: &Element, stagger_ms: u32) {
        let _ = section.class_list().add_1(REVEALED_CLASS);
        let Ok(children) = section.query_selector_all(STAGGER_CHILD_SELECTOR) else {
            return;
        };
        for (i, delay) in stagger_delays(children.length() as usize, stagger_ms).enumerate() {
            let Some(child) = children
                .item(i as u32)
                .and_then(|n| n.dyn_into::<Element>().ok())
            else {
                continue;
            };
            wasm_bindgen_futures::spawn_local(async move {
                sleep(delay as i64).await;
                let _ = child.class_list().add_1(REVEALED_CLASS);
            });
        }
    }

    // === Music ===

    fn setup_audio_toggle(app: Shared) {
        let dom = app.borrow().dom.clone();
        let Ok(button) = dom.element(ids::AUDIO_TOGGLE) else {
            log::info!("No audio toggle on this page");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            let bg = match media::media(&a.dom, ids::BG_MUSIC) {
                Ok(bg) => bg,
                Err(err) => {
                    log::info!("Audio toggle ignored: {err}");
                    return;
                }
            };
            let action = a
                .handoff
                .on_toggle(media::playback(&bg), a.sequencer.has_interacted());
            match action {
                ToggleAction::Resume { at_s, volume } => {
                    log_outcome("music", media::play_from(&bg, at_s, Some(volume)))
                }
                ToggleAction::Pause => log_outcome("music pause", media::pause(&bg)),
                ToggleAction::Ignored => log::info!("Music needs the gate to be opened first"),
            }
            if let Some(icon) = action.icon() {
                log_outcome("toggle icon", a.dom.set_text(ids::AUDIO_TOGGLE, icon));
            }
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_video_handoff(app: Shared) {
        let dom = app.borrow().dom.clone();
        let Ok(video) = media::media(&dom, ids::VIDEO) else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut guard = app.borrow_mut();
                let a = &mut *guard;
                let Ok(bg) = media::media(&a.dom, ids::BG_MUSIC) else {
                    return;
                };
                let action = a.handoff.on_foreground_play(media::playback(&bg));
                apply_handoff(&bg, action);
            });
            let _ = video.add_event_listener_with_callback("play", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for event in ["pause", "ended"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let a = app.borrow();
                let Ok(bg) = media::media(&a.dom, ids::BG_MUSIC) else {
                    return;
                };
                let action = a.handoff.on_foreground_stop(a.sequencer.has_interacted());
                apply_handoff(&bg, action);
            });
            let _ = video.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn apply_handoff(bg: &web_sys::HtmlMediaElement, action: HandoffAction) {
        match action {
            HandoffAction::Nothing => {}
            HandoffAction::PauseBackground => log_outcome("music pause", media::pause(bg)),
            HandoffAction::ResumeBackground { at_s } => {
                log_outcome("music resume", media::play_from(bg, at_s, None))
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Surprise Gate (native) starting...");
    log::info!("The page runs in the browser - use `trunk serve`. Running a headless dry run.");

    dry_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the sequence with a simulated clock and log every cue
#[cfg(not(target_arch = "wasm32"))]
fn dry_run() {
    use surprise_gate::consts::FRAME_MS;
    use surprise_gate::fireworks::{Fireworks, FrameOutcome};
    use surprise_gate::sequencer::{Cue, Sequencer, TickOutcome};
    use surprise_gate::{GreetingConfig, seed_from_clock};

    let config = GreetingConfig {
        target_offset_ms: 5_000,
        ..Default::default()
    };
    let mut sequencer = Sequencer::new(&config, 0);
    let mut show = Fireworks::new(config.fireworks.clone(), seed_from_clock(0.0));
    show.resize(1280.0, 720.0);

    let report = |now: i64, cues: &[Cue]| {
        for cue in cues {
            log::info!("t={now:>6}ms  {cue:?}");
        }
    };

    let mut now = 0;
    report(now, &sequencer.on_gate_interaction(now));

    let step = config.timings.tick_period_ms as i64;
    while now < 60_000 {
        now += step;
        let mut cues = sequencer.advance(now);
        match sequencer.countdown_tick(now) {
            TickOutcome::Display(display) if now % 1000 == 0 => {
                log::info!("t={now:>6}ms  countdown {display}")
            }
            TickOutcome::Completed(completion) => cues.extend(completion),
            _ => {}
        }
        if cues.contains(&Cue::LaunchFireworks) {
            show.start();
        }
        report(now, &cues);
        if sequencer.state().is_terminal() && sequencer.next_due().is_none() {
            break;
        }
    }

    let mut t = 0.0;
    let mut frames = 0;
    while show.frame(t) == FrameOutcome::Continue {
        t += FRAME_MS;
        frames += 1;
    }
    log::info!(
        "Fireworks: {} particles, burned out after {frames} frames ({:.1}s)",
        show.spawned_count(),
        t / 1000.0
    );
    log::info!("Final state: {}", sequencer.state().as_str());
}
