//! Scroll-triggered reveal wrapper. Children start transparent and
//! offset downward, then slide into place the first time at least 10%
//! of the card enters the viewport. Each card reveals independently
//! and exactly once.

use std::cell::RefCell;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::load::FADE_MS;
use crate::observe::{RevealHandle, RevealRegistry};

// Fraction of the card's area that must be visible before it reveals.
const VISIBILITY_THRESHOLD: f64 = 0.1;

thread_local! {
    static REGISTRY: RefCell<RevealRegistry> = RefCell::new(RevealRegistry::new());
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCardProps {
    pub children: Children,
    /// Offset applied to the visual transition only; detection is
    /// never delayed.
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(AnimatedCard)]
pub fn animated_card(props: &AnimatedCardProps) -> Html {
    let revealed = use_state(|| false);
    let node = use_node_ref();

    {
        let revealed = revealed.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let setter = revealed.setter();
                let handle = REGISTRY
                    .with(|r| r.borrow_mut().register(Box::new(move || setter.set(true))));

                let observation = node
                    .cast::<Element>()
                    .filter(|_| observer_supported())
                    .and_then(|element| observe(&element, handle).ok());

                if observation.is_none() {
                    // No intersection primitive (or no element to watch):
                    // reveal immediately instead of hiding content forever.
                    warn!("viewport observation unavailable, revealing card immediately");
                    REGISTRY.with(|r| r.borrow_mut().report(handle, true));
                }

                move || {
                    REGISTRY.with(|r| r.borrow_mut().cancel(handle));
                    if let Some((observer, closure)) = observation {
                        observer.disconnect();
                        drop(closure);
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("animated-card", (*revealed).then(|| "revealed"))}
            style={reveal_style(props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

fn reveal_style(delay_ms: u32) -> String {
    let fade = f64::from(FADE_MS) / 1000.0;
    format!(
        "transition: opacity {fade}s ease, transform {fade}s ease; transition-delay: {delay_ms}ms;"
    )
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Attaches an `IntersectionObserver` that feeds the registry and
/// unobserves the target on its first intersecting report.
fn observe(
    element: &Element,
    handle: RevealHandle,
) -> Result<(IntersectionObserver, EntriesCallback), JsValue> {
    let callback: EntriesCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    REGISTRY.with(|r| r.borrow_mut().report(handle, true));
                }
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

#[cfg(test)]
mod tests {
    use super::reveal_style;
    use crate::load::FADE_MS;

    #[test]
    fn delay_offsets_the_transition_start() {
        let style = reveal_style(400);
        assert!(style.contains("transition-delay: 400ms"));
        let fade = format!("{}s ease", f64::from(FADE_MS) / 1000.0);
        assert!(style.contains(&fade));
    }

    #[test]
    fn zero_delay_renders_cleanly() {
        assert!(reveal_style(0).contains("transition-delay: 0ms"));
    }
}
