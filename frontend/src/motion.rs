use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

/// Delay between consecutive children of a revealed container, in seconds.
pub const STAGGER_SECS: f64 = 0.7;

/// How much of an element must be on screen before it reveals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Any overlap with the viewport.
    Some,
    Fraction(f64),
}

pub const HERO_AMOUNT: Amount = Amount::Fraction(0.3);
pub const PANEL_AMOUNT: Amount = Amount::Fraction(0.2);

/// Fraction of an element's height inside a viewport of `viewport_height`,
/// given its bounding box top and height relative to the viewport.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

pub fn meets(amount: Amount, fraction: f64) -> bool {
    match amount {
        Amount::Some => fraction > 0.0,
        Amount::Fraction(min) => fraction > 0.0 && fraction >= min,
    }
}

/// Inline delay for the `index`th child of a staggered container.
pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {:.1}s;", index as f64 * STAGGER_SECS)
}

/// Class list for an element that fades up into place while `in_view`.
pub fn reveal(in_view: bool) -> Classes {
    classes!("reveal", in_view.then_some("in-view"))
}

fn measure(node: &NodeRef, window: &Window, amount: Amount) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    meets(amount, visible_fraction(rect.top(), rect.height(), viewport_height))
}

/// Tracks whether the element behind `node` is on screen. Not sticky: the
/// flag drops back to false once the element scrolls away.
#[hook]
pub fn use_in_view(node: NodeRef, amount: Amount) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let listener = web_sys::window().map(|window| {
                    in_view.set(measure(&node, &window, amount));

                    let callback = {
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            in_view.set(measure(&node, &window, amount));
                        }) as Box<dyn FnMut()>)
                    };
                    for event in ["scroll", "resize"] {
                        let _ = window.add_event_listener_with_callback(
                            event,
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        for event in ["scroll", "resize"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            node,
        );
    }

    *in_view
}
