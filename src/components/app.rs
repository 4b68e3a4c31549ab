use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use scroll_guard::util::{clog, set_debug};
use scroll_guard::{GuardConfig, ScrollGuard};

use super::{carousel::Carousel, feed_list::FeedList, settings_modal::SettingsModal};

const CONFIG_KEY: &str = "sg_config";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| GuardConfig::load(CONFIG_KEY));
    let guard = {
        let initial = (*config).clone();
        use_mut_ref(move || ScrollGuard::new(initial))
    };
    let root_ref = use_node_ref();
    let open_settings = use_state(|| false);

    // Apply & persist settings
    {
        let guard = guard.clone();
        use_effect_with((*config).clone(), move |cfg| {
            set_debug(cfg.debug_log);
            let g = guard.borrow();
            if g.always_prevent() != cfg.always_prevent_pull_to_refresh {
                g.set_always_prevent(cfg.always_prevent_pull_to_refresh);
                clog(&format!(
                    "demo: always prevent pull-to-refresh = {}",
                    cfg.always_prevent_pull_to_refresh
                ));
            }
            cfg.store(CONFIG_KEY);
            || ()
        });
    }

    // Root touchstart listener
    {
        let root_ref = root_ref.clone();
        let guard = guard.clone();
        use_effect_with((), move |_| {
            let root = root_ref.cast::<HtmlElement>();
            let touch_start_cb = {
                let guard = guard.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    guard.borrow().handle_touch_start(&e);
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(root) = &root {
                root.add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
                clog("demo: touchstart guard attached");
            }
            move || {
                if let Some(root) = root {
                    let _ = root.remove_event_listener_with_callback(
                        "touchstart",
                        touch_start_cb.as_ref().unchecked_ref(),
                    );
                }
                guard.borrow().cancel();
            }
        });
    }

    let toggle_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(!*open_settings))
    };
    let close_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };
    let toggle_always_prevent = {
        let config = config.clone();
        Callback::from(move |_| {
            let mut next = (*config).clone();
            next.always_prevent_pull_to_refresh = !next.always_prevent_pull_to_refresh;
            config.set(next);
        })
    };
    let toggle_debug = {
        let config = config.clone();
        Callback::from(move |_| {
            let mut next = (*config).clone();
            next.debug_log = !next.debug_log;
            config.set(next);
        })
    };
    let reset = {
        let config = config.clone();
        Callback::from(move |_| {
            // Marker class stays: the rendered markup already uses it.
            config.set(GuardConfig {
                scrollable_class: config.scrollable_class.clone(),
                ..Default::default()
            });
        })
    };

    // The guard was built with the stored class; render with the same one.
    let marker = AttrValue::from(guard.borrow().marker().to_string());

    html! {
        <div ref={root_ref} style="position:fixed; inset:0; display:flex; flex-direction:column; background:#0d1117; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <header style="display:flex; justify-content:space-between; align-items:center; padding:10px 14px; border-bottom:1px solid #30363d;">
                <h3 style="margin:0; font-size:18px;">{"Scroll Guard"}</h3>
                <button onclick={toggle_settings} style="padding:4px 8px;">{"Settings"}</button>
            </header>
            <div style="display:flex; flex-direction:column; gap:8px; padding:10px 14px;">
                <input type="text" placeholder="Search" style="padding:6px;" />
                <input type="password" placeholder="Password" style="padding:6px;" />
            </div>
            <Carousel marker={marker.clone()} cards={12} />
            <FeedList marker={marker} rows={80} />
            <SettingsModal
                show={*open_settings}
                on_close={close_settings}
                always_prevent={config.always_prevent_pull_to_refresh}
                on_toggle_always_prevent={toggle_always_prevent}
                debug_log={config.debug_log}
                on_toggle_debug={toggle_debug}
                on_reset={reset}
            />
        </div>
    }
}
