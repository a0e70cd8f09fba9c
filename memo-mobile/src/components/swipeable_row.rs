//! Swipeable memo row with reveal-to-delete

use gloo_timers::callback::Interval;
use memo_common::{ColorRole, SwipeConfig};
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use super::row_state::{RowAction, SwipeRowState};
use super::DeleteAction;
use crate::config::load_swipe_config;

#[derive(Properties, PartialEq)]
pub struct SwipeableRowProps {
    pub title: String,
    pub on_press: Callback<()>,
    /// Called once the row has slid off screen. The owner removes the item.
    pub on_delete: Callback<()>,
    /// Falls back to the stored config, then to defaults
    #[prop_or_default]
    pub config: Option<SwipeConfig>,
}

#[function_component(SwipeableRow)]
pub fn swipeable_row(props: &SwipeableRowProps) -> Html {
    let config = {
        let config = props.config.clone();
        use_state(move || config.unwrap_or_else(load_swipe_config))
    };
    let state = {
        let config = (*config).clone();
        use_reducer(move || SwipeRowState::new(viewport_width(), config))
    };

    // Frame driver, alive only while a transition runs
    {
        let dispatcher = state.dispatcher();
        let active = state.row().active_transition().map(|t| t.id);
        let interval_ms = config.frame_interval_ms;

        use_effect_with(active, move |active| {
            let interval = active.map(|_| {
                Interval::new(interval_ms, move || {
                    dispatcher.dispatch(RowAction::Tick(now()));
                })
            });
            move || drop(interval)
        });
    }

    {
        let on_delete = props.on_delete.clone();
        use_effect_with(state.deletions(), move |deletions| {
            if *deletions > 0 {
                on_delete.emit(());
            }
            || ()
        });
    }

    let on_touch_start = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                dispatcher.dispatch(RowAction::DragStart(touch.client_x() as f64));
            }
        })
    };

    let on_touch_move = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                dispatcher.dispatch(RowAction::DragMove(touch.client_x() as f64));
            }
        })
    };

    let on_touch_end = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if releases_gesture(e.touches().length()) {
                dispatcher.dispatch(RowAction::DragEnd(now()));
            }
        })
    };

    let on_mouse_down = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            dispatcher.dispatch(RowAction::DragStart(e.client_x() as f64));
        })
    };

    let on_mouse_move = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            dispatcher.dispatch(RowAction::DragMove(e.client_x() as f64));
        })
    };

    let on_mouse_up = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(RowAction::DragEnd(now()));
        })
    };

    let on_click = {
        let on_press = props.on_press.clone();
        let pressable = state.pressable();
        Callback::from(move |_: MouseEvent| {
            if pressable {
                on_press.emit(());
            }
        })
    };

    let style = format!(
        "transform: translateX({}px); touch-action: pan-y;",
        state.row().offset()
    );

    html! {
        <div
            class={classes!("memo-item", ColorRole::Danger.background_class())}
            style="position: relative; overflow: hidden; margin: 4px 0;"
        >
            <DeleteAction width={config.action_width} label={config.action_label.clone()} />

            <div
                class="memo-item-foreground"
                style={style}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end.clone()}
                ontouchcancel={on_touch_end}
                onmousedown={on_mouse_down}
                onmousemove={on_mouse_move}
                onmouseup={on_mouse_up.clone()}
                onmouseleave={on_mouse_up}
            >
                <div
                    class={classes!("memo-item-pressable", ColorRole::Secondary.background_class())}
                    style="padding: 16px;"
                >
                    <span
                        class={classes!("memo-item-title", ColorRole::Base.text_class())}
                        style="display: block; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;"
                        onclick={on_click}
                    >
                        {&props.title}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// A touch gesture ends only once no finger remains down
fn releases_gesture(remaining_touches: u32) -> bool {
    remaining_touches == 0
}

/// Viewport width in px, read once per row
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Monotonic timestamp in ms, falling back to wall clock
fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}
