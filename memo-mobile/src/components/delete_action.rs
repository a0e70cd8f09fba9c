//! Delete affordance revealed behind a swiped row

use memo_common::ColorRole;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteActionProps {
    /// Fixed width in px
    pub width: f64,
    #[prop_or_else(|| "Delete".to_string())]
    pub label: String,
}

#[function_component(DeleteAction)]
pub fn delete_action(props: &DeleteActionProps) -> Html {
    let style = format!(
        "position: absolute; top: 0; right: 0; height: 100%; width: {}px; \
         display: flex; flex-direction: row; align-items: center; justify-content: center;",
        props.width
    );
    let text_class = ColorRole::Base.text_class();

    html! {
        <div class="memo-item-delete" style={style} aria-hidden="true">
            <span class={classes!("icon", text_class.clone())}>{"🗑️"}</span>
            <span class={classes!("label", text_class)}>{&props.label}</span>
        </div>
    }
}
