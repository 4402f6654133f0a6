//! Language buttons in the page header.
//!
//! # Design
//! - Each button carries `data-lang` so the localizer can restyle it directly.
//! - The `active` class is also derived from props; both paths agree after a switch.
//! - Clicks are emitted through `on_select`; the component holds no state.

use crate::services::dom::{ACTIVE_CLASS, LANG_BUTTON_CLASS};
use airlab_i18n::LocaleCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LangSwitcherProps {
    pub active: LocaleCode,
    pub caption: AttrValue,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LangSwitcher)]
pub(crate) fn lang_switcher(props: &LangSwitcherProps) -> Html {
    html! {
        <div class="lang-switcher" aria-label={props.caption.clone()}>
            <span class="lang-caption">{props.caption.clone()}</span>
            {for LocaleCode::all().into_iter().map(|locale| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(locale));
                let class = classes!(
                    LANG_BUTTON_CLASS,
                    (locale == props.active).then_some(ACTIVE_CLASS)
                );
                html! {
                    <button
                        type="button"
                        class={class}
                        data-lang={locale.code()}
                        title={locale.label()}
                        onclick={onclick}
                    >
                        {locale.short_label()}
                    </button>
                }
            })}
        </div>
    }
}
