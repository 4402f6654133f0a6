//! Page header: heading, navigation links, and language buttons.

use crate::components::lang_switcher::LangSwitcher;
use crate::labels::{HeaderLabels, Page};
use airlab_i18n::LocaleCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HeaderProps {
    pub labels: HeaderLabels,
    pub locale: LocaleCode,
    pub on_select: Callback<LocaleCode>,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub(crate) fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="page-header">
            <h1>{props.labels.title.clone()}</h1>
            <nav class="page-links">
                {for props.labels.links.iter().map(|link| {
                    let on_navigate = props.on_navigate.clone();
                    let page = link.page;
                    let onclick = Callback::from(move |_| on_navigate.emit(page));
                    html! {
                        <button type="button" class="nav-link" onclick={onclick}>
                            {link.label.clone()}
                        </button>
                    }
                })}
            </nav>
            <LangSwitcher
                active={props.locale}
                caption={AttrValue::from(props.labels.language.clone())}
                on_select={props.on_select.clone()}
            />
        </header>
    }
}
