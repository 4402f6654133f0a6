//! App shell: owns the localizer and wires it to Yew state.
//!
//! # Design
//! - The localizer lives in a `use_mut_ref` for the lifetime of the app; it is
//!   mutably borrowed only from event handlers and the mount effect.
//! - Rendering translates through a `Translator` captured on the first render.
//! - The render hook copies the active locale into Yew state, which schedules
//!   the re-render of every page.

use crate::components::header::Header;
use crate::components::pages::{DebugPage, MainPage, SignalsPage};
use crate::labels::{DebugLabels, HeaderLabels, MainLabels, Page, SignalsLabels};
use crate::services::dom::lang_buttons;
use crate::services::storage::BrowserStore;
use airlab_i18n::{LocaleCode, Localizer};
use yew::prelude::*;

#[function_component(AirLabApp)]
fn airlab_app() -> Html {
    let localizer = use_mut_ref(|| Localizer::with_builtin(BrowserStore));
    let translator = use_memo(|_| localizer.borrow().translator(), ());
    let locale = use_state(|| translator.active_locale());
    let page = use_state(Page::default);

    {
        let localizer = localizer.clone();
        let locale = locale.clone();
        let translator = (*translator).clone();
        use_effect_with_deps(
            move |_| {
                let mut shell = localizer.borrow_mut();
                for selector in lang_buttons() {
                    shell.attach_selector(selector);
                }
                shell.register_render_hook(move || locale.set(translator.active_locale()));
                shell.page_ready();
                || ()
            },
            (),
        );
    }

    let on_select = {
        let localizer = localizer.clone();
        Callback::from(move |next: LocaleCode| {
            localizer.borrow_mut().switch_locale(next);
        })
    };
    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let header = HeaderLabels::from_translator(&translator, *page);
    let body = match *page {
        Page::Main => html! { <MainPage labels={MainLabels::from_translator(&translator)} /> },
        Page::Debug => html! { <DebugPage labels={DebugLabels::from_translator(&translator)} /> },
        Page::Signals => {
            html! { <SignalsPage labels={SignalsLabels::from_translator(&translator)} /> }
        }
    };

    html! {
        <div class="airlab" lang={locale.code()}>
            <Header labels={header} locale={*locale} on_select={on_select} on_navigate={on_navigate} />
            {body}
        </div>
    }
}

/// Mount the app on `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AirLabApp>::with_root(root).render();
    } else {
        yew::Renderer::<AirLabApp>::new().render();
    }
}
