//! Language buttons already present in the document, driven as selectors.

use airlab_i18n::LocaleSelector;
use gloo::console;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Class carried by every language button.
pub(crate) const LANG_BUTTON_CLASS: &str = "lang-btn";
/// Class marking the button of the active locale.
pub(crate) const ACTIVE_CLASS: &str = "active";
const LANG_ATTRIBUTE: &str = "data-lang";

/// A `.lang-btn` element identified by its `data-lang` attribute.
pub(crate) struct DomSelector {
    element: Element,
    tag: String,
}

impl DomSelector {
    pub(crate) fn new(element: Element) -> Self {
        let tag = element.get_attribute(LANG_ATTRIBUTE).unwrap_or_default();
        Self { element, tag }
    }
}

impl LocaleSelector for DomSelector {
    fn locale_tag(&self) -> &str {
        &self.tag
    }

    fn is_active(&self) -> bool {
        self.element.class_list().contains(ACTIVE_CLASS)
    }

    fn set_active(&mut self, active: bool) {
        if let Err(err) = self
            .element
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, active)
        {
            console::error!("failed to restyle language button", self.tag.clone(), err);
        }
    }
}

/// Every language button currently in the document, in document order.
pub(crate) fn lang_buttons() -> Vec<DomSelector> {
    let Ok(nodes) = document().query_selector_all(&format!(".{LANG_BUTTON_CLASS}")) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(DomSelector::new)
        .collect()
}
