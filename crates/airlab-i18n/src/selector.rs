//! Language selector affordances (the header `EN`/`PT` buttons).
//!
//! The localizer never creates affordances; the hosting page attaches them and
//! the localizer only flips their active state.

use crate::locale::LocaleCode;

/// A UI element tagged with the locale it selects.
pub trait LocaleSelector {
    /// Locale tag the element represents (its `data-lang` value).
    fn locale_tag(&self) -> &str;

    /// Whether the element currently shows the active presentation.
    fn is_active(&self) -> bool;

    /// Toggle the active presentation.
    fn set_active(&mut self, active: bool);
}

/// Mark exactly the selectors tagged with `active` as active.
///
/// Idempotent; selectors whose tag names no supported locale simply stay inactive.
pub fn sync_selectors<'a, I>(selectors: I, active: LocaleCode)
where
    I: IntoIterator<Item = &'a mut Box<dyn LocaleSelector>>,
{
    for selector in selectors {
        let matches = selector.locale_tag() == active.code();
        selector.set_active(matches);
    }
}

/// Plain in-memory selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorButton {
    tag: String,
    active: bool,
}

impl SelectorButton {
    /// Inactive button tagged with `tag`.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            active: false,
        }
    }

    /// Inactive button for a supported locale.
    #[must_use]
    pub fn for_locale(locale: LocaleCode) -> Self {
        Self::new(locale.code())
    }
}

impl LocaleSelector for SelectorButton {
    fn locale_tag(&self) -> &str {
        &self.tag
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons() -> Vec<Box<dyn LocaleSelector>> {
        vec![
            Box::new(SelectorButton::for_locale(LocaleCode::En)),
            Box::new(SelectorButton::for_locale(LocaleCode::Pt)),
            Box::new(SelectorButton::new("fr")),
        ]
    }

    fn states(selectors: &[Box<dyn LocaleSelector>]) -> Vec<bool> {
        selectors.iter().map(|selector| selector.is_active()).collect()
    }

    #[test]
    fn only_matching_selector_is_active() {
        let mut selectors = buttons();
        sync_selectors(selectors.iter_mut(), LocaleCode::Pt);
        assert_eq!(states(&selectors), vec![false, true, false]);

        sync_selectors(selectors.iter_mut(), LocaleCode::En);
        assert_eq!(states(&selectors), vec![true, false, false]);
    }

    #[test]
    fn sync_is_idempotent() {
        let mut selectors = buttons();
        sync_selectors(selectors.iter_mut(), LocaleCode::Pt);
        let once = states(&selectors);
        sync_selectors(selectors.iter_mut(), LocaleCode::Pt);
        assert_eq!(states(&selectors), once);
    }

    #[test]
    fn no_matching_selector_is_a_no_op() {
        let mut selectors: Vec<Box<dyn LocaleSelector>> =
            vec![Box::new(SelectorButton::for_locale(LocaleCode::En))];
        sync_selectors(selectors.iter_mut(), LocaleCode::Pt);
        assert_eq!(states(&selectors), vec![false]);

        let mut empty: Vec<Box<dyn LocaleSelector>> = Vec::new();
        sync_selectors(empty.iter_mut(), LocaleCode::Pt);
        assert!(empty.is_empty());
    }
}
