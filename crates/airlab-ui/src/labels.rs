//! Localized label sets for each AirLab page.
//!
//! # Design
//! - Builders are pure functions of a [`Translator`], so every switch rebuilds
//!   labels from the shared active locale without touching the DOM.
//! - Label structs compare by value; Yew skips re-rendering pages whose text
//!   did not change.
//! - Live readings are not part of this crate; pages render [`NO_READING`].

use airlab_i18n::Translator;

/// Placeholder shown where a live reading would appear.
pub const NO_READING: &str = "—";

/// Vacuum channels shown on the main and debug pages.
pub const VACUUM_CHANNELS: [&str; 4] = ["vacuum1", "vacuum2", "vacuum3", "vacuum4"];

/// Digital inputs and outputs on the signals page.
pub const SIGNAL_COUNT: usize = 8;

/// Top-level pages of the bench UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Live vacuum readings and bench controls.
    #[default]
    Main,
    /// Raw sensor diagnostics.
    Debug,
    /// Digital input and output states.
    Signals,
}

impl Page {
    /// Every page in navigation order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Main, Self::Debug, Self::Signals]
    }

    /// Catalog key for the page heading.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Main => "title",
            Self::Debug => "debugMode",
            Self::Signals => "signalsTitle",
        }
    }

    /// Catalog key for links that lead to this page.
    #[must_use]
    pub const fn link_key(self) -> &'static str {
        match self {
            Self::Main => "backToMain",
            Self::Debug => "debugPage",
            Self::Signals => "signalsPage",
        }
    }
}

/// Navigation entry pointing at another page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Destination page.
    pub page: Page,
    /// Localized link caption.
    pub label: String,
}

/// Heading, language caption, and links to the other pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderLabels {
    /// Page heading.
    pub title: String,
    /// Caption for the language buttons.
    pub language: String,
    /// Links to every page except the current one.
    pub links: Vec<NavLink>,
}

impl HeaderLabels {
    /// Build the header for `page` in the translator's active locale.
    #[must_use]
    pub fn from_translator(translator: &Translator, page: Page) -> Self {
        Self {
            title: text(translator, page.title_key()),
            language: text(translator, "language"),
            links: Page::all()
                .into_iter()
                .filter(|other| *other != page)
                .map(|other| NavLink {
                    page: other,
                    label: text(translator, other.link_key()),
                })
                .collect(),
        }
    }
}

/// Displayed pressure unit on the main page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PressureUnit {
    /// Millibar.
    #[default]
    Mbar,
    /// Bar.
    Bar,
}

impl PressureUnit {
    /// Both units in toggle order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Mbar, Self::Bar]
    }

    /// Catalog key for the unit symbol.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mbar => "unitMbar",
            Self::Bar => "unitBar",
        }
    }
}

/// One vacuum channel card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelCard {
    /// Channel name.
    pub name: String,
    /// Reading placeholder.
    pub reading: String,
    /// Status word.
    pub status: String,
}

/// Main page labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainLabels {
    /// One card per vacuum channel.
    pub channels: Vec<ChannelCard>,
    /// Caption for the unit toggle.
    pub unit: String,
    /// Unit symbols, indexed like [`PressureUnit::all`].
    pub unit_symbols: Vec<(PressureUnit, String)>,
    /// Calibrate button caption.
    pub calibrate: String,
    /// Reset button caption.
    pub reset: String,
    /// Shutdown button caption.
    pub shutdown: String,
    /// Reboot button caption.
    pub reboot: String,
}

impl MainLabels {
    /// Build main page labels in the translator's active locale.
    #[must_use]
    pub fn from_translator(translator: &Translator) -> Self {
        let status = text(translator, "statusOk");
        Self {
            channels: VACUUM_CHANNELS
                .iter()
                .map(|key| ChannelCard {
                    name: text(translator, key),
                    reading: NO_READING.to_string(),
                    status: status.clone(),
                })
                .collect(),
            unit: text(translator, "unit"),
            unit_symbols: PressureUnit::all()
                .into_iter()
                .map(|unit| (unit, text(translator, unit.key())))
                .collect(),
            calibrate: text(translator, "calibrate"),
            reset: text(translator, "reset"),
            shutdown: text(translator, "shutdown"),
            reboot: text(translator, "reboot"),
        }
    }

    /// Symbol for `unit`, falling back to its catalog key.
    #[must_use]
    pub fn symbol(&self, unit: PressureUnit) -> &str {
        self.unit_symbols
            .iter()
            .find(|(candidate, _)| *candidate == unit)
            .map_or(unit.key(), |(_, symbol)| symbol.as_str())
    }
}

/// Debug field captions, shared by every channel panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugFields {
    /// Raw ADC value caption.
    pub raw_value: String,
    /// Calibration offset caption.
    pub offset: String,
    /// Unfiltered pressure caption.
    pub instant_pressure: String,
    /// Moving-average window caption.
    pub samples_in_avg: String,
}

/// Debug page labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugLabels {
    /// Channel panel names.
    pub channels: Vec<String>,
    /// Per-channel field captions.
    pub fields: DebugFields,
    /// Refresh-rate note.
    pub debug_info: String,
    /// Last-update caption.
    pub last_update: String,
    /// Calibration help heading.
    pub calibration_title: String,
    /// Calibration help body.
    pub calibration_text: String,
    /// Filter note.
    pub moving_average: String,
    /// Status line prefix.
    pub system_status: String,
    /// Status line suffix.
    pub is_running: String,
}

impl DebugLabels {
    /// Build debug page labels in the translator's active locale.
    #[must_use]
    pub fn from_translator(translator: &Translator) -> Self {
        Self {
            channels: VACUUM_CHANNELS
                .iter()
                .map(|key| text(translator, key))
                .collect(),
            fields: DebugFields {
                raw_value: text(translator, "rawValue"),
                offset: text(translator, "offset"),
                instant_pressure: text(translator, "instantPressure"),
                samples_in_avg: text(translator, "samplesInAvg"),
            },
            debug_info: text(translator, "debugInfo"),
            last_update: text(translator, "lastUpdate"),
            calibration_title: text(translator, "calibrationTitle"),
            calibration_text: text(translator, "calibrationText"),
            moving_average: text(translator, "movingAverage"),
            system_status: text(translator, "systemStatus"),
            is_running: text(translator, "isRunning"),
        }
    }
}

/// One digital signal row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalRow {
    /// Numbered caption such as `Input 3`.
    pub name: String,
    /// Displayed state word.
    pub state: String,
}

/// Digital signals page labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalsLabels {
    /// Inputs section heading.
    pub inputs_title: String,
    /// Outputs section heading.
    pub outputs_title: String,
    /// Input rows.
    pub inputs: Vec<SignalRow>,
    /// Output rows.
    pub outputs: Vec<SignalRow>,
    /// Word for an energised signal.
    pub on: String,
    /// Word for a de-energised signal.
    pub off: String,
}

impl SignalsLabels {
    /// Build signals page labels in the translator's active locale.
    ///
    /// With no live feed every signal is shown in its off state.
    #[must_use]
    pub fn from_translator(translator: &Translator) -> Self {
        let off = text(translator, "statusOff");
        Self {
            inputs_title: text(translator, "digitalInputs"),
            outputs_title: text(translator, "digitalOutputs"),
            inputs: numbered_rows(translator.translate("input"), &off),
            outputs: numbered_rows(translator.translate("output"), &off),
            on: text(translator, "statusOn"),
            off,
        }
    }
}

/// Presentation of a signal row's state word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalState {
    /// Shows the localized "on" word.
    On,
    /// Shows the localized "off" word.
    Off,
}

impl SignalState {
    /// CSS modifier class for the state badge.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl SignalsLabels {
    /// Classify `row` by comparing its word with this locale's on/off words.
    ///
    /// Anything other than the "on" word is treated as off.
    #[must_use]
    pub fn state_of(&self, row: &SignalRow) -> SignalState {
        if row.state == self.on {
            SignalState::On
        } else {
            SignalState::Off
        }
    }

    /// Word shown for `state` in this locale.
    #[must_use]
    pub fn word(&self, state: SignalState) -> &str {
        match state {
            SignalState::On => &self.on,
            SignalState::Off => &self.off,
        }
    }
}

fn numbered_rows(prefix: &str, state: &str) -> Vec<SignalRow> {
    (1..=SIGNAL_COUNT)
        .map(|n| SignalRow {
            name: format!("{prefix} {n}"),
            state: state.to_string(),
        })
        .collect()
}

fn text(translator: &Translator, key: &str) -> String {
    translator.translate(key).to_string()
}
