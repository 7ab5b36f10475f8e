use std::sync::Arc;

use clap::ValueEnum;
use ewaste_core::{
    filter::FilterCriteria,
    model::{Facet, Location},
    service::LocatorService,
};

use crate::content::{self, Setting, SettingKind};
use crate::input::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Tab {
    Map,
    Search,
    Scanner,
    Awareness,
    Profile,
}

impl Tab {
    pub(crate) const ALL: [Tab; 5] = [
        Tab::Map,
        Tab::Search,
        Tab::Scanner,
        Tab::Awareness,
        Tab::Profile,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Tab::Map => "Map",
            Tab::Search => "Search",
            Tab::Scanner => "Scanner",
            Tab::Awareness => "Awareness",
            Tab::Profile => "Profile",
        }
    }

    pub(crate) fn index(self) -> usize {
        Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    pub(crate) fn next(self) -> Tab {
        Tab::ALL
            .get((self.index() + 1) % Tab::ALL.len())
            .copied()
            .unwrap_or(Tab::Map)
    }

    pub(crate) fn previous(self) -> Tab {
        let index = self.index().checked_sub(1).unwrap_or(Tab::ALL.len() - 1);
        Tab::ALL.get(index).copied().unwrap_or(Tab::Map)
    }

    /// Tab bound to the digit keys `1`..`5`.
    pub(crate) fn from_digit(digit: char) -> Option<Tab> {
        let position = digit.to_digit(10)?.checked_sub(1)?;
        Tab::ALL.get(usize::try_from(position).ok()?).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchFocus {
    Query,
    Services,
    Items,
    Results,
}

impl SearchFocus {
    pub(crate) fn down(self) -> SearchFocus {
        match self {
            SearchFocus::Query => SearchFocus::Services,
            SearchFocus::Services => SearchFocus::Items,
            SearchFocus::Items | SearchFocus::Results => SearchFocus::Results,
        }
    }

    pub(crate) fn up(self) -> SearchFocus {
        match self {
            SearchFocus::Query | SearchFocus::Services => SearchFocus::Query,
            SearchFocus::Items => SearchFocus::Services,
            SearchFocus::Results => SearchFocus::Items,
        }
    }

    pub(crate) fn facet(self) -> Option<Facet> {
        match self {
            SearchFocus::Services => Some(Facet::Service),
            SearchFocus::Items => Some(Facet::AcceptedItem),
            SearchFocus::Query | SearchFocus::Results => None,
        }
    }
}

pub(crate) struct App {
    pub service: Arc<LocatorService>,

    pub tab: Tab,
    pub map_index: usize,

    pub criteria: FilterCriteria,
    pub focus: SearchFocus,
    pub service_chip: usize,
    pub item_chip: usize,
    pub results: Vec<Location>,
    pub result_index: usize,

    pub tip_index: usize,

    pub settings: Vec<Setting>,
    pub setting_index: usize,

    pub notice: Option<String>,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<LocatorService>, tab: Tab) -> Self {
        let results = service.locations().to_vec();
        Self {
            service,
            tab,
            map_index: 0,
            criteria: FilterCriteria::default(),
            focus: SearchFocus::Query,
            service_chip: 0,
            item_chip: 0,
            results,
            result_index: 0,
            tip_index: 0,
            settings: content::default_settings(),
            setting_index: 0,
            notice: None,
            error_message: None,
        }
    }

    /// Whether key presses are currently text input for the search box.
    pub(crate) fn is_typing(&self) -> bool {
        self.tab == Tab::Search && self.focus == SearchFocus::Query
    }

    pub(crate) fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::debug!(from = self.tab.title(), to = tab.title(), "Switched tab");
        }
        self.tab = tab;
        self.notice = None;
        self.error_message = None;
    }

    pub(crate) fn apply(&mut self, action: Action) {
        match action {
            Action::None | Action::Quit => {}
            Action::Refilter => self.refresh_results(),
            Action::ShowResultOnMap => self.show_result_on_map(),
        }
    }

    /// Recompute the search results from scratch for the current criteria.
    pub(crate) fn refresh_results(&mut self) {
        self.results = self
            .service
            .search(&self.criteria)
            .into_iter()
            .cloned()
            .collect();
        if self.result_index >= self.results.len() {
            self.result_index = self.results.len().saturating_sub(1);
        }
    }

    pub(crate) fn chip_index(&self, facet: Facet) -> usize {
        match facet {
            Facet::Service => self.service_chip,
            Facet::AcceptedItem => self.item_chip,
        }
    }

    pub(crate) fn move_chip(&mut self, facet: Facet, forward: bool) {
        let last = facet.candidates().len().saturating_sub(1);
        let current = self.chip_index(facet);
        let moved = if forward {
            (current + 1).min(last)
        } else {
            current.saturating_sub(1)
        };
        match facet {
            Facet::Service => self.service_chip = moved,
            Facet::AcceptedItem => self.item_chip = moved,
        }
    }

    /// Toggle the chip under the cursor of the focused facet row.
    pub(crate) fn toggle_focused_chip(&mut self) -> bool {
        let Some(facet) = self.focus.facet() else {
            return false;
        };
        let Some(label) = facet.candidates().get(self.chip_index(facet)) else {
            return false;
        };
        let selected = self.criteria.selection_mut(facet).toggle(label);
        tracing::debug!(%facet, label, selected, "Toggled filter chip");
        true
    }

    pub(crate) fn clear_filters(&mut self) {
        self.criteria.clear();
        self.result_index = 0;
    }

    pub(crate) fn show_result_on_map(&mut self) {
        let Some(id) = self.results.get(self.result_index).map(|loc| loc.id.clone()) else {
            self.error_message = Some("No result selected".into());
            return;
        };

        let position = match self.service.location(&id) {
            Ok(location) => self
                .service
                .locations()
                .iter()
                .position(|candidate| candidate.id == location.id),
            Err(err) => {
                self.error_message = Some(format!("Cannot show on map: {err}"));
                return;
            }
        };

        self.map_index = position.unwrap_or(0);
        self.switch_tab(Tab::Map);
    }

    pub(crate) fn start_scan(&mut self) {
        tracing::debug!("Scanner requested");
        self.notice = Some(content::SCANNER_NOTICE.into());
    }

    pub(crate) fn activate_setting(&mut self) {
        let Some(setting) = self.settings.get_mut(self.setting_index) else {
            return;
        };
        match setting.kind {
            SettingKind::Switch(enabled) => {
                setting.kind = SettingKind::Switch(!enabled);
                tracing::debug!(setting = setting.label, enabled = !enabled, "Toggled setting");
                self.notice = Some(format!("{}: {}", setting.label, setting.value_label()));
            }
            SettingKind::Link => {
                self.notice = Some(content::HELP_NOTICE.into());
            }
        }
    }

    pub(crate) fn selected_map_location(&self) -> Option<&Location> {
        self.service.locations().get(self.map_index)
    }
}
