//! Application state

use fitstat_core::{
    AttributeSnapshot, AttributeTable, CalculatorConstants, DamageProfile, StatsCalculator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Stats,
    Defense,
    Attributes,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Stats, Tab::Defense, Tab::Attributes, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Stats => "Stats",
            Tab::Defense => "Defense",
            Tab::Attributes => "Attributes",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub snapshot: AttributeSnapshot,
    pub constants: CalculatorConstants,
    /// Named damage profiles; never empty
    pub profiles: Vec<(String, DamageProfile)>,
    pub selected_profile: usize,
    pub attribute_scroll: usize,
}

impl App {
    pub fn new(
        snapshot: AttributeSnapshot,
        constants: CalculatorConstants,
        mut profiles: Vec<(String, DamageProfile)>,
    ) -> Self {
        if profiles.is_empty() {
            profiles.push(("Uniform".to_string(), DamageProfile::uniform()));
        }
        App {
            current_tab: Tab::Stats,
            snapshot,
            constants,
            profiles,
            selected_profile: 0,
            attribute_scroll: 0,
        }
    }

    /// A calculator over the loaded snapshot. Built per frame, never cached.
    pub fn calculator(&self) -> StatsCalculator<'_, AttributeTable> {
        StatsCalculator::new(&self.snapshot.attributes).with_constants(self.constants)
    }

    pub fn profile(&self) -> &(String, DamageProfile) {
        &self.profiles[self.selected_profile]
    }

    /// Select a profile by name, if it exists
    pub fn select_profile(&mut self, name: &str) -> bool {
        match self.profiles.iter().position(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(index) => {
                self.selected_profile = index;
                true
            }
            None => false,
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Stats
        } else {
            Tab::Help
        };
    }

    pub fn next_profile(&mut self) {
        self.selected_profile = (self.selected_profile + 1) % self.profiles.len();
    }

    pub fn prev_profile(&mut self) {
        let len = self.profiles.len();
        self.selected_profile = (self.selected_profile + len - 1) % len;
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Defense => self.prev_profile(),
            Tab::Attributes => self.attribute_scroll = self.attribute_scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Defense => self.next_profile(),
            Tab::Attributes => {
                let max = self.snapshot.attributes.len().saturating_sub(1);
                self.attribute_scroll = (self.attribute_scroll + 1).min(max);
            }
            _ => {}
        }
    }
}

/// Overlay extra profiles on a base list. Entries with a matching name
/// (case-insensitive) replace the base entry in place; the rest are appended.
pub fn merge_profiles(
    mut base: Vec<(String, DamageProfile)>,
    extra: Vec<(String, DamageProfile)>,
) -> Vec<(String, DamageProfile)> {
    for (name, profile) in extra {
        match base.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some(entry) => *entry = (name, profile),
            None => base.push((name, profile)),
        }
    }
    base
}
