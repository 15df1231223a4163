//! Tracked wear components: elements, thermocouples, and relays.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Which wear component of the kiln.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Elements,
    Thermocouples,
    Relays,
}

impl ComponentKind {
    pub const ALL: [Self; 3] = [Self::Elements, Self::Thermocouples, Self::Relays];

    pub fn name(self) -> &'static str {
        match self {
            Self::Elements => "elements",
            Self::Thermocouples => "thermocouples",
            Self::Relays => "relays",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "elements" => Ok(Self::Elements),
            "thermocouples" => Ok(Self::Thermocouples),
            "relays" => Ok(Self::Relays),
            other => Err(format!(
                "unknown component '{other}' (expected elements, thermocouples, or relays)"
            )),
        }
    }
}

/// One tracked component: install date, lifetime firing count, rated life.
///
/// The count advances by one for every firing logged, in lockstep across
/// all components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed: Option<Date>,

    pub firing_count: u32,

    /// Rated life in firings. Must be nonzero for health classification.
    pub max_life: u32,
}

impl HardwareComponent {
    pub fn new(max_life: u32) -> Self {
        Self {
            installed: None,
            firing_count: 0,
            max_life,
        }
    }
}

/// The full set of tracked components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareSet {
    pub elements: HardwareComponent,
    pub thermocouples: HardwareComponent,
    pub relays: HardwareComponent,
}

impl Default for HardwareSet {
    /// Stock rated lives: elements 300, thermocouples 1000, relays 500.
    fn default() -> Self {
        Self {
            elements: HardwareComponent::new(300),
            thermocouples: HardwareComponent::new(1000),
            relays: HardwareComponent::new(500),
        }
    }
}

impl HardwareSet {
    pub fn get(&self, kind: ComponentKind) -> &HardwareComponent {
        match kind {
            ComponentKind::Elements => &self.elements,
            ComponentKind::Thermocouples => &self.thermocouples,
            ComponentKind::Relays => &self.relays,
        }
    }

    pub(crate) fn get_mut(&mut self, kind: ComponentKind) -> &mut HardwareComponent {
        match kind {
            ComponentKind::Elements => &mut self.elements,
            ComponentKind::Thermocouples => &mut self.thermocouples,
            ComponentKind::Relays => &mut self.relays,
        }
    }

    /// Advances every component's firing count by one.
    #[must_use]
    pub fn after_firing(mut self) -> Self {
        for kind in ComponentKind::ALL {
            let component = self.get_mut(kind);
            component.firing_count += 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_rated_lives() {
        let hardware = HardwareSet::default();
        assert_eq!(hardware.elements.max_life, 300);
        assert_eq!(hardware.thermocouples.max_life, 1000);
        assert_eq!(hardware.relays.max_life, 500);
    }

    #[test]
    fn after_firing_advances_all_components_in_lockstep() {
        let hardware = HardwareSet::default().after_firing().after_firing();
        for kind in ComponentKind::ALL {
            assert_eq!(hardware.get(kind).firing_count, 2);
        }
    }

    #[test]
    fn component_parses_case_insensitively() {
        assert_eq!(
            "Relays".parse::<ComponentKind>().unwrap(),
            ComponentKind::Relays
        );
        assert!("element".parse::<ComponentKind>().is_err());
    }
}
