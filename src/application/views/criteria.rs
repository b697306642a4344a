//! User-selected narrowing applied on top of the scope filter

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{DeviceStatus, DomainError, Olt, Onu, OnuMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Online,
    Offline,
}

impl StatusFilter {
    pub fn matches(&self, status: DeviceStatus) -> bool {
        match self {
            Self::All => true,
            Self::Online => status == DeviceStatus::Online,
            Self::Offline => status == DeviceStatus::Offline,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            other => Err(DomainError::Validation(format!("unknown status filter '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeFilter {
    #[default]
    All,
    Bridge,
    Pppoe,
}

impl ModeFilter {
    pub fn matches(&self, mode: OnuMode) -> bool {
        match self {
            Self::All => true,
            Self::Bridge => mode == OnuMode::Bridge,
            Self::Pppoe => mode == OnuMode::Pppoe,
        }
    }
}

impl FromStr for ModeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "bridge" => Ok(Self::Bridge),
            "pppoe" => Ok(Self::Pppoe),
            other => Err(DomainError::Validation(format!("unknown mode filter '{other}'"))),
        }
    }
}

/// Owning-OLT selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OltSelection {
    #[default]
    All,
    Only(String),
}

impl OltSelection {
    pub fn matches(&self, olt_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == olt_id,
        }
    }
}

/// Three independent predicates, ANDed. The default passes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OnuFilter {
    pub status: StatusFilter,
    pub mode: ModeFilter,
    pub olt: OltSelection,
}

impl OnuFilter {
    pub fn by_status(status: StatusFilter) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn by_mode(mode: ModeFilter) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_olt(mut self, olt_id: impl Into<String>) -> Self {
        self.olt = OltSelection::Only(olt_id.into());
        self
    }

    /// Whether any predicate narrows the list (drives the filter badge).
    pub fn is_active(&self) -> bool {
        self != &Self::default()
    }

    pub fn matches(&self, onu: &Onu) -> bool {
        self.status.matches(onu.status) && self.mode.matches(onu.mode) && self.olt.matches(&onu.olt_id)
    }

    pub fn apply(&self, onus: &[Onu]) -> Vec<Onu> {
        onus.iter().filter(|onu| self.matches(onu)).cloned().collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OltFilter {
    pub status: StatusFilter,
}

impl OltFilter {
    pub fn apply(&self, olts: &[Olt]) -> Vec<Olt> {
        olts.iter()
            .filter(|olt| self.status.matches(olt.status))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    fn onu(id: &str, status: DeviceStatus, mode: OnuMode, olt_id: &str) -> Onu {
        let mut onu = seed::onus().remove(1);
        onu.id = id.into();
        onu.status = status;
        onu.mode = mode;
        onu.olt_id = olt_id.into();
        onu
    }

    fn fleet() -> Vec<Onu> {
        use DeviceStatus::*;
        use OnuMode::*;
        vec![
            onu("a", Online, Bridge, "1"),
            onu("b", Online, Pppoe, "1"),
            onu("c", Offline, Bridge, "2"),
            onu("d", Offline, Pppoe, "2"),
            onu("e", Online, Bridge, "2"),
        ]
    }

    fn ids(onus: &[Onu]) -> Vec<&str> {
        onus.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn default_filter_passes_everything() {
        let filter = OnuFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&fleet()), fleet());
    }

    #[test]
    fn combined_filter_is_intersection_of_single_filters() {
        let onus = fleet();
        let combined = OnuFilter {
            status: StatusFilter::Online,
            mode: ModeFilter::Bridge,
            olt: OltSelection::All,
        }
        .apply(&onus);

        let online = OnuFilter::by_status(StatusFilter::Online).apply(&onus);
        let bridge = OnuFilter::by_mode(ModeFilter::Bridge).apply(&onus);
        let intersection: Vec<Onu> = online.into_iter().filter(|o| bridge.contains(o)).collect();

        assert_eq!(combined, intersection);
        assert_eq!(ids(&combined), vec!["a", "e"]);
    }

    #[test]
    fn olt_selection_narrows_by_owner() {
        let filter = OnuFilter::by_status(StatusFilter::Offline).with_olt("2");
        assert!(filter.is_active());
        assert_eq!(ids(&filter.apply(&fleet())), vec!["c", "d"]);
        assert!(filter.apply(&fleet()).iter().all(|o| o.olt_id == "2"));
    }

    #[test]
    fn parses_route_parameters() {
        assert_eq!("offline".parse::<StatusFilter>().unwrap(), StatusFilter::Offline);
        assert_eq!("PPPoE".parse::<ModeFilter>().unwrap(), ModeFilter::Pppoe);
        assert!("maybe".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn olt_filter_by_status() {
        let mut olts = seed::olts();
        olts[1].status = DeviceStatus::Offline;
        let filter = OltFilter {
            status: StatusFilter::Offline,
        };
        assert_eq!(filter.apply(&olts).len(), 1);
    }
}
