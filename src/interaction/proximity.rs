use glam::Vec3;
use log::debug;

use super::ui::{Toggle, UiEvent, UiSink};
use crate::config::ProximityStation;

/// Shows scene displays while the camera stands near their station
#[derive(Debug, Clone)]
pub struct ProximityTracker {
    stations: Vec<(ProximityStation, Toggle)>,
}

impl ProximityTracker {
    pub fn new(stations: Vec<ProximityStation>) -> Self {
        Self {
            stations: stations.into_iter().map(|s| (s, Toggle::default())).collect(),
        }
    }

    pub fn update<U: UiSink + ?Sized>(&mut self, position: Vec3, ui: &mut U) {
        for (station, toggle) in &mut self.stations {
            let near = position.distance(Vec3::from_array(station.center)) < station.radius;
            if !toggle.set(near) {
                continue;
            }
            debug!("Station {:?} {}", station.displays, if near { "entered" } else { "left" });
            for display in &station.displays {
                ui.notify(if near {
                    UiEvent::ShowStationDisplay(display.clone())
                } else {
                    UiEvent::HideStationDisplay(display.clone())
                });
            }
        }
    }

    /// Displays currently shown
    pub fn active_displays(&self) -> impl Iterator<Item = &str> {
        self.stations
            .iter()
            .filter(|(_, toggle)| toggle.is_visible())
            .flat_map(|(station, _)| station.displays.iter().map(String::as_str))
    }
}
