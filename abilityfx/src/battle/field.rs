use crate::battle::{
    Terrain,
    Weather,
};

/// The battlefield shared by every creature.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Field {
    pub weather: Option<Weather>,
    pub weather_turns: Option<u8>,
    pub terrain: Option<Terrain>,
    pub terrain_turns: Option<u8>,
    /// Abilities flagged as ignorable have no effect while set.
    pub ignore_abilities: bool,
    pub turn: u64,
}

impl Field {
    pub fn has_weather(&self, weather: Weather) -> bool {
        self.weather == Some(weather)
    }

    pub fn has_terrain(&self, terrain: Terrain) -> bool {
        self.terrain == Some(terrain)
    }
}
