pub mod params;

pub use params::{PresetBundle, SimulationParameters};
