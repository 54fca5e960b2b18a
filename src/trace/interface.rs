// Interface for any source of demand which feeds applications into the simulation.

use crate::core::application::Application;
use crate::core::errors::InvalidDemand;

// DemandSource is polled exactly once per tick. Returning None means no application arrives at
// this tick. Sources issue application ids themselves, ids must be unique and increasing.
pub trait DemandSource {
    fn next_demand(&mut self, tick: u64) -> Result<Option<Application>, InvalidDemand>;

    // Number of known arrivals not yet handed out. Generated demand has none.
    fn pending_events(&self) -> usize {
        0
    }
}
