//! Built-in tips used when no LLM is reachable.

use async_trait::async_trait;
use rand::prelude::IndexedRandom;

use super::EcoTipProvider;
use crate::core::error::Result;

/// Tips shipped with the binary.
pub const OFFLINE_TIPS: &[&str] = &[
    "Switch off standby devices at the wall; phantom load adds up to 10% of a home's bill.",
    "Wash clothes at 30°C. Most of a washing machine's energy goes into heating water.",
    "Carry a reusable bottle. One refill habit keeps hundreds of plastic bottles out of landfill each year.",
    "Rinse recyclables before binning them; food residue can spoil a whole batch.",
    "Lower your thermostat by one degree to cut heating emissions by roughly 8%.",
    "Plan meals before shopping. Around a third of all food produced is wasted.",
    "Swap one car trip a week for a bike ride or a walk.",
    "Repair before you replace: extending a phone's life by a year saves its manufacturing footprint.",
    "Compost vegetable scraps instead of sending them to landfill, where they release methane.",
    "Unplug chargers once devices are full.",
];

/// Picks a random built-in tip. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTips;

impl OfflineTips {
    /// Pick one tip synchronously.
    #[must_use]
    pub fn pick() -> &'static str {
        OFFLINE_TIPS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("Reduce, reuse, recycle.")
    }
}

#[async_trait]
impl EcoTipProvider for OfflineTips {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn tip(&self) -> Result<String> {
        Ok(Self::pick().to_string())
    }
}
