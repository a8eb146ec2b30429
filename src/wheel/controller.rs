//! Wheel controller: turns inbound events into assignment passes.

use log::{info, warn};
use rand::Rng;

use super::assignment::{AssignmentPass, SlotAssigner};
use super::events::{SlotsChanged, SlotsListener, WheelEvent};
use crate::config::{CatalogFile, WheelConfig};
use crate::core::constants::{DEFAULT_SLOT_COUNT, FIRST_ZONE};
use crate::core::error::{WheelError, WheelResult};
use crate::rewards::RewardCatalogIndex;
use crate::zones::ZoneRules;

/// Owns the catalog and configuration of one wheel and notifies a listener
/// whenever the slots are refilled.
pub struct Wheel<L: SlotsListener> {
    catalog: RewardCatalogIndex,
    config: WheelConfig,
    rules: ZoneRules,
    listener: L,
    /// Last zone received through `ZoneChanged`
    live_zone: u32,
}

impl<L: SlotsListener> Wheel<L> {
    pub fn new(catalog: RewardCatalogIndex, config: WheelConfig, listener: L) -> Self {
        if config.slot_count != DEFAULT_SLOT_COUNT {
            warn!(
                "Wheel configured with {} slots, expected {}",
                config.slot_count, DEFAULT_SLOT_COUNT
            );
        }
        if config.slices.len() > config.slot_count {
            warn!(
                "{} slice constraints configured for {} slots; extras are ignored",
                config.slices.len(),
                config.slot_count
            );
        }

        Self {
            rules: config.rules(),
            catalog,
            config,
            listener,
            live_zone: FIRST_ZONE,
        }
    }

    /// Builds the catalog index from a catalog file, then the wheel.
    pub fn from_config(
        catalog: CatalogFile,
        config: WheelConfig,
        listener: L,
    ) -> WheelResult<Self> {
        Ok(Self::new(catalog.into_index()?, config, listener))
    }

    pub fn catalog(&self) -> &RewardCatalogIndex {
        &self.catalog
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn rules(&self) -> &ZoneRules {
        &self.rules
    }

    pub fn live_zone(&self) -> u32 {
        self.live_zone
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Handles one inbound event.
    ///
    /// Returns the new pass for zone and spin events, `None` for a catalog
    /// reload. The listener only hears about passes that completed.
    pub fn handle_event(
        &mut self,
        event: WheelEvent,
        rng: &mut impl Rng,
    ) -> WheelResult<Option<AssignmentPass>> {
        match event {
            WheelEvent::ZoneChanged { new_zone } => {
                if new_zone < FIRST_ZONE {
                    return Err(WheelError::InvalidZone(new_zone));
                }
                self.live_zone = new_zone;
                self.refill(new_zone, rng).map(Some)
            }
            WheelEvent::WheelStopped => {
                let zone = self.config.wheel_stopped_zone.unwrap_or(self.live_zone);
                self.refill(zone, rng).map(Some)
            }
            WheelEvent::CatalogReloaded(definitions) => {
                self.catalog.rebuild(definitions)?;
                Ok(None)
            }
        }
    }

    /// Runs one assignment pass for `zone` and notifies the listener.
    pub fn refill(&mut self, zone: u32, rng: &mut impl Rng) -> WheelResult<AssignmentPass> {
        let pass = SlotAssigner::new(&self.catalog, &self.rules).assign(
            zone,
            self.config.slot_count,
            &self.config.slices,
            rng,
        )?;

        if pass.has_warnings() {
            info!(
                "Zone {} refilled with {} warning(s)",
                zone,
                pass.warnings.len()
            );
        }

        let update = SlotsChanged {
            zone,
            pass: pass.clone(),
        };
        self.listener.on_slots_changed(&update);
        Ok(pass)
    }
}
