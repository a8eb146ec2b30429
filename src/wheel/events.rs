//! Messages exchanged between the wheel and its collaborators.

use log::debug;
use std::sync::mpsc::Sender;

use super::assignment::AssignmentPass;
use crate::rewards::RewardDefinition;

/// Inbound events that drive the wheel.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    /// The player moved to a new zone (1-based).
    ZoneChanged { new_zone: u32 },
    /// A spin finished and the wheel should be refilled.
    WheelStopped,
    /// The reward definitions were reloaded.
    CatalogReloaded(Vec<RewardDefinition>),
}

/// Outbound notification carrying a freshly computed pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotsChanged {
    pub zone: u32,
    pub pass: AssignmentPass,
}

/// Receives new slot assignments, typically the presentation layer.
pub trait SlotsListener {
    fn on_slots_changed(&mut self, update: &SlotsChanged);
}

impl<F> SlotsListener for F
where
    F: FnMut(&SlotsChanged),
{
    fn on_slots_changed(&mut self, update: &SlotsChanged) {
        self(update)
    }
}

/// Forwards updates over an `mpsc` channel.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: Sender<SlotsChanged>,
}

impl ChannelListener {
    pub fn new(sender: Sender<SlotsChanged>) -> Self {
        Self { sender }
    }
}

impl SlotsListener for ChannelListener {
    fn on_slots_changed(&mut self, update: &SlotsChanged) {
        if self.sender.send(update.clone()).is_err() {
            debug!("Slots listener channel closed; dropping update for zone {}", update.zone);
        }
    }
}

/// Discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl SlotsListener for NoopListener {
    fn on_slots_changed(&mut self, _update: &SlotsChanged) {}
}
