//! Built-in template sets.

pub mod catalog;
pub mod novice;
pub mod standard;

use palette_model::{DeviceDescriptor, Element};

use crate::blocks::{block, gap};

/// Entry-point blocks offered by a connected device.
pub(crate) fn device_events(device: &DeviceDescriptor) -> Vec<Element> {
    let mut blocks: Vec<Element> = device
        .event_blocks
        .iter()
        .map(|opcode| block(opcode))
        .collect();
    if !blocks.is_empty() {
        blocks.push(gap());
    }
    blocks
}
