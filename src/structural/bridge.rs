// Pattern: Bridge
// Remotes (the abstraction) and devices (the implementation) vary
// independently: any remote drives any device through the `Device` trait.
// Every operation returns the line it would announce.

use crate::config::CatalogConfig;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceState {
    pub enabled: bool,
    pub channel: f64,
    pub volume: f64,
    pub channel_step: f64,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            enabled: false,
            channel: 1.0,
            volume: 10.0,
            channel_step: 1.0,
        }
    }
}

pub trait Device {
    fn name(&self) -> &'static str;
    fn state(&self) -> &DeviceState;
    fn state_mut(&mut self) -> &mut DeviceState;

    fn is_enabled(&self) -> bool {
        self.state().enabled
    }

    fn enable(&mut self) -> String {
        self.state_mut().enabled = true;
        format!("Turning on {}", self.name())
    }

    fn disable(&mut self) -> String {
        self.state_mut().enabled = false;
        format!("Turning off {}", self.name())
    }

    fn set_volume(&mut self, value: f64) -> String {
        if !self.is_enabled() {
            return turn_on_first(self.name());
        }
        let volume = value.max(0.0);
        self.state_mut().volume = volume;
        format!("Set {} volume: {}", self.name(), volume)
    }

    fn set_channel(&mut self, value: f64) -> String {
        if !self.is_enabled() {
            return turn_on_first(self.name());
        }
        let channel = value.max(0.0);
        self.state_mut().channel = channel;
        format!("Set {} channel: {}", self.name(), channel)
    }
}

fn turn_on_first(name: &str) -> String {
    format!("Please turn on the {} first", name)
}

#[derive(Debug, Default)]
pub struct Tv {
    state: DeviceState,
}

impl Tv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Device for Tv {
    fn name(&self) -> &'static str {
        "TV"
    }

    fn state(&self) -> &DeviceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DeviceState {
        &mut self.state
    }
}

#[derive(Debug)]
pub struct Radio {
    state: DeviceState,
}

impl Radio {
    pub fn new() -> Self {
        Self {
            state: DeviceState {
                channel: 99.0,
                channel_step: 0.2,
                ..DeviceState::default()
            },
        }
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Radio {
    fn name(&self) -> &'static str {
        "Radio"
    }

    fn state(&self) -> &DeviceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DeviceState {
        &mut self.state
    }
}

pub const VOLUME_STEP: f64 = 10.0;

pub struct Remote<D> {
    device: D,
}

impl<D: Device> Remote<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }
}

/// Operations every remote offers, written once against the device it drives.
pub trait RemoteControl {
    type Target: Device;

    fn device(&self) -> &Self::Target;
    fn device_mut(&mut self) -> &mut Self::Target;

    fn toggle_power(&mut self) -> String {
        let device = self.device_mut();
        if device.is_enabled() {
            device.disable()
        } else {
            device.enable()
        }
    }

    fn volume_up(&mut self) -> String {
        let volume = self.device().state().volume + VOLUME_STEP;
        self.device_mut().set_volume(volume)
    }

    fn volume_down(&mut self) -> String {
        let volume = self.device().state().volume - VOLUME_STEP;
        self.device_mut().set_volume(volume)
    }

    fn next_channel(&mut self) -> String {
        let state = self.device().state();
        let channel = state.channel + state.channel_step;
        self.device_mut().set_channel(channel)
    }

    fn previous_channel(&mut self) -> String {
        let state = self.device().state();
        let channel = state.channel - state.channel_step;
        self.device_mut().set_channel(channel)
    }
}

impl<D: Device> RemoteControl for Remote<D> {
    type Target = D;

    fn device(&self) -> &D {
        &self.device
    }

    fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

/// Extends the remote side without touching any device.
pub struct AdvancedRemote<D> {
    device: D,
}

impl<D: Device> AdvancedRemote<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn mute(&mut self) -> String {
        self.device.set_volume(0.0)
    }
}

impl<D: Device> RemoteControl for AdvancedRemote<D> {
    type Target = D;

    fn device(&self) -> &D {
        &self.device
    }

    fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

// Please turn on the TV first
// Turning on TV
// Set TV channel: 2
//
// Please turn on the Radio first
// Turning on Radio
// Set Radio channel: 99.2
// Set Radio volume: 0
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let mut tv_remote = Remote::new(Tv::new());
    writeln!(out, "{}", tv_remote.next_channel())?;
    writeln!(out, "{}", tv_remote.toggle_power())?;
    writeln!(out, "{}", tv_remote.next_channel())?;

    writeln!(out)?;
    let mut radio_remote = AdvancedRemote::new(Radio::new());
    writeln!(out, "{}", radio_remote.next_channel())?;
    writeln!(out, "{}", radio_remote.toggle_power())?;
    writeln!(out, "{}", radio_remote.next_channel())?;
    writeln!(out, "{}", radio_remote.mute())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_device_ignores_commands() {
        let mut remote = Remote::new(Tv::new());
        assert_eq!(remote.volume_up(), "Please turn on the TV first");
        assert_eq!(remote.device().state().volume, 10.0);
    }

    #[test]
    fn test_volume_clamps_at_zero() {
        let mut remote = Remote::new(Tv::new());
        remote.toggle_power();
        assert_eq!(remote.volume_down(), "Set TV volume: 0");
        assert_eq!(remote.volume_down(), "Set TV volume: 0");
        assert_eq!(remote.volume_up(), "Set TV volume: 10");
    }

    #[test]
    fn test_channel_clamps_at_zero() {
        let mut remote = Remote::new(Tv::new());
        remote.toggle_power();
        assert_eq!(remote.previous_channel(), "Set TV channel: 0");
        assert_eq!(remote.previous_channel(), "Set TV channel: 0");
    }

    #[test]
    fn test_radio_steps() {
        let mut remote = AdvancedRemote::new(Radio::new());
        remote.toggle_power();
        assert_eq!(remote.next_channel(), "Set Radio channel: 99.2");
        assert_eq!(remote.mute(), "Set Radio volume: 0");
    }

    #[test]
    fn test_toggle_power_twice() {
        let mut remote = Remote::new(Radio::new());
        assert_eq!(remote.toggle_power(), "Turning on Radio");
        assert_eq!(remote.toggle_power(), "Turning off Radio");
        assert!(!remote.device().is_enabled());
    }

    fn surf(remote: &mut impl RemoteControl) -> Vec<String> {
        vec![
            remote.toggle_power(),
            remote.next_channel(),
            remote.volume_up(),
            remote.previous_channel(),
        ]
    }

    #[test]
    fn test_both_remotes_share_operations() {
        let basic = surf(&mut Remote::new(Radio::new()));
        let mut advanced_remote = AdvancedRemote::new(Radio::new());
        let advanced = surf(&mut advanced_remote);

        assert_eq!(basic, advanced);
        assert_eq!(
            advanced,
            [
                "Turning on Radio",
                "Set Radio channel: 99.2",
                "Set Radio volume: 20",
                "Set Radio channel: 99",
            ]
        );
        assert_eq!(advanced_remote.mute(), "Set Radio volume: 0");
        assert_eq!(advanced_remote.device().state().volume, 0.0);
    }
}
