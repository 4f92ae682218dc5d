// Pattern: Factory Method
// `Dialog::draw` is shared; each dialog decides which button it creates.

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};
use crate::platform::Platform;
use std::io::Write;

pub trait Button {
    fn height(&self) -> u32;
    fn weight(&self) -> u32;
    fn color(&self) -> &'static str;
}

pub struct WinButton;

impl Button for WinButton {
    fn height(&self) -> u32 {
        10
    }

    fn weight(&self) -> u32 {
        20
    }

    fn color(&self) -> &'static str {
        "Blue"
    }
}

pub struct LinuxButton;

impl Button for LinuxButton {
    fn height(&self) -> u32 {
        15
    }

    fn weight(&self) -> u32 {
        25
    }

    fn color(&self) -> &'static str {
        "Grey"
    }
}

pub trait Dialog {
    /// The factory method.
    fn create_button(&self) -> Box<dyn Button>;

    fn draw(&self) -> String {
        let button = self.create_button();
        format!(
            "Drawing button. Height: {}, Weight: {}, Color: {}",
            button.height(),
            button.weight(),
            button.color()
        )
    }
}

pub struct WinDialog;

impl Dialog for WinDialog {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }
}

pub struct LinuxDialog;

impl Dialog for LinuxDialog {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LinuxButton)
    }
}

pub fn dialog_for(platform: Platform) -> Result<Box<dyn Dialog>> {
    match platform {
        Platform::Linux => Ok(Box::new(LinuxDialog)),
        Platform::Windows => Ok(Box::new(WinDialog)),
        Platform::MacOs => Err(PatternError::UnsupportedPlatform(platform.to_string())),
    }
}

// On Linux:
// Drawing button. Height: 15, Weight: 25, Color: Grey
// On macOS:
// Unsupported platform: 'MacOS'
pub fn demo(config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    match dialog_for(config.platform()?) {
        Ok(dialog) => writeln!(out, "{}", dialog.draw())?,
        Err(err) => writeln!(out, "{}", err)?,
    }
    Ok(())
}
