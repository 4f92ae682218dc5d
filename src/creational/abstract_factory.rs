// Pattern: Abstract Factory
// A factory per platform family; the application only ever sees the traits,
// so a button and a text area always come from the same family.

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::platform::Platform;
use std::io::Write;
use tracing::debug;

pub trait Button {
    fn design(&self) -> String;
}

pub trait TextArea {
    fn design(&self) -> String;
}

pub trait GuiFactory {
    fn family(&self) -> &'static str;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_text_area(&self) -> Box<dyn TextArea>;
}

macro_rules! widget_family {
    ($factory:ident, $button:ident, $text_area:ident, $family:literal) => {
        pub struct $button;

        impl Button for $button {
            fn design(&self) -> String {
                format!("Here are some instructions of how to draw {} button", $family)
            }
        }

        pub struct $text_area;

        impl TextArea for $text_area {
            fn design(&self) -> String {
                format!("Here are some instructions of how to draw {} text area", $family)
            }
        }

        pub struct $factory;

        impl GuiFactory for $factory {
            fn family(&self) -> &'static str {
                $family
            }

            fn create_button(&self) -> Box<dyn Button> {
                Box::new($button)
            }

            fn create_text_area(&self) -> Box<dyn TextArea> {
                Box::new($text_area)
            }
        }
    };
}

widget_family!(WinFactory, WinButton, WinTextArea, "windows");
widget_family!(LinuxFactory, LinuxButton, LinuxTextArea, "linux");
widget_family!(MacFactory, MacButton, MacTextArea, "mac");

pub fn factory_for(platform: Platform) -> Box<dyn GuiFactory> {
    match platform {
        Platform::Linux => Box::new(LinuxFactory),
        Platform::Windows => Box::new(WinFactory),
        Platform::MacOs => Box::new(MacFactory),
    }
}

pub struct Application {
    button: Box<dyn Button>,
    text_area: Box<dyn TextArea>,
    creation_log: Vec<String>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        let family = factory.family();
        debug!(family, "building application widgets");
        Self {
            button: factory.create_button(),
            text_area: factory.create_text_area(),
            creation_log: vec![
                format!("Creating {} button", family),
                format!("Creating {} text area element", family),
            ],
        }
    }

    pub fn creation_log(&self) -> &[String] {
        &self.creation_log
    }

    pub fn draw(&self) -> Vec<String> {
        vec![self.button.design(), self.text_area.design()]
    }
}

// On Linux:
// Creating linux button
// Creating linux text area element
// Here are some instructions of how to draw linux button
// Here are some instructions of how to draw linux text area
pub fn demo(config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let factory = factory_for(config.platform()?);
    let app = Application::new(factory.as_ref());

    for line in app.creation_log().iter().chain(app.draw().iter()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
