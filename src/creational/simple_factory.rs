// Pattern: Simple Factory
// One function with one branch per product, chosen by a runtime key.

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};
use std::io::Write;
use tracing::debug;

pub trait User {
    fn role(&self) -> &'static str;
    fn created_message(&self) -> String;
}

pub struct SimpleUser;

impl User for SimpleUser {
    fn role(&self) -> &'static str {
        "user"
    }

    fn created_message(&self) -> String {
        "Created simple user".to_string()
    }
}

pub struct Customer;

impl User for Customer {
    fn role(&self) -> &'static str {
        "customer"
    }

    fn created_message(&self) -> String {
        "Created customer user".to_string()
    }
}

pub struct Admin;

impl User for Admin {
    fn role(&self) -> &'static str {
        "admin"
    }

    fn created_message(&self) -> String {
        "Created admin user".to_string()
    }
}

pub struct UserFactory {
    user_type: String,
}

impl UserFactory {
    pub fn new(user_type: impl Into<String>) -> Self {
        Self {
            user_type: user_type.into(),
        }
    }

    pub fn create(&self) -> Result<Box<dyn User>> {
        let user: Box<dyn User> = match self.user_type.as_str() {
            "user" => Box::new(SimpleUser),
            "customer" => Box::new(Customer),
            "admin" => Box::new(Admin),
            other => return Err(PatternError::UnknownUserType(other.to_string())),
        };
        debug!(role = user.role(), "user created");
        Ok(user)
    }
}

// Created admin user
// Created simple user
// Created customer user
// Wrong user type: 'guest'
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    for kind in ["admin", "user", "customer"] {
        let user = UserFactory::new(kind).create()?;
        writeln!(out, "{}", user.created_message())?;
    }

    if let Err(err) = UserFactory::new("guest").create() {
        writeln!(out, "{}", err)?;
    }

    Ok(())
}
