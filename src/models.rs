//! Frontend Models
//!
//! Shopping items and navigation destinations.

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// A shopping list entry: raw text only
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShoppingItem(String);

impl ShoppingItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShoppingItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Profile,
    Setting,
}

/// Destinations shown in the bottom bar
pub const BOTTOM_BAR_SCREENS: &[Screen] = &[Screen::Home, Screen::Profile];

/// Destinations shown in the drawer
pub const DRAWER_SCREENS: &[Screen] = &[Screen::Setting];

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Profile, Screen::Setting];

    pub fn route(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Profile => "profile",
            Screen::Setting => "setting",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Shopping List",
            Screen::Profile => "Profile",
            Screen::Setting => "Settings",
        }
    }

    /// Icon glyph
    pub fn icon(self) -> &'static str {
        match self {
            Screen::Home => "🏠",
            Screen::Profile => "👤",
            Screen::Setting => "⚙️",
        }
    }

    pub fn is_bottom_bar(self) -> bool {
        BOTTOM_BAR_SCREENS.contains(&self)
    }

    /// Parse a route id, unknown ids land on Home
    pub fn from_route(route: &str) -> Self {
        route.parse().unwrap_or_else(|e: RouteError| {
            log::warn!("[NAV] {}, falling back to home", e);
            Screen::Home
        })
    }
}

impl FromStr for Screen {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.route() == s)
            .ok_or_else(|| RouteError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}
