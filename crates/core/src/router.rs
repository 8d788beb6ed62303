//! Page selection and the cart overlay flag.
//!
//! Every page is reachable from every other page; there are no timed or
//! automatic transitions and no terminal page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Calendar,
    Fundraisers,
    Sports,
    Store,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Calendar,
        Self::Fundraisers,
        Self::Sports,
        Self::Store,
        Self::Contact,
    ];

    /// Stable key, e.g. `"calendar"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Calendar => "calendar",
            Self::Fundraisers => "fundraisers",
            Self::Sports => "sports",
            Self::Store => "store",
            Self::Contact => "contact",
        }
    }

    /// Navigation label, e.g. `"Calendar"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Calendar => "Calendar",
            Self::Fundraisers => "Fundraisers",
            Self::Sports => "Sports",
            Self::Store => "Store",
            Self::Contact => "Contact",
        }
    }

    /// URL path the page is served from.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Calendar => "/calendar",
            Self::Fundraisers => "/fundraisers",
            Self::Sports => "/sports",
            Self::Store => "/store",
            Self::Contact => "/contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when parsing a page key that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.key() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Holds the currently selected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewRouter {
    current: Page,
}

impl ViewRouter {
    #[must_use]
    pub const fn current(&self) -> Page {
        self.current
    }

    /// Select a page. Returns the previously selected page.
    pub const fn select(&mut self, page: Page) -> Page {
        let previous = self.current;
        self.current = page;
        previous
    }
}

/// Open/closed state of the cart side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartOverlay {
    open: bool,
}

impl CartOverlay {
    pub const fn open(&mut self) {
        self.open = true;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}
