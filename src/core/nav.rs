//! # Navigation Bar State
//!
//! The header shows a brand title and a fixed link list. Narrow terminals
//! hide the links behind a toggle; the toggle is the only state here.

pub const BRAND: &str = "HealthAI";

/// Links in display order.
pub const LINKS: [&str; 4] = ["Home", "About", "Services", "Contact"];

/// Terminal widths below this get the collapsible presentation.
pub const NARROW_BREAKPOINT: u16 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Collapsed,
    Expanded,
}

impl NavState {
    pub fn toggled(self) -> Self {
        match self {
            NavState::Collapsed => NavState::Expanded,
            NavState::Expanded => NavState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == NavState::Expanded
    }
}

/// How the link list is laid out for a given terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPresentation {
    /// Wide terminal: links inline in the header, no toggle.
    Inline,
    /// Narrow terminal: toggle shown, links hidden.
    Collapsed,
    /// Narrow terminal: toggle shown, links listed under the header.
    Dropdown,
}

impl NavPresentation {
    pub fn for_width(width: u16, state: NavState) -> Self {
        if width >= NARROW_BREAKPOINT {
            NavPresentation::Inline
        } else if state.is_expanded() {
            NavPresentation::Dropdown
        } else {
            NavPresentation::Collapsed
        }
    }

    /// Rows the nav bar occupies: one header line plus the dropdown list.
    pub fn height(self) -> u16 {
        match self {
            NavPresentation::Inline | NavPresentation::Collapsed => 1,
            NavPresentation::Dropdown => 1 + LINKS.len() as u16,
        }
    }

    pub fn shows_toggle(self) -> bool {
        self != NavPresentation::Inline
    }
}
