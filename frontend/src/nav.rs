use crate::config::{
    HEADER_BG_SCROLLED, HEADER_BG_TOP, HEADER_SCROLL_THRESHOLD, HEADER_SHADOW_SCROLLED,
    HEADER_SHADOW_TOP,
};

/// Visual state of one hamburger bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconBar {
    pub transform: &'static str,
    pub opacity: &'static str,
}

impl IconBar {
    pub const REST: IconBar = IconBar { transform: "none", opacity: "1" };

    pub fn style(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform, self.opacity)
    }
}

const OPEN_BARS: [IconBar; 3] = [
    IconBar { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
    IconBar { transform: "none", opacity: "0" },
    IconBar { transform: "rotate(-45deg) translate(7px, -6px)", opacity: "1" },
];

const CLOSED_BARS: [IconBar; 3] = [IconBar::REST; 3];

/// Mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Closing is idempotent; link clicks always land here.
    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn icon_bars(&self) -> [IconBar; 3] {
        if self.open {
            OPEN_BARS
        } else {
            CLOSED_BARS
        }
    }

    pub fn menu_class(&self) -> &'static str {
        if self.open {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub shadow: &'static str,
}

impl HeaderStyle {
    pub const TOP: HeaderStyle = HeaderStyle {
        background: HEADER_BG_TOP,
        shadow: HEADER_SHADOW_TOP,
    };
    pub const SCROLLED: HeaderStyle = HeaderStyle {
        background: HEADER_BG_SCROLLED,
        shadow: HEADER_SHADOW_SCROLLED,
    };

    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD {
            Self::SCROLLED
        } else {
            Self::TOP
        }
    }

    pub fn style(&self) -> String {
        format!(
            "background-color: {}; box-shadow: {};",
            self.background, self.shadow
        )
    }
}
