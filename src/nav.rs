/// Header switches to its opaque style past this many pixels of scroll.
pub const SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "Home",
        href: "#home",
    },
    NavItem {
        name: "About",
        href: "#about",
    },
    NavItem {
        name: "Skills",
        href: "#skills",
    },
    NavItem {
        name: "Projects",
        href: "#projects",
    },
    NavItem {
        name: "Contact",
        href: "#contact",
    },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 bg-space-medium/80 backdrop-blur-md shadow-lg z-50 transition-all duration-300"
    } else {
        "fixed top-0 left-0 right-0 bg-transparent z-50 transition-all duration-300"
    }
}
