//! Navigation entries.

/// A configured navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Visible text.
    pub label: &'static str,
    /// Site-relative target path.
    pub href: &'static str,
}

impl NavItem {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    /// The catalog entry point.
    #[inline]
    pub fn is_home(&self) -> bool {
        self.href == "/"
    }
}

/// A [`NavItem`] annotated for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
    /// Whether the current path lies within this entry's section.
    pub active: bool,
}
