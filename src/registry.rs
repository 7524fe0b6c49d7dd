//! Registry - Component Documentation Index
//!
//! Static table mapping component identifiers to their documentation
//! metadata. The gallery router consults this table to decide which demo
//! page to render; the table is built once and never mutated.

use gpui::SharedString;

use crate::assets::IconName;
use crate::i18n::{t, Locale};

/// Gallery category, one demo page per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Actions,
    Communication,
    Containment,
    Navigation,
    Selection,
    TextInputs,
    Data,
}

impl Category {
    /// Stable key used for rail/router ids
    pub fn key(&self) -> &'static str {
        match self {
            Category::Actions => "actions",
            Category::Communication => "communication",
            Category::Containment => "containment",
            Category::Navigation => "navigation",
            Category::Selection => "selection",
            Category::TextInputs => "text-inputs",
            Category::Data => "data",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::all().iter().copied().find(|c| c.key() == key)
    }

    /// Icon shown in the navigation rail
    pub fn icon(&self) -> IconName {
        match self {
            Category::Actions => IconName::Pointer,
            Category::Communication => IconName::Bell,
            Category::Containment => IconName::Panels,
            Category::Navigation => IconName::Compass,
            Category::Selection => IconName::CheckCircle,
            Category::TextInputs => IconName::Pencil,
            Category::Data => IconName::Table,
        }
    }

    /// Translation key for the category title
    pub fn title_key(&self) -> &'static str {
        match self {
            Category::Actions => "cat-actions",
            Category::Communication => "cat-communication",
            Category::Containment => "cat-containment",
            Category::Navigation => "cat-navigation",
            Category::Selection => "cat-selection",
            Category::TextInputs => "cat-text-inputs",
            Category::Data => "cat-data",
        }
    }

    /// Localized category title
    pub fn title(&self, locale: Locale) -> SharedString {
        t(locale, self.title_key())
    }

    /// All categories in rail order
    pub fn all() -> &'static [Category] {
        &[
            Category::Actions,
            Category::Communication,
            Category::Containment,
            Category::Navigation,
            Category::Selection,
            Category::TextInputs,
            Category::Data,
        ]
    }
}

/// Maturity of a component's API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Stable,
    Preview,
}

impl Status {
    pub fn label_key(&self) -> &'static str {
        match self {
            Status::Stable => "demo-status-stable",
            Status::Preview => "demo-status-preview",
        }
    }
}

/// A documentation registry record
#[derive(Debug, Clone, Copy)]
pub struct ComponentEntry {
    /// Stable identifier used by the router
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub category: Category,
    pub status: Status,
    /// One-paragraph description shown above the demo
    pub description: &'static str,
}

static REGISTRY: &[ComponentEntry] = &[
    ComponentEntry {
        id: "button",
        name: "Button",
        category: Category::Actions,
        status: Status::Stable,
        description: "Common buttons in the five Material emphasis levels: \
                      filled, tonal, elevated, outlined, and text.",
    },
    ComponentEntry {
        id: "icon-button",
        name: "Icon button",
        category: Category::Actions,
        status: Status::Stable,
        description: "Compact buttons that show a single icon, for toolbars \
                      and dense surfaces.",
    },
    ComponentEntry {
        id: "snackbar",
        name: "Snackbar",
        category: Category::Communication,
        status: Status::Stable,
        description: "Brief messages about app processes shown at the bottom \
                      of the window, with an optional action.",
    },
    ComponentEntry {
        id: "tooltip",
        name: "Tooltip",
        category: Category::Communication,
        status: Status::Stable,
        description: "A short label shown after hovering a target, or \
                      immediately when it receives focus.",
    },
    ComponentEntry {
        id: "dialog",
        name: "Dialog",
        category: Category::Containment,
        status: Status::Stable,
        description: "Modal window over a scrim that requires a decision \
                      before returning to the app.",
    },
    ComponentEntry {
        id: "accordion",
        name: "Accordion",
        category: Category::Containment,
        status: Status::Stable,
        description: "Vertically stacked sections that expand and collapse, \
                      one at a time or independently.",
    },
    ComponentEntry {
        id: "carousel",
        name: "Carousel",
        category: Category::Containment,
        status: Status::Preview,
        description: "A horizontal pager of slides that can advance \
                      automatically until the user interacts.",
    },
    ComponentEntry {
        id: "popover",
        name: "Popover",
        category: Category::Containment,
        status: Status::Stable,
        description: "A floating surface anchored to a trigger on a chosen \
                      side and alignment.",
    },
    ComponentEntry {
        id: "navigation-rail",
        name: "Navigation rail",
        category: Category::Navigation,
        status: Status::Stable,
        description: "A compact vertical strip of destinations along the \
                      window edge.",
    },
    ComponentEntry {
        id: "navigation-drawer",
        name: "Navigation drawer",
        category: Category::Navigation,
        status: Status::Stable,
        description: "An expandable tree of destinations grouped into \
                      collapsible sections.",
    },
    ComponentEntry {
        id: "tabs",
        name: "Tabs",
        category: Category::Navigation,
        status: Status::Stable,
        description: "A row of related destinations where exactly one is \
                      active.",
    },
    ComponentEntry {
        id: "stepper",
        name: "Stepper",
        category: Category::Navigation,
        status: Status::Preview,
        description: "Progress through an ordered set of steps, with \
                      completed steps marked along the way.",
    },
    ComponentEntry {
        id: "pagination",
        name: "Pagination",
        category: Category::Navigation,
        status: Status::Stable,
        description: "Numbered page navigation with ellipses around the \
                      current page's neighbors.",
    },
    ComponentEntry {
        id: "checkbox",
        name: "Checkbox",
        category: Category::Selection,
        status: Status::Stable,
        description: "Binary selection control with an optional label.",
    },
    ComponentEntry {
        id: "radio",
        name: "Radio button",
        category: Category::Selection,
        status: Status::Stable,
        description: "Single selection out of a labeled group of options.",
    },
    ComponentEntry {
        id: "switch",
        name: "Switch",
        category: Category::Selection,
        status: Status::Stable,
        description: "On/off toggle for a single setting.",
    },
    ComponentEntry {
        id: "dropdown",
        name: "Dropdown",
        category: Category::Selection,
        status: Status::Stable,
        description: "A select field that opens a floating list of options \
                      sized to the trigger.",
    },
    ComponentEntry {
        id: "menu",
        name: "Menu",
        category: Category::Selection,
        status: Status::Stable,
        description: "A floating list of commands opened from a button.",
    },
    ComponentEntry {
        id: "context-menu",
        name: "Context menu",
        category: Category::Selection,
        status: Status::Preview,
        description: "A command menu opened at the pointer position by a \
                      secondary click.",
    },
    ComponentEntry {
        id: "text-field",
        name: "Text field",
        category: Category::TextInputs,
        status: Status::Stable,
        description: "Filled and outlined text fields with label, supporting \
                      text, and error state.",
    },
    ComponentEntry {
        id: "data-table",
        name: "Data table",
        category: Category::Data,
        status: Status::Stable,
        description: "Columnar data with zebra rows, empty and loading \
                      states, and built-in pagination.",
    },
];

/// All registry entries in gallery order
pub fn entries() -> &'static [ComponentEntry] {
    REGISTRY
}

/// Look up an entry by id
pub fn find(id: &str) -> Option<&'static ComponentEntry> {
    REGISTRY.iter().find(|e| e.id == id)
}

/// Entries belonging to a category, in registry order
pub fn by_category(category: Category) -> impl Iterator<Item = &'static ComponentEntry> {
    REGISTRY.iter().filter(move |e| e.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in entries() {
            assert!(seen.insert(entry.id), "duplicate registry id {}", entry.id);
        }
    }

    #[test]
    fn test_every_category_has_entries() {
        for &cat in Category::all() {
            assert!(by_category(cat).next().is_some(), "empty category {cat:?}");
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("button").map(|e| e.name), Some("Button"));
        assert!(find("does-not-exist").is_none());
    }
}
