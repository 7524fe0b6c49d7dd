//! Composite components

pub mod accordion;
pub mod carousel;
pub mod context_menu;
pub mod data_table;
pub mod dialog;
pub mod dropdown;
pub mod menu;
pub mod navigation_drawer;
pub mod navigation_rail;
pub mod pagination;
pub mod popover;
pub mod snackbar;
pub mod stepper;
pub mod tabs;
pub mod tooltip;

pub use accordion::{Accordion, AccordionSection};
pub use carousel::{Carousel, Slide};
pub use context_menu::ContextMenuArea;
pub use data_table::{Column, ColumnWidth, DataTable};
pub use dialog::{close_dialog, open_dialog, Dialog, DialogAction, OpenDialog};
pub use dropdown::{Dropdown, SelectOption};
pub use menu::{MenuButton, MenuEntry, MenuItem};
pub use navigation_drawer::{DrawerItem, DrawerSection, NavigationDrawer};
pub use navigation_rail::{NavigationRail, RailItem};
pub use pagination::PaginationBar;
pub use popover::Popover;
pub use snackbar::SnackbarHost;
pub use stepper::{Stepper, StepInfo};
pub use tabs::{TabBar, TabItem};
pub use tooltip::TooltipArea;
