//! Workspace - Gallery Shell and Event Pump
//!
//! The workspace holds the header, navigation rail, drawer, and the active
//! category's demo page, paints the overlay stack above everything, and
//! pumps [`UiEvent`]s from the channel into the owning entities.

use gpui::{
    div, prelude::*, AnyElement, App, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::GalleryEntities;
use crate::components::composite::navigation_drawer::{
    DrawerItem, DrawerSection, NavigationDrawer,
};
use crate::components::composite::navigation_rail::{NavigationRail, RailItem};
use crate::eventing::{bus, UiEvent};
use crate::gallery::actions::ActionsPage;
use crate::gallery::communication::CommunicationPage;
use crate::gallery::containment::ContainmentPage;
use crate::gallery::data::DataPage;
use crate::gallery::header::Header;
use crate::gallery::inputs::InputsPage;
use crate::gallery::navigation::NavigationPage;
use crate::gallery::selection::SelectionPage;
use crate::i18n::Locale;
use crate::overlay::OverlayLayer;
use crate::registry::{self, Category};
use crate::theme::{ActiveTheme, Theme};

/// Main workspace containing the gallery layout
pub struct Workspace {
    entities: GalleryEntities,
    header: Entity<Header>,
    drawer: Entity<NavigationDrawer>,
    // Page views, created lazily and cached
    actions_page: Option<Entity<ActionsPage>>,
    communication_page: Option<Entity<CommunicationPage>>,
    containment_page: Option<Entity<ContainmentPage>>,
    navigation_page: Option<Entity<NavigationPage>>,
    selection_page: Option<Entity<SelectionPage>>,
    inputs_page: Option<Entity<InputsPage>>,
    data_page: Option<Entity<DataPage>>,
}

/// Drawer tree built from the registry, localized
fn drawer_sections(locale: Locale) -> Vec<DrawerSection> {
    Category::all()
        .iter()
        .map(|category| {
            DrawerSection::new(
                category.key(),
                category.title(locale),
                registry::by_category(*category)
                    .map(|entry| DrawerItem::new(entry.id, entry.name))
                    .collect(),
            )
        })
        .collect()
}

impl Workspace {
    pub fn new(
        entities: GalleryEntities,
        event_rx: flume::Receiver<UiEvent>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = entities.settings.read(cx).locale();
        let active_id = entities.gallery.read(cx).active_id();

        let header = cx.new(|cx| Header::new(entities.clone(), window, cx));
        let drawer = {
            let sections = drawer_sections(locale);
            cx.new(|_| {
                NavigationDrawer::new("gallery-drawer", sections)
                    .selected(active_id)
                    .on_select(|id, _window, cx| {
                        bus::emit(cx, UiEvent::navigate(id.clone()));
                    })
            })
        };

        // The snackbar host lives on the toast layer for the whole session
        entities.overlays.update(cx, |overlays, cx| {
            overlays.mount(entities.snackbars.clone().into(), OverlayLayer::Toast);
            cx.notify();
        });

        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Keep the drawer highlight in sync with the router
        cx.observe(&entities.gallery, {
            let drawer = drawer.clone();
            move |_this: &mut Self, gallery, cx| {
                let active = gallery.read(cx).active_id();
                drawer.update(cx, |drawer, cx| drawer.set_selected(active, cx));
                cx.notify();
            }
        })
        .detach();

        // Rebuild the localized drawer tree when settings change
        cx.observe(&entities.settings, {
            let drawer = drawer.clone();
            move |_this: &mut Self, settings, cx| {
                let locale = settings.read(cx).locale();
                drawer.update(cx, |drawer, cx| {
                    drawer.set_sections(drawer_sections(locale), cx)
                });
                cx.notify();
            }
        })
        .detach();

        // Overlay mounts/unmounts repaint the stack
        cx.observe(&entities.overlays, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            drawer,
            actions_page: None,
            communication_page: None,
            containment_page: None,
            navigation_page: None,
            selection_page: None,
            inputs_page: None,
            data_page: None,
        }
    }

    /// Start the event pump that dispatches UI events
    fn start_event_pump(
        event_rx: flume::Receiver<UiEvent>,
        entities: GalleryEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Get or create the page view for a category
    fn get_or_create_page(
        &mut self,
        category: Category,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let entities = self.entities.clone();
        match category {
            Category::Actions => self
                .actions_page
                .get_or_insert_with(|| cx.new(|cx| ActionsPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Category::Communication => self
                .communication_page
                .get_or_insert_with(|| cx.new(|cx| CommunicationPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
            Category::Containment => self
                .containment_page
                .get_or_insert_with(|| cx.new(|cx| ContainmentPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Category::Navigation => self
                .navigation_page
                .get_or_insert_with(|| cx.new(|cx| NavigationPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Category::Selection => self
                .selection_page
                .get_or_insert_with(|| cx.new(|cx| SelectionPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Category::TextInputs => self
                .inputs_page
                .get_or_insert_with(|| cx.new(|cx| InputsPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Category::Data => self
                .data_page
                .get_or_insert_with(|| cx.new(|cx| DataPage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let locale = self.entities.settings.read(cx).locale();
        let active_category = self.entities.gallery.read(cx).active_category();
        let content = self.get_or_create_page(active_category, window, cx);

        let entities = self.entities.clone();
        let rail = NavigationRail::new("gallery-rail", active_category.key())
            .items(
                Category::all()
                    .iter()
                    .map(|category| {
                        RailItem::new(category.key(), category.icon(), category.title(locale))
                    })
                    .collect(),
            )
            .on_select(move |id, _window, cx| {
                if let Some(category) = Category::from_key(id) {
                    entities.gallery.update(cx, |gallery, cx| {
                        gallery.select_category(category);
                        cx.notify();
                    });
                }
            });

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(colors.surface)
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(rail)
                    .child(self.drawer.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(colors.surface_container_lowest)
                            .child(content),
                    ),
            )
            // Overlay stack: popups, modals, toasts, in paint order
            .children(self.entities.overlays.read(cx).views())
    }
}

/// Dispatch a UiEvent to the appropriate entity
fn dispatch_event(event: UiEvent, entities: &GalleryEntities, cx: &mut App) {
    match event {
        UiEvent::ShowSnackbar { snackbar } => {
            entities.snackbars.update(cx, |host, cx| {
                host.show(snackbar, cx);
            });
        }
        UiEvent::DismissSnackbar { id } => {
            entities.snackbars.update(cx, |host, cx| {
                host.dismiss(id, cx);
            });
        }
        UiEvent::SetThemeMode { mode } => {
            entities.settings.update(cx, |settings, cx| {
                settings.set_theme_mode(mode);
                cx.notify();
            });
            cx.update_global::<Theme, ()>(|theme, _| theme.set_mode(mode));
            cx.refresh_windows();
        }
        UiEvent::SetDensity { density } => {
            entities.settings.update(cx, |settings, cx| {
                settings.set_density(density);
                cx.notify();
            });
            cx.update_global::<Theme, ()>(|theme, _| theme.set_density(density));
            cx.refresh_windows();
        }
        UiEvent::SetLocale { locale } => {
            entities.settings.update(cx, |settings, cx| {
                settings.set_locale(locale);
                cx.notify();
            });
            cx.refresh_windows();
        }
        UiEvent::Navigate { id } => {
            entities.gallery.update(cx, |gallery, cx| {
                if gallery.select(&id) {
                    cx.notify();
                }
            });
        }
    }
}
