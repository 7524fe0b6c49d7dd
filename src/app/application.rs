//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};

use crate::app::entities::GalleryEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::eventing::{EventBus, UiEvent};
use crate::theme::Theme;

actions!(gallery, [Quit]);

/// Run the gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities and the theme from persisted settings
        let entities = GalleryEntities::init(cx);
        cx.set_global(entities.clone());

        let settings = entities.settings.read(cx).settings();
        cx.set_global(Theme::new(settings.theme_mode, settings.density));

        // Event channel for component -> workspace communication
        let (event_tx, event_rx) = flume::unbounded::<UiEvent>();
        cx.set_global(EventBus::new(event_tx));

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1280.0), px(860.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Material 3 Gallery")),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, window, cx))
        });
        if let Err(err) = opened {
            tracing::error!(%err, "failed to open the gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
