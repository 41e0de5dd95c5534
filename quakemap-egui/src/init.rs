use std::sync::Arc;

use anyhow::anyhow;
use eframe::AppCreator;
use quakemap::platform::HttpService;
use quakemap::{FeedLoader, MapView, Messenger};
use tokio::runtime::{Handle, Runtime};
use tokio::sync::mpsc;

use crate::{EguiMap, EguiMapState, MapStateMessenger};

const APP_NAME: &str = "Earthquake Map";

struct MapApp {
    pub map: EguiMapState,
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                EguiMap::new(&mut self.map).show_ui(ui);
            });
    }
}

type AppBuilder = Box<dyn FnOnce(EguiMapState) -> Box<dyn eframe::App>>;

/// Starts the viewer window for a map and loads the feeds into it.
pub struct InitBuilder {
    map: MapView,
    loader: FeedLoader,
    http: HttpService,
    native_options: Option<eframe::NativeOptions>,
    app_builder: Option<AppBuilder>,
}

impl InitBuilder {
    /// Creates a builder that shows the map, fills it from the loader and downloads tiles
    /// with the given service.
    pub fn new(map: MapView, loader: FeedLoader, http: HttpService) -> Self {
        Self {
            map,
            loader,
            http,
            native_options: None,
            app_builder: None,
        }
    }

    /// Window options. A 1280x800 window is used by default.
    pub fn with_native_options(mut self, options: eframe::NativeOptions) -> Self {
        self.native_options = Some(options);
        self
    }

    /// Replaces the default app, which shows the map across the whole window.
    pub fn with_app_builder(
        mut self,
        app_builder: impl FnOnce(EguiMapState) -> Box<dyn eframe::App> + 'static,
    ) -> Self {
        self.app_builder = Some(Box::new(app_builder));
        self
    }

    /// Runs the app until the window is closed.
    pub fn init(self) -> anyhow::Result<()> {
        let rt = Runtime::new()?;
        let _enter = rt.enter();

        let native_options = self.native_options.unwrap_or_else(|| eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(APP_NAME)
                .with_inner_size([1280.0, 800.0]),
            ..Default::default()
        });

        let app_creator = app_creator(
            self.map,
            self.loader,
            self.http,
            rt.handle().clone(),
            self.app_builder,
        );

        eframe::run_native(APP_NAME, native_options, app_creator)
            .map_err(|err| anyhow!("failed to run the map window: {err}"))
    }
}

fn app_creator<'app>(
    map: MapView,
    loader: FeedLoader,
    http: HttpService,
    runtime: Handle,
    app_builder: Option<AppBuilder>,
) -> AppCreator<'app> {
    Box::new(move |cc: &eframe::CreationContext<'_>| {
        let ctx = cc.egui_ctx.clone();
        let (sender, receiver) = mpsc::unbounded_channel();

        let messenger: Arc<dyn Messenger> = Arc::new(MapStateMessenger {
            context: ctx.clone(),
        });
        loader.spawn(&runtime, sender, Some(messenger));

        let egui_map_state = EguiMapState::new(map, ctx, http, runtime, receiver);
        let app = app_builder.unwrap_or_else(|| {
            Box::new(|egui_map_state: EguiMapState| {
                Box::new(MapApp {
                    map: egui_map_state,
                })
            })
        })(egui_map_state);

        Ok(app)
    })
}
