pub mod args;
pub mod config;
pub mod error;
pub mod files;
pub mod ui;

use color_eyre::eyre::{
    Error,
    eyre,
};
use eframe::NativeOptions;
use egui::ViewportBuilder;

use crate::{
    app::{
        args::Args,
        config::AppConfig,
        error::ErrorDialog,
        files::AppFiles,
    },
    session::{
        SessionController,
        SessionEvent,
    },
    view::ViewModel,
};

pub fn run_app(args: Args) -> Result<(), Error> {
    let mut error_dialog = ErrorDialog::default();

    // a broken config file shouldn't keep the app from starting
    let config = if args.ignore_config {
        AppConfig::default()
    }
    else {
        error_dialog
            .ok_or_display(load_config())
            .unwrap_or_default()
    };
    tracing::debug!(?config);

    let viewport = ViewportBuilder::default()
        .with_title("Snell's law")
        .with_app_id(std::env!("CARGO_PKG_NAME"))
        .with_inner_size([config.window.width, config.window.height]);

    eframe::run_native(
        std::env!("CARGO_PKG_NAME"),
        NativeOptions {
            viewport,
            ..Default::default()
        },
        Box::new(move |_cc| Ok(Box::new(App::new(config, error_dialog)))),
    )
    .map_err(|e| eyre!("{e}"))?;

    tracing::info!("App closed");

    Ok(())
}

fn load_config() -> Result<AppConfig, Error> {
    let app_files = AppFiles::open()?;
    let config = app_files.read_config_or_create::<AppConfig>()?;
    config.validate()?;
    Ok(config)
}

#[derive(Debug)]
pub struct App {
    config: AppConfig,
    session: SessionController<ViewModel>,
    error_dialog: ErrorDialog,
}

impl App {
    pub fn new(config: AppConfig, error_dialog: ErrorDialog) -> Self {
        // the first result is rendered here, so the views are never empty
        let session = SessionController::new(ViewModel::new(config.diagram.clone()))
            .unwrap_or_else(|never| match never {});

        Self {
            config,
            session,
            error_dialog,
        }
    }

    fn dispatch(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            self.session
                .handle(event)
                .unwrap_or_else(|never| match never {});
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = vec![];

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::controls(ui, &self.session.state().input, &mut events);
            ui.add_space(4.0);
        });

        // apply input before painting, so this frame already shows its result
        self.dispatch(events);

        let views = self.session.renderer().views();

        egui::SidePanel::right("panels")
            .resizable(true)
            .default_width(self.config.window.side_panel_width)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("panels")
                    .show(ui, |ui| {
                        if let Some(views) = views {
                            ui::calculation_panel(ui, &views.calculation);
                            ui.separator();
                            ui::result_panel(ui, &views.summary);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Behaviour of light rays");
            if let Some(views) = views {
                ui::ray_diagram(ui, views, &self.config);
            }
        });

        self.error_dialog.show(ctx);
    }
}
