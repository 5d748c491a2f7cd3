//! Main application state and GUI coordination

use eframe::egui;
use tokio::sync::mpsc;
use tracing::info;

use crate::dashboard::DashboardView;
use crate::data::Dataset;
use crate::gui::{header, overview_panel, report_panel};

pub struct DashboardApp {
    view: DashboardView,
    dataset_rx: Option<mpsc::Receiver<Dataset>>,
    left_pane_width: f32,
}

impl DashboardApp {
    pub fn new(view: DashboardView, dataset_rx: Option<mpsc::Receiver<Dataset>>) -> Self {
        Self {
            view,
            dataset_rx,
            left_pane_width: 560.0,
        }
    }

    pub fn with_left_pane_width(mut self, width: f32) -> Self {
        self.left_pane_width = width;
        self
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    fn drain_dataset_updates(&mut self) {
        let Some(rx) = self.dataset_rx.as_mut() else {
            return;
        };

        let mut latest = None;
        while let Ok(dataset) = rx.try_recv() {
            latest = Some(dataset);
        }

        if let Some(dataset) = latest {
            info!("Applying reloaded dataset");
            self.view.replace_dataset(dataset);
        }
    }

    /// Draws one frame into `ctx`.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.drain_dataset_updates();

        let screen = self.view.render();
        let mut clicked_tab = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render(ui, &screen.header);
        });

        egui::SidePanel::left("overview")
            .resizable(true)
            .default_width(self.left_pane_width)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    overview_panel::render(ui, &screen.left);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                clicked_tab = report_panel::render(ui, &screen.right);
            });
        });

        if let Some(tab) = clicked_tab {
            self.view.select_tab(tab);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
