use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui;

use crate::resources::{ScenarioRequest, SimSettings};
use crate::scenario::ScenarioKind;
use crate::simulation::Simulation;

pub fn ui_controls(
    mut contexts: EguiContexts,
    mut settings: ResMut<SimSettings>,
    mut request: ResMut<ScenarioRequest>,
    simulation: Res<Simulation>,
    mut frames_rendered: Local<usize>,
) {
    if *frames_rendered < 5 {
        *frames_rendered += 1;
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let active = simulation.scenario();

    egui::Window::new("Three-Body Problem")
        .default_pos(egui::pos2(10.0, 10.0))
        .max_size([320.0, 260.0])
        .show(ctx, |ui| {
            ui.heading("Scenario");
            ui.horizontal(|ui| {
                for kind in ScenarioKind::ALL {
                    // Clicking the running scenario restarts it.
                    if ui
                        .selectable_label(active == Some(kind), kind.label())
                        .clicked()
                    {
                        request.pending = Some(kind);
                    }
                }
            });

            if let Some(kind) = active {
                ui.label(egui::RichText::new(kind.label()).strong());
                ui.label(kind.description());
            }

            ui.separator();
            ui.checkbox(&mut settings.show_trails, "Show Trails");
            if ui.button("About").clicked() {
                settings.show_info = !settings.show_info;
            }
        });

    if settings.show_info {
        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .default_pos(egui::pos2(340.0, 10.0))
            .max_size([360.0, 320.0])
            .show(ctx, |ui| {
                ui.heading("Physics");
                ui.label("Stars attract each other with softened Newtonian gravity.");
                ui.label("Stars straying past radius 2.5 feel a gentle pull back to the center.");
                ui.label("The planet is too light to move the stars and may be thrown out.");

                ui.separator();
                ui.heading("Planet temperature");
                ui.label("Red: closer than 0.5 to another body.");
                ui.label("White: closer than 1.2.");
                ui.label("Blue: safely far away.");

                ui.separator();
                ui.label("The camera zooms and pans to keep every star in view.");
            });
        if !open {
            settings.show_info = false;
        }
    }
}
