use super::S3Uploader;
use crate::upload::UploadedFileRecord;
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Color32, RichText};
use tracing::warn;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);
const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 180, 0);

impl S3Uploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("📤 File Upload to S3");
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Upload your files directly to Amazon S3")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });

                ui.add_space(20.0);
                self.render_single_section(ui);
                ui.add_space(10.0);
                self.render_multiple_section(ui);

                ui.add_space(20.0);
                self.render_messages(ui);

                if !self.workflow.uploaded_files.is_empty() {
                    ui.add_space(20.0);
                    self.render_uploaded_files(ui);
                }

                ui.add_space(20.0);
            });
        });
    }

    fn render_single_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Single File Upload");
            ui.add_space(8.0);

            if ui.button("📁 Choose File").clicked() {
                self.pick_single_file();
            }

            if let Some(file) = &self.workflow.single_file {
                ui.add_space(5.0);
                ui.label(format!("Selected: {}", file.name));
                ui.label(format!("Size: {}", FileSizeUtils::format_size(file.size)));
                ui.label(format!("Type: {}", file.mime_type));
            }

            ui.add_space(8.0);
            let can_upload = self.workflow.single_file.is_some() && !self.workflow.is_uploading();
            let label = if self.workflow.is_uploading() {
                "Uploading...".to_string()
            } else {
                "Upload File".to_string()
            };
            let button = egui::Button::new(label).min_size(egui::vec2(200.0, 36.0));
            if ui.add_enabled(can_upload, button).clicked() {
                self.start_single_upload();
            }
        });
    }

    fn render_multiple_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Multiple File Upload");
            ui.add_space(8.0);

            if ui.button("📁 Choose Files").clicked() {
                self.pick_multiple_files();
            }

            let files = &self.workflow.multiple_files;
            if !files.is_empty() {
                ui.add_space(5.0);
                ui.label(format!("Selected {} file(s):", files.len()));
                for file in files {
                    ui.label(format!(
                        "  • {} ({})",
                        file.name,
                        FileSizeUtils::format_size(file.size)
                    ));
                }
            }

            ui.add_space(8.0);
            let count = files.len();
            let can_upload = count > 0 && !self.workflow.is_uploading();
            let label = if self.workflow.is_uploading() {
                "Uploading...".to_string()
            } else {
                format!("Upload {} File(s)", count)
            };
            let button = egui::Button::new(label).min_size(egui::vec2(200.0, 36.0));
            if ui.add_enabled(can_upload, button).clicked() {
                self.start_multiple_upload();
            }
        });
    }

    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = self.workflow.error_message() {
            ui.colored_label(ERROR_RED, format!("Error: {}", error));
        }

        if let Some(success) = self.workflow.success_message() {
            ui.colored_label(SUCCESS_GREEN, format!("Success: {}", success));
        }
    }

    fn render_uploaded_files(&self, ui: &mut egui::Ui) {
        ui.heading("Uploaded Files");
        ui.add_space(8.0);

        for file in &self.workflow.uploaded_files {
            egui::Frame::none()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    Self::render_file_card(ui, file);
                });
            ui.add_space(6.0);
        }
    }

    fn render_file_card(ui: &mut egui::Ui, file: &UploadedFileRecord) {
        ui.label(RichText::new(&file.file_name).strong());
        ui.label(format!(
            "Size: {}",
            FileSizeUtils::format_size(file.file_size)
        ));
        ui.label(format!("Type: {}", file.file_type));

        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(RichText::new("View File").color(ACCENT)))
                .on_hover_text(file.file_url.as_str())
                .clicked()
            {
                if let Err(e) = open::that(&file.file_url) {
                    warn!("Failed to open {}: {}", file.file_url, e);
                }
            }

            if ui.button("Copy URL").clicked() {
                ui.ctx()
                    .output_mut(|o| o.copied_text = file.file_url.clone());
            }
        });
    }
}
