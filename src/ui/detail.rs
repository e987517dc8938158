use crate::catalog::Recipe;
use crate::theme::Theme;
use crate::ui::intent::CatalogIntent;
use eframe::egui::{self, RichText};

pub const NO_PROCEDURE_PLACEHOLDER: &str = "No procedure available.";

/// The procedure body to display: the record's own text, or the fixed
/// placeholder when it has none.
pub fn procedure_text(recipe: &Recipe) -> &str {
    match recipe.procedure.as_deref() {
        Some(procedure) if !procedure.is_empty() => procedure,
        _ => NO_PROCEDURE_PLACEHOLDER,
    }
}

/// Overlay window with one recipe's full content. Closed only by the
/// explicit Close control.
pub fn detail_window(
    ctx: &egui::Context,
    theme: &Theme,
    recipe: &Recipe,
    emit: &mut dyn FnMut(CatalogIntent),
) {
    egui::Window::new(recipe.title.as_str())
        .id(egui::Id::new("recipe_detail"))
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(
                RichText::new(&recipe.image)
                    .color(theme.text_muted)
                    .size(12.0)
                    .monospace(),
            );
            ui.add_space(theme.spacing_8);
            ui.label(
                RichText::new(&recipe.description)
                    .color(theme.text_primary)
                    .size(13.0),
            );
            ui.add_space(theme.spacing_8);
            ui.label(RichText::new("Procedure").color(theme.text_muted).size(12.0));
            ui.add_space(theme.spacing_4);
            ui.label(
                RichText::new(procedure_text(recipe))
                    .color(theme.text_primary)
                    .size(13.0),
            );
            ui.add_space(theme.spacing_12);
            let close = egui::Button::new(
                RichText::new("Close").color(theme.text_primary).size(13.0),
            )
            .fill(theme.surface_3)
            .stroke(theme.subtle_button_stroke())
            .corner_radius(egui::CornerRadius::same(theme.radius_8))
            .min_size(egui::vec2(0.0, theme.button_height));
            if ui.add(close).clicked() {
                emit(CatalogIntent::HideDetail);
            }
        });
}
