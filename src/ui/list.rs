use crate::catalog::Recipe;
use crate::theme::Theme;
use crate::ui::intent::CatalogIntent;
use eframe::egui::{self, RichText};

/// Projects the given recipes into cards, top to bottom, emitting intents
/// for every interaction. Immediate mode: each frame rebuilds every card.
pub fn recipe_list(
    ui: &mut egui::Ui,
    theme: &Theme,
    recipes: &[Recipe],
    emit: &mut dyn FnMut(CatalogIntent),
) {
    if recipes.is_empty() {
        ui.label(
            RichText::new("No recipes to show")
                .color(theme.text_muted)
                .size(13.0),
        );
        return;
    }

    for recipe in recipes {
        recipe_card(ui, theme, recipe, emit);
        ui.add_space(theme.spacing_12);
    }
}

fn recipe_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    recipe: &Recipe,
    emit: &mut dyn FnMut(CatalogIntent),
) {
    let mut action_clicked = false;
    let card = theme.card_frame().show(ui, |ui| {
        ui.label(
            RichText::new(&recipe.image)
                .color(theme.text_muted)
                .size(12.0)
                .monospace(),
        );
        ui.add_space(theme.spacing_4);
        ui.label(
            RichText::new(&recipe.title)
                .color(theme.text_primary)
                .size(14.0)
                .strong(),
        );
        ui.add_space(theme.spacing_4);
        ui.label(
            RichText::new(&recipe.description)
                .color(theme.text_muted)
                .size(13.0),
        );
        ui.add_space(theme.spacing_8);
        ui.horizontal(|ui| {
            let edit = egui::Button::new(
                RichText::new("Edit").color(theme.text_primary).size(13.0),
            )
            .fill(theme.surface_3)
            .stroke(theme.subtle_button_stroke())
            .corner_radius(egui::CornerRadius::same(theme.radius_8));
            if ui.add(edit).clicked() {
                action_clicked = true;
                emit(CatalogIntent::OpenEditor(recipe.id));
            }

            let delete = egui::Button::new(
                RichText::new("Delete").color(theme.text_on_accent).size(13.0),
            )
            .fill(theme.danger)
            .stroke(theme.primary_button_stroke())
            .corner_radius(egui::CornerRadius::same(theme.radius_8));
            if ui.add(delete).clicked() {
                action_clicked = true;
                emit(CatalogIntent::RequestDelete(recipe.id));
            }
        });
    });

    // The action buttons consume their own clicks; only a click on the rest
    // of the card opens the detail view.
    let body = card.response.interact(egui::Sense::click());
    if body.clicked() && !action_clicked {
        emit(CatalogIntent::ShowDetail(recipe.id));
    }
}

/// Confirmation dialog for a pending delete, naming the recipe. Nothing is
/// removed until the user confirms.
pub fn confirm_delete_window(
    ctx: &egui::Context,
    theme: &Theme,
    recipe: &Recipe,
    emit: &mut dyn FnMut(CatalogIntent),
) {
    egui::Window::new("Delete recipe")
        .id(egui::Id::new("confirm_delete"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!(
                    "Are you sure you want to delete the recipe \"{}\"?",
                    recipe.title
                ))
                .color(theme.text_primary)
                .size(13.0),
            );
            ui.add_space(theme.spacing_12);
            ui.horizontal(|ui| {
                let confirm = egui::Button::new(
                    RichText::new("Delete").color(theme.text_on_accent).size(13.0),
                )
                .fill(theme.danger)
                .stroke(theme.primary_button_stroke())
                .corner_radius(egui::CornerRadius::same(theme.radius_8))
                .min_size(egui::vec2(0.0, theme.button_height));
                if ui.add(confirm).clicked() {
                    emit(CatalogIntent::ConfirmDelete(recipe.id));
                }

                let cancel = egui::Button::new(
                    RichText::new("Cancel").color(theme.text_primary).size(13.0),
                )
                .fill(theme.surface_3)
                .stroke(theme.subtle_button_stroke())
                .corner_radius(egui::CornerRadius::same(theme.radius_8))
                .min_size(egui::vec2(0.0, theme.button_height));
                if ui.add(cancel).clicked() {
                    emit(CatalogIntent::CancelDelete);
                }
            });
        });
}
