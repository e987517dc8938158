use crate::catalog::repository::RecipeDraft;
use crate::catalog::Recipe;
use crate::theme::Theme;
use crate::ui::intent::CatalogIntent;
use eframe::egui::{self, RichText};

/// Buffers for the five named text fields of the add and edit forms.
#[derive(Debug, Clone, Default)]
pub struct RecipeFormState {
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub procedure: String,
}

impl RecipeFormState {
    pub fn populate(&mut self, recipe: &Recipe) {
        self.title = recipe.title.clone();
        self.category = recipe.category.clone();
        self.image = recipe.image.clone();
        self.description = recipe.description.clone();
        self.procedure = recipe.procedure.clone().unwrap_or_default();
    }

    pub fn draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            procedure: self.procedure.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn add_form(
    ui: &mut egui::Ui,
    theme: &Theme,
    form: &mut RecipeFormState,
    emit: &mut dyn FnMut(CatalogIntent),
) {
    theme.card_frame().show(ui, |ui| {
        ui.label(
            RichText::new("Add a recipe")
                .color(theme.text_primary)
                .size(13.0),
        );
        ui.add_space(theme.spacing_8);
        form_fields(ui, theme, form);
        ui.add_space(theme.spacing_8);

        let submit = egui::Button::new(
            RichText::new("Add Recipe")
                .color(theme.text_on_accent)
                .size(13.0),
        )
        .fill(theme.accent_primary)
        .stroke(theme.primary_button_stroke())
        .corner_radius(egui::CornerRadius::same(theme.radius_8))
        .min_size(egui::vec2(0.0, theme.button_height));
        if ui.add(submit).clicked() {
            emit(CatalogIntent::Add(form.draft()));
        }
    });
}

/// The edit form carries the id of the record it was opened for; the update
/// control hands that id back with the current field values.
pub fn edit_form(
    ui: &mut egui::Ui,
    theme: &Theme,
    id: u32,
    form: &mut RecipeFormState,
    emit: &mut dyn FnMut(CatalogIntent),
) {
    theme.card_frame().show(ui, |ui| {
        ui.label(
            RichText::new("Edit recipe")
                .color(theme.text_primary)
                .size(13.0),
        );
        ui.add_space(theme.spacing_8);
        form_fields(ui, theme, form);
        ui.add_space(theme.spacing_8);

        ui.horizontal(|ui| {
            let update = egui::Button::new(
                RichText::new("Update Recipe")
                    .color(theme.text_on_accent)
                    .size(13.0),
            )
            .fill(theme.accent_primary)
            .stroke(theme.primary_button_stroke())
            .corner_radius(egui::CornerRadius::same(theme.radius_8))
            .min_size(egui::vec2(0.0, theme.button_height));
            if ui.add(update).clicked() {
                emit(CatalogIntent::Update {
                    id,
                    draft: form.draft(),
                });
            }

            let cancel = egui::Button::new(
                RichText::new("Cancel").color(theme.text_primary).size(13.0),
            )
            .fill(theme.surface_3)
            .stroke(theme.subtle_button_stroke())
            .corner_radius(egui::CornerRadius::same(theme.radius_8))
            .min_size(egui::vec2(0.0, theme.button_height));
            if ui.add(cancel).clicked() {
                emit(CatalogIntent::CloseEditor);
            }
        });
    });
}

fn form_fields(ui: &mut egui::Ui, theme: &Theme, form: &mut RecipeFormState) {
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = theme.spacing_8;
        text_field(ui, theme, "Title", &mut form.title);
        text_field(ui, theme, "Category", &mut form.category);
        text_field(ui, theme, "Image", &mut form.image);
        text_field(ui, theme, "Description", &mut form.description);
        text_field(ui, theme, "Procedure", &mut form.procedure);
    });
}

fn text_field(ui: &mut egui::Ui, theme: &Theme, label: &str, value: &mut String) {
    ui.label(RichText::new(label).color(theme.text_muted).size(12.0));
    ui.add(
        egui::TextEdit::singleline(value)
            .desired_width(f32::INFINITY)
            .hint_text("text"),
    );
}
