use crate::catalog::repository::RecipeRepository;
use crate::catalog::{MealCategory, Recipe};
use crate::theme::Theme;
use crate::ui::detail;
use crate::ui::forms::{self, RecipeFormState};
use crate::ui::intent::CatalogIntent;
use crate::ui::list;
use eframe::egui::{self, RichText, ScrollArea};
use std::time::{SystemTime, UNIX_EPOCH};

/// The page controller: owns the repository and all view state, applies each
/// intent to completion between frames. The route is fixed at construction.
pub struct SkilletApp {
    repository: RecipeRepository,
    route: Option<MealCategory>,
    theme: Theme,
    theme_applied: bool,
    visible: Vec<Recipe>,
    search_buffer: String,
    add_form: RecipeFormState,
    edit_form: RecipeFormState,
    editing: Option<u32>,
    detail: Option<Recipe>,
    pending_delete: Option<u32>,
    diagnostics_log: Vec<String>,
}

impl SkilletApp {
    pub fn new(repository: RecipeRepository, route: Option<MealCategory>) -> Self {
        let visible = match route {
            Some(category) => repository.filter_by_category(category.label()),
            None => repository.recipes().to_vec(),
        };

        Self {
            repository,
            route,
            theme: Theme::default(),
            theme_applied: false,
            visible,
            search_buffer: String::new(),
            add_form: RecipeFormState::default(),
            edit_form: RecipeFormState::default(),
            editing: None,
            detail: None,
            pending_delete: None,
            diagnostics_log: Vec::new(),
        }
    }

    fn timestamp() -> String {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(duration) => duration.as_secs().to_string(),
            Err(_) => "0".to_string(),
        }
    }

    fn log_diagnostic(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.diagnostics_log
            .push(format!("[{}] {}", Self::timestamp(), message));
    }

    fn show_full_collection(&mut self) {
        self.visible = self.repository.recipes().to_vec();
    }

    fn route_label(&self) -> &'static str {
        match self.route {
            Some(category) => category.label(),
            None => "all recipes",
        }
    }

    pub fn apply_intent(&mut self, intent: CatalogIntent) {
        tracing::debug!("intent: {}", intent.to_log_line());
        match intent {
            CatalogIntent::Search(query) => {
                // Search always runs over the full collection, even when the
                // route scoped the initial view to one category.
                self.visible = self.repository.filter_by_text(&query);
            }
            CatalogIntent::Add(draft) => {
                let result = self.repository.add(draft);
                self.show_full_collection();
                match result {
                    Ok(_) => self.add_form.reset(),
                    Err(err) => self.log_diagnostic(format!("failed to persist new recipe: {err}")),
                }
            }
            CatalogIntent::Update { id, draft } => match self.repository.update(id, draft) {
                Ok(true) => {
                    self.editing = None;
                    self.edit_form.reset();
                    self.show_full_collection();
                }
                Ok(false) => self.log_diagnostic(format!("cannot update recipe {id}: not found")),
                Err(err) => {
                    self.show_full_collection();
                    self.log_diagnostic(format!("failed to persist updated recipe: {err}"));
                }
            },
            CatalogIntent::OpenEditor(id) => {
                if let Some(recipe) = self.repository.find_by_id(id) {
                    self.edit_form.populate(recipe);
                    self.editing = Some(id);
                } else {
                    self.log_diagnostic(format!("cannot edit recipe {id}: not found"));
                }
            }
            CatalogIntent::CloseEditor => {
                self.editing = None;
                self.edit_form.reset();
            }
            CatalogIntent::RequestDelete(id) => {
                if self.repository.find_by_id(id).is_some() {
                    self.pending_delete = Some(id);
                } else {
                    self.log_diagnostic(format!("cannot delete recipe {id}: not found"));
                }
            }
            CatalogIntent::ConfirmDelete(id) => {
                self.pending_delete = None;
                match self.repository.delete(id) {
                    Ok(true) => self.show_full_collection(),
                    Ok(false) => {
                        self.log_diagnostic(format!("cannot delete recipe {id}: not found"));
                    }
                    Err(err) => {
                        self.show_full_collection();
                        self.log_diagnostic(format!("failed to persist after delete: {err}"));
                    }
                }
            }
            CatalogIntent::CancelDelete => self.pending_delete = None,
            CatalogIntent::ShowDetail(id) => {
                if let Some(recipe) = self.repository.find_by_id(id) {
                    self.detail = Some(recipe.clone());
                } else {
                    self.log_diagnostic(format!("cannot show recipe {id}: not found"));
                }
            }
            CatalogIntent::HideDetail => self.detail = None,
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context, intents: &mut Vec<CatalogIntent>) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Skillet");
                ui.separator();
                ui.label(
                    RichText::new(self.route_label())
                        .color(self.theme.text_muted)
                        .size(13.0),
                );
                ui.separator();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search_buffer)
                        .desired_width(220.0)
                        .hint_text("Search recipes..."),
                );
                if response.changed() {
                    intents.push(CatalogIntent::Search(self.search_buffer.clone()));
                }
            });
        });
    }

    fn render_diagnostics(&mut self, ctx: &egui::Context) {
        if self.diagnostics_log.is_empty() {
            return;
        }

        egui::TopBottomPanel::bottom("diagnostics_panel").show(ctx, |ui| {
            egui::CollapsingHeader::new("Diagnostics")
                .default_open(false)
                .show(ui, |ui| {
                    ScrollArea::vertical()
                        .id_salt("diagnostics_log")
                        .max_height(90.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in &self.diagnostics_log {
                                ui.label(
                                    RichText::new(entry).color(self.theme.warning).size(12.0),
                                );
                            }
                        });
                });
        });
    }

    fn render_center(&mut self, ctx: &egui::Context, intents: &mut Vec<CatalogIntent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().id_salt("catalog").show(ui, |ui| {
                list::recipe_list(ui, &self.theme, &self.visible, &mut |intent| {
                    intents.push(intent)
                });

                ui.add_space(self.theme.spacing_16);
                forms::add_form(ui, &self.theme, &mut self.add_form, &mut |intent| {
                    intents.push(intent)
                });

                if let Some(id) = self.editing {
                    ui.add_space(self.theme.spacing_16);
                    forms::edit_form(ui, &self.theme, id, &mut self.edit_form, &mut |intent| {
                        intents.push(intent)
                    });
                }

                ui.add_space(self.theme.spacing_24);
            });
        });
    }

    fn render_overlays(&self, ctx: &egui::Context, intents: &mut Vec<CatalogIntent>) {
        if let Some(recipe) = &self.detail {
            detail::detail_window(ctx, &self.theme, recipe, &mut |intent| intents.push(intent));
        }

        if let Some(id) = self.pending_delete {
            if let Some(recipe) = self.repository.find_by_id(id) {
                list::confirm_delete_window(ctx, &self.theme, recipe, &mut |intent| {
                    intents.push(intent)
                });
            }
        }
    }
}

impl eframe::App for SkilletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply_visuals(ctx);
            self.theme_applied = true;
        }

        let mut intents = Vec::new();
        self.render_top_bar(ctx, &mut intents);
        self.render_diagnostics(ctx);
        self.render_center(ctx, &mut intents);
        self.render_overlays(ctx, &mut intents);

        for intent in intents {
            self.apply_intent(intent);
        }
    }
}
