use crate::catalog::store::{RecipeStore, StoreError};
use crate::catalog::Recipe;

/// The five mutable fields as read from a form. An empty procedure field
/// means the record has none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub procedure: String,
}

impl RecipeDraft {
    fn procedure_value(&self) -> Option<String> {
        if self.procedure.is_empty() {
            None
        } else {
            Some(self.procedure.clone())
        }
    }
}

/// Owns the in-memory collection, the single source of truth for a session.
/// Every mutation re-serializes the full collection through the store.
pub struct RecipeRepository {
    recipes: Vec<Recipe>,
    store: RecipeStore,
}

impl RecipeRepository {
    pub fn open(store: RecipeStore) -> Result<Self, StoreError> {
        let recipes = store.load()?;
        Ok(Self { recipes, store })
    }

    pub fn with_recipes(store: RecipeStore, recipes: Vec<Recipe>) -> Self {
        Self { recipes, store }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    fn next_id(&self) -> u32 {
        self.recipes.last().map_or(1, |recipe| recipe.id + 1)
    }

    /// Appends a new record with the next id and persists. Ids freed by
    /// deleting the tail record may be handed out again.
    pub fn add(&mut self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let procedure = draft.procedure_value();
        let recipe = Recipe {
            id: self.next_id(),
            title: draft.title,
            category: draft.category,
            image: draft.image,
            description: draft.description,
            procedure,
        };

        self.recipes.push(recipe.clone());
        self.store.save(&self.recipes)?;
        Ok(recipe)
    }

    /// Overwrites all mutable fields of the matching record in place and
    /// persists. Returns `Ok(false)` without writing when no record has the
    /// given id.
    pub fn update(&mut self, id: u32, draft: RecipeDraft) -> Result<bool, StoreError> {
        let procedure = draft.procedure_value();
        let Some(recipe) = self.recipes.iter_mut().find(|recipe| recipe.id == id) else {
            return Ok(false);
        };

        recipe.title = draft.title;
        recipe.category = draft.category;
        recipe.image = draft.image;
        recipe.description = draft.description;
        recipe.procedure = procedure;

        self.store.save(&self.recipes)?;
        Ok(true)
    }

    /// Removes the matching record and persists. Returns `Ok(false)` without
    /// writing when no record has the given id.
    pub fn delete(&mut self, id: u32) -> Result<bool, StoreError> {
        let Some(index) = self.recipes.iter().position(|recipe| recipe.id == id) else {
            return Ok(false);
        };

        self.recipes.remove(index);
        self.store.save(&self.recipes)?;
        Ok(true)
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.category == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match against title or category, in
    /// collection order.
    pub fn filter_by_text(&self, query: &str) -> Vec<Recipe> {
        let lowered = query.to_lowercase();
        self.recipes
            .iter()
            .filter(|recipe| {
                recipe.title.to_lowercase().contains(&lowered)
                    || recipe.category.to_lowercase().contains(&lowered)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecipeDraft, RecipeRepository};
    use crate::catalog::store::RecipeStore;
    use crate::catalog::seed_recipes;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "skillet_repository_{prefix}_{}_{}.json",
            std::process::id(),
            nanos
        ))
    }

    fn seeded(prefix: &str) -> (RecipeRepository, RecipeStore, PathBuf) {
        let path = temp_path(prefix);
        let store = RecipeStore::new(path.clone());
        let repository =
            RecipeRepository::open(store.clone()).expect("seed collection should load");
        (repository, store, path)
    }

    fn tea_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Tea".to_string(),
            category: "breakfast".to_string(),
            image: "images/tea.jpg".to_string(),
            description: "Hot water, improved.".to_string(),
            procedure: "Steep the leaves for three minutes.".to_string(),
        }
    }

    #[test]
    fn add_to_empty_collection_assigns_id_one() {
        let path = temp_path("empty_add");
        let store = RecipeStore::new(path.clone());
        let mut repository = RecipeRepository::with_recipes(store, Vec::new());

        let recipe = repository.add(tea_draft()).expect("add should persist");
        assert_eq!(recipe.id, 1);
        assert_eq!(repository.recipes().len(), 1);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn add_to_seed_collection_assigns_id_six_and_persists() {
        let (mut repository, store, path) = seeded("seed_add");

        let recipe = repository.add(tea_draft()).expect("add should persist");
        assert_eq!(recipe.id, 6);
        assert_eq!(repository.recipes().len(), 6);

        let persisted = store.load().expect("persisted blob should load");
        assert_eq!(persisted.len(), 6);
        assert_eq!(persisted, repository.recipes());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn add_after_deleting_the_tail_reuses_the_freed_id() {
        let (mut repository, _store, path) = seeded("tail_reuse");

        assert!(repository.delete(5).expect("delete should persist"));
        let recipe = repository.add(tea_draft()).expect("add should persist");
        assert_eq!(recipe.id, 5);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn empty_procedure_field_is_stored_as_none() {
        let (mut repository, _store, path) = seeded("empty_procedure");

        let mut draft = tea_draft();
        draft.procedure = String::new();
        let recipe = repository.add(draft).expect("add should persist");
        assert!(recipe.procedure.is_none());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn delete_removes_exactly_one_matching_record() {
        let (mut repository, store, path) = seeded("delete");

        assert!(repository.delete(3).expect("delete should persist"));
        assert_eq!(repository.recipes().len(), 4);
        assert!(repository.find_by_id(3).is_none());
        assert!(repository
            .recipes()
            .iter()
            .all(|recipe| recipe.title != "Spaghetti Bolognese"));

        let persisted = store.load().expect("persisted blob should load");
        assert_eq!(persisted, repository.recipes());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn delete_of_a_missing_id_is_a_reported_no_op() {
        let (mut repository, _store, path) = seeded("delete_missing");

        assert!(!repository.delete(42).expect("missing id should not error"));
        assert_eq!(repository.recipes(), seed_recipes());
        assert!(!path.exists());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn update_overwrites_fields_in_place() {
        let (mut repository, store, path) = seeded("update");

        let draft = RecipeDraft {
            title: "Greek Salad".to_string(),
            category: "lunch".to_string(),
            image: "images/salad.jpg".to_string(),
            description: "A fresh Caesar salad with a homemade dressing.".to_string(),
            procedure: "Toss lettuce with Caesar dressing and croutons.".to_string(),
        };
        assert!(repository.update(2, draft).expect("update should persist"));

        assert_eq!(repository.recipes().len(), 5);
        let updated = repository.find_by_id(2).expect("record 2 should remain");
        assert_eq!(updated.title, "Greek Salad");
        assert_eq!(repository.recipes()[1].id, 2);

        let persisted = store.load().expect("persisted blob should load");
        assert_eq!(persisted, repository.recipes());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn update_of_a_missing_id_signals_not_found() {
        let (mut repository, _store, path) = seeded("update_missing");

        let found = repository
            .update(42, tea_draft())
            .expect("missing id should not error");
        assert!(!found);
        assert_eq!(repository.recipes(), seed_recipes());
        assert!(!path.exists());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn category_filter_matches_exactly_and_keeps_order() {
        let (mut repository, _store, path) = seeded("category_filter");

        let mut second_lunch = tea_draft();
        second_lunch.title = "Club Sandwich".to_string();
        second_lunch.category = "lunch".to_string();
        repository.add(second_lunch).expect("add should persist");

        let lunches = repository.filter_by_category("lunch");
        let titles: Vec<&str> = lunches.iter().map(|recipe| recipe.title.as_str()).collect();
        assert_eq!(titles, vec!["Caesar Salad", "Club Sandwich"]);

        assert!(repository.filter_by_category("Lunch").is_empty());
        assert!(repository.filter_by_category("brunch").is_empty());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn text_filter_is_case_insensitive_over_title_and_category() {
        let (repository, _store, path) = seeded("text_filter");

        let by_title = repository.filter_by_text("PANCAKE");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Pancakes");

        let by_category = repository.filter_by_text("dess");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].title, "Brownies");

        assert!(repository.filter_by_text("zucchini").is_empty());
        assert_eq!(repository.filter_by_text("").len(), 5);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn every_mutation_leaves_the_blob_matching_memory() {
        let (mut repository, store, path) = seeded("round_trip_law");

        repository.add(tea_draft()).expect("add should persist");
        let persisted = store.load().expect("blob should load after add");
        assert_eq!(persisted, repository.recipes());

        let mut draft = tea_draft();
        draft.title = "Green Tea".to_string();
        assert!(repository.update(6, draft).expect("update should persist"));
        let persisted = store.load().expect("blob should load after update");
        assert_eq!(persisted, repository.recipes());

        assert!(repository.delete(1).expect("delete should persist"));
        let persisted = store.load().expect("blob should load after delete");
        assert_eq!(persisted, repository.recipes());

        let _ = fs::remove_file(path);
    }
}
