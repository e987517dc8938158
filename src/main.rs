mod app;
mod catalog;
mod theme;
mod ui;

use app::SkilletApp;
use catalog::repository::RecipeRepository;
use catalog::store::RecipeStore;
use catalog::MealCategory;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skillet=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // The page identity the window was opened for, e.g. "lunch.html". An
    // unrecognized or absent page means the unfiltered catalog.
    let page = std::env::args().nth(1).unwrap_or_default();
    let route = MealCategory::from_page(&page);

    let store = RecipeStore::at_default_location();
    tracing::info!("recipe store at {}", store.path().display());
    let repository = RecipeRepository::open(store)?;

    let app = SkilletApp::new(repository, route);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([860.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Skillet",
        native_options,
        Box::new(move |_creation_context| Ok(Box::new(app))),
    )?;

    Ok(())
}
