use property_scout::api::HttpApi;
use property_scout::models::ViewMode;
use property_scout::search::view;
use property_scout::search::{ResultsController, ResultsStatus, SearchQuery};
use tracing::{info, Level};

const DEFAULT_API_BASE: &str = "https://onereachservices.com/api";

/// Pages pulled beyond the first, standing in for the "load more" control.
const EXTRA_PAGES: u32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Property Scout");
    info!("=================");

    let raw_query = std::env::args().nth(1).unwrap_or_default();
    let query = SearchQuery::parse(&raw_query);

    if query.is_empty() {
        println!("No search criteria provided.");
        println!("Pass a query string, e.g.:");
        println!("  property-scout 'type=buy&location=Dhaka'");
        return Ok(());
    }

    let base = std::env::var("PROPERTY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    info!("Searching {} with: {}", base, raw_query);

    let api = HttpApi::new(&base)?;
    let mut controller = ResultsController::new(api, query);

    controller.initialize().await;
    for _ in 0..EXTRA_PAGES {
        if !controller.show_load_more() {
            break;
        }
        controller.load_more().await;
    }

    if let ResultsStatus::Failed(message) = controller.status() {
        println!("Error loading properties: {message}");
        println!("Re-run the search to try again.");
        return Ok(());
    }

    if controller.displayed().is_empty() {
        println!("No properties found. Try adjusting your search criteria.");
        return Ok(());
    }

    for (i, property) in controller.displayed().iter().enumerate() {
        let card = view::card(property, ViewMode::Grid);
        println!("{}. {} ({})", i + 1, card.title, card.price_label);
        println!("   {}", card.location);
        println!(
            "   {} bed · {} bath · {}  [{}]",
            card.bedrooms, card.bathrooms, card.area_label, card.type_badge
        );
        if !card.features.is_empty() {
            let mut features = card.features.join(", ");
            if let Some(more) = &card.more_features {
                features.push_str(&format!(" ({more})"));
            }
            println!("   Features: {features}");
        }
        println!();
    }

    println!("{}", controller.results_caption());
    if controller.show_load_more() {
        println!("More results available. Narrow the search or fetch further pages.");
    }

    Ok(())
}
