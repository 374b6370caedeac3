use std::env;

use meal_browser::{ApiConfig, MealBrowser, MealClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional search term from command-line arguments
    let args: Vec<String> = env::args().collect();
    let query = args.get(1).map(String::as_str);

    let config = ApiConfig::load().unwrap_or_default();
    let client = MealClient::new(&config)?;
    let mut browser = MealBrowser::new(client);

    browser.fetch_all().await?;
    if let Some(term) = query {
        browser.search(term).await?;
    }

    println!("Areas: {}", browser.filter_categories().join(", "));
    for meal in browser.visible_meals() {
        println!("{} [{}] - {}", meal.name, meal.area, meal.id);
    }

    Ok(())
}
