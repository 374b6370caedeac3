use meal_browser::{ApiConfig, MealBrowser, MealClient};

fn meal_json(id: &str, name: &str, area: &str) -> String {
    format!(
        r#"{{
            "idMeal": "{id}",
            "strMeal": "{name}",
            "strCategory": "Test",
            "strArea": "{area}",
            "strInstructions": "Cook.",
            "strMealThumb": "https://example.com/{id}.jpg",
            "strYoutube": "",
            "strIngredient1": "salt",
            "strMeasure1": "1 tsp"
        }}"#
    )
}

fn catalog_body() -> String {
    format!(
        r#"{{"meals": [{}, {}, {}, {}]}}"#,
        meal_json("1", "Arrabiata", "Italian"),
        meal_json("2", "Tacos", "Mexican"),
        meal_json("3", "Carbonara", "Italian"),
        meal_json("4", "Enchiladas", "Mexican")
    )
}

fn scoped_body() -> String {
    format!(r#"{{"meals": [{}]}}"#, meal_json("2", "Tacos", "Mexican"))
}

fn browser_for(server: &mockito::Server) -> MealBrowser<MealClient> {
    let config = ApiConfig {
        endpoint: format!("{}/search.php", server.url()),
        timeout: 5,
    };
    MealBrowser::new(MealClient::new(&config).unwrap())
}

#[tokio::test]
async fn test_fetch_then_filter_then_reset() {
    let mut server = mockito::Server::new_async().await;
    let _catalog = server
        .mock("GET", "/search.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalog_body())
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    browser.fetch_all().await.unwrap();

    assert_eq!(browser.visible_meals().len(), 4);
    assert_eq!(browser.filter_categories(), &["Italian", "Mexican"]);

    browser.toggle_filter("Mexican");
    let names: Vec<&str> = browser
        .visible_meals()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["Tacos", "Enchiladas"]);

    browser.reset();
    assert_eq!(browser.visible_meals().len(), 4);
    assert!(browser.selected_filters().is_empty());
}

#[tokio::test]
async fn test_search_narrows_and_reset_restores_catalog() {
    let mut server = mockito::Server::new_async().await;
    let _catalog = server
        .mock("GET", "/search.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalog_body())
        .create_async()
        .await;
    let _scoped = server
        .mock("GET", "/search.php?s=taco")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(scoped_body())
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    browser.fetch_all().await.unwrap();
    browser.search("taco").await.unwrap();

    // The scoped result replaces the base set and its vocabulary
    assert_eq!(browser.visible_meals().len(), 1);
    assert_eq!(browser.visible_meals()[0].name, "Tacos");
    assert_eq!(browser.filter_categories(), &["Mexican"]);

    // Reset returns to the retained unscoped catalog without refetching
    browser.reset();
    assert_eq!(browser.visible_meals().len(), 4);
    assert_eq!(browser.filter_categories(), &["Italian", "Mexican"]);
}

#[tokio::test]
async fn test_failed_scoped_search_keeps_current_view() {
    let mut server = mockito::Server::new_async().await;
    let _catalog = server
        .mock("GET", "/search.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalog_body())
        .create_async()
        .await;
    let _broken = server
        .mock("GET", "/search.php?s=taco")
        .with_status(503)
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    browser.fetch_all().await.unwrap();

    let result = browser.search("taco").await;

    assert!(result.is_err());
    assert_eq!(browser.visible_meals().len(), 4);
    assert_eq!(browser.filter_categories(), &["Italian", "Mexican"]);
}
