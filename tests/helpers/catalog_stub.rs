// ABOUTME: Test doubles for the recipe catalog
// ABOUTME: A local HTTP stub of TheMealDB and an in-memory RecipeSource with delays and failures

use async_trait::async_trait;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use mealbook::catalog::{MealDbClient, MealDbClientConfig, RawCategory, RawMeal, RecipeSource};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use tokio::net::TcpListener;

// ============================================================================
// Fixtures
// ============================================================================

/// A complete catalog meal record
pub fn meal_json(id: &str, name: &str) -> Value {
    json!({
        "idMeal": id,
        "strMeal": name,
        "strCategory": "Seafood",
        "strArea": "Japanese",
        "strMealThumb": format!("https://img.example/{id}.jpg"),
        "strInstructions": "Rinse the rice.\r\nCook the rice.\n\nServe.",
        "strIngredient1": "Rice",
        "strMeasure1": "2 cups",
        "strIngredient2": "Salmon",
        "strMeasure2": "200g",
        "strIngredient3": "",
        "strMeasure3": " ",
        "strIngredient4": null,
        "strMeasure4": null
    })
}

/// The partial record shape returned by `filter.php`
pub fn partial_meal_json(id: &str, name: &str) -> Value {
    json!({
        "idMeal": id,
        "strMeal": name,
        "strMealThumb": format!("https://img.example/{id}.jpg")
    })
}

/// Wrap a JSON object as a raw record
pub fn raw_meal(value: Value) -> RawMeal {
    RawMeal::from_value(value).expect("fixture must be a JSON object")
}

/// A category list entry
pub fn raw_category(name: &str) -> RawCategory {
    RawCategory {
        name: Some(name.to_owned()),
        thumbnail: Some(format!("https://img.example/{name}.png")),
        description: Some(format!("{name} dishes")),
    }
}

// ============================================================================
// HTTP stub of the catalog
// ============================================================================

/// How the stub answers every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubMode {
    /// Serve fixtures
    Healthy,
    /// Answer 500 with an HTML body
    ServerError,
    /// Answer 200 with a body that is not JSON
    Garbage,
    /// Answer `{"meals": null}` / `{"categories": null}`
    NoMatches,
    /// Serve fixtures with numeric ids and trailing `null` and scalar entries
    Malformed,
}

struct StubState {
    mode: StubMode,
    requests: Mutex<Vec<String>>,
}

/// A local server standing in for TheMealDB
pub struct CatalogStub {
    addr: SocketAddr,
    state: Arc<StubState>,
}

impl CatalogStub {
    /// Start a stub on an ephemeral port
    pub async fn start(mode: StubMode) -> Self {
        let state = Arc::new(StubState {
            mode,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/search.php", get(handle_search))
            .route("/lookup.php", get(handle_lookup))
            .route("/random.php", get(handle_random))
            .route("/filter.php", get(handle_filter))
            .route("/categories.php", get(handle_categories))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// Base URL to hand to the client
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A client pointed at this stub
    pub fn client(&self) -> MealDbClient {
        MealDbClient::new(MealDbClientConfig {
            base_url: self.base_url(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    /// Requests seen so far, as `endpoint?key=value`
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

fn record(state: &StubState, endpoint: &str, query: &HashMap<String, String>) {
    let mut pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.sort();
    state
        .requests
        .lock()
        .unwrap()
        .push(format!("{endpoint}?{}", pairs.join("&")));
}

fn respond(state: &StubState, key: &str, payload: Value) -> Response {
    match state.mode {
        StubMode::Healthy => Json(json!({ key: payload })).into_response(),
        StubMode::NoMatches => Json(json!({ key: null })).into_response(),
        StubMode::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").into_response()
        }
        StubMode::Garbage => (StatusCode::OK, "definitely not json").into_response(),
        StubMode::Malformed => Json(json!({ key: malformed(payload) })).into_response(),
    }
}

fn malformed(payload: Value) -> Value {
    let mut entries = match payload {
        Value::Array(entries) => entries,
        other => vec![other],
    };
    for entry in &mut entries {
        if let Some(fields) = entry.as_object_mut() {
            for key in ["idMeal", "idCategory"] {
                let numeric = fields
                    .get(key)
                    .and_then(Value::as_str)
                    .and_then(|id| id.parse::<u64>().ok());
                if let Some(id) = numeric {
                    fields.insert(key.to_owned(), json!(id));
                }
            }
        }
    }
    entries.push(Value::Null);
    entries.push(json!(42));
    Value::Array(entries)
}

async fn handle_search(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "search.php", &query);
    let name = query.get("s").cloned().unwrap_or_default();
    respond(&state, "meals", json!([meal_json("52771", &format!("{name} pasta"))]))
}

async fn handle_lookup(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "lookup.php", &query);
    let id = query.get("i").cloned().unwrap_or_default();
    if id == "0" {
        return Json(json!({ "meals": null })).into_response();
    }
    respond(&state, "meals", json!([meal_json(&id, "Looked up")]))
}

async fn handle_random(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "random.php", &query);
    respond(&state, "meals", json!([meal_json("52772", "Teriyaki Chicken Casserole")]))
}

async fn handle_filter(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "filter.php", &query);
    respond(
        &state,
        "meals",
        json!([
            partial_meal_json("52959", "Baked salmon with fennel & tomatoes"),
            partial_meal_json("52819", "Cajun spiced fish tacos")
        ]),
    )
}

async fn handle_categories(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "categories.php", &query);
    respond(
        &state,
        "categories",
        json!([
            {
                "idCategory": "1",
                "strCategory": "Beef",
                "strCategoryThumb": "https://img.example/beef.png",
                "strCategoryDescription": "Beef is the culinary name for meat from cattle."
            },
            {
                "idCategory": "2",
                "strCategory": "Chicken",
                "strCategoryThumb": "https://img.example/chicken.png",
                "strCategoryDescription": "Chicken is a type of domesticated fowl."
            }
        ]),
    )
}

/// An address nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ============================================================================
// In-memory source
// ============================================================================

/// Scriptable in-memory [`RecipeSource`]
#[derive(Default)]
pub struct MockSource {
    /// Category list; empty behaves like a failed fetch
    pub categories: Vec<RawCategory>,
    /// Returned by every `random()` call; `None` behaves like a failed fetch
    pub random_meal: Option<RawMeal>,
    /// `filter_by_category` results per category
    pub by_category: HashMap<String, Vec<RawMeal>>,
    /// Artificial latency per category for `filter_by_category`
    pub category_delays: HashMap<String, Duration>,
    /// `search_by_name` results
    pub search_results: Vec<RawMeal>,
    /// `lookup_by_id` results per id
    pub by_id: HashMap<String, RawMeal>,
    /// Number of `random()` calls made
    pub random_calls: AtomicUsize,
}

impl MockSource {
    /// Number of `random()` calls made so far
    pub fn random_call_count(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeSource for MockSource {
    async fn search_by_name(&self, _query: &str) -> Vec<RawMeal> {
        self.search_results.clone()
    }

    async fn lookup_by_id(&self, id: &str) -> Option<RawMeal> {
        self.by_id.get(id).cloned()
    }

    async fn random(&self) -> Option<RawMeal> {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        self.random_meal.clone()
    }

    async fn filter_by_category(&self, category: &str) -> Vec<RawMeal> {
        if let Some(delay) = self.category_delays.get(category) {
            tokio::time::sleep(*delay).await;
        }
        self.by_category.get(category).cloned().unwrap_or_default()
    }

    async fn filter_by_ingredient(&self, _ingredient: &str) -> Vec<RawMeal> {
        Vec::new()
    }

    async fn list_categories(&self) -> Vec<RawCategory> {
        self.categories.clone()
    }
}
