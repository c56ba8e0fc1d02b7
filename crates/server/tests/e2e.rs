use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
    data_dir: std::path::PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Data file in a fresh, not-yet-existing directory per test run
    let data_dir = std::env::temp_dir().join(format!("book_e2e_{}", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.data_file = data_dir.join("books.json").to_string_lossy().into_owned();

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, data_dir })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_book_crud_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let book = json!({
        "title": "Dune",
        "author": "Herbert",
        "publisher": "Chilton",
        "publishedDate": "1965",
        "isbn": "9780441013593"
    });

    // Create
    let res = c.post(format!("{}/books", app.base_url)).json(&book).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["book"], book);

    // Duplicate
    let res = c.post(format!("{}/books", app.base_url)).json(&book).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    // Update
    let res = c
        .put(format!("{}/books/9780441013593", app.base_url))
        .json(&json!({"title": "Dune", "author": "Frank Herbert", "publisher": "Chilton", "publishedDate": "1965-08-01"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["book"]["author"], "Frank Herbert");

    // List
    let res = c.get(format!("{}/books", app.base_url)).send().await?;
    let list = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["publishedDate"], "1965-08-01");

    // Delete, then gone
    let res = c.delete(format!("{}/books/9780441013593", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{}/books/9780441013593", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"message": "Book not found"}));
    Ok(())
}
