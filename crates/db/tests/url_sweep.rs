//! Integration tests for the URL sweep against a real database.
//!
//! Exercises:
//! - Plain substring replacement across registry columns
//! - JSON-encoded replacement in `settings.value`
//! - Reported counts and a repeat run
//! - Abort on a failing column without rollback of earlier columns
//! - Table prefixes

use relink_core::report::ReplacementResult;
use relink_core::targets::{default_targets, TargetColumn};
use relink_core::url::ReplacementSpec;
use relink_db::repositories::ColumnReplaceRepo;
use relink_db::sweep::run_sweep;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const OLD: &str = "http://old.example.com";
const NEW: &str = "https://new.example.com";

fn spec() -> ReplacementSpec {
    ReplacementSpec::parse(OLD, NEW).unwrap()
}

async fn insert_page(pool: &PgPool, html: &str, text: &str, markdown: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO pages (html, text, markdown) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(html)
    .bind(text)
    .bind(markdown)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

async fn insert_setting(pool: &PgPool, key: &str, value: &str) {
    sqlx::query("INSERT INTO settings (setting_key, value) VALUES ($1, $2)")
        .bind(key)
        .bind(value)
        .execute(pool)
        .await
        .unwrap();
}

async fn page_html(pool: &PgPool, id: i64) -> String {
    let (html,): (String,) = sqlx::query_as("SELECT html FROM pages WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap();
    html
}

async fn setting_value(pool: &PgPool, key: &str) -> String {
    let (value,): (String,) = sqlx::query_as("SELECT value FROM settings WHERE setting_key = $1")
        .bind(key)
        .fetch_one(pool)
        .await
        .unwrap();
    value
}

fn count_for(results: &[ReplacementResult], target: &TargetColumn) -> u64 {
    results
        .iter()
        .find(|r| &r.target == target)
        .map(|r| r.rows_affected)
        .unwrap_or_else(|| panic!("no result for {}", target.label()))
}

async fn sweep_all(pool: &PgPool, spec: &ReplacementSpec) -> Vec<ReplacementResult> {
    run_sweep(pool, spec, &default_targets(), "", |_| {})
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Plain columns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "tests/migrations")]
async fn replaces_url_inside_page_html(pool: PgPool) {
    let id = insert_page(
        &pool,
        "<a href=\"http://old.example.com/path\">link</a>",
        "",
        "",
    )
    .await;

    sweep_all(&pool, &spec()).await;

    let html = page_html(&pool, id).await;
    assert!(html.contains("https://new.example.com/path"));
    assert!(!html.contains(OLD));
}

#[sqlx::test(migrations = "tests/migrations")]
async fn replaces_every_occurrence_in_a_value(pool: PgPool) {
    let id = insert_page(
        &pool,
        "http://old.example.com/a http://old.example.com/b",
        "",
        "",
    )
    .await;

    sweep_all(&pool, &spec()).await;

    assert_eq!(
        page_html(&pool, id).await,
        "https://new.example.com/a https://new.example.com/b"
    );
}

#[sqlx::test(migrations = "tests/migrations")]
async fn touches_every_registry_column(pool: PgPool) {
    let url = "http://old.example.com/x";
    sqlx::query("INSERT INTO attachments (path) VALUES ($1)")
        .bind(url)
        .execute(&pool)
        .await
        .unwrap();
    insert_page(&pool, url, url, url).await;
    sqlx::query("INSERT INTO images (url) VALUES ($1)")
        .bind(url)
        .execute(&pool)
        .await
        .unwrap();
    insert_setting(&pool, "app-url", url).await;
    sqlx::query("INSERT INTO comments (html, text) VALUES ($1, $1)")
        .bind(url)
        .execute(&pool)
        .await
        .unwrap();

    let results = sweep_all(&pool, &spec()).await;

    for target in default_targets().iter().filter(|t| t.label() != "settings->value") {
        assert_eq!(count_for(&results, target), 1, "{}", target.label());
        let remaining = ColumnReplaceRepo::count_matches(&pool, target.table, target.column, OLD)
            .await
            .unwrap();
        assert_eq!(remaining, 0, "{} still holds the old URL", target.label());
    }
    assert_eq!(count_for(&results, &TargetColumn::plain("settings", "value")), 1);
    assert_eq!(count_for(&results, &TargetColumn::json("settings", "value")), 0);
}

#[sqlx::test(migrations = "tests/migrations")]
async fn non_matching_rows_are_not_counted(pool: PgPool) {
    insert_page(&pool, "http://old.example.com/1", "", "").await;
    insert_page(&pool, "http://old.example.com/2", "", "").await;
    let untouched = insert_page(&pool, "https://elsewhere.test/", "", "").await;

    let results = sweep_all(&pool, &spec()).await;

    assert_eq!(count_for(&results, &TargetColumn::plain("pages", "html")), 2);
    assert_eq!(count_for(&results, &TargetColumn::plain("pages", "text")), 0);
    assert_eq!(page_html(&pool, untouched).await, "https://elsewhere.test/");
}

#[sqlx::test(migrations = "tests/migrations")]
async fn second_run_reports_zero_rows(pool: PgPool) {
    insert_page(&pool, "http://old.example.com/1", "http://old.example.com/2", "").await;
    insert_setting(&pool, "app-logo", r#""http:\/\/old.example.com\/logo.png""#).await;

    let first = sweep_all(&pool, &spec()).await;
    assert!(first.iter().any(|r| r.rows_affected > 0));

    let second = sweep_all(&pool, &spec()).await;
    assert_eq!(second.len(), default_targets().len());
    assert!(second.iter().all(|r| r.rows_affected == 0));
}

// ---------------------------------------------------------------------------
// JSON-encoded columns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "tests/migrations")]
async fn replaces_slash_escaped_url_in_settings(pool: PgPool) {
    insert_setting(&pool, "app-url", r#""http:\/\/old.example.com""#).await;

    let results = sweep_all(&pool, &spec()).await;

    assert_eq!(count_for(&results, &TargetColumn::plain("settings", "value")), 0);
    assert_eq!(count_for(&results, &TargetColumn::json("settings", "value")), 1);

    let stored = setting_value(&pool, "app-url").await;
    let decoded: String = serde_json::from_str(&stored).unwrap();
    assert_eq!(decoded, NEW);
}

#[sqlx::test(migrations = "tests/migrations")]
async fn replaces_url_nested_in_json_document(pool: PgPool) {
    insert_setting(
        &pool,
        "app-custom-head",
        r#"{"logo":"http:\/\/old.example.com\/logo.png","title":"Docs"}"#,
    )
    .await;

    sweep_all(&pool, &spec()).await;

    let stored = setting_value(&pool, "app-custom-head").await;
    let decoded: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(decoded["logo"], "https://new.example.com/logo.png");
    assert_eq!(decoded["title"], "Docs");
}

#[sqlx::test(migrations = "tests/migrations")]
async fn unescaped_json_is_handled_by_plain_pass(pool: PgPool) {
    insert_setting(&pool, "app-url", r#""http://old.example.com""#).await;

    let results = sweep_all(&pool, &spec()).await;

    assert_eq!(count_for(&results, &TargetColumn::plain("settings", "value")), 1);
    let decoded: String = serde_json::from_str(&setting_value(&pool, "app-url").await).unwrap();
    assert_eq!(decoded, NEW);
}

// ---------------------------------------------------------------------------
// Quoting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "tests/migrations")]
async fn quotes_in_arguments_never_reach_the_database(pool: PgPool) {
    let id = insert_page(&pool, "see http://old.example.com/it's", "", "").await;
    let spec = ReplacementSpec::parse("'http://old.example.com'", "'https://new.example.com'")
        .unwrap();

    let results = run_sweep(&pool, &spec, &default_targets(), "", |_| {})
        .await
        .unwrap();

    assert_eq!(count_for(&results, &TargetColumn::plain("pages", "html")), 1);
    assert_eq!(page_html(&pool, id).await, "see https://new.example.com/it's");
}

// ---------------------------------------------------------------------------
// Failure and ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "tests/migrations")]
async fn failure_aborts_remaining_columns_without_rollback(pool: PgPool) {
    let page = insert_page(&pool, "http://old.example.com/p", "", "").await;
    sqlx::query("INSERT INTO comments (html) VALUES ($1)")
        .bind("http://old.example.com/c")
        .execute(&pool)
        .await
        .unwrap();

    let targets = vec![
        TargetColumn::plain("pages", "html"),
        TargetColumn::plain("revisions", "html"),
        TargetColumn::plain("comments", "html"),
    ];
    let mut seen = Vec::new();
    let result = run_sweep(&pool, &spec(), &targets, "", |r| seen.push(r.target.label())).await;

    assert!(result.is_err());
    assert_eq!(seen, vec!["pages->html"]);
    assert_eq!(page_html(&pool, page).await, "https://new.example.com/p");
    let remaining = ColumnReplaceRepo::count_matches(&pool, "comments", "html", OLD)
        .await
        .unwrap();
    assert_eq!(remaining, 1);
}

#[sqlx::test(migrations = "tests/migrations")]
async fn results_follow_registry_order(pool: PgPool) {
    let mut seen = Vec::new();
    let results = run_sweep(&pool, &spec(), &default_targets(), "", |r| {
        seen.push(r.summary_line())
    })
    .await
    .unwrap();

    let expected: Vec<String> = results.iter().map(ReplacementResult::summary_line).collect();
    assert_eq!(seen, expected);
    assert_eq!(seen.first().unwrap(), "Updated 0 rows in attachments->path");
    assert_eq!(
        seen.last().unwrap(),
        "Updated 0 JSON encoded rows in settings->value"
    );
}

// ---------------------------------------------------------------------------
// Table prefix
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "tests/migrations")]
async fn table_prefix_is_applied(pool: PgPool) {
    sqlx::query("INSERT INTO bs_pages (html) VALUES ($1)")
        .bind("http://old.example.com/prefixed")
        .execute(&pool)
        .await
        .unwrap();
    let plain = insert_page(&pool, "http://old.example.com/unprefixed", "", "").await;

    let targets = vec![TargetColumn::plain("pages", "html")];
    let results = run_sweep(&pool, &spec(), &targets, "bs_", |_| {})
        .await
        .unwrap();

    assert_eq!(results[0].rows_affected, 1);
    assert_eq!(results[0].target.label(), "pages->html");
    assert_eq!(
        ColumnReplaceRepo::count_matches(&pool, "bs_pages", "html", NEW)
            .await
            .unwrap(),
        1
    );
    assert_eq!(page_html(&pool, plain).await, "http://old.example.com/unprefixed");
}

#[sqlx::test(migrations = "tests/migrations")]
async fn health_check_passes(pool: PgPool) {
    relink_db::health_check(&pool).await.unwrap();
}
