use product_discovery::domain::recommend::{Query, Recommender};
use product_discovery::infra::config::{self, API_KEY_VAR};
use product_discovery::infra::logging::init_tracing;
use product_discovery::{CatalogStore, LlmConfig, LlmRecommender, RecommendationResult};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--ping-llm [QUERY]]\n\
         \n\
         Reads env vars (or .env):\n\
           CATALOG_PATH, PORT, FRONTEND_URL, {API_KEY_VAR}, LLM_BASE_URL, LLM_MODEL, LLM_TIMEOUT_SECS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("warn");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let ping_position = args.iter().position(|a| a == "--ping-llm");

    // Force-read config (nice error messages if malformed)
    let port = config::port()?;
    let llm = LlmConfig::from_env()?;
    let catalog_path = config::catalog_path();

    println!("> Preflight:");
    println!("  PORT={}", port);
    println!("  FRONTEND_URL={}", config::frontend_url());
    println!("  CATALOG_PATH={}", catalog_path.display());
    println!("  LLM endpoint: {} (model {})", llm.completions_url(), llm.model);
    println!(
        "  {}: {}",
        API_KEY_VAR,
        if llm.is_configured() { "configured" } else { "NOT configured" }
    );

    let catalog = CatalogStore::load(&catalog_path)
        .map_err(|e| anyhow::anyhow!("Catalog failed to load: {}", e))?;
    println!("  Catalog: {} products", catalog.len());
    for category in catalog.categories() {
        println!("    {:<14} {}", category, catalog.list_by_category(&category).len());
    }

    if let Some(pos) = ping_position {
        if !llm.is_configured() {
            return Err(anyhow::anyhow!("--ping-llm needs {} to be set", API_KEY_VAR));
        }
        let raw_query = args
            .get(pos + 1)
            .filter(|a| !a.starts_with("--"))
            .map(String::as_str)
            .unwrap_or("budget laptop for students");
        let query =
            Query::parse(raw_query).ok_or_else(|| anyhow::anyhow!("query must not be blank"))?;

        println!("  Pinging LLM with {:?} ...", query.as_str());
        let recommender = LlmRecommender::new(llm)?;
        let result = recommender.recommend(&query, catalog.list_all()).await?;
        if result == RecommendationResult::fallback() {
            eprintln!(
                "  Warning: got the fallback result; check the credential, endpoint and model \
                 (RUST_LOG=debug shows details)."
            );
        }
        let matched = catalog.select_ids(&result.product_ids);
        println!("  Summary: {}", result.summary);
        println!(
            "  Matched: {}",
            matched.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
        );
    }

    println!("> Preflight OK.");
    Ok(())
}
