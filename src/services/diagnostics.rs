//! Best-effort database diagnostics for `GET /test`.
//!
//! Nothing here returns an error: every failure is folded into a status string
//! so monitoring can always parse the report.

use crate::db::Store;
use serde::Serialize;
use tracing::warn;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn truncated(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

fn presence(value: Option<String>) -> String {
    if value.is_some_and(|v| !v.is_empty()) {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

impl DiagnosticsReport {
    /// Probes `store` and reports presence of `DATABASE_URL` / `DATABASE_NAME`
    /// as seen through `env`.
    pub async fn collect<F>(store: Option<&Store>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut report = Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: presence(env("DATABASE_URL")),
            database_name: presence(env("DATABASE_NAME")),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        let Some(store) = store else {
            report.database = "⚠️  Available but not initialized".to_string();
            return report;
        };

        report.database = "✅ Available".to_string();
        report.connection_status = "Connected".to_string();

        let check = async {
            store.ping().await?;
            store.collection_names(MAX_COLLECTIONS).await
        };

        match check.await {
            Ok(names) => {
                report.collections = names;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                warn!("Diagnostics check failed: {}", e);
                report.database = format!("⚠️  Connected but Error: {}", truncated(&e.to_string()));
            }
        }

        report
    }
}
