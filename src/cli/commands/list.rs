//! List series command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_series(config: &Config, limit: u64) -> anyhow::Result<()> {
    let store = Store::new(&config.database.url).await?;
    let series_list = store.list_series(limit).await?;

    if series_list.is_empty() {
        println!("No series stored.");
        println!();
        println!("Add demo data with: comicstream seed");
        return store.close().await;
    }

    println!("Series ({} shown)", series_list.len());
    println!("{:-<70}", "");

    for series in &series_list {
        let marker = if series.featured { "★" } else { "•" };
        let rating = series
            .rating
            .map_or_else(|| "unrated".to_string(), |r| format!("{r:.1}"));

        println!("{} {} [{}]", marker, series.title, rating);
        println!(
            "  ID: {} | Genres: {}",
            series.id,
            if series.genres.is_empty() {
                "-".to_string()
            } else {
                series.genres.join(", ")
            }
        );
    }

    store.close().await
}
