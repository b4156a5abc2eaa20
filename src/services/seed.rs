//! Fixed demo catalog used by `POST /api/seed` and `comicstream seed`.

use crate::domain::DocumentId;
use crate::models::{NewEpisode, NewSeries};

fn demo(
    title: &str,
    description: &str,
    cover_url: &str,
    banner_url: &str,
    genres: [&str; 2],
    rating: f64,
    featured: bool,
) -> NewSeries {
    NewSeries {
        title: title.to_string(),
        description: Some(description.to_string()),
        cover_url: Some(cover_url.to_string()),
        banner_url: Some(banner_url.to_string()),
        genres: genres.iter().map(|g| (*g).to_string()).collect(),
        rating: Some(rating),
        featured,
        creator_ids: Vec::new(),
    }
}

/// The three demo series, in insertion order.
#[must_use]
pub fn demo_series() -> Vec<NewSeries> {
    vec![
        demo(
            "Shield of Valor",
            "A lone guardian defends the city with an ancient shield of untold power.",
            "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?q=80&w=1200&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1517466787929-bc90951d0974?q=80&w=1600&auto=format&fit=crop",
            ["Superhero", "Action"],
            4.6,
            true,
        ),
        demo(
            "Neon Nightwatch",
            "Cyber-noir vigilantes patrol a city of light and secrets.",
            "https://images.unsplash.com/photo-1520976229190-1c1cf303d4e9?q=80&w=1200&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1520975730396-2f9b36e636b2?q=80&w=1600&auto=format&fit=crop",
            ["Sci-Fi", "Thriller"],
            4.4,
            false,
        ),
        demo(
            "Arcane Academy",
            "Students master spells and secrets at a mysterious academy.",
            "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1200&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1495461199391-8c39f6b4a3a5?q=80&w=1600&auto=format&fit=crop",
            ["Fantasy", "Adventure"],
            4.7,
            false,
        ),
    ]
}

/// Demo episodes for the first demo series, thumbnailed with its cover.
#[must_use]
pub fn demo_episodes(series_id: DocumentId, thumb_url: Option<&str>) -> Vec<NewEpisode> {
    let episode = |title: &str, synopsis: &str, number: i32, duration: i32| NewEpisode {
        series_id: series_id.to_string(),
        title: title.to_string(),
        synopsis: Some(synopsis.to_string()),
        thumb_url: thumb_url.map(str::to_string),
        video_url: None,
        episode_number: number,
        season: Some(1),
        duration_sec: Some(duration),
    };

    vec![
        episode(
            "Pilot: Rise of the Shield",
            "An unexpected hero inherits a legendary shield.",
            1,
            720,
        ),
        episode(
            "Echoes in Steel",
            "The city trembles as a new villain emerges.",
            2,
            690,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Validate;

    #[test]
    fn demo_payloads_pass_validation() {
        assert!(demo_series().iter().all(|s| s.validate().is_ok()));
        assert!(
            demo_episodes(DocumentId::new(1), None)
                .iter()
                .all(|e| e.validate().is_ok())
        );
    }

    #[test]
    fn only_the_first_series_is_featured() {
        let featured: Vec<bool> = demo_series().iter().map(|s| s.featured).collect();
        assert_eq!(featured, [true, false, false]);
    }

    #[test]
    fn episodes_reference_the_given_series() {
        let episodes = demo_episodes(DocumentId::new(42), Some("cover.jpg"));
        assert_eq!(episodes.len(), 2);
        for (expected_number, episode) in (1..).zip(&episodes) {
            assert_eq!(episode.series_id, "42");
            assert_eq!(episode.episode_number, expected_number);
            assert_eq!(episode.thumb_url.as_deref(), Some("cover.jpg"));
        }
    }
}
