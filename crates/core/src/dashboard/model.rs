//! Dashboard view model and projection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use kodekaro_platform_data::{matcher, Platform, RatingRecord, VideoRecord};

/// Lifecycle of one platform view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// No handle or no signed-in user; nothing to show, nothing in flight.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Data is on screen.
    Ready(PlatformView),
    /// The last fetch failed. `last_good` carries the previously rendered
    /// view for transient failures; it is `None` when the stored handle was
    /// rejected.
    Error {
        message: String,
        last_good: Option<PlatformView>,
    },
}

/// Everything one platform panel renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformView {
    pub platform: Platform,
    pub handle: String,
    pub current_rating: Option<i64>,
    pub highest_rating: Option<i64>,
    pub stars: Option<String>,
    /// Contest cards, newest first.
    pub cards: Vec<ContestCard>,
    /// Chart points, chronological.
    pub chart: Vec<ChartPoint>,
}

/// One contest row in the history list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContestCard {
    pub contest_name: String,
    pub rank: i64,
    pub rating: Option<i64>,
    pub timestamp: DateTime<Utc>,
    /// Link to the contest on its platform, when derivable.
    pub url: Option<String>,
    pub bookmarked: bool,
    /// Editorial videos covering this contest, in catalog order.
    pub related_videos: Vec<VideoRecord>,
    pub problems_solved: Option<i64>,
    pub problems_total: Option<i64>,
}

/// One point of the rating chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Axis label, e.g. "Feb 2025".
    pub label: String,
    pub rating: i64,
    pub contest_name: String,
    pub timestamp: DateTime<Utc>,
}

impl PlatformView {
    /// Build the view for one rating record.
    ///
    /// Cards come out newest first: CodeChef histories arrive chronological
    /// and are reversed here, the other platforms already arrive newest
    /// first. The chart is the opposite projection, chronological, and only
    /// includes entries that carry a rating. With `bookmarked_only` set,
    /// cards are filtered to the bookmarked set without reordering.
    pub fn project(
        record: &RatingRecord,
        bookmarked: &HashSet<String>,
        catalog: &[VideoRecord],
        bookmarked_only: bool,
    ) -> PlatformView {
        let strategy = record.platform.match_strategy();

        let newest_first: Vec<_> = match record.platform {
            Platform::Codechef => record.history.iter().rev().collect(),
            Platform::Codeforces | Platform::Leetcode => record.history.iter().collect(),
        };

        let mut cards: Vec<ContestCard> = newest_first
            .iter()
            .map(|result| ContestCard {
                contest_name: result.contest_name.clone(),
                rank: result.rank,
                rating: result.rating,
                timestamp: result.timestamp,
                url: result.source_url(record.platform),
                bookmarked: bookmarked.contains(&result.contest_name),
                related_videos: matcher::related_videos(strategy, &result.contest_name, catalog)
                    .into_iter()
                    .cloned()
                    .collect(),
                problems_solved: result.problems_solved,
                problems_total: result.problems_total,
            })
            .collect();

        if bookmarked_only {
            cards.retain(|card| card.bookmarked);
        }

        let chart: Vec<ChartPoint> = newest_first
            .iter()
            .rev()
            .filter_map(|result| {
                result.rating.map(|rating| ChartPoint {
                    label: result.timestamp.format("%b %Y").to_string(),
                    rating,
                    contest_name: result.contest_name.clone(),
                    timestamp: result.timestamp,
                })
            })
            .collect();

        PlatformView {
            platform: record.platform,
            handle: record.handle.clone(),
            current_rating: record.effective_rating(),
            highest_rating: record.highest_rating,
            stars: record.stars.clone(),
            cards,
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kodekaro_platform_data::ContestResult;

    fn result(name: &str, rating: i64, day: u32) -> ContestResult {
        ContestResult {
            contest_name: name.to_string(),
            rank: 100,
            rating: Some(rating),
            timestamp: Utc.with_ymd_and_hms(2025, 3, day, 20, 0, 0).unwrap(),
            contest_id: Some(format!("C{day}")),
            attended: None,
            problems_solved: None,
            problems_total: None,
        }
    }

    fn codechef_record(names: &[(&str, i64, u32)]) -> RatingRecord {
        RatingRecord {
            handle: "chef".to_string(),
            platform: Platform::Codechef,
            // Chronological, as the adapter delivers it.
            history: names.iter().map(|(n, r, d)| result(n, *r, *d)).collect(),
            current_rating: None,
            highest_rating: None,
            stars: None,
        }
    }

    #[test]
    fn test_codechef_cards_newest_first_chart_chronological() {
        let record = codechef_record(&[
            ("Starters 171", 1500, 1),
            ("Starters 172", 1550, 8),
            ("Starters 173", 1600, 15),
        ]);

        let view = PlatformView::project(&record, &HashSet::new(), &[], false);

        let card_names: Vec<&str> = view.cards.iter().map(|c| c.contest_name.as_str()).collect();
        assert_eq!(card_names, vec!["Starters 173", "Starters 172", "Starters 171"]);

        let chart_names: Vec<&str> = view.chart.iter().map(|p| p.contest_name.as_str()).collect();
        assert_eq!(chart_names, vec!["Starters 171", "Starters 172", "Starters 173"]);
        assert_eq!(view.chart[0].label, "Mar 2025");
    }

    #[test]
    fn test_bookmarked_filter_keeps_relative_order() {
        let record = codechef_record(&[
            ("Starters 170", 1480, 1),
            ("Starters 171", 1500, 5),
            ("Starters 172", 1550, 10),
            ("Starters 173", 1600, 15),
            ("Starters 174", 1580, 20),
        ]);
        let bookmarked =
            HashSet::from(["Starters 171".to_string(), "Starters 173".to_string()]);

        let view = PlatformView::project(&record, &bookmarked, &[], true);

        let names: Vec<&str> = view.cards.iter().map(|c| c.contest_name.as_str()).collect();
        // Newest-first display order, with only the bookmarked two surviving.
        assert_eq!(names, vec!["Starters 173", "Starters 171"]);
    }

    #[test]
    fn test_cards_carry_related_videos_and_urls() {
        let record = codechef_record(&[("Starters 173 (Rated for Div 2, 3 & 4)", 1600, 15)]);
        let catalog = vec![
            VideoRecord::new("CodeChef Starters 173 Full Solution", "https://youtu.be/a"),
            VideoRecord::new("Starters 174 Editorial", "https://youtu.be/b"),
        ];

        let view = PlatformView::project(&record, &HashSet::new(), &catalog, false);

        assert_eq!(view.cards[0].related_videos.len(), 1);
        assert_eq!(
            view.cards[0].related_videos[0].title,
            "CodeChef Starters 173 Full Solution"
        );
        assert_eq!(
            view.cards[0].url.as_deref(),
            Some("https://www.codechef.com/C15")
        );
    }

    #[test]
    fn test_unrated_entries_skipped_in_chart_but_kept_as_cards() {
        let mut record = codechef_record(&[("Starters 171", 1500, 1)]);
        record.platform = Platform::Leetcode;
        record.history.insert(
            0,
            ContestResult {
                rating: None,
                attended: Some(false),
                ..result("Biweekly Contest 140", 0, 20)
            },
        );

        let view = PlatformView::project(&record, &HashSet::new(), &[], false);

        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.chart.len(), 1);
        assert_eq!(view.chart[0].contest_name, "Starters 171");
    }
}
