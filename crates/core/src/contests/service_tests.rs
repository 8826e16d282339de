//! Tests for UpcomingContestService contracts.

#[cfg(test)]
mod tests {
    use crate::cache::{CacheService, MemoryCacheStore};
    use crate::contests::{UpcomingContestService, UpcomingContestSource};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use kodekaro_platform_data::{PlatformDataError, UpcomingContest};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockContestSource {
        contests: Vec<UpcomingContest>,
        calls: AtomicUsize,
    }

    impl MockContestSource {
        fn new(contests: Vec<UpcomingContest>) -> Self {
            Self {
                contests,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl UpcomingContestSource for MockContestSource {
        async fn fetch_upcoming(&self) -> Result<Vec<UpcomingContest>, PlatformDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.contests.clone())
        }
    }

    fn contest(title: &str, site: &str) -> UpcomingContest {
        UpcomingContest {
            title: title.to_string(),
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            start_time: Utc.with_ymd_and_hms(2025, 9, 7, 14, 30, 0).unwrap(),
            site: site.to_string(),
        }
    }

    #[tokio::test]
    async fn test_listing_is_cached() {
        let source = Arc::new(MockContestSource::new(vec![
            contest("Codeforces Round 951", "codeforces"),
            contest("Starters 180", "codechef"),
        ]));
        let cache = CacheService::new(Arc::new(MemoryCacheStore::new()));
        let service = UpcomingContestService::new(source.clone(), cache);

        let first = service.upcoming().await.unwrap();
        let second = service.upcoming().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_filter_by_sites_preserves_order() {
        let contests = vec![
            contest("Codeforces Round 951", "codeforces"),
            contest("Weekly Contest 413", "leetcode"),
            contest("Starters 180", "codechef"),
            contest("Codeforces Round 952", "codeforces"),
        ];

        let filtered =
            UpcomingContestService::filter_by_sites(&contests, &["codeforces", "codechef"]);

        let titles: Vec<&str> = filtered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Codeforces Round 951", "Starters 180", "Codeforces Round 952"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_on_both_sides() {
        // Site casing from the feed is not guaranteed either.
        let contests = vec![
            contest("Weekly Contest 413", "leetcode"),
            contest("Starters 180", "CodeChef"),
        ];
        let filtered = UpcomingContestService::filter_by_sites(&contests, &["LeetCode", "codechef"]);
        assert_eq!(filtered.len(), 2);
    }
}
