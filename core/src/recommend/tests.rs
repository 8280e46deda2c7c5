mod common {
    use crate::prefs::UserProfile;
    use crate::types::{Comic, ComicStatus, Slug};
    use chrono::{DateTime, Duration, Utc};
    use std::collections::BTreeMap;

    pub(super) fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    pub(super) fn comic(id: u64, tags: &[&str], views: u64, days_ago: i64) -> Comic {
        Comic {
            id,
            title: format!("Comic {id}"),
            slug: Slug::try_new(format!("comic-{id}")).unwrap(),
            thumbnail: String::new(),
            author: None,
            updated_at: now() - Duration::days(days_ago),
            views: Some(views),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status: Some(ComicStatus::Ongoing),
            description: None,
            rating: None,
        }
    }

    pub(super) fn profile(tags: &[(&str, u32)]) -> UserProfile {
        UserProfile {
            favorite_tags: tags
                .iter()
                .map(|(tag, weight)| (tag.to_string(), *weight))
                .collect::<BTreeMap<_, _>>(),
            ..UserProfile::default()
        }
    }

    pub(super) fn ids(recs: &[crate::recommend::Recommendation]) -> Vec<u64> {
        recs.iter().map(|r| r.comic.id).collect()
    }
}

mod features {
    use super::common::{comic, now, profile};
    use crate::recommend::FeatureVector;

    #[test]
    fn test_extract() {
        let comic = comic(1, &["Action", "Romance"], 50, 15);
        let profile = profile(&[("Action", 2), ("Romance", 1)]);

        let features = FeatureVector::extract(&comic, &profile, 100, now());

        assert_eq!(features.tag_affinity, 3.0);
        assert_eq!(features.popularity, 0.5);
        assert_eq!(features.freshness, 0.5);
    }

    #[test]
    fn test_stale_and_unviewed() {
        let comic = comic(1, &[], 0, 90);

        let features = FeatureVector::extract(&comic, &profile(&[]), 0, now());

        assert_eq!(features.tag_affinity, 0.0);
        assert_eq!(features.popularity, 0.0);
        assert_eq!(features.freshness, 0.0);
    }
}

mod scoring {
    use crate::recommend::{FeatureVector, MAX_SCORE, WeightTable};

    #[test]
    fn test_weighted_sum() {
        let features = FeatureVector {
            tag_affinity: 2.0,
            popularity: 1.0,
            freshness: 0.5,
        };

        assert_eq!(WeightTable::default().score(&features), 50);
    }

    #[test]
    fn test_score_capped() {
        let features = FeatureVector {
            tag_affinity: 50.0,
            popularity: 1.0,
            freshness: 1.0,
        };

        assert_eq!(WeightTable::default().score(&features), MAX_SCORE);
    }
}

mod ranking {
    use super::common::{comic, ids, now, profile};
    use crate::recommend::{MatchReason, Recommender, Tab};
    use crate::types::ComicStatus;

    #[test]
    fn test_for_you_prefers_liked_tags() {
        let comics = vec![
            comic(1, &["Romance"], 100, 40),
            comic(2, &["Action"], 100, 40),
        ];
        let profile = profile(&[("Action", 3)]);

        let ranked = Recommender::default().rank(&comics, &profile, Tab::ForYou, now());

        assert_eq!(ids(&ranked), vec![2, 1]);
        assert_eq!(ranked[0].score, 45);
        assert_eq!(ranked[1].score, 15);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let comics: Vec<_> = (1..=10)
            .map(|id| comic(id, &["Action"], id * 10, id as i64))
            .collect();
        let profile = profile(&[("Action", 1)]);
        let recommender = Recommender::default();

        let first = recommender.rank(&comics, &profile, Tab::ForYou, now());
        let second = recommender.rank(&comics, &profile, Tab::ForYou, now());

        assert_eq!(first, second);
    }

    #[test]
    fn test_reasons() {
        let comics = vec![
            comic(1, &["Action"], 100, 0),
            comic(2, &["Action"], 0, 40),
            comic(3, &["Drama"], 0, 40),
            comic(4, &["Drama"], 100, 0),
        ];
        let profile = profile(&[("Action", 6)]);

        let ranked = Recommender::default().rank(&comics, &profile, Tab::ForYou, now());
        let reason = |id: u64| {
            ranked
                .iter()
                .find(|r| r.comic.id == id)
                .map(|r| r.reason.clone())
                .unwrap()
        };

        assert_eq!(reason(1), MatchReason::StrongMatch);
        assert_eq!(reason(2), MatchReason::BecauseYouLike("Action".to_string()));
        assert_eq!(reason(3), MatchReason::RecentlyUpdated);
        assert_eq!(reason(4), MatchReason::RecentlyUpdated);
    }

    #[test]
    fn test_trending_orders_by_update() {
        let comics = vec![
            comic(1, &[], 0, 3),
            comic(2, &[], 0, 1),
            comic(3, &[], 0, 2),
        ];

        let ranked = Recommender::default().rank(&comics, &profile(&[]), Tab::Trending, now());

        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn test_completed_filters_status() {
        let mut done = comic(2, &[], 0, 1);
        done.status = Some(ComicStatus::Completed);
        let comics = vec![comic(1, &[], 0, 1), done];

        let ranked = Recommender::default().rank(&comics, &profile(&[]), Tab::Completed, now());

        assert_eq!(ids(&ranked), vec![2]);
    }

    #[test]
    fn test_hidden_gems_are_less_viewed_and_well_rated() {
        let mut low_rated = comic(1, &[], 10, 1);
        low_rated.rating = Some(3.5);
        let mut high_rated = comic(2, &[], 20, 1);
        high_rated.rating = Some(4.8);
        let comics = vec![low_rated, high_rated, comic(3, &[], 500, 1), comic(4, &[], 900, 1)];

        let ranked = Recommender::default().rank(&comics, &profile(&[]), Tab::HiddenGems, now());

        assert_eq!(ids(&ranked), vec![2, 1]);
    }
}
