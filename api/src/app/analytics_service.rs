//! Analytics read model
//!
//! Rankings, distributions, follower trends and audience demographics over
//! the stored scores and snapshots. Nothing here writes.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::entities::{
    Account, AccountId, AccountQuery, Distribution, MetricSnapshot, ScoreMetric, SortOrder,
};
use crate::domain::ports::{
    AccountRepository, AudienceSnapshotRepository, MetricSnapshotRepository,
};
use crate::error::DomainError;

/// Label used for accounts without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Locations kept in aggregated demographics
pub const TOP_LOCATIONS: usize = 10;

/// Interest categories kept in aggregated demographics
pub const TOP_INTERESTS: usize = 15;

/// Widest growth-trend window, in days
pub const MAX_TREND_DAYS: i64 = 3650;

/// Thresholds for investment opportunities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpportunityCriteria {
    pub min_score: f64,
    pub min_growth: f64,
    pub limit: u64,
}

impl Default for OpportunityCriteria {
    fn default() -> Self {
        Self {
            min_score: 0.7,
            min_growth: 0.1,
            limit: 10,
        }
    }
}

/// An account ranked by a single metric
#[derive(Debug, Clone, Serialize)]
pub struct RankedAccount {
    pub id: AccountId,
    pub handle: String,
    pub full_name: Option<String>,
    pub follower_count: i64,
    pub category: Option<String>,
    pub is_verified: bool,
    pub metric_name: ScoreMetric,
    pub metric_value: f64,
}

/// An account passing the opportunity thresholds
#[derive(Debug, Clone, Serialize)]
pub struct Opportunity {
    pub id: AccountId,
    pub handle: String,
    pub full_name: Option<String>,
    pub follower_count: i64,
    pub category: Option<String>,
    pub overall_score: f64,
    pub growth_rate: f64,
    pub engagement_rate: f64,
    pub audience_quality: f64,
}

impl From<Account> for Opportunity {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            handle: account.handle,
            full_name: account.full_name,
            follower_count: account.follower_count,
            category: account.category,
            overall_score: account.scores.overall_investment_score,
            growth_rate: account.scores.growth_rate,
            engagement_rate: account.scores.engagement_rate,
            audience_quality: account.scores.audience_quality_score,
        }
    }
}

/// Count of accounts whose overall score falls in a range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBucket {
    pub range: &'static str,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Overall-score buckets; the last one is closed at 1.0
const SCORE_BUCKETS: [(&str, f64, f64); 5] = [
    ("Very Low", 0.0, 0.2),
    ("Low", 0.2, 0.4),
    ("Medium", 0.4, 0.6),
    ("High", 0.6, 0.8),
    ("Very High", 0.8, 1.0),
];

/// Accounts per category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub avg_score: f64,
}

/// Averaged audience distributions across accounts
#[derive(Debug, Clone, Default, Serialize)]
pub struct AudienceDemographics {
    pub age_distribution: Distribution,
    pub gender_distribution: Distribution,
    pub location_distribution: Distribution,
    pub interest_categories: Distribution,
}

/// Latest audience composition of one account
#[derive(Debug, Clone, Serialize)]
pub struct AccountDemographics {
    pub account_id: AccountId,
    pub handle: Option<String>,
    pub age_distribution: Option<Distribution>,
    pub gender_distribution: Option<Distribution>,
    pub location_distribution: Option<Distribution>,
    pub interest_categories: Distribution,
}

/// Average follower count of one account on one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub follower_count: i64,
    /// Relative change from the previous point, 0.0 on the first
    pub growth_rate: f64,
}

/// Daily followers summed over every account with a snapshot that day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateTrendPoint {
    pub date: NaiveDate,
    pub total_followers: i64,
    pub avg_growth_rate: f64,
    pub account_count: usize,
}

/// Follower history, either for one account or summed across all
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GrowthTrends {
    Account {
        account_id: AccountId,
        handle: String,
        data: Vec<TrendPoint>,
    },
    Aggregate {
        data: Vec<AggregateTrendPoint>,
    },
}

/// Collapse one account's snapshots (oldest first) into daily averages
fn daily_points(snapshots: &[MetricSnapshot]) -> Vec<TrendPoint> {
    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for snapshot in snapshots {
        let entry = by_day.entry(snapshot.recorded_at.date_naive()).or_default();
        entry.0 += snapshot.follower_count as f64;
        entry.1 += 1;
    }

    let mut previous: Option<f64> = None;
    by_day
        .into_iter()
        .map(|(date, (sum, count))| {
            let average = sum / count as f64;
            let growth_rate = match previous {
                Some(prev) if prev > 0.0 => (average - prev) / prev,
                _ => 0.0,
            };
            previous = Some(average);
            TrendPoint {
                date,
                follower_count: average.round() as i64,
                growth_rate,
            }
        })
        .collect()
}

/// Running per-label sums for one demographic field
#[derive(Default)]
struct DistributionAverager {
    sums: HashMap<String, f64>,
    samples: usize,
}

impl DistributionAverager {
    fn add(&mut self, distribution: &Distribution) {
        self.samples += 1;
        for (label, share) in distribution {
            *self.sums.entry(label.clone()).or_default() += share;
        }
    }

    fn average(self) -> Distribution {
        if self.samples == 0 {
            return Distribution::new();
        }
        let samples = self.samples as f64;
        self.sums
            .into_iter()
            .map(|(label, sum)| (label, sum / samples))
            .collect()
    }

    /// Average keeping only the `n` largest shares; ties break on label.
    fn top(self, n: usize) -> Distribution {
        let mut entries: Vec<(String, f64)> = self.average().into_iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries.into_iter().collect()
    }
}

/// Service for read-only analytics over accounts, snapshots and audiences
pub struct AnalyticsService<AR, MR, ASR>
where
    AR: AccountRepository,
    MR: MetricSnapshotRepository,
    ASR: AudienceSnapshotRepository,
{
    accounts: Arc<AR>,
    metrics: Arc<MR>,
    audiences: Arc<ASR>,
}

impl<AR, MR, ASR> AnalyticsService<AR, MR, ASR>
where
    AR: AccountRepository,
    MR: MetricSnapshotRepository,
    ASR: AudienceSnapshotRepository,
{
    pub fn new(accounts: Arc<AR>, metrics: Arc<MR>, audiences: Arc<ASR>) -> Self {
        Self {
            accounts,
            metrics,
            audiences,
        }
    }

    /// Highest accounts by `metric`, optionally within one category
    pub async fn top_accounts(
        &self,
        metric: ScoreMetric,
        limit: u64,
        category: Option<String>,
    ) -> Result<Vec<RankedAccount>, DomainError> {
        if limit == 0 {
            return Err(DomainError::Validation("limit must be positive".to_string()));
        }

        let query = AccountQuery {
            sort_by: metric,
            order: SortOrder::Desc,
            category,
            limit,
            ..Default::default()
        };

        let accounts = self.accounts.list(&query).await?;

        Ok(accounts
            .into_iter()
            .map(|account| RankedAccount {
                metric_value: account.metric(metric),
                metric_name: metric,
                id: account.id,
                handle: account.handle,
                full_name: account.full_name,
                follower_count: account.follower_count,
                category: account.category,
                is_verified: account.is_verified,
            })
            .collect())
    }

    /// Accounts with both a high overall score and strong growth, best first
    pub async fn investment_opportunities(
        &self,
        criteria: OpportunityCriteria,
    ) -> Result<Vec<Opportunity>, DomainError> {
        if criteria.limit == 0 {
            return Err(DomainError::Validation("limit must be positive".to_string()));
        }

        let query = AccountQuery {
            sort_by: ScoreMetric::OverallInvestmentScore,
            order: SortOrder::Desc,
            min_score: Some(criteria.min_score),
            min_growth: Some(criteria.min_growth),
            limit: criteria.limit,
            ..Default::default()
        };

        let accounts = self.accounts.list(&query).await?;
        Ok(accounts.into_iter().map(Opportunity::from).collect())
    }

    /// Number of accounts in each overall-score bucket
    pub async fn score_distribution(&self) -> Result<Vec<ScoreBucket>, DomainError> {
        let accounts = self.accounts.find_all().await?;

        let buckets = SCORE_BUCKETS
            .iter()
            .enumerate()
            .map(|(i, &(range, min, max))| {
                let last = i == SCORE_BUCKETS.len() - 1;
                let count = accounts
                    .iter()
                    .map(|a| a.scores.overall_investment_score)
                    .filter(|&s| s >= min && (s < max || (last && s <= max)))
                    .count();
                ScoreBucket {
                    range,
                    min,
                    max,
                    count,
                }
            })
            .collect();

        Ok(buckets)
    }

    /// Count and mean overall score per category, ordered by label
    pub async fn category_distribution(
        &self,
        min_score: Option<f64>,
    ) -> Result<Vec<CategorySummary>, DomainError> {
        let accounts = self.accounts.find_all().await?;

        let mut groups: BTreeMap<String, (usize, f64)> = BTreeMap::new();
        for account in accounts
            .iter()
            .filter(|a| min_score.map_or(true, |min| a.scores.overall_investment_score >= min))
        {
            let label = account
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            let entry = groups.entry(label).or_default();
            entry.0 += 1;
            entry.1 += account.scores.overall_investment_score;
        }

        Ok(groups
            .into_iter()
            .map(|(category, (count, total))| CategorySummary {
                category,
                count,
                avg_score: total / count as f64,
            })
            .collect())
    }

    /// Daily follower averages over the last `days` days.
    ///
    /// With an account, that account's own history; without one, the
    /// per-account daily averages summed for each day.
    pub async fn growth_trends(
        &self,
        days: i64,
        account_id: Option<AccountId>,
    ) -> Result<GrowthTrends, DomainError> {
        if !(1..=MAX_TREND_DAYS).contains(&days) {
            return Err(DomainError::Validation(format!(
                "days must be between 1 and {}",
                MAX_TREND_DAYS
            )));
        }
        let since = Utc::now() - Duration::days(days);

        if let Some(id) = account_id {
            let account = self
                .accounts
                .find_by_id(&id)
                .await?
                .ok_or_else(|| DomainError::NotFound(format!("Account {}", id)))?;
            let snapshots = self.metrics.find_by_account_since(&id, Some(since)).await?;

            return Ok(GrowthTrends::Account {
                account_id: account.id,
                handle: account.handle,
                data: daily_points(&snapshots),
            });
        }

        let snapshots = self.metrics.find_since(since).await?;
        let mut by_account: HashMap<AccountId, Vec<MetricSnapshot>> = HashMap::new();
        for snapshot in snapshots {
            by_account
                .entry(snapshot.account_id)
                .or_default()
                .push(snapshot);
        }

        let mut by_day: BTreeMap<NaiveDate, (i64, f64, usize)> = BTreeMap::new();
        for history in by_account.values() {
            for point in daily_points(history) {
                let entry = by_day.entry(point.date).or_default();
                entry.0 = entry.0.saturating_add(point.follower_count);
                entry.1 += point.growth_rate;
                entry.2 += 1;
            }
        }

        tracing::debug!(
            accounts = by_account.len(),
            days = by_day.len(),
            "Aggregated growth trends"
        );

        Ok(GrowthTrends::Aggregate {
            data: by_day
                .into_iter()
                .map(|(date, (total, growth, count))| AggregateTrendPoint {
                    date,
                    total_followers: total,
                    avg_growth_rate: growth / count as f64,
                    account_count: count,
                })
                .collect(),
        })
    }

    /// Distributions from the latest audience snapshot of one account
    pub async fn account_demographics(
        &self,
        account_id: &AccountId,
    ) -> Result<AccountDemographics, DomainError> {
        let snapshot = self.audiences.find_latest(account_id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("Audience snapshot for account {}", account_id))
        })?;
        let handle = self
            .accounts
            .find_by_id(account_id)
            .await?
            .map(|account| account.handle);

        Ok(AccountDemographics {
            account_id: snapshot.account_id,
            handle,
            age_distribution: snapshot.age_distribution,
            gender_distribution: snapshot.gender_distribution,
            location_distribution: snapshot.location_distribution,
            interest_categories: snapshot.interest_categories,
        })
    }

    /// Average of the latest audience snapshot of every account.
    ///
    /// Each field is averaged over the snapshots that carry it.
    pub async fn audience_demographics(&self) -> Result<AudienceDemographics, DomainError> {
        let snapshots = self.audiences.find_latest_per_account().await?;

        let mut age = DistributionAverager::default();
        let mut gender = DistributionAverager::default();
        let mut location = DistributionAverager::default();
        let mut interests = DistributionAverager::default();

        for snapshot in &snapshots {
            if let Some(d) = &snapshot.age_distribution {
                age.add(d);
            }
            if let Some(d) = &snapshot.gender_distribution {
                gender.add(d);
            }
            if let Some(d) = &snapshot.location_distribution {
                location.add(d);
            }
            if !snapshot.interest_categories.is_empty() {
                interests.add(&snapshot.interest_categories);
            }
        }

        tracing::debug!(snapshots = snapshots.len(), "Aggregated audience demographics");

        Ok(AudienceDemographics {
            age_distribution: age.average(),
            gender_distribution: gender.average(),
            location_distribution: location.top(TOP_LOCATIONS),
            interest_categories: interests.top(TOP_INTERESTS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveTime};

    use crate::domain::entities::AudienceSnapshot;
    use crate::test_utils::{
        test_account, test_audience_snapshot, test_metric_snapshot, test_scored_account,
        InMemoryAccountRepository, InMemoryAudienceSnapshotRepository,
        InMemoryMetricSnapshotRepository,
    };

    type TestService = AnalyticsService<
        InMemoryAccountRepository,
        InMemoryMetricSnapshotRepository,
        InMemoryAudienceSnapshotRepository,
    >;

    fn service(
        accounts: Vec<Account>,
        metrics: Vec<MetricSnapshot>,
        audiences: Vec<AudienceSnapshot>,
    ) -> TestService {
        let audiences = audiences
            .into_iter()
            .fold(InMemoryAudienceSnapshotRepository::new(), |repo, s| {
                repo.with_snapshot(s)
            });
        AnalyticsService::new(
            Arc::new(InMemoryAccountRepository::new().with_accounts(accounts)),
            Arc::new(InMemoryMetricSnapshotRepository::new().with_snapshots(metrics)),
            Arc::new(audiences),
        )
    }

    fn service_with(accounts: Vec<Account>) -> TestService {
        service(accounts, vec![], vec![])
    }

    fn service_with_audiences(snapshots: Vec<AudienceSnapshot>) -> TestService {
        service(vec![], vec![], snapshots)
    }

    /// Noon, five days ago; later offsets of a few hours stay on the same day
    fn trend_base() -> DateTime<Utc> {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        (Utc::now() - Duration::days(5))
            .date_naive()
            .and_time(noon)
            .and_utc()
    }

    #[tokio::test]
    async fn top_accounts_sorted_by_metric() {
        let mut a = test_scored_account(0.5, 0.1, Some("tech"));
        a.scores.engagement_rate = 0.02;
        let mut b = test_scored_account(0.4, 0.1, Some("tech"));
        b.scores.engagement_rate = 0.09;
        let mut c = test_scored_account(0.9, 0.1, Some("food"));
        c.scores.engagement_rate = 0.05;

        let service = service_with(vec![a.clone(), b.clone(), c.clone()]);

        let top = service
            .top_accounts(ScoreMetric::EngagementRate, 10, None)
            .await
            .unwrap();
        let ids: Vec<AccountId> = top.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![b.id, c.id, a.id]);
        assert_eq!(top[0].metric_value, 0.09);
        assert_eq!(top[0].metric_name, ScoreMetric::EngagementRate);

        let top = service
            .top_accounts(ScoreMetric::EngagementRate, 1, Some("tech".to_string()))
            .await
            .unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, b.id);
    }

    #[tokio::test]
    async fn zero_limit_is_rejected() {
        let service = service_with(vec![test_scored_account(0.9, 0.3, None)]);

        let result = service
            .top_accounts(ScoreMetric::OverallInvestmentScore, 0, None)
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let criteria = OpportunityCriteria {
            limit: 0,
            ..Default::default()
        };
        let result = service.investment_opportunities(criteria).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn opportunities_require_score_and_growth() {
        let strong = test_scored_account(0.85, 0.3, None);
        let stagnant = test_scored_account(0.9, 0.05, None);
        let weak = test_scored_account(0.6, 0.5, None);
        let edge = test_scored_account(0.7, 0.1, None);

        let service = service_with(vec![stagnant, weak, edge.clone(), strong.clone()]);

        let found = service
            .investment_opportunities(OpportunityCriteria::default())
            .await
            .unwrap();
        let ids: Vec<AccountId> = found.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![strong.id, edge.id]);
        assert_eq!(found[0].overall_score, 0.85);
    }

    #[tokio::test]
    async fn score_distribution_buckets_include_upper_bound() {
        let scores = [0.0, 0.19, 0.2, 0.55, 0.79, 0.8, 1.0];
        let accounts = scores
            .iter()
            .map(|s| test_scored_account(*s, 0.0, None))
            .collect();
        let service = service_with(accounts);

        let buckets = service.score_distribution().await.unwrap();
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();

        assert_eq!(counts, vec![2, 1, 1, 1, 2]);
        assert_eq!(buckets[4].range, "Very High");
        assert_eq!(counts.iter().sum::<usize>(), scores.len());
    }

    #[tokio::test]
    async fn category_distribution_groups_uncategorized() {
        let accounts = vec![
            test_scored_account(0.8, 0.0, Some("tech")),
            test_scored_account(0.4, 0.0, Some("tech")),
            test_scored_account(0.3, 0.0, None),
            test_scored_account(0.9, 0.0, Some("food")),
        ];
        let service = service_with(accounts);

        let all = service.category_distribution(None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].category, UNCATEGORIZED);
        let tech = all.iter().find(|c| c.category == "tech").unwrap();
        assert_eq!(tech.count, 2);
        assert!((tech.avg_score - 0.6).abs() < 1e-12);

        let filtered = service.category_distribution(Some(0.5)).await.unwrap();
        let labels: Vec<&str> = filtered.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, vec!["food", "tech"]);
    }

    #[tokio::test]
    async fn demographics_use_latest_snapshot_per_account() {
        let a = test_account();
        let b = test_account();

        let mut stale = test_audience_snapshot(a.id);
        stale.recorded_at = Utc::now() - Duration::days(10);
        stale.gender_distribution = Some(Distribution::from([("male".to_string(), 1.0)]));

        let mut latest_a = test_audience_snapshot(a.id);
        latest_a.gender_distribution = Some(Distribution::from([("female".to_string(), 1.0)]));

        let mut latest_b = test_audience_snapshot(b.id);
        latest_b.gender_distribution = Some(Distribution::from([
            ("female".to_string(), 0.5),
            ("male".to_string(), 0.5),
        ]));
        latest_b.age_distribution = None;

        let service = service_with_audiences(vec![stale, latest_a, latest_b]);
        let demographics = service.audience_demographics().await.unwrap();

        assert!((demographics.gender_distribution["female"] - 0.75).abs() < 1e-12);
        assert!((demographics.gender_distribution["male"] - 0.25).abs() < 1e-12);
        // Only one snapshot carries ages, so it is averaged over one
        assert!((demographics.age_distribution["25-34"] - 0.6).abs() < 1e-12);
    }

    #[tokio::test]
    async fn demographics_truncate_locations_and_interests() {
        let mut snapshot = test_audience_snapshot(AccountId::new());
        snapshot.location_distribution = Some(
            (0..12)
                .map(|i| (format!("L{:02}", i), 0.01 * (i + 1) as f64))
                .collect(),
        );
        snapshot.interest_categories = (0..20)
            .map(|i| (format!("I{:02}", i), 0.01 * (i + 1) as f64))
            .collect();

        let service = service_with_audiences(vec![snapshot]);
        let demographics = service.audience_demographics().await.unwrap();

        assert_eq!(demographics.location_distribution.len(), TOP_LOCATIONS);
        assert!(demographics.location_distribution.contains_key("L11"));
        assert!(!demographics.location_distribution.contains_key("L00"));
        assert_eq!(demographics.interest_categories.len(), TOP_INTERESTS);
        assert!(!demographics.interest_categories.contains_key("I04"));
    }

    #[tokio::test]
    async fn demographics_empty_without_snapshots() {
        let service = service_with_audiences(vec![]);
        let demographics = service.audience_demographics().await.unwrap();
        assert!(demographics.age_distribution.is_empty());
        assert!(demographics.interest_categories.is_empty());
    }

    #[tokio::test]
    async fn growth_trends_average_each_day_for_one_account() {
        let account = test_account();
        let base = trend_base();
        let snapshots = vec![
            test_metric_snapshot(account.id, base, 1_000),
            test_metric_snapshot(account.id, base + Duration::hours(1), 1_200),
            test_metric_snapshot(account.id, base + Duration::days(1), 1_210),
            test_metric_snapshot(account.id, Utc::now() - Duration::days(200), 10),
        ];
        let service = service(vec![account.clone()], snapshots, vec![]);

        let trends = service.growth_trends(90, Some(account.id)).await.unwrap();
        let GrowthTrends::Account {
            account_id,
            handle,
            data,
        } = trends
        else {
            panic!("expected a per-account trend");
        };

        assert_eq!(account_id, account.id);
        assert_eq!(handle, account.handle);
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].date, base.date_naive());
        assert_eq!(data[0].follower_count, 1_100);
        assert_eq!(data[0].growth_rate, 0.0);
        assert_eq!(data[1].follower_count, 1_210);
        assert!((data[1].growth_rate - 0.1).abs() < 1e-12);
    }

    #[tokio::test]
    async fn growth_trends_sum_accounts_per_day() {
        let a = test_account();
        let b = test_account();
        let base = trend_base();
        let snapshots = vec![
            test_metric_snapshot(a.id, base, 1_000),
            test_metric_snapshot(a.id, base + Duration::hours(2), 1_200),
            test_metric_snapshot(a.id, base + Duration::days(1), 1_210),
            test_metric_snapshot(b.id, base, 500),
            test_metric_snapshot(b.id, base + Duration::days(1), 600),
        ];
        let service = service(vec![a, b], snapshots, vec![]);

        let trends = service.growth_trends(30, None).await.unwrap();
        let GrowthTrends::Aggregate { data } = trends else {
            panic!("expected an aggregated trend");
        };

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].total_followers, 1_600);
        assert_eq!(data[0].account_count, 2);
        assert_eq!(data[0].avg_growth_rate, 0.0);
        assert_eq!(data[1].total_followers, 1_810);
        assert!((data[1].avg_growth_rate - 0.15).abs() < 1e-12);
        assert!(data[0].date < data[1].date);
    }

    #[tokio::test]
    async fn growth_trends_reject_unknown_account_and_bad_window() {
        let service = service_with(vec![test_account()]);

        let result = service.growth_trends(90, Some(AccountId::new())).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));

        let result = service.growth_trends(0, None).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let result = service.growth_trends(MAX_TREND_DAYS + 1, None).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn account_demographics_use_latest_snapshot() {
        let account = test_account();
        let mut stale = test_audience_snapshot(account.id);
        stale.recorded_at = Utc::now() - Duration::days(30);
        stale.location_distribution = None;
        let latest = test_audience_snapshot(account.id);

        let service = service(vec![account.clone()], vec![], vec![stale, latest]);

        let demographics = service.account_demographics(&account.id).await.unwrap();
        assert_eq!(demographics.account_id, account.id);
        assert_eq!(demographics.handle.as_deref(), Some(account.handle.as_str()));
        let locations = demographics.location_distribution.unwrap();
        assert_eq!(locations["US"], 0.7);
        assert_eq!(demographics.interest_categories["technology"], 0.6);
    }

    #[tokio::test]
    async fn account_demographics_without_snapshot_is_not_found() {
        let account = test_account();
        let service = service_with(vec![account.clone()]);

        let result = service.account_demographics(&account.id).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }
}
