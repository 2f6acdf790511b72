//! Scoring service
//!
//! Computes the five investment sub-scores for an account, combines them with
//! the configured weights, and persists them onto the account on request.
//! All score writes go through this service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Serialize;

use crate::app::calculators;
use crate::app::scoring_config::{
    ScoringWeights, CONTENT_SAMPLE_SIZE, ENGAGEMENT_WINDOW_DAYS, GROWTH_WINDOW_DAYS,
};
use crate::domain::entities::{AccountId, InvestmentScores};
use crate::domain::ports::{
    AccountRepository, AudienceSnapshotRepository, MetricSnapshotRepository, PostRepository,
};
use crate::error::DomainError;

/// Outcome of a batch score update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchUpdateSummary {
    /// Accounts whose scores were written
    pub updated: usize,
    /// Accounts known when the batch started
    pub total: usize,
}

/// Service for computing and persisting investment scores
pub struct ScoringService<AR, PR, MR, ASR>
where
    AR: AccountRepository,
    PR: PostRepository,
    MR: MetricSnapshotRepository,
    ASR: AudienceSnapshotRepository,
{
    accounts: Arc<AR>,
    posts: Arc<PR>,
    metrics: Arc<MR>,
    audiences: Arc<ASR>,
    weights: ScoringWeights,
}

impl<AR, PR, MR, ASR> ScoringService<AR, PR, MR, ASR>
where
    AR: AccountRepository,
    PR: PostRepository,
    MR: MetricSnapshotRepository,
    ASR: AudienceSnapshotRepository,
{
    pub fn new(
        accounts: Arc<AR>,
        posts: Arc<PR>,
        metrics: Arc<MR>,
        audiences: Arc<ASR>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            accounts,
            posts,
            metrics,
            audiences,
            weights,
        }
    }

    // ========== Sub-score calculators ==========

    /// Mean engagement per post over the last 30 days, relative to followers.
    pub async fn calculate_engagement_rate(&self, id: &AccountId) -> Result<f64, DomainError> {
        let Some(account) = self.accounts.find_by_id(id).await? else {
            tracing::warn!(account_id = %id, "Account not found, engagement rate is 0");
            return Ok(0.0);
        };

        let since = Utc::now() - Duration::days(ENGAGEMENT_WINDOW_DAYS);
        let posts = self.posts.find_by_account_since(id, Some(since)).await?;

        if posts.is_empty() {
            tracing::warn!(handle = %account.handle, "No recent posts found");
            return Ok(0.0);
        }

        Ok(calculators::engagement_rate(account.follower_count, &posts))
    }

    /// Follower growth over the last 90 days, normalized to [0, 1].
    pub async fn calculate_growth_rate(&self, id: &AccountId) -> Result<f64, DomainError> {
        let since = Utc::now() - Duration::days(GROWTH_WINDOW_DAYS);
        let snapshots = self.metrics.find_by_account_since(id, Some(since)).await?;

        match calculators::growth_summary(&snapshots) {
            Some(summary) => {
                tracing::debug!(
                    account_id = %id,
                    elapsed_days = summary.elapsed_days,
                    follower_delta = summary.follower_delta,
                    daily_growth = summary.daily_growth,
                    "Growth computed"
                );
                Ok(summary.score)
            }
            None => {
                tracing::warn!(
                    account_id = %id,
                    snapshots = snapshots.len(),
                    "Not enough historical data for growth"
                );
                Ok(0.0)
            }
        }
    }

    /// Posting regularity, engagement stability, media mix and captions of the
    /// 20 most recent posts.
    pub async fn calculate_content_quality_score(
        &self,
        id: &AccountId,
    ) -> Result<f64, DomainError> {
        let Some(account) = self.accounts.find_by_id(id).await? else {
            return Ok(0.0);
        };

        let posts = self
            .posts
            .find_recent_by_account(id, CONTENT_SAMPLE_SIZE)
            .await?;

        match calculators::content_quality(account.follower_count, &posts) {
            Some(breakdown) => {
                tracing::debug!(
                    account_id = %id,
                    posting_consistency = breakdown.posting_consistency,
                    engagement_consistency = breakdown.engagement_consistency,
                    media_diversity = breakdown.media_diversity,
                    caption_quality = breakdown.caption_quality,
                    "Content quality computed"
                );
                Ok(breakdown.score)
            }
            None => Ok(0.0),
        }
    }

    /// Weighted quality of the latest audience snapshot; neutral without one.
    pub async fn calculate_audience_quality_score(
        &self,
        id: &AccountId,
    ) -> Result<f64, DomainError> {
        let snapshot = self.audiences.find_latest(id).await?;

        if snapshot.is_none() {
            tracing::warn!(account_id = %id, "No audience metrics found");
        }

        Ok(calculators::audience_quality(snapshot.as_ref()))
    }

    /// Alignment of audience interests with the target categories, or with the
    /// default investor interest table when `targets` is empty.
    pub async fn calculate_brand_alignment_score(
        &self,
        id: &AccountId,
        targets: &[String],
    ) -> Result<f64, DomainError> {
        if self.accounts.find_by_id(id).await?.is_none() {
            return Ok(0.0);
        }

        let snapshot = self.audiences.find_latest(id).await?;
        Ok(calculators::brand_alignment(snapshot.as_ref(), targets))
    }

    // ========== Aggregation ==========

    /// Weighted sum of the five sub-scores under the configured weights
    pub fn combine(
        &self,
        engagement_rate: f64,
        growth_rate: f64,
        content_quality_score: f64,
        audience_quality_score: f64,
        brand_alignment_score: f64,
    ) -> InvestmentScores {
        let w = &self.weights;
        let overall_investment_score = engagement_rate * w.engagement
            + growth_rate * w.growth
            + content_quality_score * w.content_quality
            + audience_quality_score * w.audience_quality
            + brand_alignment_score * w.brand_alignment;

        InvestmentScores {
            overall_investment_score,
            engagement_rate,
            growth_rate,
            content_quality_score,
            audience_quality_score,
            brand_alignment_score,
        }
    }

    /// Compute all sub-scores and the overall score without persisting anything.
    ///
    /// The calculators only read, so they run concurrently.
    pub async fn calculate_overall_score(
        &self,
        id: &AccountId,
        targets: &[String],
    ) -> Result<InvestmentScores, DomainError> {
        let (engagement, growth, content, audience, brand) = tokio::try_join!(
            self.calculate_engagement_rate(id),
            self.calculate_growth_rate(id),
            self.calculate_content_quality_score(id),
            self.calculate_audience_quality_score(id),
            self.calculate_brand_alignment_score(id, targets),
        )?;

        Ok(self.combine(engagement, growth, content, audience, brand))
    }

    /// Compute scores and write them onto the account.
    ///
    /// An unknown account is logged and left unwritten; the computed scores are
    /// still returned.
    pub async fn update_influencer_scores(
        &self,
        id: &AccountId,
        targets: &[String],
    ) -> Result<InvestmentScores, DomainError> {
        let scores = self.calculate_overall_score(id, targets).await?;

        match self.accounts.find_by_id(id).await? {
            Some(account) => {
                self.accounts.update_scores(id, &scores).await?;
                tracing::info!(
                    account_id = %id,
                    handle = %account.handle,
                    overall = scores.overall_investment_score,
                    "Updated investment scores"
                );
            }
            None => {
                tracing::error!(account_id = %id, "Account not found, scores not persisted");
            }
        }

        Ok(scores)
    }

    /// Update every known account, one at a time.
    ///
    /// A failure on one account is logged and skipped; only successful writes
    /// count towards `updated`.
    pub async fn batch_update_scores(
        &self,
        targets: &[String],
    ) -> Result<BatchUpdateSummary, DomainError> {
        let accounts = self.accounts.find_all().await?;
        let total = accounts.len();
        let mut updated = 0;

        for account in &accounts {
            match self.update_influencer_scores(&account.id, targets).await {
                Ok(_) => updated += 1,
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        account_id = %account.id,
                        handle = %account.handle,
                        "Error updating scores"
                    );
                }
            }
        }

        tracing::info!(updated, total, "Batch score update finished");

        Ok(BatchUpdateSummary { updated, total })
    }
}
