use chrono::{DateTime, Utc};

use crate::domain::enums::{AnalyticsEvent, GroupBy};
use crate::domain::request::{dedup_in_order, ensure_max_items};
use crate::domain::validation::ValidationError;
use crate::domain::value::{DomainId, RecipientId, UnixTimestamp, non_empty_trimmed};

pub const ANALYTICS_MAX_RECIPIENTS: usize = 50;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Filters shared by every `analytics/*` endpoint.
///
/// `group_by` and `events` only apply to the by-date report.
pub struct AnalyticsRequest {
    pub(crate) domain_id: Option<DomainId>,
    pub(crate) recipient_ids: Vec<RecipientId>,
    pub(crate) date_from: UnixTimestamp,
    pub(crate) date_to: UnixTimestamp,
    pub(crate) tags: Vec<String>,
    pub(crate) group_by: GroupBy,
    pub(crate) events: Vec<AnalyticsEvent>,
}

impl AnalyticsRequest {
    pub fn date_from(&self) -> UnixTimestamp {
        self.date_from
    }

    pub fn date_to(&self) -> UnixTimestamp {
        self.date_to
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    pub fn events(&self) -> &[AnalyticsEvent] {
        &self.events
    }
}

#[derive(Debug, Clone, Default)]
/// Builder for [`AnalyticsRequest`].
pub struct AnalyticsBuilder {
    domain_id: Option<String>,
    recipients: Vec<String>,
    date_from: Option<i64>,
    date_to: Option<i64>,
    tags: Vec<String>,
    group_by: GroupBy,
    events: Vec<AnalyticsEvent>,
}

impl AnalyticsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_id(mut self, domain_id: impl Into<String>) -> Self {
        self.domain_id = Some(domain_id.into());
        self
    }

    pub fn recipient(mut self, recipient_id: impl Into<String>) -> Self {
        self.recipients.push(recipient_id.into());
        self
    }

    pub fn recipients<I, S>(mut self, recipient_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipients.extend(recipient_ids.into_iter().map(Into::into));
        self
    }

    pub fn date_from(mut self, timestamp: i64) -> Self {
        self.date_from = Some(timestamp);
        self
    }

    pub fn date_to(mut self, timestamp: i64) -> Self {
        self.date_to = Some(timestamp);
        self
    }

    pub fn date_from_datetime(self, value: DateTime<Utc>) -> Self {
        self.date_from(value.timestamp())
    }

    pub fn date_to_datetime(self, value: DateTime<Utc>) -> Self {
        self.date_to(value.timestamp())
    }

    pub fn date_range(self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.date_from_datetime(from).date_to_datetime(to)
    }

    /// Last `days` days ending now.
    pub fn date_range_days(self, days: u32) -> Self {
        self.date_range_days_until(days, Utc::now())
    }

    /// Last `days` days ending at `end`.
    ///
    /// Computed in seconds; a start before the epoch is rejected by `build`.
    pub fn date_range_days_until(self, days: u32, end: DateTime<Utc>) -> Self {
        let end = end.timestamp();
        self.date_from(end.saturating_sub(i64::from(days) * SECONDS_PER_DAY))
            .date_to(end)
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    pub fn event(mut self, event: AnalyticsEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn events(mut self, events: impl IntoIterator<Item = AnalyticsEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn all_events(self) -> Self {
        self.events(AnalyticsEvent::ALL.iter().copied())
    }

    /// queued, sent, delivered, soft and hard bounces.
    pub fn delivery_events(self) -> Self {
        self.events(AnalyticsEvent::DELIVERY.iter().copied())
    }

    /// Opens and clicks, total and unique.
    pub fn engagement_events(self) -> Self {
        self.events(AnalyticsEvent::ENGAGEMENT.iter().copied())
    }

    /// Unsubscribes and spam complaints.
    pub fn negative_events(self) -> Self {
        self.events(AnalyticsEvent::NEGATIVE.iter().copied())
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build(&self) -> Result<AnalyticsRequest, ValidationError> {
        let domain_id = self.domain_id.clone().map(DomainId::new).transpose()?;

        ensure_max_items("recipient_id", self.recipients.len(), ANALYTICS_MAX_RECIPIENTS)?;
        let recipient_ids = self
            .recipients
            .iter()
            .cloned()
            .map(RecipientId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let date_from = self.date_from.ok_or(ValidationError::Missing {
            field: "date_from",
        })?;
        let date_to = self
            .date_to
            .ok_or(ValidationError::Missing { field: "date_to" })?;
        let date_from = UnixTimestamp::new(date_from)?;
        let date_to = UnixTimestamp::new(date_to)?;
        if date_from >= date_to {
            return Err(ValidationError::InvalidDateRange {
                reason: "date_from must be before date_to",
            });
        }

        let tags = self
            .tags
            .iter()
            .cloned()
            .map(|tag| non_empty_trimmed("tags", tag))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AnalyticsRequest {
            domain_id,
            recipient_ids,
            date_from,
            date_to,
            tags,
            group_by: self.group_by,
            events: dedup_in_order(self.events.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_range_days_until_spans_whole_days() {
        let end = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let request = AnalyticsBuilder::new()
            .date_range_days_until(7, end)
            .build()
            .unwrap();
        assert_eq!(request.date_to().value(), end.timestamp());
        assert_eq!(
            request.date_to().value() - request.date_from().value(),
            7 * 86_400
        );
        assert_eq!(request.group_by(), GroupBy::Days);
    }

    #[test]
    fn huge_day_ranges_fail_at_build() {
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let err = AnalyticsBuilder::new()
            .date_range_days_until(200_000_000, end)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: UnixTimestamp::FIELD,
                ..
            }
        ));

        let err = AnalyticsBuilder::new()
            .date_range_days_until(u32::MAX, end)
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn event_groups_combine_without_duplicates() {
        let request = AnalyticsBuilder::new()
            .date_from(1)
            .date_to(2)
            .delivery_events()
            .engagement_events()
            .negative_events()
            .event(AnalyticsEvent::Sent)
            .build()
            .unwrap();
        assert_eq!(request.events().len(), 11);
        assert_eq!(request.events()[0], AnalyticsEvent::Queued);

        let all = AnalyticsBuilder::new()
            .date_from(1)
            .date_to(2)
            .all_events()
            .build()
            .unwrap();
        assert_eq!(all.events().len(), 13);
    }

    #[test]
    fn rejects_bad_ranges_and_inputs() {
        let err = AnalyticsBuilder::new().date_to(5).build().unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "date_from" });

        let err = AnalyticsBuilder::new()
            .date_from(5)
            .date_to(5)
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateRange { .. }));

        let err = AnalyticsBuilder::new()
            .date_from(0)
            .date_to(5)
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));

        let err = AnalyticsBuilder::new()
            .date_from(1)
            .date_to(5)
            .tag("  ")
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "tags" });
    }

    #[test]
    fn recipient_limit() {
        let ids = (0..=ANALYTICS_MAX_RECIPIENTS).map(|i| format!("r{i}"));
        let err = AnalyticsBuilder::new()
            .date_from(1)
            .date_to(2)
            .recipients(ids)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooMany {
                field: "recipient_id",
                max: 50,
                actual: 51
            }
        );
    }
}
