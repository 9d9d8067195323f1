use chrono::{DateTime, Utc};

use crate::domain::enums::ActivityEvent;
use crate::domain::request::dedup_in_order;
use crate::domain::validation::ValidationError;
use crate::domain::value::{DomainId, Pagination, UnixTimestamp};

/// Widest window the activity endpoint accepts (7 days).
pub const ACTIVITY_MAX_RANGE_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
/// `GET activity/{domain_id}`.
pub struct ActivityListRequest {
    pub(crate) domain_id: DomainId,
    pub(crate) pagination: Pagination,
    pub(crate) date_from: UnixTimestamp,
    pub(crate) date_to: UnixTimestamp,
    pub(crate) events: Vec<ActivityEvent>,
}

impl ActivityListRequest {
    /// Validate the date window; repeated events collapse.
    pub fn new(
        domain_id: DomainId,
        pagination: Pagination,
        date_from: UnixTimestamp,
        date_to: UnixTimestamp,
        events: impl IntoIterator<Item = ActivityEvent>,
    ) -> Result<Self, ValidationError> {
        if date_to <= date_from {
            return Err(ValidationError::InvalidDateRange {
                reason: "date_to must be after date_from",
            });
        }
        if date_to.value() - date_from.value() > ACTIVITY_MAX_RANGE_SECS {
            return Err(ValidationError::InvalidDateRange {
                reason: "range must not exceed 7 days",
            });
        }
        Ok(Self {
            domain_id,
            pagination,
            date_from,
            date_to,
            events: dedup_in_order(events.into_iter().collect()),
        })
    }

    pub fn domain_id(&self) -> &DomainId {
        &self.domain_id
    }

    pub fn events(&self) -> &[ActivityEvent] {
        &self.events
    }
}

#[derive(Debug, Clone, Default)]
/// Builder for [`ActivityListRequest`].
pub struct ActivityBuilder {
    domain_id: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
    date_from: Option<i64>,
    date_to: Option<i64>,
    events: Vec<ActivityEvent>,
}

impl ActivityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_id(mut self, domain_id: impl Into<String>) -> Self {
        self.domain_id = Some(domain_id.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start of the window, Unix seconds.
    pub fn date_from(mut self, timestamp: i64) -> Self {
        self.date_from = Some(timestamp);
        self
    }

    /// End of the window, Unix seconds.
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

    pub fn event(mut self, event: ActivityEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn events(mut self, events: impl IntoIterator<Item = ActivityEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build_list_request(&self) -> Result<ActivityListRequest, ValidationError> {
        let domain_id = DomainId::new(self.domain_id.clone().unwrap_or_default())?;
        let pagination = Pagination::from_raw(self.page, self.limit)?;
        let date_from = self.date_from.ok_or(ValidationError::Missing {
            field: "date_from",
        })?;
        let date_to = self
            .date_to
            .ok_or(ValidationError::Missing { field: "date_to" })?;

        ActivityListRequest::new(
            domain_id,
            pagination,
            UnixTimestamp::new(date_from)?,
            UnixTimestamp::new(date_to)?,
            self.events.iter().copied(),
        )
    }
}
