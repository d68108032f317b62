//! Class scheduling service
//!
//! Rosters live behind two route shapes: the current
//! `/class-schedules/{id}/roster` and the legacy `/classes/{id}/attendees`.
//! Both are tried in that order; 404/405 advances, anything else surfaces.

use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;

use crate::client::{ApiClient, QueryParams};
use crate::error::ApiError;
use crate::fallback::{request_with_fallback, FallbackPolicy};
use crate::models::{ClassSession, RosterMember};
use crate::normalize::{to_array_payload, unwrap_payload};

/// Class scheduling and roster operations
pub struct ClassScheduleService {
    client: Arc<ApiClient>,
}

impl ClassScheduleService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All scheduled sessions in the date range, across every page,
    /// re-sorted by start time then name.
    pub async fn list_sessions(
        &self,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<Vec<ClassSession>, ApiError> {
        let params: QueryParams = vec![
            ("startDate".to_string(), start_date),
            ("endDate".to_string(), end_date),
        ];

        let rows = self.client.get_all_pages("/class-schedules", &params).await?;
        let mut sessions: Vec<ClassSession> =
            rows.iter().map(ClassSession::from_value).collect();

        sessions.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.class_name.cmp(&b.class_name))
        });

        tracing::debug!(count = sessions.len(), "Listed class sessions");

        Ok(sessions)
    }

    pub async fn get_session(&self, schedule_id: &str) -> Result<ClassSession, ApiError> {
        let payload = self
            .client
            .get(&format!("/class-schedules/{schedule_id}"), &[])
            .await?;
        Ok(ClassSession::from_value(unwrap_payload(&payload)))
    }

    /// Roster for a session, sorted by member name.
    pub async fn roster(&self, schedule_id: &str) -> Result<Vec<RosterMember>, ApiError> {
        let primary = format!("/class-schedules/{schedule_id}/roster");
        let legacy = format!("/classes/{schedule_id}/attendees");

        let payload = request_with_fallback(
            FallbackPolicy::EndpointShape,
            vec![
                self.client.get(&primary, &[]).boxed(),
                self.client.get(&legacy, &[]).boxed(),
            ],
        )
        .await?;

        let mut roster: Vec<RosterMember> = to_array_payload(&payload)
            .iter()
            .map(RosterMember::from_value)
            .collect();
        roster.sort_by(|a, b| a.member_name.cmp(&b.member_name));

        Ok(roster)
    }

    /// Mark a roster member as a no-show.
    ///
    /// Requires the booking reference; legacy rows without one cannot be
    /// transitioned and raise a domain error for the UI to show.
    pub async fn mark_no_show(&self, row: &RosterMember) -> Result<(), ApiError> {
        let booking_id = require_booking_id(row)?;
        self.client
            .post_action(&format!("/bookings/{booking_id}/no-show"))
            .await?;
        Ok(())
    }

    /// Cancel a roster member's booking.
    pub async fn cancel_booking(&self, row: &RosterMember) -> Result<(), ApiError> {
        let booking_id = require_booking_id(row)?;
        self.client
            .post_action(&format!("/bookings/{booking_id}/cancel"))
            .await?;
        Ok(())
    }

    pub async fn create_session(&self, body: &Value) -> Result<ClassSession, ApiError> {
        let payload = self.client.post("/class-schedules", body).await?;
        Ok(ClassSession::from_value(unwrap_payload(&payload)))
    }
}

fn require_booking_id(row: &RosterMember) -> Result<&str, ApiError> {
    row.booking_id
        .as_deref()
        .ok_or_else(|| ApiError::Domain("No booking record found for member".to_string()))
}
