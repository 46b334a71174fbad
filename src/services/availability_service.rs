use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::models::rooms::{AvailabilityData, AvailabilityEnvelope, RoomOffer};
use crate::models::stay::StayQuery;

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug)]
pub enum AvailabilityError {
    /// Network failure, non-2xx status, or an undecodable body.
    Transport(String),
    /// HTTP succeeded but the envelope carried a non-200 application code.
    Service { code: i32, message: String },
}

impl fmt::Display for AvailabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityError::Transport(message) => {
                write!(f, "availability request failed: {}", message)
            }
            AvailabilityError::Service { code, message } => {
                write!(f, "availability service returned code {}: {}", code, message)
            }
        }
    }
}

impl std::error::Error for AvailabilityError {}

/// Client for the collaborator availability service. Stateless; one instance
/// is shared across requests.
#[derive(Clone)]
pub struct AvailabilityService {
    http: reqwest::Client,
    base_url: String,
}

impl AvailabilityService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET against the collaborator. The children count is never sent;
    /// occupancy filtering happens on our side. No retry on failure.
    pub async fn fetch(
        &self,
        check_in: &str,
        check_out: &str,
        adults: u32,
    ) -> Result<AvailabilityData, AvailabilityError> {
        let url = format!("{}/api/hotel/rooms", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .get(&url)
            .query(&[("CheckInDate", check_in), ("CheckOutDate", check_out)])
            .query(&[("Adults", adults)])
            .send()
            .await
            .map_err(|e| AvailabilityError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AvailabilityError::Transport(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let envelope: AvailabilityEnvelope = response
            .json()
            .await
            .map_err(|e| AvailabilityError::Transport(e.to_string()))?;

        if envelope.code != 200 {
            return Err(AvailabilityError::Service {
                code: envelope.code,
                message: envelope.message,
            });
        }

        envelope.data.ok_or_else(|| AvailabilityError::Service {
            code: 200,
            message: "response carried no data".to_string(),
        })
    }

    /// Hides rooms the party cannot occupy. The server's own filtering by
    /// children count is not assumed reliable.
    pub fn filter_rooms(rooms: Vec<RoomOffer>, adults: u32, children: u32) -> Vec<RoomOffer> {
        rooms
            .into_iter()
            .filter(|room| adults <= room.max_occupancy && children <= room.max_children)
            .collect()
    }
}

type QueryKey = (String, String, u32);

/// Wraps the client with one booking session's query discipline: skip when
/// dates are missing, one request per distinct (dates, adults) tuple, and
/// latest intent wins when responses resolve out of order.
pub struct AvailabilitySession {
    service: AvailabilityService,
    ticket: AtomicU64,
    last_query: Mutex<Option<QueryKey>>,
}

impl AvailabilitySession {
    pub fn new(service: AvailabilityService) -> Self {
        Self {
            service,
            ticket: AtomicU64::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Returns `Ok(None)` when the query was skipped (missing dates,
    /// duplicate tuple) or superseded by a newer query before its response
    /// arrived.
    pub async fn refresh(
        &self,
        query: &StayQuery,
    ) -> Result<Option<AvailabilityData>, AvailabilityError> {
        let (check_in, check_out) = match (query.check_in, query.check_out) {
            (Some(check_in), Some(check_out)) => (
                check_in.format(WIRE_DATE_FORMAT).to_string(),
                check_out.format(WIRE_DATE_FORMAT).to_string(),
            ),
            _ => return Ok(None),
        };

        let key: QueryKey = (check_in.clone(), check_out.clone(), query.adults);
        {
            let mut last = self.last_query.lock().unwrap();
            if last.as_ref() == Some(&key) {
                return Ok(None);
            }
            *last = Some(key);
        }

        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;

        let data = self.service.fetch(&check_in, &check_out, query.adults).await?;

        // A newer query was issued while this one was in flight.
        if self.ticket.load(Ordering::SeqCst) != ticket {
            return Ok(None);
        }

        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn room(code: &str, max_occupancy: u32, max_children: u32) -> RoomOffer {
        RoomOffer {
            room_code: code.to_string(),
            room_name: code.to_string(),
            room_type: "TWIN".to_string(),
            price: 60_000,
            max_occupancy,
            max_children,
            amenities: vec![],
            images: vec![],
            available_count: 1,
        }
    }

    #[test]
    fn filter_hides_rooms_the_party_cannot_occupy() {
        let rooms = vec![room("A", 2, 0), room("B", 3, 1), room("C", 4, 2)];

        let filtered = AvailabilityService::filter_rooms(rooms.clone(), 3, 1);
        let codes: Vec<&str> = filtered.iter().map(|r| r.room_code.as_str()).collect();
        assert_eq!(codes, vec!["B", "C"]);

        // Children over the limit hide a room even when occupancy fits.
        let filtered = AvailabilityService::filter_rooms(rooms, 2, 2);
        let codes: Vec<&str> = filtered.iter().map(|r| r.room_code.as_str()).collect();
        assert_eq!(codes, vec!["C"]);
    }

    #[test]
    fn session_skips_when_dates_are_missing() {
        let session = AvailabilitySession::new(AvailabilityService::new("http://127.0.0.1:1"));
        let result = tokio_test::block_on(session.refresh(&StayQuery::default()));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn session_suppresses_duplicate_queries() {
        // Unroutable port: the first attempt fails in transport, but the
        // tuple is recorded, so the repeat is suppressed before any I/O.
        let session = AvailabilitySession::new(AvailabilityService::new("http://127.0.0.1:1"));

        let mut query = StayQuery::default();
        let date = |d: u32| {
            NaiveDate::from_ymd_opt(2024, 6, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        };
        query.check_in = Some(date(1));
        query.check_out = Some(date(4));

        let first = tokio_test::block_on(session.refresh(&query));
        assert!(matches!(first, Err(AvailabilityError::Transport(_))));

        let second = tokio_test::block_on(session.refresh(&query));
        assert!(matches!(second, Ok(None)));

        // Changing the party size issues a fresh request.
        query.set_adults(3);
        let third = tokio_test::block_on(session.refresh(&query));
        assert!(matches!(third, Err(AvailabilityError::Transport(_))));
    }
}
