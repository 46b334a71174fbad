use actix_web::{web, HttpResponse, Responder};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::models::stay::StayQuery;
use crate::services::availability_service::{AvailabilityError, AvailabilityService};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

fn default_adults() -> u32 {
    2
}

/// Proxies the collaborator availability service and applies the occupancy
/// filter the collaborator is not trusted to apply (it never sees the
/// children count).
pub async fn search_availability(
    service: web::Data<AvailabilityService>,
    query: web::Query<AvailabilityQuery>,
) -> impl Responder {
    let query = query.into_inner();

    let (check_in, check_out) = match (query.check_in, query.check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "MISSING_DATES",
                "message": "Both checkIn and checkOut are required",
            }));
        }
    };

    let mut stay = StayQuery {
        check_in: Some(check_in.and_time(NaiveTime::MIN)),
        check_out: Some(check_out.and_time(NaiveTime::MIN)),
        ..StayQuery::default()
    };
    stay.set_adults(query.adults);
    stay.set_children(query.children);

    if !stay.has_valid_range() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "INVALID_RANGE",
            "message": "checkOut must be after checkIn",
        }));
    }

    let wire_date = |date: NaiveDate| date.format("%Y-%m-%d").to_string();

    match service
        .fetch(&wire_date(check_in), &wire_date(check_out), stay.adults)
        .await
    {
        Ok(mut data) => {
            data.rooms = AvailabilityService::filter_rooms(data.rooms, stay.adults, stay.children);
            HttpResponse::Ok().json(data)
        }
        Err(AvailabilityError::Service { code, message }) => {
            eprintln!("Availability service error {}: {}", code, message);
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "AVAILABILITY_FAILED",
                "message": message,
            }))
        }
        Err(AvailabilityError::Transport(message)) => {
            eprintln!("Availability transport error: {}", message);
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "AVAILABILITY_UNAVAILABLE",
                "message": "Room availability could not be loaded",
            }))
        }
    }
}
