use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use hearth_types::models::{NewProperty, Property};

use crate::error::{ApiError, ValidationIssue};
use crate::session::SessionUser;
use crate::AppState;

pub async fn list_properties(State(state): State<AppState>) -> Json<Vec<Property>> {
    Json(state.store.all_properties())
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Property>, ApiError> {
    state
        .store
        .property(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Property not found"))
}

pub async fn create_property(
    State(state): State<AppState>,
    user: SessionUser,
    payload: Result<Json<NewProperty>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A body that fails deserialization is a validation error too, carrying
    // the deserializer's message as the single issue.
    let Json(new) = payload.map_err(|rej| {
        ApiError::Validation(vec![ValidationIssue::new("body", rej.body_text())])
    })?;

    let issues = validate(&new);
    if !issues.is_empty() {
        return Err(ApiError::Validation(issues));
    }

    let property = state.store.create_property(new);
    info!("Agent {} created property {}", user.username, property.id);
    Ok((StatusCode::CREATED, Json(property)))
}

fn validate(new: &NewProperty) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if new.title.trim().is_empty() {
        issues.push(ValidationIssue::new("title", "title must not be empty"));
    }
    if new.price <= 0.0 {
        issues.push(ValidationIssue::new("price", "price must be greater than 0"));
    }
    if new.area < 0.0 {
        issues.push(ValidationIssue::new("area", "area must not be negative"));
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewProperty {
        NewProperty {
            title: "Cottage".into(),
            description: "Small and cozy".into(),
            price: 300_000.0,
            location: "Lakeside".into(),
            image_url: "https://example.com/c.jpg".into(),
            bedrooms: 2,
            bathrooms: 1,
            area: 900.0,
            features: vec![],
            open_house_date: None,
        }
    }

    #[test]
    fn valid_property_has_no_issues() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn collects_every_violation() {
        let bad = NewProperty {
            title: "  ".into(),
            price: 0.0,
            area: -1.0,
            ..valid()
        };
        let issues = validate(&bad);
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["title", "price", "area"]);
    }

    #[test]
    fn zero_area_is_allowed() {
        let land = NewProperty { area: 0.0, ..valid() };
        assert!(validate(&land).is_empty());
    }
}
