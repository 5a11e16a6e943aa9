//! Create-request validation
//!
//! Checks run in a fixed order and stop at the first failure, so a rejected
//! request never reaches the store.

use shared::{Customer, NewCustomer};

use crate::error::{ApiError, ApiResult};

/// Validate `request` against the existing collection and build the record
/// to append.
pub fn validate_new_customer(existing: &[Customer], request: NewCustomer) -> ApiResult<Customer> {
    check_required_fields(&request)?;
    check_unique_id(existing, request.id)?;
    check_city_company(existing, request.city.as_deref(), request.company.as_deref())?;

    request
        .into_customer()
        .ok_or(ApiError::MissingField { field: "id" })
}

/// Reject a request where no field carries a value
pub fn check_required_fields(request: &NewCustomer) -> ApiResult<()> {
    if request.is_blank() {
        return Err(ApiError::MissingFields);
    }
    Ok(())
}

pub fn check_unique_id(existing: &[Customer], id: Option<i64>) -> ApiResult<()> {
    match id {
        Some(id) if existing.iter().any(|customer| customer.id == id) => {
            Err(ApiError::DuplicateId { id })
        }
        _ => Ok(()),
    }
}

/// New customers may only join a (city, company) pair that already exists.
/// Matching is exact and case-sensitive.
pub fn check_city_company(
    existing: &[Customer],
    city: Option<&str>,
    company: Option<&str>,
) -> ApiResult<()> {
    let pair_exists = match (city, company) {
        (Some(city), Some(company)) => existing
            .iter()
            .any(|customer| customer.city == city && customer.company == company),
        _ => false,
    };

    if pair_exists {
        Ok(())
    } else {
        Err(ApiError::NoMatchingCityCompany {
            city: city.map(str::to_string),
            company: company.map(str::to_string),
        })
    }
}
