use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
pub struct EmployeeQueryParams {
    #[validate(length(min = 1))]
    department: Option<String>,
    employed: Option<bool>,
    #[validate(range(min = 1, max = 100))]
    limit: Option<usize>,
    offset: Option<usize>,
}

pub async fn get_employees(
    catalog: web::Data<Catalog>,
    query: web::Query<EmployeeQueryParams>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*query)?;

    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(usize::MAX);

    let employees: Vec<_> = if query.department.is_none() && query.employed.is_none() {
        catalog.employees().iter().skip(offset).take(limit).collect()
    } else {
        catalog
            .filter(query.department.as_deref(), query.employed)
            .skip(offset)
            .take(limit)
            .collect()
    };

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee_profile(
    catalog: web::Data<Catalog>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    let employee = catalog
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    Ok(HttpResponse::Ok().json(employee))
}
