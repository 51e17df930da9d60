use std::collections::HashMap;

use actix_web::dev::{Path, ResourceDef, Url};
use actix_web::http::{header, Uri};
use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    EmployeeProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

/// One row of the route table. Path segments starting with `:` bind a parameter.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: Some("index"),
        target: RouteTarget::View(View::Index),
    },
    Route {
        path: "/index",
        name: None,
        target: RouteTarget::Redirect("/"),
    },
    Route {
        path: "/employee/:id",
        name: Some("employee-profile"),
        target: RouteTarget::View(View::EmployeeProfile),
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub view: View,
    pub name: Option<&'static str>,
    pub params: HashMap<String, String>,
}

impl ResolvedRoute {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl Route {
    /// The path in actix's `{param}` notation.
    pub fn actix_pattern(&self) -> String {
        let segments: Vec<String> = self
            .path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(param) => format!("{{{}}}", param),
                None => segment.to_string(),
            })
            .collect();
        format!("/{}", segments.join("/"))
    }

    /// The matcher actix registers for this row.
    pub fn resource_def(&self) -> ResourceDef {
        ResourceDef::new(self.actix_pattern())
    }
}

/// Matches a request target against the route table with actix's own
/// matcher, following redirects. The query string is ignored and the path is
/// percent-decoded the way the server does it.
pub fn resolve(target: &str) -> Option<ResolvedRoute> {
    let mut uri: Uri = target.parse().ok()?;
    // every row can redirect at most once on a loop-free table
    for _ in 0..=ROUTES.len() {
        let mut path = Path::new(Url::new(uri));
        let route = ROUTES
            .iter()
            .find(|route| route.resource_def().capture_match_info(&mut path))?;

        match route.target {
            RouteTarget::View(view) => {
                let params = path
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect();
                return Some(ResolvedRoute {
                    view,
                    name: route.name,
                    params,
                });
            }
            RouteTarget::Redirect(to) => uri = to.parse().ok()?,
        }
    }
    None
}

/// Registers every row of the route table with the server, under its name.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }));

    for route in ROUTES {
        let mut resource = web::resource(route.actix_pattern());
        if let Some(name) = route.name {
            resource = resource.name(name);
        }

        let resource = match route.target {
            RouteTarget::View(View::Index) => {
                resource.route(web::get().to(handlers::employee::get_employees))
            }
            RouteTarget::View(View::EmployeeProfile) => {
                resource.route(web::get().to(handlers::employee::get_employee_profile))
            }
            RouteTarget::Redirect(to) => resource.route(web::get().to(move || async move {
                HttpResponse::Found()
                    .insert_header((header::LOCATION, to))
                    .finish()
            })),
        };
        cfg.service(resource);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogLoader;
    use crate::models::employee::RawEmployee;
    use crate::utils::id_generator::IdGenerator;

    #[test]
    fn root_resolves_to_index() {
        let resolved = resolve("/").unwrap();
        assert_eq!(resolved.view, View::Index);
        assert_eq!(resolved.name, Some("index"));
        assert!(resolved.params.is_empty());
    }

    #[test]
    fn index_alias_redirects_to_root() {
        assert_eq!(resolve("/index"), resolve("/"));
    }

    #[test]
    fn profile_binds_id_param() {
        let resolved = resolve("/employee/42").unwrap();
        assert_eq!(resolved.view, View::EmployeeProfile);
        assert_eq!(resolved.name, Some("employee-profile"));
        assert_eq!(resolved.param("id"), Some("42"));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!(resolve("/employee").is_none());
        assert!(resolve("/employee/").is_none());
        assert!(resolve("/employee/1/extra").is_none());
        assert!(resolve("/index/").is_none());
        assert!(resolve("/departments").is_none());
    }

    #[test]
    fn query_string_is_not_part_of_the_match() {
        let resolved = resolve("/employee/2?x=1").unwrap();
        assert_eq!(resolved.param("id"), Some("2"));

        let resolved = resolve("/?department=Engineering").unwrap();
        assert_eq!(resolved.view, View::Index);
    }

    #[test]
    fn percent_encoded_segments_are_decoded() {
        let resolved = resolve("/employee/%32").unwrap();
        assert_eq!(resolved.view, View::EmployeeProfile);
        assert_eq!(resolved.param("id"), Some("2"));
    }

    #[test]
    fn actix_patterns_use_braces() {
        let patterns: Vec<String> = ROUTES.iter().map(Route::actix_pattern).collect();
        assert_eq!(patterns, vec!["/", "/index", "/employee/{id}"]);
    }

    #[test]
    fn profile_route_finds_employee_in_catalog() {
        let record = |name: &str| RawEmployee {
            code: None,
            full_name: name.to_string(),
            occupation: "Engineer".to_string(),
            department: "Engineering".to_string(),
            date_of_employment: "2020-01-01".to_string(),
            termination_date: None,
        };
        let catalog = CatalogLoader::new(IdGenerator::new(1))
            .load_json(&serde_json::to_string(&vec![record("A"), record("B")]).unwrap())
            .unwrap();

        let resolved = resolve("/employee/2").unwrap();
        let id: u64 = resolved.param("id").unwrap().parse().unwrap();

        assert_eq!(catalog.find(id).unwrap().full_name, "B");
    }
}
