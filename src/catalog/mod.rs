use log::{debug, info};

use crate::errors::AppError;
use crate::models::employee::{Employee, RawEmployee};
use crate::utils::id_generator::IdGenerator;

const BUNDLED_EMPLOYEES: &str = include_str!("../assets/employees.json");

/// Read-only, ordered list of employees shared with the views.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    employees: Vec<Employee>,
}

impl Catalog {
    pub fn new(employees: Vec<Employee>) -> Self {
        Catalog { employees }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn find(&self, id: u64) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Employees matching every given criterion, in catalog order.
    pub fn filter<'a>(
        &'a self,
        department: Option<&'a str>,
        employed: Option<bool>,
    ) -> impl Iterator<Item = &'a Employee> + 'a {
        self.employees.iter().filter(move |employee| {
            department.map_or(true, |d| employee.department == d)
                && employed.map_or(true, |e| employee.is_employed() == e)
        })
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Decorates raw records with ids drawn from the generator it owns.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    ids: IdGenerator,
}

impl CatalogLoader {
    pub fn new(ids: IdGenerator) -> Self {
        CatalogLoader { ids }
    }

    /// One fresh id per record, in input order. Ids are never handed out
    /// twice, so loading the same records again yields new ids.
    pub fn load_catalog(&self, raw_records: Vec<RawEmployee>) -> Vec<Employee> {
        raw_records
            .into_iter()
            .map(|raw| {
                let id = self.ids.generate_next_id();
                debug!("Assigned id {} to {}", id, raw.full_name);
                Employee::from_raw(id, raw)
            })
            .collect()
    }

    pub fn load_json(&self, json: &str) -> Result<Catalog, AppError> {
        let raw_records: Vec<RawEmployee> = serde_json::from_str(json)?;
        let catalog = Catalog::new(self.load_catalog(raw_records));
        info!("Loaded {} employees into the catalog", catalog.len());
        Ok(catalog)
    }

    pub fn load_bundled(&self) -> Result<Catalog, AppError> {
        self.load_json(BUNDLED_EMPLOYEES)
    }
}
