//! Query engine: text filtering and page slicing over store enumerations.
//!
//! Filters always run before pagination. Pagination works on the store's
//! native ordering (ascending identifier), so repeated calls with the same
//! parameters return the same window.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Vehicle;

/// Page size used by every listing endpoint.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Vehicle field a text filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleField {
    Name,
    Brand,
}

impl VehicleField {
    fn value<'a>(&self, vehicle: &'a Vehicle) -> &'a str {
        match self {
            VehicleField::Name => &vehicle.name,
            VehicleField::Brand => &vehicle.brand,
        }
    }

    /// Column name in the relational schema.
    pub fn column(&self) -> &'static str {
        match self {
            VehicleField::Name => "name",
            VehicleField::Brand => "brand",
        }
    }
}

/// Case-insensitive substring predicate on one vehicle field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    pub field: VehicleField,
    pub needle: String,
}

impl TextFilter {
    /// Builds a filter, or `None` when the needle is absent or blank.
    pub fn new(field: VehicleField, needle: Option<&str>) -> Option<Self> {
        let needle = needle?;
        if needle.trim().is_empty() {
            return None;
        }
        Some(Self {
            field,
            needle: needle.to_string(),
        })
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        contains_ignore_case(self.field.value(vehicle), &self.needle)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Builds the filter list for an optional name and brand.
pub fn vehicle_filters(name: Option<&str>, brand: Option<&str>) -> Vec<TextFilter> {
    [
        TextFilter::new(VehicleField::Name, name),
        TextFilter::new(VehicleField::Brand, brand),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Keeps the vehicles matching every filter (logical AND), preserving order.
pub fn filter(vehicles: Vec<Vehicle>, filters: &[TextFilter]) -> Vec<Vehicle> {
    vehicles
        .into_iter()
        .filter(|v| filters.iter().all(|f| f.matches(v)))
        .collect()
}

/// How out-of-range page parameters are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageBounds {
    /// Apply `(page - 1) * size` as-is: a negative skip skips nothing and a
    /// non-positive size takes nothing.
    #[default]
    PassThrough,
    /// Raise page and size to at least 1 before slicing.
    Clamp,
}

impl FromStr for PageBounds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass-through" | "passthrough" => Ok(PageBounds::PassThrough),
            "clamp" => Ok(PageBounds::Clamp),
            other => Err(format!("unknown page bounds policy: {other}")),
        }
    }
}

/// 1-based page window. Slicing happens only when both parts are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub bounds: PageBounds,
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page,
            page_size,
            bounds: PageBounds::default(),
        }
    }

    /// A request for `page` using the fixed listing page size.
    pub fn listing(page: Option<i64>, bounds: PageBounds) -> Self {
        Self {
            page,
            page_size: Some(DEFAULT_PAGE_SIZE),
            bounds,
        }
    }

    pub fn with_bounds(mut self, bounds: PageBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Resolves to `(skip, take)`, or `None` when the result is unsliced.
    pub fn window(&self) -> Option<(usize, usize)> {
        let (mut page, mut size) = (self.page?, self.page_size?);
        if self.bounds == PageBounds::Clamp {
            page = page.max(1);
            size = size.max(1);
        }
        let skip = page.saturating_sub(1).saturating_mul(size);
        Some((to_count(skip), to_count(size)))
    }
}

fn to_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

/// Slices an already-filtered, ordered collection.
pub fn paginate<T>(items: Vec<T>, page: &PageRequest) -> Vec<T> {
    match page.window() {
        Some((skip, take)) => items.into_iter().skip(skip).take(take).collect(),
        None => items,
    }
}
