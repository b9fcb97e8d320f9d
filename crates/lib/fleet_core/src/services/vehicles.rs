//! Vehicle service.

use tracing::info;

use super::ServiceError;
use crate::models::{Vehicle, VehicleDraft};
use crate::query::{PageRequest, paginate, vehicle_filters};
use crate::store::VehicleStore;

fn require_present(vehicle: &VehicleDraft) -> Result<(), ServiceError> {
    if vehicle.is_absent() {
        return Err(ServiceError::InvalidArgument("vehicle".into()));
    }
    Ok(())
}

/// Persist a new vehicle.
pub async fn add<S>(store: &S, vehicle: VehicleDraft) -> Result<Vehicle, ServiceError>
where
    S: VehicleStore + ?Sized,
{
    require_present(&vehicle)?;
    let created = store.insert_vehicle(vehicle).await?;
    info!(id = created.id, "vehicle created");
    Ok(created)
}

/// Replace every mutable field of vehicle `id`. Returns `None` when it does not
/// exist.
pub async fn update<S>(
    store: &S,
    id: i32,
    vehicle: VehicleDraft,
) -> Result<Option<Vehicle>, ServiceError>
where
    S: VehicleStore + ?Sized,
{
    require_present(&vehicle)?;
    let updated = store.update_vehicle(id, vehicle).await?;
    if updated.is_some() {
        info!(id, "vehicle updated");
    }
    Ok(updated)
}

/// Remove vehicle `id`. Returns whether it existed.
pub async fn delete<S>(store: &S, id: i32) -> Result<bool, ServiceError>
where
    S: VehicleStore + ?Sized,
{
    let removed = store.delete_vehicle(id).await?;
    if removed {
        info!(id, "vehicle deleted");
    }
    Ok(removed)
}

pub async fn get_by_id<S>(store: &S, id: i32) -> Result<Option<Vehicle>, ServiceError>
where
    S: VehicleStore + ?Sized,
{
    Ok(store.find_vehicle(id).await?)
}

/// List vehicles matching the optional name and brand filters, then slice by
/// `page`.
pub async fn get_all<S>(
    store: &S,
    page: &PageRequest,
    name: Option<&str>,
    brand: Option<&str>,
) -> Result<Vec<Vehicle>, ServiceError>
where
    S: VehicleStore + ?Sized,
{
    let filters = vehicle_filters(name, brand);
    let matching = store.enumerate_vehicles(&filters).await?;
    Ok(paginate(matching, page))
}
