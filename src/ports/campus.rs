//! Campus service port: the building directory and path finding.

use std::future::Future;
use std::pin::Pin;

use crate::directory::BuildingEntry;
use crate::error::NetworkError;
use crate::geometry::Route;

/// Boxed future type alias used by [`CampusService`] to keep the trait dyn-compatible.
pub type CampusFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, NetworkError>> + Send + 'a>>;

/// The remote service that knows the campus buildings and computes routes.
pub trait CampusService: Send + Sync {
    /// Fetches every building the service can route between.
    ///
    /// Entries come back in the order the service listed them.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or does not answer
    /// with a success status and a valid name map.
    fn valid_buildings(&self) -> CampusFuture<'_, Vec<BuildingEntry>>;

    /// Computes the route between two buildings, by short name.
    ///
    /// Identical names are a valid query answered with an empty route.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or does not answer
    /// with a success status and a valid path.
    fn find_path(&self, start: &str, end: &str) -> CampusFuture<'_, Route>;
}
