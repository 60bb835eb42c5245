//! Where the trip starts.
//!
//! A terminal has no GPS, so the "device position" is whatever the user hands
//! over: explicit coordinates or an address that gets geocoded. Handing over
//! nothing is treated like refusing the location permission.

use async_trait::async_trait;

use crate::{error::JourneyError, maps::MapsClient, types::Coordinate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_permission(&self) -> Permission;
    async fn current_position(&self) -> Result<Coordinate, JourneyError>;
}

/// A position given directly as coordinates.
pub struct FixedLocation {
    coordinate: Coordinate,
}

impl FixedLocation {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn current_position(&self) -> Result<Coordinate, JourneyError> {
        Ok(self.coordinate)
    }
}

/// A position described by an address and resolved through the geocoder.
pub struct AddressLocation {
    maps: MapsClient,
    address: String,
}

impl AddressLocation {
    pub fn new(maps: MapsClient, address: impl Into<String>) -> Self {
        Self {
            maps,
            address: address.into(),
        }
    }
}

#[async_trait]
impl LocationProvider for AddressLocation {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn current_position(&self) -> Result<Coordinate, JourneyError> {
        self.maps.geocode(&self.address).await?.ok_or_else(|| {
            JourneyError::LocationUnavailable(format!("no match for '{}'", self.address))
        })
    }
}

/// No origin was supplied.
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    async fn current_position(&self) -> Result<Coordinate, JourneyError> {
        Err(JourneyError::PermissionDenied)
    }
}

/// Asks for permission once and reads the position once. There is no retry
/// after a denial.
pub async fn acquire_position(provider: &dyn LocationProvider) -> Result<Coordinate, JourneyError> {
    match provider.request_permission().await {
        Permission::Granted => provider.current_position().await,
        Permission::Denied => Err(JourneyError::PermissionDenied),
    }
}
