//! The canonical fleet store.
//!
//! `DriverRegistry` owns a `bevy_ecs` [`World`] holding one entity per
//! driver, an id → entity index, and an insertion-ordered roster for
//! deterministic iteration. Matching reads the live state through `&self`;
//! there is no snapshot copy, so a mutation is visible to the very next scan.
//!
//! # Consistency and the two-phase protocol
//!
//! A `&self` scan observes a consistent snapshot for its whole duration by
//! the borrow rules; for cross-thread sharing, wrap the registry in a
//! `std::sync::RwLock` (many concurrent scans, one exclusive writer).
//!
//! Selection (`matching::assign_nearest` / `matching::find_best`) and the
//! commit that takes the driver off the market are deliberately two calls:
//!
//! 1. select a driver under a read borrow/lock,
//! 2. [`reserve`](DriverRegistry::reserve) it under a write borrow/lock.
//!
//! If another request reserved the driver in between, step 2 fails with
//! [`DispatchError::PhaseConflict`] and the caller retries selection. Trip
//! start and completion then move the driver `Reserved → Busy → Available`.

use std::collections::HashMap;

use bevy_ecs::prelude::{Entity, World};

use crate::error::{DispatchError, DispatchResult};
use crate::fleet::{Driver, DriverId, DriverPhase, DriverStatus, NewDriver, Position};
use crate::spatial::{validate_point, Point};

/// Borrowed read-only view of one driver's live state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverView<'a> {
    pub id: &'a DriverId,
    pub location: Point,
    pub rating: f64,
    pub phase: DriverPhase,
}

/// Ordered collection of drivers, unique by identity.
#[derive(Default)]
pub struct DriverRegistry {
    world: World,
    by_id: HashMap<DriverId, Entity>,
    /// Insertion order, for deterministic iteration. Selection ties are
    /// broken by lowest id, never by this order.
    roster: Vec<Entity>,
}

impl DriverRegistry {
    /// Build a registry from an initial fleet.
    ///
    /// Fails with `InvalidInput` on a duplicate identity or an invalid
    /// onboarding record.
    pub fn new(drivers: impl IntoIterator<Item = NewDriver>) -> DispatchResult<Self> {
        let mut registry = Self::default();
        for driver in drivers {
            registry.add_driver(driver)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn contains(&self, id: &DriverId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Onboard a driver. Fails with `InvalidInput` if the identity is already
    /// registered or the record does not validate.
    pub fn add_driver(&mut self, driver: NewDriver) -> DispatchResult<()> {
        driver.validate()?;
        if self.by_id.contains_key(&driver.id) {
            return Err(DispatchError::InvalidInput(format!(
                "driver {} is already registered",
                driver.id
            )));
        }
        let NewDriver {
            id,
            location,
            rating,
            phase,
        } = driver;
        let entity = self
            .world
            .spawn((
                Driver {
                    id: id.clone(),
                    rating,
                    phase,
                },
                Position(location),
            ))
            .id();
        self.by_id.insert(id, entity);
        self.roster.push(entity);
        Ok(())
    }

    /// Remove a driver by identity. Fails with `DriverNotFound` if absent.
    pub fn remove_driver(&mut self, id: &DriverId) -> DispatchResult<()> {
        let entity = self
            .by_id
            .remove(id)
            .ok_or_else(|| DispatchError::DriverNotFound(id.clone()))?;
        self.roster.retain(|&e| e != entity);
        self.world.despawn(entity);
        Ok(())
    }

    /// Iterate the live driver set in insertion order.
    ///
    /// Borrows the registry, so the views reflect current state and no
    /// mutation can interleave with the scan.
    pub fn drivers(&self) -> impl Iterator<Item = DriverView<'_>> {
        self.roster.iter().filter_map(move |&entity| {
            let driver = self.world.get::<Driver>(entity)?;
            let position = self.world.get::<Position>(entity)?;
            Some(DriverView {
                id: &driver.id,
                location: position.0,
                rating: driver.rating,
                phase: driver.phase,
            })
        })
    }

    /// Look up one driver's live state by identity.
    pub fn view(&self, id: &DriverId) -> DispatchResult<DriverView<'_>> {
        let entity = self.entity(id)?;
        let driver = self
            .world
            .get::<Driver>(entity)
            .ok_or_else(|| DispatchError::DriverNotFound(id.clone()))?;
        let position = self
            .world
            .get::<Position>(entity)
            .ok_or_else(|| DispatchError::DriverNotFound(id.clone()))?;
        Ok(DriverView {
            id: &driver.id,
            location: position.0,
            rating: driver.rating,
            phase: driver.phase,
        })
    }

    /// Immutable status snapshot: name, location, rating, available.
    pub fn status(&self, id: &DriverId) -> DispatchResult<DriverStatus> {
        let view = self.view(id)?;
        Ok(DriverStatus {
            name: view.id.to_string(),
            location: view.location,
            rating: view.rating,
            available: view.phase.is_available(),
        })
    }

    pub fn phase(&self, id: &DriverId) -> DispatchResult<DriverPhase> {
        Ok(self.view(id)?.phase)
    }

    /// Move a driver, as reported by the external location feed.
    pub fn update_location(&mut self, id: &DriverId, location: Point) -> DispatchResult<()> {
        validate_point(location, "driver location")?;
        let entity = self.entity(id)?;
        let mut position = self
            .world
            .get_mut::<Position>(entity)
            .ok_or_else(|| DispatchError::DriverNotFound(id.clone()))?;
        position.0 = location;
        Ok(())
    }

    /// Commit half of the two-phase assignment: `Available → Reserved`.
    ///
    /// Fails with `PhaseConflict` when another request won the race for this
    /// driver between selection and commit; retry selection in that case.
    pub fn reserve(&mut self, id: &DriverId) -> DispatchResult<()> {
        self.transition(id, DriverPhase::Available, DriverPhase::Reserved)
    }

    /// Back out of a reservation that will not become a trip.
    pub fn release(&mut self, id: &DriverId) -> DispatchResult<()> {
        self.transition(id, DriverPhase::Reserved, DriverPhase::Available)
    }

    /// Picked the passenger up: `Reserved → Busy`.
    pub fn begin_trip(&mut self, id: &DriverId) -> DispatchResult<()> {
        self.transition(id, DriverPhase::Reserved, DriverPhase::Busy)
    }

    /// Dropped the passenger off: `Busy → Available`.
    pub fn complete_trip(&mut self, id: &DriverId) -> DispatchResult<()> {
        self.transition(id, DriverPhase::Busy, DriverPhase::Available)
    }

    /// Driver logs out: `Available → OffDuty`.
    pub fn go_off_duty(&mut self, id: &DriverId) -> DispatchResult<()> {
        self.transition(id, DriverPhase::Available, DriverPhase::OffDuty)
    }

    /// Driver logs back in: `OffDuty → Available`.
    pub fn go_on_duty(&mut self, id: &DriverId) -> DispatchResult<()> {
        self.transition(id, DriverPhase::OffDuty, DriverPhase::Available)
    }

    fn entity(&self, id: &DriverId) -> DispatchResult<Entity> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| DispatchError::DriverNotFound(id.clone()))
    }

    fn transition(
        &mut self,
        id: &DriverId,
        expected: DriverPhase,
        next: DriverPhase,
    ) -> DispatchResult<()> {
        let entity = self.entity(id)?;
        let mut driver = self
            .world
            .get_mut::<Driver>(entity)
            .ok_or_else(|| DispatchError::DriverNotFound(id.clone()))?;
        if driver.phase != expected {
            return Err(DispatchError::PhaseConflict {
                id: id.clone(),
                expected,
                actual: driver.phase,
            });
        }
        driver.phase = next;
        Ok(())
    }
}
