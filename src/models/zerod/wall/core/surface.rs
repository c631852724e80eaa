//! Heterogeneous surface chemistry on the wall's two faces.
//!
//! Each face may carry a bound mechanism and surface phase. The wall keeps
//! its own coverage cache per face; the cache and the authoritative surface
//! phase are reconciled only through the explicit operations here. In
//! particular, the wall never reads coverages back from the phase: callers
//! seed the cache with [`Wall::set_coverages`] and push it out with
//! [`Wall::sync_coverages`] before any rate evaluation that depends on it.

use std::fmt;

use crate::support::surface::{HeterogeneousKinetics, SurfacePhase};

use super::{Side, Wall, WallError, sensitivity::SensitivityRegistry};

/// A heterogeneous mechanism and the surface phase it operates on, borrowed
/// for binding to one wall face.
#[derive(Clone, Copy)]
pub struct SurfaceMechanism<'a> {
    /// The reaction-rate evaluator for this face.
    pub kinetics: &'a dyn HeterogeneousKinetics,

    /// The authoritative coverage store for this face.
    pub surface: &'a dyn SurfacePhase,
}

impl fmt::Debug for SurfaceMechanism<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceMechanism").finish_non_exhaustive()
    }
}

/// Everything the wall tracks for one face with surface chemistry: the
/// bound mechanism, the local coverage cache, and the sensitivity registry.
pub(crate) struct SurfaceSite<'a> {
    pub(crate) mechanism: SurfaceMechanism<'a>,
    pub(crate) coverages: Vec<f64>,
    pub(crate) registry: SensitivityRegistry,
}

impl<'a> SurfaceSite<'a> {
    fn bind(mechanism: SurfaceMechanism<'a>) -> Self {
        Self {
            coverages: vec![0.0; mechanism.surface.species_count()],
            registry: SensitivityRegistry::default(),
            mechanism,
        }
    }
}

impl<'a> Wall<'a> {
    /// Binds the heterogeneous mechanisms for the two wall faces.
    ///
    /// Either side may be `None` (no surface chemistry on that face). Each
    /// bound face gets a zero-filled coverage cache sized to the surface
    /// phase's species count and an empty sensitivity registry; rebinding a
    /// face discards its previous cache and registry.
    pub fn set_kinetics(
        &mut self,
        left: Option<SurfaceMechanism<'a>>,
        right: Option<SurfaceMechanism<'a>>,
    ) {
        *self.surfaces.get_mut(Side::Left) = left.map(SurfaceSite::bind);
        *self.surfaces.get_mut(Side::Right) = right.map(SurfaceSite::bind);
    }

    /// The kinetics mechanism bound to one face, if any.
    #[must_use]
    pub fn kinetics(&self, side: Side) -> Option<&'a dyn HeterogeneousKinetics> {
        self.surfaces[side].as_ref().map(|s| s.mechanism.kinetics)
    }

    /// The surface phase bound to one face, if any.
    #[must_use]
    pub fn surface(&self, side: Side) -> Option<&'a dyn SurfacePhase> {
        self.surfaces[side].as_ref().map(|s| s.mechanism.surface)
    }

    /// The number of surface species on one face; zero if unbound.
    #[must_use]
    pub fn n_surface_species(&self, side: Side) -> usize {
        self.surfaces[side].as_ref().map_or(0, |s| s.coverages.len())
    }

    /// Overwrites the wall's coverage cache for one face.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoSurface`] if the face has no bound mechanism,
    /// or [`WallError::CoverageLength`] if `coverages` does not match the
    /// face's species count.
    pub fn set_coverages(&mut self, side: Side, coverages: &[f64]) -> Result<(), WallError> {
        let site = self
            .surfaces
            .get_mut(side)
            .as_mut()
            .ok_or(WallError::NoSurface(side))?;
        if coverages.len() != site.coverages.len() {
            return Err(WallError::CoverageLength {
                expected: site.coverages.len(),
                got: coverages.len(),
            });
        }
        site.coverages.copy_from_slice(coverages);
        Ok(())
    }

    /// The wall's coverage cache for one face.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoSurface`] if the face has no bound mechanism.
    pub fn coverages(&self, side: Side) -> Result<&[f64], WallError> {
        self.surfaces[side]
            .as_ref()
            .map(|s| s.coverages.as_slice())
            .ok_or(WallError::NoSurface(side))
    }

    /// Copies the wall's coverage cache for one face into `out`.
    ///
    /// Useful when the integrator assembles coverages into a larger state
    /// vector.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoSurface`] if the face has no bound mechanism,
    /// or [`WallError::CoverageLength`] if `out` does not match the face's
    /// species count.
    pub fn copy_coverages_into(&self, side: Side, out: &mut [f64]) -> Result<(), WallError> {
        let cached = self.coverages(side)?;
        if out.len() != cached.len() {
            return Err(WallError::CoverageLength {
                expected: cached.len(),
                got: out.len(),
            });
        }
        out.copy_from_slice(cached);
        Ok(())
    }

    /// Pushes the wall's coverage cache into the face's surface phase,
    /// making the phase consistent with the cache.
    ///
    /// Call this before any reaction-rate evaluation on the phase that
    /// depends on current coverage.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoSurface`] if the face has no bound mechanism.
    pub fn sync_coverages(&self, side: Side) -> Result<(), WallError> {
        let site = self.surfaces[side]
            .as_ref()
            .ok_or(WallError::NoSurface(side))?;
        site.mechanism.surface.set_coverages(&site.coverages);
        Ok(())
    }
}
