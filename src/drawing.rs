use crate::error::{ConfigError, GrowthError, Result};
use crate::math::polygon_2d::Bounds2;
use crate::math::{Degrees, Point2, Vector2};
use crate::operations::creation::{MakeTriangle, TriangleRequest};
use crate::operations::growth::{
    branch_request, find_candidates, BranchSpec, CandidatePicker, LastCandidate,
};
use crate::topology::{TriangleId, TriangleStore};

/// Parameters describing a drawing's seed, branch and screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingParams {
    /// Centre of the seed triangle.
    pub origin: Point2,
    /// Distance from the seed's centre to each of its vertices.
    pub size: f64,
    /// Orientation of the seed triangle, in degrees.
    pub rotation: Degrees,
    /// Seed edge the second triangle branches from, `0..=2`.
    pub branch_edge: usize,
    /// How far along the branch edge the branch point sits, in `(0, 1)`.
    pub branch_point: f64,
    /// Angle between the branch edge and the new triangle's first edge,
    /// in `(0°, 120°)`.
    pub branch_angle: Degrees,
    /// Width and height of the screen, whose top-left corner is the origin.
    pub screen_size: Vector2,
}

impl Default for DrawingParams {
    fn default() -> Self {
        Self {
            origin: Point2::new(400.0, 300.0),
            size: 50.0,
            rotation: -15.0,
            branch_edge: 1,
            branch_point: 0.25,
            branch_angle: 15.0,
            screen_size: Vector2::new(800.0, 600.0),
        }
    }
}

impl DrawingParams {
    /// Checks every parameter against its documented range.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        finite("origin.x", self.origin.x)?;
        finite("origin.y", self.origin.y)?;
        finite("rotation", self.rotation)?;
        positive("size", self.size)?;
        positive("screen_size.x", self.screen_size.x)?;
        positive("screen_size.y", self.screen_size.y)?;
        if self.branch_edge > 2 {
            return Err(ConfigError::EdgeOutOfRange {
                edge: self.branch_edge,
            });
        }
        open_interval("branch_point", self.branch_point, 0.0, 1.0)?;
        open_interval("branch_angle", self.branch_angle, 0.0, 120.0)?;
        Ok(())
    }

    #[must_use]
    pub fn screen_bounds(&self) -> Bounds2 {
        Bounds2::from_size(self.screen_size)
    }

    fn branch_spec(&self) -> BranchSpec {
        BranchSpec {
            edge: self.branch_edge,
            point: self.branch_point,
            angle: self.branch_angle,
            size: self.size,
        }
    }
}

fn finite(parameter: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { parameter })
    }
}

fn positive(parameter: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    finite(parameter, value)?;
    open_interval(parameter, value, 0.0, f64::INFINITY)
}

fn open_interval(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> std::result::Result<(), ConfigError> {
    if value > min && value < max {
        Ok(())
    } else {
        Err(ConfigError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        })
    }
}

/// The renderable state of a drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shapes {
    /// Outline of the whole figure. Left empty: tracing it is up to the
    /// rendering layer.
    pub silhouette: Vec<Point2>,
    /// Every triangle, in creation order.
    pub triangles: Vec<[Point2; 3]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Seeded,
    Growing,
    Complete,
}

/// A Triangberg figure grown one triangle at a time.
#[derive(Debug)]
pub struct Drawing {
    params: DrawingParams,
    store: TriangleStore,
    seed: TriangleId,
    phase: Phase,
}

impl Drawing {
    /// Validates `params` and places the seed triangle.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any parameter is out of range.
    pub fn new(params: DrawingParams) -> Result<Self> {
        params.validate()?;
        let mut store = TriangleStore::new();
        let seed = MakeTriangle::new(TriangleRequest::Seed {
            center: params.origin,
            rotation: params.rotation,
            size: params.size,
        })
        .execute(&mut store)?;
        tracing::debug!(
            x = params.origin.x,
            y = params.origin.y,
            size = params.size,
            "placed seed triangle"
        );
        Ok(Self {
            params,
            store,
            seed,
            phase: Phase::Seeded,
        })
    }

    /// Whether no more triangles can be added. Once true, stays true.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Adds one triangle, accepting the last legal candidate.
    ///
    /// # Errors
    ///
    /// See [`Drawing::add_triangle_with`].
    pub fn add_triangle(&mut self) -> Result<()> {
        self.add_triangle_with(&mut LastCandidate)
    }

    /// Adds one triangle, letting `picker` choose among legal candidates.
    ///
    /// The first call attaches the branch triangle and never consults the
    /// picker. Later calls grow a fill-in triangle, or mark the drawing
    /// complete when none is legal. Does nothing once complete.
    ///
    /// # Errors
    ///
    /// Returns an error if `picker` returns an out-of-range index; the
    /// drawing is left unchanged in that case.
    pub fn add_triangle_with<P>(&mut self, picker: &mut P) -> Result<()>
    where
        P: CandidatePicker + ?Sized,
    {
        match self.phase {
            Phase::Seeded => self.add_branch(),
            Phase::Growing => self.grow(picker),
            Phase::Complete => Ok(()),
        }
    }

    /// Adds triangles until the drawing is complete or `max_steps` calls
    /// have been made. Returns the number of calls made.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Drawing::add_triangle_with`].
    pub fn grow_to_completion<P>(&mut self, picker: &mut P, max_steps: usize) -> Result<usize>
    where
        P: CandidatePicker + ?Sized,
    {
        let mut steps = 0;
        while !self.is_complete() && steps < max_steps {
            self.add_triangle_with(picker)?;
            steps += 1;
        }
        Ok(steps)
    }

    /// Returns every triangle's shape in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is inconsistent.
    pub fn shapes(&self) -> Result<Shapes> {
        let triangles = self
            .store
            .triangle_ids()
            .iter()
            .map(|&id| self.store.shape(id))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Shapes {
            silhouette: Vec::new(),
            triangles,
        })
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.store.triangle_count()
    }

    #[must_use]
    pub fn params(&self) -> &DrawingParams {
        &self.params
    }

    /// Read access to the vertex/triangle arena.
    #[must_use]
    pub fn store(&self) -> &TriangleStore {
        &self.store
    }

    fn add_branch(&mut self) -> Result<()> {
        let request = branch_request(&self.store, self.seed, &self.params.branch_spec())?;
        let id = MakeTriangle::new(request).execute(&mut self.store)?;
        self.phase = Phase::Growing;
        tracing::debug!(serial = self.store.triangle(id)?.serial, "added branch triangle");
        Ok(())
    }

    fn grow<P>(&mut self, picker: &mut P) -> Result<()>
    where
        P: CandidatePicker + ?Sized,
    {
        let candidates = find_candidates(&self.store, &self.params.screen_bounds())?;
        if candidates.is_empty() {
            self.phase = Phase::Complete;
            tracing::info!(
                triangles = self.store.triangle_count(),
                "drawing complete"
            );
            return Ok(());
        }

        let count = candidates.len();
        let picked = picker.pick(count);
        let candidate = candidates
            .get(picked)
            .ok_or(GrowthError::PickOutOfRange { picked, count })?;
        let id = MakeTriangle::new(candidate.request()).execute(&mut self.store)?;
        tracing::debug!(
            serial = self.store.triangle(id)?.serial,
            picked,
            count,
            "added fill-in triangle"
        );
        Ok(())
    }
}
