/// Camera — pose + projection state, recomputed by its own setters.
///
/// Every pose setter rebuilds the view matrix from the supplied pose;
/// every projection setter rebuilds the projection matrix from the
/// supplied parameters. Matrices are column-major `glam::Mat4`, the
/// projection maps depth to [0, 1].
///
/// Single-threaded by contract: one logical owner mutates, one logical
/// reader consumes per frame. No interior mutability, no locking.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::camera_trace;
use crate::camera_warn;
use crate::error::{Error, Result};

const LOG_SOURCE: &str = "lantern::Camera";

/// Horizontal FOV assumed by `auto_calc_fov`, in degrees.
const AUTO_FOV_HORIZONTAL_DEG: f32 = 100.0;

/// Aspect ratios below this are treated as a contract violation.
const MIN_ASPECT_RATIO: f32 = 1e-6;

/// Last-supplied orientation input, tagged by which setter produced it.
///
/// The two Euler conventions are not interchangeable: equal angle vectors
/// fed to the YXZ and XYZ setters generally produce different matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    /// World-space look direction (not necessarily unit length)
    LookDirection(Vec3),
    /// Euler angles in radians, composed Y then X then Z (intrinsic)
    EulerYXZ(Vec3),
    /// Euler angles in radians, composed X then Y then Z (intrinsic)
    EulerXYZ(Vec3),
}

/// Which derivation produced the current projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

/// Camera transform state.
///
/// Default-constructed with identity matrices and zeroed parameters;
/// every field is overwritten only by the setter that owns it.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    orientation: Orientation,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    projection_mode: ProjectionMode,
    clipping_near: f32,
    clipping_far: f32,
    perspective_fov_y: f32,
    perspective_aspect_ratio: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Orientation::LookDirection(Vec3::ZERO),
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            projection_mode: ProjectionMode::Perspective,
            clipping_near: 0.0,
            clipping_far: 0.0,
            perspective_fov_y: 0.0,
            perspective_aspect_ratio: 0.0,
        }
    }
}

impl Camera {
    /// Create a camera with identity matrices and zeroed parameters.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== POSE SETTERS =====

    /// Set the view transform from an eye position and a look direction.
    ///
    /// Builds the right-handed orthonormal basis `w = normalize(direction)`,
    /// `u = normalize(w × up)`, `v = w × u` and writes it as the rotation
    /// rows of the view matrix, with translation `(-u·p, -v·p, -w·p)`.
    ///
    /// `direction` parallel to `up` makes the cross product vanish; the
    /// caller must avoid that, it is not guarded here.
    pub fn set_view_direction(&mut self, position: Vec3, direction: Vec3, up: Vec3) {
        self.position = position;
        self.orientation = Orientation::LookDirection(direction);

        let w = direction.normalize();
        let u = w.cross(up).normalize();
        let v = w.cross(u);
        self.write_view_basis(u, v, w, position);
    }

    /// Set the view transform from an eye position and a look-at target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] when `target == position`; the
    /// camera state is left untouched.
    pub fn set_view_target(&mut self, position: Vec3, target: Vec3, up: Vec3) -> Result<()> {
        if target - position == Vec3::ZERO {
            camera_warn!(LOG_SOURCE, "Provided position and target are identical");
            return Err(Error::DegenerateInput(
                "look-at target equals the eye position".to_string(),
            ));
        }
        self.set_view_direction(position, target - position, up);
        Ok(())
    }

    /// Set the view transform from Euler angles composed Y, then X, then Z
    /// (intrinsic), in radians.
    ///
    /// The basis is expanded in closed form rather than composed from
    /// elemental rotation matrices. Zero rotation yields the identity basis.
    pub fn set_view_yxz(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.orientation = Orientation::EulerYXZ(rotation);

        let c1 = rotation.y.cos();
        let c2 = rotation.x.cos();
        let c3 = rotation.z.cos();
        let s1 = rotation.y.sin();
        let s2 = rotation.x.sin();
        let s3 = rotation.z.sin();

        let u = Vec3::new(
            c1 * c3 + s1 * s2 * s3,
            c2 * s3,
            c1 * s2 * s3 - c3 * s1,
        );
        let v = Vec3::new(
            c3 * s1 * s2 - c1 * s3,
            c2 * c3,
            c1 * c3 * s2 + s1 * s3,
        );
        let w = Vec3::new(c2 * s1, -s2, c1 * c2);

        self.write_view_basis(u, v, w, position);
    }

    /// Set the view transform from Euler angles composed X, then Y, then Z
    /// (intrinsic), in radians.
    ///
    /// Not interchangeable with [`Camera::set_view_yxz`]: the same angle
    /// vector generally produces a different matrix.
    pub fn set_view_xyz(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.orientation = Orientation::EulerXYZ(rotation);

        let c1 = rotation.x.cos();
        let c2 = rotation.y.cos();
        let c3 = rotation.z.cos();
        let s1 = rotation.x.sin();
        let s2 = rotation.y.sin();
        let s3 = rotation.z.sin();

        let u = Vec3::new(c2 * c3, -c2 * s3, s2);
        let v = Vec3::new(
            c1 * s3 + c3 * s1 * s2,
            c3 * c1 - s1 * s2 * s3,
            -c2 * s1,
        );
        let w = Vec3::new(
            s1 * s3 - c1 * c3 * s2,
            c1 * s2 * s3 + c3 * s1,
            c1 * c2,
        );

        self.write_view_basis(u, v, w, position);
    }

    // ===== PROJECTION SETTERS =====

    /// Set an orthographic projection mapping the box
    /// `[left,right] × [top,bottom] × [near,far]` to x,y in [-1,1] and
    /// z in [0,1]. Also stores the clipping distances.
    ///
    /// # Panics
    ///
    /// Panics when `near >= far` (contract violation).
    pub fn set_orthographic_projection(
        &mut self,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
    ) {
        assert!(near < far, "near clipping distance must be strictly less than far");

        self.clipping_near = near;
        self.clipping_far = far;
        self.projection_mode = ProjectionMode::Orthographic;

        self.projection_matrix = Mat4::from_cols(
            Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / (bottom - top), 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0 / (far - near), 0.0),
            Vec4::new(
                -(right + left) / (right - left),
                -(bottom + top) / (bottom - top),
                -near / (far - near),
                1.0,
            ),
        );
    }

    /// Set a perspective projection from a vertical FOV (radians), aspect
    /// ratio (width / height) and clipping distances. Depth maps to [0,1].
    ///
    /// Stores all four parameters so that [`Camera::set_aspect_ratio`] and
    /// [`Camera::set_fov_y`] can recompute the matrix later.
    ///
    /// # Panics
    ///
    /// Panics when `aspect_ratio` is indistinguishable from zero or when
    /// `near >= far` (contract violations).
    pub fn set_perspective_projection(
        &mut self,
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) {
        assert!(
            aspect_ratio.abs() > MIN_ASPECT_RATIO,
            "aspect ratio must be non-zero"
        );
        assert!(near < far, "near clipping distance must be strictly less than far");

        self.perspective_fov_y = fov_y;
        self.perspective_aspect_ratio = aspect_ratio;
        self.clipping_near = near;
        self.clipping_far = far;
        self.projection_mode = ProjectionMode::Perspective;

        let tan_half_fov_y = (fov_y / 2.0).tan();
        self.projection_matrix = Mat4::from_cols(
            Vec4::new(1.0 / (aspect_ratio * tan_half_fov_y), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0 / tan_half_fov_y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, far / (far - near), 1.0),
            Vec4::new(0.0, 0.0, -(far * near) / (far - near), 0.0),
        );
    }

    /// Overwrite the stored aspect ratio and recompute the perspective
    /// matrix from the stored FOV and clipping distances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectionMode`] when the camera currently holds an
    /// orthographic projection; nothing is mutated.
    ///
    /// # Panics
    ///
    /// Same contract as [`Camera::set_perspective_projection`].
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<()> {
        self.reject_unless_perspective("set_aspect_ratio")?;
        self.set_perspective_projection(
            self.perspective_fov_y,
            aspect_ratio,
            self.clipping_near,
            self.clipping_far,
        );
        Ok(())
    }

    /// Overwrite the stored vertical FOV (radians) and recompute the
    /// perspective matrix from the stored aspect ratio and clipping
    /// distances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectionMode`] when the camera currently holds an
    /// orthographic projection; nothing is mutated.
    ///
    /// # Panics
    ///
    /// Same contract as [`Camera::set_perspective_projection`].
    pub fn set_fov_y(&mut self, fov_y: f32) -> Result<()> {
        self.reject_unless_perspective("set_fov_y")?;
        self.set_perspective_projection(
            fov_y,
            self.perspective_aspect_ratio,
            self.clipping_near,
            self.clipping_far,
        );
        Ok(())
    }

    /// Derive a vertical FOV from the image size, assuming a fixed 100°
    /// horizontal FOV, and store it in degrees.
    ///
    /// Does not touch the projection matrix; a subsequent perspective
    /// setter call materializes the change. Callers convert the stored
    /// value to radians before feeding it back to
    /// [`Camera::set_perspective_projection`].
    pub fn auto_calc_fov(&mut self, image_size: Vec2) {
        let hfov_rad = AUTO_FOV_HORIZONTAL_DEG.to_radians();
        let aspect_ratio = image_size.x / image_size.y;
        let vfov_rad = 2.0 * ((hfov_rad / 2.0).tan() * (1.0 / aspect_ratio)).atan();
        self.perspective_fov_y = vfov_rad.to_degrees();
        camera_trace!(LOG_SOURCE, "Recalculated FOV: {}", self.perspective_fov_y);
    }

    /// Overwrite the clipping distances without recomputing any matrix.
    ///
    /// The new distances take effect the next time a projection setter
    /// or recompute runs.
    ///
    /// # Panics
    ///
    /// Panics when `near >= far` (contract violation).
    pub fn set_clipping_dist(&mut self, near: f32, far: f32) {
        assert!(near < far, "near clipping distance must be strictly less than far");
        self.clipping_near = near;
        self.clipping_far = far;
    }

    // ===== GETTERS =====

    /// World-space eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Last-supplied orientation input, tagged by setter.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// View matrix (world space → camera space), column-major.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (camera space → clip space), column-major.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Which derivation produced the current projection matrix.
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Near clipping distance.
    pub fn clipping_near(&self) -> f32 {
        self.clipping_near
    }

    /// Far clipping distance.
    pub fn clipping_far(&self) -> f32 {
        self.clipping_far
    }

    /// Stored vertical FOV. Radians when set by the perspective setters,
    /// degrees right after [`Camera::auto_calc_fov`].
    pub fn fov_y(&self) -> f32 {
        self.perspective_fov_y
    }

    /// Stored aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.perspective_aspect_ratio
    }

    // ===== INTERNAL =====

    /// Write the view matrix from camera basis vectors and eye position.
    ///
    /// `u`, `v`, `w` become the rows of the rotation block (the transpose
    /// of the camera's world rotation), translation is the negated eye
    /// position expressed in that basis.
    fn write_view_basis(&mut self, u: Vec3, v: Vec3, w: Vec3, position: Vec3) {
        self.view_matrix = Mat4::from_cols(
            Vec4::new(u.x, v.x, w.x, 0.0),
            Vec4::new(u.y, v.y, w.y, 0.0),
            Vec4::new(u.z, v.z, w.z, 0.0),
            Vec4::new(
                -u.dot(position),
                -v.dot(position),
                -w.dot(position),
                1.0,
            ),
        );
    }

    fn reject_unless_perspective(&self, operation: &str) -> Result<()> {
        if self.projection_mode != ProjectionMode::Perspective {
            camera_warn!(
                LOG_SOURCE,
                "{} rejected: camera holds an orthographic projection",
                operation
            );
            return Err(Error::ProjectionMode(format!(
                "{} requires a perspective projection",
                operation
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
