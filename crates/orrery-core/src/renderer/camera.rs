use glam::{Mat4, Vec3};

/// Keep the eye off the poles so look-at stays well-conditioned with a +Z up.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.1;

/// Eye distance clamp for wheel zoom, scene units.
const DISTANCE_MIN: f32 = 40.0;
const DISTANCE_MAX: f32 = 500.0;

/// Perspective camera orbiting the scene origin.
///
/// The scene lies in the XY plane with +Z up; the default view looks down
/// from just short of the +Z pole at distance 150. Drag and wheel input move
/// the *targets*; [`OrbitCamera::update`] eases the live values toward them,
/// which gives the glide-to-rest feel of damped orbit controls.
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Smoothing factor for the target approach (0.0 = instant snap,
    /// closer to 1.0 = longer glide).
    pub smoothing: f32,
}

impl OrbitCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, z_near: f32, z_far: f32, distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: PITCH_LIMIT,
            distance,
            target_yaw: 0.0,
            target_pitch: PITCH_LIMIT,
            target_distance: distance,
            fov_y: fov_y_deg.to_radians(),
            aspect,
            z_near,
            z_far,
            smoothing: 0.95,
        }
    }

    /// Jump the view to the given angles and distance, no easing.
    pub fn look_from(&mut self, yaw: f32, pitch: f32, distance: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance = distance.clamp(DISTANCE_MIN, DISTANCE_MAX);
        self.target_yaw = self.yaw;
        self.target_pitch = self.pitch;
        self.target_distance = self.distance;
    }

    /// Nudge the orbit targets by the given angle deltas (radians).
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.target_yaw += d_yaw;
        self.target_pitch = (self.target_pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scale the target distance by the given factor (>1 zooms out).
    pub fn zoom_by(&mut self, factor: f32) {
        self.target_distance = (self.target_distance * factor).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Ease the live view toward its targets. Call once per tick.
    pub fn update(&mut self, dt: f32) {
        if self.smoothing <= 0.0 {
            self.yaw = self.target_yaw;
            self.pitch = self.target_pitch;
            self.distance = self.target_distance;
            return;
        }
        let lerp_factor = 1.0 - self.smoothing.powf(dt * 60.0);
        self.yaw += (self.target_yaw - self.yaw) * lerp_factor;
        self.pitch += (self.target_pitch - self.pitch) * lerp_factor;
        self.distance += (self.target_distance - self.distance) * lerp_factor;
    }

    /// Resize the viewport (e.g. on window resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// Eye position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            self.distance * cos_pitch * self.yaw.cos(),
            self.distance * cos_pitch * self.yaw.sin(),
            self.distance * sin_pitch,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Z)
    }

    /// Right-handed perspective projection with 0..1 depth (WebGPU clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }
}
