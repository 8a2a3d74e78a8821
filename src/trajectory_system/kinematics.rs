use crate::utils::vector3d::Vector3D;

/// Point-mass kinematic state. Only the vertical axis is ever driven; x and z
/// keep whatever velocity they start with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Vector3D,
    pub velocity: Vector3D,
}

impl Kinematics {
    pub fn new(position: Vector3D, velocity: Vector3D) -> Self {
        Kinematics { position, velocity }
    }

    pub fn at_rest() -> Self {
        Kinematics::new(Vector3D::ZERO, Vector3D::ZERO)
    }

    pub fn accelerate_vertical(&mut self, acceleration: f64, delta_time: f64) {
        self.velocity.y += acceleration * delta_time;
    }

    /// Semi-implicit Euler step under constant gravity, followed by the ground
    /// clamp. Returns `true` when the clamp fired.
    pub fn update(&mut self, delta_time: f64, gravity: f64) -> bool {
        self.velocity.y -= gravity.abs() * delta_time;
        self.position += self.velocity * delta_time;

        self.clamp_to_ground()
    }

    fn clamp_to_ground(&mut self) -> bool {
        // Also catches NaN.
        if !(self.position.y >= 0.0) {
            self.position.y = 0.0;
            self.velocity.y = 0.0;
            true
        } else {
            false
        }
    }

    pub fn get_altitude(&self) -> f64 {
        self.position.y
    }

    pub fn is_on_ground(&self) -> bool {
        self.position.y == 0.0
    }
}
