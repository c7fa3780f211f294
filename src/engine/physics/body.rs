use super::collision::CollisionGroups;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for the two kinds of bodies a level needs
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Dynamic body, moved by gravity and velocity commands
    pub fn new_dynamic() -> Self {
        Self::of_type(RigidBodyType::Dynamic)
    }

    /// Fixed body for ground and level pieces
    pub fn new_fixed() -> Self {
        Self::of_type(RigidBodyType::Fixed)
    }

    fn of_type(body_type: RigidBodyType) -> Self {
        Self {
            body_type,
            position: Isometry::identity(),
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// A sleeping body stops reporting contacts
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (the runner never tips over)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Collider builder with the runner's layer, sensor and enable flags
pub struct ColliderBuilder2D {
    shape: SharedShape,
    offset: Vector<Real>,
    collision_groups: CollisionGroups,
    is_sensor: bool,
    enabled: bool,
    friction: Real,
    density: Real,
    active_events: ActiveEvents,
}

impl ColliderBuilder2D {
    fn with_shape(shape: SharedShape) -> Self {
        Self {
            shape,
            offset: Vector::zeros(),
            collision_groups: CollisionGroups::Default,
            is_sensor: false,
            enabled: true,
            friction: 0.5,
            density: 1.0,
            active_events: ActiveEvents::COLLISION_EVENTS,
        }
    }

    /// Axis-aligned box
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self::with_shape(SharedShape::cuboid(half_width, half_height))
    }

    /// Vertical capsule
    pub fn capsule(half_height: Real, radius: Real) -> Self {
        let a = Point::new(0.0, -half_height);
        let b = Point::new(0.0, half_height);
        Self::with_shape(SharedShape::capsule(a, b, radius))
    }

    /// Offset the collider from its parent body's origin
    pub fn offset(mut self, x: Real, y: Real) -> Self {
        self.offset = Vector::new(x, y);
        self
    }

    pub fn collision_groups(mut self, groups: CollisionGroups) -> Self {
        self.collision_groups = groups;
        self
    }

    /// Sensors report overlaps without a contact response
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// Whether the collider starts enabled
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    pub fn density(mut self, density: Real) -> Self {
        self.density = density;
        self
    }

    pub fn build(self) -> Collider {
        rapier2d::prelude::ColliderBuilder::new(self.shape)
            .translation(self.offset)
            .collision_groups(self.collision_groups.to_interaction_groups())
            .sensor(self.is_sensor)
            .enabled(self.enabled)
            .friction(self.friction)
            .restitution(0.0)
            .density(self.density)
            .active_events(self.active_events)
            .build()
    }
}

/// Common body and collider configurations for the runner and its level
pub mod presets {
    use super::*;

    /// The runner's body (dynamic, rotation locked, never sleeps)
    pub fn runner_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .lock_rotation()
            .can_sleep(false)
            .build()
    }

    /// Full-height hurtbox used while running and jumping
    pub fn normal_collider(width: Real, height: Real) -> Collider {
        let radius = width / 2.0;
        let half_height = (height / 2.0) - radius;

        ColliderBuilder2D::capsule(half_height, radius)
            .collision_groups(CollisionGroups::Runner)
            .friction(0.0)
            .density(1.0)
            .build()
    }

    /// Half-height hurtbox hugging the feet, disabled until a slide starts
    pub fn slide_collider(width: Real, height: Real) -> Collider {
        let half_height = height / 4.0;

        ColliderBuilder2D::box_shape(width / 2.0, half_height)
            .offset(0.0, -half_height)
            .collision_groups(CollisionGroups::Runner)
            .friction(0.0)
            .density(1.0)
            .enabled(false)
            .build()
    }

    /// Melee hit-detection sensor in front of the runner, disabled until an attack
    pub fn attack_region(reach: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(reach / 2.0, height / 4.0)
            .offset(reach / 2.0 + 0.5, 0.0)
            .collision_groups(CollisionGroups::AttackRegion)
            .sensor(true)
            .density(0.0)
            .enabled(false)
            .build()
    }

    /// A fixed body for level pieces
    pub fn fixed_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Ground box on the ground layer
    pub fn ground_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Ground)
            .friction(0.3)
            .build()
    }

    /// Enemy contact region
    pub fn enemy_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Enemy)
            .sensor(true)
            .build()
    }

    /// Hazard sensor (spikes and the like)
    pub fn hazard_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Hazard)
            .sensor(true)
            .build()
    }
}
