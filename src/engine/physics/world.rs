use rapier2d::parry::shape::Ball;
use rapier2d::prelude::*;
use std::collections::HashMap;

use super::collision::{CollisionEvent as GameCollisionEvent, CollisionEventQueue, ColliderTag};

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Physics world that manages all physics simulation
pub struct PhysicsWorld {
    /// Gravity vector (default: -9.81 m/s² in y-axis)
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Query pipeline for overlap tests
    query_pipeline: QueryPipeline,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Collision event handler
    collision_event_queue: CollisionEventQueue,

    /// Gameplay tags for level colliders
    collider_tags: HashMap<ColliderHandle, ColliderTag>,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        Self::with_gravity(Vector::new(0.0, -9.81))
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            collision_event_queue: CollisionEventQueue::new(),
            collider_tags: HashMap::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        // Clear previous step's collision events
        self.collision_event_queue.clear();

        let event_handler = &self.collision_event_queue;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            event_handler,
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Add a collider and remember its gameplay tag
    pub fn add_tagged_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
        tag: ColliderTag,
    ) -> ColliderHandle {
        let handle = self.add_collider(collider, parent_handle);
        self.collider_tags.insert(handle, tag);
        handle
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Get a reference to a collider
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Enable or disable a collider. Returns false if the handle is stale.
    pub fn set_collider_enabled(&mut self, handle: ColliderHandle, enabled: bool) -> bool {
        match self.collider_set.get_mut(handle) {
            Some(collider) => {
                collider.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Whether a collider exists and is enabled
    pub fn is_collider_enabled(&self, handle: ColliderHandle) -> bool {
        self.collider_set
            .get(handle)
            .map(|collider| collider.is_enabled())
            .unwrap_or(false)
    }

    /// Gameplay tag of a collider, if it was added with one
    pub fn collider_tag(&self, handle: ColliderHandle) -> Option<ColliderTag> {
        self.collider_tags.get(&handle).copied()
    }

    /// World-space position of a collider
    pub fn collider_position(&self, handle: ColliderHandle) -> Option<Vector<Real>> {
        self.collider_set
            .get(handle)
            .map(|collider| *collider.translation())
    }

    /// Circle overlap test against colliders whose membership intersects `layer_mask`
    pub fn overlap_circle(
        &self,
        center: Vector<Real>,
        radius: Real,
        layer_mask: u32,
        exclude: Option<RigidBodyHandle>,
    ) -> bool {
        let groups = InteractionGroups::new(Group::ALL, Group::from_bits_truncate(layer_mask));
        let mut filter = QueryFilter::default().groups(groups);
        if let Some(body) = exclude {
            filter = filter.exclude_rigid_body(body);
        }

        let ball = Ball::new(radius);
        let shape_pos = Isometry::translation(center.x, center.y);

        self.query_pipeline
            .intersection_with_shape(
                &self.rigid_body_set,
                &self.collider_set,
                &shape_pos,
                &ball,
                filter,
            )
            .is_some()
    }

    /// Get all collision events from this step
    pub fn get_collision_events(&self) -> Vec<GameCollisionEvent> {
        self.collision_event_queue.events()
    }

    /// Get current gravity
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Set the timestep for physics simulation
    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }

    /// Get the current timestep
    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
