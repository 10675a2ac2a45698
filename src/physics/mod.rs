mod plugin;

pub use plugin::PhysicsPlugin;
