pub mod app;
pub mod collision;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod session;

// Library exports for testing
pub use entities::{Bounds, Enemy, Formation, GameState, Player, Projectile, ProjectileOwner};
pub use input::InputKey;
pub use session::{Session, SessionConfig};
