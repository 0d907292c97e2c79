pub mod color;
pub mod config;
pub mod connections;
pub mod constants;
pub mod error;
pub mod field;
pub mod hero;
pub mod input;
pub mod lifecycle;
pub mod projection;
pub mod render;
pub mod sphere;
pub mod surface;

pub use color::Rgba;
pub use config::FieldConfig;
pub use error::{ConfigError, FieldError, HostError};
pub use field::{ParticleField, ProjectedPoint, Repulsion};
pub use hero::Hero;
pub use input::{CursorState, FieldInputs, InputEvent, ScrollState, SurfaceSize};
pub use lifecycle::{AnimationHandle, EventTarget, Host, HostEvent};
pub use render::FrameStats;
pub use sphere::Point;
pub use surface::{GradientStop, Surface};
