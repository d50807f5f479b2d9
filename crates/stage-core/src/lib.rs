pub mod constants;
pub mod coordinator;
pub mod debounce;
pub mod env;
pub mod error;
pub mod player;
pub mod renderer;
pub mod scheduler;
pub mod tracks;
pub mod waves;

pub use constants::*;
pub use coordinator::*;
pub use debounce::*;
pub use env::*;
pub use error::*;
pub use player::*;
pub use renderer::*;
pub use scheduler::*;
pub use tracks::*;
pub use waves::*;
