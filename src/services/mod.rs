pub mod context;
pub mod features;
pub mod form;
pub mod h2h;
pub mod innings;
pub mod player_impact;
pub mod venue;

pub use context::*;
pub use features::*;
pub use form::*;
pub use h2h::*;
pub use innings::*;
pub use player_impact::*;
pub use venue::*;
