mod capacity;
mod hide;
mod unveil;

pub use capacity::capacity;
pub use hide::hide;
pub use unveil::unveil;
