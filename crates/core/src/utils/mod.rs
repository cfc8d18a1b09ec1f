pub mod path;

pub use path::{absolutize, normalize};
