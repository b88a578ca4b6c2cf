// Library exports so the processing code is reachable from tests and tools
pub mod cli;
pub mod color;
pub mod ico;
pub mod recolor;
pub mod utils;

// Re-export commonly used items
pub use ico::{encode_ico, ico_sizes, save_ico};
pub use recolor::{is_blue_pixel, recolor_image, REFERENCE_BLUES};
