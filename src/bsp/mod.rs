// src/bsp/mod.rs
pub mod bsp_partition;
pub mod bsp_util;

pub use bsp_partition::{is_splittable, partition};
pub use bsp_util::{SplitAxis, Space};
