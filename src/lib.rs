pub mod collections;
pub mod math_utils;
pub mod rendering;
pub mod utility;
