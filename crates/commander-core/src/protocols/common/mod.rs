pub mod half;

pub use half::half_to_f32;
