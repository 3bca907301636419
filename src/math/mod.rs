pub mod bignumber;
pub mod casting;
pub mod ceil_div;
pub mod constants;
pub mod fixed_point;
pub mod floor_div;
pub mod safe_math;
