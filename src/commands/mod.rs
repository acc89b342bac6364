pub mod check;
pub mod ensure;
pub mod status;
