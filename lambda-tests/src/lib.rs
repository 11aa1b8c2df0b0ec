pub mod iteration;
pub mod these;
