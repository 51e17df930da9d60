pub mod id_generator;
pub mod validation;
