pub mod particle;
pub mod planet;
