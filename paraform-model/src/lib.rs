pub mod editor;
pub mod model;
pub mod parameter;
