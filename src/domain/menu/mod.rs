pub mod picker;
pub mod value_objects;

pub use picker::CustomizationPicker;
pub use value_objects::MenuItem;
