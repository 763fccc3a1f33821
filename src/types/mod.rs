mod material;
mod settings;

pub use material::{display_name_of, CatalogSnapshot, MaterialRecord};
pub use settings::Settings;
