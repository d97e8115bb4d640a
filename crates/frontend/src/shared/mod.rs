pub mod components;
pub mod dom;
pub mod icons;
pub mod markup;
pub mod site_config;
