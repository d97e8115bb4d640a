pub mod a001_project;
pub mod a002_site_section;
