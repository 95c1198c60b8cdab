pub mod exporter;
pub mod gpl;
