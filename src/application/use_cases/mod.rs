pub mod folder_materializer;
pub mod processor_state;
pub mod table_loader;
