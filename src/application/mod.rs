pub mod use_cases;

pub use use_cases::folder_materializer::{BatchFailure, FolderMaterializer};
pub use use_cases::processor_state::ProcessorState;
pub use use_cases::table_loader::TableLoader;
