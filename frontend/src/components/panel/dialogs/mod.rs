mod edit;
mod extraction;
mod records;

pub use edit::edit_dialog;
pub use extraction::extraction_dialog;
pub use records::records_dialog;
