/// User interface module
///
/// - `screens.rs` - one view per survey stage
/// - `table.rs` - the results preview table

pub mod screens;
pub mod table;

pub use screens::{ExportStatus, PreviewState};
