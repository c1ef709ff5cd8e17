/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod formatter;
pub mod inventory_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::GraphFormatter;
pub use inventory_reader::InventoryReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
