/// Use cases module containing application business logic orchestration
mod browse_assembly;

pub use browse_assembly::AssemblyBrowser;
