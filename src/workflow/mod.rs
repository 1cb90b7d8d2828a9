pub mod flow_report;
pub mod inject_flow;
pub mod maintenance_flow;
pub mod notebook_ctx;

pub use flow_report::FlowReport;
pub use inject_flow::InjectFlow;
pub use notebook_ctx::NotebookCtx;
