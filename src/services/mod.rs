pub mod cell_splicer;
pub mod heading_rewriter;
pub mod notebook_writer;
pub mod section_locator;
pub mod span_finder;
pub mod structure_analyzer;

pub use cell_splicer::{apply_plan, plan_insertions, InsertionPlan};
pub use notebook_writer::NotebookWriter;
pub use section_locator::{locate_sections, Section};
pub use span_finder::Span;
