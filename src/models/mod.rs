pub mod exercise;
pub mod heading;
pub mod loaders;
pub mod notebook;

pub use exercise::{Exercise, ExerciseCatalog};
pub use loaders::{builtin_catalog, load_catalog, load_notebook};
pub use notebook::{Cell, CellKind, Notebook, QUESTION_TAG, SOLUTION_TAG};
