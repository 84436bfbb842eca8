//! Универсальная таблица для экранов списков
//!
//! Чистая логика (видимость, ширины, итоги, выбор, пагинация) отделена от
//! Leptos-компонента и собирается в [`TableViewModel`].

pub mod column;
pub mod column_picker;
pub mod component;
pub mod config;
pub mod error;
pub mod render_state;
pub mod selection;
pub mod storage;
pub mod summary;
pub mod view_model;
pub mod visibility;
pub mod width;

pub use column::{BadgeTone, ColumnDescriptor, ColumnWidth, DisplayValue, SummaryFormat, TableRow};
pub use component::DataTable;
pub use config::DataTableConfig;
pub use error::DataTableError;
pub use render_state::{PageLink, PageStrip, RenderState};
pub use selection::{HeaderCheckState, SelectionController};
pub use storage::{KeyValueStore, LocalStorageStore, MemoryStore, SharedStore};
pub use summary::SummaryOverride;
pub use view_model::{TableViewModel, ViewInputs};
pub use visibility::ColumnVisibility;
