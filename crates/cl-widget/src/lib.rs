//! Cascading selector widget for the region → province → commune hierarchy.
//!
//! The widget captures the full option lists of the three form controls
//! once, then rebuilds the province and commune selectors whenever an
//! upstream selection changes:
//!
//! ```
//! use cl_model::{Level, OptionPool, OptionRecord};
//! use cl_widget::CascadingFilter;
//!
//! let regions = OptionPool::new(Level::Region, vec![OptionRecord::new("R1", "North")]).unwrap();
//! let provinces = OptionPool::new(
//!     Level::Province,
//!     vec![OptionRecord::new("R1-P1", "Alpha"), OptionRecord::new("R2-P1", "Gamma")],
//! )
//! .unwrap();
//! let communes = OptionPool::new(Level::Commune, vec![OptionRecord::new("R1-P1-C1", "X")]).unwrap();
//!
//! let mut filter = CascadingFilter::new(regions, provinces, communes).unwrap();
//! filter.on_region_changed("R1");
//! assert_eq!(filter.provinces().visible().len(), 1);
//! assert_eq!(filter.communes().selected(), Some("R1-P1-C1"));
//! ```

#![deny(unsafe_code)]

pub mod event;
pub mod filter;
pub mod form;
pub mod selector;

pub use event::SelectionEvent;
pub use filter::CascadingFilter;
pub use form::{ControlIds, FormControls};
pub use selector::SelectorState;
