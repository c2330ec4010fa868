//! Visual tree rendering for Vitrina.
//!
//! Views are pure functions from a [`Product`](vitrina_catalog::Product) and
//! its [`Gallery`](vitrina_images::Gallery) to an [`Element`] tree. The
//! [`html`] module turns trees into markup; nothing else in this crate knows
//! about HTML syntax, so views are testable by inspecting the tree.
//!
//! # Modules
//!
//! - [`tree`]: [`Element`] and [`Node`]
//! - [`card`]: Listing cards with an image slider
//! - [`detail`]: Detail block with thumbnails and contact button
//! - [`listing`]: Filter bar and product grid
//! - [`panels`]: Error, not-found, and no-results panels
//! - [`slider`]: Active-image state machine
//! - [`contact`]: WhatsApp link builder
//! - [`context`]: Site-wide render settings
//! - [`html`]: HTML adapter, document shell, static assets

pub mod card;
pub mod contact;
pub mod context;
pub mod detail;
pub mod html;
pub mod listing;
pub mod panels;
pub mod slider;
pub mod tree;

pub use card::{card_gallery, render_card};
pub use contact::ContactLink;
pub use context::RenderContext;
pub use detail::{render_detail, render_detail_at};
pub use html::{Document, render_element, render_node};
pub use listing::{FilterBar, render_grid, render_listing};
pub use panels::{Panel, PanelKind};
pub use slider::{SWIPE_THRESHOLD, Slider};
pub use tree::{Element, Node};
