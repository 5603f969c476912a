pub mod form;
pub mod header;
pub mod layout;
pub mod listing;
pub mod modal;
pub mod notification_bell;
pub mod page;
pub mod pagination;
pub mod protected_layout;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal, ReasonModal};
pub use page::Page;
pub use pagination::PaginationControls;
pub use protected_layout::{ProtectedLayout, RequiresCoach, RequiresLoggedIn, RequiresOrganizer};
