//! Reusable building blocks of the pages.

mod button;
pub use button::{button_class, Button, ButtonSize, ButtonVariant};

mod loader;
pub use loader::Loader;

mod modal;
pub use modal::{ConfirmationModal, Modal};

mod states;
pub use states::{EmptyState, ErrorState};

mod user_row;
pub use user_row::UserRow;

mod post_card;
pub use post_card::{NewPostCard, PostCard};

mod post_form;
pub use post_form::{can_publish, PostForm};

mod pagination;
pub use pagination::{clamp_page, Pagination};
